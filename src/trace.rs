//! Trace capture and rendering.
//!
//! The rendered trace string is produced lazily on the first read and cached.
//! With the `backtrace` feature, the raw frames are captured (unresolved, so
//! construction stays cheap) when the incident is created and symbolized only
//! when the trace is first rendered.

use alloc::string::String;

use spin::Once;

pub(crate) struct Trace {
    rendered: Once<String>,
    #[cfg(feature = "backtrace")]
    frames: spin::RwLock<backtrace::Backtrace>,
}

impl Trace {
    pub(crate) fn capture() -> Self {
        Self {
            rendered: Once::new(),
            #[cfg(feature = "backtrace")]
            frames: spin::RwLock::new(backtrace::Backtrace::new_unresolved()),
        }
    }

    /// Renders and caches the trace. The header embeds the resolved message,
    /// which is why callers must resolve it first.
    pub(crate) fn render(&self, name: &str, message: &str) -> &str {
        self.rendered.call_once(|| {
            let mut rendered = String::new();
            rendered.push_str(name);
            if !message.is_empty() {
                rendered.push_str(": ");
                rendered.push_str(message);
            }

            #[cfg(feature = "backtrace")]
            {
                use core::fmt::Write as _;

                let mut frames = self.frames.write();
                frames.resolve();
                let _ = write!(rendered, "\n{:?}", &*frames);
            }

            rendered
        })
    }
}
