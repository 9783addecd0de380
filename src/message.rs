//! Lazy message state: a pending formatter resolved into a string at most
//! once per incident.

use alloc::{string::String, sync::Arc};

use spin::{Once, RwLock};

/// A deferred message source.
///
/// The `Arc` is what lets a copy-constructed incident share a still-pending
/// source with its cause without evaluating it: each holder resolves on its
/// own first read, independently.
pub(crate) enum Formatter<D: 'static> {
    /// Invoked with no arguments.
    Plain(Arc<dyn Fn() -> String + Send + Sync>),
    /// Invoked with a reference to the incident's live payload.
    WithData(Arc<dyn Fn(&D) -> String + Send + Sync>),
}

impl<D> Formatter<D> {
    pub(crate) fn plain<F>(formatter: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::Plain(Arc::new(formatter))
    }

    pub(crate) fn with_data<F>(formatter: F) -> Self
    where
        F: Fn(&D) -> String + Send + Sync + 'static,
    {
        Self::WithData(Arc::new(formatter))
    }

    fn format(&self, data: &D) -> String {
        match self {
            Self::Plain(formatter) => formatter(),
            Self::WithData(formatter) => formatter(data),
        }
    }
}

impl<D> Clone for Formatter<D> {
    fn clone(&self) -> Self {
        match self {
            Self::Plain(formatter) => Self::Plain(Arc::clone(formatter)),
            Self::WithData(formatter) => Self::WithData(Arc::clone(formatter)),
        }
    }
}

/// Per-incident message slot: `Pending(formatter)` until the first read,
/// `Resolved(string)` afterwards.
///
/// The resolved string lives in a [`Once`] so that concurrent first reads
/// cannot run the formatter twice. The pending formatter sits in its own slot
/// and is taken out inside the once-initializer, so after the single
/// invocation (or after an overwrite) the reference is dropped and can never
/// run again.
pub(crate) struct MessageCell<D: 'static> {
    pending: RwLock<Option<Formatter<D>>>,
    resolved: Once<String>,
}

impl<D> MessageCell<D> {
    pub(crate) fn empty() -> Self {
        Self::eager(String::new())
    }

    pub(crate) fn eager(message: String) -> Self {
        let resolved = Once::new();
        resolved.call_once(|| message);
        Self {
            pending: RwLock::new(None),
            resolved,
        }
    }

    pub(crate) fn pending(formatter: Formatter<D>) -> Self {
        Self {
            pending: RwLock::new(Some(formatter)),
            resolved: Once::new(),
        }
    }

    /// Returns the message, running the pending formatter first if this is
    /// the first read. A formatter panic propagates to the caller.
    pub(crate) fn resolve(&self, data: &D) -> &str {
        self.resolved.call_once(|| match self.pending.write().take() {
            Some(formatter) => formatter.format(data),
            None => String::new(),
        })
    }

    pub(crate) fn is_resolved(&self) -> bool {
        self.resolved.is_completed()
    }

    /// Carries the state into a new cell without forcing it: a resolved
    /// string is copied, a pending formatter is shared.
    pub(crate) fn fork(&self) -> Self {
        match self.resolved.get() {
            Some(message) => Self::eager(message.clone()),
            None => match &*self.pending.read() {
                Some(formatter) => Self::pending(formatter.clone()),
                None => Self::empty(),
            },
        }
    }
}
