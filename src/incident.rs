//! The incident value type and its construction surface.

use alloc::{
    borrow::Cow,
    boxed::Box,
    string::{String, ToString},
};
use core::{error::Error, fmt};

use crate::{
    data::Data,
    message::{Formatter, MessageCell},
    trace::Trace,
};

/// Tag carried by incidents that were not given an explicit name.
pub const DEFAULT_NAME: &str = "Incident";

/// A structured, causally-chained error value.
///
/// An incident carries four things:
///
/// - a **name**: a string tag used to tell variants apart in `match`-style
///   recovery code,
/// - a **data** payload of type `D` (the dynamic [`Data`] map by default, or
///   any concrete type),
/// - an optional **cause**: another incident or any native error this one
///   wraps,
/// - a **message** for humans, supplied eagerly or computed lazily by a
///   formatter on the first read.
///
/// Incidents implement [`core::error::Error`], so they flow through `?`,
/// `Box<dyn Error>`, and any generic error-handling layer, with the cause
/// exposed through [`source`](core::error::Error::source).
///
/// # Construction
///
/// Entry points pick the base of the value; combinators fill in the rest.
/// Every combination is accepted and nothing validates or fails:
///
/// ```
/// use incident::{Data, Incident};
///
/// let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
/// let incident = Incident::from_data(Data::new().with("uri", "example.com"))
///     .with_name("Network")
///     .caused_by(io)
///     .with_message("Unable to connect");
///
/// assert_eq!(incident.name(), "Network");
/// assert_eq!(incident.message(), "Unable to connect");
/// assert!(incident.cause().is_some());
/// ```
///
/// # Lazy messages
///
/// A formatter supplied instead of a message string runs at most once, on the
/// first read of [`message`](Self::message) or [`trace`](Self::trace), and
/// never runs at all if the message is overwritten first:
///
/// ```
/// use incident::Incident;
///
/// let incident = Incident::named("QueryTimeout")
///     .with_formatter(|| format!("query exceeded its {}ms budget", 250));
///
/// assert!(!incident.message_resolved());
/// assert_eq!(incident.message(), "query exceeded its 250ms budget");
/// ```
pub struct Incident<D: 'static = Data> {
    name: Cow<'static, str>,
    data: D,
    cause: Option<Box<dyn Error + Send + Sync + 'static>>,
    message: MessageCell<D>,
    trace: Trace,
}

impl Incident<Data> {
    /// Creates an anonymous incident: name [`DEFAULT_NAME`], empty payload,
    /// empty message.
    ///
    /// ```
    /// use incident::Incident;
    ///
    /// let incident = Incident::new();
    /// assert_eq!(incident.name(), incident::DEFAULT_NAME);
    /// assert_eq!(incident.message(), "");
    /// assert!(incident.data().is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(
            None,
            Cow::Borrowed(DEFAULT_NAME),
            Data::new(),
            MessageCell::empty(),
        )
    }

    /// Creates an incident with the given name tag.
    ///
    /// ```
    /// use incident::Incident;
    ///
    /// let incident = Incident::named("paradoxError").with_message("This is not an error");
    /// assert_eq!(incident.name(), "paradoxError");
    /// assert_eq!(incident.message(), "This is not an error");
    /// ```
    #[must_use]
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self::from_parts(None, name.into(), Data::new(), MessageCell::empty())
    }

    /// Creates an anonymous incident with an eager message.
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::from_parts(
            None,
            Cow::Borrowed(DEFAULT_NAME),
            Data::new(),
            MessageCell::eager(message.into()),
        )
    }

    /// Creates an anonymous incident whose message is computed by `formatter`
    /// on the first read.
    ///
    /// ```
    /// use incident::Incident;
    ///
    /// let incident = Incident::from_formatter(|| "The reactor is on fire!".to_string());
    /// assert!(!incident.message_resolved());
    /// assert_eq!(incident.message(), "The reactor is on fire!");
    /// ```
    #[must_use]
    pub fn from_formatter<F>(formatter: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::from_parts(
            None,
            Cow::Borrowed(DEFAULT_NAME),
            Data::new(),
            MessageCell::pending(Formatter::plain(formatter)),
        )
    }

    /// Wraps a native error as the cause of a fresh incident.
    ///
    /// The new incident keeps the defaults for `name` and `data` and adopts
    /// the wrapped error's rendered text as its (eager) message. To wrap
    /// another incident while keeping its tag, payload, and still-pending
    /// message source, use [`propagate`](Self::propagate) instead.
    ///
    /// ```
    /// use incident::Incident;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
    /// let incident = Incident::wrap(io);
    ///
    /// assert_eq!(incident.name(), incident::DEFAULT_NAME);
    /// assert_eq!(incident.message(), "config.toml");
    /// assert!(incident.downcast_cause::<std::io::Error>().is_some());
    /// ```
    #[must_use]
    pub fn wrap<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let message = MessageCell::eager(cause.to_string());
        Self::from_parts(
            Some(Box::new(cause)),
            Cow::Borrowed(DEFAULT_NAME),
            Data::new(),
            message,
        )
    }
}

impl<D> Incident<D> {
    pub(crate) fn from_parts(
        cause: Option<Box<dyn Error + Send + Sync + 'static>>,
        name: Cow<'static, str>,
        data: D,
        message: MessageCell<D>,
    ) -> Self {
        Self {
            name,
            data,
            cause,
            message,
            trace: Trace::capture(),
        }
    }

    /// Creates an incident with the given payload and the defaults for
    /// everything else.
    #[must_use]
    pub fn from_data(data: D) -> Self {
        Self::from_parts(None, Cow::Borrowed(DEFAULT_NAME), data, MessageCell::empty())
    }

    /// Copy-constructs from `cause`: the new incident adopts the cause's
    /// name, payload (cloned), and message source, and wraps the cause
    /// itself.
    ///
    /// A still-pending message formatter is shared, not evaluated: the copy
    /// resolves it independently on its own first read.
    ///
    /// ```
    /// use incident::Incident;
    ///
    /// let base = Incident::named("QuantumEffect").with_message("What is even a cause?");
    /// let wrapped = Incident::propagate(base);
    ///
    /// assert_eq!(wrapped.name(), "QuantumEffect");
    /// assert_eq!(wrapped.message(), "What is even a cause?");
    /// assert!(wrapped.cause().is_some());
    /// ```
    #[must_use]
    pub fn propagate(cause: Incident<D>) -> Self
    where
        D: Clone + fmt::Debug + Send + Sync + 'static,
    {
        let name = cause.name.clone();
        let data = cause.data.clone();
        let message = cause.message.fork();
        Self::from_parts(Some(Box::new(cause)), name, data, message)
    }

    /// Replaces the name tag.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Attaches `cause` as the wrapped antecedent, replacing any previous
    /// one.
    #[must_use]
    pub fn caused_by<E>(mut self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Sets an eager message, discarding any previously supplied formatter
    /// without running it.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.set_message(message);
        self
    }

    /// Defers the message to `formatter`, invoked with no arguments on the
    /// first read.
    #[must_use]
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.message = MessageCell::pending(Formatter::plain(formatter));
        self
    }

    /// Defers the message to `formatter`, invoked with a reference to the
    /// payload on the first read.
    ///
    /// The formatter observes the payload as it is at resolution time, not a
    /// snapshot taken at construction:
    ///
    /// ```
    /// use incident::{Data, Incident};
    ///
    /// let mut incident = Incident::from_data(Data::new().with("port", 50313_u32))
    ///     .with_data_formatter(|data| {
    ///         format!("port {} is unavailable", data.get::<u32>("port").unwrap())
    ///     });
    ///
    /// incident.data_mut().insert("port", 8080_u32);
    /// assert_eq!(incident.message(), "port 8080 is unavailable");
    /// ```
    #[must_use]
    pub fn with_data_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&D) -> String + Send + Sync + 'static,
    {
        self.message = MessageCell::pending(Formatter::with_data(formatter));
        self
    }

    /// The name tag.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The structured payload.
    #[must_use]
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Mutable access to the payload.
    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    /// The message. On the first read of an incident built with a formatter,
    /// this invokes the formatter (exactly once), caches the result, and
    /// drops the formatter. A formatter panic propagates to this caller.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.resolve(&self.data)
    }

    /// Whether the message has been computed yet. Does not force it.
    #[must_use]
    pub fn message_resolved(&self) -> bool {
        self.message.is_resolved()
    }

    /// Overwrites the message. Any still-pending formatter is discarded
    /// permanently and will never run.
    ///
    /// ```
    /// use incident::Incident;
    ///
    /// let mut incident = Incident::named("SomeError").with_formatter(|| unreachable!());
    /// incident.set_message("new");
    /// assert_eq!(incident.message(), "new");
    /// ```
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = MessageCell::eager(message.into());
    }

    /// The rendered trace, computed on the first read and cached.
    ///
    /// The rendering starts with `name: message`, so reading the trace forces
    /// message resolution. With the `backtrace` feature enabled, the frames
    /// captured at construction are symbolized and appended.
    ///
    /// ```
    /// use incident::Incident;
    ///
    /// let incident = Incident::named("Disk").with_message("disk full");
    /// assert!(incident.trace().starts_with("Disk: disk full"));
    /// ```
    #[must_use]
    pub fn trace(&self) -> &str {
        let message = self.message.resolve(&self.data);
        self.trace.render(&self.name, message)
    }

    /// The wrapped antecedent, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| &**cause as &(dyn Error + 'static))
    }

    /// The wrapped antecedent, if it has concrete type `E`.
    ///
    /// ```
    /// use incident::Incident;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "inner");
    /// let incident = Incident::from_message("wrapper").caused_by(io);
    /// assert!(incident.downcast_cause::<std::io::Error>().is_some());
    /// ```
    #[must_use]
    pub fn downcast_cause<E: Error + 'static>(&self) -> Option<&E> {
        self.cause()?.downcast_ref()
    }
}

impl Default for Incident<Data> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Display for Incident<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.message();
        if message.is_empty() {
            f.write_str(self.name())
        } else {
            f.write_str(message)
        }
    }
}

impl<D: fmt::Debug> fmt::Debug for Incident<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Incident")
            .field("name", &self.name)
            .field("message", &self.message())
            .field("data", &self.data)
            .field("cause", &self.cause)
            .finish()
    }
}

impl<D: fmt::Debug> Error for Incident<D> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause()
    }
}
