//! Adapters from `Result<T, E>` to `Result<T, Incident>`.

use alloc::{borrow::Cow, string::String};
use core::error::Error;

use crate::{Data, Incident};

mod sealed {
    pub trait Sealed {}
    impl<T, E> Sealed for Result<T, E> {}
}

/// Wraps the error of a `Result` into an [`Incident`].
///
/// ```
/// use incident::prelude::*;
///
/// fn read() -> Result<String, std::io::Error> {
///     Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
/// }
///
/// let failure = read().tag("Storage").unwrap_err();
/// assert_eq!(failure.name(), "Storage");
/// assert!(failure.downcast_cause::<std::io::Error>().is_some());
/// ```
///
/// [`describe_with`](Self::describe_with) keeps the message lazy: the closure
/// only runs if the message is ever read, so it can be as expensive as it
/// likes on the happy path.
pub trait ResultExt<T, E>: sealed::Sealed {
    /// Wraps the error as the cause of a fresh incident
    /// (see [`Incident::wrap`]).
    fn into_incident(self) -> Result<T, Incident<Data>>;

    /// Wraps the error and tags the incident with `name`.
    fn tag(self, name: impl Into<Cow<'static, str>>) -> Result<T, Incident<Data>>;

    /// Wraps the error and sets an eager message.
    fn describe(self, message: impl Into<String>) -> Result<T, Incident<Data>>;

    /// Wraps the error and defers the message to `formatter`, invoked at most
    /// once on the first read.
    fn describe_with<F>(self, formatter: F) -> Result<T, Incident<Data>>
    where
        F: Fn() -> String + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn into_incident(self) -> Result<T, Incident<Data>> {
        self.map_err(Incident::wrap)
    }

    #[inline]
    fn tag(self, name: impl Into<Cow<'static, str>>) -> Result<T, Incident<Data>> {
        self.map_err(|error| Incident::wrap(error).with_name(name))
    }

    #[inline]
    fn describe(self, message: impl Into<String>) -> Result<T, Incident<Data>> {
        self.map_err(|error| Incident::wrap(error).with_message(message))
    }

    #[inline]
    fn describe_with<F>(self, formatter: F) -> Result<T, Incident<Data>>
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.map_err(|error| Incident::wrap(error).with_formatter(formatter))
    }
}
