/// Creates an [`Incident`](crate::Incident) from a format string.
///
/// With a single literal (or a format string plus arguments), the result is
/// an anonymous incident whose message is the formatted text. Prefixing a
/// name literal with `=>` tags the incident:
///
/// ```
/// use incident::incident;
///
/// let simple = incident!("Unable to fire the reactor!");
/// assert_eq!(simple.name(), incident::DEFAULT_NAME);
/// assert_eq!(simple.message(), "Unable to fire the reactor!");
///
/// let formatted = incident!("{} is not a valid port", 99999);
/// assert_eq!(formatted.message(), "99999 is not a valid port");
///
/// let named = incident!("Network" => "unable to reach {}", "example.com");
/// assert_eq!(named.name(), "Network");
/// assert_eq!(named.message(), "unable to reach example.com");
/// ```
#[macro_export]
macro_rules! incident {
    ($name:literal => $($rest:tt)+) => {
        $crate::Incident::named($name).with_message($crate::__private::format!($($rest)+))
    };
    ($msg:literal $(,)?) => {
        $crate::Incident::from_message($msg)
    };
    ($fmt:literal, $($arg:tt)*) => {
        $crate::Incident::from_message($crate::__private::format!($fmt, $($arg)*))
    };
}

/// Returns early with an [`Incident`](crate::Incident) built by
/// [`incident!`](macro@crate::incident).
///
/// Equivalent to `return Err(incident!(...).into())`.
///
/// ```
/// use incident::{Incident, raise};
///
/// fn check(value: i32) -> Result<i32, Incident> {
///     if value < 0 {
///         raise!("NegativeValue" => "{} is negative", value);
///     }
///     Ok(value)
/// }
///
/// assert_eq!(check(-1).unwrap_err().name(), "NegativeValue");
/// assert_eq!(check(7).unwrap(), 7);
/// ```
#[macro_export]
macro_rules! raise {
    ($($args:tt)*) => {
        return $crate::__private::Err($crate::incident!($($args)*).into())
    };
}
