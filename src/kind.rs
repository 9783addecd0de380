//! Closed sets of incident variants.
//!
//! A [`Kind`] pairs a name tag with a payload type at the type level, so that
//! a module can declare the variants it raises once and construct or test
//! them without repeating string literals:
//!
//! ```
//! use incident::{Incident, Kind};
//!
//! struct SyntaxError;
//!
//! impl Kind for SyntaxError {
//!     const NAME: &'static str = "SyntaxError";
//!     type Data = usize;
//! }
//!
//! let incident = Incident::of::<SyntaxError>(12);
//! assert_eq!(incident.name(), "SyntaxError");
//! assert!(incident.is::<SyntaxError>());
//! assert_eq!(*incident.data(), 12);
//! ```
//!
//! Narrowing itself stays a plain `match` on [`name`](Incident::name): read
//! the tag, branch, use the payload shape the tag promises. When the variants
//! of a set carry different payload shapes, give the set an enum payload type
//! and let exhaustiveness checking cover the closed set:
//!
//! ```
//! use incident::Incident;
//!
//! #[derive(Debug, Clone)]
//! enum ParseData {
//!     Syntax { index: usize },
//!     UnknownType { type_name: String },
//! }
//!
//! fn describe(incident: &Incident<ParseData>) -> String {
//!     match incident.data() {
//!         ParseData::Syntax { index } => format!("syntax error at {index}"),
//!         ParseData::UnknownType { type_name } => format!("unknown type {type_name}"),
//!     }
//! }
//!
//! let incident = Incident::from_data(ParseData::Syntax { index: 3 }).with_name("SyntaxError");
//! assert_eq!(describe(&incident), "syntax error at 3");
//! ```

use alloc::borrow::Cow;

use crate::Incident;

/// A (tag, payload) pair describing one incident variant.
///
/// Implementors are usually zero-sized marker types; the trait carries all
/// the information.
pub trait Kind {
    /// The name tag of incidents of this kind.
    const NAME: &'static str;

    /// The payload type incidents of this kind carry.
    type Data;
}

impl<D> Incident<D> {
    /// Creates an incident of kind `K` with the given payload.
    #[must_use]
    pub fn of<K>(data: D) -> Self
    where
        K: Kind<Data = D>,
    {
        Self::from_data(data).with_name(Cow::Borrowed(K::NAME))
    }

    /// Tests whether this incident's tag is `K`'s.
    #[must_use]
    pub fn is<K: Kind>(&self) -> bool {
        self.name() == K::NAME
    }
}
