#![no_std]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    unused_doc_comments
)]

//! Structured, causally-chained error values with lazily formatted messages.
//!
//! ## Overview
//!
//! This crate provides a single error value type, [`Incident`], designed for
//! code that wants its errors to be more than strings but less than a custom
//! enum per module. An incident carries a string **name** tag for variant
//! discrimination, a structured **data** payload, an optional **cause**
//! (another incident or any native error), and a human-readable **message**
//! that can be supplied eagerly or computed lazily on first access.
//!
//! The lazy message path is the distinguishing feature: a formatter closure
//! handed to the constructor runs at most once, only when the message is
//! actually read, and never at all if the message is overwritten first. Error
//! construction stays cheap on paths where the error is recovered from
//! without ever being displayed.
//!
//! ## Quick Example
//!
//! ```
//! use incident::prelude::*;
//!
//! fn deploy(port: u16) -> incident::Result<()> {
//!     if port < 1024 {
//!         raise!("PrivilegedPort" => "port {port} needs elevated privileges");
//!     }
//!     Ok(())
//! }
//!
//! let failure = deploy(80).unwrap_err();
//! assert_eq!(failure.name(), "PrivilegedPort");
//! assert_eq!(failure.message(), "port 80 needs elevated privileges");
//! ```
//!
//! ## Core Concepts
//!
//! On a mechanical level an incident is a leaf value with four fields:
//!
//! - The **name** is a tag for `match`-style recovery code. It does not have
//!   to be globally unique; it only has to distinguish the variants a caller
//!   cares about. The [`kind`] module lets you pair tags with payload types
//!   at the type level.
//! - The **data** payload defaults to [`Data`], an insertion-ordered map of
//!   type-erased values, but any concrete type can take its place via the
//!   `D` parameter of [`Incident<D>`].
//! - The **cause** chains incidents to the lower-level errors that produced
//!   them, and is exposed through [`Error::source`](core::error::Error) so
//!   generic error-handling layers can walk the chain.
//! - The **message** is either an already-resolved string or a pending
//!   formatter. The first read of [`message`](Incident::message) or
//!   [`trace`](Incident::trace) resolves it exactly once (also under
//!   concurrent first reads) and drops the formatter afterwards. Writing
//!   the message cancels a pending formatter permanently.
//!
//! Construction is a family of entry points ([`Incident::new`],
//! [`Incident::named`], [`Incident::from_message`],
//! [`Incident::from_formatter`], [`Incident::from_data`], [`Incident::wrap`],
//! [`Incident::propagate`]) plus chainable combinators
//! ([`with_name`](Incident::with_name), [`caused_by`](Incident::caused_by),
//! [`with_message`](Incident::with_message),
//! [`with_formatter`](Incident::with_formatter),
//! [`with_data_formatter`](Incident::with_data_formatter)). Every combination
//! is accepted; nothing validates or fails at construction time.
//!
//! ## Feature Flags
//!
//! - `std`: no API changes; reserved for std-only integration.
//! - `backtrace` (implies `std`): capture stack frames at construction and
//!   append them, symbolized, to [`trace`](Incident::trace) on its first
//!   read.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod data;
pub mod kind;
pub mod prelude;

mod incident;
mod message;
mod result_ext;
mod trace;

pub use self::{
    data::Data,
    incident::{DEFAULT_NAME, Incident},
    kind::Kind,
    result_ext::ResultExt,
};

/// A [`Result`](core::result::Result) alias where the error is [`Incident`].
///
/// ```
/// use incident::prelude::*;
///
/// fn might_fail() -> incident::Result<u32> {
///     Ok(7)
/// }
///
/// assert_eq!(might_fail().unwrap(), 7);
/// ```
pub type Result<T, D = Data> = core::result::Result<T, Incident<D>>;

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    #[doc(hidden)]
    pub use alloc::format;
    #[doc(hidden)]
    pub use core::result::Result::Err;
}
