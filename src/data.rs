//! Dynamic string-keyed payloads.
//!
//! [`Data`] is the default payload type for [`Incident`](crate::Incident): an
//! insertion-ordered map from string keys to type-erased values. Values can be
//! anything that is `Any + Debug + Send + Sync + Clone` and are read back with
//! a typed [`get`](Data::get).
//!
//! When the payload shape of a variant is known at compile time, prefer a
//! concrete type (often an enum) as the incident's `D` parameter instead; see
//! the [`kind`](crate::kind) module.

use alloc::{borrow::Cow, boxed::Box};
use core::{any::Any, fmt};

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Object-safe view of a stored value. The blanket impl is the only one.
trait Value: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn as_debug(&self) -> &dyn fmt::Debug;
    fn clone_boxed(&self) -> Box<dyn Value>;
}

impl<T> Value for T
where
    T: Any + fmt::Debug + Send + Sync + Clone,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_debug(&self) -> &dyn fmt::Debug {
        self
    }

    fn clone_boxed(&self) -> Box<dyn Value> {
        Box::new(self.clone())
    }
}

/// An insertion-ordered map from string keys to type-erased values.
///
/// # Examples
///
/// ```
/// use incident::Data;
///
/// let mut data = Data::new().with("uri", "example.com");
/// data.insert("status", 200_u16);
///
/// assert_eq!(data.get::<&str>("uri"), Some(&"example.com"));
/// assert_eq!(data.get::<u16>("status"), Some(&200));
/// assert_eq!(data.len(), 2);
/// ```
pub struct Data {
    entries: IndexMap<Cow<'static, str>, Box<dyn Value>, FxBuildHasher>,
}

impl Data {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::with_hasher(FxBuildHasher),
        }
    }

    /// Chainable [`insert`](Self::insert), for building payloads inline.
    #[must_use]
    pub fn with(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Any + fmt::Debug + Send + Sync + Clone,
    ) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a value under `key`, replacing any previous value.
    pub fn insert(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Any + fmt::Debug + Send + Sync + Clone,
    ) {
        self.entries.insert(key.into(), Box::new(value));
    }

    /// Returns the value under `key` if it exists and has type `T`.
    #[must_use]
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.entries.get(key)?.as_any().downcast_ref()
    }

    /// Mutable variant of [`get`](Self::get).
    #[must_use]
    pub fn get_mut<T: Any>(&mut self, key: &str) -> Option<&mut T> {
        self.entries.get_mut(key)?.as_any_mut().downcast_mut()
    }

    /// Removes the value under `key`, preserving the order of the remaining
    /// entries. Returns whether a value was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.shift_remove(key).is_some()
    }

    /// Returns whether a value is stored under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the payload holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|key| &**key)
    }

    /// Iterates over entries as key plus debug-formattable value.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn fmt::Debug)> {
        self.entries
            .iter()
            .map(|(key, value)| (&**key, value.as_debug()))
    }
}

impl Default for Data {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Data {
    fn clone(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), value.clone_boxed()))
                .collect(),
        }
    }
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
