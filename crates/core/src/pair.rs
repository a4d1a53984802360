//! The key/value pair passed between pipeline stages.

use core::any::Any;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::hash::DefaultHasher;

use crate::render::Render;
use crate::value_object::ValueObject;

/// An immutable key/value unit.
///
/// Both fields are fixed at construction. There is no way to rewrite a field in
/// place; "changing" a pair means building a new one.
///
/// Absence is modelled with `Option`: a `Pair<Option<K>, V>` may carry no key.
/// Two absent keys compare equal, hash equally and render as `null`.
///
/// ```
/// use kvstream_core::pair;
///
/// let p = pair(1, "x");
/// assert_eq!(p.to_string(), "Pair(1, x)");
/// assert_eq!(p, pair(1, "x"));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<K, V> {
    key: K,
    value: V,
}

/// A pair that originates directly from an external message source.
pub type Record<K, V> = Pair<K, V>;

/// Build a pair. Same as [`Pair::new`], shorter at call sites.
#[inline]
pub fn pair<K, V>(key: K, value: V) -> Pair<K, V> {
    Pair::new(key, value)
}

impl<K, V> Pair<K, V> {
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub fn into_key(self) -> K {
        self.key
    }

    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }

    #[inline]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Borrowed view of both fields.
    #[inline]
    pub fn as_ref(&self) -> Pair<&K, &V> {
        Pair::new(&self.key, &self.value)
    }

    /// Stable 64-bit hash of the pair.
    ///
    /// Uses a fixed-key hasher, so the result only depends on the key and value:
    /// equal pairs give equal codes for the lifetime of a build.
    pub fn hash_code(&self) -> u64
    where
        K: Hash,
        V: Hash,
    {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl<K, V> Pair<K, V>
where
    K: PartialEq + 'static,
    V: PartialEq + 'static,
{
    /// Compare against a value of unknown type.
    ///
    /// Returns `false` when `other` is not a `Pair<K, V>`; otherwise the usual
    /// structural comparison.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        match other.downcast_ref::<Pair<K, V>>() {
            Some(other) => self == other,
            None => false,
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Pair<K, V> {
    fn eq(&self, other: &Self) -> bool {
        let key_equal = self.key == other.key;
        let value_equal = self.value == other.value;
        key_equal && value_equal
    }
}

impl<K: Eq, V: Eq> Eq for Pair<K, V> {}

impl<K: Hash, V: Hash> Hash for Pair<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Key first: (a, b) and (b, a) must not collide by construction.
        self.key.hash(state);
        self.value.hash(state);
    }
}

impl<K: Render, V: Render> fmt::Display for Pair<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pair(")?;
        self.key.render(f)?;
        f.write_str(", ")?;
        self.value.render(f)?;
        f.write_str(")")
    }
}

impl<K: Render, V: Render> Render for Pair<K, V> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> From<Pair<K, V>> for (K, V) {
    #[inline]
    fn from(pair: Pair<K, V>) -> Self {
        pair.into_parts()
    }
}

impl<K, V> ValueObject for Pair<K, V>
where
    K: Clone + PartialEq + fmt::Debug,
    V: Clone + PartialEq + fmt::Debug,
{
}
