//! Injection data sources.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Anything that can supply values for injection keys at render time.
///
/// Implemented for the standard maps, for slices and vectors of key/value
/// pairs, and for `()` as the empty source.
///
/// # Example
///
/// ```rust
/// use dumb_templates::{inj, template};
///
/// let t = template!["Hello, ", inj("name"), "!"];
/// assert_eq!(t.render(&[("name", "World")]).unwrap(), "Hello, World!");
/// ```
pub trait InjectionSource {
    /// Returns the value bound to `key`, if any.
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl<S: InjectionSource + ?Sized> InjectionSource for &S {
    fn lookup(&self, key: &str) -> Option<&str> {
        (**self).lookup(key)
    }
}

impl InjectionSource for () {
    fn lookup(&self, _key: &str) -> Option<&str> {
        None
    }
}

impl<K, V, H> InjectionSource for HashMap<K, V, H>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    H: BuildHasher,
{
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(AsRef::as_ref)
    }
}

impl<K, V> InjectionSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(AsRef::as_ref)
    }
}

// Pair lists: the first matching key wins.
impl<K: AsRef<str>, V: AsRef<str>> InjectionSource for [(K, V)] {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> InjectionSource for [(K, V); N] {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.as_slice().lookup(key)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> InjectionSource for Vec<(K, V)> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.as_slice().lookup(key)
    }
}
