//! Prop snapshot structure.
//!
//! This module defines the `Props` struct which represents one immutable
//! snapshot of named prop values. Snapshots are shared as `Rc<Props>`;
//! reference identity (`Rc::ptr_eq`) is the "same snapshot" test used by
//! the bridge to suppress duplicate pushes.

use crate::value::Value;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

/// A shared, reference-counted prop snapshot.
pub type PropsRef = Rc<Props>;

/// A keyed snapshot of prop values.
///
/// Keys keep their insertion order. The fan-in layer relies on this to
/// reassemble combined stream values under their original names, and the
/// merge keeps base-key order stable so repeated merges of the same shapes
/// produce identically ordered snapshots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    /// (key, value) pairs in first-insertion order.
    /// Prop sets are small; linear scan beats hashing here.
    entries: Vec<(String, Value)>,
}

impl Props {
    /// Creates an empty snapshot.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for literal snapshots in calling code.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    /// Inserts a value under `key`.
    ///
    /// Replaces in place when the key already exists, so the key keeps its
    /// original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        for entry in self.entries.iter_mut() {
            if entry.0 == key {
                entry.1 = value;
                return;
            }
        }
        self.entries.push((key, value));
    }

    /// Gets the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Returns the number of props.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no props.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over (key, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Shallow merge: overlays `overlay` on top of this snapshot.
    ///
    /// Produces a new snapshot; neither input is mutated. Overlay values win
    /// on key collision (injected props take precedence over external props).
    pub fn merged(&self, overlay: &Props) -> Props {
        let mut merged = self.clone();
        for (key, value) in overlay.entries.iter() {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }
}

impl FromIterator<(String, Value)> for Props {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (key, value) in iter {
            props.insert(key, value);
        }
        props
    }
}
