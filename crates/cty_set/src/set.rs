//! Bucketed set storage and its cursor.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::iter::Flatten;

use crate::Rules;

/// Set of values whose membership is defined by `R`.
#[derive(Clone)]
pub struct Set<T, R> {
    rules: R,
    /// Members grouped by rule hash; each bucket holds mutually
    /// non-equivalent values in insertion order.
    buckets: BTreeMap<u64, Vec<T>>,
    len: usize,
}

impl<T, R: Rules<T>> Set<T, R> {
    /// Create an empty set governed by `rules`.
    pub fn new(rules: R) -> Self {
        Set {
            rules,
            buckets: BTreeMap::new(),
            len: 0,
        }
    }

    /// Create a set from `values`, dropping any value equivalent to one
    /// already inserted.
    pub fn from_values(rules: R, values: impl IntoIterator<Item = T>) -> Self {
        let mut set = Set::new(rules);
        for val in values {
            set.insert(val);
        }
        set
    }

    /// Insert a value.
    ///
    /// Returns `false` and leaves the set unchanged if an equivalent value
    /// is already a member.
    pub fn insert(&mut self, val: T) -> bool {
        let hash = self.rules.hash(&val);
        let bucket = self.buckets.entry(hash).or_default();
        if bucket.iter().any(|existing| self.rules.equivalent(existing, &val)) {
            return false;
        }
        bucket.push(val);
        self.len += 1;
        true
    }

    /// Remove the member equivalent to `val`, if any.
    pub fn remove(&mut self, val: &T) -> bool {
        let hash = self.rules.hash(val);
        let btree_map::Entry::Occupied(mut entry) = self.buckets.entry(hash) else {
            return false;
        };
        let bucket = entry.get_mut();
        let Some(pos) = bucket
            .iter()
            .position(|existing| self.rules.equivalent(existing, val))
        else {
            return false;
        };
        bucket.remove(pos);
        if bucket.is_empty() {
            entry.remove();
        }
        self.len -= 1;
        true
    }

    /// Check whether a value equivalent to `val` is a member.
    pub fn has(&self, val: &T) -> bool {
        self.buckets
            .get(&self.rules.hash(val))
            .is_some_and(|bucket| bucket.iter().any(|m| self.rules.equivalent(m, val)))
    }

    /// Create a new set holding the members of both `self` and `other`.
    ///
    /// Members of `self` come first within shared buckets.
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
        R: Clone,
    {
        let mut out = self.clone();
        for val in other.iter() {
            out.insert(val.clone());
        }
        out
    }
}

impl<T, R> Set<T, R> {
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Start a single-pass cursor over the members in canonical order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            members: self.buckets.values().flatten(),
            current: None,
        }
    }
}

impl<T, R: Rules<T>> PartialEq for Set<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|val| other.has(val))
    }
}

impl<T, R: Rules<T>> Eq for Set<T, R> {}

impl<T: fmt::Debug, R> fmt::Debug for Set<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T, R> IntoIterator for &'a Set<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over a set's members.
///
/// Supports the pull protocol (`advance` then `current`) used by element
/// iterators, and the standard `Iterator` protocol. Both share one
/// position, so mixing them on the same cursor skips members.
pub struct Iter<'a, T> {
    members: Flatten<btree_map::Values<'a, u64, Vec<T>>>,
    current: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    /// Move to the next member. Keeps returning `false` once exhausted.
    pub fn advance(&mut self) -> bool {
        self.current = self.members.next();
        self.current.is_some()
    }

    /// The member most recently reached by `advance`.
    ///
    /// # Panics
    ///
    /// Panics if `advance` has not returned `true` for this position.
    pub fn current(&self) -> &'a T {
        match self.current {
            Some(val) => val,
            None => panic!("set cursor read before advance or after exhaustion"),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().then(|| self.current())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.members.size_hint()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            members: self.members.clone(),
            current: self.current,
        }
    }
}
