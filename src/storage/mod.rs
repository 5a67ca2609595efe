//! Backing stores for the set views.
//!
//! A [`Storage`] maps keys to values with upsert semantics: there is at most one value per key,
//! and inserting an existing key replaces its value. Two implementations ship with the crate:
//!
//!  - [`HashStore`], backed by a hash table. Average _O(1)_ operations, no iteration order.
//!  - [`TreeStore`], backed by an ordered tree. _O(log n)_ operations, iteration in ascending key
//!    order.
//!
//! The set views ([`KeyOnlySet`](crate::KeyOnlySet) and [`KeyValueSet`](crate::KeyValueSet)) are
//! written once against this trait, so any further store only has to implement it to gain the
//! whole set algebra.

mod hash;
mod tree;

pub use hash::HashStore;
pub use tree::TreeStore;

/// The contract every backing store of a set fulfills.
///
/// `Clone` is part of the contract: a cloned store is fully independent of the original, so
/// mutating one never shows through in the other. Keys and values are cloned with their own
/// `Clone` implementations; nothing deeper is copied.
pub trait Storage<K, V>: Clone {
    /// An iterator over the `(key, value)` pairs of the store.
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Returns a new, empty store of the same concrete kind and configuration as `self`.
    ///
    /// `capacity` is a hint; stores that cannot pre-allocate ignore it.
    fn new_like(&self, capacity: usize) -> Self;

    /// Returns the number of entries in the store.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry.
    fn clear(&mut self);

    /// Returns `true` if `key` is present.
    fn contains(&self, key: &K) -> bool;

    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &K) -> Option<&V>;

    /// Inserts `value` under `key`, replacing and returning any previous value.
    fn upsert(&mut self, key: K, value: V) -> Option<V>;

    /// Removes `key`, returning its value. Absent keys are ignored.
    fn delete(&mut self, key: &K) -> Option<V>;

    /// Removes every key yielded by `keys`. Absent keys are ignored.
    fn delete_all<'k, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
    {
        for key in keys {
            self.delete(key);
        }
    }

    /// An iterator visiting all entries.
    ///
    /// The order is defined by the store; see the implementations for details.
    fn iter(&self) -> Self::Iter<'_>;

    /// Removes and returns one entry, or `None` if the store is empty.
    ///
    /// The default picks the first entry in iteration order and deletes it. Stores whose iteration
    /// has to skip over previously removed slots should override this, or draining them becomes
    /// quadratic.
    fn pop(&mut self) -> Option<(K, V)>
    where
        K: Clone,
    {
        let key = self.iter().next()?.0.clone();
        let value = self.delete(&key)?;
        Some((key, value))
    }
}
