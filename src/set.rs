//! Capability traits shared by every set in the crate.
//!
//! [`KeySet`] is the "bag of keys" view: cardinality, membership and the relational predicates of
//! set theory. Every set implements it, whatever its value type, backing store or locking mode, so
//! sets that share a key type can be compared and combined with one another. [`ValueSet`] adds the
//! value side of a [`KeyValueSet`](crate::KeyValueSet), which `union` and `symmetric_difference`
//! need to copy values out of their operand.
//!
//! Both traits are object safe; binary operations take `&dyn KeySet<K>` or `&dyn ValueSet<K, V>`.

/// Key-level capabilities of a set.
///
/// Implementors provide [`len`](KeySet::len), [`contains_key`](KeySet::contains_key) and
/// [`each_key`](KeySet::each_key); every other method has a default expressed in terms of those.
///
/// # Examples
///
/// ```
/// use kset::{HashKeySet, KeySet, TreeKeySet};
///
/// let small: HashKeySet<_> = [1, 4].into_iter().collect();
/// let large: TreeKeySet<_> = [1, 2, 3, 4].into_iter().collect();
///
/// assert!(small.is_proper_subset(&large));
/// assert!(large.is_proper_superset(&small));
/// assert!(!small.is_proper_subset(&small));
/// ```
pub trait KeySet<K> {
    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if `key` is in the set.
    fn contains_key(&self, key: &K) -> bool;

    /// Calls `f` on every key of the set, stopping as soon as `f` returns `false`.
    fn each_key(&self, f: &mut dyn FnMut(&K) -> bool);

    /// Returns `true` if the set contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if **all** of `keys` are in the set.
    ///
    /// An empty `keys` is vacuously contained.
    fn contains_keys(&self, keys: &[K]) -> bool {
        keys.iter().all(|key| self.contains_key(key))
    }

    /// Returns `true` if **any** of `keys` is in the set.
    ///
    /// Returns `false` for an empty `keys`.
    fn contains_any_key(&self, keys: &[K]) -> bool {
        keys.iter().any(|key| self.contains_key(key))
    }

    /// Returns `true` if the two sets share at least one key.
    fn intersects(&self, other: &dyn KeySet<K>) -> bool {
        let mut found = false;
        self.each_key(&mut |key| {
            found = other.contains_key(key);
            !found
        });
        found
    }

    /// Returns `true` if both sets contain exactly the same keys.
    ///
    /// Since a set never holds a key twice, equal cardinality plus one-directional containment
    /// is enough.
    fn equal(&self, other: &dyn KeySet<K>) -> bool {
        self.len() == other.len() && all_keys_in(self, other)
    }

    /// Returns `true` if every key of `self` is also in `other`.
    fn is_subset(&self, other: &dyn KeySet<K>) -> bool {
        self.len() <= other.len() && all_keys_in(self, other)
    }

    /// Returns `true` if every key of `other` is also in `self`.
    fn is_superset(&self, other: &dyn KeySet<K>) -> bool {
        if self.len() < other.len() {
            return false;
        }
        let mut all = true;
        other.each_key(&mut |key| {
            all = self.contains_key(key);
            all
        });
        all
    }

    /// Returns `true` if `self` is a subset of `other` and the two are not equal.
    fn is_proper_subset(&self, other: &dyn KeySet<K>) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Returns `true` if `self` is a superset of `other` and the two are not equal.
    fn is_proper_superset(&self, other: &dyn KeySet<K>) -> bool {
        self.len() > other.len() && self.is_superset(other)
    }
}

/// Scans the keys of `this`, checking each against `other`.
fn all_keys_in<K, S>(this: &S, other: &dyn KeySet<K>) -> bool
where
    S: KeySet<K> + ?Sized,
{
    let mut all = true;
    this.each_key(&mut |key| {
        all = other.contains_key(key);
        all
    });
    all
}

/// Value-level capabilities of a set whose elements are values keyed by a selector.
pub trait ValueSet<K, V>: KeySet<K> {
    /// Derives the key of `value` with the set's selector.
    fn select(&self, value: &V) -> K;

    /// Calls `f` on every value of the set, stopping as soon as `f` returns `false`.
    fn each_value(&self, f: &mut dyn FnMut(&V) -> bool);

    /// Returns `true` if the keys of **all** of `values` are in the set.
    fn contains(&self, values: &[V]) -> bool {
        values.iter().all(|v| self.contains_key(&self.select(v)))
    }

    /// Returns `true` if the key of **any** of `values` is in the set.
    fn contains_any(&self, values: &[V]) -> bool {
        values.iter().any(|v| self.contains_key(&self.select(v)))
    }
}
