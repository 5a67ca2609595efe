//! A set of values, unique by a key derived from each value.
//!
//! See [`KeyValueSet`] for details.

use crate::iter::{Keys, Values};
use crate::key_only::KeyOnlySet;
use crate::selector::Selector;
use crate::set::{KeySet, ValueSet};
use crate::storage::{HashStore, Storage, TreeStore};
use std::fmt::{self, Debug, Formatter};

/// A [`KeyValueSet`] backed by a [`HashStore`].
pub type HashKeyValueSet<K, V> = KeyValueSet<K, V, HashStore<K, V>>;

/// A [`KeyValueSet`] backed by a [`TreeStore`]. Iterates in ascending key order.
pub type TreeKeyValueSet<K, V> = KeyValueSet<K, V, TreeStore<K, V>>;

/// A set of values where uniqueness is decided by a key that a [`Selector`] derives from each
/// value.
///
/// Inserting a value whose key is already present replaces the stored value; the set never holds
/// two values with the same key. The selector is fixed when the set is built, and every set
/// derived from this one (by `clone`, `difference`, `intersect`, `symmetric_difference` or
/// `union`) carries the same selector.
///
/// `difference` and `intersect` only need to know which keys the operand holds, so they accept
/// any [`KeySet`]. `symmetric_difference` and `union` copy values out of the operand and so take a
/// [`ValueSet`] with the same value type.
///
/// Like [`KeyOnlySet`](crate::KeyOnlySet), this type does no locking; see
/// [`Synced`](crate::Synced).
///
/// # Examples
///
/// ```
/// use kset::{HashKeyValueSet, KeySet, ValueSet};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct User {
///     id: u32,
///     name: &'static str,
/// }
///
/// let mut users = HashKeyValueSet::from_values(
///     |u: &User| u.id,
///     [User { id: 1, name: "Alice" }, User { id: 2, name: "Bob" }],
/// );
///
/// // same id: the stored user is replaced, nothing is added
/// assert_eq!(users.append([User { id: 1, name: "Alice Smith" }]), 0);
/// assert_eq!(users.len(), 2);
/// assert_eq!(users.get(&1).map(|u| u.name), Some("Alice Smith"));
///
/// assert!(users.contains(&[User { id: 2, name: "anyone" }]));
/// ```
pub struct KeyValueSet<K, V, S = HashStore<K, V>> {
    store: S,
    selector: Selector<K, V>,
}

impl<K, V, S> KeyValueSet<K, V, S>
where
    S: Storage<K, V> + Default,
{
    /// Creates an empty set that keys its values with `selector`.
    pub fn new<F>(selector: F) -> Self
    where
        F: Fn(&V) -> K + Send + Sync + 'static,
    {
        Self::with_selector(Selector::new(selector))
    }

    /// Creates an empty set that keys its values with `selector`.
    pub fn with_selector(selector: Selector<K, V>) -> Self {
        Self::with_storage(selector, S::default())
    }

    /// Creates a set from `values`, keyed by `selector`.
    ///
    /// Values are upserted one after the other, so when several values share a key the last one
    /// wins.
    pub fn from_values<F, I>(selector: F, values: I) -> Self
    where
        F: Fn(&V) -> K + Send + Sync + 'static,
        I: IntoIterator<Item = V>,
    {
        let mut set = Self::new(selector);
        for value in values {
            let key = set.selector.select(&value);
            set.store.upsert(key, value);
        }
        set
    }
}

impl<K, V, S> KeyValueSet<K, V, S> {
    /// Creates a set over the given store.
    ///
    /// Entries already in `store` become the initial elements of the set; their keys must be
    /// the ones `selector` derives from their values.
    pub fn with_storage(selector: Selector<K, V>, store: S) -> Self {
        Self { store, selector }
    }

    /// Returns the selector this set keys its values with.
    pub fn selector(&self) -> &Selector<K, V> {
        &self.selector
    }

    /// Returns the backing store.
    pub fn storage(&self) -> &S {
        &self.store
    }

    /// Consumes the set, returning the backing store.
    pub fn into_storage(self) -> S {
        self.store
    }

    fn derived(&self, store: S) -> Self {
        Self::with_storage(self.selector.clone(), store)
    }
}

impl<K, V, S> KeyValueSet<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Storage<K, V>,
{
    /// Upserts every value in `values`, keyed by the set's selector.
    ///
    /// Returns the number of keys that were not already present. A value whose key is present
    /// replaces the stored value but is not counted.
    pub fn append<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = V>,
    {
        let mut added = 0;
        for value in values {
            let key = self.selector.select(&value);
            if self.store.upsert(key, value).is_none() {
                added += 1;
            }
        }
        added
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Removes the elements sharing a key with any of `values`. Absent keys are ignored.
    pub fn remove<'v, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
    {
        for value in values {
            self.store.delete(&self.selector.select(value));
        }
    }

    /// Removes the elements stored under any of `keys`. Absent keys are ignored.
    pub fn remove_keys<'k, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
    {
        self.store.delete_all(keys);
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    /// Removes and returns an arbitrary value, or `None` if the set is empty.
    ///
    /// Which value is picked depends on the backing store and must not be relied upon.
    pub fn pop(&mut self) -> Option<V> {
        self.store.pop().map(|(_, value)| value)
    }

    /// Calls `f` on every value, in the store's iteration order, until `f` returns `false`.
    pub fn each<F>(&self, mut f: F)
    where
        F: FnMut(&V) -> bool,
    {
        for value in self.iter() {
            if !f(value) {
                break;
            }
        }
    }

    /// An iterator visiting all values.
    ///
    /// The order is unspecified for hash-backed sets and ascending by key for tree-backed sets.
    pub fn iter(&self) -> Values<'_, K, V, S> {
        Values {
            inner: self.store.iter(),
        }
    }

    /// An iterator visiting all keys, in the same order as [`iter`](Self::iter).
    pub fn keys(&self) -> Keys<'_, K, V, S> {
        Keys {
            inner: self.store.iter(),
        }
    }

    /// Copies every value into a `Vec`, in iteration order.
    pub fn to_vec(&self) -> Vec<V> {
        self.iter().cloned().collect()
    }

    /// Collects the keys of this set into a [`KeyOnlySet`] backed by a store of type `T`.
    ///
    /// ```
    /// use kset::{HashKeySet, TreeKeyValueSet};
    ///
    /// let words = TreeKeyValueSet::from_values(|w: &&str| w.len(), ["a", "bb", "cc"]);
    /// let lengths: HashKeySet<usize> = words.key_set();
    /// assert_eq!(lengths, [1, 2].into_iter().collect());
    /// ```
    pub fn key_set<T>(&self) -> KeyOnlySet<K, T>
    where
        T: Storage<K, ()> + Default,
    {
        self.keys().cloned().collect()
    }

    /// Returns a new set with the elements of `self` whose keys are not in `other`.
    ///
    /// Elements are looked up in `other` under the keys they are stored with in `self`.
    pub fn difference(&self, other: &dyn KeySet<K>) -> Self {
        let mut store = self.store.new_like(self.store.len());
        for (key, value) in self.store.iter() {
            if !other.contains_key(key) {
                store.upsert(key.clone(), value.clone());
            }
        }
        log::trace!("difference kept {} of {} values", store.len(), self.store.len());
        self.derived(store)
    }

    /// Returns a new set with the elements of `self` whose keys are also in `other`.
    pub fn intersect(&self, other: &dyn KeySet<K>) -> Self {
        let mut store = self.store.new_like(self.store.len().min(other.len()));
        for (key, value) in self.store.iter() {
            if other.contains_key(key) {
                store.upsert(key.clone(), value.clone());
            }
        }
        log::trace!("intersect kept {} of {} values", store.len(), self.store.len());
        self.derived(store)
    }

    /// Returns a new set with the elements whose keys are in exactly one of `self` and `other`.
    ///
    /// Values taken from `other` are keyed with this set's selector. An element of `self` is looked
    /// up in `other` under the key it is stored with here, not re-keyed with `other`'s selector, so
    /// when the two selectors disagree the result follows this set's keys on both sides.
    pub fn symmetric_difference(&self, other: &dyn ValueSet<K, V>) -> Self {
        let mut store = self.store.new_like(self.store.len() + other.len());
        for (key, value) in self.store.iter() {
            if !other.contains_key(key) {
                store.upsert(key.clone(), value.clone());
            }
        }
        other.each_value(&mut |value| {
            let key = self.selector.select(value);
            if !self.store.contains(&key) {
                store.upsert(key, value.clone());
            }
            true
        });
        self.derived(store)
    }

    /// Returns a new set with the elements of both `self` and `other`.
    ///
    /// Where both hold a value under the same key, the value from `other` wins. Values taken from
    /// `other` are keyed with this set's selector.
    pub fn union(&self, other: &dyn ValueSet<K, V>) -> Self {
        let mut store = self.store.clone();
        other.each_value(&mut |value| {
            store.upsert(self.selector.select(value), value.clone());
            true
        });
        self.derived(store)
    }
}

impl<K, V, S> KeySet<K> for KeyValueSet<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Storage<K, V>,
{
    #[inline]
    fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    fn each_key(&self, f: &mut dyn FnMut(&K) -> bool) {
        for key in self.keys() {
            if !f(key) {
                break;
            }
        }
    }
}

impl<K, V, S> ValueSet<K, V> for KeyValueSet<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Storage<K, V>,
{
    #[inline]
    fn select(&self, value: &V) -> K {
        self.selector.select(value)
    }

    fn each_value(&self, f: &mut dyn FnMut(&V) -> bool) {
        self.each(f)
    }
}

impl<K, V, S> Clone for KeyValueSet<K, V, S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        self.derived(self.store.clone())
    }
}

impl<K, V, S> Debug for KeyValueSet<K, V, S>
where
    K: Clone,
    V: Clone + Debug,
    S: Storage<K, V>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K, V, S> Extend<V> for KeyValueSet<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Storage<K, V>,
{
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        self.append(iter);
    }
}

impl<'a, K, V, S> IntoIterator for &'a KeyValueSet<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Storage<K, V>,
{
    type Item = &'a V;
    type IntoIter = Values<'a, K, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HashKeySet;

    #[derive(Clone, Debug, PartialEq)]
    struct User {
        id: u32,
        name: &'static str,
    }

    fn user(id: u32, name: &'static str) -> User {
        User { id, name }
    }

    #[test]
    fn last_value_wins_on_construction() {
        let set = TreeKeyValueSet::from_values(|u: &User| u.id, [user(1, "a"), user(1, "b")]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.to_vec(), [user(1, "b")]);
    }

    #[test]
    fn append_overwrites_without_counting() {
        let mut set = HashKeyValueSet::from_values(|u: &User| u.id, [user(1, "a")]);
        assert_eq!(set.append([user(1, "z")]), 0);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&1), Some(&user(1, "z")));
        assert_eq!(set.append([user(2, "b"), user(2, "c")]), 1);
        assert_eq!(set.get(&2), Some(&user(2, "c")));
    }

    #[test]
    fn remove_by_value_and_key() {
        let mut set = TreeKeyValueSet::from_values(
            |u: &User| u.id,
            [user(1, "a"), user(2, "b"), user(3, "c")],
        );
        set.remove(&[user(1, "whoever")]);
        set.remove_keys(&[3, 9]);
        assert_eq!(set.to_vec(), [user(2, "b")]);
    }

    #[test]
    fn derived_sets_keep_selector() {
        let set = HashKeyValueSet::from_values(|u: &User| u.id, [user(1, "a"), user(2, "b")]);
        let others: HashKeySet<u32> = [2].into_iter().collect();

        let mut clone = set.clone();
        let mut diff = set.difference(&others);
        let mut inter = set.intersect(&others);
        let mut sym = set.symmetric_difference(&set);
        let mut union = set.union(&set);

        for derived in [&mut clone, &mut diff, &mut inter, &mut sym, &mut union] {
            derived.append([user(7, "new")]);
            assert!(derived.contains_key(&7));
            assert_eq!(derived.select(&user(9, "x")), 9);
        }
        assert_eq!(diff.len(), 2);
        assert_eq!(inter.len(), 2);
        assert_eq!(sym.len(), 1);
    }

    #[test]
    fn union_prefers_other_values() {
        let a = TreeKeyValueSet::from_values(|u: &User| u.id, [user(1, "a"), user(2, "b")]);
        let b = TreeKeyValueSet::from_values(|u: &User| u.id, [user(2, "B"), user(3, "C")]);
        assert_eq!(a.union(&b).to_vec(), [user(1, "a"), user(2, "B"), user(3, "C")]);
    }

    #[test]
    fn symmetric_difference_values() {
        let a = TreeKeyValueSet::from_values(|u: &User| u.id, [user(1, "a"), user(2, "b")]);
        let b = HashKeyValueSet::from_values(|u: &User| u.id, [user(2, "B"), user(3, "C")]);
        assert_eq!(a.symmetric_difference(&b).to_vec(), [user(1, "a"), user(3, "C")]);
    }

    #[test]
    fn pop() {
        let mut set = TreeKeyValueSet::from_values(|u: &User| u.id, [user(2, "b"), user(1, "a")]);
        assert_eq!(set.pop(), Some(user(1, "a")));
        assert_eq!(set.pop(), Some(user(2, "b")));
        assert_eq!(set.pop(), None);
    }

    #[test]
    fn each_stops_early() {
        let set = TreeKeyValueSet::from_values(|v: &u8| *v, 0..10);
        let mut visited = 0;
        set.each(|v| {
            visited += 1;
            *v < 4
        });
        assert_eq!(visited, 5);
    }

    #[test]
    fn key_set_projection() {
        let set = HashKeyValueSet::from_values(|u: &User| u.id, [user(4, "d"), user(2, "b")]);
        let keys: crate::TreeKeySet<u32> = set.key_set();
        assert_eq!(keys.to_vec(), [2, 4]);
        assert!(keys.equal(&set));
    }

    #[test]
    fn symmetric_difference_uses_receiver_keys() {
        let by_id = HashKeyValueSet::from_values(|u: &User| u.id, [user(3, "x")]);
        let by_name_len =
            HashKeyValueSet::from_values(|u: &User| u.name.len() as u32, [user(7, "abc")]);

        // user 3 is stored under 3 here and `by_name_len` holds a value under 3, so it drops out
        // even though `by_name_len`'s own selector would key it as 1
        let sym = by_id.symmetric_difference(&by_name_len);
        assert_eq!(sym.to_vec(), [user(7, "abc")]);
        assert_eq!(sym.get(&7), Some(&user(7, "abc")));

        // the other way round user 7 is stored under 3, and the receiver's selector keys user 3
        // under its name length 1
        let sym = by_name_len.symmetric_difference(&by_id);
        assert_eq!(sym.to_vec(), [user(3, "x")]);
        assert_eq!(sym.get(&1), Some(&user(3, "x")));
    }
}
