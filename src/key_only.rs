//! A set of bare keys.
//!
//! See [`KeyOnlySet`] for details.

use crate::iter::Keys;
use crate::selector::Selector;
use crate::set::KeySet;
use crate::storage::{HashStore, Storage, TreeStore};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

/// A [`KeyOnlySet`] backed by a [`HashStore`].
pub type HashKeySet<K> = KeyOnlySet<K, HashStore<K, ()>>;

/// A [`KeyOnlySet`] backed by a [`TreeStore`]. Iterates in ascending order.
pub type TreeKeySet<K> = KeyOnlySet<K, TreeStore<K, ()>>;

/// A set whose elements are the keys themselves, implemented as a [`Storage`] where the value is
/// `()`.
///
/// All set algebra is written against [`Storage`], so the same operations are available over a
/// hash table ([`HashKeySet`]) or an ordered tree ([`TreeKeySet`]). Operations that produce a set
/// (`clone`, `difference`, `intersect`, `symmetric_difference`, `union`) never touch their
/// operands; they build a fresh store of the receiver's kind. The operand of a binary operation
/// may be any [`KeySet`] with the same key type, including a
/// [`KeyValueSet`](crate::KeyValueSet) or a [`Synced`](crate::Synced) set.
///
/// This type does no locking of its own. Wrap it in [`Synced`](crate::Synced) to share it
/// between threads that mutate it.
///
/// # Examples
///
/// ```
/// use kset::{KeySet, TreeKeySet};
///
/// let mut a = TreeKeySet::new();
/// assert_eq!(a.append([1, 2, 3, 1]), 3);
/// assert_eq!(a.len(), 3);
/// assert!(a.contains_keys(&[2]));
/// assert!(!a.contains_keys(&[4]));
///
/// let b: TreeKeySet<_> = [3, 4, 5].into_iter().collect();
///
/// assert_eq!(a.union(&b).to_vec(), [1, 2, 3, 4, 5]);
/// assert_eq!(a.intersect(&b).to_vec(), [3]);
/// assert_eq!(a.difference(&b).to_vec(), [1, 2]);
/// assert_eq!(a.symmetric_difference(&b).to_vec(), [1, 2, 4, 5]);
/// ```
pub struct KeyOnlySet<K, S = HashStore<K, ()>> {
    store: S,
    marker: PhantomData<K>,
}

impl<K, S> KeyOnlySet<K, S>
where
    S: Storage<K, ()> + Default,
{
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::with_storage(S::default())
    }
}

impl<K, S> KeyOnlySet<K, S>
where
    K: Clone,
    S: Storage<K, ()> + Default,
{
    /// Creates a set holding the keys `selector` derives from `values`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kset::{HashKeySet, KeySet, Selector};
    ///
    /// struct User { id: u32 }
    ///
    /// let by_id = Selector::new(|u: &User| u.id);
    /// let ids = HashKeySet::from_selected(&by_id, &[User { id: 1 }, User { id: 2 }]);
    /// assert!(ids.contains_keys(&[1, 2]));
    /// ```
    pub fn from_selected<'v, V, I>(selector: &Selector<K, V>, values: I) -> Self
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
    {
        let mut set = Self::new();
        set.append(values.into_iter().map(|v| selector.select(v)));
        set
    }
}

impl<K, S> KeyOnlySet<K, S> {
    /// Creates a set over the given store.
    ///
    /// The store may already hold keys; they become the initial elements of the set.
    pub fn with_storage(store: S) -> Self {
        Self {
            store,
            marker: PhantomData,
        }
    }

    /// Returns the backing store.
    pub fn storage(&self) -> &S {
        &self.store
    }

    /// Consumes the set, returning the backing store.
    pub fn into_storage(self) -> S {
        self.store
    }
}

impl<K, S> KeyOnlySet<K, S>
where
    K: Clone,
    S: Storage<K, ()>,
{
    /// Upserts every key in `keys`.
    ///
    /// Returns the number of keys that were not already present. Keys repeated within `keys`
    /// are counted once.
    ///
    /// # Examples
    ///
    /// ```
    /// use kset::HashKeySet;
    ///
    /// let mut set: HashKeySet<_> = [1].into_iter().collect();
    /// assert_eq!(set.append([1, 2, 3]), 2);
    /// assert_eq!(set.append([1, 2, 3]), 0);
    /// ```
    pub fn append<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
    {
        let mut added = 0;
        for key in keys {
            if self.store.upsert(key, ()).is_none() {
                added += 1;
            }
        }
        added
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Removes every key in `keys`. Keys that are not in the set are ignored.
    pub fn remove<'k, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
    {
        self.store.delete_all(keys);
    }

    /// Removes and returns an arbitrary key, or `None` if the set is empty.
    ///
    /// Which key is picked depends on the backing store and must not be relied upon.
    pub fn pop(&mut self) -> Option<K> {
        self.store.pop().map(|(key, ())| key)
    }

    /// Calls `f` on every key, in the store's iteration order, until `f` returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kset::TreeKeySet;
    ///
    /// let set: TreeKeySet<_> = (1..=5).collect();
    /// let mut seen = Vec::new();
    /// set.each(|&k| {
    ///     seen.push(k);
    ///     k < 3
    /// });
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    pub fn each<F>(&self, mut f: F)
    where
        F: FnMut(&K) -> bool,
    {
        for key in self.iter() {
            if !f(key) {
                break;
            }
        }
    }

    /// An iterator visiting all keys.
    ///
    /// The order is unspecified for hash-backed sets and ascending for tree-backed sets.
    pub fn iter(&self) -> Keys<'_, K, (), S> {
        Keys {
            inner: self.store.iter(),
        }
    }

    /// Copies every key into a `Vec`, in iteration order.
    pub fn to_vec(&self) -> Vec<K> {
        self.iter().cloned().collect()
    }

    /// Returns a new set with the keys of `self` that are not in `other`.
    pub fn difference(&self, other: &dyn KeySet<K>) -> Self {
        let mut store = self.store.new_like(self.store.len());
        for key in self.iter() {
            if !other.contains_key(key) {
                store.upsert(key.clone(), ());
            }
        }
        log::trace!("difference kept {} of {} keys", store.len(), self.store.len());
        Self::with_storage(store)
    }

    /// Returns a new set with the keys that are in both `self` and `other`.
    pub fn intersect(&self, other: &dyn KeySet<K>) -> Self {
        let mut store = self.store.new_like(self.store.len().min(other.len()));
        for key in self.iter() {
            if other.contains_key(key) {
                store.upsert(key.clone(), ());
            }
        }
        log::trace!("intersect kept {} of {} keys", store.len(), self.store.len());
        Self::with_storage(store)
    }

    /// Returns a new set with the keys that are in exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &dyn KeySet<K>) -> Self {
        let mut store = self.store.new_like(self.store.len() + other.len());
        for key in self.iter() {
            if !other.contains_key(key) {
                store.upsert(key.clone(), ());
            }
        }
        other.each_key(&mut |key| {
            if !self.store.contains(key) {
                store.upsert(key.clone(), ());
            }
            true
        });
        Self::with_storage(store)
    }

    /// Returns a new set with the keys of both `self` and `other`.
    pub fn union(&self, other: &dyn KeySet<K>) -> Self {
        let mut store = self.store.clone();
        other.each_key(&mut |key| {
            store.upsert(key.clone(), ());
            true
        });
        Self::with_storage(store)
    }
}

impl<K, S> KeySet<K> for KeyOnlySet<K, S>
where
    K: Clone,
    S: Storage<K, ()>,
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
        self.each(f)
    }
}

impl<K, S> Clone for KeyOnlySet<K, S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self::with_storage(self.store.clone())
    }
}

impl<K, S> Default for KeyOnlySet<K, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_storage(S::default())
    }
}

impl<K, S> Debug for KeyOnlySet<K, S>
where
    K: Clone + Debug,
    S: Storage<K, ()>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K, S> PartialEq for KeyOnlySet<K, S>
where
    K: Clone,
    S: Storage<K, ()>,
{
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<K, S> Eq for KeyOnlySet<K, S>
where
    K: Clone,
    S: Storage<K, ()>,
{
}

impl<K, S> Extend<K> for KeyOnlySet<K, S>
where
    K: Clone,
    S: Storage<K, ()>,
{
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        self.append(iter);
    }
}

impl<K, S> FromIterator<K> for KeyOnlySet<K, S>
where
    K: Clone,
    S: Storage<K, ()> + Default,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut set = Self::new();
        set.append(iter);
        set
    }
}

impl<'a, K, S> IntoIterator for &'a KeyOnlySet<K, S>
where
    K: Clone,
    S: Storage<K, ()>,
{
    type Item = &'a K;
    type IntoIter = Keys<'a, K, (), S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
