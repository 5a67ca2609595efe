//! A reader/writer-locked wrapper that makes any set in this crate shareable across threads.
//!
//! See [`Synced`] for details.

use crate::key_only::{HashKeySet, KeyOnlySet, TreeKeySet};
use crate::key_value::{HashKeyValueSet, KeyValueSet, TreeKeyValueSet};
use crate::selector::Selector;
use crate::set::{KeySet, ValueSet};
use crate::storage::Storage;
use parking_lot::{RwLock, RwLockReadGuard};
use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;

/// A [`HashKeySet`] behind a reader/writer lock.
pub type SyncHashKeySet<K> = Synced<HashKeySet<K>>;

/// A [`TreeKeySet`] behind a reader/writer lock.
pub type SyncTreeKeySet<K> = Synced<TreeKeySet<K>>;

/// A [`HashKeyValueSet`] behind a reader/writer lock.
pub type SyncHashKeyValueSet<K, V> = Synced<HashKeyValueSet<K, V>>;

/// A [`TreeKeyValueSet`] behind a reader/writer lock.
pub type SyncTreeKeyValueSet<K, V> = Synced<TreeKeyValueSet<K, V>>;

/// A set guarded by a reader/writer lock.
///
/// Every mutating operation (`append`, `clear`, `remove`, `pop`, ...) takes `&self` and holds the
/// exclusive lock for its duration. Every read (`len`, `contains_key`, the set relations, the
/// binary operations, ...) holds the shared lock for its duration, so a single call never observes
/// a half-applied mutation. Binary operations return a new, independently locked set.
///
/// Reads use recursive shared locking: a thread that already holds the shared lock on a set can
/// read it again (for instance `a.union(&a)`) without waiting behind queued writers.
///
/// # Hazards
///
/// The lock is not reentrant for writers. Calling a mutating method on a set from inside a
/// callback passed to that same set's [`each`](Synced::each), or while a [`SyncedRef`] to it is
/// alive on the same thread, deadlocks.
///
/// A binary operation or relation on two synced sets takes the locks one after the other, never
/// both at once as a unit. `a.intersect(&b)` is consistent with respect to `a` but may observe
/// `b` between two of its mutations.
///
/// # Examples
///
/// ```
/// use kset::{KeySet, SyncHashKeySet};
/// use std::sync::Arc;
/// use std::thread;
///
/// let set = Arc::new(SyncHashKeySet::new());
/// let handles: Vec<_> = (0..4)
///     .map(|t| {
///         let set = Arc::clone(&set);
///         thread::spawn(move || set.append((t * 100)..(t * 100 + 100)))
///     })
///     .collect();
/// for h in handles {
///     h.join().unwrap();
/// }
/// assert_eq!(set.len(), 400);
/// ```
pub struct Synced<T> {
    inner: RwLock<T>,
}

/// A shared-locked view of a [`Synced`] set, constructed with [`Synced::read`].
///
/// The shared lock is held until the view is dropped. The view dereferences to the wrapped set, so
/// its iterators can be used directly for lock-scoped, lazy traversal.
pub struct SyncedRef<'g, T> {
    guard: RwLockReadGuard<'g, T>,
}

impl<T> Deref for SyncedRef<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T: Debug> Debug for SyncedRef<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).fmt(f)
    }
}

impl<T> Synced<T> {
    /// Wraps `set`.
    pub fn from_set(set: T) -> Self {
        Self {
            inner: RwLock::new(set),
        }
    }

    /// Consumes the wrapper, returning the set.
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }

    /// Gets a shared-locked view of the set.
    ///
    /// ```
    /// use kset::SyncTreeKeySet;
    ///
    /// let set = SyncTreeKeySet::new();
    /// set.append([3, 1, 2]);
    /// let keys: Vec<_> = set.read().iter().copied().collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn read(&self) -> SyncedRef<'_, T> {
        SyncedRef {
            guard: self.inner.read_recursive(),
        }
    }

    /// Runs `f` with exclusive access to the set and returns its result.
    ///
    /// Use this to apply several mutations as one atomic step.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut guard = self.inner.write();
        f(&mut *guard)
    }

    /// Returns a mutable reference to the set.
    ///
    /// No locking is needed since the borrow guarantees exclusive access.
    pub fn get_mut(&mut self) -> &mut T {
        self.inner.get_mut()
    }
}

impl<K, S> Synced<KeyOnlySet<K, S>>
where
    S: Storage<K, ()> + Default,
{
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::from_set(KeyOnlySet::new())
    }
}

impl<K, S> Synced<KeyOnlySet<K, S>>
where
    K: Clone,
    S: Storage<K, ()>,
{
    /// Adds `keys` to the set, returning how many were not already present.
    ///
    /// See [`KeyOnlySet::append`].
    pub fn append<I>(&self, keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
    {
        self.inner.write().append(keys)
    }

    /// Removes every element.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Removes `keys` from the set. Absent keys are ignored.
    pub fn remove<'k, I>(&self, keys: I)
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
    {
        self.inner.write().remove(keys);
    }

    /// Removes and returns an arbitrary key, or `None` if the set is empty.
    pub fn pop(&self) -> Option<K> {
        self.inner.write().pop()
    }

    /// Calls `f` on every key until `f` returns `false`, holding the shared lock throughout.
    ///
    /// `f` must not mutate this set; see the [hazards](Synced#hazards).
    pub fn each<F>(&self, f: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.read().each(f);
    }

    /// Copies every key into a `Vec`.
    pub fn to_vec(&self) -> Vec<K> {
        self.read().to_vec()
    }

    /// See [`KeyOnlySet::difference`].
    pub fn difference(&self, other: &dyn KeySet<K>) -> Self {
        Self::from_set(self.read().difference(other))
    }

    /// See [`KeyOnlySet::intersect`].
    pub fn intersect(&self, other: &dyn KeySet<K>) -> Self {
        Self::from_set(self.read().intersect(other))
    }

    /// See [`KeyOnlySet::symmetric_difference`].
    pub fn symmetric_difference(&self, other: &dyn KeySet<K>) -> Self {
        Self::from_set(self.read().symmetric_difference(other))
    }

    /// See [`KeyOnlySet::union`].
    pub fn union(&self, other: &dyn KeySet<K>) -> Self {
        Self::from_set(self.read().union(other))
    }
}

impl<K, V, S> Synced<KeyValueSet<K, V, S>>
where
    S: Storage<K, V> + Default,
{
    /// Creates an empty set that keys its values with `selector`.
    pub fn new<F>(selector: F) -> Self
    where
        F: Fn(&V) -> K + Send + Sync + 'static,
    {
        Self::from_set(KeyValueSet::new(selector))
    }

    /// Creates an empty set that keys its values with `selector`.
    pub fn with_selector(selector: Selector<K, V>) -> Self {
        Self::from_set(KeyValueSet::with_selector(selector))
    }

    /// Creates a set from `values`, keyed by `selector`.
    pub fn from_values<F, I>(selector: F, values: I) -> Self
    where
        F: Fn(&V) -> K + Send + Sync + 'static,
        I: IntoIterator<Item = V>,
    {
        Self::from_set(KeyValueSet::from_values(selector, values))
    }
}

impl<K, V, S> Synced<KeyValueSet<K, V, S>>
where
    K: Clone,
    V: Clone,
    S: Storage<K, V>,
{
    /// Upserts `values`, returning how many keys were not already present.
    ///
    /// See [`KeyValueSet::append`].
    pub fn append<I>(&self, values: I) -> usize
    where
        I: IntoIterator<Item = V>,
    {
        self.inner.write().append(values)
    }

    /// Removes every element.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Removes the elements sharing a key with any of `values`.
    pub fn remove<'v, I>(&self, values: I)
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
    {
        self.inner.write().remove(values);
    }

    /// Removes the elements stored under any of `keys`.
    pub fn remove_keys<'k, I>(&self, keys: I)
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
    {
        self.inner.write().remove_keys(keys);
    }

    /// Removes and returns an arbitrary value, or `None` if the set is empty.
    pub fn pop(&self) -> Option<V> {
        self.inner.write().pop()
    }

    /// Returns a copy of the value stored under `key`.
    ///
    /// Use [`read`](Synced::read) to borrow it instead.
    pub fn get(&self, key: &K) -> Option<V> {
        self.read().get(key).cloned()
    }

    /// Returns the set's selector.
    pub fn selector(&self) -> Selector<K, V> {
        self.read().selector().clone()
    }

    /// Calls `f` on every value until `f` returns `false`, holding the shared lock throughout.
    ///
    /// `f` must not mutate this set; see the [hazards](Synced#hazards).
    pub fn each<F>(&self, f: F)
    where
        F: FnMut(&V) -> bool,
    {
        self.read().each(f);
    }

    /// Copies every value into a `Vec`.
    pub fn to_vec(&self) -> Vec<V> {
        self.read().to_vec()
    }

    /// See [`KeyValueSet::difference`].
    pub fn difference(&self, other: &dyn KeySet<K>) -> Self {
        Self::from_set(self.read().difference(other))
    }

    /// See [`KeyValueSet::intersect`].
    pub fn intersect(&self, other: &dyn KeySet<K>) -> Self {
        Self::from_set(self.read().intersect(other))
    }

    /// See [`KeyValueSet::symmetric_difference`].
    pub fn symmetric_difference(&self, other: &dyn ValueSet<K, V>) -> Self {
        Self::from_set(self.read().symmetric_difference(other))
    }

    /// See [`KeyValueSet::union`].
    pub fn union(&self, other: &dyn ValueSet<K, V>) -> Self {
        Self::from_set(self.read().union(other))
    }
}

impl<K, T> KeySet<K> for Synced<T>
where
    T: KeySet<K>,
{
    fn len(&self) -> usize {
        self.read().len()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.read().contains_key(key)
    }

    fn each_key(&self, f: &mut dyn FnMut(&K) -> bool) {
        self.read().each_key(f)
    }

    fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn contains_keys(&self, keys: &[K]) -> bool {
        self.read().contains_keys(keys)
    }

    fn contains_any_key(&self, keys: &[K]) -> bool {
        self.read().contains_any_key(keys)
    }

    fn intersects(&self, other: &dyn KeySet<K>) -> bool {
        self.read().intersects(other)
    }

    fn equal(&self, other: &dyn KeySet<K>) -> bool {
        self.read().equal(other)
    }

    fn is_subset(&self, other: &dyn KeySet<K>) -> bool {
        self.read().is_subset(other)
    }

    fn is_superset(&self, other: &dyn KeySet<K>) -> bool {
        self.read().is_superset(other)
    }

    fn is_proper_subset(&self, other: &dyn KeySet<K>) -> bool {
        self.read().is_proper_subset(other)
    }

    fn is_proper_superset(&self, other: &dyn KeySet<K>) -> bool {
        self.read().is_proper_superset(other)
    }
}

impl<K, V, T> ValueSet<K, V> for Synced<T>
where
    T: ValueSet<K, V>,
{
    fn select(&self, value: &V) -> K {
        self.read().select(value)
    }

    fn each_value(&self, f: &mut dyn FnMut(&V) -> bool) {
        self.read().each_value(f)
    }

    fn contains(&self, values: &[V]) -> bool {
        self.read().contains(values)
    }

    fn contains_any(&self, values: &[V]) -> bool {
        self.read().contains_any(values)
    }
}

impl<T: Clone> Clone for Synced<T> {
    fn clone(&self) -> Self {
        Self::from_set(self.read().clone())
    }
}

impl<T: Default> Default for Synced<T> {
    fn default() -> Self {
        Self::from_set(T::default())
    }
}

impl<T> From<T> for Synced<T> {
    fn from(set: T) -> Self {
        Self::from_set(set)
    }
}

impl<T: Debug> Debug for Synced<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.read().fmt(f)
    }
}

impl<T: PartialEq> PartialEq for Synced<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.read() == *other.read()
    }
}

impl<T: Eq> Eq for Synced<T> {}

impl<K, S> FromIterator<K> for Synced<KeyOnlySet<K, S>>
where
    K: Clone,
    S: Storage<K, ()> + Default,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        Self::from_set(iter.into_iter().collect())
    }
}
