//! Choosing a backing store and locking mode at runtime.
//!
//! The concrete set types fix their store and locking mode at compile time. When that choice comes
//! from configuration instead, name a [`StoreKind`] and build an [`AnyKeySet`] or
//! [`AnyKeyValueSet`], which dispatch every operation to the matching concrete set.
//!
//! ```
//! use kset::{AnyKeySet, KeySet, StoreKind};
//!
//! let kind: StoreKind = "unsafeTreeMap".parse()?;
//! let mut set = AnyKeySet::with_keys(kind, [3, 1, 2]);
//! assert_eq!(set.to_vec(), [1, 2, 3]);
//! assert_eq!(set.pop(), Some(1));
//! assert_eq!(set.len(), 2);
//!
//! assert!(AnyKeySet::<u32>::from_kind_name("linkedList").is_err());
//! # Ok::<(), kset::UnknownStoreKind>(())
//! ```

use crate::key_only::{HashKeySet, TreeKeySet};
use crate::key_value::{HashKeyValueSet, TreeKeyValueSet};
use crate::selector::Selector;
use crate::set::{KeySet, ValueSet};
use crate::sync::{SyncHashKeySet, SyncHashKeyValueSet, SyncTreeKeySet, SyncTreeKeyValueSet};
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;
use std::str::FromStr;

/// The backing store and locking mode of a set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StoreKind {
    /// A hash table behind a reader/writer lock.
    ///
    /// Average O(1) lookup, insertion and removal.
    HashMap,
    /// A hash table with no locking.
    HashMapUnsync,
    /// An ordered tree behind a reader/writer lock.
    ///
    /// O(log n) lookup, insertion and removal; iteration is in ascending key order.
    TreeMap,
    /// An ordered tree with no locking.
    TreeMapUnsync,
}

impl StoreKind {
    /// Every kind, in declaration order.
    pub const ALL: [StoreKind; 4] = [
        StoreKind::HashMap,
        StoreKind::HashMapUnsync,
        StoreKind::TreeMap,
        StoreKind::TreeMapUnsync,
    ];

    /// Returns `true` if sets of this kind can be shared between threads and mutated through a
    /// shared reference.
    pub fn is_synchronized(self) -> bool {
        matches!(self, StoreKind::HashMap | StoreKind::TreeMap)
    }

    /// Returns `true` if sets of this kind iterate in ascending key order.
    pub fn is_ordered(self) -> bool {
        matches!(self, StoreKind::TreeMap | StoreKind::TreeMapUnsync)
    }

    /// The name this kind is displayed and parsed as.
    pub fn name(self) -> &'static str {
        match self {
            StoreKind::HashMap => "hashMap",
            StoreKind::HashMapUnsync => "unsafeHashMap",
            StoreKind::TreeMap => "treeMap",
            StoreKind::TreeMapUnsync => "unsafeTreeMap",
        }
    }
}

impl Display for StoreKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StoreKind {
    type Err = UnknownStoreKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StoreKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownStoreKind {
                name: s.to_string(),
            })
    }
}

/// The error returned when parsing a [`StoreKind`] from a name that matches no kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownStoreKind {
    name: String,
}

impl UnknownStoreKind {
    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for UnknownStoreKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unknown store kind \"{}\", expected one of ", self.name)?;
        for (i, kind) in StoreKind::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{}\"", kind)?;
        }
        Ok(())
    }
}

impl Error for UnknownStoreKind {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

// Runs `$body` against whichever concrete set `$on` holds.
macro_rules! dispatch {
    ($on:expr, $set:ident => $body:expr) => {
        match $on {
            Self::HashMap($set) => $body,
            Self::HashMapUnsync($set) => $body,
            Self::TreeMap($set) => $body,
            Self::TreeMapUnsync($set) => $body,
        }
    };
}

// Like `dispatch!`, over the two variants of a synchronized handle.
macro_rules! dispatch_synced {
    ($on:expr, $set:ident => $body:expr) => {
        match $on {
            Self::HashMap($set) => $body,
            Self::TreeMap($set) => $body,
        }
    };
}

// Like `dispatch!`, but wraps the resulting set back into the same variant.
macro_rules! derive_same_kind {
    ($on:expr, $set:ident => $body:expr) => {
        match $on {
            Self::HashMap($set) => Self::HashMap($body),
            Self::HashMapUnsync($set) => Self::HashMapUnsync($body),
            Self::TreeMap($set) => Self::TreeMap($body),
            Self::TreeMapUnsync($set) => Self::TreeMapUnsync($body),
        }
    };
}

/// A key-only set whose [`StoreKind`] is chosen at runtime.
///
/// The mutators on `AnyKeySet` itself take `&mut self`, since the unsynchronized kinds need it. A
/// set of a synchronized kind can also be mutated through a shared reference: [`synced`] hands out
/// a [`SyncKeySetRef`] whose mutators take `&self`, so the set can sit behind an `Arc` and be
/// appended to from several threads.
///
/// ```
/// use kset::{AnyKeySet, KeySet, StoreKind};
/// use std::sync::Arc;
/// use std::thread;
///
/// let set = Arc::new(AnyKeySet::new(StoreKind::HashMap));
/// let handles: Vec<_> = (0..4)
///     .map(|t| {
///         let set = Arc::clone(&set);
///         thread::spawn(move || {
///             let shared = set.synced().expect("hashMap is synchronized");
///             shared.append((t * 10)..(t * 10 + 10))
///         })
///     })
///     .collect();
/// for h in handles {
///     assert_eq!(h.join().unwrap(), 10);
/// }
/// assert_eq!(set.len(), 40);
/// assert!(AnyKeySet::<u32>::new(StoreKind::HashMapUnsync).synced().is_none());
/// ```
///
/// [`synced`]: AnyKeySet::synced
#[derive(Clone)]
pub enum AnyKeySet<K> {
    /// See [`StoreKind::HashMap`].
    HashMap(SyncHashKeySet<K>),
    /// See [`StoreKind::HashMapUnsync`].
    HashMapUnsync(HashKeySet<K>),
    /// See [`StoreKind::TreeMap`].
    TreeMap(SyncTreeKeySet<K>),
    /// See [`StoreKind::TreeMapUnsync`].
    TreeMapUnsync(TreeKeySet<K>),
}

impl<K> AnyKeySet<K>
where
    K: Clone + Hash + Ord,
{
    /// Creates an empty set of the given kind.
    pub fn new(kind: StoreKind) -> Self {
        log::debug!("building {} key set", kind);
        match kind {
            StoreKind::HashMap => Self::HashMap(SyncHashKeySet::new()),
            StoreKind::HashMapUnsync => Self::HashMapUnsync(HashKeySet::new()),
            StoreKind::TreeMap => Self::TreeMap(SyncTreeKeySet::new()),
            StoreKind::TreeMapUnsync => Self::TreeMapUnsync(TreeKeySet::new()),
        }
    }

    /// Creates a set of the given kind holding `keys`.
    pub fn with_keys<I>(kind: StoreKind, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut set = Self::new(kind);
        set.append(keys);
        set
    }

    /// Creates an empty set of the kind called `name`.
    ///
    /// Fails without building anything if `name` is not the name of a [`StoreKind`].
    pub fn from_kind_name(name: &str) -> Result<Self, UnknownStoreKind> {
        Ok(Self::new(name.parse()?))
    }

    /// The kind of this set.
    pub fn kind(&self) -> StoreKind {
        match self {
            Self::HashMap(_) => StoreKind::HashMap,
            Self::HashMapUnsync(_) => StoreKind::HashMapUnsync,
            Self::TreeMap(_) => StoreKind::TreeMap,
            Self::TreeMapUnsync(_) => StoreKind::TreeMapUnsync,
        }
    }

    /// Returns a handle that mutates this set through a shared reference, or `None` if the set's
    /// kind is not synchronized.
    pub fn synced(&self) -> Option<SyncKeySetRef<'_, K>> {
        match self {
            Self::HashMap(set) => Some(SyncKeySetRef::HashMap(set)),
            Self::TreeMap(set) => Some(SyncKeySetRef::TreeMap(set)),
            Self::HashMapUnsync(_) | Self::TreeMapUnsync(_) => None,
        }
    }

    /// Adds `keys` to the set, returning how many were not already present.
    pub fn append<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
    {
        dispatch!(self, set => set.append(keys))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        dispatch!(self, set => set.clear())
    }

    /// Removes `keys` from the set. Absent keys are ignored.
    pub fn remove<'k, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
    {
        dispatch!(self, set => set.remove(keys))
    }

    /// Removes and returns an arbitrary key, or `None` if the set is empty.
    ///
    /// The ordered kinds remove the smallest key.
    pub fn pop(&mut self) -> Option<K> {
        dispatch!(self, set => set.pop())
    }

    /// Calls `f` on every key until `f` returns `false`.
    pub fn each<F>(&self, f: F)
    where
        F: FnMut(&K) -> bool,
    {
        dispatch!(self, set => set.each(f))
    }

    /// Copies every key into a `Vec`, in iteration order.
    pub fn to_vec(&self) -> Vec<K> {
        dispatch!(self, set => set.to_vec())
    }

    /// Returns a new set of the same kind with the keys of `self` that are not in `other`.
    pub fn difference(&self, other: &dyn KeySet<K>) -> Self {
        derive_same_kind!(self, set => set.difference(other))
    }

    /// Returns a new set of the same kind with the keys in both `self` and `other`.
    pub fn intersect(&self, other: &dyn KeySet<K>) -> Self {
        derive_same_kind!(self, set => set.intersect(other))
    }

    /// Returns a new set of the same kind with the keys in exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &dyn KeySet<K>) -> Self {
        derive_same_kind!(self, set => set.symmetric_difference(other))
    }

    /// Returns a new set of the same kind with the keys of both `self` and `other`.
    pub fn union(&self, other: &dyn KeySet<K>) -> Self {
        derive_same_kind!(self, set => set.union(other))
    }
}

impl<K> KeySet<K> for AnyKeySet<K>
where
    K: Clone + Hash + Ord,
{
    fn len(&self) -> usize {
        dispatch!(self, set => set.len())
    }

    fn contains_key(&self, key: &K) -> bool {
        dispatch!(self, set => set.contains_key(key))
    }

    fn each_key(&self, f: &mut dyn FnMut(&K) -> bool) {
        dispatch!(self, set => set.each_key(f))
    }

    fn equal(&self, other: &dyn KeySet<K>) -> bool {
        dispatch!(self, set => set.equal(other))
    }

    fn is_subset(&self, other: &dyn KeySet<K>) -> bool {
        dispatch!(self, set => set.is_subset(other))
    }

    fn is_superset(&self, other: &dyn KeySet<K>) -> bool {
        dispatch!(self, set => set.is_superset(other))
    }
}

impl<K> Debug for AnyKeySet<K>
where
    K: Clone + Hash + Ord + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        dispatch!(self, set => Debug::fmt(set, f))
    }
}

/// A shared handle to an [`AnyKeySet`] of a synchronized kind.
///
/// Returned by [`AnyKeySet::synced`]. Every operation takes the set's lock for its own duration, as
/// the methods of [`Synced`](crate::Synced) do.
pub enum SyncKeySetRef<'a, K> {
    /// See [`StoreKind::HashMap`].
    HashMap(&'a SyncHashKeySet<K>),
    /// See [`StoreKind::TreeMap`].
    TreeMap(&'a SyncTreeKeySet<K>),
}

impl<K> Clone for SyncKeySetRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for SyncKeySetRef<'_, K> {}

impl<K> SyncKeySetRef<'_, K>
where
    K: Clone + Hash + Ord,
{
    /// The kind of the underlying set.
    pub fn kind(&self) -> StoreKind {
        match self {
            Self::HashMap(_) => StoreKind::HashMap,
            Self::TreeMap(_) => StoreKind::TreeMap,
        }
    }

    /// Adds `keys` to the set, returning how many were not already present.
    pub fn append<I>(&self, keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
    {
        dispatch_synced!(self, set => set.append(keys))
    }

    /// Removes every element.
    pub fn clear(&self) {
        dispatch_synced!(self, set => set.clear())
    }

    /// Removes `keys` from the set. Absent keys are ignored.
    pub fn remove<'k, I>(&self, keys: I)
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
    {
        dispatch_synced!(self, set => set.remove(keys))
    }

    /// Removes and returns an arbitrary key, or `None` if the set is empty.
    pub fn pop(&self) -> Option<K> {
        dispatch_synced!(self, set => set.pop())
    }

    /// Calls `f` on every key until `f` returns `false`, holding the read lock throughout.
    pub fn each<F>(&self, f: F)
    where
        F: FnMut(&K) -> bool,
    {
        dispatch_synced!(self, set => set.each(f))
    }

    /// Copies every key into a `Vec`, in iteration order.
    pub fn to_vec(&self) -> Vec<K> {
        dispatch_synced!(self, set => set.to_vec())
    }
}

impl<K> KeySet<K> for SyncKeySetRef<'_, K>
where
    K: Clone + Hash + Ord,
{
    fn len(&self) -> usize {
        dispatch_synced!(self, set => set.len())
    }

    fn contains_key(&self, key: &K) -> bool {
        dispatch_synced!(self, set => set.contains_key(key))
    }

    fn each_key(&self, f: &mut dyn FnMut(&K) -> bool) {
        dispatch_synced!(self, set => set.each_key(f))
    }

    fn equal(&self, other: &dyn KeySet<K>) -> bool {
        dispatch_synced!(self, set => set.equal(other))
    }

    fn is_subset(&self, other: &dyn KeySet<K>) -> bool {
        dispatch_synced!(self, set => set.is_subset(other))
    }

    fn is_superset(&self, other: &dyn KeySet<K>) -> bool {
        dispatch_synced!(self, set => set.is_superset(other))
    }
}

impl<K> Debug for SyncKeySetRef<'_, K>
where
    K: Clone + Hash + Ord + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        dispatch_synced!(self, set => Debug::fmt(set, f))
    }
}

/// A key-value set whose [`StoreKind`] is chosen at runtime.
///
/// See [`AnyKeySet`]. Sets of a synchronized kind hand out a [`SyncKeyValueSetRef`] from
/// [`synced`](AnyKeyValueSet::synced) for mutation through a shared reference.
#[derive(Clone)]
pub enum AnyKeyValueSet<K, V> {
    /// See [`StoreKind::HashMap`].
    HashMap(SyncHashKeyValueSet<K, V>),
    /// See [`StoreKind::HashMapUnsync`].
    HashMapUnsync(HashKeyValueSet<K, V>),
    /// See [`StoreKind::TreeMap`].
    TreeMap(SyncTreeKeyValueSet<K, V>),
    /// See [`StoreKind::TreeMapUnsync`].
    TreeMapUnsync(TreeKeyValueSet<K, V>),
}

impl<K, V> AnyKeyValueSet<K, V>
where
    K: Clone + Hash + Ord,
    V: Clone,
{
    /// Creates an empty set of the given kind that keys its values with `selector`.
    pub fn new<F>(kind: StoreKind, selector: F) -> Self
    where
        F: Fn(&V) -> K + Send + Sync + 'static,
    {
        Self::with_selector(kind, Selector::new(selector))
    }

    /// Creates an empty set of the given kind that keys its values with `selector`.
    pub fn with_selector(kind: StoreKind, selector: Selector<K, V>) -> Self {
        log::debug!("building {} key-value set", kind);
        match kind {
            StoreKind::HashMap => Self::HashMap(SyncHashKeyValueSet::with_selector(selector)),
            StoreKind::HashMapUnsync => {
                Self::HashMapUnsync(HashKeyValueSet::with_selector(selector))
            }
            StoreKind::TreeMap => Self::TreeMap(SyncTreeKeyValueSet::with_selector(selector)),
            StoreKind::TreeMapUnsync => {
                Self::TreeMapUnsync(TreeKeyValueSet::with_selector(selector))
            }
        }
    }

    /// Creates a set of the given kind from `values`, keyed by `selector`.
    ///
    /// When several values share a key the last one wins.
    pub fn from_values<F, I>(kind: StoreKind, selector: F, values: I) -> Self
    where
        F: Fn(&V) -> K + Send + Sync + 'static,
        I: IntoIterator<Item = V>,
    {
        let mut set = Self::new(kind, selector);
        set.append(values);
        set
    }

    /// Creates an empty set of the kind called `name`, keyed by `selector`.
    ///
    /// Fails without building anything if `name` is not the name of a [`StoreKind`].
    pub fn from_kind_name<F>(name: &str, selector: F) -> Result<Self, UnknownStoreKind>
    where
        F: Fn(&V) -> K + Send + Sync + 'static,
    {
        Ok(Self::new(name.parse()?, selector))
    }

    /// The kind of this set.
    pub fn kind(&self) -> StoreKind {
        match self {
            Self::HashMap(_) => StoreKind::HashMap,
            Self::HashMapUnsync(_) => StoreKind::HashMapUnsync,
            Self::TreeMap(_) => StoreKind::TreeMap,
            Self::TreeMapUnsync(_) => StoreKind::TreeMapUnsync,
        }
    }

    /// Returns the set's selector.
    pub fn selector(&self) -> Selector<K, V> {
        match self {
            Self::HashMap(set) => set.selector(),
            Self::TreeMap(set) => set.selector(),
            Self::HashMapUnsync(set) => set.selector().clone(),
            Self::TreeMapUnsync(set) => set.selector().clone(),
        }
    }

    /// Returns a handle that mutates this set through a shared reference, or `None` if the set's
    /// kind is not synchronized.
    pub fn synced(&self) -> Option<SyncKeyValueSetRef<'_, K, V>> {
        match self {
            Self::HashMap(set) => Some(SyncKeyValueSetRef::HashMap(set)),
            Self::TreeMap(set) => Some(SyncKeyValueSetRef::TreeMap(set)),
            Self::HashMapUnsync(_) | Self::TreeMapUnsync(_) => None,
        }
    }

    /// Upserts `values`, returning how many keys were not already present.
    pub fn append<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = V>,
    {
        dispatch!(self, set => set.append(values))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        dispatch!(self, set => set.clear())
    }

    /// Removes the elements sharing a key with any of `values`.
    pub fn remove<'v, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
    {
        dispatch!(self, set => set.remove(values))
    }

    /// Removes the elements stored under any of `keys`.
    pub fn remove_keys<'k, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
    {
        dispatch!(self, set => set.remove_keys(keys))
    }

    /// Removes and returns an arbitrary value, or `None` if the set is empty.
    pub fn pop(&mut self) -> Option<V> {
        dispatch!(self, set => set.pop())
    }

    /// Returns a copy of the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<V> {
        match self {
            Self::HashMap(set) => set.get(key),
            Self::TreeMap(set) => set.get(key),
            Self::HashMapUnsync(set) => set.get(key).cloned(),
            Self::TreeMapUnsync(set) => set.get(key).cloned(),
        }
    }

    /// Calls `f` on every value until `f` returns `false`.
    pub fn each<F>(&self, f: F)
    where
        F: FnMut(&V) -> bool,
    {
        dispatch!(self, set => set.each(f))
    }

    /// Copies every value into a `Vec`, in iteration order.
    pub fn to_vec(&self) -> Vec<V> {
        dispatch!(self, set => set.to_vec())
    }

    /// See [`KeyValueSet::difference`](crate::KeyValueSet::difference).
    pub fn difference(&self, other: &dyn KeySet<K>) -> Self {
        derive_same_kind!(self, set => set.difference(other))
    }

    /// See [`KeyValueSet::intersect`](crate::KeyValueSet::intersect).
    pub fn intersect(&self, other: &dyn KeySet<K>) -> Self {
        derive_same_kind!(self, set => set.intersect(other))
    }

    /// See [`KeyValueSet::symmetric_difference`](crate::KeyValueSet::symmetric_difference).
    pub fn symmetric_difference(&self, other: &dyn ValueSet<K, V>) -> Self {
        derive_same_kind!(self, set => set.symmetric_difference(other))
    }

    /// See [`KeyValueSet::union`](crate::KeyValueSet::union).
    pub fn union(&self, other: &dyn ValueSet<K, V>) -> Self {
        derive_same_kind!(self, set => set.union(other))
    }
}

impl<K, V> KeySet<K> for AnyKeyValueSet<K, V>
where
    K: Clone + Hash + Ord,
    V: Clone,
{
    fn len(&self) -> usize {
        dispatch!(self, set => set.len())
    }

    fn contains_key(&self, key: &K) -> bool {
        dispatch!(self, set => set.contains_key(key))
    }

    fn each_key(&self, f: &mut dyn FnMut(&K) -> bool) {
        dispatch!(self, set => set.each_key(f))
    }

    fn equal(&self, other: &dyn KeySet<K>) -> bool {
        dispatch!(self, set => set.equal(other))
    }

    fn is_subset(&self, other: &dyn KeySet<K>) -> bool {
        dispatch!(self, set => set.is_subset(other))
    }

    fn is_superset(&self, other: &dyn KeySet<K>) -> bool {
        dispatch!(self, set => set.is_superset(other))
    }
}

impl<K, V> ValueSet<K, V> for AnyKeyValueSet<K, V>
where
    K: Clone + Hash + Ord,
    V: Clone,
{
    fn select(&self, value: &V) -> K {
        dispatch!(self, set => set.select(value))
    }

    fn each_value(&self, f: &mut dyn FnMut(&V) -> bool) {
        dispatch!(self, set => set.each_value(f))
    }
}

impl<K, V> Debug for AnyKeyValueSet<K, V>
where
    K: Clone + Hash + Ord,
    V: Clone + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        dispatch!(self, set => Debug::fmt(set, f))
    }
}

/// A shared handle to an [`AnyKeyValueSet`] of a synchronized kind.
///
/// Returned by [`AnyKeyValueSet::synced`]. See [`SyncKeySetRef`].
pub enum SyncKeyValueSetRef<'a, K, V> {
    /// See [`StoreKind::HashMap`].
    HashMap(&'a SyncHashKeyValueSet<K, V>),
    /// See [`StoreKind::TreeMap`].
    TreeMap(&'a SyncTreeKeyValueSet<K, V>),
}

impl<K, V> Clone for SyncKeyValueSetRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for SyncKeyValueSetRef<'_, K, V> {}

impl<K, V> SyncKeyValueSetRef<'_, K, V>
where
    K: Clone + Hash + Ord,
    V: Clone,
{
    /// The kind of the underlying set.
    pub fn kind(&self) -> StoreKind {
        match self {
            Self::HashMap(_) => StoreKind::HashMap,
            Self::TreeMap(_) => StoreKind::TreeMap,
        }
    }

    /// Upserts `values`, returning how many keys were not already present.
    pub fn append<I>(&self, values: I) -> usize
    where
        I: IntoIterator<Item = V>,
    {
        dispatch_synced!(self, set => set.append(values))
    }

    /// Removes every element.
    pub fn clear(&self) {
        dispatch_synced!(self, set => set.clear())
    }

    /// Removes the elements sharing a key with any of `values`.
    pub fn remove<'v, I>(&self, values: I)
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
    {
        dispatch_synced!(self, set => set.remove(values))
    }

    /// Removes the elements stored under any of `keys`.
    pub fn remove_keys<'k, I>(&self, keys: I)
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
    {
        dispatch_synced!(self, set => set.remove_keys(keys))
    }

    /// Removes and returns an arbitrary value, or `None` if the set is empty.
    pub fn pop(&self) -> Option<V> {
        dispatch_synced!(self, set => set.pop())
    }

    /// Returns a copy of the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<V> {
        dispatch_synced!(self, set => set.get(key))
    }

    /// Calls `f` on every value until `f` returns `false`, holding the read lock throughout.
    pub fn each<F>(&self, f: F)
    where
        F: FnMut(&V) -> bool,
    {
        dispatch_synced!(self, set => set.each(f))
    }

    /// Copies every value into a `Vec`, in iteration order.
    pub fn to_vec(&self) -> Vec<V> {
        dispatch_synced!(self, set => set.to_vec())
    }
}

impl<K, V> KeySet<K> for SyncKeyValueSetRef<'_, K, V>
where
    K: Clone + Hash + Ord,
    V: Clone,
{
    fn len(&self) -> usize {
        dispatch_synced!(self, set => set.len())
    }

    fn contains_key(&self, key: &K) -> bool {
        dispatch_synced!(self, set => set.contains_key(key))
    }

    fn each_key(&self, f: &mut dyn FnMut(&K) -> bool) {
        dispatch_synced!(self, set => set.each_key(f))
    }
}

impl<K, V> ValueSet<K, V> for SyncKeyValueSetRef<'_, K, V>
where
    K: Clone + Hash + Ord,
    V: Clone,
{
    fn select(&self, value: &V) -> K {
        dispatch_synced!(self, set => set.select(value))
    }

    fn each_value(&self, f: &mut dyn FnMut(&V) -> bool) {
        dispatch_synced!(self, set => set.each_value(f))
    }
}

impl<K, V> Debug for SyncKeyValueSetRef<'_, K, V>
where
    K: Clone + Hash + Ord,
    V: Clone + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        dispatch_synced!(self, set => Debug::fmt(set, f))
    }
}
