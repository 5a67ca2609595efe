use super::Storage;
use indexmap::{map, IndexMap};
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash};

/// A [`Storage`] backed by a hash table.
///
/// | Operation | Average | Worst case |
/// |-----------|---------|------------|
/// | search    | _O(1)_  | _O(n)_     |
/// | insert    | _O(1)_  | _O(n)_     |
/// | delete    | _O(1)_  | _O(n)_     |
/// | pop       | _O(1)_  | _O(n)_     |
///
/// Iteration order is unspecified and may differ between two stores holding the same entries.
/// Entries live in a dense array next to the hash index, so removing one moves the last entry into
/// its slot and [`pop`](Storage::pop) takes from the end without scanning.
///
/// # Examples
///
/// ```
/// use kset::{HashStore, Storage};
///
/// let mut store = HashStore::new();
/// assert_eq!(store.upsert(1, "a"), None);
/// assert_eq!(store.upsert(1, "b"), Some("a"));
/// assert_eq!(store.get(&1), Some(&"b"));
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Clone)]
pub struct HashStore<K, V, S = crate::DefaultHashBuilder> {
    map: IndexMap<K, V, S>,
}

impl<K, V> HashStore<K, V, crate::DefaultHashBuilder> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store able to hold at least `capacity` entries without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, crate::DefaultHashBuilder::default())
    }
}

impl<K, V, S> Default for HashStore<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> HashStore<K, V, S> {
    /// Creates an empty store which will use `hash_builder` to hash keys.
    ///
    /// Warning: `hash_builder` is normally randomly generated, and is designed to allow the store
    /// to be resistant to attacks that cause many collisions and very poor performance. Setting
    /// it manually using this function can expose a DoS attack vector.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            map: IndexMap::with_hasher(hash_builder),
        }
    }

    /// Creates an empty store with the specified `capacity`, using `hash_builder` to hash keys.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            map: IndexMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns a reference to the store's [`BuildHasher`].
    pub fn hasher(&self) -> &S {
        self.map.hasher()
    }
}

impl<K, V, S> Storage<K, V> for HashStore<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher + Clone,
{
    type Iter<'a> = map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn new_like(&self, capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, self.map.hasher().clone())
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    fn clear(&mut self) {
        self.map.clear();
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    #[inline]
    fn upsert(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    #[inline]
    fn delete(&mut self, key: &K) -> Option<V> {
        self.map.swap_remove(key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.map.iter()
    }

    fn pop(&mut self) -> Option<(K, V)> {
        self.map.pop()
    }
}

impl<K, V, S> Debug for HashStore<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}
