use super::Storage;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt::{self, Debug, Formatter};

/// A [`Storage`] backed by an ordered, balanced search tree.
///
/// | Operation | Average    | Worst case |
/// |-----------|------------|------------|
/// | search    | _O(log n)_ | _O(log n)_ |
/// | insert    | _O(log n)_ | _O(log n)_ |
/// | delete    | _O(log n)_ | _O(log n)_ |
///
/// Keys must be totally ordered. Iteration yields entries in strictly ascending key order, and the
/// order is stable across calls as long as the store is not mutated in between.
///
/// # Examples
///
/// ```
/// use kset::{Storage, TreeStore};
///
/// let mut store = TreeStore::new();
/// store.upsert(3, 'c');
/// store.upsert(1, 'a');
/// store.upsert(2, 'b');
///
/// let keys: Vec<_> = store.iter().map(|(k, _)| *k).collect();
/// assert_eq!(keys, [1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct TreeStore<K, V> {
    map: BTreeMap<K, V>,
}

impl<K, V> TreeStore<K, V> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
}

impl<K, V> Default for TreeStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Storage<K, V> for TreeStore<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    type Iter<'a> = btree_map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn new_like(&self, _capacity: usize) -> Self {
        Self::new()
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
        self.map.remove(key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.map.iter()
    }

    /// Removes the smallest key.
    fn pop(&mut self) -> Option<(K, V)> {
        self.map.pop_first()
    }
}

impl<K, V> Debug for TreeStore<K, V>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}
