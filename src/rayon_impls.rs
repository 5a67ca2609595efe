use crate::key_only::KeyOnlySet;
use crate::key_value::KeyValueSet;
use crate::storage::Storage;
use crate::sync::Synced;
use rayon::iter::{FromParallelIterator, IntoParallelIterator, ParallelExtend, ParallelIterator};

impl<K, S> ParallelExtend<K> for Synced<KeyOnlySet<K, S>>
where
    K: Clone + Send + Sync,
    S: Storage<K, ()> + Send + Sync,
{
    // The `&mut self` receiver makes this of limited use. See `par_append`.
    fn par_extend<I>(&mut self, par_iter: I)
    where
        I: IntoParallelIterator<Item = K>,
    {
        self.par_append(par_iter);
    }
}

impl<K, S> Synced<KeyOnlySet<K, S>>
where
    K: Clone + Send + Sync,
    S: Storage<K, ()> + Send + Sync,
{
    /// Adds the keys produced by `par_iter` from rayon's worker threads, returning how many were
    /// not already present.
    ///
    /// Each worker gathers a batch of keys and appends it under a single write lock.
    pub fn par_append<I>(&self, par_iter: I) -> usize
    where
        I: IntoParallelIterator<Item = K>,
    {
        par_iter
            .into_par_iter()
            .fold(Vec::new, |mut batch, key| {
                batch.push(key);
                batch
            })
            .map(|batch| self.append(batch))
            .sum()
    }
}

impl<K, S> FromParallelIterator<K> for Synced<KeyOnlySet<K, S>>
where
    K: Clone + Send + Sync,
    S: Storage<K, ()> + Default + Send + Sync,
{
    fn from_par_iter<I>(par_iter: I) -> Self
    where
        I: IntoParallelIterator<Item = K>,
    {
        let created_set = Self::new();
        created_set.par_append(par_iter);
        created_set
    }
}

impl<K, V, S> ParallelExtend<V> for Synced<KeyValueSet<K, V, S>>
where
    K: Clone + Send + Sync,
    V: Clone + Send + Sync,
    S: Storage<K, V> + Send + Sync,
{
    // The `&mut self` receiver makes this of limited use. See `par_append`.
    fn par_extend<I>(&mut self, par_iter: I)
    where
        I: IntoParallelIterator<Item = V>,
    {
        self.par_append(par_iter);
    }
}

impl<K, V, S> Synced<KeyValueSet<K, V, S>>
where
    K: Clone + Send + Sync,
    V: Clone + Send + Sync,
    S: Storage<K, V> + Send + Sync,
{
    /// Upserts the values produced by `par_iter` from rayon's worker threads, returning how many
    /// keys were not already present.
    ///
    /// When several values share a key, which one ends up stored is unspecified.
    pub fn par_append<I>(&self, par_iter: I) -> usize
    where
        I: IntoParallelIterator<Item = V>,
    {
        par_iter
            .into_par_iter()
            .fold(Vec::new, |mut batch, value| {
                batch.push(value);
                batch
            })
            .map(|batch| self.append(batch))
            .sum()
    }
}

#[cfg(test)]
mod test {
    use crate::{KeySet, SyncHashKeySet, SyncTreeKeySet, SyncTreeKeyValueSet};
    use rayon::iter::{FromParallelIterator, IntoParallelIterator, ParallelExtend, ParallelIterator};

    #[test]
    fn parallel_extend_by_nothing() {
        let to_extend_with: Vec<i32> = Vec::new();

        let mut set = SyncHashKeySet::new();
        set.append([1, 3]);

        set.par_extend(to_extend_with.into_par_iter());

        assert_eq!(set.len(), 2);
        assert!(set.contains_keys(&[1, 3]));
    }

    #[test]
    fn parallel_extend_by_a_bunch() {
        let mut to_extend_with = Vec::new();
        for i in 0..100 {
            to_extend_with.push(i + 100);
        }

        let mut set = SyncHashKeySet::new();
        set.append([1, 3]);

        set.par_extend(to_extend_with.into_par_iter());
        assert_eq!(set.len(), 102);

        assert!(set.contains_keys(&[1, 3, 100, 199]));
    }

    #[test]
    fn par_append_counts_new_keys() {
        let set = SyncTreeKeySet::new();
        set.append([0, 1, 2]);
        assert_eq!(set.par_append((0..1000).into_par_iter()), 997);
        assert_eq!(set.to_vec(), (0..1000).collect::<Vec<_>>());
    }

    #[test]
    fn from_empty_parallel_iter() {
        let to_create_from: Vec<i32> = Vec::new();
        let created_set = SyncHashKeySet::from_par_iter(to_create_from.into_par_iter());
        assert_eq!(created_set.len(), 0);
    }

    #[test]
    fn from_large_parallel_iter() {
        let mut to_create_from: Vec<i32> = Vec::new();
        for i in 0..100 {
            to_create_from.push(i + 100);
        }
        let created_set = SyncTreeKeySet::from_par_iter(to_create_from.into_par_iter());
        assert_eq!(created_set.len(), 100);
        assert_eq!(created_set.pop(), Some(100));
    }

    #[test]
    fn key_value_parallel_extend() {
        let mut set = SyncTreeKeyValueSet::new(|v: &(u32, u32)| v.0);
        set.par_extend((0..100u32).into_par_iter().map(|i| (i % 10, i)));
        assert_eq!(set.len(), 10);
        set.each(|&(k, v)| {
            assert_eq!(v % 10, k);
            true
        });
    }
}
