use crate::storage::Storage;
use std::fmt::{self, Debug, Formatter};

/// An iterator over a set's keys.
///
/// See [`KeyOnlySet::iter`](crate::KeyOnlySet::iter) and
/// [`KeyValueSet::keys`](crate::KeyValueSet::keys) for details.
pub struct Keys<'a, K: 'a, V: 'a, S: Storage<K, V> + 'a> {
    pub(crate) inner: S::Iter<'a>,
}

impl<'a, K: 'a, V: 'a, S: Storage<K, V> + 'a> Iterator for Keys<'a, K, V, S> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K: 'a, V: 'a, S: Storage<K, V> + 'a> Debug for Keys<'a, K, V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys").finish_non_exhaustive()
    }
}

/// An iterator over a set's values.
///
/// See [`KeyValueSet::iter`](crate::KeyValueSet::iter) for details.
pub struct Values<'a, K: 'a, V: 'a, S: Storage<K, V> + 'a> {
    pub(crate) inner: S::Iter<'a>,
}

impl<'a, K: 'a, V: 'a, S: Storage<K, V> + 'a> Iterator for Values<'a, K, V, S> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K: 'a, V: 'a, S: Storage<K, V> + 'a> Debug for Values<'a, K, V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::{HashKeyValueSet, TreeKeyValueSet};
    use std::collections::HashSet;

    #[test]
    fn keys() {
        let set = HashKeyValueSet::from_values(|v: &(u8, char)| v.0, [(1, 'a'), (2, 'b')]);
        assert_eq!(set.keys().collect::<HashSet<_>>(), HashSet::from([&1, &2]));
    }

    #[test]
    fn values() {
        let set = TreeKeyValueSet::from_values(|v: &(u8, char)| v.0, [(2, 'b'), (1, 'a')]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![&(1, 'a'), &(2, 'b')]);
        assert_eq!(set.iter().size_hint(), (2, Some(2)));
    }
}
