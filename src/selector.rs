use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

/// The projection from a value to the key that identifies it within a set.
///
/// A selector is supplied once, when a [`KeyValueSet`](crate::KeyValueSet) is built, and is
/// carried by every set derived from it (clones, differences, intersections, unions, ...). It is
/// invoked again on every insertion, so it must be referentially stable: calling it twice on the
/// same value must yield the same key.
///
/// Cloning a `Selector` is cheap; all clones share the same function.
///
/// # Examples
///
/// ```
/// use kset::Selector;
///
/// struct User { id: u32, name: &'static str }
///
/// let by_id = Selector::new(|u: &User| u.id);
/// assert_eq!(by_id.select(&User { id: 7, name: "Ann" }), 7);
/// ```
pub struct Selector<K, V> {
    f: Arc<dyn Fn(&V) -> K + Send + Sync>,
}

impl<K, V> Selector<K, V> {
    /// Wraps `f` as a selector.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&V) -> K + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Derives the key of `value`.
    #[inline]
    pub fn select(&self, value: &V) -> K {
        (self.f)(value)
    }

    /// Derives the keys of all `values`, in order.
    pub fn select_all<'v, I>(&self, values: I) -> Vec<K>
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
    {
        values.into_iter().map(|v| self.select(v)).collect()
    }
}

impl<K> Selector<K, K>
where
    K: Clone + 'static,
{
    /// A selector that uses the value itself as its key.
    pub fn identity() -> Self {
        Self::new(K::clone)
    }
}

impl<K, V> Clone for Selector<K, V> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<K, V> Debug for Selector<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Selector(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all() {
        let double = Selector::new(|v: &i32| v * 2);
        assert_eq!(double.select_all(&[1, 2, 3]), vec![2, 4, 6]);
    }

    #[test]
    fn clones_share_function() {
        let len = Selector::new(|s: &String| s.len());
        let clone = len.clone();
        assert_eq!(clone.select(&"four".to_string()), 4);
        assert!(Arc::ptr_eq(&len.f, &clone.f));
    }

    #[test]
    fn identity() {
        let id = Selector::<&str, &str>::identity();
        assert_eq!(id.select(&"x"), "x");
    }
}
