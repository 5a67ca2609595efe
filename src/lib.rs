//! Sets addressed by key, with set algebra, over hash or ordered storage.
//!
//! This crate provides two kinds of set, each of which can be backed by a hash table or by an
//! ordered tree, and each of which can be wrapped in a reader/writer lock to be shared between
//! threads:
//!
//!  - [`KeyOnlySet`]: a set whose elements are the keys themselves.
//!  - [`KeyValueSet`]: a set of values, unique by a key that a [`Selector`] derives from each
//!    value. Inserting a value whose key is already present replaces the stored value.
//!
//! Both support the usual set algebra (`union`, `intersect`, `difference`,
//! `symmetric_difference`), which always produces a new set and never modifies its operands, and
//! the set relations (`is_subset`, `is_proper_superset`, `equal`, ...).
//!
//! # Mixing sets
//!
//! The relations and the binary operations accept any set sharing the key type through the
//! object-safe [`KeySet`] trait, whatever its value type, backing store or locking mode. For
//! example, a set of users keyed by id can be intersected with a plain set of ids:
//!
//! ```
//! use kset::{HashKeyValueSet, KeySet, TreeKeySet};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! let users = HashKeyValueSet::from_values(
//!     |u: &User| u.id,
//!     [
//!         User { id: 1, name: "Alice" },
//!         User { id: 2, name: "Bob" },
//!         User { id: 3, name: "Carol" },
//!     ],
//! );
//! let banned: TreeKeySet<u32> = [2, 7].into_iter().collect();
//!
//! let allowed = users.difference(&banned);
//! assert_eq!(allowed.len(), 2);
//! assert!(!allowed.contains_key(&2));
//! assert!(users.intersects(&banned));
//! ```
//!
//! [`KeyValueSet::union`] and [`KeyValueSet::symmetric_difference`] copy values out of their
//! operand, so they take a [`ValueSet`] instead.
//!
//! # Storage
//!
//! A set's backing [`Storage`] is a type parameter. [`HashStore`] is an unordered hash table
//! hashing with [`DefaultHashBuilder`] unless configured otherwise; [`TreeStore`] is an ordered
//! tree that iterates in ascending key order. The type aliases [`HashKeySet`], [`TreeKeySet`],
//! [`HashKeyValueSet`] and [`TreeKeyValueSet`] name the common combinations.
//!
//! Sets derived from another set (by cloning or by a binary operation) use the same kind of
//! storage as the set the method was called on, and a key-value set passes its selector on to
//! every set derived from it.
//!
//! # Concurrency
//!
//! The plain sets do no locking and follow the usual borrowing rules. To share a set between
//! threads and mutate it through a shared reference, wrap it in [`Synced`], which guards it with a
//! reader/writer lock. See its documentation for the deadlock hazards that come with the lock.
//!
//! With the `rayon` feature enabled, synchronized sets can also be extended from parallel
//! iterators.
//!
//! # Choosing a store at runtime
//!
//! When the store and locking mode come from configuration, parse a [`StoreKind`] and build an
//! [`AnyKeySet`] or [`AnyKeyValueSet`]. An unrecognized name is rejected with
//! [`UnknownStoreKind`] before any set is built.

mod iter;
mod key_only;
mod key_value;
mod kind;
mod selector;
mod set;
mod storage;
mod sync;

#[cfg(feature = "rayon")]
mod rayon_impls;

pub use iter::{Keys, Values};
pub use key_only::{HashKeySet, KeyOnlySet, TreeKeySet};
pub use key_value::{HashKeyValueSet, KeyValueSet, TreeKeyValueSet};
pub use kind::{
    AnyKeySet, AnyKeyValueSet, StoreKind, SyncKeySetRef, SyncKeyValueSetRef, UnknownStoreKind,
};
pub use selector::Selector;
pub use set::{KeySet, ValueSet};
pub use storage::{HashStore, Storage, TreeStore};
pub use sync::{
    SyncHashKeySet, SyncHashKeyValueSet, SyncTreeKeySet, SyncTreeKeyValueSet, Synced, SyncedRef,
};

/// Default hasher for [`HashStore`].
pub type DefaultHashBuilder = ahash::RandomState;
