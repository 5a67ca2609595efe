use kset::*;

#[derive(Clone, Debug, PartialEq, Eq)]
struct User {
    id: u32,
    name: String,
}

fn user(id: u32, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
    }
}

fn users(kind: StoreKind, values: impl IntoIterator<Item = User>) -> AnyKeyValueSet<u32, User> {
    AnyKeyValueSet::from_values(kind, |u: &User| u.id, values)
}

fn sorted_ids(set: &AnyKeyValueSet<u32, User>) -> Vec<u32> {
    let mut ids: Vec<_> = set.to_vec().into_iter().map(|u| u.id).collect();
    ids.sort_unstable();
    ids
}

#[test]
fn last_upsert_wins() {
    let _ = env_logger::builder().is_test(true).try_init();
    for kind in StoreKind::ALL {
        let set = users(kind, [user(1, "first"), user(1, "second")]);
        assert_eq!(set.len(), 1, "{}", kind);
        assert_eq!(set.to_vec(), [user(1, "second")], "{}", kind);
    }
}

#[test]
fn append_existing_id_overwrites() {
    for kind in StoreKind::ALL {
        let mut set = users(kind, [user(1, "Alice"), user(2, "Bob")]);
        assert_eq!(set.append([user(1, "Alice Smith")]), 0, "{}", kind);
        assert_eq!(set.len(), 2, "{}", kind);
        assert_eq!(set.get(&1), Some(user(1, "Alice Smith")), "{}", kind);

        assert_eq!(set.append([user(2, "Bob"), user(3, "Carol")]), 1, "{}", kind);
        assert_eq!(set.len(), 3, "{}", kind);
    }
}

#[test]
fn contains_by_value() {
    for kind in StoreKind::ALL {
        let set = users(kind, [user(1, "Alice"), user(2, "Bob")]);
        // only the key matters
        assert!(set.contains(&[user(1, "someone else")]), "{}", kind);
        assert!(set.contains(&[user(1, ""), user(2, "")]), "{}", kind);
        assert!(!set.contains(&[user(1, ""), user(3, "")]), "{}", kind);
        assert!(set.contains_any(&[user(9, ""), user(2, "")]), "{}", kind);
        assert!(!set.contains_any(&[]), "{}", kind);
        assert!(set.contains_keys(&[1, 2]), "{}", kind);
    }
}

#[test]
fn remove() {
    for kind in StoreKind::ALL {
        let mut set = users(kind, [user(1, "a"), user(2, "b"), user(3, "c")]);
        set.remove(&[user(2, "whatever"), user(7, "absent")]);
        assert_eq!(sorted_ids(&set), [1, 3], "{}", kind);
        set.remove_keys(&[1]);
        assert_eq!(set.to_vec(), [user(3, "c")], "{}", kind);
    }
}

#[test]
fn pop() {
    for kind in StoreKind::ALL {
        let mut set = users(kind, [user(1, "a")]);
        assert_eq!(set.pop(), Some(user(1, "a")), "{}", kind);
        assert_eq!(set.pop(), None, "{}", kind);
        assert!(set.is_empty(), "{}", kind);
    }
}

#[test]
fn derived_sets_keep_selector() {
    for kind in StoreKind::ALL {
        let set = users(kind, [user(1, "a"), user(2, "b")]);
        let ids = AnyKeySet::with_keys(kind, [2]);

        let derived = [
            set.clone(),
            set.difference(&ids),
            set.intersect(&ids),
            set.symmetric_difference(&set),
            set.union(&set),
        ];
        for mut d in derived {
            let before = d.len();
            // a selector-less derived set could not key these
            assert_eq!(d.append([user(5, "x"), user(5, "y")]), 1, "{}", kind);
            assert_eq!(d.len(), before + 1, "{}", kind);
            assert_eq!(d.get(&5), Some(user(5, "y")), "{}", kind);
            assert_eq!(d.select(&user(8, "")), 8, "{}", kind);
        }
    }
}

#[test]
fn clone_matches_original_on_append() {
    for kind in StoreKind::ALL {
        let mut original = users(kind, [user(1, "a")]);
        let mut clone = original.clone();
        let value = user(1, "replaced");
        assert_eq!(original.append([value.clone()]), clone.append([value]));
        assert_eq!(original.to_vec(), clone.to_vec(), "{}", kind);
    }
}

#[test]
fn binary_operations() {
    for kind in StoreKind::ALL {
        let a = users(kind, [user(1, "a1"), user(2, "a2")]);
        let b = users(kind, [user(2, "b2"), user(3, "b3")]);

        let union = a.union(&b);
        assert_eq!(sorted_ids(&union), [1, 2, 3], "{}", kind);
        assert_eq!(union.get(&2), Some(user(2, "b2")), "{}", kind);

        let inter = a.intersect(&b);
        assert_eq!(inter.to_vec(), [user(2, "a2")], "{}", kind);

        assert_eq!(a.difference(&b).to_vec(), [user(1, "a1")], "{}", kind);

        let sym = a.symmetric_difference(&b);
        assert_eq!(sorted_ids(&sym), [1, 3], "{}", kind);
        assert_eq!(sym.get(&3), Some(user(3, "b3")), "{}", kind);
    }
}

#[test]
fn against_key_only_sets() {
    let set = TreeKeyValueSet::from_values(|u: &User| u.id, [user(1, "a"), user(2, "b")]);
    let ids: HashKeySet<u32> = [1, 2].into_iter().collect();

    assert!(set.equal(&ids));
    assert!(ids.equal(&set));
    assert!(set.difference(&ids).is_empty());

    let one: HashKeySet<u32> = [1].into_iter().collect();
    assert!(one.is_proper_subset(&set));
    assert_eq!(set.intersect(&one).to_vec(), [user(1, "a")]);
}

#[test]
fn iterators() {
    let set = TreeKeyValueSet::from_values(|u: &User| u.id, [user(2, "b"), user(1, "a")]);
    assert_eq!(set.keys().copied().collect::<Vec<_>>(), [1, 2]);
    let names: Vec<_> = set.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
    assert_eq!(format!("{:?}", set.key_set::<TreeStore<u32, ()>>()), "{1, 2}");
}
