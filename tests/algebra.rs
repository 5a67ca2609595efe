use kset::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of random operand pairs to check per pair of kinds.
const ROUNDS: usize = 32;

/// Keys are drawn from `0..KEY_SPACE`, so operands overlap often.
const KEY_SPACE: u16 = 64;

fn random_set(rng: &mut StdRng, kind: StoreKind) -> AnyKeySet<u16> {
    let n = rng.gen_range(0..48);
    AnyKeySet::with_keys(kind, (0..n).map(|_| rng.gen_range(0..KEY_SPACE)))
}

fn sorted(mut keys: Vec<u16>) -> Vec<u16> {
    keys.sort_unstable();
    keys
}

fn each_pair(mut check: impl FnMut(&AnyKeySet<u16>, &AnyKeySet<u16>)) {
    let mut rng = StdRng::seed_from_u64(0x6b73_6574);
    for a_kind in StoreKind::ALL {
        for b_kind in StoreKind::ALL {
            for _ in 0..ROUNDS {
                let a = random_set(&mut rng, a_kind);
                let b = random_set(&mut rng, b_kind);
                check(&a, &b);
            }
        }
    }
}

#[test]
fn inclusion_exclusion() {
    each_pair(|a, b| {
        assert_eq!(a.union(b).len(), a.len() + b.len() - a.intersect(b).len());
    });
}

#[test]
fn difference_is_disjoint_from_operand() {
    each_pair(|a, b| {
        assert!(a.difference(b).intersect(b).is_empty());
        assert!(!a.difference(b).intersects(b));
    });
}

#[test]
fn symmetric_difference_is_union_of_differences() {
    each_pair(|a, b| {
        let sym = a.symmetric_difference(b);
        let expected = a.difference(b).union(&b.difference(a));
        assert_eq!(sorted(sym.to_vec()), sorted(expected.to_vec()));
        assert!(sym.equal(&expected));
    });
}

#[test]
fn subset_relations() {
    each_pair(|a, b| {
        assert!(a.is_subset(a));
        assert!(!a.is_proper_subset(a));
        assert!(a.is_superset(a));
        assert!(!a.is_proper_superset(a));
        assert!(a.equal(a));

        let inter = a.intersect(b);
        assert!(inter.is_subset(a));
        assert!(inter.is_subset(b));
        let union = a.union(b);
        assert!(union.is_superset(a));
        assert!(union.is_superset(b));
        assert_eq!(a.is_subset(b), b.is_superset(a));
    });
}

#[test]
fn equal_is_symmetric() {
    each_pair(|a, b| {
        assert_eq!(a.equal(b), b.equal(a));
        assert_eq!(a.equal(b), sorted(a.to_vec()) == sorted(b.to_vec()));
    });
}

#[test]
fn intersects_agrees_with_intersect() {
    each_pair(|a, b| {
        assert_eq!(a.intersects(b), !a.intersect(b).is_empty());
    });
}
