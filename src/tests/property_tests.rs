use rand::{Rng, rngs::ThreadRng};

use crate::{IntSet, equal};

const ROUNDS: usize = 200;
const CAPACITY: usize = 8;

/// Small value range so random sets overlap often
fn random_set(rng: &mut ThreadRng) -> IntSet<CAPACITY> {
    let len = rng.random_range(0..=CAPACITY);
    (0..len).map(|_| rng.random_range(-6..6)).collect()
}

#[test]
fn test_add_and_remove_properties() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let mut set = random_set(&mut rng);
        assert_eq!(set.is_empty(), set.size() == 0);

        let value = rng.random_range(-6..6);
        let size = set.size();
        let before_members = set.as_slice().to_vec();

        if set.add(value) {
            assert!(set.contains(value));
            assert_eq!(set.size(), size + 1);

            // Second add is a no-op
            let after_first = set.as_slice().to_vec();
            assert!(!set.add(value));
            assert_eq!(set.as_slice(), after_first.as_slice());

            // Removing the new value restores the previous state
            assert!(set.remove(value));
            assert_eq!(set.as_slice(), before_members.as_slice());
        } else {
            assert_eq!(set.as_slice(), before_members.as_slice(), "Failed add should not mutate");
        }
    }
}

#[test]
fn test_remove_properties() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let mut set = random_set(&mut rng);
        if set.is_empty() {
            continue;
        }
        let value = set.as_slice()[rng.random_range(0..set.size())];

        let expected: Vec<i32> = set.iter().copied().filter(|&m| m != value).collect();
        let size = set.size();
        assert!(set.remove(value));
        assert!(!set.contains(value));
        assert_eq!(set.size(), size - 1);
        assert_eq!(set.as_slice(), expected.as_slice(), "Survivors should keep their order");
    }
}

#[test]
fn test_algebra_properties() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let a = random_set(&mut rng);
        let b = random_set(&mut rng);

        assert_eq!(a.intersect(&a).as_slice(), a.as_slice());
        assert!(a.subtract(&a).is_empty());

        assert!(equal(&a, &a));
        assert_eq!(equal(&a, &b), equal(&b, &a));
        let same_membership =
            a.size() == b.size() && a.iter().all(|&m| b.contains(m));
        assert_eq!(equal(&a, &b), same_membership);

        // Union membership is commutative; values outside the range probe absence too
        if let (Ok(ab), Ok(ba)) = (a.try_union_with(&b), b.try_union_with(&a)) {
            for probe in -8..8 {
                assert_eq!(ab.contains(probe), ba.contains(probe));
                assert_eq!(ab.contains(probe), a.contains(probe) || b.contains(probe));
            }
        } else {
            assert!(a.size() + b.subtract(&a).size() > CAPACITY);
        }
    }
}
