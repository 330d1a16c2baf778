use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use zipzip_tree::{Natural, Position, ZipTreeSet};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

fn value_strategy() -> impl Strategy<Value = i64> {
    -1_000i64..1_000i64
}

fn seeded(seed: u64) -> ZipTreeSet<i64> {
    ZipTreeSet::with_rng(Natural, SmallRng::seed_from_u64(seed))
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i64),
    Delete(i64),
    Take(i64),
    Contains(i64),
    Get(i64),
    First,
    Last,
    PopFirst,
    PopLast,
    Floor(i64),
    Ceiling(i64),
    UpperBound(i64),
    IndexOf(i64),
    AtIndex(usize),
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        6 => value_strategy().prop_map(SetOp::Insert),
        2 => value_strategy().prop_map(SetOp::Delete),
        1 => value_strategy().prop_map(SetOp::Take),
        2 => value_strategy().prop_map(SetOp::Contains),
        1 => value_strategy().prop_map(SetOp::Get),
        1 => Just(SetOp::First),
        1 => Just(SetOp::Last),
        1 => Just(SetOp::PopFirst),
        1 => Just(SetOp::PopLast),
        1 => value_strategy().prop_map(SetOp::Floor),
        1 => value_strategy().prop_map(SetOp::Ceiling),
        1 => value_strategy().prop_map(SetOp::UpperBound),
        1 => value_strategy().prop_map(SetOp::IndexOf),
        1 => (0usize..1_200).prop_map(SetOp::AtIndex),
    ]
}

// ─── Core operations ─────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both ZipTreeSet and BTreeSet
    /// and asserts identical results at every step.
    #[test]
    fn set_ops_match_btreeset(seed in any::<u64>(), ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut zt_set = seeded(seed);
        let mut bt_set: BTreeSet<i64> = BTreeSet::new();

        for op in &ops {
            match op {
                SetOp::Insert(v) => {
                    prop_assert_eq!(zt_set.insert(*v), bt_set.insert(*v), "insert({})", v);
                }
                SetOp::Delete(v) => {
                    prop_assert_eq!(zt_set.delete(v), bt_set.remove(v), "delete({})", v);
                }
                SetOp::Take(v) => {
                    prop_assert_eq!(zt_set.take(v), bt_set.take(v), "take({})", v);
                }
                SetOp::Contains(v) => {
                    prop_assert_eq!(zt_set.contains(v), bt_set.contains(v), "contains({})", v);
                }
                SetOp::Get(v) => {
                    prop_assert_eq!(zt_set.get(v), bt_set.get(v), "get({})", v);
                }
                SetOp::First => {
                    prop_assert_eq!(zt_set.first(), bt_set.first(), "first");
                }
                SetOp::Last => {
                    prop_assert_eq!(zt_set.last(), bt_set.last(), "last");
                }
                SetOp::PopFirst => {
                    prop_assert_eq!(zt_set.pop_first(), bt_set.pop_first(), "pop_first");
                }
                SetOp::PopLast => {
                    prop_assert_eq!(zt_set.pop_last(), bt_set.pop_last(), "pop_last");
                }
                SetOp::Floor(v) => {
                    prop_assert_eq!(zt_set.floor(v).key(), bt_set.range(..=*v).next_back(), "floor({})", v);
                }
                SetOp::Ceiling(v) => {
                    let bt_result = bt_set.range(*v..).next();
                    prop_assert_eq!(zt_set.ceiling(v).key(), bt_result, "ceiling({})", v);
                    prop_assert_eq!(zt_set.lower_bound(v).key(), bt_result, "lower_bound({})", v);
                }
                SetOp::UpperBound(v) => {
                    let bt_result = bt_set.range((Excluded(*v), Unbounded)).next();
                    prop_assert_eq!(zt_set.upper_bound(v).key(), bt_result, "upper_bound({})", v);
                }
                SetOp::IndexOf(v) => {
                    let bt_result = bt_set.contains(v).then(|| bt_set.range(..*v).count());
                    prop_assert_eq!(zt_set.index_of(v), bt_result, "index_of({})", v);
                }
                SetOp::AtIndex(i) => {
                    prop_assert_eq!(zt_set.get_by_index(*i), bt_set.iter().nth(*i), "get_by_index({})", i);
                }
            }
            prop_assert_eq!(zt_set.len(), bt_set.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(zt_set.count(), bt_set.len(), "count mismatch after {:?}", op);
        }
    }

    #[test]
    fn iter_matches_btreeset(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let zt_set: ZipTreeSet<i64> = values.iter().copied().collect();
        let bt_set: BTreeSet<i64> = values.iter().copied().collect();

        prop_assert!(zt_set.iter().eq(bt_set.iter()), "iter() mismatch");
        prop_assert!(zt_set.iter().rev().eq(bt_set.iter().rev()), "iter().rev() mismatch");
        prop_assert_eq!(zt_set.iter().len(), bt_set.len());
        prop_assert_eq!(zt_set.iter().last(), bt_set.iter().last());

        let mut walked = Vec::new();
        let mut cursor = zt_set.cursor_front();
        while let Some(&v) = cursor.key() {
            prop_assert_eq!(cursor.index(), Some(walked.len()));
            walked.push(v);
            cursor.move_next();
        }
        prop_assert!(walked.iter().eq(bt_set.iter()));
    }

    #[test]
    fn retain_matches_btreeset(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let mut zt_set: ZipTreeSet<i64> = values.iter().copied().collect();
        let mut bt_set: BTreeSet<i64> = values.iter().copied().collect();
        zt_set.retain(|v| v % 4 == 1);
        bt_set.retain(|v| v % 4 == 1);
        prop_assert!(zt_set.iter().eq(bt_set.iter()));
    }

    #[test]
    fn at_index_and_index_of_agree(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let zt_set: ZipTreeSet<i64> = values.iter().copied().collect();
        for (i, v) in zt_set.iter().enumerate() {
            prop_assert_eq!(zt_set.index_of(v), Some(i));
            prop_assert_eq!(zt_set.at_index(i).key(), Some(v));
            prop_assert_eq!(zt_set[Position(i)], *v);
        }
        prop_assert!(zt_set.at_index(zt_set.len()).is_empty());
    }

    /// Draining through one cursor from the minimum yields every element in order.
    #[test]
    fn take_current_drains_from_front(seed in any::<u64>(), values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let mut zt_set = seeded(seed);
        zt_set.extend(values.iter());
        let bt_set: BTreeSet<i64> = values.iter().copied().collect();

        let mut drained = Vec::new();
        let mut cursor = zt_set.minimum_mut();
        while let Some(v) = cursor.take_current() {
            drained.push(v);
        }
        prop_assert!(drained.iter().eq(bt_set.iter()));
        prop_assert!(zt_set.is_empty());
        prop_assert_eq!(zt_set.count(), 0);
    }
}

// ─── Fixed scenarios ──────────────────────────────────────────────────────────

mod scenarios {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use zipzip_tree::{Natural, ZipTreeSet};

    #[test]
    fn deletes_extremes() {
        for seed in 0..64 {
            let mut set = ZipTreeSet::with_rng(Natural, SmallRng::seed_from_u64(seed));
            for key in [6, 4, 3, 1] {
                set.insert(key);
            }
            assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 6]);
            assert!(set.minimum_mut().remove_current());
            assert!(set.maximum_mut().remove_current());
            assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 4]);
        }
    }

    #[test]
    fn empty_set_bounds_are_empty() {
        let set: ZipTreeSet<i32> = ZipTreeSet::new(Natural);
        assert!(set.ceiling(&3).is_empty());
        assert!(set.floor(&3).is_empty());
        assert!(set.minimum().is_empty());
        assert_eq!(set.index_of(&3), None);
    }

    #[test]
    fn cursor_removal_on_empty_set_is_a_no_op() {
        let mut set: ZipTreeSet<i32> = ZipTreeSet::new(Natural);
        assert!(!set.minimum_mut().remove_current());
        assert_eq!(set.find_mut(&1).take_current(), None);
        assert!(set.is_empty());
    }

    #[test]
    fn duplicate_insert_keeps_tree() {
        let mut set = ZipTreeSet::with_rng(Natural, SmallRng::seed_from_u64(8));
        for key in [9, 7, 8, 4] {
            assert!(set.insert(key));
        }
        let before = set.tree_dump();
        assert!(!set.insert(7));
        assert_eq!(set.tree_dump(), before);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn dumps_omit_values() {
        let mut set = ZipTreeSet::new(Natural);
        for key in [-10, 12, -99, 8] {
            set.insert(key);
        }
        let in_order = set.in_order_dump();
        let keys: Vec<&str> = in_order.lines().map(|line| line.split(',').next().unwrap_or_default()).collect();
        assert_eq!(keys, ["Key: -99", "Key: -10", "Key: 8", "Key: 12"]);
        assert!(!in_order.contains("Value"));
        assert!(!set.tree_dump().contains("Value"));
        assert_eq!(set.tree_dump().lines().count(), 4);
    }

    #[test]
    fn custom_comparator_orders_descending() {
        let mut set = ZipTreeSet::new(|a: &u32, b: &u32| a > b);
        set.extend([3, 9, 1, 7]);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), [9, 7, 3, 1]);
        assert_eq!(set.floor(&5).key(), Some(&7));
        assert_eq!(set.ceiling(&5).key(), Some(&3));
        assert_eq!(set.index_of(&1), Some(3));
    }

    #[test]
    fn debug_prints_like_a_set() {
        let set = ZipTreeSet::from([3, 1, 2]);
        assert_eq!(format!("{set:?}"), "{1, 2, 3}");
    }
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_position_out_of_bounds_panics() {
    let set = ZipTreeSet::from([1, 2, 3]);
    let _ = set[Position(3)];
}
