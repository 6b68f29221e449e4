//! Property-based tests using proptest
//!
//! Random operation sequences run against both `LinkedList` and an `ArrayList`
//! through the shared `List` trait; the two must always agree.

use chainlist_core::{ArrayList, LinkedList, List};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(Vec<i8>),
    Prepend(Vec<i8>),
    Insert(usize, Vec<i8>),
    Remove(usize),
    Swap(usize, usize),
    Set(usize, i8),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let values = || prop::collection::vec(any::<i8>(), 0..5);
    prop_oneof![
        3 => values().prop_map(Op::Add),
        2 => values().prop_map(Op::Prepend),
        3 => (0usize..24, values()).prop_map(|(i, v)| Op::Insert(i, v)),
        3 => (0usize..24).prop_map(Op::Remove),
        2 => (0usize..24, 0usize..24).prop_map(|(i, j)| Op::Swap(i, j)),
        2 => (0usize..24, any::<i8>()).prop_map(|(i, v)| Op::Set(i, v)),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn prop_matches_array_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut list = LinkedList::new();
        let mut model: ArrayList<i8> = ArrayList::new();

        for op in ops {
            match op {
                Op::Add(values) => {
                    list.add(values.clone());
                    model.add(values);
                }
                Op::Prepend(values) => {
                    list.prepend(values.clone());
                    model.insert(0, values).unwrap();
                }
                Op::Insert(index, values) => {
                    prop_assert_eq!(
                        list.insert(index, values.clone()),
                        model.insert(index, values)
                    );
                }
                Op::Remove(index) => {
                    prop_assert_eq!(list.remove(index), model.remove(index));
                }
                Op::Swap(i, j) => {
                    prop_assert_eq!(list.swap(i, j), model.swap(i, j));
                }
                Op::Set(index, value) => {
                    prop_assert_eq!(list.set(index, value), model.set(index, value));
                }
                Op::Clear => {
                    list.clear();
                    model.clear();
                }
            }

            prop_assert!(list.is_consistent());
            prop_assert_eq!(list.size(), model.len());
            prop_assert_eq!(list.values(), model.as_slice());
        }
    }

    #[test]
    fn prop_round_trip_values(values in prop::collection::vec(any::<u32>(), 0..128)) {
        let list = LinkedList::from_values(values.clone());

        prop_assert_eq!(list.values(), values.clone());
        prop_assert_eq!(list.first().ok(), values.first());
        prop_assert_eq!(list.last().ok(), values.last());
    }

    #[test]
    fn prop_get_agrees_with_index_of(values in prop::collection::vec(0u8..16, 1..64)) {
        let list = LinkedList::from_values(values.clone());

        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(list.get(i), Ok(value));
            let first = values.iter().position(|v| v == value).unwrap();
            prop_assert_eq!(list.index_of(value), Ok(first));
        }
        prop_assert!(list.get(values.len()).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn prop_contains_is_subset_check(
        values in prop::collection::vec(0u8..32, 0..32),
        wanted in prop::collection::vec(0u8..32, 0..8)
    ) {
        let list = LinkedList::from_values(values.clone());
        let expected = wanted.iter().all(|w| values.contains(w));
        let array = ArrayList::from(values);

        prop_assert_eq!(list.contains(wanted.clone()), expected);
        prop_assert_eq!(array.contains(wanted), expected);
    }

    #[test]
    fn prop_insert_boundaries(
        values in prop::collection::vec(any::<i16>(), 0..16),
        extra in prop::collection::vec(any::<i16>(), 0..4)
    ) {
        let mut front = LinkedList::from_values(values.clone());
        let mut prepended = LinkedList::from_values(values.clone());
        front.insert(0, extra.clone()).unwrap();
        prepended.prepend(extra.clone());
        prop_assert_eq!(front.values(), prepended.values());

        let mut back = LinkedList::from_values(values.clone());
        let mut appended = LinkedList::from_values(values.clone());
        back.insert(values.len(), extra.clone()).unwrap();
        appended.append(extra);
        prop_assert_eq!(back.values(), appended.values());
        prop_assert!(back.is_consistent());
    }
}
