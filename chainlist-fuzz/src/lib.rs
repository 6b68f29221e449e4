//! Fuzzing entry points for chainlist-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Call `fuzz_ops` from a fuzz target with the raw input bytes

use chainlist_core::{ArrayList, LinkedList, List};

/// Decode `data` into list operations and replay them against a `LinkedList`
/// and an `ArrayList`
///
/// Every input byte pair is one operation: the first byte selects the
/// operation and the second is its argument. Panics if the two lists ever
/// disagree or the linked chain is broken.
pub fn fuzz_ops(data: &[u8]) {
    let mut list = LinkedList::new();
    let mut model: ArrayList<u8> = ArrayList::new();

    for pair in data.chunks(2) {
        let op = pair[0];
        let arg = pair.get(1).copied().unwrap_or(0);
        let index = arg as usize % (model.len() + 2);

        match op % 8 {
            0 => {
                list.add([arg]);
                model.add([arg]);
            }
            1 => {
                list.prepend([arg, op]);
                model.insert(0, [arg, op]).unwrap();
            }
            2 => assert_eq!(list.insert(index, [op]), model.insert(index, [op])),
            3 => assert_eq!(list.remove(index), model.remove(index)),
            4 => {
                let other = op as usize % (model.len() + 1);
                assert_eq!(list.swap(index, other), model.swap(index, other));
            }
            5 => assert_eq!(list.set(index, op), model.set(index, op)),
            6 => assert_eq!(list.contains([arg, op]), model.contains([arg, op])),
            _ => {
                if arg == 0 {
                    list.clear();
                    model.clear();
                }
            }
        }

        assert!(list.is_consistent(), "chain broken after op {}", op);
        assert_eq!(list.values(), model.as_slice());
    }
}
