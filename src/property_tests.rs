use proptest_derive::Arbitrary;

use crate::SplitDeque;
use proptest::prelude::*;
use std::collections::VecDeque;

// simple enum to allow mutations in any order
#[derive(Debug, Clone, Arbitrary)]
enum DequeOp<T> {
    PushFront(T),
    PopFront,
    PushBack(T),
    PopBack,
    Insert(usize, T),
    Remove(usize),
    RemoveFirst(usize),
    RemoveLast(usize),
    Reverse,
}

// Applies one operation to the deque and to a VecDeque model, checking that
// removals agree. Raw indices and counts are reduced modulo the current
// length so every generated operation is in bounds.
fn apply(deque: &mut SplitDeque<i32>, model: &mut VecDeque<i32>, op: &DequeOp<i32>) {
    match *op {
        DequeOp::PushFront(item) => {
            deque.push_front(item);
            model.push_front(item);
        }
        DequeOp::PopFront => {
            assert_eq!(deque.pop_front(), model.pop_front());
        }
        DequeOp::PushBack(item) => {
            deque.push_back(item);
            model.push_back(item);
        }
        DequeOp::PopBack => {
            assert_eq!(deque.pop_back(), model.pop_back());
        }
        DequeOp::Insert(index, item) => {
            let index = index % (model.len() + 1);
            deque.insert(index, item);
            model.insert(index, item);
        }
        DequeOp::Remove(index) => {
            if !model.is_empty() {
                let index = index % model.len();
                assert_eq!(Some(deque.remove(index)), model.remove(index));
            }
        }
        DequeOp::RemoveFirst(count) => {
            let count = count % (model.len() + 1);
            deque.remove_first(count);
            model.drain(..count);
        }
        DequeOp::RemoveLast(count) => {
            let count = count % (model.len() + 1);
            let keep = model.len() - count;
            deque.remove_last(count);
            model.drain(keep..);
        }
        DequeOp::Reverse => {
            deque.reverse();
            *model = model.iter().rev().copied().collect();
        }
    }
}

proptest! {
    // No operation sequence may break the partition balance rule, and the
    // deque must agree with a VecDeque model throughout.
    #[test]
    fn test_ops_match_model(ref ops in proptest::collection::vec(any::<DequeOp<i32>>(), 0..100)) {
        let mut deque = SplitDeque::new();
        let mut model = VecDeque::new();
        for op in ops.iter() {
            apply(&mut deque, &mut model, op);
            prop_assert!(deque.is_balanced());
            prop_assert_eq!(deque.len(), model.len());
        }
        let model_vec: Vec<i32> = model.iter().copied().collect();
        prop_assert!(deque.iter().eq(model_vec.iter()));
    }

    // The same for a non-Copy element type.
    #[test]
    fn test_push_pop_string(ref ops in proptest::collection::vec(any::<DequeOp<String>>(), 0..100)) {
        let mut deque = SplitDeque::new();
        let mut model = VecDeque::new();
        for op in ops.iter() {
            match op {
                DequeOp::PushFront(item) => {
                    deque.push_front(item.clone());
                    model.push_front(item.clone());
                }
                DequeOp::PopFront => prop_assert_eq!(deque.pop_front(), model.pop_front()),
                DequeOp::PushBack(item) => {
                    deque.push_back(item.clone());
                    model.push_back(item.clone());
                }
                DequeOp::PopBack => prop_assert_eq!(deque.pop_back(), model.pop_back()),
                _ => {}
            }
            prop_assert!(deque.is_balanced());
        }
        let model_slice = model.make_contiguous();
        prop_assert!(deque.iter().eq(model_slice.iter()));
    }

    // Building from any sequence and iterating gives the sequence back.
    #[test]
    fn test_construction_round_trip(ref values in proptest::collection::vec(any::<i32>(), 0..100)) {
        let deque = SplitDeque::from(values.clone());
        prop_assert!(deque.is_balanced());
        let collected: Vec<i32> = deque.iter().copied().collect();
        prop_assert_eq!(&collected, values);
    }

    // Slicing agrees with taking the same positions out of a Vec.
    #[test]
    fn test_slice_matches_positions(
        ref values in proptest::collection::vec(any::<i32>(), 0..64),
        raw_start in any::<usize>(),
        raw_end in any::<usize>(),
    ) {
        let deque = SplitDeque::from(values.clone());
        let start = raw_start % (values.len() + 1);
        let end = start + raw_end % (values.len() - start + 1);
        let view = deque.slice(start..end);
        prop_assert!(view.is_balanced());
        let collected: Vec<i32> = view.iter().copied().collect();
        prop_assert_eq!(&collected, &values[start..end]);
    }

    // Reversing twice is the identity.
    #[test]
    fn test_reverse_involution(ref values in proptest::collection::vec(any::<i32>(), 0..64)) {
        let deque = SplitDeque::from(values.clone());
        let twice = deque.clone().reversed().reversed();
        prop_assert!(twice.iter().eq(deque.iter()));
    }

    // Writing through an index changes that slot and nothing else.
    #[test]
    fn test_index_set_round_trip(
        ref values in proptest::collection::vec(any::<i32>(), 1..64),
        raw_index in any::<usize>(),
        value in any::<i32>(),
    ) {
        let mut deque = SplitDeque::from(values.clone());
        let index = raw_index % values.len();
        deque[index] = value;
        prop_assert_eq!(deque[index], value);
        for (i, original) in values.iter().enumerate() {
            if i != index {
                prop_assert_eq!(deque[i], *original);
            }
        }
    }
}
