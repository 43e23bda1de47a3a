//! Property-based tests for the bounded queue using proptest
//!
//! Random operation sequences are applied to a [`BoundedQueue`] and to a plain
//! `VecDeque` model; every result and the final contents must agree.

use super::BoundedQueue;
use crate::Error;
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Op {
    Enqueue(u8),
    Dequeue,
    Peek,
    Search(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u8>().prop_map(Op::Enqueue),
        2 => Just(Op::Dequeue),
        1 => Just(Op::Peek),
        1 => (0u8..8).prop_map(Op::Search),
    ]
}

proptest! {
    #[test]
    fn test_matches_vecdeque_model(
        capacity in 0usize..16,
        ops in prop::collection::vec(op_strategy(), 0..200)
    ) {
        let queue = BoundedQueue::new(capacity);
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::Enqueue(value) => {
                    let expected = if model.len() < capacity {
                        model.push_back(value);
                        Ok(())
                    } else {
                        Err(Error::QueueFull)
                    };
                    prop_assert_eq!(queue.enqueue(value), expected);
                }
                Op::Dequeue => {
                    let expected = model.pop_front().ok_or(Error::QueueEmpty);
                    prop_assert_eq!(queue.dequeue(), expected);
                }
                Op::Peek => {
                    let expected = model.front().copied().ok_or(Error::QueueEmpty);
                    prop_assert_eq!(queue.peek(), expected);
                }
                Op::Search(value) => {
                    let expected = model.iter().position(|&v| v == value);
                    prop_assert_eq!(queue.search(&value), expected);
                }
            }

            prop_assert!(queue.len() <= capacity);
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert_eq!(queue.is_full(), model.len() == capacity);
        }

        prop_assert_eq!(queue.into_vec(), Vec::from(model));
    }

    #[test]
    fn test_fifo_round_trip(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let queue = BoundedQueue::new(values.len());

        for &value in &values {
            prop_assert!(queue.enqueue(value).is_ok());
        }
        prop_assert!(queue.is_full());

        let drained: Vec<_> = (0..values.len()).map(|_| queue.dequeue().unwrap()).collect();
        prop_assert_eq!(drained, values);
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn test_full_rejection_leaves_contents(
        capacity in 1usize..32,
        extra in prop::collection::vec(any::<u16>(), 1..8)
    ) {
        let queue = BoundedQueue::new(capacity);
        prop_assert_eq!(queue.enqueue_batch(0..capacity as u16), capacity);

        let before = queue.snapshot();
        for value in extra {
            prop_assert_eq!(queue.enqueue(value), Err(Error::QueueFull));
        }
        prop_assert_eq!(queue.snapshot(), before);
    }
}
