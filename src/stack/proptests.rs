//! Property-based tests for the bounded stack using proptest

use super::BoundedStack;
use crate::Error;
use proptest::prelude::*;

proptest! {
    /// Random push/pop/peek sequences agree with a `Vec` model.
    #[test]
    fn test_matches_vec_model(
        capacity in 0usize..16,
        ops in prop::collection::vec(prop::option::weighted(0.6, any::<i32>()), 0..200)
    ) {
        let stack = BoundedStack::new(capacity);
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Some(value) => {
                    let expected = if model.len() < capacity {
                        model.push(value);
                        Ok(())
                    } else {
                        Err(Error::StackFull)
                    };
                    prop_assert_eq!(stack.push(value), expected);
                }
                None => {
                    prop_assert_eq!(stack.peek(), model.last().copied().ok_or(Error::StackEmpty));
                    prop_assert_eq!(stack.pop(), model.pop().ok_or(Error::StackEmpty));
                }
            }

            prop_assert!(stack.len() <= capacity);
            prop_assert_eq!(stack.is_empty(), model.is_empty());
            prop_assert_eq!(stack.is_full(), model.len() == capacity);
        }

        prop_assert_eq!(stack.snapshot(), model);
    }

    /// Pushing k values then popping k returns them reversed.
    #[test]
    fn test_lifo_round_trip(values in prop::collection::vec(any::<u32>(), 0..64)) {
        let stack = BoundedStack::new(values.len());
        prop_assert_eq!(stack.push_batch(values.iter().copied()), values.len());

        let popped: Vec<_> = std::iter::from_fn(|| stack.pop().ok()).collect();
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(popped, expected);
        prop_assert_eq!(stack.pop(), Err(Error::StackEmpty));
    }

    /// Search returns the bottom-most match.
    #[test]
    fn test_search_bottom_up(values in prop::collection::vec(0u8..4, 1..16), needle in 0u8..4) {
        let stack = BoundedStack::new(values.len());
        stack.push_batch(values.iter().copied());

        prop_assert_eq!(stack.search(&needle), values.iter().position(|&v| v == needle));
    }
}
