//! Stack Module
//!
//! Bounded, mutex-guarded stack for lockbound. The top of the stack is the
//! last element of its backing sequence; [`BoundedStack::search`] and
//! [`BoundedStack::snapshot`] both report positions from the bottom.

pub mod bounded;

pub use bounded::BoundedStack;


#[cfg(all(test, not(loom)))]
mod proptests;
