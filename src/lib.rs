//! # lockbound
//!
//! Bounded, thread-safe linear collections guarded by a single mutex.
//!
//! ## Features
//!
//! - **BoundedQueue**: FIFO container with a fixed capacity
//! - **BoundedStack**: LIFO container with a fixed capacity
//! - **Metrics**: per-instance operation counters through [`MetricsCollector`]
//!
//! ## Semantics
//!
//! - Capacity is fixed at construction and never grows. Zero is a valid
//!   capacity; every insert into such a container fails.
//! - Nothing blocks on capacity: inserting into a full container and removing
//!   from an empty one fail immediately with an [`Error`]. Retrying is the
//!   caller's policy.
//! - Every operation that reads the elements holds the lock for its full
//!   duration, so each call is linearizable. Results such as
//!   [`BoundedQueue::is_full`] are advisory by the time they return.
//! - Snapshots are independent copies. No caller ever holds an alias into the
//!   container's buffer.
//!
//! ## Quick Start
//!
//! ```rust
//! use lockbound::{BoundedQueue, BoundedStack, Error};
//!
//! let queue = BoundedQueue::new(2);
//! queue.enqueue(1)?;
//! queue.enqueue(2)?;
//! assert_eq!(queue.enqueue(3), Err(Error::QueueFull));
//! assert_eq!(queue.dequeue()?, 1);
//!
//! let stack = BoundedStack::new(2);
//! stack.push("a")?;
//! stack.push("b")?;
//! assert_eq!(stack.pop()?, "b");
//! # Ok::<(), lockbound::Error>(())
//! ```
//!
//! ## Thread Safety
//!
//! Both containers are `Send + Sync` for `T: Send` and are meant to be shared
//! through an `Arc`.
//!
//! ## Cargo features
//!
//! - `tracing`: emit `trace!` events when an operation is rejected.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod metrics;
pub mod queue;
pub mod stack;

mod sync;

pub use crate::metrics::{MetricsCollector, PerformanceMetrics};
pub use crate::queue::BoundedQueue;
pub use crate::stack::BoundedStack;

/// Error types for container operations
///
/// Every error leaves the container unchanged and usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Enqueue on a queue already holding `capacity` elements
    QueueFull,
    /// Dequeue or peek on an empty queue
    QueueEmpty,
    /// Push on a stack already holding `capacity` elements
    StackFull,
    /// Pop or peek on an empty stack
    StackEmpty,
}

impl Error {
    /// True for [`Error::QueueFull`] and [`Error::StackFull`]
    pub const fn is_full(&self) -> bool {
        matches!(self, Error::QueueFull | Error::StackFull)
    }

    /// True for [`Error::QueueEmpty`] and [`Error::StackEmpty`]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Error::QueueEmpty | Error::StackEmpty)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::QueueFull => write!(f, "queue is full of capacity"),
            Error::QueueEmpty => write!(f, "queue is empty"),
            Error::StackFull => write!(f, "stack is full of capacity"),
            Error::StackEmpty => write!(f, "stack is empty"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type for container operations
pub type Result<T> = core::result::Result<T, Error>;
