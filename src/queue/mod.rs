//! Queue implementations
//!
//! - [`BoundedQueue`]: fixed-capacity FIFO queue guarded by a single mutex
//!
//! ## Behavior at the boundaries
//!
//! | Call | Empty queue | Full queue |
//! |------|-------------|------------|
//! | `enqueue` | succeeds | `Err(QueueFull)` |
//! | `dequeue` | `Err(QueueEmpty)` | succeeds |
//! | `peek` | `Err(QueueEmpty)` | succeeds |
//!
//! A rejected call never changes the queue.
//!
//! ## Examples
//!
//! ```rust
//! use lockbound::queue::BoundedQueue;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let queue = Arc::new(BoundedQueue::new(8));
//!
//! let producer = {
//!     let queue = Arc::clone(&queue);
//!     thread::spawn(move || {
//!         for i in 0..8 {
//!             queue.enqueue(i).unwrap();
//!         }
//!     })
//! };
//! producer.join().unwrap();
//!
//! assert_eq!(queue.dequeue()?, 0);
//! assert_eq!(queue.len(), 7);
//! # Ok::<(), lockbound::Error>(())
//! ```
pub mod bounded;

pub use bounded::BoundedQueue;


#[cfg(all(test, not(loom)))]
mod proptests;
