//! Bounded FIFO queue
//!
//! A fixed-capacity queue guarded by one mutex. Elements live in a
//! [`VecDeque`] ring buffer that grows on demand up to the capacity.

use crate::metrics::{AtomicMetrics, MetricsCollector, PerformanceMetrics};
use crate::sync::{Mutex, MutexGuard};
use crate::{Error, Result};
use std::collections::VecDeque;
use std::fmt;
use std::time::Instant;

/// Upper bound on the slots reserved by [`BoundedQueue::new`]
const MAX_PREALLOCATED: usize = 1024;

/// A bounded, thread-safe FIFO queue
///
/// The oldest element is the head (index 0) and the newest is the tail.
/// Inserting into a full queue returns [`Error::QueueFull`] and removing from
/// an empty one returns [`Error::QueueEmpty`]; neither waits.
///
/// # Examples
///
/// ```rust
/// use lockbound::{BoundedQueue, Error};
///
/// let queue = BoundedQueue::new(3);
/// queue.enqueue(1)?;
/// queue.enqueue(2)?;
/// queue.enqueue(3)?;
/// assert_eq!(queue.enqueue(4), Err(Error::QueueFull));
///
/// assert_eq!(queue.dequeue()?, 1);
/// assert_eq!(queue.snapshot(), vec![2, 3]);
/// assert_eq!(queue.search(&3), Some(1));
/// # Ok::<(), lockbound::Error>(())
/// ```
///
/// # Thread Safety
///
/// All operations take `&self`. Share the queue through an `Arc`.
pub struct BoundedQueue<T> {
    elements: Mutex<VecDeque<T>>,
    capacity: usize,
    metrics: AtomicMetrics,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue that holds at most `capacity` elements
    ///
    /// Any capacity is accepted, including 0 and `usize::MAX`. At most
    /// `MAX_PREALLOCATED` slots are reserved up front; the buffer grows past
    /// that only as elements arrive.
    pub fn new(capacity: usize) -> Self {
        Self {
            elements: Mutex::new(VecDeque::with_capacity(capacity.min(MAX_PREALLOCATED))),
            capacity,
            metrics: AtomicMetrics::default(),
        }
    }

    /// Maximum number of elements the queue can hold
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of elements
    ///
    /// Advisory: other threads may change the length right after this returns.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if the queue holds no elements. Advisory, not a reservation.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// True if the queue holds `capacity` elements. Advisory, not a reservation.
    pub fn is_full(&self) -> bool {
        self.lock().len() == self.capacity
    }

    /// Append `value` at the tail
    ///
    /// # Errors
    ///
    /// [`Error::QueueFull`] if the queue already holds `capacity` elements.
    /// The value is dropped and the queue is unchanged.
    pub fn enqueue(&self, value: T) -> Result<()> {
        let start = self.metrics.start();
        let mut elements = self.lock_counted();

        if elements.len() >= self.capacity {
            drop(elements);
            self.metrics.record_failure(start);
            #[cfg(feature = "tracing")]
            tracing::trace!(capacity = self.capacity, "enqueue rejected: queue full");
            return Err(Error::QueueFull);
        }

        elements.push_back(value);
        let len = elements.len();
        drop(elements);

        self.metrics.observe_len(len);
        self.metrics.record_success(start);
        Ok(())
    }

    /// Remove and return the head element
    ///
    /// # Errors
    ///
    /// [`Error::QueueEmpty`] if the queue has no elements.
    pub fn dequeue(&self) -> Result<T> {
        let start = self.metrics.start();
        let value = self.lock_counted().pop_front();

        match value {
            Some(value) => {
                self.metrics.record_success(start);
                Ok(value)
            }
            None => Err(self.reject_empty(start, "dequeue")),
        }
    }

    /// Run `f` on the head element without removing it
    ///
    /// The lock is held while `f` runs, so `f` must not call back into this
    /// queue.
    ///
    /// # Errors
    ///
    /// [`Error::QueueEmpty`] if the queue has no elements.
    pub fn peek_with<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&T) -> R,
    {
        let start = self.metrics.start();
        let elements = self.lock_counted();

        match elements.front() {
            Some(head) => {
                let result = f(head);
                drop(elements);
                self.metrics.record_success(start);
                Ok(result)
            }
            None => {
                drop(elements);
                Err(self.reject_empty(start, "peek"))
            }
        }
    }

    /// Enqueue values from `values` until the queue is full
    ///
    /// Holds the lock once for the whole batch, so the accepted values are
    /// contiguous in the queue. Returns the number accepted. Values beyond the
    /// free space are left in the iterator and dropped with it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lockbound::BoundedQueue;
    ///
    /// let queue = BoundedQueue::new(3);
    /// assert_eq!(queue.enqueue_batch(vec![1, 2, 3, 4, 5]), 3);
    /// assert_eq!(queue.snapshot(), vec![1, 2, 3]);
    /// ```
    pub fn enqueue_batch<I>(&self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements = self.lock();
        let available = self.capacity - elements.len();
        let before = elements.len();

        elements.extend(values.into_iter().take(available));
        let len = elements.len();
        drop(elements);

        self.metrics.observe_len(len);
        len - before
    }

    /// Remove up to `max` elements from the head, oldest first
    ///
    /// Returns an empty vector if the queue is empty.
    pub fn dequeue_batch(&self, max: usize) -> Vec<T> {
        let mut elements = self.lock();
        let count = max.min(elements.len());
        elements.drain(..count).collect()
    }

    /// Remove every element
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Consume the queue, returning its elements head-to-tail
    pub fn into_vec(self) -> Vec<T> {
        self.elements.into_inner().into()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        self.elements.lock()
    }

    /// Lock for a metered operation, counting a held lock as contention
    fn lock_counted(&self) -> MutexGuard<'_, VecDeque<T>> {
        match self.elements.try_lock() {
            Some(guard) => guard,
            None => {
                self.metrics.record_contention();
                self.elements.lock()
            }
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn reject_empty(&self, start: Option<Instant>, operation: &'static str) -> Error {
        self.metrics.record_failure(start);
        #[cfg(feature = "tracing")]
        tracing::trace!(capacity = self.capacity, operation, "rejected: queue empty");
        Error::QueueEmpty
    }
}

impl<T: Clone> BoundedQueue<T> {
    /// Return a clone of the head element without removing it
    ///
    /// # Errors
    ///
    /// [`Error::QueueEmpty`] if the queue has no elements.
    pub fn peek(&self) -> Result<T> {
        self.peek_with(T::clone)
    }

    /// Copy of the current elements, head-to-tail
    ///
    /// The returned vector is independent of the queue.
    pub fn snapshot(&self) -> Vec<T> {
        self.lock().iter().cloned().collect()
    }
}

impl<T: PartialEq> BoundedQueue<T> {
    /// Index of the first element equal to `value`, counting from the head
    ///
    /// Returns `None` if no element matches. The index is a point-in-time
    /// result and may be stale once the lock is released.
    pub fn search(&self, value: &T) -> Option<usize> {
        self.lock().iter().position(|element| element == value)
    }
}

impl<T> fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}

impl<T> MetricsCollector for BoundedQueue<T> {
    fn metrics(&self) -> PerformanceMetrics {
        self.metrics.snapshot()
    }

    fn reset_metrics(&self) {
        self.metrics.reset();
    }

    fn set_metrics_enabled(&self, enabled: bool) {
        self.metrics.set_enabled(enabled);
    }

    fn is_metrics_enabled(&self) -> bool {
        self.metrics.is_enabled()
    }
}
