//! Bounded LIFO Stack Implementation
//!
//! A fixed-capacity stack guarded by one mutex. The backing `Vec` grows on
//! demand up to the capacity; the top is its last element.

use crate::metrics::{AtomicMetrics, MetricsCollector, PerformanceMetrics};
use crate::sync::{Mutex, MutexGuard};
use crate::{Error, Result};
use std::fmt;
use std::time::Instant;

const MAX_PREALLOCATED: usize = 1024;

/// A bounded, thread-safe LIFO stack
///
/// Indices count from the bottom: index 0 is the oldest element and
/// `len() - 1` is the top.
///
/// # Type Parameters
///
/// * `T` - The element type. `PartialEq` is needed only for
///   [`search`](Self::search) and `Clone` only for [`peek`](Self::peek) and
///   [`snapshot`](Self::snapshot).
///
/// # Examples
///
/// ```rust
/// use lockbound::{BoundedStack, Error};
///
/// let stack = BoundedStack::new(1);
/// stack.push(1)?;
/// assert_eq!(stack.push(2), Err(Error::StackFull));
/// assert_eq!(stack.pop()?, 1);
/// assert_eq!(stack.pop(), Err(Error::StackEmpty));
/// # Ok::<(), lockbound::Error>(())
/// ```
pub struct BoundedStack<T> {
    /// Bottom at index 0, top at the end
    elements: Mutex<Vec<T>>,
    capacity: usize,
    metrics: AtomicMetrics,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack that holds at most `capacity` elements
    ///
    /// Any capacity is accepted. Only a small buffer is reserved up front.
    pub fn new(capacity: usize) -> Self {
        Self {
            elements: Mutex::new(Vec::with_capacity(capacity.min(MAX_PREALLOCATED))),
            capacity,
            metrics: AtomicMetrics::default(),
        }
    }

    /// Maximum number of elements the stack can hold
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of elements (advisory)
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if the stack holds no elements
    ///
    /// The answer is advisory, not a reservation: a concurrent push may make it
    /// stale before the caller acts on it.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// True if the stack holds `capacity` elements (advisory)
    pub fn is_full(&self) -> bool {
        self.lock().len() == self.capacity
    }

    /// Push `value` onto the top
    ///
    /// # Errors
    ///
    /// [`Error::StackFull`] if the stack already holds `capacity` elements.
    /// The value is dropped and the stack is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lockbound::BoundedStack;
    ///
    /// let stack = BoundedStack::new(2);
    /// stack.push(1)?;
    /// stack.push(2)?;
    /// assert_eq!(stack.peek()?, 2);
    /// # Ok::<(), lockbound::Error>(())
    /// ```
    pub fn push(&self, value: T) -> Result<()> {
        let start = self.metrics.start();
        let mut elements = self.lock_counted();

        if elements.len() >= self.capacity {
            drop(elements);
            self.metrics.record_failure(start);
            #[cfg(feature = "tracing")]
            tracing::trace!(capacity = self.capacity, "push rejected: stack full");
            return Err(Error::StackFull);
        }

        elements.push(value);
        let len = elements.len();
        drop(elements);

        self.metrics.observe_len(len);
        self.metrics.record_success(start);
        Ok(())
    }

    /// Remove and return the top element
    ///
    /// # Errors
    ///
    /// [`Error::StackEmpty`] if the stack has no elements.
    pub fn pop(&self) -> Result<T> {
        let start = self.metrics.start();
        let value = self.lock_counted().pop();

        match value {
            Some(value) => {
                self.metrics.record_success(start);
                Ok(value)
            }
            None => Err(self.reject_empty(start, "pop")),
        }
    }

    /// Run `f` on the top element without removing it
    ///
    /// `f` runs with the lock held and must not touch this stack.
    ///
    /// # Errors
    ///
    /// [`Error::StackEmpty`] if the stack has no elements.
    pub fn peek_with<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&T) -> R,
    {
        let start = self.metrics.start();
        let elements = self.lock_counted();

        match elements.last() {
            Some(top) => {
                let result = f(top);
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

    /// Push values in iterator order until the stack is full
    ///
    /// The last accepted value ends on top. Returns the number accepted;
    /// values past the free space are dropped with the iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lockbound::BoundedStack;
    ///
    /// let stack = BoundedStack::new(2);
    /// assert_eq!(stack.push_batch(vec![1, 2, 3]), 2);
    /// assert_eq!(stack.pop()?, 2);
    /// # Ok::<(), lockbound::Error>(())
    /// ```
    pub fn push_batch<I>(&self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements = self.lock();
        let before = elements.len();
        let available = self.capacity - before;

        elements.extend(values.into_iter().take(available));
        let len = elements.len();
        drop(elements);

        self.metrics.observe_len(len);
        len - before
    }

    /// Pop up to `max` elements, top first
    pub fn pop_batch(&self, max: usize) -> Vec<T> {
        let mut elements = self.lock();
        let keep = elements.len().saturating_sub(max);
        elements.drain(keep..).rev().collect()
    }

    /// Remove every element
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Consume the stack, returning its elements bottom-to-top
    pub fn into_vec(self) -> Vec<T> {
        self.elements.into_inner()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        self.elements.lock()
    }

    fn lock_counted(&self) -> MutexGuard<'_, Vec<T>> {
        if let Some(guard) = self.elements.try_lock() {
            return guard;
        }
        self.metrics.record_contention();
        self.elements.lock()
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn reject_empty(&self, start: Option<Instant>, operation: &'static str) -> Error {
        self.metrics.record_failure(start);
        #[cfg(feature = "tracing")]
        tracing::trace!(capacity = self.capacity, operation, "rejected: stack empty");
        Error::StackEmpty
    }
}

impl<T: Clone> BoundedStack<T> {
    /// Return a clone of the top element without removing it
    ///
    /// # Errors
    ///
    /// [`Error::StackEmpty`] if the stack has no elements.
    pub fn peek(&self) -> Result<T> {
        self.peek_with(T::clone)
    }

    /// Copy of the current elements, bottom-to-top
    pub fn snapshot(&self) -> Vec<T> {
        self.lock().clone()
    }
}

impl<T: PartialEq> BoundedStack<T> {
    /// Index of the first element equal to `value`, scanning from the bottom
    ///
    /// The index counts from the bottom (0), not from the top. Returns `None`
    /// if nothing matches.
    pub fn search(&self, value: &T) -> Option<usize> {
        self.lock().iter().position(|element| element == value)
    }
}

impl<T> fmt::Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}

impl<T> MetricsCollector for BoundedStack<T> {
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
