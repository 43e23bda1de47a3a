//! Operation Metrics Module
//!
//! Per-instance counters for the bounded containers. Every counted operation
//! records whether it succeeded or was rejected (full or empty), how long it
//! took, whether it had to wait for the lock, and the highest length
//! the container has reached.
//!
//! Counters use relaxed atomics: a snapshot taken while other threads are
//! operating is internally approximate, but each counter is exact once the
//! container is quiescent.

use core::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Point-in-time view of a container's metrics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PerformanceMetrics {
    /// Total number of counted operations
    pub total_operations: u64,
    /// Operations that completed normally
    pub successful_operations: u64,
    /// Operations rejected because the container was full or empty
    pub failed_operations: u64,
    /// Counted operations that found the lock held and had to wait for it
    pub contended_operations: u64,
    /// Average duration of successful operations in nanoseconds
    pub avg_operation_time_ns: u64,
    /// Longest successful operation in nanoseconds
    pub max_operation_time_ns: u64,
    /// Highest number of elements held at once
    pub peak_len: usize,
}

impl PerformanceMetrics {
    /// Success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        ratio(self.successful_operations, self.total_operations)
    }

    /// Failure rate as a percentage
    pub fn failure_rate(&self) -> f64 {
        ratio(self.failed_operations, self.total_operations)
    }

    /// Contention rate as a percentage, at most 100
    pub fn contention_rate(&self) -> f64 {
        ratio(self.contended_operations, self.total_operations)
    }

    /// Average successful operation time
    pub fn avg_operation_time(&self) -> Duration {
        Duration::from_nanos(self.avg_operation_time_ns)
    }

    /// Longest successful operation time
    pub fn max_operation_time(&self) -> Duration {
        Duration::from_nanos(self.max_operation_time_ns)
    }
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

/// Shared atomic counters backing [`PerformanceMetrics`]
#[derive(Debug)]
pub(crate) struct AtomicMetrics {
    enabled: AtomicBool,
    total_operations: AtomicU64,
    successful_operations: AtomicU64,
    failed_operations: AtomicU64,
    contended_operations: AtomicU64,
    total_time_ns: AtomicU64,
    max_time_ns: AtomicU64,
    peak_len: AtomicUsize,
}

impl Default for AtomicMetrics {
    fn default() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            total_operations: AtomicU64::new(0),
            successful_operations: AtomicU64::new(0),
            failed_operations: AtomicU64::new(0),
            contended_operations: AtomicU64::new(0),
            total_time_ns: AtomicU64::new(0),
            max_time_ns: AtomicU64::new(0),
            peak_len: AtomicUsize::new(0),
        }
    }
}

impl AtomicMetrics {
    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub(crate) fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Start timing an operation; `None` when collection is off.
    #[inline]
    pub(crate) fn start(&self) -> Option<Instant> {
        self.is_enabled().then(Instant::now)
    }

    /// Record a successful operation that started at `start`
    pub(crate) fn record_success(&self, start: Option<Instant>) {
        let Some(start) = start else {
            return;
        };
        let duration_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);

        self.total_operations.fetch_add(1, Ordering::Relaxed);
        self.successful_operations.fetch_add(1, Ordering::Relaxed);
        self.total_time_ns.fetch_add(duration_ns, Ordering::Relaxed);
        self.max_time_ns.fetch_max(duration_ns, Ordering::Relaxed);
    }

    /// Record an operation rejected because the container was full or empty
    pub(crate) fn record_failure(&self, start: Option<Instant>) {
        if start.is_none() {
            return;
        }
        self.total_operations.fetch_add(1, Ordering::Relaxed);
        self.failed_operations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record that an operation found the lock already held
    pub(crate) fn record_contention(&self) {
        if self.is_enabled() {
            self.contended_operations.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Raise the high-water length mark if `len` exceeds it
    pub(crate) fn observe_len(&self, len: usize) {
        if self.is_enabled() {
            self.peak_len.fetch_max(len, Ordering::Relaxed);
        }
    }

    pub(crate) fn snapshot(&self) -> PerformanceMetrics {
        let total_operations = self.total_operations.load(Ordering::Relaxed);
        let successful_operations = self.successful_operations.load(Ordering::Relaxed);
        let total_time = self.total_time_ns.load(Ordering::Relaxed);

        PerformanceMetrics {
            total_operations,
            successful_operations,
            failed_operations: self.failed_operations.load(Ordering::Relaxed),
            contended_operations: self.contended_operations.load(Ordering::Relaxed),
            avg_operation_time_ns: if successful_operations > 0 {
                total_time / successful_operations
            } else {
                0
            },
            max_operation_time_ns: self.max_time_ns.load(Ordering::Relaxed),
            peak_len: self.peak_len.load(Ordering::Relaxed),
        }
    }

    /// Zero every counter. The enabled flag is left as is.
    pub(crate) fn reset(&self) {
        self.total_operations.store(0, Ordering::Relaxed);
        self.successful_operations.store(0, Ordering::Relaxed);
        self.failed_operations.store(0, Ordering::Relaxed);
        self.contended_operations.store(0, Ordering::Relaxed);
        self.total_time_ns.store(0, Ordering::Relaxed);
        self.max_time_ns.store(0, Ordering::Relaxed);
        self.peak_len.store(0, Ordering::Relaxed);
    }
}

/// Containers that expose [`PerformanceMetrics`]
pub trait MetricsCollector {
    /// Current metrics snapshot
    fn metrics(&self) -> PerformanceMetrics;

    /// Reset all counters to zero
    fn reset_metrics(&self);

    /// Enable or disable collection. Enabled by default.
    fn set_metrics_enabled(&self, enabled: bool);

    /// Whether collection is enabled
    fn is_metrics_enabled(&self) -> bool;
}
