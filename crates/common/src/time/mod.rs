//! Wall-clock abstraction for testability
//!
//! Favoriting timestamps and the hourly activity window both depend on the
//! current wall-clock time. Services take an `Arc<dyn Clock>` so tests can pin
//! "now" to an exact instant instead of relying on the system clock.
//!
//! # Examples
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use rolodex_common::{Clock, MockClock, SystemClock};
//!
//! // Use system clock in production
//! let clock = SystemClock;
//! assert!(clock.now_millis() > 0);
//!
//! // Use mock clock in tests
//! let start = Utc.with_ymd_and_hms(2024, 5, 1, 14, 0, 0).unwrap();
//! let mock = MockClock::new(start);
//! mock.advance(Duration::minutes(90));
//! assert_eq!(mock.now(), start + Duration::minutes(90));
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Milliseconds since the UNIX epoch.
    ///
    /// Convenience accessor matching the persisted `timestamp` encoding.
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Real system clock implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Mock clock for deterministic testing
///
/// Clones share the same underlying instant, so a clone handed to a service
/// can be advanced from the test body.
#[derive(Debug, Clone)]
pub struct MockClock {
    current: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    /// Create a mock clock frozen at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { current: Arc::new(Mutex::new(start)) }
    }

    /// Create a mock clock frozen at the given epoch milliseconds.
    ///
    /// Out-of-range values fall back to the UNIX epoch.
    pub fn at_millis(millis: i64) -> Self {
        let start = Utc.timestamp_millis_opt(millis).single().unwrap_or_default();
        Self::new(start)
    }

    /// Move the clock forward (or backward, for negative durations).
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current += duration;
    }

    /// Jump to an absolute instant.
    pub fn set(&self, instant: DateTime<Utc>) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current = instant;
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
