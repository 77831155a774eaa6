//! Snapshot refresh contract.
//!
//! Widgets are pull-based: a host re-reads the store on a cadence and the
//! displayed data may lag the application's true state by up to one
//! interval. This module captures that cadence so hosts and tests agree on
//! what "stale" means. Nothing here blocks a read; staleness is
//! informational only.

use std::time::{Duration, SystemTime};

/// Default refresh interval requested from hosts.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Refresh cadence agreed between the application and a widget host.
///
/// The host re-reads the store every `interval`, stretched to `os_minimum`
/// when the platform refuses to refresh more often. Between refreshes a
/// widget keeps showing its last description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshContract {
    /// Requested time between store re-reads
    pub interval: Duration,
    /// Shortest spacing the platform allows between refreshes
    pub os_minimum: Duration,
}

impl Default for RefreshContract {
    fn default() -> Self {
        Self {
            interval: DEFAULT_REFRESH_INTERVAL,
            os_minimum: Duration::ZERO,
        }
    }
}

impl RefreshContract {
    /// Contract with a specific interval and no platform minimum.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            os_minimum: Duration::ZERO,
        }
    }

    /// Same contract with a platform-imposed minimum spacing.
    pub fn with_os_minimum(mut self, os_minimum: Duration) -> Self {
        self.os_minimum = os_minimum;
        self
    }

    /// The cadence the host actually delivers: the requested interval or
    /// the platform minimum, whichever is longer.
    pub fn effective_interval(&self) -> Duration {
        self.interval.max(self.os_minimum)
    }

    /// When the next re-read is due, counting from `now`.
    pub fn next_refresh(&self, now: SystemTime) -> SystemTime {
        now + self.effective_interval()
    }

    /// Upper bound on how far displayed data may lag the store.
    pub fn max_lag(&self) -> Duration {
        self.effective_interval()
    }

    /// Whether data written at `written_at` has outlived one effective
    /// interval by `now`. A write stamped in the future counts as fresh.
    pub fn is_stale(&self, written_at: SystemTime, now: SystemTime) -> bool {
        match now.duration_since(written_at) {
            Ok(age) => age > self.effective_interval(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval_is_one_hour() {
        let contract = RefreshContract::default();
        assert_eq!(contract.interval, Duration::from_secs(3600));
        assert_eq!(contract.effective_interval(), Duration::from_secs(3600));
    }

    #[test]
    fn test_os_minimum_stretches_interval() {
        let contract = RefreshContract::new(Duration::from_secs(60))
            .with_os_minimum(Duration::from_secs(900));
        assert_eq!(contract.effective_interval(), Duration::from_secs(900));
        assert_eq!(contract.max_lag(), Duration::from_secs(900));

        let unconstrained = RefreshContract::new(Duration::from_secs(3600))
            .with_os_minimum(Duration::from_secs(900));
        assert_eq!(unconstrained.effective_interval(), Duration::from_secs(3600));
    }

    #[test]
    fn test_next_refresh_counts_from_now() {
        let contract = RefreshContract::new(Duration::from_secs(60));
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        assert_eq!(
            contract.next_refresh(now),
            SystemTime::UNIX_EPOCH + Duration::from_secs(1_060)
        );
    }

    #[test]
    fn test_staleness_boundary() {
        let contract = RefreshContract::new(Duration::from_secs(60));
        let written = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);

        // Exactly one interval old is still acceptable lag.
        assert!(!contract.is_stale(written, written + Duration::from_secs(60)));
        assert!(contract.is_stale(written, written + Duration::from_secs(61)));
        assert!(!contract.is_stale(written, written));
    }

    #[test]
    fn test_future_write_is_fresh() {
        let contract = RefreshContract::new(Duration::from_secs(60));
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        let written = now + Duration::from_secs(500);
        assert!(!contract.is_stale(written, now));
    }
}
