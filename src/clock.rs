//! Time source for response timestamps.
//!
//! Handlers take the current time from a `Clock` instead of calling
//! `Utc::now()` directly, so tests can pin it with `FixedClock`.

use chrono::{DateTime, SecondsFormat, Utc};

/// Provides the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Current time as an RFC 3339 UTC string with microsecond precision.
    fn timestamp(&self) -> String {
        format_timestamp(self.now())
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the time it was constructed with.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_returns_current_time() {
        let clock = SystemClock;
        let before = Utc::now();
        let result = clock.now();
        let after = Utc::now();

        assert!(result >= before);
        assert!(result <= after);
    }

    #[test]
    fn test_fixed_clock_returns_given_time() {
        let fixed = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let clock = FixedClock::new(fixed);

        assert_eq!(clock.now(), fixed);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_format_timestamp_is_utc_with_micros() {
        let time = DateTime::from_timestamp(1_700_000_000, 123_456_000).unwrap();
        assert_eq!(format_timestamp(time), "2023-11-14T22:13:20.123456Z");
    }

    #[test]
    fn test_timestamp_parses_back() {
        let clock = SystemClock;
        let parsed = DateTime::parse_from_rfc3339(&clock.timestamp()).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }
}
