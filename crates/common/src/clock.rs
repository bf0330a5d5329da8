//! Wall-clock access for storage keys and shot timestamps.
//!
//! Leaderboard entries are keyed by the local calendar date and every
//! reported shot carries the local time-of-day at which it was emitted.
//! Both go through [`WallClock`] so callers can pin time in tests.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Format used for shot timestamps (`14:03:59`).
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S";

/// Source of the current local date and time.
pub trait WallClock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Current local time-of-day, truncated to whole seconds.
    fn time_of_day(&self) -> String {
        format_time_of_day(self.now().time())
    }
}

/// The system's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self { instant }
    }

    /// Clock pinned to `time` on `date`.
    pub fn at(date: NaiveDate, time: NaiveTime) -> Self {
        Self::new(date.and_time(time))
    }
}

impl WallClock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }
}

/// Render a time-of-day without fractional seconds.
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format(TIME_OF_DAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fixed_clock_reports_pinned_date() {
        let clock = FixedClock::at(date(2024, 3, 9), NaiveTime::from_hms_opt(7, 5, 0).unwrap());
        assert_eq!(clock.today(), date(2024, 3, 9));
        assert_eq!(clock.time_of_day(), "07:05:00");
    }

    #[test]
    fn test_time_of_day_drops_fraction() {
        let time = NaiveTime::from_hms_milli_opt(23, 59, 58, 999).unwrap();
        assert_eq!(format_time_of_day(time), "23:59:58");
    }

    #[test]
    fn test_system_clock_today_matches_now() {
        let clock = SystemClock;
        let now = clock.now();
        // Tolerate a midnight rollover between the two calls.
        let today = clock.today();
        assert!(today == now.date() || today == now.date().succ_opt().unwrap());
    }
}
