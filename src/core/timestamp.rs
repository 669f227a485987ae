//! Timestamp formatting for record headers
//!
//! The default format prints `YYYY-M-D H:M:S` with no zero padding, a
//! zero-based month and the *day of the week* (0 = Sunday) in the day slot.
//! Existing log consumers parse that shape, so it stays the default.
//! `Calendar` is available for new deployments that want a real date.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-0-3 9:5:7` for Wednesday 2025-01-08 09:05:07
    #[default]
    Legacy,

    /// `2025-1-8 9:5:7`: one-based month and day of month, same padding
    Calendar,
}

impl TimestampFormat {
    #[must_use]
    pub fn format<T: Datelike + Timelike>(&self, datetime: &T) -> String {
        let (month, day) = match self {
            TimestampFormat::Legacy => (
                datetime.month0(),
                datetime.weekday().num_days_from_sunday(),
            ),
            TimestampFormat::Calendar => (datetime.month(), datetime.day()),
        };
        format!(
            "{}-{}-{} {}:{}:{}",
            datetime.year(),
            month,
            day,
            datetime.hour(),
            datetime.minute(),
            datetime.second()
        )
    }

    /// Format a zoned instant in its own timezone
    #[must_use]
    pub fn format_datetime<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String {
        self.format(&datetime.naive_local())
    }

    /// Format the current local wall-clock time
    #[must_use]
    pub fn now(&self) -> String {
        self.format_datetime(&Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, Utc};

    fn fixed_datetime() -> NaiveDateTime {
        // Wednesday 2025-01-08 09:05:07
        NaiveDate::from_ymd_opt(2025, 1, 8)
            .and_then(|d| d.and_hms_opt(9, 5, 7))
            .expect("valid datetime")
    }

    #[test]
    fn test_legacy_format_uses_zero_based_month_and_weekday() {
        assert_eq!(TimestampFormat::Legacy.format(&fixed_datetime()), "2025-0-3 9:5:7");
    }

    #[test]
    fn test_legacy_format_sunday_is_zero() {
        let sunday = NaiveDate::from_ymd_opt(2025, 12, 28)
            .and_then(|d| d.and_hms_opt(23, 59, 0))
            .expect("valid datetime");
        assert_eq!(TimestampFormat::Legacy.format(&sunday), "2025-11-0 23:59:0");
    }

    #[test]
    fn test_calendar_format() {
        assert_eq!(
            TimestampFormat::Calendar.format(&fixed_datetime()),
            "2025-1-8 9:5:7"
        );
    }

    #[test]
    fn test_format_datetime_uses_local_fields_of_zone() {
        let utc = Utc.from_utc_datetime(&fixed_datetime());
        assert_eq!(TimestampFormat::Legacy.format_datetime(&utc), "2025-0-3 9:5:7");
    }

    #[test]
    fn test_now_has_expected_shape() {
        let stamp = TimestampFormat::Legacy.now();
        let (date, time) = stamp.split_once(' ').expect("date and time");
        assert_eq!(date.split('-').count(), 3);
        assert_eq!(time.split(':').count(), 3);
    }

    #[test]
    fn test_default_is_legacy() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Legacy);
    }
}
