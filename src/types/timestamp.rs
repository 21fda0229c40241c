//! Instants as they appear in the persisted files
//!
//! A `Timestamp` is either a known UTC instant or the explicit "unknown" sentinel
//! produced when a timestamp column cannot be read. The sentinel orders before
//! every known instant, so it is never considered recent.

use chrono::{DateTime, TimeDelta, Utc};

/// Unit of an integer timestamp column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpochUnit {
    /// Whole seconds since the Unix epoch
    Seconds,
    /// Milliseconds since the Unix epoch
    Milliseconds,
}

/// Time zone used to interpret a `YYYY-MM-DD HH:MM:SS` column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarZone {
    /// The calendar text is UTC wall-clock time
    Utc,
    /// The calendar text is wall-clock time in the host's local zone
    Local,
}

/// A point in time, or the unknown sentinel
///
/// Ordering: `UNKNOWN` < any known instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(Option<DateTime<Utc>>);

impl Timestamp {
    /// The sentinel for an unreadable or absent timestamp
    pub const UNKNOWN: Timestamp = Timestamp(None);

    /// Wrap a known instant
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        Timestamp(Some(instant))
    }

    /// The current instant, truncated to whole seconds
    ///
    /// Every textual form written by the store has second resolution, so
    /// in-process instants are truncated up front to survive a save/load cycle.
    pub fn now() -> Self {
        Self::from_epoch(Utc::now().timestamp(), EpochUnit::Seconds)
    }

    /// Build from an integer count since the epoch
    ///
    /// Zero is the historical "never set" value and maps to `UNKNOWN`, as do
    /// values outside chrono's representable range.
    pub fn from_epoch(value: i64, unit: EpochUnit) -> Self {
        if value == 0 {
            return Self::UNKNOWN;
        }
        let instant = match unit {
            EpochUnit::Seconds => DateTime::from_timestamp(value, 0),
            EpochUnit::Milliseconds => DateTime::from_timestamp_millis(value),
        };
        Timestamp(instant)
    }

    /// Integer count since the epoch; `UNKNOWN` yields 0
    pub fn to_epoch(&self, unit: EpochUnit) -> i64 {
        match (self.0, unit) {
            (None, _) => 0,
            (Some(instant), EpochUnit::Seconds) => instant.timestamp(),
            (Some(instant), EpochUnit::Milliseconds) => instant.timestamp_millis(),
        }
    }

    /// The underlying instant, if known
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Whether this is a real instant rather than the sentinel
    pub fn is_known(&self) -> bool {
        self.0.is_some()
    }

    /// Whether this instant is at or after `cutoff`
    ///
    /// Always false for `UNKNOWN`.
    pub fn is_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.0.is_some_and(|instant| instant >= cutoff)
    }

    /// Cutoff instant for "the last `days` days" relative to `now`
    ///
    /// A window reaching past the earliest representable instant saturates to
    /// `DateTime::<Utc>::MIN_UTC`, which admits every known timestamp.
    pub fn cutoff_days_before(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
        TimeDelta::try_days(i64::from(days))
            .and_then(|window| now.checked_sub_signed(window))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Timestamp::from_datetime(instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case::seconds(1_700_000_000, EpochUnit::Seconds)]
    #[case::millis(1_700_000_000_123, EpochUnit::Milliseconds)]
    #[case::before_epoch(-86_400, EpochUnit::Seconds)]
    fn test_epoch_round_trip(#[case] value: i64, #[case] unit: EpochUnit) {
        let ts = Timestamp::from_epoch(value, unit);
        assert!(ts.is_known());
        assert_eq!(ts.to_epoch(unit), value);
    }

    #[test]
    fn test_zero_epoch_is_unknown() {
        assert_eq!(Timestamp::from_epoch(0, EpochUnit::Seconds), Timestamp::UNKNOWN);
        assert_eq!(Timestamp::UNKNOWN.to_epoch(EpochUnit::Milliseconds), 0);
    }

    #[test]
    fn test_out_of_range_epoch_is_unknown() {
        assert!(!Timestamp::from_epoch(i64::MAX, EpochUnit::Seconds).is_known());
    }

    #[test]
    fn test_now_has_whole_seconds() {
        let now = Timestamp::now();
        let instant = now.as_datetime().unwrap();
        assert_eq!(instant.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_unknown_sorts_first_and_is_never_recent() {
        let cutoff = Utc.with_ymd_and_hms(1971, 1, 1, 0, 0, 0).unwrap();
        let known = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap());

        assert!(Timestamp::UNKNOWN < known);
        assert!(!Timestamp::UNKNOWN.is_since(cutoff));
        assert!(known.is_since(cutoff));
    }

    #[rstest]
    #[case::thirty_days(30, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())]
    #[case::zero_days(0, Utc.with_ymd_and_hms(2024, 5, 31, 12, 0, 0).unwrap())]
    #[case::huge_days(u32::MAX, DateTime::<Utc>::MIN_UTC)]
    fn test_cutoff_days_before(#[case] days: u32, #[case] expected: DateTime<Utc>) {
        let now = Utc.with_ymd_and_hms(2024, 5, 31, 12, 0, 0).unwrap();
        assert_eq!(Timestamp::cutoff_days_before(now, days), expected);
    }

    #[test]
    fn test_saturated_cutoff_admits_old_instants() {
        let cutoff = Timestamp::cutoff_days_before(Utc::now(), u32::MAX);
        let old = Timestamp::from_datetime(Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap());
        assert!(old.is_since(cutoff));
        assert!(!Timestamp::UNKNOWN.is_since(cutoff));
    }
}
