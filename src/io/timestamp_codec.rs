//! Textual forms of `Timestamp`
//!
//! Two shapes coexist in the data: an integer count since the Unix epoch and a
//! `YYYY-MM-DD HH:MM:SS` calendar string. Decoding accepts either; the unit of
//! the integer form and the zone of the calendar form depend on the column,
//! so each column declares a `TimestampFormat`.

use crate::types::{CalendarZone, EpochUnit, Timestamp};
use chrono::{Local, NaiveDateTime, TimeZone, Utc};

/// `strftime` pattern of the calendar form
pub const CALENDAR_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Calendar text written for an unknown timestamp
pub const UNKNOWN_CALENDAR_TEXT: &str = "UnknownTime";

/// How one timestamp column is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampFormat {
    /// Unit of the integer form
    pub unit: EpochUnit,
    /// Zone of the calendar form
    pub zone: CalendarZone,
}

impl TimestampFormat {
    /// Order header column: epoch seconds, local calendar time
    pub const ORDER: TimestampFormat = TimestampFormat {
        unit: EpochUnit::Seconds,
        zone: CalendarZone::Local,
    };

    /// Trailing column of a legacy order row: epoch milliseconds
    pub const LEGACY_ORDER: TimestampFormat = TimestampFormat {
        unit: EpochUnit::Milliseconds,
        zone: CalendarZone::Local,
    };

    /// Transaction log column: UTC calendar text, epoch milliseconds
    pub const TRANSACTION: TimestampFormat = TimestampFormat {
        unit: EpochUnit::Milliseconds,
        zone: CalendarZone::Utc,
    };

    /// Bank account last-activity column: UTC calendar text, epoch seconds
    pub const ACCOUNT_ACTIVITY: TimestampFormat = TimestampFormat {
        unit: EpochUnit::Seconds,
        zone: CalendarZone::Utc,
    };

    /// Decode a column; never fails
    pub fn decode(&self, text: &str) -> Timestamp {
        decode_timestamp(text, *self)
    }

    /// Encode as an integer in this column's unit
    pub fn encode_epoch(&self, timestamp: Timestamp) -> String {
        timestamp.to_epoch(self.unit).to_string()
    }

    /// Encode as calendar text in this column's zone
    pub fn encode_calendar(&self, timestamp: Timestamp) -> String {
        let Some(instant) = timestamp.as_datetime() else {
            return UNKNOWN_CALENDAR_TEXT.to_string();
        };

        match self.zone {
            CalendarZone::Utc => instant.format(CALENDAR_FORMAT).to_string(),
            CalendarZone::Local => instant
                .with_timezone(&Local)
                .format(CALENDAR_FORMAT)
                .to_string(),
        }
    }
}

/// Whether `text` has the shape of an integer timestamp
pub fn looks_numeric(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Decode a timestamp column
///
/// Tries the integer form first when the text looks numeric, then the
/// calendar form. Anything else decodes to `Timestamp::UNKNOWN`.
pub fn decode_timestamp(text: &str, format: TimestampFormat) -> Timestamp {
    let text = text.trim();

    if looks_numeric(text) {
        if let Ok(value) = text.parse::<i64>() {
            return Timestamp::from_epoch(value, format.unit);
        }
    }

    let Ok(naive) = NaiveDateTime::parse_from_str(text, CALENDAR_FORMAT) else {
        return Timestamp::UNKNOWN;
    };

    let instant = match format.zone {
        CalendarZone::Utc => Some(Utc.from_utc_datetime(&naive)),
        CalendarZone::Local => Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc)),
    };

    instant.map_or(Timestamp::UNKNOWN, Timestamp::from_datetime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
    }

    #[rstest]
    #[case::integer("123", true)]
    #[case::negative("-5", true)]
    #[case::calendar("2024-05-01 08:00:00", false)]
    #[case::empty("", false)]
    #[case::bare_minus("-", false)]
    #[case::decimal("1.5", false)]
    fn test_looks_numeric(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(looks_numeric(text), expected);
    }

    #[rstest]
    #[case::seconds("1714550400", TimestampFormat::ORDER, utc(2024, 5, 1, 8, 0, 0))]
    #[case::millis("1714550400000", TimestampFormat::TRANSACTION, utc(2024, 5, 1, 8, 0, 0))]
    #[case::utc_calendar("2024-05-01 08:00:00", TimestampFormat::TRANSACTION, utc(2024, 5, 1, 8, 0, 0))]
    #[case::padded(" 2024-05-01 08:00:00 ", TimestampFormat::TRANSACTION, utc(2024, 5, 1, 8, 0, 0))]
    fn test_decode_known(
        #[case] text: &str,
        #[case] format: TimestampFormat,
        #[case] expected: Timestamp,
    ) {
        assert_eq!(format.decode(text), expected);
    }

    #[rstest]
    #[case::garbage("yesterday")]
    #[case::unknown_text(UNKNOWN_CALENDAR_TEXT)]
    #[case::empty("")]
    #[case::zero("0")]
    #[case::date_only("2024-05-01")]
    #[case::overflowing("99999999999999999999")]
    fn test_decode_unknown(#[case] text: &str) {
        assert_eq!(TimestampFormat::TRANSACTION.decode(text), Timestamp::UNKNOWN);
    }

    #[test]
    fn test_calendar_round_trip_utc() {
        let ts = utc(2023, 12, 31, 23, 59, 59);
        let format = TimestampFormat::TRANSACTION;

        let text = format.encode_calendar(ts);
        assert_eq!(text, "2023-12-31 23:59:59");
        assert_eq!(format.decode(&text), ts);
    }

    #[test]
    fn test_calendar_round_trip_local() {
        let ts = utc(2024, 1, 15, 12, 0, 0);
        let format = TimestampFormat::ORDER;

        let text = format.encode_calendar(ts);
        assert_eq!(format.decode(&text), ts);
    }

    #[rstest]
    #[case::seconds(TimestampFormat::ORDER, "1714550400")]
    #[case::millis(TimestampFormat::LEGACY_ORDER, "1714550400000")]
    fn test_encode_epoch(#[case] format: TimestampFormat, #[case] expected: &str) {
        assert_eq!(format.encode_epoch(utc(2024, 5, 1, 8, 0, 0)), expected);
    }

    #[test]
    fn test_unknown_encodings_decode_back_to_unknown() {
        let format = TimestampFormat::TRANSACTION;

        assert_eq!(format.encode_calendar(Timestamp::UNKNOWN), UNKNOWN_CALENDAR_TEXT);
        assert_eq!(format.encode_epoch(Timestamp::UNKNOWN), "0");
        assert_eq!(format.decode(&format.encode_calendar(Timestamp::UNKNOWN)), Timestamp::UNKNOWN);
        assert_eq!(format.decode(&format.encode_epoch(Timestamp::UNKNOWN)), Timestamp::UNKNOWN);
    }
}
