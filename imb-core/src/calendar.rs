//! The UK electricity market settles in Europe/London local days. These
//! helpers convert instants to that calendar and count the half-hour
//! settlement periods a local day contains.

use crate::models::STANDARD_DAY_PERIODS;
use chrono::{NaiveDate, Offset as _, TimeZone as _};
use chrono_tz::Europe::London;
use time::{Date, OffsetDateTime, UtcOffset, macros::format_description};

/// The Europe/London UTC offset in force at `at`.
pub fn uk_offset(at: OffsetDateTime) -> UtcOffset {
    chrono::DateTime::from_timestamp(at.unix_timestamp(), 0)
        .map(|utc| {
            London
                .offset_from_utc_datetime(&utc.naive_utc())
                .fix()
                .local_minus_utc()
        })
        .and_then(|seconds| UtcOffset::from_whole_seconds(seconds).ok())
        .unwrap_or(UtcOffset::UTC)
}

/// The UK local calendar date at `at`.
pub fn uk_date(at: OffsetDateTime) -> Date {
    at.to_offset(uk_offset(at)).date()
}

/// The number of half-hour settlement periods in the UK local day `date`:
/// 46 when the clocks go forward, 50 when they go back, 48 otherwise.
pub fn settlement_periods(date: Date) -> usize {
    let local_midnight = |date: Date| {
        NaiveDate::from_ymd_opt(date.year(), u8::from(date.month()) as u32, date.day() as u32)
            .and_then(|day| day.and_hms_opt(0, 0, 0))
            .and_then(|midnight| London.from_local_datetime(&midnight).earliest())
    };

    match (local_midnight(date), date.next_day().and_then(local_midnight)) {
        (Some(start), Some(end)) => ((end - start).num_minutes() / 30) as usize,
        _ => STANDARD_DAY_PERIODS,
    }
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
}
