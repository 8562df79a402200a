//! Date parsing, calendar differences and human readable durations.

use std::fmt::Write;

use chrono::{
    DateTime, Datelike, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
};
use serde::{Deserialize, Serialize};

use crate::error::{HelperError, Result};

const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parses a local date/time.
///
/// Accepts `2024-03-05 07:08:09`, `2024-03-05T07:08:09`, `2024-03-05 07:08`,
/// a bare date (midnight) or an RFC 3339 timestamp, which is converted to
/// local time.
pub fn parse(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(parsed);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local).naive_local())
        .map_err(|_| HelperError::InvalidDateTime(s.to_string()))
}

/// Parses a time of day such as `17:00:00` or `17:00`.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| HelperError::InvalidDateTime(s.to_string()))
}

/// Parses `s` with an explicit strftime `format`.
///
/// Formats without time fields yield midnight of the parsed date.
pub fn parse_from_format(s: &str, format: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, format)
        .or_else(|_| NaiveDate::parse_from_str(s, format).map(|date| date.and_time(NaiveTime::MIN)))
        .map_err(|_| HelperError::InvalidDateTime(s.to_string()))
}

/// Renders `dt` with a strftime `format`, rejecting unknown specifiers.
pub fn format_time<Tz: TimeZone>(dt: &DateTime<Tz>, format: &str) -> Result<String>
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", dt.format(format))
        .map_err(|_| HelperError::InvalidDateTime(format.to_string()))?;
    Ok(out)
}

/// Unix timestamp of a local date/time string.
pub fn timestamp(s: &str) -> Result<i64> {
    let naive = parse(s)?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| HelperError::InvalidDateTime(s.to_string()))
}

/// Current local time as `Y-m-d H:M:S`, optionally with microseconds.
pub fn current_time(microseconds: bool) -> String {
    let now = Local::now();
    if microseconds {
        now.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    } else {
        now.format(DEFAULT_FORMAT).to_string()
    }
}

/// Current local time rendered with a strftime `format`.
pub fn current_time_as(format: &str) -> Result<String> {
    format_time(&Local::now(), format)
}

/// Calendar difference between two instants.
///
/// Components are always non-negative; `invert` is set when the second
/// instant precedes the first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDiff {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub min: u32,
    pub sec: u32,
    pub invert: bool,
}

impl TimeDiff {
    fn components(&self) -> [u32; 6] {
        [self.year, self.month, self.day, self.hour, self.min, self.sec]
    }
}

fn add_months(start: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    start.checked_add_months(Months::new(months))
}

/// Computes the calendar difference from `from` to `to`.
pub fn diff(from: NaiveDateTime, to: NaiveDateTime) -> TimeDiff {
    let (start, end, invert) = if to < from {
        (to, from, true)
    } else {
        (from, to, false)
    };

    let month_span =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let mut months = u32::try_from(month_span).unwrap_or(0);
    while months > 0 && add_months(start, months).map_or(true, |anchor| anchor > end) {
        months -= 1;
    }

    let anchor = add_months(start, months).unwrap_or(start);
    let remainder = end - anchor;
    let days = remainder.num_days();
    let seconds = remainder.num_seconds() - days * 86_400;

    TimeDiff {
        year: months / 12,
        month: months % 12,
        day: days as u32,
        hour: (seconds / 3600) as u32,
        min: (seconds % 3600 / 60) as u32,
        sec: (seconds % 60) as u32,
        invert,
    }
}

const FRIENDLY_UNITS: [&str; 6] = ["年", "个月", "天", "小时", "分钟", "秒"];

/// Describes the distance between `now` and `target`, e.g. `1年3天`.
///
/// Zero components are skipped and only the first `size` non-zero ones are
/// kept. With `future_only`, targets at or before `now` produce an empty
/// string.
pub fn friendly(
    target: NaiveDateTime,
    now: NaiveDateTime,
    size: usize,
    future_only: bool,
) -> String {
    if future_only && target <= now {
        return String::new();
    }

    diff(now, target)
        .components()
        .iter()
        .zip(FRIENDLY_UNITS)
        .filter(|(value, _)| **value > 0)
        .take(size)
        .map(|(value, unit)| format!("{}{}", value, unit))
        .collect()
}

/// Checks whether the time of day `input` falls in `[from, to]`.
///
/// When `from` is later than `to` the window wraps past midnight, so
/// `22:00`–`02:00` contains both `23:30` and `01:00`.
pub fn time_is_between(from: NaiveTime, to: NaiveTime, input: NaiveTime) -> bool {
    if from <= to {
        from <= input && input <= to
    } else {
        input >= from || input <= to
    }
}
