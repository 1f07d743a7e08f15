// ABOUTME: Lenient date parsing for exercise input and log filters
// ABOUTME: Renders stored timestamps as calendar-date strings like "Mon Jan 01 2024"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Date handling
//!
//! All timestamps are stored and compared in UTC. Input accepts the common
//! shapes clients send (full RFC 3339, date-time without offset, bare dates,
//! year-month and year-only dates, and the calendar-date rendering this
//! service emits). Output always drops
//! the time of day.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serializer;

/// Format used when rendering a stored date back to clients
pub const CALENDAR_DATE_FORMAT: &str = "%a %b %d %Y";

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", CALENDAR_DATE_FORMAT, "%b %d %Y"];

/// Parse a client-supplied date, returning `None` when nothing matches
///
/// Values without an explicit offset are interpreted as UTC; bare dates
/// resolve to UTC midnight, `YYYY-MM` and `YYYY` to midnight on the first day
/// of that month or year.
#[must_use]
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(date.and_time(NaiveTime::MIN).and_utc());
        }
    }

    parse_partial_date(input).map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

fn parse_partial_date(input: &str) -> Option<NaiveDate> {
    if !input.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        return None;
    }
    let padded = match input.len() {
        4 => format!("{input}-01-01"),
        7 => format!("{input}-01"),
        _ => return None,
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d").ok()
}

/// Render a stored timestamp as a calendar date, discarding the time of day
#[must_use]
pub fn render_calendar_date(date: &DateTime<Utc>) -> String {
    date.format(CALENDAR_DATE_FORMAT).to_string()
}

/// `serialize_with` adapter emitting [`render_calendar_date`]
///
/// # Errors
///
/// Propagates serializer errors
pub fn serialize_calendar_date<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&render_calendar_date(date))
}
