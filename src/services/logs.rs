// ABOUTME: Exercise log query business logic
// ABOUTME: Date-range filtering and limit truncation over a user's embedded exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Log queries
//!
//! Filtering happens in memory over the already-loaded aggregate, in a fixed
//! order: `from` (inclusive), then `to` (inclusive), then `limit`.
//!
//! Query values are coerced leniently:
//!
//! - empty values count as absent
//! - a `from`/`to` that does not parse as a date matches no exercise
//! - `limit` takes the leading integer of the value (`"3abc"` is 3); a value
//!   with no leading integer yields zero entries, and a negative `n` drops the
//!   last `n` entries

use chrono::{DateTime, Utc};
use exercise_tracker_core::dates::parse_date;
use tracing::debug;

use super::load_user;
use crate::database::Database;
use crate::errors::AppResult;
use crate::models::{Exercise, UserSummary};

/// One end of a date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    /// A parsed instant
    At(DateTime<Utc>),
    /// The client sent something that is not a date
    Unparseable,
}

impl DateBound {
    fn parse(raw: &str) -> Self {
        parse_date(raw).map_or(Self::Unparseable, Self::At)
    }

    fn admits_on_or_after(self, date: &DateTime<Utc>) -> bool {
        matches!(self, Self::At(bound) if *date >= bound)
    }

    fn admits_on_or_before(self, date: &DateTime<Utc>) -> bool {
        matches!(self, Self::At(bound) if *date <= bound)
    }
}

/// Parsed log query parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    /// Lower bound, inclusive
    pub from: Option<DateBound>,
    /// Upper bound, inclusive
    pub to: Option<DateBound>,
    /// Slice end applied after date filtering
    pub limit: Option<i64>,
}

impl LogFilter {
    /// Coerce raw query-string values into a filter
    #[must_use]
    pub fn parse(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            from: non_empty(from).map(DateBound::parse),
            to: non_empty(to).map(DateBound::parse),
            limit: non_empty(limit).map(|raw| parse_leading_integer(raw).unwrap_or(0)),
        }
    }

    /// Apply the filter to exercises in insertion order
    #[must_use]
    pub fn apply<'a>(&self, exercises: &'a [Exercise]) -> Vec<&'a Exercise> {
        let mut selected: Vec<&Exercise> = exercises
            .iter()
            .filter(|ex| self.from.is_none_or(|bound| bound.admits_on_or_after(&ex.date)))
            .filter(|ex| self.to.is_none_or(|bound| bound.admits_on_or_before(&ex.date)))
            .collect();

        if let Some(limit) = self.limit {
            selected.truncate(slice_end(selected.len(), limit));
        }

        selected
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse the leading integer of `raw`, ignoring leading whitespace and any
/// trailing garbage; `None` when no digit follows the optional sign
fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // Saturate on overflow; any huge limit behaves the same
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// End index of `slice(0, limit)` over `len` items
fn slice_end(len: usize, limit: i64) -> usize {
    let magnitude = usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX);
    if limit >= 0 {
        len.min(magnitude)
    } else {
        len.saturating_sub(magnitude)
    }
}

/// A user's exercise log after filtering
#[derive(Debug, Clone)]
pub struct ExerciseLog {
    /// Owning user
    pub user: UserSummary,
    /// Matching exercises in insertion order
    pub entries: Vec<Exercise>,
}

impl ExerciseLog {
    /// Number of entries after filtering and limiting
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Fetch a user's exercise log narrowed by `filter`
///
/// # Errors
///
/// Returns `UserNotFound` if the user does not exist, or a storage failure
pub async fn get_logs(
    database: &Database,
    raw_user_id: &str,
    filter: &LogFilter,
) -> AppResult<ExerciseLog> {
    let user = load_user(database, raw_user_id).await?;

    let entries: Vec<Exercise> = filter.apply(&user.exercises).into_iter().cloned().collect();

    debug!(
        user.id = %user.id,
        log.total = user.exercises.len(),
        log.returned = entries.len(),
        "Exercise log queried"
    );

    Ok(ExerciseLog {
        user: user.summary(),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn exercises() -> Vec<Exercise> {
        [(1, "jan"), (2, "feb"), (3, "mar")]
            .into_iter()
            .map(|(month, name)| {
                Exercise::new(
                    name,
                    30.0,
                    Some(Utc.with_ymd_and_hms(2024, month, 1, 0, 0, 0).unwrap()),
                )
            })
            .collect()
    }

    fn names(selected: &[&Exercise]) -> Vec<String> {
        selected.iter().map(|ex| ex.description.clone()).collect()
    }

    #[test]
    fn test_no_filter_keeps_insertion_order() {
        let all = exercises();
        let selected = LogFilter::default().apply(&all);
        assert_eq!(names(&selected), ["jan", "feb", "mar"]);
    }

    #[test]
    fn test_from_is_inclusive() {
        let all = exercises();
        let filter = LogFilter::parse(Some("2024-02-01"), None, None);
        assert_eq!(names(&filter.apply(&all)), ["feb", "mar"]);

        let filter = LogFilter::parse(Some("2024-01-15"), None, None);
        assert_eq!(names(&filter.apply(&all)), ["feb", "mar"]);
    }

    #[test]
    fn test_from_and_to_combine() {
        let all = exercises();
        let filter = LogFilter::parse(Some("2024-01-15"), Some("2024-02-15"), None);
        assert_eq!(names(&filter.apply(&all)), ["feb"]);

        let filter = LogFilter::parse(None, Some("2024-02-01"), None);
        assert_eq!(names(&filter.apply(&all)), ["jan", "feb"]);
    }

    #[test]
    fn test_limit_applies_after_date_filter() {
        let all = exercises();
        assert_eq!(
            names(&LogFilter::parse(None, None, Some("1")).apply(&all)),
            ["jan"]
        );
        assert_eq!(
            names(&LogFilter::parse(Some("2024-01-15"), None, Some("1")).apply(&all)),
            ["feb"]
        );
        assert_eq!(
            names(&LogFilter::parse(None, None, Some("10")).apply(&all)),
            ["jan", "feb", "mar"]
        );
    }

    #[test]
    fn test_unparseable_bounds_match_nothing() {
        let all = exercises();
        assert!(LogFilter::parse(Some("yesterday"), None, None)
            .apply(&all)
            .is_empty());
        assert!(LogFilter::parse(None, Some("later"), None)
            .apply(&all)
            .is_empty());
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let all = exercises();
        let filter = LogFilter::parse(Some(""), Some("  "), Some(""));
        assert_eq!(filter, LogFilter::default());
        assert_eq!(filter.apply(&all).len(), 3);
    }

    #[test]
    fn test_limit_coercion() {
        assert_eq!(parse_leading_integer("3"), Some(3));
        assert_eq!(parse_leading_integer("  2abc"), Some(2));
        assert_eq!(parse_leading_integer("1.9"), Some(1));
        assert_eq!(parse_leading_integer("-1"), Some(-1));
        assert_eq!(parse_leading_integer("abc"), None);
        assert_eq!(parse_leading_integer("-"), None);

        let all = exercises();
        assert!(LogFilter::parse(None, None, Some("abc")).apply(&all).is_empty());
        assert_eq!(
            names(&LogFilter::parse(None, None, Some("-1")).apply(&all)),
            ["jan", "feb"]
        );
        assert!(LogFilter::parse(None, None, Some("-9")).apply(&all).is_empty());
    }
}
