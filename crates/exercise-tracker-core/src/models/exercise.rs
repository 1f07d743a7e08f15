// ABOUTME: Exercise value object embedded in a user's log
// ABOUTME: Description, duration in minutes, and the UTC timestamp it was performed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// A single logged exercise, owned by exactly one [`super::User`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Free-form description
    pub description: String,
    /// Duration in minutes (unit is not validated)
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    /// When the exercise happened
    pub date: DateTime<Utc>,
}

impl Exercise {
    /// Build an exercise, defaulting the date to now when none is given
    #[must_use]
    pub fn new(description: impl Into<String>, duration: f64, date: Option<DateTime<Utc>>) -> Self {
        Self {
            description: description.into(),
            duration,
            date: date.unwrap_or_else(Utc::now),
        }
    }
}

/// Serialize whole-number durations as JSON integers (`30`, not `30.0`)
///
/// # Errors
///
/// Propagates serializer errors
#[allow(clippy::trivially_copy_pass_by_ref)] // serde's serialize_with signature
pub fn serialize_duration<S>(duration: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if duration.fract() == 0.0 && duration.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*duration as i64)
    } else {
        serializer.serialize_f64(*duration)
    }
}
