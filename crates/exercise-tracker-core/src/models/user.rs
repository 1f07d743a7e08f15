// ABOUTME: User aggregate root owning the embedded exercise log
// ABOUTME: Includes the opaque UserId newtype and the id/username projection

use super::Exercise;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh identifier
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// A registered username and its append-only exercise log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Identifier
    pub id: UserId,
    /// Username, unique only by an application-level check
    pub username: String,
    /// Exercises in insertion order
    pub exercises: Vec<Exercise>,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user with an empty exercise log
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            exercises: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Append an exercise to the end of the log and return a reference to it
    pub fn push_exercise(&mut self, exercise: Exercise) -> &Exercise {
        self.exercises.push(exercise);
        &self.exercises[self.exercises.len() - 1]
    }

    /// Id/username projection without the exercise log
    #[must_use]
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

/// Projection of a user used by listings and registration responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Identifier, exposed as `_id` on the wire
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Username
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_round_trips_through_string() {
        let id = UserId::new();
        let parsed: UserId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<UserId>().is_err());
    }

    #[test]
    fn test_push_exercise_preserves_insertion_order() {
        let mut user = User::new("alice");
        user.push_exercise(Exercise::new("first", 10.0, None));
        let last = user.push_exercise(Exercise::new("second", 20.0, None));

        assert_eq!(last.description, "second");
        let order: Vec<_> = user.exercises.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(order, ["first", "second"]);
    }

    #[test]
    fn test_summary_serializes_underscore_id() {
        let user = User::new("bob");
        let json = serde_json::to_value(user.summary()).unwrap();

        assert_eq!(json["username"], "bob");
        assert_eq!(json["_id"], user.id.to_string());
        assert!(json.get("exercises").is_none());
    }
}
