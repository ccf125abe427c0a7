use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// Identity of a person: the (first, last) name pair.
/// Not unique across real people, which is why check-out prefers ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PersonName {
    pub first_name: String,
    pub last_name: String,
}

impl PersonName {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// How a check-out names its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonRef {
    /// Id of any event belonging to the person (usually the roster's check-in id).
    ById(i64),
    ByName(PersonName),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Unknown,
    CheckedIn,
    CheckedOut,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Unknown => "never seen",
            Status::CheckedIn => "checked in",
            Status::CheckedOut => "checked out",
        }
    }
}

/// A person currently checked in, with the check-in that put them there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub person: PersonName,
    pub event_id: i64,
    pub since: DateTime<Local>,
}
