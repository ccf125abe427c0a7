use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of attendance event.
///
/// Persisted (and exported) as `Check-In` / `Check-Out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "Check-In")]
    CheckIn,
    #[serde(rename = "Check-Out")]
    CheckOut,
}

impl Action {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Action::CheckIn => "Check-In",
            Action::CheckOut => "Check-Out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Check-In" => Some(Action::CheckIn),
            "Check-Out" => Some(Action::CheckOut),
            _ => None,
        }
    }

    /// Lenient parser for command-line input.
    /// Accepts the stored form plus `in` / `out` / `checkin` / `checkout`.
    pub fn from_user_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "check-in" | "checkin" | "in" => Some(Action::CheckIn),
            "check-out" | "checkout" | "out" => Some(Action::CheckOut),
            _ => None,
        }
    }

    pub fn is_check_in(&self) -> bool {
        matches!(self, Action::CheckIn)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
