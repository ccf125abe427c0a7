use super::action::Action;
use super::person::PersonName;
use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;

/// A stored attendance event. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: i64,                    // ⇔ records.id (AUTOINCREMENT)
    pub first_name: String,         // ⇔ records.first_name
    pub last_name: String,          // ⇔ records.last_name
    pub action: Action,             // ⇔ records.action ('Check-In' | 'Check-Out')
    pub timestamp: DateTime<Local>, // ⇔ records.timestamp (TEXT, RFC3339)
}

impl Event {
    pub fn person(&self) -> PersonName {
        PersonName::new(&self.first_name, &self.last_name)
    }

    pub fn timestamp_str(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    /// Short form for tables.
    pub fn display_time(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// An event not yet persisted. The store assigns `id`, and `timestamp`
/// when it is left empty.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub first_name: String,
    pub last_name: String,
    pub action: Action,
    pub timestamp: Option<DateTime<Local>>,
}

impl NewEvent {
    pub fn new(person: &PersonName, action: Action) -> Self {
        Self {
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            action,
            timestamp: None,
        }
    }

    pub fn at(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Storage / export format for timestamps: RFC3339 with microseconds.
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, false)
}

pub fn parse_timestamp(s: &str) -> Option<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Local))
}
