// src/export/model.rs

use crate::errors::{AppError, AppResult};
use crate::models::event::parse_timestamp;
use crate::models::{Action, Event};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One exported row. Field names are the published CSV header:
/// `First Name,Last Name,Action,Timestamp`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Action")]
    pub action: Action,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

impl From<&Event> for RecordExport {
    fn from(ev: &Event) -> Self {
        Self {
            first_name: ev.first_name.clone(),
            last_name: ev.last_name.clone(),
            action: ev.action,
            timestamp: ev.timestamp_str(),
        }
    }
}

impl RecordExport {
    pub fn parsed_timestamp(&self) -> AppResult<DateTime<Local>> {
        parse_timestamp(&self.timestamp)
            .ok_or_else(|| AppError::InvalidTimestamp(self.timestamp.clone()))
    }
}

pub(crate) fn to_rows(events: &[Event]) -> Vec<RecordExport> {
    events.iter().map(RecordExport::from).collect()
}
