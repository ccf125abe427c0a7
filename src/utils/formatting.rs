//! Formatting utilities used for CLI outputs.

use chrono::{DateTime, Local};

/// Age of a check-in relative to `now`, e.g. "2 h 05 m".
pub fn since(ts: &DateTime<Local>, now: &DateTime<Local>) -> String {
    let mins = (*now - *ts).num_minutes().max(0);
    if mins < 60 {
        format!("{} m", mins)
    } else {
        format!("{} h {:02} m", mins / 60, mins % 60)
    }
}
