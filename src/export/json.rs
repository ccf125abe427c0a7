use super::model::to_rows;
use crate::errors::AppResult;
use crate::models::Event;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Writes events as a pretty-printed JSON array with the CSV field names.
pub fn write_json(path: &Path, events: &[Event]) -> AppResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &to_rows(events))?;
    Ok(())
}
