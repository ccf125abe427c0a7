use super::model::{RecordExport, to_rows};
use crate::errors::AppResult;
use crate::models::Event;
use std::io;
use std::path::Path;

pub const HEADER: [&str; 4] = ["First Name", "Last Name", "Action", "Timestamp"];

/// Writes events as CSV (header first) to any writer.
pub fn write_records<W: io::Write>(out: W, events: &[Event]) -> AppResult<()> {
    // header is written by hand so an empty export still carries it
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    wtr.write_record(HEADER)?;

    for row in to_rows(events) {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_csv(path: &Path, events: &[Event]) -> AppResult<()> {
    let file = std::fs::File::create(path)?;
    write_records(io::BufWriter::new(file), events)
}

/// Parses a file produced by [`write_records`].
pub fn read_records<R: io::Read>(input: R) -> AppResult<Vec<RecordExport>> {
    let mut rdr = csv::Reader::from_reader(input);

    let mut out = Vec::new();
    for row in rdr.deserialize() {
        out.push(row?);
    }
    Ok(out)
}
