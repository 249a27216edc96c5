//! CSV output for the merged roster

use crate::error::{Error, Result};
use crate::merger::MergedRoster;
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 2] = ["name", "in_person"];

/// Write the roster to `path` with a `name,in_person` header
pub fn write_roster<P: AsRef<Path>>(roster: &MergedRoster, path: P) -> Result<()> {
    let path = path.as_ref();
    let to_error = |e: csv::Error| Error::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(to_error)?;

    write_rows(roster, writer).map_err(to_error)
}

/// Write the roster to any writer (useful for testing)
pub fn write_roster_to<W: Write>(roster: &MergedRoster, writer: W) -> csv::Result<()> {
    let writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    write_rows(roster, writer)
}

fn write_rows<W: Write>(roster: &MergedRoster, mut writer: csv::Writer<W>) -> csv::Result<()> {
    // Header is written by hand so an empty roster still gets one
    writer.write_record(HEADER)?;
    for attendee in &roster.rows {
        writer.serialize(attendee)?;
    }
    writer.flush()?;
    Ok(())
}
