//! CSV readers for the Guild and Meetup exports

use crate::error::{Error, Result};
use crate::record::{RawGuildRecord, RawMeetupRecord};
use crate::schema::{Schema, GUILD_SCHEMA, MEETUP_SCHEMA};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read a Guild export from disk
pub fn read_guild<P: AsRef<Path>>(path: P) -> Result<Vec<RawGuildRecord>> {
    read_file(path.as_ref(), &GUILD_SCHEMA)
}

/// Read a Meetup export from disk
pub fn read_meetup<P: AsRef<Path>>(path: P) -> Result<Vec<RawMeetupRecord>> {
    read_file(path.as_ref(), &MEETUP_SCHEMA)
}

/// Parse a Guild export from a string (useful for testing)
pub fn read_guild_str(content: &str, source_name: &str) -> Result<Vec<RawGuildRecord>> {
    read_records(content.as_bytes(), &GUILD_SCHEMA, PathBuf::from(source_name))
}

/// Parse a Meetup export from a string (useful for testing)
pub fn read_meetup_str(content: &str, source_name: &str) -> Result<Vec<RawMeetupRecord>> {
    read_records(content.as_bytes(), &MEETUP_SCHEMA, PathBuf::from(source_name))
}

fn read_file<T: DeserializeOwned>(path: &Path, schema: &Schema) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    read_records(BufReader::new(file), schema, path.to_path_buf())
}

/// Validate the header row against `schema`, then decode every row
fn read_records<T, R>(reader: R, schema: &Schema, path: PathBuf) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // Short rows leave trailing columns null
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::Csv {
            path: path.clone(),
            source: e,
        })?
        .clone();

    schema.validate(headers.iter(), &path)?;

    let mut rows = Vec::new();
    for result in csv_reader.deserialize::<T>() {
        let row = result.map_err(|e| Error::Csv {
            path: path.clone(),
            source: e,
        })?;
        rows.push(row);
    }

    debug!(
        source = %schema.source,
        path = %path.display(),
        rows = rows.len(),
        "read export"
    );

    Ok(rows)
}
