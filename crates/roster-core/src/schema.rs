//! Required-column checks for the input exports

use crate::error::{Error, Result, SourceKind};
use std::path::Path;

/// The columns a source export must carry
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub source: SourceKind,
    pub required: &'static [&'static str],
}

/// Columns required in a Guild export
pub const GUILD_SCHEMA: Schema = Schema {
    source: SourceKind::Guild,
    required: &["first_name", "last_name", "attendance_status"],
};

/// Columns required in a Meetup export
pub const MEETUP_SCHEMA: Schema = Schema {
    source: SourceKind::Meetup,
    required: &["Name", "First name", "Last name", "RSVP"],
};

impl Schema {
    /// Return the first required column absent from `headers`, in declared order
    pub fn missing_column<'h, I>(&self, headers: I) -> Option<&'static str>
    where
        I: IntoIterator<Item = &'h str>,
    {
        let present: Vec<&str> = headers.into_iter().collect();
        self.required
            .iter()
            .copied()
            .find(|column| !present.contains(column))
    }

    /// Validate a header row; extra columns are ignored
    pub fn validate<'h, I>(&self, headers: I, path: &Path) -> Result<()>
    where
        I: IntoIterator<Item = &'h str>,
    {
        match self.missing_column(headers) {
            None => Ok(()),
            Some(column) => Err(Error::MissingColumn {
                source_kind: self.source,
                path: path.to_path_buf(),
                column: column.to_string(),
            }),
        }
    }
}
