//! Merge engine combining the normalized Guild and Meetup rosters

use crate::corrections::NameCorrections;
use crate::error::Result;
use crate::guild::normalize_guild;
use crate::meetup::normalize_meetup;
use crate::parser::{read_guild, read_meetup};
use crate::record::NormalizedAttendee;
use crate::writer::write_roster;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info};

/// The deduplicated, name-sorted attendee list
///
/// A row's position is its index; there is no separate row number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedRoster {
    /// Attendees sorted by name
    pub rows: Vec<NormalizedAttendee>,
    /// Exact `(name, in_person)` duplicates removed during the merge
    pub duplicates_dropped: usize,
}

impl MergedRoster {
    /// Get the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows with their 0-based position
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &NormalizedAttendee)> + '_ {
        self.rows.iter().enumerate()
    }

    /// All rows carrying `name` (at most one per in-person value)
    pub fn find_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a NormalizedAttendee> {
        self.rows.iter().filter(move |a| a.name == name)
    }
}

/// Union both rosters, drop exact duplicates and sort by name
///
/// Guild rows come first in the union, so the first occurrence of a
/// duplicate is the one kept. The sort is stable: rows sharing a name keep
/// their union order.
pub fn merge(guild: Vec<NormalizedAttendee>, meetup: Vec<NormalizedAttendee>) -> MergedRoster {
    let mut rows = guild;
    rows.extend(meetup);
    let total = rows.len();

    let mut seen: HashSet<NormalizedAttendee> = HashSet::with_capacity(total);
    rows.retain(|attendee| seen.insert(attendee.clone()));
    let duplicates_dropped = total - rows.len();

    rows.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(rows = rows.len(), duplicates_dropped, "merged rosters");

    MergedRoster {
        rows,
        duplicates_dropped,
    }
}

/// Inputs and output of a file-to-file merge
#[derive(Debug, Clone)]
pub struct MergeJob {
    pub guild: PathBuf,
    pub meetup: PathBuf,
    pub output: PathBuf,
    pub corrections: NameCorrections,
}

impl MergeJob {
    /// Create a job using the built-in correction table
    pub fn new(
        guild: impl Into<PathBuf>,
        meetup: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            guild: guild.into(),
            meetup: meetup.into(),
            output: output.into(),
            corrections: NameCorrections::default(),
        }
    }

    /// Replace the correction table
    pub fn with_corrections(mut self, corrections: NameCorrections) -> Self {
        self.corrections = corrections;
        self
    }
}

/// Summary of a completed merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub output: PathBuf,
    pub guild_rows: usize,
    pub meetup_rows: usize,
    pub duplicates_dropped: usize,
    pub rows_written: usize,
}

/// Read both exports, merge them and write the result
///
/// Both inputs are read and validated before the output is created, so a
/// failing input never leaves an output file behind.
pub fn merge_files(job: &MergeJob) -> Result<MergeReport> {
    let guild_raw = read_guild(&job.guild)?;
    let meetup_raw = read_meetup(&job.meetup)?;

    let guild = normalize_guild(&guild_raw);
    let meetup = normalize_meetup(&meetup_raw, &job.corrections);
    let (guild_rows, meetup_rows) = (guild.len(), meetup.len());

    let roster = merge(guild, meetup);
    write_roster(&roster, &job.output)?;

    info!(
        output = %job.output.display(),
        rows = roster.len(),
        "wrote merged roster"
    );

    Ok(MergeReport {
        output: job.output.clone(),
        guild_rows,
        meetup_rows,
        duplicates_dropped: roster.duplicates_dropped,
        rows_written: roster.len(),
    })
}
