//! roster-core: Core library for merging event attendee rosters
//!
//! This library provides functionality to:
//! - Read Guild and Meetup CSV exports, validating their required columns
//! - Normalize names (transliteration, title case, manual corrections)
//! - Derive the in-person flag from each platform's status encoding
//! - Merge both rosters into a deduplicated, sorted list and write it as CSV

pub mod corrections;
pub mod error;
pub mod guild;
pub mod meetup;
pub mod merger;
pub mod normalize;
pub mod parser;
pub mod record;
pub mod schema;
pub mod writer;

pub use corrections::NameCorrections;
pub use error::{Error, ErrorKind, Result, SourceKind};
pub use guild::normalize_guild;
pub use meetup::normalize_meetup;
pub use merger::{merge, merge_files, MergeJob, MergeReport, MergedRoster};
pub use normalize::{is_guild_in_person, is_meetup_in_person, normalize_name};
pub use parser::{read_guild, read_guild_str, read_meetup, read_meetup_str};
pub use record::{NormalizedAttendee, RawGuildRecord, RawMeetupRecord};
pub use schema::{Schema, GUILD_SCHEMA, MEETUP_SCHEMA};
pub use writer::{write_roster, write_roster_to};
