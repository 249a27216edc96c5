//! Meetup export normalization

use crate::corrections::NameCorrections;
use crate::normalize::{is_meetup_in_person, normalize_name};
use crate::record::{NormalizedAttendee, RawMeetupRecord};
use tracing::{debug, warn};

/// Convert Meetup rows into the common attendee shape
///
/// Each row offers two name candidates: `First name Last name` and the raw
/// `Name` field. The longer one (by characters) wins, with ties going to
/// `Name`. The winner is normalized, then looked up in `corrections`.
pub fn normalize_meetup(
    records: &[RawMeetupRecord],
    corrections: &NameCorrections,
) -> Vec<NormalizedAttendee> {
    let mut corrected = 0usize;

    let attendees: Vec<NormalizedAttendee> = records
        .iter()
        .enumerate()
        .map(|(row_idx, record)| {
            let selected = select_name(record);
            if selected.is_empty() {
                warn!(row = row_idx + 1, "Meetup row has no name");
            }

            let normalized = normalize_name(&selected);
            let name = match corrections.get(&normalized) {
                Some(fixed) => {
                    corrected += 1;
                    fixed.to_string()
                }
                None => normalized,
            };

            NormalizedAttendee {
                name,
                in_person: is_meetup_in_person(record.rsvp.as_deref()),
            }
        })
        .collect();

    debug!(rows = attendees.len(), corrected, "normalized Meetup export");
    attendees
}

/// Pick the longer of the joined first/last name and the `Name` field
fn select_name(record: &RawMeetupRecord) -> String {
    let full_name = full_name(record.first_name.as_deref(), record.last_name.as_deref());

    if full_name.chars().count() > record.name.chars().count() {
        full_name
    } else {
        record.name.clone()
    }
}

/// Join the raw parts with one space; only the outer edges are trimmed
fn full_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or(""), last.unwrap_or(""))
        .trim()
        .to_string()
}
