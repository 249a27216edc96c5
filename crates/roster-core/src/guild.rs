//! Guild export normalization

use crate::normalize::{is_guild_in_person, join_name_parts, normalize_name};
use crate::record::{NormalizedAttendee, RawGuildRecord};
use tracing::{debug, warn};

/// Convert Guild rows into the common attendee shape
///
/// The name is `first_name last_name`, trimmed, transliterated and
/// title-cased. Only the `attending_in_person` status sets `in_person`.
/// Duplicates pass through; the merger collapses them.
pub fn normalize_guild(records: &[RawGuildRecord]) -> Vec<NormalizedAttendee> {
    let attendees: Vec<NormalizedAttendee> = records
        .iter()
        .enumerate()
        .map(|(row_idx, record)| {
            let full_name =
                join_name_parts(record.first_name.as_deref(), record.last_name.as_deref());
            if full_name.is_empty() {
                warn!(row = row_idx + 1, "Guild row has no name");
            }

            NormalizedAttendee {
                name: normalize_name(&full_name),
                in_person: is_guild_in_person(record.attendance_status.as_deref()),
            }
        })
        .collect();

    debug!(rows = attendees.len(), "normalized Guild export");
    attendees
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_guild_basic() {
        let records = vec![
            RawGuildRecord::new("Ana", "García", "attending_in_person"),
            RawGuildRecord::new("john", "SMITH", "attending_online"),
        ];

        let result = normalize_guild(&records);

        assert_eq!(result[0], NormalizedAttendee::new("Ana Garcia", true));
        assert_eq!(result[1], NormalizedAttendee::new("John Smith", false));
    }

    #[test]
    fn test_unknown_and_missing_status_are_not_in_person() {
        let records = vec![
            RawGuildRecord::new("Ana", "Garcia", "waitlisted"),
            RawGuildRecord::new("Ana", "Garcia", ""),
        ];

        let result = normalize_guild(&records);
        assert!(result.iter().all(|a| !a.in_person));
    }

    #[test]
    fn test_missing_name_parts() {
        let records = vec![
            RawGuildRecord::new("Cher", "", "attending_in_person"),
            RawGuildRecord::new("", "Madonna", "attending_in_person"),
            RawGuildRecord::new("", "", "attending_in_person"),
        ];

        let result = normalize_guild(&records);

        assert_eq!(result[0].name, "Cher");
        assert_eq!(result[1].name, "Madonna");
        assert_eq!(result[2].name, "");
    }

    #[test]
    fn test_duplicates_pass_through() {
        let records = vec![
            RawGuildRecord::new("Ana", "García", "attending_in_person"),
            RawGuildRecord::new("Ana", "Garcia", "attending_in_person"),
        ];

        let result = normalize_guild(&records);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], result[1]);
    }
}
