//! Record types for the raw exports and the common attendee shape

use serde::{Deserialize, Serialize};

/// A row from a Guild export
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawGuildRecord {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Free-text status code (e.g. "attending_in_person", "waitlisted")
    #[serde(default)]
    pub attendance_status: Option<String>,
}

impl RawGuildRecord {
    /// Create a record from borrowed parts, treating empty strings as null
    pub fn new(first_name: &str, last_name: &str, attendance_status: &str) -> Self {
        Self {
            first_name: non_empty(first_name),
            last_name: non_empty(last_name),
            attendance_status: non_empty(attendance_status),
        }
    }
}

/// A row from a Meetup export
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawMeetupRecord {
    /// Display name as typed by the member; may be a handle
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "First name", default)]
    pub first_name: Option<String>,
    #[serde(rename = "Last name", default)]
    pub last_name: Option<String>,
    #[serde(rename = "RSVP", default)]
    pub rsvp: Option<String>,
}

impl RawMeetupRecord {
    /// Create a record from borrowed parts, treating empty strings as null
    pub fn new(name: &str, first_name: &str, last_name: &str, rsvp: &str) -> Self {
        Self {
            name: name.to_string(),
            first_name: non_empty(first_name),
            last_name: non_empty(last_name),
            rsvp: non_empty(rsvp),
        }
    }
}

/// The shape both normalizers produce and the merger consumes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedAttendee {
    /// Transliterated, title-cased full name
    pub name: String,
    /// Whether the source confirmed physical attendance
    pub in_person: bool,
}

impl NormalizedAttendee {
    pub fn new(name: impl Into<String>, in_person: bool) -> Self {
        Self {
            name: name.into(),
            in_person,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
