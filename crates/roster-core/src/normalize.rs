//! Name normalization and attendance predicates

use unidecode::unidecode;

/// Guild `attendance_status` values that mean the member attends in person
pub const GUILD_IN_PERSON: &[&str] = &["attending_in_person"];

/// Meetup `RSVP` values that mean the member attends in person
pub const MEETUP_IN_PERSON: &[&str] = &["Yes"];

/// Whether a Guild status marks in-person attendance (exact, case-sensitive)
pub fn is_guild_in_person(status: Option<&str>) -> bool {
    status.is_some_and(|s| GUILD_IN_PERSON.contains(&s))
}

/// Whether a Meetup RSVP marks in-person attendance (exact, case-sensitive)
pub fn is_meetup_in_person(rsvp: Option<&str>) -> bool {
    rsvp.is_some_and(|r| MEETUP_IN_PERSON.contains(&r))
}

/// Replace accented and non-Latin characters with their closest ASCII form
pub fn transliterate(text: &str) -> String {
    unidecode(text)
}

/// Uppercase every letter that follows a non-letter, lowercase the rest
///
/// Punctuation and digits start a new word, so `dave.grohl.1011` becomes
/// `Dave.Grohl.1011` and `anya taylor-joy` becomes `Anya Taylor-Joy`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

/// Transliterate then title-case a name
pub fn normalize_name(name: &str) -> String {
    title_case(&transliterate(name))
}

/// Join two optional name parts with a single space, trimming the result
pub(crate) fn join_name_parts(first: Option<&str>, last: Option<&str>) -> String {
    let first = first.unwrap_or("").trim();
    let last = last.unwrap_or("").trim();
    format!("{} {}", first, last).trim().to_string()
}
