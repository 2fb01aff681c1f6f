//! Start-time key derivation.
//!
//! Timetable rows are entered by hand as display strings such as
//! `"8:55 AM - 9:55 AM"`, `"08:55 - 09:55"` or `"8.55AM-9.55AM"`. Sorting
//! needs a comparable value, so every write stores the start of the range as
//! a zero-padded 24-hour `HH:MM` string alongside the display text.
//!
//! [`compute_start_time_key`] never fails. Input it cannot read becomes
//! [`UNPARSEABLE_START_TIME`], which sorts before every real time, so a
//! typo in the admin form still lets the row be saved and listed.

use chrono::NaiveTime;

/// Key stored for empty or unreadable time ranges.
pub const UNPARSEABLE_START_TIME: &str = "00:00";

/// Tried in order; the first that parses the whole start token wins.
const START_FORMATS: [&str; 4] = ["%I:%M %p", "%I:%M%p", "%H:%M", "%H.%M"];

const FALLBACK_FORMAT: &str = "%I:%M %p";

/// Returns the 24-hour `HH:MM` start of a time range display string.
///
/// ```
/// use campusdesk_core::compute_start_time_key;
///
/// assert_eq!(compute_start_time_key("8:55 AM - 9:55 AM"), "08:55");
/// assert_eq!(compute_start_time_key("1:55 PM - 2:55 PM"), "13:55");
/// assert_eq!(compute_start_time_key("garbage"), "00:00");
/// ```
pub fn compute_start_time_key(time_range: &str) -> String {
    if time_range.trim().is_empty() {
        return UNPARSEABLE_START_TIME.to_string();
    }

    let start = time_range
        .split_once('-')
        .map_or(time_range, |(left, _)| left)
        .trim();

    parse_start(start)
        .or_else(|| parse_normalized(start))
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|| UNPARSEABLE_START_TIME.to_string())
}

fn parse_start(start: &str) -> Option<NaiveTime> {
    START_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(start, format).ok())
}

/// `8.55am` -> `8:55 AM`, then one more 12-hour attempt.
fn parse_normalized(start: &str) -> Option<NaiveTime> {
    let mut cleaned = start.replace('.', ":").to_uppercase();

    if cleaned.ends_with("AM") || cleaned.ends_with("PM") {
        let split_at = cleaned.len() - 2;
        if !cleaned[..split_at].ends_with(' ') {
            cleaned.insert(split_at, ' ');
        }
    }

    NaiveTime::parse_from_str(cleaned.trim(), FALLBACK_FORMAT).ok()
}
