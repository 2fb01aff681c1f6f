//! Canonical week ordering for timetable rows.

/// Monday first, as printed on college timetables.
pub const WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Rank given to day names outside [`WEEK`]; sorts after Sunday.
pub const UNKNOWN_DAY_RANK: usize = WEEK.len() + 1;

/// 1-based position of `day` in the week, or [`UNKNOWN_DAY_RANK`].
///
/// Accepts whatever [`normalize_day`] accepts, so `"monday"`, `"Mon"` and
/// `"Monday"` share a rank.
pub fn day_rank(day: &str) -> usize {
    normalize_day(day)
        .and_then(|canonical| WEEK.iter().position(|d| *d == canonical))
        .map(|i| i + 1)
        .unwrap_or(UNKNOWN_DAY_RANK)
}

/// Maps `"monday"`, `"MON"`, `" Mon "` to `"Monday"`.
pub fn normalize_day(day: &str) -> Option<&'static str> {
    let day = day.trim();
    if day.len() < 3 {
        return None;
    }
    WEEK.iter().copied().find(|d| {
        d.eq_ignore_ascii_case(day) || (day.len() == 3 && d[..3].eq_ignore_ascii_case(day))
    })
}

/// SQL `ORDER BY` fragment matching [`day_rank`]: case-insensitive, trimmed,
/// full names and three-letter abbreviations.
pub fn day_order_sql(column: &str) -> String {
    let arms: String = WEEK
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let full = d.to_ascii_lowercase();
            format!(" WHEN '{}' THEN {rank} WHEN '{}' THEN {rank}", full, &full[..3], rank = i + 1)
        })
        .collect();
    format!(
        "CASE lower(btrim({})){} ELSE {} END",
        column, arms, UNKNOWN_DAY_RANK
    )
}
