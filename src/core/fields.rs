// src/core/fields.rs
//! Scoring rules for the free-text cells of the scouting form.
//!
//! Count and ascent parsing never fail: anything unrecognised scores 0.
//! That hides typos in the sheet, but a half-filled form must still load.
//! Only the team number is strict (see `parse_team_id`).

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::{AUTO_PARK_YES, OVERFLOW_CEILING, OVERFLOW_SENTINEL};

// Leading "12" or "12-15", anchored at the start of the cell
static COUNT_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(?:-([0-9]+))?").expect("static pattern"));

/// Score a count cell ("7", "12-15", "Too much").
/// Ranges score their lower bound.
pub fn parse_count_field(text: &str) -> u32 {
    if text == OVERFLOW_SENTINEL {
        return OVERFLOW_CEILING;
    }
    COUNT_RANGE
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Map an end-game label to 0..=3.
pub fn parse_ascent_level(text: &str) -> u32 {
    match text {
        "Nothing" => 0,
        "Park" | "Ascent 1" => 1,
        "Ascent 2" => 2,
        "Ascent 3" => 3,
        _ => 0,
    }
}

pub fn parse_auto_park(text: &str) -> u32 {
    u32::from(text == AUTO_PARK_YES)
}

/// Team numbers are the join key, so no silent zero here.
pub fn parse_team_id(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_overflowing_u32_scores_zero() {
        assert_eq!(parse_count_field("99999999999-3"), 0);
    }

    #[test]
    fn count_ignores_trailing_text() {
        assert_eq!(parse_count_field("3 or so"), 3);
        assert_eq!(parse_count_field("4-"), 4);
    }

    #[test]
    fn count_requires_leading_digit() {
        assert_eq!(parse_count_field(" 7"), 0);
        assert_eq!(parse_count_field("too much"), 0);
    }

    #[test]
    fn team_id_trims_whitespace() {
        assert_eq!(parse_team_id(" 16236 "), Some(16236));
        assert_eq!(parse_team_id("16236a"), None);
        assert_eq!(parse_team_id(""), None);
    }
}
