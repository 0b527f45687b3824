// src/validation/common.rs
//
// Field checks shared by the per-entity deep rules.

use chrono::{Datelike, Utc};

use crate::validation::Event;

/// Oldest year accepted for movies and seasons.
pub const MIN_YEAR: i32 = 1930;

pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Nullable string that must also be non-empty.
///
/// Pushes `<FIELD>_NULL` or `<FIELD>_EMPTY` where `field` already carries
/// the entity prefix (e.g. `MOVIE_CZECH_NAME`).
pub fn check_string(value: Option<&str>, field: &str, label: &str, events: &mut Vec<Event>) {
    match value {
        None => events.push(Event::error(
            format!("{field}_NULL"),
            format!("{label} mustn't be null."),
        )),
        Some(text) if text.trim().is_empty() => events.push(Event::error(
            format!("{field}_EMPTY"),
            format!("{label} mustn't be empty string."),
        )),
        Some(_) => {}
    }
}

/// Required value with a null-only rule.
pub fn check_required<T>(value: Option<&T>, code: &str, message: &str, events: &mut Vec<Event>) {
    if value.is_none() {
        events.push(Event::error(code, message));
    }
}

/// Nullable collection that must not contain null elements.
///
/// `field` carries the entity prefix (e.g. `MOVIE_SUBTITLES`).
pub fn check_collection<T>(
    value: Option<&Vec<Option<T>>>,
    field: &str,
    label: &str,
    events: &mut Vec<Event>,
) {
    match value {
        None => events.push(Event::error(
            format!("{field}_NULL"),
            format!("{label} mustn't be null."),
        )),
        Some(items) => {
            if items.iter().any(Option::is_none) {
                events.push(Event::error(
                    format!("{field}_CONTAIN_NULL"),
                    format!("{label} mustn't contain null value."),
                ));
            }
        }
    }
}

/// Year that must fall into `MIN_YEAR..=current year`; a missing value
/// fails the same rule.
pub fn check_year(value: Option<i32>, code: &str, label: &str, events: &mut Vec<Event>) {
    let valid = matches!(value, Some(year) if (MIN_YEAR..=current_year()).contains(&year));
    if !valid {
        events.push(Event::error(
            code,
            format!("{label} must be between {MIN_YEAR} and {}.", current_year()),
        ));
    }
}

/// Number that must be strictly positive; a missing value fails the rule.
pub fn check_positive(value: Option<i32>, code: &str, message: &str, events: &mut Vec<Event>) {
    if !matches!(value, Some(number) if number > 0) {
        events.push(Event::error(code, message));
    }
}

/// Number that must not be negative; a missing value fails the rule.
pub fn check_non_negative(value: Option<i32>, code: &str, message: &str, events: &mut Vec<Event>) {
    if !matches!(value, Some(number) if number >= 0) {
        events.push(Event::error(code, message));
    }
}

/// IMDB code: 1..=9999999, or -1 when the work has no IMDB entry.
pub fn check_imdb_code(value: Option<i32>, code: &str, events: &mut Vec<Event>) {
    let valid = matches!(value, Some(-1) | Some(1..=9_999_999));
    if !valid {
        events.push(Event::error(code, "IMDB code must be between 1 and 9999999 or -1."));
    }
}
