use crate::application::dto::SeasonDto;
use crate::validation::common::{check_collection, check_positive, check_required, check_year};
use crate::validation::Event;

/// Validates all Season field rules
pub fn validate_season(season: &SeasonDto, events: &mut Vec<Event>) {
    check_positive(
        season.number,
        "SEASON_NUMBER_NOT_POSITIVE",
        "Number of season must be positive number.",
        events,
    );
    validate_years(season, events);
    check_required(
        season.language.as_ref(),
        "SEASON_LANGUAGE_NULL",
        "Language mustn't be null.",
        events,
    );
    check_collection(season.subtitles.as_ref(), "SEASON_SUBTITLES", "Subtitles", events);
    check_required(season.note.as_ref(), "SEASON_NOTE_NULL", "Note mustn't be null.", events);
}

/// Both years must fall into the valid range and starting year mustn't be
/// greater than ending year.
fn validate_years(season: &SeasonDto, events: &mut Vec<Event>) {
    check_year(season.start_year, "SEASON_START_YEAR_NOT_VALID", "Starting year", events);
    check_year(season.end_year, "SEASON_END_YEAR_NOT_VALID", "Ending year", events);
    if let (Some(start), Some(end)) = (season.start_year, season.end_year) {
        if start > end {
            events.push(Event::error(
                "SEASON_YEARS_NOT_VALID",
                "Starting year mustn't be greater than ending year.",
            ));
        }
    }
}
