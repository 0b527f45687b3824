use crate::application::dto::GenreDto;
use crate::validation::common::check_string;
use crate::validation::Event;

/// Validates all Genre field rules
pub fn validate_genre(genre: &GenreDto, events: &mut Vec<Event>) {
    check_string(genre.name.as_deref(), "GENRE_NAME", "Name", events);
}

/// Genre list carried by a movie or show.
///
/// The list itself mustn't be null or contain null values; every present
/// genre's own field rules run too and report with `GENRE_` codes.
pub fn validate_genre_list(
    genres: Option<&Vec<Option<GenreDto>>>,
    prefix: &str,
    events: &mut Vec<Event>,
) {
    match genres {
        None => events.push(Event::error(
            format!("{prefix}_GENRES_NULL"),
            "Genres mustn't be null.",
        )),
        Some(list) => {
            if list.iter().any(Option::is_none) {
                events.push(Event::error(
                    format!("{prefix}_GENRES_CONTAIN_NULL"),
                    "Genres mustn't contain null value.",
                ));
            }
            for genre in list.iter().flatten() {
                validate_genre(genre, events);
            }
        }
    }
}
