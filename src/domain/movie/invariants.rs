use crate::application::dto::MovieDto;
use crate::domain::genre::validate_genre_list;
use crate::validation::common::{
    check_collection, check_imdb_code, check_required, check_string, check_year,
};
use crate::validation::Event;

/// Validates all Movie field rules
pub fn validate_movie(movie: &MovieDto, events: &mut Vec<Event>) {
    check_string(movie.czech_name.as_deref(), "MOVIE_CZECH_NAME", "Czech name", events);
    check_string(
        movie.original_name.as_deref(),
        "MOVIE_ORIGINAL_NAME",
        "Original name",
        events,
    );
    check_year(movie.year, "MOVIE_YEAR_NOT_VALID", "Year", events);
    check_required(
        movie.language.as_ref(),
        "MOVIE_LANGUAGE_NULL",
        "Language mustn't be null.",
        events,
    );
    check_collection(movie.subtitles.as_ref(), "MOVIE_SUBTITLES", "Subtitles", events);
    validate_media(movie, events);
    check_required(
        movie.csfd.as_ref(),
        "MOVIE_CSFD_NULL",
        "URL to CSFD page about movie mustn't be null.",
        events,
    );
    check_imdb_code(movie.imdb_code, "MOVIE_IMDB_CODE_NOT_VALID", events);
    check_required(
        movie.wiki_en.as_ref(),
        "MOVIE_WIKI_EN_NULL",
        "URL to english Wikipedia page about movie mustn't be null.",
        events,
    );
    check_required(
        movie.wiki_cz.as_ref(),
        "MOVIE_WIKI_CZ_NULL",
        "URL to czech Wikipedia page about movie mustn't be null.",
        events,
    );
    check_required(movie.note.as_ref(), "MOVIE_NOTE_NULL", "Note mustn't be null.", events);
    validate_genre_list(movie.genres.as_ref(), "MOVIE", events);
}

/// Media list mustn't be null or contain null values; every medium length
/// must be a positive number.
fn validate_media(movie: &MovieDto, events: &mut Vec<Event>) {
    check_collection(movie.media.as_ref(), "MOVIE_MEDIA", "Media", events);
    if let Some(media) = &movie.media {
        for medium in media.iter().flatten() {
            if *medium <= 0 {
                events.push(Event::error(
                    "MOVIE_MEDIUM_NOT_POSITIVE",
                    "Length of medium must be positive number.",
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::GenreDto;
    use crate::domain::Language;

    fn valid_movie() -> MovieDto {
        MovieDto {
            czech_name: Some("Vetrelec".to_string()),
            original_name: Some("Alien".to_string()),
            year: Some(1979),
            language: Some(Language::EN),
            subtitles: Some(vec![Some(Language::CZ)]),
            media: Some(vec![Some(117)]),
            csfd: Some("https://www.csfd.cz/film/6648-vetrelec/".to_string()),
            imdb_code: Some(78748),
            wiki_en: Some("https://en.wikipedia.org/wiki/Alien_(film)".to_string()),
            wiki_cz: Some("https://cs.wikipedia.org/wiki/Vet%C5%99elec".to_string()),
            note: Some(String::new()),
            genres: Some(vec![Some(GenreDto {
                name: Some("Sci-Fi".to_string()),
                ..GenreDto::default()
            })]),
            ..MovieDto::default()
        }
    }

    fn codes(movie: &MovieDto) -> Vec<String> {
        let mut events = Vec::new();
        validate_movie(movie, &mut events);
        events.into_iter().map(|e| e.code).collect()
    }

    #[test]
    fn test_valid_movie() {
        assert!(codes(&valid_movie()).is_empty());
    }

    #[test]
    fn test_missing_names() {
        let movie = MovieDto {
            czech_name: None,
            original_name: Some("  ".to_string()),
            ..valid_movie()
        };
        let reported = codes(&movie);
        assert!(reported.contains(&"MOVIE_CZECH_NAME_NULL".to_string()));
        assert!(reported.contains(&"MOVIE_ORIGINAL_NAME_EMPTY".to_string()));
    }

    #[test]
    fn test_year_out_of_range() {
        let movie = MovieDto {
            year: Some(1925),
            ..valid_movie()
        };
        assert_eq!(codes(&movie), vec!["MOVIE_YEAR_NOT_VALID"]);
    }

    #[test]
    fn test_bad_media() {
        let movie = MovieDto {
            media: Some(vec![Some(90), None, Some(0)]),
            ..valid_movie()
        };
        assert_eq!(
            codes(&movie),
            vec!["MOVIE_MEDIA_CONTAIN_NULL", "MOVIE_MEDIUM_NOT_POSITIVE"]
        );
    }

    #[test]
    fn test_bad_imdb_code() {
        let movie = MovieDto {
            imdb_code: Some(0),
            ..valid_movie()
        };
        assert_eq!(codes(&movie), vec!["MOVIE_IMDB_CODE_NOT_VALID"]);
    }

    #[test]
    fn test_genre_rules_report_with_genre_codes() {
        let movie = MovieDto {
            genres: Some(vec![Some(GenreDto::default())]),
            ..valid_movie()
        };
        assert_eq!(codes(&movie), vec!["GENRE_NAME_NULL"]);
    }

    #[test]
    fn test_all_violations_accumulate() {
        let movie = MovieDto::default();
        let reported = codes(&movie);
        // one event per broken rule, none swallowed
        assert!(reported.len() >= 10);
        assert!(reported.contains(&"MOVIE_GENRES_NULL".to_string()));
    }
}
