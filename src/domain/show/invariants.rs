use crate::application::dto::ShowDto;
use crate::domain::genre::validate_genre_list;
use crate::validation::common::{check_imdb_code, check_required, check_string};
use crate::validation::Event;

/// Validates all Show field rules
pub fn validate_show(show: &ShowDto, events: &mut Vec<Event>) {
    check_string(show.czech_name.as_deref(), "SHOW_CZECH_NAME", "Czech name", events);
    check_string(
        show.original_name.as_deref(),
        "SHOW_ORIGINAL_NAME",
        "Original name",
        events,
    );
    check_required(
        show.csfd.as_ref(),
        "SHOW_CSFD_NULL",
        "URL to CSFD page about show mustn't be null.",
        events,
    );
    check_imdb_code(show.imdb_code, "SHOW_IMDB_CODE_NOT_VALID", events);
    check_required(
        show.wiki_en.as_ref(),
        "SHOW_WIKI_EN_NULL",
        "URL to english Wikipedia page about show mustn't be null.",
        events,
    );
    check_required(
        show.wiki_cz.as_ref(),
        "SHOW_WIKI_CZ_NULL",
        "URL to czech Wikipedia page about show mustn't be null.",
        events,
    );
    check_required(show.note.as_ref(), "SHOW_NOTE_NULL", "Note mustn't be null.", events);
    validate_genre_list(show.genres.as_ref(), "SHOW", events);
}
