use crate::application::dto::GameDto;
use crate::validation::common::{check_positive, check_required, check_string};
use crate::validation::Event;

/// Validates all Game field rules
pub fn validate_game(game: &GameDto, events: &mut Vec<Event>) {
    check_string(game.name.as_deref(), "GAME_NAME", "Name", events);
    check_required(
        game.wiki_en.as_ref(),
        "GAME_WIKI_EN_NULL",
        "URL to english Wikipedia page about game mustn't be null.",
        events,
    );
    check_required(
        game.wiki_cz.as_ref(),
        "GAME_WIKI_CZ_NULL",
        "URL to czech Wikipedia page about game mustn't be null.",
        events,
    );
    check_positive(
        game.media_count,
        "GAME_MEDIA_COUNT_NOT_POSITIVE",
        "Count of media must be positive number.",
        events,
    );
    check_required(
        game.other_data.as_ref(),
        "GAME_OTHER_DATA_NULL",
        "Other data mustn't be null.",
        events,
    );
    check_required(game.note.as_ref(), "GAME_NOTE_NULL", "Note mustn't be null.", events);
}
