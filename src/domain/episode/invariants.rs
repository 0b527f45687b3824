use crate::application::dto::EpisodeDto;
use crate::validation::common::{check_non_negative, check_positive, check_required, check_string};
use crate::validation::Event;

/// Validates all Episode field rules
pub fn validate_episode(episode: &EpisodeDto, events: &mut Vec<Event>) {
    check_positive(
        episode.number,
        "EPISODE_NUMBER_NOT_POSITIVE",
        "Number of episode must be positive number.",
        events,
    );
    check_string(episode.name.as_deref(), "EPISODE_NAME", "Name", events);
    check_non_negative(
        episode.length,
        "EPISODE_LENGTH_NEGATIVE",
        "Length of episode mustn't be negative number.",
        events,
    );
    check_required(
        episode.note.as_ref(),
        "EPISODE_NOTE_NULL",
        "Note mustn't be null.",
        events,
    );
}
