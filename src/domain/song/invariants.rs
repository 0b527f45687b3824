use crate::application::dto::SongDto;
use crate::validation::common::{check_non_negative, check_required, check_string};
use crate::validation::Event;

/// Validates all Song field rules
pub fn validate_song(song: &SongDto, events: &mut Vec<Event>) {
    check_string(song.name.as_deref(), "SONG_NAME", "Name", events);
    check_non_negative(
        song.length,
        "SONG_LENGTH_NEGATIVE",
        "Length of song mustn't be negative number.",
        events,
    );
    check_required(song.note.as_ref(), "SONG_NOTE_NULL", "Note mustn't be null.", events);
}
