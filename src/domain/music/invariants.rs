use crate::application::dto::MusicDto;
use crate::validation::common::{check_positive, check_required, check_string};
use crate::validation::Event;

/// Validates all Music field rules
pub fn validate_music(music: &MusicDto, events: &mut Vec<Event>) {
    check_string(music.name.as_deref(), "MUSIC_NAME", "Name", events);
    check_required(
        music.wiki_en.as_ref(),
        "MUSIC_WIKI_EN_NULL",
        "URL to english Wikipedia page about music mustn't be null.",
        events,
    );
    check_required(
        music.wiki_cz.as_ref(),
        "MUSIC_WIKI_CZ_NULL",
        "URL to czech Wikipedia page about music mustn't be null.",
        events,
    );
    check_positive(
        music.media_count,
        "MUSIC_MEDIA_COUNT_NOT_POSITIVE",
        "Count of media must be positive number.",
        events,
    );
    check_required(music.note.as_ref(), "MUSIC_NOTE_NULL", "Note mustn't be null.", events);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_music() -> MusicDto {
        MusicDto {
            name: Some("Mechanical Animals".to_string()),
            wiki_en: Some("https://en.wikipedia.org/wiki/Mechanical_Animals".to_string()),
            wiki_cz: Some("https://cs.wikipedia.org/wiki/Mechanical_Animals".to_string()),
            media_count: Some(1),
            note: Some(String::new()),
            ..MusicDto::default()
        }
    }

    #[test]
    fn test_valid_music() {
        let mut events = Vec::new();
        validate_music(&valid_music(), &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_null_name_fails() {
        let music = MusicDto {
            name: None,
            ..valid_music()
        };
        let mut events = Vec::new();
        validate_music(&music, &mut events);
        assert_eq!(events[0].code, "MUSIC_NAME_NULL");
    }
}
