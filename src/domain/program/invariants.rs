use crate::application::dto::ProgramDto;
use crate::validation::common::{check_positive, check_required, check_string};
use crate::validation::Event;

/// Validates all Program field rules
pub fn validate_program(program: &ProgramDto, events: &mut Vec<Event>) {
    check_string(program.name.as_deref(), "PROGRAM_NAME", "Name", events);
    check_required(
        program.wiki_en.as_ref(),
        "PROGRAM_WIKI_EN_NULL",
        "URL to english Wikipedia page about program mustn't be null.",
        events,
    );
    check_required(
        program.wiki_cz.as_ref(),
        "PROGRAM_WIKI_CZ_NULL",
        "URL to czech Wikipedia page about program mustn't be null.",
        events,
    );
    check_positive(
        program.media_count,
        "PROGRAM_MEDIA_COUNT_NOT_POSITIVE",
        "Count of media must be positive number.",
        events,
    );
    check_required(
        program.other_data.as_ref(),
        "PROGRAM_OTHER_DATA_NULL",
        "Other data mustn't be null.",
        events,
    );
    check_required(
        program.note.as_ref(),
        "PROGRAM_NOTE_NULL",
        "Note mustn't be null.",
        events,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_program() {
        let program = ProgramDto {
            name: Some("Blender".to_string()),
            wiki_en: Some("https://en.wikipedia.org/wiki/Blender_(software)".to_string()),
            wiki_cz: Some("https://cs.wikipedia.org/wiki/Blender".to_string()),
            media_count: Some(1),
            other_data: Some(String::new()),
            note: Some(String::new()),
            ..ProgramDto::default()
        };
        let mut events = Vec::new();
        validate_program(&program, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_empty_name_fails() {
        let program = ProgramDto {
            name: Some(String::new()),
            wiki_en: Some(String::new()),
            wiki_cz: Some(String::new()),
            media_count: Some(1),
            other_data: Some(String::new()),
            note: Some(String::new()),
            ..ProgramDto::default()
        };
        let mut events = Vec::new();
        validate_program(&program, &mut events);
        assert_eq!(events[0].code, "PROGRAM_NAME_EMPTY");
    }
}
