use crate::application::dto::BookDto;
use crate::validation::common::{check_collection, check_required, check_string};
use crate::validation::Event;

/// Validates all Book field rules
pub fn validate_book(book: &BookDto, events: &mut Vec<Event>) {
    check_string(book.czech_name.as_deref(), "BOOK_CZECH_NAME", "Czech name", events);
    check_string(
        book.original_name.as_deref(),
        "BOOK_ORIGINAL_NAME",
        "Original name",
        events,
    );
    check_collection(book.languages.as_ref(), "BOOK_LANGUAGES", "Languages", events);
    check_required(book.note.as_ref(), "BOOK_NOTE_NULL", "Note mustn't be null.", events);
}
