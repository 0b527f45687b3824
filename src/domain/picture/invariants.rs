use crate::application::dto::PictureDto;
use crate::validation::common::check_required;
use crate::validation::Event;

/// Validates all Picture field rules
pub fn validate_picture(picture: &PictureDto, events: &mut Vec<Event>) {
    check_required(
        picture.content.as_ref(),
        "PICTURE_CONTENT_NULL",
        "Content mustn't be null.",
        events,
    );
}
