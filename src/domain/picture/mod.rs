pub mod entity;
pub mod invariants;

pub use entity::Picture;
pub use invariants::validate_picture;
