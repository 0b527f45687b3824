pub mod entity;
pub mod invariants;

pub use entity::Show;
pub use invariants::validate_show;
