pub mod entity;
pub mod invariants;

pub use entity::Game;
pub use invariants::validate_game;
