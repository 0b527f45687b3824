// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod book;
pub mod episode;
pub mod game;
pub mod genre;
pub mod language;
pub mod movable;
pub mod movie;
pub mod music;
pub mod picture;
pub mod program;
pub mod season;
pub mod show;
pub mod song;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Capabilities
pub use movable::{Identifiable, Movable};

// Shared value types
pub use language::Language;

// Movie Domain
pub use movie::{validate_movie, Movie};

// Show Domain (owns seasons, which own episodes)
pub use episode::{validate_episode, Episode};
pub use season::{validate_season, Season};
pub use show::{validate_show, Show};

// Game Domain
pub use game::{validate_game, Game};

// Music Domain (owns songs)
pub use music::{validate_music, Music};
pub use song::{validate_song, Song};

// Program Domain
pub use program::{validate_program, Program};

// Book Domain
pub use book::{validate_book, Book};

// Genre Domain
pub use genre::{validate_genre, validate_genre_list, Genre};

// Picture Domain
pub use picture::{validate_picture, Picture};
