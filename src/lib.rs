// src/lib.rs
// MediaHub - Local-first media catalog backend
//
// Architecture:
// - Domain-centric: entities and their invariants live in domains
// - Generic engines: one parent and one child catalog service, every
//   concrete entity is a thin instantiation
// - Exception-free outcomes: business failures are CatalogResult values,
//   the AppError channel is for failing collaborators only
// - Explicit: no implicit behavior, no magic
// - Single-writer: read-validate-write cycles are not safe under
//   concurrent writers to the same aggregate

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod application;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;
pub mod validation;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_book,
    validate_episode,
    validate_game,
    validate_genre,
    validate_movie,
    validate_music,
    validate_picture,
    validate_program,
    validate_season,
    validate_show,
    validate_song,
    // Book
    Book,
    // Episode
    Episode,
    // Game
    Game,
    // Genre
    Genre,
    // Capabilities
    Identifiable,
    // Shared value types
    Language,
    Movable,
    // Movie
    Movie,
    // Music
    Music,
    // Picture
    Picture,
    // Program
    Program,
    // Season
    Season,
    // Show
    Show,
    // Song
    Song,
};

// ============================================================================
// PUBLIC API - Wire Entities
// ============================================================================

pub use application::dto::{
    BookDto, EpisodeDto, GameDto, GenreDto, MovieDto, MusicDto, PictureDto, ProgramDto, SeasonDto,
    ShowDto, SongDto,
};

// ============================================================================
// PUBLIC API - Engine
// ============================================================================

pub use application::{Catalog, CatalogRepositories};
pub use error::{AppError, AppResult};
pub use events::{CatalogAction, CatalogEvent, EventBus};
pub use repositories::{InMemoryRepository, MovableRepository};
pub use services::{
    BookService, ChildCatalogService, EpisodeService, GameService, GenreService, MovieService,
    MusicService, ParentCatalogService, ParentStore, PictureService, ProgramService, SeasonService,
    ShowService, SongService,
};
pub use validation::{CatalogResult, Event, MovableValidator, Severity, ValidationType};
