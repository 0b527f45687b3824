// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// Two generic engines; every concrete entity service is a thin type
// alias wired in application::state.

pub mod child_service;
pub mod parent_service;
pub mod store;

#[cfg(test)]
mod child_service_tests;

use crate::application::dto::{
    BookDto, EpisodeDto, GameDto, GenreDto, MovieDto, MusicDto, PictureDto, ProgramDto, SeasonDto,
    ShowDto, SongDto,
};
use crate::domain::{
    Book, Episode, Game, Genre, Movie, Music, Picture, Program, Season, Show, Song,
};

pub use child_service::ChildCatalogService;
pub use parent_service::{CarryOver, ParentCatalogService};
pub use store::{NestedParentStore, ParentStore, RootParentStore};

pub type MovieService = ParentCatalogService<MovieDto, Movie>;
pub type ShowService = ParentCatalogService<ShowDto, Show>;
pub type GameService = ParentCatalogService<GameDto, Game>;
pub type MusicService = ParentCatalogService<MusicDto, Music>;
pub type ProgramService = ParentCatalogService<ProgramDto, Program>;
pub type BookService = ParentCatalogService<BookDto, Book>;
pub type GenreService = ParentCatalogService<GenreDto, Genre>;
pub type PictureService = ParentCatalogService<PictureDto, Picture>;

pub type SeasonService = ChildCatalogService<ShowDto, SeasonDto, Show, Season>;
pub type EpisodeService = ChildCatalogService<SeasonDto, EpisodeDto, Season, Episode>;
pub type SongService = ChildCatalogService<MusicDto, SongDto, Music, Song>;
