use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::movable::impl_movable;
use crate::domain::{Genre, Language};

/// A movie in the catalog
/// Movies are top-level aggregates persisted as a whole unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Internal identifier, absent until persisted
    pub id: Option<Uuid>,

    /// Czech release name
    pub czech_name: String,

    /// Original release name
    pub original_name: String,

    /// Year of release
    pub year: i32,

    /// Audio language
    pub language: Language,

    /// Subtitle languages
    pub subtitles: Vec<Language>,

    /// Lengths of individual media in minutes
    pub media: Vec<i32>,

    /// URL to CSFD page about the movie
    pub csfd: String,

    /// IMDB code, -1 when the movie has no IMDB entry
    pub imdb_code: i32,

    /// URL to english Wikipedia page about the movie
    pub wiki_en: String,

    /// URL to czech Wikipedia page about the movie
    pub wiki_cz: String,

    /// Reference to a stored picture
    pub picture: Option<Uuid>,

    /// Free-form note
    pub note: String,

    /// Order among all movies
    pub position: u32,

    /// Genres the movie belongs to (value copies, not owned aggregates)
    pub genres: Vec<Genre>,
}

impl_movable!(Movie);
