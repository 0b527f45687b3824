use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::movable::impl_movable;
use crate::domain::{Episode, Language};

/// A season of a show
/// Seasons exist only inside their show's owned collection and are
/// persisted by re-persisting the whole show
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Season {
    /// Internal identifier, absent until persisted
    pub id: Option<Uuid>,

    /// Season number
    pub number: i32,

    /// Year the season started airing
    pub start_year: i32,

    /// Year the season stopped airing
    pub end_year: i32,

    /// Audio language
    pub language: Language,

    /// Subtitle languages
    pub subtitles: Vec<Language>,

    /// Free-form note
    pub note: String,

    /// Order among the show's seasons
    pub position: u32,

    /// Owned episodes in position order
    pub episodes: Vec<Episode>,
}

impl_movable!(Season, children: episodes);
