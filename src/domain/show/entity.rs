use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::movable::impl_movable;
use crate::domain::{Genre, Season};

/// A TV show in the catalog
/// The show is the unit of storage; it exclusively owns its seasons
/// (and through them every episode)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Show {
    /// Internal identifier, absent until persisted
    pub id: Option<Uuid>,

    /// Czech release name
    pub czech_name: String,

    /// Original release name
    pub original_name: String,

    /// URL to CSFD page about the show
    pub csfd: String,

    /// IMDB code, -1 when the show has no IMDB entry
    pub imdb_code: i32,

    /// URL to english Wikipedia page about the show
    pub wiki_en: String,

    /// URL to czech Wikipedia page about the show
    pub wiki_cz: String,

    /// Reference to a stored picture
    pub picture: Option<Uuid>,

    /// Free-form note
    pub note: String,

    /// Order among all shows
    pub position: u32,

    /// Genres the show belongs to (value copies, not owned aggregates)
    pub genres: Vec<Genre>,

    /// Owned seasons in position order
    pub seasons: Vec<Season>,
}

impl_movable!(Show, children: seasons);
