use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::movable::impl_movable;
use crate::domain::Song;

/// A music album in the catalog
/// The album is the unit of storage; it exclusively owns its songs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Music {
    /// Internal identifier, absent until persisted
    pub id: Option<Uuid>,

    /// Album name
    pub name: String,

    /// URL to english Wikipedia page about the album
    pub wiki_en: String,

    /// URL to czech Wikipedia page about the album
    pub wiki_cz: String,

    /// Count of media
    pub media_count: i32,

    /// Free-form note
    pub note: String,

    /// Order among all albums
    pub position: u32,

    /// Owned songs in position order
    pub songs: Vec<Song>,
}

impl_movable!(Music, children: songs);
