use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::movable::impl_movable;

/// A game in the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Internal identifier, absent until persisted
    pub id: Option<Uuid>,

    /// Game name
    pub name: String,

    /// URL to english Wikipedia page about the game
    pub wiki_en: String,

    /// URL to czech Wikipedia page about the game
    pub wiki_cz: String,

    /// Count of media
    pub media_count: i32,

    pub crack: bool,
    pub serial_key: bool,
    pub patch: bool,
    pub trainer: bool,
    pub trainer_data: bool,
    pub editor: bool,
    pub saves: bool,

    /// Additional data (manual, soundtrack, ...)
    pub other_data: String,

    /// Free-form note
    pub note: String,

    /// Order among all games
    pub position: u32,
}

impl_movable!(Game);
