use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::movable::impl_movable;

/// A program (software) in the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Internal identifier, absent until persisted
    pub id: Option<Uuid>,

    /// Program name
    pub name: String,

    /// URL to english Wikipedia page about the program
    pub wiki_en: String,

    /// URL to czech Wikipedia page about the program
    pub wiki_cz: String,

    /// Count of media
    pub media_count: i32,

    pub crack: bool,
    pub serial_key: bool,

    /// Additional data (manual, ...)
    pub other_data: String,

    /// Free-form note
    pub note: String,

    /// Order among all programs
    pub position: u32,
}

impl_movable!(Program);
