use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::movable::impl_movable;

/// A song belonging to a music album
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Internal identifier, absent until persisted
    pub id: Option<Uuid>,

    /// Song name
    pub name: String,

    /// Length in seconds
    pub length: i32,

    /// Free-form note
    pub note: String,

    /// Order among the album's songs
    pub position: u32,
}

impl_movable!(Song);
