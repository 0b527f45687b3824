use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::movable::impl_movable;

/// A single episode belonging to a season
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Internal identifier, absent until persisted
    pub id: Option<Uuid>,

    /// Episode number within the season
    pub number: i32,

    /// Episode name
    pub name: String,

    /// Length in minutes
    pub length: i32,

    /// Free-form note
    pub note: String,

    /// Order among the season's episodes
    pub position: u32,
}

impl_movable!(Episode);
