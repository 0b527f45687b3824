use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::movable::impl_movable;

/// A stored picture referenced by movies and shows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    /// Internal identifier, absent until persisted
    pub id: Option<Uuid>,

    /// Raw image bytes
    pub content: Vec<u8>,

    /// Order among all pictures
    pub position: u32,
}

impl_movable!(Picture);
