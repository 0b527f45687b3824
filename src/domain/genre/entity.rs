use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::movable::impl_movable;

/// A genre movies and shows can belong to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    /// Internal identifier, absent until persisted
    pub id: Option<Uuid>,

    /// Genre name
    pub name: String,

    /// Order among all genres
    pub position: u32,
}

impl_movable!(Genre);
