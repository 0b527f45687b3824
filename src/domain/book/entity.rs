use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::movable::impl_movable;
use crate::domain::Language;

/// A book in the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Internal identifier, absent until persisted
    pub id: Option<Uuid>,

    /// Czech release name
    pub czech_name: String,

    /// Original release name
    pub original_name: String,

    /// Languages the book is available in
    pub languages: Vec<Language>,

    /// Free-form note
    pub note: String,

    /// Order among all books
    pub position: u32,
}

impl_movable!(Book);
