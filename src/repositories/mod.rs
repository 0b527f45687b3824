// src/repositories/mod.rs
//
// Persistence collaborators
//
// CRITICAL RULES:
// - Repositories are DUMB data keepers
// - NO validation, NO event emission
// - Identifier generation is entirely the repository's concern
// - Positions stay a contiguous 0..n-1 permutation after every operation

pub mod memory;

use uuid::Uuid;

use crate::domain::Movable;
use crate::error::AppResult;

pub use memory::InMemoryRepository;

/// Persistence contract for one top-level aggregate type.
///
/// The engine performs a fresh read-validate-write cycle per operation;
/// blocking, transactions and concurrency control (if any) live behind
/// this trait.
pub trait MovableRepository<T: Movable>: Send + Sync {
    /// Full collection in persisted order (ascending position).
    fn get_all(&self) -> AppResult<Vec<T>>;

    fn get(&self, id: Uuid) -> AppResult<Option<T>>;

    /// Persists a new aggregate, assigning missing identifiers.
    fn add(&self, item: T) -> AppResult<()>;

    /// Replaces the stored aggregate with the same id, keeping its stored
    /// position and assigning ids to any owned child lacking one.
    fn update(&self, item: T) -> AppResult<()>;

    /// Deletes the aggregate and renumbers survivors so positions stay
    /// contiguous.
    fn remove(&self, item: &T) -> AppResult<()>;

    /// Deep-clones the aggregate with all identifiers cleared and
    /// reassigned, appended at the end of the collection.
    fn duplicate(&self, item: &T) -> AppResult<()>;

    /// Exchanges the item's position with its list-order predecessor.
    fn move_up(&self, item: &T) -> AppResult<()>;

    /// Exchanges the item's position with its list-order successor.
    fn move_down(&self, item: &T) -> AppResult<()>;

    /// Re-derives every position (own and owned children's) from list
    /// index; a no-op if already contiguous.
    fn update_positions(&self) -> AppResult<()>;

    /// Resets the backing collection to empty.
    fn clear(&self) -> AppResult<()>;
}
