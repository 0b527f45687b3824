// src/services/store.rs
//
// Narrow persistence views the child engine consumes.
//
// A child mutation always re-persists its whole owning aggregate; these
// adapters expose "load all candidate parents" / "persist one parent"
// over a root repository, and compose so a nested level (episodes inside
// seasons inside shows) reuses the same single-level child engine.

use std::sync::Arc;

use crate::domain::Movable;
use crate::error::{AppError, AppResult};
use crate::repositories::MovableRepository;

/// Load/persist view over the collection a child's parents live in.
pub trait ParentStore<P: Movable>: Send + Sync {
    /// Every candidate parent, in persisted order.
    fn load(&self) -> AppResult<Vec<P>>;

    /// Re-persists one parent as a whole.
    fn persist(&self, parent: &P) -> AppResult<()>;
}

/// Parents that are themselves top-level aggregates (shows, albums).
pub struct RootParentStore<P: Movable> {
    repository: Arc<dyn MovableRepository<P>>,
}

impl<P: Movable> RootParentStore<P> {
    pub fn new(repository: Arc<dyn MovableRepository<P>>) -> Self {
        Self { repository }
    }
}

impl<P: Movable> ParentStore<P> for RootParentStore<P> {
    fn load(&self) -> AppResult<Vec<P>> {
        self.repository.get_all()
    }

    fn persist(&self, parent: &P) -> AppResult<()> {
        self.repository.update(parent.clone())
    }
}

/// Parents that are nested one level down (seasons inside shows).
///
/// `load` flattens the owned child collections of the outer store;
/// `persist` replaces the parent inside its outer aggregate and
/// re-persists that aggregate.
pub struct NestedParentStore<G: Movable, P: Movable> {
    outer: Arc<dyn ParentStore<G>>,
    children: fn(&G) -> &Vec<P>,
    children_mut: fn(&mut G) -> &mut Vec<P>,
}

impl<G: Movable, P: Movable> NestedParentStore<G, P> {
    pub fn new(
        outer: Arc<dyn ParentStore<G>>,
        children: fn(&G) -> &Vec<P>,
        children_mut: fn(&mut G) -> &mut Vec<P>,
    ) -> Self {
        Self {
            outer,
            children,
            children_mut,
        }
    }
}

impl<G: Movable, P: Movable> ParentStore<P> for NestedParentStore<G, P> {
    fn load(&self) -> AppResult<Vec<P>> {
        Ok(self
            .outer
            .load()?
            .iter()
            .flat_map(|grandparent| (self.children)(grandparent).iter().cloned())
            .collect())
    }

    fn persist(&self, parent: &P) -> AppResult<()> {
        let Some(id) = parent.id() else {
            return Err(AppError::NotFound);
        };
        let mut grandparents = self.outer.load()?;
        for grandparent in &mut grandparents {
            let children = (self.children_mut)(grandparent);
            if let Some(index) = children.iter().position(|child| child.id() == Some(id)) {
                children[index] = parent.clone();
                return self.outer.persist(grandparent);
            }
        }
        Err(AppError::NotFound)
    }
}
