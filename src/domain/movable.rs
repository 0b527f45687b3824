use uuid::Uuid;

/// Anything addressable by a catalog identifier.
///
/// Wire entities implement only this: an identifier that is absent until
/// the persistence collaborator assigns one.
pub trait Identifiable {
    fn id(&self) -> Option<Uuid>;
}

/// An entity ordered inside its containing collection.
///
/// Within one collection, positions are a contiguous permutation of
/// `0..n-1` matching list order; no two siblings share a position. The
/// deep-tree helpers let a generic repository maintain identifiers and
/// positions of owned children without knowing concrete types.
pub trait Movable: Identifiable + Clone {
    fn set_id(&mut self, id: Option<Uuid>);

    fn position(&self) -> u32;

    fn set_position(&mut self, position: u32);

    /// Clears this entity's id and the ids of every owned child.
    fn clear_ids(&mut self) {
        self.set_id(None);
    }

    /// Fills in missing ids (own and owned children's) from the generator.
    fn assign_ids(&mut self, next: &mut dyn FnMut() -> Uuid) {
        if self.id().is_none() {
            self.set_id(Some(next()));
        }
    }

    /// Renumbers owned child positions from list order, recursively.
    fn reindex_children(&mut self) {}
}

/// Implements `Identifiable` + `Movable` for a domain entity with `id` and
/// `position` fields; the `children` form adds the recursive overrides for
/// entities owning an ordered child collection.
macro_rules! impl_movable {
    ($entity:ty) => {
        impl $crate::domain::Identifiable for $entity {
            fn id(&self) -> Option<uuid::Uuid> {
                self.id
            }
        }

        impl $crate::domain::Movable for $entity {
            fn set_id(&mut self, id: Option<uuid::Uuid>) {
                self.id = id;
            }

            fn position(&self) -> u32 {
                self.position
            }

            fn set_position(&mut self, position: u32) {
                self.position = position;
            }
        }
    };
    ($entity:ty, children: $children:ident) => {
        impl $crate::domain::Identifiable for $entity {
            fn id(&self) -> Option<uuid::Uuid> {
                self.id
            }
        }

        impl $crate::domain::Movable for $entity {
            fn set_id(&mut self, id: Option<uuid::Uuid>) {
                self.id = id;
            }

            fn position(&self) -> u32 {
                self.position
            }

            fn set_position(&mut self, position: u32) {
                self.position = position;
            }

            fn clear_ids(&mut self) {
                self.id = None;
                for child in &mut self.$children {
                    $crate::domain::Movable::clear_ids(child);
                }
            }

            fn assign_ids(&mut self, next: &mut dyn FnMut() -> uuid::Uuid) {
                if self.id.is_none() {
                    self.id = Some(next());
                }
                for child in &mut self.$children {
                    $crate::domain::Movable::assign_ids(child, next);
                }
            }

            fn reindex_children(&mut self) {
                for (index, child) in self.$children.iter_mut().enumerate() {
                    $crate::domain::Movable::set_position(child, index as u32);
                    $crate::domain::Movable::reindex_children(child);
                }
            }
        }
    };
}

pub(crate) use impl_movable;
