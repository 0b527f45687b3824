// src/services/child_service.rs
//
// Generic CRUD + reorder + duplicate over a collection nested inside an
// owning aggregate.
//
// CRITICAL RULES:
// - A child has no persistence identity of its own; every mutation
//   replaces the owner's child collection and re-persists the owner
// - The owning parent is located by scanning all parents; an unknown
//   child id is the child's own NOT_EXIST, never a parent error
// - Child positions stay contiguous inside their owner's sub-list

use std::sync::Arc;

use uuid::Uuid;

use crate::application::converter::Converter;
use crate::domain::{Identifiable, Movable};
use crate::error::{AppError, AppResult};
use crate::events::{CatalogAction, CatalogEvent, EventBus};
use crate::services::parent_service::CarryOver;
use crate::services::store::ParentStore;
use crate::validation::{CatalogResult, MovableValidator, ValidationType};

/// Facade over one child aggregate type.
///
/// `PE`/`PD` are the parent's wire and domain shapes, `E`/`D` the
/// child's. The parent validator only checks existence; the child
/// validator carries the field rules.
pub struct ChildCatalogService<PE: Identifiable, E: Identifiable, PD: Movable, D: Movable> {
    store: Arc<dyn ParentStore<PD>>,
    children: fn(&PD) -> &Vec<D>,
    children_mut: fn(&mut PD) -> &mut Vec<D>,
    converter: Arc<dyn Converter<D, E>>,
    validator: MovableValidator<E>,
    parent_validator: MovableValidator<PE>,
    carry_over: CarryOver<D>,
    event_bus: Arc<EventBus>,
}

impl<PE: Identifiable, E: Identifiable, PD: Movable, D: Movable> ChildCatalogService<PE, E, PD, D> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        store: Arc<dyn ParentStore<PD>>,
        children: fn(&PD) -> &Vec<D>,
        children_mut: fn(&mut PD) -> &mut Vec<D>,
        converter: Arc<dyn Converter<D, E>>,
        validator: MovableValidator<E>,
        parent_validator: MovableValidator<PE>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            store,
            children,
            children_mut,
            converter,
            validator,
            parent_validator,
            carry_over: |_, _| {},
            event_bus,
        }
    }

    /// Installs the hook that carries owned grandchildren over on update.
    pub fn with_carry_over(mut self, carry_over: CarryOver<D>) -> Self {
        self.carry_over = carry_over;
        self
    }

    /// Fetches one child by scanning every parent; a missing id is an
    /// input-shape error, an unknown id is OK with absent data.
    pub fn get(&self, id: Option<Uuid>) -> AppResult<CatalogResult<Option<E>>> {
        let Some(id) = id else {
            return Ok(CatalogResult::error("ID_NULL", "ID mustn't be null."));
        };
        let parents = self.store.load()?;
        for parent in &parents {
            if let Some(child) = (self.children)(parent).iter().find(|c| c.id() == Some(id)) {
                return Ok(CatalogResult::success(Some(self.converter.to_entity(child))));
            }
        }
        Ok(CatalogResult::success(None))
    }

    /// Validates the parent with EXISTS and returns its child collection
    /// in persisted order.
    pub fn find(&self, parent: Option<&PE>) -> AppResult<CatalogResult<Vec<E>>> {
        let Some(value) = parent else {
            return Ok(self.parent_validator.null_input());
        };
        let parents = self.store.load()?;
        let result = self
            .parent_validator
            .validate(Some(value), &parents, &[ValidationType::Exists]);
        if let CatalogResult::Err(events) = result {
            return Ok(CatalogResult::Err(events));
        }

        let owner = parents
            .iter()
            .find(|p| p.id().is_some() && p.id() == value.id())
            .ok_or(AppError::NotFound)?;
        Ok(CatalogResult::success(
            self.converter.to_entity_list((self.children)(owner)),
        ))
    }

    /// Validates the parent with EXISTS and the child with NEW + DEEP;
    /// both validations run and their events merge, parent first. On
    /// success the child is appended at position = current child count
    /// and the whole parent is re-persisted.
    pub fn add(&self, parent: Option<&PE>, child: Option<&E>) -> AppResult<CatalogResult<()>> {
        let (Some(parent_value), Some(child_value)) = (parent, child) else {
            return self.report_rejected_add(parent, child);
        };

        let mut parents = self.store.load()?;
        let parent_result =
            self.parent_validator
                .validate(Some(parent_value), &parents, &[ValidationType::Exists]);
        let child_result = self.validator.validate::<D>(
            Some(child_value),
            &[],
            &[ValidationType::New, ValidationType::Deep],
        );
        if let CatalogResult::Err(events) = parent_result.merge(child_result) {
            log::warn!("rejected add of {}: {} event(s)", self.validator.name(), events.len());
            return Ok(CatalogResult::Err(events));
        }

        let parent_id = parent_value.id();
        let owner = parents
            .iter_mut()
            .find(|p| p.id().is_some() && p.id() == parent_id)
            .ok_or(AppError::NotFound)?;
        let siblings = (self.children_mut)(owner);
        let mut item = self.converter.to_domain(child_value);
        item.set_id(None);
        item.set_position(siblings.len() as u32);
        siblings.push(item);
        self.store.persist(owner)?;

        self.emit(CatalogAction::Added, None);
        Ok(CatalogResult::success(()))
    }

    /// Validates with EXISTS + DEEP and replaces the child inside its
    /// owner, preserving the stored position and owned grandchildren.
    pub fn update(&self, entity: Option<&E>) -> AppResult<CatalogResult<()>> {
        let Some(value) = entity else {
            return Ok(self.validator.null_input());
        };
        let (mut parents, located, result) =
            self.prepare(value, &[ValidationType::Exists, ValidationType::Deep])?;
        if let CatalogResult::Err(events) = result {
            log::warn!("rejected update of {}: {} event(s)", self.validator.name(), events.len());
            return Ok(CatalogResult::Err(events));
        }
        let Some((parent_index, child_index)) = located else {
            return Err(AppError::NotFound);
        };

        let owner = &mut parents[parent_index];
        let siblings = (self.children_mut)(owner);
        let stored = &siblings[child_index];
        let mut item = self.converter.to_domain(value);
        item.set_position(stored.position());
        (self.carry_over)(&mut item, stored);
        siblings[child_index] = item;
        self.store.persist(owner)?;

        self.emit(CatalogAction::Updated, value.id());
        Ok(CatalogResult::success(()))
    }

    /// Validates with EXISTS, removes the child from its owner and
    /// renumbers the remaining siblings.
    pub fn remove(&self, entity: Option<&E>) -> AppResult<CatalogResult<()>> {
        let Some(value) = entity else {
            return Ok(self.validator.null_input());
        };
        let (mut parents, located, result) = self.prepare(value, &[ValidationType::Exists])?;
        if let CatalogResult::Err(events) = result {
            return Ok(CatalogResult::Err(events));
        }
        let Some((parent_index, child_index)) = located else {
            return Err(AppError::NotFound);
        };

        let owner = &mut parents[parent_index];
        let siblings = (self.children_mut)(owner);
        siblings.remove(child_index);
        for (position, sibling) in siblings.iter_mut().enumerate() {
            sibling.set_position(position as u32);
        }
        self.store.persist(owner)?;

        self.emit(CatalogAction::Removed, value.id());
        Ok(CatalogResult::success(()))
    }

    /// Validates with EXISTS and appends a deep, independent copy of the
    /// child to its owner; identifiers are cleared here and reassigned by
    /// the persistence collaborator.
    pub fn duplicate(&self, entity: Option<&E>) -> AppResult<CatalogResult<()>> {
        let Some(value) = entity else {
            return Ok(self.validator.null_input());
        };
        let (mut parents, located, result) = self.prepare(value, &[ValidationType::Exists])?;
        if let CatalogResult::Err(events) = result {
            return Ok(CatalogResult::Err(events));
        }
        let Some((parent_index, child_index)) = located else {
            return Err(AppError::NotFound);
        };

        let owner = &mut parents[parent_index];
        let siblings = (self.children_mut)(owner);
        let mut copy = siblings[child_index].clone();
        copy.clear_ids();
        copy.set_position(siblings.len() as u32);
        siblings.push(copy);
        self.store.persist(owner)?;

        self.emit(CatalogAction::Duplicated, value.id());
        Ok(CatalogResult::success(()))
    }

    /// Validates with EXISTS + UP and swaps with the previous sibling.
    pub fn move_up(&self, entity: Option<&E>) -> AppResult<CatalogResult<()>> {
        self.shift(entity, true)
    }

    /// Validates with EXISTS + DOWN and swaps with the next sibling.
    pub fn move_down(&self, entity: Option<&E>) -> AppResult<CatalogResult<()>> {
        self.shift(entity, false)
    }

    fn shift(&self, entity: Option<&E>, up: bool) -> AppResult<CatalogResult<()>> {
        let Some(value) = entity else {
            return Ok(self.validator.null_input());
        };
        let direction = if up { ValidationType::Up } else { ValidationType::Down };
        let (mut parents, located, result) =
            self.prepare(value, &[ValidationType::Exists, direction])?;
        if let CatalogResult::Err(events) = result {
            return Ok(CatalogResult::Err(events));
        }
        let Some((parent_index, child_index)) = located else {
            return Err(AppError::NotFound);
        };

        let owner = &mut parents[parent_index];
        let siblings = (self.children_mut)(owner);
        let neighbour = if up { child_index - 1 } else { child_index + 1 };
        let a = siblings[neighbour].position();
        let b = siblings[child_index].position();
        siblings[neighbour].set_position(b);
        siblings[child_index].set_position(a);
        siblings.swap(neighbour, child_index);
        self.store.persist(owner)?;

        self.emit(
            if up { CatalogAction::MovedUp } else { CatalogAction::MovedDown },
            value.id(),
        );
        Ok(CatalogResult::success(()))
    }

    /// Loads all parents, locates the child's owner and validates against
    /// the owner's sibling list (or an empty one when the id resolves
    /// nowhere, so EXISTS reports the child's own NOT_EXIST).
    fn prepare(
        &self,
        value: &E,
        types: &[ValidationType],
    ) -> AppResult<(Vec<PD>, Option<(usize, usize)>, CatalogResult<()>)> {
        let parents = self.store.load()?;
        let located = value.id().and_then(|id| self.locate(&parents, id));
        let result = match located {
            Some((parent_index, _)) => {
                self.validator
                    .validate(Some(value), (self.children)(&parents[parent_index]), types)
            }
            None => self.validator.validate::<D>(Some(value), &[], types),
        };
        Ok((parents, located, result))
    }

    fn locate(&self, parents: &[PD], id: Uuid) -> Option<(usize, usize)> {
        for (parent_index, parent) in parents.iter().enumerate() {
            if let Some(child_index) = (self.children)(parent)
                .iter()
                .position(|child| child.id() == Some(id))
            {
                return Some((parent_index, child_index));
            }
        }
        None
    }

    /// Reports an add whose parent or child argument is absent; the other
    /// argument's checks still run so the caller sees every problem.
    fn report_rejected_add(
        &self,
        parent: Option<&PE>,
        child: Option<&E>,
    ) -> AppResult<CatalogResult<()>> {
        let parent_result = match parent {
            Some(value) => {
                let parents = self.store.load()?;
                self.parent_validator
                    .validate(Some(value), &parents, &[ValidationType::Exists])
            }
            None => self.parent_validator.null_input(),
        };
        let child_result = self.validator.validate::<D>(
            child,
            &[],
            &[ValidationType::New, ValidationType::Deep],
        );
        Ok(parent_result.merge(child_result))
    }

    fn emit(&self, action: CatalogAction, id: Option<Uuid>) {
        self.event_bus
            .emit(CatalogEvent::new(self.validator.name(), action, id));
    }
}
