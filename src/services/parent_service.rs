// src/services/parent_service.rs
//
// Generic CRUD + reorder + duplicate over a flat, position-ordered
// collection of top-level aggregates.
//
// CRITICAL RULES:
// - Every operation is a fresh read-validate-write cycle
// - On validation failure no persistence mutation happens and the
//   accumulated events are returned as the result
// - Position bookkeeping: add appends at position = collection size,
//   update preserves the stored position

use std::sync::Arc;

use uuid::Uuid;

use crate::application::converter::Converter;
use crate::domain::{Identifiable, Movable};
use crate::error::{AppError, AppResult};
use crate::events::{CatalogAction, CatalogEvent, EventBus};
use crate::repositories::MovableRepository;
use crate::validation::{CatalogResult, MovableValidator, ValidationType};

/// Copies fields that never travel on the wire (owned children) from the
/// stored aggregate into its updated replacement.
pub type CarryOver<D> = fn(&mut D, &D);

/// Facade over one top-level aggregate type.
///
/// `E` is the wire shape, `D` the domain shape. All strategies (validator
/// rules, converter, carry-over) are injected; concrete entity services
/// are type aliases plus wiring.
pub struct ParentCatalogService<E: Identifiable, D: Movable> {
    repository: Arc<dyn MovableRepository<D>>,
    converter: Arc<dyn Converter<D, E>>,
    validator: MovableValidator<E>,
    carry_over: CarryOver<D>,
    event_bus: Arc<EventBus>,
}

impl<E: Identifiable, D: Movable> ParentCatalogService<E, D> {
    pub fn new(
        repository: Arc<dyn MovableRepository<D>>,
        converter: Arc<dyn Converter<D, E>>,
        validator: MovableValidator<E>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            repository,
            converter,
            validator,
            carry_over: |_, _| {},
            event_bus,
        }
    }

    /// Installs the hook that carries owned children over on update.
    pub fn with_carry_over(mut self, carry_over: CarryOver<D>) -> Self {
        self.carry_over = carry_over;
        self
    }

    /// Fetches one entity; a missing id is an input-shape error, an
    /// unknown id is OK with absent data.
    pub fn get(&self, id: Option<Uuid>) -> AppResult<CatalogResult<Option<E>>> {
        let Some(id) = id else {
            return Ok(CatalogResult::error("ID_NULL", "ID mustn't be null."));
        };
        let found = self.repository.get(id)?;
        Ok(CatalogResult::success(
            found.map(|item| self.converter.to_entity(&item)),
        ))
    }

    /// Full collection in persisted order.
    pub fn get_all(&self) -> AppResult<CatalogResult<Vec<E>>> {
        let items = self.repository.get_all()?;
        Ok(CatalogResult::success(self.converter.to_entity_list(&items)))
    }

    /// Validates with NEW + DEEP and appends at the end of the collection.
    pub fn add(&self, entity: Option<&E>) -> AppResult<CatalogResult<()>> {
        let result = self.validator.validate::<D>(
            entity,
            &[],
            &[ValidationType::New, ValidationType::Deep],
        );
        let Some(value) = entity else {
            return Ok(result);
        };
        if let CatalogResult::Err(events) = result {
            log::warn!("rejected add of {}: {} event(s)", self.validator.name(), events.len());
            return Ok(CatalogResult::Err(events));
        }

        let mut item = self.converter.to_domain(value);
        item.set_id(None);
        item.set_position(self.repository.get_all()?.len() as u32);
        self.repository.add(item)?;

        self.emit(CatalogAction::Added, None);
        Ok(CatalogResult::success(()))
    }

    /// Validates with EXISTS + DEEP and persists, preserving the stored
    /// position and owned children.
    pub fn update(&self, entity: Option<&E>) -> AppResult<CatalogResult<()>> {
        let Some(value) = entity else {
            return Ok(self.validator.null_input());
        };
        let items = self.repository.get_all()?;
        let result =
            self.validator
                .validate(Some(value), &items, &[ValidationType::Exists, ValidationType::Deep]);
        if let CatalogResult::Err(events) = result {
            log::warn!("rejected update of {}: {} event(s)", self.validator.name(), events.len());
            return Ok(CatalogResult::Err(events));
        }

        let stored = Self::stored(&items, value.id())?;
        let mut item = self.converter.to_domain(value);
        item.set_position(stored.position());
        (self.carry_over)(&mut item, stored);
        self.repository.update(item)?;

        self.emit(CatalogAction::Updated, value.id());
        Ok(CatalogResult::success(()))
    }

    /// Validates with EXISTS and deletes.
    pub fn remove(&self, entity: Option<&E>) -> AppResult<CatalogResult<()>> {
        let Some(value) = entity else {
            return Ok(self.validator.null_input());
        };
        let items = self.repository.get_all()?;
        let result = self.validator.validate(Some(value), &items, &[ValidationType::Exists]);
        if let CatalogResult::Err(events) = result {
            return Ok(CatalogResult::Err(events));
        }

        self.repository.remove(Self::stored(&items, value.id())?)?;

        self.emit(CatalogAction::Removed, value.id());
        Ok(CatalogResult::success(()))
    }

    /// Validates with EXISTS and appends a deep, independent copy; the
    /// collaborator clears and reassigns every identifier.
    pub fn duplicate(&self, entity: Option<&E>) -> AppResult<CatalogResult<()>> {
        let Some(value) = entity else {
            return Ok(self.validator.null_input());
        };
        let items = self.repository.get_all()?;
        let result = self.validator.validate(Some(value), &items, &[ValidationType::Exists]);
        if let CatalogResult::Err(events) = result {
            return Ok(CatalogResult::Err(events));
        }

        self.repository.duplicate(Self::stored(&items, value.id())?)?;

        self.emit(CatalogAction::Duplicated, value.id());
        Ok(CatalogResult::success(()))
    }

    /// Validates with EXISTS + UP and swaps with the list-order
    /// predecessor.
    pub fn move_up(&self, entity: Option<&E>) -> AppResult<CatalogResult<()>> {
        self.shift(entity, true)
    }

    /// Validates with EXISTS + DOWN and swaps with the list-order
    /// successor.
    pub fn move_down(&self, entity: Option<&E>) -> AppResult<CatalogResult<()>> {
        self.shift(entity, false)
    }

    /// Re-derives every position from list index; idempotent.
    pub fn update_positions(&self) -> AppResult<CatalogResult<()>> {
        self.repository.update_positions()?;
        self.emit(CatalogAction::Reordered, None);
        Ok(CatalogResult::success(()))
    }

    fn shift(&self, entity: Option<&E>, up: bool) -> AppResult<CatalogResult<()>> {
        let Some(value) = entity else {
            return Ok(self.validator.null_input());
        };
        let direction = if up { ValidationType::Up } else { ValidationType::Down };
        let items = self.repository.get_all()?;
        let result = self
            .validator
            .validate(Some(value), &items, &[ValidationType::Exists, direction]);
        if let CatalogResult::Err(events) = result {
            return Ok(CatalogResult::Err(events));
        }

        let stored = Self::stored(&items, value.id())?;
        if up {
            self.repository.move_up(stored)?;
            self.emit(CatalogAction::MovedUp, value.id());
        } else {
            self.repository.move_down(stored)?;
            self.emit(CatalogAction::MovedDown, value.id());
        }
        Ok(CatalogResult::success(()))
    }

    /// The stored aggregate for a just-validated id; its absence means the
    /// collaborator changed underneath us.
    fn stored(items: &[D], id: Option<Uuid>) -> AppResult<&D> {
        items
            .iter()
            .find(|item| item.id().is_some() && item.id() == id)
            .ok_or(AppError::NotFound)
    }

    fn emit(&self, action: CatalogAction, id: Option<Uuid>) {
        self.event_bus
            .emit(CatalogEvent::new(self.validator.name(), action, id));
    }
}
