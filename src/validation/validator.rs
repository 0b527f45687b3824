// src/validation/validator.rs
//
// Generic validation pipeline shared by every catalog entity.
//
// CRITICAL RULES:
// - All checks of one invocation run and accumulate; no short-circuit
// - Validators are stateless; the caller passes the sibling collection in
// - Event codes are <PREFIX>_<REASON> and form a stable contract

use crate::domain::{Identifiable, Movable};
use crate::validation::{CatalogResult, Event};

/// Which subset of checks one `validate` call performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationType {
    /// The entity must not have an identifier yet.
    New,
    /// The entity must have an identifier resolvable in its collection.
    Exists,
    /// Field-level business rules.
    Deep,
    /// The entity must not already be first in its collection.
    Up,
    /// The entity must not already be last in its collection.
    Down,
}

/// Per-entity field rules, invoked for `ValidationType::Deep`.
pub type DeepRules<E> = fn(&E, &mut Vec<Event>);

/// Validator for one entity type.
///
/// Common checks (null input, identifier shape, existence, movability) are
/// generic; field-level rules are injected per entity.
pub struct MovableValidator<E: Identifiable> {
    name: &'static str,
    prefix: &'static str,
    deep: DeepRules<E>,
}

impl<E: Identifiable> MovableValidator<E> {
    pub fn new(name: &'static str, prefix: &'static str, deep: DeepRules<E>) -> Self {
        Self { name, prefix, deep }
    }

    /// Validator with no field-level rules; used for parent-existence checks.
    pub fn shallow(name: &'static str, prefix: &'static str) -> Self {
        Self::new(name, prefix, |_, _| {})
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// The input-shape error reported for an absent argument.
    pub fn null_input<T>(&self) -> CatalogResult<T> {
        CatalogResult::Err(vec![self.null_event()])
    }

    /// Runs every requested check and accumulates events.
    ///
    /// `collection` is the entity's sibling collection in persisted order;
    /// EXISTS resolves ids against it and UP/DOWN decide movability by
    /// list-edge membership, never by the stored position value.
    pub fn validate<D: Movable>(
        &self,
        entity: Option<&E>,
        collection: &[D],
        types: &[ValidationType],
    ) -> CatalogResult<()> {
        let Some(value) = entity else {
            return CatalogResult::Err(vec![self.null_event()]);
        };

        let mut events = Vec::new();
        for validation_type in types {
            match validation_type {
                ValidationType::New => {
                    if value.id().is_some() {
                        events.push(Event::error(self.code("ID_NOT_NULL"), "ID must be null."));
                    }
                }
                ValidationType::Exists => match value.id() {
                    None => events.push(Event::error(self.code("ID_NULL"), "ID mustn't be null.")),
                    Some(id) => {
                        if !collection.iter().any(|item| item.id() == Some(id)) {
                            events.push(Event::error(
                                self.code("NOT_EXIST"),
                                format!("{} doesn't exist.", self.name),
                            ));
                        }
                    }
                },
                ValidationType::Deep => (self.deep)(value, &mut events),
                ValidationType::Up => self.check_movable(value, collection, true, &mut events),
                ValidationType::Down => self.check_movable(value, collection, false, &mut events),
            }
        }
        CatalogResult::from_events(events)
    }

    fn null_event(&self) -> Event {
        Event::error(self.code("NULL"), format!("{} mustn't be null.", self.name))
    }

    fn code(&self, reason: &str) -> String {
        format!("{}_{}", self.prefix, reason)
    }

    /// Movability is decided by list-edge membership. An unresolvable id is
    /// already reported by the EXISTS check, so it is skipped here.
    fn check_movable<D: Movable>(&self, value: &E, collection: &[D], up: bool, events: &mut Vec<Event>) {
        let Some(id) = value.id() else {
            return;
        };
        let Some(index) = collection.iter().position(|item| item.id() == Some(id)) else {
            return;
        };
        let at_edge = if up { index == 0 } else { index + 1 == collection.len() };
        if at_edge {
            events.push(Event::error(
                self.code("NOT_MOVABLE"),
                format!("{} can't be moved {}.", self.name, if up { "up" } else { "down" }),
            ));
        }
    }
}
