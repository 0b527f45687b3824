// src/events/bus.rs
//
// Core event bus implementation.
//
// DESIGN PRINCIPLES:
// 1. Synchronous - handlers execute immediately in subscription order
// 2. Deterministic - same events, same delivery order
// 3. Observable - every emission is logged
// 4. No magic - explicit, straightforward code

use std::sync::RwLock;

use crate::events::CatalogEvent;

type Handler = Box<dyn Fn(&CatalogEvent) + Send + Sync>;

/// Central coordination point for catalog events.
///
/// Services emit events after successful mutations; subscribers observe
/// without direct dependencies on the services.
pub struct EventBus {
    handlers: RwLock<Vec<Handler>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, handler: impl Fn(&CatalogEvent) + Send + Sync + 'static) {
        match self.handlers.write() {
            Ok(mut handlers) => handlers.push(Box::new(handler)),
            Err(_) => log::warn!("event bus lock poisoned; subscription dropped"),
        }
    }

    pub fn emit(&self, event: CatalogEvent) {
        log::debug!("{:?} {} ({:?})", event.action, event.entity, event.id);
        match self.handlers.read() {
            Ok(handlers) => {
                for handler in handlers.iter() {
                    handler(&event);
                }
            }
            Err(_) => log::warn!("event bus lock poisoned; dropping {:?}", event),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CatalogAction;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_emit_reaches_every_handler() {
        let bus = EventBus::new();
        let count = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let count = count.clone();
            bus.subscribe(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }

        bus.emit(CatalogEvent::new("Movie", CatalogAction::Added, None));
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_handlers_run_in_subscription_order() {
        let bus = EventBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for label in ["first", "second"] {
            let order = order.clone();
            bus.subscribe(move |_| order.lock().unwrap().push(label));
        }

        bus.emit(CatalogEvent::new("Genre", CatalogAction::Removed, None));
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }
}
