//! User-gesture bus with scoped listeners.
//!
//! The host event loop calls [`GestureBus::dispatch`] for every pointer, key
//! or click event. Components that care hold a [`GestureListener`]; dropping
//! it deregisters it, so a listener can never outlive its owner.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    PointerDown,
    KeyDown,
    Click,
}

#[derive(Debug, Default)]
struct Slot {
    kinds: Vec<GestureKind>,
    inbox: VecDeque<GestureKind>,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    slots: BTreeMap<u64, Slot>,
}

/// Single-threaded registry of gesture listeners. Cheap to clone; clones
/// share the same registry.
#[derive(Debug, Clone, Default)]
pub struct GestureBus {
    registry: Rc<RefCell<Registry>>,
}

impl GestureBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest in `kinds` until the returned listener is dropped.
    pub fn subscribe(&self, kinds: &[GestureKind]) -> GestureListener {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.slots.insert(
            id,
            Slot {
                kinds: kinds.to_vec(),
                inbox: VecDeque::new(),
            },
        );
        GestureListener {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver `kind` to every listener registered for it.
    /// Returns how many listeners received it.
    pub fn dispatch(&self, kind: GestureKind) -> usize {
        let mut registry = self.registry.borrow_mut();
        let mut delivered = 0;
        for slot in registry.slots.values_mut() {
            if slot.kinds.contains(&kind) {
                slot.inbox.push_back(kind);
                delivered += 1;
            }
        }
        delivered
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().slots.len()
    }
}

/// Registration handle. Deregisters on drop.
#[derive(Debug)]
pub struct GestureListener {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl GestureListener {
    /// Oldest undelivered gesture, if any.
    pub fn take(&self) -> Option<GestureKind> {
        let registry = self.registry.upgrade()?;
        let mut registry = registry.borrow_mut();
        let kind = registry.slots.get_mut(&self.id)?.inbox.pop_front();
        kind
    }
}

impl Drop for GestureListener {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().slots.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_only_subscribed_kinds() {
        let bus = GestureBus::new();
        let listener = bus.subscribe(&[GestureKind::KeyDown]);

        assert_eq!(bus.dispatch(GestureKind::Click), 0);
        assert_eq!(listener.take(), None);

        assert_eq!(bus.dispatch(GestureKind::KeyDown), 1);
        assert_eq!(listener.take(), Some(GestureKind::KeyDown));
        assert_eq!(listener.take(), None);
    }

    #[test]
    fn drop_deregisters() {
        let bus = GestureBus::new();
        let listener = bus.subscribe(&[GestureKind::PointerDown, GestureKind::KeyDown]);
        assert_eq!(bus.listener_count(), 1);
        drop(listener);
        assert_eq!(bus.listener_count(), 0);
        assert_eq!(bus.dispatch(GestureKind::PointerDown), 0);
    }

    #[test]
    fn listener_outliving_bus_is_inert() {
        let bus = GestureBus::new();
        let listener = bus.subscribe(&[GestureKind::Click]);
        drop(bus);
        assert_eq!(listener.take(), None);
    }
}
