use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use crate::foundation::error::{ReelError, ReelResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerKind {
    AnimationFrame,
    Resize,
    PointerMove,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// The page environment that delivers frames, resizes and pointer moves.
///
/// Methods take `&self`; hosts keep their registries behind interior mutability so a guard can
/// release listeners from any exit path.
pub trait Host {
    fn register(&self, kind: ListenerKind) -> ReelResult<ListenerId>;
    fn unregister(&self, id: ListenerId);
}

/// Owns a set of host registrations and releases all of them on drop.
pub struct Listeners {
    host: Rc<dyn Host>,
    ids: Vec<ListenerId>,
}

impl Listeners {
    /// Register every kind in order. If one fails, the ones already taken are released.
    pub fn acquire(host: Rc<dyn Host>, kinds: &[ListenerKind]) -> ReelResult<Self> {
        let mut guard = Self {
            host,
            ids: Vec::with_capacity(kinds.len()),
        };
        for &kind in kinds {
            let id = guard.host.register(kind)?;
            guard.ids.push(id);
        }
        Ok(guard)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners").field("ids", &self.ids).finish()
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for id in self.ids.drain(..).rev() {
            self.host.unregister(id);
        }
    }
}

/// In-memory host that only tracks registrations. Can be told to refuse one listener kind.
#[derive(Debug, Default)]
pub struct RecordingHost {
    next: RefCell<u64>,
    active: RefCell<BTreeMap<ListenerId, ListenerKind>>,
    refuse: RefCell<Option<ListenerKind>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refuse(&self, kind: ListenerKind) {
        *self.refuse.borrow_mut() = Some(kind);
    }

    pub fn active(&self) -> usize {
        self.active.borrow().len()
    }

    pub fn active_of(&self, kind: ListenerKind) -> usize {
        self.active.borrow().values().filter(|&&k| k == kind).count()
    }
}

impl Host for RecordingHost {
    fn register(&self, kind: ListenerKind) -> ReelResult<ListenerId> {
        if *self.refuse.borrow() == Some(kind) {
            return Err(ReelError::not_ready(format!("host refused {kind:?} listener")));
        }
        let mut next = self.next.borrow_mut();
        let id = ListenerId(*next);
        *next += 1;
        self.active.borrow_mut().insert(id, kind);
        Ok(id)
    }

    fn unregister(&self, id: ListenerId) {
        self.active.borrow_mut().remove(&id);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/host.rs"]
mod tests;
