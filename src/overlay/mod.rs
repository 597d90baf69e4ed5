//! The overlay side of the engine: what it tells the text layer, and a slot model the text layer
//! can use to run exit-before-enter transitions.

pub mod slot;
pub mod style;

use crate::{
    choreo::sections::SectionRecord,
    foundation::error::ReelResult,
    overlay::slot::{OverlaySlot, SlotChange},
    overlay::style::{OverlayMotion, OverlayStyle, counter_label},
};

/// What the engine emits to the overlay layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OverlayEvent {
    /// Sent on every discrete section change. `active_index` is `-1` when no section is active.
    Transition {
        active_index: i64,
        record: Option<SectionRecord>,
    },
    /// Sent once per rendered frame.
    Focus { focus: f64 },
}

impl OverlayEvent {
    pub fn transition(index: Option<usize>, record: Option<SectionRecord>) -> Self {
        Self::Transition {
            active_index: index.map_or(-1, |i| i as i64),
            record,
        }
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transition { .. })
    }
}

/// Receiver of overlay events. Implementations own their text rendering and timing.
pub trait OverlayPresenter {
    fn present(&mut self, event: &OverlayEvent);

    /// Wall-clock time since the previous frame, for presenters that animate.
    fn advance(&mut self, _dt: f64) {}
}

impl<P: OverlayPresenter + ?Sized> OverlayPresenter for Box<P> {
    fn present(&mut self, event: &OverlayEvent) {
        (**self).present(event);
    }

    fn advance(&mut self, dt: f64) {
        (**self).advance(dt);
    }
}

/// Presenter that keeps every event, for tests and the CLI.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<OverlayEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[OverlayEvent] {
        &self.events
    }

    pub fn transitions(&self) -> impl Iterator<Item = &OverlayEvent> {
        self.events.iter().filter(|e| e.is_transition())
    }

    pub fn last_focus(&self) -> Option<f64> {
        self.events.iter().rev().find_map(|e| match e {
            OverlayEvent::Focus { focus } => Some(*focus),
            OverlayEvent::Transition { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl OverlayPresenter for EventLog {
    fn present(&mut self, event: &OverlayEvent) {
        self.events.push(event.clone());
    }
}

/// The card currently mounted by a [`SlotPresenter`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MountedCard {
    pub index: usize,
    pub record: SectionRecord,
    pub counter: String,
}

/// Presenter that runs one [`OverlaySlot`] and tracks which card content is mounted.
#[derive(Debug)]
pub struct SlotPresenter {
    slot: OverlaySlot,
    total: usize,
    pending: Option<SectionRecord>,
    mounted: Option<MountedCard>,
    focus: f64,
    changes: Vec<SlotChange>,
}

impl SlotPresenter {
    pub fn new(motion: OverlayMotion, total: usize) -> ReelResult<Self> {
        Ok(Self {
            slot: OverlaySlot::new(motion)?,
            total,
            pending: None,
            mounted: None,
            focus: 0.0,
            changes: Vec::new(),
        })
    }

    pub fn slot(&self) -> &OverlaySlot {
        &self.slot
    }

    pub fn mounted(&self) -> Option<&MountedCard> {
        self.mounted.as_ref()
    }

    pub fn style(&self) -> OverlayStyle {
        self.slot.style()
    }

    pub fn focus(&self) -> f64 {
        self.focus
    }

    /// Every mount and unmount so far, in order.
    pub fn changes(&self) -> &[SlotChange] {
        &self.changes
    }

    fn apply(&mut self, changes: &[SlotChange]) {
        for &change in changes {
            match change {
                SlotChange::Unmounted(_) => self.mounted = None,
                SlotChange::Mounted(index) => {
                    self.mounted = self.pending.clone().map(|record| MountedCard {
                        index,
                        record,
                        counter: counter_label(index, self.total),
                    });
                }
            }
            self.changes.push(change);
        }
    }
}

impl OverlayPresenter for SlotPresenter {
    fn present(&mut self, event: &OverlayEvent) {
        match event {
            OverlayEvent::Focus { focus } => self.focus = *focus,
            OverlayEvent::Transition {
                active_index,
                record,
            } => {
                let target = usize::try_from(*active_index).ok();
                if record.is_some() {
                    self.pending = record.clone();
                }
                let changes = self.slot.retarget(target);
                self.apply(&changes);
            }
        }
    }

    fn advance(&mut self, dt: f64) {
        let changes = self.slot.advance(dt);
        self.apply(&changes);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/mod.rs"]
mod tests;
