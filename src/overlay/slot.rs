use smallvec::SmallVec;

use crate::{
    foundation::error::ReelResult,
    overlay::style::{OverlayMotion, OverlayStyle},
};

/// What the slot is doing right now. `v` is linear visibility in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SlotPhase {
    Idle,
    Entering { index: usize, v: f64 },
    Steady { index: usize },
    Exiting { index: usize, v: f64 },
}

/// Mount/unmount notifications for the presenter's content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotChange {
    /// Content for `index` may be mounted; its enter animation starts from the beginning.
    Mounted(usize),
    /// The exit of `index` finished; its content can be dropped.
    Unmounted(usize),
}

pub type SlotChanges = SmallVec<[SlotChange; 2]>;

/// One overlay position that presents at most one section at a time, exit before enter.
///
/// The slot is told the target index on every discrete transition and is advanced with wall
/// time. An in-flight enter is cancelled into an exit from the same visibility; an in-flight exit
/// whose index becomes the target again turns back into an enter.
#[derive(Clone, Debug)]
pub struct OverlaySlot {
    motion: OverlayMotion,
    phase: SlotPhase,
    target: Option<usize>,
}

impl OverlaySlot {
    pub fn new(motion: OverlayMotion) -> ReelResult<Self> {
        motion.validate()?;
        Ok(Self {
            motion,
            phase: SlotPhase::Idle,
            target: None,
        })
    }

    pub fn phase(&self) -> SlotPhase {
        self.phase
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Index whose content is mounted, entering, steady or exiting.
    pub fn shown(&self) -> Option<usize> {
        match self.phase {
            SlotPhase::Idle => None,
            SlotPhase::Entering { index, .. }
            | SlotPhase::Steady { index }
            | SlotPhase::Exiting { index, .. } => Some(index),
        }
    }

    pub fn is_settled(&self) -> bool {
        match self.phase {
            SlotPhase::Idle => self.target.is_none(),
            SlotPhase::Steady { index } => self.target == Some(index),
            _ => false,
        }
    }

    /// Point the slot at a new section (or none). Mounting from idle happens immediately.
    pub fn retarget(&mut self, target: Option<usize>) -> SlotChanges {
        self.target = target;
        let mut out = SlotChanges::new();
        self.phase = match (self.phase, target) {
            (SlotPhase::Idle, Some(index)) => {
                out.push(SlotChange::Mounted(index));
                SlotPhase::Entering { index, v: 0.0 }
            }
            (SlotPhase::Entering { index, v }, t) if t != Some(index) => {
                SlotPhase::Exiting { index, v }
            }
            (SlotPhase::Steady { index }, t) if t != Some(index) => {
                SlotPhase::Exiting { index, v: 1.0 }
            }
            (SlotPhase::Exiting { index, v }, Some(t)) if t == index => {
                SlotPhase::Entering { index, v }
            }
            (phase, _) => phase,
        };
        out
    }

    /// Advance by `dt` seconds, carrying leftover time from a finished exit into the next enter.
    pub fn advance(&mut self, dt: f64) -> SlotChanges {
        let mut out = SlotChanges::new();
        let mut left = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let rate = 1.0 / self.motion.duration;

        while left > 0.0 {
            match self.phase {
                SlotPhase::Idle | SlotPhase::Steady { .. } => break,
                SlotPhase::Entering { index, v } => {
                    let needed = (1.0 - v) / rate;
                    if left < needed {
                        self.phase = SlotPhase::Entering {
                            index,
                            v: v + left * rate,
                        };
                        break;
                    }
                    self.phase = SlotPhase::Steady { index };
                    break;
                }
                SlotPhase::Exiting { index, v } => {
                    let needed = v / rate;
                    if left < needed {
                        self.phase = SlotPhase::Exiting {
                            index,
                            v: v - left * rate,
                        };
                        break;
                    }
                    left -= needed;
                    out.push(SlotChange::Unmounted(index));
                    self.phase = SlotPhase::Idle;
                    if let Some(next) = self.target {
                        out.push(SlotChange::Mounted(next));
                        self.phase = SlotPhase::Entering { index: next, v: 0.0 };
                    }
                }
            }
        }
        out
    }

    pub fn style(&self) -> OverlayStyle {
        match self.phase {
            SlotPhase::Idle => OverlayStyle::HIDDEN,
            SlotPhase::Entering { v, .. } => self.motion.style(v, false),
            SlotPhase::Steady { .. } => self.motion.style(1.0, false),
            SlotPhase::Exiting { v, .. } => self.motion.style(v, true),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/slot.rs"]
mod tests;
