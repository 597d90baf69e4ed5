use smallvec::SmallVec;

use crate::{
    choreo::window::ActiveState,
    foundation::error::{ReelError, ReelResult},
};

/// Which illustration a section mounts in the 3D layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IllustrationKind {
    DataIntegration,
    OperationalMonitoring,
    PredictiveIntelligence,
    DecisionMaking,
    /// Funnel diagram, base layer: wireframe source nodes.
    SourceNodes,
    /// Funnel diagram, middle layer: the funnel surface.
    Funnel,
    /// Funnel diagram, top layer: stacked platform grids.
    PlatformGrids,
}

/// Immutable content unit supplied with each window.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionRecord {
    pub title: String,
    pub description: String,
    /// Rotate the illustration 45 degrees about the view axis.
    #[serde(default)]
    pub tilt: bool,
    pub illustration: IllustrationKind,
    /// Short badge shown above the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

impl SectionRecord {
    pub fn validate(&self) -> ReelResult<()> {
        if self.title.trim().is_empty() {
            return Err(ReelError::config("section title must be non-empty"));
        }
        Ok(())
    }
}

/// Discrete intent emitted when the active section changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionIntent {
    /// The previously active section starts leaving.
    Exit { index: usize },
    /// A section becomes active; presenters restart its enter animation from the beginning.
    Enter { index: usize },
}

/// Intents produced by one observation. Never more than an exit and an enter.
pub type Intents = SmallVec<[SectionIntent; 2]>;

/// Owns the active index and reports every change immediately.
///
/// No debouncing and no intermediate states: several calls within one frame interval produce
/// several transitions, and the machine never reports two active sections at once.
#[derive(Clone, Debug)]
pub struct SectionStateMachine {
    active: Option<usize>,
    len: usize,
}

impl SectionStateMachine {
    pub fn new(len: usize) -> Self {
        Self { active: None, len }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Feed a freshly located state; returns the intents for this change (empty if unchanged).
    pub fn observe(&mut self, state: ActiveState) -> Intents {
        let next = state.index.filter(|&i| i < self.len);
        let mut out = Intents::new();
        if next == self.active {
            return out;
        }

        if let Some(prev) = self.active {
            out.push(SectionIntent::Exit { index: prev });
        }
        if let Some(index) = next {
            out.push(SectionIntent::Enter { index });
        }
        tracing::debug!(from = ?self.active, to = ?next, "section transition");
        self.active = next;
        out
    }

    /// Forget the active section, e.g. on unmount. Returns the exit intent if one was active.
    pub fn reset(&mut self) -> Option<SectionIntent> {
        self.active
            .take()
            .map(|index| SectionIntent::Exit { index })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreo/sections.rs"]
mod tests;
