use crate::{
    animation::focus::focus,
    foundation::core::Progress,
    foundation::error::{ReelError, ReelResult},
};

/// A `[start, end]` slice of progress owned by one section.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct SectionWindow {
    start: f64,
    end: f64,
}

impl SectionWindow {
    pub fn new(start: f64, end: f64) -> ReelResult<Self> {
        if !(start.is_finite() && end.is_finite()) {
            return Err(ReelError::config("section window bounds must be finite"));
        }
        if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) {
            return Err(ReelError::config(format!(
                "section window [{start}, {end}] must lie within [0, 1]"
            )));
        }
        if start >= end {
            return Err(ReelError::config(format!(
                "section window [{start}, {end}] must have start < end"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(self) -> f64 {
        self.start
    }

    pub fn end(self) -> f64 {
        self.end
    }

    pub fn span(self) -> f64 {
        self.end - self.start
    }

    pub fn contains(self, p: f64) -> bool {
        self.start <= p && p <= self.end
    }

    pub fn local_t(self, p: f64) -> f64 {
        ((p - self.start) / self.span()).clamp(0.0, 1.0)
    }
}

impl TryFrom<[f64; 2]> for SectionWindow {
    type Error = ReelError;

    fn try_from(v: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(v[0], v[1])
    }
}

impl From<SectionWindow> for [f64; 2] {
    fn from(w: SectionWindow) -> Self {
        [w.start, w.end]
    }
}

/// Which section (if any) owns the current progress, and how far through it we are.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ActiveState {
    pub index: Option<usize>,
    /// Position within the active window; `0` when no section is active.
    pub local_t: f64,
}

impl ActiveState {
    pub const NONE: Self = Self {
        index: None,
        local_t: 0.0,
    };

    /// `-1` for "none", matching the overlay wire contract.
    pub fn signed_index(self) -> i64 {
        self.index.map_or(-1, |i| i as i64)
    }

    /// Attention value for the active section (`0` in a gap).
    pub fn focus(self) -> f64 {
        match self.index {
            Some(_) => focus(self.local_t),
            None => 0.0,
        }
    }

    /// Attention value as seen by section `index`; only the active section is non-zero.
    pub fn focus_for(self, index: usize) -> f64 {
        if self.index == Some(index) {
            focus(self.local_t)
        } else {
            0.0
        }
    }
}

/// Ordered, non-overlapping windows for one scene.
///
/// Adjacent windows may share an endpoint; gaps are allowed.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WindowSet {
    windows: Vec<SectionWindow>,
}

impl WindowSet {
    pub fn new(windows: Vec<SectionWindow>) -> ReelResult<Self> {
        if windows.is_empty() {
            return Err(ReelError::config("a scene needs at least one section window"));
        }
        for (i, pair) in windows.windows(2).enumerate() {
            if pair[1].start < pair[0].end {
                return Err(ReelError::config(format!(
                    "section windows {i} [{}, {}] and {} [{}, {}] overlap or are out of order",
                    pair[0].start,
                    pair[0].end,
                    i + 1,
                    pair[1].start,
                    pair[1].end
                )));
            }
        }
        Ok(Self { windows })
    }

    pub fn as_slice(&self) -> &[SectionWindow] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn locate(&self, progress: Progress) -> ActiveState {
        locate(progress, &self.windows)
    }
}

/// Map progress onto `windows`.
///
/// Scans in list order with inclusive bounds. A point shared by two adjacent windows belongs to
/// the later one, so a section's end and the next section's start never both claim it. If windows
/// were misconfigured to overlap, the first containing window in list order wins. O(N), no
/// allocation.
pub fn locate(progress: Progress, windows: &[SectionWindow]) -> ActiveState {
    let p = progress.get();
    for (i, w) in windows.iter().enumerate() {
        if !w.contains(p) {
            continue;
        }
        if p == w.end
            && let Some(next) = windows.get(i + 1)
            && next.start == w.end
        {
            continue;
        }
        return ActiveState {
            index: Some(i),
            local_t: w.local_t(p),
        };
    }
    ActiveState::NONE
}

#[cfg(test)]
#[path = "../../tests/unit/choreo/window.rs"]
mod tests;
