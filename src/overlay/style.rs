use crate::{
    animation::ease::Ease,
    foundation::error::{ReelError, ReelResult},
};

/// How an overlay card moves in and out.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayMotion {
    /// Seconds for a full enter or a full exit.
    pub duration: f64,
    pub ease: Ease,
    /// Offset in pixels the card starts from when entering.
    pub enter_from: [f64; 2],
    /// Offset in pixels the card leaves toward when exiting.
    pub exit_to: [f64; 2],
    /// Blur radius in pixels while fully hidden.
    pub blur: f64,
}

impl OverlayMotion {
    /// Narrative cards: slide in from the left out of a blur, leave the same way.
    pub const NARRATIVE: Self = Self {
        duration: 0.7,
        ease: Ease::OVERLAY,
        enter_from: [-60.0, 0.0],
        exit_to: [-60.0, 0.0],
        blur: 8.0,
    };

    /// Layer captions: rise in from the lower left, leave toward the upper right.
    pub const LAYER_INFO: Self = Self {
        duration: 0.5,
        ease: Ease::CubicBezier(0.0, 0.0, 0.58, 1.0),
        enter_from: [-50.0, 20.0],
        exit_to: [50.0, -20.0],
        blur: 0.0,
    };

    pub fn validate(&self) -> ReelResult<()> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(ReelError::config("overlay duration must be positive"));
        }
        if !self.blur.is_finite() || self.blur < 0.0 {
            return Err(ReelError::config("overlay blur must be non-negative"));
        }
        Ok(())
    }

    /// Style at linear visibility `v`, on the way in or on the way out.
    pub fn style(&self, v: f64, exiting: bool) -> OverlayStyle {
        let e = self.ease.apply(v);
        let hidden = 1.0 - e;
        let from = if exiting { self.exit_to } else { self.enter_from };
        OverlayStyle {
            opacity: e,
            offset: [from[0] * hidden, from[1] * hidden],
            blur: self.blur * hidden,
        }
    }
}

/// Presentation values a presenter applies to the card.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct OverlayStyle {
    pub opacity: f64,
    pub offset: [f64; 2],
    pub blur: f64,
}

impl OverlayStyle {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        offset: [0.0, 0.0],
        blur: 0.0,
    };
}

/// `"02 / 04"` style counter.
pub fn counter_label(index: usize, total: usize) -> String {
    format!("{:02} / {:02}", index + 1, total)
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/style.rs"]
mod tests;
