//! Progress-driven offsets layered on top of the camera: the opening parallax tilt and the
//! vertical spread of stacked layers. Both depend on progress only, never on section index.

use crate::{
    animation::keyframes::Timeline,
    foundation::core::{DVec3, Progress},
    foundation::error::{ReelError, ReelResult},
};

/// Scene-root rotation that settles to zero by `until`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParallaxTilt {
    /// Euler XYZ rotation at progress 0.
    pub from: DVec3,
    /// Progress at which the tilt reaches zero.
    #[serde(default = "opening_span")]
    pub until: f64,
}

fn opening_span() -> f64 {
    0.2
}

impl ParallaxTilt {
    pub fn validate(&self) -> ReelResult<()> {
        if !(self.until > 0.0 && self.until <= 1.0) {
            return Err(ReelError::config("parallax 'until' must be in (0, 1]"));
        }
        if !self.from.is_finite() {
            return Err(ReelError::config("parallax rotation must be finite"));
        }
        Ok(())
    }

    pub fn timeline(&self) -> ReelResult<Timeline<DVec3>> {
        self.validate()?;
        Timeline::linear([(0.0, self.from), (self.until, DVec3::ZERO)])
    }
}

/// Layers start packed `initial_gap` apart and spread to `final_gap` by `until`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerSpread {
    pub initial_gap: f64,
    pub final_gap: f64,
    #[serde(default = "opening_span")]
    pub until: f64,
}

impl LayerSpread {
    pub fn validate(&self) -> ReelResult<()> {
        if !(self.until > 0.0 && self.until <= 1.0) {
            return Err(ReelError::config("layer spread 'until' must be in (0, 1]"));
        }
        if !(self.initial_gap.is_finite() && self.final_gap.is_finite()) {
            return Err(ReelError::config("layer spread gaps must be finite"));
        }
        Ok(())
    }

    /// Centered offset factor of layer `index` among `count` (`-1, 0, 1` for three layers).
    pub fn factor(index: usize, count: usize) -> f64 {
        index as f64 - (count.saturating_sub(1)) as f64 / 2.0
    }

    /// Settled height of a layer, used to aim the camera.
    pub fn final_y(&self, index: usize, count: usize) -> f64 {
        Self::factor(index, count) * self.final_gap
    }

    pub fn y(&self, index: usize, count: usize, progress: Progress) -> f64 {
        let f = Self::factor(index, count);
        let t = (progress.get() / self.until).clamp(0.0, 1.0);
        crate::foundation::math::lerp(f * self.initial_gap, f * self.final_gap, t)
    }
}

/// Per-progress root rotation plus layer offsets for one scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneMotion {
    tilt: Option<Timeline<DVec3>>,
    spread: Option<LayerSpread>,
}

impl SceneMotion {
    pub fn new(tilt: Option<&ParallaxTilt>, spread: Option<&LayerSpread>) -> ReelResult<Self> {
        let tilt = tilt.map(ParallaxTilt::timeline).transpose()?;
        if let Some(s) = spread {
            s.validate()?;
        }
        Ok(Self {
            tilt,
            spread: spread.cloned(),
        })
    }

    pub fn root_rotation(&self, progress: Progress) -> DVec3 {
        self.tilt
            .as_ref()
            .map_or(DVec3::ZERO, |tl| tl.sample(progress))
    }

    pub fn layer_y(&self, index: usize, count: usize, progress: Progress) -> f64 {
        self.spread
            .as_ref()
            .map_or(0.0, |s| s.y(index, count, progress))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreo/motion.rs"]
mod tests;
