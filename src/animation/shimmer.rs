//! Wall-clock "alive" oscillation layered on top of focus.
//!
//! Shimmer never changes what is visible, only how strongly: every amplitude is multiplied by
//! focus, so an unfocused section sits perfectly still.

/// `sin(elapsed * freq + index * index_phase)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Wave {
    pub freq: f64,
    pub index_phase: f64,
}

impl Wave {
    pub const fn new(freq: f64, index_phase: f64) -> Self {
        Self { freq, index_phase }
    }

    pub fn at(self, index: usize, elapsed: f64) -> f64 {
        (elapsed * self.freq + index as f64 * self.index_phase).sin()
    }
}

/// Per-node scale pulse and emissive glow.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shimmer {
    pub scale_wave: Wave,
    pub scale_amp: f64,
    pub glow_wave: Wave,
    pub glow_base: f64,
    pub glow_amp: f64,
}

impl Shimmer {
    /// Monitoring hub nodes.
    pub const HUB_NODE: Self = Self {
        scale_wave: Wave::new(2.0, 1.0),
        scale_amp: 0.1,
        glow_wave: Wave::new(3.0, 1.0),
        glow_base: 0.3,
        glow_amp: 0.2,
    };

    /// Marker spheres along the forecasting helix.
    pub const HELIX_MARKER: Self = Self {
        scale_wave: Wave::new(2.0, 0.5),
        scale_amp: 0.2,
        glow_wave: Wave::new(3.0, 1.0),
        glow_base: 0.3,
        glow_amp: 0.2,
    };

    pub const NEURON: Self = Self {
        scale_wave: Wave::new(3.0, 1.0),
        scale_amp: 0.1,
        glow_wave: Wave::new(0.0, 0.0),
        glow_base: 0.4,
        glow_amp: 0.0,
    };

    pub const TREE_ROOT: Self = Self {
        scale_wave: Wave::new(2.0, 0.0),
        scale_amp: 0.1,
        glow_wave: Wave::new(2.0, 0.0),
        glow_base: 0.6,
        glow_amp: 0.2,
    };

    pub const TREE_DECISION: Self = Self {
        scale_wave: Wave::new(1.5, 1.0),
        scale_amp: 0.08,
        glow_wave: Wave::new(1.5, 1.0),
        glow_base: 0.4,
        glow_amp: 0.15,
    };

    pub const TREE_OUTCOME: Self = Self {
        scale_wave: Wave::new(1.0, 0.5),
        scale_amp: 0.06,
        glow_wave: Wave::new(1.0, 0.5),
        glow_base: 0.3,
        glow_amp: 0.1,
    };

    /// Ring gauges pulse gently and glow evenly.
    pub const GAUGE: Self = Self {
        scale_wave: Wave::new(2.0, 1.0),
        scale_amp: 0.05,
        glow_wave: Wave::new(0.0, 0.0),
        glow_base: 0.3,
        glow_amp: 0.0,
    };

    pub fn scale(&self, index: usize, elapsed: f64, focus: f64) -> f64 {
        1.0 + self.scale_wave.at(index, elapsed) * self.scale_amp * focus
    }

    pub fn glow(&self, index: usize, elapsed: f64, focus: f64) -> f64 {
        focus * (self.glow_base + self.glow_wave.at(index, elapsed) * self.glow_amp)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/shimmer.rs"]
mod tests;
