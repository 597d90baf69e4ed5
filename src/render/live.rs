//! Built geometry together with the rule that animates it each frame.
//!
//! A [`LiveGroup`] is one section's illustration: a set of placed objects sharing an anchor, a
//! slow focus-scaled spin and an optional wobble. Every object carries an [`AnimRole`] that maps
//! `(focus, clocks)` to a transform and an [`Animatable`].

use std::f64::consts::FRAC_PI_4;

use crate::{
    animation::shimmer::{Shimmer, Wave},
    foundation::core::{DVec3, Transform3},
    geometry::{
        Placed,
        field::{Bar, Gauge},
        orbit::{ConnectionArc, OrbitNode, orbit_blend, orbit_emissive, packet_blend, packet_scale},
    },
    render::params::Animatable,
};

/// Rate the per-frame spin constants are expressed at.
pub const REFERENCE_FPS: f64 = 60.0;

/// Whether a group is drawn while its section is not the active one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Every layer stays on screen; focus alone modulates intensity.
    #[default]
    Always,
    /// Only the active section's illustration is shown.
    ActiveOnly,
}

/// Grows `base + focus * gain` from a floor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ramp {
    pub base: f64,
    pub gain: f64,
}

impl Ramp {
    pub const fn new(base: f64, gain: f64) -> Self {
        Self { base, gain }
    }

    pub fn at(self, focus: f64) -> f64 {
        self.base + focus * self.gain
    }
}

/// Time inputs shared by every object in a group.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoleClocks {
    /// Wall-clock seconds since mount.
    pub elapsed: f64,
    /// Focus-weighted orbit time.
    pub orbit: f64,
    /// Focus-weighted packet time.
    pub packet: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AnimRole {
    /// Fixed materials; still follows its group's transform and visibility every tick.
    Static,
    /// Opacity ramps with focus, emissive is `focus * glow`.
    FocusFade { opacity: Ramp, glow: f64 },
    /// Line families: opacity `focus * (base + wave * amp)` and a sideways sway.
    Drift {
        index: usize,
        base: f64,
        wave: Wave,
        amp: f64,
        sway: f64,
    },
    /// Node scale pulse and glow.
    Pulse {
        shimmer: Shimmer,
        index: usize,
        opacity: f64,
    },
    /// Point clouds: opacity `focus * gain`, optional size ramp.
    Cloud { gain: f64, size: Option<Ramp> },
    Orbit { node: OrbitNode, index: usize },
    /// Static connection curve that brightens with focus.
    ArcLine,
    Packet { arc: ConnectionArc, packet: usize },
    /// Filled gauge sector, rotated to `sweep * focus`.
    Gauge { gauge: Gauge, index: usize },
    Bar { bar: Bar, index: usize },
    /// Hub monitor screen.
    Screen,
    /// Hub monitor casing sways gently.
    Frame,
}

impl AnimRole {
    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static)
    }

    /// Transform (relative to the group) and material values at one instant.
    pub fn apply(&self, rest: &Transform3, focus: f64, clocks: &RoleClocks) -> (Transform3, Animatable) {
        let t = clocks.elapsed;
        let mut xf = *rest;
        let anim = match self {
            Self::Static => Animatable::default(),
            Self::FocusFade { opacity, glow } => Animatable::lit(opacity.at(focus), focus * glow),
            Self::Drift {
                index,
                base,
                wave,
                amp,
                sway,
            } => {
                let i = *index as f64;
                xf.position.x += (t * 0.5 + i).sin() * sway * focus;
                Animatable::faded(focus * (base + wave.at(*index, t) * amp))
            }
            Self::Pulse {
                shimmer,
                index,
                opacity,
            } => {
                xf.scale *= shimmer.scale(*index, t, focus);
                Animatable::lit(*opacity, shimmer.glow(*index, t, focus))
            }
            Self::Cloud { gain, size } => Animatable {
                opacity: focus * gain,
                point_size: size.map(|s| s.at(focus)),
                ..Animatable::default()
            },
            Self::Orbit { node, index } => {
                xf.position = node.position(clocks.orbit);
                Animatable::lit(0.95, orbit_emissive(*index, t, focus))
            }
            Self::ArcLine => Animatable::lit(0.85, 0.9 + focus * 1.2),
            Self::Packet { arc, packet } => {
                xf.position = arc.packet_position(*packet, clocks.packet);
                xf.scale = DVec3::splat(packet_scale(*packet, t));
                Animatable::lit(0.95, 1.4)
            }
            Self::Gauge { gauge, index } => {
                xf.rotation.z += gauge.sweep() * focus;
                xf.scale *= Shimmer::GAUGE.scale(*index, t, focus);
                Animatable::lit(0.7 + focus * 0.3, focus * 0.3)
            }
            Self::Bar { bar, index } => {
                let i = *index as f64;
                let depth = bar.height + (t * 2.0 + i * 0.1).sin() * 0.1 * focus;
                xf.scale = DVec3::new(0.3, 0.3, depth);
                Animatable::lit(
                    0.3 + focus * 0.5,
                    focus * (bar.intensity * 0.3 + (t + i).sin() * 0.1),
                )
            }
            Self::Screen => Animatable::lit(0.96, 1.2 + (t * 2.2).sin() * 0.6 * focus),
            Self::Frame => {
                xf.rotation.y += (t * 0.2).sin() * 0.06 * focus;
                xf.rotation.x += (t * 0.15).cos() * 0.03 * focus;
                Animatable::default()
            }
        };
        (xf, anim)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LiveObject {
    pub placed: Placed,
    pub role: AnimRole,
}

impl LiveObject {
    pub fn new(placed: Placed, role: AnimRole) -> Self {
        Self { placed, role }
    }

    pub fn fixed(placed: Placed) -> Self {
        Self::new(placed, AnimRole::Static)
    }
}

/// Focus-scaled tilt: `x = sin(t * x_freq) * x_amp`, `y = cos(t * y_freq) * y_amp`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Wobble {
    pub x_freq: f64,
    pub x_amp: f64,
    pub y_freq: f64,
    pub y_amp: f64,
}

impl Wobble {
    pub fn rotation(&self, elapsed: f64, focus: f64) -> DVec3 {
        DVec3::new(
            (elapsed * self.x_freq).sin() * self.x_amp * focus,
            (elapsed * self.y_freq).cos() * self.y_amp * focus,
            0.0,
        )
    }
}

/// One illustration bound to a section, or scene-wide decoration when `section` is `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct LiveGroup {
    pub section: Option<usize>,
    pub anchor: Transform3,
    /// Radians per reference frame at full focus.
    pub spin: DVec3,
    pub wobble: Option<Wobble>,
    pub objects: Vec<LiveObject>,
}

impl LiveGroup {
    pub fn new(section: usize) -> Self {
        Self {
            section: Some(section),
            ..Self::shared()
        }
    }

    /// Group that belongs to no section: never focused, never hidden, not spread with the layers.
    pub fn shared() -> Self {
        Self {
            section: None,
            anchor: Transform3::default(),
            spin: DVec3::ZERO,
            wobble: None,
            objects: Vec::new(),
        }
    }

    /// Rotate the whole illustration 45 degrees about the view axis.
    pub fn tilted(mut self, tilt: bool) -> Self {
        if tilt {
            self.anchor.rotation.z += FRAC_PI_4;
        }
        self
    }

    pub fn push(&mut self, placed: Placed, role: AnimRole) {
        self.objects.push(LiveObject::new(placed, role));
    }

    pub fn extend_static(&mut self, placed: impl IntoIterator<Item = Placed>) {
        self.objects
            .extend(placed.into_iter().map(LiveObject::fixed));
    }
}

/// Per-group time that accumulates with focus, so changing focus never makes motion jump.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroupClock {
    pub orbit: f64,
    pub packet: f64,
    pub spin: DVec3,
}

impl GroupClock {
    pub fn advance(&mut self, group: &LiveGroup, focus: f64, delta: f64) {
        self.orbit += delta * orbit_blend(focus);
        self.packet += delta * packet_blend(focus);
        self.spin += group.spin * (REFERENCE_FPS * delta * focus);
    }

    pub fn role_clocks(&self, elapsed: f64) -> RoleClocks {
        RoleClocks {
            elapsed,
            orbit: self.orbit,
            packet: self.packet,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/live.rs"]
mod tests;
