//! Orbiting nodes and the curved connections they send data along.

use std::f64::consts::TAU;

use crate::{
    foundation::core::DVec3,
    foundation::error::{ReelError, ReelResult},
    foundation::math::Rng64,
    geometry::{GeometryDesc, check_count, check_finite, check_positive},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OrbitParams {
    pub count: u32,
    pub radius: f64,
    pub seed: u64,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            count: 10,
            radius: 6.2,
            seed: 0x5EED_0B17,
        }
    }
}

impl OrbitParams {
    pub fn validate(&self) -> ReelResult<()> {
        check_count("orbit node count", self.count, 1)?;
        check_positive("orbit radius", self.radius)
    }
}

/// One node's frozen jitter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct OrbitNode {
    pub base_angle: f64,
    /// Radians per unit of orbit clock.
    pub speed: f64,
    pub height: f64,
    pub radius: f64,
}

impl OrbitNode {
    /// Position after the orbit clock has advanced to `clock`.
    pub fn position(&self, clock: f64) -> DVec3 {
        let a = self.base_angle + clock * self.speed;
        DVec3::new(
            a.cos() * self.radius,
            (a * 0.9).sin() * 0.5 + self.height,
            a.sin() * self.radius,
        )
    }
}

/// Orbit clock rate: nodes keep drifting when out of focus and speed up toward the center.
pub fn orbit_blend(focus: f64) -> f64 {
    0.6 + focus
}

/// Node glow: a steady base with a shimmer that grows with focus.
pub fn orbit_emissive(index: usize, elapsed: f64, focus: f64) -> f64 {
    0.6 + (elapsed * 3.0 + index as f64).sin() * 0.4 * (0.5 + focus)
}

pub fn orbit_layout(params: &OrbitParams) -> ReelResult<Vec<OrbitNode>> {
    params.validate()?;
    let mut rng = Rng64::new(params.seed);
    let n = f64::from(params.count);
    Ok((0..params.count)
        .map(|i| OrbitNode {
            base_angle: f64::from(i) / n * TAU,
            speed: rng.range(0.25, 0.5),
            height: rng.range(-0.5, 1.1),
            radius: params.radius * rng.range(0.85, 1.15),
        })
        .collect())
}

/// Centripetal Catmull-Rom curve through `points`, open-ended, endpoints extrapolated.
#[derive(Clone, Debug, PartialEq)]
pub struct CatmullRom {
    points: Vec<DVec3>,
}

impl CatmullRom {
    pub fn new(points: Vec<DVec3>) -> ReelResult<Self> {
        if points.len() < 2 {
            return Err(ReelError::config("a curve needs at least two points"));
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(ReelError::config("curve points must be finite"));
        }
        Ok(Self { points })
    }

    /// Point at parameter `t` in `[0, 1]` (not arc-length).
    pub fn point(&self, t: f64) -> DVec3 {
        let pts = &self.points;
        let l = pts.len();
        let p = (l - 1) as f64 * t.clamp(0.0, 1.0);
        let mut seg = p.floor() as usize;
        let mut w = p - seg as f64;
        if seg >= l - 1 {
            seg = l - 2;
            w = 1.0;
        }

        let p1 = pts[seg];
        let p2 = pts[seg + 1];
        let p0 = if seg > 0 {
            pts[seg - 1]
        } else {
            2.0 * pts[0] - pts[1]
        };
        let p3 = if seg + 2 < l {
            pts[seg + 2]
        } else {
            2.0 * pts[l - 1] - pts[l - 2]
        };

        let mut dt0 = p0.distance_squared(p1).powf(0.25);
        let mut dt1 = p1.distance_squared(p2).powf(0.25);
        let mut dt2 = p2.distance_squared(p3).powf(0.25);
        if dt1 < 1e-4 {
            dt1 = 1.0;
        }
        if dt0 < 1e-4 {
            dt0 = dt1;
        }
        if dt2 < 1e-4 {
            dt2 = dt1;
        }

        let t1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
        let t2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;

        let c2 = -3.0 * p1 + 3.0 * p2 - 2.0 * t1 - t2;
        let c3 = 2.0 * p1 - 2.0 * p2 + t1 + t2;
        p1 + t1 * w + c2 * (w * w) + c3 * (w * w * w)
    }

    /// `divisions + 1` evenly spaced parameter samples.
    pub fn sample(&self, divisions: u32) -> Vec<DVec3> {
        let d = f64::from(divisions.max(1));
        (0..=divisions.max(1))
            .map(|i| self.point(f64::from(i) / d))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArcParams {
    /// Lift of the middle control point above the chord midpoint.
    pub lift: f64,
    pub divisions: u32,
    pub packets: u32,
}

impl Default for ArcParams {
    fn default() -> Self {
        Self {
            lift: 1.2,
            divisions: 64,
            packets: 3,
        }
    }
}

impl ArcParams {
    pub fn validate(&self) -> ReelResult<()> {
        check_finite("arc lift", self.lift)?;
        check_count("arc divisions", self.divisions, 1)
    }
}

/// A raised curve between two points with data packets travelling along it.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionArc {
    curve: CatmullRom,
    seeds: Vec<f64>,
    divisions: u32,
}

impl ConnectionArc {
    pub fn new(from: DVec3, to: DVec3, params: &ArcParams, rng: &mut Rng64) -> ReelResult<Self> {
        params.validate()?;
        let mid = (from + to) * 0.5 + DVec3::new(0.0, params.lift, 0.0);
        let curve = CatmullRom::new(vec![from, mid, to])?;
        let n = f64::from(params.packets.max(1));
        let seeds = (0..params.packets)
            .map(|i| rng.next_f64_01() * f64::from(i + 1) / n)
            .collect();
        Ok(Self {
            curve,
            seeds,
            divisions: params.divisions,
        })
    }

    pub fn geometry(&self) -> GeometryDesc {
        GeometryDesc::Lines {
            strips: vec![self.curve.sample(self.divisions)],
        }
    }

    pub fn packet_count(&self) -> usize {
        self.seeds.len()
    }

    /// Curve parameter of packet `i` once the packet clock reaches `clock`.
    pub fn packet_u(&self, i: usize, clock: f64) -> f64 {
        let seed = self.seeds.get(i).copied().unwrap_or(0.0);
        (seed + clock * (0.18 + i as f64 * 0.03)).rem_euclid(1.0)
    }

    pub fn packet_position(&self, i: usize, clock: f64) -> DVec3 {
        self.curve.point(self.packet_u(i, clock))
    }

    pub fn curve(&self) -> &CatmullRom {
        &self.curve
    }
}

/// Packet clock rate.
pub fn packet_blend(focus: f64) -> f64 {
    0.5 + focus
}

/// Pulsing packet size.
pub fn packet_scale(index: usize, elapsed: f64) -> f64 {
    0.12 + (elapsed * 4.0 + index as f64).sin() * 0.03
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/orbit.rs"]
mod tests;
