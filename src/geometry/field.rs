//! Line families, seeded point clouds, bar grids and ring gauges.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::{
    foundation::core::DVec3,
    foundation::error::{ReelError, ReelResult},
    foundation::math::Rng64,
    geometry::{check_count, check_finite, check_positive},
};

/// Stacked sine waves, each deeper and taller than the last.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WaveParams {
    pub count: u32,
    pub points: u32,
    pub width: f64,
    pub amplitude: f64,
    pub amplitude_step: f64,
    pub depth_step: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            count: 3,
            points: 50,
            width: 8.0,
            amplitude: 1.5,
            amplitude_step: 0.5,
            depth_step: 0.5,
        }
    }
}

pub fn sine_waves(p: &WaveParams) -> ReelResult<Vec<Vec<DVec3>>> {
    check_count("wave count", p.count, 1)?;
    check_count("wave points", p.points, 2)?;
    check_positive("wave width", p.width)?;
    check_finite("wave amplitude", p.amplitude)?;
    check_finite("wave amplitude step", p.amplitude_step)?;
    check_finite("wave depth step", p.depth_step)?;

    let n = f64::from(p.points);
    Ok((0..p.count)
        .map(|w| {
            let w = f64::from(w);
            let amp = p.amplitude + w * p.amplitude_step;
            let z = w * p.depth_step - 1.0;
            (0..p.points)
                .map(|i| {
                    let s = f64::from(i) / n;
                    DVec3::new(
                        s * p.width - p.width / 2.0,
                        (s * PI * 4.0 + w * PI / 3.0).sin() * amp,
                        z,
                    )
                })
                .collect()
        })
        .collect())
}

/// Horizontal dashed flows with a single sine undulation and a gentle depth bow.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FlowParams {
    pub count: u32,
    pub segments: u32,
    pub half_width: f64,
    pub spacing: f64,
    pub amplitude: f64,
}

impl Default for FlowParams {
    fn default() -> Self {
        Self {
            count: 4,
            segments: 20,
            half_width: 4.0,
            spacing: 0.8,
            amplitude: 0.5,
        }
    }
}

pub fn flow_paths(p: &FlowParams) -> ReelResult<Vec<Vec<DVec3>>> {
    check_count("flow count", p.count, 1)?;
    check_count("flow segments", p.segments, 1)?;
    check_positive("flow half width", p.half_width)?;
    check_finite("flow spacing", p.spacing)?;
    check_finite("flow amplitude", p.amplitude)?;

    let segs = f64::from(p.segments);
    let rows = f64::from(p.count);
    Ok((0..p.count)
        .map(|i| {
            let fi = f64::from(i);
            let y = (fi - rows / 2.0) * p.spacing;
            (0..=p.segments)
                .map(|j| {
                    let s = f64::from(j) / segs;
                    DVec3::new(
                        -p.half_width + s * 2.0 * p.half_width,
                        y + (s * TAU + fi * FRAC_PI_2).sin() * p.amplitude,
                        (s * PI + fi).sin() * 0.3,
                    )
                })
                .collect()
        })
        .collect())
}

/// Uniform points in an axis-aligned box centered on the origin.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoxCloud {
    pub count: u32,
    pub extent: DVec3,
    pub seed: u64,
}

impl BoxCloud {
    pub fn points(&self) -> ReelResult<Vec<DVec3>> {
        check_count("cloud size", self.count, 1)?;
        if !self.extent.is_finite() || self.extent.min_element() <= 0.0 {
            return Err(ReelError::config("cloud extent must be positive and finite"));
        }
        let mut rng = Rng64::new(self.seed);
        Ok((0..self.count)
            .map(|_| {
                DVec3::new(
                    rng.centered(self.extent.x / 2.0),
                    rng.centered(self.extent.y / 2.0),
                    rng.centered(self.extent.z / 2.0),
                )
            })
            .collect())
    }
}

/// Points on a thick spherical shell, evenly spread in azimuth with random polar angle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShellCloud {
    pub count: u32,
    pub inner_radius: f64,
    pub thickness: f64,
    pub seed: u64,
}

impl ShellCloud {
    pub fn points(&self) -> ReelResult<Vec<DVec3>> {
        check_count("shell size", self.count, 1)?;
        check_positive("shell radius", self.inner_radius)?;
        check_finite("shell thickness", self.thickness)?;
        let mut rng = Rng64::new(self.seed);
        let n = f64::from(self.count);
        Ok((0..self.count)
            .map(|i| {
                let r = self.inner_radius + rng.next_f64_01() * self.thickness;
                let theta = f64::from(i) / n * TAU;
                let phi = rng.next_f64_01() * PI;
                DVec3::new(
                    r * phi.sin() * theta.cos(),
                    r * phi.sin() * theta.sin(),
                    r * phi.cos(),
                )
            })
            .collect())
    }
}

/// One analytics column: frozen height and brightness.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Bar {
    pub position: DVec3,
    pub height: f64,
    pub intensity: f64,
}

/// Square grid of bars, `2 * half + 1` per side.
pub fn bar_grid(half: u32, spacing: f64, seed: u64) -> ReelResult<Vec<Bar>> {
    check_positive("bar spacing", spacing)?;
    let mut rng = Rng64::new(seed);
    let half = i64::from(half);
    let mut bars = Vec::with_capacity(((2 * half + 1) * (2 * half + 1)) as usize);
    for x in -half..=half {
        for y in -half..=half {
            bars.push(Bar {
                position: DVec3::new(x as f64 * spacing, y as f64 * spacing, 0.0),
                height: rng.range(0.1, 0.6),
                intensity: rng.next_f64_01(),
            });
        }
    }
    Ok(bars)
}

/// A ring gauge showing `value` percent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Gauge {
    pub value: f64,
    pub radius: f64,
}

pub const STANDARD_GAUGES: [Gauge; 4] = [
    Gauge {
        value: 75.0,
        radius: 2.5,
    },
    Gauge {
        value: 85.0,
        radius: 2.0,
    },
    Gauge {
        value: 60.0,
        radius: 1.5,
    },
    Gauge {
        value: 92.0,
        radius: 1.0,
    },
];

/// Ring width shared by the track and the filled sector.
pub const GAUGE_THICKNESS: f64 = 0.1;

impl Gauge {
    pub fn validate(&self) -> ReelResult<()> {
        check_positive("gauge radius", self.radius)?;
        if !(0.0..=100.0).contains(&self.value) {
            return Err(ReelError::config(format!(
                "gauge value {} must be within 0..=100",
                self.value
            )));
        }
        Ok(())
    }

    pub fn fraction(&self) -> f64 {
        self.value / 100.0
    }

    /// Full filled sweep in radians.
    pub fn sweep(&self) -> f64 {
        self.fraction() * TAU
    }

    /// Glowing cap at the end of the filled sector.
    pub fn cap_position(&self) -> DVec3 {
        let a = self.sweep() - FRAC_PI_2;
        let r = self.radius + GAUGE_THICKNESS / 2.0;
        DVec3::new(r * a.cos(), r * a.sin(), 0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/field.rs"]
mod tests;
