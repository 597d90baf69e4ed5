//! Hero background ribbons.
//!
//! Unlike the 3D generators, ribbons are rebuilt every tick from a time phase. The point count
//! and path structure never change, only the sampled positions.

use std::f64::consts::PI;

use crate::{
    foundation::core::{BezPath, Point},
    foundation::error::ReelResult,
    geometry::{check_count, check_finite, check_positive},
};

/// Phase advance per display frame.
pub const RIBBON_TIME_PER_FRAME: f64 = 0.75;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RibbonParams {
    pub count: u32,
    pub segments: u32,
    pub base_radius: f64,
    pub radius_step: f64,
    pub base_height: f64,
    pub height_step: f64,
    /// Amplitude of the slow whole-ribbon vertical drift.
    pub drift: f64,
}

impl Default for RibbonParams {
    fn default() -> Self {
        Self {
            count: 3,
            segments: 100,
            base_radius: 200.0,
            radius_step: 50.0,
            base_height: 100.0,
            height_step: 30.0,
            drift: 50.0,
        }
    }
}

impl RibbonParams {
    pub fn validate(&self) -> ReelResult<()> {
        check_count("ribbon count", self.count, 1)?;
        check_count("ribbon segments", self.segments, 3)?;
        check_positive("ribbon base radius", self.base_radius)?;
        check_finite("ribbon radius step", self.radius_step)?;
        check_finite("ribbon base height", self.base_height)?;
        check_finite("ribbon height step", self.height_step)?;
        check_finite("ribbon drift", self.drift)
    }

    /// Sample ribbon `i` at `time` around `center`: `segments + 1` points on a double loop.
    pub fn points(&self, i: u32, center: Point, time: f64) -> Vec<Point> {
        let fi = f64::from(i);
        let radius = self.base_radius + fi * self.radius_step;
        let height = self.base_height + fi * self.height_step;
        let drift = (time * 0.0075 + fi).sin() * self.drift;
        (0..=self.segments)
            .map(|j| {
                let angle = f64::from(j) / f64::from(self.segments) * PI * 4.0
                    + time * 0.0075
                    + fi * 0.5;
                Point::new(
                    center.x + angle.cos() * radius,
                    center.y + (angle * 2.0 + time * 0.015).sin() * height + drift,
                )
            })
            .collect()
    }

    /// All ribbons at `time`, smoothed.
    pub fn paths(&self, center: Point, time: f64) -> Vec<BezPath> {
        (0..self.count)
            .map(|i| smooth_path(&self.points(i, center, time)))
            .collect()
    }
}

/// Quadratic smoothing through sample midpoints: each sample becomes a control point and the
/// curve passes through the midpoint of the next pair, so there are no visible facets.
pub fn smooth_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some(&first) = points.first() else {
        return path;
    };
    path.move_to(first);
    if points.len() == 2 {
        path.line_to(points[1]);
    }
    if points.len() < 3 {
        return path;
    }
    for j in 1..points.len() - 2 {
        let ctrl = points[j + 1];
        let end = ctrl.midpoint(points[j + 2]);
        path.quad_to(ctrl, end);
    }
    path
}

/// Stroke opacity of ribbon `i`; later ribbons are fainter.
pub fn ribbon_alpha(i: u32) -> f64 {
    (0.4 - f64::from(i) * 0.12).max(0.0)
}

/// One stop of a ribbon's stroke gradient.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    pub offset: f64,
    /// Grey level, may exceed 255 before the renderer clamps it.
    pub grey: f64,
    pub alpha: f64,
}

/// Five-stop light-to-dark gradient for ribbon `i`, shimmering with `time`.
pub fn gradient_stops(i: u32, time: f64) -> [GradientStop; 5] {
    const STOPS: [(f64, f64, f64, f64); 5] = [
        (0.0, 255.0, 0.4, 0.12),
        (0.2, 230.0, 0.35, 0.1),
        (0.5, 180.0, 0.3, 0.09),
        (0.8, 120.0, 0.25, 0.08),
        (1.0, 80.0, 0.2, 0.07),
    ];
    let shift = (time * 0.0075).sin() * 20.0;
    let fi = f64::from(i);
    STOPS.map(|(offset, grey, alpha, fade)| GradientStop {
        offset,
        grey: grey + shift,
        alpha: (alpha - fi * fade).max(0.0),
    })
}

/// Gradient angle in degrees tracking the pointer across the viewport width.
pub fn gradient_angle(pointer_x: f64, width: f64) -> f64 {
    if width <= 0.0 || !pointer_x.is_finite() {
        return 0.0;
    }
    pointer_x / width * 360.0
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/ribbon.rs"]
mod tests;
