//! The layered data-foundry diagram: source nodes at the bottom, a wireframe funnel in the middle
//! and stacked platform grids on top.

use std::f64::consts::{PI, TAU};

use crate::{
    foundation::core::{DVec3, Transform3},
    foundation::error::ReelResult,
    geometry::{GeometryDesc, NodeShape, Placed, check_count, check_finite, check_positive},
};

/// Two frustum shells meeting at a neck: wide base up to the neck, then the neck out to a wide top.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FunnelParams {
    pub meridians: u32,
    pub latitudes: u32,
    pub bottom_radius: f64,
    pub neck_radius: f64,
    pub top_radius: f64,
    pub lower_height: f64,
    pub upper_height: f64,
}

impl Default for FunnelParams {
    fn default() -> Self {
        Self {
            meridians: 16,
            latitudes: 10,
            bottom_radius: 5.0,
            neck_radius: 1.0,
            top_radius: 8.0,
            lower_height: 5.0,
            upper_height: 5.0,
        }
    }
}

impl FunnelParams {
    pub fn validate(&self) -> ReelResult<()> {
        check_count("funnel meridians", self.meridians, 3)?;
        check_count("funnel latitudes", self.latitudes, 2)?;
        check_positive("funnel bottom radius", self.bottom_radius)?;
        check_positive("funnel neck radius", self.neck_radius)?;
        check_positive("funnel top radius", self.top_radius)?;
        check_positive("funnel lower height", self.lower_height)?;
        check_positive("funnel upper height", self.upper_height)
    }

    fn theta(&self, i: u32) -> f64 {
        f64::from(i) / f64::from(self.meridians) * TAU
    }

    /// Point on the bottom rim at angle `theta`.
    pub fn rim_point(&self, theta: f64) -> DVec3 {
        ring_point(self.bottom_radius, -self.lower_height, theta)
    }

    /// Radius of the lower shell at height `h` in `[-lower_height, 0]`.
    pub fn lower_radius_at(&self, h: f64) -> f64 {
        let t = (h + self.lower_height) / self.lower_height;
        self.bottom_radius + (self.neck_radius - self.bottom_radius) * t
    }

    /// Radius of the upper shell at height `h` in `[0, upper_height]`.
    pub fn upper_radius_at(&self, h: f64) -> f64 {
        self.neck_radius + (self.top_radius - self.neck_radius) * (h / self.upper_height)
    }
}

fn ring_point(r: f64, y: f64, theta: f64) -> DVec3 {
    DVec3::new(r * theta.cos(), y, r * theta.sin())
}

/// Funnel wireframe: straight meridians per shell plus latitude rings per shell.
#[derive(Clone, Debug, PartialEq)]
pub struct FunnelWire {
    /// `2 * meridians` two-point lines, lower then upper for each angle.
    pub meridians: Vec<Vec<DVec3>>,
    /// `2 * latitudes` closed rings of `meridians + 1` points, lower then upper for each step.
    pub rings: Vec<Vec<DVec3>>,
}

impl FunnelWire {
    pub fn into_geometry(self) -> GeometryDesc {
        let mut strips = self.meridians;
        strips.extend(self.rings);
        GeometryDesc::Lines { strips }
    }
}

pub fn funnel(params: &FunnelParams) -> ReelResult<FunnelWire> {
    params.validate()?;

    let mut meridians = Vec::with_capacity(2 * params.meridians as usize);
    for i in 0..params.meridians {
        let theta = params.theta(i);
        let neck = ring_point(params.neck_radius, 0.0, theta);
        meridians.push(vec![params.rim_point(theta), neck]);
        meridians.push(vec![
            neck,
            ring_point(params.top_radius, params.upper_height, theta),
        ]);
    }

    let ring = |r: f64, y: f64| -> Vec<DVec3> {
        (0..=params.meridians)
            .map(|i| ring_point(r, y, params.theta(i)))
            .collect()
    };

    let steps = f64::from(params.latitudes - 1);
    let mut rings = Vec::with_capacity(2 * params.latitudes as usize);
    for j in 0..params.latitudes {
        let s = f64::from(j) / steps;
        let h_lower = -params.lower_height + s * params.lower_height;
        rings.push(ring(params.lower_radius_at(h_lower), h_lower));
        let h_upper = s * params.upper_height;
        rings.push(ring(params.upper_radius_at(h_upper), h_upper));
    }

    Ok(FunnelWire { meridians, rings })
}

/// Wireframe boxes standing for the operational source systems.
pub const BASE_NODES: [DVec3; 8] = [
    DVec3::new(0.0, 0.0, 0.0),
    DVec3::new(3.0, 0.0, 1.0),
    DVec3::new(-2.0, 0.0, 3.0),
    DVec3::new(4.0, 0.0, -2.0),
    DVec3::new(-4.0, 0.0, -1.0),
    DVec3::new(2.0, 0.0, -4.0),
    DVec3::new(-3.0, 0.0, 4.0),
    DVec3::new(1.0, 0.0, -3.0),
];

pub fn base_nodes(size: f64) -> ReelResult<Vec<Placed>> {
    check_positive("base node size", size)?;
    Ok(BASE_NODES
        .iter()
        .map(|&p| {
            Placed::at(
                GeometryDesc::Node {
                    shape: NodeShape::Box,
                    size,
                },
                p,
            )
        })
        .collect())
}

/// Dashed links from evenly spaced points on the funnel's bottom rim down to each base node at
/// `bottom_y`.
pub fn dripping_links(params: &FunnelParams, bottom_y: f64) -> ReelResult<GeometryDesc> {
    params.validate()?;
    check_finite("drip bottom", bottom_y)?;
    let n = BASE_NODES.len() as f64;
    let strips = BASE_NODES
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let theta = i as f64 / n * TAU;
            vec![params.rim_point(theta), DVec3::new(node.x, bottom_y, node.z)]
        })
        .collect();
    Ok(GeometryDesc::Lines { strips })
}

/// Concentric grids stacked upward, each a little wider than the one below.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridStack {
    pub count: u32,
    pub spacing: f64,
    pub base_size: f64,
    pub size_step: f64,
    pub divisions: u32,
}

impl Default for GridStack {
    fn default() -> Self {
        Self {
            count: 4,
            spacing: 2.0,
            base_size: 10.0,
            size_step: 2.0,
            divisions: 20,
        }
    }
}

impl GridStack {
    pub fn validate(&self) -> ReelResult<()> {
        check_count("grid count", self.count, 1)?;
        check_count("grid divisions", self.divisions, 1)?;
        check_positive("grid spacing", self.spacing)?;
        check_positive("grid base size", self.base_size)?;
        check_finite("grid size step", self.size_step)
    }

    pub fn build(&self) -> ReelResult<Vec<Placed>> {
        self.validate()?;
        Ok((0..self.count)
            .map(|i| {
                let i = f64::from(i);
                Placed::at(
                    GeometryDesc::Grid {
                        size: self.base_size + i * self.size_step,
                        divisions: self.divisions,
                    },
                    DVec3::new(0.0, i * self.spacing, 0.0),
                )
            })
            .collect())
    }
}

/// Marker arrow between the source layer and the funnel: a shaft plus an inverted cone head.
pub fn arrow(length: f64, scale: f64) -> ReelResult<Vec<Placed>> {
    check_positive("arrow length", length)?;
    check_positive("arrow scale", scale)?;
    let base = DVec3::new(0.0, -1.0, 0.0);
    let shaft = Placed {
        desc: GeometryDesc::segment(DVec3::ZERO, DVec3::new(0.0, length, 0.0)),
        transform: Transform3::at(base).with_uniform_scale(scale),
    };
    let mut head =
        Transform3::at(base + DVec3::new(0.0, length * scale, 0.0)).with_uniform_scale(scale);
    head.rotation.x = PI;
    let head = Placed {
        desc: GeometryDesc::Node {
            shape: NodeShape::Cone,
            size: 1.0,
        },
        transform: head,
    };
    Ok(vec![shaft, head])
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/funnel.rs"]
mod tests;
