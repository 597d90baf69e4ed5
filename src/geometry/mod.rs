//! Procedural geometry.
//!
//! Every generator is a pure function of its params. Anything that looks random is drawn from an
//! [`Rng64`](crate::foundation::math::Rng64) seeded from those params, so topology is frozen at
//! construction and only material parameters animate afterwards.

pub mod field;
pub mod funnel;
pub mod graph;
pub mod orbit;
pub mod ribbon;

use crate::{
    foundation::core::{BezPath, DVec3, Transform3},
    foundation::error::{ReelError, ReelResult},
};

/// Primitive node shapes; the renderer owns tessellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeShape {
    Sphere,
    Icosahedron,
    Box,
    Cone,
}

/// What the renderer is asked to build. Built once per scene instance.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeometryDesc {
    /// One or more line strips. Closed rings repeat their first point.
    Lines { strips: Vec<Vec<DVec3>> },
    Points { points: Vec<DVec3>, size: f64 },
    /// A single primitive centered on the origin; placement comes from its transform.
    Node { shape: NodeShape, size: f64 },
    /// Square grid in the XZ plane.
    Grid { size: f64, divisions: u32 },
    /// Flat annulus sector in the XY plane starting at angle `-π/2`, sweeping counter-clockwise.
    Arc {
        radius: f64,
        thickness: f64,
        sweep: f64,
    },
    /// Screen-space path for 2D overlays.
    Path2D { path: BezPath },
}

/// Shape-independent summary used to compare generator output.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Topology {
    pub kind: &'static str,
    pub vertex_count: usize,
    /// Vertex count per strip, or path element count for 2D paths.
    pub runs: Vec<usize>,
}

impl GeometryDesc {
    pub fn segment(a: DVec3, b: DVec3) -> Self {
        Self::Lines {
            strips: vec![vec![a, b]],
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Lines { .. } => "lines",
            Self::Points { .. } => "points",
            Self::Node { .. } => "node",
            Self::Grid { .. } => "grid",
            Self::Arc { .. } => "arc",
            Self::Path2D { .. } => "path2d",
        }
    }

    pub fn topology(&self) -> Topology {
        let (vertex_count, runs) = match self {
            Self::Lines { strips } => (
                strips.iter().map(Vec::len).sum(),
                strips.iter().map(Vec::len).collect(),
            ),
            Self::Points { points, .. } => (points.len(), vec![points.len()]),
            Self::Node { .. } | Self::Arc { .. } => (1, Vec::new()),
            Self::Grid { divisions, .. } => {
                let side = *divisions as usize + 1;
                (side * side, vec![side; 2])
            }
            Self::Path2D { path } => {
                let n = path.elements().len();
                (n, vec![n])
            }
        };
        Topology {
            kind: self.kind(),
            vertex_count,
            runs,
        }
    }
}

/// Geometry plus where it sits inside its illustration.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Placed {
    pub desc: GeometryDesc,
    pub transform: Transform3,
}

impl Placed {
    pub fn at(desc: GeometryDesc, position: DVec3) -> Self {
        Self {
            desc,
            transform: Transform3::at(position),
        }
    }

    pub fn origin(desc: GeometryDesc) -> Self {
        Self::at(desc, DVec3::ZERO)
    }
}

/// Fixed node positions and an edge list of index pairs.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Graph {
    pub nodes: Vec<DVec3>,
    pub edges: Vec<[usize; 2]>,
}

impl Graph {
    pub fn validate(&self) -> ReelResult<()> {
        let n = self.nodes.len();
        if let Some(e) = self.edges.iter().find(|e| e[0] >= n || e[1] >= n) {
            return Err(ReelError::config(format!(
                "edge [{}, {}] references a node outside 0..{n}",
                e[0], e[1]
            )));
        }
        Ok(())
    }

    /// All edges as two-point strips. Dangling edges are skipped.
    pub fn edge_lines(&self) -> GeometryDesc {
        GeometryDesc::Lines {
            strips: self
                .edges
                .iter()
                .filter_map(|&[a, b]| Some(vec![*self.nodes.get(a)?, *self.nodes.get(b)?]))
                .collect(),
        }
    }
}

pub(crate) fn check_positive(what: &str, v: f64) -> ReelResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ReelError::config(format!("{what} must be positive and finite, got {v}")))
    }
}

pub(crate) fn check_finite(what: &str, v: f64) -> ReelResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ReelError::config(format!("{what} must be finite")))
    }
}

pub(crate) fn check_count(what: &str, v: u32, min: u32) -> ReelResult<()> {
    if v >= min {
        Ok(())
    } else {
        Err(ReelError::config(format!("{what} must be at least {min}, got {v}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mod.rs"]
mod tests;
