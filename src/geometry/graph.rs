//! Node-and-edge layouts: decision tree, layered neural net, monitoring hub, and the forecasting
//! helix. Topology is computed once; only per-node intensity animates.

use std::f64::consts::TAU;

use crate::{
    animation::shimmer::Shimmer,
    foundation::core::DVec3,
    foundation::error::{ReelError, ReelResult},
    geometry::{Graph, check_count, check_finite, check_positive},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNodeKind {
    Root,
    Decision,
    Outcome,
}

impl TreeNodeKind {
    pub fn radius(self) -> f64 {
        match self {
            Self::Root => 0.25,
            Self::Decision => 0.2,
            Self::Outcome => 0.15,
        }
    }

    pub fn shimmer(self) -> Shimmer {
        match self {
            Self::Root => Shimmer::TREE_ROOT,
            Self::Decision => Shimmer::TREE_DECISION,
            Self::Outcome => Shimmer::TREE_OUTCOME,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DecisionTree {
    pub graph: Graph,
    pub kinds: Vec<TreeNodeKind>,
}

pub const MAX_TREE_DEPTH: u32 = 16;

/// Binary tree of the given `depth`, root on top, leaves spread `leaf_spacing` apart.
///
/// Depth 2 with spacing 2 and level height 2 yields the classic 1-2-4 layout with the root at
/// `(0, 2)`, decisions at `(±2, 0)` and outcomes at `x = -3, -1, 1, 3`.
pub fn decision_tree(depth: u32, leaf_spacing: f64, level_height: f64) -> ReelResult<DecisionTree> {
    check_count("tree depth", depth, 1)?;
    if depth > MAX_TREE_DEPTH {
        return Err(ReelError::config(format!(
            "tree depth must be at most {MAX_TREE_DEPTH}, got {depth}"
        )));
    }
    check_positive("tree leaf spacing", leaf_spacing)?;
    check_positive("tree level height", level_height)?;

    let mut graph = Graph::default();
    let mut kinds = Vec::new();
    let top = f64::from(depth) / 2.0 * level_height;
    let leaves = 1u32 << depth;

    for level in 0..=depth {
        let count = 1u32 << level;
        // Nodes at this level sit centered over the leaves they cover.
        let span = f64::from(leaves / count);
        let kind = match level {
            0 => TreeNodeKind::Root,
            l if l == depth => TreeNodeKind::Outcome,
            _ => TreeNodeKind::Decision,
        };
        for k in 0..count {
            let center_leaf = f64::from(k) * span + (span - 1.0) / 2.0;
            let x = (center_leaf - f64::from(leaves - 1) / 2.0) * leaf_spacing;
            let y = top - f64::from(level) * level_height;
            graph.nodes.push(DVec3::new(x, y, 0.0));
            kinds.push(kind);
        }
    }
    for parent in 0..(graph.nodes.len() - leaves as usize) {
        graph.edges.push([parent, 2 * parent + 1]);
        graph.edges.push([parent, 2 * parent + 2]);
    }
    graph.validate()?;
    Ok(DecisionTree { graph, kinds })
}

/// One column of neurons.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NetLayer {
    pub nodes: u32,
    pub x: f64,
}

pub const STANDARD_NET: [NetLayer; 4] = [
    NetLayer { nodes: 4, x: -3.0 },
    NetLayer { nodes: 6, x: -1.0 },
    NetLayer { nodes: 6, x: 1.0 },
    NetLayer { nodes: 3, x: 3.0 },
];

/// Columns of neurons centered on `y = 0`, each fully connected to the next.
pub fn neural_net(layers: &[NetLayer], spacing: f64) -> ReelResult<Graph> {
    check_positive("neuron spacing", spacing)?;
    if layers.is_empty() {
        return Err(ReelError::config("a neural net needs at least one layer"));
    }
    let mut graph = Graph::default();
    let mut prev: Option<std::ops::Range<usize>> = None;
    for layer in layers {
        check_count("neurons per layer", layer.nodes, 1)?;
        check_finite("layer x", layer.x)?;
        let start = graph.nodes.len();
        let half = f64::from(layer.nodes - 1) / 2.0;
        for i in 0..layer.nodes {
            graph
                .nodes
                .push(DVec3::new(layer.x, (f64::from(i) - half) * spacing, 0.0));
        }
        let current = start..graph.nodes.len();
        if let Some(p) = prev {
            for a in p {
                for b in current.clone() {
                    graph.edges.push([a, b]);
                }
            }
        }
        prev = Some(current);
    }
    Ok(graph)
}

/// Hub-and-spoke layout: the center node links to every satellite, plus three cross links.
pub const HUB_NODES: [DVec3; 7] = [
    DVec3::new(0.0, 0.0, 0.0),
    DVec3::new(3.0, 2.0, 0.0),
    DVec3::new(3.0, -2.0, 0.0),
    DVec3::new(-3.0, 2.0, 0.0),
    DVec3::new(-3.0, -2.0, 0.0),
    DVec3::new(0.0, 3.0, 1.0),
    DVec3::new(0.0, -3.0, 1.0),
];

pub fn monitoring_hub() -> Graph {
    let mut edges: Vec<[usize; 2]> = (1..HUB_NODES.len()).map(|i| [0, i]).collect();
    edges.extend([[1, 2], [3, 4], [5, 6]]);
    Graph {
        nodes: HUB_NODES.to_vec(),
        edges,
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HelixParams {
    pub points: u32,
    pub radius: f64,
    pub height: f64,
    pub turns: f64,
    /// A marker sphere sits on every `marker_every`-th point.
    pub marker_every: u32,
}

impl Default for HelixParams {
    fn default() -> Self {
        Self {
            points: 60,
            radius: 2.0,
            height: 4.0,
            turns: 2.0,
            marker_every: 6,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Helix {
    pub curve: Vec<DVec3>,
    pub markers: Vec<DVec3>,
}

pub fn helix(params: &HelixParams) -> ReelResult<Helix> {
    check_count("helix points", params.points, 2)?;
    check_count("helix marker interval", params.marker_every, 1)?;
    check_positive("helix radius", params.radius)?;
    check_positive("helix height", params.height)?;
    check_positive("helix turns", params.turns)?;

    let n = f64::from(params.points);
    let curve: Vec<DVec3> = (0..params.points)
        .map(|i| {
            let s = f64::from(i) / n;
            let t = s * TAU * params.turns;
            DVec3::new(
                t.cos() * params.radius,
                s * params.height - params.height / 2.0,
                t.sin() * params.radius,
            )
        })
        .collect();
    let markers = curve
        .iter()
        .step_by(params.marker_every as usize)
        .copied()
        .collect();
    Ok(Helix { curve, markers })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/graph.rs"]
mod tests;
