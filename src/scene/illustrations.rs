//! Builds the live groups for each [`IllustrationKind`].
//!
//! Every illustration is a handful of [`LiveGroup`]s bound to the same section, one per motion
//! rig (a spinning gauge cluster and a drifting particle cloud cannot share a spin).

use std::f64::consts::{FRAC_PI_6, TAU};

use crate::{
    animation::shimmer::{Shimmer, Wave},
    choreo::sections::{IllustrationKind, SectionRecord},
    foundation::core::{DVec3, Transform3},
    foundation::error::ReelResult,
    foundation::math::Rng64,
    geometry::{
        GeometryDesc, NodeShape, Placed,
        field::{
            BoxCloud, FlowParams, GAUGE_THICKNESS, STANDARD_GAUGES, ShellCloud, WaveParams,
            bar_grid, flow_paths, sine_waves,
        },
        funnel::{FunnelParams, GridStack, arrow, base_nodes, dripping_links, funnel},
        graph::{HelixParams, STANDARD_NET, decision_tree, helix, monitoring_hub, neural_net},
        orbit::{ArcParams, ConnectionArc, OrbitParams, orbit_layout},
    },
    render::live::{AnimRole, LiveGroup, Ramp, Wobble},
};

/// Where the data-integration arcs converge, in front of the monitor.
pub const HUB_POINT: DVec3 = DVec3::new(0.0, 0.0, 1.0);

/// Floor the funnel drips fall to, in scene coordinates.
pub const DRIP_FLOOR_Y: f64 = -15.0;

fn fade(base: f64, gain: f64, glow: f64) -> AnimRole {
    AnimRole::FocusFade {
        opacity: Ramp::new(base, gain),
        glow,
    }
}

fn node(shape: NodeShape, size: f64, at: DVec3) -> Placed {
    Placed::at(GeometryDesc::Node { shape, size }, at)
}

fn unit_box(at: DVec3, scale: DVec3) -> Placed {
    Placed {
        desc: GeometryDesc::Node {
            shape: NodeShape::Box,
            size: 1.0,
        },
        transform: Transform3 {
            position: at,
            scale,
            ..Transform3::default()
        },
    }
}

/// Seed for the jitter of one rig inside one section.
fn rig_seed(seed: u64, section: usize, rig: u64) -> u64 {
    let mut rng = Rng64::new(seed ^ (section as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    for _ in 0..rig {
        rng.next_u64();
    }
    rng.next_u64()
}

/// Groups for `record.illustration`, bound to `section`.
pub fn illustration(record: &SectionRecord, section: usize, seed: u64) -> ReelResult<Vec<LiveGroup>> {
    let rig = |g: LiveGroup| g.tilted(record.tilt);
    let groups = match record.illustration {
        IllustrationKind::DataIntegration => data_integration(section, seed)?,
        IllustrationKind::OperationalMonitoring => operational_monitoring(section, seed)?,
        IllustrationKind::PredictiveIntelligence => predictive_intelligence(section, seed)?,
        IllustrationKind::DecisionMaking => decision_making(section, seed)?,
        IllustrationKind::SourceNodes => vec![source_nodes(section)?],
        IllustrationKind::Funnel => vec![funnel_layer(section)?],
        IllustrationKind::PlatformGrids => vec![platform_grids(section)?],
    };
    Ok(groups.into_iter().map(rig).collect())
}

/// Vintage monitor hub with orbiting source nodes sending packets along arcs.
pub fn data_integration(section: usize, seed: u64) -> ReelResult<Vec<LiveGroup>> {
    let (w, h, d) = (4.2, 3.4, 1.6);
    let bezel = 0.25;

    let mut monitor = LiveGroup::new(section);
    monitor.anchor.position = DVec3::new(0.0, -0.2, 0.0);
    monitor.push(unit_box(DVec3::ZERO, DVec3::new(w, h, d)), AnimRole::Frame);
    monitor.extend_static([unit_box(
        DVec3::new(0.0, 0.0, d * 0.5 + 0.02),
        DVec3::new(w - bezel * 2.0, h - bezel * 2.0, 0.04),
    )]);
    monitor.push(
        unit_box(
            DVec3::new(0.0, 0.0, d * 0.5 + 0.04),
            DVec3::new(w - bezel * 2.0 - 0.08, h - bezel * 2.0 - 0.08, 0.01),
        ),
        AnimRole::Screen,
    );
    monitor.extend_static([
        node(
            NodeShape::Sphere,
            0.04,
            DVec3::new(w * 0.34, -h * 0.36, d * 0.5 + 0.06),
        ),
        unit_box(
            DVec3::new(0.0, -h * 0.6, 0.0),
            DVec3::new(w * 0.7, 0.25, d * 0.9),
        ),
        unit_box(
            DVec3::new(0.0, -h * 0.6 - 0.25, 0.0),
            DVec3::new(w * 0.9, 0.12, d * 1.1),
        ),
    ]);

    let orbit = OrbitParams {
        seed: rig_seed(seed, section, 0),
        ..OrbitParams::default()
    };
    let nodes = orbit_layout(&orbit)?;
    let arc_params = ArcParams::default();
    let mut rng = Rng64::new(rig_seed(seed, section, 1));

    let mut network = LiveGroup::new(section);
    for (index, n) in nodes.iter().enumerate() {
        network.push(
            node(NodeShape::Icosahedron, 0.22, n.position(0.0)),
            AnimRole::Orbit { node: *n, index },
        );
        let arc = ConnectionArc::new(n.position(0.0), HUB_POINT, &arc_params, &mut rng)?;
        network.push(Placed::origin(arc.geometry()), AnimRole::ArcLine);
        for packet in 0..arc.packet_count() {
            network.push(
                node(NodeShape::Sphere, 0.08, arc.packet_position(packet, 0.0)),
                AnimRole::Packet {
                    arc: arc.clone(),
                    packet,
                },
            );
        }
    }
    Ok(vec![monitor, network])
}

/// Ring gauges that sweep in with focus, a hub-and-spoke network and a faint particle field.
pub fn operational_monitoring(section: usize, seed: u64) -> ReelResult<Vec<LiveGroup>> {
    let mut gauges = LiveGroup::new(section);
    gauges.spin = DVec3::new(0.0, 0.0, 0.005);
    gauges.wobble = Some(Wobble {
        x_freq: 0.3,
        x_amp: 0.1,
        y_freq: 0.4,
        y_amp: 0.05,
    });
    for (index, gauge) in STANDARD_GAUGES.iter().enumerate() {
        gauge.validate()?;
        let ring = |sweep: f64| GeometryDesc::Arc {
            radius: gauge.radius,
            thickness: GAUGE_THICKNESS,
            sweep,
        };
        gauges.push(Placed::origin(ring(TAU)), fade(0.3, 0.0, 0.0));
        gauges.push(
            Placed::origin(ring(gauge.sweep())),
            AnimRole::Gauge {
                gauge: *gauge,
                index,
            },
        );
        gauges.push(
            node(NodeShape::Sphere, 0.08, gauge.cap_position()),
            fade(0.0, 1.0, 0.8),
        );
    }
    gauges.push(node(NodeShape::Sphere, 0.3, DVec3::ZERO), fade(0.9, 0.0, 0.3));

    let hub_graph = monitoring_hub();
    hub_graph.validate()?;
    let mut hub = LiveGroup::new(section);
    for (index, &p) in hub_graph.nodes.iter().enumerate() {
        let size = if index == 0 { 0.2 } else { 0.15 };
        hub.push(
            node(NodeShape::Sphere, size, p),
            AnimRole::Pulse {
                shimmer: Shimmer::HUB_NODE,
                index,
                opacity: 0.8,
            },
        );
    }
    hub.push(Placed::origin(hub_graph.edge_lines()), fade(0.0, 0.6, 0.0));

    let cloud = BoxCloud {
        count: 100,
        extent: DVec3::new(8.0, 8.0, 4.0),
        seed: rig_seed(seed, section, 0),
    };
    let mut particles = LiveGroup::new(section);
    particles.spin = DVec3::new(0.0, 0.001, 0.0);
    particles.push(
        Placed::origin(GeometryDesc::Points {
            points: cloud.points()?,
            size: 0.03,
        }),
        AnimRole::Cloud {
            gain: 0.6,
            size: None,
        },
    );
    Ok(vec![gauges, hub, particles])
}

/// Forecasting helix, stacked sine waves, a small neural net and floating data points.
pub fn predictive_intelligence(section: usize, seed: u64) -> ReelResult<Vec<LiveGroup>> {
    let hx = helix(&HelixParams::default())?;
    let mut spiral = LiveGroup::new(section);
    spiral.spin = DVec3::new(0.0, 0.01, 0.0);
    spiral.push(
        Placed::origin(GeometryDesc::Lines {
            strips: vec![hx.curve],
        }),
        fade(0.0, 0.8, 0.0),
    );
    for (index, &p) in hx.markers.iter().enumerate() {
        spiral.push(
            node(NodeShape::Sphere, 0.1, p),
            AnimRole::Pulse {
                shimmer: Shimmer::HELIX_MARKER,
                index,
                opacity: 0.9,
            },
        );
    }

    let mut waves = LiveGroup::new(section);
    for (index, strip) in sine_waves(&WaveParams::default())?.into_iter().enumerate() {
        waves.push(
            Placed::origin(GeometryDesc::Lines {
                strips: vec![strip],
            }),
            AnimRole::Drift {
                index,
                base: 0.6 - index as f64 * 0.1,
                wave: Wave::new(0.0, 0.0),
                amp: 0.0,
                sway: 0.3,
            },
        );
    }

    let graph = neural_net(&STANDARD_NET, 0.8)?;
    let mut net = LiveGroup::new(section);
    net.anchor = net.anchor.with_uniform_scale(0.8);
    for (index, &p) in graph.nodes.iter().enumerate() {
        net.push(
            node(NodeShape::Sphere, 0.08, p),
            AnimRole::Pulse {
                shimmer: Shimmer::NEURON,
                index,
                opacity: 0.8,
            },
        );
    }
    net.push(Placed::origin(graph.edge_lines()), fade(0.0, 0.4, 0.0));

    let cloud = BoxCloud {
        count: 80,
        extent: DVec3::new(10.0, 8.0, 6.0),
        seed: rig_seed(seed, section, 0),
    };
    let mut particles = LiveGroup::new(section);
    particles.spin = DVec3::new(0.0, 0.002, 0.0);
    particles.push(
        Placed::origin(GeometryDesc::Points {
            points: cloud.points()?,
            size: 0.04,
        }),
        AnimRole::Cloud {
            gain: 0.7,
            size: None,
        },
    );
    Ok(vec![spiral, waves, net, particles])
}

/// Decision tree, dashed data flows, an analytics bar grid and circling insight points.
pub fn decision_making(section: usize, seed: u64) -> ReelResult<Vec<LiveGroup>> {
    let t = decision_tree(2, 2.0, 2.0)?;
    let mut tree = LiveGroup::new(section);
    tree.spin = DVec3::new(0.0, 0.005, 0.0);
    for (index, (&p, kind)) in t.graph.nodes.iter().zip(&t.kinds).enumerate() {
        tree.push(
            node(NodeShape::Sphere, kind.radius(), p),
            AnimRole::Pulse {
                shimmer: kind.shimmer(),
                index,
                opacity: 0.9,
            },
        );
    }
    tree.push(Placed::origin(t.graph.edge_lines()), fade(0.0, 0.8, 0.0));

    let mut flows = LiveGroup::new(section);
    flows.anchor.position = DVec3::new(0.0, -3.0, 0.0);
    for (index, strip) in flow_paths(&FlowParams::default())?.into_iter().enumerate() {
        flows.push(
            Placed::origin(GeometryDesc::Lines {
                strips: vec![strip],
            }),
            AnimRole::Drift {
                index,
                base: 0.6,
                wave: Wave::new(1.0, 1.0),
                amp: 0.2,
                sway: 0.2,
            },
        );
    }

    let mut grid = LiveGroup::new(section);
    grid.anchor.position = DVec3::new(0.0, 0.0, -2.0);
    grid.anchor.rotation.x = FRAC_PI_6;
    for (index, bar) in bar_grid(3, 0.8, rig_seed(seed, section, 0))?
        .into_iter()
        .enumerate()
    {
        grid.push(
            unit_box(bar.position, DVec3::new(0.3, 0.3, bar.height)),
            AnimRole::Bar { bar, index },
        );
    }

    let shell = ShellCloud {
        count: 30,
        inner_radius: 3.0,
        thickness: 1.0,
        seed: rig_seed(seed, section, 1),
    };
    let mut insights = LiveGroup::new(section);
    insights.spin = DVec3::new(0.005, 0.01, 0.0);
    insights.push(
        Placed::origin(GeometryDesc::Points {
            points: shell.points()?,
            size: 0.05,
        }),
        AnimRole::Cloud {
            gain: 0.8,
            size: Some(Ramp::new(0.05, 0.05)),
        },
    );
    Ok(vec![tree, flows, grid, insights])
}

/// Funnel diagram base layer.
pub fn source_nodes(section: usize) -> ReelResult<LiveGroup> {
    let mut g = LiveGroup::new(section);
    for placed in base_nodes(1.0)? {
        g.push(placed, fade(0.5, 0.5, 2.0));
    }
    Ok(g)
}

/// Funnel diagram middle layer: the whole wireframe is one object.
pub fn funnel_layer(section: usize) -> ReelResult<LiveGroup> {
    let mut g = LiveGroup::new(section);
    g.push(
        Placed::origin(funnel(&FunnelParams::default())?.into_geometry()),
        fade(0.5, 0.5, 3.0),
    );
    Ok(g)
}

/// Funnel diagram top layer.
pub fn platform_grids(section: usize) -> ReelResult<LiveGroup> {
    let mut g = LiveGroup::new(section);
    for placed in GridStack::default().build()? {
        g.push(placed, fade(0.5, 0.5, 2.0));
    }
    Ok(g)
}

/// Scene-wide decoration of the funnel diagram: drips from the funnel rim to the floor and the
/// marker arrow. Neither moves with the layers.
pub fn funnel_decor() -> ReelResult<LiveGroup> {
    let mut g = LiveGroup::shared();
    g.push(
        Placed::origin(dripping_links(&FunnelParams::default(), DRIP_FLOOR_Y)?),
        fade(0.7, 0.0, 0.0),
    );
    g.extend_static(arrow(5.0, 0.5)?);
    Ok(g)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/illustrations.rs"]
mod tests;
