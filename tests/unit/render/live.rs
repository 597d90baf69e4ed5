use super::*;
use crate::{
    foundation::math::Rng64,
    geometry::{
        GeometryDesc, NodeShape,
        orbit::{ArcParams, OrbitParams, orbit_layout},
    },
};

fn clocks(elapsed: f64) -> RoleClocks {
    RoleClocks {
        elapsed,
        orbit: 0.0,
        packet: 0.0,
    }
}

fn node_at(p: DVec3) -> Placed {
    Placed::at(
        GeometryDesc::Node {
            shape: NodeShape::Sphere,
            size: 0.15,
        },
        p,
    )
}

#[test]
fn focus_fade_tracks_focus_only() {
    let role = AnimRole::FocusFade {
        opacity: Ramp::new(0.5, 0.5),
        glow: 3.0,
    };
    let rest = Transform3::at(DVec3::Y);
    for t in [0.0, 1.3, 50.0] {
        let (xf, a) = role.apply(&rest, 0.5, &clocks(t));
        assert_eq!(xf, rest);
        assert_eq!((a.opacity, a.emissive_intensity), (0.75, 1.5));
    }
}

#[test]
fn unfocused_roles_are_dark_and_still() {
    let rest = Transform3::at(DVec3::new(1.0, 2.0, 0.0));
    let roles = [
        AnimRole::Drift {
            index: 2,
            base: 0.6,
            wave: Wave::new(1.0, 1.0),
            amp: 0.2,
            sway: 0.2,
        },
        AnimRole::Pulse {
            shimmer: Shimmer::HUB_NODE,
            index: 1,
            opacity: 0.8,
        },
        AnimRole::Cloud {
            gain: 0.7,
            size: None,
        },
    ];
    for role in roles {
        let (xf, a) = role.apply(&rest, 0.0, &clocks(2.7));
        assert_eq!(xf, rest, "{role:?}");
        assert_eq!(a.emissive_intensity, 0.0, "{role:?}");
    }
}

#[test]
fn drift_sways_and_fades_with_focus() {
    let role = AnimRole::Drift {
        index: 0,
        base: 0.6,
        wave: Wave::new(0.0, 0.0),
        amp: 0.0,
        sway: 0.3,
    };
    let t = std::f64::consts::PI;
    let (xf, a) = role.apply(&Transform3::default(), 1.0, &clocks(t));
    assert!((xf.position.x - (t * 0.5).sin() * 0.3).abs() < 1e-12);
    assert!((a.opacity - 0.6).abs() < 1e-12);
}

#[test]
fn cloud_size_ramps() {
    let role = AnimRole::Cloud {
        gain: 0.8,
        size: Some(Ramp::new(0.05, 0.05)),
    };
    let (_, a) = role.apply(&Transform3::default(), 1.0, &clocks(0.0));
    assert_eq!(a.point_size, Some(0.1));
    assert_eq!(a.opacity, 0.8);
}

#[test]
fn gauge_sector_rotates_to_sweep_times_focus() {
    let gauge = Gauge {
        value: 75.0,
        radius: 2.5,
    };
    let role = AnimRole::Gauge { gauge, index: 0 };
    let (xf, a) = role.apply(&Transform3::default(), 0.5, &clocks(0.0));
    assert!((xf.rotation.z - gauge.sweep() * 0.5).abs() < 1e-12);
    assert!((a.opacity - 0.85).abs() < 1e-12);
    assert!((a.emissive_intensity - 0.15).abs() < 1e-12);

    let (xf, _) = role.apply(&Transform3::default(), 0.0, &clocks(9.0));
    assert_eq!(xf.rotation.z, 0.0);
}

#[test]
fn bars_stretch_along_depth() {
    let bar = Bar {
        position: DVec3::ZERO,
        height: 0.4,
        intensity: 0.5,
    };
    let role = AnimRole::Bar { bar, index: 3 };
    let (xf, a) = role.apply(&Transform3::default(), 0.0, &clocks(1.0));
    assert_eq!(xf.scale, DVec3::new(0.3, 0.3, 0.4));
    assert_eq!(a.opacity, 0.3);
    assert_eq!(a.emissive_intensity, 0.0);
}

#[test]
fn orbit_and_packets_follow_their_clocks() {
    let nodes = orbit_layout(&OrbitParams::default()).unwrap();
    let node = nodes[2];
    let role = AnimRole::Orbit { node, index: 2 };
    let c = RoleClocks {
        elapsed: 0.0,
        orbit: 4.0,
        packet: 0.0,
    };
    let (xf, _) = role.apply(&node_at(DVec3::ZERO).transform, 1.0, &c);
    assert_eq!(xf.position, node.position(4.0));

    let mut rng = Rng64::new(7);
    let arc = ConnectionArc::new(DVec3::X * 6.0, DVec3::ZERO, &ArcParams::default(), &mut rng)
        .unwrap();
    let role = AnimRole::Packet {
        arc: arc.clone(),
        packet: 1,
    };
    let c = RoleClocks {
        elapsed: 0.5,
        orbit: 0.0,
        packet: 2.0,
    };
    let (xf, a) = role.apply(&Transform3::default(), 0.3, &c);
    assert_eq!(xf.position, arc.packet_position(1, 2.0));
    assert_eq!(xf.scale.x, packet_scale(1, 0.5));
    assert_eq!(a.emissive_intensity, 1.4);
}

#[test]
fn group_clock_accumulates_with_focus() {
    let mut group = LiveGroup::new(0);
    group.spin = DVec3::new(0.0, 0.01, 0.0);
    let mut clock = GroupClock::default();

    clock.advance(&group, 0.0, 0.5);
    assert_eq!(clock.spin, DVec3::ZERO);
    assert!((clock.orbit - 0.3).abs() < 1e-12);
    assert!((clock.packet - 0.25).abs() < 1e-12);

    clock.advance(&group, 1.0, 1.0 / REFERENCE_FPS);
    assert!((clock.spin.y - 0.01).abs() < 1e-12);
    assert_eq!(clock.role_clocks(3.0).elapsed, 3.0);
}

#[test]
fn tilt_and_wobble() {
    let g = LiveGroup::new(1).tilted(true);
    assert!((g.anchor.rotation.z - FRAC_PI_4).abs() < 1e-15);
    assert_eq!(LiveGroup::new(1).tilted(false).anchor, Transform3::default());

    let w = Wobble {
        x_freq: 0.3,
        x_amp: 0.1,
        y_freq: 0.4,
        y_amp: 0.05,
    };
    assert_eq!(w.rotation(5.0, 0.0), DVec3::ZERO);
    assert!((w.rotation(0.0, 1.0).y - 0.05).abs() < 1e-15);
}

#[test]
fn extend_static_marks_objects_fixed() {
    let mut g = LiveGroup::new(0);
    g.extend_static([node_at(DVec3::X), node_at(DVec3::Y)]);
    g.push(node_at(DVec3::Z), AnimRole::Screen);
    assert_eq!(g.objects.len(), 3);
    assert!(g.objects[0].role.is_static());
    assert!(!g.objects[2].role.is_static());
}
