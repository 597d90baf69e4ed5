use super::*;
use kurbo::PathEl;

#[test]
fn ribbon_point_count_is_fixed() {
    let p = RibbonParams::default();
    let c = Point::new(640.0, 360.0);
    assert_eq!(p.points(0, c, 0.0).len(), 101);
    assert_eq!(p.points(2, c, 1234.5).len(), 101);
}

#[test]
fn first_point_at_time_zero() {
    let p = RibbonParams::default();
    let pts = p.points(0, Point::new(0.0, 0.0), 0.0);
    assert!((pts[0].x - 200.0).abs() < 1e-9);
    assert!(pts[0].y.abs() < 1e-9);
}

#[test]
fn topology_constant_across_time() {
    let p = RibbonParams::default();
    let c = Point::new(500.0, 400.0);
    let a = p.paths(c, 0.0);
    let b = p.paths(c, 750.0);
    assert_eq!(a.len(), 3);
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.elements().len(), y.elements().len());
    }
    assert_ne!(a, b);
}

#[test]
fn smoothing_uses_quadratics_through_midpoints() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(2.0, 2.0),
        Point::new(4.0, 2.0),
        Point::new(5.0, 0.0),
    ];
    let path = smooth_path(&pts);
    let els = path.elements();
    assert_eq!(els.len(), 3);
    assert_eq!(els[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
    assert_eq!(
        els[1],
        PathEl::QuadTo(Point::new(2.0, 2.0), Point::new(3.0, 2.0))
    );
    assert_eq!(
        els[2],
        PathEl::QuadTo(Point::new(4.0, 2.0), Point::new(4.5, 1.0))
    );
}

#[test]
fn short_inputs_degrade_gracefully() {
    assert!(smooth_path(&[]).elements().is_empty());
    assert_eq!(smooth_path(&[Point::ORIGIN]).elements().len(), 1);
    assert_eq!(
        smooth_path(&[Point::ORIGIN, Point::new(1.0, 1.0)]).elements().len(),
        2
    );
}

#[test]
fn alpha_and_gradient_fade_per_ribbon() {
    assert!((ribbon_alpha(0) - 0.4).abs() < 1e-12);
    assert!((ribbon_alpha(2) - 0.16).abs() < 1e-12);
    assert_eq!(ribbon_alpha(10), 0.0);
    let stops = gradient_stops(1, 0.0);
    assert_eq!(stops[0].grey, 255.0);
    assert!((stops[4].alpha - 0.13).abs() < 1e-12);
    assert_eq!(stops[2].offset, 0.5);
}

#[test]
fn gradient_angle_tracks_pointer() {
    assert_eq!(gradient_angle(0.0, 1000.0), 0.0);
    assert_eq!(gradient_angle(500.0, 1000.0), 180.0);
    assert_eq!(gradient_angle(10.0, 0.0), 0.0);
}

#[test]
fn invalid_params_rejected() {
    let p = RibbonParams {
        segments: 1,
        ..RibbonParams::default()
    };
    assert!(p.validate().is_err());
}
