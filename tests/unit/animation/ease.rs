use super::*;

#[test]
fn endpoints_are_fixed_for_every_curve() {
    for ease in [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::OVERLAY,
    ] {
        assert!(ease.apply(0.0).abs() < 1e-9, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::InQuad.apply(-1.0), 0.0);
    assert_eq!(Ease::InQuad.apply(2.0), 1.0);
}

#[test]
fn linear_bezier_matches_identity() {
    let ease = Ease::CubicBezier(0.25, 0.25, 0.75, 0.75);
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        assert!((ease.apply(t) - t).abs() < 1e-6);
    }
}

#[test]
fn overlay_curve_is_monotonic_and_front_loaded() {
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = Ease::OVERLAY.apply(f64::from(i) / 100.0);
        assert!(v + 1e-9 >= prev);
        prev = v;
    }
    // Strong ease-out: well past halfway at a quarter of the duration.
    assert!(Ease::OVERLAY.apply(0.25) > 0.6);
}
