use super::*;

fn scalar(stops: &[(f64, f64)]) -> Timeline<f64> {
    Timeline::linear(stops.iter().copied()).unwrap()
}

#[test]
fn clamps_before_first_and_after_last() {
    let tl = scalar(&[(0.2, 1.0), (0.6, 3.0)]);
    assert_eq!(tl.sample_at(0.0), 1.0);
    assert_eq!(tl.sample_at(-5.0), 1.0);
    assert_eq!(tl.sample_at(0.9), 3.0);
}

#[test]
fn linear_between_bracketing_pair() {
    let tl = scalar(&[(0.0, 0.0), (0.5, 10.0), (1.0, 0.0)]);
    assert_eq!(tl.sample_at(0.25), 5.0);
    assert_eq!(tl.sample_at(0.75), 5.0);
}

#[test]
fn exact_at_every_key() {
    let keys = [(0.0, 0.1), (0.1, 0.7), (0.9, -0.3), (1.0, 0.123_456_789)];
    let tl = scalar(&keys);
    for (at, v) in keys {
        assert_eq!(tl.sample_at(at), v);
    }
}

#[test]
fn vector_values_interpolate_per_component() {
    let tl = Timeline::linear([
        (0.0, DVec3::new(0.0, 0.0, 15.0)),
        (1.0, DVec3::new(2.0, -20.0, 8.0)),
    ])
    .unwrap();
    assert_eq!(tl.sample_at(0.5), DVec3::new(1.0, -10.0, 11.5));
}

#[test]
fn ease_applies_toward_next_key() {
    let tl = Timeline::new(vec![
        Keyframe {
            at: 0.0,
            value: 0.0,
            ease: Ease::InQuad,
        },
        Keyframe::new(1.0, 1.0),
    ])
    .unwrap();
    assert_eq!(tl.sample_at(0.5), 0.25);
}

#[test]
fn rejects_empty_and_unordered() {
    assert!(Timeline::<f64>::new(vec![]).is_err());
    assert!(Timeline::linear([(0.5, 1.0), (0.5, 2.0)]).is_err());
    assert!(Timeline::linear([(0.6, 1.0), (0.5, 2.0)]).is_err());
    assert!(Timeline::linear([(f64::NAN, 1.0)]).is_err());
}

#[test]
fn interpolate_on_empty_slice_is_none() {
    let keys: [Keyframe<f64>; 0] = [];
    assert_eq!(interpolate(0.5, &keys), None);
}

#[test]
fn interpolate_nan_returns_first_key() {
    let keys = [Keyframe::new(0.2, 1.0), Keyframe::new(0.6, 3.0)];
    assert_eq!(interpolate(f64::NAN, &keys), Some(1.0));
    let tl = scalar(&[(0.0, -4.0), (0.5, 2.0), (1.0, 7.0)]);
    assert_eq!(tl.sample_at(f64::NAN), -4.0);
}

#[test]
fn deserialize_validates_keys() {
    let ok: Timeline<f64> =
        serde_json::from_str(r#"{"keys":[{"at":0.0,"value":1.0},{"at":1.0,"value":0.0}]}"#)
            .unwrap();
    assert_eq!(ok.sample_at(0.5), 0.5);

    let bad = serde_json::from_str::<Timeline<f64>>(r#"{"keys":[]}"#);
    assert!(bad.is_err());
}
