use super::*;
use crate::choreo::window::SectionWindow;

fn funnel_windows() -> WindowSet {
    WindowSet::new(
        [(0.25, 0.4), (0.45, 0.6), (0.65, 0.8)]
            .into_iter()
            .map(|(s, e)| SectionWindow::new(s, e).unwrap())
            .collect(),
    )
    .unwrap()
}

fn funnel_camera() -> DerivedCamera {
    DerivedCamera {
        far_z: 15.0,
        near_z: 8.0,
        overview_y: 0.0,
        layer_y: vec![-20.0, 0.0, 20.0],
    }
}

#[test]
fn midpoint_between_bracketing_stops() {
    let p0 = -20.0;
    let cam = CameraChoreographer::new(&[
        CameraKeyframe {
            at: 0.0,
            position: DVec3::new(0.0, 0.0, 15.0),
            look_at_y: 0.0,
        },
        CameraKeyframe {
            at: 0.25,
            position: DVec3::new(0.0, 0.0, 15.0),
            look_at_y: 0.0,
        },
        CameraKeyframe {
            at: 0.4,
            position: DVec3::new(0.0, p0, 8.0),
            look_at_y: p0,
        },
    ])
    .unwrap();

    let pose = cam.pose(Progress::new(0.325));
    let mid = DVec3::new(0.0, p0 / 2.0, 11.5);
    assert!((pose.position - mid).length() < 1e-9);
    assert!((pose.look_at.y - p0 / 2.0).abs() < 1e-9);
}

#[test]
fn derived_stops_bracket_each_section() {
    let stops = funnel_camera().stops(&funnel_windows()).unwrap();
    let ats: Vec<f64> = stops.iter().map(|k| k.at).collect();
    assert_eq!(ats, vec![0.0, 0.25, 0.4, 0.45, 0.6, 0.65, 0.8, 1.0]);
    let zs: Vec<f64> = stops.iter().map(|k| k.position.z).collect();
    assert_eq!(zs, vec![15.0, 15.0, 8.0, 15.0, 8.0, 15.0, 8.0, 15.0]);
    let ys: Vec<f64> = stops.iter().map(|k| k.position.y).collect();
    assert_eq!(ys, vec![0.0, 0.0, -20.0, 0.0, 0.0, 20.0, 20.0, 20.0]);
}

#[test]
fn adjacent_windows_collapse_shared_stop() {
    let windows = WindowSet::new(vec![
        SectionWindow::new(0.0, 0.5).unwrap(),
        SectionWindow::new(0.5, 1.0).unwrap(),
    ])
    .unwrap();
    let cam = DerivedCamera {
        far_z: 10.0,
        near_z: 5.0,
        overview_y: 0.0,
        layer_y: vec![1.0, 2.0],
    };
    let stops = cam.stops(&windows).unwrap();
    assert!(stops.windows(2).all(|w| w[0].at < w[1].at));
    assert!(CameraChoreographer::new(&stops).is_ok());
}

#[test]
fn layer_count_mismatch_fails_fast() {
    let mut cam = funnel_camera();
    cam.layer_y.pop();
    assert!(CameraChoreographer::derived(&funnel_windows(), &cam).is_err());
}

#[test]
fn empty_or_non_finite_keys_fail() {
    assert!(CameraChoreographer::new(&[]).is_err());
    assert!(
        CameraChoreographer::new(&[CameraKeyframe {
            at: 0.0,
            position: DVec3::new(f64::NAN, 0.0, 0.0),
            look_at_y: 0.0,
        }])
        .is_err()
    );
}

#[test]
fn pose_is_deterministic_and_exact_at_stops() {
    let cam = CameraChoreographer::derived(&funnel_windows(), &funnel_camera()).unwrap();
    assert_eq!(cam.stop_count(), 8);
    for i in 0..=200 {
        let p = Progress::new(f64::from(i) / 200.0);
        assert_eq!(cam.pose(p), cam.pose(p));
    }
    let at_end_of_first = cam.pose(Progress::new(0.4));
    assert_eq!(at_end_of_first.position, DVec3::new(0.0, -20.0, 8.0));
    assert_eq!(at_end_of_first.look_at, DVec3::new(0.0, -20.0, 0.0));
}

#[test]
fn fixed_camera_never_moves() {
    let cam = CameraChoreographer::fixed(DVec3::new(0.0, 0.0, 12.0));
    assert_eq!(
        cam.pose(Progress::START).position,
        cam.pose(Progress::END).position
    );
}
