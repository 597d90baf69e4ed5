use super::*;

fn narrative() -> WindowSet {
    WindowSet::new(
        [(0.1, 0.3), (0.3, 0.5), (0.5, 0.7), (0.7, 0.9)]
            .into_iter()
            .map(|(s, e)| SectionWindow::new(s, e).unwrap())
            .collect(),
    )
    .unwrap()
}

#[test]
fn late_in_first_window() {
    let s = narrative().locate(Progress::new(0.29));
    assert_eq!(s.index, Some(0));
    assert!((s.local_t - 0.95).abs() < 1e-9);
    assert!((s.focus() - 0.25).abs() < 1e-9);
}

#[test]
fn shared_boundary_belongs_to_later_window() {
    let s = narrative().locate(Progress::new(0.3));
    assert_eq!(s.index, Some(1));
    assert_eq!(s.local_t, 0.0);
    assert_eq!(s.focus(), 0.0);
}

#[test]
fn final_end_is_inclusive() {
    let s = narrative().locate(Progress::new(0.9));
    assert_eq!(s.index, Some(3));
    assert_eq!(s.local_t, 1.0);
}

#[test]
fn gaps_map_to_none() {
    let set = narrative();
    for p in [0.0, 0.05, 0.0999, 0.9001, 0.95, 1.0] {
        let s = set.locate(Progress::new(p));
        assert_eq!(s, ActiveState::NONE, "p={p}");
        assert_eq!(s.signed_index(), -1);
        assert_eq!(s.focus(), 0.0);
    }
}

#[test]
fn exactly_one_containing_window_or_none() {
    let set = narrative();
    for i in 0..=10_000 {
        let p = f64::from(i) / 10_000.0;
        let s = set.locate(Progress::new(p));
        let containing: Vec<usize> = set
            .as_slice()
            .iter()
            .enumerate()
            .filter(|(_, w)| w.contains(p))
            .map(|(i, _)| i)
            .collect();
        match s.index {
            None => assert!(containing.is_empty(), "p={p}"),
            Some(idx) => {
                assert!(containing.contains(&idx), "p={p}");
                assert!((0.0..=1.0).contains(&s.local_t));
            }
        }
    }
}

#[test]
fn out_of_range_progress_is_clamped_first() {
    let set = WindowSet::new(vec![SectionWindow::new(0.5, 1.0).unwrap()]).unwrap();
    let s = set.locate(Progress::new(1.2));
    assert_eq!(s.index, Some(0));
    assert_eq!(s.local_t, 1.0);
}

#[test]
fn overlapping_or_unordered_windows_are_rejected() {
    let w = |s, e| SectionWindow::new(s, e).unwrap();
    assert!(WindowSet::new(vec![w(0.1, 0.4), w(0.3, 0.5)]).is_err());
    assert!(WindowSet::new(vec![w(0.5, 0.7), w(0.1, 0.3)]).is_err());
    assert!(WindowSet::new(vec![]).is_err());
    assert!(WindowSet::new(vec![w(0.1, 0.3), w(0.3, 0.5)]).is_ok());
}

#[test]
fn degenerate_windows_are_rejected() {
    assert!(SectionWindow::new(0.3, 0.3).is_err());
    assert!(SectionWindow::new(0.4, 0.2).is_err());
    assert!(SectionWindow::new(-0.1, 0.2).is_err());
    assert!(SectionWindow::new(0.1, f64::NAN).is_err());
}

#[test]
fn misconfigured_overlap_first_match_wins() {
    // Bypasses WindowSet validation on purpose.
    let windows = [
        SectionWindow::new(0.1, 0.5).unwrap(),
        SectionWindow::new(0.2, 0.6).unwrap(),
    ];
    assert_eq!(locate(Progress::new(0.3), &windows).index, Some(0));
}

#[test]
fn window_serde_is_a_pair() {
    let w: SectionWindow = serde_json::from_str("[0.25, 0.4]").unwrap();
    assert_eq!((w.start(), w.end()), (0.25, 0.4));
    assert_eq!(serde_json::to_string(&w).unwrap(), "[0.25,0.4]");
    assert!(serde_json::from_str::<SectionWindow>("[0.4, 0.25]").is_err());
}

#[test]
fn focus_for_only_lights_active_section() {
    let s = narrative().locate(Progress::new(0.4));
    assert_eq!(s.focus_for(1), 1.0);
    assert_eq!(s.focus_for(0), 0.0);
    assert_eq!(s.focus_for(2), 0.0);
}
