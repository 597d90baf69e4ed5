use super::*;

fn slot() -> OverlaySlot {
    OverlaySlot::new(OverlayMotion {
        duration: 1.0,
        ..OverlayMotion::NARRATIVE
    })
    .unwrap()
}

fn changes(v: &[SlotChange]) -> Vec<SlotChange> {
    v.to_vec()
}

#[test]
fn enter_from_idle_mounts_immediately_and_settles() {
    let mut s = slot();
    assert!(s.is_settled());
    assert_eq!(changes(&s.retarget(Some(0))), vec![SlotChange::Mounted(0)]);
    assert_eq!(s.phase(), SlotPhase::Entering { index: 0, v: 0.0 });
    assert_eq!(s.style().opacity, 0.0);

    s.advance(0.5);
    assert_eq!(s.phase(), SlotPhase::Entering { index: 0, v: 0.5 });
    s.advance(0.75);
    assert_eq!(s.phase(), SlotPhase::Steady { index: 0 });
    assert!(s.is_settled());
    assert_eq!(s.style().opacity, 1.0);
}

#[test]
fn exit_completes_before_next_enter() {
    let mut s = slot();
    s.retarget(Some(0));
    s.advance(2.0);

    assert!(s.retarget(Some(1)).is_empty());
    assert_eq!(s.phase(), SlotPhase::Exiting { index: 0, v: 1.0 });
    assert_eq!(s.shown(), Some(0));

    s.advance(0.5);
    assert_eq!(s.shown(), Some(0));

    let out = s.advance(0.75);
    assert_eq!(
        changes(&out),
        vec![SlotChange::Unmounted(0), SlotChange::Mounted(1)]
    );
    // The quarter second left over goes into the new enter.
    let SlotPhase::Entering { index: 1, v } = s.phase() else {
        panic!("expected entering, got {:?}", s.phase());
    };
    assert!((v - 0.25).abs() < 1e-12);
}

#[test]
fn leaving_all_sections_exits_to_idle() {
    let mut s = slot();
    s.retarget(Some(2));
    s.advance(1.0);
    s.retarget(None);
    assert!(s.style().offset[0] >= -1e-12);
    let out = s.advance(1.0);
    assert_eq!(changes(&out), vec![SlotChange::Unmounted(2)]);
    assert_eq!(s.phase(), SlotPhase::Idle);
    assert_eq!(s.style(), OverlayStyle::HIDDEN);
    assert!(s.is_settled());
}

#[test]
fn cancelled_enter_exits_from_current_visibility() {
    let mut s = slot();
    s.retarget(Some(0));
    s.advance(0.3);
    s.retarget(Some(1));
    let SlotPhase::Exiting { index: 0, v } = s.phase() else {
        panic!("expected exiting");
    };
    assert!((v - 0.3).abs() < 1e-12);

    let out = s.advance(0.3 + 1e-9);
    assert_eq!(out[0], SlotChange::Unmounted(0));
    assert_eq!(out[1], SlotChange::Mounted(1));
}

#[test]
fn returning_to_exiting_index_turns_around() {
    let mut s = slot();
    s.retarget(Some(0));
    s.advance(1.0);
    s.retarget(Some(1));
    s.advance(0.4);
    s.retarget(Some(0));
    let SlotPhase::Entering { index: 0, v } = s.phase() else {
        panic!("expected entering");
    };
    assert!((v - 0.6).abs() < 1e-12);
}

#[test]
fn reentering_after_unmount_restarts_from_zero() {
    let mut s = slot();
    s.retarget(Some(3));
    s.advance(1.0);
    s.retarget(None);
    s.advance(1.0);
    s.retarget(Some(3));
    assert_eq!(s.phase(), SlotPhase::Entering { index: 3, v: 0.0 });
}

#[test]
fn burst_of_transitions_within_one_frame() {
    let mut s = slot();
    s.retarget(Some(0));
    s.retarget(Some(1));
    s.retarget(Some(2));
    s.retarget(Some(3));
    let out = s.advance(1.0 / 60.0);
    assert_eq!(out[0], SlotChange::Unmounted(0));
    assert_eq!(out[1], SlotChange::Mounted(3));
    assert_eq!(s.shown(), Some(3));
}

#[test]
fn nonsense_dt_is_ignored() {
    let mut s = slot();
    s.retarget(Some(0));
    assert!(s.advance(f64::NAN).is_empty());
    assert!(s.advance(-1.0).is_empty());
    assert_eq!(s.phase(), SlotPhase::Entering { index: 0, v: 0.0 });
}
