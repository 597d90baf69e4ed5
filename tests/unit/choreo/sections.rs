use super::*;

fn at(index: Option<usize>) -> ActiveState {
    ActiveState {
        index,
        local_t: 0.5,
    }
}

#[test]
fn unchanged_index_emits_nothing() {
    let mut sm = SectionStateMachine::new(4);
    assert!(sm.observe(at(None)).is_empty());
    assert_eq!(
        sm.observe(at(Some(0))).as_slice(),
        &[SectionIntent::Enter { index: 0 }]
    );
    assert!(sm.observe(at(Some(0))).is_empty());
}

#[test]
fn switching_exits_then_enters() {
    let mut sm = SectionStateMachine::new(4);
    sm.observe(at(Some(0)));
    assert_eq!(
        sm.observe(at(Some(2))).as_slice(),
        &[
            SectionIntent::Exit { index: 0 },
            SectionIntent::Enter { index: 2 }
        ]
    );
    assert_eq!(sm.active(), Some(2));
}

#[test]
fn leaving_into_gap_only_exits() {
    let mut sm = SectionStateMachine::new(4);
    sm.observe(at(Some(3)));
    assert_eq!(
        sm.observe(at(None)).as_slice(),
        &[SectionIntent::Exit { index: 3 }]
    );
    assert_eq!(sm.active(), None);
}

#[test]
fn rapid_changes_are_each_reported() {
    let mut sm = SectionStateMachine::new(4);
    let mut transitions = 0;
    for idx in [Some(0), Some(1), Some(2), Some(1), None, Some(0)] {
        if !sm.observe(at(idx)).is_empty() {
            transitions += 1;
        }
    }
    assert_eq!(transitions, 6);
}

#[test]
fn out_of_range_index_is_treated_as_none() {
    let mut sm = SectionStateMachine::new(2);
    assert!(sm.observe(at(Some(5))).is_empty());
    assert_eq!(sm.active(), None);
}

#[test]
fn reset_reports_exit_once() {
    let mut sm = SectionStateMachine::new(2);
    sm.observe(at(Some(1)));
    assert_eq!(sm.reset(), Some(SectionIntent::Exit { index: 1 }));
    assert_eq!(sm.reset(), None);
}

#[test]
fn record_requires_title() {
    let rec = SectionRecord {
        title: "  ".to_owned(),
        description: String::new(),
        tilt: false,
        illustration: IllustrationKind::Funnel,
        highlight: None,
    };
    assert!(rec.validate().is_err());
}

#[test]
fn record_deserializes_with_default_tilt() {
    let rec: SectionRecord = serde_json::from_str(
        r#"{"title":"Data Foundry","description":"d","illustration":"funnel"}"#,
    )
    .unwrap();
    assert!(!rec.tilt);
    assert_eq!(rec.illustration, IllustrationKind::Funnel);
    assert_eq!(rec.highlight, None);
}
