use std::cell::RefCell;

use super::*;
use crate::{
    overlay::{EventLog, SlotPresenter},
    render::backend::RecordingRenderer,
    scene::presets,
    scroll::host::RecordingHost,
};

type TestEngine = Engine<RecordingRenderer, EventLog>;

struct Rig {
    host: Rc<RecordingHost>,
    source: ProgressSource,
}

impl Rig {
    fn new() -> Self {
        Self {
            host: Rc::new(RecordingHost::new()),
            source: ProgressSource::new(),
        }
    }

    fn mount<P: OverlayPresenter + 'static>(&self, presenter: P) -> ReelResult<Engine<RecordingRenderer, P>> {
        let host: Rc<dyn Host> = self.host.clone();
        Engine::mount(
            &presets::illustration_block()?,
            RecordingRenderer::new(),
            host,
            &self.source,
            presenter,
        )
    }

    fn scroll(&self, engine: &mut Engine<RecordingRenderer, impl OverlayPresenter>, p: f64) {
        self.source.set(Progress::new(p));
        let n = engine.frames();
        engine.frame(FrameClock::nth(n, 60.0));
    }
}

fn transition_indices(log: &EventLog) -> Vec<i64> {
    log.transitions()
        .map(|e| match e {
            OverlayEvent::Transition { active_index, .. } => *active_index,
            OverlayEvent::Focus { .. } => unreachable!(),
        })
        .collect()
}

#[test]
fn mount_takes_and_drop_releases_everything() {
    let rig = Rig::new();
    let engine: TestEngine = rig.mount(EventLog::new()).unwrap();
    assert_eq!(rig.host.active(), 3);
    assert_eq!(rig.host.active_of(ListenerKind::PointerMove), 1);
    assert_eq!(rig.source.subscriber_count(), 1);

    drop(engine);
    assert_eq!(rig.host.active(), 0);
    assert_eq!(rig.source.subscriber_count(), 0);
}

#[test]
fn failed_mount_leaves_nothing_registered() {
    let rig = Rig::new();
    rig.host.refuse(ListenerKind::PointerMove);
    assert!(rig.mount(EventLog::new()).is_err());
    assert_eq!(rig.host.active(), 0);
    assert_eq!(rig.source.subscriber_count(), 0);

    let rig = Rig::new();
    let mut cfg = presets::illustration_block().unwrap();
    cfg.sections.clear();
    let host: Rc<dyn Host> = rig.host.clone();
    let res = Engine::mount(&cfg, RecordingRenderer::new(), host, &rig.source, EventLog::new());
    assert!(res.is_err());
    assert_eq!(rig.host.active(), 0);
}

#[test]
fn scrolling_through_emits_one_transition_per_change() {
    let rig = Rig::new();
    let mut engine: TestEngine = rig.mount(EventLog::new()).unwrap();

    for p in [0.0, 0.05, 0.15, 0.29, 0.3, 0.45, 0.6, 0.8, 0.95] {
        rig.scroll(&mut engine, p);
    }
    assert_eq!(transition_indices(&engine.presenter()), [0, 1, 2, 3, -1]);

    let last = engine.presenter().transitions().last().cloned().unwrap();
    assert_eq!(last, OverlayEvent::transition(None, None));

    let first = engine.presenter().transitions().next().cloned().unwrap();
    let OverlayEvent::Transition { record, .. } = first else {
        unreachable!()
    };
    assert_eq!(record.unwrap().title, "Data Integration");
}

#[test]
fn every_frame_reports_focus() {
    let rig = Rig::new();
    let mut engine: TestEngine = rig.mount(EventLog::new()).unwrap();
    rig.scroll(&mut engine, 0.2);
    assert_eq!(engine.presenter().last_focus(), Some(1.0));
    rig.scroll(&mut engine, 0.29);
    assert!((engine.presenter().last_focus().unwrap() - 0.25).abs() < 1e-9);
    rig.scroll(&mut engine, 0.95);
    assert_eq!(engine.presenter().last_focus(), Some(0.0));
    assert_eq!(engine.frames(), 3);
}

#[test]
fn transitions_follow_every_publication() {
    let rig = Rig::new();
    let mut engine: TestEngine = rig.mount(EventLog::new()).unwrap();

    // Two publications before the next frame: both section changes are reported.
    rig.source.set(Progress::new(0.2));
    rig.source.set(Progress::new(0.4));
    assert_eq!(transition_indices(&engine.presenter()), [0, 1]);
    assert_eq!(engine.active_section(), Some(1));

    engine.frame(FrameClock::nth(0, 60.0));
    assert_eq!(transition_indices(&engine.presenter()), [0, 1]);
    assert_eq!(
        engine.render_loop().frame().unwrap().progress,
        Progress::new(0.4)
    );
}

#[test]
fn brief_exit_between_frames_is_reported() {
    let rig = Rig::new();
    let mut engine: TestEngine = rig.mount(EventLog::new()).unwrap();
    rig.scroll(&mut engine, 0.6);
    assert_eq!(engine.active_section(), Some(2));

    rig.source.set(Progress::new(0.95));
    assert_eq!(engine.active_section(), None);
    assert_eq!(transition_indices(&engine.presenter()), [2, -1]);

    rig.source.set(Progress::new(0.6));
    rig.scroll(&mut engine, 0.6);
    assert_eq!(transition_indices(&engine.presenter()), [2, -1, 2]);
    assert_eq!(engine.frames(), 2);
}

#[test]
fn progress_at_mount_is_picked_up_by_first_frame() {
    let rig = Rig::new();
    rig.source.set(Progress::new(0.4));
    let mut engine: TestEngine = rig.mount(EventLog::new()).unwrap();
    assert_eq!(engine.active_section(), None);

    engine.frame(FrameClock::nth(0, 60.0));
    assert_eq!(engine.active_section(), Some(1));
    assert_eq!(transition_indices(&engine.presenter()), [1]);
}

#[test]
fn resize_leaves_sections_alone() {
    let rig = Rig::new();
    let mut engine: TestEngine = rig.mount(EventLog::new()).unwrap();
    rig.scroll(&mut engine, 0.2);
    let events = engine.presenter().events().len();

    assert_eq!(engine.resize(1280.0, 720.0), TickOutcome::Rendered);
    assert_eq!(engine.renderer().viewport().unwrap().width, 1280.0);
    assert_eq!(engine.active_section(), Some(0));
    assert_eq!(engine.presenter().events().len(), events);
}

#[test]
fn renderer_failure_degrades_but_overlay_keeps_going() {
    let rig = Rig::new();
    let mut engine: TestEngine = rig.mount(EventLog::new()).unwrap();
    rig.scroll(&mut engine, 0.2);

    engine.renderer_mut().fail_next("context lost");
    rig.scroll(&mut engine, 0.25);
    assert!(engine.is_degraded());

    rig.scroll(&mut engine, 0.4);
    assert_eq!(transition_indices(&engine.presenter()), [0, 1]);
    assert_eq!(engine.presenter().last_focus(), Some(1.0));
}

#[test]
fn pending_renderer_skips_without_losing_state() {
    let rig = Rig::new();
    let host: Rc<dyn Host> = rig.host.clone();
    let mut engine = Engine::mount(
        &presets::illustration_block().unwrap(),
        RecordingRenderer::pending(),
        host,
        &rig.source,
        EventLog::new(),
    )
    .unwrap();

    rig.scroll(&mut engine, 0.2);
    assert!(engine.renderer().objects().is_empty());
    assert_eq!(engine.active_section(), Some(0));

    engine.renderer_mut().set_ready(true);
    let n = engine.frames();
    assert_eq!(engine.frame(FrameClock::nth(n, 60.0)), TickOutcome::Rendered);
    assert_eq!(
        engine.renderer().objects().len(),
        engine.render_loop().object_count()
    );
}

struct Shared(Rc<RefCell<EventLog>>);

impl OverlayPresenter for Shared {
    fn present(&mut self, event: &OverlayEvent) {
        self.0.borrow_mut().present(event);
    }
}

#[test]
fn unmount_mid_section_sends_exit() {
    let rig = Rig::new();
    let log = Rc::new(RefCell::new(EventLog::new()));
    let mut engine = rig.mount(Shared(Rc::clone(&log))).unwrap();
    rig.scroll(&mut engine, 0.4);
    drop(engine);

    assert_eq!(transition_indices(&log.borrow()), [1, -1]);
    assert_eq!(rig.host.active(), 0);

    // Later publications reach nobody.
    rig.source.set(Progress::new(0.6));
    assert_eq!(log.borrow().transitions().count(), 2);
}

#[test]
fn slot_presenter_mounts_after_exit_finishes() {
    let rig = Rig::new();
    let presenter = SlotPresenter::new(crate::overlay::style::OverlayMotion::NARRATIVE, 4).unwrap();
    let mut engine = rig.mount(presenter).unwrap();

    rig.scroll(&mut engine, 0.2);
    for _ in 0..60 {
        rig.scroll(&mut engine, 0.2);
    }
    assert_eq!(engine.presenter().mounted().unwrap().counter, "01 / 04");

    rig.scroll(&mut engine, 0.4);
    // Exit of card 0 still running.
    assert_eq!(engine.presenter().mounted().unwrap().index, 0);
    for _ in 0..60 {
        rig.scroll(&mut engine, 0.4);
    }
    let presenter = engine.presenter();
    let card = presenter.mounted().unwrap();
    assert_eq!(card.index, 1);
    assert_eq!(card.record.title, "Operational Monitoring");
}
