use std::cell::Cell;

use super::*;

#[test]
fn metrics_map_container_travel_to_unit_range() {
    let vh = 800.0;
    assert_eq!(ScrollMetrics::for_scroll(0.0, 400.0, vh).progress(), Progress::START);
    assert_eq!(ScrollMetrics::for_scroll(2400.0, 400.0, vh).progress(), Progress::END);
    assert_eq!(ScrollMetrics::for_scroll(1200.0, 400.0, vh).progress().get(), 0.5);
    // Overscroll and rubber-banding clamp.
    assert_eq!(ScrollMetrics::for_scroll(-40.0, 400.0, vh).progress(), Progress::START);
    assert_eq!(ScrollMetrics::for_scroll(9000.0, 400.0, vh).progress(), Progress::END);
}

#[test]
fn short_container_reads_as_start() {
    let m = ScrollMetrics {
        container_top: -100.0,
        container_height: 600.0,
        viewport_height: 800.0,
    };
    assert_eq!(m.progress(), Progress::START);
}

#[test]
fn subscribers_see_each_change_once() {
    let source = ProgressSource::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    let _sub = source.subscribe(move |p| log.borrow_mut().push(p.get()));

    assert!(source.set(Progress::new(0.25)));
    assert!(!source.set(Progress::new(0.25)));
    assert!(source.set(Progress::new(0.1)));
    assert!(source.update(&ScrollMetrics::for_scroll(1200.0, 400.0, 800.0)));
    assert_eq!(*seen.borrow(), vec![0.25, 0.1, 0.5]);
    assert_eq!(source.get().get(), 0.5);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let source = ProgressSource::new();
    let hits = Rc::new(Cell::new(0));
    let h = Rc::clone(&hits);
    let sub = source.subscribe(move |_| h.set(h.get() + 1));
    assert_eq!(source.subscriber_count(), 1);

    source.set(Progress::new(0.3));
    drop(sub);
    assert_eq!(source.subscriber_count(), 0);
    source.set(Progress::new(0.6));
    assert_eq!(hits.get(), 1);
}

#[test]
fn callbacks_can_read_and_unsubscribe_during_notification() {
    let source = ProgressSource::new();
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    let reader = source.clone();
    let own = Rc::clone(&slot);
    let read = Rc::new(Cell::new(0.0));
    let r = Rc::clone(&read);
    let sub = source.subscribe(move |p| {
        r.set(reader.get().get());
        assert_eq!(reader.get(), p);
        own.borrow_mut().take();
    });
    *slot.borrow_mut() = Some(sub);

    source.set(Progress::new(0.7));
    assert_eq!(read.get(), 0.7);
    assert_eq!(source.subscriber_count(), 0);
}

#[test]
fn subscription_outliving_source_is_harmless() {
    let sub = {
        let source = ProgressSource::new();
        source.subscribe(|_| {})
    };
    drop(sub);
}
