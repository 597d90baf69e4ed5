//! A mounted scene.
//!
//! [`Engine::mount`] takes everything a scene needs from the page (renderer, host listeners, the
//! progress subscription and an overlay presenter) and holds it until the engine is dropped. The
//! embedder calls [`Engine::frame`], [`Engine::resize`] and [`Engine::pointer_moved`] when the
//! host fires the matching listener.
//!
//! Section transitions follow every published progress value as it arrives. Rendering, focus
//! and the camera follow the once-per-frame sample.

use std::{
    cell::{Cell, Ref, RefCell},
    rc::Rc,
};

use crate::{
    choreo::{
        sections::{SectionIntent, SectionRecord, SectionStateMachine},
        window::WindowSet,
    },
    foundation::core::Progress,
    foundation::error::ReelResult,
    overlay::{OverlayEvent, OverlayPresenter},
    render::{
        backend::Renderer,
        driver::{FrameClock, RenderLoop, TickOutcome},
    },
    scene::model::SceneConfig,
    scroll::{
        host::{Host, ListenerKind, Listeners},
        source::{ProgressSource, Subscription},
    },
};

const LISTENER_KINDS: [ListenerKind; 3] = [
    ListenerKind::AnimationFrame,
    ListenerKind::Resize,
    ListenerKind::PointerMove,
];

/// Section state and the presenter it reports to, shared with the progress subscription.
struct Overlay<P> {
    windows: WindowSet,
    records: Vec<SectionRecord>,
    sections: SectionStateMachine,
    presenter: P,
}

impl<P: OverlayPresenter> Overlay<P> {
    fn observe(&mut self, progress: Progress) {
        let intents = self.sections.observe(self.windows.locate(progress));
        // One event per change: an exit followed by an enter is reported as the enter.
        let event = match intents.last() {
            None => return,
            Some(SectionIntent::Enter { index }) => {
                OverlayEvent::transition(Some(*index), self.records.get(*index).cloned())
            }
            Some(SectionIntent::Exit { .. }) => OverlayEvent::transition(None, None),
        };
        self.presenter.present(&event);
    }
}

pub struct Engine<R: Renderer = Box<dyn Renderer>, P: OverlayPresenter = Box<dyn OverlayPresenter>>
{
    render: RenderLoop,
    renderer: R,
    overlay: Rc<RefCell<Overlay<P>>>,
    latest: Rc<Cell<Progress>>,
    last_outcome: Option<TickOutcome>,
    frames: u64,
    // Fields drop in order: the subscription goes before the host listeners.
    _subscription: Subscription,
    _listeners: Listeners,
}

impl<R: Renderer, P: OverlayPresenter + 'static> Engine<R, P> {
    /// Validate and build `config`, then take the host listeners and the progress subscription.
    ///
    /// Nothing is left registered if any step fails.
    #[tracing::instrument(skip_all, fields(scene = %config.name))]
    pub fn mount(
        config: &SceneConfig,
        renderer: R,
        host: Rc<dyn Host>,
        source: &ProgressSource,
        presenter: P,
    ) -> ReelResult<Self> {
        let render = config.render_loop()?;
        let listeners = Listeners::acquire(host, &LISTENER_KINDS)?;

        let overlay = Rc::new(RefCell::new(Overlay {
            windows: config.window_set()?,
            records: config.records().cloned().collect(),
            sections: SectionStateMachine::new(config.section_count()),
            presenter,
        }));
        let latest = Rc::new(Cell::new(source.get()));
        let subscription = {
            let latest = Rc::clone(&latest);
            let overlay = Rc::clone(&overlay);
            source.subscribe(move |p| {
                latest.set(p);
                // A presenter that publishes progress from inside present() is caught up by
                // the next frame.
                if let Ok(mut o) = overlay.try_borrow_mut() {
                    o.observe(p);
                }
            })
        };

        tracing::debug!(
            objects = render.object_count(),
            listeners = listeners.len(),
            "engine mounted"
        );
        Ok(Self {
            render,
            renderer,
            overlay,
            latest,
            last_outcome: None,
            frames: 0,
            _subscription: subscription,
            _listeners: listeners,
        })
    }
}

impl<R: Renderer, P: OverlayPresenter> Engine<R, P> {
    /// One display frame.
    ///
    /// Progress is read once. The rendered frame and the focus event both come from that one
    /// sample.
    pub fn frame(&mut self, clock: FrameClock) -> TickOutcome {
        let progress = self.latest.get();
        let mut overlay = self.overlay.borrow_mut();
        // Catches the value present at mount, which no subscription callback reported.
        overlay.observe(progress);

        let outcome = self.render.tick(&mut self.renderer, progress, clock);
        let focus = self.render.choreographer().locate(progress).focus();
        overlay.presenter.present(&OverlayEvent::Focus { focus });
        overlay.presenter.advance(clock.delta);
        drop(overlay);

        if self.last_outcome != Some(outcome) {
            tracing::debug!(?outcome, progress = progress.get(), "frame outcome changed");
        }
        self.last_outcome = Some(outcome);
        self.frames += 1;
        outcome
    }

    /// Forward a new viewport size. Progress and section state are untouched.
    pub fn resize(&mut self, width: f64, height: f64) -> TickOutcome {
        self.render.resize(&mut self.renderer, width, height)
    }

    pub fn pointer_moved(&mut self, x: f64) {
        self.render.pointer_moved(x);
    }

    /// Progress as last published by the source.
    pub fn progress(&self) -> Progress {
        self.latest.get()
    }

    pub fn active_section(&self) -> Option<usize> {
        self.overlay.borrow().sections.active()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_degraded(&self) -> bool {
        self.render.is_degraded()
    }

    pub fn render_loop(&self) -> &RenderLoop {
        &self.render
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Panics if called from inside the presenter's own `present`.
    pub fn presenter(&self) -> Ref<'_, P> {
        Ref::map(self.overlay.borrow(), |o| &o.presenter)
    }
}

impl<R: Renderer, P: OverlayPresenter> Drop for Engine<R, P> {
    fn drop(&mut self) {
        if let Ok(mut o) = self.overlay.try_borrow_mut() {
            if o.sections.reset().is_some() {
                o.presenter.present(&OverlayEvent::transition(None, None));
            }
        }
        tracing::debug!(frames = self.frames, "engine unmounted");
    }
}

impl<R: Renderer, P: OverlayPresenter> std::fmt::Debug for Engine<R, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("progress", &self.latest.get())
            .field("active", &self.active_section())
            .field("frames", &self.frames)
            .field("degraded", &self.render.is_degraded())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/engine.rs"]
mod tests;
