//! The per-frame render loop.
//!
//! One [`RenderLoop::tick`] samples progress once, derives every choreographed value from that
//! sample and writes camera, transforms and material values into already-built objects. Objects
//! are created lazily on the first tick where the renderer is ready.

use crate::{
    choreo::choreographer::{ChoreoFrame, Choreographer},
    foundation::core::{DVec3, Progress, Transform3, Viewport},
    foundation::error::{ReelError, ReelResult},
    render::{
        backend::{ObjectHandle, Renderer},
        live::{GroupClock, LiveGroup, Visibility},
        params::{Animatable, ParamTable},
        ribbons::RibbonLayer,
    },
};

/// Wall-clock input for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameClock {
    /// Seconds since mount.
    pub elapsed: f64,
    /// Seconds since the previous tick.
    pub delta: f64,
}

impl FrameClock {
    /// Clock for frame `n` of a steady `fps` loop.
    pub fn nth(n: u64, fps: f64) -> Self {
        let delta = if fps > 0.0 { 1.0 / fps } else { 0.0 };
        Self {
            elapsed: n as f64 * delta,
            delta: if n == 0 { 0.0 } else { delta },
        }
    }

    fn sanitized_delta(self) -> f64 {
        if self.delta.is_finite() && self.delta > 0.0 {
            self.delta
        } else {
            0.0
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TickOutcome {
    Rendered,
    /// Renderer not ready; nothing was lost, the next tick retries.
    Skipped,
    /// A hard renderer error switched the loop to static. Later ticks do nothing.
    Degraded,
}

pub struct RenderLoop {
    choreo: Choreographer,
    visibility: Visibility,
    groups: Vec<LiveGroup>,
    clocks: Vec<GroupClock>,
    ribbons: Option<RibbonLayer>,
    handles: Vec<ObjectHandle>,
    object_count: usize,
    params: ParamTable,
    frame: Option<ChoreoFrame>,
    viewport: Option<Viewport>,
    viewport_dirty: bool,
    degraded: bool,
}

impl RenderLoop {
    pub fn new(choreo: Choreographer, visibility: Visibility, groups: Vec<LiveGroup>) -> Self {
        let object_count = groups.iter().map(|g| g.objects.len()).sum();
        Self {
            clocks: vec![GroupClock::default(); groups.len()],
            choreo,
            visibility,
            groups,
            ribbons: None,
            handles: Vec::with_capacity(object_count),
            object_count,
            params: ParamTable::new(),
            frame: None,
            viewport: None,
            viewport_dirty: false,
            degraded: false,
        }
    }

    pub fn with_ribbons(mut self, ribbons: RibbonLayer) -> Self {
        self.ribbons = Some(ribbons);
        self
    }

    pub fn choreographer(&self) -> &Choreographer {
        &self.choreo
    }

    pub fn groups(&self) -> &[LiveGroup] {
        &self.groups
    }

    pub fn ribbons(&self) -> Option<&RibbonLayer> {
        self.ribbons.as_ref()
    }

    /// Frame computed by the most recent tick.
    pub fn frame(&self) -> Option<&ChoreoFrame> {
        self.frame.as_ref()
    }

    pub fn params(&self) -> &ParamTable {
        &self.params
    }

    /// Handles created so far, in group then object order.
    pub fn handles(&self) -> &[ObjectHandle] {
        &self.handles
    }

    pub fn object_count(&self) -> usize {
        self.object_count
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Evaluate `progress` without touching the renderer or any clock.
    pub fn evaluate(&self, progress: Progress) -> ChoreoFrame {
        self.choreo.evaluate(progress)
    }

    pub fn tick(
        &mut self,
        renderer: &mut dyn Renderer,
        progress: Progress,
        clock: FrameClock,
    ) -> TickOutcome {
        if self.degraded {
            return TickOutcome::Degraded;
        }

        let reuse = self
            .frame
            .as_ref()
            .is_some_and(|f| f.progress.same_sample(progress));
        if !reuse {
            self.frame = Some(self.choreo.evaluate(progress));
        }
        let Some(frame) = self.frame.as_ref() else {
            return TickOutcome::Skipped;
        };

        let delta = clock.sanitized_delta();
        for (group, c) in self.groups.iter().zip(self.clocks.iter_mut()) {
            c.advance(group, group_focus(frame, group), delta);
        }
        if let Some(ribbons) = self.ribbons.as_mut() {
            ribbons.advance(delta);
        }

        if !renderer.is_ready() {
            tracing::debug!(progress = progress.get(), "renderer not ready, skipping frame");
            return TickOutcome::Skipped;
        }

        match self.render(renderer, clock.elapsed) {
            Ok(()) => TickOutcome::Rendered,
            Err(e) => self.fail(e),
        }
    }

    /// Forward a new render target size. Progress and section state are untouched.
    pub fn resize(&mut self, renderer: &mut dyn Renderer, width: f64, height: f64) -> TickOutcome {
        if self.degraded {
            return TickOutcome::Degraded;
        }
        let viewport = match Viewport::new(width, height) {
            Ok(v) => v,
            Err(e) => return self.fail(e),
        };
        self.viewport = Some(viewport);
        if let Some(ribbons) = self.ribbons.as_mut() {
            ribbons.resize(viewport);
        }
        if !renderer.is_ready() {
            self.viewport_dirty = true;
            return TickOutcome::Skipped;
        }
        match renderer.set_viewport(viewport) {
            Ok(()) => {
                self.viewport_dirty = false;
                TickOutcome::Rendered
            }
            Err(e) => {
                self.viewport_dirty = true;
                self.fail(e)
            }
        }
    }

    pub fn pointer_moved(&mut self, x: f64) {
        if let Some(ribbons) = self.ribbons.as_mut() {
            ribbons.pointer_moved(x);
        }
    }

    /// Stop driving the renderer. Used when the host cannot keep the loop alive.
    pub fn degrade(&mut self, reason: &str) {
        if !self.degraded {
            tracing::warn!(reason, "render loop degraded to static");
            self.degraded = true;
        }
    }

    fn fail(&mut self, e: ReelError) -> TickOutcome {
        if e.is_transient() {
            tracing::debug!(error = %e, "transient renderer error, retrying next tick");
            TickOutcome::Skipped
        } else {
            self.degrade(&e.to_string());
            TickOutcome::Degraded
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(have = self.handles.len(), want = self.object_count))]
    fn ensure_created(&mut self, renderer: &mut dyn Renderer) -> ReelResult<()> {
        let pending = self
            .groups
            .iter()
            .flat_map(|g| g.objects.iter())
            .skip(self.handles.len());
        for object in pending {
            let handle = renderer.create_object(&object.placed.desc)?;
            self.handles.push(handle);
        }
        if let Some(ribbons) = self.ribbons.as_mut() {
            ribbons.ensure_created(renderer)?;
        }
        Ok(())
    }

    fn render(&mut self, renderer: &mut dyn Renderer, elapsed: f64) -> ReelResult<()> {
        if self.handles.len() < self.object_count
            || self.ribbons.as_ref().is_some_and(|r| !r.is_created())
        {
            self.ensure_created(renderer)?;
        }
        if self.viewport_dirty
            && let Some(viewport) = self.viewport
        {
            renderer.set_viewport(viewport)?;
            self.viewport_dirty = false;
        }

        let frame = self
            .frame
            .as_ref()
            .ok_or_else(|| ReelError::evaluation("no frame evaluated before render"))?;
        renderer.set_camera(frame.camera)?;

        let root = Transform3 {
            rotation: frame.root_rotation,
            ..Transform3::default()
        };
        let mut handles = self.handles.iter().copied();
        for (group, clock) in self.groups.iter().zip(&self.clocks) {
            let focus = group_focus(frame, group);
            let visible = match (self.visibility, group.section) {
                (Visibility::Always, _) | (_, None) => true,
                (Visibility::ActiveOnly, Some(s)) => frame.active.index == Some(s),
            };
            let layer_y = group
                .section
                .and_then(|s| frame.layer_y.get(s).copied())
                .unwrap_or(0.0);
            let mut motion = clock.spin;
            if let Some(w) = group.wobble {
                motion += w.rotation(elapsed, focus);
            }
            let group_xf = root
                .compose(&Transform3::at(DVec3::new(0.0, layer_y, 0.0)))
                .compose(&group.anchor)
                .compose(&Transform3 {
                    rotation: motion,
                    ..Transform3::default()
                });
            let role_clocks = clock.role_clocks(elapsed);

            for (object, handle) in group.objects.iter().zip(handles.by_ref()) {
                let (local, anim) = object.role.apply(&object.placed.transform, focus, &role_clocks);
                renderer.set_transform(handle, group_xf.compose(&local))?;
                self.params
                    .set(handle, if visible { anim } else { Animatable::HIDDEN });
            }
        }
        self.params.flush(renderer)?;

        if let Some(ribbons) = self.ribbons.as_ref() {
            ribbons.draw(renderer)?;
        }
        Ok(())
    }
}

fn group_focus(frame: &ChoreoFrame, group: &LiveGroup) -> f64 {
    group.section.map_or(0.0, |s| frame.section_focus(s))
}

#[cfg(test)]
#[path = "../../tests/unit/render/driver.rs"]
mod tests;
