use crate::{
    foundation::core::{Point, Viewport},
    foundation::error::ReelResult,
    geometry::{
        GeometryDesc,
        ribbon::{GradientStop, RIBBON_TIME_PER_FRAME, RibbonParams, gradient_angle, gradient_stops, ribbon_alpha},
    },
    render::{
        backend::{MaterialParam, ObjectHandle, Renderer},
        live::REFERENCE_FPS,
    },
};

/// Hero background: screen-space ribbons redrawn every tick around the viewport center.
#[derive(Clone, Debug)]
pub struct RibbonLayer {
    params: RibbonParams,
    time: f64,
    center: Point,
    width: f64,
    pointer_x: f64,
    handles: Vec<ObjectHandle>,
}

impl RibbonLayer {
    pub fn new(params: RibbonParams) -> ReelResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            time: 0.0,
            center: Point::ZERO,
            width: 0.0,
            pointer_x: 0.0,
            handles: Vec::new(),
        })
    }

    pub fn params(&self) -> &RibbonParams {
        &self.params
    }

    /// Ribbon phase, in frames scaled by [`RIBBON_TIME_PER_FRAME`].
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn advance(&mut self, delta: f64) {
        self.time += delta * REFERENCE_FPS * RIBBON_TIME_PER_FRAME;
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
        self.width = viewport.width;
    }

    pub fn pointer_moved(&mut self, x: f64) {
        self.pointer_x = x;
    }

    /// Stroke gradient angle in degrees.
    pub fn gradient_angle(&self) -> f64 {
        gradient_angle(self.pointer_x, self.width)
    }

    pub fn gradient(&self, ribbon: u32) -> [GradientStop; 5] {
        gradient_stops(ribbon, self.time)
    }

    /// Create any ribbon objects the renderer does not have yet.
    pub fn ensure_created(&mut self, renderer: &mut dyn Renderer) -> ReelResult<()> {
        if self.is_created() {
            return Ok(());
        }
        let paths = self.params.paths(self.center, self.time);
        for path in paths.into_iter().skip(self.handles.len()) {
            let handle = renderer.create_object(&GeometryDesc::Path2D { path })?;
            self.handles.push(handle);
        }
        Ok(())
    }

    pub fn is_created(&self) -> bool {
        self.handles.len() >= self.params.count as usize
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) -> ReelResult<()> {
        let paths = self.params.paths(self.center, self.time);
        for ((i, path), &handle) in (0u32..).zip(paths.iter()).zip(&self.handles) {
            renderer.set_path(handle, path)?;
            renderer.set_material_param(handle, MaterialParam::Opacity, ribbon_alpha(i))?;
        }
        Ok(())
    }

    pub fn handles(&self) -> &[ObjectHandle] {
        &self.handles
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/ribbons.rs"]
mod tests;
