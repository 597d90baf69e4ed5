use std::collections::BTreeMap;

use crate::{
    foundation::core::{BezPath, CameraPose, Transform3, Viewport},
    foundation::error::{ReelError, ReelResult},
    geometry::GeometryDesc,
};

/// Opaque reference to an object the renderer has built.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ObjectHandle(pub u32);

/// Material parameters the engine is allowed to animate.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MaterialParam {
    Opacity,
    EmissiveIntensity,
    PointSize,
}

impl MaterialParam {
    pub fn name(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::EmissiveIntensity => "emissive_intensity",
            Self::PointSize => "point_size",
        }
    }
}

/// What the engine needs from a graphics layer: place objects, tune materials, aim the camera.
///
/// Implementations own tessellation, shaders and draw submission. A renderer whose context is
/// not up yet reports `is_ready() == false` or returns [`ReelError::NotReady`]; the render loop
/// skips that frame and tries again.
pub trait Renderer {
    fn is_ready(&self) -> bool;

    fn create_object(&mut self, desc: &GeometryDesc) -> ReelResult<ObjectHandle>;

    fn set_transform(&mut self, handle: ObjectHandle, transform: Transform3) -> ReelResult<()>;

    fn set_material_param(
        &mut self,
        handle: ObjectHandle,
        param: MaterialParam,
        value: f64,
    ) -> ReelResult<()>;

    fn set_camera(&mut self, pose: CameraPose) -> ReelResult<()>;

    fn set_viewport(&mut self, viewport: Viewport) -> ReelResult<()>;

    /// Replace the outline of a [`GeometryDesc::Path2D`] object. Element count stays fixed.
    fn set_path(&mut self, handle: ObjectHandle, path: &BezPath) -> ReelResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn create_object(&mut self, desc: &GeometryDesc) -> ReelResult<ObjectHandle> {
        (**self).create_object(desc)
    }

    fn set_transform(&mut self, handle: ObjectHandle, transform: Transform3) -> ReelResult<()> {
        (**self).set_transform(handle, transform)
    }

    fn set_material_param(
        &mut self,
        handle: ObjectHandle,
        param: MaterialParam,
        value: f64,
    ) -> ReelResult<()> {
        (**self).set_material_param(handle, param, value)
    }

    fn set_camera(&mut self, pose: CameraPose) -> ReelResult<()> {
        (**self).set_camera(pose)
    }

    fn set_viewport(&mut self, viewport: Viewport) -> ReelResult<()> {
        (**self).set_viewport(viewport)
    }

    fn set_path(&mut self, handle: ObjectHandle, path: &BezPath) -> ReelResult<()> {
        (**self).set_path(handle, path)
    }
}

/// Latest state of one object inside a [`RecordingRenderer`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RecordedObject {
    pub desc: GeometryDesc,
    pub transform: Transform3,
    pub params: BTreeMap<MaterialParam, f64>,
}

impl RecordedObject {
    pub fn param(&self, param: MaterialParam) -> Option<f64> {
        self.params.get(&param).copied()
    }
}

/// Headless renderer that keeps the last value written for every object.
///
/// Used by the CLI, the demo and tests. It can be held "not ready" or told to fail its next
/// write, which is how the render loop's skip and degrade paths are exercised.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    not_ready: bool,
    fail_next: Option<String>,
    objects: Vec<RecordedObject>,
    camera: Option<CameraPose>,
    viewport: Option<Viewport>,
    writes: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer whose context has not come up yet.
    pub fn pending() -> Self {
        Self {
            not_ready: true,
            ..Self::default()
        }
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.not_ready = !ready;
    }

    /// Make the next call that touches the renderer fail with a hard error.
    pub fn fail_next(&mut self, msg: impl Into<String>) {
        self.fail_next = Some(msg.into());
    }

    pub fn objects(&self) -> &[RecordedObject] {
        &self.objects
    }

    pub fn object(&self, handle: ObjectHandle) -> Option<&RecordedObject> {
        self.objects.get(handle.0 as usize)
    }

    pub fn camera(&self) -> Option<CameraPose> {
        self.camera
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Number of successful state writes, creation excluded.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    fn check(&mut self) -> ReelResult<()> {
        if let Some(msg) = self.fail_next.take() {
            return Err(ReelError::renderer(msg));
        }
        if self.not_ready {
            return Err(ReelError::not_ready("recording renderer held pending"));
        }
        Ok(())
    }

    fn slot(&mut self, handle: ObjectHandle) -> ReelResult<&mut RecordedObject> {
        self.check()?;
        self.objects
            .get_mut(handle.0 as usize)
            .ok_or_else(|| ReelError::renderer(format!("unknown object handle {}", handle.0)))
    }
}

impl Renderer for RecordingRenderer {
    fn is_ready(&self) -> bool {
        !self.not_ready
    }

    fn create_object(&mut self, desc: &GeometryDesc) -> ReelResult<ObjectHandle> {
        self.check()?;
        let id = u32::try_from(self.objects.len())
            .map_err(|_| ReelError::renderer("object table is full"))?;
        self.objects.push(RecordedObject {
            desc: desc.clone(),
            transform: Transform3::default(),
            params: BTreeMap::new(),
        });
        Ok(ObjectHandle(id))
    }

    fn set_transform(&mut self, handle: ObjectHandle, transform: Transform3) -> ReelResult<()> {
        self.slot(handle)?.transform = transform;
        self.writes += 1;
        Ok(())
    }

    fn set_material_param(
        &mut self,
        handle: ObjectHandle,
        param: MaterialParam,
        value: f64,
    ) -> ReelResult<()> {
        if !value.is_finite() {
            return Err(ReelError::renderer(format!(
                "{} must be finite, got {value}",
                param.name()
            )));
        }
        self.slot(handle)?.params.insert(param, value);
        self.writes += 1;
        Ok(())
    }

    fn set_camera(&mut self, pose: CameraPose) -> ReelResult<()> {
        self.check()?;
        self.camera = Some(pose);
        self.writes += 1;
        Ok(())
    }

    fn set_viewport(&mut self, viewport: Viewport) -> ReelResult<()> {
        self.check()?;
        self.viewport = Some(viewport);
        self.writes += 1;
        Ok(())
    }

    fn set_path(&mut self, handle: ObjectHandle, path: &BezPath) -> ReelResult<()> {
        let slot = self.slot(handle)?;
        match &mut slot.desc {
            GeometryDesc::Path2D { path: current }
                if current.elements().len() == path.elements().len() =>
            {
                *current = path.clone();
            }
            GeometryDesc::Path2D { .. } => {
                return Err(ReelError::renderer("path topology changed after creation"));
            }
            other => {
                return Err(ReelError::renderer(format!(
                    "object {} is {}, not a 2D path",
                    handle.0,
                    other.kind()
                )));
            }
        }
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
