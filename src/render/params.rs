//! Per-frame animatable state, owned separately from the geometry it decorates.
//!
//! Topology lives in the renderer and is built once. The values here are rewritten every tick
//! and flushed with [`ParamTable::flush`].

use std::collections::BTreeMap;

use crate::{
    foundation::error::ReelResult,
    render::backend::{MaterialParam, ObjectHandle, Renderer},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Animatable {
    pub opacity: f64,
    pub emissive_intensity: f64,
    /// Multiplier on the object's rest scale.
    pub scale: f64,
    /// Only point clouds carry a size.
    pub point_size: Option<f64>,
}

impl Default for Animatable {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            emissive_intensity: 0.0,
            scale: 1.0,
            point_size: None,
        }
    }
}

impl Animatable {
    /// Fully transparent and dark; what a hidden object is flushed as.
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        emissive_intensity: 0.0,
        scale: 1.0,
        point_size: None,
    };

    pub fn faded(opacity: f64) -> Self {
        Self {
            opacity,
            ..Self::default()
        }
    }

    pub fn lit(opacity: f64, emissive_intensity: f64) -> Self {
        Self {
            opacity,
            emissive_intensity,
            ..Self::default()
        }
    }
}

/// Handle-keyed table of animatable values.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ParamTable {
    entries: BTreeMap<ObjectHandle, Animatable>,
}

impl ParamTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, handle: ObjectHandle, value: Animatable) {
        self.entries.insert(handle, value);
    }

    pub fn get(&self, handle: ObjectHandle) -> Option<&Animatable> {
        self.entries.get(&handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectHandle, &Animatable)> {
        self.entries.iter().map(|(h, a)| (*h, a))
    }

    /// Write material values for every entry. Scale travels with the transform.
    pub fn flush(&self, renderer: &mut dyn Renderer) -> ReelResult<()> {
        for (&handle, a) in &self.entries {
            renderer.set_material_param(handle, MaterialParam::Opacity, a.opacity)?;
            renderer.set_material_param(
                handle,
                MaterialParam::EmissiveIntensity,
                a.emissive_intensity,
            )?;
            if let Some(size) = a.point_size {
                renderer.set_material_param(handle, MaterialParam::PointSize, size)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/params.rs"]
mod tests;
