use crate::{
    animation::keyframes::{Keyframe, Timeline},
    choreo::window::WindowSet,
    foundation::core::{CameraPose, DVec3, Progress},
    foundation::error::{ReelError, ReelResult},
};

/// One camera stop: where the camera sits and which height it looks at.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraKeyframe {
    pub at: f64,
    pub position: DVec3,
    pub look_at_y: f64,
}

/// Parameters for stops derived from section windows.
///
/// The camera holds an overview until the first window opens, dollies from `far_z` to `near_z`
/// toward each section's layer while its window is active, pulls back out to `far_z` at the next
/// section's height across the gap, and returns to `far_z` at the very end.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DerivedCamera {
    pub far_z: f64,
    pub near_z: f64,
    #[serde(default)]
    pub overview_y: f64,
    /// Target height per section, same length as the window set. Scene configs may leave it empty
    /// to aim at the settled layer heights.
    #[serde(default)]
    pub layer_y: Vec<f64>,
}

impl DerivedCamera {
    pub fn stops(&self, windows: &WindowSet) -> ReelResult<Vec<CameraKeyframe>> {
        let ws = windows.as_slice();
        if self.layer_y.len() != ws.len() {
            return Err(ReelError::config(format!(
                "derived camera has {} layer heights for {} windows",
                self.layer_y.len(),
                ws.len()
            )));
        }
        if !(self.far_z.is_finite() && self.near_z.is_finite()) {
            return Err(ReelError::config("derived camera distances must be finite"));
        }

        let stop = |at: f64, y: f64, z: f64| CameraKeyframe {
            at,
            position: DVec3::new(0.0, y, z),
            look_at_y: y,
        };

        let mut out = vec![stop(0.0, self.overview_y, self.far_z)];
        let push = |k: CameraKeyframe, out: &mut Vec<CameraKeyframe>| {
            // Shared boundaries collapse into the stop already present.
            if out.last().is_none_or(|last| k.at > last.at) {
                out.push(k);
            }
        };

        push(stop(ws[0].start(), self.overview_y, self.far_z), &mut out);
        for (i, w) in ws.iter().enumerate() {
            push(stop(w.end(), self.layer_y[i], self.near_z), &mut out);
            if let Some(next) = ws.get(i + 1) {
                push(stop(next.start(), self.layer_y[i + 1], self.far_z), &mut out);
            }
        }
        let last_y = self.layer_y[ws.len() - 1];
        push(stop(1.0, last_y, self.far_z), &mut out);
        Ok(out)
    }
}

/// Camera pose as a pure function of progress.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraChoreographer {
    position: Timeline<DVec3>,
    look_at_y: Timeline<f64>,
}

impl CameraChoreographer {
    pub fn new(keys: &[CameraKeyframe]) -> ReelResult<Self> {
        if keys
            .iter()
            .any(|k| !(k.position.is_finite() && k.look_at_y.is_finite()))
        {
            return Err(ReelError::config("camera keyframe values must be finite"));
        }
        let position = Timeline::new(
            keys.iter()
                .map(|k| Keyframe::new(k.at, k.position))
                .collect(),
        )?;
        let look_at_y = Timeline::new(
            keys.iter()
                .map(|k| Keyframe::new(k.at, k.look_at_y))
                .collect(),
        )?;
        Ok(Self {
            position,
            look_at_y,
        })
    }

    pub fn derived(windows: &WindowSet, params: &DerivedCamera) -> ReelResult<Self> {
        Self::new(&params.stops(windows)?)
    }

    /// Fixed pose for scenes without a scroll-driven camera.
    pub fn fixed(position: DVec3) -> Self {
        Self {
            position: Timeline::constant(position),
            look_at_y: Timeline::constant(0.0),
        }
    }

    pub fn pose(&self, progress: Progress) -> CameraPose {
        let position = self.position.sample(progress);
        let look_at_y = self.look_at_y.sample(progress);
        CameraPose {
            position,
            look_at: DVec3::new(0.0, look_at_y, 0.0),
        }
    }

    pub fn stop_count(&self) -> usize {
        self.position.keys().len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreo/camera.rs"]
mod tests;
