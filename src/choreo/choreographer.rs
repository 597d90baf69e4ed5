use crate::{
    choreo::camera::CameraChoreographer,
    choreo::motion::SceneMotion,
    choreo::readout::{ChromeTimelines, Readout},
    choreo::window::{ActiveState, WindowSet},
    foundation::core::{CameraPose, DVec3, Progress},
};

/// Everything derived from one progress sample.
///
/// All fields come from the same `progress`; nothing here depends on what was sampled before.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ChoreoFrame {
    pub progress: Progress,
    pub active: ActiveState,
    pub focus: f64,
    pub camera: CameraPose,
    pub root_rotation: DVec3,
    /// Vertical offset of each section's layer.
    pub layer_y: Vec<f64>,
    pub readout: Readout,
}

impl ChoreoFrame {
    /// Attention as seen by section `index`.
    pub fn section_focus(&self, index: usize) -> f64 {
        self.active.focus_for(index)
    }
}

/// Pure mapping from progress to [`ChoreoFrame`].
#[derive(Clone, Debug)]
pub struct Choreographer {
    windows: WindowSet,
    camera: CameraChoreographer,
    motion: SceneMotion,
    chrome: ChromeTimelines,
}

impl Choreographer {
    pub fn new(
        windows: WindowSet,
        camera: CameraChoreographer,
        motion: SceneMotion,
        chrome: ChromeTimelines,
    ) -> Self {
        Self {
            windows,
            camera,
            motion,
            chrome,
        }
    }

    pub fn windows(&self) -> &WindowSet {
        &self.windows
    }

    pub fn section_count(&self) -> usize {
        self.windows.len()
    }

    pub fn locate(&self, progress: Progress) -> ActiveState {
        self.windows.locate(progress)
    }

    pub fn evaluate(&self, progress: Progress) -> ChoreoFrame {
        let active = self.windows.locate(progress);
        let n = self.windows.len();
        ChoreoFrame {
            progress,
            active,
            focus: active.focus(),
            camera: self.camera.pose(progress),
            root_rotation: self.motion.root_rotation(progress),
            layer_y: (0..n).map(|i| self.motion.layer_y(i, n, progress)).collect(),
            readout: self.chrome.sample(progress),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreo/choreographer.rs"]
mod tests;
