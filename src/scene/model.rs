use std::path::Path;

use anyhow::Context as _;

use crate::{
    choreo::{
        camera::{CameraChoreographer, CameraKeyframe, DerivedCamera},
        choreographer::Choreographer,
        motion::{LayerSpread, ParallaxTilt, SceneMotion},
        readout::ChromeTimelines,
        sections::{IllustrationKind, SectionRecord},
        window::{SectionWindow, WindowSet},
    },
    foundation::core::DVec3,
    foundation::error::{ReelError, ReelResult},
    geometry::ribbon::RibbonParams,
    overlay::style::OverlayMotion,
    render::{
        driver::RenderLoop,
        live::{LiveGroup, Visibility},
        ribbons::RibbonLayer,
    },
    scene::illustrations,
};

/// One window of the scroll container and the content shown while it is active.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionConfig {
    pub window: SectionWindow,
    pub record: SectionRecord,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CameraConfig {
    Fixed { position: DVec3 },
    Explicit { keys: Vec<CameraKeyframe> },
    /// Approach, linger and depart stops derived from the section windows.
    Derived(DerivedCamera),
}

/// A complete scroll scene, loadable from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    pub name: String,
    /// Scroll container height as a percentage of the viewport height.
    #[serde(default = "default_scroll_height")]
    pub scroll_height_vh: f64,
    #[serde(default)]
    pub visibility: Visibility,
    pub sections: Vec<SectionConfig>,
    pub camera: CameraConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallax: Option<ParallaxTilt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_spread: Option<LayerSpread>,
    /// Hero ribbons drawn behind the scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ribbons: Option<RibbonParams>,
    #[serde(default = "default_overlay")]
    pub overlay: OverlayMotion,
    /// Seed for every piece of layout jitter in the illustrations.
    #[serde(default)]
    pub seed: u64,
}

fn default_scroll_height() -> f64 {
    400.0
}

fn default_overlay() -> OverlayMotion {
    OverlayMotion::NARRATIVE
}

impl SceneConfig {
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> ReelResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read scene '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> ReelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn records(&self) -> impl Iterator<Item = &SectionRecord> {
        self.sections.iter().map(|s| &s.record)
    }

    pub fn record(&self, index: usize) -> Option<&SectionRecord> {
        self.sections.get(index).map(|s| &s.record)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Fail-fast check of everything a scene needs before it may start.
    pub fn validate(&self) -> ReelResult<()> {
        self.choreographer()?;
        if let Some(r) = &self.ribbons {
            r.validate()?;
        }
        self.overlay.validate()?;
        Ok(())
    }

    pub fn window_set(&self) -> ReelResult<WindowSet> {
        WindowSet::new(self.sections.iter().map(|s| s.window).collect())
    }

    fn check_basics(&self) -> ReelResult<()> {
        if self.name.trim().is_empty() {
            return Err(ReelError::config("scene name must be non-empty"));
        }
        if !(self.scroll_height_vh.is_finite() && self.scroll_height_vh > 100.0) {
            return Err(ReelError::config(format!(
                "scroll height {}vh must exceed the viewport (100vh)",
                self.scroll_height_vh
            )));
        }
        for (i, s) in self.sections.iter().enumerate() {
            s.record.validate().map_err(|e| match e {
                ReelError::Config(msg) => ReelError::config(format!("section {i}: {msg}")),
                other => other,
            })?;
        }
        Ok(())
    }

    fn camera_rig(&self, windows: &WindowSet) -> ReelResult<CameraChoreographer> {
        match &self.camera {
            CameraConfig::Fixed { position } => {
                if !position.is_finite() {
                    return Err(ReelError::config("camera position must be finite"));
                }
                Ok(CameraChoreographer::fixed(*position))
            }
            CameraConfig::Explicit { keys } => CameraChoreographer::new(keys),
            CameraConfig::Derived(d) if d.layer_y.is_empty() => {
                let n = windows.len();
                let layer_y = (0..n)
                    .map(|i| {
                        self.layer_spread
                            .as_ref()
                            .map_or(d.overview_y, |s| s.final_y(i, n))
                    })
                    .collect();
                CameraChoreographer::derived(
                    windows,
                    &DerivedCamera {
                        layer_y,
                        ..d.clone()
                    },
                )
            }
            CameraConfig::Derived(d) => CameraChoreographer::derived(windows, d),
        }
    }

    /// Pure progress-to-state mapping for this scene.
    pub fn choreographer(&self) -> ReelResult<Choreographer> {
        self.check_basics()?;
        let windows = self.window_set()?;
        let camera = self.camera_rig(&windows)?;
        let motion = SceneMotion::new(self.parallax.as_ref(), self.layer_spread.as_ref())?;
        Ok(Choreographer::new(
            windows,
            camera,
            motion,
            ChromeTimelines::standard()?,
        ))
    }

    /// Every live group: one set per section plus any scene-wide decoration.
    pub fn groups(&self) -> ReelResult<Vec<LiveGroup>> {
        let mut groups = Vec::new();
        for (i, s) in self.sections.iter().enumerate() {
            groups.extend(illustrations::illustration(&s.record, i, self.seed)?);
        }
        if self
            .records()
            .any(|r| r.illustration == IllustrationKind::Funnel)
        {
            groups.push(illustrations::funnel_decor()?);
        }
        Ok(groups)
    }

    /// Build the choreography, the geometry and the loop that drives them.
    #[tracing::instrument(skip(self), fields(scene = %self.name, sections = self.sections.len()))]
    pub fn render_loop(&self) -> ReelResult<RenderLoop> {
        self.validate()?;
        let choreo = self.choreographer()?;
        let groups = self.groups()?;
        let objects: usize = groups.iter().map(|g| g.objects.len()).sum();
        tracing::debug!(groups = groups.len(), objects, "scene built");

        let mut rl = RenderLoop::new(choreo, self.visibility, groups);
        if let Some(r) = &self.ribbons {
            rl = rl.with_ribbons(RibbonLayer::new(r.clone())?);
        }
        Ok(rl)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
