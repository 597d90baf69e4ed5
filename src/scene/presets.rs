//! Built-in scenes.

use std::f64::consts::PI;

use crate::{
    choreo::{
        camera::{CameraKeyframe, DerivedCamera},
        motion::{LayerSpread, ParallaxTilt},
        sections::{IllustrationKind, SectionRecord},
        window::SectionWindow,
    },
    foundation::core::DVec3,
    foundation::error::{ReelError, ReelResult},
    overlay::style::OverlayMotion,
    render::live::Visibility,
    scene::model::{CameraConfig, SceneConfig, SectionConfig},
};

pub const NAMES: [&str; 2] = ["illustration_block", "data_foundry"];

pub fn by_name(name: &str) -> ReelResult<SceneConfig> {
    match name {
        "illustration_block" => illustration_block(),
        "data_foundry" => data_foundry(),
        other => Err(ReelError::config(format!(
            "unknown preset '{other}' (expected one of: {})",
            NAMES.join(", ")
        ))),
    }
}

fn section(
    (start, end): (f64, f64),
    title: &str,
    description: &str,
    illustration: IllustrationKind,
) -> ReelResult<SectionConfig> {
    Ok(SectionConfig {
        window: SectionWindow::new(start, end)?,
        record: SectionRecord {
            title: title.to_string(),
            description: description.to_string(),
            tilt: false,
            illustration,
            highlight: None,
        },
    })
}

/// Four narrative sections, one illustration each, shown one at a time.
pub fn illustration_block() -> ReelResult<SceneConfig> {
    let mut sections = vec![
        section(
            (0.1, 0.3),
            "Data Integration",
            "Seamlessly unify data streams from multiple enterprise systems into a cohesive, \
             real-time analytics foundation.",
            IllustrationKind::DataIntegration,
        )?,
        section(
            (0.3, 0.5),
            "Operational Monitoring",
            "Advanced real-time tracking and intelligent visualization of critical operational \
             metrics and performance indicators.",
            IllustrationKind::OperationalMonitoring,
        )?,
        section(
            (0.5, 0.7),
            "Predictive Intelligence",
            "Harness the power of advanced machine learning algorithms to forecast trends and \
             anticipate market opportunities.",
            IllustrationKind::PredictiveIntelligence,
        )?,
        section(
            (0.7, 0.9),
            "Decision Making",
            "Transform complex data insights into strategic, actionable decisions with our \
             intelligent recommendation engine.",
            IllustrationKind::DecisionMaking,
        )?,
    ];
    sections[0].record.tilt = true;

    // Each illustration has its own framing distance; dolly between them.
    let keys = [(0.2, 11.0), (0.4, 10.0), (0.6, 12.0), (0.8, 10.0)]
        .into_iter()
        .map(|(at, z)| CameraKeyframe {
            at,
            position: DVec3::new(0.0, 0.0, z),
            look_at_y: 0.0,
        })
        .collect();

    Ok(SceneConfig {
        name: "illustration_block".into(),
        scroll_height_vh: 400.0,
        visibility: Visibility::ActiveOnly,
        sections,
        camera: CameraConfig::Explicit { keys },
        parallax: None,
        layer_spread: None,
        ribbons: None,
        overlay: OverlayMotion::NARRATIVE,
        seed: 0x1111_0B10,
    })
}

/// Three stacked layers (sources, funnel, platform) that spread apart and are visited in turn.
pub fn data_foundry() -> ReelResult<SceneConfig> {
    let mut sections = vec![
        section(
            (0.25, 0.4),
            "Your Operational Systems",
            "Connects to multiple enterprise systems including 3D, IBM, SAP, Kafka, Oracle, \
             Osisoft, Hadoop, Salesforce.",
            IllustrationKind::SourceNodes,
        )?,
        section(
            (0.45, 0.6),
            "Data Foundry",
            "The core integration layer that funnels, processes, and unifies data from various \
             sources.",
            IllustrationKind::Funnel,
        )?,
        section(
            (0.65, 0.8),
            "Your Data Platform",
            "Powers your data platform with AWS, Azure, Snowflake, Google Cloud support for \
             advanced analytics.",
            IllustrationKind::PlatformGrids,
        )?,
    ];
    for (s, badge) in sections
        .iter_mut()
        .zip(["Source Integration", "Data Funnel", "Unified Platform"])
    {
        s.record.highlight = Some(badge.to_string());
    }

    Ok(SceneConfig {
        name: "data_foundry".into(),
        scroll_height_vh: 500.0,
        visibility: Visibility::Always,
        sections,
        camera: CameraConfig::Derived(DerivedCamera {
            far_z: 15.0,
            near_z: 8.0,
            overview_y: 0.0,
            layer_y: Vec::new(),
        }),
        parallax: Some(ParallaxTilt {
            from: DVec3::new(PI / 12.0, -PI / 8.0, 0.0),
            until: 0.2,
        }),
        layer_spread: Some(LayerSpread {
            initial_gap: 5.0,
            final_gap: 20.0,
            until: 0.2,
        }),
        ribbons: None,
        overlay: OverlayMotion::LAYER_INFO,
        seed: 0,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/presets.rs"]
mod tests;
