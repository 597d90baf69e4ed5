#![forbid(unsafe_code)]

//! `scrollreel` turns a normalized scroll position into a choreographed 3D scene.
//!
//! A [`SceneConfig`] lists section windows over progress `[0, 1]`, one record per section and a
//! camera path. From it the crate derives, for any progress sample, the active section, its focus
//! ramp, the camera pose and the scene chrome ([`Choreographer::evaluate`]). The [`RenderLoop`]
//! applies that state to procedurally generated geometry through the [`Renderer`] trait, and the
//! [`Engine`] ties the loop to a [`ProgressSource`], host listeners and an overlay presenter for
//! the lifetime of one mount.
//!
//! Everything up to the renderer calls is a pure function of progress plus a seed.

pub mod animation;
pub mod choreo;
pub mod foundation;
pub mod geometry;
pub mod overlay;
pub mod render;
pub mod scene;
pub mod scroll;

pub use animation::{ease::Ease, focus::focus, keyframes::Timeline};
pub use choreo::{
    camera::{CameraChoreographer, CameraKeyframe, DerivedCamera},
    choreographer::{ChoreoFrame, Choreographer},
    sections::{IllustrationKind, SectionIntent, SectionRecord, SectionStateMachine},
    window::{ActiveState, SectionWindow, WindowSet},
};
pub use foundation::{
    core::{CameraPose, DVec3, Progress, Transform3, Viewport},
    error::{ReelError, ReelResult},
};
pub use geometry::GeometryDesc;
pub use overlay::{EventLog, OverlayEvent, OverlayPresenter, SlotPresenter};
pub use render::{
    backend::{MaterialParam, ObjectHandle, RecordingRenderer, Renderer},
    driver::{FrameClock, RenderLoop, TickOutcome},
    live::Visibility,
};
pub use scene::{
    engine::Engine,
    fingerprint::{FrameFingerprint, fingerprint_frame},
    model::{CameraConfig, SceneConfig, SectionConfig},
    sweep::{SweepSample, sweep},
};
pub use scroll::{
    host::{Host, ListenerKind, Listeners, RecordingHost},
    source::{ProgressSource, ScrollMetrics, Subscription},
};
