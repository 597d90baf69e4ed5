//! Scene configuration, built-in presets, illustration builders and the mounted engine.

pub mod engine;
pub mod fingerprint;
pub mod illustrations;
pub mod model;
pub mod presets;
pub mod sweep;
