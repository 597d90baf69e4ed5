//! Renderer seam and the per-frame driver that feeds it.

pub mod backend;
pub mod driver;
pub mod live;
pub mod params;
pub mod ribbons;
