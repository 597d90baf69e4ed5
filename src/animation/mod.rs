pub mod ease;
pub mod focus;
pub mod keyframes;
pub mod shimmer;
