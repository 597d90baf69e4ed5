pub mod camera;
pub mod choreographer;
pub mod motion;
pub mod readout;
pub mod sections;
pub mod window;
