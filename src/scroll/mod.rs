//! Inputs from the page: the progress publisher and scoped host listeners.

pub mod host;
pub mod source;
