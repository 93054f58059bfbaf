//! CLI library components for the crossing validator.

pub mod logging;
