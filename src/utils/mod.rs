//! Utility functions shared across the engine

pub mod logging;
pub mod math;

pub use math::round_half_up;
