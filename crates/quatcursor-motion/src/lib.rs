//! Orientation-to-pointer motion stages.
//!
//! Two pipelines share the math crate's primitives:
//!
//! - relative mode: [`tracker::DeltaTracker`] -> [`filter::MotionFilter`]
//!   -> [`accumulator::MotionAccumulator`], composed by
//!   [`pipeline::PointerPipeline`];
//! - absolute mode: [`mapper::TiltMapper`] / [`mapper::BoundedTiltMapper`]
//!   mapping each sample's roll/pitch straight to coordinates.
//!
//! Every tracked pointer owns its own stage triple; nothing here is
//! shared across streams.

pub mod accumulator;
pub mod filter;
pub mod mapper;
pub mod pipeline;
pub mod tracker;

pub use accumulator::{BoundsRect, MotionAccumulator};
pub use filter::MotionFilter;
pub use mapper::{BoundedTiltMapper, TiltMapper};
pub use pipeline::PointerPipeline;
pub use tracker::DeltaTracker;

use thiserror::Error;

/// Invalid construction parameters. Fatal to setup, never per-sample.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("smoothing alpha {0} outside (0, 1]")]
    SmoothingAlphaOutOfRange(f32),
    #[error("deadzone threshold {0} is negative")]
    NegativeDeadzone(f32),
    #[error("inverted bounds: min {min} exceeds max {max}")]
    InvertedBounds { min: glam::Vec2, max: glam::Vec2 },
    #[error("maximum tilt {0} must be positive")]
    NonPositiveMaxTilt(f32),
}
