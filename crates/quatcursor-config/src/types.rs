use glam::Vec2;
use quatcursor_motion::{
    BoundedTiltMapper, BoundsRect, ConfigError, DeltaTracker, MotionAccumulator, MotionFilter,
    PointerPipeline, TiltMapper,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Delta tracker gains (relative mode).
    pub tracker: TrackerConfig,
    /// Deadzone and smoothing.
    pub filter: FilterConfig,
    /// Cursor bounds and start position.
    pub screen: ScreenConfig,
    /// Absolute-mode tilt mapping.
    pub mapper: MapperConfig,
    /// Orientation sample source.
    pub source: SourceConfig,
}

impl AppConfig {
    /// Build the relative-motion pipeline. Invalid parameters fail
    /// here, once, before any sample is processed.
    pub fn build_pipeline(&self) -> Result<PointerPipeline, ConfigError> {
        Ok(PointerPipeline::new(
            self.tracker.build(),
            self.filter.build()?,
            self.screen.build()?,
        ))
    }

    /// Build the absolute-mode mapper targeting the configured screen.
    pub fn build_bounded_mapper(&self) -> Result<BoundedTiltMapper, ConfigError> {
        BoundedTiltMapper::new(self.screen.bounds()?, self.mapper.max_tilt_deg.to_radians())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Gain applied to the per-frame roll delta (x axis).
    pub sensitivity_roll: f32,
    /// Gain applied to the per-frame pitch delta (y axis).
    pub sensitivity_pitch: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            sensitivity_roll: 300.0,
            sensitivity_pitch: 300.0,
        }
    }
}

impl TrackerConfig {
    pub fn build(&self) -> DeltaTracker {
        DeltaTracker::new(Vec2::new(self.sensitivity_roll, self.sensitivity_pitch))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Raw displacements below this are treated as noise.
    pub deadzone: f32,
    /// Exponential smoothing weight in (0, 1]. Smaller = smoother.
    pub smoothing_alpha: f32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            deadzone: 0.001,
            smoothing_alpha: 0.7,
        }
    }
}

impl FilterConfig {
    pub fn build(&self) -> Result<MotionFilter, ConfigError> {
        MotionFilter::new(self.deadzone, self.smoothing_alpha)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
    /// Cursor start position; `None` means the screen center.
    pub start: Option<[f32; 2]>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            x_min: 0.0,
            x_max: 1200.0,
            y_min: 0.0,
            y_max: 800.0,
            start: None,
        }
    }
}

impl ScreenConfig {
    pub fn bounds(&self) -> Result<BoundsRect, ConfigError> {
        BoundsRect::new(
            Vec2::new(self.x_min, self.y_min),
            Vec2::new(self.x_max, self.y_max),
        )
    }

    pub fn build(&self) -> Result<MotionAccumulator, ConfigError> {
        Ok(MotionAccumulator::new(
            self.bounds()?,
            self.start.map(|[x, y]| Vec2::new(x, y)),
        ))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Absolute-mode gain for roll (unbounded mapper).
    pub scale_x: f32,
    /// Absolute-mode gain for pitch (unbounded mapper).
    pub scale_y: f32,
    /// Tilt at which the bounded mapper reaches the screen edge.
    pub max_tilt_deg: f32,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            scale_x: 50.0,
            scale_y: 50.0,
            max_tilt_deg: 45.0,
        }
    }
}

impl MapperConfig {
    pub fn build(&self) -> TiltMapper {
        TiltMapper::new(Vec2::new(self.scale_x, self.scale_y))
    }
}

/// Which scripted orientation source the demo binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptKind {
    /// Smooth sinusoidal roll/pitch/yaw sweep.
    Sinusoidal,
    /// Uniform random unit quaternions each sample.
    RandomTumble,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Sample cadence in Hz.
    pub sample_rate_hz: f32,
    pub script: ScriptKind,
    /// RNG seed for `RandomTumble`; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 60.0,
            script: ScriptKind::Sinusoidal,
            seed: None,
        }
    }
}
