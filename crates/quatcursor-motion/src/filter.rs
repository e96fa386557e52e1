use crate::ConfigError;
use glam::Vec2;

/// Deadzone plus exponential smoothing over a raw displacement signal.
///
/// Applied in order: per-component deadzone first, then
/// `smoothed = alpha * raw + (1 - alpha) * previous`. Smaller alpha
/// means heavier smoothing (more lag, less jitter).
#[derive(Debug)]
pub struct MotionFilter {
    deadzone: f32,
    alpha: f32,
    smoothed: Vec2,
}

impl MotionFilter {
    pub fn new(deadzone: f32, alpha: f32) -> Result<Self, ConfigError> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(ConfigError::SmoothingAlphaOutOfRange(alpha));
        }
        if deadzone < 0.0 {
            return Err(ConfigError::NegativeDeadzone(deadzone));
        }
        Ok(Self {
            deadzone,
            alpha,
            smoothed: Vec2::ZERO,
        })
    }

    /// Filter one raw displacement into stabilized incremental motion.
    pub fn apply(&mut self, raw: Vec2) -> Vec2 {
        let gated = Vec2::new(
            if raw.x.abs() < self.deadzone { 0.0 } else { raw.x },
            if raw.y.abs() < self.deadzone { 0.0 } else { raw.y },
        );
        self.smoothed = gated * self.alpha + self.smoothed * (1.0 - self.alpha);
        self.smoothed
    }

    /// Clear the smoothing history.
    pub fn reset(&mut self) {
        self.smoothed = Vec2::ZERO;
    }
}
