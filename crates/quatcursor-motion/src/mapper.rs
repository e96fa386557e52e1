use crate::{accumulator::BoundsRect, ConfigError};
use glam::{Quat, Vec2};
use quatcursor_math::{normalize, to_euler, DegenerateInput};

/// Maps a single orientation's roll/pitch to absolute coordinates.
///
/// Stateless: `(x, y) = (scale.x * roll, scale.y * pitch)`, unbounded.
pub struct TiltMapper {
    scale: Vec2,
}

impl TiltMapper {
    pub fn new(scale: Vec2) -> Self {
        Self { scale }
    }

    pub fn map(&self, sample: Quat) -> Result<Vec2, DegenerateInput> {
        let euler = to_euler(normalize(sample)?);
        Ok(Vec2::new(
            self.scale.x * euler.roll,
            self.scale.y * euler.pitch,
        ))
    }
}

/// Tilt mapper that targets a screen rectangle.
///
/// Roll and pitch are clamped to a maximum tilt angle; the sensitivity
/// per axis is derived so that full tilt reaches the rectangle's edge.
/// Pitch is inverted so tilting forward moves the marker up.
#[derive(Debug)]
pub struct BoundedTiltMapper {
    bounds: BoundsRect,
    max_tilt: f32,
    sensitivity: Vec2,
}

impl BoundedTiltMapper {
    /// `max_tilt` is in radians.
    pub fn new(bounds: BoundsRect, max_tilt: f32) -> Result<Self, ConfigError> {
        if !(max_tilt > 0.0) {
            return Err(ConfigError::NonPositiveMaxTilt(max_tilt));
        }
        let size = bounds.max - bounds.min;
        Ok(Self {
            bounds,
            max_tilt,
            sensitivity: size / (2.0 * max_tilt),
        })
    }

    pub fn map(&self, sample: Quat) -> Result<Vec2, DegenerateInput> {
        let euler = to_euler(normalize(sample)?);
        let roll = euler.roll.clamp(-self.max_tilt, self.max_tilt);
        let pitch = euler.pitch.clamp(-self.max_tilt, self.max_tilt);

        let center = self.bounds.center();
        Ok(self.bounds.clamp(Vec2::new(
            center.x + roll * self.sensitivity.x,
            center.y - pitch * self.sensitivity.y,
        )))
    }
}
