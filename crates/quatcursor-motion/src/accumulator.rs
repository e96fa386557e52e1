use crate::ConfigError;
use glam::Vec2;

/// Axis-aligned screen-like rectangle the cursor is confined to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundsRect {
    pub fn new(min: Vec2, max: Vec2) -> Result<Self, ConfigError> {
        if min.x > max.x || min.y > max.y {
            return Err(ConfigError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }
}

/// Integrates filtered motion into a bounded cursor position.
///
/// Clamping saturates: a cursor pushed past an edge sticks to that
/// edge, it never wraps to the opposite side.
#[derive(Debug)]
pub struct MotionAccumulator {
    bounds: BoundsRect,
    start: Vec2,
    position: Vec2,
}

impl MotionAccumulator {
    /// `start` defaults to the rectangle's center and is clamped into
    /// the bounds either way.
    pub fn new(bounds: BoundsRect, start: Option<Vec2>) -> Self {
        let start = bounds.clamp(start.unwrap_or_else(|| bounds.center()));
        Self {
            bounds,
            start,
            position: start,
        }
    }

    /// Add a displacement and return the new clamped position.
    pub fn advance(&mut self, delta: Vec2) -> Vec2 {
        self.position = self.bounds.clamp(self.position + delta);
        self.position
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn bounds(&self) -> BoundsRect {
        self.bounds
    }

    /// Return the cursor to its start position.
    pub fn reset(&mut self) {
        self.position = self.start;
    }
}
