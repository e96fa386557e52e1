use crate::{DeltaTracker, MotionAccumulator, MotionFilter};
use glam::{Quat, Vec2};
use quatcursor_math::DegenerateInput;

/// The relative-motion pipeline: delta tracker -> motion filter ->
/// bounded accumulator.
///
/// One pipeline per tracked pointer; updates are strictly sequential.
#[derive(Debug)]
pub struct PointerPipeline {
    tracker: DeltaTracker,
    filter: MotionFilter,
    accumulator: MotionAccumulator,
}

impl PointerPipeline {
    pub fn new(tracker: DeltaTracker, filter: MotionFilter, accumulator: MotionAccumulator) -> Self {
        Self {
            tracker,
            filter,
            accumulator,
        }
    }

    /// Feed one orientation sample, returning the new cursor position.
    ///
    /// A degenerate sample fails without touching any stage: the filter
    /// and accumulator only run once the tracker has accepted the
    /// sample.
    pub fn process(&mut self, sample: Quat) -> Result<Vec2, DegenerateInput> {
        let raw = self.tracker.update(sample)?;
        let smoothed = self.filter.apply(raw);
        Ok(self.accumulator.advance(smoothed))
    }

    /// Current cursor position without advancing.
    pub fn position(&self) -> Vec2 {
        self.accumulator.position()
    }

    /// Reseed the tracker, clear the filter, recenter the cursor.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.filter.reset();
        self.accumulator.reset();
    }
}
