use glam::{Quat, Vec2};
use quatcursor_math::{inverse, normalize, to_euler, DegenerateInput};

/// Tracks frame-to-frame rotation and converts it to raw displacement.
///
/// Measures the relative rotation `current * inverse(previous)` rather
/// than absolute orientation, so drift in the absolute estimate does not
/// corrupt pointer motion.
#[derive(Debug)]
pub struct DeltaTracker {
    /// Per-axis gain applied to the delta roll/pitch angles.
    sensitivity: Vec2,
    /// Last accepted sample. `None` until the first valid update.
    prev: Option<Quat>,
}

impl DeltaTracker {
    pub fn new(sensitivity: Vec2) -> Self {
        Self {
            sensitivity,
            prev: None,
        }
    }

    /// Process one orientation sample and return raw (dx, dy).
    ///
    /// The first valid sample seeds the tracker and yields (0, 0) —
    /// there is nothing to compare against yet. A degenerate sample
    /// returns an error and leaves the stored previous sample
    /// untouched, so one bad reading cannot poison later deltas.
    pub fn update(&mut self, sample: Quat) -> Result<Vec2, DegenerateInput> {
        let current = normalize(sample)?;

        let prev = match self.prev {
            None => {
                self.prev = Some(current);
                return Ok(Vec2::ZERO);
            }
            Some(prev) => prev,
        };

        let delta = normalize(current * inverse(prev)?)?;
        let euler = to_euler(delta);
        self.prev = Some(current);

        Ok(Vec2::new(
            self.sensitivity.x * euler.roll,
            self.sensitivity.y * euler.pitch,
        ))
    }

    pub fn is_tracking(&self) -> bool {
        self.prev.is_some()
    }

    /// Forget the stored sample; the next update reseeds.
    pub fn reset(&mut self) {
        self.prev = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn roll_90() -> Quat {
        Quat::from_rotation_x(FRAC_PI_2)
    }

    #[test]
    fn first_sample_yields_no_motion() {
        let mut tracker = DeltaTracker::new(Vec2::splat(100.0));
        let d = tracker.update(Quat::from_xyzw(0.3, 0.3, 0.1, 0.9)).unwrap();
        assert_eq!(d, Vec2::ZERO);
        assert!(tracker.is_tracking());
    }

    #[test]
    fn identical_samples_yield_zero_delta() {
        let mut tracker = DeltaTracker::new(Vec2::splat(100.0));
        let q = Quat::from_rotation_x(0.4);
        tracker.update(q).unwrap();
        let d = tracker.update(q).unwrap();
        assert!(d.x.abs() < 1e-4);
        assert!(d.y.abs() < 1e-4);
    }

    #[test]
    fn roll_rotation_moves_x_with_matching_sign() {
        let mut tracker = DeltaTracker::new(Vec2::splat(100.0));
        tracker.update(Quat::IDENTITY).unwrap();
        let forward = tracker.update(roll_90()).unwrap();
        // 90 degree roll at gain 100 -> dx about 157.
        assert!(forward.x > 100.0);
        assert!(forward.y.abs() < 1e-3);

        let mut reversed = DeltaTracker::new(Vec2::splat(100.0));
        reversed.update(roll_90()).unwrap();
        let backward = reversed.update(Quat::IDENTITY).unwrap();
        assert!((forward.x + backward.x).abs() < 1e-3);
    }

    #[test]
    fn sensitivity_scales_output() {
        let mut coarse = DeltaTracker::new(Vec2::new(100.0, 100.0));
        let mut fine = DeltaTracker::new(Vec2::new(50.0, 50.0));
        let q = Quat::from_rotation_x(0.2);
        coarse.update(Quat::IDENTITY).unwrap();
        fine.update(Quat::IDENTITY).unwrap();
        let a = coarse.update(q).unwrap();
        let b = fine.update(q).unwrap();
        assert!((a.x - 2.0 * b.x).abs() < 1e-3);
    }

    #[test]
    fn degenerate_sample_leaves_state_untouched() {
        let mut tracker = DeltaTracker::new(Vec2::splat(100.0));
        tracker.update(Quat::IDENTITY).unwrap();

        let zero = Quat::from_xyzw(0.0, 0.0, 0.0, 0.0);
        assert_eq!(tracker.update(zero), Err(DegenerateInput));

        // Reference tracker that never saw the bad sample.
        let mut clean = DeltaTracker::new(Vec2::splat(100.0));
        clean.update(Quat::IDENTITY).unwrap();

        let after_error = tracker.update(roll_90()).unwrap();
        let expected = clean.update(roll_90()).unwrap();
        assert!((after_error.x - expected.x).abs() < 1e-5);
        assert!((after_error.y - expected.y).abs() < 1e-5);
    }

    #[test]
    fn reset_returns_to_seeding() {
        let mut tracker = DeltaTracker::new(Vec2::splat(100.0));
        tracker.update(Quat::IDENTITY).unwrap();
        tracker.update(roll_90()).unwrap();
        tracker.reset();
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.update(roll_90()).unwrap(), Vec2::ZERO);
    }

    #[test]
    fn non_normalized_input_is_accepted() {
        let mut tracker = DeltaTracker::new(Vec2::splat(100.0));
        // Same orientation, scaled by 3: must behave like unit input.
        tracker.update(Quat::from_xyzw(0.0, 0.0, 0.0, 3.0)).unwrap();
        let d = tracker.update(Quat::IDENTITY).unwrap();
        assert!(d.length() < 1e-4);
    }
}
