use glam::Quat;
use quatcursor_math::EulerAngles;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f32::consts::TAU;

/// A lazy, unbounded sequence of orientation samples.
///
/// `t` is seconds since the script started; stateful scripts may
/// ignore it.
pub trait MotionScript {
    fn sample(&mut self, t: f32) -> Quat;

    /// Return to the script's initial state.
    fn restart(&mut self) {}
}

impl<S: MotionScript + ?Sized> MotionScript for Box<S> {
    fn sample(&mut self, t: f32) -> Quat {
        (**self).sample(t)
    }

    fn restart(&mut self) {
        (**self).restart()
    }
}

/// Smooth sinusoidal sweep over roll, pitch, and yaw.
///
/// At t = 0 all angles are zero, so the script opens at identity.
pub struct ScriptedMotion {
    pub roll_amplitude: f32,
    pub roll_rate: f32,
    pub pitch_amplitude: f32,
    pub pitch_rate: f32,
    pub yaw_amplitude: f32,
    pub yaw_rate: f32,
}

impl Default for ScriptedMotion {
    fn default() -> Self {
        // Slow up/down and left/right sweeps with a slight roll wobble.
        Self {
            roll_amplitude: 0.1,
            roll_rate: 1.2,
            pitch_amplitude: 0.3,
            pitch_rate: 0.5,
            yaw_amplitude: 0.4,
            yaw_rate: 0.7,
        }
    }
}

impl MotionScript for ScriptedMotion {
    fn sample(&mut self, t: f32) -> Quat {
        EulerAngles {
            roll: self.roll_amplitude * (t * self.roll_rate).sin(),
            pitch: self.pitch_amplitude * (t * self.pitch_rate).sin(),
            yaw: self.yaw_amplitude * (t * self.yaw_rate).sin(),
        }
        .to_quat()
    }
}

/// Uniformly distributed random unit quaternions, one per sample.
///
/// Useful as a worst-case jitter source when exercising the filter.
pub struct RandomTumble {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomTumble {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: Self::make_rng(seed),
            seed,
        }
    }

    fn make_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl MotionScript for RandomTumble {
    fn sample(&mut self, _t: f32) -> Quat {
        // Shoemake's subgroup algorithm for uniform rotations.
        let u1: f32 = self.rng.gen();
        let u2: f32 = self.rng.gen();
        let u3: f32 = self.rng.gen();

        let a = (1.0 - u1).sqrt();
        let b = u1.sqrt();
        Quat::from_xyzw(
            a * (TAU * u2).cos(),
            b * (TAU * u3).sin(),
            b * (TAU * u3).cos(),
            a * (TAU * u2).sin(),
        )
    }

    fn restart(&mut self) {
        self.rng = Self::make_rng(self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_motion_opens_at_identity() {
        let mut script = ScriptedMotion::default();
        let q = script.sample(0.0);
        assert!((q.w.abs() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn scripted_motion_stays_unit_length() {
        let mut script = ScriptedMotion::default();
        for i in 0..100 {
            let q = script.sample(i as f32 * 0.1);
            assert!((q.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn random_tumble_produces_unit_quaternions() {
        let mut script = RandomTumble::new(Some(7));
        for _ in 0..100 {
            let q = script.sample(0.0);
            assert!((q.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn random_tumble_is_deterministic_per_seed() {
        let mut a = RandomTumble::new(Some(42));
        let mut b = RandomTumble::new(Some(42));
        assert_eq!(a.sample(0.0), b.sample(0.0));
    }

    #[test]
    fn restart_replays_the_seeded_sequence() {
        let mut script = RandomTumble::new(Some(3));
        let first = script.sample(0.0);
        script.sample(0.0);
        script.restart();
        assert_eq!(script.sample(0.0), first);
    }
}
