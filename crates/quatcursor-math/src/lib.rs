//! Quaternion algebra for orientation-to-pointer conversion.
//!
//! Thin checked layer over [`glam::Quat`]: normalization and inversion
//! that refuse near-zero input instead of dividing by it, plus the
//! roll/pitch/yaw extraction used by the mappers and the delta tracker.

use glam::{EulerRot, Quat};
use thiserror::Error;

/// Quaternions with a norm below this have no usable direction.
pub const NORM_EPSILON: f32 = 1e-8;

/// A quaternion whose norm is too small to normalize or invert.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("quaternion norm below epsilon, direction undefined")]
pub struct DegenerateInput;

/// Normalize `q` to unit length.
///
/// Orientation samples arrive from external sources and are not
/// guaranteed to be unit quaternions, so every consumer normalizes
/// before doing rotation math.
pub fn normalize(q: Quat) -> Result<Quat, DegenerateInput> {
    let len = q.length();
    if len < NORM_EPSILON {
        return Err(DegenerateInput);
    }
    Ok(q / len)
}

/// Invert `q`: conjugate divided by the squared norm.
///
/// For unit input this is just the conjugate.
pub fn inverse(q: Quat) -> Result<Quat, DegenerateInput> {
    let len_sq = q.length_squared();
    if len_sq < NORM_EPSILON * NORM_EPSILON {
        return Err(DegenerateInput);
    }
    Ok(q.conjugate() / len_sq)
}

/// Euler angles (radians) extracted from a quaternion.
///
/// Derived value, recomputed per sample; never stored long-term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    /// Rotation about the x reference axis.
    pub roll: f32,
    /// Rotation about the y reference axis.
    pub pitch: f32,
    /// Rotation about the z reference axis.
    pub yaw: f32,
}

impl EulerAngles {
    /// Compose back into a quaternion (intrinsic ZYX order).
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::ZYX, self.yaw, self.pitch, self.roll)
    }
}

/// Extract roll, pitch, and yaw from a quaternion.
///
/// Uses the closed-form atan2/asin formulas. The asin argument is
/// clamped to [-1, 1] so the gimbal-lock boundary (pitch -> +-90 deg)
/// yields a saturated angle rather than NaN.
pub fn to_euler(q: Quat) -> EulerAngles {
    let (w, x, y, z) = (q.w, q.x, q.y, q.z);

    let sinr_cosp = 2.0 * (w * x + y * z);
    let cosr_cosp = 1.0 - 2.0 * (x * x + y * y);
    let roll = sinr_cosp.atan2(cosr_cosp);

    let sinp = 2.0 * (w * y - z * x);
    let pitch = sinp.clamp(-1.0, 1.0).asin();

    let siny_cosp = 2.0 * (w * z + x * y);
    let cosy_cosp = 1.0 - 2.0 * (y * y + z * z);
    let yaw = siny_cosp.atan2(cosy_cosp);

    EulerAngles { roll, pitch, yaw }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn normalize_produces_unit_length() {
        let q = normalize(Quat::from_xyzw(2.0, -1.0, 0.5, 3.0)).unwrap();
        assert!(approx(q.length(), 1.0));
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize(Quat::from_xyzw(0.2, -0.4, 0.1, 2.0)).unwrap();
        let twice = normalize(once).unwrap();
        assert!(approx(once.x, twice.x));
        assert!(approx(once.y, twice.y));
        assert!(approx(once.z, twice.z));
        assert!(approx(once.w, twice.w));
    }

    #[test]
    fn normalize_rejects_zero_quaternion() {
        assert_eq!(
            normalize(Quat::from_xyzw(0.0, 0.0, 0.0, 0.0)),
            Err(DegenerateInput)
        );
    }

    #[test]
    fn inverse_of_unit_is_conjugate() {
        let q = normalize(Quat::from_xyzw(0.3, 0.1, -0.2, 0.9)).unwrap();
        let inv = inverse(q).unwrap();
        assert!(approx(inv.x, -q.x));
        assert!(approx(inv.y, -q.y));
        assert!(approx(inv.z, -q.z));
        assert!(approx(inv.w, q.w));
    }

    #[test]
    fn inverse_cancels_rotation() {
        let q = normalize(Quat::from_xyzw(0.5, 0.5, -0.2, 0.7)).unwrap();
        let product = q * inverse(q).unwrap();
        assert!(approx(product.w.abs(), 1.0));
    }

    #[test]
    fn inverse_rejects_zero_quaternion() {
        assert_eq!(
            inverse(Quat::from_xyzw(0.0, 0.0, 0.0, 0.0)),
            Err(DegenerateInput)
        );
    }

    #[test]
    fn identity_has_zero_euler_angles() {
        let e = to_euler(Quat::IDENTITY);
        assert!(approx(e.roll, 0.0));
        assert!(approx(e.pitch, 0.0));
        assert!(approx(e.yaw, 0.0));
    }

    #[test]
    fn pure_roll_extracts_correctly() {
        // 90 degrees about x: (w, x, y, z) = (0.707, 0.707, 0, 0).
        let q = Quat::from_rotation_x(FRAC_PI_2);
        let e = to_euler(q);
        assert!((e.roll - FRAC_PI_2).abs() < 1e-4);
        assert!(approx(e.pitch, 0.0));
        assert!(approx(e.yaw, 0.0));
    }

    #[test]
    fn gimbal_lock_boundary_is_clamped() {
        let q = Quat::from_rotation_y(FRAC_PI_2);
        let e = to_euler(q);
        assert!(!e.pitch.is_nan());
        assert!((e.pitch - FRAC_PI_2).abs() < 1e-3);
    }

    #[test]
    fn euler_roundtrip_for_moderate_angles() {
        let original = EulerAngles {
            roll: 0.3,
            pitch: -0.5,
            yaw: 0.8,
        };
        let back = to_euler(original.to_quat());
        assert!((back.roll - original.roll).abs() < 1e-4);
        assert!((back.pitch - original.pitch).abs() < 1e-4);
        assert!((back.yaw - original.yaw).abs() < 1e-4);
    }
}
