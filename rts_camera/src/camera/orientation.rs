/// Orientation math: rotation triple <-> direction basis.
///
/// Rotations are `(x, y, z)` in radians: x is the pitch measured from
/// world-up (0 looks straight up, PI/2 looks at the horizon), y is the
/// yaw around world-up, z is the roll.
///
/// Roll cannot be recovered from a direction vector. `rotation_from_direction`
/// always returns zero roll; callers that care keep their own roll.

use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

/// Squared lengths below this are treated as zero by `safe_normalize`.
const NORMALIZE_EPSILON_SQ: f32 = 1e-12;

/// Normalize `v`, returning the zero vector for (near) zero-length input.
#[inline]
pub fn safe_normalize(v: Vec3) -> Vec3 {
    let len_sq = v.length_squared();
    if len_sq > NORMALIZE_EPSILON_SQ && len_sq.is_finite() {
        v / len_sq.sqrt()
    } else {
        Vec3::ZERO
    }
}

/// Unit forward vector for a rotation triple.
#[inline]
pub fn direction_from_rotation(r: Vec3) -> Vec3 {
    Vec3::new(
        r.x.sin() * r.y.sin(),
        r.x.cos(),
        r.x.sin() * -r.y.cos(),
    )
}

/// Rotation triple pointing along `dir`. Roll is always zero.
///
/// `dir` is normalized first; a zero vector yields the rotation of
/// an upward-looking camera.
pub fn rotation_from_direction(dir: Vec3) -> Vec3 {
    let d = safe_normalize(dir);
    if d == Vec3::ZERO {
        return Vec3::ZERO;
    }
    Vec3::new(d.y.clamp(-1.0, 1.0).acos(), d.x.atan2(-d.z), 0.0)
}

/// Right vector for a rotation triple.
///
/// Only perpendicular to `direction_from_rotation(r)` when the roll is
/// zero; callers rebuild `up` from a cross product instead of trusting
/// this to be an exact basis vector.
#[inline]
pub fn right_from_rotation(r: Vec3) -> Vec3 {
    let roll = FRAC_PI_2 - r.z;
    let yaw = r.y + FRAC_PI_2;
    Vec3::new(
        roll.sin() * yaw.sin(),
        roll.cos(),
        roll.sin() * -yaw.cos(),
    )
}

/// Forward/right/up basis derived from a rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Basis {
    /// `up` is re-derived as `normalize(right x forward)`; it is the only
    /// vector guaranteed orthogonal to the other two.
    pub fn from_rotation(r: Vec3) -> Self {
        let forward = direction_from_rotation(r);
        let right = right_from_rotation(r);
        let up = safe_normalize(right.cross(forward));
        Self { forward, right, up }
    }
}

#[cfg(test)]
#[path = "orientation_tests.rs"]
mod tests;
