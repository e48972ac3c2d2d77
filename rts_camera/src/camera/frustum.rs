/// Frustum: the four side planes of a camera, used for visibility culling.
///
/// Every plane passes through the camera position and is stored as a unit
/// normal. Normals face out of the visible volume: a point `p` is on the
/// visible side of a plane when `(p - camera_pos).dot(normal) <= 0`.
///
/// The near and far planes are not stored; the far test is a distance
/// check against the camera's current view range.

use glam::Vec3;
use super::orientation::{safe_normalize, Basis};

/// Frustum plane indices
pub const PLANE_TOP: usize = 0;
pub const PLANE_BOTTOM: usize = 1;
pub const PLANE_RIGHT: usize = 2;
pub const PLANE_LEFT: usize = 3;

/// Number of side planes
pub const PLANE_COUNT: usize = 4;

/// Four side planes: top, bottom, right, left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumPlanes {
    pub planes: [Vec3; PLANE_COUNT],
}

impl Default for FrustumPlanes {
    fn default() -> Self {
        Self { planes: [Vec3::ZERO; PLANE_COUNT] }
    }
}

impl FrustumPlanes {
    /// Derive the side planes from a camera basis and field of view.
    ///
    /// The horizontal half-angle is approximated as `aspect * half_fov`.
    pub fn from_basis(basis: &Basis, tan_half_fov: f32, half_fov: f32, aspect: f32) -> Self {
        let forward_y = -basis.forward * tan_half_fov;
        let forward_x = -basis.forward * (aspect * half_fov).tan();

        let mut planes = [Vec3::ZERO; PLANE_COUNT];
        planes[PLANE_TOP] = safe_normalize(forward_y + basis.up);
        planes[PLANE_BOTTOM] = safe_normalize(forward_y - basis.up);
        planes[PLANE_RIGHT] = safe_normalize(forward_x + basis.right);
        planes[PLANE_LEFT] = safe_normalize(forward_x - basis.right);

        Self { planes }
    }

    pub fn top(&self) -> Vec3 {
        self.planes[PLANE_TOP]
    }

    pub fn bottom(&self) -> Vec3 {
        self.planes[PLANE_BOTTOM]
    }

    pub fn right(&self) -> Vec3 {
        self.planes[PLANE_RIGHT]
    }

    pub fn left(&self) -> Vec3 {
        self.planes[PLANE_LEFT]
    }

    /// Test an axis-aligned box against the side planes.
    ///
    /// For each plane, the corner with the smallest dot product against the
    /// normal (the corner deepest inside) is tested; if even that corner is
    /// outside, the whole box is outside. Conservative: boxes straddling a
    /// frustum corner may pass.
    pub fn intersects_box(&self, origin: Vec3, mins: Vec3, maxs: Vec3) -> bool {
        for plane in &self.planes {
            let inner = Vec3::new(
                if plane.x > 0.0 { mins.x } else { maxs.x },
                if plane.y > 0.0 { mins.y } else { maxs.y },
                if plane.z > 0.0 { mins.z } else { maxs.z },
            );

            if plane.dot(inner - origin) > 0.0 {
                return false;
            }
        }

        true
    }

    /// Test a sphere against the side planes and the far distance.
    pub fn intersects_sphere(&self, origin: Vec3, center: Vec3, radius: f32, far: f32) -> bool {
        let offset = center - origin;

        if self.planes.iter().any(|plane| offset.dot(*plane) > radius) {
            return false;
        }

        offset.length_squared() <= (far + radius) * (far + radius)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
