/// Matrix builder: perspective and look-at matrices written entry by entry.
///
/// All matrices are column-major (`m[col * 4 + row]`), matching glam and
/// what the shaders expect.

use glam::{Mat3, Mat4, Vec3};
use super::orientation::safe_normalize;

/// Symmetric perspective projection (OpenGL clip space, depth in [-1, 1]).
///
/// Entries not written below keep their identity value, except `m[15]`
/// which is forced to 0: the result is never affine.
pub fn perspective(tan_half_fov: f32, aspect: f32, z_near: f32, z_far: f32) -> Mat4 {
    let t = z_near * tan_half_fov;
    let b = -t;
    let l = b * aspect;
    let r = t * aspect;

    let mut m = Mat4::IDENTITY.to_cols_array();
    m[0] = (2.0 * z_near) / (r - l);
    m[5] = (2.0 * z_near) / (t - b);
    m[8] = (r + l) / (r - l);
    m[9] = (t + b) / (t - b);
    m[10] = -(z_far + z_near) / (z_far - z_near);
    m[11] = -1.0;
    m[14] = -(2.0 * z_far * z_near) / (z_far - z_near);
    m[15] = 0.0;
    Mat4::from_cols_array(&m)
}

/// Right-handed look-at view matrix.
///
/// The rotation rows are `s`, `u`, `-f`; the eye translation is folded
/// into the last column as `-R * eye`.
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    let f = safe_normalize(center - eye);
    let s = f.cross(up);
    let u = s.cross(f);

    let mut m = Mat4::IDENTITY.to_cols_array();
    m[0] = s.x;
    m[1] = u.x;
    m[2] = -f.x;
    m[4] = s.y;
    m[5] = u.y;
    m[6] = -f.y;
    m[8] = s.z;
    m[9] = u.z;
    m[10] = -f.z;
    m[12] = -s.dot(eye);
    m[13] = -u.dot(eye);
    m[14] = f.dot(eye);
    Mat4::from_cols_array(&m)
}

/// Inverse of an affine matrix whose 3x3 block is orthonormal.
pub fn invert_affine(m: &Mat4) -> Mat4 {
    let r = Mat3::from_mat4(*m).transpose();
    let t = -(r * m.w_axis.truncate());
    Mat4::from_cols(
        r.x_axis.extend(0.0),
        r.y_axis.extend(0.0),
        r.z_axis.extend(0.0),
        t.extend(1.0),
    )
}

/// Per-camera matrix set, overwritten in place every update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrices {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
    pub view_inverse: Mat4,
    pub projection_inverse: Mat4,
    pub view_projection_inverse: Mat4,
    /// Rotation-only matrix turning sprites to face the camera
    pub billboard: Mat4,
}

impl Default for CameraMatrices {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            view_projection: Mat4::IDENTITY,
            view_inverse: Mat4::IDENTITY,
            projection_inverse: Mat4::IDENTITY,
            view_projection_inverse: Mat4::IDENTITY,
            billboard: Mat4::IDENTITY,
        }
    }
}

impl CameraMatrices {
    /// Store `view`/`projection` and derive the combined, inverse and
    /// billboard matrices.
    pub fn set(&mut self, view: Mat4, projection: Mat4) {
        self.view = view;
        self.projection = projection;
        self.view_projection = projection * view;
        self.view_inverse = invert_affine(&view);
        self.projection_inverse = projection.inverse();
        self.view_projection_inverse = self.view_projection.inverse();

        // the rotation block is orthonormal, so its transpose is its inverse
        let mut billboard = view;
        billboard.w_axis = glam::Vec4::W;
        self.billboard = billboard.transpose();
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
