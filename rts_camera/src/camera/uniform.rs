/// CameraUniform: per-camera data block for GPU upload.
///
/// Layout matches a std140 uniform block: five `mat4` followed by two
/// `vec4`. Every member is 16-byte aligned, so the struct has no padding
/// and can be uploaded with `bytemuck::bytes_of`.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
    pub view_inverse: Mat4,
    pub billboard: Mat4,
    /// Eye position, `w = 1`
    pub position: Vec4,
    /// `(z_near, z_far, tan_half_fov, aspect)`
    pub range: Vec4,
}

impl CameraUniform {
    /// Raw bytes, ready for a buffer write.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
