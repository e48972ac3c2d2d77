/// Screen projection: picking rays and world-to-window transforms.

use glam::{IVec2, Mat4, Vec3, Vec4};
use crate::settings::RenderSettings;
use super::orientation::{safe_normalize, Basis};

/// Screen-space rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The game view rectangle of the current render settings.
    pub fn from_settings(settings: &RenderSettings) -> Self {
        Self::new(
            settings.view_pos.x,
            settings.view_pos.y,
            settings.view_size.x,
            settings.view_size.y,
        )
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }
}

/// World-space direction of the ray through pixel `(x, y)`.
///
/// Pixel `y` grows downwards. Offsets are measured from the view centre
/// and scaled by the view height, so the horizontal spread follows the
/// aspect ratio.
pub fn pixel_to_ray(x: i32, y: i32, viewport: &Viewport, tan_half_fov: f32, basis: &Basis) -> Vec3 {
    let vsx = viewport.width.max(1);
    let vsy = viewport.height.max(1);

    let scale = tan_half_fov * 2.0 / vsy as f32;
    let dx = (x - viewport.x - (vsx >> 1)) as f32 * scale;
    let dy = (y - (vsy >> 1)) as f32 * scale;

    safe_normalize(basis.forward - basis.up * dy + basis.right * dx)
}

/// Project a world point to window coordinates.
///
/// `x`/`y` are pixels inside `viewport` with `y` growing upwards (GL window
/// convention), `z` is depth in `[0, 1]`.
pub fn world_to_screen(point: Vec3, view_projection: &Mat4, viewport: &Viewport) -> Vec3 {
    let clip = *view_projection * Vec4::new(point.x, point.y, point.z, 1.0);
    let ndc = clip.truncate() / clip.w;

    Vec3::new(
        viewport.x as f32 + viewport.width as f32 * (ndc.x + 1.0) * 0.5,
        viewport.y as f32 + viewport.height as f32 * (ndc.y + 1.0) * 0.5,
        (ndc.z + 1.0) * 0.5,
    )
}

#[cfg(test)]
#[path = "screen_tests.rs"]
mod tests;
