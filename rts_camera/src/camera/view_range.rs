/// View-range adapter: scales near/far with altitude and viewing angle.
///
/// The near/far ratio always equals the reference ratio from the render
/// settings; only the scale changes.

use glam::Vec3;
use crate::settings::RenderSettings;
use crate::terrain::MapExtents;

/// How far past its height above the lowest terrain a camera must see.
const HEIGHT_RANGE_FACTOR: f32 = 2.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRange {
    pub z_near: f32,
    pub z_far: f32,
}

impl ViewRange {
    /// The unscaled reference range.
    pub fn reference(settings: &RenderSettings) -> Self {
        Self {
            z_near: settings.near_plane,
            z_far: settings.max_view_range,
        }
    }

    /// Recompute the range for a camera at `position` looking along `forward`.
    ///
    /// A camera looking towards the horizon must see to the farthest map
    /// corner; a high camera must see down to the lowest terrain. The wanted
    /// range is never below the reference range.
    pub fn adapt(
        position: Vec3,
        forward: Vec3,
        terrain_min_height: f32,
        extents: MapExtents,
        settings: &RenderSettings,
    ) -> Self {
        let azimuth_cos = forward.dot(Vec3::Y);

        let max_dist_to_border_x = position.x.max(extents.world_size_x() - position.x);
        let max_dist_to_border_z = position.z.max(extents.world_size_z() - position.z);
        let min_view_range = (1.0 - azimuth_cos)
            * (max_dist_to_border_x * max_dist_to_border_x
                + max_dist_to_border_z * max_dist_to_border_z)
                .sqrt();

        // terrain below sea level does not extend the range
        let height_range = (position.y - terrain_min_height.max(0.0)) * HEIGHT_RANGE_FACTOR;

        let wanted = settings
            .max_view_range
            .max(height_range)
            .max(min_view_range);
        let factor = wanted / settings.max_view_range;

        Self {
            z_near: settings.near_plane * factor,
            z_far: settings.max_view_range * factor,
        }
    }
}
