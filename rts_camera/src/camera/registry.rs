/// Camera roles and the per-role camera set.
///
/// `CameraSet` owns exactly one camera per role for the whole session.
/// The visibility-culling camera is never handed out mutably: its state is
/// copied from the player or shadow camera by `sync_visibility_culling`,
/// which `CameraSet::update` runs right after updating either of them.
/// Whichever of the two was updated last in a frame is what culling sees.
/// Footprint lines are not part of that copy; the culling camera traces its
/// own through `extract_culling_footprint` and `clip_culling_lines`.

use std::fmt;
use std::str::FromStr;
use crate::config::CameraConfig;
use crate::error::{log_and_return, Error};
use crate::settings::RenderSettings;
use crate::terrain::{MapExtents, TerrainQuery};
use super::camera::Camera;

const SOURCE: &str = "rtscam::CameraSet";

/// Logical camera roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraRole {
    /// Main game view
    Player,
    /// Water reflection, mirrored from the player camera
    UnderWater,
    /// Shadow caster view
    Shadow,
    /// Environment map capture
    EnvMap,
    /// Visibility culling, written only by synchronisation
    VisCull,
}

impl CameraRole {
    pub const COUNT: usize = 5;

    pub const ALL: [CameraRole; Self::COUNT] = [
        CameraRole::Player,
        CameraRole::UnderWater,
        CameraRole::Shadow,
        CameraRole::EnvMap,
        CameraRole::VisCull,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            CameraRole::Player => "Player",
            CameraRole::UnderWater => "UnderWater",
            CameraRole::Shadow => "Shadow",
            CameraRole::EnvMap => "EnvMap",
            CameraRole::VisCull => "VisCull",
        }
    }

    /// Whether updating this role refreshes the visibility-culling camera.
    pub fn drives_visibility_culling(self) -> bool {
        matches!(self, CameraRole::Player | CameraRole::Shadow)
    }
}

impl fmt::Display for CameraRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CameraRole {
    type Err = Error;

    /// Case-insensitive role name lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CameraRole::ALL
            .iter()
            .copied()
            .find(|role| role.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| log_and_return(SOURCE, Error::UnknownCameraRole(s.to_string())))
    }
}

/// One camera per role plus the active role.
#[derive(Debug, Clone)]
pub struct CameraSet {
    cameras: [Camera; CameraRole::COUNT],
    active: CameraRole,
}

impl Default for CameraSet {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraSet {
    pub fn new() -> Self {
        let set = Self {
            cameras: CameraRole::ALL.map(Camera::new),
            active: CameraRole::Player,
        };
        crate::cam_info!(SOURCE, "Camera set created with {} roles", CameraRole::COUNT);
        set
    }

    /// Camera set with the configured field of view on every camera.
    pub fn with_config(config: &CameraConfig) -> Self {
        let mut set = Self::new();
        for camera in set.cameras.iter_mut() {
            camera.set_fov(config.field_of_view);
        }
        set
    }

    /// Configured camera set with every camera above the centre of the map.
    pub fn for_map(extents: MapExtents, config: &CameraConfig) -> Self {
        let mut set = Self::with_config(config);
        set.center_on_map(extents);
        set
    }

    /// Move every camera, the culling one included, to the map start position.
    pub fn center_on_map(&mut self, extents: MapExtents) {
        for camera in self.cameras.iter_mut() {
            camera.center_on_map(extents);
        }
        crate::cam_debug!(
            SOURCE,
            "Cameras centred on {}x{} map",
            extents.size_x,
            extents.size_z
        );
    }

    pub fn get(&self, role: CameraRole) -> &Camera {
        &self.cameras[role.index()]
    }

    /// Mutable access to a camera. `None` for `VisCull`, which only
    /// changes through `sync_visibility_culling`.
    pub fn get_mut(&mut self, role: CameraRole) -> Option<&mut Camera> {
        if role == CameraRole::VisCull {
            return None;
        }
        Some(&mut self.cameras[role.index()])
    }

    pub fn visibility_culling(&self) -> &Camera {
        self.get(CameraRole::VisCull)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Camera> {
        self.cameras.iter()
    }

    // ===== ACTIVE CAMERA =====

    pub fn active_role(&self) -> CameraRole {
        self.active
    }

    pub fn set_active(&mut self, role: CameraRole) {
        self.active = role;
    }

    pub fn active(&self) -> &Camera {
        self.get(self.active)
    }

    pub fn active_mut(&mut self) -> Option<&mut Camera> {
        self.get_mut(self.active)
    }

    // ===== FRAME UPDATE =====

    /// Update one camera, then refresh the culling camera if that role
    /// drives it.
    pub fn update(&mut self, role: CameraRole, settings: &RenderSettings, terrain: &dyn TerrainQuery) {
        if role == CameraRole::VisCull {
            crate::cam_warn!(SOURCE, "VisCull camera is only updated through synchronisation");
            return;
        }

        self.cameras[role.index()].update(settings, terrain);

        if role.drives_visibility_culling() {
            self.sync_visibility_culling(role);
        }
    }

    /// Copy the orientation and frustum of `from` into the culling camera.
    pub fn sync_visibility_culling(&mut self, from: CameraRole) {
        if from == CameraRole::VisCull {
            return;
        }

        let (src, dst) = self.pair_mut(from, CameraRole::VisCull);
        dst.copy_state_from(src);
        crate::cam_trace!(SOURCE, "VisCull camera synced from {}", from);
    }

    /// Trace the culling camera's frustum on the ground.
    pub fn extract_culling_footprint(
        &mut self,
        min_y: f32,
        max_y: f32,
        scale: f32,
        force_negative: bool,
    ) {
        self.cameras[CameraRole::VisCull.index()]
            .extract_frustum_footprint(min_y, max_y, scale, force_negative);
    }

    pub fn clip_culling_lines(&mut self, negative: bool, z_min: f32, z_max: f32) {
        self.cameras[CameraRole::VisCull.index()].clip_frustum_lines(negative, z_min, z_max);
    }

    /// Mirror the player camera into the under-water camera and update it.
    pub fn update_reflection(&mut self, settings: &RenderSettings, terrain: &dyn TerrainQuery) {
        let (src, dst) = self.pair_mut(CameraRole::Player, CameraRole::UnderWater);
        dst.copy_state_reflect(src);
        dst.update(settings, terrain);
    }

    fn pair_mut(&mut self, src: CameraRole, dst: CameraRole) -> (&Camera, &mut Camera) {
        let (s, d) = (src.index(), dst.index());
        debug_assert_ne!(s, d);

        if s < d {
            let (low, high) = self.cameras.split_at_mut(d);
            (&low[s], &mut high[0])
        } else {
            let (low, high) = self.cameras.split_at_mut(s);
            (&high[0], &mut low[d])
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
