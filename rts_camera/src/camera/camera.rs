/// Camera: spatial state of one camera role and everything derived from it.
///
/// The caller sets position, rotation and field of view; `update` then
/// derives the view range, matrices and frustum planes for the frame.
/// Setters keep the basis and the fov triple consistent immediately,
/// matrices and planes wait for the next `update`.
///
/// Cameras never write to each other on their own. Keeping the
/// visibility-culling camera in step is the job of `CameraSet`.

use glam::{Vec3, Vec4};
use std::f32::consts::PI;
use crate::config::CameraConfig;
use crate::settings::RenderSettings;
use crate::terrain::{MapExtents, TerrainQuery};
use super::footprint::{FrustumFootprint, FrustumLine};
use super::frustum::FrustumPlanes;
use super::movement::{self, MoveFlags, MoveInput};
use super::orientation::{rotation_from_direction, safe_normalize, Basis};
use super::projection::{look_at, perspective, CameraMatrices};
use super::registry::CameraRole;
use super::screen::{self, Viewport};
use super::uniform::CameraUniform;
use super::view_range::ViewRange;

const SOURCE: &str = "rtscam::Camera";

/// Default vertical field of view, degrees
pub const DEFAULT_FOV: f32 = 45.0;

/// Height of a freshly centred camera
const START_HEIGHT: f32 = 1000.0;

/// `set_direction` must land within ~25 degrees of the requested direction.
const SET_DIRECTION_MIN_COS: f32 = 0.9;

/// Relative far-plane change worth a debug log line.
const VIEW_RANGE_LOG_THRESHOLD: f32 = 0.01;

#[derive(Debug, Clone)]
pub struct Camera {
    role: CameraRole,

    position: Vec3,
    rotation: Vec3,
    basis: Basis,

    field_of_view: f32,
    half_fov: f32,
    tan_half_fov: f32,
    aspect: f32,
    /// World-space length of one pixel at unit distance
    lpp_scale: f32,

    planes: FrustumPlanes,
    matrices: CameraMatrices,
    viewport: Viewport,
    view_range: ViewRange,
    map_extents: MapExtents,

    // shake, only applied when building the view matrix
    position_offset: Vec3,
    tilt_offset: Vec3,

    move_state: MoveFlags,
    footprint: FrustumFootprint,
}

impl Camera {
    /// Camera at the origin looking straight up, 45 degree field of view.
    pub fn new(role: CameraRole) -> Self {
        let rotation = Vec3::ZERO;
        let mut camera = Self {
            role,
            position: Vec3::ZERO,
            rotation,
            basis: Basis::from_rotation(rotation),
            field_of_view: 0.0,
            half_fov: 0.0,
            tan_half_fov: 0.0,
            aspect: 1.0,
            lpp_scale: 0.0,
            planes: FrustumPlanes::default(),
            matrices: CameraMatrices::default(),
            viewport: Viewport::default(),
            view_range: ViewRange::reference(&RenderSettings::default()),
            map_extents: MapExtents::new(0, 0),
            position_offset: Vec3::ZERO,
            tilt_offset: Vec3::ZERO,
            move_state: MoveFlags::empty(),
            footprint: FrustumFootprint::new(),
        };
        camera.set_fov(DEFAULT_FOV);
        camera
    }

    // ===== GETTERS =====

    pub fn role(&self) -> CameraRole {
        self.role
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn forward(&self) -> Vec3 {
        self.basis.forward
    }

    pub fn right(&self) -> Vec3 {
        self.basis.right
    }

    pub fn up(&self) -> Vec3 {
        self.basis.up
    }

    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// Vertical field of view, degrees.
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    /// Half the field of view, radians.
    pub fn half_fov(&self) -> f32 {
        self.half_fov
    }

    pub fn tan_half_fov(&self) -> f32 {
        self.tan_half_fov
    }

    /// Aspect ratio used by the last update.
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// `2 * tan_half_fov / view_height` from the last update, 0 for an
    /// empty view.
    pub fn lpp_scale(&self) -> f32 {
        self.lpp_scale
    }

    /// Side planes from the last extraction.
    pub fn planes(&self) -> &FrustumPlanes {
        &self.planes
    }

    pub fn matrices(&self) -> &CameraMatrices {
        &self.matrices
    }

    pub fn view_matrix(&self) -> &glam::Mat4 {
        &self.matrices.view
    }

    pub fn projection_matrix(&self) -> &glam::Mat4 {
        &self.matrices.projection
    }

    pub fn view_projection_matrix(&self) -> &glam::Mat4 {
        &self.matrices.view_projection
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn view_range(&self) -> ViewRange {
        self.view_range
    }

    pub fn z_near(&self) -> f32 {
        self.view_range.z_near
    }

    pub fn z_far(&self) -> f32 {
        self.view_range.z_far
    }

    pub fn position_offset(&self) -> Vec3 {
        self.position_offset
    }

    pub fn tilt_offset(&self) -> Vec3 {
        self.tilt_offset
    }

    pub fn move_state(&self) -> MoveFlags {
        self.move_state
    }

    /// Mutable movement flags, for `input::apply_key`.
    pub fn move_state_mut(&mut self) -> &mut MoveFlags {
        &mut self.move_state
    }

    pub fn footprint(&self) -> &FrustumFootprint {
        &self.footprint
    }

    pub fn frustum_lines(&self, negative: bool) -> &[FrustumLine] {
        self.footprint.lines(negative)
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Start position: above the map centre at height 1000.
    pub fn center_on_map(&mut self, extents: MapExtents) {
        self.position = Vec3::new(
            extents.world_size_x() * 0.5,
            START_HEIGHT,
            extents.world_size_z() * 0.5,
        );
    }

    /// Set the rotation triple and rebuild the basis.
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
        self.update_basis_from_rotation();
    }

    /// Point the camera along `dir`, keeping the current roll.
    ///
    /// Roll is never recovered from a direction: the new rotation has the
    /// pitch and yaw of `dir` and the roll the camera already had.
    pub fn set_direction(&mut self, dir: Vec3) {
        let dir = safe_normalize(dir);
        if dir == Vec3::ZERO {
            crate::cam_warn!(SOURCE, "{:?} camera: ignoring zero-length direction", self.role);
            return;
        }

        let roll = self.rotation.z;
        let mut rotation = rotation_from_direction(dir);
        rotation.z = roll;
        self.set_rotation(rotation);

        debug_assert!(
            self.basis.forward.dot(dir) > SET_DIRECTION_MIN_COS,
            "set_direction drifted: wanted {:?}, got {:?}",
            dir,
            self.basis.forward
        );
    }

    /// Add `delta` radians of roll.
    pub fn roll(&mut self, delta: f32) {
        self.set_rotation(self.rotation + Vec3::new(0.0, 0.0, delta));
    }

    /// Set the vertical field of view in degrees; the half angle and its
    /// tangent follow immediately.
    pub fn set_fov(&mut self, degrees: f32) {
        self.field_of_view = degrees;
        self.half_fov = degrees * 0.5 * (PI / 180.0);
        self.tan_half_fov = self.half_fov.tan();
    }

    pub fn set_position_offset(&mut self, offset: Vec3) {
        self.position_offset = offset;
    }

    /// Tilt of the look-at target: x along right, y along up, z along forward.
    pub fn set_tilt_offset(&mut self, offset: Vec3) {
        self.tilt_offset = offset;
    }

    pub fn clear_offsets(&mut self) {
        self.position_offset = Vec3::ZERO;
        self.tilt_offset = Vec3::ZERO;
    }

    pub fn set_move_state(&mut self, flag: MoveFlags, active: bool) {
        self.move_state.set(flag, active);
    }

    // ===== FRAME UPDATE =====

    /// Rebuild everything derived for this frame: viewport and pixel scale,
    /// view range, matrices and frustum planes, in that order.
    pub fn update(&mut self, settings: &RenderSettings, terrain: &dyn TerrainQuery) {
        if settings.view_size.y <= 0 {
            crate::cam_warn!(
                SOURCE,
                "{:?} camera: view height is {}, pixel scale disabled",
                self.role,
                settings.view_size.y
            );
            self.lpp_scale = 0.0;
        } else {
            self.lpp_scale = 2.0 * self.tan_half_fov / settings.view_size.y as f32;
        }

        self.viewport = Viewport::from_settings(settings);
        if settings.aspect_ratio > 0.0 && settings.aspect_ratio.is_finite() {
            self.aspect = settings.aspect_ratio;
        } else {
            crate::cam_warn!(
                SOURCE,
                "{:?} camera: aspect ratio {} ignored, keeping {}",
                self.role,
                settings.aspect_ratio,
                self.aspect
            );
        }
        self.map_extents = terrain.extents();

        self.adapt_view_range(settings, terrain.min_height());
        self.update_matrices();
        self.extract_frustum_planes();

        crate::cam_trace!(
            SOURCE,
            "{:?} camera updated: pos {:?}, forward {:?}, range [{}, {}]",
            self.role,
            self.position,
            self.basis.forward,
            self.view_range.z_near,
            self.view_range.z_far
        );
    }

    /// forward/right from the rotation, up from their cross product.
    pub fn update_basis_from_rotation(&mut self) {
        self.basis = Basis::from_rotation(self.rotation);
    }

    /// Rescale the near/far range for the current altitude and view angle.
    pub fn adapt_view_range(&mut self, settings: &RenderSettings, terrain_min_height: f32) {
        let range = ViewRange::adapt(
            self.position,
            self.basis.forward,
            terrain_min_height,
            self.map_extents,
            settings,
        );

        let old_far = self.view_range.z_far;
        if (range.z_far - old_far).abs() > old_far * VIEW_RANGE_LOG_THRESHOLD {
            crate::cam_debug!(
                SOURCE,
                "{:?} camera view range {} -> {}",
                self.role,
                old_far,
                range.z_far
            );
        }

        self.view_range = range;
    }

    /// Build projection and view matrices, then their combined, inverse
    /// and billboard forms.
    ///
    /// The shake offsets move the eye and tilt the look-at target without
    /// touching `position` or `rotation`.
    pub fn update_matrices(&mut self) {
        let projection = perspective(
            self.tan_half_fov,
            self.aspect,
            self.view_range.z_near,
            self.view_range.z_far,
        );

        let eye = self.position + self.position_offset;
        let look = safe_normalize(
            self.basis.forward * (1.0 + self.tilt_offset.z)
                + self.basis.right * self.tilt_offset.x
                + self.basis.up * self.tilt_offset.y,
        );
        let view = look_at(eye, eye + look, self.basis.up);

        self.matrices.set(view, projection);
    }

    pub fn extract_frustum_planes(&mut self) {
        self.planes = FrustumPlanes::from_basis(
            &self.basis,
            self.tan_half_fov,
            self.half_fov,
            self.aspect,
        );
    }

    // ===== VISIBILITY =====

    /// Whether an axis-aligned box may be visible.
    pub fn box_in_frustum(&self, mins: Vec3, maxs: Vec3) -> bool {
        self.planes.intersects_box(self.position, mins, maxs)
    }

    /// Whether a sphere may be visible, including the far distance.
    pub fn sphere_in_frustum(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .intersects_sphere(self.position, center, radius, self.view_range.z_far)
    }

    // ===== SCREEN =====

    pub fn pixel_to_ray(&self, x: i32, y: i32) -> Vec3 {
        screen::pixel_to_ray(x, y, &self.viewport, self.tan_half_fov, &self.basis)
    }

    pub fn world_to_screen(&self, point: Vec3) -> Vec3 {
        screen::world_to_screen(point, &self.matrices.view_projection, &self.viewport)
    }

    // ===== FOOTPRINT =====

    /// Trace the side planes on the ground, using the map size from the
    /// last update.
    pub fn extract_frustum_footprint(
        &mut self,
        min_y: f32,
        max_y: f32,
        scale: f32,
        force_negative: bool,
    ) {
        self.footprint.extract(
            &self.planes,
            self.position,
            min_y,
            max_y,
            scale,
            force_negative,
            self.map_extents,
        );
    }

    pub fn clip_frustum_lines(&mut self, negative: bool, z_min: f32, z_max: f32) {
        self.footprint.clip(negative, z_min, z_max);
    }

    // ===== MOVEMENT =====

    /// This frame's ground movement from the held keys or edge scrolling.
    pub fn movement_vector(
        &self,
        input: MoveInput,
        settings: &RenderSettings,
        config: &CameraConfig,
    ) -> Vec3 {
        movement::movement_vector(
            self.move_state,
            input,
            &self.viewport,
            settings.last_frame_time,
            config,
        )
    }

    pub fn vertical_movement(&self, settings: &RenderSettings) -> f32 {
        movement::vertical_movement(self.move_state, settings.last_frame_time)
    }

    // ===== STATE COPIES =====

    /// Take over the orientation, frustum and range of `src`.
    ///
    /// Role, movement flags, shake offsets and footprint lines stay.
    pub(crate) fn copy_state_from(&mut self, src: &Camera) {
        self.position = src.position;
        self.rotation = src.rotation;
        self.basis = src.basis;
        self.field_of_view = src.field_of_view;
        self.half_fov = src.half_fov;
        self.tan_half_fov = src.tan_half_fov;
        self.aspect = src.aspect;
        self.lpp_scale = src.lpp_scale;
        self.planes = src.planes;
        self.matrices = src.matrices;
        self.viewport = src.viewport;
        self.view_range = src.view_range;
        self.map_extents = src.map_extents;
    }

    /// Mirror `src` about the water plane `y = 0`.
    ///
    /// Forward and position get their y negated, roll flips sign. The
    /// planes are rebuilt; matrices follow on the next `update`.
    pub fn copy_state_reflect(&mut self, src: &Camera) {
        self.copy_state_from(src);

        self.position.y = -src.position.y;
        let mut rotation = rotation_from_direction(src.basis.forward * Vec3::new(1.0, -1.0, 1.0));
        rotation.z = -src.rotation.z;
        self.set_rotation(rotation);
        self.extract_frustum_planes();
    }

    /// GPU block for the current frame.
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.matrices.view,
            projection: self.matrices.projection,
            view_projection: self.matrices.view_projection,
            view_inverse: self.matrices.view_inverse,
            billboard: self.matrices.billboard,
            position: self.position.extend(1.0),
            range: Vec4::new(
                self.view_range.z_near,
                self.view_range.z_far,
                self.tan_half_fov,
                self.aspect,
            ),
        }
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
