//! Camera module: per-role camera state, frustum culling, footprint
//! lines, screen projection and movement input.
//!
//! Cameras are owned by a `CameraSet` and driven once per frame by the
//! caller. Nothing here is global.

mod camera;
mod footprint;
mod frustum;
mod movement;
mod orientation;
mod projection;
mod registry;
mod screen;
mod uniform;
mod view_range;
pub mod input;

pub use camera::{Camera, DEFAULT_FOV};
pub use footprint::{FrustumFootprint, FrustumLine};
pub use frustum::{
    FrustumPlanes,
    PLANE_TOP, PLANE_BOTTOM, PLANE_RIGHT, PLANE_LEFT, PLANE_COUNT,
};
pub use movement::{
    move_distance, movement_vector, speed_multiplier, vertical_movement, MoveFlags, MoveInput,
};
pub use orientation::{
    direction_from_rotation, right_from_rotation, rotation_from_direction, safe_normalize, Basis,
};
pub use projection::{invert_affine, look_at, perspective, CameraMatrices};
pub use registry::{CameraRole, CameraSet};
pub use screen::{pixel_to_ray, world_to_screen, Viewport};
pub use uniform::CameraUniform;
pub use view_range::ViewRange;
