/// Movement-state vector: turns held keys or edge scrolling into a
/// per-frame camera movement delta.

use bitflags::bitflags;
use glam::{IVec2, Vec3};
use crate::config::CameraConfig;
use super::screen::Viewport;

bitflags! {
    /// Movement keys currently held.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MoveFlags: u8 {
        const FORWARD = 1 << 0;
        const BACK    = 1 << 1;
        const LEFT    = 1 << 2;
        const RIGHT   = 1 << 3;
        const UP      = 1 << 4;
        const DOWN    = 1 << 5;
        /// Speed modifier: x0.1
        const SLOW    = 1 << 6;
        /// Speed modifier: x10
        const FAST    = 1 << 7;
    }
}

/// Where this frame's movement comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    /// Held movement keys
    Keys,
    /// Cursor near the view border, pixel position in window space
    EdgeScroll(IVec2),
}

/// Seconds per millisecond; frame times are reported in milliseconds.
const MS_TO_SECONDS: f32 = 0.001;

/// World units moved per millisecond at speed 1.
const DISTANCE_PER_MS: f32 = 0.2;

/// Speed multiplier from the SLOW/FAST modifiers.
pub fn speed_multiplier(flags: MoveFlags) -> f32 {
    let mut speed = 1.0;
    if flags.contains(MoveFlags::SLOW) {
        speed *= 0.1;
    }
    if flags.contains(MoveFlags::FAST) {
        speed *= 10.0;
    }
    speed
}

/// Ground-plane movement for this frame.
///
/// `x` is rightwards, `y` is forwards, both already scaled by the frame
/// time. `z` carries the speed multiplier, which the caller applies.
pub fn movement_vector(
    flags: MoveFlags,
    input: MoveInput,
    viewport: &Viewport,
    frame_time_ms: f32,
    config: &CameraConfig,
) -> Vec3 {
    let step = frame_time_ms * MS_TO_SECONDS;

    let (x, y) = match input {
        MoveInput::Keys => (
            axis(flags, MoveFlags::RIGHT, MoveFlags::LEFT),
            axis(flags, MoveFlags::FORWARD, MoveFlags::BACK),
        ),
        MoveInput::EdgeScroll(cursor) => edge_scroll(cursor, viewport, config),
    };

    Vec3::new(x * step, y * step, speed_multiplier(flags))
}

/// Distance a camera travels this frame at the current speed.
pub fn move_distance(flags: MoveFlags, frame_time_ms: f32) -> f32 {
    frame_time_ms * DISTANCE_PER_MS * speed_multiplier(flags)
}

/// Signed vertical distance for this frame from UP/DOWN.
pub fn vertical_movement(flags: MoveFlags, frame_time_ms: f32) -> f32 {
    axis(flags, MoveFlags::UP, MoveFlags::DOWN) * move_distance(flags, frame_time_ms)
}

fn axis(flags: MoveFlags, positive: MoveFlags, negative: MoveFlags) -> f32 {
    let mut v = 0.0;
    if flags.contains(positive) {
        v += 1.0;
    }
    if flags.contains(negative) {
        v -= 1.0;
    }
    v
}

/// Edge-scroll amounts in [-1, 1]: +x at the right edge, +y at the top edge.
fn edge_scroll(cursor: IVec2, viewport: &Viewport, config: &CameraConfig) -> (f32, f32) {
    let size = viewport.size().max(IVec2::ONE);
    let border_x = ((size.x as f32 * config.edge_move_width) as i32).max(1) as f32;
    let border_y = ((size.y as f32 * config.edge_move_width) as i32).max(1) as f32;

    // x: distance to the right edge is positive, to the left edge negative;
    // y: distance to the top edge is positive, to the bottom edge negative.
    // The sign of zero matters here, so stay in f32.
    let dist_x = -signed_edge_distance(cursor.x - viewport.x, size.x);
    let dist_y = signed_edge_distance(cursor.y - viewport.y, size.y);

    let (move_x, move_y) = if config.edge_move_dynamic {
        (
            ((border_x - dist_x.abs()) / border_x).clamp(0.0, 1.0),
            ((border_y - dist_y.abs()) / border_y).clamp(0.0, 1.0),
        )
    } else {
        (
            if dist_x.abs() < border_x { 1.0 } else { 0.0 },
            if dist_y.abs() < border_y { 1.0 } else { 0.0 },
        )
    };

    (move_x.copysign(dist_x), move_y.copysign(dist_y))
}

/// Distance to the nearer edge of `[0, size)`: positive (or +0) when the
/// low edge is nearer, negative (or -0) when the high edge is.
fn signed_edge_distance(pos: i32, size: i32) -> f32 {
    let d = pos.clamp(0, size - 1) as f32;
    let to_high = (size - 1) as f32 - d;
    if to_high < d {
        -to_high
    } else {
        d
    }
}

#[cfg(test)]
#[path = "movement_tests.rs"]
mod tests;
