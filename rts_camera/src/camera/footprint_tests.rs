use glam::Vec3;
use std::f32::consts::PI;
use crate::camera::frustum::FrustumPlanes;
use crate::camera::orientation::Basis;
use crate::terrain::{MapExtents, SQUARE_SIZE};
use super::*;

fn line(slope: f32, base: f32, sign: i32) -> FrustumLine {
    FrustumLine { slope, base, sign, z_min: -10.0, z_max: 1000.0 }
}

/// 45 degree camera above the map centre, pitched 45 degrees down towards -Z.
fn oblique_planes() -> (FrustumPlanes, Vec3) {
    let half_fov = 22.5f32.to_radians();
    let basis = Basis::from_rotation(Vec3::new(0.75 * PI, 0.0, 0.0));
    let planes = FrustumPlanes::from_basis(&basis, half_fov.tan(), half_fov, 1.0);
    (planes, Vec3::new(512.0, 1000.0, 512.0))
}

// ============================================================================
// FrustumLine
// ============================================================================

#[test]
fn test_line_evaluation() {
    let l = line(0.5, 3.0, 1);
    assert_eq!(l.x_at(0.0), 3.0);
    assert_eq!(l.x_at(4.0), 5.0);
    assert!(l.covers(-10.0));
    assert!(l.covers(1000.0));
    assert!(!l.covers(1000.5));
}

// ============================================================================
// FrustumFootprint::extract
// ============================================================================

#[test]
fn test_extract_produces_four_lines() {
    let (planes, pos) = oblique_planes();
    let mut fp = FrustumFootprint::new();
    fp.extract(&planes, pos, 0.0, 0.0, SQUARE_SIZE, false, MapExtents::new(128, 128));

    assert_eq!(fp.positive.len() + fp.negative.len(), 4);
    for l in &fp.negative {
        assert_eq!(l.sign, 1);
    }
    for l in &fp.positive {
        assert_eq!(l.sign, -1);
    }
}

#[test]
fn test_extract_initial_z_range_from_map() {
    let (planes, pos) = oblique_planes();
    let mut fp = FrustumFootprint::new();
    fp.extract(&planes, pos, 0.0, 0.0, SQUARE_SIZE, false, MapExtents::new(64, 100));

    for l in fp.positive.iter().chain(fp.negative.iter()) {
        assert_eq!(l.z_min, -100.0);
        assert_eq!(l.z_max, 100.0 * SQUARE_SIZE + 100.0);
    }
}

#[test]
fn test_extract_force_negative() {
    let (planes, pos) = oblique_planes();
    let mut fp = FrustumFootprint::new();
    fp.extract(&planes, pos, 0.0, 0.0, SQUARE_SIZE, true, MapExtents::new(128, 128));

    assert!(fp.positive.is_empty());
    assert_eq!(fp.negative.len(), 4);
    assert_eq!(fp.lines(true).len(), 4);
}

#[test]
fn test_extract_rebuilds_from_scratch() {
    let (planes, pos) = oblique_planes();
    let mut fp = FrustumFootprint::new();
    fp.extract(&planes, pos, 0.0, 0.0, SQUARE_SIZE, false, MapExtents::new(128, 128));
    fp.extract(&planes, pos, 0.0, 0.0, SQUARE_SIZE, false, MapExtents::new(128, 128));

    assert_eq!(fp.positive.len() + fp.negative.len(), 4);
}

#[test]
fn test_extract_lines_are_finite() {
    let (planes, pos) = oblique_planes();
    let mut fp = FrustumFootprint::new();
    fp.extract(&planes, pos, -50.0, 200.0, SQUARE_SIZE, false, MapExtents::new(128, 128));

    for l in fp.positive.iter().chain(fp.negative.iter()) {
        assert!(l.slope.is_finite());
        assert!(l.base.is_finite());
    }
}

#[test]
fn test_side_lines_meet_below_camera() {
    // left and right traces of a yaw-0 camera are mirror images about x = pos.x
    let (planes, pos) = oblique_planes();
    let mut fp = FrustumFootprint::new();
    fp.extract(&planes, pos, 0.0, 0.0, SQUARE_SIZE, false, MapExtents::new(128, 128));

    let right = *fp.positive.iter().find(|l| l.slope.abs() < 10.0).unwrap();
    let left = *fp.negative.iter().find(|l| l.slope.abs() < 10.0).unwrap();
    assert!((right.slope + left.slope).abs() < 1e-4);

    let cross_z = -(right.base - left.base) / (right.slope - left.slope);
    assert!((right.x_at(cross_z) - pos.x / SQUARE_SIZE).abs() < 1e-2);
    assert!((left.x_at(cross_z) - pos.x / SQUARE_SIZE).abs() < 1e-2);
}

#[test]
fn test_side_trace_lies_on_plane() {
    let (planes, pos) = oblique_planes();
    let mut fp = FrustumFootprint::new();
    fp.extract(&planes, pos, 0.0, 0.0, 1.0, false, MapExtents::new(128, 128));

    // scale 1: grid units are world units
    let right = *fp.positive.iter().find(|l| l.slope.abs() < 10.0).unwrap();
    for z in [0.0f32, 100.0, 400.0] {
        let p = Vec3::new(right.x_at(z), 0.0, z);
        assert!((p - pos).dot(planes.right()).abs() < 1e-2);
    }
}

#[test]
fn test_sky_planes_use_min_y_ground_planes_max_y() {
    let pos = Vec3::new(0.0, 100.0, 0.0);
    let extents = MapExtents::new(16, 16);

    let sky = FrustumPlanes { planes: [Vec3::new(1.0, 0.5, 0.0).normalize(); 4] };
    let mut fp = FrustumFootprint::new();
    fp.extract(&sky, pos, 0.0, 50.0, 1.0, true, extents);
    assert!((fp.negative[0].base - 50.0).abs() < 1e-3);
    assert!(fp.negative[0].slope.abs() < 1e-6);

    let ground = FrustumPlanes { planes: [Vec3::new(1.0, -0.5, 0.0).normalize(); 4] };
    fp.extract(&ground, pos, 0.0, 50.0, 1.0, true, extents);
    assert!((fp.negative[0].base + 25.0).abs() < 1e-3);
}

// ============================================================================
// FrustumFootprint::clip
// ============================================================================

#[test]
fn test_clip_parallel_lines_unchanged() {
    let mut fp = FrustumFootprint::new();
    fp.negative.push(line(2.0, 0.0, 1));
    fp.negative.push(line(2.0, 5.0, -1));
    let before = fp.negative.clone();

    fp.clip(true, 0.0, 100.0);

    assert_eq!(fp.negative, before);
}

#[test]
fn test_clip_crossing_lowers_z_max() {
    let mut fp = FrustumFootprint::new();
    fp.negative.push(line(1.0, 0.0, 1));
    fp.negative.push(line(-1.0, 10.0, -1));

    fp.clip(true, 0.0, 100.0);

    // cross at z = -(0 - 10) / (1 - -1) = 5
    assert_eq!(fp.negative[0].z_max, 5.0);
    assert_eq!(fp.negative[1].z_max, 5.0);
    assert_eq!(fp.negative[0].z_min, -10.0);
    assert_eq!(fp.negative[1].z_min, -10.0);
}

#[test]
fn test_clip_crossing_raises_z_min() {
    let mut fp = FrustumFootprint::new();
    fp.positive.push(line(1.0, 0.0, -1));
    fp.positive.push(line(-1.0, 10.0, 1));

    fp.clip(false, 0.0, 100.0);

    assert_eq!(fp.positive[0].z_min, 5.0);
    assert_eq!(fp.positive[1].z_min, 5.0);
    assert_eq!(fp.positive[0].z_max, 1000.0);
}

#[test]
fn test_clip_ignores_crossings_outside_bounds() {
    let mut fp = FrustumFootprint::new();
    fp.negative.push(line(1.0, 0.0, 1));
    fp.negative.push(line(-1.0, 10.0, -1));

    // crossing at z = 5 is below the lower bound
    fp.clip(true, 6.0, 100.0);

    assert_eq!(fp.negative[0].z_max, 1000.0);
    assert_eq!(fp.negative[1].z_max, 1000.0);
}

#[test]
fn test_clip_only_touches_chosen_set() {
    let mut fp = FrustumFootprint::new();
    fp.negative.push(line(1.0, 0.0, 1));
    fp.negative.push(line(-1.0, 10.0, -1));
    fp.positive.push(line(1.0, 0.0, 1));
    fp.positive.push(line(-1.0, 10.0, -1));

    fp.clip(false, 0.0, 100.0);

    assert_eq!(fp.negative[0].z_max, 1000.0);
    assert_eq!(fp.positive[0].z_max, 5.0);
}
