use glam::{Mat4, Vec3, Vec4};
use super::*;

fn assert_mat_near(a: &Mat4, b: &Mat4, eps: f32) {
    let a = a.to_cols_array();
    let b = b.to_cols_array();
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() < eps, "entry {}: {} vs {}", i, a[i], b[i]);
    }
}

// ============================================================================
// perspective
// ============================================================================

#[test]
fn test_perspective_matches_glam_gl() {
    let fov = 45.0f32.to_radians();
    let ours = perspective((fov * 0.5).tan(), 16.0 / 9.0, 2.8, 8000.0);
    let reference = Mat4::perspective_rh_gl(fov, 16.0 / 9.0, 2.8, 8000.0);
    assert_mat_near(&ours, &reference, 1e-4);
}

#[test]
fn test_perspective_is_not_affine() {
    let m = perspective(0.4142, 1.0, 1.0, 100.0).to_cols_array();
    assert_eq!(m[15], 0.0);
    assert_eq!(m[11], -1.0);
    // untouched entries keep their identity value
    assert_eq!(m[1], 0.0);
    assert_eq!(m[12], 0.0);
}

#[test]
fn test_perspective_maps_near_and_far_to_clip_bounds() {
    let m = perspective(0.5, 1.0, 1.0, 100.0);
    let near = m * Vec4::new(0.0, 0.0, -1.0, 1.0);
    let far = m * Vec4::new(0.0, 0.0, -100.0, 1.0);
    assert!((near.z / near.w + 1.0).abs() < 1e-5);
    assert!((far.z / far.w - 1.0).abs() < 1e-4);
}

// ============================================================================
// look_at
// ============================================================================

#[test]
fn test_look_at_matches_glam() {
    let eye = Vec3::new(0.0, 0.0, 5.0);
    let ours = look_at(eye, Vec3::ZERO, Vec3::Y);
    let reference = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    assert_mat_near(&ours, &reference, 1e-6);
}

#[test]
fn test_look_at_moves_eye_to_origin() {
    let eye = Vec3::new(100.0, 400.0, -30.0);
    let view = look_at(eye, eye + Vec3::new(0.0, -0.6, -0.8), Vec3::new(0.0, 0.8, -0.6));
    let p = view.transform_point3(eye);
    assert!(p.length() < 1e-3, "eye maps to {:?}", p);
}

#[test]
fn test_look_at_target_on_negative_z_axis() {
    let eye = Vec3::new(10.0, 20.0, 30.0);
    let view = look_at(eye, eye + Vec3::X, Vec3::Y);
    let p = view.transform_point3(eye + Vec3::X * 7.0);
    assert!((p - Vec3::new(0.0, 0.0, -7.0)).length() < 1e-4);
}

// ============================================================================
// invert_affine / CameraMatrices
// ============================================================================

/// View matrix with an exactly orthonormal rotation block.
fn oblique_view(eye: Vec3, center: Vec3) -> Mat4 {
    let f = (center - eye).normalize();
    let up = f.cross(Vec3::Y).normalize().cross(f);
    look_at(eye, center, up)
}

#[test]
fn test_invert_affine_matches_general_inverse() {
    let view = oblique_view(Vec3::new(3.0, 50.0, 7.0), Vec3::new(40.0, 0.0, -20.0));
    assert_mat_near(&invert_affine(&view), &view.inverse(), 1e-3);
}

#[test]
fn test_camera_matrices_set_derives_everything() {
    let view = look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    let proj = perspective(0.4142, 1.5, 1.0, 500.0);
    let mut m = CameraMatrices::default();
    m.set(view, proj);

    assert_eq!(m.view, view);
    assert_eq!(m.projection, proj);
    assert_eq!(m.view_projection, proj * view);
    assert_mat_near(&(m.view * m.view_inverse), &Mat4::IDENTITY, 1e-5);
    assert_mat_near(&(m.projection * m.projection_inverse), &Mat4::IDENTITY, 1e-4);
    assert_mat_near(&(m.view_projection * m.view_projection_inverse), &Mat4::IDENTITY, 1e-3);
}

#[test]
fn test_billboard_is_inverse_rotation() {
    let view = oblique_view(Vec3::new(12.0, 30.0, -4.0), Vec3::new(0.0, 0.0, -50.0));
    let mut m = CameraMatrices::default();
    m.set(view, Mat4::IDENTITY);

    assert_eq!(m.billboard.w_axis, Vec4::W);
    let mut rotation = view;
    rotation.w_axis = Vec4::W;
    assert_mat_near(&(m.billboard * rotation), &Mat4::IDENTITY, 1e-5);
}
