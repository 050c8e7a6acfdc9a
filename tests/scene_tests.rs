//! Scene Tests
//!
//! Tests for:
//! - Transform TRS dirty checking
//! - BoundingBox center, size, union, transform
//! - PositionalAudio single-voice playback
//! - Stage matrix refresh

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use glam::{Affine3A, Quat, Vec3};

use folio::scene::{
    AudioClip, BoundingBox, ModelAsset, ModelInstance, PlaybackState, PositionalAudio, Stage,
    Transform,
};

const EPSILON: f32 = 1e-5;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

// ============================================================================
// Transform
// ============================================================================

#[test]
fn transform_default_is_identity() {
    let t = Transform::new();
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Quat::IDENTITY);
    assert_eq!(t.scale, Vec3::ONE);
}

#[test]
fn transform_update_local_matrix_dirty_check() {
    let mut t = Transform::new();

    // First call always rebuilds
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.position = Vec3::new(0.0, -0.4, 0.0);
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.rotation = Quat::from_rotation_y(FRAC_PI_2);
    assert!(t.update_local_matrix());

    t.set_uniform_scale(0.5);
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());
}

#[test]
fn transform_local_matrix_reflects_trs() {
    let mut t = Transform::new();
    t.position = Vec3::new(1.0, 2.0, 3.0);
    t.set_uniform_scale(2.0);
    t.update_local_matrix();

    let p = t.local_matrix().transform_point3(Vec3::ONE);
    assert!(vec3_approx(p, Vec3::new(3.0, 4.0, 5.0)));
}

// ============================================================================
// BoundingBox
// ============================================================================

#[test]
fn bbox_center_and_size() {
    let bb = BoundingBox::new(Vec3::new(-1.0, 0.0, -2.0), Vec3::new(3.0, 1.0, 2.0));
    assert!(vec3_approx(bb.center(), Vec3::new(1.0, 0.5, 0.0)));
    assert!(vec3_approx(bb.size(), Vec3::new(4.0, 1.0, 4.0)));
    assert!((bb.max_dimension() - 4.0).abs() < EPSILON);
}

#[test]
fn bbox_empty_has_zero_size() {
    assert!(BoundingBox::EMPTY.is_empty());
    assert_eq!(BoundingBox::EMPTY.size(), Vec3::ZERO);
    assert_eq!(BoundingBox::default(), BoundingBox::EMPTY);
}

#[test]
fn bbox_union_with_empty_is_identity() {
    let bb = BoundingBox::from_size(Vec3::ONE);
    assert_eq!(BoundingBox::EMPTY.union(&bb), bb);

    let other = BoundingBox::new(Vec3::splat(1.0), Vec3::splat(2.0));
    let joined = bb.union(&other);
    assert!(vec3_approx(joined.min, Vec3::splat(-0.5)));
    assert!(vec3_approx(joined.max, Vec3::splat(2.0)));
}

#[test]
fn bbox_transform_rotation() {
    let bb = BoundingBox::from_size(Vec3::new(2.0, 1.0, 0.0));
    let rotated = bb.transform(&Affine3A::from_rotation_z(FRAC_PI_2));
    assert!(vec3_approx(rotated.size(), Vec3::new(1.0, 2.0, 0.0)));
}

#[test]
fn bbox_transform_translation_and_scale() {
    let bb = BoundingBox::from_size(Vec3::ONE);
    let m = Affine3A::from_scale_rotation_translation(Vec3::splat(3.0), Quat::IDENTITY, Vec3::X);
    let moved = bb.transform(&m);
    assert!(vec3_approx(moved.center(), Vec3::X));
    assert!(vec3_approx(moved.size(), Vec3::splat(3.0)));
}

// ============================================================================
// PositionalAudio
// ============================================================================

fn emitter() -> PositionalAudio {
    PositionalAudio::new(Arc::new(AudioClip::new("en1", vec![0_u8; 8])))
}

#[test]
fn audio_refuses_second_play() {
    let mut audio = emitter();
    assert!(audio.play());
    assert!(!audio.play());
    assert_eq!(audio.active_voices(), 1);
    assert_eq!(audio.start_count(), 1);
}

#[test]
fn audio_pause_then_resume() {
    let mut audio = emitter();
    audio.pause();
    assert_eq!(audio.state(), PlaybackState::Stopped, "Pause only acts while playing");

    audio.play();
    audio.pause();
    assert_eq!(audio.state(), PlaybackState::Paused);
    assert_eq!(audio.active_voices(), 0);

    assert!(audio.play());
    assert_eq!(audio.start_count(), 2);
}

#[test]
fn audio_stop_from_any_state() {
    let mut audio = emitter();
    audio.play();
    audio.stop();
    assert_eq!(audio.state(), PlaybackState::Stopped);
}

// ============================================================================
// Stage
// ============================================================================

#[test]
fn stage_refreshes_only_changed_models() {
    let mut stage = Stage::new();
    let asset = ModelAsset::new("page", BoundingBox::from_size(Vec3::ONE));
    let a = stage.add_model(ModelInstance::from_asset(asset.clone()));
    stage.add_model(ModelInstance::from_asset(asset));

    assert_eq!(stage.update_matrices(), 2);
    assert_eq!(stage.update_matrices(), 0);

    stage.model_mut(a).unwrap().transform.set_uniform_scale(0.5);
    assert_eq!(stage.update_matrices(), 1);
}

#[test]
fn stale_keys_resolve_to_none() {
    let mut stage = Stage::new();
    let key = stage.add_model(ModelInstance::from_asset(ModelAsset::new(
        "page",
        BoundingBox::from_size(Vec3::ONE),
    )));
    stage.models.remove(key);
    assert!(stage.model(key).is_none());
}
