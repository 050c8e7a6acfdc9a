//! Animation System Tests
//!
//! Tests for:
//! - AnimationAction looping clock
//! - AnimationMixer action creation and time reset
//! - AnimationBinder first-clip selection and static models
//! - AnimationScheduler shared clock

use std::sync::Arc;

use glam::Vec3;

use folio::animation::{
    AnimationAction, AnimationBinder, AnimationClip, AnimationMixer, AnimationScheduler,
};
use folio::scene::{BoundingBox, ModelAsset, ModelInstance, Stage};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_clip(duration: f32) -> Arc<AnimationClip> {
    Arc::new(AnimationClip::new("test", duration))
}

fn running_action(duration: f32) -> AnimationAction {
    let mut action = AnimationAction::new(make_clip(duration));
    action.play();
    action
}

fn model_with_clips(durations: &[f32]) -> ModelInstance {
    let mut asset = ModelAsset::new("page", BoundingBox::from_size(Vec3::ONE));
    for (i, &duration) in durations.iter().enumerate() {
        asset = asset.with_animation(AnimationClip::new(format!("clip{i}"), duration));
    }
    ModelInstance::from_asset(asset)
}

// ============================================================================
// AnimationAction
// ============================================================================

#[test]
fn action_starts_stopped() {
    let mut action = AnimationAction::new(make_clip(2.0));
    assert!(!action.is_running());

    action.update(1.0);
    assert!(approx(action.time, 0.0), "Action should not advance before play");
}

#[test]
fn action_wraps_at_clip_end() {
    let mut action = running_action(2.0);

    action.update(2.5);
    assert!(
        approx(action.time, 0.5),
        "Should wrap to 0.5, got {}",
        action.time
    );
    assert!(!action.paused, "Looping clock never auto-pauses");
}

#[test]
fn action_wraps_over_many_cycles() {
    let mut action = running_action(2.0);

    for _ in 0..10 {
        action.update(0.75);
    }
    // 7.5s into a 2s loop
    assert!(approx(action.time, 1.5), "Got {}", action.time);
}

#[test]
fn action_disabled_no_update() {
    let mut action = running_action(2.0);
    action.enabled = false;
    action.time = 0.5;

    action.update(1.0);
    assert!(approx(action.time, 0.5), "Disabled action should not advance");
}

#[test]
fn action_zero_duration_never_advances() {
    let mut action = running_action(0.0);
    action.update(1.0);
    assert!(approx(action.time, 0.0));
}

// ============================================================================
// AnimationMixer
// ============================================================================

#[test]
fn mixer_clip_action_is_reused_per_clip() {
    let clip = make_clip(1.0);
    let mut mixer = AnimationMixer::new("page");

    mixer.clip_action(&clip).play();
    mixer.clip_action(&clip).play();

    assert_eq!(mixer.actions().len(), 1);
}

#[test]
fn mixer_set_time_rewinds_without_stopping() {
    let clip = make_clip(4.0);
    let mut mixer = AnimationMixer::new("page");
    mixer.clip_action(&clip).play();

    mixer.update(1.25);
    assert!(approx(mixer.actions()[0].time, 1.25));

    mixer.set_time(0.0);
    assert!(approx(mixer.time(), 0.0));
    assert!(approx(mixer.actions()[0].time, 0.0));
    assert!(mixer.actions()[0].is_running(), "Rewind must keep the loop running");

    mixer.update(0.5);
    assert!(approx(mixer.actions()[0].time, 0.5));
}

#[test]
fn mixer_set_time_seeks_forward() {
    let clip = make_clip(4.0);
    let mut mixer = AnimationMixer::new("page");
    mixer.clip_action(&clip).play();
    mixer.update(3.0);

    mixer.set_time(1.0);
    assert!(approx(mixer.actions()[0].time, 1.0));
}

// ============================================================================
// AnimationBinder
// ============================================================================

#[test]
fn binder_plays_first_clip_in_loop() {
    let model = model_with_clips(&[3.0, 7.0]);
    let mixer = AnimationBinder::bind(&model).expect("model has clips");

    assert_eq!(mixer.root_name(), "page");
    assert_eq!(mixer.actions().len(), 1);

    let action = &mixer.actions()[0];
    assert_eq!(action.clip().name, "clip0");
    assert!(action.is_running(), "Playback starts at bind time");
}

#[test]
fn binder_returns_none_for_static_model() {
    let model = model_with_clips(&[]);
    assert!(AnimationBinder::bind(&model).is_none());
}

// ============================================================================
// AnimationScheduler
// ============================================================================

fn stage_with_mixers(count: usize) -> (Stage, AnimationScheduler) {
    let mut stage = Stage::new();
    let mut scheduler = AnimationScheduler::new();
    for _ in 0..count {
        let mixer = AnimationBinder::bind(&model_with_clips(&[10.0])).unwrap();
        scheduler.register(stage.add_mixer(mixer));
    }
    (stage, scheduler)
}

#[test]
fn scheduler_advances_every_entry() {
    let (mut stage, scheduler) = stage_with_mixers(3);

    let advanced = scheduler.tick(&mut stage, 0.016);
    assert_eq!(advanced, 3);
    for &key in scheduler.entries() {
        let mixer = stage.mixer(key).unwrap();
        assert!(approx(mixer.actions()[0].time, 0.016));
    }
}

#[test]
fn scheduler_accepts_variable_delta() {
    let (mut stage, scheduler) = stage_with_mixers(1);

    scheduler.tick(&mut stage, 0.016);
    scheduler.tick(&mut stage, 0.033);
    scheduler.tick(&mut stage, 0.1);

    let mixer = stage.mixer(scheduler.entries()[0]).unwrap();
    assert!(approx(mixer.time(), 0.149));
}

#[test]
fn scheduler_skips_stale_entries() {
    let (mut stage, scheduler) = stage_with_mixers(2);
    stage.mixers.remove(scheduler.entries()[0]);

    assert_eq!(scheduler.tick(&mut stage, 0.016), 1);
    assert_eq!(scheduler.len(), 2, "Entries are never removed");
}
