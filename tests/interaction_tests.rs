//! Interaction Tests
//!
//! Tests for:
//! - ZoomToggle scale round-trip
//! - OneShotRotation self-termination and re-trigger guard
//! - InteractionSet gesture routing
//! - InteractionKind configuration

use std::f32::consts::TAU;

use glam::{Quat, Vec3};

use folio::interaction::{
    Gesture, Interaction, InteractionKind, InteractionSet, OneShotRotation, ZoomToggle,
};
use folio::scene::{BoundingBox, ModelAsset, ModelInstance, Stage};

const EPSILON: f32 = 1e-4;

fn approx_vec3(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

fn model() -> ModelInstance {
    let mut model =
        ModelInstance::from_asset(ModelAsset::new("page", BoundingBox::from_size(Vec3::ONE)));
    model.transform.set_uniform_scale(0.37);
    model
}

fn ticks_for_full_turn(step: f32) -> usize {
    (TAU / step).ceil() as usize
}

// ============================================================================
// ZoomToggle
// ============================================================================

#[test]
fn zoom_scales_up_then_back() {
    let mut model = model();
    let rest = model.transform.scale;
    let mut zoom = ZoomToggle::new(1.5);

    assert!(zoom.trigger(&mut model));
    assert!(approx_vec3(model.transform.scale, rest * 1.5));
    assert!(zoom.state().zoomed_in);

    assert!(zoom.trigger(&mut model));
    assert!(approx_vec3(model.transform.scale, rest));
    assert!(!zoom.state().zoomed_in);
}

#[test]
fn zoom_survives_many_round_trips() {
    let mut model = model();
    let rest = model.transform.scale;
    let mut zoom = ZoomToggle::default();

    for _ in 0..100 {
        zoom.trigger(&mut model);
        zoom.trigger(&mut model);
    }
    assert!(
        approx_vec3(model.transform.scale, rest),
        "Scale drifted to {:?}",
        model.transform.scale
    );
}

#[test]
fn zoom_ignores_ticks() {
    let mut model = model();
    let rest = model.transform.scale;
    let mut zoom = ZoomToggle::default();

    zoom.tick(&mut model);
    assert_eq!(model.transform.scale, rest);
}

// ============================================================================
// OneShotRotation
// ============================================================================

#[test]
fn rotation_completes_one_turn_and_stops() {
    let mut model = model();
    let mut rotation = OneShotRotation::new(0.05);

    assert!(rotation.trigger(&mut model));
    assert!(rotation.state().rotating);

    let ticks = ticks_for_full_turn(0.05);
    for _ in 0..ticks - 1 {
        rotation.tick(&mut model);
    }
    assert!(rotation.state().rotating, "Still turning one tick before the end");

    rotation.tick(&mut model);
    assert!(!rotation.state().rotating);
    assert_eq!(rotation.state().angle, 0.0);
    assert!(model.transform.rotation.abs_diff_eq(Quat::IDENTITY, EPSILON));
}

#[test]
fn rotation_turns_about_vertical_axis() {
    let mut model = model();
    let mut rotation = OneShotRotation::new(0.5);

    rotation.trigger(&mut model);
    rotation.tick(&mut model);

    let expected = Quat::from_rotation_y(0.5);
    assert!(model.transform.rotation.abs_diff_eq(expected, EPSILON));
}

#[test]
fn rotation_retrigger_mid_turn_is_ignored() {
    let mut model = model();
    let mut rotation = OneShotRotation::new(0.05);

    rotation.trigger(&mut model);
    for _ in 0..10 {
        rotation.tick(&mut model);
    }
    let angle = rotation.state().angle;

    assert!(!rotation.trigger(&mut model));
    assert_eq!(rotation.state().angle, angle, "Angle must not reset");
}

#[test]
fn rotation_restores_rest_orientation() {
    let mut model = model();
    let rest = Quat::from_rotation_x(0.3);
    model.transform.rotation = rest;
    let mut rotation = OneShotRotation::new(0.1);

    rotation.trigger(&mut model);
    for _ in 0..ticks_for_full_turn(0.1) {
        rotation.tick(&mut model);
    }
    assert!(model.transform.rotation.abs_diff_eq(rest, EPSILON));
}

#[test]
fn rotation_can_run_again_after_finishing() {
    let mut model = model();
    let mut rotation = OneShotRotation::new(1.0);

    rotation.trigger(&mut model);
    for _ in 0..ticks_for_full_turn(1.0) {
        rotation.tick(&mut model);
    }
    assert!(rotation.trigger(&mut model));
}

#[test]
fn idle_rotation_ignores_ticks() {
    let mut model = model();
    let mut rotation = OneShotRotation::default();

    rotation.tick(&mut model);
    assert!(!rotation.state().rotating);
    assert_eq!(model.transform.rotation, Quat::IDENTITY);
}

// ============================================================================
// InteractionSet
// ============================================================================

fn stage_with_interactions() -> (Stage, InteractionSet) {
    let mut stage = Stage::new();
    let mut set = InteractionSet::new();
    let zoomed = stage.add_model(model());
    let spun = stage.add_model(model());
    set.attach(0, zoomed, InteractionKind::Zoom { factor: 2.0 }.build());
    set.attach(1, spun, InteractionKind::Rotate { step: 0.1 }.build());
    (stage, set)
}

#[test]
fn targeted_gesture_reaches_one_content() {
    let (mut stage, mut set) = stage_with_interactions();

    assert_eq!(set.handle_gesture(Gesture::Activate(0), &mut stage), 1);
    assert_eq!(set.handle_gesture(Gesture::Activate(7), &mut stage), 0);
}

#[test]
fn global_gesture_reaches_every_content() {
    let (mut stage, mut set) = stage_with_interactions();

    assert_eq!(set.handle_gesture(Gesture::ActivateAll, &mut stage), 2);
    // Zoom toggles back, the rotation is still mid-turn
    assert_eq!(set.handle_gesture(Gesture::ActivateAll, &mut stage), 1);
}

#[test]
fn set_reports_attached_kinds() {
    let (_, set) = stage_with_interactions();
    assert_eq!(set.len(), 2);
    assert_eq!(set.kind_of(0), Some("zoom"));
    assert_eq!(set.kind_of(1), Some("rotate"));
    assert_eq!(set.kind_of(2), None);
}

// ============================================================================
// InteractionKind
// ============================================================================

#[test]
fn kind_deserializes_with_defaults() {
    let zoom: InteractionKind = serde_json::from_str(r#"{ "kind": "zoom" }"#).unwrap();
    assert_eq!(zoom, InteractionKind::Zoom { factor: 1.5 });

    let rotate: InteractionKind =
        serde_json::from_str(r#"{ "kind": "rotate", "step": 0.1 }"#).unwrap();
    assert_eq!(rotate, InteractionKind::Rotate { step: 0.1 });
}

#[test]
fn kind_rejects_degenerate_parameters() {
    assert!(InteractionKind::Zoom { factor: 0.0 }.validate(3).is_err());
    assert!(InteractionKind::Rotate { step: -0.05 }.validate(3).is_err());
    assert!(InteractionKind::Rotate { step: f32::NAN }.validate(3).is_err());
    assert!(InteractionKind::Zoom { factor: 1.5 }.validate(3).is_ok());
}
