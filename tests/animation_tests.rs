//! Animation System Tests
//!
//! Tests for:
//! - Rotation wrap-around and the short-path rotate blend
//! - Clamping before the first and after the last keyframe
//! - Zero-weight mixing, determinism and loop equivalence
//! - Curve endpoints, stepped segments and Bezier easing
//! - Keyframe search boundaries
//! - Layered mixing of several animations
//! - AnimationAction loop modes and AnimationMixer ordering

use std::sync::Arc;

use glam::Vec2;

use marrow::animation::{
    Animation, AnimationAction, AnimationMixer, CurveTable, LoopMode, RotateTimeline,
    ScaleTimeline, Timeline, TranslateTimeline, locate_frame,
};
use marrow::core::BoneTransform;
use marrow::skeleton::{BoneData, Skeleton, SkeletonData};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Two bones, `root` at the origin and `arm` with a non-trivial setup pose.
fn rig() -> Arc<SkeletonData> {
    let mut builder = SkeletonData::builder();
    builder.add_bone(BoneData::new("root", None)).unwrap();
    builder
        .add_bone(BoneData::new("arm", Some(0)).with_setup(BoneTransform::new(
            30.0,
            Vec2::new(5.0, -2.0),
            Vec2::new(1.5, 1.0),
        )))
        .unwrap();
    Arc::new(builder.build())
}

fn rotate(bone: usize, keys: &[(f32, f32)]) -> Timeline {
    let mut timeline = RotateTimeline::new(bone, keys.len());
    for (i, &(time, angle)) in keys.iter().enumerate() {
        timeline.set_frame(i, time, angle);
    }
    timeline.into()
}

fn translate(bone: usize, keys: &[(f32, f32, f32)]) -> Timeline {
    let mut timeline = TranslateTimeline::new(bone, keys.len());
    for (i, &(time, x, y)) in keys.iter().enumerate() {
        timeline.set_frame(i, time, x, y);
    }
    timeline.into()
}

fn scale(bone: usize, keys: &[(f32, f32, f32)]) -> Timeline {
    let mut timeline = ScaleTimeline::new(bone, keys.len());
    for (i, &(time, x, y)) in keys.iter().enumerate() {
        timeline.set_frame(i, time, x, y);
    }
    timeline.into()
}

fn walk() -> Arc<Animation> {
    Arc::new(Animation::new(
        "walk",
        vec![
            rotate(1, &[(0.0, 0.0), (0.5, 120.0), (1.0, -170.0), (2.0, 10.0)]),
            translate(0, &[(0.0, 0.0, 0.0), (1.0, 4.0, 2.0), (2.0, 0.0, 0.0)]),
            scale(1, &[(0.0, 1.0, 1.0), (2.0, 2.0, 0.5)]),
        ],
    ))
}

fn pose_bits(skeleton: &Skeleton) -> Vec<u32> {
    skeleton
        .bones()
        .iter()
        .flat_map(|bone| {
            let t = bone.local;
            [t.rotation, t.translation.x, t.translation.y, t.scale.x, t.scale.y]
        })
        .map(f32::to_bits)
        .collect()
}

// ============================================================================
// Rotate: Wrap-Around
// ============================================================================

#[test]
fn rotate_takes_short_path_across_wrap() {
    let Timeline::Rotate(timeline) = rotate(0, &[(0.0, 0.0), (1.0, 350.0)]) else {
        unreachable!()
    };
    let angle = timeline.sample(0.5).unwrap();
    assert!(approx(angle, -5.0), "Expected -5.0, got {angle}");

    let mut skeleton = Skeleton::new(rig());
    timeline.apply(&mut skeleton, 0.5, 1.0);
    assert!(approx(skeleton.bones()[0].local.rotation, -5.0));
}

#[test]
fn rotate_applied_delta_stays_in_half_open_range() {
    let angles = [-720.0, -350.0, -181.0, -180.0, -1.0, 0.0, 179.0, 180.0, 181.0, 540.0];
    for &from in &angles {
        for &to in &angles {
            let timeline = rotate(1, &[(0.0, from), (1.0, to)]);
            for step in 0..=8 {
                let time = step as f32 * 0.15;
                let mut skeleton = Skeleton::new(rig());
                skeleton.bones_mut()[1].local.rotation = 97.0;

                timeline.apply(&mut skeleton, time, 1.0);
                let delta = skeleton.bones()[1].local.rotation - 97.0;
                assert!(
                    delta > -180.0 - EPSILON && delta <= 180.0 + EPSILON,
                    "delta {delta} out of range for {from} -> {to} at t={time}"
                );
            }
        }
    }
}

#[test]
fn rotate_huge_angles_evaluate_in_bounded_time() {
    let timeline = rotate(1, &[(0.0, 0.0), (1.0, 1e10), (2.0, -3e38)]);
    for time in [0.5, 1.5, 5.0] {
        let mut skeleton = Skeleton::new(rig());
        timeline.apply(&mut skeleton, time, 1.0);
        let rotation = skeleton.bones()[1].local.rotation;
        assert!(rotation.is_finite(), "t={time}: {rotation}");
    }
}

#[test]
fn rotate_blends_relative_to_setup_pose() {
    let timeline = rotate(1, &[(0.0, 20.0)]);
    let mut skeleton = Skeleton::new(rig());
    timeline.apply(&mut skeleton, 0.0, 1.0);
    // setup 30 + keyframe 20
    assert!(approx(skeleton.bones()[1].local.rotation, 50.0));
}

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn translate_clamps_after_last_keyframe() {
    let timeline = translate(0, &[(0.0, 0.0, 0.0), (2.0, 10.0, 0.0)]);

    for time in [2.0, 5.0, 50.0] {
        let mut skeleton = Skeleton::new(rig());
        timeline.apply(&mut skeleton, time, 1.0);
        assert!(approx(skeleton.bones()[0].local.translation.x, 10.0), "t={time}");
    }
}

#[test]
fn before_first_keyframe_is_noop() {
    let timelines = [
        rotate(1, &[(1.0, 90.0), (2.0, 0.0)]),
        translate(1, &[(1.0, 3.0, 3.0), (2.0, 0.0, 0.0)]),
        scale(1, &[(1.0, 2.0, 2.0), (2.0, 1.0, 1.0)]),
    ];
    for timeline in &timelines {
        let mut skeleton = Skeleton::new(rig());
        let before = skeleton.bones()[1].local;
        timeline.apply(&mut skeleton, 0.5, 1.0);
        assert_eq!(skeleton.bones()[1].local, before, "{:?}", timeline.kind());
    }
}

#[test]
fn scale_is_relative_to_unit() {
    // keyframe scale 2 on a bone with setup scale (1.5, 1) gives setup - 1 + 2
    let timeline = scale(1, &[(0.0, 2.0, 2.0)]);
    let mut skeleton = Skeleton::new(rig());
    timeline.apply(&mut skeleton, 0.0, 1.0);
    assert!(approx(skeleton.bones()[1].local.scale.x, 2.5));
    assert!(approx(skeleton.bones()[1].local.scale.y, 2.0));
}

// ============================================================================
// Mixing Properties
// ============================================================================

#[test]
fn zero_alpha_never_mutates_pose() {
    let animation = walk();
    for time in [-1.0, 0.0, 0.3, 0.75, 1.5, 2.0, 9.0] {
        let mut skeleton = Skeleton::new(rig());
        skeleton.bones_mut()[0].local.rotation = 12.0;
        let before = pose_bits(&skeleton);

        animation.mix(&mut skeleton, time, false, 0.0);
        animation.mix(&mut skeleton, time, true, 0.0);
        assert_eq!(pose_bits(&skeleton), before, "t={time}");
    }
}

#[test]
fn zero_alpha_keeps_negative_zero_bits() {
    let animation = walk();
    let mut skeleton = Skeleton::new(rig());
    for bone in skeleton.bones_mut() {
        bone.local = BoneTransform::new(-0.0, Vec2::splat(-0.0), Vec2::splat(-0.0));
    }
    let before = pose_bits(&skeleton);

    animation.mix(&mut skeleton, 0.5, false, 0.0);
    assert_eq!(pose_bits(&skeleton), before);
}

#[test]
fn full_weight_apply_is_deterministic() {
    let animation = walk();
    let data = rig();
    for time in [0.0, 0.25, 0.5, 1.1, 1.99, 2.0, 3.0] {
        let mut a = Skeleton::new(Arc::clone(&data));
        let mut b = Skeleton::new(Arc::clone(&data));
        animation.apply(&mut a, time, false);
        animation.apply(&mut b, time, false);
        assert_eq!(pose_bits(&a), pose_bits(&b), "t={time}");
    }
}

#[test]
fn looping_matches_prewrapped_time() {
    let animation = walk();
    let duration = animation.duration();
    assert_eq!(duration, 2.0);

    for time in [0.0, 0.4, 2.0, 2.7, 5.25, 13.9] {
        let mut looped = Skeleton::new(rig());
        let mut wrapped = Skeleton::new(rig());
        animation.mix(&mut looped, time, true, 0.6);
        animation.mix(&mut wrapped, time % duration, true, 0.6);
        assert_eq!(pose_bits(&looped), pose_bits(&wrapped), "t={time}");
    }
}

#[test]
fn empty_animation_is_noop() {
    let animation = Animation::new("nothing", Vec::new());
    assert_eq!(animation.duration(), 0.0);

    let mut skeleton = Skeleton::new(rig());
    let before = pose_bits(&skeleton);
    animation.apply(&mut skeleton, 3.0, true);
    assert_eq!(pose_bits(&skeleton), before);
}

// ============================================================================
// Layered Animations
// ============================================================================

#[test]
fn layered_mix_same_bone_is_order_dependent() {
    let idle = Animation::new("idle", vec![translate(0, &[(0.0, 10.0, 0.0)])]);
    let wave = Animation::new("wave", vec![translate(0, &[(0.0, 20.0, 0.0)])]);

    let mut forward = Skeleton::new(rig());
    idle.mix(&mut forward, 0.0, false, 0.7);
    wave.mix(&mut forward, 0.0, false, 0.3);
    // 0 + 10 * 0.7 = 7, then 7 + (20 - 7) * 0.3
    assert!(approx(forward.bones()[0].local.translation.x, 10.9));

    let mut reverse = Skeleton::new(rig());
    wave.mix(&mut reverse, 0.0, false, 0.3);
    idle.mix(&mut reverse, 0.0, false, 0.7);
    // 0 + 20 * 0.3 = 6, then 6 + (10 - 6) * 0.7
    assert!(approx(reverse.bones()[0].local.translation.x, 8.8));
}

#[test]
fn layered_mix_disjoint_bones_commutes() {
    let idle = Animation::new("idle", vec![rotate(0, &[(0.0, 0.0), (1.0, 40.0)])]);
    let wave = Animation::new("wave", vec![rotate(1, &[(0.0, -60.0), (1.0, 60.0)])]);

    let mut forward = Skeleton::new(rig());
    idle.mix(&mut forward, 0.4, true, 0.7);
    wave.mix(&mut forward, 0.4, true, 0.3);

    let mut reverse = Skeleton::new(rig());
    wave.mix(&mut reverse, 0.4, true, 0.3);
    idle.mix(&mut reverse, 0.4, true, 0.7);

    assert_eq!(pose_bits(&forward), pose_bits(&reverse));
}

// ============================================================================
// Curves
// ============================================================================

#[test]
fn curve_endpoints_are_fixed() {
    let mut curves = CurveTable::new(3);
    curves.set_bezier(1, 0.25, 0.1, 0.25, 1.0);
    curves.set_bezier(2, 0.9, -0.5, 0.1, 1.5);

    for segment in 0..3 {
        assert_eq!(curves.curve_percent(segment, 0.0), 0.0, "segment {segment}");
        assert_eq!(curves.curve_percent(segment, 1.0), 1.0, "segment {segment}");
    }
}

#[test]
fn stepped_holds_until_segment_end() {
    let mut curves = CurveTable::new(1);
    curves.set_stepped(0);
    for percent in [0.0, 0.25, 0.5, 0.999] {
        assert_eq!(curves.curve_percent(0, percent), 0.0);
    }
    assert_eq!(curves.curve_percent(0, 1.0), 1.0);
}

#[test]
fn stepped_translate_holds_left_value() {
    let mut timeline = TranslateTimeline::new(0, 2);
    timeline.set_frame(0, 0.0, 1.0, 1.0);
    timeline.set_frame(1, 1.0, 9.0, 9.0);
    timeline.curves_mut().set_stepped(0);

    assert_eq!(timeline.sample(0.9), Some(Vec2::new(1.0, 1.0)));
    assert_eq!(timeline.sample(1.0), Some(Vec2::new(9.0, 9.0)));
}

#[test]
fn ease_in_bezier_lags_linear() {
    let mut timeline = TranslateTimeline::new(0, 2);
    timeline.set_frame(0, 0.0, 0.0, 0.0);
    timeline.set_frame(1, 1.0, 10.0, 0.0);
    timeline.curves_mut().set_bezier(0, 0.9, 0.0, 1.0, 0.1);

    let eased = timeline.sample(0.5).unwrap().x;
    assert!(eased < 5.0, "ease-in should lag linear, got {eased}");
    assert!(eased >= 0.0);
}

// ============================================================================
// Keyframe Search
// ============================================================================

#[test]
fn search_exact_keyframe_is_left_boundary() {
    let times = [0.0, 1.0, 2.0, 3.0];
    assert_eq!(locate_frame(&times, 1.0, 1), 2);
    assert_eq!(locate_frame(&times, 0.5, 1), 1);
    assert_eq!(locate_frame(&times, 2.5, 1), 3);
}

#[test]
fn search_respects_stride() {
    // (time, x, y) triples
    let frames = [0.0, 5.0, 5.0, 1.0, 6.0, 6.0, 2.0, 7.0, 7.0, 3.0, 8.0, 8.0];
    assert_eq!(locate_frame(&frames, 1.0, 3), 6);
    assert_eq!(locate_frame(&frames, 2.9, 3), 9);
}

#[test]
fn exact_keyframe_time_samples_that_keyframe() {
    let Timeline::Rotate(timeline) =
        rotate(0, &[(0.0, 0.0), (1.0, 10.0), (2.0, 50.0), (3.0, 0.0)])
    else {
        unreachable!()
    };
    assert!(approx(timeline.sample(1.0).unwrap(), 10.0));
    assert!(approx(timeline.sample(1.5).unwrap(), 30.0));
}

// ============================================================================
// AnimationAction: Loop Modes
// ============================================================================

#[test]
fn action_loop_wraps() {
    let mut action = AnimationAction::new(walk());
    action.update(2.5);
    assert!(approx(action.time, 0.5));
    assert!(!action.paused);
}

#[test]
fn action_loop_tiny_reverse_step_stays_below_duration() {
    let mut action = AnimationAction::new(walk());
    action.time_scale = -1.0;
    action.update(1e-8);
    assert!(action.time >= 0.0 && action.time < 2.0, "got {}", action.time);
}

#[test]
fn action_once_clamps_and_pauses() {
    let mut action = AnimationAction::new(walk()).with_loop_mode(LoopMode::Once);
    action.update(3.0);
    assert_eq!(action.time, 2.0);
    assert!(action.paused);

    action.update(1.0);
    assert_eq!(action.time, 2.0);
}

#[test]
fn action_ping_pong_reverses() {
    let mut action = AnimationAction::new(walk()).with_loop_mode(LoopMode::PingPong);
    action.update(2.5);
    assert!(approx(action.time, 1.5));
    action.update(1.0);
    assert!(approx(action.time, 0.5));
    // bounces off the start and heads forward again
    action.update(1.0);
    assert!(approx(action.time, 0.5));
    action.update(1.0);
    assert!(approx(action.time, 1.5));
}

#[test]
fn action_time_scale() {
    let mut action = AnimationAction::new(walk());
    action.time_scale = 0.5;
    action.update(1.0);
    assert!(approx(action.time, 0.5));
}

#[test]
fn action_paused_does_not_advance() {
    let mut action = AnimationAction::new(walk());
    action.paused = true;
    action.update(1.0);
    assert_eq!(action.time, 0.0);
}

// ============================================================================
// AnimationMixer
// ============================================================================

#[test]
fn mixer_applies_in_insertion_order() {
    let idle = Arc::new(Animation::new("idle", vec![translate(0, &[(0.0, 10.0, 0.0)])]));
    let wave = Arc::new(Animation::new("wave", vec![translate(0, &[(0.0, 20.0, 0.0)])]));

    let mut mixer = AnimationMixer::new();
    mixer.add_action(AnimationAction::new(idle).with_weight(0.7));
    mixer.add_action(AnimationAction::new(wave).with_weight(0.3));

    let mut skeleton = Skeleton::new(rig());
    mixer.apply(&mut skeleton);
    assert!(approx(skeleton.bones()[0].local.translation.x, 10.9));
}

#[test]
fn mixer_skips_disabled_and_weightless_actions() {
    let mut mixer = AnimationMixer::new();
    mixer.add_action(AnimationAction::new(walk()).with_weight(0.0));
    let index = mixer.add_action(AnimationAction::new(walk()));
    mixer.actions_mut()[index].enabled = false;

    let mut skeleton = Skeleton::new(rig());
    let before = pose_bits(&skeleton);
    mixer.update(0.5, &mut skeleton);
    assert_eq!(pose_bits(&skeleton), before);
}

#[test]
fn mixer_update_advances_then_applies() {
    let mut mixer = AnimationMixer::new();
    mixer.add_action(AnimationAction::new(walk()));

    let mut skeleton = Skeleton::new(rig());
    mixer.update(1.0, &mut skeleton);
    assert!(approx(mixer.actions()[0].time, 1.0));
    // root translate keyframe at t=1 is (4, 2)
    assert!(approx(skeleton.bones()[0].local.translation.x, 4.0));
    assert!(approx(skeleton.bones()[0].local.translation.y, 2.0));
}

#[test]
fn mixer_find_and_remove() {
    let mut mixer = AnimationMixer::new();
    mixer.add_action(AnimationAction::new(walk()));
    assert!(mixer.find_action("walk").is_some());
    assert!(mixer.find_action("run").is_none());

    mixer.find_action_mut("walk").unwrap().weight = 0.5;
    assert_eq!(mixer.actions()[0].weight, 0.5);

    assert!(mixer.remove_action(3).is_none());
    assert!(mixer.remove_action(0).is_some());
    assert!(mixer.actions().is_empty());
}
