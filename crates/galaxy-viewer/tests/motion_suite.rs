use galaxy_viewer::camera::{Camera, HOME_POSITION, HOME_ROTATION};
use galaxy_viewer::pointer::{PointerTracker, SWAY_SENSITIVITY};
use galaxy_viewer::scene::{SceneState, SPIN_STEP, SWAY_EASE};
use galaxy_viewer::timeline::{ScrollTimeline, TIMELINE_ENV};
use glam::{Vec2, Vec3};
use std::f32::consts::PI;
use winit::dpi::{PhysicalPosition, PhysicalSize};

// ── Pointer ─────────────────────────────────────────────────────────────────

#[test]
fn pointer_offset_is_relative_to_viewport_center() {
    let mut pointer = PointerTracker::new(PhysicalSize::new(800, 600));
    pointer.on_cursor_moved(PhysicalPosition::new(500.0, 400.0));
    assert_eq!(pointer.offset(), Vec2::new(100.0, 100.0));

    // Cursor y drives pitch, cursor x drives yaw.
    let target = pointer.sway_target();
    assert!((target.x - 100.0 * SWAY_SENSITIVITY).abs() < 1e-6);
    assert!((target.y - 100.0 * SWAY_SENSITIVITY).abs() < 1e-6);
}

#[test]
fn pointer_recenters_on_viewport_change() {
    let mut pointer = PointerTracker::new(PhysicalSize::new(800, 600));
    pointer.on_cursor_moved(PhysicalPosition::new(400.0, 300.0));
    assert_eq!(pointer.offset(), Vec2::ZERO);

    pointer.set_viewport(PhysicalSize::new(1600, 1200));
    pointer.on_cursor_moved(PhysicalPosition::new(400.0, 300.0));
    assert_eq!(pointer.offset(), Vec2::new(-400.0, -300.0));
}

// ── Scene stepping ──────────────────────────────────────────────────────────

#[test]
fn sway_closes_five_percent_of_the_gap_per_frame() {
    let mut scene = SceneState::new();
    let target = Vec2::new(0.1, -0.2);

    scene.step(target);
    assert!((scene.sway - target * SWAY_EASE).length() < 1e-6);

    let gap_before = (target - scene.sway).length();
    scene.step(target);
    let gap_after = (target - scene.sway).length();
    assert!((gap_after / gap_before - (1.0 - SWAY_EASE)).abs() < 1e-4);
}

#[test]
fn sway_converges_without_overshoot() {
    let mut scene = SceneState::new();
    let target = Vec2::new(0.3, 0.3);
    for _ in 0..400 {
        scene.step(target);
        assert!(scene.sway.x <= target.x + 1e-6);
        assert!(scene.sway.y <= target.y + 1e-6);
    }
    assert!((scene.sway - target).length() < 1e-3);
}

#[test]
fn spin_accumulates_independently_of_pointer() {
    let mut scene = SceneState::new();
    for _ in 0..50 {
        scene.step(Vec2::ZERO);
    }
    assert!((scene.spin - 50.0 * SPIN_STEP).abs() < 1e-6);
    assert_eq!(scene.sway, Vec2::ZERO);
}

// ── Camera / resize ─────────────────────────────────────────────────────────

#[test]
fn resize_sets_aspect_to_exact_ratio() {
    let mut camera = Camera::new(PhysicalSize::new(1280, 720));
    assert_eq!(camera.aspect(), 1280.0 / 720.0);

    camera.resize(PhysicalSize::new(1920, 1080));
    assert_eq!(camera.aspect(), 1920.0 / 1080.0);
}

#[test]
fn resize_is_idempotent() {
    let mut camera = Camera::new(PhysicalSize::new(1280, 720));
    let before = camera.view_proj();
    camera.resize(PhysicalSize::new(1280, 720));
    camera.resize(PhysicalSize::new(1280, 720));
    assert_eq!(camera.view_proj(), before);
}

#[test]
fn degenerate_resize_is_ignored() {
    let mut camera = Camera::new(PhysicalSize::new(1280, 720));
    let before = camera.aspect();
    camera.resize(PhysicalSize::new(0, 0));
    assert_eq!(camera.aspect(), before);
}

// ── Scroll timeline ─────────────────────────────────────────────────────────

#[test]
fn timeline_rests_at_home_pose() {
    let timeline = ScrollTimeline::new();
    let mut camera = Camera::new(PhysicalSize::new(1280, 720));
    let mut scene = SceneState::new();

    timeline.apply(0.0, &mut camera, &mut scene);
    assert_eq!(camera.position, HOME_POSITION);
    assert_eq!(camera.rotation, HOME_ROTATION);
    assert_eq!(scene.group_rotation, Vec3::ZERO);
}

#[test]
fn timeline_lands_on_the_final_keyframes() {
    let timeline = ScrollTimeline::new();
    let mut camera = Camera::new(PhysicalSize::new(1280, 720));
    let mut scene = SceneState::new();

    timeline.apply(1.0, &mut camera, &mut scene);
    assert_eq!(camera.position, Vec3::new(0.0, 5.0, 15.0));
    assert_eq!(camera.rotation, Vec2::new(-0.3, 0.0));
    assert!((scene.group_rotation - Vec3::new(0.0, PI, 0.0)).length() < 1e-6);
}

#[test]
fn timeline_scrub_never_overshoots() {
    let timeline = ScrollTimeline::new();
    let mut camera = Camera::new(PhysicalSize::new(1280, 720));
    let mut scene = SceneState::new();

    for i in 0..=1000 {
        timeline.apply(i as f32 / 1000.0, &mut camera, &mut scene);
        // Keyframe extrema across all three segments.
        assert!((-3.0..=2.0).contains(&camera.position.x));
        assert!((-1.0..=5.0).contains(&camera.position.y));
        assert!((6.0..=15.0).contains(&camera.position.z));
        assert!((0.0..=PI + 1e-6).contains(&scene.group_rotation.y));
    }
}

#[test]
fn timeline_clamps_out_of_range_progress() {
    let timeline = ScrollTimeline::new();
    let mut camera = Camera::new(PhysicalSize::new(1280, 720));
    let mut scene = SceneState::new();

    timeline.apply(7.0, &mut camera, &mut scene);
    let clamped = camera.position;
    timeline.apply(1.0, &mut camera, &mut scene);
    assert_eq!(camera.position, clamped);
}

#[test]
fn timeline_group_holds_until_its_segments() {
    let timeline = ScrollTimeline::new();
    let mut camera = Camera::new(PhysicalSize::new(1280, 720));
    let mut scene = SceneState::new();

    // The group's x tilt only animates from the second segment on.
    timeline.apply(0.2, &mut camera, &mut scene);
    assert_eq!(scene.group_rotation.x, 0.0);
    assert!(scene.group_rotation.z > 0.0);
}

#[test]
fn detect_honors_the_disable_env_var() {
    // Single test owns the env var to avoid cross-test races.
    std::env::set_var(TIMELINE_ENV, "off");
    assert!(ScrollTimeline::detect().is_none());

    std::env::set_var(TIMELINE_ENV, "1");
    assert!(ScrollTimeline::detect().is_some());

    std::env::remove_var(TIMELINE_ENV);
    assert!(ScrollTimeline::detect().is_some());
}
