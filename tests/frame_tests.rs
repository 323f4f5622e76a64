// Host-side tests for the per-frame vertex update and canvas sizing.

use triangle_core::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn dragged(from: (f32, f32), to: (f32, f32)) -> InteractionState {
    let mut s = InteractionState::default();
    s.handle(PointerInput::Down { x: from.0, y: from.1 });
    s.handle(PointerInput::Move { x: to.0, y: to.1 });
    s
}

#[test]
fn idle_frame_uses_base_vertices() {
    let cfg = DemoConfig::default();
    let out = frame_positions(
        &InteractionState::Idle,
        &cfg.base_triangle,
        CanvasSize::new(400, 400),
        cfg.scaling,
    );
    assert_eq!(
        out.map(|v| v.position),
        [[0.0, 0.0], [0.0, 0.5], [0.7, 0.0]]
    );
}

#[test]
fn drag_across_a_400px_canvas() {
    let cfg = DemoConfig::default();
    let s = dragged((200.0, 200.0), (250.0, 170.0));
    let canvas = CanvasSize::new(400, 400);

    let d = clip_displacement(&s, canvas, DisplacementScaling::Normalized).unwrap();
    assert!(approx(d.x, 0.25), "dx = {}", d.x);
    assert!(approx(d.y, 0.15), "dy = {}", d.y);

    let out = frame_positions(&s, &cfg.base_triangle, canvas, cfg.scaling);
    assert!(approx(out[0].position[0], 0.25) && approx(out[0].position[1], 0.15));
    assert!(approx(out[1].position[0], 0.25) && approx(out[1].position[1], 0.65));
    assert!(approx(out[2].position[0], 0.95) && approx(out[2].position[1], 0.15));
}

#[test]
fn offset_is_not_accumulated_across_frames() {
    let cfg = DemoConfig::default();
    let s = dragged((0.0, 0.0), (40.0, 0.0));
    let canvas = CanvasSize::new(400, 400);
    let first = frame_positions(&s, &cfg.base_triangle, canvas, cfg.scaling);
    let second = frame_positions(&s, &cfg.base_triangle, canvas, cfg.scaling);
    assert_eq!(first, second);
    assert_eq!(cfg.base_triangle, DemoConfig::default().base_triangle);
}

#[test]
fn non_square_canvas_normalizes_each_axis_separately() {
    let s = dragged((0.0, 0.0), (80.0, 30.0));
    let d = clip_displacement(&s, CanvasSize::new(800, 300), DisplacementScaling::Normalized)
        .unwrap();
    assert!(approx(d.x, 0.2));
    assert!(approx(d.y, -0.2));
}

#[test]
fn raw_scaling_uses_the_pixel_delta() {
    let s = dragged((10.0, 10.0), (13.0, 6.0));
    let d = clip_displacement(&s, CanvasSize::new(400, 400), DisplacementScaling::Raw).unwrap();
    assert_eq!(d.x, 3.0);
    assert_eq!(d.y, 4.0);
}

#[test]
fn zero_sized_canvas_stays_finite() {
    let cfg = DemoConfig::default();
    let s = dragged((0.0, 0.0), (5.0, 5.0));
    let out = frame_positions(&s, &cfg.base_triangle, CanvasSize::new(0, 0), cfg.scaling);
    assert!(out
        .iter()
        .all(|v| v.position.iter().all(|c| c.is_finite())));
}

#[test]
fn display_target_truncates_to_whole_pixels() {
    assert_eq!(
        CanvasSize::display_target(300.0, 150.0, 1.0),
        CanvasSize::new(300, 150)
    );
    assert_eq!(
        CanvasSize::display_target(100.7, 50.2, 1.5),
        CanvasSize::new(151, 75)
    );
}

#[test]
fn resize_reported_only_on_change() {
    let a = CanvasSize::new(300, 150);
    assert_eq!(resize_needed(a, a), None);
    let b = CanvasSize::new(600, 300);
    assert_eq!(resize_needed(a, b), Some(b));
}
