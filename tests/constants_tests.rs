// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so these go through the core crate.

use triangle_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn base_triangle_sits_inside_clip_space() {
    for [x, y, z] in BASE_TRIANGLE {
        assert!((-1.0..=1.0).contains(&x));
        assert!((-1.0..=1.0).contains(&y));
        assert_eq!(z, 0.0);
    }
    assert_eq!(BASE_TRIANGLE.len() as i32, TRIANGLE_VERTEX_COUNT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn upload_layout_matches_the_vertex_type() {
    assert_eq!(POSITION_COMPONENTS, 2);
    assert_eq!(
        std::mem::size_of::<ClipVertex>(),
        POSITION_COMPONENTS as usize * std::mem::size_of::<f32>()
    );
    assert_eq!(CLIP_SPAN, 2.0);
}

#[test]
fn default_config_uses_constants() {
    let cfg = DemoConfig::default();
    assert_eq!(cfg.canvas_id, CANVAS_ID);
    assert_eq!(cfg.scaling, DisplacementScaling::Normalized);
    assert_eq!(cfg.clear_color, CLEAR_COLOR);
    assert!(cfg.pixel_ratio.is_none());
    assert!(cfg.base_triangle.iter().all(|v| v.w == 1.0));
}

#[test]
fn shaders_declare_the_position_attribute() {
    assert!(TRIANGLE_VERT.starts_with("#version 300 es"));
    assert!(TRIANGLE_FRAG.starts_with("#version 300 es"));
    assert!(TRIANGLE_VERT.contains(&format!("in vec4 {POSITION_ATTRIBUTE};")));
    assert!(TRIANGLE_FRAG.contains("precision highp float;"));
}
