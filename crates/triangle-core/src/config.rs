use crate::constants::{BASE_TRIANGLE, CANVAS_ID, CLEAR_COLOR};
use crate::transform::{point, Vector4};

/// How a screen-space drag delta becomes a clip-space offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplacementScaling {
    /// Divide by the canvas size and scale into the two-unit clip range.
    #[default]
    Normalized,
    /// Use the pixel delta as-is (Y still inverted). The triangle leaves the
    /// view after a pixel or two of drag.
    Raw,
}

#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub canvas_id: &'static str,
    pub scaling: DisplacementScaling,
    /// Backing-store pixels per CSS pixel; `None` follows `devicePixelRatio`.
    pub pixel_ratio: Option<f64>,
    pub clear_color: [f32; 4],
    pub base_triangle: [Vector4; 3],
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            canvas_id: CANVAS_ID,
            scaling: DisplacementScaling::Normalized,
            pixel_ratio: None,
            clear_color: CLEAR_COLOR,
            base_triangle: BASE_TRIANGLE.map(|[x, y, z]| point(x, y, z)),
        }
    }
}
