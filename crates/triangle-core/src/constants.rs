// Shared tuning constants for the demo.

// Scene
pub const BASE_TRIANGLE: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [0.0, 0.5, 0.0], [0.7, 0.0, 0.0]];
pub const TRIANGLE_VERTEX_COUNT: i32 = 3;
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.0]; // transparent

// Clip space spans [-1, 1], i.e. two units across the canvas
pub const CLIP_SPAN: f32 = 2.0;

// Shader interface
pub const POSITION_ATTRIBUTE: &str = "a_position";
pub const POSITION_COMPONENTS: i32 = 2; // x, y per vertex

// DOM
pub const CANVAS_ID: &str = "canvas";
