pub mod app;
pub mod config;
pub mod constants;
pub mod frame;
pub mod interaction;
pub mod surface;
pub mod transform;

pub use app::*;
pub use config::*;
pub use constants::*;
pub use frame::*;
pub use interaction::*;
pub use surface::*;
pub use transform::*;

// GLSL ES 3.00 sources bundled as string constants
pub static TRIANGLE_VERT: &str = include_str!("../shaders/triangle.vert");
pub static TRIANGLE_FRAG: &str = include_str!("../shaders/triangle.frag");
