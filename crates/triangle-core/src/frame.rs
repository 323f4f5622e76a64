use crate::config::DisplacementScaling;
use crate::constants::CLIP_SPAN;
use crate::interaction::InteractionState;
use crate::transform::{apply, translate_by, Vector4};
use glam::Vec2;

/// One uploaded vertex: clip-space x and y. z and w are dropped before upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ClipVertex {
    pub position: [f32; 2],
}

impl From<Vector4> for ClipVertex {
    #[inline]
    fn from(v: Vector4) -> Self {
        Self {
            position: [v.x, v.y],
        }
    }
}

/// Canvas backing-store size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Backing size for a CSS box of `client_w` x `client_h`, truncated to
    /// whole pixels.
    pub fn display_target(client_w: f64, client_h: f64, multiplier: f64) -> Self {
        Self {
            width: (client_w * multiplier).max(0.0) as u32,
            height: (client_h * multiplier).max(0.0) as u32,
        }
    }
}

/// `Some(target)` when the backing store has to change.
#[inline]
pub fn resize_needed(current: CanvasSize, target: CanvasSize) -> Option<CanvasSize> {
    (current != target).then_some(target)
}

/// Clip-space offset for the current drag, or `None` while idle.
pub fn clip_displacement(
    state: &InteractionState,
    canvas: CanvasSize,
    scaling: DisplacementScaling,
) -> Option<Vec2> {
    let delta = state.screen_delta()?;
    // screen Y grows downward, clip Y grows upward
    let flipped = Vec2::new(delta.x, -delta.y);
    Some(match scaling {
        DisplacementScaling::Normalized => {
            let w = canvas.width.max(1) as f32;
            let h = canvas.height.max(1) as f32;
            Vec2::new(flipped.x / w * CLIP_SPAN, flipped.y / h * CLIP_SPAN)
        }
        DisplacementScaling::Raw => flipped,
    })
}

/// Vertices to draw this frame. The base geometry is never modified; the drag
/// offset is applied on top of it every frame.
pub fn frame_positions(
    state: &InteractionState,
    base: &[Vector4; 3],
    canvas: CanvasSize,
    scaling: DisplacementScaling,
) -> [ClipVertex; 3] {
    match clip_displacement(state, canvas, scaling) {
        Some(d) => {
            let m = translate_by(d.x, d.y, 0.0);
            base.map(|v| ClipVertex::from(apply(&m, v)))
        }
        None => base.map(ClipVertex::from),
    }
}
