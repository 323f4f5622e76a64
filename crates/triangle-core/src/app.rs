use crate::config::DemoConfig;
use crate::constants::TRIANGLE_VERTEX_COUNT;
use crate::frame::{frame_positions, resize_needed, CanvasSize, ClipVertex};
use crate::interaction::{InteractionState, PointerInput};
use crate::surface::{build_program, BufferTarget, BuildError, DrawSurface, Primitive};
use crate::{TRIANGLE_FRAG, TRIANGLE_VERT};

/// Everything the pointer handlers and the frame callback share.
pub struct TriangleApp<S: DrawSurface> {
    surface: S,
    // kept alive for the lifetime of the app
    _program: S::Program,
    interaction: InteractionState,
    canvas: CanvasSize,
    config: DemoConfig,
}

impl<S: DrawSurface> TriangleApp<S> {
    pub fn new(mut surface: S, config: DemoConfig) -> Result<Self, BuildError> {
        let program = build_program(&mut surface, TRIANGLE_VERT, TRIANGLE_FRAG)?;
        log::info!("[gl] triangle program ready");
        Ok(Self {
            surface,
            _program: program,
            interaction: InteractionState::Idle,
            canvas: CanvasSize::default(),
            config,
        })
    }

    pub fn pointer(&mut self, input: PointerInput) {
        if !self.interaction.handle(input) {
            return;
        }
        match input {
            PointerInput::Down { x, y } => log::info!("[mouse] begin drag at ({:.1},{:.1})", x, y),
            PointerInput::Move { x, y } => {
                if let Some(a) = self.interaction.anchor() {
                    log::debug!(
                        "[mouse] drag ({:.1},{:.1}) -> ({:.1},{:.1})",
                        a.x,
                        a.y,
                        x,
                        y
                    );
                }
            }
            PointerInput::Up => log::info!("[mouse] end drag"),
        }
    }

    /// Adopt a new backing-store size, updating the viewport if it changed.
    pub fn sync_size(&mut self, target: CanvasSize) -> bool {
        match resize_needed(self.canvas, target) {
            Some(size) => {
                self.canvas = size;
                self.surface.resize(size.width, size.height);
                log::info!("[canvas] resized to {}x{}", size.width, size.height);
                true
            }
            None => false,
        }
    }

    /// Per-frame update; the timestamp is unused. Returns the uploaded vertices.
    pub fn frame(&mut self, _timestamp: f64) -> [ClipVertex; 3] {
        let positions = frame_positions(
            &self.interaction,
            &self.config.base_triangle,
            self.canvas,
            self.config.scaling,
        );
        self.surface.clear(self.config.clear_color);
        self.surface
            .upload(BufferTarget::Array, bytemuck::cast_slice(&positions));
        self.surface
            .draw(Primitive::Triangles, TRIANGLE_VERTEX_COUNT);
        positions
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
