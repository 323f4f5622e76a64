use triangle_core::{
    BufferTarget, BuildError, DrawSurface, Primitive, ShaderKind, POSITION_ATTRIBUTE,
    POSITION_COMPONENTS,
};
use wasm_bindgen::JsCast;
use web_sys as web;
use web_sys::WebGl2RenderingContext as Gl;

// ===================== WebGL2 drawing surface =====================

pub struct WebGlSurface {
    gl: Gl,
    // position buffer + VAO created when the program is activated
    bound: Option<(web::WebGlBuffer, web::WebGlVertexArrayObject)>,
}

impl WebGlSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let gl = canvas
            .get_context("webgl2")
            .map_err(|e| anyhow::anyhow!("getContext error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("WebGL2 not supported"))?
            .dyn_into::<Gl>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { gl, bound: None })
    }
}

impl DrawSurface for WebGlSurface {
    type Shader = web::WebGlShader;
    type Program = web::WebGlProgram;

    fn compile(&mut self, kind: ShaderKind, source: &str) -> Result<Self::Shader, BuildError> {
        let ty = match kind {
            ShaderKind::Vertex => Gl::VERTEX_SHADER,
            ShaderKind::Fragment => Gl::FRAGMENT_SHADER,
        };
        let shader = self
            .gl
            .create_shader(ty)
            .ok_or(BuildError::CreateShader(kind))?;
        self.gl.shader_source(&shader, source);
        self.gl.compile_shader(&shader);
        let ok = self
            .gl
            .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false);
        if ok {
            return Ok(shader);
        }
        let log = self.gl.get_shader_info_log(&shader).unwrap_or_default();
        self.gl.delete_shader(Some(&shader));
        Err(BuildError::Compile { kind, log })
    }

    fn link(
        &mut self,
        vertex: &Self::Shader,
        fragment: &Self::Shader,
    ) -> Result<Self::Program, BuildError> {
        let program = self.gl.create_program().ok_or(BuildError::CreateProgram)?;
        self.gl.attach_shader(&program, vertex);
        self.gl.attach_shader(&program, fragment);
        self.gl.link_program(&program);
        let ok = self
            .gl
            .get_program_parameter(&program, Gl::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if ok {
            return Ok(program);
        }
        let log = self.gl.get_program_info_log(&program).unwrap_or_default();
        self.gl.delete_program(Some(&program));
        Err(BuildError::Link { log })
    }

    fn activate(&mut self, program: &Self::Program) -> Result<(), BuildError> {
        let loc = self.gl.get_attrib_location(program, POSITION_ATTRIBUTE);
        if loc < 0 {
            return Err(BuildError::MissingAttribute {
                name: POSITION_ATTRIBUTE.to_string(),
            });
        }
        let loc = loc as u32;

        let buffer = self
            .gl
            .create_buffer()
            .ok_or(BuildError::Allocate("position buffer"))?;
        self.gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));

        let vao = self
            .gl
            .create_vertex_array()
            .ok_or(BuildError::Allocate("vertex array"))?;
        self.gl.bind_vertex_array(Some(&vao));
        self.gl.enable_vertex_attrib_array(loc);
        // 2 floats per vertex, not normalized, tightly packed from offset 0
        self.gl
            .vertex_attrib_pointer_with_i32(loc, POSITION_COMPONENTS, Gl::FLOAT, false, 0, 0);

        self.gl.use_program(Some(program));
        self.bound = Some((buffer, vao));
        Ok(())
    }

    fn upload(&mut self, target: BufferTarget, data: &[u8]) {
        let target = match target {
            BufferTarget::Array => Gl::ARRAY_BUFFER,
        };
        if let Some((buffer, _)) = &self.bound {
            self.gl.bind_buffer(target, Some(buffer));
        }
        let view = js_sys::Uint8Array::from(data);
        self.gl
            .buffer_data_with_array_buffer_view(target, &view, Gl::DYNAMIC_DRAW);
    }

    fn draw(&mut self, primitive: Primitive, vertex_count: i32) {
        let mode = match primitive {
            Primitive::Triangles => Gl::TRIANGLES,
        };
        if let Some((_, vao)) = &self.bound {
            self.gl.bind_vertex_array(Some(vao));
        }
        self.gl.draw_arrays(mode, 0, vertex_count);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    fn clear(&mut self, rgba: [f32; 4]) {
        let [r, g, b, a] = rgba;
        self.gl.clear_color(r, g, b, a);
        self.gl.clear(Gl::COLOR_BUFFER_BIT);
    }
}
