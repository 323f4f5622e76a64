//! Drawing-surface contract the core renders through.
//!
//! The browser front-end implements this over `WebGl2RenderingContext`; tests
//! implement it with a recorder.

use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferTarget {
    Array,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
}

/// Shader or program build failure. The only failure the core reports; a
/// failed build leaves nothing to draw with.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("failed to create {0} shader")]
    CreateShader(ShaderKind),
    #[error("{kind} shader failed to compile: {log}")]
    Compile { kind: ShaderKind, log: String },
    #[error("failed to create program")]
    CreateProgram,
    #[error("failed to allocate {0}")]
    Allocate(&'static str),
    #[error("program failed to link: {log}")]
    Link { log: String },
    #[error("program has no active attribute `{name}`")]
    MissingAttribute { name: String },
}

pub trait DrawSurface {
    type Shader;
    type Program;

    fn compile(&mut self, kind: ShaderKind, source: &str) -> Result<Self::Shader, BuildError>;

    fn link(
        &mut self,
        vertex: &Self::Shader,
        fragment: &Self::Shader,
    ) -> Result<Self::Program, BuildError>;

    /// Make `program` current and bind the position attribute as tightly
    /// packed pairs of f32.
    fn activate(&mut self, program: &Self::Program) -> Result<(), BuildError>;

    /// `data` is little-endian f32, interleaved (x, y).
    fn upload(&mut self, target: BufferTarget, data: &[u8]);

    fn draw(&mut self, primitive: Primitive, vertex_count: i32);

    fn resize(&mut self, width: u32, height: u32);

    fn clear(&mut self, rgba: [f32; 4]);
}

/// Compile both stages, link and activate. Logs the diagnostic and returns on
/// the first failure.
pub fn build_program<S: DrawSurface>(
    surface: &mut S,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<S::Program, BuildError> {
    let program = compile_and_link(surface, vertex_src, fragment_src)
        .and_then(|p| surface.activate(&p).map(|()| p));
    if let Err(e) = &program {
        log::error!("[gl] {}", e);
    }
    program
}

fn compile_and_link<S: DrawSurface>(
    surface: &mut S,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<S::Program, BuildError> {
    let vs = surface.compile(ShaderKind::Vertex, vertex_src)?;
    let fs = surface.compile(ShaderKind::Fragment, fragment_src)?;
    surface.link(&vs, &fs)
}
