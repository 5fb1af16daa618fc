use crate::gl::consts::{GL_FRAGMENT_SHADER, GL_VERTEX_SHADER};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    #[inline]
    pub const fn gl(self) -> u32 {
        match self {
            ShaderStage::Vertex => GL_VERTEX_SHADER,
            ShaderStage::Fragment => GL_FRAGMENT_SHADER,
        }
    }
}

/// Cache key of a shader object: the exact source and its stage.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ShaderKey {
    pub source: String,
    pub stage: ShaderStage,
}

/// Cache key of a program: the names of its two shaders.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ProgramKey {
    pub vertex_shader: u32,
    pub fragment_shader: u32,
}
