//! Symbolic C names for GL enum values.
//!
//! Each table covers only the values the context model can produce. A value
//! outside its table renders as a hex literal so the listing stays valid C.

use std::fmt;

use super::consts::*;

/// A GL enum value as it appears in the emitted listing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Sym {
    name: Option<&'static str>,
    value: u32,
}

impl Sym {
    #[inline]
    const fn new(name: Option<&'static str>, value: u32) -> Self {
        Self { name, value }
    }

    /// Returns the symbolic name, if the value is in its table.
    #[inline]
    pub fn name(self) -> Option<&'static str> {
        self.name
    }

    #[inline]
    pub fn value(self) -> u32 {
        self.value
    }
}

impl fmt::Display for Sym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:04x}", self.value),
        }
    }
}

pub fn shader_type(v: u32) -> Sym {
    Sym::new(
        match v {
            GL_VERTEX_SHADER => Some("GL_VERTEX_SHADER"),
            GL_FRAGMENT_SHADER => Some("GL_FRAGMENT_SHADER"),
            _ => None,
        },
        v,
    )
}

pub fn texture_target(v: u32) -> Sym {
    Sym::new(
        match v {
            GL_TEXTURE_2D => Some("GL_TEXTURE_2D"),
            GL_TEXTURE_CUBE_MAP => Some("GL_TEXTURE_CUBE_MAP"),
            GL_TEXTURE_2D_ARRAY => Some("GL_TEXTURE_2D_ARRAY"),
            _ => None,
        },
        v,
    )
}

/// Component type of vertex attributes, pixel data and indices.
pub fn component_type(v: u32) -> Sym {
    Sym::new(
        match v {
            GL_BYTE => Some("GL_BYTE"),
            GL_UNSIGNED_BYTE => Some("GL_UNSIGNED_BYTE"),
            GL_SHORT => Some("GL_SHORT"),
            GL_UNSIGNED_SHORT => Some("GL_UNSIGNED_SHORT"),
            GL_INT => Some("GL_INT"),
            GL_UNSIGNED_INT => Some("GL_UNSIGNED_INT"),
            GL_FLOAT => Some("GL_FLOAT"),
            GL_HALF_FLOAT => Some("GL_HALF_FLOAT"),
            GL_UNSIGNED_INT_24_8 => Some("GL_UNSIGNED_INT_24_8"),
            _ => None,
        },
        v,
    )
}

pub fn pixel_format(v: u32) -> Sym {
    Sym::new(
        match v {
            GL_RED => Some("GL_RED"),
            GL_RED_INTEGER => Some("GL_RED_INTEGER"),
            GL_RG => Some("GL_RG"),
            GL_RG_INTEGER => Some("GL_RG_INTEGER"),
            GL_RGBA => Some("GL_RGBA"),
            GL_RGBA_INTEGER => Some("GL_RGBA_INTEGER"),
            GL_BGRA => Some("GL_BGRA"),
            GL_DEPTH_COMPONENT => Some("GL_DEPTH_COMPONENT"),
            GL_DEPTH_STENCIL => Some("GL_DEPTH_STENCIL"),
            GL_STENCIL_INDEX => Some("GL_STENCIL_INDEX"),
            _ => None,
        },
        v,
    )
}

pub fn internal_format(v: u32) -> Sym {
    Sym::new(
        match v {
            GL_R8 => Some("GL_R8"),
            GL_RG8 => Some("GL_RG8"),
            GL_RGBA8 => Some("GL_RGBA8"),
            GL_R8_SNORM => Some("GL_R8_SNORM"),
            GL_RG8_SNORM => Some("GL_RG8_SNORM"),
            GL_RGBA8_SNORM => Some("GL_RGBA8_SNORM"),
            GL_R8UI => Some("GL_R8UI"),
            GL_RG8UI => Some("GL_RG8UI"),
            GL_RGBA8UI => Some("GL_RGBA8UI"),
            GL_R16UI => Some("GL_R16UI"),
            GL_RG16UI => Some("GL_RG16UI"),
            GL_RGBA16UI => Some("GL_RGBA16UI"),
            GL_R32UI => Some("GL_R32UI"),
            GL_RG32UI => Some("GL_RG32UI"),
            GL_RGBA32UI => Some("GL_RGBA32UI"),
            GL_R8I => Some("GL_R8I"),
            GL_RG8I => Some("GL_RG8I"),
            GL_RGBA8I => Some("GL_RGBA8I"),
            GL_R16I => Some("GL_R16I"),
            GL_RG16I => Some("GL_RG16I"),
            GL_RGBA16I => Some("GL_RGBA16I"),
            GL_R32I => Some("GL_R32I"),
            GL_RG32I => Some("GL_RG32I"),
            GL_RGBA32I => Some("GL_RGBA32I"),
            GL_R16F => Some("GL_R16F"),
            GL_RG16F => Some("GL_RG16F"),
            GL_RGBA16F => Some("GL_RGBA16F"),
            GL_R32F => Some("GL_R32F"),
            GL_RG32F => Some("GL_RG32F"),
            GL_RGBA32F => Some("GL_RGBA32F"),
            GL_SRGB8_ALPHA8 => Some("GL_SRGB8_ALPHA8"),
            GL_STENCIL_INDEX8 => Some("GL_STENCIL_INDEX8"),
            GL_DEPTH_COMPONENT16 => Some("GL_DEPTH_COMPONENT16"),
            GL_DEPTH_COMPONENT24 => Some("GL_DEPTH_COMPONENT24"),
            GL_DEPTH24_STENCIL8 => Some("GL_DEPTH24_STENCIL8"),
            GL_DEPTH_COMPONENT32F => Some("GL_DEPTH_COMPONENT32F"),
            _ => None,
        },
        v,
    )
}

pub fn topology(v: u32) -> Sym {
    Sym::new(
        match v {
            GL_POINTS => Some("GL_POINTS"),
            GL_LINES => Some("GL_LINES"),
            GL_LINE_LOOP => Some("GL_LINE_LOOP"),
            GL_LINE_STRIP => Some("GL_LINE_STRIP"),
            GL_TRIANGLES => Some("GL_TRIANGLES"),
            GL_TRIANGLE_STRIP => Some("GL_TRIANGLE_STRIP"),
            GL_TRIANGLE_FAN => Some("GL_TRIANGLE_FAN"),
            _ => None,
        },
        v,
    )
}

/// Cube map face by layer index (`0..6`).
pub fn cubemap_face(layer: u32) -> Sym {
    Sym::new(
        match layer {
            0 => Some("GL_TEXTURE_CUBE_MAP_POSITIVE_X"),
            1 => Some("GL_TEXTURE_CUBE_MAP_NEGATIVE_X"),
            2 => Some("GL_TEXTURE_CUBE_MAP_POSITIVE_Y"),
            3 => Some("GL_TEXTURE_CUBE_MAP_NEGATIVE_Y"),
            4 => Some("GL_TEXTURE_CUBE_MAP_POSITIVE_Z"),
            5 => Some("GL_TEXTURE_CUBE_MAP_NEGATIVE_Z"),
            _ => None,
        },
        0x8515 + layer,
    )
}

pub fn cull_face(v: u32) -> Sym {
    Sym::new(
        match v {
            GL_FRONT => Some("GL_FRONT"),
            GL_BACK => Some("GL_BACK"),
            GL_FRONT_AND_BACK => Some("GL_FRONT_AND_BACK"),
            GL_NONE => Some("GL_NONE"),
            _ => None,
        },
        v,
    )
}

pub fn filter(v: u32) -> Sym {
    Sym::new(
        match v {
            GL_NEAREST => Some("GL_NEAREST"),
            GL_LINEAR => Some("GL_LINEAR"),
            GL_NEAREST_MIPMAP_NEAREST => Some("GL_NEAREST_MIPMAP_NEAREST"),
            GL_LINEAR_MIPMAP_NEAREST => Some("GL_LINEAR_MIPMAP_NEAREST"),
            GL_NEAREST_MIPMAP_LINEAR => Some("GL_NEAREST_MIPMAP_LINEAR"),
            GL_LINEAR_MIPMAP_LINEAR => Some("GL_LINEAR_MIPMAP_LINEAR"),
            _ => None,
        },
        v,
    )
}

pub fn texture_wrap(v: u32) -> Sym {
    Sym::new(
        match v {
            GL_REPEAT => Some("GL_REPEAT"),
            GL_CLAMP_TO_EDGE => Some("GL_CLAMP_TO_EDGE"),
            GL_MIRRORED_REPEAT => Some("GL_MIRRORED_REPEAT"),
            _ => None,
        },
        v,
    )
}

pub fn compare_mode(v: u32) -> Sym {
    Sym::new(
        match v {
            GL_COMPARE_REF_TO_TEXTURE => Some("GL_COMPARE_REF_TO_TEXTURE"),
            GL_NONE => Some("GL_NONE"),
            _ => None,
        },
        v,
    )
}

pub fn compare_func(v: u32) -> Sym {
    Sym::new(
        match v {
            GL_NEVER => Some("GL_NEVER"),
            GL_LESS => Some("GL_LESS"),
            GL_EQUAL => Some("GL_EQUAL"),
            GL_LEQUAL => Some("GL_LEQUAL"),
            GL_GREATER => Some("GL_GREATER"),
            GL_NOTEQUAL => Some("GL_NOTEQUAL"),
            GL_GEQUAL => Some("GL_GEQUAL"),
            GL_ALWAYS => Some("GL_ALWAYS"),
            _ => None,
        },
        v,
    )
}

pub fn blend_equation(v: u32) -> Sym {
    Sym::new(
        match v {
            GL_FUNC_ADD => Some("GL_FUNC_ADD"),
            GL_FUNC_SUBTRACT => Some("GL_FUNC_SUBTRACT"),
            GL_FUNC_REVERSE_SUBTRACT => Some("GL_FUNC_REVERSE_SUBTRACT"),
            GL_MIN => Some("GL_MIN"),
            GL_MAX => Some("GL_MAX"),
            _ => None,
        },
        v,
    )
}

pub fn blend_factor(v: u32) -> Sym {
    Sym::new(
        match v {
            GL_ZERO => Some("GL_ZERO"),
            GL_ONE => Some("GL_ONE"),
            GL_SRC_COLOR => Some("GL_SRC_COLOR"),
            GL_ONE_MINUS_SRC_COLOR => Some("GL_ONE_MINUS_SRC_COLOR"),
            GL_SRC_ALPHA => Some("GL_SRC_ALPHA"),
            GL_ONE_MINUS_SRC_ALPHA => Some("GL_ONE_MINUS_SRC_ALPHA"),
            GL_DST_ALPHA => Some("GL_DST_ALPHA"),
            GL_ONE_MINUS_DST_ALPHA => Some("GL_ONE_MINUS_DST_ALPHA"),
            GL_DST_COLOR => Some("GL_DST_COLOR"),
            GL_ONE_MINUS_DST_COLOR => Some("GL_ONE_MINUS_DST_COLOR"),
            GL_SRC_ALPHA_SATURATE => Some("GL_SRC_ALPHA_SATURATE"),
            GL_CONSTANT_COLOR => Some("GL_CONSTANT_COLOR"),
            GL_ONE_MINUS_CONSTANT_COLOR => Some("GL_ONE_MINUS_CONSTANT_COLOR"),
            GL_CONSTANT_ALPHA => Some("GL_CONSTANT_ALPHA"),
            GL_ONE_MINUS_CONSTANT_ALPHA => Some("GL_ONE_MINUS_CONSTANT_ALPHA"),
            GL_SRC1_ALPHA => Some("GL_SRC1_ALPHA"),
            GL_SRC1_COLOR => Some("GL_SRC1_COLOR"),
            GL_ONE_MINUS_SRC1_COLOR => Some("GL_ONE_MINUS_SRC1_COLOR"),
            GL_ONE_MINUS_SRC1_ALPHA => Some("GL_ONE_MINUS_SRC1_ALPHA"),
            _ => None,
        },
        v,
    )
}

pub fn stencil_op(v: u32) -> Sym {
    Sym::new(
        match v {
            GL_ZERO => Some("GL_ZERO"),
            GL_KEEP => Some("GL_KEEP"),
            GL_REPLACE => Some("GL_REPLACE"),
            GL_INCR => Some("GL_INCR"),
            GL_DECR => Some("GL_DECR"),
            GL_INVERT => Some("GL_INVERT"),
            GL_INCR_WRAP => Some("GL_INCR_WRAP"),
            GL_DECR_WRAP => Some("GL_DECR_WRAP"),
            _ => None,
        },
        v,
    )
}
