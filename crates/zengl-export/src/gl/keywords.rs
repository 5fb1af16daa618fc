//! Typed keywords for pipeline and sampler state.
//!
//! Every keyword maps to one GL enum value. Keywords parse from their
//! lowercase names (`"less_equal"`, `"one_minus_src_alpha"`, ...) both through
//! [`FromStr`] and serde.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::error::ExportError;

macro_rules! gl_keyword {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($variant:ident = $keyword:literal => $gl:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $keyword)]
                $variant,
            )+
        }

        impl $name {
            /// GL enum value.
            #[inline]
            pub const fn gl(self) -> u32 {
                match self {
                    $(Self::$variant => $gl,)+
                }
            }

            #[inline]
            pub const fn keyword(self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ExportError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($keyword => Ok(Self::$variant),)+
                    _ => Err(ExportError::UnknownKeyword { kind: $kind, name: s.to_string() }),
                }
            }
        }
    };
}

gl_keyword! {
    /// Primitive assembly mode.
    Topology ("topology") {
        Points = "points" => GL_POINTS,
        Lines = "lines" => GL_LINES,
        LineLoop = "line_loop" => GL_LINE_LOOP,
        LineStrip = "line_strip" => GL_LINE_STRIP,
        Triangles = "triangles" => GL_TRIANGLES,
        TriangleStrip = "triangle_strip" => GL_TRIANGLE_STRIP,
        TriangleFan = "triangle_fan" => GL_TRIANGLE_FAN,
    }
}

gl_keyword! {
    CullFace ("cull face") {
        None = "none" => GL_NONE,
        Front = "front" => GL_FRONT,
        Back = "back" => GL_BACK,
        FrontAndBack = "front_and_back" => GL_FRONT_AND_BACK,
    }
}

gl_keyword! {
    /// Depth, stencil and sampler comparison.
    CompareFunc ("compare func") {
        Never = "never" => GL_NEVER,
        Less = "less" => GL_LESS,
        Equal = "equal" => GL_EQUAL,
        LessEqual = "less_equal" => GL_LEQUAL,
        Greater = "greater" => GL_GREATER,
        NotEqual = "not_equal" => GL_NOTEQUAL,
        GreaterEqual = "greater_equal" => GL_GEQUAL,
        Always = "always" => GL_ALWAYS,
    }
}

gl_keyword! {
    StencilOp ("stencil op") {
        Zero = "zero" => GL_ZERO,
        Keep = "keep" => GL_KEEP,
        Replace = "replace" => GL_REPLACE,
        IncrementClamp = "increment_clamp" => GL_INCR,
        DecrementClamp = "decrement_clamp" => GL_DECR,
        Invert = "invert" => GL_INVERT,
        IncrementWrap = "increment_wrap" => GL_INCR_WRAP,
        DecrementWrap = "decrement_wrap" => GL_DECR_WRAP,
    }
}

gl_keyword! {
    BlendOp ("blend op") {
        Add = "add" => GL_FUNC_ADD,
        Subtract = "subtract" => GL_FUNC_SUBTRACT,
        ReverseSubtract = "reverse_subtract" => GL_FUNC_REVERSE_SUBTRACT,
        Min = "min" => GL_MIN,
        Max = "max" => GL_MAX,
    }
}

gl_keyword! {
    BlendFactor ("blend factor") {
        Zero = "zero" => GL_ZERO,
        One = "one" => GL_ONE,
        SrcColor = "src_color" => GL_SRC_COLOR,
        OneMinusSrcColor = "one_minus_src_color" => GL_ONE_MINUS_SRC_COLOR,
        SrcAlpha = "src_alpha" => GL_SRC_ALPHA,
        OneMinusSrcAlpha = "one_minus_src_alpha" => GL_ONE_MINUS_SRC_ALPHA,
        DstAlpha = "dst_alpha" => GL_DST_ALPHA,
        OneMinusDstAlpha = "one_minus_dst_alpha" => GL_ONE_MINUS_DST_ALPHA,
        DstColor = "dst_color" => GL_DST_COLOR,
        OneMinusDstColor = "one_minus_dst_color" => GL_ONE_MINUS_DST_COLOR,
        SrcAlphaSaturate = "src_alpha_saturate" => GL_SRC_ALPHA_SATURATE,
        ConstantColor = "constant_color" => GL_CONSTANT_COLOR,
        OneMinusConstantColor = "one_minus_constant_color" => GL_ONE_MINUS_CONSTANT_COLOR,
        ConstantAlpha = "constant_alpha" => GL_CONSTANT_ALPHA,
        OneMinusConstantAlpha = "one_minus_constant_alpha" => GL_ONE_MINUS_CONSTANT_ALPHA,
        Src1Alpha = "src1_alpha" => GL_SRC1_ALPHA,
        Src1Color = "src1_color" => GL_SRC1_COLOR,
        OneMinusSrc1Color = "one_minus_src1_color" => GL_ONE_MINUS_SRC1_COLOR,
        OneMinusSrc1Alpha = "one_minus_src1_alpha" => GL_ONE_MINUS_SRC1_ALPHA,
    }
}

gl_keyword! {
    /// Texture minification/magnification filter.
    Filter ("filter") {
        Nearest = "nearest" => GL_NEAREST,
        Linear = "linear" => GL_LINEAR,
        NearestMipmapNearest = "nearest_mipmap_nearest" => GL_NEAREST_MIPMAP_NEAREST,
        LinearMipmapNearest = "linear_mipmap_nearest" => GL_LINEAR_MIPMAP_NEAREST,
        NearestMipmapLinear = "nearest_mipmap_linear" => GL_NEAREST_MIPMAP_LINEAR,
        LinearMipmapLinear = "linear_mipmap_linear" => GL_LINEAR_MIPMAP_LINEAR,
    }
}

gl_keyword! {
    Wrap ("texture wrap") {
        Repeat = "repeat" => GL_REPEAT,
        ClampToEdge = "clamp_to_edge" => GL_CLAMP_TO_EDGE,
        MirroredRepeat = "mirrored_repeat" => GL_MIRRORED_REPEAT,
    }
}

gl_keyword! {
    CompareMode ("compare mode") {
        None = "none" => GL_NONE,
        RefToTexture = "ref_to_texture" => GL_COMPARE_REF_TO_TEXTURE,
    }
}

impl Default for Topology {
    fn default() -> Self {
        Topology::Triangles
    }
}

impl Default for CullFace {
    fn default() -> Self {
        CullFace::None
    }
}

impl Default for Filter {
    fn default() -> Self {
        Filter::Linear
    }
}

impl Default for Wrap {
    fn default() -> Self {
        Wrap::Repeat
    }
}

impl Default for CompareMode {
    fn default() -> Self {
        CompareMode::None
    }
}
