//! GL vocabulary: enum values, their C names and typed state keywords.

pub mod consts;
pub mod keywords;
pub mod names;

pub use keywords::{
    BlendFactor, BlendOp, CompareFunc, CompareMode, CullFace, Filter, StencilOp, Topology, Wrap,
};
pub use names::Sym;
