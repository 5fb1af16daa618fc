//! Vertex and image format tables.

mod image;
mod layout;
mod vertex;

pub use image::ImageFormat;
pub use layout::{parse_layout, LayoutAttribute, VertexLayout};
pub use vertex::VertexFormat;
