use crate::error::{ExportError, Result};
use crate::gl::consts::*;

/// Layout of one vertex attribute as passed to `glVertexAttrib*Pointer`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VertexFormat {
    pub name: &'static str,
    /// Component type (`GL_FLOAT`, `GL_UNSIGNED_BYTE`, ...).
    pub ty: u32,
    /// Component count (1..=4).
    pub size: u32,
    pub normalize: bool,
    /// Integer attributes go through `glVertexAttribIPointer`.
    pub integer: bool,
}

impl VertexFormat {
    const fn new(name: &'static str, ty: u32, size: u32, normalize: bool, integer: bool) -> Self {
        Self { name, ty, size, normalize, integer }
    }

    /// Looks up a format by name (`"float32x3"`, `"unorm8x4"`, ...).
    pub fn from_name(name: &str) -> Result<Self> {
        VERTEX_FORMATS
            .iter()
            .find(|f| f.name == name)
            .copied()
            .ok_or_else(|| ExportError::UnknownVertexFormat(name.to_string()))
    }

    /// Size of one attribute in bytes.
    pub fn byte_size(&self) -> u32 {
        let component = match self.ty {
            GL_BYTE | GL_UNSIGNED_BYTE => 1,
            GL_SHORT | GL_UNSIGNED_SHORT | GL_HALF_FLOAT => 2,
            _ => 4,
        };
        component * self.size
    }
}

const VERTEX_FORMATS: [VertexFormat; 30] = [
    VertexFormat::new("uint8x2", GL_UNSIGNED_BYTE, 2, false, true),
    VertexFormat::new("uint8x4", GL_UNSIGNED_BYTE, 4, false, true),
    VertexFormat::new("sint8x2", GL_BYTE, 2, false, true),
    VertexFormat::new("sint8x4", GL_BYTE, 4, false, true),
    VertexFormat::new("unorm8x2", GL_UNSIGNED_BYTE, 2, true, false),
    VertexFormat::new("unorm8x4", GL_UNSIGNED_BYTE, 4, true, false),
    VertexFormat::new("snorm8x2", GL_BYTE, 2, true, false),
    VertexFormat::new("snorm8x4", GL_BYTE, 4, true, false),
    VertexFormat::new("uint16x2", GL_UNSIGNED_SHORT, 2, false, true),
    VertexFormat::new("uint16x4", GL_UNSIGNED_SHORT, 4, false, true),
    VertexFormat::new("sint16x2", GL_SHORT, 2, false, true),
    VertexFormat::new("sint16x4", GL_SHORT, 4, false, true),
    VertexFormat::new("unorm16x2", GL_UNSIGNED_SHORT, 2, true, false),
    VertexFormat::new("unorm16x4", GL_UNSIGNED_SHORT, 4, true, false),
    VertexFormat::new("snorm16x2", GL_SHORT, 2, true, false),
    VertexFormat::new("snorm16x4", GL_SHORT, 4, true, false),
    VertexFormat::new("float16x2", GL_HALF_FLOAT, 2, false, false),
    VertexFormat::new("float16x4", GL_HALF_FLOAT, 4, false, false),
    VertexFormat::new("float32", GL_FLOAT, 1, false, false),
    VertexFormat::new("float32x2", GL_FLOAT, 2, false, false),
    VertexFormat::new("float32x3", GL_FLOAT, 3, false, false),
    VertexFormat::new("float32x4", GL_FLOAT, 4, false, false),
    VertexFormat::new("uint32", GL_UNSIGNED_INT, 1, false, true),
    VertexFormat::new("uint32x2", GL_UNSIGNED_INT, 2, false, true),
    VertexFormat::new("uint32x3", GL_UNSIGNED_INT, 3, false, true),
    VertexFormat::new("uint32x4", GL_UNSIGNED_INT, 4, false, true),
    VertexFormat::new("sint32", GL_INT, 1, false, true),
    VertexFormat::new("sint32x2", GL_INT, 2, false, true),
    VertexFormat::new("sint32x3", GL_INT, 3, false, true),
    VertexFormat::new("sint32x4", GL_INT, 4, false, true),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_formats_are_not_integer() {
        let f = VertexFormat::from_name("unorm8x4").unwrap();
        assert_eq!((f.ty, f.size, f.normalize, f.integer), (GL_UNSIGNED_BYTE, 4, true, false));
        assert_eq!(f.byte_size(), 4);
    }

    #[test]
    fn integer_formats() {
        let f = VertexFormat::from_name("sint32x3").unwrap();
        assert!(f.integer);
        assert_eq!(f.byte_size(), 12);
    }

    #[test]
    fn unknown_format_is_an_error() {
        assert_eq!(
            VertexFormat::from_name("float16x3"),
            Err(ExportError::UnknownVertexFormat("float16x3".into()))
        );
    }
}
