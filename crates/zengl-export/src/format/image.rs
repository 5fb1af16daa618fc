use crate::error::{ExportError, Result};
use crate::gl::consts::*;

/// Storage description of an image format.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageFormat {
    pub name: &'static str,
    pub internal_format: u32,
    /// Pixel transfer format (`GL_RGBA`, `GL_DEPTH_COMPONENT`, ...).
    pub format: u32,
    /// Pixel transfer component type.
    pub ty: u32,
    /// Attachment buffer: `GL_COLOR`, `GL_DEPTH`, `GL_STENCIL` or `GL_DEPTH_STENCIL`.
    pub buffer: u32,
    pub color: bool,
}

impl ImageFormat {
    const fn new(name: &'static str, internal_format: u32, format: u32, ty: u32, buffer: u32) -> Self {
        Self { name, internal_format, format, ty, buffer, color: buffer == GL_COLOR }
    }

    /// Looks up a format by name (`"rgba8unorm"`, `"depth24plus"`, ...).
    pub fn from_name(name: &str) -> Result<Self> {
        IMAGE_FORMATS
            .iter()
            .find(|f| f.name == name)
            .copied()
            .ok_or_else(|| ExportError::UnknownImageFormat(name.to_string()))
    }

    /// Whether the format carries a depth component.
    #[inline]
    pub fn has_depth(&self) -> bool {
        self.buffer == GL_DEPTH || self.buffer == GL_DEPTH_STENCIL
    }
}

const IMAGE_FORMATS: [ImageFormat; 38] = [
    ImageFormat::new("r8unorm", GL_R8, GL_RED, GL_UNSIGNED_BYTE, GL_COLOR),
    ImageFormat::new("rg8unorm", GL_RG8, GL_RG, GL_UNSIGNED_BYTE, GL_COLOR),
    ImageFormat::new("rgba8unorm", GL_RGBA8, GL_RGBA, GL_UNSIGNED_BYTE, GL_COLOR),
    ImageFormat::new("bgra8unorm", GL_RGBA8, GL_BGRA, GL_UNSIGNED_BYTE, GL_COLOR),
    ImageFormat::new("r8snorm", GL_R8_SNORM, GL_RED, GL_BYTE, GL_COLOR),
    ImageFormat::new("rg8snorm", GL_RG8_SNORM, GL_RG, GL_BYTE, GL_COLOR),
    ImageFormat::new("rgba8snorm", GL_RGBA8_SNORM, GL_RGBA, GL_BYTE, GL_COLOR),
    ImageFormat::new("r8uint", GL_R8UI, GL_RED_INTEGER, GL_UNSIGNED_BYTE, GL_COLOR),
    ImageFormat::new("rg8uint", GL_RG8UI, GL_RG_INTEGER, GL_UNSIGNED_BYTE, GL_COLOR),
    ImageFormat::new("rgba8uint", GL_RGBA8UI, GL_RGBA_INTEGER, GL_UNSIGNED_BYTE, GL_COLOR),
    ImageFormat::new("r16uint", GL_R16UI, GL_RED_INTEGER, GL_UNSIGNED_SHORT, GL_COLOR),
    ImageFormat::new("rg16uint", GL_RG16UI, GL_RG_INTEGER, GL_UNSIGNED_SHORT, GL_COLOR),
    ImageFormat::new("rgba16uint", GL_RGBA16UI, GL_RGBA_INTEGER, GL_UNSIGNED_SHORT, GL_COLOR),
    ImageFormat::new("r32uint", GL_R32UI, GL_RED_INTEGER, GL_UNSIGNED_INT, GL_COLOR),
    ImageFormat::new("rg32uint", GL_RG32UI, GL_RG_INTEGER, GL_UNSIGNED_INT, GL_COLOR),
    ImageFormat::new("rgba32uint", GL_RGBA32UI, GL_RGBA_INTEGER, GL_UNSIGNED_INT, GL_COLOR),
    ImageFormat::new("r8sint", GL_R8I, GL_RED_INTEGER, GL_BYTE, GL_COLOR),
    ImageFormat::new("rg8sint", GL_RG8I, GL_RG_INTEGER, GL_BYTE, GL_COLOR),
    ImageFormat::new("rgba8sint", GL_RGBA8I, GL_RGBA_INTEGER, GL_BYTE, GL_COLOR),
    ImageFormat::new("r16sint", GL_R16I, GL_RED_INTEGER, GL_SHORT, GL_COLOR),
    ImageFormat::new("rg16sint", GL_RG16I, GL_RG_INTEGER, GL_SHORT, GL_COLOR),
    ImageFormat::new("rgba16sint", GL_RGBA16I, GL_RGBA_INTEGER, GL_SHORT, GL_COLOR),
    ImageFormat::new("r32sint", GL_R32I, GL_RED_INTEGER, GL_INT, GL_COLOR),
    ImageFormat::new("rg32sint", GL_RG32I, GL_RG_INTEGER, GL_INT, GL_COLOR),
    ImageFormat::new("rgba32sint", GL_RGBA32I, GL_RGBA_INTEGER, GL_INT, GL_COLOR),
    ImageFormat::new("r16float", GL_R16F, GL_RED, GL_HALF_FLOAT, GL_COLOR),
    ImageFormat::new("rg16float", GL_RG16F, GL_RG, GL_HALF_FLOAT, GL_COLOR),
    ImageFormat::new("rgba16float", GL_RGBA16F, GL_RGBA, GL_HALF_FLOAT, GL_COLOR),
    ImageFormat::new("r32float", GL_R32F, GL_RED, GL_FLOAT, GL_COLOR),
    ImageFormat::new("rg32float", GL_RG32F, GL_RG, GL_FLOAT, GL_COLOR),
    ImageFormat::new("rgba32float", GL_RGBA32F, GL_RGBA, GL_FLOAT, GL_COLOR),
    ImageFormat::new("rgba8unorm-srgb", GL_SRGB8_ALPHA8, GL_RGBA, GL_UNSIGNED_BYTE, GL_COLOR),
    ImageFormat::new("bgra8unorm-srgb", GL_SRGB8_ALPHA8, GL_BGRA, GL_UNSIGNED_BYTE, GL_COLOR),
    ImageFormat::new("stencil8", GL_STENCIL_INDEX8, GL_STENCIL_INDEX, GL_UNSIGNED_BYTE, GL_STENCIL),
    ImageFormat::new("depth16unorm", GL_DEPTH_COMPONENT16, GL_DEPTH_COMPONENT, GL_UNSIGNED_SHORT, GL_DEPTH),
    ImageFormat::new("depth24plus", GL_DEPTH_COMPONENT24, GL_DEPTH_COMPONENT, GL_UNSIGNED_INT, GL_DEPTH),
    ImageFormat::new("depth24plus-stencil8", GL_DEPTH24_STENCIL8, GL_DEPTH_STENCIL, GL_UNSIGNED_INT_24_8, GL_DEPTH_STENCIL),
    ImageFormat::new("depth32float", GL_DEPTH_COMPONENT32F, GL_DEPTH_COMPONENT, GL_FLOAT, GL_DEPTH),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_formats_are_color() {
        let f = ImageFormat::from_name("bgra8unorm-srgb").unwrap();
        assert!(f.color);
        assert_eq!((f.internal_format, f.format), (GL_SRGB8_ALPHA8, GL_BGRA));
    }

    #[test]
    fn depth_stencil_format() {
        let f = ImageFormat::from_name("depth24plus-stencil8").unwrap();
        assert!(!f.color);
        assert!(f.has_depth());
        assert_eq!(f.buffer, GL_DEPTH_STENCIL);
    }

    #[test]
    fn stencil_only_has_no_depth() {
        let f = ImageFormat::from_name("stencil8").unwrap();
        assert!(!f.has_depth());
        assert_eq!(f.buffer, GL_STENCIL);
    }

    #[test]
    fn unknown_image_format() {
        assert!(matches!(
            ImageFormat::from_name("rgb8unorm"),
            Err(ExportError::UnknownImageFormat(_))
        ));
    }
}
