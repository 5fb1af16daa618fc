use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};
use crate::format::ImageFormat;
use crate::gl::consts::{GL_TEXTURE_2D, GL_TEXTURE_2D_ARRAY, GL_TEXTURE_CUBE_MAP};

/// Handle of an image.
///
/// Textures and renderbuffers live in separate GL name spaces, so the handle
/// is a creation serial and the GL name is stored on [`Image`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ImageId(pub u32);

/// Image creation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageDesc {
    /// `(width, height)` in pixels.
    pub size: (u32, u32),
    /// Format name, see [`ImageFormat::from_name`].
    pub format: String,
    /// Layer count of an array texture; 0 for a plain image.
    #[serde(default)]
    pub array: u32,
    #[serde(default)]
    pub cubemap: bool,
    #[serde(default = "one")]
    pub samples: u32,
    /// `Some(false)` forces a renderbuffer, `Some(true)` forces a texture,
    /// `None` picks a renderbuffer only for multisampled images.
    #[serde(default)]
    pub texture: Option<bool>,
    #[serde(default = "one")]
    pub levels: u32,
}

fn one() -> u32 {
    1
}

impl Default for ImageDesc {
    fn default() -> Self {
        Self {
            size: (1, 1),
            format: "rgba8unorm".to_string(),
            array: 0,
            cubemap: false,
            samples: 1,
            texture: None,
            levels: 1,
        }
    }
}

/// Storage shape of an image.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ImageKind {
    Renderbuffer,
    Texture2d,
    Cubemap,
    /// Array texture with the given layer count.
    Array(u32),
}

impl ImageKind {
    /// Texture target, 0 for renderbuffers.
    pub fn target(self) -> u32 {
        match self {
            ImageKind::Renderbuffer => 0,
            ImageKind::Texture2d => GL_TEXTURE_2D,
            ImageKind::Cubemap => GL_TEXTURE_CUBE_MAP,
            ImageKind::Array(_) => GL_TEXTURE_2D_ARRAY,
        }
    }

    /// Number of addressable layers.
    pub fn layers(self) -> u32 {
        match self {
            ImageKind::Cubemap => 6,
            ImageKind::Array(layers) => layers,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub id: ImageId,
    /// GL texture or renderbuffer name.
    pub name: u32,
    pub width: u32,
    pub height: u32,
    pub samples: u32,
    pub kind: ImageKind,
    pub format: ImageFormat,
    pub max_level: u32,
}

impl Image {
    #[inline]
    pub fn is_renderbuffer(&self) -> bool {
        self.kind == ImageKind::Renderbuffer
    }

    /// Returns the view of one layer and mip level, used as a render target.
    pub fn face(&self, layer: u32, level: u32) -> Result<ImageFace> {
        if layer >= self.kind.layers() || level > self.max_level {
            return Err(ExportError::FaceOutOfRange { layer, level });
        }

        Ok(ImageFace {
            image: self.id,
            name: self.name,
            kind: self.kind,
            format: self.format,
            layer,
            level,
            width: (self.width >> level).max(1),
            height: (self.height >> level).max(1),
            samples: self.samples,
        })
    }
}

/// One layer and level of an image.
///
/// Carries a copy of the image properties the translator needs, so cached
/// framebuffers stay printable after the image is released.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageFace {
    pub image: ImageId,
    pub name: u32,
    pub kind: ImageKind,
    pub format: ImageFormat,
    pub layer: u32,
    pub level: u32,
    pub width: u32,
    pub height: u32,
    pub samples: u32,
}

/// Validates `desc` and derives the image shape.
pub(super) fn resolve_kind(desc: &ImageDesc) -> Result<ImageKind> {
    let (width, height) = desc.size;
    if width == 0 || height == 0 {
        return Err(ExportError::InvalidImageSize { width, height });
    }

    if desc.samples == 0 || desc.samples > 16 || !desc.samples.is_power_of_two() {
        return Err(ExportError::InvalidSamples(desc.samples));
    }

    if desc.samples > 1 && desc.texture == Some(true) {
        return Err(ExportError::InvalidImage("multisampled images cannot be textures".into()));
    }

    if desc.cubemap && desc.array > 0 {
        return Err(ExportError::InvalidImage("cubemap arrays are not supported".into()));
    }

    if desc.cubemap && width != height {
        return Err(ExportError::InvalidImage("cubemap faces must be square".into()));
    }

    let max_levels = 32 - width.max(height).leading_zeros();
    if desc.levels == 0 || desc.levels > max_levels {
        return Err(ExportError::InvalidLevels { levels: desc.levels, max: max_levels });
    }

    let renderbuffer = desc.samples > 1 || desc.texture == Some(false);
    if renderbuffer {
        if desc.cubemap || desc.array > 0 {
            return Err(ExportError::InvalidImage(
                "renderbuffers cannot be cubemaps or arrays".into(),
            ));
        }
        if desc.levels > 1 {
            return Err(ExportError::InvalidImage("renderbuffers have a single level".into()));
        }
    }

    Ok(if renderbuffer {
        ImageKind::Renderbuffer
    } else if desc.cubemap {
        ImageKind::Cubemap
    } else if desc.array > 0 {
        ImageKind::Array(desc.array)
    } else {
        ImageKind::Texture2d
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(width: u32, height: u32) -> ImageDesc {
        ImageDesc { size: (width, height), ..Default::default() }
    }

    fn kind(desc: &ImageDesc) -> Result<ImageKind> {
        resolve_kind(desc)
    }

    #[test]
    fn plain_texture() {
        assert_eq!(kind(&desc(64, 32)), Ok(ImageKind::Texture2d));
    }

    #[test]
    fn multisampled_defaults_to_renderbuffer() {
        let d = ImageDesc { samples: 4, ..desc(64, 64) };
        assert_eq!(kind(&d), Ok(ImageKind::Renderbuffer));
    }

    #[test]
    fn explicit_renderbuffer() {
        let d = ImageDesc { texture: Some(false), ..desc(64, 64) };
        assert_eq!(kind(&d), Ok(ImageKind::Renderbuffer));
    }

    #[test]
    fn multisampled_texture_is_rejected() {
        let d = ImageDesc { samples: 4, texture: Some(true), ..desc(64, 64) };
        assert!(matches!(kind(&d), Err(ExportError::InvalidImage(_))));
    }

    #[test]
    fn sample_count_must_be_power_of_two() {
        let d = ImageDesc { samples: 3, ..desc(64, 64) };
        assert_eq!(kind(&d), Err(ExportError::InvalidSamples(3)));
    }

    #[test]
    fn cubemap_and_array_conflict() {
        let d = ImageDesc { cubemap: true, array: 2, ..desc(64, 64) };
        assert!(matches!(kind(&d), Err(ExportError::InvalidImage(_))));
    }

    #[test]
    fn level_count_is_bounded_by_size() {
        assert_eq!(kind(&ImageDesc { levels: 7, ..desc(64, 16) }), Ok(ImageKind::Texture2d));
        assert_eq!(
            kind(&ImageDesc { levels: 8, ..desc(64, 16) }),
            Err(ExportError::InvalidLevels { levels: 8, max: 7 })
        );
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(kind(&desc(0, 4)), Err(ExportError::InvalidImageSize { width: 0, height: 4 }));
    }

    #[test]
    fn face_size_follows_level() {
        let image = Image {
            id: ImageId(1),
            name: 1,
            width: 64,
            height: 16,
            samples: 1,
            kind: ImageKind::Array(3),
            format: ImageFormat::from_name("rgba8unorm").unwrap(),
            max_level: 6,
        };
        let face = image.face(2, 5).unwrap();
        assert_eq!((face.width, face.height), (2, 1));
        assert_eq!(image.face(3, 0), Err(ExportError::FaceOutOfRange { layer: 3, level: 0 }));
        assert_eq!(image.face(0, 7), Err(ExportError::FaceOutOfRange { layer: 0, level: 7 }));
    }
}
