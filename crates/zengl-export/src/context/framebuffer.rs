use super::image::{ImageFace, ImageId};
use crate::error::{ExportError, Result};

pub const MAX_ATTACHMENTS: usize = 16;

/// A render target attachment: one face of an image.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Attachment {
    pub image: ImageId,
    pub layer: u32,
    pub level: u32,
}

impl From<ImageId> for Attachment {
    fn from(image: ImageId) -> Self {
        Self { image, layer: 0, level: 0 }
    }
}

/// Cache key of a framebuffer object.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct FramebufferKey {
    pub color: Vec<ImageFace>,
    pub depth_stencil: Option<ImageFace>,
}

impl FramebufferKey {
    /// Splits faces into color attachments and one depth/stencil attachment.
    pub fn from_faces(faces: &[ImageFace]) -> Result<Self> {
        let Some(first) = faces.first() else {
            return Err(ExportError::AttachmentMismatch("no attachments".into()));
        };

        let mut color = Vec::new();
        let mut depth_stencil = None;

        for face in faces {
            if (face.width, face.height) != (first.width, first.height) {
                return Err(ExportError::AttachmentMismatch(format!(
                    "attachment sizes differ: {}x{} and {}x{}",
                    first.width, first.height, face.width, face.height
                )));
            }
            if face.samples != first.samples {
                return Err(ExportError::AttachmentMismatch(format!(
                    "attachment sample counts differ: {} and {}",
                    first.samples, face.samples
                )));
            }

            if face.format.color {
                color.push(*face);
            } else if depth_stencil.replace(*face).is_some() {
                return Err(ExportError::AttachmentMismatch(
                    "more than one depth/stencil attachment".into(),
                ));
            }
        }

        if color.len() > MAX_ATTACHMENTS {
            return Err(ExportError::TooManyBindings {
                kind: "color attachment",
                count: color.len(),
                max: MAX_ATTACHMENTS,
            });
        }

        Ok(Self { color, depth_stencil })
    }

    /// `(width, height)` shared by all attachments.
    pub fn size(&self) -> (u32, u32) {
        self.color
            .first()
            .or(self.depth_stencil.as_ref())
            .map_or((0, 0), |face| (face.width, face.height))
    }
}
