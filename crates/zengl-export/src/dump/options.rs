use crate::context::{Context, ImageId};
use crate::error::{ExportError, Result};

/// Framebuffer copied to the screen by the final blit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BlitSource {
    /// Framebuffer name.
    pub framebuffer: u32,
    pub width: u32,
    pub height: u32,
}

impl BlitSource {
    /// Picks the first framebuffer whose first color attachment is `image`.
    pub fn for_image(ctx: &Context, image: ImageId) -> Result<Self> {
        ctx.framebuffers()
            .iter()
            .find(|(key, _)| key.color.first().is_some_and(|face| face.image == image))
            .map(|(key, framebuffer)| {
                let (width, height) = key.size();
                Self { framebuffer, width, height }
            })
            .ok_or(ExportError::NoFramebuffer(image.0))
    }
}

/// Controls which fixed blocks surround the object listing.
#[derive(Debug, Clone, PartialEq)]
pub struct DumpOptions {
    /// Emit the context-wide default state block.
    pub include_defaults: bool,
    /// Emit the final blit to the screen.
    pub include_blit: bool,
    /// Blit from a known framebuffer instead of free identifiers.
    pub blit_source: Option<BlitSource>,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self { include_defaults: true, include_blit: true, blit_source: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{ImageDesc, PipelineDesc};

    #[test]
    fn finds_framebuffer_of_image() {
        let mut ctx = Context::new();
        let color = ctx.image(ImageDesc { size: (320, 200), ..Default::default() }).unwrap();
        let other = ctx.image(ImageDesc { size: (8, 8), ..Default::default() }).unwrap();
        ctx.pipeline(PipelineDesc { framebuffer: vec![color.into()], ..Default::default() }).unwrap();

        assert_eq!(
            BlitSource::for_image(&ctx, color),
            Ok(BlitSource { framebuffer: 1, width: 320, height: 200 })
        );
        assert_eq!(BlitSource::for_image(&ctx, other), Err(ExportError::NoFramebuffer(2)));
    }
}
