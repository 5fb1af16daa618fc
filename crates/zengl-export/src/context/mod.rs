//! Native model of a rendering context.
//!
//! A [`Context`] owns the live buffers, images and pipelines, plus the
//! deduplicated GL objects pipelines are compiled into. Everything is
//! validated at creation time, so the translator never fails on a built
//! context.

mod buffer;
mod cache;
mod framebuffer;
mod image;
mod pipeline;
mod sampler;
mod settings;
mod shader;
mod uniform;
mod vertex_array;

use log::{debug, trace};
use serde::Serialize;

pub use buffer::{Buffer, BufferDesc, BufferId};
pub use cache::ObjectCache;
pub use framebuffer::{Attachment, FramebufferKey, MAX_ATTACHMENTS};
pub use image::{Image, ImageDesc, ImageFace, ImageId, ImageKind};
pub use pipeline::{
    IndexType, Pipeline, PipelineDesc, PipelineId, Resource, SamplerBinding, UniformBufferBinding, Viewport,
    MAX_SAMPLER_BINDINGS, MAX_UNIFORM_BUFFER_BINDINGS,
};
pub use sampler::SamplerParams;
pub use settings::{
    BlendDesc, DepthDesc, GlobalSettings, PolygonOffset, SettingsDesc, StencilDesc, StencilFace, StencilSettings,
};
pub use shader::{ProgramKey, ShaderKey, ShaderStage};
pub use uniform::{LayoutBinding, LayoutKind, ScalarKind, Uniform, UniformDesc, UniformType, MAX_UNIFORMS};
pub use vertex_array::{bind, VertexArrayKey, VertexBinding};

use crate::error::{ExportError, Result};
use crate::format::ImageFormat;

/// Any object that can be released from a context.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Handle {
    Buffer(BufferId),
    Image(ImageId),
    Pipeline(PipelineId),
}

impl From<BufferId> for Handle {
    fn from(id: BufferId) -> Self {
        Handle::Buffer(id)
    }
}

impl From<ImageId> for Handle {
    fn from(id: ImageId) -> Self {
        Handle::Image(id)
    }
}

impl From<PipelineId> for Handle {
    fn from(id: PipelineId) -> Self {
        Handle::Pipeline(id)
    }
}

/// Object counts per kind.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize)]
pub struct ContextSummary {
    pub buffers: usize,
    pub images: usize,
    pub samplers: usize,
    pub framebuffers: usize,
    pub vertex_arrays: usize,
    pub shaders: usize,
    pub programs: usize,
    pub pipelines: usize,
}

/// Name allocators for the object kinds that are not cached.
#[derive(Debug, Clone)]
struct Names {
    buffer: u32,
    texture: u32,
    renderbuffer: u32,
    image: u32,
    pipeline: u32,
}

impl Default for Names {
    fn default() -> Self {
        Self { buffer: 1, texture: 1, renderbuffer: 1, image: 1, pipeline: 1 }
    }
}

fn take(counter: &mut u32) -> u32 {
    let name = *counter;
    *counter += 1;
    name
}

#[derive(Debug, Clone, Default)]
pub struct Context {
    buffers: Vec<Buffer>,
    images: Vec<Image>,
    pipelines: Vec<Pipeline>,
    samplers: ObjectCache<SamplerParams>,
    framebuffers: ObjectCache<FramebufferKey>,
    vertex_arrays: ObjectCache<VertexArrayKey>,
    shaders: ObjectCache<ShaderKey>,
    programs: ObjectCache<ProgramKey>,
    names: Names,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    // ── creation ───────────────────────────────────────────────────────────

    pub fn buffer(&mut self, desc: BufferDesc) -> Result<BufferId> {
        if desc.size == 0 {
            return Err(ExportError::InvalidBufferSize(desc.size));
        }

        let id = BufferId(take(&mut self.names.buffer));
        self.buffers.push(Buffer { id, size: desc.size, dynamic: desc.dynamic });
        debug!("created buffer {} ({} bytes)", id.0, desc.size);
        Ok(id)
    }

    pub fn image(&mut self, desc: ImageDesc) -> Result<ImageId> {
        let format = ImageFormat::from_name(&desc.format)?;
        let kind = image::resolve_kind(&desc)?;

        let name = if kind == ImageKind::Renderbuffer {
            take(&mut self.names.renderbuffer)
        } else {
            take(&mut self.names.texture)
        };

        let id = ImageId(take(&mut self.names.image));
        self.images.push(Image {
            id,
            name,
            width: desc.size.0,
            height: desc.size.1,
            samples: desc.samples,
            kind,
            format,
            max_level: desc.levels - 1,
        });
        debug!("created image {} as {kind:?} {name} ({})", id.0, desc.format);
        Ok(id)
    }

    /// View of one layer and level of a live image.
    pub fn face(&self, image: ImageId, layer: u32, level: u32) -> Result<ImageFace> {
        self.image_info(image)
            .ok_or(ExportError::StaleHandle { kind: "image", id: image.0 })?
            .face(layer, level)
    }

    /// Compiles a pipeline, reusing cached GL objects where possible.
    ///
    /// Validation happens before any cache is touched, so a rejected
    /// pipeline leaves the context unchanged.
    pub fn pipeline(&mut self, desc: PipelineDesc) -> Result<PipelineId> {
        // Render target.
        let faces = desc
            .framebuffer
            .iter()
            .map(|a| self.face(a.image, a.layer, a.level))
            .collect::<Result<Vec<_>>>()?;

        let target = if faces.is_empty() { None } else { Some(FramebufferKey::from_faces(&faces)?) };

        let viewport = match (desc.viewport, &target) {
            (Some(viewport), _) => viewport,
            (None, Some(key)) => Viewport::from_size(key.size())?,
            (None, None) => {
                return Err(ExportError::InvalidViewport("the screen needs an explicit viewport".into()));
            }
        };

        // Vertex input.
        for buffer in desc.vertex_buffers.iter().map(|b| b.buffer).chain(desc.index_buffer) {
            self.live_buffer(buffer)?;
        }
        let vertex_array = VertexArrayKey::new(desc.vertex_buffers.clone(), desc.index_buffer)?;

        // Descriptor sets.
        let mut buffer_slots = Vec::new();
        let mut sampler_slots = Vec::new();
        for resource in &desc.resources {
            match *resource {
                Resource::UniformBuffer { binding, buffer, offset, size } => {
                    buffer_slots.push((binding, self.uniform_buffer_binding(buffer, offset, size)?));
                }
                Resource::Sampler { binding, image, params } => {
                    let image = self.live_image(image)?;
                    if image.is_renderbuffer() {
                        return Err(ExportError::InvalidImage("renderbuffers cannot be sampled".into()));
                    }
                    sampler_slots.push((binding, (params, image.kind.target(), image.name)));
                }
            }
        }
        let uniform_buffers = pipeline::dense_bindings("uniform buffer", MAX_UNIFORM_BUFFER_BINDINGS, buffer_slots)?;
        let sampler_slots = pipeline::dense_bindings("sampler", MAX_SAMPLER_BINDINGS, sampler_slots)?;
        let uniforms = pipeline::resolve_uniforms(&desc.uniforms)?;

        let (attachments, has_depth) = match &target {
            Some(key) => {
                let has_depth = key.depth_stencil.is_some_and(|face| face.format.has_depth());
                (key.color.len() as u32, has_depth)
            }
            None => (1, false),
        };
        let settings = GlobalSettings::resolve(
            &SettingsDesc {
                primitive_restart: desc.primitive_restart,
                cull_face: desc.cull_face,
                depth: desc.depth,
                stencil: desc.stencil,
                blend: desc.blend,
                polygon_offset: desc.polygon_offset,
                color_mask: desc.color_mask,
            },
            attachments,
            has_depth,
        );

        // Everything is valid; allocate GL objects.
        let framebuffer = match target {
            Some(key) => intern(&mut self.framebuffers, "framebuffer", key),
            None => 0,
        };
        let vertex_shader = intern(
            &mut self.shaders,
            "shader",
            ShaderKey { source: desc.vertex_shader, stage: ShaderStage::Vertex },
        );
        let fragment_shader = intern(
            &mut self.shaders,
            "shader",
            ShaderKey { source: desc.fragment_shader, stage: ShaderStage::Fragment },
        );
        let program = intern(&mut self.programs, "program", ProgramKey { vertex_shader, fragment_shader });
        let vertex_array = intern(&mut self.vertex_arrays, "vertex array", vertex_array);
        let samplers = sampler_slots
            .into_iter()
            .map(|(params, target, image)| SamplerBinding {
                sampler: intern(&mut self.samplers, "sampler", params),
                target,
                image,
            })
            .collect();

        let index = desc.index_buffer.map(|_| {
            if desc.short_index { IndexType::UnsignedShort } else { IndexType::UnsignedInt }
        });

        let id = PipelineId(take(&mut self.names.pipeline));
        self.pipelines.push(Pipeline {
            id,
            settings,
            viewport,
            framebuffer,
            program,
            vertex_array,
            uniform_buffers,
            samplers,
            layout: desc.layout,
            uniforms,
            topology: desc.topology,
            vertex_count: desc.vertex_count,
            instance_count: desc.instance_count,
            first_vertex: desc.first_vertex,
            index,
        });
        debug!("created pipeline {} (program {program})", id.0);
        Ok(id)
    }

    /// Removes a live object. Cached GL objects built from it stay.
    pub fn release(&mut self, handle: impl Into<Handle>) -> Result<()> {
        let handle = handle.into();
        let (kind, id, removed) = match handle {
            Handle::Buffer(id) => ("buffer", id.0, remove_where(&mut self.buffers, |b| b.id == id)),
            Handle::Image(id) => ("image", id.0, remove_where(&mut self.images, |i| i.id == id)),
            Handle::Pipeline(id) => ("pipeline", id.0, remove_where(&mut self.pipelines, |p| p.id == id)),
        };

        if !removed {
            return Err(ExportError::StaleHandle { kind, id });
        }
        debug!("released {kind} {id}");
        Ok(())
    }

    // ── lookups ────────────────────────────────────────────────────────────

    pub fn buffer_info(&self, id: BufferId) -> Option<&Buffer> {
        self.buffers.iter().find(|b| b.id == id)
    }

    pub fn image_info(&self, id: ImageId) -> Option<&Image> {
        self.images.iter().find(|i| i.id == id)
    }

    pub fn pipeline_info(&self, id: PipelineId) -> Option<&Pipeline> {
        self.pipelines.iter().find(|p| p.id == id)
    }

    /// Live buffers in creation order.
    pub fn buffers(&self) -> &[Buffer] {
        &self.buffers
    }

    /// Live images in creation order.
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    /// Live pipelines in creation order.
    pub fn pipelines(&self) -> &[Pipeline] {
        &self.pipelines
    }

    pub fn samplers(&self) -> &ObjectCache<SamplerParams> {
        &self.samplers
    }

    pub fn framebuffers(&self) -> &ObjectCache<FramebufferKey> {
        &self.framebuffers
    }

    pub fn vertex_arrays(&self) -> &ObjectCache<VertexArrayKey> {
        &self.vertex_arrays
    }

    pub fn shaders(&self) -> &ObjectCache<ShaderKey> {
        &self.shaders
    }

    pub fn programs(&self) -> &ObjectCache<ProgramKey> {
        &self.programs
    }

    pub fn summary(&self) -> ContextSummary {
        ContextSummary {
            buffers: self.buffers.len(),
            images: self.images.len(),
            samplers: self.samplers.len(),
            framebuffers: self.framebuffers.len(),
            vertex_arrays: self.vertex_arrays.len(),
            shaders: self.shaders.len(),
            programs: self.programs.len(),
            pipelines: self.pipelines.len(),
        }
    }

    // ── helpers ────────────────────────────────────────────────────────────

    fn live_buffer(&self, id: BufferId) -> Result<&Buffer> {
        self.buffer_info(id).ok_or(ExportError::StaleHandle { kind: "buffer", id: id.0 })
    }

    fn live_image(&self, id: ImageId) -> Result<&Image> {
        self.image_info(id).ok_or(ExportError::StaleHandle { kind: "image", id: id.0 })
    }

    fn uniform_buffer_binding(&self, id: BufferId, offset: u32, size: Option<u32>) -> Result<UniformBufferBinding> {
        let buffer = self.live_buffer(id)?;
        let available = (buffer.size as u64).saturating_sub(offset.into());
        let size = size.unwrap_or(u32::try_from(available).unwrap_or(u32::MAX));

        if offset as u64 + size as u64 > buffer.size as u64 || size == 0 {
            return Err(ExportError::InvalidRange { buffer: id.0, offset, size });
        }
        Ok(UniformBufferBinding { buffer: id, offset, size })
    }
}

fn intern<K: Clone + Eq + std::hash::Hash>(cache: &mut ObjectCache<K>, kind: &str, key: K) -> u32 {
    let (name, created) = cache.get_or_insert(key);
    if !created {
        trace!("reusing {kind} {name}");
    }
    name
}

fn remove_where<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> bool {
    match items.iter().position(pred) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::consts::*;

    const VS: &str = "#version 330 core\nvoid main() {}\n";
    const FS: &str = "#version 330 core\nout vec4 c;\nvoid main() { c = vec4(1.0); }\n";

    fn target(ctx: &mut Context) -> ImageId {
        ctx.image(ImageDesc { size: (64, 64), ..Default::default() }).unwrap()
    }

    fn simple(image: ImageId) -> PipelineDesc {
        PipelineDesc {
            vertex_shader: VS.into(),
            fragment_shader: FS.into(),
            framebuffer: vec![image.into()],
            vertex_count: 3,
            ..Default::default()
        }
    }

    #[test]
    fn names_are_allocated_per_kind() {
        let mut ctx = Context::new();
        assert_eq!(ctx.buffer(BufferDesc { size: 16, dynamic: false }), Ok(BufferId(1)));
        let tex = target(&mut ctx);
        let rb = ctx.image(ImageDesc { size: (64, 64), samples: 4, ..Default::default() }).unwrap();
        let tex2 = target(&mut ctx);
        assert_eq!(ctx.image_info(tex).map(|i| i.name), Some(1));
        assert_eq!(ctx.image_info(rb).map(|i| i.name), Some(1));
        assert_eq!(ctx.image_info(tex2).map(|i| i.name), Some(2));
    }

    #[test]
    fn zero_sized_buffer_is_rejected() {
        let mut ctx = Context::new();
        assert_eq!(ctx.buffer(BufferDesc::default()), Err(ExportError::InvalidBufferSize(0)));
    }

    #[test]
    fn identical_pipelines_share_gl_objects() {
        let mut ctx = Context::new();
        let image = target(&mut ctx);
        let a = ctx.pipeline(simple(image)).unwrap();
        let b = ctx.pipeline(simple(image)).unwrap();

        assert_ne!(a, b);
        let summary = ctx.summary();
        assert_eq!(summary.pipelines, 2);
        assert_eq!(summary.framebuffers, 1);
        assert_eq!(summary.shaders, 2);
        assert_eq!(summary.programs, 1);
        assert_eq!(summary.vertex_arrays, 1);
    }

    #[test]
    fn viewport_defaults_to_target_size() {
        let mut ctx = Context::new();
        let image = target(&mut ctx);
        let id = ctx.pipeline(simple(image)).unwrap();
        let pipeline = ctx.pipeline_info(id).unwrap();
        assert_eq!(pipeline.viewport, Viewport { x: 0, y: 0, width: 64, height: 64 });
        assert_eq!(pipeline.framebuffer, 1);
    }

    #[test]
    fn screen_pipeline_needs_viewport() {
        let mut ctx = Context::new();
        let desc = PipelineDesc { vertex_shader: VS.into(), fragment_shader: FS.into(), ..Default::default() };
        assert!(matches!(ctx.pipeline(desc.clone()), Err(ExportError::InvalidViewport(_))));

        let viewport = Viewport::from_size((800, 600)).unwrap();
        let id = ctx.pipeline(PipelineDesc { viewport: Some(viewport), ..desc }).unwrap();
        assert!(ctx.pipeline_info(id).unwrap().targets_screen());
        assert!(ctx.framebuffers().is_empty());
    }

    #[test]
    fn depth_attachment_enables_depth_test() {
        let mut ctx = Context::new();
        let color = target(&mut ctx);
        let depth = ctx
            .image(ImageDesc { size: (64, 64), format: "depth24plus".into(), ..Default::default() })
            .unwrap();
        let id = ctx
            .pipeline(PipelineDesc { framebuffer: vec![color.into(), depth.into()], ..simple(color) })
            .unwrap();
        let settings = &ctx.pipeline_info(id).unwrap().settings;
        assert!(settings.depth_test);
        assert_eq!(settings.depth_func, GL_LESS);
        assert_eq!(settings.attachments, 1);
    }

    #[test]
    fn samplers_are_deduplicated_across_pipelines() {
        let mut ctx = Context::new();
        let image = target(&mut ctx);
        let texture = target(&mut ctx);
        let sampler = |binding| Resource::Sampler { binding, image: texture, params: SamplerParams::default() };

        ctx.pipeline(PipelineDesc { resources: vec![sampler(0), sampler(1)], ..simple(image) }).unwrap();
        let id = ctx.pipeline(PipelineDesc { resources: vec![sampler(0)], ..simple(image) }).unwrap();

        assert_eq!(ctx.samplers().len(), 1);
        let binding = ctx.pipeline_info(id).unwrap().samplers[0];
        assert_eq!(binding, SamplerBinding { sampler: 1, target: GL_TEXTURE_2D, image: 2 });
    }

    #[test]
    fn renderbuffer_cannot_be_sampled() {
        let mut ctx = Context::new();
        let image = target(&mut ctx);
        let rb = ctx.image(ImageDesc { size: (8, 8), texture: Some(false), ..Default::default() }).unwrap();
        let desc = PipelineDesc {
            resources: vec![Resource::Sampler { binding: 0, image: rb, params: SamplerParams::default() }],
            ..simple(image)
        };
        assert!(matches!(ctx.pipeline(desc), Err(ExportError::InvalidImage(_))));
    }

    #[test]
    fn uniform_buffer_range_defaults_to_rest_of_buffer() {
        let mut ctx = Context::new();
        let image = target(&mut ctx);
        let ubo = ctx.buffer(BufferDesc { size: 256, dynamic: true }).unwrap();
        let id = ctx
            .pipeline(PipelineDesc {
                resources: vec![Resource::UniformBuffer { binding: 0, buffer: ubo, offset: 64, size: None }],
                ..simple(image)
            })
            .unwrap();
        let binding = ctx.pipeline_info(id).unwrap().uniform_buffers[0];
        assert_eq!((binding.offset, binding.size), (64, 192));

        let overflow = PipelineDesc {
            resources: vec![Resource::UniformBuffer { binding: 0, buffer: ubo, offset: 64, size: Some(256) }],
            ..simple(image)
        };
        assert_eq!(
            ctx.pipeline(overflow),
            Err(ExportError::InvalidRange { buffer: 1, offset: 64, size: 256 })
        );
    }

    #[test]
    fn rejected_pipeline_leaves_caches_untouched() {
        let mut ctx = Context::new();
        let image = target(&mut ctx);
        let desc = PipelineDesc {
            resources: vec![Resource::UniformBuffer { binding: 1, buffer: BufferId(9), offset: 0, size: None }],
            ..simple(image)
        };
        assert_eq!(ctx.pipeline(desc), Err(ExportError::StaleHandle { kind: "buffer", id: 9 }));
        assert_eq!(ctx.summary(), ContextSummary { images: 1, ..Default::default() });
    }

    #[test]
    fn indexed_pipeline_picks_index_type() {
        let mut ctx = Context::new();
        let image = target(&mut ctx);
        let vbo = ctx.buffer(BufferDesc { size: 36, dynamic: false }).unwrap();
        let ibo = ctx.buffer(BufferDesc { size: 6, dynamic: false }).unwrap();
        let id = ctx
            .pipeline(PipelineDesc {
                vertex_buffers: bind(vbo, "3f", &[0], 0).unwrap(),
                index_buffer: Some(ibo),
                short_index: true,
                ..simple(image)
            })
            .unwrap();
        assert_eq!(ctx.pipeline_info(id).unwrap().index, Some(IndexType::UnsignedShort));
    }

    #[test]
    fn release_removes_live_objects_only_once() {
        let mut ctx = Context::new();
        let buffer = ctx.buffer(BufferDesc { size: 4, dynamic: false }).unwrap();
        assert_eq!(ctx.release(buffer), Ok(()));
        assert!(ctx.buffers().is_empty());
        assert_eq!(ctx.release(buffer), Err(ExportError::StaleHandle { kind: "buffer", id: 1 }));
    }

    #[test]
    fn released_image_cannot_be_attached() {
        let mut ctx = Context::new();
        let image = target(&mut ctx);
        ctx.release(image).unwrap();
        assert_eq!(ctx.pipeline(simple(image)), Err(ExportError::StaleHandle { kind: "image", id: 1 }));
    }
}
