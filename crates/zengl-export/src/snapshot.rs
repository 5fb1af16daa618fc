//! JSON description of a context.
//!
//! Objects are declared with a name and referenced by it. Declarations are
//! processed in order: buffers, images, pipelines, then `release`.
//!
//! ```json
//! {
//!   "buffers": [{"name": "vbo", "size": 24}],
//!   "images": [{"name": "color", "size": [64, 64], "format": "rgba8unorm"}],
//!   "pipelines": [{
//!     "vertex_shader": "...",
//!     "fragment_shader": "...",
//!     "framebuffer": ["color"],
//!     "vertex_buffers": [{"buffer": "vbo", "layout": "2f", "attributes": [0]}],
//!     "vertex_count": 3
//!   }]
//! }
//! ```

use std::collections::{BTreeMap, HashMap};

use log::debug;
use serde::Deserialize;

use crate::context::{
    bind, Attachment, BlendDesc, BufferDesc, BufferId, Context, DepthDesc, Handle, ImageDesc, ImageId, LayoutBinding,
    LayoutKind, PipelineDesc, PolygonOffset, Resource, SamplerParams, StencilDesc, UniformDesc, Viewport,
};
use crate::error::{ExportError, Result};
use crate::gl::{CullFace, Topology};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    #[serde(default)]
    pub buffers: Vec<BufferEntry>,
    #[serde(default)]
    pub images: Vec<ImageEntry>,
    #[serde(default)]
    pub pipelines: Vec<PipelineEntry>,
    /// Names of objects to release once everything is created.
    #[serde(default)]
    pub release: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BufferEntry {
    pub name: String,
    #[serde(flatten)]
    pub desc: BufferDesc,
    #[serde(flatten)]
    extra: Extra,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageEntry {
    pub name: String,
    #[serde(flatten)]
    pub desc: ImageDesc,
    #[serde(flatten)]
    extra: Extra,
}

/// A render target: an image name, or one face of it.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum AttachmentEntry {
    Image(String),
    Face {
        image: String,
        #[serde(default)]
        layer: u32,
        #[serde(default)]
        level: u32,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VertexBufferEntry {
    pub buffer: String,
    /// Layout string such as `"3f 2f"` or `"4nu1 /i"`.
    pub layout: String,
    /// One location per layout attribute; negative skips it.
    pub attributes: Vec<i32>,
    #[serde(default)]
    pub offset: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UniformBufferEntry {
    pub binding: u32,
    pub buffer: String,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SamplerEntry {
    pub binding: u32,
    pub image: String,
    #[serde(flatten)]
    pub params: SamplerParams,
    #[serde(flatten)]
    extra: Extra,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResourceEntry {
    UniformBuffer(UniformBufferEntry),
    Sampler(SamplerEntry),
}

/// Layout binding. Without `kind`, a name bound to a slot that only a
/// sampler resource uses is a sampler; anything else is a uniform block.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutEntry {
    pub name: String,
    pub binding: u32,
    #[serde(default)]
    pub kind: Option<LayoutKind>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineEntry {
    #[serde(default)]
    pub name: Option<String>,
    pub vertex_shader: String,
    pub fragment_shader: String,
    #[serde(default)]
    pub layout: Vec<LayoutEntry>,
    #[serde(default)]
    pub resources: Vec<ResourceEntry>,
    #[serde(default)]
    pub uniforms: Vec<UniformDesc>,
    #[serde(default)]
    pub framebuffer: Vec<AttachmentEntry>,
    #[serde(default)]
    pub vertex_buffers: Vec<VertexBufferEntry>,
    #[serde(default)]
    pub index_buffer: Option<String>,
    #[serde(default)]
    pub short_index: bool,
    #[serde(default)]
    pub topology: Topology,
    #[serde(default)]
    pub vertex_count: u32,
    #[serde(default = "one")]
    pub instance_count: u32,
    #[serde(default)]
    pub first_vertex: u32,
    #[serde(default)]
    pub depth: Option<DepthDesc>,
    #[serde(default)]
    pub stencil: Option<StencilDesc>,
    #[serde(default)]
    pub blend: Option<BlendDesc>,
    #[serde(default)]
    pub cull_face: CullFace,
    #[serde(default)]
    pub polygon_offset: Option<PolygonOffset>,
    /// Four bits (r, g, b, a) per color attachment.
    #[serde(default)]
    pub color_mask: Option<u64>,
    #[serde(default = "enabled")]
    pub primitive_restart: bool,
    /// `[x, y, width, height]`.
    #[serde(default)]
    pub viewport: Option<[i64; 4]>,
}

fn one() -> u32 {
    1
}

fn enabled() -> bool {
    true
}

/// A context built from a snapshot, with its declared names.
/// Keys left over after a flattened descriptor took its own.
type Extra = BTreeMap<String, serde_json::Value>;

fn reject_extra(kind: &'static str, extra: &Extra) -> Result<()> {
    match extra.keys().next() {
        Some(field) => Err(ExportError::UnknownField { kind, field: field.clone() }),
        None => Ok(()),
    }
}

#[derive(Debug, Clone)]
pub struct Loaded {
    pub context: Context,
    handles: HashMap<String, Handle>,
}

impl Loaded {
    pub fn handle(&self, name: &str) -> Option<Handle> {
        self.handles.get(name).copied()
    }

    /// Image declared as `name`.
    pub fn image(&self, name: &str) -> Result<ImageId> {
        match self.handle(name) {
            Some(Handle::Image(id)) => Ok(id),
            _ => Err(unknown("image", name)),
        }
    }
}

fn unknown(kind: &'static str, name: &str) -> ExportError {
    ExportError::UnknownReference { kind, name: name.to_string() }
}

impl Snapshot {
    pub fn from_json(text: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(text)?;
        snapshot.check_fields()?;
        Ok(snapshot)
    }

    /// Flattened entries cannot deny unknown keys while parsing.
    fn check_fields(&self) -> Result<()> {
        for entry in &self.buffers {
            reject_extra("buffer", &entry.extra)?;
        }
        for entry in &self.images {
            reject_extra("image", &entry.extra)?;
        }
        for entry in self.pipelines.iter().flat_map(|p| &p.resources) {
            if let ResourceEntry::Sampler(sampler) = entry {
                reject_extra("sampler", &sampler.extra)?;
            }
        }
        Ok(())
    }

    /// Creates every declared object in a fresh context.
    pub fn build(&self) -> Result<Loaded> {
        let mut ctx = Context::new();
        let mut handles = HashMap::new();

        for entry in &self.buffers {
            let id = ctx.buffer(entry.desc.clone())?;
            declare(&mut handles, "buffer", &entry.name, id.into())?;
        }

        for entry in &self.images {
            let id = ctx.image(entry.desc.clone())?;
            declare(&mut handles, "image", &entry.name, id.into())?;
        }

        for (index, entry) in self.pipelines.iter().enumerate() {
            let desc = entry.resolve(&handles)?;
            let id = ctx.pipeline(desc)?;
            if let Some(name) = &entry.name {
                declare(&mut handles, "pipeline", name, id.into())?;
            }
            debug!("snapshot pipeline {index} compiled as pipeline {}", id.0);
        }

        for name in &self.release {
            let handle = handles.get(name).copied().ok_or_else(|| unknown("object", name))?;
            ctx.release(handle)?;
        }

        Ok(Loaded { context: ctx, handles })
    }
}

fn declare(handles: &mut HashMap<String, Handle>, kind: &'static str, name: &str, handle: Handle) -> Result<()> {
    if handles.insert(name.to_string(), handle).is_some() {
        return Err(ExportError::DuplicateName { kind, name: name.to_string() });
    }
    Ok(())
}

fn buffer_ref(handles: &HashMap<String, Handle>, name: &str) -> Result<BufferId> {
    match handles.get(name) {
        Some(Handle::Buffer(id)) => Ok(*id),
        _ => Err(unknown("buffer", name)),
    }
}

fn image_ref(handles: &HashMap<String, Handle>, name: &str) -> Result<ImageId> {
    match handles.get(name) {
        Some(Handle::Image(id)) => Ok(*id),
        _ => Err(unknown("image", name)),
    }
}

impl PipelineEntry {
    fn resolve(&self, handles: &HashMap<String, Handle>) -> Result<PipelineDesc> {
        let framebuffer = self
            .framebuffer
            .iter()
            .map(|entry| {
                Ok(match entry {
                    AttachmentEntry::Image(name) => Attachment::from(image_ref(handles, name)?),
                    AttachmentEntry::Face { image, layer, level } => Attachment {
                        image: image_ref(handles, image)?,
                        layer: *layer,
                        level: *level,
                    },
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut vertex_buffers = Vec::new();
        for entry in &self.vertex_buffers {
            let buffer = buffer_ref(handles, &entry.buffer)?;
            vertex_buffers.extend(bind(buffer, &entry.layout, &entry.attributes, entry.offset)?);
        }

        let index_buffer = self.index_buffer.as_deref().map(|name| buffer_ref(handles, name)).transpose()?;

        let resources = self
            .resources
            .iter()
            .map(|entry| {
                Ok(match entry {
                    ResourceEntry::UniformBuffer(ubo) => Resource::UniformBuffer {
                        binding: ubo.binding,
                        buffer: buffer_ref(handles, &ubo.buffer)?,
                        offset: ubo.offset,
                        size: ubo.size,
                    },
                    ResourceEntry::Sampler(sampler) => Resource::Sampler {
                        binding: sampler.binding,
                        image: image_ref(handles, &sampler.image)?,
                        params: sampler.params,
                    },
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let layout = self
            .layout
            .iter()
            .map(|entry| LayoutBinding {
                name: entry.name.clone(),
                kind: entry.kind.unwrap_or_else(|| self.infer_layout_kind(entry.binding)),
                binding: entry.binding,
            })
            .collect();

        let viewport = self.viewport.map(|[x, y, width, height]| Viewport::new(x, y, width, height)).transpose()?;

        Ok(PipelineDesc {
            vertex_shader: self.vertex_shader.clone(),
            fragment_shader: self.fragment_shader.clone(),
            layout,
            resources,
            uniforms: self.uniforms.clone(),
            framebuffer,
            vertex_buffers,
            index_buffer,
            short_index: self.short_index,
            topology: self.topology,
            vertex_count: self.vertex_count,
            instance_count: self.instance_count,
            first_vertex: self.first_vertex,
            depth: self.depth,
            stencil: self.stencil,
            blend: self.blend,
            cull_face: self.cull_face,
            polygon_offset: self.polygon_offset,
            color_mask: self.color_mask,
            primitive_restart: self.primitive_restart,
            viewport,
        })
    }

    fn infer_layout_kind(&self, binding: u32) -> LayoutKind {
        let bound = |sampler: bool| {
            self.resources.iter().any(|r| match r {
                ResourceEntry::UniformBuffer(ubo) => !sampler && ubo.binding == binding,
                ResourceEntry::Sampler(s) => sampler && s.binding == binding,
            })
        };
        if bound(true) && !bound(false) {
            LayoutKind::Sampler
        } else {
            LayoutKind::UniformBlock
        }
    }
}
