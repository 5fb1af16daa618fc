use super::buffer::BufferId;
use super::framebuffer::Attachment;
use super::image::ImageId;
use super::sampler::SamplerParams;
use super::settings::{BlendDesc, DepthDesc, GlobalSettings, PolygonOffset, StencilDesc};
use super::uniform::{LayoutBinding, Uniform, UniformDesc};
use super::vertex_array::VertexBinding;
use crate::error::{ExportError, Result};
use crate::gl::consts::{GL_UNSIGNED_INT, GL_UNSIGNED_SHORT};
use crate::gl::{CullFace, Topology};

pub const MAX_UNIFORM_BUFFER_BINDINGS: usize = 16;
pub const MAX_SAMPLER_BINDINGS: usize = 64;

/// Handle of a pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PipelineId(pub u32);

/// Viewport rectangle, stored the way GL state trackers pack it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Viewport {
    pub x: i16,
    pub y: i16,
    pub width: i16,
    pub height: i16,
}

impl Viewport {
    /// Checks that every field fits in 16 bits.
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Result<Self> {
        let field = |name: &str, v: i64| {
            i16::try_from(v).map_err(|_| ExportError::InvalidViewport(format!("{name} {v} out of range")))
        };
        Ok(Self {
            x: field("x", x)?,
            y: field("y", y)?,
            width: field("width", width)?,
            height: field("height", height)?,
        })
    }

    pub fn from_size((width, height): (u32, u32)) -> Result<Self> {
        Self::new(0, 0, width.into(), height.into())
    }
}

/// A resource bound to a numbered slot of the pipeline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Resource {
    UniformBuffer {
        binding: u32,
        buffer: BufferId,
        offset: u32,
        /// Bytes from `offset` to the end of the buffer when `None`.
        size: Option<u32>,
    },
    Sampler {
        binding: u32,
        image: ImageId,
        params: SamplerParams,
    },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UniformBufferBinding {
    pub buffer: BufferId,
    pub offset: u32,
    pub size: u32,
}

/// Texture unit contents: sampler name, texture target and texture name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SamplerBinding {
    pub sampler: u32,
    pub target: u32,
    pub image: u32,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IndexType {
    UnsignedShort,
    UnsignedInt,
}

impl IndexType {
    #[inline]
    pub const fn gl(self) -> u32 {
        match self {
            IndexType::UnsignedShort => GL_UNSIGNED_SHORT,
            IndexType::UnsignedInt => GL_UNSIGNED_INT,
        }
    }

    /// Bytes per index.
    #[inline]
    pub const fn size(self) -> u32 {
        match self {
            IndexType::UnsignedShort => 2,
            IndexType::UnsignedInt => 4,
        }
    }
}

/// Pipeline creation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineDesc {
    pub vertex_shader: String,
    pub fragment_shader: String,
    pub layout: Vec<LayoutBinding>,
    pub resources: Vec<Resource>,
    pub uniforms: Vec<UniformDesc>,
    /// Render targets; empty renders to the screen.
    pub framebuffer: Vec<Attachment>,
    pub vertex_buffers: Vec<VertexBinding>,
    pub index_buffer: Option<BufferId>,
    /// 16-bit indices instead of 32-bit ones.
    pub short_index: bool,
    pub topology: Topology,
    pub vertex_count: u32,
    pub instance_count: u32,
    pub first_vertex: u32,
    pub depth: Option<DepthDesc>,
    pub stencil: Option<StencilDesc>,
    pub blend: Option<BlendDesc>,
    pub cull_face: CullFace,
    pub polygon_offset: Option<PolygonOffset>,
    pub color_mask: Option<u64>,
    pub primitive_restart: bool,
    /// Defaults to the framebuffer size. Required for the screen.
    pub viewport: Option<Viewport>,
}

impl Default for PipelineDesc {
    fn default() -> Self {
        Self {
            vertex_shader: String::new(),
            fragment_shader: String::new(),
            layout: Vec::new(),
            resources: Vec::new(),
            uniforms: Vec::new(),
            framebuffer: Vec::new(),
            vertex_buffers: Vec::new(),
            index_buffer: None,
            short_index: false,
            topology: Topology::Triangles,
            vertex_count: 0,
            instance_count: 1,
            first_vertex: 0,
            depth: None,
            stencil: None,
            blend: None,
            cull_face: CullFace::None,
            polygon_offset: None,
            color_mask: None,
            primitive_restart: true,
            viewport: None,
        }
    }
}

/// A compiled pipeline: GL object names plus the state applied per draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    pub id: PipelineId,
    pub settings: GlobalSettings,
    pub viewport: Viewport,
    /// Framebuffer name; 0 is the screen.
    pub framebuffer: u32,
    pub program: u32,
    pub vertex_array: u32,
    pub uniform_buffers: Vec<UniformBufferBinding>,
    pub samplers: Vec<SamplerBinding>,
    pub layout: Vec<LayoutBinding>,
    pub uniforms: Vec<Uniform>,
    pub topology: Topology,
    pub vertex_count: u32,
    pub instance_count: u32,
    pub first_vertex: u32,
    pub index: Option<IndexType>,
}

impl Pipeline {
    #[inline]
    pub fn targets_screen(&self) -> bool {
        self.framebuffer == 0
    }
}

/// Orders `items` by binding and checks that slots run `0..n` with no gaps.
pub(super) fn dense_bindings<T>(kind: &'static str, max: usize, mut items: Vec<(u32, T)>) -> Result<Vec<T>> {
    if items.len() > max {
        return Err(ExportError::TooManyBindings { kind, count: items.len(), max });
    }

    items.sort_by_key(|(binding, _)| *binding);
    for (slot, (binding, _)) in (0u32..).zip(&items) {
        if *binding < slot {
            return Err(ExportError::DuplicateBinding { kind, binding: *binding });
        }
        if *binding > slot {
            return Err(ExportError::MissingBinding { kind, binding: slot });
        }
    }

    Ok(items.into_iter().map(|(_, item)| item).collect())
}

/// Converts uniform descriptions, enforcing the per-pipeline limit.
pub(super) fn resolve_uniforms(uniforms: &[UniformDesc]) -> Result<Vec<Uniform>> {
    use super::uniform::MAX_UNIFORMS;

    if uniforms.len() > MAX_UNIFORMS {
        return Err(ExportError::TooManyBindings {
            kind: "uniform",
            count: uniforms.len(),
            max: MAX_UNIFORMS,
        });
    }
    uniforms.iter().map(Uniform::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings_are_sorted_by_slot() {
        let items = vec![(2, 'c'), (0, 'a'), (1, 'b')];
        assert_eq!(dense_bindings("sampler", 64, items), Ok(vec!['a', 'b', 'c']));
    }

    #[test]
    fn gap_reports_first_missing_slot() {
        let items = vec![(0, ()), (2, ())];
        assert_eq!(
            dense_bindings("uniform buffer", 16, items),
            Err(ExportError::MissingBinding { kind: "uniform buffer", binding: 1 })
        );
    }

    #[test]
    fn duplicate_slot_is_rejected() {
        let items = vec![(0, ()), (1, ()), (1, ())];
        assert_eq!(
            dense_bindings("sampler", 64, items),
            Err(ExportError::DuplicateBinding { kind: "sampler", binding: 1 })
        );
    }

    #[test]
    fn binding_limit() {
        let items: Vec<_> = (0..17).map(|i| (i, ())).collect();
        assert!(matches!(
            dense_bindings("uniform buffer", MAX_UNIFORM_BUFFER_BINDINGS, items),
            Err(ExportError::TooManyBindings { count: 17, max: 16, .. })
        ));
    }

    #[test]
    fn viewport_must_fit_sixteen_bits() {
        assert!(Viewport::from_size((32767, 1)).is_ok());
        assert!(matches!(Viewport::from_size((32768, 1)), Err(ExportError::InvalidViewport(_))));
        assert!(matches!(Viewport::new(-40000, 0, 1, 1), Err(ExportError::InvalidViewport(_))));
    }

    #[test]
    fn index_sizes() {
        assert_eq!(IndexType::UnsignedShort.size(), 2);
        assert_eq!(IndexType::UnsignedInt.gl(), GL_UNSIGNED_INT);
    }
}
