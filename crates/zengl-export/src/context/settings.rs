use serde::{Deserialize, Serialize};

use crate::gl::{BlendFactor, BlendOp, CompareFunc, CullFace, StencilOp};

/// Depth test configuration.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepthDesc {
    pub func: CompareFunc,
    pub write: bool,
}

impl Default for DepthDesc {
    fn default() -> Self {
        Self { func: CompareFunc::Less, write: true }
    }
}

/// Stencil state of one face.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StencilFace {
    pub fail_op: StencilOp,
    pub pass_op: StencilOp,
    pub depth_fail_op: StencilOp,
    pub compare_op: CompareFunc,
    pub compare_mask: u8,
    pub write_mask: u8,
    pub reference: u8,
}

impl Default for StencilFace {
    fn default() -> Self {
        Self {
            fail_op: StencilOp::Keep,
            pass_op: StencilOp::Keep,
            depth_fail_op: StencilOp::Keep,
            compare_op: CompareFunc::Always,
            compare_mask: 0xff,
            write_mask: 0xff,
            reference: 0,
        }
    }
}

/// Stencil test configuration. Present means enabled.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StencilDesc {
    pub front: StencilFace,
    pub back: StencilFace,
}

/// Blending configuration. Equations and factors are shared by all color
/// attachments; `attachment_mask` picks which of them blend.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlendDesc {
    pub enable: bool,
    /// Bit `i` enables blending on color attachment `i`. All when absent.
    pub attachment_mask: Option<u32>,
    pub op_color: BlendOp,
    pub op_alpha: BlendOp,
    pub src_color: BlendFactor,
    pub dst_color: BlendFactor,
    pub src_alpha: BlendFactor,
    pub dst_alpha: BlendFactor,
}

impl Default for BlendDesc {
    fn default() -> Self {
        Self {
            enable: true,
            attachment_mask: None,
            op_color: BlendOp::Add,
            op_alpha: BlendOp::Add,
            src_color: BlendFactor::One,
            dst_color: BlendFactor::Zero,
            src_alpha: BlendFactor::One,
            dst_alpha: BlendFactor::Zero,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolygonOffset {
    pub factor: f32,
    pub units: f32,
}

/// Stencil state with GL enum values, as emitted.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct StencilSettings {
    pub fail_op: u32,
    pub pass_op: u32,
    pub depth_fail_op: u32,
    pub compare_op: u32,
    pub compare_mask: u32,
    pub write_mask: u32,
    pub reference: u32,
}

impl From<StencilFace> for StencilSettings {
    fn from(face: StencilFace) -> Self {
        Self {
            fail_op: face.fail_op.gl(),
            pass_op: face.pass_op.gl(),
            depth_fail_op: face.depth_fail_op.gl(),
            compare_op: face.compare_op.gl(),
            compare_mask: face.compare_mask.into(),
            write_mask: face.write_mask.into(),
            reference: face.reference.into(),
        }
    }
}

/// Fixed-function state applied before a draw.
///
/// Flags and enums hold raw GL values; `cull_face == 0` means culling is off.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlobalSettings {
    /// Four bits (r, g, b, a) per color attachment.
    pub color_mask: u64,
    pub primitive_restart: bool,
    pub cull_face: u32,
    pub depth_test: bool,
    pub depth_write: bool,
    pub depth_func: u32,
    pub stencil_test: bool,
    pub stencil_front: StencilSettings,
    pub stencil_back: StencilSettings,
    /// One bit per color attachment.
    pub blend_enable: u32,
    pub blend_op_color: u32,
    pub blend_op_alpha: u32,
    pub blend_src_color: u32,
    pub blend_dst_color: u32,
    pub blend_src_alpha: u32,
    pub blend_dst_alpha: u32,
    pub polygon_offset: bool,
    pub polygon_offset_factor: f32,
    pub polygon_offset_units: f32,
    /// Number of color attachments.
    pub attachments: u32,
}

/// Inputs to [`GlobalSettings::resolve`].
#[derive(Debug, Copy, Clone, Default)]
pub struct SettingsDesc {
    pub primitive_restart: bool,
    pub cull_face: CullFace,
    pub depth: Option<DepthDesc>,
    pub stencil: Option<StencilDesc>,
    pub blend: Option<BlendDesc>,
    pub polygon_offset: Option<PolygonOffset>,
    pub color_mask: Option<u64>,
}

impl GlobalSettings {
    /// Builds the state for a pipeline with `attachments` color attachments.
    ///
    /// Depth testing defaults to `less` with writes when the target has a
    /// depth attachment and no depth state was given.
    pub fn resolve(desc: &SettingsDesc, attachments: u32, has_depth: bool) -> Self {
        let depth = desc.depth.or(has_depth.then(DepthDesc::default));
        let stencil = desc.stencil.unwrap_or_default();
        let blend = desc.blend.unwrap_or(BlendDesc { enable: false, ..BlendDesc::default() });
        let polygon_offset = desc.polygon_offset.unwrap_or_default();

        let all = if attachments > 0 { u32::MAX >> (32 - attachments) } else { 0 };
        let blend_enable = if blend.enable { blend.attachment_mask.unwrap_or(all) & all } else { 0 };

        Self {
            color_mask: desc.color_mask.unwrap_or(u64::MAX),
            primitive_restart: desc.primitive_restart,
            cull_face: desc.cull_face.gl(),
            depth_test: depth.is_some(),
            depth_write: depth.is_some_and(|d| d.write),
            depth_func: depth.unwrap_or_default().func.gl(),
            stencil_test: desc.stencil.is_some(),
            stencil_front: stencil.front.into(),
            stencil_back: stencil.back.into(),
            blend_enable,
            blend_op_color: blend.op_color.gl(),
            blend_op_alpha: blend.op_alpha.gl(),
            blend_src_color: blend.src_color.gl(),
            blend_dst_color: blend.dst_color.gl(),
            blend_src_alpha: blend.src_alpha.gl(),
            blend_dst_alpha: blend.dst_alpha.gl(),
            polygon_offset: desc.polygon_offset.is_some(),
            polygon_offset_factor: polygon_offset.factor,
            polygon_offset_units: polygon_offset.units,
            attachments,
        }
    }

    /// Color write mask `(r, g, b, a)` of one attachment.
    pub fn color_mask_of(&self, attachment: u32) -> [bool; 4] {
        let bits = self.color_mask >> (attachment * 4);
        [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0]
    }

    #[inline]
    pub fn blend_enabled(&self, attachment: u32) -> bool {
        self.blend_enable >> attachment & 1 != 0
    }
}
