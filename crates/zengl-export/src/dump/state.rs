//! Fixed-function state blocks.

use super::options::BlitSource;
use super::writer::{call, gl_bool, toggle, CallWriter};
use crate::context::{GlobalSettings, StencilSettings};
use crate::gl::names;

/// Context-wide state set once before the first pipeline.
pub(super) fn write_default_settings(w: &mut CallWriter) {
    call!(w, "glPrimitiveRestartIndex(-1);");
    call!(w, "glEnable(GL_PROGRAM_POINT_SIZE);");
    call!(w, "glEnable(GL_TEXTURE_CUBE_MAP_SEAMLESS);");
    call!(w, "glEnable(GL_FRAMEBUFFER_SRGB);");
}

fn write_stencil_func(w: &mut CallWriter, face: &str, s: &StencilSettings) {
    let func = names::compare_func(s.compare_op);
    call!(w, "glStencilFuncSeparate({face}, {func}, 0x{:02x}, 0x{:02x});", s.reference, s.compare_mask);
}

fn write_stencil_op(w: &mut CallWriter, face: &str, s: &StencilSettings) {
    call!(
        w,
        "glStencilOpSeparate({face}, {}, {}, {});",
        names::stencil_op(s.fail_op),
        names::stencil_op(s.pass_op),
        names::stencil_op(s.depth_fail_op)
    );
}

/// Full pipeline state. Every toggle is written so pipelines replay in any order.
pub(super) fn write_settings(w: &mut CallWriter, s: &GlobalSettings) {
    call!(w, "{}(GL_PRIMITIVE_RESTART);", toggle(s.primitive_restart));
    call!(w, "{}(GL_POLYGON_OFFSET_FILL);", toggle(s.polygon_offset));
    call!(w, "{}(GL_CULL_FACE);", toggle(s.cull_face != 0));
    call!(w, "{}(GL_DEPTH_TEST);", toggle(s.depth_test));
    call!(w, "{}(GL_STENCIL_TEST);", toggle(s.stencil_test));

    if s.polygon_offset {
        call!(w, "glPolygonOffset({:.6}, {:.6});", s.polygon_offset_factor, s.polygon_offset_units);
    }
    if s.cull_face != 0 {
        call!(w, "glCullFace({});", names::cull_face(s.cull_face));
    }
    if s.depth_test {
        call!(w, "glDepthFunc({});", names::compare_func(s.depth_func));
    }

    call!(w, "glStencilMaskSeparate(GL_FRONT, 0x{:02x});", s.stencil_front.write_mask);
    call!(w, "glStencilMaskSeparate(GL_BACK, 0x{:02x});", s.stencil_back.write_mask);
    write_stencil_func(w, "GL_FRONT", &s.stencil_front);
    write_stencil_func(w, "GL_BACK", &s.stencil_back);
    write_stencil_op(w, "GL_FRONT", &s.stencil_front);
    write_stencil_op(w, "GL_BACK", &s.stencil_back);
    call!(w, "glDepthMask({});", gl_bool(s.depth_write));

    for attachment in 0..s.attachments {
        let [r, g, b, a] = s.color_mask_of(attachment).map(gl_bool);
        call!(w, "glColorMaski({attachment}, {r}, {g}, {b}, {a});");
    }

    call!(
        w,
        "glBlendEquationSeparate({}, {});",
        names::blend_equation(s.blend_op_color),
        names::blend_equation(s.blend_op_alpha)
    );
    call!(
        w,
        "glBlendFuncSeparate({}, {}, {}, {});",
        names::blend_factor(s.blend_src_color),
        names::blend_factor(s.blend_dst_color),
        names::blend_factor(s.blend_src_alpha),
        names::blend_factor(s.blend_dst_alpha)
    );
    for attachment in 0..s.attachments {
        let func = if s.blend_enabled(attachment) { "glEnablei" } else { "glDisablei" };
        call!(w, "{func}(GL_BLEND, {attachment});");
    }
}

/// Copies the final image to the screen.
///
/// Without a source, `framebuffer`, `width` and `height` stay free
/// identifiers for the host program to define.
pub(super) fn write_blit(w: &mut CallWriter, source: Option<&BlitSource>) {
    let (framebuffer, width, height) = match source {
        Some(src) => (format!("framebuffer{}", src.framebuffer), src.width.to_string(), src.height.to_string()),
        None => ("framebuffer".to_string(), "width".to_string(), "height".to_string()),
    };

    call!(w, "glDisable(GL_FRAMEBUFFER_SRGB);");
    call!(w, "glColorMaski(0, true, true, true, true);");
    call!(w, "glBindFramebuffer(GL_READ_FRAMEBUFFER, {framebuffer});");
    call!(w, "glBindFramebuffer(GL_DRAW_FRAMEBUFFER, 0);");
    call!(
        w,
        "glBlitFramebuffer(0, 0, {width}, {height}, 0, 0, {width}, {height}, GL_COLOR_BUFFER_BIT, GL_NEAREST);"
    );
    call!(w, "glEnable(GL_FRAMEBUFFER_SRGB);");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{SettingsDesc, StencilDesc};

    fn render(f: impl FnOnce(&mut CallWriter)) -> String {
        let mut w = CallWriter::new();
        f(&mut w);
        w.finish()
    }

    #[test]
    fn default_pipeline_state() {
        let settings = GlobalSettings::resolve(&SettingsDesc { primitive_restart: true, ..Default::default() }, 1, false);
        let text = render(|w| write_settings(w, &settings));
        assert_eq!(
            text,
            "glEnable(GL_PRIMITIVE_RESTART);\n\
             glDisable(GL_POLYGON_OFFSET_FILL);\n\
             glDisable(GL_CULL_FACE);\n\
             glDisable(GL_DEPTH_TEST);\n\
             glDisable(GL_STENCIL_TEST);\n\
             glStencilMaskSeparate(GL_FRONT, 0xff);\n\
             glStencilMaskSeparate(GL_BACK, 0xff);\n\
             glStencilFuncSeparate(GL_FRONT, GL_ALWAYS, 0x00, 0xff);\n\
             glStencilFuncSeparate(GL_BACK, GL_ALWAYS, 0x00, 0xff);\n\
             glStencilOpSeparate(GL_FRONT, GL_KEEP, GL_KEEP, GL_KEEP);\n\
             glStencilOpSeparate(GL_BACK, GL_KEEP, GL_KEEP, GL_KEEP);\n\
             glDepthMask(false);\n\
             glColorMaski(0, true, true, true, true);\n\
             glBlendEquationSeparate(GL_FUNC_ADD, GL_FUNC_ADD);\n\
             glBlendFuncSeparate(GL_ONE, GL_ZERO, GL_ONE, GL_ZERO);\n\
             glDisablei(GL_BLEND, 0);\n"
        );
    }

    #[test]
    fn stencil_values_are_hex() {
        let mut stencil = StencilDesc::default();
        stencil.front.reference = 10;
        stencil.back.compare_mask = 0x0f;
        let settings = GlobalSettings::resolve(&SettingsDesc { stencil: Some(stencil), ..Default::default() }, 1, false);
        let text = render(|w| write_settings(w, &settings));
        assert!(text.contains("glEnable(GL_STENCIL_TEST);\n"));
        assert!(text.contains("glStencilFuncSeparate(GL_FRONT, GL_ALWAYS, 0x0a, 0xff);\n"));
        assert!(text.contains("glStencilFuncSeparate(GL_BACK, GL_ALWAYS, 0x00, 0x0f);\n"));
    }

    #[test]
    fn optional_calls_follow_toggles() {
        let desc = SettingsDesc {
            cull_face: crate::gl::CullFace::Back,
            polygon_offset: Some(crate::context::PolygonOffset { factor: 1.5, units: -2.0 }),
            ..Default::default()
        };
        let text = render(|w| write_settings(w, &GlobalSettings::resolve(&desc, 2, true)));
        assert!(text.contains("glPolygonOffset(1.500000, -2.000000);\nglCullFace(GL_BACK);\nglDepthFunc(GL_LESS);\n"));
        assert!(text.contains("glColorMaski(1, true, true, true, true);\n"));
        assert!(text.ends_with("glDisablei(GL_BLEND, 0);\nglDisablei(GL_BLEND, 1);\n"));
    }

    #[test]
    fn mixed_blend_mask_toggles_each_attachment() {
        let blend = crate::context::BlendDesc { attachment_mask: Some(0b101), ..Default::default() };
        let desc = SettingsDesc { blend: Some(blend), ..Default::default() };
        let text = render(|w| write_settings(w, &GlobalSettings::resolve(&desc, 3, false)));
        assert!(text.ends_with(
            "glEnablei(GL_BLEND, 0);\n\
             glDisablei(GL_BLEND, 1);\n\
             glEnablei(GL_BLEND, 2);\n"
        ));
    }

    #[test]
    fn blit_with_free_identifiers() {
        let text = render(|w| write_blit(w, None));
        assert!(text.contains("glBindFramebuffer(GL_READ_FRAMEBUFFER, framebuffer);\n"));
        assert!(text.contains("glBlitFramebuffer(0, 0, width, height, 0, 0, width, height, GL_COLOR_BUFFER_BIT, GL_NEAREST);\n"));
    }

    #[test]
    fn blit_from_known_framebuffer() {
        let source = BlitSource { framebuffer: 2, width: 640, height: 480 };
        let text = render(|w| write_blit(w, Some(&source)));
        assert!(text.contains("glBindFramebuffer(GL_READ_FRAMEBUFFER, framebuffer2);\n"));
        assert!(text.contains("glBlitFramebuffer(0, 0, 640, 480, 0, 0, 640, 480, GL_COLOR_BUFFER_BIT, GL_NEAREST);\n"));
    }
}
