//! Creation calls for buffers, images and the cached GL objects.

use super::writer::{call, c_string, gl_bool, CallWriter};
use crate::context::{Buffer, FramebufferKey, Image, ImageFace, ImageKind, ProgramKey, SamplerParams, ShaderKey, VertexArrayKey};
use crate::gl::names;

pub(super) fn write_buffer(w: &mut CallWriter, buffer: &Buffer) {
    let id = buffer.id.0;
    let usage = if buffer.dynamic { "GL_DYNAMIC_DRAW" } else { "GL_STATIC_DRAW" };
    call!(w, "unsigned buffer{id} = 0;");
    call!(w, "glGenBuffers(1, &buffer{id});");
    call!(w, "glBindBuffer(GL_ARRAY_BUFFER, buffer{id});");
    call!(w, "glBufferData(GL_ARRAY_BUFFER, {}, data, {usage});", buffer.size);
}

pub(super) fn write_image(w: &mut CallWriter, image: &Image) {
    let id = image.name;
    let (width, height) = (image.width, image.height);
    let internal = names::internal_format(image.format.internal_format);

    if image.is_renderbuffer() {
        let samples = if image.samples > 1 { image.samples } else { 0 };
        call!(w, "unsigned renderbuffer{id} = 0;");
        call!(w, "glGenRenderbuffers(1, &renderbuffer{id});");
        call!(w, "glBindRenderbuffer(GL_RENDERBUFFER, renderbuffer{id});");
        call!(w, "glRenderbufferStorageMultisample(GL_RENDERBUFFER, {samples}, {internal}, {width}, {height});");
        return;
    }

    let target = names::texture_target(image.kind.target());
    let format = names::pixel_format(image.format.format);
    let ty = names::component_type(image.format.ty);

    call!(w, "unsigned image{id} = 0;");
    call!(w, "glGenTextures(1, &image{id});");
    call!(w, "glBindTexture({target}, image{id});");
    match image.kind {
        ImageKind::Cubemap => {
            for layer in 0..6 {
                let face = names::cubemap_face(layer);
                call!(w, "glTexImage2D({face}, 0, {internal}, {width}, {height}, 0, {format}, {ty}, data);");
            }
        }
        ImageKind::Array(layers) => {
            call!(w, "glTexImage3D({target}, 0, {internal}, {width}, {height}, {layers}, 0, {format}, {ty}, data);");
        }
        _ => {
            call!(w, "glTexImage2D({target}, 0, {internal}, {width}, {height}, 0, {format}, {ty}, data);");
        }
    }
}

pub(super) fn write_sampler(w: &mut CallWriter, id: u32, params: &SamplerParams) {
    let int = |w: &mut CallWriter, pname: &str, value: names::Sym| {
        call!(w, "glSamplerParameteri(sampler{id}, {pname}, {value});");
    };
    let float = |w: &mut CallWriter, pname: &str, value: f32| {
        call!(w, "glSamplerParameterf(sampler{id}, {pname}, {value:.6});");
    };

    call!(w, "unsigned sampler{id} = 0;");
    call!(w, "glGenSamplers(1, &sampler{id});");
    int(w, "GL_TEXTURE_MIN_FILTER", names::filter(params.min_filter.gl()));
    int(w, "GL_TEXTURE_MAG_FILTER", names::filter(params.mag_filter.gl()));
    float(w, "GL_TEXTURE_MIN_LOD", params.min_lod);
    float(w, "GL_TEXTURE_MAX_LOD", params.max_lod);
    float(w, "GL_TEXTURE_LOD_BIAS", params.lod_bias);
    int(w, "GL_TEXTURE_WRAP_S", names::texture_wrap(params.wrap_x.gl()));
    int(w, "GL_TEXTURE_WRAP_T", names::texture_wrap(params.wrap_y.gl()));
    int(w, "GL_TEXTURE_WRAP_R", names::texture_wrap(params.wrap_z.gl()));
    int(w, "GL_TEXTURE_COMPARE_MODE", names::compare_mode(params.compare_mode.gl()));
    int(w, "GL_TEXTURE_COMPARE_FUNC", names::compare_func(params.compare_func.gl()));
    float(w, "GL_TEXTURE_MAX_ANISOTROPY", params.max_anisotropy);

    let [r, g, b, a] = params.border_color;
    call!(w, "float border{id}[] = {{{r:.6}, {g:.6}, {b:.6}, {a:.6}}};");
    call!(w, "glSamplerParameterfv(sampler{id}, GL_TEXTURE_BORDER_COLOR, border{id});");
}

fn write_attachment(w: &mut CallWriter, face: &ImageFace, attachment: &str) {
    let (name, level, layer) = (face.name, face.level, face.layer);
    match face.kind {
        ImageKind::Renderbuffer => {
            call!(w, "glFramebufferRenderbuffer(GL_FRAMEBUFFER, {attachment}, GL_RENDERBUFFER, renderbuffer{name});");
        }
        ImageKind::Cubemap => {
            let target = names::cubemap_face(layer);
            call!(w, "glFramebufferTexture2D(GL_FRAMEBUFFER, {attachment}, {target}, image{name}, {level});");
        }
        ImageKind::Array(_) => {
            call!(w, "glFramebufferTextureLayer(GL_FRAMEBUFFER, {attachment}, image{name}, {level}, {layer});");
        }
        ImageKind::Texture2d => {
            call!(w, "glFramebufferTexture2D(GL_FRAMEBUFFER, {attachment}, GL_TEXTURE_2D, image{name}, {level});");
        }
    }
}

pub(super) fn write_framebuffer(w: &mut CallWriter, id: u32, key: &FramebufferKey) {
    use crate::gl::consts::{GL_DEPTH, GL_STENCIL};

    call!(w, "unsigned framebuffer{id} = 0;");
    call!(w, "glGenFramebuffers(1, &framebuffer{id});");
    call!(w, "glBindFramebuffer(GL_FRAMEBUFFER, framebuffer{id});");

    for (index, face) in key.color.iter().enumerate() {
        write_attachment(w, face, &format!("GL_COLOR_ATTACHMENT{index}"));
    }

    if let Some(face) = &key.depth_stencil {
        let attachment = match face.format.buffer {
            GL_DEPTH => "GL_DEPTH_ATTACHMENT",
            GL_STENCIL => "GL_STENCIL_ATTACHMENT",
            _ => "GL_DEPTH_STENCIL_ATTACHMENT",
        };
        write_attachment(w, face, attachment);
    }

    let count = key.color.len();
    let draw_buffers = (0..count)
        .map(|index| format!("GL_COLOR_ATTACHMENT{index}"))
        .collect::<Vec<_>>()
        .join(", ");
    let read_buffer = if count > 0 { "GL_COLOR_ATTACHMENT0" } else { "GL_NONE" };

    call!(w, "unsigned draw_buffers{id}[] = {{{draw_buffers}}};");
    call!(w, "glDrawBuffers({count}, draw_buffers{id});");
    call!(w, "glReadBuffer({read_buffer});");
}

pub(super) fn write_vertex_array(w: &mut CallWriter, id: u32, key: &VertexArrayKey) {
    call!(w, "unsigned vertex_array{id} = 0;");
    call!(w, "glGenVertexArrays(1, &vertex_array{id});");
    call!(w, "glBindVertexArray(vertex_array{id});");

    for binding in &key.bindings {
        let (location, stride, offset) = (binding.location, binding.stride, binding.offset);
        let format = binding.format;
        let (size, ty) = (format.size, names::component_type(format.ty));

        call!(w, "glBindBuffer(GL_ARRAY_BUFFER, buffer{});", binding.buffer.0);
        if format.integer {
            call!(w, "glVertexAttribIPointer({location}, {size}, {ty}, {stride}, {offset});");
        } else {
            let normalize = gl_bool(format.normalize);
            call!(w, "glVertexAttribPointer({location}, {size}, {ty}, {normalize}, {stride}, {offset});");
        }
        call!(w, "glVertexAttribDivisor({location}, {});", binding.divisor);
        call!(w, "glEnableVertexAttribArray({location});");
    }

    if let Some(buffer) = key.index_buffer {
        call!(w, "glBindBuffer(GL_ELEMENT_ARRAY_BUFFER, buffer{});", buffer.0);
    }
}

/// Collapses every whitespace run that spans a line break into a single `\n`.
pub fn compact_source(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut run = String::new();

    for ch in source.chars() {
        if is_space(ch) {
            run.push(ch);
            continue;
        }
        flush_whitespace(&mut out, &mut run);
        out.push(ch);
    }
    flush_whitespace(&mut out, &mut run);
    out
}

/// Unicode whitespace plus the ASCII separators `\x1c`..=`\x1f`.
fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ('\x1c'..='\x1f').contains(&ch)
}

fn flush_whitespace(out: &mut String, run: &mut String) {
    if run.contains('\n') {
        out.push('\n');
    } else {
        out.push_str(run);
    }
    run.clear();
}

pub(super) fn write_shader(w: &mut CallWriter, id: u32, key: &ShaderKey) {
    let source = c_string(&compact_source(&key.source));
    let stage = names::shader_type(key.stage.gl());

    call!(w, "const char * src{id} = {source};");
    call!(w, "unsigned shader{id} = glCreateShader({stage});");
    call!(w, "glShaderSource(shader{id}, 1, &src{id}, NULL);");
    call!(w, "glCompileShader(shader{id});");
}

pub(super) fn write_program(w: &mut CallWriter, id: u32, key: &ProgramKey) {
    call!(w, "unsigned program{id} = glCreateProgram();");
    call!(w, "glAttachShader(program{id}, shader{});", key.vertex_shader);
    call!(w, "glAttachShader(program{id}, shader{});", key.fragment_shader);
    call!(w, "glLinkProgram(program{id});");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{bind, BufferId, ShaderStage, VertexArrayKey};

    fn render(f: impl FnOnce(&mut CallWriter)) -> String {
        let mut w = CallWriter::new();
        f(&mut w);
        w.finish()
    }

    #[test]
    fn compaction_only_touches_line_breaks() {
        assert_eq!(compact_source("  a  b\n\n    c \t\r\n d\n"), "  a  b\nc\nd\n");
        assert_eq!(compact_source("\n\nx"), "\nx");
        assert_eq!(compact_source("no breaks"), "no breaks");
        assert_eq!(compact_source("a \x1f\n\x1c\u{a0}b"), "a\nb");
        assert_eq!(compact_source("a\x1eb"), "a\x1eb");
    }

    #[test]
    fn shader_source_is_a_c_literal() {
        let key = ShaderKey { source: "#version 330\n  void main() {}\n".into(), stage: ShaderStage::Fragment };
        let text = render(|w| write_shader(w, 2, &key));
        assert_eq!(
            text,
            "const char * src2 = \"#version 330\\nvoid main() {}\\n\";\n\
             unsigned shader2 = glCreateShader(GL_FRAGMENT_SHADER);\n\
             glShaderSource(shader2, 1, &src2, NULL);\n\
             glCompileShader(shader2);\n"
        );
    }

    #[test]
    fn sampler_floats_use_six_decimals() {
        let text = render(|w| write_sampler(w, 1, &SamplerParams::default()));
        assert!(text.contains("glSamplerParameterf(sampler1, GL_TEXTURE_MIN_LOD, -1000.000000);\n"));
        assert!(text.contains("glSamplerParameteri(sampler1, GL_TEXTURE_COMPARE_MODE, GL_NONE);\n"));
        assert!(text.contains("float border1[] = {0.000000, 0.000000, 0.000000, 0.000000};\n"));
        assert_eq!(text.lines().count(), 15);
    }

    #[test]
    fn integer_attributes_use_ipointer() {
        let mut bindings = bind(BufferId(3), "3f 1i /i", &[0, 1], 0).unwrap();
        bindings.extend(bind(BufferId(4), "4nu1", &[2], 16).unwrap());
        let key = VertexArrayKey::new(bindings, Some(BufferId(5))).unwrap();
        let text = render(|w| write_vertex_array(w, 1, &key));

        assert!(text.contains("glVertexAttribPointer(0, 3, GL_FLOAT, false, 16, 0);\n"));
        assert!(text.contains("glVertexAttribIPointer(1, 1, GL_INT, 16, 12);\n"));
        assert!(text.contains("glVertexAttribDivisor(1, 1);\n"));
        assert!(text.contains("glVertexAttribPointer(2, 4, GL_UNSIGNED_BYTE, true, 4, 16);\n"));
        assert!(text.ends_with("glBindBuffer(GL_ELEMENT_ARRAY_BUFFER, buffer5);\n"));
    }

    #[test]
    fn program_attaches_both_shaders() {
        let text = render(|w| write_program(w, 1, &ProgramKey { vertex_shader: 1, fragment_shader: 2 }));
        assert_eq!(
            text,
            "unsigned program1 = glCreateProgram();\n\
             glAttachShader(program1, shader1);\n\
             glAttachShader(program1, shader2);\n\
             glLinkProgram(program1);\n"
        );
    }
}
