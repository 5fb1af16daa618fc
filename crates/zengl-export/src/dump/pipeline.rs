//! Per-pipeline bind and draw calls.

use super::state::write_settings;
use super::writer::{call, c_string, CallWriter};
use crate::context::{LayoutKind, Pipeline, ScalarKind, Uniform};
use crate::gl::names;

pub(super) fn write_pipeline(w: &mut CallWriter, pipeline: &Pipeline) {
    write_settings(w, &pipeline.settings);

    let viewport = pipeline.viewport;
    call!(w, "glViewport({}, {}, {}, {});", viewport.x, viewport.y, viewport.width, viewport.height);
    if pipeline.targets_screen() {
        call!(w, "glBindFramebuffer(GL_FRAMEBUFFER, 0);");
    } else {
        call!(w, "glBindFramebuffer(GL_FRAMEBUFFER, framebuffer{});", pipeline.framebuffer);
    }

    let program = pipeline.program;
    call!(w, "glUseProgram(program{program});");
    write_layout(w, pipeline);
    for (index, uniform) in pipeline.uniforms.iter().enumerate() {
        write_uniform(w, &format!("uniform{}_{index}", pipeline.id.0), program, uniform);
    }

    call!(w, "glBindVertexArray(vertex_array{});", pipeline.vertex_array);

    for (slot, binding) in pipeline.uniform_buffers.iter().enumerate() {
        call!(
            w,
            "glBindBufferRange(GL_UNIFORM_BUFFER, {slot}, buffer{}, {}, {});",
            binding.buffer.0,
            binding.offset,
            binding.size
        );
    }

    for (unit, binding) in pipeline.samplers.iter().enumerate() {
        call!(w, "glActiveTexture(GL_TEXTURE{unit});");
        call!(w, "glBindTexture({}, image{});", names::texture_target(binding.target), binding.image);
        call!(w, "glBindSampler({unit}, sampler{});", binding.sampler);
    }

    let topology = names::topology(pipeline.topology.gl());
    let (count, first, instances) = (pipeline.vertex_count, pipeline.first_vertex, pipeline.instance_count);
    match pipeline.index {
        Some(index) => {
            let ty = names::component_type(index.gl());
            let size = index.size();
            call!(w, "glDrawElementsInstanced({topology}, {count}, {ty}, {first} * {size}, {instances});");
        }
        None => {
            call!(w, "glDrawArraysInstanced({topology}, {first}, {count}, {instances});");
        }
    }
}

/// Uniform block and sampler unit assignments, resolved by name at replay.
fn write_layout(w: &mut CallWriter, pipeline: &Pipeline) {
    let program = pipeline.program;
    for binding in &pipeline.layout {
        let name = c_string(&binding.name);
        let slot = binding.binding;
        match binding.kind {
            LayoutKind::UniformBlock => {
                call!(w, "glUniformBlockBinding(program{program}, glGetUniformBlockIndex(program{program}, {name}), {slot});");
            }
            LayoutKind::Sampler => {
                call!(w, "glUniform1i(glGetUniformLocation(program{program}, {name}), {slot});");
            }
        }
    }
}

fn write_uniform(w: &mut CallWriter, ident: &str, program: u32, uniform: &Uniform) {
    let (c_type, values) = match uniform.ty.scalar() {
        ScalarKind::Float => ("float", join(uniform.floats().iter().map(|v| format!("{v:?}")))),
        ScalarKind::Int | ScalarKind::Bool => ("int", join(uniform.ints().iter().map(i32::to_string))),
        ScalarKind::Uint => ("unsigned", join(uniform.uints().iter().map(u32::to_string))),
    };

    let name = c_string(&uniform.name);
    let suffix = uniform.ty.setter_suffix();
    let count = uniform.count;

    call!(w, "{c_type} {ident}[] = {{{values}}};");
    if uniform.ty.is_matrix() {
        call!(w, "glUniform{suffix}(glGetUniformLocation(program{program}, {name}), {count}, false, {ident});");
    } else {
        call!(w, "glUniform{suffix}(glGetUniformLocation(program{program}, {name}), {count}, {ident});");
    }
}

fn join(values: impl Iterator<Item = String>) -> String {
    values.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{UniformDesc, UniformType};

    fn render_uniform(ty: UniformType, count: usize, values: &[f64]) -> String {
        let uniform = Uniform::new(&UniformDesc { name: "u".into(), ty, count, values: values.to_vec() }).unwrap();
        let mut w = CallWriter::new();
        write_uniform(&mut w, "uniform1_0", 3, &uniform);
        w.finish()
    }

    #[test]
    fn float_vector_uniform() {
        assert_eq!(
            render_uniform(UniformType::Vec2, 1, &[0.5, 2.0]),
            "float uniform1_0[] = {0.5, 2.0};\n\
             glUniform2fv(glGetUniformLocation(program3, \"u\"), 1, uniform1_0);\n"
        );
    }

    #[test]
    fn small_and_large_floats_keep_their_precision() {
        let text = render_uniform(UniformType::Vec3, 1, &[1e-7, 16777216.0, 0.1]);
        assert!(text.starts_with("float uniform1_0[] = {1e-7, 16777216.0, 0.1};\n"));
    }

    #[test]
    fn matrix_uniform_is_not_transposed() {
        let text = render_uniform(UniformType::Mat2, 1, &[1.0, 0.0, 0.0, 1.0]);
        assert!(text.ends_with("glUniformMatrix2fv(glGetUniformLocation(program3, \"u\"), 1, false, uniform1_0);\n"));
    }

    #[test]
    fn integer_array_uniform() {
        assert_eq!(
            render_uniform(UniformType::Int, 3, &[-1.0, 0.0, 7.0]),
            "int uniform1_0[] = {-1, 0, 7};\n\
             glUniform1iv(glGetUniformLocation(program3, \"u\"), 3, uniform1_0);\n"
        );
    }

    #[test]
    fn unsigned_uniform() {
        let text = render_uniform(UniformType::Uvec2, 1, &[1.0, 4000000000.0]);
        assert!(text.starts_with("unsigned uniform1_0[] = {1, 4000000000};\n"));
        assert!(text.contains("glUniform2uiv("));
    }
}
