//! Translation of a [`Context`] into a listing of raw GL calls.
//!
//! The listing is C source: one statement per line, objects declared as
//! `unsigned <kind><name>` and referenced by those identifiers. Blocks are
//! separated by a blank line and appear in a fixed order:
//!
//! 1. buffers and images, in creation order
//! 2. samplers, framebuffers, vertex arrays, shaders and programs, in cache order
//! 3. the default state block
//! 4. pipelines, in creation order
//! 5. the final blit
//!
//! Buffer and texture uploads reference a free `data` pointer.

mod options;
mod pipeline;
mod resources;
mod state;
mod writer;

use log::{debug, info};
use serde::Serialize;

pub use options::{BlitSource, DumpOptions};
pub use resources::compact_source;

use crate::context::Context;
use writer::CallWriter;

/// Number of blocks written per section.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize)]
pub struct DumpStats {
    pub buffers: usize,
    pub images: usize,
    pub samplers: usize,
    pub framebuffers: usize,
    pub vertex_arrays: usize,
    pub shaders: usize,
    pub programs: usize,
    pub pipelines: usize,
    /// Total statements, blank separators excluded.
    pub calls: usize,
}

#[derive(Debug, Clone)]
pub struct Dump {
    pub text: String,
    pub stats: DumpStats,
}

/// Writes every item of a section as one block.
fn section<T>(
    w: &mut CallWriter,
    label: &str,
    items: impl IntoIterator<Item = T>,
    mut write: impl FnMut(&mut CallWriter, T),
) -> usize {
    let mut count = 0;
    for item in items {
        write(w, item);
        w.blank();
        count += 1;
    }
    debug!("{label}: {count}");
    count
}

pub fn dump(ctx: &Context, options: &DumpOptions) -> Dump {
    let mut w = CallWriter::new();

    let mut stats = DumpStats {
        buffers: section(&mut w, "buffers", ctx.buffers(), resources::write_buffer),
        images: section(&mut w, "images", ctx.images(), resources::write_image),
        samplers: section(&mut w, "samplers", ctx.samplers().iter(), |w, (params, id)| {
            resources::write_sampler(w, id, params)
        }),
        framebuffers: section(&mut w, "framebuffers", ctx.framebuffers().iter(), |w, (key, id)| {
            resources::write_framebuffer(w, id, key)
        }),
        vertex_arrays: section(&mut w, "vertex arrays", ctx.vertex_arrays().iter(), |w, (key, id)| {
            resources::write_vertex_array(w, id, key)
        }),
        shaders: section(&mut w, "shaders", ctx.shaders().iter(), |w, (key, id)| {
            resources::write_shader(w, id, key)
        }),
        programs: section(&mut w, "programs", ctx.programs().iter(), |w, (key, id)| {
            resources::write_program(w, id, key)
        }),
        ..Default::default()
    };

    if options.include_defaults {
        state::write_default_settings(&mut w);
        w.blank();
    }

    stats.pipelines = section(&mut w, "pipelines", ctx.pipelines(), pipeline::write_pipeline);

    if options.include_blit {
        state::write_blit(&mut w, options.blit_source.as_ref());
    }

    stats.calls = w.calls();
    info!(
        "dumped {} pipelines using {} GL objects in {} calls",
        stats.pipelines,
        stats.buffers
            + stats.images
            + stats.samplers
            + stats.framebuffers
            + stats.vertex_arrays
            + stats.shaders
            + stats.programs,
        stats.calls
    );

    Dump { text: w.finish(), stats }
}

/// Dumps `ctx` with the default options.
pub fn dumps(ctx: &Context) -> String {
    dumps_with(ctx, &DumpOptions::default())
}

pub fn dumps_with(ctx: &Context, options: &DumpOptions) -> String {
    dump(ctx, options).text
}
