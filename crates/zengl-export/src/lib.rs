//! zengl-export crate.
//!
//! Builds a model of a rendering context (buffers, images, pipelines and the
//! GL objects they compile to) and dumps it as a linear listing of raw
//! OpenGL calls that replays the same rendering on a GL 3.3 context.
//!
//! ```
//! use zengl_export::context::{bind, BufferDesc, ImageDesc, PipelineDesc};
//! use zengl_export::Context;
//!
//! let mut ctx = Context::new();
//! let vbo = ctx.buffer(BufferDesc { size: 24, dynamic: false }).unwrap();
//! let image = ctx.image(ImageDesc { size: (64, 64), ..Default::default() }).unwrap();
//! ctx.pipeline(PipelineDesc {
//!     vertex_shader: "#version 330 core\nvoid main() {}\n".into(),
//!     fragment_shader: "#version 330 core\nvoid main() {}\n".into(),
//!     framebuffer: vec![image.into()],
//!     vertex_buffers: bind(vbo, "2f", &[0], 0).unwrap(),
//!     vertex_count: 3,
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let listing = zengl_export::dumps(&ctx);
//! assert!(listing.contains("glDrawArraysInstanced(GL_TRIANGLES, 0, 3, 1);"));
//! ```

pub mod context;
pub mod dump;
pub mod error;
pub mod format;
pub mod gl;
pub mod logging;
pub mod snapshot;

pub use context::Context;
pub use dump::{dumps, dumps_with, DumpOptions};
pub use error::{ExportError, Result};
pub use snapshot::Snapshot;
