use std::fmt;

/// Errors raised while building a context or loading a snapshot.
///
/// Everything is validated when an object is created, so a built
/// [`Context`](crate::Context) always dumps without failing.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    /// Buffers must hold at least one byte.
    InvalidBufferSize(usize),
    /// Image dimensions must be non-zero.
    InvalidImageSize { width: u32, height: u32 },
    /// Image format name not in the format table.
    UnknownImageFormat(String),
    /// Vertex format name not in the format table.
    UnknownVertexFormat(String),
    /// A keyword (compare func, blend factor, ...) was not recognized.
    UnknownKeyword { kind: &'static str, name: String },
    /// Conflicting image creation flags.
    InvalidImage(String),
    /// Sample counts must be a power of two up to 16.
    InvalidSamples(u32),
    /// More mip levels than the image size allows.
    InvalidLevels { levels: u32, max: u32 },
    /// Face layer or level outside the image.
    FaceOutOfRange { layer: u32, level: u32 },
    /// Framebuffer attachments that cannot be combined.
    AttachmentMismatch(String),
    /// Too many bindings of one kind.
    TooManyBindings { kind: &'static str, count: usize, max: usize },
    /// Bindings must be dense, starting at zero.
    MissingBinding { kind: &'static str, binding: u32 },
    /// The same binding slot was declared twice.
    DuplicateBinding { kind: &'static str, binding: u32 },
    /// A vertex attribute location bound twice in one vertex array.
    DuplicateLocation(u32),
    /// Malformed vertex layout string.
    InvalidLayout(String),
    /// Uniform value count does not match its type and array count.
    UniformSize { name: String, expected: usize, got: usize },
    /// Uniform value not representable in the uniform's scalar type.
    UniformValue { name: String, value: f64 },
    /// Viewport does not fit the 16-bit viewport fields, or is missing.
    InvalidViewport(String),
    /// Uniform buffer range outside its buffer.
    InvalidRange { buffer: u32, offset: u32, size: u32 },
    /// Handle refers to a released or never created object.
    StaleHandle { kind: &'static str, id: u32 },
    /// No framebuffer renders into the image.
    NoFramebuffer(u32),
    /// Snapshot refers to a name it never declared.
    UnknownReference { kind: &'static str, name: String },
    /// Snapshot declares the same name twice.
    DuplicateName { kind: &'static str, name: String },
    /// Snapshot object carries a key no field reads.
    UnknownField { kind: &'static str, field: String },
    /// Snapshot JSON could not be decoded.
    Json(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::InvalidBufferSize(size) => write!(f, "invalid buffer size: {size}"),
            ExportError::InvalidImageSize { width, height } => {
                write!(f, "invalid image size: {width}x{height}")
            }
            ExportError::UnknownImageFormat(name) => write!(f, "unknown image format: {name:?}"),
            ExportError::UnknownVertexFormat(name) => write!(f, "unknown vertex format: {name:?}"),
            ExportError::UnknownKeyword { kind, name } => write!(f, "unknown {kind}: {name:?}"),
            ExportError::InvalidImage(msg) => write!(f, "invalid image: {msg}"),
            ExportError::InvalidSamples(samples) => write!(f, "invalid sample count: {samples}"),
            ExportError::InvalidLevels { levels, max } => {
                write!(f, "invalid level count: {levels} (at most {max})")
            }
            ExportError::FaceOutOfRange { layer, level } => {
                write!(f, "image face out of range: layer {layer}, level {level}")
            }
            ExportError::AttachmentMismatch(msg) => write!(f, "invalid framebuffer: {msg}"),
            ExportError::TooManyBindings { kind, count, max } => {
                write!(f, "too many {kind} bindings: {count} (at most {max})")
            }
            ExportError::MissingBinding { kind, binding } => {
                write!(f, "missing {kind} binding {binding}")
            }
            ExportError::DuplicateBinding { kind, binding } => {
                write!(f, "duplicate {kind} binding {binding}")
            }
            ExportError::DuplicateLocation(location) => {
                write!(f, "vertex attribute location {location} bound twice")
            }
            ExportError::InvalidLayout(msg) => write!(f, "invalid vertex layout: {msg}"),
            ExportError::UniformSize { name, expected, got } => write!(
                f,
                "uniform {name:?} expects {expected} values, got {got}"
            ),
            ExportError::UniformValue { name, value } => {
                write!(f, "uniform {name:?} cannot hold the value {value}")
            }
            ExportError::InvalidViewport(msg) => write!(f, "invalid viewport: {msg}"),
            ExportError::InvalidRange { buffer, offset, size } => write!(
                f,
                "uniform buffer range {offset}+{size} is outside buffer{buffer}"
            ),
            ExportError::StaleHandle { kind, id } => write!(f, "{kind} {id} is not alive"),
            ExportError::NoFramebuffer(image) => {
                write!(f, "image {image} is not the first attachment of any framebuffer")
            }
            ExportError::UnknownReference { kind, name } => {
                write!(f, "snapshot references unknown {kind} {name:?}")
            }
            ExportError::DuplicateName { kind, name } => {
                write!(f, "snapshot declares {kind} {name:?} twice")
            }
            ExportError::UnknownField { kind, field } => {
                write!(f, "snapshot {kind} has unknown field {field:?}")
            }
            ExportError::Json(msg) => write!(f, "snapshot json error: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Json(err.to_string())
    }
}

pub type Result<T, E = ExportError> = std::result::Result<T, E>;
