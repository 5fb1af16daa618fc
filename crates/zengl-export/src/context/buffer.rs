use serde::{Deserialize, Serialize};

/// Handle of a buffer. Also its GL name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct BufferId(pub u32);

/// Buffer creation parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BufferDesc {
    /// Size in bytes.
    pub size: usize,
    /// Hints `GL_DYNAMIC_DRAW` instead of `GL_STATIC_DRAW`.
    #[serde(default)]
    pub dynamic: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    pub id: BufferId,
    pub size: usize,
    pub dynamic: bool,
}
