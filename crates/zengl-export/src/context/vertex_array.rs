use std::collections::HashSet;

use super::buffer::BufferId;
use crate::error::{ExportError, Result};
use crate::format::{parse_layout, VertexFormat};

/// One vertex attribute sourced from a buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VertexBinding {
    pub buffer: BufferId,
    pub location: u32,
    pub offset: u32,
    pub stride: u32,
    pub divisor: u32,
    pub format: VertexFormat,
}

/// Expands a layout string into vertex bindings.
///
/// `locations` pairs with the layout's attributes in order; a negative
/// location skips the attribute while keeping its bytes in the stride.
/// `offset` is the byte offset of the first vertex inside the buffer.
///
/// ```
/// use zengl_export::context::{bind, BufferId};
///
/// let bindings = bind(BufferId(1), "3f 2f", &[0, 1], 0).unwrap();
/// assert_eq!(bindings[1].offset, 12);
/// assert_eq!(bindings[1].stride, 20);
/// ```
pub fn bind(buffer: BufferId, layout: &str, locations: &[i32], offset: u32) -> Result<Vec<VertexBinding>> {
    let layout = parse_layout(layout)?;
    if layout.attributes.len() != locations.len() {
        return Err(ExportError::InvalidLayout(format!(
            "{} attributes but {} locations",
            layout.attributes.len(),
            locations.len()
        )));
    }

    let mut bindings = Vec::with_capacity(locations.len());
    for (attribute, &location) in layout.attributes.iter().zip(locations) {
        let Ok(location) = u32::try_from(location) else {
            continue;
        };
        let offset = offset.checked_add(attribute.offset).ok_or_else(|| {
            ExportError::InvalidLayout(format!("attribute offset {offset}+{} overflows", attribute.offset))
        })?;
        bindings.push(VertexBinding {
            buffer,
            location,
            offset,
            stride: layout.stride,
            divisor: layout.divisor,
            format: attribute.format,
        });
    }
    Ok(bindings)
}

/// Cache key of a vertex array object.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct VertexArrayKey {
    pub index_buffer: Option<BufferId>,
    pub bindings: Vec<VertexBinding>,
}

impl VertexArrayKey {
    pub fn new(bindings: Vec<VertexBinding>, index_buffer: Option<BufferId>) -> Result<Self> {
        let mut seen = HashSet::new();
        for binding in &bindings {
            if !seen.insert(binding.location) {
                return Err(ExportError::DuplicateLocation(binding.location));
            }
        }
        Ok(Self { index_buffer, bindings })
    }
}
