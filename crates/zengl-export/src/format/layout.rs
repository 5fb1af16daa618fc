//! Compact vertex layout notation.
//!
//! A layout string lists the attributes packed in one buffer, in order:
//!
//! ```text
//! "3f 3f 2f"      position, normal, uv (float32x3, float32x3, float32x2)
//! "2f 4nu1 /i"    per-instance offset + unorm8x4 color
//! "3f 4x 2f"      4 padding bytes between two attributes
//! ```
//!
//! Tokens are `<count><kind>`; `<n>x` skips `n` bytes; a trailing `/v` or
//! `/i` selects per-vertex or per-instance stepping.

use super::VertexFormat;
use crate::error::{ExportError, Result};

/// One attribute of a parsed layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LayoutAttribute {
    pub offset: u32,
    pub format: VertexFormat,
}

/// A parsed layout string.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct VertexLayout {
    pub attributes: Vec<LayoutAttribute>,
    /// Sum of all attribute and padding sizes.
    pub stride: u32,
    /// 0 for per-vertex data, 1 for per-instance data.
    pub divisor: u32,
}

/// Parses a layout string into attributes with offsets and a stride.
pub fn parse_layout(layout: &str) -> Result<VertexLayout> {
    let mut attributes = Vec::new();
    let mut offset = 0u32;
    let mut divisor = 0u32;
    let mut stepped = false;

    for token in layout.split_whitespace() {
        if stepped {
            return Err(ExportError::InvalidLayout(format!(
                "{token:?} after the step marker"
            )));
        }

        match token {
            "/v" => {
                stepped = true;
                continue;
            }
            "/i" => {
                divisor = 1;
                stepped = true;
                continue;
            }
            _ => {}
        }

        let digits = token.chars().take_while(|c| c.is_ascii_digit()).count();
        let (count, kind) = token.split_at(digits);
        let count: u32 = count
            .parse()
            .map_err(|_| ExportError::InvalidLayout(format!("{token:?} has no count")))?;

        if kind == "x" {
            offset = advance(offset, count, token)?;
            continue;
        }

        let base = match kind {
            "f" | "f4" => "float32",
            "f2" => "float16",
            "u" | "u4" => "uint32",
            "u1" => "uint8",
            "u2" => "uint16",
            "i" | "i4" => "sint32",
            "i1" => "sint8",
            "i2" => "sint16",
            "nu1" => "unorm8",
            "nu2" => "unorm16",
            "ni1" => "snorm8",
            "ni2" => "snorm16",
            _ => {
                return Err(ExportError::InvalidLayout(format!(
                    "unknown attribute kind in {token:?}"
                )));
            }
        };

        let name = if count == 1 { base.to_string() } else { format!("{base}x{count}") };
        let format = VertexFormat::from_name(&name)?;
        attributes.push(LayoutAttribute { offset, format });
        offset = advance(offset, format.byte_size(), token)?;
    }

    if attributes.is_empty() {
        return Err(ExportError::InvalidLayout(format!("{layout:?} has no attributes")));
    }

    Ok(VertexLayout { attributes, stride: offset, divisor })
}

fn advance(offset: u32, bytes: u32, token: &str) -> Result<u32> {
    offset
        .checked_add(bytes)
        .ok_or_else(|| ExportError::InvalidLayout(format!("{token:?} overflows the stride")))
}
