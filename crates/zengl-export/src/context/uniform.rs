//! Plain uniforms and interface layout bindings of a pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};

pub const MAX_UNIFORMS: usize = 64;

/// Scalar kind of a uniform's storage.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ScalarKind {
    Float,
    Int,
    Uint,
    Bool,
}

/// GLSL type of a uniform.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniformType {
    Float,
    Vec2,
    Vec3,
    Vec4,
    Int,
    Ivec2,
    Ivec3,
    Ivec4,
    Uint,
    Uvec2,
    Uvec3,
    Uvec4,
    Bool,
    Bvec2,
    Bvec3,
    Bvec4,
    Mat2,
    Mat3,
    Mat4,
    Mat2x3,
    Mat2x4,
    Mat3x2,
    Mat3x4,
    Mat4x2,
    Mat4x3,
}

impl UniformType {
    pub fn scalar(self) -> ScalarKind {
        use UniformType::*;
        match self {
            Int | Ivec2 | Ivec3 | Ivec4 => ScalarKind::Int,
            Uint | Uvec2 | Uvec3 | Uvec4 => ScalarKind::Uint,
            Bool | Bvec2 | Bvec3 | Bvec4 => ScalarKind::Bool,
            _ => ScalarKind::Float,
        }
    }

    /// Scalars per array element.
    pub fn components(self) -> usize {
        use UniformType::*;
        match self {
            Float | Int | Uint | Bool => 1,
            Vec2 | Ivec2 | Uvec2 | Bvec2 => 2,
            Vec3 | Ivec3 | Uvec3 | Bvec3 => 3,
            Vec4 | Ivec4 | Uvec4 | Bvec4 | Mat2 => 4,
            Mat2x3 | Mat3x2 => 6,
            Mat2x4 | Mat4x2 => 8,
            Mat3 => 9,
            Mat3x4 | Mat4x3 => 12,
            Mat4 => 16,
        }
    }

    /// Suffix of the matching `glUniform*` entry point (`4fv`, `Matrix3x2fv`, ...).
    pub fn setter_suffix(self) -> &'static str {
        use UniformType::*;
        match self {
            Float => "1fv",
            Vec2 => "2fv",
            Vec3 => "3fv",
            Vec4 => "4fv",
            Int | Bool => "1iv",
            Ivec2 | Bvec2 => "2iv",
            Ivec3 | Bvec3 => "3iv",
            Ivec4 | Bvec4 => "4iv",
            Uint => "1uiv",
            Uvec2 => "2uiv",
            Uvec3 => "3uiv",
            Uvec4 => "4uiv",
            Mat2 => "Matrix2fv",
            Mat3 => "Matrix3fv",
            Mat4 => "Matrix4fv",
            Mat2x3 => "Matrix2x3fv",
            Mat2x4 => "Matrix2x4fv",
            Mat3x2 => "Matrix3x2fv",
            Mat3x4 => "Matrix3x4fv",
            Mat4x2 => "Matrix4x2fv",
            Mat4x3 => "Matrix4x3fv",
        }
    }

    pub fn is_matrix(self) -> bool {
        self.setter_suffix().starts_with("Matrix")
    }
}

/// A uniform value as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UniformDesc {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: UniformType,
    /// Array length; 1 for a plain uniform.
    #[serde(default = "one")]
    pub count: usize,
    /// Scalars in column-major order, converted to the uniform's scalar kind.
    pub values: Vec<f64>,
}

fn one() -> usize {
    1
}

/// A uniform with its data packed the way GL reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    pub name: String,
    pub ty: UniformType,
    pub count: usize,
    /// Raw 32-bit words; reinterpret with [`Uniform::floats`] and friends.
    data: Vec<u32>,
}

impl Uniform {
    pub fn new(desc: &UniformDesc) -> Result<Self> {
        // Saturates so an absurd count fails the length check below.
        let expected = desc.ty.components().checked_mul(desc.count).unwrap_or(usize::MAX);
        if desc.count == 0 || desc.values.len() != expected {
            return Err(ExportError::UniformSize {
                name: desc.name.clone(),
                expected,
                got: desc.values.len(),
            });
        }

        let invalid = |value: f64| ExportError::UniformValue { name: desc.name.clone(), value };
        let data = match desc.ty.scalar() {
            ScalarKind::Float => {
                let floats = desc
                    .values
                    .iter()
                    .map(|&v| {
                        let f = v as f32;
                        if f.is_finite() { Ok(f) } else { Err(invalid(v)) }
                    })
                    .collect::<Result<Vec<f32>>>()?;
                bytemuck::cast_slice::<f32, u32>(&floats).to_vec()
            }
            ScalarKind::Int | ScalarKind::Bool => {
                let ints = desc
                    .values
                    .iter()
                    .map(|&v| integral(v, i32::MIN.into(), i32::MAX.into()).map(|v| v as i32).ok_or_else(|| invalid(v)))
                    .collect::<Result<Vec<i32>>>()?;
                bytemuck::cast_slice::<i32, u32>(&ints).to_vec()
            }
            ScalarKind::Uint => desc
                .values
                .iter()
                .map(|&v| integral(v, 0.0, u32::MAX.into()).map(|v| v as u32).ok_or_else(|| invalid(v)))
                .collect::<Result<Vec<u32>>>()?,
        };

        Ok(Self { name: desc.name.clone(), ty: desc.ty, count: desc.count, data })
    }

    #[inline]
    pub fn floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.data)
    }

    #[inline]
    pub fn ints(&self) -> &[i32] {
        bytemuck::cast_slice(&self.data)
    }

    #[inline]
    pub fn uints(&self) -> &[u32] {
        &self.data
    }
}

/// `value` if it is a whole number within `min..=max`.
fn integral(value: f64, min: f64, max: f64) -> Option<f64> {
    (value.fract() == 0.0 && (min..=max).contains(&value)).then_some(value)
}

/// Which program interface a layout binding targets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    UniformBlock,
    Sampler,
}

/// Assigns a uniform block to a buffer binding, or a sampler uniform to a
/// texture unit.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct LayoutBinding {
    pub name: String,
    pub kind: LayoutKind,
    pub binding: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(ty: UniformType, count: usize, values: &[f64]) -> UniformDesc {
        UniformDesc { name: "u".into(), ty, count, values: values.to_vec() }
    }

    #[test]
    fn float_data_round_trips_through_words() {
        let u = Uniform::new(&desc(UniformType::Vec3, 1, &[0.5, -1.0, 2.25])).unwrap();
        assert_eq!(u.floats(), [0.5f32, -1.0, 2.25]);
    }

    #[test]
    fn ints_keep_sign() {
        let u = Uniform::new(&desc(UniformType::Ivec2, 1, &[-3.0, 7.0])).unwrap();
        assert_eq!(u.ints(), [-3, 7]);
    }

    #[test]
    fn value_count_must_match_type_and_count() {
        let err = Uniform::new(&desc(UniformType::Mat3, 2, &[0.0; 9])).unwrap_err();
        assert_eq!(err, ExportError::UniformSize { name: "u".into(), expected: 18, got: 9 });
    }

    #[test]
    fn huge_array_count_is_a_size_error() {
        let err = Uniform::new(&desc(UniformType::Mat4, usize::MAX / 2, &[0.0; 16])).unwrap_err();
        assert_eq!(err, ExportError::UniformSize { name: "u".into(), expected: usize::MAX, got: 16 });
    }

    #[test]
    fn integer_uniforms_reject_fractions_and_out_of_range_values() {
        let err = Uniform::new(&desc(UniformType::Int, 1, &[3.7])).unwrap_err();
        assert_eq!(err, ExportError::UniformValue { name: "u".into(), value: 3.7 });
        assert!(Uniform::new(&desc(UniformType::Uint, 1, &[-1.0])).is_err());
        assert!(Uniform::new(&desc(UniformType::Int, 1, &[2147483648.0])).is_err());
        assert!(Uniform::new(&desc(UniformType::Bvec2, 1, &[1.0, 0.5])).is_err());
        assert_eq!(Uniform::new(&desc(UniformType::Uint, 1, &[4294967295.0])).unwrap().uints(), [u32::MAX]);
        assert_eq!(Uniform::new(&desc(UniformType::Int, 1, &[-2147483648.0])).unwrap().ints(), [i32::MIN]);
    }

    #[test]
    fn float_uniforms_must_fit_f32() {
        assert!(Uniform::new(&desc(UniformType::Float, 1, &[1e39])).is_err());
        assert!(Uniform::new(&desc(UniformType::Float, 1, &[f64::NAN])).is_err());
        assert_eq!(Uniform::new(&desc(UniformType::Float, 1, &[1e-7])).unwrap().floats(), [1e-7f32]);
    }

    #[test]
    fn setter_suffixes() {
        assert_eq!(UniformType::Bvec3.setter_suffix(), "3iv");
        assert_eq!(UniformType::Mat4x3.setter_suffix(), "Matrix4x3fv");
        assert!(UniformType::Mat2.is_matrix());
        assert!(!UniformType::Uvec4.is_matrix());
    }

    #[test]
    fn uniform_type_from_json() {
        let d: UniformDesc =
            serde_json::from_str(r#"{"name": "mvp", "type": "mat4", "values": [1,0,0,0, 0,1,0,0, 0,0,1,0, 0,0,0,1]}"#)
                .unwrap();
        assert_eq!(d.ty, UniformType::Mat4);
        assert_eq!(d.count, 1);
        assert!(Uniform::new(&d).is_ok());
    }
}
