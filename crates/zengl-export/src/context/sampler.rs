use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::gl::{CompareFunc, CompareMode, Filter, Wrap};

/// Sampler object state.
///
/// Samplers are cached by their full parameter set. Floats compare by bit
/// pattern, so `0.0` and `-0.0` are distinct samplers.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerParams {
    pub min_filter: Filter,
    pub mag_filter: Filter,
    pub min_lod: f32,
    pub max_lod: f32,
    pub lod_bias: f32,
    pub wrap_x: Wrap,
    pub wrap_y: Wrap,
    pub wrap_z: Wrap,
    pub compare_mode: CompareMode,
    pub compare_func: CompareFunc,
    pub max_anisotropy: f32,
    pub border_color: [f32; 4],
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            min_filter: Filter::Linear,
            mag_filter: Filter::Linear,
            min_lod: -1000.0,
            max_lod: 1000.0,
            lod_bias: 0.0,
            wrap_x: Wrap::Repeat,
            wrap_y: Wrap::Repeat,
            wrap_z: Wrap::Repeat,
            compare_mode: CompareMode::None,
            compare_func: CompareFunc::Never,
            max_anisotropy: 1.0,
            border_color: [0.0; 4],
        }
    }
}

impl SamplerParams {
    fn float_bits(&self) -> [u32; 8] {
        let [r, g, b, a] = self.border_color;
        [
            self.min_lod.to_bits(),
            self.max_lod.to_bits(),
            self.lod_bias.to_bits(),
            self.max_anisotropy.to_bits(),
            r.to_bits(),
            g.to_bits(),
            b.to_bits(),
            a.to_bits(),
        ]
    }

    fn enums(&self) -> [u32; 7] {
        [
            self.min_filter.gl(),
            self.mag_filter.gl(),
            self.wrap_x.gl(),
            self.wrap_y.gl(),
            self.wrap_z.gl(),
            self.compare_mode.gl(),
            self.compare_func.gl(),
        ]
    }
}

impl PartialEq for SamplerParams {
    fn eq(&self, other: &Self) -> bool {
        self.enums() == other.enums() && self.float_bits() == other.float_bits()
    }
}

impl Eq for SamplerParams {}

impl Hash for SamplerParams {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.enums().hash(state);
        self.float_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_compare_equal() {
        assert_eq!(SamplerParams::default(), SamplerParams::default());
    }

    #[test]
    fn signed_zero_is_distinct() {
        let a = SamplerParams { lod_bias: 0.0, ..Default::default() };
        let b = SamplerParams { lod_bias: -0.0, ..Default::default() };
        assert_ne!(a, b);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let params: SamplerParams =
            serde_json::from_str(r#"{"min_filter": "nearest", "wrap_x": "clamp_to_edge"}"#).unwrap();
        assert_eq!(params.min_filter, Filter::Nearest);
        assert_eq!(params.mag_filter, Filter::Linear);
        assert_eq!(params.wrap_x, Wrap::ClampToEdge);
        assert_eq!(params.max_lod, 1000.0);
    }
}
