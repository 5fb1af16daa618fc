//! Raw GL enum values used by the context model.

// ── topology ──────────────────────────────────────────────────────────────

pub const GL_POINTS: u32 = 0x0000;
pub const GL_LINES: u32 = 0x0001;
pub const GL_LINE_LOOP: u32 = 0x0002;
pub const GL_LINE_STRIP: u32 = 0x0003;
pub const GL_TRIANGLES: u32 = 0x0004;
pub const GL_TRIANGLE_STRIP: u32 = 0x0005;
pub const GL_TRIANGLE_FAN: u32 = 0x0006;

// ── shaders ───────────────────────────────────────────────────────────────

pub const GL_FRAGMENT_SHADER: u32 = 0x8b30;
pub const GL_VERTEX_SHADER: u32 = 0x8b31;

// ── texture targets ───────────────────────────────────────────────────────

pub const GL_TEXTURE_2D: u32 = 0x0de1;
pub const GL_TEXTURE_CUBE_MAP: u32 = 0x8513;
pub const GL_TEXTURE_2D_ARRAY: u32 = 0x8c1a;

// ── component types ───────────────────────────────────────────────────────

pub const GL_BYTE: u32 = 0x1400;
pub const GL_UNSIGNED_BYTE: u32 = 0x1401;
pub const GL_SHORT: u32 = 0x1402;
pub const GL_UNSIGNED_SHORT: u32 = 0x1403;
pub const GL_INT: u32 = 0x1404;
pub const GL_UNSIGNED_INT: u32 = 0x1405;
pub const GL_FLOAT: u32 = 0x1406;
pub const GL_HALF_FLOAT: u32 = 0x140b;
pub const GL_UNSIGNED_INT_24_8: u32 = 0x84fa;

// ── pixel formats ─────────────────────────────────────────────────────────

pub const GL_STENCIL_INDEX: u32 = 0x1901;
pub const GL_DEPTH_COMPONENT: u32 = 0x1902;
pub const GL_RED: u32 = 0x1903;
pub const GL_RGBA: u32 = 0x1908;
pub const GL_BGRA: u32 = 0x80e1;
pub const GL_RG: u32 = 0x8227;
pub const GL_RG_INTEGER: u32 = 0x8228;
pub const GL_DEPTH_STENCIL: u32 = 0x84f9;
pub const GL_RED_INTEGER: u32 = 0x8d94;
pub const GL_RGBA_INTEGER: u32 = 0x8d99;

// ── internal formats ──────────────────────────────────────────────────────

pub const GL_R8: u32 = 0x8229;
pub const GL_RG8: u32 = 0x822b;
pub const GL_RGBA8: u32 = 0x8058;
pub const GL_R8_SNORM: u32 = 0x8f94;
pub const GL_RG8_SNORM: u32 = 0x8f95;
pub const GL_RGBA8_SNORM: u32 = 0x8f97;
pub const GL_R8UI: u32 = 0x8232;
pub const GL_RG8UI: u32 = 0x8238;
pub const GL_RGBA8UI: u32 = 0x8d7c;
pub const GL_R16UI: u32 = 0x8234;
pub const GL_RG16UI: u32 = 0x823a;
pub const GL_RGBA16UI: u32 = 0x8d76;
pub const GL_R32UI: u32 = 0x8236;
pub const GL_RG32UI: u32 = 0x823c;
pub const GL_RGBA32UI: u32 = 0x8d70;
pub const GL_R8I: u32 = 0x8231;
pub const GL_RG8I: u32 = 0x8237;
pub const GL_RGBA8I: u32 = 0x8d8e;
pub const GL_R16I: u32 = 0x8233;
pub const GL_RG16I: u32 = 0x8239;
pub const GL_RGBA16I: u32 = 0x8d88;
pub const GL_R32I: u32 = 0x8235;
pub const GL_RG32I: u32 = 0x823b;
pub const GL_RGBA32I: u32 = 0x8d82;
pub const GL_R16F: u32 = 0x822d;
pub const GL_RG16F: u32 = 0x822f;
pub const GL_RGBA16F: u32 = 0x881a;
pub const GL_R32F: u32 = 0x822e;
pub const GL_RG32F: u32 = 0x8230;
pub const GL_RGBA32F: u32 = 0x8814;
pub const GL_SRGB8_ALPHA8: u32 = 0x8c43;
pub const GL_STENCIL_INDEX8: u32 = 0x8d48;
pub const GL_DEPTH_COMPONENT16: u32 = 0x81a5;
pub const GL_DEPTH_COMPONENT24: u32 = 0x81a6;
pub const GL_DEPTH24_STENCIL8: u32 = 0x88f0;
pub const GL_DEPTH_COMPONENT32F: u32 = 0x8cac;

// ── attachment buffers ────────────────────────────────────────────────────

pub const GL_COLOR: u32 = 0x1800;
pub const GL_DEPTH: u32 = 0x1801;
pub const GL_STENCIL: u32 = 0x1802;

// ── face culling ──────────────────────────────────────────────────────────

pub const GL_NONE: u32 = 0x0000;
pub const GL_FRONT: u32 = 0x0404;
pub const GL_BACK: u32 = 0x0405;
pub const GL_FRONT_AND_BACK: u32 = 0x0408;

// ── sampler parameters ────────────────────────────────────────────────────

pub const GL_NEAREST: u32 = 0x2600;
pub const GL_LINEAR: u32 = 0x2601;
pub const GL_NEAREST_MIPMAP_NEAREST: u32 = 0x2700;
pub const GL_LINEAR_MIPMAP_NEAREST: u32 = 0x2701;
pub const GL_NEAREST_MIPMAP_LINEAR: u32 = 0x2702;
pub const GL_LINEAR_MIPMAP_LINEAR: u32 = 0x2703;
pub const GL_REPEAT: u32 = 0x2901;
pub const GL_CLAMP_TO_EDGE: u32 = 0x812f;
pub const GL_MIRRORED_REPEAT: u32 = 0x8370;
pub const GL_COMPARE_REF_TO_TEXTURE: u32 = 0x884e;

// ── compare functions ─────────────────────────────────────────────────────

pub const GL_NEVER: u32 = 0x0200;
pub const GL_LESS: u32 = 0x0201;
pub const GL_EQUAL: u32 = 0x0202;
pub const GL_LEQUAL: u32 = 0x0203;
pub const GL_GREATER: u32 = 0x0204;
pub const GL_NOTEQUAL: u32 = 0x0205;
pub const GL_GEQUAL: u32 = 0x0206;
pub const GL_ALWAYS: u32 = 0x0207;

// ── blending ──────────────────────────────────────────────────────────────

pub const GL_FUNC_ADD: u32 = 0x8006;
pub const GL_MIN: u32 = 0x8007;
pub const GL_MAX: u32 = 0x8008;
pub const GL_FUNC_SUBTRACT: u32 = 0x800a;
pub const GL_FUNC_REVERSE_SUBTRACT: u32 = 0x800b;

pub const GL_ZERO: u32 = 0x0000;
pub const GL_ONE: u32 = 0x0001;
pub const GL_SRC_COLOR: u32 = 0x0300;
pub const GL_ONE_MINUS_SRC_COLOR: u32 = 0x0301;
pub const GL_SRC_ALPHA: u32 = 0x0302;
pub const GL_ONE_MINUS_SRC_ALPHA: u32 = 0x0303;
pub const GL_DST_ALPHA: u32 = 0x0304;
pub const GL_ONE_MINUS_DST_ALPHA: u32 = 0x0305;
pub const GL_DST_COLOR: u32 = 0x0306;
pub const GL_ONE_MINUS_DST_COLOR: u32 = 0x0307;
pub const GL_SRC_ALPHA_SATURATE: u32 = 0x0308;
pub const GL_CONSTANT_COLOR: u32 = 0x8001;
pub const GL_ONE_MINUS_CONSTANT_COLOR: u32 = 0x8002;
pub const GL_CONSTANT_ALPHA: u32 = 0x8003;
pub const GL_ONE_MINUS_CONSTANT_ALPHA: u32 = 0x8004;
pub const GL_SRC1_ALPHA: u32 = 0x8589;
pub const GL_SRC1_COLOR: u32 = 0x88f9;
pub const GL_ONE_MINUS_SRC1_COLOR: u32 = 0x88fa;
pub const GL_ONE_MINUS_SRC1_ALPHA: u32 = 0x88fb;

// ── stencil ops ───────────────────────────────────────────────────────────

pub const GL_KEEP: u32 = 0x1e00;
pub const GL_REPLACE: u32 = 0x1e01;
pub const GL_INCR: u32 = 0x1e02;
pub const GL_DECR: u32 = 0x1e03;
pub const GL_INVERT: u32 = 0x150a;
pub const GL_INCR_WRAP: u32 = 0x8507;
pub const GL_DECR_WRAP: u32 = 0x8508;
