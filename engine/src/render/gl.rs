//! GL Constant Tables
//!
//! The OpenGL enum values the runtime exposes to its embedders. These are
//! copied from the platform GL headers and the numeric values are load-bearing:
//! blend state, texture formats, and primitive topologies recorded in scene
//! files or passed across the embedding boundary use these exact numbers.
//! Do not renumber.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// GL enum carrier type.
pub type GLenum = u32;

// ============================================================================
// BLEND FACTORS
// ============================================================================

pub const GL_ZERO: GLenum = 0;
pub const GL_ONE: GLenum = 1;
pub const GL_SRC_COLOR: GLenum = 0x0300;
pub const GL_ONE_MINUS_SRC_COLOR: GLenum = 0x0301;
pub const GL_SRC_ALPHA: GLenum = 0x0302;
pub const GL_ONE_MINUS_SRC_ALPHA: GLenum = 0x0303;
pub const GL_DST_ALPHA: GLenum = 0x0304;
pub const GL_ONE_MINUS_DST_ALPHA: GLenum = 0x0305;
pub const GL_DST_COLOR: GLenum = 0x0306;
pub const GL_ONE_MINUS_DST_COLOR: GLenum = 0x0307;
pub const GL_SRC_ALPHA_SATURATE: GLenum = 0x0308;
pub const GL_CONSTANT_COLOR: GLenum = 0x8001;
pub const GL_ONE_MINUS_CONSTANT_COLOR: GLenum = 0x8002;
pub const GL_CONSTANT_ALPHA: GLenum = 0x8003;
pub const GL_ONE_MINUS_CONSTANT_ALPHA: GLenum = 0x8004;

// ============================================================================
// TEXTURE AND PIXEL FORMATS
// ============================================================================

pub const GL_TEXTURE_2D: GLenum = 0x0DE1;
pub const GL_RGBA: GLenum = 0x1908;
pub const GL_RGB: GLenum = 0x1907;
pub const GL_UNSIGNED_BYTE: GLenum = 0x1401;
pub const GL_FLOAT: GLenum = 0x1406;
pub const GL_DEPTH24_STENCIL8: GLenum = 0x88F0;

/// PVRTC compressed texture formats (PowerVR hardware).
pub const GL_COMPRESSED_RGB_PVRTC_4BPPV1_IMG: GLenum = 0x8C00;
pub const GL_COMPRESSED_RGB_PVRTC_2BPPV1_IMG: GLenum = 0x8C01;
pub const GL_COMPRESSED_RGBA_PVRTC_4BPPV1_IMG: GLenum = 0x8C02;
pub const GL_COMPRESSED_RGBA_PVRTC_2BPPV1_IMG: GLenum = 0x8C03;

// ============================================================================
// PRIMITIVE TOPOLOGIES
// ============================================================================

pub const GL_POINTS: GLenum = 0x0000;
pub const GL_LINES: GLenum = 0x0001;
pub const GL_LINE_STRIP: GLenum = 0x0003;
pub const GL_TRIANGLES: GLenum = 0x0004;
pub const GL_TRIANGLE_STRIP: GLenum = 0x0005;
pub const GL_TRIANGLE_FAN: GLenum = 0x0006;

/// Sentinel for an invalid buffer/attribute index.
pub const GL_INVALID_INDEX: GLenum = 0xFFFF_FFFF;

// ============================================================================
// BLEND FUNCTION
// ============================================================================

/// A source/destination blend factor pair.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable, Serialize, Deserialize)]
pub struct BlendFunc {
    /// Source blend factor
    pub src: GLenum,
    /// Destination blend factor
    pub dst: GLenum,
}

static_assertions::assert_eq_size!(BlendFunc, [u32; 2]);

impl BlendFunc {
    /// Blending disabled: source replaces destination.
    pub const DISABLE: BlendFunc = BlendFunc {
        src: GL_ONE,
        dst: GL_ZERO,
    };

    /// Standard alpha blending for premultiplied-alpha textures.
    pub const ALPHA_PREMULTIPLIED: BlendFunc = BlendFunc {
        src: GL_ONE,
        dst: GL_ONE_MINUS_SRC_ALPHA,
    };

    /// Standard alpha blending for straight-alpha textures.
    pub const ALPHA_NON_PREMULTIPLIED: BlendFunc = BlendFunc {
        src: GL_SRC_ALPHA,
        dst: GL_ONE_MINUS_SRC_ALPHA,
    };

    /// Additive blending (light accumulation, glows).
    pub const ADDITIVE: BlendFunc = BlendFunc {
        src: GL_SRC_ALPHA,
        dst: GL_ONE,
    };

    pub const fn new(src: GLenum, dst: GLenum) -> Self {
        Self { src, dst }
    }
}

impl Default for BlendFunc {
    fn default() -> Self {
        BlendFunc::ALPHA_PREMULTIPLIED
    }
}
