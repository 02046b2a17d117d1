//! Color and Vertex Types
//!
//! Byte and float color representations plus the interleaved vertex formats
//! the runtime stores in vertex buffers. The composite formats
//! (position + color + texture coordinate) are laid out exactly as the
//! buffer consumers expect, which the size assertions pin down.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 24-bit RGB color, one byte per channel.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color3B {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

static_assertions::assert_eq_size!(Color3B, [u8; 3]);

impl Color3B {
    pub const WHITE: Color3B = Color3B::new(255, 255, 255);
    pub const BLACK: Color3B = Color3B::new(0, 0, 0);
    pub const RED: Color3B = Color3B::new(255, 0, 0);
    pub const GREEN: Color3B = Color3B::new(0, 255, 0);
    pub const BLUE: Color3B = Color3B::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// 32-bit RGBA color, one byte per channel.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color4B {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

static_assertions::assert_eq_size!(Color4B, [u8; 4]);

impl Color4B {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from an RGB triple.
    pub const fn from_rgb(color: Color3B) -> Self {
        Self::new(color.r, color.g, color.b, 255)
    }
}

/// Normalized float RGBA color (each channel in 0.0..=1.0).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color4F {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

static_assertions::assert_eq_size!(Color4F, [f32; 4]);

impl Color4F {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color4B> for Color4F {
    fn from(c: Color4B) -> Self {
        Color4F::new(
            c.r as f32 / 255.0,
            c.g as f32 / 255.0,
            c.b as f32 / 255.0,
            c.a as f32 / 255.0,
        )
    }
}

impl From<Color3B> for Color4F {
    fn from(c: Color3B) -> Self {
        Color4F::new(c.r as f32 / 255.0, c.g as f32 / 255.0, c.b as f32 / 255.0, 1.0)
    }
}

/// Hue/saturation/value color adjustment.
///
/// The absolute flags switch the saturation/brightness components from
/// relative offsets to absolute replacement values. Not plain-old-data
/// because of the bool flags; it never crosses a binary buffer boundary.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HsvValue {
    pub h: f32,
    pub s: f32,
    pub v: f32,
    pub absolute_saturation: bool,
    pub absolute_brightness: bool,
}

impl HsvValue {
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self {
            h,
            s,
            v,
            absolute_saturation: false,
            absolute_brightness: false,
        }
    }
}

/// A texture coordinate pair.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Tex2F {
    pub u: f32,
    pub v: f32,
}

static_assertions::assert_eq_size!(Tex2F, [f32; 2]);

impl Tex2F {
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }
}

/// A 2D vertex position.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vertex2F {
    pub x: f32,
    pub y: f32,
}

static_assertions::assert_eq_size!(Vertex2F, [f32; 2]);

impl Vertex2F {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 3D vertex position.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vertex3F {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

static_assertions::assert_eq_size!(Vertex3F, [f32; 3]);

impl Vertex3F {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Interleaved vertex: 2D position, byte color, texture coordinate.
#[repr(C)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct V2F_C4B_T2F {
    pub vertices: Vertex2F,
    pub colors: Color4B,
    pub tex_coords: Tex2F,
}

static_assertions::assert_eq_size!(V2F_C4B_T2F, [u8; 20]);

/// Interleaved vertex: 2D position, float color, texture coordinate.
#[repr(C)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct V2F_C4F_T2F {
    pub vertices: Vertex2F,
    pub colors: Color4F,
    pub tex_coords: Tex2F,
}

static_assertions::assert_eq_size!(V2F_C4F_T2F, [u8; 32]);

/// Interleaved vertex: 3D position, byte color, texture coordinate.
#[repr(C)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct V3F_C4B_T2F {
    pub vertices: Vertex3F,
    pub colors: Color4B,
    pub tex_coords: Tex2F,
}

static_assertions::assert_eq_size!(V3F_C4B_T2F, [u8; 24]);
