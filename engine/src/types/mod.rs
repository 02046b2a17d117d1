//! Runtime Value Types
//!
//! Fixed-layout geometry and color types passed by value across the runtime
//! boundary. Every type here is `#[repr(C)]` with a byte layout pinned by a
//! compile-time size assertion, so a struct written into a buffer or handed
//! to foreign code always has the shape the rest of the runtime expects.

pub mod color;
pub mod geometry;

pub use color::{
    Color3B, Color4B, Color4F, HsvValue, Tex2F, V2F_C4B_T2F, V2F_C4F_T2F, V3F_C4B_T2F,
    Vertex2F, Vertex3F,
};
pub use geometry::{Point, Rect, Size};
