//! Input Module
//!
//! The key-code table and a small pressed-key tracker. This module is
//! decoupled from any specific windowing system: embedders translate their
//! native events to [`KeyCode`] values (the platform virtual-key numbers)
//! and feed them to [`KeyboardState`].

pub mod keyboard;
pub mod keycodes;

// Re-export commonly used types at module level
pub use keyboard::KeyboardState;
pub use keycodes::KeyCode;
