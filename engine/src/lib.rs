//! Ember2D Runtime Library
//!
//! The runtime core of a 2D scene-graph engine: cooperative scheduling,
//! camera and configuration state, and the fixed-value constant tables
//! (key codes, GL enums, wire-layout value types) the engine's embedders
//! depend on. Rendering, input routing, and asset loading live with the
//! embedder; this crate is the part every frame passes through.
//!
//! # Modules
//!
//! - [`scheduler`] - Timer and per-frame update dispatch keyed by target
//!   identity, with priority buckets and pause/resume
//! - [`director`] - The explicit runtime context owning scheduler and
//!   configuration
//! - [`camera`] - Look-at camera state and view matrix derivation
//! - [`config`] - Device capabilities and the JSON-backed value dictionary
//! - [`input`] - The platform key-code table and a pressed-key tracker
//! - [`render`] - GL constant tables and blend-function presets
//! - [`types`] - Fixed-layout geometry, color, and vertex types
//!
//! # Example
//!
//! ```ignore
//! use ember2d_runtime::director::Director;
//! use ember2d_runtime::scheduler::Timer;
//!
//! let mut director = Director::new();
//! let player = director.allocate_target();
//!
//! // Tick the player every frame at priority 0
//! director.scheduler_mut().schedule_update(
//!     player,
//!     0,
//!     false,
//!     Box::new(|dt| { /* advance the player by dt */ }),
//! );
//!
//! // And give it a half-second heartbeat timer
//! let heartbeat = Timer::with_interval(player, Box::new(|_| { /* beat */ }), 0.5);
//! director.scheduler_mut().schedule(player, heartbeat, false);
//!
//! loop {
//!     director.step(director.animation_interval());
//!     # break;
//! }
//! ```

pub mod camera;
pub mod config;
pub mod director;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod types;

// Re-export the types embedders touch every frame
pub use camera::Camera;
pub use config::{ConfigError, Configuration, DeviceCaps};
pub use director::Director;
pub use input::{KeyCode, KeyboardState};
pub use render::gl::BlendFunc;
pub use scheduler::{
    PRIORITY_NON_SYSTEM_MIN, PRIORITY_SYSTEM, REPEAT_FOREVER, Scheduler, TargetId, Timer,
};
pub use types::{Color3B, Color4B, Color4F, Point, Rect, Size};
