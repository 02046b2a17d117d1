//! Director Module
//!
//! The runtime context object: owns the [`Scheduler`] and [`Configuration`],
//! mints target identities, and tracks frame pacing. Where the mirrored
//! class of engine reaches for shared singletons, this runtime passes one
//! `Director` around explicitly; everything it owns is reachable through
//! accessors, so embedders hold a single handle to the whole runtime.

use crate::config::{ConfigError, Configuration};
use crate::scheduler::{Scheduler, TargetId};

/// Frame period while running normally (60 FPS).
pub const DEFAULT_ANIMATION_INTERVAL: f32 = 1.0 / 60.0;

/// Frame period while paused: the runtime idles at 4 FPS so a paused game
/// does not burn the host's battery.
pub const PAUSED_ANIMATION_INTERVAL: f32 = 1.0 / 4.0;

/// The runtime context.
pub struct Director {
    scheduler: Scheduler,
    config: Configuration,
    /// Seconds per frame the embedder's loop should run at
    animation_interval: f32,
    /// Frame period to restore on resume
    old_animation_interval: f32,
    paused: bool,
    display_stats: bool,
    total_frames: u64,
    next_target: u64,
}

impl Director {
    /// Create a runtime context with an empty scheduler and configuration,
    /// running at the default frame rate.
    pub fn new() -> Self {
        Self {
            scheduler: Scheduler::new(),
            config: Configuration::new(),
            animation_interval: DEFAULT_ANIMATION_INTERVAL,
            old_animation_interval: DEFAULT_ANIMATION_INTERVAL,
            paused: false,
            display_stats: false,
            total_frames: 0,
            next_target: 0,
        }
    }

    /// Mint a fresh target identity, unique within this context.
    pub fn allocate_target(&mut self) -> TargetId {
        self.next_target += 1;
        TargetId::from_raw(self.next_target)
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    /// Seconds per frame the embedder's loop should currently run at.
    pub fn animation_interval(&self) -> f32 {
        self.animation_interval
    }

    /// Change the frame period. While paused, the new value takes effect on
    /// resume.
    pub fn set_animation_interval(&mut self, interval: f32) {
        if self.paused {
            self.old_animation_interval = interval;
        } else {
            self.animation_interval = interval;
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the runtime: scheduler dispatch stops and the frame period
    /// drops to the idle cadence.
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.old_animation_interval = self.animation_interval;
        self.animation_interval = PAUSED_ANIMATION_INTERVAL;
        self.paused = true;
        log::debug!("runtime paused");
    }

    /// Resume the runtime at the frame period it had before pausing.
    pub fn resume(&mut self) {
        if !self.paused {
            return;
        }
        self.animation_interval = self.old_animation_interval;
        self.paused = false;
        log::debug!("runtime resumed");
    }

    /// Whether the embedder should draw its stats overlay.
    pub fn display_stats(&self) -> bool {
        self.display_stats
    }

    pub fn set_display_stats(&mut self, display: bool) {
        self.display_stats = display;
    }

    /// Frames stepped since the context was created (paused frames count).
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Advance the runtime by one frame. Scheduler dispatch is skipped while
    /// paused; the frame counter always advances.
    pub fn step(&mut self, dt: f32) {
        if !self.paused {
            self.scheduler.update(dt);
        }
        self.total_frames += 1;
    }

    /// Load a config file into the dictionary, then apply the runtime
    /// defaults it carries.
    pub fn load_config_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), ConfigError> {
        self.config.load_file(path)?;
        self.set_default_values();
        Ok(())
    }

    /// Apply the dictionary's runtime keys to this context: `runtime.fps`
    /// (frame rate) and `runtime.display_stats` (stats overlay).
    pub fn set_default_values(&mut self) {
        let fps = self.config.get_number("runtime.fps", 60.0);
        if fps > 0.0 {
            self.set_animation_interval(1.0 / fps as f32);
        }
        self.display_stats = self.config.get_bool("runtime.display_stats", self.display_stats);
    }
}

impl Default for Director {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_allocate_target_is_unique() {
        let mut director = Director::new();
        let a = director.allocate_target();
        let b = director.allocate_target();
        assert_ne!(a, b);
    }

    #[test]
    fn test_pause_swaps_animation_interval() {
        let mut director = Director::new();
        director.set_animation_interval(1.0 / 30.0);

        director.pause();
        assert!(director.is_paused());
        assert_eq!(director.animation_interval(), PAUSED_ANIMATION_INTERVAL);

        // Pausing twice is a no-op
        director.pause();
        assert_eq!(director.animation_interval(), PAUSED_ANIMATION_INTERVAL);

        director.resume();
        assert!(!director.is_paused());
        assert_eq!(director.animation_interval(), 1.0 / 30.0);
    }

    #[test]
    fn test_interval_set_while_paused_applies_on_resume() {
        let mut director = Director::new();
        director.pause();
        director.set_animation_interval(1.0 / 120.0);
        assert_eq!(director.animation_interval(), PAUSED_ANIMATION_INTERVAL);

        director.resume();
        assert_eq!(director.animation_interval(), 1.0 / 120.0);
    }

    #[test]
    fn test_step_skips_scheduler_while_paused() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut director = Director::new();
        let target = director.allocate_target();
        let fired = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&fired);
        director
            .scheduler_mut()
            .schedule_update(target, 0, false, Box::new(move |_| *sink.borrow_mut() += 1));

        director.pause();
        director.step(0.016);
        assert_eq!(*fired.borrow(), 0);
        assert_eq!(director.total_frames(), 1);

        director.resume();
        director.step(0.016);
        assert_eq!(*fired.borrow(), 1);
        assert_eq!(director.total_frames(), 2);
    }

    #[test]
    fn test_set_default_values_reads_dictionary() {
        let mut director = Director::new();
        director
            .configuration_mut()
            .set_object("runtime.fps", Value::from(30));
        director
            .configuration_mut()
            .set_object("runtime.display_stats", Value::from(true));

        director.set_default_values();

        assert!((director.animation_interval() - 1.0 / 30.0).abs() < 1e-6);
        assert!(director.display_stats());
    }
}
