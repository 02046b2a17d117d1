//! Timer Object
//!
//! One scheduled recurring callback with interval, delay, and repeat
//! bookkeeping. A timer does nothing on its own; the scheduler owns it
//! inside the target's timer slot and ticks it every update.
//!
//! Timing rules:
//! - The first tick after scheduling only arms the timer (it consumes the
//!   frame's delta without accumulating), so an interval timer never fires
//!   on the same tick it was scheduled.
//! - With a delay, the first firing waits `delay` seconds instead of
//!   `interval`; the overshoot past the delay carries into the first
//!   interval period.
//! - A finite timer fires `repeat + 1` times, then reports itself finished.
//! - Callbacks receive the elapsed time at the moment of firing (which can
//!   exceed the interval on a slow frame), not the nominal interval.

use super::target::TargetId;

/// Repeat-count sentinel for a timer that never exhausts.
pub const REPEAT_FOREVER: u32 = u32::MAX - 1;

/// Callback invoked when a timer fires; receives the elapsed seconds at
/// the moment of firing.
pub type ScheduleCallback = Box<dyn FnMut(f32)>;

/// Result of ticking a timer once.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerTick {
    /// Elapsed seconds at the firing this tick produced, if any.
    pub fired: Option<f32>,
    /// The timer exhausted its repeat count and should be removed.
    pub finished: bool,
}

/// A scheduled recurring callback bound to a target.
pub struct Timer {
    target: Option<TargetId>,
    callback: Option<ScheduleCallback>,
    script_handler: i32,
    elapsed: f32,
    interval: f32,
    delay: f32,
    use_delay: bool,
    repeat: u32,
    run_forever: bool,
    times_executed: u32,
}

impl Timer {
    /// A zeroed, unbound timer: interval 0, not run-forever, unarmed.
    pub fn new() -> Self {
        Self {
            target: None,
            callback: None,
            script_handler: 0,
            elapsed: -1.0,
            interval: 0.0,
            delay: 0.0,
            use_delay: false,
            repeat: 0,
            run_forever: false,
            times_executed: 0,
        }
    }

    /// Bind a callback firing every tick, forever.
    pub fn with_target(target: TargetId, callback: ScheduleCallback) -> Self {
        Self::with_repeat(target, callback, 0.0, REPEAT_FOREVER, 0.0)
    }

    /// Bind a callback firing every `interval` seconds, forever.
    pub fn with_interval(target: TargetId, callback: ScheduleCallback, interval: f32) -> Self {
        Self::with_repeat(target, callback, interval, REPEAT_FOREVER, 0.0)
    }

    /// Full binding: fire every `interval` seconds, `repeat + 1` times in
    /// total (or forever with [`REPEAT_FOREVER`]), with the first firing
    /// delayed by `delay` seconds when `delay > 0`.
    pub fn with_repeat(
        target: TargetId,
        callback: ScheduleCallback,
        interval: f32,
        repeat: u32,
        delay: f32,
    ) -> Self {
        Self {
            target: Some(target),
            callback: Some(callback),
            script_handler: 0,
            elapsed: -1.0,
            interval,
            delay,
            use_delay: delay > 0.0,
            repeat,
            run_forever: repeat == REPEAT_FOREVER,
            times_executed: 0,
        }
    }

    /// Bind by integer script handle instead of a native callback.
    ///
    /// Script timers repeat until unscheduled; dispatch happens through the
    /// scheduler's script hook rather than a stored closure.
    pub fn with_script_handler(handler: i32, interval: f32) -> Self {
        Self {
            script_handler: handler,
            elapsed: -1.0,
            interval,
            repeat: REPEAT_FOREVER,
            run_forever: true,
            ..Self::new()
        }
    }

    /// Seconds between firings.
    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Change the firing interval.
    pub fn set_interval(&mut self, interval: f32) {
        self.interval = interval;
    }

    /// Delay before the first firing.
    pub fn delay(&self) -> f32 {
        self.delay
    }

    /// Whether the first firing is still waiting on the delay.
    pub fn use_delay(&self) -> bool {
        self.use_delay
    }

    /// Seconds accumulated toward the next firing (negative while unarmed).
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// How many times this timer has fired.
    pub fn times_executed(&self) -> u32 {
        self.times_executed
    }

    /// Repeat count (firings after the first).
    pub fn repeat(&self) -> u32 {
        self.repeat
    }

    /// Whether the timer never exhausts.
    pub fn run_forever(&self) -> bool {
        self.run_forever
    }

    /// The target this timer is bound to, if bound natively.
    pub fn target(&self) -> Option<TargetId> {
        self.target
    }

    /// The script handle, or 0 when bound natively.
    pub fn script_handler(&self) -> i32 {
        self.script_handler
    }

    /// Advance the timer by `dt` seconds, firing the stored callback when a
    /// period completes.
    pub fn update(&mut self, dt: f32) -> TimerTick {
        let mut tick = TimerTick::default();

        // First tick arms the timer without accumulating.
        if self.elapsed < 0.0 {
            self.elapsed = 0.0;
            self.times_executed = 0;
            return tick;
        }

        if self.run_forever && !self.use_delay {
            self.elapsed += dt;
            if self.elapsed >= self.interval {
                tick.fired = Some(self.invoke());
                self.elapsed = 0.0;
            }
            return tick;
        }

        self.elapsed += dt;
        if self.use_delay {
            if self.elapsed >= self.delay {
                tick.fired = Some(self.invoke());
                // Overshoot past the delay counts toward the first interval
                self.elapsed -= self.delay;
                self.times_executed += 1;
                self.use_delay = false;
            }
        } else if self.elapsed >= self.interval {
            tick.fired = Some(self.invoke());
            self.elapsed = 0.0;
            self.times_executed += 1;
        }

        if !self.run_forever && self.times_executed > self.repeat {
            tick.finished = true;
        }
        tick
    }

    /// Run the native callback (if any) with the current elapsed time and
    /// return that time.
    fn invoke(&mut self) -> f32 {
        let at = self.elapsed;
        if let Some(callback) = self.callback.as_mut() {
            callback(at);
        }
        at
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Timer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timer")
            .field("target", &self.target)
            .field("script_handler", &self.script_handler)
            .field("interval", &self.interval)
            .field("delay", &self.delay)
            .field("use_delay", &self.use_delay)
            .field("repeat", &self.repeat)
            .field("run_forever", &self.run_forever)
            .field("elapsed", &self.elapsed)
            .field("times_executed", &self.times_executed)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_callback() -> (ScheduleCallback, Rc<RefCell<Vec<f32>>>) {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&fired);
        (Box::new(move |dt| sink.borrow_mut().push(dt)), fired)
    }

    fn target() -> TargetId {
        TargetId::from_raw(1)
    }

    #[test]
    fn test_new_is_zeroed() {
        let timer = Timer::new();
        assert_eq!(timer.interval(), 0.0);
        assert!(!timer.run_forever());
        assert!(!timer.use_delay());
        assert_eq!(timer.times_executed(), 0);
        assert!(timer.target().is_none());
        assert_eq!(timer.script_handler(), 0);
    }

    #[test]
    fn test_two_argument_constructor_defaults() {
        let (callback, _) = recording_callback();
        let timer = Timer::with_target(target(), callback);

        assert!(timer.run_forever());
        assert!(!timer.use_delay());
        assert_eq!(timer.interval(), 0.0);
        assert_eq!(timer.delay(), 0.0);
    }

    #[test]
    fn test_delay_flag_follows_delay_value() {
        let (callback, _) = recording_callback();
        let timer = Timer::with_repeat(target(), callback, 1.0, 3, 0.5);
        assert!(timer.use_delay());

        let (callback, _) = recording_callback();
        let timer = Timer::with_repeat(target(), callback, 1.0, 3, 0.0);
        assert!(!timer.use_delay());
    }

    #[test]
    fn test_first_tick_only_arms() {
        let (callback, fired) = recording_callback();
        let mut timer = Timer::with_interval(target(), callback, 0.1);

        // A large first delta is swallowed by arming
        let tick = timer.update(100.0);
        assert!(tick.fired.is_none());
        assert!(fired.borrow().is_empty());
        assert_eq!(timer.elapsed(), 0.0);
    }

    #[test]
    fn test_interval_firing_passes_elapsed() {
        let (callback, fired) = recording_callback();
        let mut timer = Timer::with_interval(target(), callback, 1.0);

        timer.update(0.5); // arm
        assert!(timer.update(0.6).fired.is_none());
        let tick = timer.update(0.5);

        // Fired with the accumulated 1.1s, not the nominal 1.0s interval
        assert_eq!(tick.fired, Some(1.1));
        assert_eq!(fired.borrow().as_slice(), &[1.1]);
        assert_eq!(timer.elapsed(), 0.0);
    }

    #[test]
    fn test_finite_timer_fires_repeat_plus_one_times() {
        let (callback, fired) = recording_callback();
        let mut timer = Timer::with_repeat(target(), callback, 1.0, 2, 0.0);

        timer.update(1.0); // arm
        let mut finished = false;
        for _ in 0..10 {
            if timer.update(1.0).finished {
                finished = true;
                break;
            }
        }

        assert!(finished);
        assert_eq!(fired.borrow().len(), 3);
        assert_eq!(timer.times_executed(), 3);
    }

    #[test]
    fn test_delayed_first_firing() {
        let (callback, fired) = recording_callback();
        let mut timer = Timer::with_repeat(target(), callback, 1.0, REPEAT_FOREVER, 0.5);

        timer.update(0.3); // arm
        assert!(timer.update(0.3).fired.is_none()); // 0.3 < 0.5 delay
        let tick = timer.update(0.3); // 0.6 >= 0.5 delay

        assert_eq!(tick.fired, Some(0.6));
        assert!(!timer.use_delay());
        // Overshoot carried into the interval accumulator
        assert!((timer.elapsed() - 0.1).abs() < 1e-6);
        assert_eq!(fired.borrow().len(), 1);
    }

    #[test]
    fn test_script_handler_binding() {
        let mut timer = Timer::with_script_handler(7, 0.25);

        assert_eq!(timer.script_handler(), 7);
        assert_eq!(timer.interval(), 0.25);
        assert!(timer.run_forever());
        assert!(timer.target().is_none());

        timer.update(0.1); // arm
        let tick = timer.update(0.3);
        assert_eq!(tick.fired, Some(0.3));
        assert!(!tick.finished);
    }
}
