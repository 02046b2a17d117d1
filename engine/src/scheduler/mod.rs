//! Scheduler Module
//!
//! The update-dispatch registry for the scene graph: recurring timers plus
//! per-frame update callbacks ordered by priority, both keyed by an opaque
//! [`TargetId`].
//!
//! Two structures back the registry:
//!
//! - A timer table mapping each target to its slot of [`Timer`] entries plus
//!   a slot-wide paused flag. A target appears at most once in the table.
//! - An update arena (dense entry storage with a free list) with a
//!   target-to-index map and three priority-ordered bucket lists: negative,
//!   zero, positive. A target appears in at most one bucket. Buckets run in
//!   that order every tick, ascending by priority inside a bucket, FIFO
//!   among equal priorities.
//!
//! Update entries are never removed mid-iteration: unscheduling marks the
//! entry for deletion, every consumer skips marked entries, and the entry is
//! physically removed in a sweep at the end of the next [`Scheduler::update`]
//! tick. Timers removed by the tick itself (exhausted repeat counts) come
//! out at the walk cursor, which cannot skip or double-visit a neighbor.
//!
//! The registry is single-threaded and non-reentrant: callbacks receive the
//! frame delta and nothing else, and no operation here ever fails - pausing,
//! resuming, or unscheduling an unknown target is a silent no-op.

pub mod target;
pub mod timer;

use std::collections::{HashMap, HashSet};

pub use target::TargetId;
pub use timer::{REPEAT_FOREVER, ScheduleCallback, Timer, TimerTick};

/// Lowest priority in the system; update callbacks at this priority run
/// before everything else, and pausing/unscheduling "with min priority" at
/// this value touches every entry.
pub const PRIORITY_SYSTEM: i32 = i32::MIN;

/// Lowest priority available to non-system callbacks.
pub const PRIORITY_NON_SYSTEM_MIN: i32 = PRIORITY_SYSTEM + 1;

/// Callback invoked once per tick for an update-scheduled target; receives
/// the (time-scaled) frame delta.
pub type UpdateCallback = Box<dyn FnMut(f32)>;

/// Hook invoked when a script-handle timer fires: receives the handle and
/// the elapsed seconds at firing.
pub type ScriptDispatch = Box<dyn FnMut(i32, f32)>;

/// All timers registered for one target.
struct TimerSlot {
    timers: Vec<Timer>,
    paused: bool,
}

/// One per-frame update callback registration.
struct UpdateEntry {
    target: TargetId,
    priority: i32,
    paused: bool,
    marked_for_deletion: bool,
    callback: UpdateCallback,
}

/// The timer/update dispatch registry.
pub struct Scheduler {
    /// Multiplier applied to every delta passed to [`Scheduler::update`]
    time_scale: f32,
    /// Timer table: target identity to its slot of timers
    timers: HashMap<TargetId, TimerSlot>,
    /// Update entry arena; `None` slots are free
    entries: Vec<Option<UpdateEntry>>,
    /// Free arena slots available for reuse
    free_slots: Vec<usize>,
    /// Target identity to arena index
    update_index: HashMap<TargetId, usize>,
    /// Arena indices of entries with negative priority, ascending
    neg: Vec<usize>,
    /// Arena indices of entries with priority zero, FIFO
    zero: Vec<usize>,
    /// Arena indices of entries with positive priority, ascending
    pos: Vec<usize>,
    /// Hook for script-handle timer firings
    script_dispatch: Option<ScriptDispatch>,
}

impl Scheduler {
    /// Create an empty registry with time scale 1.
    pub fn new() -> Self {
        Self {
            time_scale: 1.0,
            timers: HashMap::new(),
            entries: Vec::new(),
            free_slots: Vec::new(),
            update_index: HashMap::new(),
            neg: Vec::new(),
            zero: Vec::new(),
            pos: Vec::new(),
            script_dispatch: None,
        }
    }

    /// The global dispatch speed multiplier.
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Change the dispatch speed: 2.0 runs timers and updates at double
    /// speed, 0.5 in slow motion. Affects every registered target.
    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.time_scale = time_scale;
    }

    /// Install the hook that receives script-handle timer firings.
    pub fn set_script_dispatch(&mut self, dispatch: ScriptDispatch) {
        self.script_dispatch = Some(dispatch);
    }

    // ========================================================================
    // REGISTRATION
    // ========================================================================

    /// Add a timer to `target`'s slot. A new slot starts in the given
    /// paused state; an existing slot keeps its current state.
    pub fn schedule(&mut self, target: TargetId, timer: Timer, paused: bool) {
        let slot = self.timers.entry(target).or_insert_with(|| TimerSlot {
            timers: Vec::new(),
            paused,
        });
        slot.timers.push(timer);
    }

    /// Register a per-frame update callback for `target` at the given
    /// priority (negative runs before zero, zero before positive).
    ///
    /// A target already scheduled for updates is left untouched (logged at
    /// warn level), unless its entry is marked for deletion, in which case
    /// the old entry is dropped and the new binding takes its place.
    pub fn schedule_update(
        &mut self,
        target: TargetId,
        priority: i32,
        paused: bool,
        callback: UpdateCallback,
    ) {
        if let Some(&index) = self.update_index.get(&target) {
            let marked = self.entries[index]
                .as_ref()
                .is_some_and(|e| e.marked_for_deletion);
            if !marked {
                log::warn!("{target} is already scheduled for updates, ignoring reschedule");
                return;
            }
            self.remove_entry(index, target);
        }

        let entry = UpdateEntry {
            target,
            priority,
            paused,
            marked_for_deletion: false,
            callback,
        };
        let index = match self.free_slots.pop() {
            Some(slot) => {
                self.entries[slot] = Some(entry);
                slot
            }
            None => {
                self.entries.push(Some(entry));
                self.entries.len() - 1
            }
        };
        self.update_index.insert(target, index);

        // Insert before the first entry with a strictly greater priority:
        // ascending order, FIFO among equals.
        let position = self.bucket_for(priority).iter().position(|&i| {
            self.entries[i]
                .as_ref()
                .is_some_and(|e| e.priority > priority)
        });
        let bucket = self.bucket_for_mut(priority);
        match position {
            Some(p) => bucket.insert(p, index),
            None => bucket.push(index),
        }
    }

    /// Remove every timer bound to `target` and mark its update entry for
    /// deletion.
    pub fn unschedule_all_for_target(&mut self, target: TargetId) {
        self.timers.remove(&target);
        self.unschedule_update(target);
    }

    /// Mark `target`'s update entry for deletion. The entry stops being
    /// visible immediately; storage is reclaimed at the end of the next
    /// [`Scheduler::update`].
    pub fn unschedule_update(&mut self, target: TargetId) {
        if let Some(&index) = self.update_index.get(&target) {
            if let Some(entry) = self.entries[index].as_mut() {
                entry.marked_for_deletion = true;
            }
        }
    }

    /// Unschedule everything: all timers, and update entries at every
    /// priority.
    pub fn unschedule_all(&mut self) {
        self.unschedule_all_with_min_priority(PRIORITY_SYSTEM);
    }

    /// Unschedule all timers, plus update entries that satisfy the
    /// min-priority threshold: the negative bucket is touched only when
    /// `min_priority < 0` (entries with `priority >= min_priority`), the
    /// zero bucket whenever `min_priority <= 0`, and the positive bucket
    /// for entries with `priority >= min_priority`.
    pub fn unschedule_all_with_min_priority(&mut self, min_priority: i32) {
        self.timers.clear();

        if min_priority < 0 {
            Self::mark_bucket(&mut self.entries, &self.neg, Some(min_priority));
        }
        if min_priority <= 0 {
            Self::mark_bucket(&mut self.entries, &self.zero, None);
        }
        Self::mark_bucket(&mut self.entries, &self.pos, Some(min_priority));
    }

    // ========================================================================
    // PAUSE / RESUME
    // ========================================================================

    /// Whether `target` has a paused timer slot or a paused update entry.
    ///
    /// A target that is registered but running, and a target that is not
    /// registered at all, both report `false`.
    pub fn is_target_paused(&self, target: TargetId) -> bool {
        if let Some(slot) = self.timers.get(&target) {
            return slot.paused;
        }
        if let Some(&index) = self.update_index.get(&target) {
            if let Some(entry) = self.entries[index].as_ref() {
                if !entry.marked_for_deletion {
                    return entry.paused;
                }
            }
        }
        false
    }

    /// Pause `target` wherever it is registered (timer slot and update
    /// entry). Unknown targets are silently skipped.
    pub fn pause_target(&mut self, target: TargetId) {
        self.set_target_paused(target, true);
    }

    /// Resume `target` wherever it is registered. Unknown targets are
    /// silently skipped.
    pub fn resume_target(&mut self, target: TargetId) {
        self.set_target_paused(target, false);
    }

    /// Pause every registered target and return the set of identities
    /// touched (hand the set to [`Scheduler::resume_targets`] to undo).
    pub fn pause_all_targets(&mut self) -> HashSet<TargetId> {
        self.pause_all_targets_with_min_priority(PRIORITY_SYSTEM)
    }

    /// Pause every timer slot unconditionally, plus update entries that
    /// satisfy the min-priority threshold (same bucket rules as
    /// [`Scheduler::unschedule_all_with_min_priority`]). Returns the set of
    /// identities touched.
    pub fn pause_all_targets_with_min_priority(&mut self, min_priority: i32) -> HashSet<TargetId> {
        let mut paused_targets = HashSet::new();

        for (&target, slot) in self.timers.iter_mut() {
            slot.paused = true;
            paused_targets.insert(target);
        }

        if min_priority < 0 {
            Self::pause_bucket(
                &mut self.entries,
                &self.neg,
                Some(min_priority),
                &mut paused_targets,
            );
        }
        if min_priority <= 0 {
            Self::pause_bucket(&mut self.entries, &self.zero, None, &mut paused_targets);
        }
        Self::pause_bucket(
            &mut self.entries,
            &self.pos,
            Some(min_priority),
            &mut paused_targets,
        );

        paused_targets
    }

    /// Resume every target in the set, wherever each is found.
    pub fn resume_targets(&mut self, targets: &HashSet<TargetId>) {
        for &target in targets {
            self.resume_target(target);
        }
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Whether `target` has any timers registered.
    pub fn has_timers(&self, target: TargetId) -> bool {
        self.timers.contains_key(&target)
    }

    /// Whether `target` has a live (not marked for deletion) update entry.
    pub fn is_update_scheduled(&self, target: TargetId) -> bool {
        self.update_index.get(&target).is_some_and(|&index| {
            self.entries[index]
                .as_ref()
                .is_some_and(|e| !e.marked_for_deletion)
        })
    }

    // ========================================================================
    // DISPATCH
    // ========================================================================

    /// Run one dispatch tick: update callbacks in bucket order (negative,
    /// zero, positive), then every unpaused timer slot. Exhausted timers,
    /// emptied slots, and update entries marked for deletion are removed at
    /// the end of the tick.
    pub fn update(&mut self, dt: f32) {
        let dt = dt * self.time_scale;

        Self::run_bucket(&mut self.entries, &self.neg, dt);
        Self::run_bucket(&mut self.entries, &self.zero, dt);
        Self::run_bucket(&mut self.entries, &self.pos, dt);

        let mut emptied: Vec<TargetId> = Vec::new();
        for (&target, slot) in self.timers.iter_mut() {
            if slot.paused {
                continue;
            }
            let mut index = 0;
            while index < slot.timers.len() {
                let tick = slot.timers[index].update(dt);
                if let Some(at) = tick.fired {
                    let handle = slot.timers[index].script_handler();
                    if handle != 0 {
                        if let Some(dispatch) = self.script_dispatch.as_mut() {
                            dispatch(handle, at);
                        }
                    }
                }
                if tick.finished {
                    // Remove at the cursor; the next timer shifts into
                    // this index and is visited on the next pass.
                    slot.timers.remove(index);
                } else {
                    index += 1;
                }
            }
            if slot.timers.is_empty() {
                emptied.push(target);
            }
        }
        for target in emptied {
            self.timers.remove(&target);
        }

        self.sweep_marked();
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    fn bucket_for(&self, priority: i32) -> &Vec<usize> {
        match priority.cmp(&0) {
            std::cmp::Ordering::Less => &self.neg,
            std::cmp::Ordering::Equal => &self.zero,
            std::cmp::Ordering::Greater => &self.pos,
        }
    }

    fn bucket_for_mut(&mut self, priority: i32) -> &mut Vec<usize> {
        match priority.cmp(&0) {
            std::cmp::Ordering::Less => &mut self.neg,
            std::cmp::Ordering::Equal => &mut self.zero,
            std::cmp::Ordering::Greater => &mut self.pos,
        }
    }

    fn set_target_paused(&mut self, target: TargetId, paused: bool) {
        if let Some(slot) = self.timers.get_mut(&target) {
            slot.paused = paused;
        }
        if let Some(&index) = self.update_index.get(&target) {
            if let Some(entry) = self.entries[index].as_mut() {
                if !entry.marked_for_deletion {
                    entry.paused = paused;
                }
            }
        }
    }

    fn run_bucket(entries: &mut [Option<UpdateEntry>], bucket: &[usize], dt: f32) {
        for &index in bucket {
            if let Some(entry) = entries[index].as_mut() {
                if !entry.paused && !entry.marked_for_deletion {
                    (entry.callback)(dt);
                }
            }
        }
    }

    fn pause_bucket(
        entries: &mut [Option<UpdateEntry>],
        bucket: &[usize],
        min_priority: Option<i32>,
        out: &mut HashSet<TargetId>,
    ) {
        for &index in bucket {
            if let Some(entry) = entries[index].as_mut() {
                if entry.marked_for_deletion {
                    continue;
                }
                if min_priority.is_none_or(|min| entry.priority >= min) {
                    entry.paused = true;
                    out.insert(entry.target);
                }
            }
        }
    }

    fn mark_bucket(
        entries: &mut [Option<UpdateEntry>],
        bucket: &[usize],
        min_priority: Option<i32>,
    ) {
        for &index in bucket {
            if let Some(entry) = entries[index].as_mut() {
                if min_priority.is_none_or(|min| entry.priority >= min) {
                    entry.marked_for_deletion = true;
                }
            }
        }
    }

    /// Immediate removal, used when reviving a marked entry with a new
    /// binding. Everything else goes through the deferred sweep.
    fn remove_entry(&mut self, index: usize, target: TargetId) {
        self.neg.retain(|&i| i != index);
        self.zero.retain(|&i| i != index);
        self.pos.retain(|&i| i != index);
        self.entries[index] = None;
        self.free_slots.push(index);
        self.update_index.remove(&target);
    }

    /// End-of-tick sweep: physically remove entries marked for deletion.
    fn sweep_marked(&mut self) {
        let mut dead: Vec<(usize, TargetId)> = Vec::new();
        for (index, slot) in self.entries.iter().enumerate() {
            if let Some(entry) = slot {
                if entry.marked_for_deletion {
                    dead.push((index, entry.target));
                }
            }
        }
        if dead.is_empty() {
            return;
        }

        Self::drop_marked(&mut self.neg, &self.entries);
        Self::drop_marked(&mut self.zero, &self.entries);
        Self::drop_marked(&mut self.pos, &self.entries);

        for (index, target) in dead {
            self.entries[index] = None;
            self.free_slots.push(index);
            self.update_index.remove(&target);
        }
    }

    fn drop_marked(bucket: &mut Vec<usize>, entries: &[Option<UpdateEntry>]) {
        bucket.retain(|&index| {
            entries[index]
                .as_ref()
                .is_some_and(|e| !e.marked_for_deletion)
        });
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
