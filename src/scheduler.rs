//! Frame-driven timer scheduler.
//!
//! Provides [`TimerScheduler`], which owns a collection of active [`Timer`]s,
//! advances all of them once per host tick, invokes completion handlers, and
//! sweeps finished timers out of the active set. Also defines the
//! [`OnComplete`] trait for completion handlers and the [`TimerSpawner`]
//! through which handlers register new timers mid-tick.

use crate::command::{TimerAction, TimerCommand};
use crate::time::TickDuration;
use crate::timer::{Timer, TimerError, TimerTick};
use heapless::Vec;

/// An identifier for a timer registered with a scheduler.
///
/// Returned by [`TimerScheduler::run`] and [`TimerScheduler::run_timer`] so
/// callers can pause, resume, or inspect the timer later. Ids are allocated
/// by the scheduler and become invalid once the timer finishes and is swept.
///
/// Ids are drawn from a wrapping 32-bit counter, so an id may be reissued
/// after 2^32 registrations on the same scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerId(u32);

/// Errors that can occur during scheduler operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SchedulerError {
    /// The scheduler is full and cannot accept more timers.
    SchedulerFull,

    /// The specified timer does not exist in the scheduler.
    ///
    /// Either the id was never issued by this scheduler, or the timer has
    /// finished and been swept out of the active set.
    UnknownTimer(TimerId),

    /// A timer operation failed.
    Timer(TimerError),
}

impl core::fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SchedulerError::SchedulerFull => {
                write!(f, "scheduler is full, cannot register more timers")
            }
            SchedulerError::UnknownTimer(id) => {
                write!(f, "timer {} does not exist in scheduler", id.0)
            }
            SchedulerError::Timer(err) => {
                write!(f, "timer error: {}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SchedulerError {}

impl From<TimerError> for SchedulerError {
    fn from(err: TimerError) -> Self {
        SchedulerError::Timer(err)
    }
}

/// Trait for timer completion handlers.
///
/// Implement this for the type that reacts to timers completing. The handler
/// is invoked synchronously inside [`TimerScheduler::tick`], exactly once per
/// run cycle, when its timer's elapsed time first reaches the target
/// duration.
///
/// The `spawner` parameter is the re-entrancy seam: handlers may register
/// new timers on the scheduler that is currently advancing them. Timers
/// registered this way become active on the next tick; they are never
/// advanced or swept during the tick that spawned them.
///
/// A no-op implementation is provided for `()`, for schedulers whose timers
/// are only ever polled through their handles.
///
/// # Type Parameters
/// * `D` - Tick duration type
/// * `MAX_TIMERS` - Capacity of the owning scheduler
pub trait OnComplete<D: TickDuration, const MAX_TIMERS: usize>: Sized {
    /// Invoked when the timer's elapsed time first reaches its duration.
    fn on_complete(&mut self, spawner: &mut TimerSpawner<'_, D, Self, MAX_TIMERS>);
}

impl<D: TickDuration, const MAX_TIMERS: usize> OnComplete<D, MAX_TIMERS> for () {
    fn on_complete(&mut self, _spawner: &mut TimerSpawner<'_, D, Self, MAX_TIMERS>) {}
}

struct Entry<D: TickDuration, H> {
    id: TimerId,
    timer: Timer<D, H>,
}

/// Registration access handed to completion handlers during a tick.
///
/// Borrows only the scheduler's pending buffer, so registering here cannot
/// disturb the in-progress traversal of the active collection. Entries are
/// merged into the active set after the current tick's sweep.
pub struct TimerSpawner<'a, D: TickDuration, H, const MAX_TIMERS: usize> {
    pending: &'a mut Vec<Entry<D, H>, MAX_TIMERS>,
    next_id: &'a mut u32,
    /// Active timers not yet known to be finished this tick. Finished ones
    /// will be swept before the pending buffer is merged, so their slots
    /// count as free.
    live: usize,
}

impl<'a, D: TickDuration, H, const MAX_TIMERS: usize> TimerSpawner<'a, D, H, MAX_TIMERS> {
    /// Registers a timer to become active on the next tick.
    ///
    /// The timer is reset unconditionally, restarting it from zero.
    ///
    /// # Errors
    /// * `SchedulerFull` - No capacity remains once this tick's sweep completes
    pub fn run(&mut self, mut timer: Timer<D, H>) -> Result<TimerId, SchedulerError> {
        if self.live + self.pending.len() >= MAX_TIMERS {
            return Err(SchedulerError::SchedulerFull);
        }

        timer.reset();
        let id = allocate_id(self.next_id);
        // Capacity checked above; the pending buffer is at most MAX_TIMERS.
        let _ = self.pending.push(Entry { id, timer });
        Ok(id)
    }

    /// Constructs a timer and registers it to become active on the next tick.
    ///
    /// # Errors
    /// * `Timer(InvalidDuration)` - `duration` is zero or negative
    /// * `SchedulerFull` - No capacity remains once this tick's sweep completes
    pub fn run_timer(&mut self, duration: D, handler: H) -> Result<TimerId, SchedulerError> {
        self.run(Timer::with_handler(duration, handler)?)
    }
}

fn allocate_id(next_id: &mut u32) -> TimerId {
    let id = TimerId(*next_id);
    *next_id = next_id.wrapping_add(1);
    id
}

/// Owns and advances a collection of active timers.
///
/// The host calls [`tick`](TimerScheduler::tick) once per frame with the
/// elapsed time since the previous frame. Every active timer is advanced in
/// insertion order; timers that complete have their handler invoked
/// synchronously, and are removed in a single sweep after all advancements
/// for the tick. Single-threaded and non-blocking throughout: all mutation
/// happens inside the `tick` call stack.
///
/// Storage is a fixed-capacity `heapless` vector, so registration can fail
/// with [`SchedulerError::SchedulerFull`] rather than allocating.
///
/// # Type Parameters
/// * `D` - Tick duration type
/// * `H` - Completion handler type (must be the same for all timers in one
///   scheduler; use an enum to dispatch between different reactions)
/// * `MAX_TIMERS` - Maximum number of timers this scheduler can hold
pub struct TimerScheduler<D: TickDuration, H, const MAX_TIMERS: usize> {
    active: Vec<Entry<D, H>, MAX_TIMERS>,
    pending: Vec<Entry<D, H>, MAX_TIMERS>,
    next_id: u32,
}

impl<D, H, const MAX_TIMERS: usize> TimerScheduler<D, H, MAX_TIMERS>
where
    D: TickDuration,
    H: OnComplete<D, MAX_TIMERS>,
{
    /// Creates a new empty scheduler.
    pub fn new() -> Self {
        Self {
            active: Vec::new(),
            pending: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers a timer with the scheduler.
    ///
    /// The timer is reset unconditionally, restarting it from zero even if
    /// it was previously advanced or finished. It is guaranteed to be active
    /// for the next tick. Timers are moved in by value, so the same timer
    /// object cannot be registered twice.
    ///
    /// # Errors
    /// * `SchedulerFull` - The scheduler is at capacity
    pub fn run(&mut self, mut timer: Timer<D, H>) -> Result<TimerId, SchedulerError> {
        if self.active.is_full() {
            return Err(SchedulerError::SchedulerFull);
        }

        timer.reset();
        let id = allocate_id(&mut self.next_id);
        let _ = self.active.push(Entry { id, timer });
        Ok(id)
    }

    /// Constructs a timer and registers it with the scheduler.
    ///
    /// The returned id can be used to pause, resume, or inspect the timer
    /// until it finishes and is swept.
    ///
    /// # Errors
    /// * `Timer(InvalidDuration)` - `duration` is zero or negative
    /// * `SchedulerFull` - The scheduler is at capacity
    pub fn run_timer(&mut self, duration: D, handler: H) -> Result<TimerId, SchedulerError> {
        self.run(Timer::with_handler(duration, handler)?)
    }

    /// Advances all active timers by `dt`.
    ///
    /// Timers are advanced in insertion order. A timer crossing its target
    /// duration has its completion handler invoked immediately, before the
    /// next timer is advanced. After all advancements, finished timers are
    /// removed in a single sweep, and timers registered by handlers during
    /// this tick are merged into the active set.
    pub fn tick(&mut self, dt: D) {
        let Self {
            active,
            pending,
            next_id,
        } = self;

        let active_len = active.len();
        let mut finished = 0;

        for entry in active.iter_mut() {
            if entry.timer.advance(dt) == TimerTick::JustFinished {
                finished += 1;
                if let Some(handler) = entry.timer.handler_mut() {
                    let mut spawner = TimerSpawner {
                        pending: &mut *pending,
                        next_id: &mut *next_id,
                        live: active_len - finished,
                    };
                    handler.on_complete(&mut spawner);
                }
            }
        }

        // Sweep, then merge: timers spawned during this tick must not be
        // advanced or swept until the next one.
        active.retain(|entry| !entry.timer.has_finished());

        // Spawner capacity accounting guarantees these pushes cannot fail.
        for entry in core::mem::take(pending) {
            let _ = active.push(entry);
        }
    }

    /// Routes a queued command to the timer it targets.
    ///
    /// This is a convenience method for command-based control, allowing
    /// [`TimerCommand`]s to be dispatched without matching on the action
    /// type manually.
    ///
    /// # Errors
    /// Returns `UnknownTimer` if the command's id is not in the active set.
    pub fn handle_command(&mut self, command: TimerCommand) -> Result<(), SchedulerError> {
        match command.action {
            TimerAction::Pause => self.pause(command.timer_id),
            TimerAction::Resume => self.resume(command.timer_id),
            TimerAction::Restart => self.restart(command.timer_id),
        }
    }

    /// Pauses the specified timer. It stays registered but accumulates no
    /// time until resumed.
    ///
    /// # Errors
    /// Returns `UnknownTimer` if the id is not in the active set.
    pub fn pause(&mut self, id: TimerId) -> Result<(), SchedulerError> {
        self.timer_mut(id).map(Timer::pause)
    }

    /// Resumes the specified timer from its paused elapsed value.
    ///
    /// # Errors
    /// Returns `UnknownTimer` if the id is not in the active set.
    pub fn resume(&mut self, id: TimerId) -> Result<(), SchedulerError> {
        self.timer_mut(id).map(Timer::resume)
    }

    /// Restarts the specified timer from zero for a new run cycle.
    ///
    /// # Errors
    /// Returns `UnknownTimer` if the id is not in the active set.
    pub fn restart(&mut self, id: TimerId) -> Result<(), SchedulerError> {
        self.timer_mut(id).map(Timer::reset)
    }

    /// Returns a reference to the specified timer.
    ///
    /// # Errors
    /// Returns `UnknownTimer` if the id is not in the active set.
    pub fn timer(&self, id: TimerId) -> Result<&Timer<D, H>, SchedulerError> {
        self.active
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.timer)
            .ok_or(SchedulerError::UnknownTimer(id))
    }

    /// Returns a mutable reference to the specified timer.
    ///
    /// # Errors
    /// Returns `UnknownTimer` if the id is not in the active set.
    pub fn timer_mut(&mut self, id: TimerId) -> Result<&mut Timer<D, H>, SchedulerError> {
        self.active
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.timer)
            .ok_or(SchedulerError::UnknownTimer(id))
    }

    /// Returns true if the scheduler contains a timer with the given id.
    pub fn contains(&self, id: TimerId) -> bool {
        self.active.iter().any(|entry| entry.id == id)
    }

    /// Returns the number of timers currently in the scheduler.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns true if the scheduler contains no timers.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns the maximum number of timers this scheduler can hold.
    pub fn capacity(&self) -> usize {
        MAX_TIMERS
    }
}

impl<D, H, const MAX_TIMERS: usize> Default for TimerScheduler<D, H, MAX_TIMERS>
where
    D: TickDuration,
    H: OnComplete<D, MAX_TIMERS>,
{
    fn default() -> Self {
        Self::new()
    }
}
