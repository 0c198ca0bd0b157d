//! Countdown timer state machine.
//!
//! Provides [`Timer`], a single countdown tracking elapsed time against a
//! target duration, with pause/resume and a one-shot completion handler.
//! Timers are usually owned by a [`TimerScheduler`](crate::TimerScheduler),
//! which advances them once per host tick and invokes their handlers, but
//! they work standalone as well: [`Timer::advance`] reports the completion
//! transition through its return value.

use crate::time::TickDuration;

/// Outcome of advancing a timer by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerTick {
    /// The timer is paused or already finished; no time was accumulated.
    Idle,

    /// Time was accumulated but the target duration has not been reached.
    Ticking,

    /// This advancement crossed the target duration.
    ///
    /// Reported at most once per run cycle (between a reset and the next
    /// completion), regardless of how far the tick overshot the duration.
    /// The owner should invoke the completion handler now.
    JustFinished,
}

/// Errors that can occur during timer construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// The target duration was zero or negative.
    ///
    /// A non-positive duration would produce a timer that is either already
    /// complete or never completes, so it is rejected at construction.
    InvalidDuration,
}

impl core::fmt::Display for TimerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimerError::InvalidDuration => {
                write!(f, "timer duration must be greater than zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimerError {}

/// A single countdown state machine.
///
/// Tracks elapsed time against an immutable target duration. A fresh timer
/// starts running with zero elapsed time; once the accumulated time reaches
/// the duration it clamps, stops, and reports [`TimerTick::JustFinished`]
/// exactly once. [`reset`](Timer::reset) restarts the same timer object for
/// reuse.
///
/// Invariants: elapsed time never exceeds the duration, and a finished timer
/// is never running.
///
/// # Type Parameters
/// * `D` - Tick duration type
/// * `H` - Completion handler type (see [`OnComplete`](crate::OnComplete));
///   stored but only invoked by the owning scheduler
pub struct Timer<D: TickDuration, H> {
    duration: D,
    elapsed: D,
    running: bool,
    finished: bool,
    handler: Option<H>,
}

impl<D: TickDuration, H> Timer<D, H> {
    /// Creates a running timer with no completion handler.
    ///
    /// # Errors
    /// * `InvalidDuration` - `duration` is zero or negative
    pub fn new(duration: D) -> Result<Self, TimerError> {
        if duration <= D::ZERO {
            return Err(TimerError::InvalidDuration);
        }

        Ok(Self {
            duration,
            elapsed: D::ZERO,
            running: true,
            finished: false,
            handler: None,
        })
    }

    /// Creates a running timer that invokes `handler` on completion.
    ///
    /// # Errors
    /// * `InvalidDuration` - `duration` is zero or negative
    pub fn with_handler(duration: D, handler: H) -> Result<Self, TimerError> {
        let mut timer = Self::new(duration)?;
        timer.handler = Some(handler);
        Ok(timer)
    }

    /// Restarts the timer for a new run cycle.
    ///
    /// Sets elapsed time to zero, marks the timer running and not finished.
    /// May be called at any time, including on a finished timer to reuse it.
    /// The duration and handler are untouched.
    pub fn reset(&mut self) {
        self.elapsed = D::ZERO;
        self.running = true;
        self.finished = false;
    }

    /// Advances the timer by `dt`.
    ///
    /// Does nothing while paused or finished. Otherwise accumulates elapsed
    /// time; when the total first reaches the target duration, the elapsed
    /// time is clamped to exactly the duration (overshoot does not leak into
    /// the next run cycle) and [`TimerTick::JustFinished`] is returned.
    pub fn advance(&mut self, dt: D) -> TimerTick {
        if !self.running {
            return TimerTick::Idle;
        }

        self.elapsed = self.elapsed.saturating_add(dt);

        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.running = false;
            self.finished = true;
            TimerTick::JustFinished
        } else {
            TimerTick::Ticking
        }
    }

    /// Pauses the timer. Elapsed time and completion state are untouched.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Resumes a paused timer.
    ///
    /// Accumulation continues from the paused elapsed value. No-op on a
    /// finished timer; use [`reset`](Timer::reset) to restart one.
    pub fn resume(&mut self) {
        if !self.finished {
            self.running = true;
        }
    }

    /// Returns true if the timer is currently accumulating time.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true if the timer is paused (stopped without having finished).
    pub fn is_paused(&self) -> bool {
        !self.running && !self.finished
    }

    /// Returns true if the timer has reached its target duration.
    pub fn has_finished(&self) -> bool {
        self.finished
    }

    /// Returns the accumulated elapsed time.
    pub fn elapsed(&self) -> D {
        self.elapsed
    }

    /// Returns the time remaining until completion. Never negative.
    pub fn time_left(&self) -> D {
        self.duration.saturating_sub(self.elapsed)
    }

    /// Returns the target duration.
    pub fn duration(&self) -> D {
        self.duration
    }

    /// Returns a mutable reference to the completion handler, if any.
    pub fn handler_mut(&mut self) -> Option<&mut H> {
        self.handler.as_mut()
    }
}
