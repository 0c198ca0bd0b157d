//! Shared test infrastructure for frame-timer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use frame_timer::{OnComplete, TickDuration, TimerSpawner};
use std::cell::Cell;
use std::rc::Rc;

// ============================================================================
// Mock Tick Duration
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TickDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn saturating_add(self, other: Self) -> Self {
        TestDuration(self.0.saturating_add(other.0))
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

// ============================================================================
// Recording Handlers
// ============================================================================

/// Shared completion counter observable from outside the scheduler
pub fn counter() -> Rc<Cell<u32>> {
    Rc::new(Cell::new(0))
}

/// Handler covering the completion behaviors the tests exercise.
///
/// All timers in one scheduler share a handler type, so scene-style variety
/// is modeled as enum variants, dispatched in `on_complete`.
pub enum SceneHandler {
    /// Bump a shared counter.
    Count(Rc<Cell<u32>>),

    /// Bump `fired`, then register a follow-up `Count` timer on the same
    /// scheduler from inside the completion.
    Chain {
        fired: Rc<Cell<u32>>,
        follow_up: TestDuration,
        follow_up_fired: Rc<Cell<u32>>,
    },
}

impl<const MAX: usize> OnComplete<TestDuration, MAX> for SceneHandler {
    fn on_complete(&mut self, spawner: &mut TimerSpawner<'_, TestDuration, Self, MAX>) {
        match self {
            SceneHandler::Count(fired) => {
                fired.set(fired.get() + 1);
            }
            SceneHandler::Chain {
                fired,
                follow_up,
                follow_up_fired,
            } => {
                fired.set(fired.get() + 1);
                spawner
                    .run_timer(*follow_up, SceneHandler::Count(follow_up_fired.clone()))
                    .expect("follow-up registration should fit");
            }
        }
    }
}
