//! Integration tests for Timer

mod common;
use common::*;

use frame_timer::{Timer, TimerError, TimerTick};

type SceneTimer = Timer<TestDuration, SceneHandler>;

#[test]
fn construction_rejects_zero_duration() {
    let result = SceneTimer::new(TestDuration(0));
    assert!(matches!(result, Err(TimerError::InvalidDuration)));
}

#[test]
fn fresh_timer_state() {
    let timer = SceneTimer::new(TestDuration(1000)).unwrap();

    assert!(timer.is_running());
    assert!(!timer.is_paused());
    assert!(!timer.has_finished());
    assert_eq!(timer.elapsed(), TestDuration(0));
    assert_eq!(timer.time_left(), TestDuration(1000));
    assert_eq!(timer.duration(), TestDuration(1000));
}

#[test]
fn elapsed_is_the_sum_of_partial_advances() {
    let mut timer = SceneTimer::new(TestDuration(1000)).unwrap();

    for _ in 0..4 {
        assert_eq!(timer.advance(TestDuration(200)), TimerTick::Ticking);
    }

    assert_eq!(timer.elapsed(), TestDuration(800));
    assert_eq!(timer.time_left(), TestDuration(200));
    assert!(!timer.has_finished());
}

#[test]
fn completion_fires_on_the_crossing_step() {
    let mut timer = SceneTimer::new(TestDuration(1000)).unwrap();

    assert_eq!(timer.advance(TestDuration(999)), TimerTick::Ticking);
    assert_eq!(timer.advance(TestDuration(1)), TimerTick::JustFinished);
    assert!(timer.has_finished());
    assert!(!timer.is_running());
}

#[test]
fn overshoot_clamps_and_reports_once() {
    let mut timer = SceneTimer::new(TestDuration(1000)).unwrap();

    assert_eq!(timer.advance(TestDuration(2000)), TimerTick::JustFinished);
    assert_eq!(timer.elapsed(), TestDuration(1000));
    assert_eq!(timer.time_left(), TestDuration(0));

    // No second JustFinished without an intervening reset
    assert_eq!(timer.advance(TestDuration(2000)), TimerTick::Idle);
    assert_eq!(timer.elapsed(), TestDuration(1000));
}

#[test]
fn pause_and_resume_preserve_elapsed() {
    let mut timer = SceneTimer::new(TestDuration(2000)).unwrap();

    timer.advance(TestDuration(1000));
    timer.pause();
    assert!(timer.is_paused());

    // Time does not accumulate while paused
    assert_eq!(timer.advance(TestDuration(5000)), TimerTick::Idle);
    assert_eq!(timer.elapsed(), TestDuration(1000));
    assert!(!timer.has_finished());

    timer.resume();
    assert_eq!(timer.advance(TestDuration(1000)), TimerTick::JustFinished);
    assert_eq!(timer.elapsed(), TestDuration(2000));
}

#[test]
fn resume_after_finish_does_not_reopen_the_timer() {
    let mut timer = SceneTimer::new(TestDuration(100)).unwrap();

    timer.advance(TestDuration(100));
    timer.resume();

    assert!(!timer.is_running());
    assert!(timer.has_finished());
    assert_eq!(timer.advance(TestDuration(100)), TimerTick::Idle);
}

#[test]
fn reset_starts_a_new_run_cycle() {
    let mut timer = SceneTimer::new(TestDuration(500)).unwrap();

    timer.advance(TestDuration(700));
    assert!(timer.has_finished());

    timer.reset();
    assert!(timer.is_running());
    assert!(!timer.has_finished());
    assert_eq!(timer.elapsed(), TestDuration(0));
    assert_eq!(timer.time_left(), TestDuration(500));

    // Overshoot from the previous cycle did not leak into this one
    assert_eq!(timer.advance(TestDuration(499)), TimerTick::Ticking);
    assert_eq!(timer.advance(TestDuration(1)), TimerTick::JustFinished);
}

#[test]
fn reset_also_restarts_a_paused_timer() {
    let mut timer = SceneTimer::new(TestDuration(500)).unwrap();

    timer.advance(TestDuration(200));
    timer.pause();
    timer.reset();

    assert!(timer.is_running());
    assert_eq!(timer.elapsed(), TestDuration(0));
}
