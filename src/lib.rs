#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Timer`**: A single countdown state machine with pause/resume and a one-shot completion handler
//! - **`TimerTick`**: Outcome of advancing a timer (`Idle`, `Ticking`, or `JustFinished`)
//! - **`TimerScheduler`**: Owns a collection of active timers, advances them once per host tick, and sweeps finished ones
//! - **`TimerId`**: Handle for pausing, resuming, or inspecting a registered timer
//! - **`OnComplete`**: Trait to implement for completion handlers
//! - **`TimerSpawner`**: Registration access handed to handlers so they can schedule new timers mid-tick
//! - **`TickDuration`**: Trait to implement for your tick duration type (implemented for `core::time::Duration`)
//! - **`TimerAction` / `TimerCommand`**: Queueable control messages for registered timers
//!
//! The host drives everything: it calls `TimerScheduler::tick(dt)` once per
//! frame with the elapsed time since the previous frame, and all timer state
//! changes and completion handlers run synchronously inside that call.

pub mod command;
pub mod scheduler;
pub mod time;
pub mod timer;

pub use command::{TimerAction, TimerCommand};
pub use scheduler::{OnComplete, SchedulerError, TimerId, TimerScheduler, TimerSpawner};
pub use time::TickDuration;
pub use timer::{Timer, TimerError, TimerTick};
