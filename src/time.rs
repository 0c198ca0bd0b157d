//! Time abstraction trait for host-agnostic tick durations.

/// Trait abstraction for the duration type carried by each tick.
///
/// The scheduler never samples a clock; the host measures frame time and
/// pushes it in. This trait lets the core stay generic over how that time is
/// represented: `core::time::Duration`, integer milliseconds on embedded
/// targets, or simulated-time units.
pub trait TickDuration: Copy + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Saturating addition (caps at the type's maximum).
    fn saturating_add(self, other: Self) -> Self;

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self;
}

impl TickDuration for core::time::Duration {
    const ZERO: Self = core::time::Duration::ZERO;

    fn saturating_add(self, other: Self) -> Self {
        core::time::Duration::saturating_add(self, other)
    }

    fn saturating_sub(self, other: Self) -> Self {
        core::time::Duration::saturating_sub(self, other)
    }
}
