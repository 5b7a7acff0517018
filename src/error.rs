//! Profiler diagnostics.
//!
//! Every condition is non-fatal. The public entry points absorb the error where it
//! is detected, write its message to the output sink and log it; callers never see
//! a status code.

use core::fmt;

/// Conditions reported through the output sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum ProfileError {
    /// The core has no cycle counter; the profiler stays disabled.
    Unsupported,
    /// Core clock below 1 MHz gives a zero tick divisor; the profiler stays disabled.
    ClockTooSlow,
    /// Event log is full; the checkpoint was dropped.
    LogFull,
    /// `end()` was called before any checkpoint was recorded.
    NoEvents,
}

impl ProfileError {
    /// One-line message written to the output sink.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Unsupported => "Cycle counter not supported.",
            Self::ClockTooSlow => "Core clock below 1 MHz.",
            Self::LogFull => "Profiler reached maximum number of events.",
            Self::NoEvents => "There are no events in profiler.",
        }
    }
}

impl fmt::Display for ProfileError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.message())
    }
}

// =============================================================================
// Tests
// =============================================================================
