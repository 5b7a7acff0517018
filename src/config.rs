//! Profiler configuration.
//!
//! # Optimization: Compile-time Capacities
//!
//! The event log and every line buffer are sized by `const` values below, so the
//! profiler never allocates and its RAM footprint is known at link time.

use core::num::NonZeroU32;

use crate::error::ProfileError;

// =============================================================================
// Event Log
// =============================================================================

/// Maximum number of checkpoints recorded per sequence.
/// Further `event()` calls are dropped until the next `begin()`.
pub const MAX_EVENTS: usize = 16;

// =============================================================================
// Report Layout
// =============================================================================

/// Width of the left-justified event name column.
pub const NAME_WIDTH: usize = 25;

/// Width of the right-justified timestamp and delta columns (without " us").
pub const VALUE_WIDTH: usize = 12;

/// Longest event name a captured report keeps intact.
///
/// The report itself never cuts names; fixed-size line buffers cut the row at
/// [`LINE_LEN`] instead.
pub const MAX_NAME_LEN: usize = 40;

/// Longest buffered report line: a row carrying a [`MAX_NAME_LEN`] name.
///
/// "| " + name + " | " + value + " us | " + value + " us |"
pub const LINE_LEN: usize = 2 + MAX_NAME_LEN + 3 + VALUE_WIDTH + 6 + VALUE_WIDTH + 4;

/// Lines in one full report: title, rule, one row per event, trailing blank line.
pub const REPORT_LINES: usize = MAX_EVENTS + 3;

// =============================================================================
// Timing
// =============================================================================

/// Core clock ticks per microsecond are derived from the clock in Hz.
pub const HZ_PER_MHZ: u32 = 1_000_000;

/// Timing configuration fixed at init.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    ticks_per_us: NonZeroU32,
}

impl Config {
    /// Derive the tick divisor from the core clock.
    ///
    /// Clocks below 1 MHz would give a zero divisor and are rejected.
    pub const fn from_core_clock(core_clock_hz: u32) -> Result<Self, ProfileError> {
        match NonZeroU32::new(core_clock_hz / HZ_PER_MHZ) {
            Some(ticks_per_us) => Ok(Self { ticks_per_us }),
            None => Err(ProfileError::ClockTooSlow),
        }
    }

    /// Counter ticks per microsecond (never zero).
    #[inline]
    pub const fn ticks_per_us(self) -> u32 { self.ticks_per_us.get() }
}

// =============================================================================
// Tests
// =============================================================================
