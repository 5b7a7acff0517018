//! Cycle counter tick sources.
//!
//! [`TickSource`] is the seam between the profiler and the hardware. On Cortex-M the
//! `Dwt` source drives the Data Watchpoint and Trace (DWT) cycle counter (CYCCNT).
//! [`SoftTicks`] is a software counter with the same contract for host builds.
//!
//! # Overflow
//!
//! CYCCNT is a 32-bit counter that wraps at different intervals:
//! - 150 MHz: wraps every ~28.6 seconds (2^32 / 150M)
//! - 168 MHz: wraps every ~25.6 seconds
//! - 250 MHz: wraps every ~17.2 seconds
//!
//! `begin()` resets the counter to zero, so a sequence only wraps if it runs longer
//! than that.

/// Free-running cycle counter.
///
/// Call order: `supported()` once, `enable()` once, then any number of
/// `reset()`/`start()` ... `read()` ... `stop()` rounds.
pub trait TickSource {
    /// Whether the counter exists on this core.
    fn supported(&self) -> bool;

    /// Turn on the trace subsystem that hosts the counter. Idempotent.
    fn enable(&mut self);

    /// Set the count to zero. Call while stopped or right before `start()`.
    fn reset(&mut self);

    /// Count one tick per core clock cycle.
    fn start(&mut self);

    /// Stop counting; the current count is kept.
    fn stop(&mut self);

    /// Current count (32-bit, wraps).
    fn read(&self) -> u32;
}

impl<T: TickSource + ?Sized> TickSource for &mut T {
    #[inline]
    fn supported(&self) -> bool { (**self).supported() }

    #[inline]
    fn enable(&mut self) { (**self).enable(); }

    #[inline]
    fn reset(&mut self) { (**self).reset(); }

    #[inline]
    fn start(&mut self) { (**self).start(); }

    #[inline]
    fn stop(&mut self) { (**self).stop(); }

    #[inline]
    fn read(&self) -> u32 { (**self).read() }
}

// =============================================================================
// DWT Cycle Counter (Cortex-M3/M4/M7/M33)
// =============================================================================

#[cfg(target_arch = "arm")]
mod dwt {
    use core::ptr::{read_volatile, write_volatile};
    use core::sync::atomic::{AtomicBool, Ordering};

    use super::TickSource;

    /// DCB Debug Exception and Monitor Control Register.
    const DEMCR: *mut u32 = 0xE000_EDFC as *mut u32;
    /// DWT Control Register.
    const DWT_CTRL: *mut u32 = 0xE000_1000 as *mut u32;
    /// DWT Cycle Count Register.
    const DWT_CYCCNT: *mut u32 = 0xE000_1004 as *mut u32;

    /// DEMCR.TRCENA: global enable for all DWT and ITM features.
    const DEMCR_TRCENA: u32 = 1 << 24;
    /// DWT_CTRL.NOCYCCNT: set when the cycle counter is not implemented.
    const CTRL_NOCYCCNT: u32 = 1 << 25;
    /// DWT_CTRL.CYCCNTENA: counter increments while set.
    const CTRL_CYCCNTENA: u32 = 1 << 0;

    static TAKEN: AtomicBool = AtomicBool::new(false);

    /// Handle to the DWT cycle counter registers.
    ///
    /// The registers are process-wide, so only one handle is ever handed out.
    pub struct Dwt {
        _private: (),
    }

    impl Dwt {
        /// Take the cycle counter. Returns `None` on every call after the first.
        pub fn take() -> Option<Self> {
            if TAKEN.swap(true, Ordering::AcqRel) {
                None
            } else {
                Some(Self { _private: () })
            }
        }
    }

    impl TickSource for Dwt {
        fn supported(&self) -> bool {
            // SAFETY: DWT_CTRL is an always-mapped System Control Space register
            let ctrl = unsafe { read_volatile(DWT_CTRL) };
            ctrl & CTRL_NOCYCCNT == 0
        }

        fn enable(&mut self) {
            // SAFETY: read-modify-write of DEMCR owned by this singleton
            unsafe {
                let demcr = read_volatile(DEMCR);
                write_volatile(DEMCR, demcr | DEMCR_TRCENA);
            }
        }

        #[inline]
        fn reset(&mut self) {
            // SAFETY: CYCCNT is writable once TRCENA is set
            unsafe { write_volatile(DWT_CYCCNT, 0) };
        }

        #[inline]
        fn start(&mut self) {
            // SAFETY: read-modify-write of DWT_CTRL owned by this singleton
            unsafe {
                let ctrl = read_volatile(DWT_CTRL);
                write_volatile(DWT_CTRL, ctrl | CTRL_CYCCNTENA);
            }
        }

        #[inline]
        fn stop(&mut self) {
            // SAFETY: read-modify-write of DWT_CTRL owned by this singleton
            unsafe {
                let ctrl = read_volatile(DWT_CTRL);
                write_volatile(DWT_CTRL, ctrl & !CTRL_CYCCNTENA);
            }
        }

        #[inline]
        fn read(&self) -> u32 {
            // SAFETY: word-sized read of CYCCNT, atomic on Cortex-M
            unsafe { read_volatile(DWT_CYCCNT) }
        }
    }
}

#[cfg(target_arch = "arm")]
pub use dwt::Dwt;

// =============================================================================
// Software Counter
// =============================================================================

/// Software tick source for host builds, simulation and tests.
///
/// Ticks only move when [`SoftTicks::advance`] is called, and only while the
/// counter is both enabled and started, like the DWT counter.
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftTicks {
    unsupported: bool,
    enabled: bool,
    running: bool,
    count: u32,
}

impl SoftTicks {
    /// A supported, disabled, stopped counter at zero.
    pub const fn new() -> Self {
        Self {
            unsupported: false,
            enabled: false,
            running: false,
            count: 0,
        }
    }

    /// A counter that reports itself as missing.
    pub const fn unsupported() -> Self {
        Self {
            unsupported: true,
            ..Self::new()
        }
    }

    /// Let `ticks` core cycles elapse. Wraps like the 32-bit hardware counter.
    pub fn advance(
        &mut self,
        ticks: u32,
    ) {
        if self.enabled && self.running {
            self.count = self.count.wrapping_add(ticks);
        }
    }

    #[inline]
    pub const fn is_enabled(&self) -> bool { self.enabled }

    #[inline]
    pub const fn is_running(&self) -> bool { self.running }
}

impl TickSource for SoftTicks {
    fn supported(&self) -> bool { !self.unsupported }

    fn enable(&mut self) { self.enabled = true; }

    fn reset(&mut self) { self.count = 0; }

    fn start(&mut self) { self.running = true; }

    fn stop(&mut self) { self.running = false; }

    fn read(&self) -> u32 { self.count }
}

// =============================================================================
// Tests
// =============================================================================
