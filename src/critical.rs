//! Scoped interrupt masking.
//!
//! `begin()` resets and restarts the cycle counter inside an [`IrqGuard`] so an
//! interrupt handler cannot observe (or profile against) a half-initialized zero
//! point. The guard is dropped right after the counter starts: interrupts stay
//! enabled while the measured workload runs.

/// Interrupts are masked for as long as this guard lives.
///
/// On drop interrupts are re-enabled only if they were enabled when the guard was
/// acquired, so nesting inside an existing critical section is safe.
#[must_use = "interrupts are unmasked again as soon as the guard is dropped"]
pub struct IrqGuard {
    #[cfg_attr(not(target_arch = "arm"), allow(dead_code))]
    was_active: bool,
}

impl IrqGuard {
    /// Mask all maskable interrupts (`cpsid i`).
    #[inline]
    pub fn acquire() -> Self {
        #[cfg(target_arch = "arm")]
        {
            let was_active = cortex_m::register::primask::read().is_active();
            cortex_m::interrupt::disable();
            Self { was_active }
        }
        #[cfg(not(target_arch = "arm"))]
        {
            #[cfg(test)]
            host::enter();
            Self { was_active: true }
        }
    }
}

impl Drop for IrqGuard {
    #[inline]
    fn drop(&mut self) {
        #[cfg(target_arch = "arm")]
        if self.was_active {
            // SAFETY: restores the interrupt state observed in `acquire`
            unsafe { cortex_m::interrupt::enable() };
        }
        #[cfg(all(not(target_arch = "arm"), test))]
        host::exit();
    }
}

/// Mask depth tracking so host tests can see when the guard is held.
#[cfg(all(not(target_arch = "arm"), test))]
pub(crate) mod host {
    use std::cell::Cell;

    thread_local! {
        static DEPTH: Cell<u32> = const { Cell::new(0) };
    }

    pub fn enter() { DEPTH.with(|d| d.set(d.get() + 1)); }

    pub fn exit() { DEPTH.with(|d| d.set(d.get().saturating_sub(1))); }

    /// True while at least one guard is alive on this thread.
    pub fn is_masked() -> bool { DEPTH.with(Cell::get) > 0 }
}

// =============================================================================
// Tests
// =============================================================================
