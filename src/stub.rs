//! Compiled-out profiler.
//!
//! Same API as the real profiler with empty inline bodies, selected when the
//! `enabled` feature is off. The tick source and sink are only held so they can be
//! handed back by `release()`; nothing touches them.

use core::fmt::Write;

use crate::sequence::{Event, State};
use crate::tick::TickSource;

pub struct Profiler<T: TickSource, W: Write> {
    ticks: T,
    sink: W,
}

impl<T: TickSource, W: Write> Profiler<T, W> {
    #[inline(always)]
    pub fn init(
        _core_clock_hz: u32,
        ticks: T,
        sink: W,
    ) -> Self {
        Self { ticks, sink }
    }

    #[inline(always)]
    pub fn begin(
        &mut self,
        _name: &'static str,
    ) {
    }

    #[inline(always)]
    pub fn event(
        &mut self,
        _name: &'static str,
    ) {
    }

    #[inline(always)]
    pub fn end(&mut self) {}

    #[inline(always)]
    pub fn state(&self) -> State { State::Disabled }

    #[inline(always)]
    pub fn is_enabled(&self) -> bool { false }

    #[inline(always)]
    pub fn name(&self) -> &'static str { "" }

    #[inline(always)]
    pub fn events(&self) -> &[Event] { &[] }

    #[inline(always)]
    pub fn ticks_per_us(&self) -> u32 { 0 }

    pub fn release(self) -> (T, W) { (self.ticks, self.sink) }
}

// =============================================================================
// Tests
// =============================================================================
