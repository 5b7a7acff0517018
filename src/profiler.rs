//! Checkpoint profiler state machine.
//!
//! ```text
//!            begin()                 end()
//!   Idle ───────────────► Recording ───────► Idle (report printed)
//!                          │    ▲
//!                          └────┘ event() / begin() restarts
//! ```
//!
//! The state is informational: `event()` appends and `end()` reports whatever the log
//! holds, whether or not a sequence is open.
//!
//! A profiler whose counter is missing, or whose core clock is below 1 MHz, stays
//! `Disabled`: init prints one diagnostic and every later call does nothing.
//!
//! # Interrupts
//!
//! Only the counter reset in `begin()` runs with interrupts masked. The measured
//! sequence itself runs with interrupts enabled, so the report includes real
//! interrupt latency.

use core::fmt::Write;

use crate::config::Config;
use crate::critical::IrqGuard;
use crate::error::ProfileError;
use crate::report::{self, EOL};
use crate::sequence::{Event, Session, State};
use crate::tick::TickSource;

/// Single-sequence checkpoint profiler.
///
/// Owns the tick source and the output sink. Create it once at bring-up with
/// [`Profiler::init`] and keep it for the lifetime of the program.
pub struct Profiler<T: TickSource, W: Write> {
    ticks: T,
    sink: W,
    // None when disabled
    config: Option<Config>,
    recording: bool,
    session: Session,
}

impl<T: TickSource, W: Write> Profiler<T, W> {
    /// Set up the counter and the timing divisor.
    ///
    /// Must be called once, before any measurement. Failures are printed to `sink`
    /// and leave the profiler disabled.
    pub fn init(
        core_clock_hz: u32,
        ticks: T,
        sink: W,
    ) -> Self {
        let mut profiler = Self {
            ticks,
            sink,
            config: None,
            recording: false,
            session: Session::new(),
        };

        if !profiler.ticks.supported() {
            profiler.diagnose(ProfileError::Unsupported);
            return profiler;
        }

        match Config::from_core_clock(core_clock_hz) {
            Ok(config) => {
                profiler.ticks.enable();
                profiler.config = Some(config);
                log_debug!("Profiler ready: {} ticks/us", config.ticks_per_us());
            }
            Err(err) => profiler.diagnose(err),
        }

        profiler
    }

    /// Start a new sequence, discarding any unfinished one.
    ///
    /// Masks interrupts only while the counter is reset and restarted.
    pub fn begin(
        &mut self,
        name: &'static str,
    ) {
        if self.config.is_none() {
            return;
        }

        {
            let _irq = IrqGuard::acquire();
            self.ticks.reset();
            self.session.restart(name);
            self.ticks.start();
        }

        self.recording = true;
        log_debug!("Profiling {=str}", name);
    }

    /// Record a checkpoint at the current counter value.
    pub fn event(
        &mut self,
        name: &'static str,
    ) {
        if let Err(err) = self.capture(name) {
            self.diagnose(err);
        }
    }

    /// Stop the counter and print the report.
    ///
    /// The events stay in the log until the next `begin()`, so calling `end()` again
    /// prints the same table (plus any events appended since).
    pub fn end(&mut self) {
        let Some(config) = self.config else {
            return;
        };
        // Counter and state untouched: more events may still be recorded
        if self.session.is_empty() {
            self.diagnose(ProfileError::NoEvents);
            return;
        }

        self.ticks.stop();
        self.recording = false;
        log_debug!("Sequence {=str}: {} events", self.session.name(), self.session.len());

        // Sink is assumed infallible
        report::render(&mut self.sink, &self.session, config.ticks_per_us()).ok();
    }

    fn capture(
        &mut self,
        name: &'static str,
    ) -> Result<(), ProfileError> {
        if self.config.is_none() {
            return Ok(());
        }
        // Checked before reading so a dropped event costs no counter access
        if self.session.is_full() {
            return Err(ProfileError::LogFull);
        }

        let timestamp = self.ticks.read();
        self.session.push(Event::new(name, timestamp))
    }

    fn diagnose(
        &mut self,
        err: ProfileError,
    ) {
        log_warn!("{}", err);
        write!(self.sink, "{err}{EOL}").ok();
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        match (self.config, self.recording) {
            (None, _) => State::Disabled,
            (Some(_), false) => State::Idle,
            (Some(_), true) => State::Recording,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool { self.config.is_some() }

    /// Name of the current (or last) sequence.
    #[inline]
    pub fn name(&self) -> &'static str { self.session.name() }

    /// Checkpoints of the current (or last) sequence.
    #[inline]
    pub fn events(&self) -> &[Event] { self.session.events() }

    /// Tick divisor, 0 when disabled.
    #[inline]
    pub fn ticks_per_us(&self) -> u32 { self.config.map_or(0, Config::ticks_per_us) }

    /// Give back the tick source and the sink.
    pub fn release(self) -> (T, W) { (self.ticks, self.sink) }
}

// =============================================================================
// Tests
// =============================================================================
