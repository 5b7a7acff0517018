//! Output sinks for diagnostics and reports.
//!
//! The profiler writes through any [`core::fmt::Write`]. Two fixed-memory sinks are
//! provided:
//!
//! - `LineLog`: keeps the last lines in RAM (tests, on-screen display)
//! - `DefmtSink`: prints each line over RTT with `defmt` (ARM only)

#[cfg(target_arch = "arm")]
mod defmt_sink;
mod line_log;

#[cfg(target_arch = "arm")]
pub use defmt_sink::DefmtSink;
pub use line_log::{LineLog, ReportLog};
