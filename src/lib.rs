//! Checkpoint latency profiler for Cortex-M cores.
//!
//! Timestamps named checkpoints of a single execution sequence with the free-running
//! DWT cycle counter and prints a table of absolute and delta timings.
//!
//! ```ignore
//! let ticks = Dwt::take().unwrap();
//! let mut profiler = Profiler::init(150_000_000, ticks, DefmtSink::new());
//!
//! profiler.begin("boot");
//! profiler.event("clocks");
//! profiler.event("display");
//! profiler.end(); // prints the report
//! ```
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.
//!
//! # Compiling out
//!
//! Disable the default `enabled` feature and every `Profiler` entry point becomes an
//! empty inline function.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[macro_use]
mod log;

pub mod config;
pub mod critical;
pub mod error;
pub mod panel;
pub mod report;
pub mod sequence;
pub mod sink;
pub mod tick;

#[cfg(feature = "enabled")]
mod profiler;
#[cfg(not(feature = "enabled"))]
mod stub;

pub use config::{Config, MAX_EVENTS};
pub use error::ProfileError;
#[cfg(feature = "enabled")]
pub use profiler::Profiler;
pub use sequence::{Event, Session, State};
#[cfg(not(feature = "enabled"))]
pub use stub::Profiler;
#[cfg(target_arch = "arm")]
pub use sink::DefmtSink;
pub use sink::{LineLog, ReportLog};
#[cfg(target_arch = "arm")]
pub use tick::Dwt;
pub use tick::{SoftTicks, TickSource};
