//! Profiler demo firmware for the Raspberry Pi Pico 2 (RP2350).
//!
//! Profiles a small startup-like sequence every two seconds and prints the report
//! over RTT (view with `probe-rs run` or `cargo run --release --features rp2350`).
//!
//! # Sequence
//!
//! - **led on**: GPIO25 driven high
//! - **spin**: busy loop of a fixed number of iterations
//! - **sleep**: async timer wait (other interrupts keep running)
//! - **led off**: GPIO25 driven low

#![no_std]
#![no_main]

use cortex_profile::{DefmtSink, Dwt, Profiler};
use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

/// Busy loop length for the "spin" checkpoint.
const SPIN_ITERATIONS: u32 = 10_000;

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"cortex-profile-demo"),
    embassy_rp::binary_info::rp_program_description!(c"DWT checkpoint profiler demo"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Profiler demo starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());
    let mut led = Output::new(p.PIN_25, Level::Low);

    let Some(dwt) = Dwt::take() else {
        error!("DWT already taken");
        return;
    };

    let core_clock_hz = embassy_rp::clocks::clk_sys_freq();
    info!("Core clock: {} Hz", core_clock_hz);

    let mut profiler = Profiler::init(core_clock_hz, dwt, DefmtSink::new());

    loop {
        profiler.begin("blink");

        led.set_high();
        profiler.event("led on");

        let mut acc: u32 = 0;
        for i in 0..SPIN_ITERATIONS {
            acc = core::hint::black_box(acc.wrapping_add(i));
        }
        core::hint::black_box(acc);
        profiler.event("spin");

        Timer::after_micros(500).await;
        profiler.event("sleep");

        led.set_low();
        profiler.event("led off");

        profiler.end();

        Timer::after_secs(2).await;
    }
}
