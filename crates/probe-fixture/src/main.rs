#![no_std]
#![no_main]
#![allow(clippy::empty_loop)]

use panic_halt as _;
use riscv_rt::entry;

use tracewin_fixtures::probe::{run_pattern_loop, run_value_script};
use tracewin_fixtures::sink::MmioWindow;
use tracewin_fixtures::{
    PROBE_PATTERN_BASE, PROBE_PATTERN_WORDS, PROBE_SCRIPT_BASE, PROBE_SCRIPT_WORDS,
};

#[entry]
fn main() -> ! {
    // SAFETY: the harness maps both dump windows as plain writable RAM.
    let mut script = unsafe { MmioWindow::new(PROBE_SCRIPT_BASE, PROBE_SCRIPT_WORDS) };
    run_value_script(&mut script);

    let mut pattern = unsafe { MmioWindow::new(PROBE_PATTERN_BASE, PROBE_PATTERN_WORDS) };
    run_pattern_loop(&mut pattern);

    // Deterministic "PC stuck" for the inspecting harness.
    loop {}
}
