#![no_std]
#![no_main]
#![allow(clippy::empty_loop)]

use panic_halt as _;
use riscv_rt::entry;

use tracewin_fixtures::sink::{dump_words, MmioWindow};
use tracewin_fixtures::sort::quicksort;
use tracewin_fixtures::{SORT_AFTER_BASE, SORT_BEFORE_BASE, SORT_DATASET, SORT_WINDOW_WORDS};

#[entry]
fn main() -> ! {
    // Copied to the stack so the image needs no data section.
    let mut data = SORT_DATASET;

    // SAFETY: the harness maps both dump windows as plain writable RAM.
    let mut before = unsafe { MmioWindow::new(SORT_BEFORE_BASE, SORT_WINDOW_WORDS) };
    dump_words(&data, &mut before);

    quicksort(&mut data);

    let mut after = unsafe { MmioWindow::new(SORT_AFTER_BASE, SORT_WINDOW_WORDS) };
    dump_words(&data, &mut after);

    // Deterministic "PC stuck" for the inspecting harness.
    loop {}
}
