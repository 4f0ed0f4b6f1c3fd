//! Shared logic for the TraceWin RV32 memory-trace fixtures.
//!
//! The fixture binaries externalize everything they compute by writing
//! 32-bit words to fixed memory-mapped windows, which an external harness
//! reads back after execution. This crate holds the window writer, the
//! quicksort under test, the scripted prober, and the memory map, so the
//! freestanding binaries stay thin and the same code paths can be driven
//! on the host to produce golden traces.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod probe;
pub mod sink;
pub mod sort;


/// RV32 memory map shared by the fixture binaries and the reference-trace
/// generator. The bases must stay bit-exact: the harness compares window
/// contents at these addresses.
pub const SORT_BEFORE_BASE: usize = 0x8000_0000;
pub const SORT_AFTER_BASE: usize = 0x8000_0030;
pub const PROBE_SCRIPT_BASE: usize = 0x8000_0000;
pub const PROBE_PATTERN_BASE: usize = 0x8000_0050;

/// Window capacities in 32-bit words, derived from the gaps in the map.
pub const SORT_WINDOW_WORDS: usize = 0x30 / 4;
pub const PROBE_SCRIPT_WORDS: usize = 0x50 / 4;
pub const PROBE_PATTERN_WORDS: usize = 10;

/// The dataset sorted by the quicksort fixture. The binary copies it to the
/// stack at runtime so the image carries no data section.
pub const SORT_DATASET: [i32; 7] = [
    0x0af3_7be7,
    0x7dd0_d4bf,
    0x4994_fe31,
    0x7e61_86cf,
    0x38e1_d337,
    0x2e95_48eb,
    0x1cbd_0f06,
];
