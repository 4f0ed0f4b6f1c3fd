//! The scripted value prober and the counting pattern loop.
//!
//! These produce a distinguishable memory trace per branch taken, for
//! differential comparison of comparison/arithmetic codegen. The script is
//! literal: guards that can never fire are kept on purpose so the harness
//! can check what a compiler does with them, and the guard operands pass
//! through `black_box` so the comparisons reach the generated code instead
//! of being folded away.

use core::hint::black_box;

use crate::sink::WordSink;

/// Seed for the sequential-value section of the script.
pub const PROBE_SEED: u32 = 0x1122_3344;

/// Number of sequential seed-derived writes.
pub const SEQ_WRITES: usize = 5;

/// Iterations of the pattern loop.
pub const PATTERN_WRITES: u32 = 10;

/// Runs the value script against `sink`.
///
/// Trace for the fixed seed: `42`, five sequential values from the seed,
/// then one sentinel per guard that holds (`0xcafe2`, `0xcafe4`, `0xcafe6`).
pub fn run_value_script(sink: &mut impl WordSink) {
    sink.push(42);

    let mut val = PROBE_SEED as i32;
    for _ in 0..SEQ_WRITES {
        sink.push(val as u32);
        val += 1;
    }

    // Signed comparisons of the seed against itself. Only equality holds;
    // the two strict guards stay in the script as never-taken branches.
    let val = black_box(PROBE_SEED as i32);
    if val > PROBE_SEED as i32 {
        sink.push(0xdead_beef);
    }
    if val < PROBE_SEED as i32 {
        sink.push(0x000d_ead1);
    }
    if val == PROBE_SEED as i32 {
        sink.push(0x000c_afe2);
    }

    // Same bit pattern both ways: 0xffff_0000 is negative as an i32, so
    // only the `< -1` guard holds here.
    let val = black_box(0xffff_0000_u32 as i32);
    if val > -1 {
        sink.push(0x000c_afe3);
    }
    if val < -1 {
        sink.push(0x000c_afe4);
    }
    if val == -1 {
        sink.push(0x000c_afe5);
    }

    // Unsigned view of the same bits is large, so only `>` holds.
    let unval = black_box(val as u32);
    if unval > 0xfff0_0000 {
        sink.push(0x000c_afe6);
    }
    if unval < 0xfff0_0000 {
        sink.push(0x000c_afe7);
    }
    if unval == 0xfff0_0000 {
        sink.push(0x000c_afe8);
    }
}

/// Runs the counting pattern loop against `sink`: exactly
/// [`PATTERN_WRITES`] writes, value at index `i` is `(0xcafe << 4) + i`.
pub fn run_pattern_loop(sink: &mut impl WordSink) {
    for i in 0..PATTERN_WRITES {
        sink.push((0xcafe << 4) + i);
    }
}
