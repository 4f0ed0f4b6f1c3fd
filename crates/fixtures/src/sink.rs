//! Append-only sinks over fixed memory windows.
//!
//! All raw-address arithmetic for the fixtures lives here: a fixture
//! constructs one `MmioWindow` per hardware window and pushes words through
//! it. The cursor only moves forward and the declared capacity is enforced,
//! so a runaway writer faults instead of corrupting the neighboring window.

/// Append-only sink of 32-bit words.
pub trait WordSink {
    fn push(&mut self, word: u32);
}

/// Sequential volatile writer over a fixed memory-mapped window.
pub struct MmioWindow {
    next: *mut u32,
    remaining: usize,
}

impl MmioWindow {
    /// # Safety
    ///
    /// `base` must be the start of a region of at least `capacity_words`
    /// 32-bit words that is writable for the lifetime of the window and
    /// not aliased by safe code.
    pub unsafe fn new(base: usize, capacity_words: usize) -> Self {
        Self {
            next: base as *mut u32,
            remaining: capacity_words,
        }
    }
}

impl WordSink for MmioWindow {
    fn push(&mut self, word: u32) {
        assert!(self.remaining > 0, "write past end of memory window");
        // SAFETY: `new` vouched for `remaining` more writable words at `next`.
        unsafe {
            core::ptr::write_volatile(self.next, word);
            self.next = self.next.add(1);
        }
        self.remaining -= 1;
    }
}

/// Dumps a sequence to a sink, one word per element, in order.
///
/// The sort fixture uses this twice, pointing at the pre-sort and post-sort
/// windows.
pub fn dump_words(seq: &[i32], sink: &mut impl WordSink) {
    for &value in seq {
        sink.push(value as u32);
    }
}

/// Recording sink for host-side golden-trace generation and tests.
#[cfg(any(test, feature = "std"))]
impl WordSink for Vec<u32> {
    fn push(&mut self, word: u32) {
        Vec::push(self, word);
    }
}
