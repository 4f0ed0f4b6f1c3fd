//! In-place Lomuto quicksort over signed 32-bit values.

/// Partitions `seq[low..=high]` around the pivot `seq[high]`.
///
/// Elements equal to the pivot land in the left segment (the `<=`
/// stable-left policy of the classic Lomuto scheme). Returns the final
/// pivot index. Callers guarantee `low <= high < seq.len()`.
pub fn partition(seq: &mut [i32], low: usize, high: usize) -> usize {
    let pivot = seq[high];
    // Next free slot of the `<= pivot` segment.
    let mut i = low;
    for j in low..high {
        if seq[j] <= pivot {
            seq.swap(i, j);
            i += 1;
        }
    }
    seq.swap(i, high);
    i
}

/// Sorts `seq` in place into non-decreasing signed order.
pub fn quicksort(seq: &mut [i32]) {
    if seq.len() > 1 {
        sort_range(seq, 0, seq.len() - 1);
    }
}

// Recurses on the sub-ranges strictly excluding the pivot; a range of size
// <= 1 is already sorted. Depth is bounded by the range length, which is
// fine for the small fixed datasets the fixtures carry.
fn sort_range(seq: &mut [i32], low: usize, high: usize) {
    if low >= high {
        return;
    }
    let pivot_index = partition(seq, low, high);
    if pivot_index > low {
        sort_range(seq, low, pivot_index - 1);
    }
    sort_range(seq, pivot_index + 1, high);
}
