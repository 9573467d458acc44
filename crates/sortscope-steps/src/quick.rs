//! Quick sort, instrumented.
//!
//! Lomuto partition with the subrange's last element as pivot. Subranges are
//! emitted depth-first with the left side fully traced before the right, and
//! each pivot index is final immediately after its partition.

use crate::trace::{Recorder, StepTrace};

/// Record the quick sort timeline for `input`.
pub(crate) fn trace(input: &[u32]) -> StepTrace {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    if n > 0 {
        sort_range(&mut rec, 0, n - 1);
    }
    rec.finish()
}

fn sort_range(rec: &mut Recorder, lo: usize, hi: usize) {
    if lo == hi {
        rec.finalize(lo);
        return;
    }
    let p = partition(rec, lo, hi);
    if p > lo {
        sort_range(rec, lo, p - 1);
    }
    if p < hi {
        sort_range(rec, p + 1, hi);
    }
}

/// Partition `[lo, hi]` around `a[hi]`, returning the pivot's final index.
///
/// Every tail element is compared against the pivot position `hi`; elements
/// below the pivot compact leftward. The closing swap places the pivot even
/// when it is already in position, matching the emitted timeline of the
/// comparisons that led there.
fn partition(rec: &mut Recorder, lo: usize, hi: usize) -> usize {
    let pivot = rec.value(hi);
    let mut i = lo;
    for j in lo..hi {
        rec.compare(j, hi);
        if rec.value(j) < pivot {
            rec.swap(i, j);
            i += 1;
        }
    }
    rec.swap(i, hi);
    rec.finalize(i);
    i
}
