//! Insertion sort, instrumented.

use crate::trace::{Recorder, StepTrace};

/// Record the insertion sort timeline for `input`.
///
/// Index 0 is sorted before the loop starts. Each new element shifts left one
/// adjacent swap at a time and stops at the first non-inversion; its index is
/// final once it settles.
pub(crate) fn trace(input: &[u32]) -> StepTrace {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    if n == 0 {
        return rec.finish();
    }
    rec.finalize(0);
    for i in 1..n {
        let mut j = i;
        while j > 0 {
            rec.compare(j - 1, j);
            if rec.value(j - 1) > rec.value(j) {
                rec.swap(j - 1, j);
                j -= 1;
            } else {
                break;
            }
        }
        rec.finalize(i);
    }
    rec.finish()
}
