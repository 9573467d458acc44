//! Bubble sort, instrumented.

use crate::trace::{Recorder, StepTrace};

/// Record the bubble sort timeline for `input`.
///
/// Adjacent pairs are compared across a shrinking unsorted prefix; the
/// largest remaining value sinks to index `i` at the end of each pass, at
/// which point `i` is final.
pub(crate) fn trace(input: &[u32]) -> StepTrace {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    if n == 0 {
        return rec.finish();
    }
    for i in (1..n).rev() {
        for j in 0..i {
            rec.compare(j, j + 1);
            if rec.value(j) > rec.value(j + 1) {
                rec.swap(j, j + 1);
            }
        }
        rec.finalize(i);
    }
    rec.finalize(0);
    rec.finish()
}
