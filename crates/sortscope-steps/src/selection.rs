//! Selection sort, instrumented.

use crate::trace::{Recorder, StepTrace};

/// Record the selection sort timeline for `input`.
///
/// Each pass compares the running minimum candidate against every element of
/// the unscanned tail, then swaps only if the minimum moved. Index `i` is
/// final after its pass whether or not a swap happened.
pub(crate) fn trace(input: &[u32]) -> StepTrace {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in (i + 1)..n {
            rec.compare(min_idx, j);
            if rec.value(j) < rec.value(min_idx) {
                min_idx = j;
            }
        }
        if min_idx != i {
            rec.swap(i, min_idx);
        }
        rec.finalize(i);
    }
    rec.finish()
}
