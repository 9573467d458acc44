//! Sortscope Step Engine
//!
//! Instrumented sorting algorithms that record a timeline of discrete steps
//! (comparisons, swaps, settled indices) for animated playback.
//!
//! # Architecture
//!
//! - **Step**: one observable instant: array snapshot plus the active
//!   comparison or swap pair and the settled index set
//! - **Producers**: one instrumented implementation per algorithm, recording
//!   into a [`StepTrace`]
//! - **Catalog**: closed [`Algorithm`] identifiers plus display metadata
//! - **Generator**: randomized bar arrays, optionally seeded
//!
//! # Usage
//!
//! ```
//! use sortscope_steps::{step_trace, Algorithm};
//!
//! let trace = step_trace(Algorithm::Bubble, &[5, 3, 8, 1]);
//! assert_eq!(trace.terminal().array, vec![1, 3, 5, 8]);
//! assert_eq!(trace.comparison_count(), 6);
//! ```

mod bubble;
mod catalog;
mod error;
mod generate;
mod insertion;
mod quick;
mod selection;
mod step;
mod trace;

pub use catalog::{Algorithm, AlgorithmInfo, ALGORITHMS};
pub use error::{Error, Result};
pub use generate::{generate_array, generate_array_seeded, BAR_MIN, BAR_SPAN};
pub use step::Step;
pub use trace::StepTrace;

/// Record the full step timeline for `algorithm` over `input`.
///
/// Pure: the same input always yields the same trace, and the caller's array
/// is never mutated. Every trace closes with exactly one terminal step whose
/// sorted set covers the whole index range.
pub fn step_trace(algorithm: Algorithm, input: &[u32]) -> StepTrace {
    match algorithm {
        Algorithm::Bubble => bubble::trace(input),
        Algorithm::Selection => selection::trace(input),
        Algorithm::Quick => quick::trace(input),
        Algorithm::Insertion => insertion::trace(input),
    }
}
