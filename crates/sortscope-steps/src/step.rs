//! Sort steps for the visualization timeline.

use serde::{Deserialize, Serialize};

/// A single observable instant of a sort: one comparison, one swap, or the
/// terminal fully-sorted state.
///
/// The field names are the contract the bar-chart frontend renders from:
/// membership in `sorted` and index equality against the `comparing` /
/// `swapping` pairs decide each bar's color. At most one of `comparing` and
/// `swapping` is set; constructing through [`Step::comparison`],
/// [`Step::swap`] and [`Step::terminal`] keeps that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Full copy of the working array at this instant.
    pub array: Vec<u32>,
    /// Pair of indices being compared, if this is a comparison step.
    pub comparing: Option<(usize, usize)>,
    /// Pair of indices just swapped, if this is a swap step.
    pub swapping: Option<(usize, usize)>,
    /// Indices confirmed in final position as of this step.
    pub sorted: Vec<usize>,
}

impl Step {
    /// A comparison step: `i` and `j` are about to be ordered against each
    /// other, with the array in its pre-decision state.
    pub fn comparison(array: Vec<u32>, i: usize, j: usize, sorted: Vec<usize>) -> Self {
        Self {
            array,
            comparing: Some((i, j)),
            swapping: None,
            sorted,
        }
    }

    /// A swap step: `i` and `j` have just exchanged values, with the array in
    /// its post-swap state.
    pub fn swap(array: Vec<u32>, i: usize, j: usize, sorted: Vec<usize>) -> Self {
        Self {
            array,
            comparing: None,
            swapping: Some((i, j)),
            sorted,
        }
    }

    /// The terminal step closing a trace: no active pair, every index sorted.
    pub fn terminal(array: Vec<u32>, sorted: Vec<usize>) -> Self {
        Self {
            array,
            comparing: None,
            swapping: None,
            sorted,
        }
    }

    /// True for the closing step of a trace.
    pub fn is_terminal(&self) -> bool {
        self.comparing.is_none() && self.swapping.is_none()
    }
}
