//! Algorithm catalog: identifiers and display metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifier for one of the supported sorting algorithms.
///
/// Serialized as the lowercase wire id (`"bubble"`, `"selection"`, `"quick"`,
/// `"insertion"`); anything else fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Selection,
    Quick,
    Insertion,
}

impl Algorithm {
    /// All algorithms, in catalog order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Insertion,
    ];

    /// The wire identifier used by frontends and config.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Quick => "quick",
            Algorithm::Insertion => "insertion",
        }
    }

    /// Display metadata for this algorithm.
    pub fn info(&self) -> &'static AlgorithmInfo {
        match self {
            Algorithm::Bubble => &ALGORITHMS[0],
            Algorithm::Selection => &ALGORITHMS[1],
            Algorithm::Quick => &ALGORITHMS[2],
            Algorithm::Insertion => &ALGORITHMS[3],
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "bubble" => Ok(Algorithm::Bubble),
            "selection" => Ok(Algorithm::Selection),
            "quick" => Ok(Algorithm::Quick),
            "insertion" => Ok(Algorithm::Insertion),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Static display metadata for one algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub id: Algorithm,
    pub name: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub description: &'static str,
}

/// The catalog, in the order frontends list it.
pub const ALGORITHMS: [AlgorithmInfo; 4] = [
    AlgorithmInfo {
        id: Algorithm::Bubble,
        name: "Bubble Sort",
        time_complexity: "O(n²)",
        space_complexity: "O(1)",
        description: "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
    },
    AlgorithmInfo {
        id: Algorithm::Selection,
        name: "Selection Sort",
        time_complexity: "O(n²)",
        space_complexity: "O(1)",
        description: "Finds the minimum element from the unsorted part and puts it at the beginning.",
    },
    AlgorithmInfo {
        id: Algorithm::Quick,
        name: "Quick Sort",
        time_complexity: "O(n log n)",
        space_complexity: "O(log n)",
        description: "Picks a pivot element and partitions the array around it recursively.",
    },
    AlgorithmInfo {
        id: Algorithm::Insertion,
        name: "Insertion Sort",
        time_complexity: "O(n²)",
        space_complexity: "O(1)",
        description: "Builds the sorted array one item at a time by inserting each element into its correct position.",
    },
];

// Compile-time assertion that the catalog rows sit at their dispatch indices
const _: () = {
    assert!(matches!(ALGORITHMS[0].id, Algorithm::Bubble));
    assert!(matches!(ALGORITHMS[1].id, Algorithm::Selection));
    assert!(matches!(ALGORITHMS[2].id, Algorithm::Quick));
    assert!(matches!(ALGORITHMS[3].id, Algorithm::Insertion));
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_all() {
        assert_eq!(ALGORITHMS.len(), Algorithm::ALL.len());
        for (info, id) in ALGORITHMS.iter().zip(Algorithm::ALL) {
            assert_eq!(info.id, id);
            assert_eq!(info, id.info());
        }
    }

    #[test]
    fn wire_ids_round_trip() {
        for id in Algorithm::ALL {
            assert_eq!(id.as_str().parse::<Algorithm>().unwrap(), id);
        }
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = "bogo".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.to_string(), "unknown algorithm: bogo");
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        assert_eq!(
            serde_json::to_string(&Algorithm::Quick).unwrap(),
            r#""quick""#
        );
        let parsed: Algorithm = serde_json::from_str(r#""insertion""#).unwrap();
        assert_eq!(parsed, Algorithm::Insertion);
        assert!(serde_json::from_str::<Algorithm>(r#""heap""#).is_err());
    }
}
