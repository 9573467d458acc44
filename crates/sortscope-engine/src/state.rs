//! Run state owned by the playback engine.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sortscope_steps::{generate_array, generate_array_seeded, Algorithm, Step};

use crate::config::EngineConfig;

/// Lifecycle of a visualization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// No run yet, or state was reset/regenerated
    Idle,
    /// A playback task is consuming a trace
    Running,
    /// Cancelled mid-run
    Stopped,
    /// The trace ran to exhaustion
    Sorted,
}

impl RunStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, RunStatus::Running)
    }

    pub fn is_sorted(&self) -> bool {
        matches!(self, RunStatus::Sorted)
    }
}

/// Mutable state owned by the playback engine.
///
/// Never handed out directly: collaborators observe [`EngineStatus`]
/// snapshots and mutate through the engine's operations.
#[derive(Debug)]
pub(crate) struct RunState {
    pub array: Vec<u32>,
    pub current_step: Option<Step>,
    pub status: RunStatus,
    pub algorithm: Algorithm,
    pub speed: u8,
    pub array_size: usize,
    pub comparisons: u64,
    pub swaps: u64,
    /// Cancellation token of the active (or most recent) run.
    pub cancel: Arc<AtomicBool>,
}

impl RunState {
    pub fn new(config: &EngineConfig) -> Self {
        let mut state = Self {
            array: Vec::new(),
            current_step: None,
            status: RunStatus::Idle,
            algorithm: config.algorithm,
            speed: EngineConfig::clamp_speed(config.speed),
            array_size: config.array_size,
            comparisons: 0,
            swaps: 0,
            cancel: Arc::new(AtomicBool::new(false)),
        };
        state.regenerate(config.seed);
        state
    }

    /// Fresh array at the current size, cleared counters and step, `Idle`.
    pub fn regenerate(&mut self, seed: Option<u64>) {
        self.array = match seed {
            Some(seed) => generate_array_seeded(self.array_size, seed),
            None => generate_array(self.array_size),
        };
        self.current_step = None;
        self.status = RunStatus::Idle;
        self.comparisons = 0;
        self.swaps = 0;
    }
}

/// Read-only snapshot published to presentation collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineStatus {
    pub array: Vec<u32>,
    pub current_step: Option<Step>,
    pub status: RunStatus,
    pub algorithm: Algorithm,
    pub speed: u8,
    pub array_size: usize,
    pub comparisons: u64,
    pub swaps: u64,
}

impl EngineStatus {
    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    pub fn is_sorted(&self) -> bool {
        self.status.is_sorted()
    }
}

impl From<&RunState> for EngineStatus {
    fn from(state: &RunState) -> Self {
        Self {
            array: state.array.clone(),
            current_step: state.current_step.clone(),
            status: state.status,
            algorithm: state.algorithm,
            speed: state.speed,
            array_size: state.array_size,
            comparisons: state.comparisons,
            swaps: state.swaps,
        }
    }
}
