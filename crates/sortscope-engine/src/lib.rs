//! Sortscope Playback Engine
//!
//! Drives timed, cancellable playback of recorded sort step traces and owns
//! the observable run state that presentation collaborators render from.
//!
//! # Architecture
//!
//! - **EngineConfig**: initial selections plus the delay curve
//! - **RunState / EngineStatus**: engine-owned mutable state and the
//!   read-only snapshot published to collaborators
//! - **SortEngine**: control operations (start/stop/reset/regenerate/setters)
//!   and the playback task consuming one step per tick
//!
//! # Usage
//!
//! ```ignore
//! let engine = SortEngine::new(EngineConfig::default());
//! let handle = engine.start().await.expect("engine is idle");
//! handle.await?;
//! assert!(engine.status().await.is_sorted());
//! ```

mod config;
mod engine;
mod state;

pub use config::{EngineConfig, SPEED_MAX, SPEED_MIN};
pub use engine::SortEngine;
pub use state::{EngineStatus, RunStatus};
