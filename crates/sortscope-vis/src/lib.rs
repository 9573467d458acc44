//! Sortscope Visualization Server
//!
//! Web control surface for the sorting visualizer: a bar-chart frontend
//! drives the playback engine over REST and WebSocket.
//!
//! # Architecture
//!
//! - **Engine**: owns run state, consumes step traces under a timed loop
//! - **REST API**: control playback, switch algorithm/speed/size, read status
//! - **WebSocket**: pushes every committed state change to the frontend
//!
//! # Usage
//!
//! ```ignore
//! let engine = SortEngine::new(EngineConfig::default());
//! let server = VisServer::new(engine);
//! server.serve(3000).await;
//! ```

mod server;

pub use server::VisServer;

pub use sortscope_engine::{EngineConfig, EngineStatus, RunStatus, SortEngine};
pub use sortscope_steps::{Algorithm, AlgorithmInfo, Step, ALGORITHMS};
