//! The playback engine: timed, cancellable consumption of step traces.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sortscope_steps::{step_trace, Algorithm, StepTrace};
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;

use crate::config::EngineConfig;
use crate::state::{EngineStatus, RunState, RunStatus};

/// Owns the run state and drives playback.
///
/// All mutation goes through the operations here; collaborators observe
/// through [`SortEngine::status`] snapshots or the watch channel returned by
/// [`SortEngine::subscribe`]. Cancellation is cooperative: each run gets its
/// own token, so a superseded playback task can never touch state that a
/// later run owns.
pub struct SortEngine {
    config: EngineConfig,
    state: Arc<RwLock<RunState>>,
    status_tx: watch::Sender<EngineStatus>,
}

impl SortEngine {
    pub fn new(config: EngineConfig) -> Self {
        let state = RunState::new(&config);
        let (status_tx, _) = watch::channel(EngineStatus::from(&state));
        Self {
            config,
            state: Arc::new(RwLock::new(state)),
            status_tx,
        }
    }

    /// Current state snapshot.
    pub async fn status(&self) -> EngineStatus {
        EngineStatus::from(&*self.state.read().await)
    }

    /// Change notifications: a new snapshot is published after every
    /// committed mutation.
    pub fn subscribe(&self) -> watch::Receiver<EngineStatus> {
        self.status_tx.subscribe()
    }

    /// Start consuming the trace for the selected algorithm over the current
    /// array.
    ///
    /// Silent no-op (`None`) while a run is active or after one completed;
    /// regenerate first to sort again. The returned handle resolves when the
    /// playback task halts, whether by exhaustion or cancellation.
    pub async fn start(&self) -> Option<JoinHandle<()>> {
        let (trace, cancel) = {
            let mut st = self.state.write().await;
            if st.status.is_running() || st.status.is_sorted() {
                return None;
            }
            st.comparisons = 0;
            st.swaps = 0;
            let cancel = Arc::new(AtomicBool::new(false));
            st.cancel = Arc::clone(&cancel);
            st.status = RunStatus::Running;
            let trace = step_trace(st.algorithm, &st.array);
            self.status_tx.send_replace(EngineStatus::from(&*st));
            tracing::debug!(algorithm = %st.algorithm, steps = trace.len(), "run started");
            (trace, cancel)
        };

        let state = Arc::clone(&self.state);
        let status_tx = self.status_tx.clone();
        let config = self.config.clone();
        Some(tokio::spawn(playback(state, status_tx, config, trace, cancel)))
    }

    /// Cancel the active run, freezing array and counters at the last
    /// committed step. No-op unless running.
    pub async fn stop(&self) {
        let mut st = self.state.write().await;
        st.cancel.store(true, Ordering::Relaxed);
        if st.status.is_running() {
            st.status = RunStatus::Stopped;
            self.status_tx.send_replace(EngineStatus::from(&*st));
            tracing::debug!(comparisons = st.comparisons, swaps = st.swaps, "run stopped");
        }
    }

    /// Cancel any active run and regenerate a fresh array at the current
    /// size. Valid from every state.
    pub async fn reset(&self) {
        let mut st = self.state.write().await;
        st.cancel.store(true, Ordering::Relaxed);
        st.regenerate(self.config.seed);
        self.status_tx.send_replace(EngineStatus::from(&*st));
    }

    /// The frontend's "new array" button: same semantics as [`reset`].
    ///
    /// [`reset`]: SortEngine::reset
    pub async fn generate_new_array(&self) {
        self.reset().await;
    }

    /// Change the array size and regenerate. Inert while a run is active.
    pub async fn set_array_size(&self, size: usize) {
        let mut st = self.state.write().await;
        if st.status.is_running() {
            return;
        }
        st.array_size = size;
        st.regenerate(self.config.seed);
        self.status_tx.send_replace(EngineStatus::from(&*st));
    }

    /// Select the algorithm for the next run; an active run keeps the one it
    /// started with.
    pub async fn set_algorithm(&self, algorithm: Algorithm) {
        let mut st = self.state.write().await;
        st.algorithm = algorithm;
        self.status_tx.send_replace(EngineStatus::from(&*st));
    }

    /// Change the animation speed, clamped into the valid range. An active
    /// run picks it up at its next tick.
    pub async fn set_speed(&self, speed: u8) {
        let mut st = self.state.write().await;
        st.speed = EngineConfig::clamp_speed(speed);
        self.status_tx.send_replace(EngineStatus::from(&*st));
    }
}

/// One tick per step: check the token, apply the step, publish, then sleep.
///
/// The token check and the step application happen under the same lock
/// acquisition, so a cancelling operation either runs before the tick (the
/// tick sees the token and exits) or after it (the step was fully applied
/// first). Exhaustion with the token clear is the only path to `Sorted`.
async fn playback(
    state: Arc<RwLock<RunState>>,
    status_tx: watch::Sender<EngineStatus>,
    config: EngineConfig,
    trace: StepTrace,
    cancel: Arc<AtomicBool>,
) {
    let mut steps = trace.into_iter();
    loop {
        let delay = {
            let mut st = state.write().await;
            if cancel.load(Ordering::Relaxed) {
                tracing::debug!("playback task observed cancellation");
                return;
            }
            match steps.next() {
                None => {
                    st.status = RunStatus::Sorted;
                    status_tx.send_replace(EngineStatus::from(&*st));
                    tracing::debug!(
                        comparisons = st.comparisons,
                        swaps = st.swaps,
                        "run complete"
                    );
                    return;
                }
                Some(step) => {
                    if step.comparing.is_some() {
                        st.comparisons += 1;
                    }
                    if step.swapping.is_some() {
                        st.swaps += 1;
                    }
                    st.array = step.array.clone();
                    st.current_step = Some(step);
                    status_tx.send_replace(EngineStatus::from(&*st));
                    config.delay_for(st.speed)
                }
            }
        };
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fast_config() -> EngineConfig {
        EngineConfig {
            algorithm: Algorithm::Bubble,
            speed: 100,
            array_size: 6,
            seed: Some(11),
            ..EngineConfig::default()
        }
    }

    #[tokio::test]
    async fn completed_run_reaches_sorted_with_accurate_counters() {
        let engine = SortEngine::new(fast_config());
        let before = engine.status().await;
        let trace = step_trace(before.algorithm, &before.array);

        let handle = engine.start().await.expect("idle engine starts");
        handle.await.unwrap();

        let status = engine.status().await;
        assert_eq!(status.status, RunStatus::Sorted);
        assert_eq!(status.comparisons, trace.comparison_count() as u64);
        assert_eq!(status.swaps, trace.swap_count() as u64);

        let mut expected = before.array.clone();
        expected.sort_unstable();
        assert_eq!(status.array, expected);
        assert!(status.current_step.unwrap().is_terminal());
    }

    #[tokio::test]
    async fn start_is_a_noop_while_running_and_after_sorted() {
        let engine = SortEngine::new(EngineConfig {
            speed: 1,
            ..fast_config()
        });

        let handle = engine.start().await.expect("first start runs");
        assert!(engine.start().await.is_none(), "start while running");

        engine.stop().await;
        handle.await.unwrap();

        engine.set_speed(100).await;
        let handle = engine.start().await.expect("stopped engine restarts");
        handle.await.unwrap();
        assert_eq!(engine.status().await.status, RunStatus::Sorted);
        assert!(engine.start().await.is_none(), "start after sorted");
    }

    #[tokio::test]
    async fn stop_freezes_state_mid_run() {
        let engine = SortEngine::new(EngineConfig {
            speed: 50,
            ..fast_config()
        });
        let mut rx = engine.subscribe();
        let handle = engine.start().await.unwrap();

        loop {
            rx.changed().await.unwrap();
            let seen = rx.borrow_and_update().clone();
            if seen.comparisons + seen.swaps >= 3 {
                break;
            }
        }

        engine.stop().await;
        handle.await.unwrap();

        let frozen = engine.status().await;
        assert_eq!(frozen.status, RunStatus::Stopped);
        assert!(frozen.comparisons + frozen.swaps >= 3);
        assert!(!frozen.current_step.clone().unwrap().is_terminal());

        // nothing moves once the task has halted
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(engine.status().await, frozen);
    }

    #[tokio::test]
    async fn reset_returns_to_idle_from_running() {
        let engine = SortEngine::new(EngineConfig {
            speed: 1,
            ..fast_config()
        });
        let handle = engine.start().await.unwrap();
        engine.reset().await;
        handle.await.unwrap();

        let status = engine.status().await;
        assert_eq!(status.status, RunStatus::Idle);
        assert_eq!(status.comparisons, 0);
        assert_eq!(status.swaps, 0);
        assert!(status.current_step.is_none());
        assert_eq!(status.array.len(), 6);
    }

    #[tokio::test]
    async fn reset_clears_a_sorted_run() {
        let engine = SortEngine::new(fast_config());
        let handle = engine.start().await.unwrap();
        handle.await.unwrap();
        assert!(engine.status().await.is_sorted());

        engine.reset().await;
        let status = engine.status().await;
        assert_eq!(status.status, RunStatus::Idle);
        assert!(engine.start().await.is_some(), "reset re-arms the engine");
    }

    #[tokio::test]
    async fn array_size_changes_are_inert_while_running() {
        let engine = SortEngine::new(EngineConfig {
            speed: 1,
            ..fast_config()
        });
        let handle = engine.start().await.unwrap();

        engine.set_array_size(20).await;
        let status = engine.status().await;
        assert_eq!(status.array_size, 6, "size untouched during a run");
        assert!(status.is_running());

        engine.stop().await;
        handle.await.unwrap();

        engine.set_array_size(20).await;
        let status = engine.status().await;
        assert_eq!(status.array_size, 20);
        assert_eq!(status.array.len(), 20);
        assert_eq!(status.status, RunStatus::Idle);
    }

    #[tokio::test]
    async fn speed_is_clamped_and_live() {
        let engine = SortEngine::new(fast_config());
        engine.set_speed(0).await;
        assert_eq!(engine.status().await.speed, 1);
        engine.set_speed(210).await;
        assert_eq!(engine.status().await.speed, 100);
    }

    #[tokio::test]
    async fn algorithm_selection_applies_to_the_next_run() {
        let engine = SortEngine::new(fast_config());
        engine.set_algorithm(Algorithm::Quick).await;

        let handle = engine.start().await.unwrap();
        handle.await.unwrap();

        let status = engine.status().await;
        assert_eq!(status.algorithm, Algorithm::Quick);
        assert!(status.is_sorted());
    }

    #[tokio::test]
    async fn subscribers_observe_running_then_sorted() {
        let engine = SortEngine::new(fast_config());
        let mut rx = engine.subscribe();
        assert_eq!(rx.borrow().status, RunStatus::Idle);

        let handle = engine.start().await.unwrap();
        let mut saw_running = false;
        loop {
            rx.changed().await.unwrap();
            let seen = rx.borrow_and_update().clone();
            if seen.is_running() {
                saw_running = true;
            }
            if seen.is_sorted() {
                break;
            }
        }
        assert!(saw_running);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn empty_array_run_completes_immediately() {
        let engine = SortEngine::new(EngineConfig {
            array_size: 0,
            ..fast_config()
        });
        let handle = engine.start().await.unwrap();
        handle.await.unwrap();

        let status = engine.status().await;
        assert_eq!(status.status, RunStatus::Sorted);
        assert_eq!(status.comparisons, 0);
        assert_eq!(status.swaps, 0);
        assert!(status.array.is_empty());
    }
}
