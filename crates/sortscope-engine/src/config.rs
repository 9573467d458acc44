//! Engine configuration.

use std::time::Duration;

use sortscope_steps::Algorithm;

/// Lowest accepted animation speed.
pub const SPEED_MIN: u8 = 1;

/// Highest accepted animation speed.
pub const SPEED_MAX: u8 = 100;

/// Configuration for a playback engine.
///
/// The delay-curve constants reproduce the classic visualizer feel
/// (`max(1, 200 - 2 * speed)` milliseconds between steps) but are plain
/// fields, so embedders can retune the animation pacing.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Initially selected algorithm.
    pub algorithm: Algorithm,
    /// Animation speed, clamped into `SPEED_MIN..=SPEED_MAX`.
    pub speed: u8,
    /// Number of bars to generate.
    pub array_size: usize,
    /// Seed for deterministic array generation; `None` uses the thread RNG.
    pub seed: Option<u64>,
    /// Base of the delay curve, in milliseconds.
    pub delay_base_ms: u64,
    /// Milliseconds shaved off the delay per speed unit.
    pub delay_slope_ms: u64,
    /// Smallest inter-step delay; keeps the playback task from busy-spinning.
    pub delay_floor_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Bubble,
            speed: 50,
            array_size: 40,
            seed: None,
            delay_base_ms: 200,
            delay_slope_ms: 2,
            delay_floor_ms: 1,
        }
    }
}

impl EngineConfig {
    /// Inter-step delay at `speed`: `max(floor, base - slope * speed)`.
    pub fn delay_for(&self, speed: u8) -> Duration {
        let ms = self
            .delay_base_ms
            .saturating_sub(self.delay_slope_ms * u64::from(speed))
            .max(self.delay_floor_ms);
        Duration::from_millis(ms)
    }

    /// Clamp a requested speed into the valid range.
    pub fn clamp_speed(speed: u8) -> u8 {
        speed.clamp(SPEED_MIN, SPEED_MAX)
    }
}
