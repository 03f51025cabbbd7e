use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Indicator animator tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
pub struct MotionOptions {
    /// Fraction of the remaining distance the marker covers per frame.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 0.99), extend("step" = 0.01))]
    pub alpha: f32,
    /// Distance below which an axis snaps exactly to its target.
    #[schemars(skip)]
    pub snap_threshold: f32,
    /// How long the resize re-selection waits after the last resize
    /// event, in milliseconds.
    #[schemars(title = "Resize Debounce (ms)", range(min = 0, max = 1000))]
    pub resize_debounce_ms: u64,
    /// Delay before the animator issues its first selection, in
    /// milliseconds.
    #[schemars(skip)]
    pub startup_delay_ms: u64,
}

impl MotionOptions {
    /// Resize debounce as a [`Duration`].
    #[must_use]
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Startup delay as a [`Duration`].
    #[must_use]
    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            alpha: 0.18,
            snap_threshold: 0.5,
            resize_debounce_ms: 200,
            startup_delay_ms: 100,
        }
    }
}
