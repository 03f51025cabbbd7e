use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Reveal sequencer tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Reveal", inline)]
#[serde(default)]
pub struct RevealOptions {
    /// Per-index reveal delay, in milliseconds.
    #[schemars(title = "Stagger (ms)", range(min = 0, max = 500))]
    pub stagger_ms: u64,
    /// Cap on the accumulated stagger, in milliseconds.
    #[schemars(title = "Max Stagger (ms)", range(min = 0, max = 2000))]
    pub max_stagger_ms: u64,
    /// Fraction of a card that must be visible before it counts as seen.
    /// Advisory for the host's visibility observer; the sequencer never
    /// measures.
    #[schemars(skip)]
    pub visibility_threshold: f32,
}

impl RevealOptions {
    /// Per-index stagger as a [`Duration`].
    #[must_use]
    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    /// Stagger cap as a [`Duration`].
    #[must_use]
    pub fn max_stagger(&self) -> Duration {
        Duration::from_millis(self.max_stagger_ms)
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            stagger_ms: 60,
            max_stagger_ms: 300,
            visibility_threshold: 0.12,
        }
    }
}
