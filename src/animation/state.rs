//! Marker state management for the indicator animator.

use glam::Vec2;

use super::smoothing::Smoothing;

/// Current and target marker geometry.
///
/// Both values carry the (x, width) channel pair as one [`Vec2`]: `x` is
/// the marker's offset from the container's left edge, `y` is its width.
/// `current` is what was last applied to the marker visual; `target` is
/// the most recently requested destination.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarkerState {
    current: Vec2,
    target: Vec2,
}

impl MarkerState {
    /// State with all values zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last-rendered (x, width) pair.
    #[must_use]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    /// Most recently requested (x, width) destination.
    #[must_use]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Record a new destination. Does not move `current`.
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Set current geometry to match the target (instant jump).
    pub fn snap_to_target(&mut self) {
        self.current = self.target;
    }

    /// Advance `current` one smoothing step toward `target`.
    pub fn step(&mut self, smoothing: &Smoothing) {
        self.current = smoothing.step(self.current, self.target);
    }

    /// Whether both axes equal their target values exactly.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.current == self.target
    }
}
