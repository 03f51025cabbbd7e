//! Exponential smoothing with an exact snap threshold.

use glam::Vec2;

use crate::options::MotionOptions;

/// Per-step exponential update rule moving a value a fixed fraction of the
/// remaining distance toward its target, clamping exactly to the target
/// once the remaining distance falls below the snap threshold.
///
/// For any fixed target and `alpha` in (0, 1) the per-axis error shrinks
/// by a factor of `1 - alpha` each step, so the process converges
/// monotonically with no oscillation, and the snap threshold turns the
/// asymptotic tail into exact equality in finitely many steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothing {
    /// Fraction of the remaining distance covered per step.
    pub alpha: f32,
    /// Distance below which an axis is clamped exactly to its target.
    pub snap_threshold: f32,
}

impl Smoothing {
    /// Standard tuning: 18% of the remaining distance per step, snap
    /// under half a unit.
    pub const STANDARD: Smoothing = Smoothing {
        alpha: 0.18,
        snap_threshold: 0.5,
    };

    /// Smoothing from the options layer.
    #[must_use]
    pub fn from_options(options: &MotionOptions) -> Self {
        Self {
            alpha: options.alpha,
            snap_threshold: options.snap_threshold,
        }
    }

    /// Advance a single axis one step toward `target`.
    #[inline]
    #[must_use]
    pub fn step_axis(&self, current: f32, target: f32) -> f32 {
        let next = current + (target - current) * self.alpha;
        if (target - next).abs() < self.snap_threshold {
            target
        } else {
            next
        }
    }

    /// Advance both channels of an (x, width) pair one step.
    ///
    /// The channels follow the identical update rule, so they are carried
    /// as one [`Vec2`] and stepped componentwise.
    #[inline]
    #[must_use]
    pub fn step(&self, current: Vec2, target: Vec2) -> Vec2 {
        Vec2::new(
            self.step_axis(current.x, target.x),
            self.step_axis(current.y, target.y),
        )
    }
}

impl Default for Smoothing {
    #[inline]
    fn default() -> Self {
        Self::STANDARD
    }
}
