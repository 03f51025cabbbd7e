//! Frame-driven animation for the selection indicator.
//!
//! - [`Smoothing`]: the per-step exponential update rule with exact snap
//! - [`MarkerState`]: current and target marker geometry
//! - [`IndicatorAnimator`]: ties state, smoothing, and host scheduling
//!   together

mod indicator;
mod smoothing;
mod state;

pub use indicator::IndicatorAnimator;
pub use smoothing::Smoothing;
pub use state::MarkerState;
