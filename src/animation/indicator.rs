//! The indicator animator: one marker tracking one selected target.

use glam::Vec2;
use web_time::Duration;

use super::smoothing::Smoothing;
use super::state::MarkerState;
use crate::host::{FrameHandle, NavSurface, TimerHandle};
use crate::options::MotionOptions;

/// Animates a single visual marker toward the bounding box of the
/// currently selected target within a container.
///
/// The animator owns its [`MarkerState`] exclusively and keeps at most one
/// interpolation cycle in flight: every [`select`](Self::select) cancels
/// the pending frame callback before scheduling a new one, so only the
/// most recent selection's target ever wins. Under reduced motion the
/// cycle collapses to a single instantaneous jump per selection.
///
/// The caller translates its own events (pointer-enter, focus, click,
/// resize) into [`select`](Self::select) and
/// [`notify_resize`](Self::notify_resize) calls and routes fired handles
/// back through [`on_frame`](Self::on_frame) and
/// [`on_timer`](Self::on_timer).
#[derive(Debug)]
pub struct IndicatorAnimator {
    state: MarkerState,
    smoothing: Smoothing,
    /// Captured once at initialization; immutable afterwards.
    reduced_motion: bool,
    target_count: usize,
    /// Externally supplied "active" target, used for resize re-selection.
    active: Option<usize>,
    /// The in-flight interpolation cycle's pending frame, if any.
    pending_frame: Option<FrameHandle>,
    /// One-shot delay before the first selection.
    startup_timer: Option<TimerHandle>,
    /// Single-slot debounce timer; always cancelled before rearming.
    debounce_timer: Option<TimerHandle>,
    debounce_delay: Duration,
}

impl IndicatorAnimator {
    /// Set up the animator for `target_count` targets inside the host's
    /// container.
    ///
    /// The host's marker starts hidden; after the startup delay the
    /// animator issues the first selection on its own. An empty target
    /// set yields an inert animator whose operations are all silent
    /// no-ops.
    pub fn initialize<H: NavSurface>(
        host: &mut H,
        target_count: usize,
        options: &MotionOptions,
    ) -> Self {
        let mut animator = Self {
            state: MarkerState::new(),
            smoothing: Smoothing::from_options(options),
            reduced_motion: false,
            target_count,
            active: None,
            pending_frame: None,
            startup_timer: None,
            debounce_timer: None,
            debounce_delay: options.resize_debounce(),
        };

        if target_count == 0 {
            return animator;
        }

        animator.reduced_motion = host.prefers_reduced_motion();
        host.set_marker_visible(false);
        animator.startup_timer =
            Some(host.start_timer(options.startup_delay()));

        log::debug!(
            "indicator initialized: {target_count} targets, reduced_motion={}",
            animator.reduced_motion
        );

        animator
    }

    /// Whether the animator was initialized with an empty target set.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.target_count == 0
    }

    /// Whether an interpolation cycle is currently in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.pending_frame.is_some()
    }

    /// The marker's current and target geometry.
    #[must_use]
    pub fn state(&self) -> &MarkerState {
        &self.state
    }

    /// Externally supplied active target, if any.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Record which target the caller currently marks "active".
    ///
    /// The animator never infers this itself; resize re-selection falls
    /// back to the first target while it is unset.
    pub fn set_active(&mut self, index: usize) {
        if index < self.target_count {
            self.active = Some(index);
        }
    }

    /// Select a target: measure its geometry, make the marker visible,
    /// and (re)start the interpolation cycle toward it.
    ///
    /// Supersedes any cycle already in progress. No return value and no
    /// error conditions; geometry is measured at call time and rendered
    /// as-is.
    pub fn select<H: NavSurface>(&mut self, host: &mut H, index: usize) {
        if self.target_count == 0 {
            return;
        }

        let container = host.container_rect();
        let rect = host.target_rect(index);
        let target = Vec2::new(rect.left - container.left, rect.width);
        self.state.set_target(target);

        host.set_marker_visible(true);
        self.restart_cycle(host);
    }

    /// A display-refresh callback fired. Advances the cycle one step.
    ///
    /// Frames from a superseded cycle are ignored; the handle must match
    /// the one currently pending.
    pub fn on_frame<H: NavSurface>(
        &mut self,
        host: &mut H,
        handle: FrameHandle,
    ) {
        if self.pending_frame != Some(handle) {
            return;
        }
        self.pending_frame = None;

        self.state.step(&self.smoothing);
        let current = self.state.current();
        host.apply_marker(current.x, current.y);

        if !self.state.converged() {
            self.pending_frame = Some(host.request_frame());
        }
    }

    /// A timer fired. Handles both the startup delay and the resize
    /// debounce; unknown handles are ignored.
    pub fn on_timer<H: NavSurface>(
        &mut self,
        host: &mut H,
        handle: TimerHandle,
    ) {
        let fired = if self.startup_timer == Some(handle) {
            self.startup_timer = None;
            true
        } else if self.debounce_timer == Some(handle) {
            self.debounce_timer = None;
            true
        } else {
            false
        };

        if fired {
            let index = self.active.unwrap_or(0);
            self.select(host, index);
        }
    }

    /// The container was resized. Re-selection happens once, debounced
    /// from the *last* resize event.
    ///
    /// Rapid successive calls reset the single-slot timer rather than
    /// queueing multiple re-selections.
    pub fn notify_resize<H: NavSurface>(&mut self, host: &mut H) {
        if self.target_count == 0 {
            return;
        }
        if let Some(previous) = self.debounce_timer.take() {
            host.cancel_timer(previous);
        }
        self.debounce_timer = Some(host.start_timer(self.debounce_delay));
    }

    /// Cancel every pending handle. The marker element itself is the
    /// host's to remove.
    pub fn teardown<H: NavSurface>(&mut self, host: &mut H) {
        if let Some(frame) = self.pending_frame.take() {
            host.cancel_frame(frame);
        }
        if let Some(timer) = self.startup_timer.take() {
            host.cancel_timer(timer);
        }
        if let Some(timer) = self.debounce_timer.take() {
            host.cancel_timer(timer);
        }
    }

    /// Cancel the in-flight cycle and start a fresh one toward the
    /// current target, or jump immediately under reduced motion.
    fn restart_cycle<H: NavSurface>(&mut self, host: &mut H) {
        if let Some(previous) = self.pending_frame.take() {
            host.cancel_frame(previous);
        }

        if self.reduced_motion {
            self.state.snap_to_target();
            let current = self.state.current();
            host.apply_marker(current.x, current.y);
            return;
        }

        self.pending_frame = Some(host.request_frame());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Accessibility, Rect, Scheduler};

    /// Records every scheduling and marker interaction for assertions.
    struct MockHost {
        container: Rect,
        targets: Vec<Rect>,
        reduced_motion: bool,
        next_handle: u64,
        pending_frames: Vec<FrameHandle>,
        pending_timers: Vec<(TimerHandle, Duration)>,
        cancelled_frames: Vec<FrameHandle>,
        cancelled_timers: Vec<TimerHandle>,
        applied: Vec<(f32, f32)>,
        marker_visible: Option<bool>,
    }

    impl MockHost {
        fn new(container: Rect, targets: Vec<Rect>) -> Self {
            Self {
                container,
                targets,
                reduced_motion: false,
                next_handle: 0,
                pending_frames: Vec::new(),
                pending_timers: Vec::new(),
                cancelled_frames: Vec::new(),
                cancelled_timers: Vec::new(),
                applied: Vec::new(),
                marker_visible: None,
            }
        }

        /// Deliver pending frames until the cycle stops rescheduling.
        fn pump(&mut self, animator: &mut IndicatorAnimator) {
            let mut guard = 0;
            while let Some(handle) = self.pending_frames.pop() {
                animator.on_frame(self, handle);
                guard += 1;
                assert!(guard < 1000, "cycle failed to terminate");
            }
        }

        fn fire_timer(
            &mut self,
            animator: &mut IndicatorAnimator,
            handle: TimerHandle,
        ) {
            self.pending_timers.retain(|(h, _)| *h != handle);
            animator.on_timer(self, handle);
        }

        fn fire_frame(
            &mut self,
            animator: &mut IndicatorAnimator,
            handle: FrameHandle,
        ) {
            self.pending_frames.retain(|h| *h != handle);
            animator.on_frame(self, handle);
        }

        fn sole_pending_timer(&self) -> TimerHandle {
            assert_eq!(self.pending_timers.len(), 1);
            self.pending_timers[0].0
        }
    }

    impl Scheduler for MockHost {
        fn request_frame(&mut self) -> FrameHandle {
            self.next_handle += 1;
            let handle = FrameHandle(self.next_handle);
            self.pending_frames.push(handle);
            handle
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            self.pending_frames.retain(|h| *h != handle);
            self.cancelled_frames.push(handle);
        }

        fn start_timer(&mut self, delay: Duration) -> TimerHandle {
            self.next_handle += 1;
            let handle = TimerHandle(self.next_handle);
            self.pending_timers.push((handle, delay));
            handle
        }

        fn cancel_timer(&mut self, handle: TimerHandle) {
            self.pending_timers.retain(|(h, _)| *h != handle);
            self.cancelled_timers.push(handle);
        }
    }

    impl Accessibility for MockHost {
        fn prefers_reduced_motion(&self) -> bool {
            self.reduced_motion
        }
    }

    impl NavSurface for MockHost {
        fn container_rect(&self) -> Rect {
            self.container
        }

        fn target_rect(&self, index: usize) -> Rect {
            self.targets[index]
        }

        fn apply_marker(&mut self, x: f32, width: f32) {
            self.applied.push((x, width));
        }

        fn set_marker_visible(&mut self, visible: bool) {
            self.marker_visible = Some(visible);
        }
    }

    fn nav_host() -> MockHost {
        MockHost::new(
            Rect::new(0.0, 600.0),
            vec![
                Rect::new(100.0, 40.0),
                Rect::new(160.0, 55.0),
                Rect::new(235.0, 70.0),
            ],
        )
    }

    #[test]
    fn test_initialize_hides_marker_and_arms_startup() {
        let mut host = nav_host();
        let animator =
            IndicatorAnimator::initialize(&mut host, 3, &MotionOptions::default());

        assert!(!animator.is_inert());
        assert_eq!(host.marker_visible, Some(false));
        assert_eq!(host.pending_timers.len(), 1);
        assert_eq!(host.pending_timers[0].1, Duration::from_millis(100));
    }

    #[test]
    fn test_empty_target_set_is_inert() {
        let mut host = nav_host();
        let mut animator =
            IndicatorAnimator::initialize(&mut host, 0, &MotionOptions::default());

        assert!(animator.is_inert());
        assert!(host.pending_timers.is_empty());

        animator.select(&mut host, 0);
        animator.notify_resize(&mut host);

        assert!(host.pending_frames.is_empty());
        assert!(host.pending_timers.is_empty());
        assert!(host.applied.is_empty());
    }

    #[test]
    fn test_startup_timer_selects_first_target() {
        let mut host = nav_host();
        let mut animator =
            IndicatorAnimator::initialize(&mut host, 3, &MotionOptions::default());

        let startup = host.sole_pending_timer();
        host.fire_timer(&mut animator, startup);
        assert_eq!(host.marker_visible, Some(true));

        host.pump(&mut animator);
        assert!(animator.state().converged());
        assert_eq!(host.applied.last(), Some(&(100.0, 40.0)));
    }

    #[test]
    fn test_convergence_to_selected_geometry() {
        let mut host = nav_host();
        let mut animator =
            IndicatorAnimator::initialize(&mut host, 3, &MotionOptions::default());

        animator.select(&mut host, 0);
        host.pump(&mut animator);

        // Container left edge 0, target {left: 100, width: 40}
        assert_eq!(host.applied.last(), Some(&(100.0, 40.0)));
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_geometry_is_container_relative() {
        let mut host = nav_host();
        host.container = Rect::new(40.0, 600.0);
        let mut animator =
            IndicatorAnimator::initialize(&mut host, 3, &MotionOptions::default());

        animator.select(&mut host, 1);
        host.pump(&mut animator);

        assert_eq!(host.applied.last(), Some(&(120.0, 55.0)));
    }

    #[test]
    fn test_first_step_covers_alpha_fraction() {
        let mut host = nav_host();
        let mut animator =
            IndicatorAnimator::initialize(&mut host, 3, &MotionOptions::default());

        animator.select(&mut host, 0);
        let frame = host.pending_frames[0];
        host.fire_frame(&mut animator, frame);

        let (x, width) = host.applied[0];
        assert!((x - 18.0).abs() < 1e-4);
        assert!((width - 7.2).abs() < 1e-4);
        assert!(animator.is_animating());
    }

    #[test]
    fn test_select_supersedes_in_flight_cycle() {
        let mut host = nav_host();
        let mut animator =
            IndicatorAnimator::initialize(&mut host, 3, &MotionOptions::default());

        animator.select(&mut host, 0);
        let first_frame = host.pending_frames[0];
        host.fire_frame(&mut animator, first_frame);
        let partial = host.applied[0];

        animator.select(&mut host, 1);
        host.pump(&mut animator);

        // Converged to B's geometry only; the A-ward step was never final
        assert!(animator.state().converged());
        assert_eq!(host.applied.last(), Some(&(160.0, 55.0)));
        assert_ne!(host.applied.last(), Some(&partial));
    }

    #[test]
    fn test_select_cancels_pending_frame_before_rescheduling() {
        let mut host = nav_host();
        let mut animator =
            IndicatorAnimator::initialize(&mut host, 3, &MotionOptions::default());

        animator.select(&mut host, 0);
        let pending = host.pending_frames[0];
        animator.select(&mut host, 1);

        assert!(host.cancelled_frames.contains(&pending));
        assert_eq!(host.pending_frames.len(), 1);
    }

    #[test]
    fn test_stale_frame_from_superseded_cycle_is_ignored() {
        let mut host = nav_host();
        let mut animator =
            IndicatorAnimator::initialize(&mut host, 3, &MotionOptions::default());

        animator.select(&mut host, 0);
        let stale = host.pending_frames[0];
        animator.select(&mut host, 1);

        // A host that raced cancellation may still deliver the old frame
        animator.on_frame(&mut host, stale);
        assert!(host.applied.is_empty());
    }

    #[test]
    fn test_reduced_motion_is_a_single_jump() {
        let mut host = nav_host();
        host.reduced_motion = true;
        let mut animator =
            IndicatorAnimator::initialize(&mut host, 3, &MotionOptions::default());

        animator.select(&mut host, 2);

        assert_eq!(host.applied, vec![(235.0, 70.0)]);
        assert!(host.pending_frames.is_empty());
        assert!(animator.state().converged());

        // A second selection produces exactly one more update
        animator.select(&mut host, 0);
        assert_eq!(host.applied.len(), 2);
        assert_eq!(host.applied[1], (100.0, 40.0));
    }

    #[test]
    fn test_resize_debounce_collapses_rapid_events() {
        let mut host = nav_host();
        let mut animator =
            IndicatorAnimator::initialize(&mut host, 3, &MotionOptions::default());
        let startup = host.sole_pending_timer();
        host.fire_timer(&mut animator, startup);
        host.pump(&mut animator);
        let applied_before = host.applied.len();

        for _ in 0..5 {
            animator.notify_resize(&mut host);
        }

        // Only the timer armed by the last event survives
        assert_eq!(host.pending_timers.len(), 1);
        assert_eq!(host.cancelled_timers.len(), 4);
        assert_eq!(host.pending_timers[0].1, Duration::from_millis(200));

        let debounce = host.sole_pending_timer();
        host.fire_timer(&mut animator, debounce);
        host.pump(&mut animator);

        assert!(host.applied.len() > applied_before);
        assert_eq!(host.applied.last(), Some(&(100.0, 40.0)));
    }

    #[test]
    fn test_resize_reselects_active_target() {
        let mut host = nav_host();
        let mut animator =
            IndicatorAnimator::initialize(&mut host, 3, &MotionOptions::default());

        animator.set_active(2);
        animator.notify_resize(&mut host);
        // Two timers pending: startup and debounce; fire the debounce
        let debounce = host.pending_timers[1].0;
        host.fire_timer(&mut animator, debounce);
        host.pump(&mut animator);

        assert_eq!(host.applied.last(), Some(&(235.0, 70.0)));
    }

    #[test]
    fn test_set_active_ignores_out_of_range() {
        let mut host = nav_host();
        let mut animator =
            IndicatorAnimator::initialize(&mut host, 3, &MotionOptions::default());

        animator.set_active(7);
        assert_eq!(animator.active(), None);

        animator.set_active(1);
        assert_eq!(animator.active(), Some(1));
    }

    #[test]
    fn test_unknown_timer_is_ignored() {
        let mut host = nav_host();
        let mut animator =
            IndicatorAnimator::initialize(&mut host, 3, &MotionOptions::default());

        animator.on_timer(&mut host, TimerHandle(9999));
        assert!(host.applied.is_empty());
        assert!(host.pending_frames.is_empty());
    }

    #[test]
    fn test_teardown_cancels_everything_pending() {
        let mut host = nav_host();
        let mut animator =
            IndicatorAnimator::initialize(&mut host, 3, &MotionOptions::default());

        animator.select(&mut host, 1);
        animator.notify_resize(&mut host);
        animator.teardown(&mut host);

        assert!(host.pending_frames.is_empty());
        assert!(host.pending_timers.is_empty());
        assert!(!animator.is_animating());
    }
}
