//! Deterministic demo: drives the page behaviors against a simulated
//! host and logs what a real DOM bridge would render.

use glide::animation::IndicatorAnimator;
use glide::carousel::{Carousel, CarouselCommand};
use glide::host::{
    Accessibility, CardSurface, FrameHandle, NavSurface, Rect, Scheduler,
    TimerHandle,
};
use glide::options::Options;
use glide::reveal::RevealSequencer;
use glide::theme::{Theme, ThemeController, ThemeSink, ThemeStore};
use web_time::Duration;

/// Stand-in for the DOM: elements, timers, and frame callbacks.
struct SimulatedPage {
    container: Rect,
    nav_targets: Vec<Rect>,
    next_handle: u64,
    pending_frames: Vec<FrameHandle>,
    pending_timers: Vec<(TimerHandle, Duration)>,
    frames_rendered: u64,
}

impl SimulatedPage {
    fn new() -> Self {
        Self {
            container: Rect::new(24.0, 640.0),
            nav_targets: vec![
                Rect::new(40.0, 52.0),
                Rect::new(108.0, 64.0),
                Rect::new(188.0, 48.0),
                Rect::new(252.0, 76.0),
            ],
            next_handle: 0,
            pending_frames: Vec::new(),
            pending_timers: Vec::new(),
            frames_rendered: 0,
        }
    }

    /// Deliver pending frame callbacks until the cycle stops
    /// rescheduling.
    fn run_to_convergence(&mut self, animator: &mut IndicatorAnimator) {
        while let Some(handle) = self.pending_frames.pop() {
            animator.on_frame(self, handle);
        }
    }

    /// Fire the soonest pending timer, if any.
    fn fire_next_timer(&mut self, animator: &mut IndicatorAnimator) {
        self.pending_timers.sort_by_key(|(_, delay)| *delay);
        if self.pending_timers.is_empty() {
            return;
        }
        let (handle, _) = self.pending_timers.remove(0);
        animator.on_timer(self, handle);
    }
}

impl Scheduler for SimulatedPage {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_handle += 1;
        let handle = FrameHandle(self.next_handle);
        self.pending_frames.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending_frames.retain(|h| *h != handle);
    }

    fn start_timer(&mut self, delay: Duration) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.pending_timers.push((handle, delay));
        handle
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        self.pending_timers.retain(|(h, _)| *h != handle);
    }
}

impl Accessibility for SimulatedPage {
    fn prefers_reduced_motion(&self) -> bool {
        false
    }
}

impl NavSurface for SimulatedPage {
    fn container_rect(&self) -> Rect {
        self.container
    }

    fn target_rect(&self, index: usize) -> Rect {
        self.nav_targets.get(index).copied().unwrap_or_default()
    }

    fn apply_marker(&mut self, x: f32, width: f32) {
        self.frames_rendered += 1;
        log::debug!("marker frame: x={x:.2} width={width:.2}");
    }

    fn set_marker_visible(&mut self, visible: bool) {
        log::debug!("marker visible: {visible}");
    }
}

impl CardSurface for SimulatedPage {
    fn prepare_card(&mut self, index: usize) {
        log::debug!("card {index} hidden");
    }

    fn reveal_card(&mut self, index: usize) {
        log::info!("card {index} revealed");
    }
}

impl ThemeSink for SimulatedPage {
    fn apply_theme(&mut self, theme: Theme) {
        log::info!("page theme: {}", theme.as_str());
    }
}

struct MemoryStore {
    value: Option<Theme>,
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<Theme> {
        self.value
    }

    fn save(&mut self, theme: Theme) {
        self.value = Some(theme);
    }
}

fn main() {
    env_logger::init();

    let options = Options::default();
    let mut page = SimulatedPage::new();

    // Theme: no stored preference, dark system default, user toggles
    let mut store = MemoryStore { value: None };
    let mut theme =
        ThemeController::initialize(&mut page, &store, Theme::Dark);
    theme.toggle(&mut page, &mut store);
    log::info!(
        "theme persisted: {:?}",
        store.load().map(Theme::as_str)
    );

    // Indicator: startup selection, hover, click, then a resize storm
    let target_count = page.nav_targets.len();
    let mut animator =
        IndicatorAnimator::initialize(&mut page, target_count, &options.motion);

    page.fire_next_timer(&mut animator);
    page.run_to_convergence(&mut animator);
    log::info!(
        "startup selection converged to {:?} after {} frames",
        animator.state().current(),
        page.frames_rendered
    );

    animator.select(&mut page, 2);
    page.run_to_convergence(&mut animator);
    log::info!("hover converged to {:?}", animator.state().current());

    animator.set_active(3);
    animator.select(&mut page, 3);
    page.run_to_convergence(&mut animator);

    for _ in 0..5 {
        animator.notify_resize(&mut page);
    }
    page.container = Rect::new(16.0, 520.0);
    page.fire_next_timer(&mut animator);
    page.run_to_convergence(&mut animator);
    log::info!(
        "after resize, marker tracks active target: {:?}",
        animator.state().current()
    );

    // Reveal: three cards scroll into view, the rest get the fallback
    let mut sequencer =
        RevealSequencer::prepare(&mut page, 6, &options.reveal);
    for index in 0..3 {
        sequencer.card_visible(&mut page, index);
    }
    loop {
        page.pending_timers.sort_by_key(|(_, delay)| *delay);
        let Some((handle, _)) = page.pending_timers.first().copied() else {
            break;
        };
        page.pending_timers.retain(|(h, _)| *h != handle);
        sequencer.on_timer(&mut page, handle);
    }
    sequencer.reveal_all(&mut page);

    // Carousel: two forward, one back
    let mut carousel =
        Carousel::from_items(vec!["alpha", "beta", "gamma", "delta"]);
    carousel.apply(CarouselCommand::Next);
    carousel.apply(CarouselCommand::Next);
    carousel.apply(CarouselCommand::Prev);
    let order: Vec<&str> = carousel.iter().copied().collect();
    log::info!("carousel order: {order:?}");
}
