// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Host-agnostic micro-interaction engine for a single page.
//!
//! Glide owns the state and algorithms behind four small page behaviors
//! (an animated navigation indicator, theme persistence, scroll-triggered
//! card reveals, and a minimal carousel), while the host (a DOM bridge, a
//! native shell, or a test harness) owns the elements, events, timers, and
//! frame scheduling, injected through the traits in [`host`].
//!
//! # Key entry points
//!
//! - [`animation::IndicatorAnimator`] - the frame-driven selection marker,
//!   the algorithmic core of the crate
//! - [`theme::ThemeController`] - explicit/system theme resolution with
//!   persistence
//! - [`reveal::RevealSequencer`] - staggered reveal of card elements
//! - [`carousel::Carousel`] - ordered ring rotation
//! - [`options::Options`] - runtime tuning (smoothing, debounce, stagger)
//!
//! # Architecture
//!
//! Everything runs on the host's single UI thread. The crate never blocks
//! and never sleeps: suspension is expressed as cancellable handles the
//! host issues for one-shot timers and display-refresh callbacks. Each
//! component keeps at most one pending handle per slot and always cancels
//! the previous handle before arming a replacement, so no two callbacks
//! ever race over the same state.

pub mod animation;
pub mod carousel;
pub mod error;
pub mod host;
pub mod options;
pub mod reveal;
pub mod theme;
