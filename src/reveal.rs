//! Staggered reveal of card elements as they become visible.
//!
//! The host prepares cards hidden and reports visibility (typically from
//! an intersection observer); the sequencer schedules each card's reveal
//! after a per-index stagger delay and guarantees every card reveals at
//! most once. Hosts without a visibility observer call
//! [`RevealSequencer::reveal_all`] instead.

use web_time::Duration;

use crate::host::{CardSurface, TimerHandle};
use crate::options::RevealOptions;

/// Schedules one reveal per card, index-staggered and capped.
#[derive(Debug)]
pub struct RevealSequencer {
    stagger: Duration,
    max_stagger: Duration,
    /// Captured once at initialization; zeroes every delay.
    reduced_motion: bool,
    /// Whether a card's reveal has been scheduled or performed.
    revealed: Vec<bool>,
    /// Outstanding stagger timers, one per not-yet-revealed card.
    pending: Vec<(TimerHandle, usize)>,
}

impl RevealSequencer {
    /// Prepare `card_count` cards hidden and return the sequencer.
    pub fn prepare<H: CardSurface>(
        host: &mut H,
        card_count: usize,
        options: &RevealOptions,
    ) -> Self {
        for index in 0..card_count {
            host.prepare_card(index);
        }

        Self {
            stagger: options.stagger(),
            max_stagger: options.max_stagger(),
            reduced_motion: host.prefers_reduced_motion(),
            revealed: vec![false; card_count],
            pending: Vec::new(),
        }
    }

    /// Number of cards under management.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.revealed.len()
    }

    /// Whether the card at `index` has been revealed (or its reveal is
    /// already scheduled).
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// The host observed the card at `index` entering the viewport.
    ///
    /// Schedules the reveal after `min(index * stagger, max_stagger)`,
    /// or immediately under reduced motion. Repeat notifications and
    /// out-of-range indices are ignored.
    pub fn card_visible<H: CardSurface>(
        &mut self,
        host: &mut H,
        index: usize,
    ) {
        let Some(slot) = self.revealed.get_mut(index) else {
            return;
        };
        if *slot {
            return;
        }
        *slot = true;

        let delay = if self.reduced_motion {
            Duration::ZERO
        } else {
            (self.stagger * index as u32).min(self.max_stagger)
        };

        if delay.is_zero() {
            host.reveal_card(index);
        } else {
            let handle = host.start_timer(delay);
            self.pending.push((handle, index));
        }
    }

    /// A stagger timer fired; reveal its card. Unknown handles are
    /// ignored.
    pub fn on_timer<H: CardSurface>(
        &mut self,
        host: &mut H,
        handle: TimerHandle,
    ) {
        if let Some(position) =
            self.pending.iter().position(|(h, _)| *h == handle)
        {
            let (_, index) = self.pending.swap_remove(position);
            host.reveal_card(index);
        }
    }

    /// Reveal every card immediately, cancelling outstanding stagger
    /// timers. Fallback for hosts without a visibility observer.
    pub fn reveal_all<H: CardSurface>(&mut self, host: &mut H) {
        for (handle, index) in self.pending.drain(..) {
            host.cancel_timer(handle);
            host.reveal_card(index);
        }
        for (index, slot) in self.revealed.iter_mut().enumerate() {
            if !*slot {
                *slot = true;
                host.reveal_card(index);
            }
        }
    }

    /// Cancel outstanding stagger timers without revealing.
    pub fn teardown<H: CardSurface>(&mut self, host: &mut H) {
        for (handle, _) in self.pending.drain(..) {
            host.cancel_timer(handle);
        }
    }
}
