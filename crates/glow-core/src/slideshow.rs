//! # Slideshow State Machine
//!
//! The hero slideshow as a pure state machine: index cycling and the
//! playing/paused flag, with no timers. The timer lives in glow-engine's
//! driver; this machine only knows how to transition.
//!
//! ## States and Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Slideshow Transitions                               │
//! │                                                                         │
//! │              advance / back / go_to(k)                                  │
//! │                   ┌──────────┐                                          │
//! │                   ▼          │                                          │
//! │   ┌───────────────────┐   toggle   ┌───────────────────┐               │
//! │   │  playing(index)   │◄──────────►│  paused(index)    │               │
//! │   └───────────────────┘            └───────────────────┘               │
//! │                   ▲          │        ▲          │                      │
//! │                   └──────────┘        └──────────┘                      │
//! │                                advance / back / go_to(k)                │
//! │                                                                         │
//! │  Initial state: index = 0, playing                                      │
//! │  go_to(k) with k >= slide_count: rejected, state unchanged              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Slide State
// =============================================================================

/// Snapshot of the slideshow for observers (frontend, tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SlideState {
    /// Current slide index; always < `slide_count`.
    pub index: usize,

    /// Whether the auto-advance timer should be running.
    pub playing: bool,

    /// Fixed number of slides in the deck.
    pub slide_count: usize,
}

// =============================================================================
// Slideshow Machine
// =============================================================================

/// The slideshow state machine.
///
/// All navigation works in both the playing and paused states and never
/// changes the playing flag; `toggle` never changes the index.
#[derive(Debug, Clone)]
pub struct Slideshow {
    index: usize,
    playing: bool,
    slide_count: usize,
}

impl Slideshow {
    /// Creates a slideshow over `slide_count` slides, starting at index 0,
    /// playing.
    ///
    /// ## Panics
    /// Panics when `slide_count` is zero - a deck without slides is a
    /// construction bug, not a runtime condition.
    pub fn new(slide_count: usize) -> Self {
        assert!(slide_count > 0, "slideshow requires at least one slide");
        Slideshow {
            index: 0,
            playing: true,
            slide_count,
        }
    }

    /// Current slide index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the slideshow is auto-advancing.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Number of slides in the deck.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Snapshot for observers.
    pub fn state(&self) -> SlideState {
        SlideState {
            index: self.index,
            playing: self.playing,
            slide_count: self.slide_count,
        }
    }

    /// Moves to the next slide, wrapping at the end.
    ///
    /// Used both for manual "next" navigation and the driver's timer tick.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.slide_count;
        self.index
    }

    /// Moves to the previous slide, wrapping at the start.
    pub fn back(&mut self) -> usize {
        self.index = (self.index + self.slide_count - 1) % self.slide_count;
        self.index
    }

    /// Jumps to slide `k`.
    ///
    /// Rejects out-of-range indices with `CoreError::InvalidSlideIndex`,
    /// leaving the state untouched.
    pub fn go_to(&mut self, k: usize) -> CoreResult<()> {
        if k >= self.slide_count {
            return Err(CoreError::InvalidSlideIndex {
                requested: k,
                slide_count: self.slide_count,
            });
        }
        self.index = k;
        Ok(())
    }

    /// Flips playing <-> paused; the index is untouched.
    ///
    /// Returns the new playing flag so the driver knows whether to re-arm
    /// its timer.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
