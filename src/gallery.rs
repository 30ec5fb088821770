// SPDX-License-Identifier: MPL-2.0
//! Slide navigation state for the gallery lightbox.
//!
//! This module provides the shared `Gallery` value used by the application
//! update loop and the lightbox views as the single source of truth for the
//! currently selected slide.

use crate::error::{Error, Result};

/// Navigation state over an ordered set of slides.
///
/// The current slide is tracked as a 1-based index in `[1, N]`, mirroring the
/// numbering shown to the user. Stepping wraps around at both ends, so the
/// gallery behaves as a ring regardless of where navigation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    /// Number of slides in the gallery.
    len: usize,
    /// Currently selected slide, 1-based.
    index: usize,
}

impl Gallery {
    /// Creates a gallery over `len` slides, positioned on slide 1.
    ///
    /// Returns an error for an empty gallery: with no slides there is no
    /// index that could satisfy the one-visible-slide invariant.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::Manifest("gallery has no slides".to_string()));
        }
        Ok(Self { len, index: 1 })
    }

    /// Returns the number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: construction rejects empty galleries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current slide index, 1-based.
    pub fn current(&self) -> usize {
        self.index
    }

    /// Returns the current slide as a 0-based position for collection lookup.
    pub fn position(&self) -> usize {
        self.index - 1
    }

    /// Steps the current slide by `delta`, wrapping around in both
    /// directions. Deltas of any magnitude are accepted; the result is the
    /// modular walk `((index + delta - 1) mod len) + 1`.
    pub fn advance(&mut self, delta: i32) {
        let len = self.len as i64;
        let zero_based = (self.index as i64 - 1 + i64::from(delta)).rem_euclid(len);
        self.index = zero_based as usize + 1;
    }

    /// Jumps directly to slide `n` (1-based).
    ///
    /// Out-of-range targets reset rather than wrap arithmetically: anything
    /// above the last slide lands on slide 1, anything below slide 1 lands
    /// on the last slide. In-range targets are taken as-is.
    pub fn go_to(&mut self, n: i64) {
        self.index = if n > self.len as i64 {
            1
        } else if n < 1 {
            self.len
        } else {
            n as usize
        };
    }

    /// Checks whether `n` (1-based) is the current slide.
    pub fn is_current(&self, n: usize) -> bool {
        self.index == n
    }
}
