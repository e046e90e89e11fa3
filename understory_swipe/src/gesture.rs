// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan tracking: translations and release velocity from pointer positions.
//!
//! ## Usage
//!
//! 1) Call [`PanTracker::start`] with the press position and host clock.
//! 2) On each move, [`PanTracker::update`] returns the total translation since the press.
//! 3) Read [`PanTracker::velocity`] when the pointer is released, then [`PanTracker::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_swipe::{PanTracker, should_begin};
//!
//! let mut pan = PanTracker::default();
//! pan.start(Point::new(200.0, 20.0), 0);
//!
//! let translation = pan.update(Point::new(170.0, 24.0), 100).unwrap();
//! assert_eq!(translation, Vec2::new(-30.0, 4.0));
//! assert!(should_begin(translation));
//! assert_eq!(pan.velocity(), Vec2::new(-300.0, 40.0));
//! ```

use kurbo::{Point, Vec2};

/// Returns `true` when a drag is more horizontal than vertical.
///
/// Vertical and diagonal-tie drags are left to the host's scrolling.
#[must_use]
pub fn should_begin(translation: Vec2) -> bool {
    translation.x.abs() > translation.y.abs()
}

/// Tracks one pointer pan.
#[derive(Debug, Clone, Default, Copy)]
pub struct PanTracker {
    start: Option<Point>,
    last: Option<(Point, u64)>,
    velocity: Vec2,
}

impl PanTracker {
    /// Starts tracking a pan at `pos`.
    pub fn start(&mut self, pos: Point, now_ms: u64) {
        self.start = Some(pos);
        self.last = Some((pos, now_ms));
        self.velocity = Vec2::ZERO;
    }

    /// Records a move to `pos`, returning the total translation since the start.
    ///
    /// Samples with no elapsed time keep the previous velocity.
    pub fn update(&mut self, pos: Point, now_ms: u64) -> Option<Vec2> {
        let start = self.start?;
        if let Some((last_pos, last_ms)) = self.last
            && now_ms > last_ms
        {
            let seconds = (now_ms - last_ms) as f64 / 1000.0;
            self.velocity = (pos - last_pos) / seconds;
        }
        self.last = Some((pos, now_ms));
        Some(pos - start)
    }

    /// Total translation from the start to the last recorded position.
    #[must_use]
    pub fn translation(&self) -> Option<Vec2> {
        let start = self.start?;
        self.last.map(|(pos, _)| pos - start)
    }

    /// Translation from the start to `pos`, without recording a sample.
    #[must_use]
    pub fn translation_to(&self, pos: Point) -> Option<Vec2> {
        self.start.map(|start| pos - start)
    }

    /// Velocity between the last two samples, in units per second.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Stops tracking.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` between [`PanTracker::start`] and [`PanTracker::end`].
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
