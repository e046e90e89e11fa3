// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipeable row surface: pointer routing into a [`SwipeController`].
//!
//! A [`SwipeRow`] watches raw pointer events. Small movements stay
//! [`GestureOutcome::Pending`]; once the pointer travels past the begin
//! threshold, a horizontal drag is claimed for swiping and anything else is
//! passed through so the host can scroll.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_swipe::{
//!     GestureOutcome, NoFeedback, Orientation, SwipeAction, SwipeDelegate, SwipeRow,
//! };
//!
//! struct Rows;
//! impl SwipeDelegate<u32, ()> for Rows {
//!     fn actions(&mut self, _row: &u32, _o: Orientation) -> Vec<SwipeAction<()>> {
//!         vec![SwipeAction::new((), "Archive")]
//!     }
//! }
//!
//! let mut row = SwipeRow::new(1_u32, Size::new(320.0, 44.0));
//! let (mut rows, mut haptics) = (Rows, NoFeedback);
//!
//! row.pointer_down(Point::new(300.0, 20.0), 0);
//! let moved = row.pointer_move(&mut rows, &mut haptics, Point::new(295.0, 21.0), 10);
//! assert_eq!(moved, GestureOutcome::Pending);
//! let moved = row.pointer_move(&mut rows, &mut haptics, Point::new(250.0, 22.0), 20);
//! assert_eq!(moved, GestureOutcome::Claimed);
//! assert_eq!(row.controller().offset(), 50.0);
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Size};

use crate::{
    AnimationId, HapticFeedback, ListId, Orientation, PanTracker, SwipeController, SwipeDelegate,
    SwipeState, should_begin,
};

/// Pointer travel, in row units, before a gesture is recognized or passed through.
pub const DEFAULT_BEGIN_THRESHOLD: f64 = 10.0;

/// What a row did with a pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureOutcome {
    /// No gesture is being tracked.
    Ignored,
    /// Tracking, but the pointer has not moved far enough to decide.
    Pending,
    /// The row owns the gesture and is swiping.
    Claimed,
    /// The gesture belongs to the host, typically for vertical scrolling.
    PassThrough,
    /// The row recognized a swipe but the delegate refused it.
    Refused,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Pending,
    Claimed,
    PassThrough,
    Refused,
}

impl Phase {
    fn outcome(self) -> GestureOutcome {
        match self {
            Self::Idle => GestureOutcome::Ignored,
            Self::Pending => GestureOutcome::Pending,
            Self::Claimed => GestureOutcome::Claimed,
            Self::PassThrough => GestureOutcome::PassThrough,
            Self::Refused => GestureOutcome::Refused,
        }
    }
}

/// An action exposed to assistive technology.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessibilityAction {
    /// Edge the action lives on.
    pub orientation: Orientation,
    /// Button index within that edge.
    pub index: usize,
    /// Spoken label, if the action has one.
    pub label: Option<String>,
}

/// A swipeable row.
#[derive(Clone, Debug)]
pub struct SwipeRow<K, A> {
    controller: SwipeController<K, A>,
    pan: PanTracker,
    phase: Phase,
    list: Option<ListId>,
    begin_threshold: f64,
}

impl<K: Debug, A> SwipeRow<K, A> {
    /// Creates a detached row resting at center.
    #[must_use]
    pub fn new(key: K, size: Size) -> Self {
        Self {
            controller: SwipeController::new(key, size),
            pan: PanTracker::default(),
            phase: Phase::Idle,
            list: None,
            begin_threshold: DEFAULT_BEGIN_THRESHOLD,
        }
    }

    /// Sets the pointer travel needed before a gesture is decided.
    #[must_use]
    pub fn with_begin_threshold(mut self, threshold: f64) -> Self {
        self.begin_threshold = threshold.max(0.0);
        self
    }

    /// The row key.
    #[must_use]
    pub fn key(&self) -> &K {
        self.controller.row()
    }

    /// The row's controller.
    #[must_use]
    pub fn controller(&self) -> &SwipeController<K, A> {
        &self.controller
    }

    /// Mutable access to the row's controller.
    pub fn controller_mut(&mut self) -> &mut SwipeController<K, A> {
        &mut self.controller
    }

    /// Shortcut for the controller's state.
    #[must_use]
    pub fn state(&self) -> SwipeState {
        self.controller.state()
    }

    /// Resizes the row.
    pub fn set_size(&mut self, size: Size) {
        self.controller.set_row_size(size);
    }

    /// The list this row is attached to.
    #[must_use]
    pub fn list(&self) -> Option<ListId> {
        self.list
    }

    /// Attaches the row to `list`, or detaches it with `None`.
    pub fn did_move_to_list(&mut self, list: Option<ListId>) {
        self.list = list;
    }

    /// Gives up the current pointer stream; later moves are ignored.
    pub(crate) fn refuse_gesture(&mut self) {
        self.phase = Phase::Refused;
    }

    /// Pointer pressed at `pos` (row coordinates).
    pub fn pointer_down(&mut self, pos: Point, now_ms: u64) {
        self.pan.start(pos, now_ms);
        self.phase = Phase::Pending;
    }

    /// Returns `true` when moving to `pos` would claim the gesture for swiping.
    ///
    /// Records nothing; lists use it to close other rows first.
    #[must_use]
    pub fn recognizes(&self, pos: Point) -> bool {
        if self.phase != Phase::Pending || self.controller.is_triggered() {
            return false;
        }
        self.pan
            .translation_to(pos)
            .is_some_and(|t| self.exceeds_threshold(t.hypot2()) && should_begin(t))
    }

    /// Pointer moved to `pos`.
    pub fn pointer_move<D, H>(
        &mut self,
        delegate: &mut D,
        haptics: &mut H,
        pos: Point,
        now_ms: u64,
    ) -> GestureOutcome
    where
        D: SwipeDelegate<K, A> + ?Sized,
        H: HapticFeedback + ?Sized,
    {
        let Some(translation) = self.pan.update(pos, now_ms) else {
            return GestureOutcome::Ignored;
        };
        match self.phase {
            Phase::Pending => {
                if !self.exceeds_threshold(translation.hypot2()) {
                    return GestureOutcome::Pending;
                }
                if !should_begin(translation) {
                    self.phase = Phase::PassThrough;
                    return GestureOutcome::PassThrough;
                }
                self.controller.begin_pan();
                self.phase = if self.controller.update_pan(delegate, haptics, translation) {
                    Phase::Claimed
                } else {
                    Phase::Refused
                };
            }
            Phase::Claimed => {
                if !self.controller.update_pan(delegate, haptics, translation) {
                    // The row was hidden or triggered mid-drag.
                    self.controller.cancel_pan(delegate, haptics, now_ms);
                    self.phase = Phase::Refused;
                }
            }
            Phase::Idle | Phase::PassThrough | Phase::Refused => {}
        }
        self.phase.outcome()
    }

    /// Pointer released at `pos`. Returns the outcome of the finished gesture.
    pub fn pointer_up<D, H>(
        &mut self,
        delegate: &mut D,
        haptics: &mut H,
        pos: Point,
        now_ms: u64,
    ) -> GestureOutcome
    where
        D: SwipeDelegate<K, A> + ?Sized,
        H: HapticFeedback + ?Sized,
    {
        let phase = core::mem::replace(&mut self.phase, Phase::Idle);
        if phase == Phase::Claimed {
            if let Some(translation) = self.pan.update(pos, now_ms) {
                self.controller.update_pan(delegate, haptics, translation);
            }
            let velocity = self.pan.velocity();
            self.controller.end_pan(delegate, haptics, velocity, now_ms);
        }
        self.pan.end();
        phase.outcome()
    }

    /// The pointer stream was interrupted.
    pub fn pointer_cancel<D, H>(&mut self, delegate: &mut D, haptics: &mut H, now_ms: u64)
    where
        D: SwipeDelegate<K, A> + ?Sized,
        H: HapticFeedback + ?Sized,
    {
        let phase = core::mem::replace(&mut self.phase, Phase::Idle);
        if phase == Phase::Claimed {
            self.controller.cancel_pan(delegate, haptics, now_ms);
        }
        self.pan.end();
    }

    /// See [`SwipeController::tap`].
    pub fn tap<D>(&mut self, delegate: &mut D, location: Point, now_ms: u64) -> bool
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        self.controller.tap(delegate, location, now_ms)
    }

    /// See [`SwipeController::select_action`].
    pub fn select_action<D, H>(
        &mut self,
        delegate: &mut D,
        haptics: &mut H,
        index: usize,
        now_ms: u64,
    ) -> bool
    where
        D: SwipeDelegate<K, A> + ?Sized,
        H: HapticFeedback + ?Sized,
    {
        self.controller.select_action(delegate, haptics, index, now_ms)
    }

    /// See [`SwipeController::hide`].
    pub fn hide<D>(&mut self, delegate: &mut D, animated: bool, now_ms: u64)
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        self.controller.hide(delegate, animated, now_ms);
    }

    /// See [`SwipeController::reset`].
    pub fn reset<D>(&mut self, delegate: &mut D)
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        self.controller.reset(delegate);
    }

    /// See [`SwipeController::tick`].
    pub fn tick<D>(&mut self, delegate: &mut D, now_ms: u64)
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        self.controller.tick(delegate, now_ms);
    }

    /// See [`SwipeController::complete_animation`].
    pub fn complete_animation<D>(&mut self, delegate: &mut D, id: AnimationId) -> bool
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        self.controller.complete_animation(delegate, id)
    }

    /// The host list this row belongs to started scrolling.
    ///
    /// Detached rows ignore this.
    pub fn list_did_begin_scrolling<D>(&mut self, delegate: &mut D, now_ms: u64)
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        if self.list.is_some() {
            self.controller.host_did_scroll(delegate, now_ms);
        }
    }

    /// Actions on both edges, as exposed to assistive technology.
    pub fn accessibility_actions<D>(&self, delegate: &mut D) -> Vec<AccessibilityAction>
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        let row = self.controller.row();
        let mut out = Vec::new();
        for orientation in [Orientation::Left, Orientation::Right] {
            if !delegate.can_begin_editing(row, orientation) {
                continue;
            }
            let actions = delegate.actions(row, orientation);
            out.extend(actions.iter().enumerate().map(|(index, action)| {
                AccessibilityAction {
                    orientation,
                    index,
                    label: action.label().map(String::from),
                }
            }));
        }
        out
    }

    /// Reveals `orientation` without a drag and selects action `index`.
    pub fn perform_accessibility_action<D, H>(
        &mut self,
        delegate: &mut D,
        haptics: &mut H,
        orientation: Orientation,
        index: usize,
        now_ms: u64,
    ) -> bool
    where
        D: SwipeDelegate<K, A> + ?Sized,
        H: HapticFeedback + ?Sized,
    {
        self.controller
            .perform_action(delegate, haptics, orientation, index, now_ms)
    }

    /// Resets the row and forgets any pointer in progress, before the host reuses it.
    pub fn prepare_for_reuse<D>(&mut self, delegate: &mut D)
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        self.controller.reset(delegate);
        self.pan.end();
        self.phase = Phase::Idle;
    }

    fn exceeds_threshold(&self, distance_squared: f64) -> bool {
        distance_squared > self.begin_threshold * self.begin_threshold
    }
}
