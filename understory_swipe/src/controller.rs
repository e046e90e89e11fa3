// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipe state machine.
//!
//! A [`SwipeController`] turns pan translations into a drag offset, decides
//! whether a released row opens or snaps back, runs action dispositions, and
//! reports every checkpoint to a [`SwipeDelegate`].
//!
//! ## Lifecycle
//!
//! 1) [`SwipeController::begin_pan`] when a horizontal drag is recognized. Any
//!    in-flight animation is cancelled.
//! 2) [`SwipeController::update_pan`] with the total translation on every move.
//!    The first update with a direction asks the delegate for actions; refusing
//!    leaves the row at center for the rest of the gesture.
//! 3) [`SwipeController::end_pan`] with the release velocity. The row either
//!    opens or animates back and settles at center.
//! 4) [`SwipeController::tick`] with the host clock until
//!    [`SwipeController::is_animating`] turns false.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Size, Vec2};
//! use understory_swipe::{
//!     NoFeedback, Orientation, SwipeAction, SwipeController, SwipeDelegate, SwipeState,
//! };
//!
//! struct Rows;
//! impl SwipeDelegate<u32, ()> for Rows {
//!     fn actions(&mut self, _row: &u32, o: Orientation) -> Vec<SwipeAction<()>> {
//!         match o {
//!             Orientation::Right => vec![SwipeAction::destructive((), "Delete")],
//!             _ => vec![],
//!         }
//!     }
//! }
//!
//! let mut swipe = SwipeController::new(7_u32, Size::new(320.0, 44.0));
//! let (mut rows, mut haptics) = (Rows, NoFeedback);
//!
//! swipe.begin_pan();
//! assert!(swipe.update_pan(&mut rows, &mut haptics, Vec2::new(-60.0, 0.0)));
//! assert_eq!(swipe.state(), SwipeState::Dragging(Orientation::Right));
//!
//! swipe.end_pan(&mut rows, &mut haptics, Vec2::ZERO, 0);
//! assert_eq!(swipe.state(), SwipeState::Open(Orientation::Right));
//! swipe.tick(&mut rows, 1_000);
//! assert_eq!(swipe.visible_width(), 74.0);
//! ```

use core::fmt::Debug;

use kurbo::{Point, Size, Vec2};
use tracing::{debug, trace, warn};

use crate::{
    ActionsView, Animation, AnimationId, AnimationKind, Disposition, ExpansionCompletion,
    HapticFeedback, ImpactStyle, Orientation, SwipeDelegate, SwipeError, SwipeOptions, SwipeState,
};

/// Damps `raw` once it passes `limit`.
///
/// Below the limit the value passes through. Past it the excess follows a
/// rubber-band curve with coefficient `coefficient`, approaching but never
/// reaching `2 × limit`.
#[must_use]
pub fn rubber_band(raw: f64, limit: f64, coefficient: f64) -> f64 {
    if raw <= limit || limit <= 0.0 {
        return raw;
    }
    let excess = raw - limit;
    limit + (1.0 - 1.0 / (excess * coefficient / limit + 1.0)) * limit
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Pan {
    Idle,
    Active,
    Refused,
}

/// Drives one row through center, dragging, and open states.
///
/// `K` identifies the row towards the delegate; `A` is the action handle type.
#[derive(Clone, Debug)]
pub struct SwipeController<K, A> {
    row: K,
    row_size: Size,
    state: SwipeState,
    actions: Option<ActionsView<A>>,
    options: SwipeOptions,
    offset: f64,
    pan_origin: f64,
    pan: Pan,
    animation: Option<Animation>,
    next_animation_id: u64,
    collapse: f64,
    pending: Option<Disposition>,
}

impl<K: Debug, A> SwipeController<K, A> {
    /// Creates a controller for `row`, resting at center.
    #[must_use]
    pub fn new(row: K, row_size: Size) -> Self {
        Self {
            row,
            row_size,
            state: SwipeState::Center,
            actions: None,
            options: SwipeOptions::default(),
            offset: 0.0,
            pan_origin: 0.0,
            pan: Pan::Idle,
            animation: None,
            next_animation_id: 0,
            collapse: 1.0,
            pending: None,
        }
    }

    /// The row this controller drives.
    #[must_use]
    pub fn row(&self) -> &K {
        &self.row
    }

    /// Current row size.
    #[must_use]
    pub fn row_size(&self) -> Size {
        self.row_size
    }

    /// Updates the row size, relaying the new height to the actions.
    pub fn set_row_size(&mut self, size: Size) {
        self.row_size = size;
        if let Some(view) = self.actions.as_mut() {
            view.set_content_height(size.height);
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SwipeState {
        self.state
    }

    /// Current drag offset; never negative.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Width of the revealed actions, zero when none are shown.
    #[must_use]
    pub fn visible_width(&self) -> f64 {
        self.actions.as_ref().map_or(0.0, ActionsView::visible_width)
    }

    /// The actions container of the current reveal cycle.
    #[must_use]
    pub fn actions_view(&self) -> Option<&ActionsView<A>> {
        self.actions.as_ref()
    }

    /// Options of the current reveal cycle.
    #[must_use]
    pub fn options(&self) -> &SwipeOptions {
        &self.options
    }

    /// The in-flight animation, if any.
    #[must_use]
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Height/alpha fraction of the row: `1.0` normally, shrinking to `0.0`
    /// while a deleted row collapses. Restored by [`SwipeController::reset`].
    #[must_use]
    pub fn collapse_fraction(&self) -> f64 {
        self.collapse
    }

    /// Returns `true` between selecting an action and finishing its disposition
    /// (filling or collapsing). Gestures and hides are ignored meanwhile.
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.pending.is_some()
            || self
                .animation
                .is_some_and(|a| a.kind == AnimationKind::Collapse)
    }

    /// Starts a new gesture, cancelling any in-flight animation.
    pub fn begin_pan(&mut self) {
        if self.is_triggered() {
            self.pan = Pan::Refused;
            return;
        }
        if let Some(cancelled) = self.animation.take() {
            debug!(row = ?self.row, id = ?cancelled.id, "pan cancelled animation");
        }
        self.pan_origin = self.offset;
        self.pan = Pan::Active;
        if let Some(view) = &self.actions {
            self.state = SwipeState::Dragging(view.orientation());
        }
    }

    /// Follows the gesture's total `translation` since it began.
    ///
    /// Returns `false` while the gesture has no direction yet, or after it was
    /// refused or interrupted by a hide; the row then stays where it is.
    pub fn update_pan<D, H>(
        &mut self,
        delegate: &mut D,
        haptics: &mut H,
        translation: Vec2,
    ) -> bool
    where
        D: SwipeDelegate<K, A> + ?Sized,
        H: HapticFeedback + ?Sized,
    {
        match self.pan {
            Pan::Refused => return false,
            Pan::Idle => self.begin_pan(),
            Pan::Active => {}
        }
        if self.pan != Pan::Active {
            return false;
        }
        if self.actions.is_none() {
            let orientation = Orientation::from_translation(translation.x);
            if orientation.is_none() {
                return false;
            }
            if !self.begin_editing(delegate, haptics, orientation) {
                self.pan = Pan::Refused;
                return false;
            }
        }
        let Some(view) = self.actions.as_ref() else {
            return false;
        };
        let orientation = view.orientation();
        let preferred = view.preferred_width();
        let raw = (self.pan_origin + translation.x * orientation.scale()).max(0.0);
        let offset = self.resist(raw, preferred);
        let previous = self.offset;
        self.set_offset(offset);
        self.state = SwipeState::Dragging(orientation);

        if previous < preferred && offset >= preferred {
            haptics.impact_occurred(ImpactStyle::Light);
        }
        if let Some(style) = &self.options.expansion_style {
            let expanded =
                style.should_expand(offset, translation.x.abs(), self.row_size.width, preferred);
            if let Some(view) = self.actions.as_mut()
                && view.set_expanded(expanded)
            {
                debug!(row = ?self.row, expanded, "expansion changed");
                haptics.impact_occurred(ImpactStyle::Medium);
            }
        }
        true
    }

    /// Ends the gesture with the release `velocity` (units per second).
    ///
    /// Expanded actions trigger the expandable action. Otherwise the row opens
    /// when the offset reaches the reveal fraction of the actions' width or the
    /// velocity flicks towards the reveal direction, and snaps back otherwise.
    pub fn end_pan<D, H>(&mut self, delegate: &mut D, haptics: &mut H, velocity: Vec2, now_ms: u64)
    where
        D: SwipeDelegate<K, A> + ?Sized,
        H: HapticFeedback + ?Sized,
    {
        let pan = core::mem::replace(&mut self.pan, Pan::Idle);
        if pan != Pan::Active {
            return;
        }
        let Some(view) = self.actions.as_ref() else {
            return;
        };
        if view.is_expanded()
            && let Some(index) = view.expandable_index()
        {
            self.trigger(delegate, haptics, index, true, now_ms);
            return;
        }
        let orientation = view.orientation();
        let threshold = view.preferred_width() * self.options.reveal_fraction;
        let flick = velocity.x * orientation.scale() > self.options.flick_velocity;
        if self.offset >= threshold || flick {
            self.open(now_ms);
        } else {
            debug!(row = ?self.row, offset = self.offset, "released below threshold");
            self.start_animation(AnimationKind::Close, self.offset, 0.0, now_ms);
        }
    }

    /// Ends the gesture without a release velocity.
    pub fn cancel_pan<D, H>(&mut self, delegate: &mut D, haptics: &mut H, now_ms: u64)
    where
        D: SwipeDelegate<K, A> + ?Sized,
        H: HapticFeedback + ?Sized,
    {
        self.end_pan(delegate, haptics, Vec2::ZERO, now_ms);
    }

    /// Selects the action behind button `index`.
    ///
    /// Runs the delegate's handler, then the action's [`Disposition`].
    /// Returns `false` when no such action is shown or a previous selection is
    /// still finishing.
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
        self.trigger(delegate, haptics, index, false, now_ms)
    }

    /// Reveals the `orientation` actions without a drag and selects `index`.
    ///
    /// Used for assistive technology. Fails when the delegate refuses or the
    /// row is busy with the other edge.
    pub fn perform_action<D, H>(
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
        match self.actions.as_ref().map(ActionsView::orientation) {
            Some(current) if current != orientation => return false,
            Some(_) => {}
            None => {
                if orientation.is_none() || !self.begin_editing(delegate, haptics, orientation) {
                    return false;
                }
            }
        }
        self.trigger(delegate, haptics, index, false, now_ms)
    }

    /// Returns the row to center.
    ///
    /// Animated hides switch to [`SwipeState::Center`] right away and keep the
    /// actions until the close animation settles. A gesture in progress is
    /// ignored until the next [`SwipeController::begin_pan`].
    pub fn hide<D>(&mut self, delegate: &mut D, animated: bool, now_ms: u64)
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        if self.actions.is_none() || self.is_triggered() {
            return;
        }
        self.interrupt_pan();
        if !animated {
            self.reset(delegate);
            return;
        }
        debug!(row = ?self.row, "hiding");
        self.state = SwipeState::Center;
        self.start_animation(AnimationKind::Close, self.offset, 0.0, now_ms);
    }

    /// Drops the actions immediately and rests at center.
    ///
    /// Also restores the collapse fraction, so it doubles as preparation for reuse.
    pub fn reset<D>(&mut self, delegate: &mut D)
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        self.animation = None;
        self.pending = None;
        self.interrupt_pan();
        self.collapse = 1.0;
        self.teardown(delegate);
    }

    /// Handles a tap at `location` (row coordinates).
    ///
    /// Taps outside the revealed actions hide an active row and return `true`.
    /// Taps on the actions are left to the host, which maps them to
    /// [`SwipeController::select_action`].
    pub fn tap<D>(&mut self, delegate: &mut D, location: Point, now_ms: u64) -> bool
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        let Some(view) = &self.actions else {
            return false;
        };
        if !self.state.is_active() || self.is_triggered() {
            return false;
        }
        let on_actions = match view.orientation() {
            Orientation::Left => location.x <= self.offset,
            Orientation::Right => location.x >= self.row_size.width - self.offset,
            Orientation::None => false,
        };
        if on_actions {
            return false;
        }
        self.hide(delegate, true, now_ms);
        true
    }

    /// The host list started scrolling.
    pub fn host_did_scroll<D>(&mut self, delegate: &mut D, now_ms: u64)
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        if self.state.is_active() {
            self.hide(delegate, true, now_ms);
        }
    }

    /// Samples the in-flight animation at `now_ms`, finishing it when due.
    pub fn tick<D>(&mut self, delegate: &mut D, now_ms: u64)
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        let Some(animation) = self.animation else {
            return;
        };
        let finished = animation.is_finished(now_ms);
        let value = if finished {
            animation.to
        } else {
            animation.value_at(now_ms)
        };
        trace!(row = ?self.row, id = ?animation.id, value, "animation tick");
        self.apply_animation_value(animation.kind, value);
        if finished {
            self.animation = None;
            self.finish_animation(delegate, animation);
        }
    }

    /// Jumps animation `id` to its end and runs its completion.
    ///
    /// Returns `false` without touching anything when `id` is not the
    /// in-flight animation, for example because a newer gesture cancelled it.
    pub fn complete_animation<D>(&mut self, delegate: &mut D, id: AnimationId) -> bool
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        match self.animation {
            Some(animation) if animation.id == id => {
                self.animation = None;
                self.apply_animation_value(animation.kind, animation.to);
                self.finish_animation(delegate, animation);
                true
            }
            _ => {
                debug!(row = ?self.row, ?id, "ignoring stale animation completion");
                false
            }
        }
    }

    fn begin_editing<D, H>(
        &mut self,
        delegate: &mut D,
        haptics: &mut H,
        orientation: Orientation,
    ) -> bool
    where
        D: SwipeDelegate<K, A> + ?Sized,
        H: HapticFeedback + ?Sized,
    {
        if !delegate.can_begin_editing(&self.row, orientation) {
            debug!(row = ?self.row, ?orientation, "delegate declined editing");
            return false;
        }
        let options = delegate.options(&self.row, orientation);
        let actions = delegate.actions(&self.row, orientation);
        let view = match ActionsView::new(orientation, actions, &options, self.row_size) {
            Ok(view) => view,
            Err(err @ SwipeError::Options(_)) => {
                warn!(row = ?self.row, ?orientation, %err, "rejecting swipe options");
                return false;
            }
            Err(err) => {
                debug!(row = ?self.row, ?orientation, %err, "refusing swipe");
                return false;
            }
        };
        haptics.prepare();
        delegate.will_begin_editing(&self.row, orientation);
        debug!(row = ?self.row, ?orientation, "began editing");
        self.options = options;
        self.actions = Some(view);
        self.offset = 0.0;
        self.state = SwipeState::Dragging(orientation);
        true
    }

    fn resist(&self, raw: f64, preferred: f64) -> f64 {
        let elasticity = self.options.elasticity;
        match &self.options.expansion_style {
            Some(style) => {
                let target = style.target_offset(self.row_size.width, preferred);
                if style.elastic_overscroll {
                    rubber_band(raw, target, elasticity)
                } else {
                    raw.min(self.row_size.width.max(target))
                }
            }
            None => rubber_band(raw, preferred, elasticity),
        }
    }

    fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
        if let Some(view) = self.actions.as_mut() {
            view.set_visible_width(offset);
        }
    }

    fn open(&mut self, now_ms: u64) {
        let Some(view) = &self.actions else {
            return;
        };
        let orientation = view.orientation();
        let target = view.preferred_width();
        debug!(row = ?self.row, ?orientation, "opening");
        self.state = SwipeState::Open(orientation);
        self.start_animation(AnimationKind::Open, self.offset, target, now_ms);
    }

    fn trigger<D, H>(
        &mut self,
        delegate: &mut D,
        haptics: &mut H,
        index: usize,
        from_expansion: bool,
        now_ms: u64,
    ) -> bool
    where
        D: SwipeDelegate<K, A> + ?Sized,
        H: HapticFeedback + ?Sized,
    {
        if self.is_triggered() {
            return false;
        }
        let Some(view) = &self.actions else {
            return false;
        };
        let orientation = view.orientation();
        let Some(action) = view.action(index) else {
            return false;
        };
        haptics.impact_occurred(ImpactStyle::Medium);
        delegate.handle_action(&self.row, orientation, action);
        let disposition = action.disposition;
        debug!(row = ?self.row, index, ?disposition, from_expansion, "action selected");
        self.interrupt_pan();

        let fills = from_expansion
            && self
                .options
                .expansion_style
                .as_ref()
                .is_some_and(|style| style.completion == ExpansionCompletion::Fill);
        if fills {
            self.state = SwipeState::Open(orientation);
            self.pending = Some(disposition);
            let width = self.row_size.width.max(self.offset);
            self.start_animation(AnimationKind::Fill, self.offset, width, now_ms);
        } else {
            self.apply_disposition(delegate, disposition, now_ms);
        }
        true
    }

    fn apply_disposition<D>(&mut self, delegate: &mut D, disposition: Disposition, now_ms: u64)
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        match disposition {
            Disposition::Nothing => {
                let settled = self.state.is_open()
                    && self
                        .actions
                        .as_ref()
                        .is_some_and(|view| self.offset == view.preferred_width());
                if !settled {
                    self.open(now_ms);
                }
            }
            Disposition::Close => self.hide(delegate, true, now_ms),
            Disposition::Delete => {
                debug!(row = ?self.row, "deleting row");
                delegate.did_delete_row(&self.row);
                self.start_animation(AnimationKind::Collapse, self.collapse, 0.0, now_ms);
            }
        }
    }

    fn apply_animation_value(&mut self, kind: AnimationKind, value: f64) {
        match kind {
            AnimationKind::Collapse => self.collapse = value,
            AnimationKind::Open | AnimationKind::Close | AnimationKind::Fill => {
                self.set_offset(value);
            }
        }
    }

    fn finish_animation<D>(&mut self, delegate: &mut D, animation: Animation)
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        match animation.kind {
            AnimationKind::Open => debug!(row = ?self.row, "opened"),
            AnimationKind::Close | AnimationKind::Collapse => self.teardown(delegate),
            AnimationKind::Fill => {
                if let Some(disposition) = self.pending.take() {
                    self.apply_disposition(delegate, disposition, animation.end_ms());
                }
            }
        }
    }

    fn start_animation(
        &mut self,
        kind: AnimationKind,
        from: f64,
        to: f64,
        now_ms: u64,
    ) -> AnimationId {
        self.next_animation_id += 1;
        let id = AnimationId(self.next_animation_id);
        self.animation = Some(Animation {
            id,
            kind,
            from,
            to,
            start_ms: now_ms,
            timing: self.options.animation,
        });
        id
    }

    /// Ignores the rest of an active gesture; its translation no longer
    /// matches the offset.
    fn interrupt_pan(&mut self) {
        if self.pan == Pan::Active {
            debug!(row = ?self.row, "pan interrupted");
            self.pan = Pan::Refused;
        }
    }

    fn teardown<D>(&mut self, delegate: &mut D)
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        self.offset = 0.0;
        self.pan_origin = 0.0;
        self.state = SwipeState::Center;
        if let Some(view) = self.actions.take() {
            let orientation = view.orientation();
            debug!(row = ?self.row, ?orientation, "ended editing");
            delegate.did_end_editing(&self.row, orientation);
        }
        self.options = SwipeOptions::default();
    }
}
