// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The actions container: button geometry for one reveal cycle.
//!
//! An [`ActionsView`] holds the actions the delegate supplied for one edge of a
//! row and republishes the active [`TransitionStyle`]'s output as button
//! frames every time the visible width changes. It never exists with zero
//! actions.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use understory_swipe::{ActionsView, Orientation, SwipeAction, SwipeOptions};
//!
//! let options = SwipeOptions::default().with_minimum_button_width(60.0);
//! let actions = vec![SwipeAction::new(0, "Flag"), SwipeAction::new(1, "More")];
//! let mut view = ActionsView::new(Orientation::Right, actions, &options, Size::new(320.0, 44.0))
//!     .unwrap();
//!
//! assert_eq!(view.preferred_width(), 120.0);
//! view.set_visible_width(100.0);
//! let widths: Vec<f64> = view.buttons().iter().map(|b| b.visible_width).collect();
//! assert_eq!(widths, vec![60.0, 40.0]);
//! ```

use alloc::vec::Vec;

use kurbo::{Rect, Size};
use smallvec::SmallVec;

use crate::{LayoutContext, Orientation, SwipeAction, SwipeError, SwipeOptions, TransitionStyle};

/// Geometry of one action button, relative to the actions container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ActionButton {
    /// Frame within the container (before the container offset is applied).
    pub frame: Rect,
    /// Unclipped width.
    pub visible_width: f64,
    /// `visible_width` over the button width, in `0..=1`.
    pub progress: f64,
}

/// A button's visible width changed during a layout pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ButtonTransition {
    /// Button index.
    pub index: usize,
    /// Visible width before the pass.
    pub old_width: f64,
    /// Visible width after the pass.
    pub new_width: f64,
    /// Reveal progress after the pass.
    pub progress: f64,
}

/// Transitions produced by one layout pass.
pub type ButtonTransitions = SmallVec<[ButtonTransition; 4]>;

/// Actions and their button geometry for one edge of a row.
#[derive(Clone, Debug)]
pub struct ActionsView<A> {
    orientation: Orientation,
    style: TransitionStyle,
    actions: Vec<SwipeAction<A>>,
    buttons: Vec<ActionButton>,
    button_width: f64,
    content_size: Size,
    visible_width: f64,
    container_offset: f64,
    expandable: bool,
    expanded: bool,
}

impl<A> ActionsView<A> {
    /// Builds the container for `actions` on the `orientation` edge of a row of `row_size`.
    ///
    /// Fails when `actions` is empty, `orientation` is [`Orientation::None`],
    /// or `options` do not validate.
    pub fn new(
        orientation: Orientation,
        actions: Vec<SwipeAction<A>>,
        options: &SwipeOptions,
        row_size: Size,
    ) -> Result<Self, SwipeError> {
        if orientation.is_none() {
            return Err(SwipeError::NoOrientation);
        }
        if actions.is_empty() {
            return Err(SwipeError::NoActions(orientation));
        }
        options.validate()?;
        let style = options.transition_style;
        let button_width = options.button_width(actions.iter().filter_map(|a| a.preferred_width));
        let content_size = style.content_size(button_width, actions.len(), row_size.height);
        let mut view = Self {
            orientation,
            style,
            buttons: Vec::with_capacity(actions.len()),
            actions,
            button_width,
            content_size,
            visible_width: 0.0,
            container_offset: 0.0,
            expandable: options.expansion_style.is_some(),
            expanded: false,
        };
        view.layout();
        Ok(view)
    }

    /// Edge the actions are attached to.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Active transition style.
    #[must_use]
    pub fn transition_style(&self) -> TransitionStyle {
        self.style
    }

    /// The actions, in button order.
    #[must_use]
    pub fn actions(&self) -> &[SwipeAction<A>] {
        &self.actions
    }

    /// The action behind button `index`.
    #[must_use]
    pub fn action(&self, index: usize) -> Option<&SwipeAction<A>> {
        self.actions.get(index)
    }

    /// Button geometry from the latest layout pass.
    #[must_use]
    pub fn buttons(&self) -> &[ActionButton] {
        &self.buttons
    }

    /// Width of every button.
    #[must_use]
    pub fn button_width(&self) -> f64 {
        self.button_width
    }

    /// Natural content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Width at which the actions are fully revealed.
    #[must_use]
    pub fn preferred_width(&self) -> f64 {
        self.content_size.width
    }

    /// Currently exposed width.
    #[must_use]
    pub fn visible_width(&self) -> f64 {
        self.visible_width
    }

    /// Signed shift of the container's inner window.
    #[must_use]
    pub fn container_offset(&self) -> f64 {
        self.container_offset
    }

    /// Inputs of the current layout pass.
    #[must_use]
    pub fn layout_context(&self) -> LayoutContext {
        LayoutContext {
            number_of_actions: self.actions.len(),
            orientation: self.orientation,
            content_size: self.content_size,
            visible_width: self.visible_width,
            minimum_button_width: self.button_width,
        }
    }

    /// Sets the exposed width and lays the buttons out again.
    ///
    /// Negative widths are treated as zero. Returns the buttons whose visible
    /// width changed; repeating a width returns nothing.
    pub fn set_visible_width(&mut self, width: f64) -> ButtonTransitions {
        self.visible_width = width.max(0.0);
        let old: SmallVec<[f64; 4]> = self.buttons.iter().map(|b| b.visible_width).collect();
        self.layout();
        self.buttons
            .iter()
            .zip(old)
            .enumerate()
            .filter(|(_, (button, old_width))| button.visible_width != *old_width)
            .map(|(index, (button, old_width))| ButtonTransition {
                index,
                old_width,
                new_width: button.visible_width,
                progress: button.progress,
            })
            .collect()
    }

    /// Updates the content height after the row was resized.
    pub fn set_content_height(&mut self, height: f64) {
        if self.content_size.height == height {
            return;
        }
        self.content_size.height = height;
        self.layout();
    }

    /// Index of the action triggered by a full swipe, when expansion is enabled.
    #[must_use]
    pub fn expandable_index(&self) -> Option<usize> {
        self.expandable.then_some(0)
    }

    /// Whether a full swipe currently expands the actions.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Sets the expanded flag, returning `true` when it changed.
    pub fn set_expanded(&mut self, expanded: bool) -> bool {
        let expanded = expanded && self.expandable;
        if self.expanded == expanded {
            return false;
        }
        self.expanded = expanded;
        true
    }

    fn layout(&mut self) {
        let cx = self.layout_context();
        let style = self.style;
        self.container_offset = style.container_offset(&cx);
        let size = style.button_size(&cx);
        let widths = style.visible_widths(&cx);
        let progress_basis = size.width;
        self.buttons.clear();
        self.buttons
            .extend(widths.into_iter().enumerate().map(|(index, visible_width)| {
                let origin = style.button_origin(index, &cx);
                ActionButton {
                    frame: Rect::from_origin_size(origin, size),
                    visible_width,
                    progress: if progress_basis > 0.0 {
                        (visible_width / progress_basis).min(1.0)
                    } else {
                        0.0
                    },
                }
            }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Point;

    use crate::{Disposition, ExpansionStyle, OptionsError};

    fn view(style: TransitionStyle, count: usize) -> ActionsView<usize> {
        let options = SwipeOptions::default()
            .with_minimum_button_width(60.0)
            .with_transition_style(style);
        let actions = (0..count).map(|i| SwipeAction::new(i, "Action")).collect();
        ActionsView::new(Orientation::Left, actions, &options, Size::new(320.0, 44.0)).unwrap()
    }

    #[test]
    fn refuses_empty_action_sets() {
        let err = ActionsView::<u8>::new(
            Orientation::Left,
            Vec::new(),
            &SwipeOptions::default(),
            Size::new(320.0, 44.0),
        )
        .unwrap_err();
        assert_eq!(err, SwipeError::NoActions(Orientation::Left));
    }

    #[test]
    fn refuses_missing_orientation() {
        let err = ActionsView::new(
            Orientation::None,
            vec![SwipeAction::new((), "x")],
            &SwipeOptions::default(),
            Size::new(320.0, 44.0),
        )
        .unwrap_err();
        assert_eq!(err, SwipeError::NoOrientation);
    }

    #[test]
    fn refuses_invalid_options() {
        let options = SwipeOptions::default().with_reveal_fraction(-0.5);
        let err = ActionsView::new(
            Orientation::Right,
            vec![SwipeAction::new((), "x")],
            &options,
            Size::new(320.0, 44.0),
        )
        .unwrap_err();
        assert_eq!(err, SwipeError::Options(OptionsError::RevealFraction(-0.5)));
    }

    #[test]
    fn starts_hidden() {
        let v = view(TransitionStyle::Drag, 2);
        assert_eq!(v.visible_width(), 0.0);
        assert!(v.buttons().iter().all(|b| b.visible_width == 0.0));
        assert_eq!(v.container_offset(), 120.0);
    }

    #[test]
    fn preferred_widths_widen_buttons() {
        let options = SwipeOptions::default().with_minimum_button_width(60.0);
        let actions = vec![
            SwipeAction::new(0, "Short"),
            SwipeAction::new(1, "A longer title").with_preferred_width(90.0),
        ];
        let v = ActionsView::new(Orientation::Right, actions, &options, Size::new(320.0, 50.0))
            .unwrap();
        assert_eq!(v.button_width(), 90.0);
        assert_eq!(v.preferred_width(), 180.0);
        assert_eq!(v.buttons()[1].frame.origin(), Point::new(-90.0, 0.0));
        assert_eq!(v.buttons()[1].frame.size(), Size::new(90.0, 50.0));
    }

    #[test]
    fn set_visible_width_reports_changed_buttons() {
        let mut v = view(TransitionStyle::Drag, 3);
        let changed = v.set_visible_width(90.0);
        assert_eq!(changed.len(), 2);
        assert_eq!(changed[0].index, 0);
        assert_eq!(changed[0].progress, 1.0);
        assert_eq!(changed[1].index, 1);
        assert_eq!(changed[1].new_width, 30.0);
        assert_eq!(changed[1].progress, 0.5);
    }

    #[test]
    fn set_visible_width_is_idempotent() {
        let mut v = view(TransitionStyle::Reveal, 3);
        v.set_visible_width(130.0);
        let before = v.buttons().to_vec();
        let offset = v.container_offset();
        assert!(v.set_visible_width(130.0).is_empty());
        assert_eq!(v.buttons(), before.as_slice());
        assert_eq!(v.container_offset(), offset);
    }

    #[test]
    fn negative_widths_clamp_to_zero() {
        let mut v = view(TransitionStyle::Border, 2);
        v.set_visible_width(-40.0);
        assert_eq!(v.visible_width(), 0.0);
        assert!(v.buttons().iter().all(|b| b.visible_width == 0.0));
    }

    #[test]
    fn content_height_follows_row() {
        let mut v = view(TransitionStyle::RevealVertical, 2);
        v.set_content_height(80.0);
        assert_eq!(v.buttons()[1].frame.origin(), Point::new(0.0, 40.0));
        assert_eq!(v.buttons()[1].frame.height(), 40.0);
    }

    #[test]
    fn expansion_needs_an_expansion_style() {
        let mut v = view(TransitionStyle::Drag, 2);
        assert_eq!(v.expandable_index(), None);
        assert!(!v.set_expanded(true));
        assert!(!v.is_expanded());

        let options = SwipeOptions::default().with_expansion_style(ExpansionStyle::fill());
        let actions = vec![
            SwipeAction::new(0, "Trash").with_disposition(Disposition::Delete),
            SwipeAction::new(1, "Flag"),
        ];
        let size = Size::new(320.0, 44.0);
        let mut v = ActionsView::new(Orientation::Right, actions, &options, size).unwrap();
        assert_eq!(v.expandable_index(), Some(0));
        assert!(v.set_expanded(true));
        assert!(!v.set_expanded(true));
        assert!(v.is_expanded());
    }
}
