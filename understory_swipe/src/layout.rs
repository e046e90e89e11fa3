// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition layouts: how action buttons appear as a row is dragged.
//!
//! Each [`TransitionStyle`] maps a [`LayoutContext`] to three things:
//!
//! 1) the shift of the actions container's inner window ([`TransitionStyle::container_offset`]),
//! 2) the origin of every button ([`TransitionStyle::button_origin`]),
//! 3) the unclipped width of every button ([`TransitionStyle::visible_widths`]).
//!
//! All math is written for [`Orientation::Left`] and mirrored through
//! [`Orientation::scale`], so the same code serves both edges.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use understory_swipe::{LayoutContext, Orientation, TransitionStyle};
//!
//! let cx = LayoutContext {
//!     number_of_actions: 2,
//!     orientation: Orientation::Right,
//!     content_size: Size::new(120.0, 44.0),
//!     visible_width: 100.0,
//!     minimum_button_width: 60.0,
//! };
//!
//! // Buttons reveal one at a time, outermost first.
//! assert_eq!(TransitionStyle::Drag.visible_widths(&cx), vec![60.0, 40.0]);
//! // Reveal uncovers them from behind, innermost first.
//! assert_eq!(TransitionStyle::Reveal.visible_widths(&cx), vec![40.0, 60.0]);
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::Orientation;

/// Inputs to a layout pass.
///
/// Recomputed for every pass; carries no identity of its own.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutContext {
    /// Number of action buttons. Callers guarantee at least one.
    pub number_of_actions: usize,
    /// Edge the actions are revealed from.
    pub orientation: Orientation,
    /// Natural size of the actions content.
    pub content_size: Size,
    /// Width currently exposed by the drag.
    pub visible_width: f64,
    /// Width of a single button.
    pub minimum_button_width: f64,
}

impl LayoutContext {
    /// Returns a copy with a different visible width.
    #[must_use]
    pub fn with_visible_width(self, visible_width: f64) -> Self {
        Self {
            visible_width,
            ..self
        }
    }

    fn count(&self) -> f64 {
        self.number_of_actions as f64
    }
}

/// How action buttons are laid out while the row moves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionStyle {
    /// Buttons share the exposed width evenly and are clipped uniformly.
    Border,
    /// Buttons are pinned to the screen edge and revealed one at a time.
    #[default]
    Drag,
    /// Buttons sit behind the row and are uncovered innermost first.
    Reveal,
    /// Buttons stack vertically in a single column.
    RevealVertical,
}

impl TransitionStyle {
    /// Natural content size for `count` buttons of `button_width` in a row of
    /// `row_height`.
    #[must_use]
    pub fn content_size(self, button_width: f64, count: usize, row_height: f64) -> Size {
        match self {
            Self::RevealVertical => Size::new(button_width, row_height),
            Self::Border | Self::Drag | Self::Reveal => {
                Size::new(button_width * count as f64, row_height)
            }
        }
    }

    /// Signed shift of the container's inner window for the current visible width.
    #[must_use]
    pub fn container_offset(self, cx: &LayoutContext) -> f64 {
        let hidden = match self {
            Self::Border => return 0.0,
            Self::Drag | Self::RevealVertical => cx.content_size.width - cx.visible_width,
            Self::Reveal => cx.minimum_button_width * cx.count() - cx.visible_width,
        };
        hidden * cx.orientation.scale()
    }

    /// Origin of the button at `index`, relative to the container.
    #[must_use]
    pub fn button_origin(self, index: usize, cx: &LayoutContext) -> Point {
        let i = index as f64;
        match self {
            Self::Border => {
                let share = border_share(cx);
                Point::new(i * share * cx.orientation.scale(), 0.0)
            }
            Self::Drag | Self::Reveal => {
                Point::new(i * cx.minimum_button_width * cx.orientation.scale(), 0.0)
            }
            Self::RevealVertical => Point::new(0.0, i * cx.content_size.height / cx.count()),
        }
    }

    /// Frame size shared by every button.
    #[must_use]
    pub fn button_size(self, cx: &LayoutContext) -> Size {
        match self {
            Self::RevealVertical => Size::new(
                cx.content_size.width,
                cx.content_size.height / cx.count(),
            ),
            Self::Border | Self::Drag | Self::Reveal => {
                Size::new(cx.minimum_button_width, cx.content_size.height)
            }
        }
    }

    /// Unclipped width of every button, in button order.
    #[must_use]
    pub fn visible_widths(self, cx: &LayoutContext) -> Vec<f64> {
        match self {
            Self::Border => uniform_widths(cx.number_of_actions, border_share(cx)),
            Self::Drag => drag_widths(cx).collect(),
            Self::Reveal => {
                let mut widths: Vec<f64> = drag_widths(cx).collect();
                widths.reverse();
                widths
            }
            Self::RevealVertical => uniform_widths(
                cx.number_of_actions,
                clamp_width(cx.visible_width, cx.content_size.width),
            ),
        }
    }
}

/// Clamps `width` into `0..=max`.
fn clamp_width(width: f64, max: f64) -> f64 {
    width.min(max).max(0.0)
}

/// Per-button share of the exposed width for [`TransitionStyle::Border`].
fn border_share(cx: &LayoutContext) -> f64 {
    cx.visible_width.max(0.0) / cx.count()
}

/// Widths for buttons revealed one at a time from index `0`.
fn drag_widths(cx: &LayoutContext) -> impl Iterator<Item = f64> + '_ {
    (0..cx.number_of_actions).map(|index| {
        let revealed = cx.visible_width - index as f64 * cx.minimum_button_width;
        clamp_width(revealed, cx.minimum_button_width)
    })
}

fn uniform_widths(count: usize, width: f64) -> Vec<f64> {
    (0..count).map(|_| width).collect()
}
