// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-swipe expansion: dragging far enough triggers the outermost action.
//!
//! When [`SwipeOptions::expansion_style`](crate::SwipeOptions::expansion_style)
//! is set, the controller compares the drag offset against a target derived
//! from the row width. Crossing the target (or any additional trigger) marks
//! the actions as expanded; releasing while expanded selects the expandable
//! action without a separate tap.
//!
//! ```
//! use understory_swipe::ExpansionStyle;
//!
//! let style = ExpansionStyle::destructive();
//! // 320 wide row, 148 wide actions: target is the row width minus the inset.
//! assert_eq!(style.target_offset(320.0, 148.0), 290.0);
//! // The overscroll trigger fires 30 past the actions' width.
//! assert!(style.should_expand(180.0, 180.0, 320.0, 148.0));
//! assert!(!style.should_expand(170.0, 170.0, 320.0, 148.0));
//! ```

use smallvec::SmallVec;

/// Gesture distance below which a row never expands.
pub const MINIMUM_TARGET_OVERSCROLL: f64 = 20.0;

/// Where the expansion threshold sits relative to the row.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpansionTarget {
    /// A fraction of the row width.
    Percentage(f64),
    /// The row width minus an inset.
    EdgeInset(f64),
}

impl ExpansionTarget {
    /// Offset for a row of `row_width`.
    #[must_use]
    pub fn offset(self, row_width: f64) -> f64 {
        match self {
            Self::Percentage(fraction) => row_width * fraction,
            Self::EdgeInset(inset) => row_width - inset,
        }
    }
}

/// Extra conditions that expand before the target is reached.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpansionTrigger {
    /// Expands once the offset passes the actions' width by this much.
    Overscroll(f64),
}

impl ExpansionTrigger {
    fn is_triggered(self, offset: f64, preferred_width: f64) -> bool {
        match self {
            Self::Overscroll(amount) => offset > preferred_width + amount,
        }
    }
}

/// What the actions do after an expansion triggers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpansionCompletion {
    /// Apply the action's disposition right away.
    #[default]
    Bounce,
    /// Fill the row width first, then apply the disposition.
    Fill,
}

/// Full-swipe behavior for one reveal cycle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpansionStyle {
    /// Threshold offset.
    pub target: ExpansionTarget,
    /// Additional triggers checked before the target.
    pub triggers: SmallVec<[ExpansionTrigger; 2]>,
    /// Whether dragging past the target meets rubber-band resistance.
    pub elastic_overscroll: bool,
    /// Motion after the expansion triggers.
    pub completion: ExpansionCompletion,
}

impl ExpansionStyle {
    /// Creates a style with no additional triggers.
    #[must_use]
    pub fn new(target: ExpansionTarget, completion: ExpansionCompletion) -> Self {
        Self {
            target,
            triggers: SmallVec::new(),
            elastic_overscroll: false,
            completion,
        }
    }

    /// Expands at half the row width and bounces back.
    #[must_use]
    pub fn selection() -> Self {
        Self {
            elastic_overscroll: true,
            ..Self::new(ExpansionTarget::Percentage(0.5), ExpansionCompletion::Bounce)
        }
    }

    /// Expands near the far edge and fills the row before deleting.
    #[must_use]
    pub fn destructive() -> Self {
        Self::fill().with_trigger(ExpansionTrigger::Overscroll(30.0))
    }

    /// Expands near the far edge and fills the row.
    #[must_use]
    pub fn fill() -> Self {
        Self::new(ExpansionTarget::EdgeInset(30.0), ExpansionCompletion::Fill)
    }

    /// Adds an extra trigger.
    #[must_use]
    pub fn with_trigger(mut self, trigger: ExpansionTrigger) -> Self {
        self.triggers.push(trigger);
        self
    }

    /// Sets whether overscroll past the target is damped.
    #[must_use]
    pub fn with_elastic_overscroll(mut self, elastic: bool) -> Self {
        self.elastic_overscroll = elastic;
        self
    }

    /// Offset at which the actions expand, never less than `preferred_width`.
    #[must_use]
    pub fn target_offset(&self, row_width: f64, preferred_width: f64) -> f64 {
        self.target.offset(row_width).max(preferred_width)
    }

    /// Decides whether the actions are expanded.
    ///
    /// `offset` is the current (damped) drag offset and `gesture_distance` the
    /// absolute horizontal translation of the gesture.
    #[must_use]
    pub fn should_expand(
        &self,
        offset: f64,
        gesture_distance: f64,
        row_width: f64,
        preferred_width: f64,
    ) -> bool {
        if gesture_distance <= MINIMUM_TARGET_OVERSCROLL {
            return false;
        }
        if self
            .triggers
            .iter()
            .any(|trigger| trigger.is_triggered(offset, preferred_width))
        {
            return true;
        }
        offset >= self.target_offset(row_width, preferred_width)
    }
}
