// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Gesture handling never surfaces these to the host; the controller turns
//! them into refused transitions. They are returned directly by constructors
//! such as [`ActionsView::new`](crate::ActionsView::new) and by
//! [`SwipeOptions::validate`](crate::SwipeOptions::validate).

use thiserror::Error;

use crate::Orientation;

/// Reasons an actions container cannot be built.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum SwipeError {
    /// The delegate supplied no actions for the orientation.
    #[error("no swipe actions for {0:?} orientation")]
    NoActions(Orientation),
    /// Actions need a left or right edge to attach to.
    #[error("swipe actions need a left or right orientation")]
    NoOrientation,
    /// The options snapshot is unusable.
    #[error(transparent)]
    Options(#[from] OptionsError),
}

/// A [`SwipeOptions`](crate::SwipeOptions) field is out of range.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum OptionsError {
    /// Minimum button width must be finite and positive.
    #[error("minimum button width must be finite and positive, got {0}")]
    MinimumButtonWidth(f64),
    /// Maximum button width is below the minimum.
    #[error("maximum button width {max} is below the minimum {min}")]
    ButtonWidthRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// Reveal fraction must lie in `0.0..=1.0`.
    #[error("reveal fraction must lie in 0..=1, got {0}")]
    RevealFraction(f64),
    /// Flick velocity must be non-negative.
    #[error("flick velocity must be non-negative, got {0}")]
    FlickVelocity(f64),
    /// Elasticity must be finite and positive.
    #[error("overscroll elasticity must be finite and positive, got {0}")]
    Elasticity(f64),
}
