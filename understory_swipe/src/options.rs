// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-cycle configuration supplied by the delegate.

use crate::{AnimationTiming, ExpansionStyle, OptionsError, TransitionStyle};

/// Default width of a single action button.
pub const DEFAULT_MINIMUM_BUTTON_WIDTH: f64 = 74.0;

/// Default fraction of the actions' width a release must pass to open.
pub const DEFAULT_REVEAL_FRACTION: f64 = 0.5;

/// Default release velocity (units per second) that opens regardless of offset.
pub const DEFAULT_FLICK_VELOCITY: f64 = 300.0;

/// Default rubber-band coefficient for overscroll.
pub const DEFAULT_ELASTICITY: f64 = 0.55;

/// Configuration snapshot for one reveal cycle.
///
/// The delegate returns a fresh value each time a row starts revealing actions;
/// the controller keeps it unchanged until the row returns to center.
///
/// ```
/// use understory_swipe::{ExpansionStyle, SwipeOptions, TransitionStyle};
///
/// let options = SwipeOptions::default()
///     .with_transition_style(TransitionStyle::Reveal)
///     .with_expansion_style(ExpansionStyle::destructive())
///     .with_minimum_button_width(60.0);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeOptions {
    /// Transition layout for the buttons.
    pub transition_style: TransitionStyle,
    /// Full-swipe behavior, if any.
    pub expansion_style: Option<ExpansionStyle>,
    /// Lower bound on button width.
    pub minimum_button_width: f64,
    /// Upper bound on button width, if any.
    pub maximum_button_width: Option<f64>,
    /// Fraction of the actions' width a release must reach to open.
    pub reveal_fraction: f64,
    /// Release velocity towards the reveal direction that opens regardless of offset.
    pub flick_velocity: f64,
    /// Rubber-band coefficient applied past the elastic limit.
    pub elasticity: f64,
    /// Timing of open, close, fill, and collapse animations.
    pub animation: AnimationTiming,
}

impl Default for SwipeOptions {
    fn default() -> Self {
        Self {
            transition_style: TransitionStyle::default(),
            expansion_style: None,
            minimum_button_width: DEFAULT_MINIMUM_BUTTON_WIDTH,
            maximum_button_width: None,
            reveal_fraction: DEFAULT_REVEAL_FRACTION,
            flick_velocity: DEFAULT_FLICK_VELOCITY,
            elasticity: DEFAULT_ELASTICITY,
            animation: AnimationTiming::default(),
        }
    }
}

impl SwipeOptions {
    /// Sets the transition style.
    #[must_use]
    pub fn with_transition_style(mut self, style: TransitionStyle) -> Self {
        self.transition_style = style;
        self
    }

    /// Sets the expansion style.
    #[must_use]
    pub fn with_expansion_style(mut self, style: ExpansionStyle) -> Self {
        self.expansion_style = Some(style);
        self
    }

    /// Sets the minimum button width.
    #[must_use]
    pub fn with_minimum_button_width(mut self, width: f64) -> Self {
        self.minimum_button_width = width;
        self
    }

    /// Sets the maximum button width.
    #[must_use]
    pub fn with_maximum_button_width(mut self, width: f64) -> Self {
        self.maximum_button_width = Some(width);
        self
    }

    /// Sets the reveal fraction.
    #[must_use]
    pub fn with_reveal_fraction(mut self, fraction: f64) -> Self {
        self.reveal_fraction = fraction;
        self
    }

    /// Sets the flick velocity.
    #[must_use]
    pub fn with_flick_velocity(mut self, velocity: f64) -> Self {
        self.flick_velocity = velocity;
        self
    }

    /// Sets the overscroll elasticity.
    #[must_use]
    pub fn with_elasticity(mut self, elasticity: f64) -> Self {
        self.elasticity = elasticity;
        self
    }

    /// Sets the animation timing.
    #[must_use]
    pub fn with_animation(mut self, timing: AnimationTiming) -> Self {
        self.animation = timing;
        self
    }

    /// Checks every numeric field.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let min = self.minimum_button_width;
        if !(min.is_finite() && min > 0.0) {
            return Err(OptionsError::MinimumButtonWidth(min));
        }
        if let Some(max) = self.maximum_button_width
            && (max.is_nan() || max < min)
        {
            return Err(OptionsError::ButtonWidthRange { min, max });
        }
        if !(0.0..=1.0).contains(&self.reveal_fraction) {
            return Err(OptionsError::RevealFraction(self.reveal_fraction));
        }
        if self.flick_velocity.is_nan() || self.flick_velocity < 0.0 {
            return Err(OptionsError::FlickVelocity(self.flick_velocity));
        }
        if !(self.elasticity.is_finite() && self.elasticity > 0.0) {
            return Err(OptionsError::Elasticity(self.elasticity));
        }
        Ok(())
    }

    /// Width of every button for actions reporting `preferred` widths.
    #[must_use]
    pub fn button_width(&self, preferred: impl IntoIterator<Item = f64>) -> f64 {
        let max = self.maximum_button_width.unwrap_or(f64::INFINITY);
        preferred
            .into_iter()
            .fold(self.minimum_button_width, |width, p| width.max(p.min(max)))
    }
}
