// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Haptic feedback collaborator.

/// Strength of an impact.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImpactStyle {
    /// Subtle tick, used when the actions become fully revealed.
    Light,
    /// Regular tick, used for expansion and action triggers.
    #[default]
    Medium,
    /// Strong tick.
    Heavy,
}

/// Thin wrapper around a platform vibration API.
pub trait HapticFeedback {
    /// Warms up the generator; called when a drag starts revealing actions.
    fn prepare(&mut self);

    /// Plays an impact.
    fn impact_occurred(&mut self, style: ImpactStyle);
}

/// Haptics that do nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoFeedback;

impl HapticFeedback for NoFeedback {
    fn prepare(&mut self) {}

    fn impact_occurred(&mut self, _style: ImpactStyle) {}
}

impl<H: HapticFeedback + ?Sized> HapticFeedback for &mut H {
    fn prepare(&mut self) {
        (**self).prepare();
    }

    fn impact_occurred(&mut self, style: ImpactStyle) {
        (**self).impact_occurred(style);
    }
}
