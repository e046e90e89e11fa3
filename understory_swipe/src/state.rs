// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistent swipe state of a row.

use crate::Orientation;

/// Where a row is in its swipe cycle.
///
/// Animating and triggered phases are tracked by the controller alongside this
/// value; they never show up as states of their own.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SwipeState {
    /// At rest with no actions revealed.
    #[default]
    Center,
    /// Following a pan gesture (or settling back after one).
    Dragging(Orientation),
    /// Resting with the actions for the orientation revealed.
    Open(Orientation),
}

impl SwipeState {
    /// Returns `true` for every state but [`SwipeState::Center`].
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Center)
    }

    /// Returns `true` when the row rests open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Orientation of the revealed actions, [`Orientation::None`] at center.
    #[must_use]
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::Center => Orientation::None,
            Self::Dragging(o) | Self::Open(o) => o,
        }
    }
}
