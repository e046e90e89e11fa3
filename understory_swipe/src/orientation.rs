// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which edge of a row the actions are revealed from.

/// The edge of a row that hosts the revealed actions.
///
/// `Left` actions sit along the row's left edge and are revealed by dragging
/// the row to the right; `Right` is the mirror image. Layout math is written
/// for `Left` and mirrored through [`Orientation::scale`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// No orientation has been chosen yet.
    #[default]
    None,
    /// Actions on the left edge, revealed by dragging right.
    Left,
    /// Actions on the right edge, revealed by dragging left.
    Right,
}

impl Orientation {
    /// Sign used to mirror horizontal geometry.
    ///
    /// `+1.0` for [`Orientation::Left`], `-1.0` for [`Orientation::Right`], and
    /// `0.0` for [`Orientation::None`].
    #[must_use]
    pub const fn scale(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }

    /// Picks the orientation revealed by a horizontal translation.
    ///
    /// Dragging right (`dx > 0`) reveals the left edge and vice versa.
    #[must_use]
    pub fn from_translation(dx: f64) -> Self {
        if dx > 0.0 {
            Self::Left
        } else if dx < 0.0 {
            Self::Right
        } else {
            Self::None
        }
    }

    /// Returns the mirrored orientation.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns `true` for [`Orientation::None`].
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}
