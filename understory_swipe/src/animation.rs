// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-clocked tweens for open, close, fill, and collapse motion.
//!
//! Animations are plain data. The host samples them by passing its clock
//! (milliseconds) to [`SwipeController::tick`](crate::SwipeController::tick),
//! or ends them early with
//! [`SwipeController::complete_animation`](crate::SwipeController::complete_animation).
//!
//! ```
//! use understory_swipe::{Easing, ease};
//!
//! assert_eq!(ease(Easing::Linear, 0.5), 0.5);
//! assert!(ease(Easing::EaseOut, 0.5) > 0.5);
//! assert_eq!(ease(Easing::EaseOutCubic, 1.0), 1.0);
//! ```

/// Easing curves for swipe animations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Quadratic, starts slow.
    EaseIn,
    /// Quadratic, ends slow.
    EaseOut,
    /// Quadratic, slow at both ends.
    EaseInOut,
    /// Cubic, ends slow.
    #[default]
    EaseOutCubic,
}

/// Maps linear progress `t` (clamped to `0..=1`) through `easing`.
#[must_use]
pub fn ease(easing: Easing, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                let u = -2.0 * t + 2.0;
                1.0 - u * u / 2.0
            }
        }
        Easing::EaseOutCubic => {
            let u = 1.0 - t;
            1.0 - u * u * u
        }
    }
}

/// Duration and curve of an animation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationTiming {
    /// Duration in milliseconds. Zero finishes on the first sample.
    pub duration_ms: u64,
    /// Easing curve.
    pub easing: Easing,
}

impl AnimationTiming {
    /// Finishes on the first sample.
    pub const IMMEDIATE: Self = Self {
        duration_ms: 0,
        easing: Easing::Linear,
    };
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            duration_ms: 250,
            easing: Easing::EaseOutCubic,
        }
    }
}

/// Identifies one animation started by a controller.
///
/// Ids increase monotonically per controller, so a completion carrying an old
/// id can be recognized as stale.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationId(pub(crate) u64);

/// What an animation moves and what happens when it ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Offset towards the fully open width.
    Open,
    /// Offset towards zero; the row settles at center afterwards.
    Close,
    /// Offset towards the full row width before a pending disposition runs.
    Fill,
    /// Row height/alpha fraction towards zero after a delete.
    Collapse,
}

/// A running tween between two values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Animation {
    /// Id of this animation.
    pub id: AnimationId,
    /// What is being animated.
    pub kind: AnimationKind,
    /// Start value.
    pub from: f64,
    /// End value.
    pub to: f64,
    /// Host clock when the animation started.
    pub start_ms: u64,
    /// Duration and easing.
    pub timing: AnimationTiming,
}

impl Animation {
    /// Normalized progress at `now_ms`, in `0..=1`.
    #[must_use]
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.timing.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms) as f64;
        (elapsed / self.timing.duration_ms as f64).min(1.0)
    }

    /// Eased value at `now_ms`.
    #[must_use]
    pub fn value_at(&self, now_ms: u64) -> f64 {
        let t = ease(self.timing.easing, self.progress(now_ms));
        self.from + (self.to - self.from) * t
    }

    /// Returns `true` once `now_ms` reaches the end of the animation.
    #[must_use]
    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms >= self.end_ms()
    }

    /// Host clock at which the animation ends.
    #[must_use]
    pub fn end_ms(&self) -> u64 {
        self.start_ms.saturating_add(self.timing.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anim(duration_ms: u64, easing: Easing) -> Animation {
        Animation {
            id: AnimationId(1),
            kind: AnimationKind::Open,
            from: 10.0,
            to: 110.0,
            start_ms: 1_000,
            timing: AnimationTiming {
                duration_ms,
                easing,
            },
        }
    }

    #[test]
    fn curves_hit_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::EaseOutCubic,
        ] {
            assert_eq!(ease(easing, 0.0), 0.0, "{easing:?} at 0");
            assert_eq!(ease(easing, 1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn ease_clamps_progress() {
        assert_eq!(ease(Easing::EaseIn, -3.0), 0.0);
        assert_eq!(ease(Easing::EaseIn, 7.0), 1.0);
    }

    #[test]
    fn linear_samples_midpoint() {
        let a = anim(200, Easing::Linear);
        assert_eq!(a.value_at(1_100), 60.0);
        assert!(!a.is_finished(1_199));
        assert!(a.is_finished(1_200));
        assert_eq!(a.value_at(5_000), 110.0);
    }

    #[test]
    fn sampling_before_start_holds_start_value() {
        let a = anim(200, Easing::EaseOutCubic);
        assert_eq!(a.value_at(0), 10.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let a = anim(0, Easing::EaseInOut);
        assert!(a.is_finished(1_000));
        assert_eq!(a.value_at(1_000), 110.0);
    }
}
