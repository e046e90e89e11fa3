// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe --heading-base-level=0

//! Understory Swipe: headless swipe-to-reveal interactions for list rows.
//!
//! A row is dragged horizontally to reveal action buttons (delete, archive, and
//! so on) tucked behind one of its edges. This crate owns the interaction and
//! the button geometry; the host owns rendering, the backing data, and the
//! clock.
//!
//! The core concepts are:
//!
//! - [`TransitionStyle`]: how buttons appear as the row moves, as a pure
//!   function of a [`LayoutContext`]. `Border`, `Drag`, `Reveal`, and
//!   `RevealVertical` are provided.
//! - [`ActionsView`]: the actions container for one reveal cycle. It turns the
//!   visible width into [`ActionButton`] frames.
//! - [`SwipeController`]: the pan-driven state machine. It tracks the drag
//!   offset, decides whether a released row opens, and runs action
//!   [`Disposition`]s, reporting to a [`SwipeDelegate`].
//! - [`SwipeRow`]: routes raw pointer events into a controller, deciding with
//!   [`should_begin`] whether a drag is a swipe or a scroll.
//! - [`SwipeList`]: keeps at most one row open per list.
//!
//! Motion is host-clocked: animations are plain [`Animation`] values the host
//! samples by calling `tick` with its clock in milliseconds. Haptics go through
//! the [`HapticFeedback`] trait.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use understory_swipe::{
//!     NoFeedback, Orientation, SwipeAction, SwipeController, SwipeDelegate, SwipeOptions,
//!     SwipeState, TransitionStyle,
//! };
//!
//! struct Mail {
//!     deleted: Vec<u32>,
//! }
//!
//! impl SwipeDelegate<u32, &'static str> for Mail {
//!     fn actions(&mut self, _row: &u32, o: Orientation) -> Vec<SwipeAction<&'static str>> {
//!         match o {
//!             Orientation::Right => vec![
//!                 SwipeAction::destructive("trash", "Trash"),
//!                 SwipeAction::new("flag", "Flag"),
//!             ],
//!             _ => Vec::new(),
//!         }
//!     }
//!
//!     fn options(&mut self, _row: &u32, _o: Orientation) -> SwipeOptions {
//!         SwipeOptions::default()
//!             .with_transition_style(TransitionStyle::Reveal)
//!             .with_minimum_button_width(60.0)
//!     }
//!
//!     fn did_delete_row(&mut self, row: &u32) {
//!         self.deleted.push(*row);
//!     }
//! }
//!
//! let mut mail = Mail { deleted: Vec::new() };
//! let mut row = SwipeController::new(42_u32, Size::new(320.0, 44.0));
//!
//! // Nothing on the left edge: dragging right is refused.
//! row.begin_pan();
//! assert!(!row.update_pan(&mut mail, &mut NoFeedback, Vec2::new(40.0, 0.0)));
//! row.end_pan(&mut mail, &mut NoFeedback, Vec2::ZERO, 0);
//! assert_eq!(row.state(), SwipeState::Center);
//!
//! // Dragging left reveals two 60-wide buttons.
//! row.begin_pan();
//! row.update_pan(&mut mail, &mut NoFeedback, Vec2::new(-100.0, 0.0));
//! row.end_pan(&mut mail, &mut NoFeedback, Vec2::ZERO, 10);
//! row.tick(&mut mail, 500);
//! assert_eq!(row.state(), SwipeState::Open(Orientation::Right));
//! assert_eq!(row.visible_width(), 120.0);
//!
//! // "Trash" deletes: the row reports it and collapses.
//! row.select_action(&mut mail, &mut NoFeedback, 0, 600);
//! assert_eq!(mail.deleted, vec![42]);
//! row.tick(&mut mail, 1_000);
//! assert_eq!(row.collapse_fraction(), 0.0);
//! assert_eq!(row.state(), SwipeState::Center);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for [`SwipeOptions`] and its parts.
//!
//! Diagnostics are emitted through `tracing`; install a subscriber to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod actions;
mod animation;
mod controller;
mod delegate;
mod error;
mod expansion;
mod gesture;
mod haptics;
mod layout;
mod list;
mod options;
mod orientation;
mod row;
mod state;

pub use action::{ActionStyle, Disposition, SwipeAction};
pub use actions::{ActionButton, ActionsView, ButtonTransition, ButtonTransitions};
pub use animation::{Animation, AnimationId, AnimationKind, AnimationTiming, Easing, ease};
pub use controller::{SwipeController, rubber_band};
pub use delegate::SwipeDelegate;
pub use error::{OptionsError, SwipeError};
pub use expansion::{
    ExpansionCompletion, ExpansionStyle, ExpansionTarget, ExpansionTrigger,
    MINIMUM_TARGET_OVERSCROLL,
};
pub use gesture::{PanTracker, should_begin};
pub use haptics::{HapticFeedback, ImpactStyle, NoFeedback};
pub use layout::{LayoutContext, TransitionStyle};
pub use list::{ListId, SwipeList};
pub use options::{
    DEFAULT_ELASTICITY, DEFAULT_FLICK_VELOCITY, DEFAULT_MINIMUM_BUTTON_WIDTH,
    DEFAULT_REVEAL_FRACTION, SwipeOptions,
};
pub use orientation::Orientation;
pub use row::{AccessibilityAction, DEFAULT_BEGIN_THRESHOLD, GestureOutcome, SwipeRow};
pub use state::SwipeState;
