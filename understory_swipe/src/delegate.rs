// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host's side of the swipe contract.

use alloc::vec::Vec;

use crate::{Orientation, SwipeAction, SwipeOptions};

/// Implemented by the host list's data source.
///
/// `K` identifies a row and `A` is the application's action handle. Every
/// method except [`SwipeDelegate::actions`] has a default.
///
/// ```
/// use understory_swipe::{Orientation, SwipeAction, SwipeDelegate};
///
/// struct Inbox {
///     messages: Vec<u32>,
/// }
///
/// impl SwipeDelegate<u32, &'static str> for Inbox {
///     fn actions(&mut self, _row: &u32, o: Orientation) -> Vec<SwipeAction<&'static str>> {
///         match o {
///             Orientation::Right => vec![SwipeAction::destructive("delete", "Delete")],
///             _ => Vec::new(),
///         }
///     }
///
///     fn did_delete_row(&mut self, row: &u32) {
///         self.messages.retain(|m| m != row);
///     }
/// }
/// ```
pub trait SwipeDelegate<K, A> {
    /// Actions for `row` on the `orientation` edge, outermost first.
    ///
    /// Returning no actions refuses swiping in that direction.
    fn actions(&mut self, row: &K, orientation: Orientation) -> Vec<SwipeAction<A>>;

    /// Options for the reveal cycle that is about to start.
    fn options(&mut self, row: &K, orientation: Orientation) -> SwipeOptions {
        let _ = (row, orientation);
        SwipeOptions::default()
    }

    /// Whether `row` may start revealing actions on `orientation`.
    fn can_begin_editing(&mut self, row: &K, orientation: Orientation) -> bool {
        let _ = (row, orientation);
        true
    }

    /// `row` started revealing actions.
    fn will_begin_editing(&mut self, row: &K, orientation: Orientation) {
        let _ = (row, orientation);
    }

    /// `row` returned to center and dropped its actions.
    fn did_end_editing(&mut self, row: &K, orientation: Orientation) {
        let _ = (row, orientation);
    }

    /// Handler for a selected action.
    fn handle_action(&mut self, row: &K, orientation: Orientation, action: &SwipeAction<A>) {
        let _ = (row, orientation, action);
    }

    /// `row` should be removed from the backing data.
    fn did_delete_row(&mut self, row: &K) {
        let _ = row;
    }
}
