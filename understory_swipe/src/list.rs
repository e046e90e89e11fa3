// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List-scoped coordination: at most one row open at a time.
//!
//! A [`SwipeList`] owns the rows of one host list, keyed by the host's row key,
//! and the haptic generator they share. It remembers which row is open and
//! asks that row to close before another row claims a swipe.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_swipe::{
//!     NoFeedback, Orientation, SwipeAction, SwipeDelegate, SwipeList, SwipeState,
//! };
//!
//! struct Rows;
//! impl SwipeDelegate<&'static str, ()> for Rows {
//!     fn actions(&mut self, _row: &&'static str, _o: Orientation) -> Vec<SwipeAction<()>> {
//!         vec![SwipeAction::new((), "Archive")]
//!     }
//! }
//!
//! let mut list = SwipeList::new(NoFeedback);
//! let size = Size::new(320.0, 44.0);
//! list.insert_row("a", size);
//! list.insert_row("b", size);
//!
//! list.pointer_down(&"a", Point::new(10.0, 20.0), 0);
//! list.pointer_move(&mut Rows, &"a", Point::new(100.0, 20.0), 16);
//! list.pointer_up(&mut Rows, &"a", Point::new(100.0, 20.0), 32);
//! assert_eq!(list.open_row(), Some(&"a"));
//!
//! list.pointer_down(&"b", Point::new(10.0, 20.0), 500);
//! list.pointer_move(&mut Rows, &"b", Point::new(60.0, 20.0), 516);
//! assert_eq!(list.row(&"a").unwrap().state(), SwipeState::Center);
//! assert_eq!(list.row(&"b").unwrap().state(), SwipeState::Dragging(Orientation::Left));
//! ```

use core::fmt::Debug;
use core::hash::Hash;
use core::sync::atomic::{AtomicU32, Ordering};

use hashbrown::HashMap;
use kurbo::{Point, Size};
use tracing::debug;

use crate::{GestureOutcome, HapticFeedback, Orientation, SwipeDelegate, SwipeRow};

static NEXT_LIST_ID: AtomicU32 = AtomicU32::new(1);

/// Identifies a list that rows can be attached to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListId(u32);

impl ListId {
    /// Allocates an id no other list in this process uses.
    #[must_use]
    pub fn allocate() -> Self {
        Self(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum CloseOthers {
    Nothing,
    Closed,
    Busy,
}

/// Rows of one list plus the list-wide swipe state.
#[derive(Debug)]
pub struct SwipeList<K, A, H> {
    id: ListId,
    rows: HashMap<K, SwipeRow<K, A>>,
    open_row: Option<K>,
    haptics: H,
}

impl<K, A, H> SwipeList<K, A, H>
where
    K: Clone + Eq + Hash + Debug,
    H: HapticFeedback,
{
    /// Creates an empty list with a fresh [`ListId`].
    pub fn new(haptics: H) -> Self {
        Self {
            id: ListId::allocate(),
            rows: HashMap::new(),
            open_row: None,
            haptics,
        }
    }

    /// This list's id.
    #[must_use]
    pub fn id(&self) -> ListId {
        self.id
    }

    /// The shared haptic generator.
    #[must_use]
    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    /// Mutable access to the shared haptic generator.
    pub fn haptics_mut(&mut self) -> &mut H {
        &mut self.haptics
    }

    /// Attaches a row for `key`, or resizes the row already attached.
    pub fn insert_row(&mut self, key: K, size: Size) -> &mut SwipeRow<K, A> {
        let id = self.id;
        let row = self.rows.entry(key.clone()).or_insert_with(|| {
            let mut row = SwipeRow::new(key, size);
            row.did_move_to_list(Some(id));
            row
        });
        row.set_size(size);
        row
    }

    /// Detaches the row for `key`, resetting it first.
    pub fn remove_row<D>(&mut self, delegate: &mut D, key: &K) -> Option<SwipeRow<K, A>>
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        let mut row = self.rows.remove(key)?;
        row.prepare_for_reuse(delegate);
        row.did_move_to_list(None);
        if self.open_row.as_ref() == Some(key) {
            self.open_row = None;
        }
        Some(row)
    }

    /// The row that is currently open, if any.
    #[must_use]
    pub fn open_row(&self) -> Option<&K> {
        self.open_row.as_ref()
    }

    /// The row for `key`.
    #[must_use]
    pub fn row(&self, key: &K) -> Option<&SwipeRow<K, A>> {
        self.rows.get(key)
    }

    /// Mutable access to the row for `key`.
    pub fn row_mut(&mut self, key: &K) -> Option<&mut SwipeRow<K, A>> {
        self.rows.get_mut(key)
    }

    /// All rows, in no particular order.
    pub fn rows(&self) -> impl Iterator<Item = (&K, &SwipeRow<K, A>)> {
        self.rows.iter()
    }

    /// Number of attached rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when no rows are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Routes a press to the row for `key`. Returns `false` for unknown rows.
    pub fn pointer_down(&mut self, key: &K, pos: Point, now_ms: u64) -> bool {
        let Some(row) = self.rows.get_mut(key) else {
            return false;
        };
        row.pointer_down(pos, now_ms);
        true
    }

    /// Routes a move to the row for `key`.
    ///
    /// When the move makes the row claim a swipe, the open row (if another)
    /// is asked to close first. While the open row is still finishing a
    /// selected action it cannot close, and the swipe is refused.
    pub fn pointer_move<D>(
        &mut self,
        delegate: &mut D,
        key: &K,
        pos: Point,
        now_ms: u64,
    ) -> GestureOutcome
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        let recognized = self.rows.get(key).is_some_and(|row| row.recognizes(pos));
        let busy = recognized && self.close_others(delegate, key, now_ms) == CloseOthers::Busy;
        let Some(row) = self.rows.get_mut(key) else {
            return GestureOutcome::Ignored;
        };
        if busy {
            row.refuse_gesture();
            return GestureOutcome::Refused;
        }
        let outcome = row.pointer_move(delegate, &mut self.haptics, pos, now_ms);
        self.note_row(key);
        outcome
    }

    /// Routes a release to the row for `key`.
    pub fn pointer_up<D>(
        &mut self,
        delegate: &mut D,
        key: &K,
        pos: Point,
        now_ms: u64,
    ) -> GestureOutcome
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        let Some(row) = self.rows.get_mut(key) else {
            return GestureOutcome::Ignored;
        };
        let outcome = row.pointer_up(delegate, &mut self.haptics, pos, now_ms);
        self.note_row(key);
        outcome
    }

    /// Routes a cancellation to the row for `key`.
    pub fn pointer_cancel<D>(&mut self, delegate: &mut D, key: &K, now_ms: u64)
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        if let Some(row) = self.rows.get_mut(key) {
            row.pointer_cancel(delegate, &mut self.haptics, now_ms);
            self.note_row(key);
        }
    }

    /// Selects action `index` on the row for `key`.
    pub fn select_action<D>(
        &mut self,
        delegate: &mut D,
        key: &K,
        index: usize,
        now_ms: u64,
    ) -> bool
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        let Some(row) = self.rows.get_mut(key) else {
            return false;
        };
        let selected = row.select_action(delegate, &mut self.haptics, index, now_ms);
        self.note_row(key);
        selected
    }

    /// Reveals and selects an action for assistive technology, closing the open row first.
    pub fn perform_accessibility_action<D>(
        &mut self,
        delegate: &mut D,
        key: &K,
        orientation: Orientation,
        index: usize,
        now_ms: u64,
    ) -> bool
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        if !self.rows.contains_key(key)
            || self.close_others(delegate, key, now_ms) == CloseOthers::Busy
        {
            return false;
        }
        let Some(row) = self.rows.get_mut(key) else {
            return false;
        };
        let performed =
            row.perform_accessibility_action(delegate, &mut self.haptics, orientation, index, now_ms);
        self.note_row(key);
        performed
    }

    /// Handles a tap on the row for `key` at `location` (row coordinates).
    ///
    /// A tap on any other row than the open one closes the open row. Returns
    /// `true` when the tap closed a row.
    pub fn tap<D>(&mut self, delegate: &mut D, key: &K, location: Point, now_ms: u64) -> bool
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        match self.close_others(delegate, key, now_ms) {
            CloseOthers::Closed => return true,
            CloseOthers::Busy => return false,
            CloseOthers::Nothing => {}
        }
        let Some(row) = self.rows.get_mut(key) else {
            return false;
        };
        let closed = row.tap(delegate, location, now_ms);
        self.note_row(key);
        closed
    }

    /// Closes the open row. Returns `false` when no row is open.
    pub fn hide_open_row<D>(&mut self, delegate: &mut D, now_ms: u64) -> bool
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        let Some(key) = self.open_row.take() else {
            return false;
        };
        let Some(row) = self.rows.get_mut(&key) else {
            return false;
        };
        row.hide(delegate, true, now_ms);
        self.note_row(&key);
        true
    }

    /// Advances every animating row to `now_ms`.
    ///
    /// A row that settles open becomes the open row, closing the previous one.
    pub fn tick<D>(&mut self, delegate: &mut D, now_ms: u64)
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        let mut opened = None;
        for (key, row) in &mut self.rows {
            if !row.controller().is_animating() {
                continue;
            }
            row.tick(delegate, now_ms);
            if row.state().is_open() && self.open_row.as_ref() != Some(key) {
                opened = Some(key.clone());
            }
        }
        self.forget_inactive_open_row();
        let Some(key) = opened else {
            return;
        };
        if self.close_others(delegate, &key, now_ms) == CloseOthers::Busy {
            if let Some(row) = self.rows.get_mut(&key) {
                row.hide(delegate, true, now_ms);
            }
        } else {
            self.note_row(&key);
        }
    }

    /// The host list started scrolling; every active row closes.
    pub fn begin_scrolling<D>(&mut self, delegate: &mut D, now_ms: u64)
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        for row in self.rows.values_mut() {
            row.list_did_begin_scrolling(delegate, now_ms);
        }
        self.forget_inactive_open_row();
    }

    /// Closes the open row unless it is `key`.
    ///
    /// A row finishing a selected action ignores the hide and stays recorded.
    fn close_others<D>(&mut self, delegate: &mut D, key: &K, now_ms: u64) -> CloseOthers
    where
        D: SwipeDelegate<K, A> + ?Sized,
    {
        let Some(open) = self.open_row.as_ref() else {
            return CloseOthers::Nothing;
        };
        if open == key {
            return CloseOthers::Nothing;
        }
        let Some(row) = self.rows.get_mut(open) else {
            self.open_row = None;
            return CloseOthers::Nothing;
        };
        if row.controller().is_triggered() {
            debug!(open = ?open, next = ?key, "open row is busy");
            return CloseOthers::Busy;
        }
        debug!(open = ?open, next = ?key, "closing open row");
        row.hide(delegate, true, now_ms);
        self.open_row = None;
        CloseOthers::Closed
    }

    fn note_row(&mut self, key: &K) {
        let Some(row) = self.rows.get(key) else {
            return;
        };
        let state = row.state();
        if state.is_open() {
            if self.open_row.as_ref() != Some(key) {
                debug!(row = ?key, "row opened");
                self.open_row = Some(key.clone());
            }
        } else if !state.is_active() && self.open_row.as_ref() == Some(key) {
            self.open_row = None;
        }
    }

    fn forget_inactive_open_row(&mut self) {
        let active = self
            .open_row
            .as_ref()
            .and_then(|key| self.rows.get(key))
            .is_some_and(|row| row.state().is_active());
        if !active {
            self.open_row = None;
        }
    }
}
