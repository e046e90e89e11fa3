// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `SwipeList`: routing pointer streams and keeping one row open.

use kurbo::{Point, Size};
use understory_swipe::{
    Disposition, ExpansionStyle, GestureOutcome, HapticFeedback, ImpactStyle, Orientation,
    SwipeAction, SwipeDelegate, SwipeList, SwipeOptions, SwipeState,
};

#[derive(Default)]
struct Rows {
    began: Vec<char>,
    ended: Vec<char>,
    deleted: Vec<char>,
}

impl SwipeDelegate<char, u8> for Rows {
    fn actions(&mut self, _row: &char, orientation: Orientation) -> Vec<SwipeAction<u8>> {
        match orientation {
            Orientation::Right => vec![SwipeAction::destructive(0, "Delete")],
            _ => vec![SwipeAction::new(1, "Unread")],
        }
    }

    fn will_begin_editing(&mut self, row: &char, _orientation: Orientation) {
        self.began.push(*row);
    }

    fn did_end_editing(&mut self, row: &char, _orientation: Orientation) {
        self.ended.push(*row);
    }

    fn did_delete_row(&mut self, row: &char) {
        self.deleted.push(*row);
    }
}

#[derive(Debug, Default)]
struct Counter {
    prepared: usize,
    impacts: usize,
}

impl HapticFeedback for Counter {
    fn prepare(&mut self) {
        self.prepared += 1;
    }

    fn impact_occurred(&mut self, _style: ImpactStyle) {
        self.impacts += 1;
    }
}

fn list() -> SwipeList<char, u8, Counter> {
    let mut list = SwipeList::new(Counter::default());
    for key in ['a', 'b', 'c'] {
        list.insert_row(key, Size::new(320.0, 44.0));
    }
    list
}

fn swipe<D: SwipeDelegate<char, u8>>(
    list: &mut SwipeList<char, u8, Counter>,
    rows: &mut D,
    key: char,
    dx: f64,
    now: u64,
) {
    list.pointer_down(&key, Point::new(160.0, 20.0), now);
    list.pointer_move(rows, &key, Point::new(160.0 + dx, 20.0), now + 16);
    list.pointer_up(rows, &key, Point::new(160.0 + dx, 20.0), now + 32);
}

#[test]
fn opening_a_row_records_it() {
    let (mut list, mut rows) = (list(), Rows::default());
    swipe(&mut list, &mut rows, 'a', 100.0, 0);
    assert_eq!(list.open_row(), Some(&'a'));
    assert_eq!(list.row(&'a').unwrap().state(), SwipeState::Open(Orientation::Left));
    assert_eq!(list.haptics().prepared, 1);
    assert_eq!(list.haptics().impacts, 1);
}

#[test]
fn open_row_closes_before_another_row_drags() {
    let (mut list, mut rows) = (list(), Rows::default());
    swipe(&mut list, &mut rows, 'a', 100.0, 0);
    list.tick(&mut rows, 1_000);

    list.pointer_down(&'b', Point::new(160.0, 20.0), 2_000);
    // Below the begin threshold nothing changes yet.
    assert_eq!(
        list.pointer_move(&mut rows, &'b', Point::new(165.0, 20.0), 2_010),
        GestureOutcome::Pending
    );
    assert_eq!(list.open_row(), Some(&'a'));

    assert_eq!(
        list.pointer_move(&mut rows, &'b', Point::new(100.0, 20.0), 2_020),
        GestureOutcome::Claimed
    );
    assert_eq!(list.row(&'a').unwrap().state(), SwipeState::Center);
    assert_eq!(
        list.row(&'b').unwrap().state(),
        SwipeState::Dragging(Orientation::Right)
    );
    assert_eq!(list.open_row(), None);
    assert_eq!(rows.began, vec!['a', 'b']);

    list.pointer_up(&mut rows, &'b', Point::new(100.0, 20.0), 2_030);
    assert_eq!(list.open_row(), Some(&'b'));
    list.tick(&mut rows, 3_000);
    assert_eq!(rows.ended, vec!['a']);
    assert!(list.row(&'a').unwrap().controller().actions_view().is_none());
}

#[test]
fn vertical_drags_leave_the_open_row_alone() {
    let (mut list, mut rows) = (list(), Rows::default());
    swipe(&mut list, &mut rows, 'a', 100.0, 0);
    list.pointer_down(&'c', Point::new(160.0, 20.0), 500);
    assert_eq!(
        list.pointer_move(&mut rows, &'c', Point::new(162.0, 80.0), 516),
        GestureOutcome::PassThrough
    );
    assert_eq!(list.open_row(), Some(&'a'));
    assert_eq!(list.row(&'c').unwrap().state(), SwipeState::Center);
    assert_eq!(
        list.pointer_up(&mut rows, &'c', Point::new(162.0, 80.0), 532),
        GestureOutcome::PassThrough
    );
}

#[test]
fn deleting_through_the_list() {
    let (mut list, mut rows) = (list(), Rows::default());
    swipe(&mut list, &mut rows, 'b', -100.0, 0);
    list.tick(&mut rows, 1_000);
    assert!(list.select_action(&mut rows, &'b', 0, 1_000));
    assert_eq!(rows.deleted, vec!['b']);
    list.tick(&mut rows, 2_000);
    assert_eq!(list.open_row(), None);
    assert_eq!(list.row(&'b').unwrap().controller().collapse_fraction(), 0.0);

    let removed = list.remove_row(&mut rows, &'b').unwrap();
    assert_eq!(removed.controller().collapse_fraction(), 1.0);
    assert_eq!(list.len(), 2);
    assert!(list.row(&'b').is_none());
    assert!(!list.pointer_down(&'b', Point::ZERO, 3_000));
}

#[test]
fn refused_swipes_still_close_the_open_row() {
    struct LeftOnly;
    impl SwipeDelegate<char, u8> for LeftOnly {
        fn actions(&mut self, _row: &char, orientation: Orientation) -> Vec<SwipeAction<u8>> {
            match orientation {
                Orientation::Left => vec![SwipeAction::new(1, "Pin")],
                _ => Vec::new(),
            }
        }
    }

    let mut list = list();
    swipe(&mut list, &mut LeftOnly, 'a', 100.0, 0);
    list.tick(&mut LeftOnly, 1_000);

    list.pointer_down(&'b', Point::new(160.0, 20.0), 2_000);
    let outcome = list.pointer_move(&mut LeftOnly, &'b', Point::new(100.0, 20.0), 2_016);
    assert_eq!(outcome, GestureOutcome::Refused);
    // The open row was asked to close when 'b' recognized the drag.
    assert_eq!(list.row(&'a').unwrap().state(), SwipeState::Center);
    assert_eq!(list.row(&'b').unwrap().state(), SwipeState::Center);
}

#[test]
fn accessibility_actions_close_the_open_row() {
    let (mut list, mut rows) = (list(), Rows::default());
    swipe(&mut list, &mut rows, 'a', 100.0, 0);
    list.tick(&mut rows, 1_000);
    assert!(list.perform_accessibility_action(&mut rows, &'c', Orientation::Right, 0, 2_000));
    assert_eq!(list.row(&'a').unwrap().state(), SwipeState::Center);
    assert_eq!(rows.deleted, vec!['c']);
    assert!(!list.perform_accessibility_action(&mut rows, &'z', Orientation::Left, 0, 2_000));
}

#[test]
fn a_filling_row_stays_the_only_open_row() {
    struct Pin;
    impl SwipeDelegate<char, u8> for Pin {
        fn actions(&mut self, _row: &char, _o: Orientation) -> Vec<SwipeAction<u8>> {
            vec![SwipeAction::new(2, "Pin").with_disposition(Disposition::Nothing)]
        }

        fn options(&mut self, _row: &char, _o: Orientation) -> SwipeOptions {
            SwipeOptions::default().with_expansion_style(ExpansionStyle::fill())
        }
    }

    let mut list = list();
    swipe(&mut list, &mut Pin, 'a', -300.0, 0);
    assert!(list.row(&'a').unwrap().controller().is_triggered());
    assert_eq!(list.open_row(), Some(&'a'));

    // 'a' is still filling, so 'b' cannot take over.
    list.pointer_down(&'b', Point::new(160.0, 20.0), 100);
    let outcome = list.pointer_move(&mut Pin, &'b', Point::new(60.0, 20.0), 116);
    assert_eq!(outcome, GestureOutcome::Refused);
    let outcome = list.pointer_up(&mut Pin, &'b', Point::new(60.0, 20.0), 132);
    assert_eq!(outcome, GestureOutcome::Refused);
    assert_eq!(list.open_row(), Some(&'a'));

    list.tick(&mut Pin, 10_000);
    list.tick(&mut Pin, 20_000);
    assert_eq!(list.row(&'a').unwrap().state(), SwipeState::Open(Orientation::Right));
    assert_eq!(list.row(&'b').unwrap().state(), SwipeState::Center);
    assert_eq!(list.open_row(), Some(&'a'));

    // Once settled, 'a' closes for the next swipe as usual.
    swipe(&mut list, &mut Pin, 'b', -100.0, 30_000);
    assert_eq!(list.row(&'a').unwrap().state(), SwipeState::Center);
    assert_eq!(list.row(&'b').unwrap().state(), SwipeState::Open(Orientation::Right));
    assert_eq!(list.open_row(), Some(&'b'));
}
