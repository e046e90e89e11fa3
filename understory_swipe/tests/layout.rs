// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the transition layouts and the actions container.
//!
//! These pin down how each `TransitionStyle` distributes the exposed width
//! across buttons, and how the two edges mirror each other.

use kurbo::{Point, Size};
use understory_swipe::{
    ActionsView, LayoutContext, Orientation, SwipeAction, SwipeOptions, TransitionStyle,
};

const STYLES: [TransitionStyle; 4] = [
    TransitionStyle::Border,
    TransitionStyle::Drag,
    TransitionStyle::Reveal,
    TransitionStyle::RevealVertical,
];

fn cx(
    style: TransitionStyle,
    orientation: Orientation,
    count: usize,
    visible: f64,
) -> LayoutContext {
    LayoutContext {
        number_of_actions: count,
        orientation,
        content_size: style.content_size(60.0, count, 44.0),
        visible_width: visible,
        minimum_button_width: 60.0,
    }
}

#[test]
fn nothing_is_visible_without_exposed_width() {
    for style in STYLES {
        for visible in [0.0, -1.0, -250.0] {
            for orientation in [Orientation::Left, Orientation::Right] {
                let widths = style.visible_widths(&cx(style, orientation, 3, visible));
                assert_eq!(widths, vec![0.0; 3], "{style:?} at {visible}");
            }
        }
    }
}

#[test]
fn drag_reveals_one_button_at_a_time() {
    for visible in [0.0, 15.0, 60.0, 61.0, 119.5, 180.0, 400.0] {
        let widths = TransitionStyle::Drag.visible_widths(&cx(
            TransitionStyle::Drag,
            Orientation::Left,
            3,
            visible,
        ));
        for (index, width) in widths.iter().enumerate() {
            let expected = (visible - index as f64 * 60.0).clamp(0.0, 60.0);
            assert_eq!(*width, expected, "button {index} at {visible}");
        }
    }
}

#[test]
fn reveal_is_drag_reversed() {
    for visible in [0.0, 30.0, 90.0, 150.0, 240.0] {
        let drag = TransitionStyle::Drag.visible_widths(&cx(
            TransitionStyle::Drag,
            Orientation::Right,
            4,
            visible,
        ));
        let mut reveal = TransitionStyle::Reveal.visible_widths(&cx(
            TransitionStyle::Reveal,
            Orientation::Right,
            4,
            visible,
        ));
        reveal.reverse();
        assert_eq!(drag, reveal, "at {visible}");
    }
}

#[test]
fn two_buttons_fill_outermost_first() {
    let partly = cx(TransitionStyle::Drag, Orientation::Right, 2, 100.0);
    assert_eq!(TransitionStyle::Drag.visible_widths(&partly), vec![60.0, 40.0]);
    let fully = partly.with_visible_width(150.0);
    assert_eq!(TransitionStyle::Drag.visible_widths(&fully), vec![60.0, 60.0]);
}

#[test]
fn border_splits_exposed_width_evenly() {
    let c = cx(TransitionStyle::Border, Orientation::Left, 3, 90.0);
    assert_eq!(TransitionStyle::Border.visible_widths(&c), vec![30.0; 3]);
    assert_eq!(TransitionStyle::Border.container_offset(&c), 0.0);
    assert_eq!(TransitionStyle::Border.button_origin(2, &c), Point::new(60.0, 0.0));
}

#[test]
fn reveal_vertical_stacks_a_single_column() {
    let style = TransitionStyle::RevealVertical;
    let c = cx(style, Orientation::Left, 2, 45.0);
    assert_eq!(c.content_size, Size::new(60.0, 44.0));
    assert_eq!(style.visible_widths(&c), vec![45.0, 45.0]);
    assert_eq!(style.button_size(&c), Size::new(60.0, 22.0));
    assert_eq!(style.button_origin(1, &c), Point::new(0.0, 22.0));

    let wide = c.with_visible_width(500.0);
    assert_eq!(style.visible_widths(&wide), vec![60.0, 60.0]);
}

#[test]
fn edges_mirror_each_other() {
    for style in STYLES {
        for visible in [20.0, 75.0, 130.0] {
            let left = cx(style, Orientation::Left, 3, visible);
            let right = cx(style, Orientation::Right, 3, visible);
            assert_eq!(style.visible_widths(&left), style.visible_widths(&right));
            assert_eq!(style.container_offset(&left), -style.container_offset(&right));
            for index in 0..3 {
                let l = style.button_origin(index, &left);
                let r = style.button_origin(index, &right);
                assert_eq!(l.x, -r.x, "{style:?} button {index}");
                assert_eq!(l.y, r.y, "{style:?} button {index}");
            }
        }
    }
}

#[test]
fn drag_window_slides_in_with_the_row() {
    let hidden = cx(TransitionStyle::Drag, Orientation::Left, 2, 0.0);
    assert_eq!(TransitionStyle::Drag.container_offset(&hidden), 120.0);
    let open = hidden.with_visible_width(120.0);
    assert_eq!(TransitionStyle::Drag.container_offset(&open), 0.0);
}

#[test]
fn actions_view_tracks_visible_width() {
    let options = SwipeOptions::default()
        .with_minimum_button_width(60.0)
        .with_transition_style(TransitionStyle::Reveal);
    let actions = vec![
        SwipeAction::new("flag", "Flag"),
        SwipeAction::new("more", "More"),
        SwipeAction::new("archive", "Archive"),
    ];
    let mut view =
        ActionsView::new(Orientation::Left, actions, &options, Size::new(320.0, 44.0)).unwrap();
    assert_eq!(view.preferred_width(), 180.0);

    let changed = view.set_visible_width(90.0);
    let indices: Vec<usize> = changed.iter().map(|t| t.index).collect();
    assert_eq!(indices, vec![1, 2]);
    let widths: Vec<f64> = view.buttons().iter().map(|b| b.visible_width).collect();
    assert_eq!(widths, vec![0.0, 30.0, 60.0]);
    assert_eq!(view.container_offset(), 90.0);
    assert_eq!(view.layout_context().visible_width, 90.0);
}
