// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};
use std::time::Duration;
use understory_swipe::{
    ActionsView, NoFeedback, Orientation, SwipeAction, SwipeController, SwipeDelegate,
    SwipeOptions, TransitionStyle,
};

const STYLES: [TransitionStyle; 4] = [
    TransitionStyle::Border,
    TransitionStyle::Drag,
    TransitionStyle::Reveal,
    TransitionStyle::RevealVertical,
];

fn actions(count: usize) -> Vec<SwipeAction<usize>> {
    (0..count).map(|i| SwipeAction::new(i, "Action")).collect()
}

fn bench_layout_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe/layout_pass");

    // One layout pass per drag sample: every style should stay flat in the
    // number of samples and linear in the number of buttons.
    for count in [1_usize, 3, 8] {
        for style in STYLES {
            let options = SwipeOptions::default()
                .with_minimum_button_width(60.0)
                .with_transition_style(style);
            let mut view = ActionsView::new(
                Orientation::Right,
                actions(count),
                &options,
                Size::new(375.0, 44.0),
            )
            .expect("non-empty actions");
            let widths: Vec<f64> = (0..240).map(|i| f64::from(i) * 2.5).collect();
            group.throughput(Throughput::Elements(widths.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{style:?}"), count),
                &widths,
                |b, widths| {
                    b.iter(|| {
                        for w in widths {
                            black_box(view.set_visible_width(*w));
                        }
                    });
                },
            );
        }
    }

    group.finish();
}

struct Rows(usize);

impl SwipeDelegate<u32, usize> for Rows {
    fn actions(&mut self, _row: &u32, _o: Orientation) -> Vec<SwipeAction<usize>> {
        actions(self.0)
    }
}

fn bench_full_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe/gesture");
    group.measurement_time(Duration::from_secs(2));

    // Begin, 120 moves past the elastic limit, release, and settle.
    for count in [1_usize, 3] {
        let mut rows = Rows(count);
        group.bench_function(BenchmarkId::new("drag_open_settle", count), |b| {
            b.iter(|| {
                let mut row = SwipeController::new(7_u32, Size::new(375.0, 44.0));
                row.begin_pan();
                for i in 0..120 {
                    let dx = -f64::from(i) * 3.0;
                    row.update_pan(&mut rows, &mut NoFeedback, Vec2::new(dx, 0.0));
                }
                row.end_pan(&mut rows, &mut NoFeedback, Vec2::ZERO, 0);
                for now in (0..=300).step_by(16) {
                    row.tick(&mut rows, now);
                }
                black_box(row.visible_width())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout_pass, bench_full_gesture);
criterion_main!(benches);
