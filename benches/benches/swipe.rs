// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_swipe::{
    HorizontalDragTracker, SwipeCard, SwipeConfig, SwipeDirection, SwipeHandler,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn delta(&mut self, span: f64) -> f64 {
        let unit = f64::from(self.next_u32()) / f64::from(u32::MAX);
        (unit * 2.0 - 1.0) * span
    }
}

#[derive(Default)]
struct Count(u64);

impl SwipeHandler for Count {
    fn on_swipe_complete(&mut self, _direction: SwipeDirection) {
        self.0 += 1;
    }
}

fn gen_deltas(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.delta(25.0)).collect()
}

fn bench_swipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_swipe");

    for &moves in &[16_usize, 256, 4_096] {
        let deltas = gen_deltas(moves, 0x5717_0000_0000_0001);

        group.bench_function(format!("drag(moves={moves})"), |b| {
            b.iter_batched(
                || SwipeCard::new(SwipeConfig::default(), Count::default()).unwrap(),
                |mut card| {
                    card.on_drag_start();
                    for &delta in &deltas {
                        card.on_drag(delta, 0.0);
                    }
                    black_box(card.on_drag_end());
                    black_box(card);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("pointer_stream(moves={moves})"), |b| {
            b.iter_batched(
                || {
                    (
                        HorizontalDragTracker::new(8.0),
                        SwipeCard::new(SwipeConfig::default(), Count::default()).unwrap(),
                    )
                },
                |(mut tracker, mut card)| {
                    let mut x = 0.0;
                    tracker.pointer_down(Point::new(x, 0.0), Duration::ZERO);
                    for (i, &delta) in deltas.iter().enumerate() {
                        x += delta;
                        let time = Duration::from_millis(8 * (i as u64 + 1));
                        for event in tracker.pointer_move(Point::new(x, 0.0), time) {
                            card.handle(event);
                        }
                    }
                    for event in tracker.pointer_up(Duration::from_secs(60)) {
                        card.handle(event);
                    }
                    black_box(card);
                },
                BatchSize::SmallInput,
            );
        });
    }

    let bounds = Rect::new(0.0, 0.0, 360.0, 72.0);
    group.bench_function("compose", |b| {
        let mut card = SwipeCard::new(SwipeConfig::default(), Count::default()).unwrap();
        card.on_drag_start();
        card.on_drag(-64.0, 0.0);
        b.iter(|| black_box(card.compose(black_box(bounds))));
    });

    group.finish();
}

criterion_group!(benches, bench_swipe);
criterion_main!(benches);
