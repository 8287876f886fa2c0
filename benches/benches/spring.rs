// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use understory_spring::{Animatable, Frame, SpringConfig, damping_ratio, stiffness};

const FRAME: Duration = Duration::from_nanos(16_666_667);

fn bench_spring(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_spring");

    for &(name, ratio) in &[
        ("high_bouncy", damping_ratio::HIGH_BOUNCY),
        ("medium_bouncy", damping_ratio::MEDIUM_BOUNCY),
        ("no_bouncy", damping_ratio::NO_BOUNCY),
        ("overdamped", 2.0),
    ] {
        let spring = SpringConfig::new(ratio, stiffness::MEDIUM_LOW);
        group.bench_function(format!("settle({name})"), |b| {
            b.iter_batched(
                || {
                    let mut anim = Animatable::new(150.0);
                    anim.animate_to(0.0, spring);
                    anim
                },
                |mut anim| {
                    let mut frames = 0_u32;
                    while let Frame::Running(_) = anim.advance(FRAME) {
                        frames += 1;
                    }
                    black_box(frames);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("snap_storm", |b| {
        let mut anim = Animatable::new(0.0);
        b.iter(|| {
            for i in 0..1_000 {
                anim.snap_to(black_box(f64::from(i)));
            }
            black_box(anim.value());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_spring);
criterion_main!(benches);
