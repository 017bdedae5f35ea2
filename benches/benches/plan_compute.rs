// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use vantage_plan::engine::compute_render_plan;
use vantage_plan::matching::{MatchMode, ModalPathRegistry};
use vantage_plan::types::{RouteDescriptor, RouteKey, RouteKind, StackState};

/// One main route followed by `n - 1` modal routes, the last one focused.
fn gen_stack(n: usize) -> (StackState, Vec<RouteDescriptor<usize>>) {
    let keys: Vec<RouteKey> = (0..n).map(|i| RouteKey::new(format!("r{i}"))).collect();
    let state = StackState::new(n - 1, keys.clone()).unwrap();
    let descriptors = keys
        .into_iter()
        .enumerate()
        .map(|(i, k)| {
            let kind = if i == 0 { RouteKind::Main } else { RouteKind::Modal };
            RouteDescriptor::new(k, kind, move || i)
        })
        .collect();
    (state, descriptors)
}

fn gen_registry(slots: usize) -> ModalPathRegistry {
    ModalPathRegistry::new((0..slots).map(|i| format!("slot{i}"))).unwrap()
}

fn bench_stack_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_stack_depth");
    let registry = gen_registry(4);
    for n in [2_usize, 8, 32, 128] {
        let (state, descriptors) = gen_stack(n);
        group.throughput(Throughput::Elements(n as u64));
        for mode in [MatchMode::Prefix, MatchMode::ExactFirstSegment] {
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), n),
                &n,
                |b, _| {
                    b.iter(|| {
                        let plan = compute_render_plan(
                            black_box(&state),
                            black_box(&descriptors),
                            black_box(Some("/slot2/item/7")),
                            &registry,
                            mode,
                        )
                        .unwrap();
                        black_box(plan)
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_registry_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_registry_size");
    let (state, descriptors) = gen_stack(8);
    for slots in [1_usize, 4, 16, 64] {
        let registry = gen_registry(slots);
        group.throughput(Throughput::Elements(slots as u64));
        group.bench_with_input(BenchmarkId::from_parameter(slots), &slots, |b, _| {
            b.iter(|| {
                let plan = compute_render_plan(
                    &state,
                    &descriptors,
                    black_box(Some("/slot0/deep/path")),
                    black_box(&registry),
                    MatchMode::Prefix,
                )
                .unwrap();
                black_box(plan)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_stack_depth, bench_registry_size);
criterion_main!(benches);
