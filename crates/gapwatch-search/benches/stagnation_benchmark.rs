// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gapwatch_search::monitor::composite::CompositeMonitor;
use gapwatch_search::monitor::gap_limit::GapLimitMonitor;
use gapwatch_search::monitor::search_monitor::SearchMonitor;
use gapwatch_search::monitor::stagnation::{GapStagnationMonitor, StagnationConfig, StagnationState};
use gapwatch_search::monitor::time_limit::TimeLimitMonitor;
use gapwatch_search::progress::SearchProgress;
use std::hint::black_box;
use std::time::Duration;

/// A slowly closing gap sampled every 10ms of engine time.
fn trace(len: usize) -> Vec<SearchProgress<f64>> {
    (0..len)
        .map(|i| {
            let elapsed = i as f64 * 0.01;
            let bound = 1000.0 + 100.0 / (1.0 + elapsed);
            SearchProgress::node_exploration(elapsed, Some(1000.0), bound, 1 + i as u64 / 64)
                .with_explored_nodes(i as u64 * 4096)
        })
        .collect()
}

fn bench_state_transition(c: &mut Criterion) {
    let config = StagnationConfig::default();
    let mut group = c.benchmark_group("stagnation_state");

    for len in [1_000usize, 100_000] {
        let snapshots = trace(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &snapshots, |b, snapshots| {
            b.iter(|| {
                let mut state = StagnationState::new();
                for progress in snapshots {
                    match state.on_progress(&config, black_box(progress)) {
                        Ok((next, verdict)) => {
                            state = next;
                            if verdict.should_stop() {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
                black_box(state)
            })
        });
    }
    group.finish();
}

fn bench_composite_dispatch(c: &mut Criterion) {
    let snapshots = trace(10_000);
    let mut group = c.benchmark_group("composite_dispatch");
    group.throughput(Throughput::Elements(snapshots.len() as u64));

    group.bench_function("stagnation+gap+time", |b| {
        b.iter(|| {
            let mut composite = CompositeMonitor::with_capacity(3);
            composite.add_monitor(GapStagnationMonitor::new(StagnationConfig::default()));
            composite.add_monitor(GapLimitMonitor::default());
            composite.add_monitor(TimeLimitMonitor::new(Duration::from_secs(3600)));
            composite.on_enter_search();
            let mut terminated = false;
            for progress in &snapshots {
                composite.on_progress(black_box(progress));
                if composite.search_command().is_terminate() {
                    terminated = true;
                    break;
                }
            }
            composite.on_exit_search();
            black_box(terminated)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_state_transition, bench_composite_dispatch);
criterion_main!(benches);
