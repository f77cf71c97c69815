//! Criterion micro-benchmarks for the tick loop.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use dustbot_core::{Heading, TilePos};
use dustbot_engine::{AgentSpec, SimConfig, Simulation};
use dustbot_grid::GridSpec;

/// Benchmark: one tick of the classic single-agent room.
fn bench_single_tick(c: &mut Criterion) {
    c.bench_function("single_tick_classic", |b| {
        b.iter_batched(
            || Simulation::new(SimConfig::classic()).unwrap(),
            |mut sim| {
                let trace = sim.step().unwrap();
                black_box(trace);
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: the classic room driven to termination (29 ticks).
fn bench_classic_run(c: &mut Criterion) {
    c.bench_function("classic_run_to_halt", |b| {
        b.iter_batched(
            || Simulation::new(SimConfig::classic()).unwrap(),
            |mut sim| {
                let summary = sim.run().unwrap();
                black_box(summary);
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: 64 reflex agents on a 100x100 sealed grid, 100 ticks.
fn bench_many_agents(c: &mut Criterion) {
    let config = SimConfig {
        grid: GridSpec {
            width: 100,
            height: 100,
            dirty: (1..50).map(|i| TilePos::new(i, 50)).collect(),
            blocked: vec![],
        },
        agents: (0..64)
            .map(|i| AgentSpec::new(TilePos::new(1 + i % 8, 1 + i / 8), Heading::North))
            .collect(),
        max_ticks: 100,
    };

    c.bench_function("run_64_agents_100_ticks", |b| {
        b.iter_batched(
            || Simulation::new(config.clone()).unwrap(),
            |mut sim| {
                let summary = sim.run().unwrap();
                black_box(summary);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_single_tick, bench_classic_run, bench_many_agents);
criterion_main!(benches);
