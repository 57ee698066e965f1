//! Benchmark for terrain patch generation and height queries.
//!
//! Run with: cargo bench --package pasture_procedural --bench terrain_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pasture_core::HeightQuery;
use pasture_procedural::{HeightGrid, RandomDisplacement, TerrainMesh, TerrainParams, WorldSeed};

fn benchmark_heightfield(c: &mut Criterion) {
    let mut group = c.benchmark_group("midpoint_displacement");

    for iterations in [4u32, 6, 7] {
        let stride = (1u64 << iterations) + 1;
        group.throughput(Throughput::Elements(stride * stride));
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            &iterations,
            |b, &iterations| {
                let mut source = RandomDisplacement::from_seed(WorldSeed::new(42));
                b.iter(|| black_box(HeightGrid::midpoint_displacement(iterations, 0.95, &mut source)));
            },
        );
    }

    group.finish();
}

fn benchmark_terrain_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("terrain_mesh");

    for iterations in [4u32, 7] {
        let params = TerrainParams {
            iterations,
            ..TerrainParams::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(iterations), &params, |b, &params| {
            let mut source = RandomDisplacement::from_seed(WorldSeed::new(42));
            b.iter(|| black_box(TerrainMesh::generate(params, &mut source)));
        });
    }

    group.finish();
}

fn benchmark_height_query(c: &mut Criterion) {
    let mut source = RandomDisplacement::from_seed(WorldSeed::new(42));
    let terrain = TerrainMesh::generate(TerrainParams::default(), &mut source);

    c.bench_function("height_at", |b| {
        let mut x = -20.0f32;
        b.iter(|| {
            x += 0.013;
            if x > 20.0 {
                x = -20.0;
            }
            black_box(terrain.height_at(black_box(x), black_box(x * 0.5)))
        });
    });
}

criterion_group!(
    benches,
    benchmark_heightfield,
    benchmark_terrain_mesh,
    benchmark_height_query
);
criterion_main!(benches);
