//! Benchmarks for routing algorithms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array1;

use hydronet_algorithms::routing::{decode_flow_codes, track_source, unique_source_fractions};
use hydronet_core::{Mesh, StructuredMesh};

/// Build a size x size mesh draining south in column chains, with a small
/// deterministic jitter so the elevation sort does real work.
fn create_sloped_inputs(size: usize) -> (StructuredMesh, Array1<f64>, Array1<u8>, Array1<u32>) {
    let mesh = StructuredMesh::new(size, size);
    let n = mesh.node_count();

    let elevation =
        Array1::from_iter((0..n).map(|node| (node / size) as f64 + ((node * 7) % 13) as f64 * 1e-4));
    let codes = Array1::from_elem(n, 4u8); // all south
    let hsd_ids = Array1::from_iter((0..n).map(|node| (node % size) as u32));

    (mesh, elevation, codes, hsd_ids)
}

fn bench_decode_flow_codes(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing/decode_flow_codes");
    for size in [256, 512, 1024] {
        let (mesh, _, codes, _) = create_sloped_inputs(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| decode_flow_codes(black_box(&mesh), black_box(&codes)).unwrap())
        });
    }
    group.finish();
}

fn bench_track_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing/track_source");
    for size in [128, 256, 512] {
        let (mesh, elevation, codes, hsd_ids) = create_sloped_inputs(size);
        let receivers = decode_flow_codes(&mesh, &codes).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                track_source(
                    black_box(&mesh),
                    black_box(&elevation),
                    black_box(&receivers),
                    black_box(&hsd_ids),
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_unique_source_fractions(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing/unique_source_fractions");
    for size in [128, 256, 512] {
        let (mesh, elevation, codes, hsd_ids) = create_sloped_inputs(size);
        let receivers = decode_flow_codes(&mesh, &codes).unwrap();
        let tracking = track_source(&mesh, &elevation, &receivers, &hsd_ids).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| unique_source_fractions(black_box(&tracking)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_decode_flow_codes,
    bench_track_source,
    bench_unique_source_fractions,
);
criterion_main!(benches);
