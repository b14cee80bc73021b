//! Benchmarks for the deduplication pass.

use criterion::{criterion_group, criterion_main, Criterion};
use crumb::prelude::*;

/// Triangle soup for an n x n grid, as a parser would emit it: six corners
/// per cell, interior vertices repeated up to six times.
fn grid_soup(n: usize) -> Vec<Vertex> {
    let corner = |i: usize, j: usize| {
        Vertex::new(
            [i as f32, j as f32, 0.0],
            [0.0, 0.0, 1.0],
            [i as f32 / n as f32, j as f32 / n as f32],
        )
    };

    let mut soup = Vec::with_capacity(n * n * 6);
    for j in 0..n {
        for i in 0..n {
            soup.push(corner(i, j));
            soup.push(corner(i + 1, j));
            soup.push(corner(i + 1, j + 1));

            soup.push(corner(i, j));
            soup.push(corner(i + 1, j + 1));
            soup.push(corner(i, j + 1));
        }
    }
    soup
}

/// Soup where every corner is distinct: nothing deduplicates.
fn distinct_soup(n: usize) -> Vec<Vertex> {
    (0..n)
        .map(|i| Vertex::from_position([i as f32, 0.0, 0.0]))
        .collect()
}

fn bench_index_grid(c: &mut Criterion) {
    let soup = grid_soup(100);

    c.bench_function("index_grid_100x100", |b| {
        b.iter(|| {
            let mesh: IndexedMesh = index(&soup).unwrap();
            mesh
        });
    });
}

fn bench_index_all_distinct(c: &mut Criterion) {
    let soup = distinct_soup(60_000);

    c.bench_function("index_60k_distinct", |b| {
        b.iter(|| {
            let mesh: IndexedMesh = index(&soup).unwrap();
            mesh
        });
    });
}

fn bench_index_all_parallel(c: &mut Criterion) {
    let streams: Vec<Vec<Vertex>> = (0..8).map(|_| grid_soup(50)).collect();

    c.bench_function("index_all_8x_grid_50x50", |b| {
        b.iter(|| {
            let meshes: Vec<IndexedMesh> = index_all(&streams).unwrap();
            meshes
        });
    });
}

criterion_group!(
    benches,
    bench_index_grid,
    bench_index_all_distinct,
    bench_index_all_parallel
);
criterion_main!(benches);
