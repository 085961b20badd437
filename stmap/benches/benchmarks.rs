use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stmap::index::{Algorithm, SuffixTree};

fn make_reference(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut x: u32 = 42;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(bases[(x >> 16) as usize % 4]);
    }
    seq
}

fn bench_build_mccreight(c: &mut Criterion) {
    let reference = make_reference(10_000);
    c.bench_function("build_mccreight_10k", |b| {
        b.iter(|| {
            black_box(SuffixTree::build(black_box(&reference), Algorithm::McCreight).unwrap());
        })
    });
}

fn bench_build_naive(c: &mut Criterion) {
    let reference = make_reference(10_000);
    c.bench_function("build_naive_10k", |b| {
        b.iter(|| {
            black_box(SuffixTree::build(black_box(&reference), Algorithm::Naive).unwrap());
        })
    });
}

fn bench_build_repetitive(c: &mut Criterion) {
    // worst case for the naive construction
    let reference = vec![b'A'; 2_000];
    let mut group = c.benchmark_group("build_poly_a_2k");
    group.bench_function("naive", |b| {
        b.iter(|| black_box(SuffixTree::naive(black_box(&reference)).unwrap()))
    });
    group.bench_function("mccreight", |b| {
        b.iter(|| black_box(SuffixTree::mccreight(black_box(&reference)).unwrap()))
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let reference = make_reference(10_000);
    let st = SuffixTree::mccreight(&reference).unwrap();
    let pattern = reference[100..120].to_vec();

    c.bench_function("search_20bp", |b| {
        b.iter(|| {
            black_box(st.search(black_box(&pattern)).count());
        })
    });
}

criterion_group!(benches, bench_build_mccreight, bench_build_naive, bench_build_repetitive, bench_search);
criterion_main!(benches);
