use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use bounded_select::{HeaplessBoundedMaxHeap, Selector};

const CAPACITY: usize = 1000;
const STREAM: usize = 500_000;

fn random_stream(len: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(0x5e1ec7);
    (0..len).map(|_| rng.gen_range(0..1_000_000)).collect()
}

fn bench_selector(c: &mut Criterion) {
    let stream = random_stream(STREAM);
    {
        let mut group = c.benchmark_group("BinaryHeap vs Selector (Smallest 1000 of 500k)");
        group.sample_size(20);
        group.bench_function("std::collections::BinaryHeap", |b| {
            b.iter(|| {
                let mut h = BinaryHeap::with_capacity(CAPACITY + 1);
                for &item in &stream {
                    if h.len() < CAPACITY {
                        h.push(black_box(item));
                    } else if h.peek().is_some_and(|&top| item < top) {
                        h.pop();
                        h.push(black_box(item));
                    }
                }
                h.into_sorted_vec()
            })
        });

        group.bench_function("Selector<u32>", |b| {
            b.iter(|| {
                let mut s = Selector::new(CAPACITY).unwrap();
                for &item in &stream {
                    s.insert(black_box(item));
                }
                s.best_n_ordered(CAPACITY).map(<[u32]>::len)
            })
        });
        group.finish();
    }

    {
        let small = random_stream(10_000);
        let mut group = c.benchmark_group("BinaryHeap vs HeaplessBoundedMaxHeap (Smallest 16 of 10k)");
        group.bench_function("std::collections::BinaryHeap<Reverse>", |b| {
            b.iter(|| {
                let mut h: BinaryHeap<Reverse<u32>> = small.iter().map(|&i| Reverse(i)).collect();
                (0..16).filter_map(|_| h.pop()).count()
            })
        });

        group.bench_function("HeaplessBoundedMaxHeap<u32, 16>", |b| {
            b.iter(|| {
                let mut h: HeaplessBoundedMaxHeap<u32, 16> = HeaplessBoundedMaxHeap::new();
                h.extend(small.iter().copied().map(black_box));
                h.best_n_ordered(16).len()
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("Selector (Repeated ordered reads)");
        let mut s = Selector::select(CAPACITY, stream.iter().copied()).unwrap();
        group.bench_function("best_n_ordered cached", |b| {
            b.iter(|| black_box(s.best_n_ordered(CAPACITY).map(<[u32]>::len)))
        });
        group.finish();
    }
}

criterion_group!(benches, bench_selector);
criterion_main!(benches);
