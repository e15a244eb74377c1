use arbor::collections::PriorityQueue;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn bench_binary_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_heap");

    group.bench_function("std_binary_heap_push", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..1000usize {
                heap.push(Reverse((black_box(i * 7919 % 1000), i)));
            }
        });
    });

    group.bench_function("priority_queue_push", |b| {
        b.iter(|| {
            let mut heap = PriorityQueue::new();
            for i in 0..1000usize {
                heap.push(i, black_box(i * 7919 % 1000));
            }
        });
    });

    group.bench_function("std_binary_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..1000usize {
                heap.push(Reverse((i * 7919 % 1000, i)));
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("priority_queue_push_pop", |b| {
        b.iter(|| {
            let mut heap = PriorityQueue::new();
            for i in 0..1000usize {
                heap.push(i, i * 7919 % 1000);
            }
            while let Ok(x) = heap.dequeue() {
                black_box(x);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_binary_heap);
criterion_main!(benches);
