use arbor::collections::{DynamicArray, Queue, Stack};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::VecDeque;

fn bench_dynamic_array(c: &mut Criterion) {
    c.bench_function("dynamic_array_push_back", |b| {
        b.iter(|| {
            let mut arr = DynamicArray::new();
            for i in 0..1000 {
                arr.push_back(black_box(i));
            }
            black_box(arr.len());
        });
    });

    c.bench_function("std_vec_push", |b| {
        b.iter(|| {
            let mut vec = Vec::with_capacity(2);
            for i in 0..1000 {
                vec.push(black_box(i));
            }
            black_box(vec.len());
        });
    });
}

fn bench_queue(c: &mut Criterion) {
    // Keeps ~64 elements in flight so the ring wraps constantly.
    c.bench_function("queue_rolling", |b| {
        b.iter(|| {
            let mut q = Queue::new();
            for i in 0..64 {
                q.enqueue(i);
            }
            for i in 64..10_000 {
                q.enqueue(i);
                black_box(q.dequeue().ok());
            }
        });
    });

    c.bench_function("std_vec_deque_rolling", |b| {
        b.iter(|| {
            let mut q = VecDeque::new();
            for i in 0..64 {
                q.push_back(i);
            }
            for i in 64..10_000 {
                q.push_back(i);
                black_box(q.pop_front());
            }
        });
    });
}

fn bench_stack(c: &mut Criterion) {
    c.bench_function("stack_push_pop", |b| {
        b.iter(|| {
            let mut s = Stack::new();
            for i in 0..1000 {
                s.push(i);
            }
            while let Ok(x) = s.pop() {
                black_box(x);
            }
        });
    });
}

criterion_group!(benches, bench_dynamic_array, bench_queue, bench_stack);
criterion_main!(benches);
