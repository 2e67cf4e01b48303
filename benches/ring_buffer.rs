use criterion::{Criterion, criterion_group, criterion_main};
use ring_buffer::RingBuffer;
use std::collections::VecDeque;
use std::hint::black_box;

fn bench_ring_buffer(c: &mut Criterion) {
    let n = 16;
    {
        let mut group = c.benchmark_group("VecDeque vs RingBuffer (PushBack 16)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::with_capacity(n);
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("RingBuffer<i32>", |b| {
            b.iter(|| {
                let mut r = RingBuffer::new(n);
                for i in 0..n {
                    r.push_back(black_box(i as i32));
                }
                r
            })
        });
        group.finish();
    }

    {
        // Bounded VecDeque has to evict by hand to match the overwrite policy.
        let mut group = c.benchmark_group("VecDeque vs RingBuffer (Overwrite 64 into 16)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::with_capacity(n);
                for i in 0..64 {
                    if d.len() == n {
                        d.pop_front();
                    }
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("RingBuffer<i32>", |b| {
            b.iter(|| {
                let mut r = RingBuffer::new(n);
                for i in 0..64 {
                    black_box(r.push_back(black_box(i as i32)));
                }
                r
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs RingBuffer (Map 16)");
        let mut d_std: VecDeque<i32> = (0..n as i32).collect();
        let mut r = RingBuffer::new(n);
        r.push(0..n as i32);

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for x in d_std.iter_mut() {
                    *x = black_box(x.wrapping_add(1));
                }
            })
        });

        group.bench_function("RingBuffer<i32>", |b| {
            b.iter(|| {
                r.map(|x| black_box(x.wrapping_add(1)));
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_ring_buffer);
criterion_main!(benches);
