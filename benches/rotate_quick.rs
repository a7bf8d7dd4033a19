// Quick benchmark for getting summary results across all storage layouts

use std::collections::VecDeque;
use std::time::Instant;

use blockswap::chunked::ChunkedList;
use blockswap::{profiling, rotate};

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

fn time_ops<F: FnMut() -> usize>(mut f: F, iterations: usize) -> f64 {
    // Warmup
    for _ in 0..3 {
        let _ = f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = f();
    }
    let elapsed = start.elapsed();
    elapsed.as_nanos() as f64 / iterations as f64
}

fn main() {
    println!("\n=== Rotation Comparison (random pivots) ===\n");
    println!("All times in microseconds (us)\n");
    println!("| {:8} | {:>10} | {:>10} | {:>10} | {:>10} |", "Len", "Slice", "Std", "Ring", "Chunked");
    println!("|----------|------------|------------|------------|------------|");

    for len in [100usize, 1_000, 10_000, 100_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let pivots: Vec<usize> = (0..32).map(|_| rng.gen_range(0..=len)).collect();

        let mut items: Vec<u32> = (0..len as u32).collect();
        let slice = time_ops(|| {
            for &k in &pivots {
                rotate(&mut items[..], k);
            }
            items.len()
        }, 20);

        let mut reference: Vec<u32> = (0..len as u32).collect();
        let builtin = time_ops(|| {
            for &k in &pivots {
                reference.rotate_left(k);
            }
            reference.len()
        }, 20);

        let mut deque: VecDeque<u32> = VecDeque::with_capacity(len);
        for i in 0..len as u32 {
            if i % 2 == 0 { deque.push_back(i) } else { deque.push_front(i) }
        }
        let ring = time_ops(|| {
            for &k in &pivots {
                rotate(&mut deque, k);
            }
            deque.len()
        }, 20);

        let mut list: ChunkedList<u32> = (0..len as u32).collect();
        let chunked = time_ops(|| {
            for &k in &pivots {
                rotate(&mut list, k);
            }
            list.len()
        }, 20);

        println!(
            "| {:8} | {:>10.1} | {:>10.1} | {:>10.1} | {:>10.1} |",
            len,
            slice / 1000.0,
            builtin / 1000.0,
            ring / 1000.0,
            chunked / 1000.0
        );
    }

    // One rotation, counted
    println!();
    let mut items: Vec<u32> = (0..10_000).collect();
    profiling::reset();
    rotate(&mut items[..], 3_333);
    println!("len=10000 k=3333: {}", profiling::report());
}
