//! Profiling counters are process-wide, so they are checked from a single
//! test in their own binary.

use std::collections::VecDeque;
use std::sync::atomic::Ordering;

use blockswap::chunked::ChunkedList;
use blockswap::profiling::{self, BLOCK_COUNT, SPLIT_RESET_COUNT};
use blockswap::rotate;

#[test]
fn counters_track_rotation_work() {
    // Equal halves: one block of two swaps, no reset
    profiling::reset();
    let mut items = vec!['a', 'b', 'c', 'd'];
    rotate(&mut items, 2);
    assert_eq!(items, vec!['c', 'd', 'a', 'b']);
    assert_eq!(profiling::swaps(), 2);
    assert_eq!(BLOCK_COUNT.load(Ordering::Relaxed), 1);
    assert_eq!(SPLIT_RESET_COUNT.load(Ordering::Relaxed), 0);

    // Identity rotations do no work at all
    profiling::reset();
    let mut single = vec!['a'];
    rotate(&mut single, 0);
    rotate(&mut single, 1);
    let mut empty: Vec<char> = vec![];
    rotate(&mut empty, 0);
    assert_eq!(profiling::swaps(), 0);
    assert_eq!(BLOCK_COUNT.load(Ordering::Relaxed), 0);

    // abc|defghij: blocks of 3, 3, 1, 1, 1 with the split reset twice
    profiling::reset();
    let mut letters: Vec<char> = ('a'..='j').collect();
    rotate(&mut letters, 3);
    assert_eq!(profiling::swaps(), 9);
    assert_eq!(BLOCK_COUNT.load(Ordering::Relaxed), 5);
    assert_eq!(SPLIT_RESET_COUNT.load(Ordering::Relaxed), 2);

    // The same rotation costs the same over segmented storage
    profiling::reset();
    let mut list = ChunkedList::from_chunks(vec![vec!['a', 'b'], vec!['c', 'd', 'e'], vec![], vec!['f', 'g', 'h', 'i', 'j']]);
    rotate(&mut list, 3);
    assert_eq!(profiling::swaps(), 9);

    profiling::reset();
    let mut deque: VecDeque<char> = ('d'..='j').collect();
    for c in ['c', 'b', 'a'] {
        deque.push_front(c);
    }
    rotate(&mut deque, 3);
    assert_eq!(deque.iter().collect::<String>(), "defghijabc");
    assert_eq!(profiling::swaps(), 9);

    let report = profiling::report();
    assert!(report.starts_with("Swaps: 9"), "unexpected report: {}", report);
}
