//! AFL Fuzz harness for block-swap rotation
//!
//! This harness tests the critical rotation properties:
//! 1. Shape: rotating by k yields S[k..] ++ S[..k], checked against `rotate_left`
//! 2. Layout independence: contiguous, chunked and wrapped-ring storage agree
//! 3. Inverse: rotating by k then by len - k restores the original
//!
//! Model: a `Vec` holds the expected contents. A `ChunkedList` and a
//! `VecDeque` receive the same edits, which scatter their storage across
//! chunks and around the ring, and are rotated through the generic path.

use std::collections::VecDeque;

use afl::fuzz;
use blockswap::chunked::ChunkedList;
use blockswap::rotate;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Rotate every container by a fraction of its length
    Rotate { pos_frac: u8 },
    /// Rotate by k and back again
    RoundTrip { pos_frac: u8 },
    /// Insert a value at a fraction of the length
    Insert { pos_frac: u8, value: u8 },
    /// Push to the front, wrapping the ring buffer
    PushFront { value: u8 },
    /// Push to the back
    PushBack { value: u8 },
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 5;
        let rest = &bytes[1..];

        match op_type {
            0 if !rest.is_empty() => Some((FuzzOp::Rotate { pos_frac: rest[0] }, &rest[1..])),
            1 if !rest.is_empty() => Some((FuzzOp::RoundTrip { pos_frac: rest[0] }, &rest[1..])),
            2 if rest.len() >= 2 => {
                let op = FuzzOp::Insert {
                    pos_frac: rest[0],
                    value: rest[1],
                };
                Some((op, &rest[2..]))
            }
            3 if !rest.is_empty() => Some((FuzzOp::PushFront { value: rest[0] }, &rest[1..])),
            4 if !rest.is_empty() => Some((FuzzOp::PushBack { value: rest[0] }, &rest[1..])),
            _ => None,
        }
    }
}

fn pivot(pos_frac: u8, len: usize) -> usize {
    (pos_frac as usize * (len + 1)) / 256
}

fn main() {
    fuzz!(|data: &[u8]| {
        let mut model: Vec<u8> = Vec::new();
        let mut list: ChunkedList<u8> = ChunkedList::new();
        let mut deque: VecDeque<u8> = VecDeque::new();
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Rotate { pos_frac } => {
                    let k = pivot(pos_frac, model.len());
                    model.rotate_left(k);
                    rotate(&mut list, k);
                    rotate(&mut deque, k);
                }

                FuzzOp::RoundTrip { pos_frac } => {
                    let k = pivot(pos_frac, model.len());
                    let before = list.to_vec();
                    rotate(&mut list, k);
                    rotate(&mut list, model.len() - k);
                    assert_eq!(list.to_vec(), before, "Round trip by {} changed the list", k);
                }

                FuzzOp::Insert { pos_frac, value } => {
                    let index = pivot(pos_frac, model.len());
                    model.insert(index, value);
                    list.insert(index, value);
                    deque.insert(index, value);
                }

                FuzzOp::PushFront { value } => {
                    model.insert(0, value);
                    list.insert(0, value);
                    deque.push_front(value);
                }

                FuzzOp::PushBack { value } => {
                    model.push(value);
                    list.push(value);
                    deque.push_back(value);
                }
            }

            // CRITICAL INVARIANT: every layout holds the model contents
            assert_eq!(list.to_vec(), model, "ChunkedList diverged after {:?}", op);
            assert!(deque.iter().eq(model.iter()), "VecDeque diverged after {:?}", op);
        }
    });
}
