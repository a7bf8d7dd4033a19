//! Reproduce AFL crashes without AFL instrumentation
//!
//! Usage: cargo run --bin repro_crash -- <crash_file>

use std::collections::VecDeque;
use std::fs;

use blockswap::chunked::ChunkedList;
use blockswap::{profiling, rotate};

#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Rotate { pos_frac: u8 },
    RoundTrip { pos_frac: u8 },
    Insert { pos_frac: u8, value: u8 },
    PushFront { value: u8 },
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
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <crash_file>", args[0]);
        std::process::exit(1);
    }

    let data = fs::read(&args[1]).expect("Failed to read crash file");
    eprintln!("Input: {} bytes", data.len());
    eprintln!("Hex: {}", data.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" "));

    let mut model: Vec<u8> = Vec::new();
    let mut list: ChunkedList<u8> = ChunkedList::new();
    let mut deque: VecDeque<u8> = VecDeque::new();
    let mut remaining = data.as_slice();
    let mut op_num = 0;

    while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
        remaining = rest;
        op_num += 1;

        match op {
            FuzzOp::Rotate { pos_frac } => {
                let k = pivot(pos_frac, model.len());
                eprintln!("Op {}: Rotate by {} (len={})", op_num, k, model.len());
                eprintln!("  Before: {:?}", model);
                eprintln!("  Chunks: {:?}", list.chunk_lens());
                let (front, back) = deque.as_slices();
                eprintln!("  Ring: {} + {}", front.len(), back.len());

                profiling::reset();
                model.rotate_left(k);
                rotate(&mut list, k);
                eprintln!("  List: {}", profiling::report());

                profiling::reset();
                rotate(&mut deque, k);
                eprintln!("  Ring: {}", profiling::report());
                eprintln!("  After: {:?}", model);
            }

            FuzzOp::RoundTrip { pos_frac } => {
                let k = pivot(pos_frac, model.len());
                eprintln!("Op {}: Round trip by {} (len={})", op_num, k, model.len());
                let before = list.to_vec();
                rotate(&mut list, k);
                rotate(&mut list, model.len() - k);
                if list.to_vec() != before {
                    eprintln!("  Round trip FAILED");
                    eprintln!("    Before: {:?}", before);
                    eprintln!("    After:  {:?}", list.to_vec());
                    std::process::exit(1);
                }
            }

            FuzzOp::Insert { pos_frac, value } => {
                let index = pivot(pos_frac, model.len());
                eprintln!("Op {}: Insert {} at {}", op_num, value, index);
                model.insert(index, value);
                list.insert(index, value);
                deque.insert(index, value);
            }

            FuzzOp::PushFront { value } => {
                eprintln!("Op {}: PushFront {}", op_num, value);
                model.insert(0, value);
                list.insert(0, value);
                deque.push_front(value);
            }

            FuzzOp::PushBack { value } => {
                eprintln!("Op {}: PushBack {}", op_num, value);
                model.push(value);
                list.push(value);
                deque.push_back(value);
            }
        }

        if list.to_vec() != model {
            eprintln!("  ChunkedList diverged: {:?}", list.to_vec());
            std::process::exit(1);
        }
        if !deque.iter().eq(model.iter()) {
            eprintln!("  VecDeque diverged: {:?}", deque);
            std::process::exit(1);
        }
    }

    eprintln!("\nFinal state: len={} {:?}", model.len(), model);
    eprintln!("\nAll checks passed!");
}
