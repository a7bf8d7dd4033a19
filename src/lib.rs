// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Blockswap - In-place sequence rotation over any bisectable collection.
//!
//! # Quick Start
//!
//! ```
//! use std::collections::VecDeque;
//! use blockswap::mutable::MutableCollection;
//!
//! // Slices and vectors rotate in place
//! let mut letters: Vec<char> = "abcdefghij".chars().collect();
//! letters.rotate(7);
//! assert_eq!(letters.iter().collect::<String>(), "hijabcdefg");
//!
//! // So do containers with discontiguous storage
//! let mut deque: VecDeque<u32> = (1..=5).collect();
//! deque.push_front(0);
//! deque.rotate(2);
//! assert_eq!(deque, [2, 3, 4, 5, 0, 1]);
//! ```
//!
//! # Layers
//!
//! | Module | Provides |
//! |--------|----------|
//! | `collection` | `Bisection`, `Collection`: traversal, count, reduce |
//! | `mutable` | `BisectionMut`, `MutableCollection`: swaps and cursors |
//! | `segmented` | `SegmentedCollection`: composition over segments |
//! | `chunked` | `ChunkedList`: a list stored as separate chunks |
//! | `rotate` | `rotate`, `forward_rotate`: Gries–Mills block rotation |
//!
//! The rotation is written once against `BisectionMut`, and uses nothing but
//! pairwise swaps and a handful of cursors. It allocates nothing, and
//! performs `n - gcd(n, k)` swaps to rotate `n` elements by `k`.

pub mod chunked;
pub mod collection;
pub mod mutable;
pub mod profiling;
pub mod rotate;
pub mod segmented;

pub use rotate::{forward_rotate, rotate};
