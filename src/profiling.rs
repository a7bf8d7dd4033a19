//! Simple profiling counters for understanding rotation cost.

use std::sync::atomic::{AtomicU64, Ordering};

pub static SWAP_COUNT: AtomicU64 = AtomicU64::new(0);
pub static BLOCK_COUNT: AtomicU64 = AtomicU64::new(0);
pub static SPLIT_RESET_COUNT: AtomicU64 = AtomicU64::new(0);

#[inline]
pub fn swap() {
    SWAP_COUNT.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn block() {
    BLOCK_COUNT.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn split_reset() {
    SPLIT_RESET_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn swaps() -> u64 {
    SWAP_COUNT.load(Ordering::Relaxed)
}

pub fn reset() {
    SWAP_COUNT.store(0, Ordering::Relaxed);
    BLOCK_COUNT.store(0, Ordering::Relaxed);
    SPLIT_RESET_COUNT.store(0, Ordering::Relaxed);
}

pub fn report() -> String {
    let swaps = SWAP_COUNT.load(Ordering::Relaxed);
    let blocks = BLOCK_COUNT.load(Ordering::Relaxed);
    let resets = SPLIT_RESET_COUNT.load(Ordering::Relaxed);
    let per_block = if blocks > 0 { swaps as f64 / blocks as f64 } else { 0.0 };

    format!(
        "Swaps: {}, Blocks: {} ({:.1} swaps/block), Split resets: {}",
        swaps, blocks, per_block, resets
    )
}
