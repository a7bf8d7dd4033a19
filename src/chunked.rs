// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Chunked List
//!
//! An ordered list organized into separately allocated chunks. Each chunk
//! is one segment of the list, so the list is a `SegmentedCollection` and
//! rotates in place through the same block-swap algorithm as a slice,
//! swapping across chunk boundaries without moving chunks around.
//!
//! Chunks are filled to around `TARGET_CHUNK_SIZE` when pushing, and split
//! in half once an insert grows one to `MAX_CHUNK_SIZE`. `from_chunks`
//! keeps whatever layout it is given, empty chunks included.

use smallvec::SmallVec;

use crate::collection::Collection;
use crate::mutable::MutableCollection;
use crate::segmented::{SegmentedBisection, SegmentedBisectionMut, SegmentedCollection};

const TARGET_CHUNK_SIZE: usize = 64;
const MAX_CHUNK_SIZE: usize = 128;

/// A list stored as an ordered run of chunks.
///
/// Small lists keep their chunk table inline. Equality compares elements
/// in order and ignores how they are split into chunks.
#[derive(Debug, Clone)]
pub struct ChunkedList<T> {
    chunks: SmallVec<[Vec<T>; 4]>,
    len: usize,
}

impl<T: PartialEq> PartialEq for ChunkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ChunkedList<T> {}

impl<T> Default for ChunkedList<T> {
    fn default() -> Self {
        ChunkedList::new()
    }
}

impl<T> ChunkedList<T> {
    pub fn new() -> ChunkedList<T> {
        ChunkedList {
            chunks: SmallVec::new(),
            len: 0,
        }
    }

    /// Build a list with exactly the given chunk layout.
    pub fn from_chunks<I>(chunks: I) -> ChunkedList<T>
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        let chunks: SmallVec<[Vec<T>; 4]> = chunks.into_iter().collect();
        let len = chunks.iter().map(|chunk| chunk.len()).sum();
        ChunkedList { chunks, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Length of every chunk, in order.
    pub fn chunk_lens(&self) -> Vec<usize> {
        self.chunks.iter().map(|chunk| chunk.len()).collect()
    }

    pub fn push(&mut self, item: T) {
        match self.chunks.last_mut() {
            Some(chunk) if chunk.len() < TARGET_CHUNK_SIZE => chunk.push(item),
            _ => {
                let mut chunk = Vec::with_capacity(TARGET_CHUNK_SIZE);
                chunk.push(item);
                self.chunks.push(chunk);
            }
        }
        self.len += 1;
    }

    /// Find the chunk containing the given index.
    /// Returns (chunk_index, index_within_chunk).
    fn find_chunk_by_index(&self, index: usize) -> (usize, usize) {
        let mut cumulative = 0usize;
        for (i, chunk) in self.chunks.iter().enumerate() {
            if cumulative + chunk.len() > index {
                return (i, index - cumulative);
            }
            cumulative += chunk.len();
        }
        // Insert at end
        let last = self.chunks.len().saturating_sub(1);
        (last, self.chunks.get(last).map_or(0, |c| c.len()))
    }

    /// Insert an item at the given index.
    ///
    /// # Panics
    ///
    /// If `index > len`.
    pub fn insert(&mut self, index: usize, item: T) {
        assert!(index <= self.len, "insert: index {} out of bounds (len {})", index, self.len);
        if self.chunks.is_empty() {
            self.chunks.push(Vec::with_capacity(TARGET_CHUNK_SIZE));
        }

        let (chunk_idx, idx_in_chunk) = self.find_chunk_by_index(index);
        self.chunks[chunk_idx].insert(idx_in_chunk, item);
        self.len += 1;

        // Split chunk if too large
        if self.chunks[chunk_idx].len() >= MAX_CHUNK_SIZE {
            let mid = self.chunks[chunk_idx].len() / 2;
            let right = self.chunks[chunk_idx].split_off(mid);
            self.chunks.insert(chunk_idx + 1, right);
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let (chunk_idx, idx_in_chunk) = self.find_chunk_by_index(index);
        self.chunks[chunk_idx].get(idx_in_chunk)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let (chunk_idx, idx_in_chunk) = self.find_chunk_by_index(index);
        self.chunks[chunk_idx].get_mut(idx_in_chunk)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.chunks.iter().flatten()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for ChunkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ChunkedList::new();
        for item in iter {
            list.push(item);
        }
        list
    }
}

impl<T> SegmentedCollection for ChunkedList<T> {
    type Segment = [T];

    fn segments(&self) -> impl Iterator<Item = &[T]> {
        self.chunks.iter().map(|chunk| &chunk[..])
    }
}

impl<T> Collection for ChunkedList<T> {
    type Item = T;
    type Bisection<'a> = SegmentedBisection<&'a [Vec<T>]> where Self: 'a;

    fn bisection(&self) -> SegmentedBisection<&'_ [Vec<T>]> {
        SegmentedBisection::new(&self.chunks[..])
    }

    fn count(&self) -> usize {
        self.segmented_count()
    }

    fn for_each_until<F>(&self, f: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.segmented_for_each_until(f)
    }
}

impl<T> MutableCollection for ChunkedList<T> {
    type BisectionMut<'a> = SegmentedBisectionMut<&'a mut [Vec<T>]> where Self: 'a;

    fn bisection_mut(&mut self) -> SegmentedBisectionMut<&'_ mut [Vec<T>]> {
        SegmentedBisectionMut::new(&mut self.chunks[..])
    }

    fn first_mut(&mut self) -> Option<&mut T> {
        self.chunks.iter_mut().find_map(|chunk| chunk[..].first_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Bisection;

    #[test]
    fn push_fills_chunks_to_target() {
        let list: ChunkedList<usize> = (0..TARGET_CHUNK_SIZE * 2 + 1).collect();
        assert_eq!(list.len(), TARGET_CHUNK_SIZE * 2 + 1);
        assert_eq!(list.chunk_lens(), vec![TARGET_CHUNK_SIZE, TARGET_CHUNK_SIZE, 1]);
        assert_eq!(list.get(TARGET_CHUNK_SIZE), Some(&TARGET_CHUNK_SIZE));
        assert_eq!(list.get(list.len()), None);
    }

    #[test]
    fn insert_splits_full_chunk() {
        let mut list = ChunkedList::from_chunks(vec![(0..MAX_CHUNK_SIZE - 1).collect::<Vec<_>>()]);
        list.insert(0, 999);
        assert_eq!(list.chunk_count(), 2);
        assert_eq!(list.chunk_lens(), vec![MAX_CHUNK_SIZE / 2, MAX_CHUNK_SIZE / 2]);
        assert_eq!(list.get(0), Some(&999));
        assert_eq!(list.get(1), Some(&0));
    }

    #[test]
    fn insert_at_end_and_into_empty() {
        let mut list = ChunkedList::new();
        list.insert(0, 'b');
        list.insert(0, 'a');
        list.insert(2, 'c');
        assert_eq!(list.to_vec(), vec!['a', 'b', 'c']);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn insert_past_end_panics() {
        let mut list = ChunkedList::from_chunks(vec![vec![1]]);
        list.insert(2, 2);
    }

    #[test]
    fn get_mut_crosses_chunks() {
        let mut list = ChunkedList::from_chunks(vec![vec![1, 2], vec![], vec![3]]);
        if let Some(x) = list.get_mut(2) {
            *x = 30;
        }
        assert_eq!(list.to_vec(), vec![1, 2, 30]);
    }

    #[test]
    fn collection_view_matches_flat_order() {
        let list = ChunkedList::from_chunks(vec![vec![], vec![5, 6], vec![], vec![7]]);
        assert_eq!(Collection::count(&list), 3);
        assert_eq!(Collection::first(&list), Some(&5));
        assert!(!Collection::is_empty(&list));
        assert_eq!(list.reduce(vec![], |mut acc, x| {
            acc.push(*x);
            acc
        }), vec![5, 6, 7]);

        let bisection = list.bisection();
        assert_eq!(bisection.suffix_first(), Some(&5));
    }

    #[test]
    fn empty_chunks_only() {
        let mut list: ChunkedList<u8> = ChunkedList::from_chunks(vec![vec![], vec![]]);
        assert!(Collection::is_empty(&list));
        assert_eq!(Collection::count(&list), 0);
        assert_eq!(MutableCollection::first_mut(&mut list), None);
        list.rotate(0);
        assert_eq!(list.chunk_lens(), vec![0, 0]);
    }

    #[test]
    fn rotate_keeps_chunk_layout() {
        let mut list = ChunkedList::from_chunks(vec![vec!['a', 'b', 'c'], vec![], vec!['d'], vec!['e', 'f', 'g', 'h', 'i', 'j']]);
        list.rotate(7);
        assert_eq!(list.to_vec(), vec!['h', 'i', 'j', 'a', 'b', 'c', 'd', 'e', 'f', 'g']);
        assert_eq!(list.chunk_lens(), vec![3, 0, 1, 6]);
    }

    #[test]
    fn equality_ignores_chunk_layout() {
        let pushed: ChunkedList<u8> = (0..3).collect();
        let ragged = ChunkedList::from_chunks(vec![vec![0], vec![], vec![1, 2]]);
        assert_ne!(pushed.chunk_lens(), ragged.chunk_lens());
        assert_eq!(pushed, ragged);

        let shorter = ChunkedList::from_chunks(vec![vec![0, 1]]);
        assert_ne!(pushed, shorter);
        let reordered = ChunkedList::from_chunks(vec![vec![0, 2], vec![1]]);
        assert_ne!(pushed, reordered);
        assert_eq!(ChunkedList::<u8>::new(), ChunkedList::from_chunks(vec![vec![], vec![]]));
    }

    #[test]
    fn first_mut_skips_empty_chunks() {
        let mut list = ChunkedList::from_chunks(vec![vec![], vec![4, 5]]);
        if let Some(first) = MutableCollection::first_mut(&mut list) {
            *first = 40;
        }
        assert_eq!(list.to_vec(), vec![40, 5]);
    }
}
