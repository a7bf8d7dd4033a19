// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Mutable collections and the bisection that rotation runs on.
//!
//! A mutable bisection works on a window of the sequence, `[front, end)`,
//! split into a prefix `[front, split)` and a suffix `[split, end)`. The
//! only operation that changes element values is `swap_first_elements`;
//! every other operation moves a cursor.
//!
//! Cursor positions are exposed as opaque `Mark`s so that an algorithm can
//! remember where a region started and come back to it later with
//! `reset_split`, without knowing how the storage is laid out.

use std::fmt::Debug;

use crate::collection::Collection;

/// A bisection that can exchange elements between its prefix and suffix.
pub trait BisectionMut {
    type Item;

    /// A cursor position within the bisected storage.
    type Mark: Copy + Eq + Debug;

    fn prefix_is_empty(&self) -> bool;

    fn suffix_is_empty(&self) -> bool;

    fn prefix_first_mut(&mut self) -> Option<&mut Self::Item>;

    fn suffix_first_mut(&mut self) -> Option<&mut Self::Item>;

    /// Moves the first element of the suffix to the end of the prefix.
    ///
    /// # Panics
    ///
    /// If the suffix is empty.
    fn grow_prefix_by_1(&mut self);

    /// Exchanges the first element of the prefix with the first element of
    /// the suffix. No other element moves.
    ///
    /// # Panics
    ///
    /// If either part is empty.
    fn swap_first_elements(&mut self);

    /// Position of the first element of the prefix.
    fn front(&self) -> Self::Mark;

    /// Position of the split point, i.e. of the first element of the suffix.
    fn split(&self) -> Self::Mark;

    /// Removes the first element of the prefix from the window. The element
    /// itself is untouched.
    ///
    /// # Panics
    ///
    /// If the prefix is empty.
    fn drop_prefix_first(&mut self);

    /// Moves the split point back (or forward) to `mark`, which must have
    /// been taken from `split()` and must not lie before `front()`. Marks
    /// built by hand rather than taken from the bisection are not supported.
    ///
    /// # Panics
    ///
    /// If `mark` is before the front of the window or past its end.
    fn reset_split(&mut self, mark: Self::Mark);
}

/// A collection whose elements can be changed in place.
pub trait MutableCollection: Collection {
    type BisectionMut<'a>: BisectionMut<Item = Self::Item>
    where
        Self: 'a;

    /// Bisect the collection with an empty prefix, for mutation.
    fn bisection_mut(&mut self) -> Self::BisectionMut<'_>;

    fn first_mut(&mut self) -> Option<&mut Self::Item>;

    /// Rotates in place so that the element at offset `k` becomes the first.
    /// See [`crate::rotate::rotate`].
    fn rotate(&mut self, k: usize) {
        crate::rotate::rotate(self, k);
    }
}

/// Mutable bisection of a contiguous slice, tracked by index.
#[derive(Debug)]
pub struct SliceBisectionMut<'a, T> {
    items: &'a mut [T],
    front: usize,
    split: usize,
}

impl<'a, T> SliceBisectionMut<'a, T> {
    pub fn new(items: &'a mut [T]) -> SliceBisectionMut<'a, T> {
        SliceBisectionMut { items, front: 0, split: 0 }
    }

    /// The prefix and suffix as slices.
    pub fn parts(&self) -> (&[T], &[T]) {
        let window = &self.items[self.front..];
        window.split_at(self.split - self.front)
    }

    pub fn parts_mut(&mut self) -> (&mut [T], &mut [T]) {
        let window = &mut self.items[self.front..];
        window.split_at_mut(self.split - self.front)
    }
}

impl<T> BisectionMut for SliceBisectionMut<'_, T> {
    type Item = T;
    type Mark = usize;

    fn prefix_is_empty(&self) -> bool {
        self.front == self.split
    }

    fn suffix_is_empty(&self) -> bool {
        self.split == self.items.len()
    }

    fn prefix_first_mut(&mut self) -> Option<&mut T> {
        if self.prefix_is_empty() {
            return None;
        }
        self.items.get_mut(self.front)
    }

    fn suffix_first_mut(&mut self) -> Option<&mut T> {
        self.items.get_mut(self.split)
    }

    fn grow_prefix_by_1(&mut self) {
        assert!(!self.suffix_is_empty(), "grow_prefix_by_1: suffix is empty");
        self.split += 1;
    }

    fn swap_first_elements(&mut self) {
        assert!(!self.prefix_is_empty(), "swap_first_elements: prefix is empty");
        assert!(!self.suffix_is_empty(), "swap_first_elements: suffix is empty");
        self.items.swap(self.front, self.split);
    }

    fn front(&self) -> usize {
        self.front
    }

    fn split(&self) -> usize {
        self.split
    }

    fn drop_prefix_first(&mut self) {
        assert!(!self.prefix_is_empty(), "drop_prefix_first: prefix is empty");
        self.front += 1;
    }

    fn reset_split(&mut self, mark: usize) {
        assert!(
            self.front <= mark && mark <= self.items.len(),
            "reset_split: mark {} outside window {}..{}",
            mark, self.front, self.items.len(),
        );
        self.split = mark;
    }
}

impl<T> MutableCollection for [T] {
    type BisectionMut<'a> = SliceBisectionMut<'a, T> where Self: 'a;

    fn bisection_mut(&mut self) -> SliceBisectionMut<'_, T> {
        SliceBisectionMut::new(self)
    }

    fn first_mut(&mut self) -> Option<&mut T> {
        <[T]>::first_mut(self)
    }
}

impl<T> MutableCollection for Vec<T> {
    type BisectionMut<'a> = SliceBisectionMut<'a, T> where Self: 'a;

    fn bisection_mut(&mut self) -> SliceBisectionMut<'_, T> {
        SliceBisectionMut::new(self.as_mut_slice())
    }

    fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }
}
