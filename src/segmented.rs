// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Collections stored as an ordered run of independent segments.
//!
//! A segmented collection is a sequence of contiguous segments that abut,
//! cover every element exactly once, and appear in element order. Counting
//! and traversal are composed from the segments. Bisections address an
//! element by `SegmentPos` and know how to step and swap across segment
//! boundaries, so whole-sequence algorithms such as rotation behave exactly
//! as they would over one contiguous run.
//!
//! # Positions
//!
//! Every `SegmentPos` held by a bisection is settled: it either points at a
//! real element, or it is the end position `(segment_count, 0)`. Empty
//! segments are stepped over as soon as a position lands on them, so two
//! positions compare equal exactly when they address the same element.

use std::collections::VecDeque;
use std::mem;

use crate::collection::{Bisection, Collection};
use crate::mutable::{BisectionMut, MutableCollection};

/// A collection made of an ordered sequence of segments, each of which is a
/// collection in its own right.
pub trait SegmentedCollection {
    type Segment: Collection + ?Sized;

    /// The segments in element order.
    fn segments(&self) -> impl Iterator<Item = &Self::Segment>;

    /// Sum of the segment counts.
    fn segmented_count(&self) -> usize {
        self.segments().map(|segment| Collection::count(segment)).sum()
    }

    /// Traverses every segment in order until `f` returns `true`.
    fn segmented_for_each_until<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&<Self::Segment as Collection>::Item) -> bool,
    {
        for segment in self.segments() {
            if segment.for_each_until(&mut f) {
                return true;
            }
        }
        false
    }
}

/// Contiguous storage backing one segment.
pub trait Segment {
    type Item;

    fn as_slice(&self) -> &[Self::Item];
}

pub trait SegmentMut: Segment {
    fn as_mut_slice(&mut self) -> &mut [Self::Item];
}

impl<T> Segment for Vec<T> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        &self[..]
    }
}

impl<T> SegmentMut for Vec<T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self[..]
    }
}

impl<T> Segment for &[T] {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Segment for &mut [T] {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> SegmentMut for &mut [T] {
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

/// Position of an element in segmented storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SegmentPos {
    pub segment: usize,
    pub offset: usize,
}

impl SegmentPos {
    pub fn new(segment: usize, offset: usize) -> SegmentPos {
        SegmentPos { segment, offset }
    }
}

/// Moves `pos` forward over exhausted and empty segments.
fn settle(mut pos: SegmentPos, segment_count: usize, segment_len: impl Fn(usize) -> usize) -> SegmentPos {
    while pos.segment < segment_count && pos.offset >= segment_len(pos.segment) {
        pos.segment += 1;
        pos.offset = 0;
    }
    pos
}

/// Read access to an ordered table of segments borrowed for `'a`.
pub trait SegmentTable<'a> {
    type Item: 'a;

    fn segment_count(&self) -> usize;

    fn segment(&self, index: usize) -> &'a [Self::Item];
}

impl<'a, S> SegmentTable<'a> for &'a [S]
where
    S: Segment,
    S::Item: 'a,
{
    type Item = S::Item;

    fn segment_count(&self) -> usize {
        self.len()
    }

    fn segment(&self, index: usize) -> &'a [S::Item] {
        let segments: &'a [S] = *self;
        segments[index].as_slice()
    }
}

impl<'a, T: 'a, const N: usize> SegmentTable<'a> for [&'a [T]; N] {
    type Item = T;

    fn segment_count(&self) -> usize {
        N
    }

    fn segment(&self, index: usize) -> &'a [T] {
        self[index]
    }
}

/// Mutable access to an ordered table of segments.
pub trait SegmentTableMut {
    type Item;

    fn segment_count(&self) -> usize;

    fn segment_len(&self, index: usize) -> usize;

    fn segment_mut(&mut self, index: usize) -> &mut [Self::Item];

    /// Two distinct segments at once. Requires `first < second`.
    fn segment_pair_mut(&mut self, first: usize, second: usize) -> (&mut [Self::Item], &mut [Self::Item]);
}

impl<S: SegmentMut> SegmentTableMut for [S] {
    type Item = S::Item;

    fn segment_count(&self) -> usize {
        self.len()
    }

    fn segment_len(&self, index: usize) -> usize {
        self[index].as_slice().len()
    }

    fn segment_mut(&mut self, index: usize) -> &mut [S::Item] {
        self[index].as_mut_slice()
    }

    fn segment_pair_mut(&mut self, first: usize, second: usize) -> (&mut [S::Item], &mut [S::Item]) {
        debug_assert!(first < second);
        let (head, tail) = self.split_at_mut(second);
        (head[first].as_mut_slice(), tail[0].as_mut_slice())
    }
}

impl<S: SegmentMut, const N: usize> SegmentTableMut for [S; N] {
    type Item = S::Item;

    fn segment_count(&self) -> usize {
        N
    }

    fn segment_len(&self, index: usize) -> usize {
        self[index].as_slice().len()
    }

    fn segment_mut(&mut self, index: usize) -> &mut [S::Item] {
        let segments: &mut [S] = self;
        segments.segment_mut(index)
    }

    fn segment_pair_mut(&mut self, first: usize, second: usize) -> (&mut [S::Item], &mut [S::Item]) {
        let segments: &mut [S] = self;
        segments.segment_pair_mut(first, second)
    }
}

impl<Tab: SegmentTableMut + ?Sized> SegmentTableMut for &mut Tab {
    type Item = Tab::Item;

    fn segment_count(&self) -> usize {
        (**self).segment_count()
    }

    fn segment_len(&self, index: usize) -> usize {
        (**self).segment_len(index)
    }

    fn segment_mut(&mut self, index: usize) -> &mut [Tab::Item] {
        (**self).segment_mut(index)
    }

    fn segment_pair_mut(&mut self, first: usize, second: usize) -> (&mut [Tab::Item], &mut [Tab::Item]) {
        (**self).segment_pair_mut(first, second)
    }
}

/// Read-only bisection over a segment table.
#[derive(Debug, Clone, Copy)]
pub struct SegmentedBisection<Tab> {
    table: Tab,
    start: SegmentPos,
    split: SegmentPos,
}

impl<Tab> SegmentedBisection<Tab> {
    pub fn new<'a>(table: Tab) -> SegmentedBisection<Tab>
    where
        Tab: SegmentTable<'a>,
    {
        let start = settle(SegmentPos::default(), table.segment_count(), |i| table.segment(i).len());
        SegmentedBisection { table, start, split: start }
    }

    /// Position of the first element of the suffix.
    pub fn split(&self) -> SegmentPos {
        self.split
    }
}

impl<'a, Tab: SegmentTable<'a>> Bisection<'a> for SegmentedBisection<Tab> {
    type Item = Tab::Item;

    fn prefix_is_empty(&self) -> bool {
        self.split == self.start
    }

    fn suffix_is_empty(&self) -> bool {
        self.split.segment == self.table.segment_count()
    }

    fn prefix_first(&self) -> Option<&'a Tab::Item> {
        if self.prefix_is_empty() {
            return None;
        }
        self.table.segment(self.start.segment).get(self.start.offset)
    }

    fn suffix_first(&self) -> Option<&'a Tab::Item> {
        if self.suffix_is_empty() {
            return None;
        }
        self.table.segment(self.split.segment).get(self.split.offset)
    }

    fn grow_prefix_by_1(&mut self) {
        assert!(!self.suffix_is_empty(), "grow_prefix_by_1: suffix is empty");
        let table = &self.table;
        let next = SegmentPos::new(self.split.segment, self.split.offset + 1);
        self.split = settle(next, table.segment_count(), |i| table.segment(i).len());
    }
}

/// Mutable bisection over a segment table. Swaps may cross segments.
#[derive(Debug)]
pub struct SegmentedBisectionMut<Tab> {
    table: Tab,
    front: SegmentPos,
    split: SegmentPos,
}

impl<Tab: SegmentTableMut> SegmentedBisectionMut<Tab> {
    pub fn new(table: Tab) -> SegmentedBisectionMut<Tab> {
        let start = settle(SegmentPos::default(), table.segment_count(), |i| table.segment_len(i));
        SegmentedBisectionMut { table, front: start, split: start }
    }

    fn end(&self) -> SegmentPos {
        SegmentPos::new(self.table.segment_count(), 0)
    }

    fn step(&self, pos: SegmentPos) -> SegmentPos {
        let next = SegmentPos::new(pos.segment, pos.offset + 1);
        settle(next, self.table.segment_count(), |i| self.table.segment_len(i))
    }

    fn is_settled(&self, pos: SegmentPos) -> bool {
        pos == self.end()
            || (pos.segment < self.table.segment_count() && pos.offset < self.table.segment_len(pos.segment))
    }

    fn element_mut(&mut self, pos: SegmentPos) -> Option<&mut Tab::Item> {
        if pos == self.end() {
            return None;
        }
        self.table.segment_mut(pos.segment).get_mut(pos.offset)
    }
}

impl<Tab: SegmentTableMut> BisectionMut for SegmentedBisectionMut<Tab> {
    type Item = Tab::Item;
    type Mark = SegmentPos;

    fn prefix_is_empty(&self) -> bool {
        self.front == self.split
    }

    fn suffix_is_empty(&self) -> bool {
        self.split == self.end()
    }

    fn prefix_first_mut(&mut self) -> Option<&mut Tab::Item> {
        if self.prefix_is_empty() {
            return None;
        }
        self.element_mut(self.front)
    }

    fn suffix_first_mut(&mut self) -> Option<&mut Tab::Item> {
        self.element_mut(self.split)
    }

    fn grow_prefix_by_1(&mut self) {
        assert!(!self.suffix_is_empty(), "grow_prefix_by_1: suffix is empty");
        self.split = self.step(self.split);
    }

    fn swap_first_elements(&mut self) {
        assert!(!self.prefix_is_empty(), "swap_first_elements: prefix is empty");
        assert!(!self.suffix_is_empty(), "swap_first_elements: suffix is empty");
        let (front, split) = (self.front, self.split);
        if front.segment == split.segment {
            self.table.segment_mut(front.segment).swap(front.offset, split.offset);
        } else {
            let (a, b) = self.table.segment_pair_mut(front.segment, split.segment);
            mem::swap(&mut a[front.offset], &mut b[split.offset]);
        }
    }

    fn front(&self) -> SegmentPos {
        self.front
    }

    fn split(&self) -> SegmentPos {
        self.split
    }

    fn drop_prefix_first(&mut self) {
        assert!(!self.prefix_is_empty(), "drop_prefix_first: prefix is empty");
        self.front = self.step(self.front);
    }

    fn reset_split(&mut self, mark: SegmentPos) {
        assert!(
            self.front <= mark && mark <= self.end(),
            "reset_split: mark {:?} outside window {:?}..{:?}",
            mark, self.front, self.end(),
        );
        debug_assert!(self.is_settled(mark), "reset_split: mark {:?} is not settled", mark);
        self.split = mark;
    }
}

// A ring buffer is two segments: the run from the head to the end of the
// buffer, then the wrapped run from the start of the buffer.

impl<T> SegmentedCollection for VecDeque<T> {
    type Segment = [T];

    fn segments(&self) -> impl Iterator<Item = &[T]> {
        let (front, back) = self.as_slices();
        [front, back].into_iter()
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;
    type Bisection<'a> = SegmentedBisection<[&'a [T]; 2]> where Self: 'a;

    fn bisection(&self) -> SegmentedBisection<[&'_ [T]; 2]> {
        let (front, back) = self.as_slices();
        SegmentedBisection::new([front, back])
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

impl<T> MutableCollection for VecDeque<T> {
    type BisectionMut<'a> = SegmentedBisectionMut<[&'a mut [T]; 2]> where Self: 'a;

    fn bisection_mut(&mut self) -> SegmentedBisectionMut<[&'_ mut [T]; 2]> {
        let (front, back) = self.as_mut_slices();
        SegmentedBisectionMut::new([front, back])
    }

    fn first_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }
}
