// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Read-only collections and the bisection view used to traverse them.
//!
//! A `Collection` only has to say how to bisect itself. Everything else
//! (emptiness, first element, counting, traversal, reduction) is derived
//! from walking a bisection: read the first element of the suffix, then
//! grow the prefix by one, until the suffix is empty.

/// A split of one sequence into an adjacent prefix and suffix.
///
/// A bisection is created with an empty prefix and the whole sequence as
/// the suffix. The split point only moves forward, so the prefix only
/// grows and the suffix only shrinks.
pub trait Bisection<'a> {
    type Item: 'a;

    fn prefix_is_empty(&self) -> bool;

    fn suffix_is_empty(&self) -> bool;

    /// First element of the prefix, `None` if the prefix is empty.
    fn prefix_first(&self) -> Option<&'a Self::Item>;

    /// First element of the suffix, `None` if the suffix is empty.
    fn suffix_first(&self) -> Option<&'a Self::Item>;

    /// Moves the first element of the suffix to the end of the prefix.
    ///
    /// # Panics
    ///
    /// If the suffix is empty.
    fn grow_prefix_by_1(&mut self);
}

/// A finite, ordered sequence that can be traversed any number of times.
pub trait Collection {
    type Item;

    type Bisection<'a>: Bisection<'a, Item = Self::Item>
    where
        Self: 'a;

    /// Bisect the collection with an empty prefix.
    fn bisection(&self) -> Self::Bisection<'_>;

    fn is_empty(&self) -> bool {
        self.bisection().suffix_is_empty()
    }

    fn first(&self) -> Option<&Self::Item> {
        self.bisection().suffix_first()
    }

    /// Calls `f` on each element in order until it returns `true`.
    /// Returns whether the traversal stopped early.
    fn for_each_until<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        let mut bisection = self.bisection();
        while let Some(item) = bisection.suffix_first() {
            if f(item) {
                return true;
            }
            bisection.grow_prefix_by_1();
        }
        false
    }

    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&Self::Item),
    {
        self.for_each_until(|item| {
            f(item);
            false
        });
    }

    fn count(&self) -> usize {
        let mut count = 0;
        self.for_each(|_| count += 1);
        count
    }

    /// Folds every element into an accumulator, front to back.
    fn reduce<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &Self::Item) -> A,
    {
        let mut acc = init;
        let mut bisection = self.bisection();
        while let Some(item) = bisection.suffix_first() {
            acc = f(acc, item);
            bisection.grow_prefix_by_1();
        }
        acc
    }
}

/// Bisection of a contiguous slice: `items[..split]` and `items[split..]`.
#[derive(Debug, Clone, Copy)]
pub struct SliceBisection<'a, T> {
    items: &'a [T],
    split: usize,
}

impl<'a, T> SliceBisection<'a, T> {
    pub fn new(items: &'a [T]) -> SliceBisection<'a, T> {
        SliceBisection { items, split: 0 }
    }

    pub fn prefix(&self) -> &'a [T] {
        &self.items[..self.split]
    }

    pub fn suffix(&self) -> &'a [T] {
        &self.items[self.split..]
    }
}

impl<'a, T> Bisection<'a> for SliceBisection<'a, T> {
    type Item = T;

    fn prefix_is_empty(&self) -> bool {
        self.split == 0
    }

    fn suffix_is_empty(&self) -> bool {
        self.split == self.items.len()
    }

    fn prefix_first(&self) -> Option<&'a T> {
        self.prefix().first()
    }

    fn suffix_first(&self) -> Option<&'a T> {
        self.items.get(self.split)
    }

    fn grow_prefix_by_1(&mut self) {
        assert!(!self.suffix_is_empty(), "grow_prefix_by_1: suffix is empty");
        self.split += 1;
    }
}

impl<T> Collection for [T] {
    type Item = T;
    type Bisection<'a> = SliceBisection<'a, T> where Self: 'a;

    fn bisection(&self) -> SliceBisection<'_, T> {
        SliceBisection::new(self)
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Bisection<'a> = SliceBisection<'a, T> where Self: 'a;

    fn bisection(&self) -> SliceBisection<'_, T> {
        SliceBisection::new(self.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bisection_starts_with_empty_prefix() {
        let items = [1, 2, 3];
        let bisection = items.bisection();
        assert!(bisection.prefix_is_empty());
        assert!(!bisection.suffix_is_empty());
        assert_eq!(bisection.prefix_first(), None);
        assert_eq!(bisection.suffix_first(), Some(&1));
    }

    #[test]
    fn grow_moves_suffix_front_to_prefix() {
        let items = ['a', 'b', 'c'];
        let mut bisection = items.bisection();
        bisection.grow_prefix_by_1();
        bisection.grow_prefix_by_1();
        assert_eq!(bisection.prefix(), &['a', 'b']);
        assert_eq!(bisection.suffix(), &['c']);
        assert_eq!(bisection.prefix_first(), Some(&'a'));
        assert_eq!(bisection.suffix_first(), Some(&'c'));
        assert_eq!(bisection.prefix().len() + bisection.suffix().len(), items.len());
    }

    #[test]
    #[should_panic(expected = "suffix is empty")]
    fn grow_past_end_panics() {
        let items = [1];
        let mut bisection = items.bisection();
        bisection.grow_prefix_by_1();
        bisection.grow_prefix_by_1();
    }

    #[test]
    fn empty_collection() {
        let items: Vec<u32> = vec![];
        assert!(Collection::is_empty(&items));
        assert_eq!(Collection::first(&items), None);
        assert_eq!(Collection::count(&items), 0);
        assert_eq!(items.reduce(7, |acc, x| acc + x), 7);
        assert!(!items.for_each_until(|_| true));
    }

    #[test]
    fn traversal_visits_in_order() {
        let items = vec![3, 1, 4, 1, 5];
        let mut seen = vec![];
        items.for_each(|x| seen.push(*x));
        assert_eq!(seen, items);
        assert_eq!(Collection::count(&items), 5);
        assert_eq!(Collection::first(&items), Some(&3));
    }

    #[test]
    fn for_each_until_stops_early() {
        let items = [1, 2, 3, 4];
        let mut seen = vec![];
        let stopped = items[..].for_each_until(|x| {
            seen.push(*x);
            *x == 2
        });
        assert!(stopped);
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn reduce_folds_front_to_back() {
        let items = vec!["a", "b", "c"];
        let joined = items.reduce(String::new(), |mut acc, s| {
            acc.push_str(s);
            acc
        });
        assert_eq!(joined, "abc");
    }
}
