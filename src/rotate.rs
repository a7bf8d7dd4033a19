// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! In-place rotation by block swaps (Gries–Mills).
//!
//! Rotating `A ++ B` into `B ++ A` is done by repeatedly swapping the
//! shorter of the two remaining regions into place:
//!
//! ```text
//! [a b c | d e f g h i j]    swap abc with def
//! [d e f | a b c | g h i j]  swap abc with ghi
//! [d e f g h i | a b c | j]  swap a with j, split hits the end
//! [d e f g h i j | b c | a]  swap b with a, then c with b
//! [d e f g h i j a b c]
//! ```
//!
//! Each swap writes one element into its final position, so a rotation of
//! `n` elements by `k` costs `n - gcd(n, k)` swaps and O(1) extra state.
//! Nothing here knows about slices: the algorithm only talks to a
//! [`BisectionMut`], so it runs unchanged over segmented storage.
//!
//! The bisection's split only moves forward while swapping. When the
//! suffix region runs out the split has reached the end of storage, and it
//! is moved back to `middle`, the remembered start of the region that is
//! still to be swapped. `middle` itself is only updated when a region is
//! exhausted.

use crate::mutable::{BisectionMut, MutableCollection};
use crate::profiling;

/// Rotates `collection` in place so that the element at offset `k`
/// becomes the first element, i.e. `S` becomes `S[k..] ++ S[..k]`.
///
/// Rotating by `0` or by the length of the collection does nothing.
///
/// # Panics
///
/// If `k` is greater than the length of the collection.
///
/// # Example
///
/// ```
/// use blockswap::rotate;
///
/// let mut letters = vec!['a', 'b', 'c', 'd', 'e'];
/// rotate(&mut letters, 2);
/// assert_eq!(letters, vec!['c', 'd', 'e', 'a', 'b']);
/// ```
pub fn rotate<C>(collection: &mut C, k: usize)
where
    C: MutableCollection + ?Sized,
{
    let mut bisection = collection.bisection_mut();
    for _ in 0..k {
        assert!(!bisection.suffix_is_empty(), "rotate: pivot {} is past the end", k);
        bisection.grow_prefix_by_1();
    }

    if bisection.prefix_is_empty() || bisection.suffix_is_empty() {
        return;
    }
    forward_rotate(&mut bisection);
}

/// Exchanges the prefix and suffix of `bisection` in place.
///
/// Returns the mark where the original prefix starts after the rotation,
/// which is recorded the first time the split reaches the end of storage.
///
/// # Panics
///
/// If either part is empty.
pub fn forward_rotate<B: BisectionMut>(bisection: &mut B) -> B::Mark {
    assert!(
        !bisection.prefix_is_empty() && !bisection.suffix_is_empty(),
        "forward_rotate: both parts must be non-empty",
    );

    let mut boundary = None;
    let mut middle = bisection.split();
    loop {
        swap_block(bisection, middle);

        if !bisection.suffix_is_empty() {
            // The prefix region ran out first; what was swapped past is done.
            middle = bisection.split();
            continue;
        }

        let front = bisection.front();
        let found = *boundary.get_or_insert(front);
        if front == middle {
            return found;
        }
        profiling::split_reset();
        bisection.reset_split(middle);
    }
}

/// Swaps elements pairwise from the front of both parts until the prefix
/// front reaches `middle` or the suffix is empty.
fn swap_block<B: BisectionMut>(bisection: &mut B, middle: B::Mark) {
    profiling::block();
    loop {
        bisection.swap_first_elements();
        profiling::swap();
        bisection.drop_prefix_first();
        bisection.grow_prefix_by_1();
        if bisection.front() == middle || bisection.suffix_is_empty() {
            return;
        }
    }
}
