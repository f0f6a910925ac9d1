//! Core traits and types for sortkit.
//!
//! This module defines:
//! - [`Sortable`]: The capability trait users implement to sort their own collections.
//! - [`Reverse`]: An adapter that inverts the ordering of any [`Sortable`].
//! - SliceLess: Internal adapter pairing a slice with an inline `less` closure.

use std::collections::VecDeque;

/// A collection that can be sorted by position.
///
/// The sorting routines never look at elements directly. They only ask the
/// collection how long it is, whether the element at one position orders before
/// the element at another, and to exchange two positions. This lets any
/// randomly indexable structure be sorted in place, including ones that keep
/// their data split across several buffers.
///
/// `less` must describe a strict weak ordering for the result to be sorted. If
/// it does not, the sort still terminates and still leaves a permutation of the
/// input, but the order is unspecified.
///
/// # Examples
///
/// Implementing for a newtype over a vector of records:
///
/// ```
/// use sortkit::{Sortable, sort};
///
/// struct ByLen(Vec<String>);
///
/// impl Sortable for ByLen {
///     fn len(&self) -> usize {
///         self.0.len()
///     }
///
///     fn less(&self, i: usize, j: usize) -> bool {
///         self.0[i].len() < self.0[j].len()
///     }
///
///     fn swap(&mut self, i: usize, j: usize) {
///         self.0.swap(i, j);
///     }
/// }
///
/// let mut words = ByLen(vec!["ccc".into(), "a".into(), "bb".into()]);
/// sort(&mut words);
/// assert_eq!(words.0, vec!["a", "bb", "ccc"]);
/// ```
pub trait Sortable {
    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Reports whether the element at `i` must sort before the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Naturally ordered slices.
impl<T: Ord> Sortable for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T: Ord> Sortable for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }
}

// VecDeque offers O(1) random access and swap, so it sorts without being made contiguous.
impl<T: Ord> Sortable for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        VecDeque::swap(self, i, j);
    }
}

/// Inverts the ordering of the wrapped collection.
///
/// Sorting a `Reverse` leaves the inner collection in non-increasing order.
///
/// ```
/// use sortkit::{Reverse, sort};
///
/// let mut data = Reverse(vec![3, 1, 2]);
/// sort(&mut data);
/// assert_eq!(data.into_inner(), vec![3, 2, 1]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reverse<S>(pub S);

impl<S> Reverse<S> {
    /// Unwraps the adapter, returning the inner collection.
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: Sortable> Sortable for Reverse<S> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.0.less(j, i)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }
}

// Forward through mutable borrows so callers can sort `Reverse(&mut data)`
// without giving up ownership.
impl<S: Sortable + ?Sized> Sortable for &mut S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (**self).less(i, j)
    }

    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j);
    }
}

/// Pairs a slice with an element-level `less` closure.
///
/// Backs the inline entry points so they run the exact same algorithm as the
/// trait form.
pub(crate) struct SliceLess<'a, T, F> {
    pub items: &'a mut [T],
    pub less: F,
}

impl<T, F> Sortable for SliceLess<'_, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        (self.less)(&self.items[i], &self.items[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }
}
