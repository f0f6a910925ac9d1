//! Sorting algorithms over the [`Sortable`] capability.
//!
//! - **Unstable**: introsort. Quicksort with median-of-three (ninther on long ranges) pivots,
//!   insertion sort for short ranges, heapsort once the recursion budget runs out.
//! - **Stable**: in-place block insertion sort followed by bottom-up SymMerge passes.
//!   Needs nothing beyond `less` and `swap`, so no element buffer is allocated.
//!
//! The main entry points are [`sort`] and [`stable`]. [`sort_slice_by`] and
//! [`stable_slice_by`] accept an inline comparison instead of a trait implementation and run
//! the same code paths. [`sort_slice_by_cmp`] and [`stable_slice_by_cmp`] take a three-way
//! comparison returning [`Ordering`] instead of a `less` predicate.

use crate::core::{SliceLess, Sortable};
use std::cmp::Ordering;

/// Ranges at or below this length are finished with insertion sort.
const INSERTION_SORT_THRESHOLD: usize = 12;

/// Ranges above this length pick their pivot with Tukey's ninther.
const NINTHER_THRESHOLD: usize = 50;

/// Width of the insertion-sorted blocks the stable sort starts merging from.
const STABLE_BLOCK_SIZE: usize = 20;

/// Sorts `data` in ascending order as determined by [`Sortable::less`].
///
/// Makes one call to `len` and O(n log n) calls to `less` and `swap`. The sort is not
/// stable: elements that compare equal may end up in any relative order.
///
/// # Examples
///
/// ```
/// use sortkit::sort;
///
/// let mut data = vec![5, 2, 9, 1];
/// sort(&mut data);
///
/// assert_eq!(data, vec![1, 2, 5, 9]);
/// ```
pub fn sort<S: Sortable + ?Sized>(data: &mut S) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let depth_limit = 2 * (usize::BITS - len.leading_zeros()) as usize;
    introsort(data, 0, len, depth_limit);
}

/// Sorts `data` in ascending order, keeping equal elements in their original order.
///
/// Makes one call to `len`, O(n log n) calls to `less` and O(n log² n) calls to `swap`.
///
/// # Examples
///
/// ```
/// use sortkit::{Sortable, stable};
///
/// struct ByFirst(Vec<(u8, char)>);
///
/// impl Sortable for ByFirst {
///     fn len(&self) -> usize { self.0.len() }
///     fn less(&self, i: usize, j: usize) -> bool { self.0[i].0 < self.0[j].0 }
///     fn swap(&mut self, i: usize, j: usize) { self.0.swap(i, j) }
/// }
///
/// let mut data = ByFirst(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
/// stable(&mut data);
///
/// assert_eq!(data.0, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn stable<S: Sortable + ?Sized>(data: &mut S) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut block = STABLE_BLOCK_SIZE;

    let mut start = 0;
    while start + block <= len {
        insertion_sort(data, start, start + block);
        start += block;
    }
    insertion_sort(data, start, len);

    while block < len {
        let mut lo = 0;
        while lo + 2 * block <= len {
            sym_merge(data, lo, lo + block, lo + 2 * block);
            lo += 2 * block;
        }
        if lo + block < len {
            sym_merge(data, lo, lo + block, len);
        }
        block *= 2;
    }
}

/// Sorts a slice with an inline `less` comparison.
///
/// Equivalent to wrapping the slice in a [`Sortable`] whose `less` calls the closure and
/// passing it to [`sort`]; both produce identical results for the same comparison.
///
/// # Examples
///
/// ```
/// use sortkit::sort_slice_by;
///
/// let mut data = vec![5, 2, 9, 1];
/// sort_slice_by(&mut data, |a, b| a > b);
///
/// assert_eq!(data, vec![9, 5, 2, 1]);
/// ```
pub fn sort_slice_by<T, F>(items: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool,
{
    sort(&mut SliceLess { items, less });
}

/// Stable counterpart of [`sort_slice_by`].
///
/// # Examples
///
/// ```
/// use sortkit::stable_slice_by;
///
/// let mut words = vec!["bb", "a", "cc", "d"];
/// stable_slice_by(&mut words, |a, b| a.len() < b.len());
///
/// assert_eq!(words, vec!["a", "d", "bb", "cc"]);
/// ```
pub fn stable_slice_by<T, F>(items: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool,
{
    stable(&mut SliceLess { items, less });
}

/// Sorts a slice with a three-way comparison such as `Ord::cmp`.
///
/// An element orders before another exactly when `cmp` returns [`Ordering::Less`]; the
/// call is otherwise identical to [`sort_slice_by`].
///
/// # Examples
///
/// ```
/// use sortkit::sort_slice_by_cmp;
///
/// let mut words = vec!["how", "are", "you", "I", "am", "fine"];
/// sort_slice_by_cmp(&mut words, |a, b| a.cmp(b));
///
/// assert_eq!(words, vec!["I", "am", "are", "fine", "how", "you"]);
/// ```
pub fn sort_slice_by_cmp<T, F>(items: &mut [T], cmp: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    sort_slice_by(items, |a, b| cmp(a, b) == Ordering::Less);
}

/// Stable counterpart of [`sort_slice_by_cmp`].
///
/// # Examples
///
/// ```
/// use sortkit::stable_slice_by_cmp;
///
/// let mut words = vec!["bb", "a", "cc", "d"];
/// stable_slice_by_cmp(&mut words, |a, b| a.len().cmp(&b.len()));
///
/// assert_eq!(words, vec!["a", "d", "bb", "cc"]);
/// ```
pub fn stable_slice_by_cmp<T, F>(items: &mut [T], cmp: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    stable_slice_by(items, |a, b| cmp(a, b) == Ordering::Less);
}

/// Reports whether `data` is sorted according to [`Sortable::less`].
///
/// ```
/// use sortkit::is_sorted;
///
/// assert!(is_sorted(&vec![1, 1, 2]));
/// assert!(!is_sorted(&vec![2, 1]));
/// ```
pub fn is_sorted<S: Sortable + ?Sized>(data: &S) -> bool {
    (1..data.len()).rev().all(|i| !data.less(i, i - 1))
}

/// Reports whether `items` is sorted according to an inline `less` comparison.
///
/// ```
/// use sortkit::slice_is_sorted_by;
///
/// assert!(slice_is_sorted_by(&[42, 31, 31, 17], |a, b| a > b));
/// assert!(!slice_is_sorted_by(&[17, 42], |a, b| a > b));
/// ```
pub fn slice_is_sorted_by<T, F>(items: &[T], less: F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    items.windows(2).all(|pair| !less(&pair[1], &pair[0]))
}

/// Binary search over `0..n` for the first index where `pred` holds.
///
/// `pred` must be monotone: false for some prefix of `0..n`, true for the rest.
/// Returns `n` when `pred` is false everywhere.
///
/// # Examples
///
/// ```
/// use sortkit::search;
///
/// let ages = [17, 26, 31, 42];
/// assert_eq!(search(ages.len(), |i| ages[i] >= 30), 2);
/// assert_eq!(search(ages.len(), |i| ages[i] >= 50), 4);
/// ```
pub fn search<F>(n: usize, mut pred: F) -> usize
where
    F: FnMut(usize) -> bool,
{
    let (mut lo, mut hi) = (0, n);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Introspective quicksort on `data[lo..hi]`.
///
/// Recurses into the shorter side and loops on the longer one, bounding stack depth by
/// O(log n). `depth` counts remaining partitioning rounds before falling back to heapsort.
fn introsort<S: Sortable + ?Sized>(
    data: &mut S,
    mut lo: usize,
    mut hi: usize,
    mut depth: usize,
) {
    while hi - lo > INSERTION_SORT_THRESHOLD {
        if depth == 0 {
            heapsort(data, lo, hi);
            return;
        }
        depth -= 1;

        let mid = partition(data, lo, hi);
        if mid - lo < hi - mid {
            introsort(data, lo, mid, depth);
            lo = mid + 1;
        } else {
            introsort(data, mid + 1, hi, depth);
            hi = mid;
        }
    }

    insertion_sort(data, lo, hi);
}

/// Partitions `data[lo..hi]` around a chosen pivot and returns the pivot's final position.
///
/// Afterwards nothing left of the pivot orders after it and nothing right of it orders
/// before it. Both scans stop on elements equal to the pivot, so runs of duplicates are
/// split down the middle instead of degrading to quadratic time.
///
/// Every index touched stays inside `lo..hi` no matter what `less` answers.
fn partition<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) -> usize {
    let pivot = choose_pivot(data, lo, hi);
    data.swap(lo, pivot);

    let mut i = lo + 1;
    let mut j = hi - 1;
    loop {
        while i <= j && data.less(i, lo) {
            i += 1;
        }
        while i <= j && data.less(lo, j) {
            j -= 1;
        }
        if i >= j {
            break;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }

    data.swap(lo, j);
    j
}

fn choose_pivot<S: Sortable + ?Sized>(data: &S, lo: usize, hi: usize) -> usize {
    let len = hi - lo;
    let mid = lo + len / 2;
    let last = hi - 1;

    if len > NINTHER_THRESHOLD {
        let step = len / 8;
        let a = median_of_three(data, lo, lo + step, lo + 2 * step);
        let b = median_of_three(data, mid - step, mid, mid + step);
        let c = median_of_three(data, last - 2 * step, last - step, last);
        median_of_three(data, a, b, c)
    } else {
        median_of_three(data, lo, mid, last)
    }
}

/// Returns whichever of the three positions holds the median element.
fn median_of_three<S: Sortable + ?Sized>(data: &S, a: usize, b: usize, c: usize) -> usize {
    let (a, b) = if data.less(b, a) { (b, a) } else { (a, b) };
    if data.less(c, b) {
        if data.less(c, a) { a } else { c }
    } else {
        b
    }
}

fn insertion_sort<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) {
    for i in lo + 1..hi {
        let mut j = i;
        while j > lo && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn heapsort<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) {
    let len = hi - lo;

    for root in (0..len / 2).rev() {
        sift_down(data, lo, root, len);
    }
    for end in (1..len).rev() {
        data.swap(lo, lo + end);
        sift_down(data, lo, 0, end);
    }
}

/// Restores the max-heap property below `root` for the heap stored at `data[lo..lo + end]`.
fn sift_down<S: Sortable + ?Sized>(data: &mut S, lo: usize, mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && data.less(lo + child, lo + child + 1) {
            child += 1;
        }
        if !data.less(lo + root, lo + child) {
            return;
        }
        data.swap(lo + root, lo + child);
        root = child;
    }
}

/// Merges the sorted runs `data[a..m]` and `data[m..b]` in place, stably.
///
/// SymMerge (Kim & Kutzner, 2004): find the split that exchanges a symmetric suffix of the
/// left run with a prefix of the right run, rotate it into place, then recurse on both
/// halves. Single-element runs are placed with a binary search and a chain of swaps.
fn sym_merge<S: Sortable + ?Sized>(data: &mut S, a: usize, m: usize, b: usize) {
    if m - a == 1 {
        // Move data[a] up to just before the first right-run element not less than it.
        let pos = search_range(m, b, |h| !data.less(h, a)) - 1;
        for k in a..pos {
            data.swap(k, k + 1);
        }
        return;
    }
    if b - m == 1 {
        // Insert data[m] after every element of the left run that does not order after it.
        let pos = search_range(a, m, |h| data.less(m, h));
        for k in (pos + 1..=m).rev() {
            data.swap(k, k - 1);
        }
        return;
    }

    let mid = a + (b - a) / 2;
    let n = mid + m;
    let (lo, hi) = if m > mid { (n - b, mid) } else { (a, m) };
    let p = n - 1;
    let start = search_range(lo, hi, |c| data.less(p - c, c));
    let end = n - start;

    if start < m && m < end {
        rotate(data, start, m, end);
    }
    if a < start && start < mid {
        sym_merge(data, a, start, mid);
    }
    if mid < end && end < b {
        sym_merge(data, mid, end, b);
    }
}

/// [`search`] restricted to `lo..hi`.
fn search_range<F>(lo: usize, hi: usize, mut pred: F) -> usize
where
    F: FnMut(usize) -> bool,
{
    lo + search(hi - lo, |offset| pred(lo + offset))
}

/// Rotates `data[a..b]` so that `data[m..b]` comes before `data[a..m]`, using block swaps.
fn rotate<S: Sortable + ?Sized>(data: &mut S, a: usize, m: usize, b: usize) {
    let mut left = m - a;
    let mut right = b - m;

    while left != right {
        if left > right {
            swap_range(data, m - left, m, right);
            left -= right;
        } else {
            swap_range(data, m - left, m + right - left, left);
            right -= left;
        }
    }
    swap_range(data, m - left, m, left);
}

fn swap_range<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize, n: usize) {
    for offset in 0..n {
        data.swap(a + offset, b + offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_three_picks_middle_value() {
        let data = vec![3, 1, 2];
        assert_eq!(median_of_three(&data, 0, 1, 2), 2);
        let data = vec![1, 2, 3];
        assert_eq!(median_of_three(&data, 0, 1, 2), 1);
        let data = vec![2, 3, 1];
        assert_eq!(median_of_three(&data, 0, 1, 2), 0);
    }

    #[test]
    fn partition_splits_around_pivot() {
        let mut data: Vec<i32> = (0..40).rev().chain(0..40).collect();
        let len = data.len();
        let p = partition(&mut data, 0, len);
        assert!(data[..p].iter().all(|x| *x <= data[p]));
        assert!(data[p + 1..].iter().all(|x| *x >= data[p]));
    }

    #[test]
    fn heapsort_sorts_subrange_only() {
        let mut data = vec![9, 5, 4, 3, 2, 1, 0];
        heapsort(&mut data, 1, 6);
        assert_eq!(data, vec![9, 1, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn zero_depth_budget_falls_back_to_heapsort() {
        let mut data: Vec<u32> = (0..500).map(|i| (i * 7919) % 503).collect();
        let len = data.len();
        introsort(&mut data, 0, len, 0);
        assert!(data.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn rotate_moves_right_run_to_front() {
        let mut data = vec![1, 2, 3, 4, 5, 6, 7];
        rotate(&mut data, 0, 3, 7);
        assert_eq!(data, vec![4, 5, 6, 7, 1, 2, 3]);
    }

    #[test]
    fn sym_merge_single_element_runs() {
        let mut data = vec![5, 1, 2, 6, 7];
        sym_merge(&mut data, 0, 1, 5);
        assert_eq!(data, vec![1, 2, 5, 6, 7]);

        let mut data = vec![1, 3, 5, 7, 4];
        sym_merge(&mut data, 0, 4, 5);
        assert_eq!(data, vec![1, 3, 4, 5, 7]);
    }

    #[test]
    fn sym_merge_interleaves_runs() {
        let mut data = vec![1, 4, 6, 9, 2, 3, 5, 7, 8];
        sym_merge(&mut data, 0, 4, 9);
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn search_range_offsets_result() {
        assert_eq!(search_range(10, 20, |i| i >= 15), 15);
        assert_eq!(search_range(10, 20, |_| false), 20);
        assert_eq!(search_range(10, 10, |_| true), 10);
    }
}
