//! # sortkit
//!
//! `sortkit` sorts any randomly indexable collection in place through a tiny capability
//! interface: how long it is, whether one position orders before another, and how to exchange
//! two positions. Elements are never cloned or inspected by the library itself.
//!
//! ## Key Features
//!
//! - **Capability-based**: Implement [`Sortable`] (`len`, `less`, `swap`) once and sort with
//!   [`sort`] (unstable, introsort) or [`stable`] (in-place SymMerge).
//! - **Inline comparisons**: [`sort_slice_by`] and [`stable_slice_by`] take a slice and a
//!   closure directly, no named ordering type required. They run the same algorithms, so
//!   both forms give identical results for the same comparison. [`sort_slice_by_cmp`] and
//!   [`stable_slice_by_cmp`] accept a three-way `Ordering` comparison like `Ord::cmp`.
//! - **Adapters and queries**: [`Reverse`] inverts any ordering, [`is_sorted`] checks an
//!   ordering, [`search`] binary-searches a monotone predicate.
//!
//! ## Usage
//!
//! ### Reusable ordering type
//!
//! ```rust
//! use sortkit::{Sortable, sort};
//!
//! struct Person {
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! struct ByAge(Vec<Person>);
//!
//! impl Sortable for ByAge {
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//!
//!     fn less(&self, i: usize, j: usize) -> bool {
//!         self.0[i].age < self.0[j].age
//!     }
//!
//!     fn swap(&mut self, i: usize, j: usize) {
//!         self.0.swap(i, j);
//!     }
//! }
//!
//! let mut people = ByAge(vec![
//!     Person { name: "Bob", age: 31 },
//!     Person { name: "Michael", age: 17 },
//! ]);
//! sort(&mut people);
//!
//! assert_eq!(people.0[0].name, "Michael");
//! ```
//!
//! ### Inline comparison
//!
//! ```rust
//! use sortkit::sort_slice_by;
//!
//! let mut ages = vec![31, 42, 17, 26];
//! sort_slice_by(&mut ages, |a, b| a > b);
//!
//! assert_eq!(ages, vec![42, 31, 26, 17]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - [`sort`]: O(n log n) comparisons and swaps in the worst case, O(log n) stack.
//! - [`stable`]: O(n log n) comparisons, O(n log² n) swaps, no auxiliary element storage.
//! - The comparison must be a strict weak ordering. If it is not, the result order is
//!   unspecified, but both sorts still terminate and leave a permutation of the input.

pub mod algo;
pub mod core;
pub mod people;
pub use crate::algo::{
    is_sorted, search, slice_is_sorted_by, sort, sort_slice_by, sort_slice_by_cmp, stable,
    stable_slice_by, stable_slice_by_cmp,
};
pub use crate::core::{Reverse, Sortable};

pub mod prelude {
    pub use crate::algo::{
        is_sorted, search, slice_is_sorted_by, sort, sort_slice_by, sort_slice_by_cmp, stable,
        stable_slice_by, stable_slice_by_cmp,
    };
    pub use crate::core::{Reverse, Sortable};
}
