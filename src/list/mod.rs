//! Persistent lazy lists.
//!
//! A [`LazyList`] is a singly-linked list whose cells are computed on demand
//! and memoized. Lists are immutable: every operation returns a new list
//! that shares whatever structure it can with its inputs, and cloning a list
//! only clones a handle.
//!
//! Forcing a cell can fail (for example, a lockstep `map2` over lists of
//! different sizes). The failure is cached in the cell like any other result,
//! so operations that force return [`ListResult`](crate::error::ListResult).
//!
//! # Examples
//!
//! ```rust
//! use lazylist::list::LazyList;
//!
//! let primes = LazyList::range(2, i64::MAX)
//!     .filter(|n| (2..*n).take_while(|d| d * d <= *n).all(|d| n % d != 0));
//! assert_eq!(primes.take(5).to_vec().unwrap(), vec![2, 3, 5, 7, 11]);
//! ```

mod combinatorics;
mod constructors;
mod conversion;
mod dedup;
mod node;
mod print;
mod search;
mod structure;
mod transform;
mod zip;

pub use conversion::Iter;
pub use node::{LazyList, Node};
pub use print::PrintOptions;
