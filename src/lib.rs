//! # lazylist
//!
//! Persistent, lazily evaluated singly-linked lists with memoized tails.
//!
//! ## Overview
//!
//! - **Control Structures**: [`Lazy`](control::Lazy), a memoizing cell that
//!   runs its initializer at most once
//! - **Lazy Lists**: [`LazyList`](list::LazyList) and its constructors,
//!   transformations, searches, lockstep operations, combinatorial
//!   generators and conversions
//! - **Errors**: [`ListError`](error::ListError), the failures an operation
//!   or a forced cell can report
//!
//! ## Feature Flags
//!
//! - `control`: The `Lazy` cell
//! - `list`: Lazy lists (implies `control`)
//! - `fxhash`: `unique_hashed`, backed by `rustc-hash`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazylist::prelude::*;
//!
//! let naturals = LazyList::range(0, i64::MAX);
//! let squares = naturals.map(|x| x * x);
//! assert_eq!(squares.at(12), Ok(144));
//! assert_eq!(naturals.take(3).to_string_with(&PrintOptions::default()).unwrap(), "[^0; 1; 2^]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use lazylist::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "control")]
    pub use crate::control::*;

    pub use crate::error::*;

    #[cfg(feature = "list")]
    pub use crate::list::*;
}

#[cfg(feature = "control")]
pub mod control;

pub mod error;

#[cfg(feature = "list")]
pub mod list;
