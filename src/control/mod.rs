//! Control structures for lazy evaluation.
//!
//! - [`Lazy`]: a memoized suspension that runs its computation at most once
//!
//! # Examples
//!
//! ```rust
//! use lazylist::control::Lazy;
//!
//! let lazy = Lazy::new(|| {
//!     println!("Computing...");
//!     42
//! });
//! // "Computing..." is not printed yet
//!
//! let value = lazy.force();
//! assert_eq!(*value, 42);
//! ```

mod lazy;

pub use lazy::{Lazy, LazyState};
