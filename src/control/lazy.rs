//! Memoized, single-threaded suspensions.
//!
//! [`Lazy`] is the primitive every [`LazyList`](crate::list::LazyList) cell
//! is built from: a computation that runs on first demand, exactly once, and
//! whose result is cached for every later demand.
//!
//! # Examples
//!
//! ```rust
//! use lazylist::control::Lazy;
//!
//! let lazy = Lazy::new(|| 6 * 7);
//! assert!(!lazy.is_initialized());
//!
//! assert_eq!(*lazy.force(), 42);
//! assert!(lazy.is_initialized());
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;

/// The internal state of a [`Lazy`] value.
#[derive(Debug)]
pub enum LazyState<T, F> {
    /// Not forced yet. Holds the pending computation.
    Uninit(F),
    /// The computation is running right now.
    Running,
    /// Forced. Holds the cached result.
    Init(T),
    /// The computation panicked.
    Poisoned,
}

const POISONED: &str = "Lazy instance has been poisoned";
const REENTRANT: &str = "Lazy instance was forced by its own initializer";

/// Marks the state poisoned if dropped before the initializer returns.
struct PoisonOnUnwind<'a, T, F> {
    state: &'a RefCell<LazyState<T, F>>,
}

impl<T, F> Drop for PoisonOnUnwind<'_, T, F> {
    fn drop(&mut self) {
        *self.state.borrow_mut() = LazyState::Poisoned;
    }
}

/// A lazily evaluated value with memoization.
///
/// The computation is an `FnOnce`, so it can never run twice: once it has
/// been taken out of the cell the cell either holds its result or is
/// poisoned.
///
/// # Thread Safety
///
/// This type is NOT thread-safe. It relies on `RefCell` and assumes a single
/// thread forces it.
///
/// # Examples
///
/// ```rust
/// use lazylist::control::Lazy;
/// use std::cell::Cell;
///
/// let call_count = Cell::new(0);
/// let lazy = Lazy::new(|| {
///     call_count.set(call_count.get() + 1);
///     "computed"
/// });
///
/// assert_eq!(call_count.get(), 0);
/// let _ = lazy.force();
/// let _ = lazy.force();
/// assert_eq!(call_count.get(), 1);
/// ```
pub struct Lazy<T, F = fn() -> T> {
    state: RefCell<LazyState<T, F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a new lazy value with the given initialization function.
    ///
    /// The function will not be called until [`force`](Self::force) is
    /// invoked.
    ///
    /// # Arguments
    ///
    /// * `initializer` - A function that produces the value when called
    #[inline]
    pub const fn new(initializer: F) -> Self {
        Self {
            state: RefCell::new(LazyState::Uninit(initializer)),
        }
    }

    /// Forces evaluation and returns a reference to the cached value.
    ///
    /// # Returns
    ///
    /// A `Ref<'_, T>` to the computed value, holding a shared borrow of the
    /// internal `RefCell` for as long as it lives.
    ///
    /// # Panics
    ///
    /// - If the initializer panics; the value is then poisoned.
    /// - If the value is already poisoned.
    /// - If the initializer forces this same value (reentrant forcing); the
    ///   value is poisoned as the panic unwinds out of the initializer.
    pub fn force(&self) -> Ref<'_, T> {
        // Short borrow so the initializer can run without one outstanding.
        let needs_initialization = {
            let state = self.state.borrow();
            match &*state {
                LazyState::Init(_) => false,
                LazyState::Running => panic!("{REENTRANT}"),
                LazyState::Poisoned => panic!("{POISONED}"),
                LazyState::Uninit(_) => true,
            }
        };

        if needs_initialization {
            self.initialize();
        }

        Ref::map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => value,
            _ => panic!("Lazy should be initialized at this point"),
        })
    }

    /// Takes the initializer out, leaving `Running` behind while it runs.
    /// A panicking initializer leaves the value poisoned.
    fn initialize(&self) {
        let initializer = {
            let mut state = self.state.borrow_mut();
            match std::mem::replace(&mut *state, LazyState::Running) {
                LazyState::Uninit(initializer) => initializer,
                other => {
                    *state = other;
                    return;
                }
            }
        };

        // No borrow is held here: the initializer may force other values.
        let guard = PoisonOnUnwind { state: &self.state };
        let value = initializer();
        std::mem::forget(guard);

        *self.state.borrow_mut() = LazyState::Init(value);
    }
}

impl<T, F> Lazy<T, F> {
    /// Creates a lazy value that is already forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::control::Lazy;
    ///
    /// let lazy: Lazy<i32> = Lazy::new_with_value(42);
    /// assert!(lazy.is_initialized());
    /// ```
    #[inline]
    pub const fn new_with_value(value: T) -> Self {
        Self {
            state: RefCell::new(LazyState::Init(value)),
        }
    }

    /// Returns the cached value without forcing, or `None` when the value has
    /// not been forced (or is poisoned).
    pub fn get(&self) -> Option<Ref<'_, T>> {
        let state = self.state.borrow();
        if matches!(&*state, LazyState::Init(_)) {
            Some(Ref::map(state, |state| match state {
                LazyState::Init(value) => value,
                _ => unreachable!(),
            }))
        } else {
            None
        }
    }

    /// Returns whether the value has been forced.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Init(_))
    }

    /// Returns whether the value has been poisoned by a panicking (or
    /// reentrantly forced) initializer.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Poisoned)
    }

    /// Consumes the cell and returns the cached value if it was forced.
    ///
    /// Unlike forcing, this never runs a pending initializer; the initializer
    /// is dropped instead.
    pub fn into_value(self) -> Option<T> {
        match self.state.into_inner() {
            LazyState::Init(value) => Some(value),
            LazyState::Uninit(_) | LazyState::Running | LazyState::Poisoned => None,
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        match &*state {
            LazyState::Init(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Uninit(_) => formatter.debug_tuple("Lazy").field(&"<uninit>").finish(),
            LazyState::Running => formatter.debug_tuple("Lazy").field(&"<running>").finish(),
            LazyState::Poisoned => formatter.debug_tuple("Lazy").field(&"<poisoned>").finish(),
        }
    }
}
