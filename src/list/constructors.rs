//! Ways to build lazy lists: generators, unfolds, ranges and fixed lengths.

use std::cell::RefCell;
use std::rc::Rc;

use super::node::{LazyList, Node};
use crate::error::{ListError, ListResult};

impl<T: 'static> LazyList<T> {
    /// Builds a list by calling `generator` once per position, as positions
    /// are forced. `None` ends the list.
    ///
    /// # Arguments
    ///
    /// * `generator` - Produces the next element, or `None` at the end. It is
    ///   called at most once per position, in order, however many handles
    ///   force the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let mut countdown = 3;
    /// let list = LazyList::from_fn(move || {
    ///     countdown -= 1;
    ///     (countdown >= 0).then_some(countdown)
    /// });
    /// assert_eq!(list.to_vec().unwrap(), vec![2, 1, 0]);
    /// ```
    pub fn from_fn<G>(generator: G) -> Self
    where
        G: FnMut() -> Option<T> + 'static,
    {
        Self::pull(Rc::new(RefCell::new(generator)))
    }

    /// Builds an unbounded list by calling `generator` once per position.
    pub fn repeat_with<G>(mut generator: G) -> Self
    where
        G: FnMut() -> T + 'static,
    {
        Self::from_fn(move || Some(generator()))
    }

    fn pull<G>(generator: Rc<RefCell<G>>) -> Self
    where
        G: FnMut() -> Option<T> + 'static,
    {
        Self::suspend(move || {
            let next = {
                let mut generator = generator.borrow_mut();
                (*generator)()
            };
            Ok(match next {
                None => Node::Nil,
                Some(value) => Node::Cons(value, Self::pull(generator)),
            })
        })
    }

    /// Builds a list from an explicit state: `step(seed)` yields the next
    /// element and the next state, or `None` to stop.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let fibonacci = LazyList::unfold((0u64, 1u64), |(a, b)| Some((a, (b, a + b))));
    /// assert_eq!(fibonacci.take(7).to_vec().unwrap(), vec![0, 1, 1, 2, 3, 5, 8]);
    /// ```
    pub fn unfold<S, F>(seed: S, step: F) -> Self
    where
        S: 'static,
        F: Fn(S) -> Option<(T, S)> + 'static,
    {
        Self::unfold_with(seed, Rc::new(step))
    }

    fn unfold_with<S, F>(seed: S, step: Rc<F>) -> Self
    where
        S: 'static,
        F: Fn(S) -> Option<(T, S)> + 'static,
    {
        Self::suspend(move || {
            Ok(match step(seed) {
                None => Node::Nil,
                Some((value, next)) => Node::Cons(value, Self::unfold_with(next, step)),
            })
        })
    }

    /// Builds `first, next(first), next(next(first)), ...` for as long as
    /// `condition` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let powers = LazyList::seq(1, |x| x * 2, |x| *x < 100);
    /// assert_eq!(powers.to_vec().unwrap(), vec![1, 2, 4, 8, 16, 32, 64]);
    /// ```
    pub fn seq<N, C>(first: T, next: N, condition: C) -> Self
    where
        N: Fn(&T) -> T + 'static,
        C: Fn(&T) -> bool + 'static,
    {
        Self::seq_with(first, Rc::new(next), Rc::new(condition))
    }

    fn seq_with<N, C>(current: T, next: Rc<N>, condition: Rc<C>) -> Self
    where
        N: Fn(&T) -> T + 'static,
        C: Fn(&T) -> bool + 'static,
    {
        Self::suspend(move || {
            if !condition(&current) {
                return Ok(Node::Nil);
            }
            let following = next(&current);
            Ok(Node::Cons(current, Self::seq_with(following, next, condition)))
        })
    }

    /// Returns a one-element list.
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self::new().cons(value)
    }
}

impl<T: Clone + 'static> LazyList<T> {
    /// Returns `count` copies of `value`.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidArgument`] if `count` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::repeat(3, 'x').unwrap();
    /// assert_eq!(list.to_vec().unwrap(), vec!['x', 'x', 'x']);
    /// assert!(LazyList::repeat(-1, 'x').is_err());
    /// ```
    pub fn repeat(count: isize, value: T) -> ListResult<Self> {
        let length = checked_length("repeat", count)?;
        Ok(LazyList::eternity()
            .take(length)
            .map(move |()| value.clone()))
    }

    /// Returns `[function(0), function(1), ..., function(count - 1)]`,
    /// computed lazily.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidArgument`] if `count` is negative.
    pub fn tabulate<F>(count: isize, function: F) -> ListResult<Self>
    where
        F: Fn(usize) -> T + 'static,
    {
        let length = checked_length("tabulate", count)?;
        Ok(LazyList::eternity()
            .take(length)
            .map_indexed(move |index, ()| function(index)))
    }
}

impl LazyList<()> {
    /// The unbounded list of `()`.
    ///
    /// Useful as a length-free skeleton: `eternity().take(n)` is a list of
    /// `n` positions that costs nothing until forced.
    pub fn eternity() -> Self {
        Self::unfold((), |()| Some(((), ())))
    }
}

impl LazyList<i64> {
    /// Returns the ascending inclusive range `low..=high`; empty when
    /// `high < low`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// assert_eq!(LazyList::range(1, 5).to_vec().unwrap(), vec![1, 2, 3, 4, 5]);
    /// assert!(LazyList::range(5, 1).is_empty().unwrap());
    /// ```
    pub fn range(low: i64, high: i64) -> Self {
        if high < low {
            return Self::new();
        }
        Self::unfold(Some(low), move |current| {
            let value = current.filter(|value| *value <= high)?;
            Some((value, value.checked_add(1)))
        })
    }
}

fn checked_length(operation: &'static str, count: isize) -> ListResult<usize> {
    usize::try_from(count).map_err(|_| ListError::InvalidArgument {
        operation,
        message: format!("negative length {count}"),
    })
}
