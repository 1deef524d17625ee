//! The lazy cell and node shapes every list operation is built on.

use std::fmt;
use std::rc::Rc;

use static_assertions::assert_not_impl_any;

use crate::control::Lazy;
use crate::error::{ListError, ListResult};

/// What forcing a cell produces: the node, or the failure that aborted it.
pub(crate) type Step<T> = ListResult<Node<T>>;

/// The deferred computation held by an unforced cell.
type Suspension<T> = Box<dyn FnOnce() -> Step<T>>;

type Cell<T> = Lazy<Step<T>, Suspension<T>>;

/// A forced list cell: either the end of the list, or a head followed by a
/// lazily computed tail.
#[derive(Clone, PartialEq, Eq)]
pub enum Node<T> {
    /// The end of the list.
    Nil,
    /// A head element and the rest of the list.
    Cons(T, LazyList<T>),
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => formatter.write_str("Nil"),
            Self::Cons(head, tail) => formatter
                .debug_tuple("Cons")
                .field(head)
                .field(tail)
                .finish(),
        }
    }
}

/// A persistent, lazily evaluated singly-linked list.
///
/// A `LazyList` is a cheap handle on a memoized cell. The cell's computation
/// runs the first time any handle forces it; every handle sharing the cell
/// then observes the same cached node. Cloning a list never copies or forces
/// anything.
///
/// # Time Complexity
///
/// | Operation         | Complexity                         |
/// |-------------------|------------------------------------|
/// | `new`             | O(1), no allocation                |
/// | `cons`            | O(1)                               |
/// | `clone`           | O(1)                               |
/// | `force`, `uncons` | O(1) plus the cost of the cell     |
/// | `map`, `filter`   | O(1) to build, work deferred       |
/// | `length`, `at`    | O(n), forces the prefix            |
///
/// # Examples
///
/// ```rust
/// use lazylist::list::LazyList;
///
/// let squares = LazyList::range(1, i64::MAX).map(|x| x * x);
/// let first = squares.take(3).to_vec().unwrap();
/// assert_eq!(first, vec![1, 4, 9]);
/// ```
pub struct LazyList<T> {
    /// `None` is the empty list: pre-forced and allocation-free.
    cell: Option<Rc<Cell<T>>>,
}

assert_not_impl_any!(LazyList<i32>: Send, Sync);

impl<T> LazyList<T> {
    /// Returns the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let list: LazyList<i32> = LazyList::new();
    /// assert!(list.is_empty().unwrap());
    /// assert!(list.is_forced());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { cell: None }
    }

    /// Wraps a computation producing the first node. Nothing runs until the
    /// list is forced.
    pub(crate) fn suspend<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Step<T> + 'static,
    {
        Self {
            cell: Some(Rc::new(Lazy::new(Box::new(thunk)))),
        }
    }

    /// Wraps an already computed node in a forced cell.
    pub(crate) fn ready(node: Node<T>) -> Self {
        match node {
            Node::Nil => Self::new(),
            node @ Node::Cons(..) => Self {
                cell: Some(Rc::new(Lazy::new_with_value(Ok(node)))),
            },
        }
    }

    /// Builds a list whose first node is computed by `thunk` on first demand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::{LazyList, Node};
    ///
    /// let list = LazyList::defer(|| Node::Cons(1, LazyList::new()));
    /// assert!(!list.is_forced());
    /// assert_eq!(list.to_vec().unwrap(), vec![1]);
    /// ```
    pub fn defer<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Node<T> + 'static,
    {
        Self::suspend(move || Ok(thunk()))
    }

    /// Prepends `head`, producing a forced cell that shares `self` as its tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.to_vec().unwrap(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn cons(&self, head: T) -> Self {
        Self::ready(Node::Cons(head, self.clone()))
    }

    /// Returns whether the first cell has been forced. Never forces.
    #[inline]
    pub fn is_forced(&self) -> bool {
        self.cell.as_ref().is_none_or(|cell| cell.is_initialized())
    }

    /// Returns whether both handles name the same cell.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.cell, &other.cell) {
            (None, None) => true,
            (Some(left), Some(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl<T: Clone> LazyList<T> {
    /// Forces the first cell and returns its node.
    ///
    /// The cell's computation runs only on the first call through any handle;
    /// later calls return the cached node, or replay the cached failure.
    ///
    /// # Returns
    ///
    /// A clone of the cached node. The tail inside a `Cons` is a handle on
    /// the shared next cell, so cloning the node never copies the list.
    ///
    /// # Errors
    ///
    /// Returns the error the cell's computation produced, if any.
    ///
    /// # Panics
    ///
    /// Panics if the cell's computation panicked earlier, or if the
    /// computation forces its own cell.
    pub fn force(&self) -> ListResult<Node<T>> {
        let Some(cell) = &self.cell else {
            return Ok(Node::Nil);
        };
        let step = cell.force();
        step.clone()
    }

    /// Splits off the head and the tail, or returns `None` for an empty list.
    ///
    /// # Errors
    ///
    /// Propagates a failure cached in the first cell.
    pub fn uncons(&self) -> ListResult<Option<(T, Self)>> {
        Ok(match self.force()? {
            Node::Nil => None,
            Node::Cons(head, tail) => Some((head, tail)),
        })
    }

    /// Returns the first element, if any.
    ///
    /// # Errors
    ///
    /// Propagates a failure cached in the first cell.
    pub fn peek(&self) -> ListResult<Option<T>> {
        Ok(self.uncons()?.map(|(head, _)| head))
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the list is empty.
    pub fn head(&self) -> ListResult<T> {
        self.peek()?.ok_or(ListError::EmptyList)
    }

    /// Returns the list without its first element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the list is empty.
    pub fn tail(&self) -> ListResult<Self> {
        self.uncons()?
            .map(|(_, tail)| tail)
            .ok_or(ListError::EmptyList)
    }

    /// Returns whether the list is empty, forcing only the first cell.
    ///
    /// # Errors
    ///
    /// Propagates a failure cached in the first cell.
    pub fn is_empty(&self) -> ListResult<bool> {
        Ok(matches!(self.force()?, Node::Nil))
    }
}

impl<T> Clone for LazyList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T> Default for LazyList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Handle identity: two lists are equal when they share a cell.
///
/// Element-wise comparison forces cells and may fail, so it lives in
/// [`LazyList::equal_by`] instead.
impl<T> PartialEq for LazyList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for LazyList<T> {}

/// Unwinds uniquely owned, forced cells one at a time so that dropping a long
/// list does not recurse once per node.
impl<T> Drop for LazyList<T> {
    fn drop(&mut self) {
        let mut next = self.cell.take();
        while let Some(cell) = next {
            next = match Rc::try_unwrap(cell) {
                Ok(cell) => match cell.into_value() {
                    Some(Ok(Node::Cons(_, mut tail))) => tail.cell.take(),
                    _ => None,
                },
                Err(_) => None,
            };
        }
    }
}

/// Shows the forced prefix only; unforced cells print as `..`.
impl<T: fmt::Debug> fmt::Debug for LazyList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("LazyList[")?;
        let mut current = self.clone();
        let mut first = true;
        loop {
            let Some(cell) = current.cell.clone() else {
                break;
            };
            let Some(step) = cell.get() else {
                if !first {
                    formatter.write_str(", ")?;
                }
                formatter.write_str("..")?;
                break;
            };
            match &*step {
                Ok(Node::Nil) => break,
                Ok(Node::Cons(head, tail)) => {
                    if !first {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{head:?}")?;
                    first = false;
                    current = tail.clone();
                }
                Err(error) => {
                    if !first {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "<{error}>")?;
                    break;
                }
            }
        }
        formatter.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell as CountCell;

    #[rstest]
    fn test_new_is_empty_and_forced() {
        let list: LazyList<i32> = LazyList::new();
        assert!(list.is_forced());
        assert_eq!(list.force(), Ok(Node::Nil));
        assert_eq!(list.peek(), Ok(None));
    }

    #[rstest]
    fn test_cons_is_pre_forced() {
        let list = LazyList::new().cons(1);
        assert!(list.is_forced());
        assert_eq!(list.head(), Ok(1));
        assert_eq!(list.tail().map(|tail| tail.is_empty()), Ok(Ok(true)));
    }

    #[rstest]
    fn test_suspension_runs_once_across_handles() {
        let calls = Rc::new(CountCell::new(0));
        let counter = Rc::clone(&calls);
        let list = LazyList::defer(move || {
            counter.set(counter.get() + 1);
            Node::Cons(7, LazyList::new())
        });
        let alias = list.clone();

        assert_eq!(calls.get(), 0);
        assert_eq!(list.head(), Ok(7));
        assert_eq!(alias.head(), Ok(7));
        assert_eq!(list.head(), Ok(7));
        assert_eq!(calls.get(), 1);
        assert!(alias.is_forced());
    }

    #[rstest]
    fn test_failure_is_replayed() {
        let calls = Rc::new(CountCell::new(0));
        let counter = Rc::clone(&calls);
        let list: LazyList<i32> = LazyList::suspend(move || {
            counter.set(counter.get() + 1);
            Err(ListError::NotFound)
        });

        assert_eq!(list.force(), Err(ListError::NotFound));
        assert_eq!(list.force(), Err(ListError::NotFound));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_head_and_tail_of_empty_fail() {
        let list: LazyList<i32> = LazyList::new();
        assert_eq!(list.head(), Err(ListError::EmptyList));
        assert_eq!(list.tail().err(), Some(ListError::EmptyList));
    }

    #[rstest]
    fn test_uncons_shares_tail() {
        let tail = LazyList::new().cons(2);
        let list = tail.cons(1);
        let (head, rest) = list.uncons().unwrap().unwrap();
        assert_eq!(head, 1);
        assert!(rest.ptr_eq(&tail));
    }

    #[rstest]
    fn test_debug_shows_forced_prefix_only() {
        let list = LazyList::range(1, 5);
        assert_eq!(format!("{list:?}"), "LazyList[..]");
        let _ = list.take(2).to_vec();
        assert_eq!(format!("{list:?}"), "LazyList[1, 2, ..]");
        let _ = list.to_vec();
        assert_eq!(format!("{list:?}"), "LazyList[1, 2, 3, 4, 5]");
    }

    #[rstest]
    fn test_drop_long_forced_list() {
        let list = LazyList::range(0, 200_000);
        assert_eq!(list.length(), Ok(200_001));
        drop(list);
    }
}
