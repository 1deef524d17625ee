//! Duplicate removal and sorting.
//!
//! The `unique*` family is lazy and keeps the first occurrence of each
//! element. Every call owns a fresh "seen" set, shared only by the cells of
//! the list it returns; since each cell is forced at most once, every source
//! element is offered to the set exactly once.
//!
//! Sorting needs every element, so the `sort*` family is eager and returns a
//! pre-forced list.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::rc::Rc;

use super::node::LazyList;
use crate::error::ListResult;

/// An element ordered by a caller-supplied comparator, so that a
/// `BTreeSet` can hold elements whose type has no `Ord` of its own.
struct OrderedBy<T, C> {
    element: T,
    compare: Rc<C>,
}

impl<T, C: Fn(&T, &T) -> Ordering> PartialEq for OrderedBy<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, C: Fn(&T, &T) -> Ordering> Eq for OrderedBy<T, C> {}

impl<T, C: Fn(&T, &T) -> Ordering> PartialOrd for OrderedBy<T, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, C: Fn(&T, &T) -> Ordering> Ord for OrderedBy<T, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.compare)(&self.element, &other.element)
    }
}

impl<T: Ord + Clone + 'static> LazyList<T> {
    /// Lazily drops elements equal to an earlier one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::from(vec![3, 1, 3, 2, 1]);
    /// assert_eq!(list.unique().to_vec().unwrap(), vec![3, 1, 2]);
    /// ```
    #[must_use]
    pub fn unique(&self) -> Self {
        let seen = Rc::new(RefCell::new(BTreeSet::new()));
        self.filter(move |element| seen.borrow_mut().insert(element.clone()))
    }

    /// Forces the whole list and returns it sorted. Not stable.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn sort(&self) -> ListResult<Self> {
        self.sort_by(Ord::cmp)
    }

    /// Forces the whole list and returns it sorted, keeping equal elements in
    /// their original order.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn stable_sort(&self) -> ListResult<Self> {
        self.stable_sort_by(Ord::cmp)
    }
}

impl<T: Clone + 'static> LazyList<T> {
    /// Lazily drops elements that `compare` orders as equal to an earlier
    /// one. `compare` must be a total order.
    pub fn unique_by<C>(&self, compare: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'static,
    {
        let compare = Rc::new(compare);
        let seen = Rc::new(RefCell::new(BTreeSet::new()));
        self.filter(move |element| {
            seen.borrow_mut().insert(OrderedBy {
                element: element.clone(),
                compare: Rc::clone(&compare),
            })
        })
    }

    /// Lazily drops elements that `equal` relates to an earlier kept one.
    ///
    /// Every element is compared against all kept elements, so this is
    /// quadratic; prefer [`unique`](Self::unique) or
    /// [`unique_by`](Self::unique_by) when an order is available.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let words = LazyList::from(vec!["Apple", "avocado", "Banana", "apple"]);
    /// let by_initial = words.unique_eq(|a: &&str, b: &&str| {
    ///     a.chars().next().map(|c| c.to_ascii_lowercase())
    ///         == b.chars().next().map(|c| c.to_ascii_lowercase())
    /// });
    /// assert_eq!(by_initial.to_vec().unwrap(), vec!["Apple", "Banana"]);
    /// ```
    pub fn unique_eq<E>(&self, equal: E) -> Self
    where
        E: Fn(&T, &T) -> bool + 'static,
    {
        let kept: Rc<RefCell<Vec<T>>> = Rc::new(RefCell::new(Vec::new()));
        self.filter(move |element| {
            let mut kept = kept.borrow_mut();
            if kept.iter().any(|earlier| equal(earlier, element)) {
                return false;
            }
            kept.push(element.clone());
            true
        })
    }

    /// Forces the whole list and returns it sorted by `compare`. Not stable.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn sort_by<C>(&self, compare: C) -> ListResult<Self>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut elements = self.to_vec()?;
        tracing::trace!(length = elements.len(), "sorting lazy list");
        elements.sort_unstable_by(compare);
        Ok(elements.into_iter().collect())
    }

    /// Forces the whole list and returns it sorted by `compare`, keeping
    /// equal elements in their original order.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let pairs = LazyList::from(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
    /// let sorted = pairs.stable_sort_by(|x, y| x.0.cmp(&y.0)).unwrap();
    /// assert_eq!(sorted.to_vec().unwrap(), vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    /// ```
    pub fn stable_sort_by<C>(&self, compare: C) -> ListResult<Self>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut elements = self.to_vec()?;
        tracing::trace!(length = elements.len(), "stable sorting lazy list");
        elements.sort_by(compare);
        Ok(elements.into_iter().collect())
    }
}

#[cfg(feature = "fxhash")]
impl<T: std::hash::Hash + Eq + Clone + 'static> LazyList<T> {
    /// Lazily drops elements equal to an earlier one, remembering seen
    /// elements in an `FxHashSet`.
    #[must_use]
    pub fn unique_hashed(&self) -> Self {
        let seen = Rc::new(RefCell::new(rustc_hash::FxHashSet::default()));
        self.filter(move |element| seen.borrow_mut().insert(element.clone()))
    }
}
