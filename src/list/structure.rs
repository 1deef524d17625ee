//! Structural operations: appending, flattening, reversing, slicing,
//! positional access, removal and structural equality.

use std::rc::Rc;

use super::node::{LazyList, Node};
use crate::error::{ListError, ListResult};

impl<T: Clone + 'static> LazyList<T> {
    /// Lazily appends `other`.
    ///
    /// `other` is not forced until `self` is exhausted, so a failure stored
    /// in `other` stays invisible until then.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::from(vec![1, 2]).append(&LazyList::from(vec![3, 4]));
    /// assert_eq!(list.to_vec().unwrap(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.ptr_eq(&Self::new()) {
            return other.clone();
        }
        Self::append_from(self.clone(), other.clone())
    }

    fn append_from(front: Self, back: Self) -> Self {
        Self::suspend(move || match front.force()? {
            Node::Nil => back.force(),
            Node::Cons(head, tail) => Ok(Node::Cons(head, Self::append_from(tail, back))),
        })
    }

    /// Forces `self` completely and returns a forced copy of it ending in
    /// `other`. `other` itself is not forced.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing `self`.
    pub fn eager_append(&self, other: &Self) -> ListResult<Self> {
        let elements = self.to_vec()?;
        Ok(elements
            .into_iter()
            .rev()
            .fold(other.clone(), |tail, element| tail.cons(element)))
    }

    /// Lazily concatenates a sequence of lists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::concat(vec![
    ///     LazyList::from(vec![1]),
    ///     LazyList::new(),
    ///     LazyList::from(vec![2, 3]),
    /// ]);
    /// assert_eq!(list.to_vec().unwrap(), vec![1, 2, 3]);
    /// ```
    pub fn concat<I>(lists: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        lists.into_iter().collect::<LazyList<Self>>().flatten()
    }

    /// Returns the list reversed. Forces the whole list.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn reverse(&self) -> ListResult<Self> {
        let elements = self.to_vec()?;
        tracing::trace!(length = elements.len(), "reversing lazy list");
        Ok(elements.into_iter().collect())
    }

    /// Prepends the elements of `self`, in reverse order, onto `accumulator`.
    /// Forces the whole of `self` but not `accumulator`.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::from(vec![3, 2, 1]).reverse_onto(&LazyList::from(vec![4, 5]));
    /// assert_eq!(list.unwrap().to_vec().unwrap(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn reverse_onto(&self, accumulator: &Self) -> ListResult<Self> {
        self.fold_left(accumulator.clone(), |reversed, element| reversed.cons(element))
    }

    /// Lazily keeps at most the first `count` elements. Shorter lists are
    /// returned whole; `take(0)` forces nothing.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        Self::take_from(self.clone(), count)
    }

    fn take_from(list: Self, count: usize) -> Self {
        if count == 0 {
            return Self::new();
        }
        Self::suspend(move || {
            Ok(match list.force()? {
                Node::Nil => Node::Nil,
                Node::Cons(head, tail) => Node::Cons(head, Self::take_from(tail, count - 1)),
            })
        })
    }

    /// Skips the first `count` elements, forcing them.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidIndex`] if the list has fewer than `count`
    /// elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::error::ListError;
    /// use lazylist::list::LazyList;
    ///
    /// assert_eq!(LazyList::range(1, 5).drop(3).unwrap().to_vec().unwrap(), vec![4, 5]);
    /// assert_eq!(LazyList::range(1, 5).drop(10).err(), Some(ListError::InvalidIndex(10)));
    /// ```
    pub fn drop(&self, count: usize) -> ListResult<Self> {
        let mut current = self.clone();
        for walked in 0..count {
            match current.force()? {
                Node::Cons(_, tail) => current = tail,
                Node::Nil => {
                    tracing::debug!(count, walked, "drop ran past the end of the list");
                    return Err(ListError::InvalidIndex(count));
                }
            }
        }
        Ok(current)
    }

    /// Splits the list after `count` elements.
    ///
    /// The first half is [`take(count)`](Self::take). The second half is lazy:
    /// forcing it re-derives [`drop(count)`](Self::drop) from the original
    /// list, and fails with [`ListError::InvalidIndex`] if the list is too
    /// short. Either half can be discarded without affecting the other.
    ///
    /// # Arguments
    ///
    /// * `count` - The number of elements in the first half
    ///
    /// # Returns
    ///
    /// The pair `(front, rest)`. Building the pair forces nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::error::ListError;
    /// use lazylist::list::LazyList;
    ///
    /// let (front, rest) = LazyList::range(1, 5).split_at(2);
    /// assert_eq!(front.to_vec(), Ok(vec![1, 2]));
    /// assert_eq!(rest.to_vec(), Ok(vec![3, 4, 5]));
    ///
    /// let (_, missing) = LazyList::range(1, 2).split_at(3);
    /// assert_eq!(missing.to_vec(), Err(ListError::InvalidIndex(3)));
    /// ```
    #[must_use]
    pub fn split_at(&self, count: usize) -> (Self, Self) {
        let original = self.clone();
        let rest = Self::suspend(move || original.drop(count)?.force());
        (self.take(count), rest)
    }

    /// Counts the elements. Forces the whole list.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn length(&self) -> ListResult<usize> {
        self.fold_left(0, |count, _| count + 1)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidIndex`] if the list is too short.
    pub fn at(&self, index: usize) -> ListResult<T> {
        self.get(index)?.ok_or_else(|| {
            tracing::debug!(index, "positional access ran past the end of the list");
            ListError::InvalidIndex(index)
        })
    }

    /// Returns the element at `index`, or `None` if the list is too short.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn get(&self, index: usize) -> ListResult<Option<T>> {
        let mut remaining = index;
        let mut current = self.clone();
        while let Some((head, tail)) = current.uncons()? {
            if remaining == 0 {
                return Ok(Some(head));
            }
            remaining -= 1;
            current = tail;
        }
        Ok(None)
    }

    /// Returns whether [`at(index)`](Self::at) would fail, forcing at most
    /// `index + 1` cells.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn would_at_fail(&self, index: usize) -> ListResult<bool> {
        Ok(self.get(index)?.is_none())
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the list is empty.
    pub fn first(&self) -> ListResult<T> {
        self.head()
    }

    /// Returns the last element. Forces the whole list.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the list is empty.
    pub fn last(&self) -> ListResult<T> {
        self.fold_left(None, |_, element| Some(element))?
            .ok_or(ListError::EmptyList)
    }

    /// Lazily removes the first element satisfying `predicate`.
    pub fn remove_if<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::remove_first_from(self.clone(), Rc::new(predicate))
    }

    fn remove_first_from<P>(list: Self, predicate: Rc<P>) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::suspend(move || match list.force()? {
            Node::Nil => Ok(Node::Nil),
            Node::Cons(head, tail) if predicate(&head) => tail.force(),
            Node::Cons(head, tail) => Ok(Node::Cons(head, Self::remove_first_from(tail, predicate))),
        })
    }

    /// Lazily removes every element satisfying `predicate`.
    pub fn remove_all_such_that<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.filter(move |element| !predicate(element))
    }

    /// Compares two lists element by element with `equal`.
    ///
    /// Returns `false` as soon as an element differs or one list ends before
    /// the other; a length mismatch is an answer here, not an error.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn equal_by<U, E>(&self, other: &LazyList<U>, equal: E) -> ListResult<bool>
    where
        U: Clone + 'static,
        E: Fn(&T, &U) -> bool,
    {
        let mut left = self.clone();
        let mut right = other.clone();
        loop {
            match (left.force()?, right.force()?) {
                (Node::Nil, Node::Nil) => return Ok(true),
                (Node::Cons(left_head, left_tail), Node::Cons(right_head, right_tail)) => {
                    if !equal(&left_head, &right_head) {
                        return Ok(false);
                    }
                    left = left_tail;
                    right = right_tail;
                }
                _ => return Ok(false),
            }
        }
    }
}

impl<T: PartialEq + Clone + 'static> LazyList<T> {
    /// Lazily removes the first element equal to `target`.
    #[must_use]
    pub fn remove(&self, target: T) -> Self {
        self.remove_if(move |element| *element == target)
    }

    /// Lazily removes every element equal to `target`.
    #[must_use]
    pub fn remove_all(&self, target: T) -> Self {
        self.remove_all_such_that(move |element| *element == target)
    }

    /// Element-wise equality with `==`. See [`equal_by`](Self::equal_by).
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn equal(&self, other: &Self) -> ListResult<bool> {
        self.equal_by(other, |left, right| left == right)
    }
}

impl<T: Clone + 'static> LazyList<LazyList<T>> {
    /// Lazily concatenates the inner lists.
    ///
    /// Forcing a position of the result forces only the outer cells and the
    /// inner cells needed to reach it; runs of empty inner lists are skipped
    /// in a loop.
    #[must_use]
    pub fn flatten(&self) -> LazyList<T> {
        Self::flatten_from(self.clone(), LazyList::new())
    }

    fn flatten_from(outer: Self, inner: LazyList<T>) -> LazyList<T> {
        LazyList::suspend(move || {
            let mut outer = outer;
            let mut inner = inner;
            loop {
                match inner.force()? {
                    Node::Cons(head, tail) => {
                        return Ok(Node::Cons(head, Self::flatten_from(outer, tail)));
                    }
                    Node::Nil => match outer.force()? {
                        Node::Nil => return Ok(Node::Nil),
                        Node::Cons(next_inner, rest) => {
                            inner = next_inner;
                            outer = rest;
                        }
                    },
                }
            }
        })
    }
}
