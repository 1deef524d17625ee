//! Traversal, mapping, folding and filtering.
//!
//! `map`, `map_indexed`, `filter`, `filter_map`, `take_while`, `drop_while`
//! and `lazy_fold_right` return new suspensions: the supplied closure runs
//! once per element, at the moment that position of the result is forced.
//! The `for_each` and `fold` operations are eager.

use std::rc::Rc;

use super::node::{LazyList, Node};
use crate::error::ListResult;

impl<T: Clone + 'static> LazyList<T> {
    /// Lazily applies `function` to every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let squares = LazyList::range(1, 10).map(|x| x * x);
    /// assert_eq!(squares.take(3).to_vec().unwrap(), vec![1, 4, 9]);
    /// ```
    pub fn map<U, F>(&self, function: F) -> LazyList<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        Self::map_from(self.clone(), Rc::new(function))
    }

    fn map_from<U, F>(list: Self, function: Rc<F>) -> LazyList<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        LazyList::suspend(move || {
            Ok(match list.force()? {
                Node::Nil => Node::Nil,
                Node::Cons(head, tail) => {
                    let mapped = function(head);
                    Node::Cons(mapped, Self::map_from(tail, function))
                }
            })
        })
    }

    /// Lazily applies `function` to every element and its position.
    pub fn map_indexed<U, F>(&self, function: F) -> LazyList<U>
    where
        U: 'static,
        F: Fn(usize, T) -> U + 'static,
    {
        Self::map_indexed_from(self.clone(), 0, Rc::new(function))
    }

    fn map_indexed_from<U, F>(list: Self, index: usize, function: Rc<F>) -> LazyList<U>
    where
        U: 'static,
        F: Fn(usize, T) -> U + 'static,
    {
        LazyList::suspend(move || {
            Ok(match list.force()? {
                Node::Nil => Node::Nil,
                Node::Cons(head, tail) => {
                    let mapped = function(index, head);
                    Node::Cons(mapped, Self::map_indexed_from(tail, index + 1, function))
                }
            })
        })
    }

    /// Calls `function` on every element, front to back. Forces the whole
    /// list.
    ///
    /// # Errors
    ///
    /// Propagates the first failure met while forcing.
    pub fn for_each<F>(&self, mut function: F) -> ListResult<()>
    where
        F: FnMut(T),
    {
        let mut current = self.clone();
        while let Some((head, tail)) = current.uncons()? {
            function(head);
            current = tail;
        }
        Ok(())
    }

    /// Calls `function` on every element and its position.
    ///
    /// # Errors
    ///
    /// Propagates the first failure met while forcing.
    pub fn for_each_indexed<F>(&self, mut function: F) -> ListResult<()>
    where
        F: FnMut(usize, T),
    {
        let mut index = 0;
        self.for_each(|element| {
            function(index, element);
            index += 1;
        })
    }

    /// Left fold. Forces the whole list.
    ///
    /// # Errors
    ///
    /// Propagates the first failure met while forcing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let sum = LazyList::range(1, 5).fold_left(0, |accumulator, x| accumulator + x);
    /// assert_eq!(sum, Ok(15));
    /// ```
    pub fn fold_left<B, F>(&self, initial: B, mut function: F) -> ListResult<B>
    where
        F: FnMut(B, T) -> B,
    {
        let mut accumulator = initial;
        let mut current = self.clone();
        while let Some((head, tail)) = current.uncons()? {
            accumulator = function(accumulator, head);
            current = tail;
        }
        Ok(accumulator)
    }

    /// Right fold. Forces the whole list before combining anything.
    ///
    /// # Errors
    ///
    /// Propagates the first failure met while forcing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::from(vec![1, 2, 3, 4]);
    /// // 1 - (2 - (3 - (4 - 0)))
    /// assert_eq!(list.fold_right(0, |x, accumulator| x - accumulator), Ok(-2));
    /// ```
    pub fn fold_right<B, F>(&self, initial: B, mut function: F) -> ListResult<B>
    where
        F: FnMut(T, B) -> B,
    {
        let elements = self.to_vec()?;
        Ok(elements
            .into_iter()
            .rev()
            .fold(initial, |accumulator, element| function(element, accumulator)))
    }

    /// Right fold whose result is itself a lazy list.
    ///
    /// `function` receives each element together with the unforced fold of
    /// the rest, and is only called when the corresponding position of the
    /// result is forced. This is what makes it safe on infinite inputs as long
    /// as `function` does not force the rest eagerly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// // Duplicate every element of an infinite list.
    /// let doubled = LazyList::range(1, i64::MAX)
    ///     .lazy_fold_right(LazyList::new(), |x, rest| rest.cons(x).cons(x));
    /// assert_eq!(doubled.take(4).to_vec().unwrap(), vec![1, 1, 2, 2]);
    /// ```
    pub fn lazy_fold_right<U, F>(&self, initial: LazyList<U>, function: F) -> LazyList<U>
    where
        U: Clone + 'static,
        F: Fn(T, LazyList<U>) -> LazyList<U> + 'static,
    {
        Self::lazy_fold_right_from(self.clone(), initial, Rc::new(function))
    }

    fn lazy_fold_right_from<U, F>(list: Self, initial: LazyList<U>, function: Rc<F>) -> LazyList<U>
    where
        U: Clone + 'static,
        F: Fn(T, LazyList<U>) -> LazyList<U> + 'static,
    {
        LazyList::suspend(move || match list.force()? {
            Node::Nil => initial.force(),
            Node::Cons(head, tail) => {
                let rest = Self::lazy_fold_right_from(tail, initial, Rc::clone(&function));
                function(head, rest).force()
            }
        })
    }

    /// Lazily keeps the elements satisfying `predicate`.
    ///
    /// Forcing a position of the result scans ahead in the source until the
    /// next match, so filtering an infinite list with no further match never
    /// returns.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::filter_from(self.clone(), Rc::new(predicate))
    }

    fn filter_from<P>(list: Self, predicate: Rc<P>) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::suspend(move || {
            let mut current = list;
            loop {
                match current.force()? {
                    Node::Nil => return Ok(Node::Nil),
                    Node::Cons(head, tail) => {
                        if predicate(&head) {
                            return Ok(Node::Cons(head, Self::filter_from(tail, predicate)));
                        }
                        current = tail;
                    }
                }
            }
        })
    }

    /// Lazily maps and filters in one pass, keeping the `Some` results.
    pub fn filter_map<U, F>(&self, function: F) -> LazyList<U>
    where
        U: 'static,
        F: Fn(T) -> Option<U> + 'static,
    {
        Self::filter_map_from(self.clone(), Rc::new(function))
    }

    fn filter_map_from<U, F>(list: Self, function: Rc<F>) -> LazyList<U>
    where
        U: 'static,
        F: Fn(T) -> Option<U> + 'static,
    {
        LazyList::suspend(move || {
            let mut current = list;
            loop {
                match current.force()? {
                    Node::Nil => return Ok(Node::Nil),
                    Node::Cons(head, tail) => {
                        if let Some(mapped) = function(head) {
                            return Ok(Node::Cons(mapped, Self::filter_map_from(tail, function)));
                        }
                        current = tail;
                    }
                }
            }
        })
    }

    /// Lazily keeps the longest prefix whose elements satisfy `predicate`.
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::take_while_from(self.clone(), Rc::new(predicate))
    }

    fn take_while_from<P>(list: Self, predicate: Rc<P>) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::suspend(move || {
            Ok(match list.force()? {
                Node::Cons(head, tail) if predicate(&head) => {
                    Node::Cons(head, Self::take_while_from(tail, predicate))
                }
                _ => Node::Nil,
            })
        })
    }

    /// Lazily skips the longest prefix whose elements satisfy `predicate`.
    pub fn drop_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let list = self.clone();
        Self::suspend(move || {
            let mut current = list;
            loop {
                match current.force()? {
                    Node::Cons(head, tail) if predicate(&head) => current = tail,
                    node => return Ok(node),
                }
            }
        })
    }
}
