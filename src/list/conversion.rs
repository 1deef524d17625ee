//! Conversions between lazy lists and standard collections, iterators and
//! text.
//!
//! Eager conversions (`FromIterator`, `from_slice`, `From<[T; N]>`) build a
//! chain of pre-forced cells. Lazy conversions (`from_vec`, `From<Vec<T>>`,
//! `from_iterator`) pull one element per forced cell.

use std::iter::FusedIterator;

use super::node::LazyList;
use crate::error::ListResult;

// =============================================================================
// Iterator
// =============================================================================

/// A cursor over a [`LazyList`], yielding each element as it is forced.
///
/// Forcing may fail, so items are `ListResult<T>`. After yielding an error
/// the iterator is exhausted. Cloning the iterator gives an independent
/// cursor over the same shared cells.
///
/// `Iterator::count` counts items, so a trailing error counts as one. Use
/// [`try_count`](Self::try_count) to count elements and surface the error.
#[derive(Clone)]
pub struct Iter<T> {
    list: LazyList<T>,
    failed: bool,
}

impl<T: Clone> Iter<T> {
    /// Forces the remainder and counts its elements.
    ///
    /// # Errors
    ///
    /// Propagates the failure met while forcing, instead of counting it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::error::ListError;
    /// use lazylist::list::LazyList;
    ///
    /// let mismatched = LazyList::range(1, 3).map2(&LazyList::range(1, 2), |a, b| a + b);
    /// assert_eq!(mismatched.iter().count(), 3);
    /// assert_eq!(mismatched.iter().try_count(), Err(ListError::DifferentListSize("map2")));
    /// ```
    pub fn try_count(mut self) -> ListResult<usize> {
        self.try_fold(0, |count, element| element.map(|_| count + 1))
    }
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = ListResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.list.uncons() {
            Ok(Some((head, tail))) => {
                self.list = tail;
                Some(Ok(head))
            }
            Ok(None) => None,
            Err(error) => {
                self.failed = true;
                self.list = LazyList::new();
                Some(Err(error))
            }
        }
    }
}

impl<T: Clone> FusedIterator for Iter<T> {}

impl<T> LazyList<T> {
    /// Returns a cursor over the elements, starting at the first cell.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::range(1, i64::MAX);
    /// let evens: Vec<i64> = list
    ///     .iter()
    ///     .map(Result::unwrap)
    ///     .filter(|x| x % 2 == 0)
    ///     .take(3)
    ///     .collect();
    /// assert_eq!(evens, vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<T> {
        Iter {
            list: self.clone(),
            failed: false,
        }
    }
}

impl<T: Clone> IntoIterator for LazyList<T> {
    type Item = ListResult<T>;
    type IntoIter = Iter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter {
            list: self,
            failed: false,
        }
    }
}

impl<T: Clone> IntoIterator for &LazyList<T> {
    type Item = ListResult<T>;
    type IntoIter = Iter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Building lists
// =============================================================================

impl<T: Clone + 'static> LazyList<T> {
    /// Builds a pre-forced list from a vector, last element first.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let mut list = Self::new();
        while let Some(element) = elements.pop() {
            list = list.cons(element);
        }
        list
    }

    /// Lazily wraps an iterator; each forced cell pulls one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let list = LazyList::from_iterator(0..);
    /// assert_eq!(list.take(3).to_vec().unwrap(), vec![0, 1, 2]);
    /// ```
    pub fn from_iterator<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        let mut iterator = iterable.into_iter();
        Self::from_fn(move || iterator.next())
    }

    /// Lazily wraps a vector, moving one element out per forced cell.
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_iterator(elements)
    }

    /// Builds a pre-forced list holding clones of the slice's elements.
    #[must_use]
    pub fn from_slice(elements: &[T]) -> Self {
        Self::build_from_vec(elements.to_vec())
    }

    /// Forces the whole list and collects its elements.
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
    /// assert_eq!(LazyList::range(1, 3).to_vec(), Ok(vec![1, 2, 3]));
    /// ```
    pub fn to_vec(&self) -> ListResult<Vec<T>> {
        self.iter().collect()
    }

    /// Forces the whole list and collects it into a boxed slice.
    ///
    /// # Errors
    ///
    /// Propagates the first failure met while forcing.
    pub fn to_boxed_slice(&self) -> ListResult<Box<[T]>> {
        Ok(self.to_vec()?.into_boxed_slice())
    }
}

impl<T: Clone + 'static> FromIterator<T> for LazyList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        Self::build_from_vec(elements)
    }
}

impl<T: Clone + 'static> From<Vec<T>> for LazyList<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: Clone + 'static, const N: usize> From<[T; N]> for LazyList<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

// =============================================================================
// Text
// =============================================================================

impl LazyList<char> {
    /// Lazily reads the characters of `text`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let shouted = LazyList::from_text("abc").map(|c| c.to_ascii_uppercase());
    /// assert_eq!(shouted.to_text().unwrap(), "ABC");
    /// ```
    pub fn from_text(text: &str) -> Self {
        let characters: Vec<char> = text.chars().collect();
        Self::from_vec(characters)
    }

    /// Lazily reads characters from a character stream, one per forced cell.
    pub fn from_chars<I>(characters: I) -> Self
    where
        I: IntoIterator<Item = char>,
        I::IntoIter: 'static,
    {
        Self::from_iterator(characters)
    }

    /// Forces the whole list and collects it into a string.
    ///
    /// # Errors
    ///
    /// Propagates the first failure met while forcing.
    pub fn to_text(&self) -> ListResult<String> {
        self.iter().collect()
    }
}
