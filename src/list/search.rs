//! Searching and membership tests.
//!
//! Forward searches stop at the first hit. Backward searches (`rfind*`,
//! `rindex_of`) remember the last hit and therefore always walk the whole
//! list. Every search comes in an optional form and, where it makes sense, a
//! strict `*_required` form failing with [`ListError::NotFound`].

use std::rc::Rc;

use super::node::LazyList;
use crate::error::{ListError, ListResult};

impl<T: Clone + 'static> LazyList<T> {
    /// Returns the first element satisfying `predicate`.
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
    /// let list = LazyList::range(1, i64::MAX);
    /// assert_eq!(list.find(|x| x * x > 50), Ok(Some(8)));
    /// ```
    pub fn find<P>(&self, predicate: P) -> ListResult<Option<T>>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.find_indexed(predicate)?.map(|(_, element)| element))
    }

    /// Like [`find`](Self::find), failing when nothing matches.
    ///
    /// # Errors
    ///
    /// [`ListError::NotFound`] if no element satisfies `predicate`.
    pub fn find_required<P>(&self, predicate: P) -> ListResult<T>
    where
        P: Fn(&T) -> bool,
    {
        self.find(predicate)?.ok_or(ListError::NotFound)
    }

    /// Returns the first element satisfying `predicate` with its position.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn find_indexed<P>(&self, predicate: P) -> ListResult<Option<(usize, T)>>
    where
        P: Fn(&T) -> bool,
    {
        let mut index = 0;
        let mut current = self.clone();
        while let Some((head, tail)) = current.uncons()? {
            if predicate(&head) {
                return Ok(Some((index, head)));
            }
            index += 1;
            current = tail;
        }
        Ok(None)
    }

    /// Returns the position of the first element satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn find_index<P>(&self, predicate: P) -> ListResult<Option<usize>>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.find_indexed(predicate)?.map(|(index, _)| index))
    }

    /// Returns the last element satisfying `predicate`. Walks the whole list.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn rfind<P>(&self, predicate: P) -> ListResult<Option<T>>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.rfind_indexed(predicate)?.map(|(_, element)| element))
    }

    /// Like [`rfind`](Self::rfind), failing when nothing matches.
    ///
    /// # Errors
    ///
    /// [`ListError::NotFound`] if no element satisfies `predicate`.
    pub fn rfind_required<P>(&self, predicate: P) -> ListResult<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rfind(predicate)?.ok_or(ListError::NotFound)
    }

    /// Returns the last element satisfying `predicate` with its position.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn rfind_indexed<P>(&self, predicate: P) -> ListResult<Option<(usize, T)>>
    where
        P: Fn(&T) -> bool,
    {
        let mut last_hit = None;
        let mut index = 0;
        let mut current = self.clone();
        while let Some((head, tail)) = current.uncons()? {
            if predicate(&head) {
                last_hit = Some((index, head));
            }
            index += 1;
            current = tail;
        }
        Ok(last_hit)
    }

    /// Returns whether any element satisfies `predicate`, stopping at the
    /// first hit.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn exists<P>(&self, predicate: P) -> ListResult<bool>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.find_indexed(predicate)?.is_some())
    }

    /// Returns whether every element satisfies `predicate`, stopping at the
    /// first miss.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn for_all<P>(&self, predicate: P) -> ListResult<bool>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.find_indexed(|element| !predicate(element))?.is_none())
    }
}

impl<T: PartialEq + Clone + 'static> LazyList<T> {
    /// Returns whether the list contains an element equal to `target`.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn contains(&self, target: &T) -> ListResult<bool> {
        self.exists(|element| element == target)
    }

    /// Returns the position of the first element equal to `target`.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn index_of(&self, target: &T) -> ListResult<Option<usize>> {
        self.find_index(|element| element == target)
    }

    /// Returns the position of the last element equal to `target`.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn rindex_of(&self, target: &T) -> ListResult<Option<usize>> {
        Ok(self
            .rfind_indexed(|element| element == target)?
            .map(|(index, _)| index))
    }
}

impl<U: 'static> LazyList<Rc<U>> {
    /// Returns whether the list holds the very allocation `target` points to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    /// use std::rc::Rc;
    ///
    /// let shared = Rc::new(1);
    /// let list = LazyList::from(vec![Rc::new(1), Rc::clone(&shared)]);
    /// assert_eq!(list.index_of_identical(&shared), Ok(Some(1)));
    /// assert_eq!(list.contains_identical(&Rc::new(1)), Ok(false));
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn contains_identical(&self, target: &Rc<U>) -> ListResult<bool> {
        self.exists(|element| Rc::ptr_eq(element, target))
    }

    /// Returns the position of the first element sharing `target`'s
    /// allocation.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn index_of_identical(&self, target: &Rc<U>) -> ListResult<Option<usize>> {
        self.find_index(|element| Rc::ptr_eq(element, target))
    }
}

impl<K: PartialEq + Clone + 'static, V: Clone + 'static> LazyList<(K, V)> {
    /// Looks up the value of the first pair whose key equals `key`.
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
    /// let table = LazyList::from(vec![("one", 1), ("two", 2), ("one", 3)]);
    /// assert_eq!(table.assoc(&"one"), Ok(Some(1)));
    /// assert_eq!(table.assoc(&"three"), Ok(None));
    /// ```
    pub fn assoc(&self, key: &K) -> ListResult<Option<V>> {
        Ok(self.find(|(candidate, _)| candidate == key)?.map(|(_, value)| value))
    }

    /// Like [`assoc`](Self::assoc), failing when the key is absent.
    ///
    /// # Errors
    ///
    /// [`ListError::NotFound`] if no pair has the key.
    pub fn assoc_required(&self, key: &K) -> ListResult<V> {
        self.assoc(key)?.ok_or(ListError::NotFound)
    }

    /// Returns whether some pair has the key.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn contains_key(&self, key: &K) -> ListResult<bool> {
        self.exists(|(candidate, _)| candidate == key)
    }
}

impl<K: 'static, V: Clone + 'static> LazyList<(Rc<K>, V)> {
    /// Looks up the value of the first pair whose key is the allocation
    /// `key` points to.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn assoc_identical(&self, key: &Rc<K>) -> ListResult<Option<V>> {
        Ok(self
            .find(|(candidate, _)| Rc::ptr_eq(candidate, key))?
            .map(|(_, value)| value))
    }

    /// Returns whether some pair's key is the allocation `key` points to.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn contains_key_identical(&self, key: &Rc<K>) -> ListResult<bool> {
        self.exists(|(candidate, _)| Rc::ptr_eq(candidate, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> LazyList<i32> {
        LazyList::from(vec![3, 8, 5, 8, 1])
    }

    #[rstest]
    fn test_find_and_rfind() {
        assert_eq!(sample().find(|x| *x > 4), Ok(Some(8)));
        assert_eq!(sample().rfind(|x| *x > 4), Ok(Some(8)));
        assert_eq!(sample().find_indexed(|x| *x > 4), Ok(Some((1, 8))));
        assert_eq!(sample().rfind_indexed(|x| *x > 4), Ok(Some((3, 8))));
        assert_eq!(sample().find(|x| *x > 100), Ok(None));
    }

    #[rstest]
    fn test_required_variants_fail_with_not_found() {
        assert_eq!(sample().find_required(|x| *x > 100), Err(ListError::NotFound));
        assert_eq!(sample().rfind_required(|x| *x > 100), Err(ListError::NotFound));
        assert_eq!(sample().rfind_required(|x| *x < 4), Ok(1));
    }

    #[rstest]
    fn test_find_stops_early_on_infinite_list() {
        let list = LazyList::range(1, i64::MAX);
        assert_eq!(list.find_index(|x| *x == 10), Ok(Some(9)));
        assert_eq!(list.exists(|x| *x > 1_000), Ok(true));
        assert_eq!(list.for_all(|x| *x < 50), Ok(false));
    }

    #[rstest]
    fn test_index_of_and_contains() {
        assert_eq!(sample().index_of(&8), Ok(Some(1)));
        assert_eq!(sample().rindex_of(&8), Ok(Some(3)));
        assert_eq!(sample().index_of(&42), Ok(None));
        assert_eq!(sample().contains(&5), Ok(true));
        assert_eq!(sample().contains(&6), Ok(false));
    }

    #[rstest]
    fn test_for_all_on_empty_is_true() {
        let empty: LazyList<i32> = LazyList::new();
        assert_eq!(empty.for_all(|_| false), Ok(true));
        assert_eq!(empty.exists(|_| true), Ok(false));
    }

    #[rstest]
    fn test_assoc() {
        let table = LazyList::from(vec![(1, "a"), (2, "b")]);
        assert_eq!(table.assoc(&2), Ok(Some("b")));
        assert_eq!(table.assoc_required(&3), Err(ListError::NotFound));
        assert_eq!(table.contains_key(&1), Ok(true));
    }

    #[rstest]
    fn test_identity_lookup_ignores_equal_values() {
        let key = Rc::new("key".to_string());
        let lookalike = Rc::new("key".to_string());
        let table = LazyList::from(vec![(Rc::clone(&lookalike), 1), (Rc::clone(&key), 2)]);
        assert_eq!(table.assoc_identical(&key), Ok(Some(2)));
        assert_eq!(table.contains_key_identical(&Rc::new("key".to_string())), Ok(false));
    }
}
