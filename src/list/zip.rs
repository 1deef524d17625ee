//! Operations walking two lists in lockstep.
//!
//! Every operation here fails with [`ListError::DifferentListSize`] as soon
//! as one list ends while the other still has elements. The check is made
//! one link at a time, never by comparing precomputed lengths, so pairing a
//! finite list with an infinite one fails cleanly once the finite one ends.
//! `map2` and `zip` are lazy and report the mismatch when the mismatching
//! position is forced.

use std::rc::Rc;

use super::node::{LazyList, Node};
use crate::error::{ListError, ListResult};

/// One lockstep step: both heads and tails, or the end of both lists.
type Pair<T, U> = Option<((T, LazyList<T>), (U, LazyList<U>))>;

fn step_both<T, U>(
    operation: &'static str,
    left: &LazyList<T>,
    right: &LazyList<U>,
) -> ListResult<Pair<T, U>>
where
    T: Clone,
    U: Clone,
{
    match (left.force()?, right.force()?) {
        (Node::Nil, Node::Nil) => Ok(None),
        (Node::Cons(left_head, left_tail), Node::Cons(right_head, right_tail)) => {
            Ok(Some(((left_head, left_tail), (right_head, right_tail))))
        }
        _ => {
            tracing::debug!(operation, "lockstep traversal met lists of different sizes");
            Err(ListError::DifferentListSize(operation))
        }
    }
}

impl<T: Clone + 'static> LazyList<T> {
    /// Lazily combines the elements of two lists pairwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::error::ListError;
    /// use lazylist::list::LazyList;
    ///
    /// let sums = LazyList::range(1, 3).map2(&LazyList::range(10, 12), |a, b| a + b);
    /// assert_eq!(sums.to_vec().unwrap(), vec![11, 13, 15]);
    ///
    /// let mismatched = LazyList::range(1, 3).map2(&LazyList::range(1, 2), |a, b| a + b);
    /// assert_eq!(mismatched.to_vec(), Err(ListError::DifferentListSize("map2")));
    /// ```
    pub fn map2<U, V, F>(&self, other: &LazyList<U>, function: F) -> LazyList<V>
    where
        U: Clone + 'static,
        V: 'static,
        F: Fn(T, U) -> V + 'static,
    {
        Self::map2_from(self.clone(), other.clone(), Rc::new(function))
    }

    fn map2_from<U, V, F>(left: Self, right: LazyList<U>, function: Rc<F>) -> LazyList<V>
    where
        U: Clone + 'static,
        V: 'static,
        F: Fn(T, U) -> V + 'static,
    {
        LazyList::suspend(move || {
            Ok(match step_both("map2", &left, &right)? {
                None => Node::Nil,
                Some(((left_head, left_tail), (right_head, right_tail))) => {
                    let combined = function(left_head, right_head);
                    Node::Cons(combined, Self::map2_from(left_tail, right_tail, function))
                }
            })
        })
    }

    /// Lazily pairs up the elements of two lists.
    pub fn zip<U>(&self, other: &LazyList<U>) -> LazyList<(T, U)>
    where
        U: Clone + 'static,
    {
        Self::zip_from(self.clone(), other.clone())
    }

    fn zip_from<U>(left: Self, right: LazyList<U>) -> LazyList<(T, U)>
    where
        U: Clone + 'static,
    {
        LazyList::suspend(move || {
            Ok(match step_both("zip", &left, &right)? {
                None => Node::Nil,
                Some(((left_head, left_tail), (right_head, right_tail))) => Node::Cons(
                    (left_head, right_head),
                    Self::zip_from(left_tail, right_tail),
                ),
            })
        })
    }

    /// Calls `function` on each pair of elements.
    ///
    /// # Errors
    ///
    /// [`ListError::DifferentListSize`] if the lists have different lengths;
    /// the pairs before the mismatch have been visited by then.
    pub fn for_each2<U, F>(&self, other: &LazyList<U>, mut function: F) -> ListResult<()>
    where
        U: Clone + 'static,
        F: FnMut(T, U),
    {
        self.lockstep_fold("for_each2", other, (), |(), left, right| function(left, right))
    }

    /// Left fold over pairs of elements.
    ///
    /// # Errors
    ///
    /// [`ListError::DifferentListSize`] if the lists have different lengths.
    pub fn fold_left2<U, B, F>(&self, other: &LazyList<U>, initial: B, function: F) -> ListResult<B>
    where
        U: Clone + 'static,
        F: FnMut(B, T, U) -> B,
    {
        self.lockstep_fold("fold_left2", other, initial, function)
    }

    fn lockstep_fold<U, B, F>(
        &self,
        operation: &'static str,
        other: &LazyList<U>,
        initial: B,
        mut function: F,
    ) -> ListResult<B>
    where
        U: Clone + 'static,
        F: FnMut(B, T, U) -> B,
    {
        let mut accumulator = initial;
        let mut left = self.clone();
        let mut right = other.clone();
        while let Some(((left_head, left_tail), (right_head, right_tail))) =
            step_both(operation, &left, &right)?
        {
            accumulator = function(accumulator, left_head, right_head);
            left = left_tail;
            right = right_tail;
        }
        Ok(accumulator)
    }

    /// Right fold over pairs of elements. Forces both lists completely before
    /// combining anything.
    ///
    /// # Errors
    ///
    /// [`ListError::DifferentListSize`] if the lists have different lengths.
    pub fn fold_right2<U, B, F>(&self, other: &LazyList<U>, initial: B, mut function: F) -> ListResult<B>
    where
        U: Clone + 'static,
        F: FnMut(T, U, B) -> B,
    {
        let pairs = self.lockstep_fold("fold_right2", other, Vec::new(), |mut pairs, left, right| {
            pairs.push((left, right));
            pairs
        })?;
        Ok(pairs
            .into_iter()
            .rev()
            .fold(initial, |accumulator, (left, right)| function(left, right, accumulator)))
    }

    /// Returns whether every pair satisfies `predicate`, stopping at the
    /// first pair that does not.
    ///
    /// # Errors
    ///
    /// [`ListError::DifferentListSize`] if one list ends first and every
    /// pair up to that point satisfied `predicate`.
    pub fn for_all2<U, P>(&self, other: &LazyList<U>, predicate: P) -> ListResult<bool>
    where
        U: Clone + 'static,
        P: Fn(&T, &U) -> bool,
    {
        let mut left = self.clone();
        let mut right = other.clone();
        while let Some(((left_head, left_tail), (right_head, right_tail))) =
            step_both("for_all2", &left, &right)?
        {
            if !predicate(&left_head, &right_head) {
                return Ok(false);
            }
            left = left_tail;
            right = right_tail;
        }
        Ok(true)
    }

    /// Returns whether some pair satisfies `predicate`, stopping at the first
    /// pair that does.
    ///
    /// # Errors
    ///
    /// [`ListError::DifferentListSize`] if one list ends first and no pair
    /// up to that point satisfied `predicate`.
    pub fn exists2<U, P>(&self, other: &LazyList<U>, predicate: P) -> ListResult<bool>
    where
        U: Clone + 'static,
        P: Fn(&T, &U) -> bool,
    {
        let mut left = self.clone();
        let mut right = other.clone();
        while let Some(((left_head, left_tail), (right_head, right_tail))) =
            step_both("exists2", &left, &right)?
        {
            if predicate(&left_head, &right_head) {
                return Ok(true);
            }
            left = left_tail;
            right = right_tail;
        }
        Ok(false)
    }
}

impl<A: Clone + 'static, B: Clone + 'static> LazyList<(A, B)> {
    /// Lazily splits a list of pairs into two lists. The two halves share
    /// the cells of `self`, so each pair is computed once.
    #[must_use]
    pub fn unzip(&self) -> (LazyList<A>, LazyList<B>) {
        (
            self.map(|(first, _)| first),
            self.map(|(_, second)| second),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_map2_detects_mismatch_at_forcing_position() {
        let result = LazyList::range(1, 3).map2(&LazyList::range(1, 2), |a, b| a * b);
        assert_eq!(result.take(2).to_vec(), Ok(vec![1, 4]));
        assert_eq!(result.at(2), Err(ListError::DifferentListSize("map2")));
    }

    #[rstest]
    fn test_map2_finite_against_infinite_fails_when_finite_ends() {
        let result = LazyList::range(1, 3).map2(&LazyList::range(1, i64::MAX), |a, b| a + b);
        assert_eq!(result.to_vec(), Err(ListError::DifferentListSize("map2")));
    }

    #[rstest]
    fn test_zip_and_unzip() {
        let zipped = LazyList::from(vec![1, 2]).zip(&LazyList::from(vec!['a', 'b']));
        assert_eq!(zipped.to_vec(), Ok(vec![(1, 'a'), (2, 'b')]));

        let (numbers, letters) = zipped.unzip();
        assert_eq!(numbers.to_vec(), Ok(vec![1, 2]));
        assert_eq!(letters.to_vec(), Ok(vec!['a', 'b']));
    }

    #[rstest]
    fn test_for_each2_visits_pairs_before_mismatch() {
        let mut seen = Vec::new();
        let result = LazyList::range(1, 3)
            .for_each2(&LazyList::from(vec!['x', 'y']), |n, c| seen.push((n, c)));
        assert_eq!(result, Err(ListError::DifferentListSize("for_each2")));
        assert_eq!(seen, vec![(1, 'x'), (2, 'y')]);
    }

    #[rstest]
    fn test_fold_left2_and_fold_right2() {
        let left = LazyList::from(vec![1, 2, 3]);
        let right = LazyList::from(vec![10, 20, 30]);
        assert_eq!(left.fold_left2(&right, 0, |sum, a, b| sum + a * b), Ok(140));

        let order = left.fold_right2(&right, Vec::new(), |a, b, mut accumulator| {
            accumulator.push(a + b);
            accumulator
        });
        assert_eq!(order, Ok(vec![33, 22, 11]));
    }

    #[rstest]
    fn test_fold_right2_mismatch() {
        let result = LazyList::from(vec![1]).fold_right2(&LazyList::<i32>::new(), 0, |a, b, c| a + b + c);
        assert_eq!(result, Err(ListError::DifferentListSize("fold_right2")));
    }

    #[rstest]
    fn test_for_all2_and_exists2_short_circuit() {
        let left = LazyList::from(vec![1, 2, 3]);
        let right = LazyList::from(vec![1, 5]);
        assert_eq!(left.for_all2(&right, |a, b| a == b), Ok(false));
        assert_eq!(left.exists2(&right, |a, b| a == b), Ok(true));
        assert_eq!(
            left.exists2(&right, |a, b| a > b),
            Err(ListError::DifferentListSize("exists2"))
        );
        assert_eq!(
            left.for_all2(&right, |a, b| a <= b),
            Err(ListError::DifferentListSize("for_all2"))
        );
    }
}
