//! Lazy enumeration of sublists and orderings.
//!
//! Both generators are assembled from `append` and `map` over recursively
//! smaller instances, each instance wrapped in its own suspension. A consumer
//! reading the first few results forces only the recursive structure those
//! results need; the exponential (or factorial) remainder is never built.
//!
//! Elements are treated by position, not by value: an input with repeated
//! values produces repeated outputs.

use super::node::{LazyList, Node};

impl<T: Clone + 'static> LazyList<T> {
    /// Lazily enumerates all `2^n` sublists of the list, in a deterministic
    /// order.
    ///
    /// The sublists of `x :: rest` are the sublists of `rest` followed by the
    /// same sublists with `x` prepended. The sublists of `rest` are computed
    /// once and shared by both halves.
    ///
    /// Forcing the first sublist nests one force per input element, so
    /// inputs of many thousands of elements can exhaust the call stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let subsets: Vec<Vec<i32>> = LazyList::from(vec![1, 2])
    ///     .combinations()
    ///     .to_vec()
    ///     .unwrap()
    ///     .into_iter()
    ///     .map(|subset| subset.to_vec().unwrap())
    ///     .collect();
    /// assert_eq!(subsets, vec![vec![], vec![2], vec![1], vec![1, 2]]);
    /// ```
    #[must_use]
    pub fn combinations(&self) -> LazyList<Self> {
        tracing::trace!("building lazy combinations");
        Self::combinations_of(self.clone())
    }

    fn combinations_of(items: Self) -> LazyList<Self> {
        LazyList::suspend(move || match items.force()? {
            Node::Nil => Ok(Node::Cons(Self::new(), LazyList::new())),
            Node::Cons(head, rest) => {
                let without_head = Self::combinations_of(rest);
                let with_head = without_head.map(move |subset: Self| subset.cons(head.clone()));
                without_head.append(&with_head).force()
            }
        })
    }

    /// Lazily enumerates all `n!` orderings of the list, in a deterministic
    /// order.
    ///
    /// Each element in turn is chosen to go first; the remaining elements
    /// (those passed over so far followed by those not yet considered) are
    /// permuted recursively behind it.
    ///
    /// As with [`combinations`](Self::combinations), forcing the first
    /// ordering nests forces as deep as the input is long, so very long
    /// inputs can exhaust the call stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazylist::list::LazyList;
    ///
    /// let orderings = LazyList::range(1, 10).permutations();
    /// // 10! orderings exist, only the first one is built here.
    /// assert_eq!(orderings.head().unwrap().to_vec().unwrap(), (1..=10).collect::<Vec<i64>>());
    /// ```
    #[must_use]
    pub fn permutations(&self) -> LazyList<Self> {
        tracing::trace!("building lazy permutations");
        Self::permutations_of(self.clone())
    }

    fn permutations_of(items: Self) -> LazyList<Self> {
        LazyList::suspend(move || match items.force()? {
            Node::Nil => Ok(Node::Cons(Self::new(), LazyList::new())),
            Node::Cons(..) => Self::choose_first(Self::new(), items).force(),
        })
    }

    /// Orderings whose first element comes from `remaining`; `passed` holds
    /// the elements already tried in first position.
    fn choose_first(passed: Self, remaining: Self) -> LazyList<Self> {
        LazyList::suspend(move || match remaining.force()? {
            Node::Nil => Ok(Node::Nil),
            Node::Cons(head, rest) => {
                let chosen = head.clone();
                let starting_with_head = Self::permutations_of(passed.append(&rest))
                    .map(move |ordering: Self| ordering.cons(chosen.clone()));
                let starting_later = Self::choose_first(passed.cons(head), rest);
                starting_with_head.append(&starting_later).force()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    fn materialize(lists: &LazyList<LazyList<i64>>) -> Vec<Vec<i64>> {
        lists
            .to_vec()
            .unwrap()
            .into_iter()
            .map(|list| list.to_vec().unwrap())
            .collect()
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(4, 16)]
    #[case(10, 1024)]
    fn test_combinations_cardinality(#[case] size: i64, #[case] expected: usize) {
        assert_eq!(LazyList::range(1, size).combinations().length(), Ok(expected));
    }

    #[rstest]
    fn test_combinations_of_two_sorted() {
        let mut subsets = materialize(&LazyList::range(1, 2).combinations());
        subsets.sort();
        assert_eq!(subsets, vec![vec![], vec![1], vec![1, 2], vec![2]]);
    }

    #[rstest]
    fn test_combinations_force_each_input_element_once() {
        let forced = Rc::new(Cell::new(0));
        let counter = Rc::clone(&forced);
        let items = LazyList::range(1, 40).map(move |x| {
            counter.set(counter.get() + 1);
            x
        });
        let first_three = materialize(&items.combinations().take(3));
        assert_eq!(first_three.len(), 3);
        assert_eq!(first_three[0], Vec::<i64>::new());
        assert_eq!(forced.get(), 40);
    }

    #[rstest]
    fn test_first_results_of_moderately_long_input() {
        let items = LazyList::range(1, 100);
        assert_eq!(items.combinations().head().unwrap().length(), Ok(0));
        assert_eq!(items.permutations().head().unwrap().length(), Ok(100));
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(3, 6)]
    #[case(5, 120)]
    fn test_permutations_cardinality(#[case] size: i64, #[case] expected: usize) {
        assert_eq!(LazyList::range(1, size).permutations().length(), Ok(expected));
    }

    #[rstest]
    fn test_permutations_of_three_are_distinct() {
        let orderings = materialize(&LazyList::range(1, 3).permutations());
        assert_eq!(
            orderings,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 2, 1],
                vec![3, 1, 2],
            ]
        );
    }

    #[rstest]
    fn test_permutations_are_positional() {
        let orderings = materialize(&LazyList::from(vec![7, 7]).permutations());
        assert_eq!(orderings, vec![vec![7, 7], vec![7, 7]]);
    }

    #[rstest]
    fn test_permutations_prefix_of_large_input() {
        let orderings = LazyList::range(1, 12).permutations();
        let first_two = materialize(&orderings.take(2));
        assert_eq!(first_two[0], (1..=12).collect::<Vec<i64>>());
        assert_eq!(first_two[1][..10], (1..=10).collect::<Vec<i64>>()[..]);
    }
}
