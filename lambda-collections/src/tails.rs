use std::iter::FusedIterator;

use tracing::trace;

use crate::error::{Error, Result};

/// Sliding suffixes of `K` slices in lock-step: position `i` yields `[&l1[i..], .., &lk[i..]]`.
///
/// Like [`crate::Zip`], the sequence ends with the shortest input, so every yielded suffix
/// is non-empty. Suffixes borrow from the inputs; nothing is copied.
///
/// ```rust
/// # use lambda_collections::Tails;
/// let list = [1, 2, 3];
/// let tails: Vec<_> = Tails::new([&list[..]]).unwrap().map(|[t]| t).collect();
///
/// assert_eq!(tails, vec![&[1, 2, 3][..], &[2, 3][..], &[3][..]]);
/// ```
#[derive(Clone, Debug)]
pub struct Tails<'a, T, const K: usize> {
    lists: [&'a [T]; K],
    position: usize,
    end: usize,
}

impl<'a, T, const K: usize> Tails<'a, T, K> {
    pub fn new(lists: [&'a [T]; K]) -> Result<Self> {
        if K == 0 {
            return Err(Error::EmptyInputSet);
        }
        let end = lists.iter().map(|l| l.len()).min().unwrap_or(0);
        trace!(arity = K, tails = end, "sliding over suffixes");
        Ok(Self {
            lists,
            position: 0,
            end,
        })
    }
}

impl<'a, T, const K: usize> Iterator for Tails<'a, T, K> {
    type Item = [&'a [T]; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.end {
            return None;
        }
        let at = self.position;
        self.position += 1;
        // at < end <= every list's length
        Some(self.lists.map(|l| &l[at..]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.position;
        (remaining, Some(remaining))
    }
}

impl<T, const K: usize> ExactSizeIterator for Tails<'_, T, K> {}

impl<T, const K: usize> FusedIterator for Tails<'_, T, K> {}
