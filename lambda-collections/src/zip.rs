use std::iter::FusedIterator;

use tracing::trace;

use crate::error::{Error, Result};

/// Lock-step cursor over `K` inputs, yielding one `[Item; K]` per position.
///
/// The number of tuples is fixed when the zip is built: the shortest input's length. Each
/// cursor is advanced exactly that many times, so trailing elements of longer inputs are
/// never visited.
///
/// ```rust
/// # use lambda_collections::Zip;
/// let a = vec![1, 2, 3];
/// let b = vec![10, 20];
///
/// let sums: Vec<i32> = Zip::new([&a, &b])
///     .unwrap()
///     .map(|[x, y]| x + y)
///     .collect();
///
/// assert_eq!(sums, vec![11, 22]);
/// ```
#[derive(Clone, Debug)]
pub struct Zip<I, const K: usize> {
    cursors: [I; K],
    remaining: usize,
}

impl<I: ExactSizeIterator, const K: usize> Zip<I, K> {
    pub fn new<C>(inputs: [C; K]) -> Result<Self>
    where
        C: IntoIterator<IntoIter = I>,
    {
        if K == 0 {
            return Err(Error::EmptyInputSet);
        }
        let cursors = inputs.map(IntoIterator::into_iter);
        let remaining = cursors.iter().map(ExactSizeIterator::len).min().unwrap_or(0);
        trace!(arity = K, tuples = remaining, "zipping inputs");
        Ok(Self { cursors, remaining })
    }
}

impl<I: Iterator, const K: usize> Iterator for Zip<I, K> {
    type Item = [I::Item; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let mut tuple = Vec::with_capacity(K);
        for cursor in self.cursors.iter_mut() {
            match cursor.next() {
                Some(elem) => tuple.push(elem),
                // a cursor that under-reported its length; stop rather than yield a short tuple
                None => {
                    self.remaining = 0;
                    return None;
                }
            }
        }
        tuple.try_into().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<I: Iterator, const K: usize> ExactSizeIterator for Zip<I, K> {}

impl<I: Iterator, const K: usize> FusedIterator for Zip<I, K> {}
