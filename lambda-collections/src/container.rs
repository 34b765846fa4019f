use std::collections::{BTreeSet, BinaryHeap, HashSet, VecDeque};
use std::hash::Hash;

use crate::bounded::{BoundedDeque, BoundedQueue};
use crate::error::Result;
use crate::kind::{Backing, PartiallyApplied, Sequence};

/// A finite group of elements that reports its size and accepts appends.
///
/// This is the output half of the container contract; the input half is `IntoIterator`
/// with an `ExactSizeIterator` cursor, which every std collection already provides.
///
/// ```rust
/// # use lambda_collections::Container;
/// # use std::collections::BTreeSet;
/// let mut set = BTreeSet::new();
/// set.add(3).unwrap();
/// set.add(1).unwrap();
///
/// assert_eq!(Container::len(&set), 2);
/// assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub trait Container {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add one element. Unbounded std collections never fail; sets silently
    /// collapse duplicates.
    fn add(&mut self, item: Self::Item) -> Result<()>;
}

impl<T> Container for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn add(&mut self, item: T) -> Result<()> {
        self.push(item);
        Ok(())
    }
}

impl<T> Container for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn add(&mut self, item: T) -> Result<()> {
        self.push_back(item);
        Ok(())
    }
}

impl<T: Hash + Eq> Container for HashSet<T> {
    type Item = T;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn add(&mut self, item: T) -> Result<()> {
        self.insert(item);
        Ok(())
    }
}

impl<T: Ord> Container for BTreeSet<T> {
    type Item = T;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn add(&mut self, item: T) -> Result<()> {
        self.insert(item);
        Ok(())
    }
}

impl<T: Ord> Container for BinaryHeap<T> {
    type Item = T;

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn add(&mut self, item: T) -> Result<()> {
        self.push(item);
        Ok(())
    }
}

impl<T> Container for BoundedQueue<T> {
    type Item = T;

    fn len(&self) -> usize {
        BoundedQueue::len(self)
    }

    fn add(&mut self, item: T) -> Result<()> {
        self.offer(item)
    }
}

impl<T> Container for BoundedDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        BoundedDeque::len(self)
    }

    fn add(&mut self, item: T) -> Result<()> {
        self.offer_back(item)
    }
}

/// Knows which kind of container it is, so that an empty container of the same shape
/// (but possibly a different element type) can be built from it.
pub trait HasKind {
    /// Usually a [`crate::Kind`] for every element type the shape can hold
    type Kind;

    fn kind(&self) -> Self::Kind;
}

impl<C: HasKind + ?Sized> HasKind for &C {
    type Kind = C::Kind;

    fn kind(&self) -> Self::Kind {
        (**self).kind()
    }
}

macro_rules! same_backing {
    ($($shape:ident),+) => {
        $(
            impl<T> HasKind for $shape<T> {
                type Kind = Backing<$shape<PartiallyApplied>>;

                fn kind(&self) -> Self::Kind {
                    Backing::new()
                }
            }
        )+
    };
}

same_backing!(Vec, VecDeque, HashSet, BTreeSet, BinaryHeap, BoundedQueue, BoundedDeque);

// fixed-size inputs can't grow, so they map into a fresh sequence
impl<T, const N: usize> HasKind for [T; N] {
    type Kind = Sequence;

    fn kind(&self) -> Self::Kind {
        Sequence
    }
}

impl<T> HasKind for [T] {
    type Kind = Sequence;

    fn kind(&self) -> Self::Kind {
        Sequence
    }
}
