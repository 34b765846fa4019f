use std::collections::{
    binary_heap, btree_set, hash_set, vec_deque, BTreeSet, BinaryHeap, HashSet, VecDeque,
};
use std::hash::Hash;
use std::iter::FusedIterator;
use std::slice;

use crate::bounded::{BoundedDeque, BoundedQueue};
use crate::container::{Container, HasKind};
use crate::error::Result;
use crate::kind::Category;

/// A container whose category is only known at runtime, holding that category's default backing.
///
/// Produced by [`Category::resolve`] and by a [`crate::Registry`]. It reports its category
/// through [`HasKind`], so mapping over one yields another of the same category.
#[derive(Clone, Debug)]
pub enum AnyContainer<X> {
    BlockingDeque(BoundedDeque<X>),
    BlockingQueue(BoundedQueue<X>),
    Deque(VecDeque<X>),
    Sequence(Vec<X>),
    NavigableSet(BTreeSet<X>),
    Queue(BinaryHeap<X>),
    Set(HashSet<X>),
    SortedSet(BTreeSet<X>),
    Collection(Vec<X>),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            AnyContainer::BlockingDeque($inner) => $body,
            AnyContainer::BlockingQueue($inner) => $body,
            AnyContainer::Deque($inner) => $body,
            AnyContainer::Sequence($inner) => $body,
            AnyContainer::NavigableSet($inner) => $body,
            AnyContainer::Queue($inner) => $body,
            AnyContainer::Set($inner) => $body,
            AnyContainer::SortedSet($inner) => $body,
            AnyContainer::Collection($inner) => $body,
        }
    };
}

impl<X> AnyContainer<X> {
    pub fn category(&self) -> Category {
        match self {
            AnyContainer::BlockingDeque(_) => Category::BlockingDeque,
            AnyContainer::BlockingQueue(_) => Category::BlockingQueue,
            AnyContainer::Deque(_) => Category::Deque,
            AnyContainer::Sequence(_) => Category::Sequence,
            AnyContainer::NavigableSet(_) => Category::NavigableSet,
            AnyContainer::Queue(_) => Category::Queue,
            AnyContainer::Set(_) => Category::Set,
            AnyContainer::SortedSet(_) => Category::SortedSet,
            AnyContainer::Collection(_) => Category::Collection,
        }
    }

    pub fn len(&self) -> usize {
        dispatch!(self, inner => inner.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Walk the elements in the backing's own iteration order
    pub fn iter(&self) -> Iter<'_, X> {
        let inner = match self {
            AnyContainer::BlockingDeque(d) => IterInner::Deque(d.iter()),
            AnyContainer::BlockingQueue(q) => IterInner::Deque(q.iter()),
            AnyContainer::Deque(d) => IterInner::Deque(d.iter()),
            AnyContainer::Sequence(v) | AnyContainer::Collection(v) => IterInner::Slice(v.iter()),
            AnyContainer::NavigableSet(s) | AnyContainer::SortedSet(s) => IterInner::Tree(s.iter()),
            AnyContainer::Queue(h) => IterInner::Heap(h.iter()),
            AnyContainer::Set(s) => IterInner::Hash(s.iter()),
        };
        Iter { inner }
    }

    /// Move the elements out in the backing's own iteration order
    pub fn into_vec(self) -> Vec<X> {
        dispatch!(self, inner => inner.into_iter().collect())
    }
}

impl<X: Hash + Eq + Ord> Container for AnyContainer<X> {
    type Item = X;

    fn len(&self) -> usize {
        AnyContainer::len(self)
    }

    fn add(&mut self, item: X) -> Result<()> {
        dispatch!(self, inner => inner.add(item))
    }
}

impl<X> HasKind for AnyContainer<X> {
    type Kind = Category;

    fn kind(&self) -> Category {
        self.category()
    }
}

/// Borrowing cursor over an [`AnyContainer`]
pub struct Iter<'a, X> {
    inner: IterInner<'a, X>,
}

enum IterInner<'a, X> {
    Slice(slice::Iter<'a, X>),
    Deque(vec_deque::Iter<'a, X>),
    Tree(btree_set::Iter<'a, X>),
    Heap(binary_heap::Iter<'a, X>),
    Hash(hash_set::Iter<'a, X>),
}

impl<'a, X> Iterator for Iter<'a, X> {
    type Item = &'a X;

    fn next(&mut self) -> Option<&'a X> {
        match &mut self.inner {
            IterInner::Slice(it) => it.next(),
            IterInner::Deque(it) => it.next(),
            IterInner::Tree(it) => it.next(),
            IterInner::Heap(it) => it.next(),
            IterInner::Hash(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Slice(it) => it.size_hint(),
            IterInner::Deque(it) => it.size_hint(),
            IterInner::Tree(it) => it.size_hint(),
            IterInner::Heap(it) => it.size_hint(),
            IterInner::Hash(it) => it.size_hint(),
        }
    }
}

impl<X> ExactSizeIterator for Iter<'_, X> {}

impl<X> FusedIterator for Iter<'_, X> {}

impl<'a, X> IntoIterator for &'a AnyContainer<X> {
    type Item = &'a X;
    type IntoIter = Iter<'a, X>;

    fn into_iter(self) -> Iter<'a, X> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_follow_the_backing() {
        let mut set = Category::Set.resolve();
        let mut seq = Category::Sequence.resolve();
        for x in [1, 1, 2] {
            set.add(x).unwrap();
            seq.add(x).unwrap();
        }
        assert_eq!(set.len(), 2);
        assert_eq!(seq.into_vec(), vec![1, 1, 2]);
    }

    #[test]
    fn iteration_is_exact_size() {
        let mut deque = Category::BlockingDeque.resolve();
        for x in 0..4 {
            deque.add(x).unwrap();
        }
        let mut it = deque.iter();
        assert_eq!(it.len(), 4);
        it.next();
        assert_eq!(it.len(), 3);
        assert_eq!(it.copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn priority_queue_yields_greatest_first_when_drained() {
        let mut queue = Category::Queue.resolve();
        for x in [3, 9, 1] {
            queue.add(x).unwrap();
        }
        match queue {
            AnyContainer::Queue(heap) => assert_eq!(heap.into_sorted_vec(), vec![1, 3, 9]),
            other => panic!("expected a priority queue, got {:?}", other.category()),
        }
    }
}
