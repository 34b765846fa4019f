//! Resolving a requested container kind into a fresh, empty container.
//!
//! Kinds come in three flavours:
//! - abstract category markers ([`Sequence`], [`Set`], [`SortedSet`], ...), each resolved at
//!   compile time to one default concrete backing
//! - [`Backing`], naming exactly one concrete shape such as `Backing<BTreeSet<PartiallyApplied>>`
//! - the runtime [`Category`] tag, which resolves to an [`AnyContainer`]
use std::collections::{BTreeSet, BinaryHeap, HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::str::FromStr;

use tracing::trace;

use crate::any::AnyContainer;
use crate::bounded::{BoundedDeque, BoundedQueue};
use crate::container::Container;
use crate::error::{Error, Result};

/// Something from which an empty container holding `X` can be built.
///
/// # Implementing this trait
///
/// Implement it once per element type the output shape can hold, bounding `X` by whatever
/// the backing needs (`Hash + Eq` for hash sets, `Ord` for trees and heaps):
///
/// ```rust
/// # use lambda_collections::{Container, Kind, Result};
/// struct Fresh;
///
/// impl<X> Kind<X> for Fresh {
///     type Container = Vec<X>;
///
///     fn instantiate(&self) -> Result<Vec<X>> {
///         Ok(Vec::new())
///     }
/// }
///
/// let empty: Vec<u8> = Fresh.instantiate().unwrap();
/// assert!(empty.is_empty());
/// ```
pub trait Kind<X> {
    type Container: Container<Item = X>;

    /// Build a new, empty container of this kind
    fn instantiate(&self) -> Result<Self::Container>;
}

impl<X, D: Kind<X> + ?Sized> Kind<X> for &D {
    type Container = D::Container;

    fn instantiate(&self) -> Result<Self::Container> {
        (**self).instantiate()
    }
}

/// An uninhabited type used to name a container shape without an element type.
///
/// `Vec` alone is a partially applied type and can't be named in a `Kind` impl, so
/// `Vec<PartiallyApplied>` stands in for it.
#[derive(Clone, Debug)]
pub enum PartiallyApplied {}

/// Names one concrete container shape `C`, applied to `PartiallyApplied`.
///
/// Instantiating it always builds exactly that shape, whatever the element type.
pub struct Backing<C>(PhantomData<C>);

impl<C> Backing<C> {
    pub fn new() -> Self {
        Backing(PhantomData)
    }
}

impl<C> Default for Backing<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Backing<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Backing<C> {}

impl<C> fmt::Debug for Backing<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Backing")
            .field(&std::any::type_name::<C>())
            .finish()
    }
}

macro_rules! backing_kind {
    ($shape:ident, [$($bound:tt)*]) => {
        impl<X: $($bound)*> Kind<X> for Backing<$shape<PartiallyApplied>> {
            type Container = $shape<X>;

            fn instantiate(&self) -> Result<Self::Container> {
                trace!(backing = stringify!($shape), "instantiating concrete backing");
                Ok($shape::new())
            }
        }
    };
}

backing_kind!(Vec, [Sized]);
backing_kind!(VecDeque, [Sized]);
backing_kind!(HashSet, [Hash + Eq]);
backing_kind!(BTreeSet, [Ord]);
backing_kind!(BinaryHeap, [Ord]);
backing_kind!(BoundedQueue, [Sized]);
backing_kind!(BoundedDeque, [Sized]);

macro_rules! category_marker {
    ($(#[$doc:meta])* $marker:ident => $shape:ident, [$($bound:tt)*]) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $marker;

        impl<X: $($bound)*> Kind<X> for $marker {
            type Container = $shape<X>;

            fn instantiate(&self) -> Result<Self::Container> {
                trace!(
                    category = %Category::$marker,
                    backing = stringify!($shape),
                    "resolved container kind"
                );
                Ok($shape::new())
            }
        }

        impl From<$marker> for Category {
            fn from(_: $marker) -> Category {
                Category::$marker
            }
        }
    };
}

category_marker!(
    /// Ordered sequence, backed by `Vec`
    Sequence => Vec, [Sized]
);
category_marker!(
    /// Unordered set, backed by `HashSet`
    Set => HashSet, [Hash + Eq]
);
category_marker!(
    /// Sorted set, backed by `BTreeSet`
    SortedSet => BTreeSet, [Ord]
);
category_marker!(
    /// Navigable (range-queryable) set, backed by `BTreeSet`
    NavigableSet => BTreeSet, [Ord]
);
category_marker!(
    /// Priority-ordered queue, backed by `BinaryHeap` (greatest element first)
    Queue => BinaryHeap, [Ord]
);
category_marker!(
    /// Double-ended queue, backed by `VecDeque`
    Deque => VecDeque, [Sized]
);
category_marker!(
    /// Bounded FIFO queue, backed by an unbounded-by-default `BoundedQueue`
    BlockingQueue => BoundedQueue, [Sized]
);
category_marker!(
    /// Bounded double-ended queue, backed by an unbounded-by-default `BoundedDeque`
    BlockingDeque => BoundedDeque, [Sized]
);
category_marker!(
    /// Any collection at all, backed by `Vec`
    Collection => Vec, [Sized]
);

/// Runtime tag for an abstract container category.
///
/// Variants are declared most specific first; `ALL` preserves that order.
///
/// Resolving a tag at runtime builds an [`AnyContainer`], which can hold any category's
/// backing, so every tag requires `X: Hash + Eq + Ord` even when the chosen backing (a
/// `Vec` for `sequence`) would not. Element types without those bounds, such as `f64`,
/// go through the static markers or [`Backing`] instead: `Sequence` builds a `Vec<f64>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    BlockingDeque,
    BlockingQueue,
    Deque,
    Sequence,
    NavigableSet,
    Queue,
    Set,
    SortedSet,
    Collection,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::BlockingDeque,
        Category::BlockingQueue,
        Category::Deque,
        Category::Sequence,
        Category::NavigableSet,
        Category::Queue,
        Category::Set,
        Category::SortedSet,
        Category::Collection,
    ];

    /// Canonical tag, as accepted by `FromStr`
    pub fn tag(self) -> &'static str {
        match self {
            Category::BlockingDeque => "blocking-deque",
            Category::BlockingQueue => "blocking-queue",
            Category::Deque => "deque",
            Category::Sequence => "sequence",
            Category::NavigableSet => "navigable-set",
            Category::Queue => "queue",
            Category::Set => "set",
            Category::SortedSet => "sorted-set",
            Category::Collection => "collection",
        }
    }

    /// Name of the default concrete backing
    pub fn backing(self) -> &'static str {
        match self {
            Category::BlockingDeque => "BoundedDeque",
            Category::BlockingQueue => "BoundedQueue",
            Category::Deque => "VecDeque",
            Category::Sequence | Category::Collection => "Vec",
            Category::NavigableSet | Category::SortedSet => "BTreeSet",
            Category::Queue => "BinaryHeap",
            Category::Set => "HashSet",
        }
    }

    /// Build an empty container of this category's default backing
    pub fn resolve<X: Hash + Eq + Ord>(self) -> AnyContainer<X> {
        trace!(category = %self, backing = self.backing(), "resolved container kind");
        match self {
            Category::BlockingDeque => AnyContainer::BlockingDeque(BoundedDeque::new()),
            Category::BlockingQueue => AnyContainer::BlockingQueue(BoundedQueue::new()),
            Category::Deque => AnyContainer::Deque(VecDeque::new()),
            Category::Sequence => AnyContainer::Sequence(Vec::new()),
            Category::NavigableSet => AnyContainer::NavigableSet(BTreeSet::new()),
            Category::Queue => AnyContainer::Queue(BinaryHeap::new()),
            Category::Set => AnyContainer::Set(HashSet::new()),
            Category::SortedSet => AnyContainer::SortedSet(BTreeSet::new()),
            Category::Collection => AnyContainer::Collection(Vec::new()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Lowercases and maps `_` to `-`, so `Sorted_Set` and `sorted-set` name the same kind
pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('_', "-")
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let tag = normalize(s);
        if tag.is_empty() {
            return Err(Error::MissingArgument("kind"));
        }
        match tag.as_str() {
            "blocking-deque" => Ok(Category::BlockingDeque),
            "blocking-queue" => Ok(Category::BlockingQueue),
            "deque" => Ok(Category::Deque),
            "sequence" | "list" => Ok(Category::Sequence),
            "navigable-set" => Ok(Category::NavigableSet),
            "queue" => Ok(Category::Queue),
            "set" => Ok(Category::Set),
            "sorted-set" => Ok(Category::SortedSet),
            "collection" => Ok(Category::Collection),
            _ => Err(Error::UnsupportedContainerKind(s.trim().to_string())),
        }
    }
}

impl<X: Hash + Eq + Ord> Kind<X> for Category {
    type Container = AnyContainer<X>;

    fn instantiate(&self) -> Result<AnyContainer<X>> {
        Ok(self.resolve())
    }
}
