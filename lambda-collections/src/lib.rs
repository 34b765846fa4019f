//! Zipped `map`, flat-map, sliding-tail and quantifier combinators over std collections.
//!
//! Every combinator takes its inputs as an array `[C; K]` and walks them in lock-step,
//! stopping at the shortest, handing the callback one `[E; K]` tuple per step:
//!
//! ```rust
//! use lambda_collections::{every, map, map_list, some};
//!
//! let a = vec![1, 2, 3, 4, 5];
//! let b = vec![5, 4, 3, 2, 1];
//!
//! assert_eq!(map([&a, &b], |[x, y]| x * y).unwrap(), vec![5, 8, 9, 8, 5]);
//! assert!(some([&a, &b], |[x, y]| x == y).unwrap());
//! assert!(!every([&a, &b], |[x, y]| x < y).unwrap());
//! assert_eq!(map_list([&a], |[tail]| tail.len()).unwrap(), vec![5, 4, 3, 2, 1]);
//! ```
//!
//! Where a new container is built, its shape comes from a [`Kind`]: the first input's own
//! shape for [`map`], or an explicit kind for [`map_as`], [`map_can`] and [`map_list_as`].
mod any;
mod bounded;
mod combinators;
mod container;
mod error;
mod kind;
mod registry;
mod tails;
mod truthy;
mod zip;

pub use any::{AnyContainer, Iter};
pub use bounded::{BoundedDeque, BoundedQueue};
pub use combinators::{
    every, map, map_as, map_c, map_can, map_can_into, map_into, map_list, map_list_as, some,
};
pub use container::{Container, HasKind};
pub use error::{BoxError, Error, Result};
pub use kind::{
    Backing, BlockingDeque, BlockingQueue, Category, Collection, Deque, Kind, NavigableSet,
    PartiallyApplied, Queue, Sequence, Set, SortedSet,
};
pub use registry::{Named, Registry};
pub use tails::Tails;
pub use truthy::Truthy;
pub use zip::Zip;
