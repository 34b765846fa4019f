//! Named, caller-extensible container factories.
//!
//! Static kinds cover every shape known at compile time; a [`Registry`] is for descriptors
//! that only arrive at runtime, e.g. read from a config file or a command line.
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::any::AnyContainer;
use crate::error::{BoxError, Error, Result};
use crate::kind::{normalize, Category, Kind};

type Factory<X> = Box<dyn Fn() -> Result<AnyContainer<X>, BoxError>>;

/// Maps kind names to factories producing empty [`AnyContainer`]s.
///
/// Registered names take priority; any name left over is parsed as a [`Category`] tag.
///
/// ```rust
/// # use lambda_collections::{AnyContainer, BoundedQueue, Category, Registry};
/// let mut registry = Registry::<u32>::new();
/// registry
///     .register("small-queue", || {
///         BoundedQueue::with_capacity(2).map(AnyContainer::BlockingQueue)
///     })
///     .unwrap();
///
/// let queue = registry.resolve("small-queue").unwrap();
/// assert_eq!(queue.category(), Category::BlockingQueue);
///
/// let set = registry.resolve("sorted-set").unwrap();
/// assert_eq!(set.category(), Category::SortedSet);
/// ```
pub struct Registry<X> {
    factories: HashMap<String, Factory<X>>,
}

impl<X: Hash + Eq + Ord + 'static> Registry<X> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register (or replace) the factory for `name`
    pub fn register<F, E>(&mut self, name: &str, factory: F) -> Result<()>
    where
        F: Fn() -> Result<AnyContainer<X>, E> + 'static,
        E: Into<BoxError>,
    {
        let name = normalize(name);
        if name.is_empty() {
            return Err(Error::MissingArgument("name"));
        }
        debug!(%name, "registering container factory");
        self.factories
            .insert(name, Box::new(move || factory().map_err(Into::<BoxError>::into)));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        let name = normalize(name);
        self.factories.contains_key(&name) || name.parse::<Category>().is_ok()
    }

    /// Build an empty container for `name`
    pub fn resolve(&self, name: &str) -> Result<AnyContainer<X>> {
        let key = normalize(name);
        if key.is_empty() {
            return Err(Error::MissingArgument("kind"));
        }
        match self.factories.get(&key) {
            Some(factory) => factory().map_err(|source| {
                debug!(kind = %key, error = %source, "container factory failed");
                Error::ContainerInstantiationFailed { kind: key, source }
            }),
            None => Ok(key.parse::<Category>()?.resolve()),
        }
    }

    /// A [`Kind`] that resolves `name` through this registry when instantiated
    pub fn named<'r>(&'r self, name: &'r str) -> Named<'r, X> {
        Named {
            registry: self,
            name,
        }
    }
}

impl<X: Hash + Eq + Ord + 'static> Default for Registry<X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X> fmt::Debug for Registry<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.factories.keys().collect();
        names.sort();
        f.debug_struct("Registry").field("factories", &names).finish()
    }
}

/// A registry entry used as an output kind
pub struct Named<'r, X> {
    registry: &'r Registry<X>,
    name: &'r str,
}

impl<X: Hash + Eq + Ord + 'static> Kind<X> for Named<'_, X> {
    type Container = AnyContainer<X>;

    fn instantiate(&self) -> Result<AnyContainer<X>> {
        self.registry.resolve(self.name)
    }
}
