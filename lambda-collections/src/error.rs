use thiserror::Error;

/// Boxed cause carried by [`Error::ContainerInstantiationFailed`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Everything that can go wrong while resolving an output container or driving a combinator.
///
/// All of these are raised before or instead of producing a result; a combinator that
/// returns `Err` may have appended a prefix of its results into a caller-supplied destination
/// only in the [`Error::CapacityExceeded`] case.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was absent or blank
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// A variadic input list was empty
    #[error("at least one input container is required")]
    EmptyInputSet,

    /// No default backing is known for the requested kind
    #[error("unsupported container kind: {0}")]
    UnsupportedContainerKind(String),

    /// A registered factory failed to build an empty container
    #[error("container kind {kind} could not be instantiated")]
    ContainerInstantiationFailed {
        kind: String,
        #[source]
        source: BoxError,
    },

    /// A bounded container rejected an append
    #[error("container is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// A bounded container was asked for a capacity of zero
    #[error("bounded container capacity must be greater than zero")]
    ZeroCapacity,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
