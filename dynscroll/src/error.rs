use thiserror::Error;

/// Programming errors surfaced to the host.
///
/// Running out of items at an edge is not an error; those paths return `bool`/`Option`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ScrollError {
    #[error("widget was not acquired from this pool or was already released")]
    UnknownWidget,
    #[error("no item at index {0}")]
    MissingItem(usize),
    #[error("item {0} has no widget in the viewport")]
    NotMaterialized(usize),
    #[error("scroll list has been shut down")]
    ShutDown,
}
