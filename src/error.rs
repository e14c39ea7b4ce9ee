use thiserror::Error;

/// Errors returned by [`Tree`][crate::Tree] operations. Everything other than the traversals is
/// total, so this is small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A traversal was started without a callback to hand each node to. Nothing was visited.
    #[error("a callback function is required")]
    MissingCallback,
}
