//! Library error types.

use thiserror::Error;

/// Errors surfaced by widget parts and timers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A part was mounted outside its required root.
    #[error("{part} must be used within {root}")]
    Usage {
        /// The part being mounted, e.g. `Menu.Item`.
        part: &'static str,
        /// The root it requires, e.g. `Menu.Root`.
        root: &'static str,
    },

    /// A delayed action was scheduled with no tokio runtime to run it.
    #[error("delayed action scheduled outside of a tokio runtime")]
    NoRuntime,
}

/// Result alias for widget operations.
pub type Result<T> = std::result::Result<T, Error>;
