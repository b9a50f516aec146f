//! Construction-time invariant violations.

use thiserror::Error;

/// Result type for declaration tree construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling the declaration tree.
///
/// Every variant is a construction-time invariant violation. There is no
/// recovery path: once one of these fires, the tree can no longer produce
/// valid generated code, so callers should stop building.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An interface with this exact name is already registered.
    #[error("duplicate interface name `{name}`")]
    DuplicateInterface { name: String },

    /// A main class is already registered on this root.
    #[error("a main class is already registered")]
    DuplicateMain,

    /// The main class was requested before one was registered.
    #[error("no main class has been registered")]
    MissingMain,
}
