//! Error surface of the tree engine.

use thiserror::Error;

/// Failures raised by tree operations.
///
/// Every variant signals caller or engine misuse rather than a transient
/// condition. Failures are immediate and commit nothing; callers are
/// expected to check presence (`has_*`, `contains_key`) before invoking
/// unconditional accessors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// A read or structural query was made against a tree with no root.
    #[error("TREE_IS_EMPTY")]
    TreeIsEmpty,

    /// A value lookup addressed a key that holds no values.
    #[error("KEY_NOT_SET")]
    KeyNotSet,

    /// An internal accessor addressed a key missing from the node store.
    /// Unreachable while the arena graph is consistent.
    #[error("NODE_NOT_FOUND")]
    NodeNotFound,

    /// A rotation was invoked on a (parent, child) pair that is not
    /// adjacent in the required direction, or whose recorded parent link
    /// disagrees.
    #[error("INVALID_ROTATION_NODES")]
    InvalidRotationNodes,

    /// An unconditional link accessor was invoked on a link that is unset.
    #[error("INVALID_KEY_ACCESS")]
    InvalidKeyAccess,
}
