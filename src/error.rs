use thiserror::Error;

/// Ways a caller can misuse a [`Node`][crate::Node]. None of these are reported for ordinary
/// outcomes like a search miss or removing a root - they all mean the caller broke a
/// precondition and continuing would corrupt the tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeError {
    /// The node was removed from its tree and its value cleared. It can't be compared,
    /// inserted into, or given a new value.
    #[error("node has been removed and can no longer be used")]
    Disposed,

    /// The node being inserted already has a parent or children.
    #[error("node to insert is already linked into a tree")]
    Attached,

    /// A node was inserted beneath itself.
    #[error("a node cannot be inserted beneath itself")]
    SelfInsert,
}

/// Shorthand for results of node operations.
pub type NodeResult<T> = Result<T, NodeError>;

/// Logs a precondition violation before handing it back to the caller.
pub(crate) fn violated(err: NodeError) -> NodeError {
    tracing::debug!(%err, "node precondition violated");
    err
}
