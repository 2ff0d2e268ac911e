use thiserror::Error;

/// Structural problem found while validating a tree.
///
/// Never produced by `insert` or `search`, which are total; only the
/// validation helpers return it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("Node order violated")]
    OrderViolated,
    #[error("Height mismatch: expected {expected}, got {actual}")]
    HeightMismatch { expected: usize, actual: usize },
    #[error("AVL balance violated: balance factor {balance}")]
    Unbalanced { balance: isize },
    #[error("Length mismatch: counted {expected} nodes, tree reports {actual}")]
    LenMismatch { expected: usize, actual: usize },
}
