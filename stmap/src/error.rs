use thiserror::Error;

/// 后缀树引擎的错误类型。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StError {
    /// The input cannot be encoded over the dense alphabet.
    #[error("alphabet violation: {reason}")]
    AlphabetViolation { reason: String },

    /// A view was sliced or indexed outside its bounds.
    #[error("index out of range: [{start}, {stop}) on a sequence of length {len}")]
    IndexOutOfRange { start: usize, stop: usize, len: usize },

    /// A tree edit would break the node model (child of a leaf, empty edge, ...).
    #[error("suffix tree invariant violated: {reason}")]
    TreeInvariant { reason: &'static str },
}

pub type Result<T> = std::result::Result<T, StError>;
