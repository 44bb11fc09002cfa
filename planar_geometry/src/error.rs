use thiserror::Error;

/// Errors raised by geometry construction, mutation, and path markup parsing.
///
/// Degenerate input (zero sized shapes, NaN or infinite coordinates, disjoint operands) is never an
/// error, it always yields a well defined (often empty) result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("cannot modify a frozen geometry")]
    Frozen,
    #[error("invalid path markup at position {position}: {message}")]
    Parse { position: usize, message: String },
    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type GeometryResult<V> = std::result::Result<V, GeometryError>;
