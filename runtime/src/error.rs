use thiserror::Error;

use crate::layout::Size;
use crate::types::BlockTag;

/// Errors reported by the checked views.
///
/// The exported accessors never produce these: they trust the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("value is an immediate, not a block")]
    Immediate,
    #[error("expected a boxed double, found {tag} block of {wosize} words")]
    NotDouble { tag: BlockTag, wosize: Size },
    #[error("expected a double array, found {tag} block")]
    NotDoubleArray { tag: BlockTag },
    #[error("index {index} out of bounds for double array of length {len}")]
    OutOfBounds { index: Size, len: Size },
    #[error("expected {expected} doubles, found {found}")]
    LengthMismatch { expected: Size, found: Size },
    #[error("block of {requested} slots exceeds the maximum of {max}")]
    TooLarge { requested: Size, max: Size },
    #[error("failed to allocate {bytes} bytes")]
    AllocFailed { bytes: usize },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
