use std::error::Error;
use std::fmt;

/// Custom error type for density estimation and bandwidth selection failures
#[derive(Debug, Clone, PartialEq)]
pub enum ParzenError {
    /// Kernel bandwidth was not a finite value strictly greater than zero
    InvalidBandwidth(f64),
    /// Training sample set was empty; the kernel mean is undefined
    EmptySample,
    /// Training and testing fold lists have different lengths
    FoldCountMismatch { trn: usize, tst: usize },
    /// A fold index does not address a valid sample position
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for ParzenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParzenError::InvalidBandwidth(h) => {
                write!(f, "Kernel bandwidth must be finite and > 0, got {}", h)
            }
            ParzenError::EmptySample => {
                write!(f, "Training sample set must not be empty")
            }
            ParzenError::FoldCountMismatch { trn, tst } => write!(
                f,
                "Training and testing fold lists must have equal length ({} vs {})",
                trn, tst
            ),
            ParzenError::IndexOutOfRange { index, len } => {
                write!(f, "Fold index {} is out of range for {} samples", index, len)
            }
        }
    }
}

impl Error for ParzenError {}
