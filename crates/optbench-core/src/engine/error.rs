use thiserror::Error;

use super::layout::SuiteVersion;
use super::store::DataLoadError;

/// Represents errors that prevent a problem from being constructed.
#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("Auxiliary data loading failed: {source}")]
    Data {
        #[from]
        source: DataLoadError,
    },

    #[error("No function table entry for {version} function {function_id}")]
    UnknownFunction {
        version: SuiteVersion,
        function_id: u32,
    },

    #[error("No function with id {function_id} in the pseudo-boolean suite")]
    UnknownBitFunction { function_id: u32 },

    #[error("Dimension {dimension} is too small for {context}")]
    InvalidDimension {
        dimension: usize,
        context: &'static str,
    },

    #[error(
        "Auxiliary {kind} data for {version} function {function_id} holds {actual} of the {required} values required"
    )]
    TruncatedData {
        kind: &'static str,
        version: SuiteVersion,
        function_id: u32,
        required: usize,
        actual: usize,
    },

    #[error("Shuffle index {index} is out of range for dimension {dimension}")]
    InvalidShuffleIndex { index: usize, dimension: usize },
}

/// Per-call evaluation failure. Rejecting a call leaves the problem's
/// transform state untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("Input has {actual} variables but the problem expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}
