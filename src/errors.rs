//!
//! Error types
//!
use thiserror::Error;

///
/// Violation of an input precondition.
///
/// Raised before any numerical work, so no partial output exists.
///
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("dim(countsA) != dim(countsB): {a_markers}x{a_individuals} vs {b_markers}x{b_individuals}")]
    CountDimMismatch {
        a_markers: usize,
        a_individuals: usize,
        b_markers: usize,
        b_individuals: usize,
    },
    #[error("length(rec_frac) != n_mar - 1: got {got} for {n_markers} markers")]
    RecFracLength { got: usize, n_markers: usize },
    #[error("error_prob1 out of range: {value}")]
    ErrorProb1OutOfRange { value: f64 },
    #[error("error_prob2 out of range: {value}")]
    ErrorProb2OutOfRange { value: f64 },
    #[error("rec_frac must be >= 0 and <= 0.5: rec_frac[{index}] = {value}")]
    RecFracOutOfRange { index: usize, value: f64 },
    #[error("no markers in count matrix")]
    EmptyMatrix,
    #[error("line {line} has {got} columns, expected {expected}")]
    RaggedMatrix {
        line: usize,
        got: usize,
        expected: usize,
    },
    #[error("cannot parse '{token}' at line {line}: {msg}")]
    Parse {
        line: usize,
        token: String,
        msg: String,
    },
}

///
/// Failure of a genotype probability calculation
///
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error(transparent)]
    Input(#[from] InputError),
    /// cancelled between individuals; not a numerical failure
    #[error("calculation interrupted")]
    Interrupted,
}

///
/// Failure of reading a matrix from text
///
#[derive(Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Input(#[from] InputError),
}
