//! This module contains all custom errors used in this library.
//!
//! Note that a proven "no"-instance is not an error. Infeasibility is reported through
//! `KernelResult::Infeasible` or a `false` decision.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Import: IoError")]
    IoError(#[from] std::io::Error),
    #[error("Import: Input is malformed.")]
    InputMalformedError,
    #[error("Import: Integer is malformed.")]
    BadIntError(#[from] std::num::ParseIntError),
    #[error("Import: {0}")]
    GraphError(#[from] ProcessingError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProcessingError {
    #[error("Invalid parameter: k = {0} is negative")]
    NegativeParameter(isize),
    #[error("Graph error: node {0} does not exist")]
    MissingNode(usize),
    #[error("Graph error: self-loop at node {0}")]
    SelfLoop(usize),
    /// `(u, v)` is recorded at `u` but not at `v`, or `v` was deleted.
    #[error("Graph error: edge ({0}, {1}) is only stored on one side")]
    InconsistentAdjacency(usize, usize),
    #[error("InvalidSolution: {0}")]
    InvalidSolution(String),
}
