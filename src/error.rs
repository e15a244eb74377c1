//! Error types shared by the containers, the graph and the algorithms.
//!
//! Every fallible operation in the crate reports one of two kinds of failure:
//! - **invalid argument**: the caller asked for something the structure cannot
//!   represent (bad vertex id, self-loop, duplicate edge, negative weight, ...);
//! - **out of range**: an index or a pop/peek on a container that does not hold
//!   enough elements.
//!
//! Failures are reported before any mutation happens, so the receiver is left
//! exactly as it was.

use thiserror::Error;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The arguments violate a precondition of the operation.
    InvalidArgument,
    /// An index or an element access fell outside the live contents of a container.
    OutOfRange,
}

/// Errors raised by `arbor` operations.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Invalid arguments
    #[error("vertex {vertex} is out of range (graph has vertices 1..={vertex_count})")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop { vertex: usize },

    #[error("edge {src}->{dest} already exists")]
    DuplicateEdge { src: usize, dest: usize },

    #[error("edge {src}->{dest} does not exist")]
    EdgeNotFound { src: usize, dest: usize },

    #[error("graph contains a negative edge weight")]
    NegativeWeight,

    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("capacity must be greater than 0 (got {capacity})")]
    InvalidCapacity { capacity: usize },

    // Out-of-range access
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{container} is empty")]
    EmptyContainer { container: &'static str },
}

impl Error {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IndexOutOfRange { .. } | Error::EmptyContainer { .. } => ErrorKind::OutOfRange,
            Error::VertexOutOfRange { .. }
            | Error::SelfLoop { .. }
            | Error::DuplicateEdge { .. }
            | Error::EdgeNotFound { .. }
            | Error::NegativeWeight
            | Error::EmptyGraph
            | Error::InvalidCapacity { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// Returns `true` for [`ErrorKind::InvalidArgument`] errors.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Returns `true` for [`ErrorKind::OutOfRange`] errors.
    pub fn is_out_of_range(&self) -> bool {
        self.kind() == ErrorKind::OutOfRange
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
