//! Failures a draw primitive reports.
//!
//! Resolution never fails. These exist so hosts and their primitives share
//! one vocabulary for the exception-like results `drawImage` propagates.

use thiserror::Error;

use crate::source::SourceKind;

/// Exception-like outcome of a draw primitive.
#[non_exhaustive]
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawImageError {
    /// The source cannot be drawn in its current state (e.g. broken or not
    /// fully decoded).
    #[error("invalid state: {kind} source is not usable")]
    InvalidState { kind: SourceKind },
    /// The source would taint the canvas in a context that forbids it.
    #[error("security error: {kind} source is not origin-clean")]
    Security { kind: SourceKind },
    /// A source rectangle dimension is zero where the primitive requires
    /// content.
    #[error("index size error: degenerate source rectangle")]
    IndexSize,
}
