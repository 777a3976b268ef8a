//! Unified error types for the telemetry engine.
//!
//! A single `Error` enum that every fallible operation funnels into,
//! keeping the collaborator's error handling uniform.  All variants are
//! `Copy` so they can be cheaply passed back through the service layer
//! without allocation.
//!
//! Every failure here is local and recoverable: the caller decides
//! whether to show a fallback panel or suppress one.  Nothing in this
//! engine is fatal to the host process.

use core::fmt;

/// Every fallible operation in the engine funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied value is unusable (empty zone name, query
    /// before the first reading exists).  The message names the field.
    InvalidInput(&'static str),
    /// A trend sequence is too short for the requested operation.
    /// `needed` is the operation's minimum length, `got` the actual.
    DegenerateSeries { needed: usize, got: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::DegenerateSeries { needed, got } => {
                write!(f, "degenerate series: need at least {needed} values, got {got}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Engine-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
