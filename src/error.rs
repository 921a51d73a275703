//! Top-level error type for the Karnaugh map minimizer
//!
//! The minimizer itself never fails; errors come from building its input
//! (truth tables, PLA files) or from parsing expressions. [`KmapError`]
//! gathers them so callers such as the `kmap` binary can use a single `?`.

use crate::expression::ExpressionParseError;
use crate::truth_table::{PlaReadError, TruthTableError};
use std::fmt;
use std::io;

/// Any error produced by this crate
#[derive(Debug)]
pub enum KmapError {
    /// Invalid truth table input (variable count, positions, overlaps)
    TruthTable(TruthTableError),
    /// Failed to read a PLA description
    PlaRead(PlaReadError),
    /// Failed to parse an expression
    Parse(ExpressionParseError),
    /// I/O failure outside of PLA reading
    Io(io::Error),
}

impl fmt::Display for KmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmapError::TruthTable(e) => write!(f, "Truth table error: {}", e),
            KmapError::PlaRead(e) => write!(f, "{}", e),
            KmapError::Parse(e) => write!(f, "{}", e),
            KmapError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for KmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KmapError::TruthTable(e) => Some(e),
            KmapError::PlaRead(e) => Some(e),
            KmapError::Parse(e) => Some(e),
            KmapError::Io(e) => Some(e),
        }
    }
}

impl From<TruthTableError> for KmapError {
    fn from(err: TruthTableError) -> Self {
        KmapError::TruthTable(err)
    }
}

impl From<PlaReadError> for KmapError {
    fn from(err: PlaReadError) -> Self {
        KmapError::PlaRead(err)
    }
}

impl From<ExpressionParseError> for KmapError {
    fn from(err: ExpressionParseError) -> Self {
        KmapError::Parse(err)
    }
}

impl From<io::Error> for KmapError {
    fn from(err: io::Error) -> Self {
        KmapError::Io(err)
    }
}

impl From<KmapError> for io::Error {
    fn from(err: KmapError) -> Self {
        match err {
            KmapError::TruthTable(e) => e.into(),
            KmapError::PlaRead(e) => e.into(),
            KmapError::Parse(e) => e.into(),
            KmapError::Io(e) => e,
        }
    }
}
