//! Error types for truth table construction and PLA input

use std::fmt;
use std::io;
use std::sync::Arc;

use super::Position;

/// Errors raised when a truth table would fall outside the supported domain
///
/// The minimizer itself performs no validation; these checks run when a
/// [`TruthTable`](super::TruthTable) or [`GridLayout`](crate::GridLayout) is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TruthTableError {
    /// Only 2 to 5 variables are supported
    UnsupportedVariableCount {
        /// The requested number of variables
        count: usize,
    },
    /// A position does not fit in `2^num_vars`
    PositionOutOfRange {
        /// The offending position
        position: Position,
        /// The number of variables of the table
        num_vars: usize,
    },
    /// A position was listed both as true and as don't-care
    OverlappingPosition {
        /// The offending position
        position: Position,
    },
}

impl fmt::Display for TruthTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruthTableError::UnsupportedVariableCount { count } => write!(
                f,
                "Unsupported variable count {} (valid range: 2..=5)",
                count
            ),
            TruthTableError::PositionOutOfRange { position, num_vars } => write!(
                f,
                "Position {} out of range for {} variables (valid range: 0..{})",
                position,
                num_vars,
                1u64 << num_vars
            ),
            TruthTableError::OverlappingPosition { position } => write!(
                f,
                "Position {} is listed as both true and don't-care",
                position
            ),
        }
    }
}

impl std::error::Error for TruthTableError {}

impl From<TruthTableError> for io::Error {
    fn from(err: TruthTableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Errors related to PLA format parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaError {
    /// A cube line appeared before any `.i` directive
    MissingInputDirective,
    /// Invalid value in .i directive
    InvalidInputDirective {
        /// The invalid value string
        value: Arc<str>,
    },
    /// Only single-output PLA files describe a truth table
    UnsupportedOutputCount {
        /// The value of the .o directive
        value: Arc<str>,
    },
    /// Invalid character in the input portion of a cube
    InvalidInputCharacter {
        /// The invalid character
        character: char,
        /// Line number (1-based)
        line: usize,
        /// Position in the input string
        position: usize,
    },
    /// Invalid character in the output portion of a cube
    InvalidOutputCharacter {
        /// The invalid character
        character: char,
        /// Line number (1-based)
        line: usize,
    },
    /// Cube width doesn't match the declared number of inputs
    CubeDimensionMismatch {
        /// Line number (1-based)
        line: usize,
        /// Expected number of inputs
        expected_inputs: usize,
        /// Actual number of inputs in the cube
        actual_inputs: usize,
    },
}

impl fmt::Display for PlaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaError::MissingInputDirective => {
                write!(f, "PLA cube found before the .i directive")
            }
            PlaError::InvalidInputDirective { value } => {
                write!(f, "Invalid .i directive value: '{}'", value)
            }
            PlaError::UnsupportedOutputCount { value } => {
                write!(f, "Unsupported .o directive value: '{}' (expected 1)", value)
            }
            PlaError::InvalidInputCharacter {
                character,
                line,
                position,
            } => write!(
                f,
                "Invalid input character '{}' at line {}, position {}",
                character, line, position
            ),
            PlaError::InvalidOutputCharacter { character, line } => {
                write!(f, "Invalid output character '{}' at line {}", character, line)
            }
            PlaError::CubeDimensionMismatch {
                line,
                expected_inputs,
                actual_inputs,
            } => write!(
                f,
                "Cube at line {} has {} inputs but {} were declared",
                line, actual_inputs, expected_inputs
            ),
        }
    }
}

impl std::error::Error for PlaError {}

impl From<PlaError> for io::Error {
    fn from(err: PlaError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur when reading a truth table from PLA data
///
/// This error type is returned by `TruthTable::from_pla_*` methods.
#[derive(Debug)]
pub enum PlaReadError {
    /// PLA format error
    Pla(PlaError),
    /// The declared table is outside the supported domain
    TruthTable(TruthTableError),
    /// IO error during reading
    Io(io::Error),
}

impl fmt::Display for PlaReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaReadError::Pla(e) => write!(f, "PLA format error: {}", e),
            PlaReadError::TruthTable(e) => write!(f, "Truth table error: {}", e),
            PlaReadError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PlaReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlaReadError::Pla(e) => Some(e),
            PlaReadError::TruthTable(e) => Some(e),
            PlaReadError::Io(e) => Some(e),
        }
    }
}

impl From<PlaError> for PlaReadError {
    fn from(err: PlaError) -> Self {
        PlaReadError::Pla(err)
    }
}

impl From<TruthTableError> for PlaReadError {
    fn from(err: TruthTableError) -> Self {
        PlaReadError::TruthTable(err)
    }
}

impl From<io::Error> for PlaReadError {
    fn from(err: io::Error) -> Self {
        PlaReadError::Io(err)
    }
}

impl From<PlaReadError> for io::Error {
    fn from(err: PlaReadError) -> Self {
        match err {
            PlaReadError::Pla(e) => e.into(),
            PlaReadError::TruthTable(e) => e.into(),
            PlaReadError::Io(e) => e,
        }
    }
}
