//! Error types for expression parsing

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors returned by [`Expression::parse`](super::Expression::parse)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionParseError {
    /// The input does not follow the expression syntax
    InvalidSyntax {
        /// The error message from the parser
        message: Arc<str>,
        /// The original input string that failed to parse
        input: Arc<str>,
        /// Byte offset of the offending token, when known
        position: Option<usize>,
    },
    /// A literal names a variable whose index does not fit in `usize`
    VariableOutOfRange {
        /// The offending literal, e.g. `x_99999999999999999999`
        variable: Arc<str>,
        /// The original input string
        input: Arc<str>,
    },
}

impl fmt::Display for ExpressionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionParseError::InvalidSyntax {
                message,
                input,
                position: Some(pos),
            } => write!(
                f,
                "Invalid expression syntax at byte {}: {} (input {:?})",
                pos, message, input
            ),
            ExpressionParseError::InvalidSyntax {
                message,
                input,
                position: None,
            } => write!(f, "Invalid expression syntax: {} (input {:?})", message, input),
            ExpressionParseError::VariableOutOfRange { variable, input } => write!(
                f,
                "Variable {} is out of range (input {:?})",
                variable, input
            ),
        }
    }
}

impl std::error::Error for ExpressionParseError {}

impl From<ExpressionParseError> for io::Error {
    fn from(err: ExpressionParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_message_with_position() {
        let err = ExpressionParseError::InvalidSyntax {
            message: Arc::from("Unrecognized EOF"),
            input: Arc::from("x_0 +"),
            position: Some(5),
        };
        let msg = err.to_string();
        assert!(msg.contains("byte 5"));
        assert!(msg.contains("Unrecognized EOF"));
    }

    #[test]
    fn test_variable_out_of_range_message() {
        let err = ExpressionParseError::VariableOutOfRange {
            variable: Arc::from("x_99999999999999999999999"),
            input: Arc::from("x_99999999999999999999999'"),
        };
        assert!(err.to_string().starts_with("Variable x_99999999999999999999999 is out of range"));
    }

    #[test]
    fn test_converts_to_invalid_data() {
        let io_err: io::Error = ExpressionParseError::InvalidSyntax {
            message: Arc::from("bad"),
            input: Arc::from("?"),
            position: None,
        }
        .into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
