//! Parsing support for minimized expressions

use super::error::ExpressionParseError;
use super::Expression;
use lalrpop_util::ParseError;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/kmap_expr.rs"));
}

impl Expression {
    /// Parse an expression in the syntax produced by `Display`
    ///
    /// Whitespace between tokens is ignored, so `x_0 x_1'+x_2` is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::Expression;
    ///
    /// let expr = Expression::parse("(x_0 + x_1')(x_2)").unwrap();
    /// assert_eq!(expr.to_string(), "(x_0 + x_1')(x_2)");
    /// assert!(Expression::parse("x_0 +").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ExpressionParseError> {
        parser_impl::ExprParser::new()
            .parse(input)
            .map_err(|e| to_parse_error(e, input))
    }
}

impl std::str::FromStr for Expression {
    type Err = ExpressionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}

fn to_parse_error<T: std::fmt::Display>(
    error: ParseError<usize, T, String>,
    input: &str,
) -> ExpressionParseError {
    let position = match &error {
        ParseError::InvalidToken { location } => Some(*location),
        ParseError::UnrecognizedEof { location, .. } => Some(*location),
        ParseError::UnrecognizedToken {
            token: (start, _, _),
            ..
        } => Some(*start),
        ParseError::ExtraToken {
            token: (start, _, _),
        } => Some(*start),
        ParseError::User { error: variable } => {
            return ExpressionParseError::VariableOutOfRange {
                variable: Arc::from(variable.as_str()),
                input: Arc::from(input),
            }
        }
    };
    ExpressionParseError::InvalidSyntax {
        message: Arc::from(error.to_string().as_str()),
        input: Arc::from(input),
        position,
    }
}
