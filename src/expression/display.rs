//! Display formatting for minimized expressions

use super::{Expression, Literal, Term};
use std::fmt;

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x_{}", self.var)?;
        if self.negated {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl Term {
    /// Literals concatenated; an empty product is `1`
    fn fmt_product(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "1");
        }
        for literal in &self.literals {
            write!(f, "{}", literal)?;
        }
        Ok(())
    }

    /// Parenthesised literals joined by ` + `; an empty sum is `(0)`
    fn fmt_sum(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "(0)");
        }
        write!(f, "(")?;
        for (i, literal) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", literal)?;
        }
        write!(f, ")")
    }
}

/// Formats in the syntax accepted by [`Expression::parse`]
///
/// # Examples
///
/// ```
/// use kmap_logic::{minimize, Form};
///
/// let result = minimize(3, &[0, 1, 2, 5, 6, 7], &[], Form::Sop);
/// assert_eq!(result.expression().to_string(), "x_0'x_1' + x_1x_2' + x_0x_2");
/// ```
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(value) => write!(f, "{}", if *value { "1" } else { "0" }),
            Expression::Sop(terms) if terms.is_empty() => write!(f, "0"),
            Expression::Pos(terms) if terms.is_empty() => write!(f, "1"),
            Expression::Sop(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    term.fmt_product(f)?;
                }
                Ok(())
            }
            Expression::Pos(terms) => {
                for term in terms {
                    term.fmt_sum(f)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::new(3, false).to_string(), "x_3");
        assert_eq!(Literal::new(0, true).to_string(), "x_0'");
    }

    #[test]
    fn test_empty_forms() {
        assert_eq!(Expression::Sop(vec![]).to_string(), "0");
        assert_eq!(Expression::Pos(vec![]).to_string(), "1");
        assert_eq!(Expression::Sop(vec![Term::default()]).to_string(), "1");
        assert_eq!(Expression::Pos(vec![Term::default()]).to_string(), "(0)");
    }

    #[test]
    fn test_pos_display() {
        let expr = Expression::Pos(vec![
            Term::new(vec![Literal::new(0, false), Literal::new(1, true)]),
            Term::new(vec![Literal::new(2, false)]),
        ]);
        assert_eq!(expr.to_string(), "(x_0 + x_1')(x_2)");
    }

    #[test]
    fn test_sop_display() {
        let expr = Expression::Sop(vec![
            Term::new(vec![Literal::new(0, false), Literal::new(2, true)]),
            Term::new(vec![Literal::new(1, false)]),
        ]);
        assert_eq!(expr.to_string(), "x_0x_2' + x_1");
    }
}
