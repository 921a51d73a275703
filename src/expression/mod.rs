//! Minimized Boolean expressions over `x_0 .. x_{n-1}`
//!
//! An [`Expression`] is what the minimizer renders: a constant, a sum of
//! products or a product of sums. It can be printed, parsed back from its
//! printed form and evaluated at any truth table position, which makes it
//! possible to check a result against the table it came from.
//!
//! # Syntax
//!
//! - literal: `x_2` or its complement `x_2'`
//! - SOP: products are concatenated literals, joined by ` + `: `x_0x_2' + x_1`
//! - POS: factors are parenthesised sums, concatenated: `(x_0 + x_1')(x_2)`
//! - constants: `0`, `1`

mod display;
mod error;
mod parser;

pub use error::ExpressionParseError;

use crate::cover::{Cube, Form};
use crate::truth_table::Position;

/// A possibly complemented variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// Variable index (`x_var`)
    pub var: usize,
    /// Whether the literal is complemented (`x_var'`)
    pub negated: bool,
}

impl Literal {
    /// Create a literal
    pub fn new(var: usize, negated: bool) -> Self {
        Literal { var, negated }
    }

    /// Value of the literal at `position` of an `num_vars` variable table
    ///
    /// Variables beyond `num_vars` read as 0.
    pub fn evaluate(&self, position: Position, num_vars: usize) -> bool {
        let bit = num_vars
            .checked_sub(self.var + 1)
            .map(|shift| shift < 32 && (position >> shift) & 1 == 1)
            .unwrap_or(false);
        bit != self.negated
    }
}

/// A product (in SOP) or a sum (in POS) of literals
///
/// An empty product is 1 and an empty sum is 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Term {
    literals: Vec<Literal>,
}

impl Term {
    /// Create a term from its literals
    pub fn new(literals: Vec<Literal>) -> Self {
        Term { literals }
    }

    /// The literals, in variable order when built from a cube
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Render a cube: SOP maps `1 -> x_i`, `0 -> x_i'`; POS the reverse
    fn from_cube(cube: &Cube, form: Form) -> Self {
        let literals = cube
            .inputs()
            .iter()
            .enumerate()
            .filter_map(|(var, input)| {
                input.map(|bit| {
                    let negated = match form {
                        Form::Sop => !bit,
                        Form::Pos => bit,
                    };
                    Literal::new(var, negated)
                })
            })
            .collect();
        Term { literals }
    }
}

/// A minimized Boolean expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Constant 0 or 1
    Constant(bool),
    /// Sum of products
    Sop(Vec<Term>),
    /// Product of sums
    Pos(Vec<Term>),
}

impl Expression {
    /// Render chosen cubes in the given form
    ///
    /// For [`Form::Pos`] the cubes are zero-cubes (they cover false positions).
    pub fn from_cubes(form: Form, cubes: &[Cube]) -> Self {
        let terms = cubes.iter().map(|c| Term::from_cube(c, form)).collect();
        match form {
            Form::Sop => Expression::Sop(terms),
            Form::Pos => Expression::Pos(terms),
        }
    }

    /// Value of the expression at `position`
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::Expression;
    ///
    /// let expr = Expression::parse("x_0x_1' + x_2").unwrap();
    /// assert!(expr.evaluate(0b100, 3));
    /// assert!(expr.evaluate(0b001, 3));
    /// assert!(!expr.evaluate(0b110, 3));
    /// ```
    pub fn evaluate(&self, position: Position, num_vars: usize) -> bool {
        let literal_true = |l: &Literal| l.evaluate(position, num_vars);
        match self {
            Expression::Constant(value) => *value,
            Expression::Sop(terms) => terms
                .iter()
                .any(|t| t.literals.iter().all(literal_true)),
            Expression::Pos(terms) => terms
                .iter()
                .all(|t| t.literals.iter().any(literal_true)),
        }
    }

    /// All positions of an `num_vars` variable table where the expression is 1
    pub fn on_set(&self, num_vars: usize) -> Vec<Position> {
        (0..1 << num_vars)
            .filter(|&p| self.evaluate(p, num_vars))
            .collect()
    }

    /// Terms of the expression (empty for constants)
    pub fn terms(&self) -> &[Term] {
        match self {
            Expression::Constant(_) => &[],
            Expression::Sop(terms) | Expression::Pos(terms) => terms,
        }
    }

    /// Total number of literals
    pub fn num_literals(&self) -> usize {
        self.terms().iter().map(|t| t.literals.len()).sum()
    }

    /// Highest variable index used plus one
    pub fn num_vars(&self) -> usize {
        self.terms()
            .iter()
            .flat_map(|t| t.literals.iter())
            .map(|l| l.var + 1)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_msb_first() {
        // position 0b10 over 2 variables: x_0 = 1, x_1 = 0
        assert!(Literal::new(0, false).evaluate(0b10, 2));
        assert!(!Literal::new(1, false).evaluate(0b10, 2));
        assert!(Literal::new(1, true).evaluate(0b10, 2));
    }

    #[test]
    fn test_literal_outside_table_reads_zero() {
        assert!(!Literal::new(4, false).evaluate(0b11, 2));
        assert!(Literal::new(4, true).evaluate(0b11, 2));
    }

    #[test]
    fn test_empty_terms() {
        assert!(Expression::Sop(vec![Term::default()]).evaluate(0, 2));
        assert!(!Expression::Pos(vec![Term::default()]).evaluate(0, 2));
        assert!(!Expression::Sop(vec![]).evaluate(0, 2));
        assert!(Expression::Pos(vec![]).evaluate(0, 2));
    }

    #[test]
    fn test_from_cubes_polarity() {
        let cube = Cube::minterm(2, 0).combine(&Cube::minterm(2, 2)).unwrap(); // -0
        let sop = Expression::from_cubes(Form::Sop, &[cube.clone()]);
        let pos = Expression::from_cubes(Form::Pos, &[cube]);
        assert_eq!(sop.terms()[0].literals(), &[Literal::new(1, true)]);
        assert_eq!(pos.terms()[0].literals(), &[Literal::new(1, false)]);
    }

    #[test]
    fn test_on_set() {
        let expr = Expression::from_cubes(Form::Sop, &[Cube::minterm(3, 5)]);
        assert_eq!(expr.on_set(3), vec![5]);
        assert_eq!(expr.num_literals(), 3);
        assert_eq!(expr.num_vars(), 3);
    }
}
