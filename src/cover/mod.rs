//! Quine-McCluskey minimization of small Boolean functions
//!
//! This module turns true/don't-care position sets into a minimal-cost
//! sum-of-products or product-of-sums [`Expression`] together with the
//! groups (covered positions of every chosen implicant) that justify it.
//!
//! The pipeline is:
//! 1. seed one fully constrained cube per true or don't-care position
//! 2. merge cubes round by round until only prime implicants remain
//! 3. pick every essential prime, then fill greedily
//! 4. render the chosen cubes as literals
//!
//! Product-of-sums runs the same pipeline on the complement (the false
//! positions) and renders each zero-cube as a sum with flipped polarity.

mod covering;
mod cubes;
mod primes;

pub use covering::TieBreak;
pub use cubes::Cube;

use crate::expression::Expression;
use crate::truth_table::Position;
use crate::MinimizeConfig;
use std::collections::BTreeSet;
use tracing::debug;

/// Normal form of the minimized expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Form {
    /// Sum of products, built from the true positions
    #[default]
    Sop,
    /// Product of sums, built from the false positions
    Pos,
}

/// The outcome of a minimization
///
/// For [`Form::Pos`] the cubes and groups describe zero-cubes: they cover
/// false positions, which is what a map overlay of a POS solution shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minimized {
    num_vars: usize,
    form: Form,
    expression: Expression,
    cubes: Vec<Cube>,
    essential_count: usize,
}

impl Minimized {
    /// The minimized expression
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Number of variables of the minimized function
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// The requested normal form
    pub fn form(&self) -> Form {
        self.form
    }

    /// Chosen implicants in cover order (essentials first)
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// The essential prime implicants of the cover
    pub fn essentials(&self) -> &[Cube] {
        &self.cubes[..self.essential_count]
    }

    /// Covered positions of every chosen implicant, each ascending
    pub fn groups(&self) -> Vec<Vec<Position>> {
        self.cubes.iter().map(|c| c.positions().to_vec()).collect()
    }

    /// Number of literals in the expression
    pub fn num_literals(&self) -> usize {
        self.cubes.iter().map(Cube::num_literals).sum()
    }
}

/// Minimize a function with the default configuration
///
/// `ones` and `dont_cares` must be disjoint subsets of `0..2^num_vars` and
/// `num_vars` must lie in `2..=5`; nothing is validated here (use
/// [`TruthTable`](crate::TruthTable) for checked input). Duplicate positions
/// are ignored and input order does not matter.
///
/// # Examples
///
/// ```
/// use kmap_logic::{minimize, Form};
///
/// let sop = minimize(2, &[1, 3], &[], Form::Sop);
/// assert_eq!(sop.expression().to_string(), "x_1");
/// assert_eq!(sop.groups(), vec![vec![1, 3]]);
///
/// let pos = minimize(2, &[1, 3], &[], Form::Pos);
/// assert_eq!(pos.expression().to_string(), "(x_1)");
/// assert_eq!(pos.groups(), vec![vec![0, 2]]);
/// ```
pub fn minimize(
    num_vars: usize,
    ones: &[Position],
    dont_cares: &[Position],
    form: Form,
) -> Minimized {
    minimize_with_config(num_vars, ones, dont_cares, form, &MinimizeConfig::default())
}

/// Minimize a function with an explicit configuration
pub fn minimize_with_config(
    num_vars: usize,
    ones: &[Position],
    dont_cares: &[Position],
    form: Form,
    config: &MinimizeConfig,
) -> Minimized {
    let ones: BTreeSet<Position> = ones.iter().copied().collect();
    let dont_cares: BTreeSet<Position> = dont_cares.iter().copied().collect();

    let required = match form {
        Form::Sop => ones,
        Form::Pos => (0..1 << num_vars)
            .filter(|p| !ones.contains(p) && !dont_cares.contains(p))
            .collect(),
    };

    solve(num_vars, &required, &dont_cares, form, config)
}

/// Cover `required` (true positions for SOP, false positions for POS)
fn solve(
    num_vars: usize,
    required: &BTreeSet<Position>,
    dont_cares: &BTreeSet<Position>,
    form: Form,
    config: &MinimizeConfig,
) -> Minimized {
    // Empty product sum is 0, empty sum product is 1
    let empty_value = form == Form::Pos;

    if required.is_empty() {
        debug!("{:?}: nothing to cover, constant {}", form, empty_value as u8);
        return Minimized {
            num_vars,
            form,
            expression: Expression::Constant(empty_value),
            cubes: Vec::new(),
            essential_count: 0,
        };
    }

    // A universe cube renders as the constant, never as `1` or `(0)` terms.
    // For POS this includes an empty true set with some don't-cares.
    if required.len() + dont_cares.len() == 1 << num_vars {
        debug!("{:?}: whole space covered, constant {}", form, !empty_value as u8);
        return Minimized {
            num_vars,
            form,
            expression: Expression::Constant(!empty_value),
            cubes: vec![Cube::universe(num_vars)],
            essential_count: 1,
        };
    }

    let seeds: Vec<Position> = required.union(dont_cares).copied().collect();
    let primes = primes::prime_implicants(num_vars, &seeds);
    let selection = covering::select_cover(&primes, required, config.tie_break);
    debug!(
        "{:?}: {} primes, {} essential, {} chosen",
        form,
        primes.len(),
        selection.essential_count,
        selection.chosen.len()
    );

    let cubes: Vec<Cube> = selection
        .chosen
        .iter()
        .map(|&i| primes[i].clone())
        .collect();

    Minimized {
        num_vars,
        form,
        expression: Expression::from_cubes(form, &cubes),
        cubes,
        essential_count: selection.essential_count,
    }
}
