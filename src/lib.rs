//! # Karnaugh Map Logic Minimizer
//!
//! This crate minimizes Boolean functions of 2 to 5 variables with the
//! Quine-McCluskey method and lays the resulting implicant groups out on
//! Gray-coded Karnaugh maps.
//!
//! ## Overview
//!
//! A function is given by its true positions and its don't-care positions;
//! every other position is false. Position `p` assigns to variable `x_i` the
//! bit `(p >> (num_vars - 1 - i)) & 1`, so `x_0` is the most significant bit.
//!
//! The minimizer produces:
//!
//! - a minimal-cost expression in sum-of-products or product-of-sums form
//! - the groups: positions covered by every chosen implicant
//!
//! The geometry layer turns groups into rectangles on the map grid, splitting
//! those that wrap around an edge into several drawable tiles.
//!
//! ## Minimizing
//!
//! ```
//! use kmap_logic::{minimize, Form};
//!
//! // m(0, 1, 2, 5, 6, 7): a cyclic core with no essential primes
//! let result = minimize(3, &[0, 1, 2, 5, 6, 7], &[], Form::Sop);
//! assert_eq!(result.expression().to_string(), "x_0'x_1' + x_1x_2' + x_0x_2");
//! assert_eq!(result.groups(), vec![vec![0, 1], vec![2, 6], vec![5, 7]]);
//!
//! // Don't-cares may be absorbed into larger groups
//! let result = minimize(3, &[1, 3, 5], &[7], Form::Sop);
//! assert_eq!(result.expression().to_string(), "x_2");
//! ```
//!
//! Product-of-sums runs on the false positions:
//!
//! ```
//! use kmap_logic::{minimize, Form};
//!
//! let result = minimize(2, &[1, 2], &[], Form::Pos);
//! assert_eq!(result.expression().to_string(), "(x_0 + x_1)(x_0' + x_1')");
//! ```
//!
//! ## Checked Input
//!
//! [`minimize`] trusts its arguments. [`TruthTable`] validates them, and can
//! also be read from a single-output PLA description:
//!
//! ```
//! use kmap_logic::{Form, TruthTable};
//!
//! # fn main() -> Result<(), kmap_logic::KmapError> {
//! let table = TruthTable::from_pla_str(".i 2\n.o 1\n-1 1\n.e\n")?;
//! assert_eq!(table.true_set(), vec![1, 3]);
//! assert_eq!(table.minimize(Form::Sop).expression().to_string(), "x_1");
//!
//! assert!(TruthTable::from_sets(6, &[0], &[]).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Map Geometry
//!
//! ```
//! use kmap_logic::{minimize, resolve_rectangles, Form, GridLayout};
//!
//! # fn main() -> Result<(), kmap_logic::KmapError> {
//! let result = minimize(4, &[0, 2, 8, 10], &[], Form::Sop);
//! let layout = GridLayout::for_variables(4)?;
//! let rects = resolve_rectangles(&result.groups(), &layout, None);
//! // The four corners form one group split into four tiles
//! assert_eq!(rects[0].tiles.len(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: a summary of every minimization at
//! `debug` level and per-round merging details at `trace`. Install any
//! subscriber (the `kmap` binary uses `tracing-subscriber`) to see them.

pub mod cover;
pub mod error;
pub mod expression;
pub mod geometry;
pub mod truth_table;

pub use cover::{minimize, minimize_with_config, Cube, Form, Minimized, TieBreak};
pub use error::KmapError;
pub use expression::{Expression, ExpressionParseError, Literal, Term};
pub use geometry::{
    gray_code, gray_rank, minimal_cyclic_interval, resolve_rectangles, Cell, GridLayout,
    Rectangle, Tile,
};
pub use truth_table::{CellValue, PlaError, PlaReadError, Position, TruthTable, TruthTableError};

/// Configuration for the minimizer
///
/// Options only affect which of several equally sized covers is returned,
/// never whether a cover is correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MinimizeConfig {
    /// How to choose between implicants covering equally many positions
    /// during greedy completion
    pub tie_break: TieBreak,
}

impl MinimizeConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tie-break rule
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
