//! Truth tables of 2 to 5 variables
//!
//! [`TruthTable`] is the validated entry point for callers: it rejects
//! out-of-range positions, unsupported variable counts and overlapping
//! true/don't-care sets before anything reaches the minimizer.

mod error;
mod pla;

pub use error::{PlaError, PlaReadError, TruthTableError};

use crate::cover::{self, Form, Minimized};
use crate::MinimizeConfig;

/// A row index of the truth table
///
/// Bit `num_vars - 1 - i` of a position holds the value of variable `x_i`.
pub type Position = u32;

/// Value of a single truth table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellValue {
    /// The function is 0
    #[default]
    False = 0,
    /// The function is 1
    True = 1,
    /// The function value is unconstrained
    DontCare = 2,
}

impl CellValue {
    /// Next value in the `0 -> 1 -> X -> 0` editing cycle
    pub fn cycled(self) -> CellValue {
        match self {
            CellValue::False => CellValue::True,
            CellValue::True => CellValue::DontCare,
            CellValue::DontCare => CellValue::False,
        }
    }

    /// Character used when printing tables
    pub fn symbol(self) -> char {
        match self {
            CellValue::False => '0',
            CellValue::True => '1',
            CellValue::DontCare => 'X',
        }
    }
}

impl From<CellValue> for u8 {
    fn from(value: CellValue) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for CellValue {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellValue::False),
            1 => Ok(CellValue::True),
            2 => Ok(CellValue::DontCare),
            other => Err(other),
        }
    }
}

/// A complete truth table over `num_vars` variables
///
/// Unlisted positions are `False`.
///
/// # Examples
///
/// ```
/// use kmap_logic::{CellValue, Form, TruthTable};
///
/// let table = TruthTable::from_sets(2, &[1, 3], &[]).unwrap();
/// assert_eq!(table.value(1), Some(CellValue::True));
/// assert_eq!(table.value(0), Some(CellValue::False));
///
/// let result = table.minimize(Form::Sop);
/// assert_eq!(result.expression().to_string(), "x_1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    num_vars: usize,
    cells: Vec<CellValue>,
}

impl TruthTable {
    /// Smallest supported number of variables
    pub const MIN_VARS: usize = 2;
    /// Largest supported number of variables
    pub const MAX_VARS: usize = 5;

    /// Create an all-`False` table
    pub fn new(num_vars: usize) -> Result<Self, TruthTableError> {
        check_variable_count(num_vars)?;
        Ok(TruthTable {
            num_vars,
            cells: vec![CellValue::False; 1 << num_vars],
        })
    }

    /// Create a table from its true and don't-care positions
    ///
    /// Duplicate positions within one list are accepted; a position present
    /// in both lists is rejected.
    pub fn from_sets(
        num_vars: usize,
        ones: &[Position],
        dont_cares: &[Position],
    ) -> Result<Self, TruthTableError> {
        let mut table = TruthTable::new(num_vars)?;
        for &position in ones {
            table.set(position, CellValue::True)?;
        }
        for &position in dont_cares {
            if table.value(position) == Some(CellValue::True) {
                return Err(TruthTableError::OverlappingPosition { position });
            }
            table.set(position, CellValue::DontCare)?;
        }
        Ok(table)
    }

    /// Number of variables
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Number of positions (`2^num_vars`)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a table has at least 4 positions
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value at `position`, or `None` when out of range
    pub fn value(&self, position: Position) -> Option<CellValue> {
        self.cells.get(position as usize).copied()
    }

    /// Set the value at `position`
    pub fn set(&mut self, position: Position, value: CellValue) -> Result<(), TruthTableError> {
        let num_vars = self.num_vars;
        let cell = self
            .cells
            .get_mut(position as usize)
            .ok_or(TruthTableError::PositionOutOfRange { position, num_vars })?;
        *cell = value;
        Ok(())
    }

    /// Advance the cell at `position` through `0 -> 1 -> X -> 0`
    ///
    /// Returns the new value.
    pub fn toggle(&mut self, position: Position) -> Result<CellValue, TruthTableError> {
        let value = self
            .value(position)
            .ok_or(TruthTableError::PositionOutOfRange {
                position,
                num_vars: self.num_vars,
            })?
            .cycled();
        self.set(position, value)?;
        Ok(value)
    }

    /// Iterate over `(position, value)` pairs in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellValue)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &value)| (i as Position, value))
    }

    /// Positions holding `value`, ascending
    pub fn positions_with(&self, value: CellValue) -> Vec<Position> {
        self.iter()
            .filter(|&(_, v)| v == value)
            .map(|(p, _)| p)
            .collect()
    }

    /// Positions where the function is 1
    pub fn true_set(&self) -> Vec<Position> {
        self.positions_with(CellValue::True)
    }

    /// Positions where the function is unconstrained
    pub fn dont_care_set(&self) -> Vec<Position> {
        self.positions_with(CellValue::DontCare)
    }

    /// Positions where the function is 0
    pub fn false_set(&self) -> Vec<Position> {
        self.positions_with(CellValue::False)
    }

    /// Minimize with the default configuration
    pub fn minimize(&self, form: Form) -> Minimized {
        self.minimize_with_config(form, &MinimizeConfig::default())
    }

    /// Minimize with an explicit configuration
    pub fn minimize_with_config(&self, form: Form, config: &MinimizeConfig) -> Minimized {
        cover::minimize_with_config(
            self.num_vars,
            &self.true_set(),
            &self.dont_care_set(),
            form,
            config,
        )
    }
}

pub(crate) fn check_variable_count(num_vars: usize) -> Result<(), TruthTableError> {
    if (TruthTable::MIN_VARS..=TruthTable::MAX_VARS).contains(&num_vars) {
        Ok(())
    } else {
        Err(TruthTableError::UnsupportedVariableCount { count: num_vars })
    }
}
