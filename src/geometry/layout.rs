//! Grid layout of a Karnaugh map
//!
//! A position splits, from the most significant bit down, into an optional
//! map selector bit, the row bits and the column bits. Rows and columns are
//! indexed in Gray order.

use super::gray::{gray_code, gray_rank};
use crate::truth_table::{check_variable_count, Position, TruthTableError};

/// A grid cell: map index, Gray row index and Gray column index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Which map the cell belongs to (always 0 below 5 variables)
    pub map: u32,
    /// Row index in Gray order
    pub row: usize,
    /// Column index in Gray order
    pub col: usize,
}

/// Shape of the map(s) for a given number of variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridLayout {
    row_bits: u32,
    col_bits: u32,
    map_bits: u32,
}

impl GridLayout {
    /// A single map with the given row and column bit counts
    pub fn new(row_bits: u32, col_bits: u32) -> Self {
        GridLayout {
            row_bits,
            col_bits,
            map_bits: 0,
        }
    }

    /// The standard layout for `num_vars` variables
    ///
    /// | vars | maps | rows x cols |
    /// |------|------|-------------|
    /// | 2    | 1    | 2 x 2       |
    /// | 3    | 1    | 2 x 4       |
    /// | 4    | 1    | 4 x 4       |
    /// | 5    | 2    | 4 x 4       |
    ///
    /// With 5 variables `x_0` selects the map.
    pub fn for_variables(num_vars: usize) -> Result<Self, TruthTableError> {
        check_variable_count(num_vars)?;
        let (map_bits, row_bits, col_bits) = match num_vars {
            2 => (0, 1, 1),
            3 => (0, 1, 2),
            4 => (0, 2, 2),
            _ => (1, 2, 2),
        };
        Ok(GridLayout {
            row_bits,
            col_bits,
            map_bits,
        })
    }

    /// Number of row bits
    pub fn row_bits(&self) -> u32 {
        self.row_bits
    }

    /// Number of column bits
    pub fn col_bits(&self) -> u32 {
        self.col_bits
    }

    /// Number of rows per map
    pub fn rows(&self) -> usize {
        1 << self.row_bits
    }

    /// Number of columns per map
    pub fn cols(&self) -> usize {
        1 << self.col_bits
    }

    /// Number of maps (1 or 2)
    pub fn num_maps(&self) -> u32 {
        1 << self.map_bits
    }

    /// Number of variables covered by the layout
    pub fn num_vars(&self) -> usize {
        (self.map_bits + self.row_bits + self.col_bits) as usize
    }

    /// Grid cell holding `position`
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::{Cell, GridLayout};
    ///
    /// let layout = GridLayout::for_variables(4).unwrap();
    /// // 0b0010: row bits 00 -> row 0, column bits 10 -> Gray index 3
    /// assert_eq!(layout.cell_of(2), Cell { map: 0, row: 0, col: 3 });
    /// ```
    pub fn cell_of(&self, position: Position) -> Cell {
        let col_code = position & ((1 << self.col_bits) - 1);
        let row_code = (position >> self.col_bits) & ((1 << self.row_bits) - 1);
        let map = position >> (self.col_bits + self.row_bits);
        Cell {
            map,
            row: gray_rank(row_code) as usize,
            col: gray_rank(col_code) as usize,
        }
    }

    /// Position shown at `row`, `col` of `map`
    pub fn position_at(&self, map: u32, row: usize, col: usize) -> Position {
        let row_code = gray_code(row as u32);
        let col_code = gray_code(col as u32);
        (map << (self.row_bits + self.col_bits)) | (row_code << self.col_bits) | col_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_shapes() {
        let shapes: Vec<(u32, usize, usize)> = (2..=5)
            .map(|n| {
                let l = GridLayout::for_variables(n).unwrap();
                (l.num_maps(), l.rows(), l.cols())
            })
            .collect();
        assert_eq!(shapes, vec![(1, 2, 2), (1, 2, 4), (1, 4, 4), (2, 4, 4)]);
        assert!(GridLayout::for_variables(6).is_err());
    }

    #[test]
    fn test_cell_round_trip_all_positions() {
        for n in 2..=5 {
            let layout = GridLayout::for_variables(n).unwrap();
            assert_eq!(layout.num_vars(), n);
            for position in 0..(1u32 << n) {
                let cell = layout.cell_of(position);
                assert_eq!(layout.position_at(cell.map, cell.row, cell.col), position);
            }
        }
    }

    #[test]
    fn test_adjacent_cells_differ_in_one_bit() {
        let layout = GridLayout::for_variables(4).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                let here = layout.position_at(0, row, col);
                let right = layout.position_at(0, row, (col + 1) % 4);
                let below = layout.position_at(0, (row + 1) % 4, col);
                assert_eq!((here ^ right).count_ones(), 1);
                assert_eq!((here ^ below).count_ones(), 1);
            }
        }
    }

    #[test]
    fn test_five_variable_map_selector() {
        let layout = GridLayout::for_variables(5).unwrap();
        assert_eq!(layout.cell_of(0b10000).map, 1);
        assert_eq!(layout.cell_of(0b01111).map, 0);
    }
}
