//! Rectangles for implicant groups on a toroidal grid
//!
//! Each group is bounded independently per axis by the shortest cyclic
//! window holding all of its rows (resp. columns). A window running past the
//! last row or column is drawn as extra tiles shifted back by the grid size.

use super::layout::GridLayout;
use crate::truth_table::Position;
use std::collections::BTreeSet;
use tracing::debug;

/// One drawable piece of a rectangle
///
/// `row`/`col` may be negative or run past the grid; renderers clip tiles to
/// the grid, and the clipped tiles of a rectangle together show its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Top row, possibly negative
    pub row: isize,
    /// Left column, possibly negative
    pub col: isize,
    /// Height in cells
    pub height: usize,
    /// Width in cells
    pub width: usize,
}

/// The minimal toroidal rectangle around one group
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rectangle {
    /// Index of the originating group
    pub group: usize,
    /// First row of the cyclic row window
    pub row: usize,
    /// First column of the cyclic column window
    pub col: usize,
    /// Rows spanned
    pub height: usize,
    /// Columns spanned
    pub width: usize,
    /// Tiles to draw: 1, 2 or 4 depending on wrap-around
    pub tiles: Vec<Tile>,
}

impl Rectangle {
    fn new(
        group: usize,
        rows: (usize, usize),
        cols: (usize, usize),
        grid: (usize, usize),
    ) -> Self {
        let (row, height) = rows;
        let (col, width) = cols;
        let (grid_rows, grid_cols) = grid;

        let row_offsets = wrap_offsets(row, height, grid_rows);
        let col_offsets = wrap_offsets(col, width, grid_cols);
        let tiles = row_offsets
            .iter()
            .flat_map(|&dr| {
                col_offsets.iter().map(move |&dc| Tile {
                    row: row as isize + dr,
                    col: col as isize + dc,
                    height,
                    width,
                })
            })
            .collect();

        Rectangle {
            group,
            row,
            col,
            height,
            width,
            tiles,
        }
    }

    /// Number of cells covered
    pub fn area(&self) -> usize {
        self.height * self.width
    }

    /// True when the rectangle is split across an edge
    pub fn wraps(&self) -> bool {
        self.tiles.len() > 1
    }

    /// Covered `(row, col)` cells on a `rows` x `cols` grid
    pub fn cells(&self, rows: usize, cols: usize) -> BTreeSet<(usize, usize)> {
        (0..self.height)
            .flat_map(|dr| (0..self.width).map(move |dc| (dr, dc)))
            .map(|(dr, dc)| ((self.row + dr) % rows, (self.col + dc) % cols))
            .collect()
    }
}

/// Drawing offsets along one axis: `[0]`, or `[0, -size]` when wrapping
fn wrap_offsets(start: usize, length: usize, size: usize) -> Vec<isize> {
    if start + length > size {
        vec![0, -(size as isize)]
    } else {
        vec![0]
    }
}

/// Shortest cyclic window `[start, start + length)` mod `size` holding `used`
///
/// Lengths are tried from 1 upward and starts from 0 upward; the first fit
/// wins. Returns `None` only when `used` is empty.
///
/// # Examples
///
/// ```
/// use kmap_logic::minimal_cyclic_interval;
///
/// assert_eq!(minimal_cyclic_interval(&[1, 2], 4), Some((1, 2)));
/// // rows 0 and 3 are neighbours across the edge
/// assert_eq!(minimal_cyclic_interval(&[0, 3], 4), Some((3, 2)));
/// assert_eq!(minimal_cyclic_interval(&[0, 1, 2, 3], 4), Some((0, 4)));
/// ```
pub fn minimal_cyclic_interval(used: &[usize], size: usize) -> Option<(usize, usize)> {
    if used.is_empty() || size == 0 {
        return None;
    }
    (1..=size).find_map(|length| {
        (0..size)
            .find(|&start| {
                used.iter()
                    .all(|&index| (index + size - start) % size < length)
            })
            .map(|start| (start, length))
    })
}

/// Rectangles for every group, largest first
///
/// Positions are placed with `layout`. With `map_selector` set, only the
/// positions lying on that map are considered and groups with none there are
/// skipped; without it the map bit is ignored. Every group is expected to be
/// an implicant produced by the minimizer, so its cells on one map always
/// form a rectangle of power-of-two sides.
///
/// Output is sorted by descending area, then by group index.
///
/// # Examples
///
/// ```
/// use kmap_logic::{resolve_rectangles, GridLayout};
///
/// let layout = GridLayout::for_variables(4).unwrap();
/// // the four corners: x_1 = 0 and x_3 = 0
/// let rects = resolve_rectangles(&[vec![0, 2, 8, 10]], &layout, None);
/// assert_eq!(rects.len(), 1);
/// assert_eq!((rects[0].row, rects[0].col), (3, 3));
/// assert_eq!(rects[0].tiles.len(), 4);
/// ```
pub fn resolve_rectangles(
    groups: &[Vec<Position>],
    layout: &GridLayout,
    map_selector: Option<u32>,
) -> Vec<Rectangle> {
    let (rows, cols) = (layout.rows(), layout.cols());

    let mut rectangles: Vec<Rectangle> = groups
        .iter()
        .enumerate()
        .filter_map(|(index, group)| {
            let cells: Vec<_> = group
                .iter()
                .map(|&p| layout.cell_of(p))
                .filter(|cell| map_selector.map_or(true, |map| cell.map == map))
                .collect();

            let used_rows: Vec<usize> = dedup(cells.iter().map(|c| c.row));
            let used_cols: Vec<usize> = dedup(cells.iter().map(|c| c.col));

            let row_window = minimal_cyclic_interval(&used_rows, rows)?;
            let col_window = minimal_cyclic_interval(&used_cols, cols)?;
            let rectangle = Rectangle::new(index, row_window, col_window, (rows, cols));
            debug!(
                "group {}: rows {:?} cols {:?} -> {} tile(s)",
                index,
                row_window,
                col_window,
                rectangle.tiles.len()
            );
            Some(rectangle)
        })
        .collect();

    rectangles.sort_by(|a, b| b.area().cmp(&a.area()).then(a.group.cmp(&b.group)));
    rectangles
}

fn dedup(indices: impl Iterator<Item = usize>) -> Vec<usize> {
    indices.collect::<BTreeSet<_>>().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{minimize, Form};

    #[test]
    fn test_interval_single_index() {
        assert_eq!(minimal_cyclic_interval(&[2], 4), Some((2, 1)));
        assert_eq!(minimal_cyclic_interval(&[0], 1), Some((0, 1)));
    }

    #[test]
    fn test_interval_prefers_smallest_start() {
        assert_eq!(minimal_cyclic_interval(&[0, 1], 4), Some((0, 2)));
        assert_eq!(minimal_cyclic_interval(&[0, 1], 2), Some((0, 2)));
    }

    #[test]
    fn test_interval_empty() {
        assert_eq!(minimal_cyclic_interval(&[], 4), None);
    }

    #[test]
    fn test_wrap_offsets() {
        assert_eq!(wrap_offsets(1, 2, 4), vec![0]);
        assert_eq!(wrap_offsets(3, 2, 4), vec![0, -4]);
    }

    #[test]
    fn test_single_cell() {
        let layout = GridLayout::for_variables(4).unwrap();
        let rects = resolve_rectangles(&[vec![5]], &layout, None);
        // 0101: row code 01 -> 1, col code 01 -> 1
        assert_eq!(rects[0].tiles, vec![Tile { row: 1, col: 1, height: 1, width: 1 }]);
        assert!(!rects[0].wraps());
    }

    #[test]
    fn test_column_wrap_splits_in_two() {
        let layout = GridLayout::for_variables(3).unwrap();
        // x_2 = 0: columns 00 and 10 -> Gray indices 0 and 3
        let rects = resolve_rectangles(&[vec![0, 2, 4, 6]], &layout, None);
        let r = &rects[0];
        assert_eq!((r.row, r.col, r.height, r.width), (0, 3, 2, 2));
        assert_eq!(
            r.tiles,
            vec![
                Tile { row: 0, col: 3, height: 2, width: 2 },
                Tile { row: 0, col: -1, height: 2, width: 2 },
            ]
        );
        assert_eq!(
            r.cells(2, 4),
            [(0, 0), (0, 3), (1, 0), (1, 3)].into_iter().collect()
        );
    }

    #[test]
    fn test_sorted_by_area_then_group() {
        let layout = GridLayout::for_variables(4).unwrap();
        let groups = vec![vec![15], vec![0, 1], vec![0, 1, 2, 3], vec![4, 5]];
        let order: Vec<usize> = resolve_rectangles(&groups, &layout, None)
            .iter()
            .map(|r| r.group)
            .collect();
        assert_eq!(order, vec![2, 1, 3, 0]);
    }

    #[test]
    fn test_map_selector_filters_groups() {
        let layout = GridLayout::for_variables(5).unwrap();
        // 0-000 spans both maps, 10000 only map 1
        let groups = vec![vec![0, 16], vec![16]];
        let map0 = resolve_rectangles(&groups, &layout, Some(0));
        let map1 = resolve_rectangles(&groups, &layout, Some(1));
        assert_eq!(map0.len(), 1);
        assert_eq!(map0[0].group, 0);
        assert_eq!(map1.len(), 2);
        assert!(map1.iter().all(|r| r.area() == 1));
    }

    #[test]
    fn test_rectangles_match_minimized_groups() {
        let layout = GridLayout::for_variables(4).unwrap();
        let result = minimize(4, &[0, 2, 5, 7, 8, 10, 13, 15], &[], Form::Sop);
        let groups = result.groups();
        for rect in resolve_rectangles(&groups, &layout, None) {
            let expected: BTreeSet<(usize, usize)> = groups[rect.group]
                .iter()
                .map(|&p| {
                    let cell = layout.cell_of(p);
                    (cell.row, cell.col)
                })
                .collect();
            assert_eq!(rect.cells(layout.rows(), layout.cols()), expected);
            assert_eq!(rect.area(), groups[rect.group].len());
        }
    }
}
