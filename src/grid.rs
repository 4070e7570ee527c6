//! Row-major cell storage with bounds-checked access.

use crate::types::{Cell, Direction, Position};

/// Square-ish table of maze cells.
///
/// Rows are kept as separate vectors so the border pass can prepend and append whole rows and
/// insert cells at either end of each row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    /// Cell rows, top to bottom.
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates a `length` by `length` grid with every cell set to `cell`.
    pub(crate) fn filled(length: usize, cell: Cell) -> Self {
        Self {
            rows: vec![vec![cell; length]; length],
        }
    }

    /// Wraps already built rows.
    pub(crate) const fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Returns the rows of the grid.
    pub(crate) fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Returns the rows of the grid for structural edits.
    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Vec<Cell>> {
        &mut self.rows
    }

    /// Number of rows.
    pub(crate) fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in the first row, or zero for an empty grid.
    pub(crate) fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns the cell at `pos`, or [`None`] when it lies outside the grid.
    pub(crate) fn get(&self, pos: Position) -> Option<Cell> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    /// Overwrites the cell at `pos`.
    ///
    /// Positions outside the grid are ignored.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        if let Some(slot) = self
            .rows
            .get_mut(pos.row)
            .and_then(|row| row.get_mut(pos.col))
        {
            *slot = cell;
        }
    }

    /// Returns the neighbour of `pos` in `direction` together with its state.
    pub(crate) fn neighbor(&self, pos: Position, direction: Direction) -> Option<(Position, Cell)> {
        let next = direction.step(pos)?;
        self.get(next).map(|cell| (next, cell))
    }

    /// Iterates over every cell with its position, row by row.
    pub(crate) fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row_idx, row)| {
            row.iter()
                .enumerate()
                .map(move |(col_idx, cell)| (Position::new(row_idx, col_idx), *cell))
        })
    }
}
