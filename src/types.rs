//! Type definitions for maze cells, grid coordinates and movement directions.

/// State of a single maze cell.
///
/// The grid doubles as terrain map and search record: a cell starts out as terrain and the
/// breadth-first search overwrites open cells with their distance from the entry. No separate
/// visited set exists, so a cell counts as visited exactly when [`Cell::depth`] returns a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Impassable cell.
    ///
    /// This variant represents both the fixed exterior border and the randomly placed interior
    /// obstacles.
    Wall,
    /// Open cell the search has not reached yet.
    Unvisited,
    /// Bottom-row cell the search has not connected to the entry.
    GoalUnreached,
    /// The single cell the search starts from, at depth 1.
    Entry,
    /// Open cell labelled by the search with its distance from the entry.
    ///
    /// The stored depth is always greater than [`Cell::ENTRY_DEPTH`].
    Visited(u32),
}

impl Cell {
    /// Depth carried by the entry cell.
    pub const ENTRY_DEPTH: u32 = 1;

    /// Returns the search depth of the cell, if it has one.
    ///
    /// Only the entry and cells labelled by the search carry a depth; walls, open cells and
    /// unreached goal cells return [`None`].
    pub const fn depth(self) -> Option<u32> {
        match self {
            Self::Entry => Some(Self::ENTRY_DEPTH),
            Self::Visited(depth) => Some(depth),
            Self::Wall | Self::Unvisited | Self::GoalUnreached => None,
        }
    }

    /// Returns whether the cell has been reached by the search.
    pub const fn is_reached(self) -> bool {
        self.depth().is_some()
    }
}

/// Zero-based grid coordinate, counted from the top-left corner of the bordered grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Row index, growing downwards.
    pub row: usize,
    /// Column index, growing to the right.
    pub col: usize,
}

impl Position {
    /// Builds a position from a row and a column index.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Unit moves between orthogonally adjacent cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// One column to the left.
    Left,
    /// One column to the right.
    Right,
    /// One row up.
    Up,
    /// One row down.
    Down,
}

impl Direction {
    /// Moves tried by the search from a dequeued cell, in order.
    ///
    /// Up is never explored, so the search only makes progress sideways or down the maze.
    pub(crate) const EXPLORE: [Self; 3] = [Self::Left, Self::Right, Self::Down];

    /// Moves tried when walking back from the goal towards the entry, in order.
    pub(crate) const TRACE: [Self; 3] = [Self::Left, Self::Right, Self::Up];

    /// Returns the position one step away in this direction.
    ///
    /// Steps that would leave the non-negative coordinate space return [`None`]; the upper bound is
    /// left to the grid lookup.
    pub(crate) const fn step(self, from: Position) -> Option<Position> {
        let (row, col) = match self {
            Self::Left => (Some(from.row), from.col.checked_sub(1)),
            Self::Right => (Some(from.row), from.col.checked_add(1)),
            Self::Up => (from.row.checked_sub(1), Some(from.col)),
            Self::Down => (from.row.checked_add(1), Some(from.col)),
        };

        match (row, col) {
            (Some(row), Some(col)) => Some(Position::new(row, col)),
            _ => None,
        }
    }
}
