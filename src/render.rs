//! Text rendering of a maze with a route overlaid.

use crate::{
    grid::Grid,
    types::{Cell, Position},
};

/// Symbol for the entry cell.
pub(crate) const ENTRY_SYMBOL: char = 'S';
/// Symbol for walls, a black square.
pub(crate) const WALL_SYMBOL: char = '\u{25a0}';
/// Symbol for open cells the search never reached.
pub(crate) const UNVISITED_SYMBOL: char = 'o';
/// Symbol for goal cells the search never reached.
pub(crate) const GOAL_SYMBOL: char = '-';
/// Symbol for reached cells on the route.
pub(crate) const ROUTE_SYMBOL: char = '$';
/// Symbol for reached cells off the route.
pub(crate) const EXPLORED_SYMBOL: char = '+';

/// Returns the symbol drawn for `cell`, given whether it lies on the route.
pub(crate) const fn symbol(cell: Cell, on_route: bool) -> char {
    match cell {
        Cell::Entry => ENTRY_SYMBOL,
        Cell::Wall => WALL_SYMBOL,
        Cell::Unvisited => UNVISITED_SYMBOL,
        Cell::GoalUnreached => GOAL_SYMBOL,
        Cell::Visited(_) if on_route => ROUTE_SYMBOL,
        Cell::Visited(_) => EXPLORED_SYMBOL,
    }
}

/// Renders the grid one row per line, each cell as its symbol padded by a space on both sides.
///
/// Route membership is a plain containment check, so the order of `route` does not matter.
pub(crate) fn draw_route(grid: &Grid, route: &[Position]) -> String {
    let mut drawing = String::with_capacity(grid.height() * (grid.width() * 3 + 1));

    for (row_idx, row) in grid.rows().iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let on_route = route.contains(&Position::new(row_idx, col_idx));
            drawing.push(' ');
            drawing.push(symbol(*cell, on_route));
            drawing.push(' ');
        }
        drawing.push('\n');
    }

    drawing
}
