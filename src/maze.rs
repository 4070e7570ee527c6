//! Maze data and management module.
//!
//! This module contains the [`Maze`] struct, which owns the grid for its whole lifetime and
//! exposes the generation steps, the entry and goal lookups, the search, route reconstruction and
//! text rendering.

use log::{debug, info, warn};
use rand::Rng;

use crate::{
    grid::Grid,
    pathfinding, render,
    types::{Cell, Position},
};

/// Square maze with probabilistic interior walls, a fixed border, one entry and a goal row.
///
/// The expected lifecycle is construct, [`generate`](Maze::generate), [`solve`](Maze::solve),
/// [`route`](Maze::route) and finally [`draw_route`](Maze::draw_route). Generation and solving
/// mutate the grid in place; the lookups and rendering only read it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Interior side length, before the border is added.
    length: usize,
    /// Cell storage, bordered once [`add_outer_walls`](Maze::add_outer_walls) has run.
    grid: Grid,
    /// Cells labelled by the last search, in labelling order.
    explored: Vec<Position>,
}

impl Default for Maze {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LENGTH)
    }
}

impl Maze {
    /// Interior side length used by [`Maze::default`].
    pub const DEFAULT_LENGTH: usize = 11;

    /// Creates a `length` by `length` maze with every cell open.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            grid: Grid::filled(length, Cell::Unvisited),
            explored: Vec::new(),
        }
    }

    /// Creates a maze from an externally built interior grid.
    ///
    /// The rows are taken as they are, before border and entry setup, which allows building
    /// deterministic layouts by skipping [`add_interior_walls`](Maze::add_interior_walls).
    pub const fn with_grid(length: usize, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            length,
            grid: Grid::from_rows(rows),
            explored: Vec::new(),
        }
    }

    /// Returns the interior side length.
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the current rows of the grid, top to bottom.
    pub fn rows(&self) -> &[Vec<Cell>] {
        self.grid.rows()
    }

    /// Iterates over every cell with its position, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.grid.cells()
    }

    /// Returns the cell at `pos`, or [`None`] outside the grid.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.grid.get(pos)
    }

    /// Returns the cells labelled by the last call to [`solve`](Maze::solve), in labelling order.
    pub fn explored(&self) -> &[Position] {
        &self.explored
    }

    /// Runs the three generation steps in order: interior walls, border and entry.
    pub fn generate<R: Rng>(&mut self, rng: &mut R) {
        self.add_interior_walls(rng);
        self.add_outer_walls();
        self.set_entry_point();
    }

    /// Turns roughly 30% of the current cells into walls.
    ///
    /// For every cell a uniform integer in `1..=10` is drawn and the cell becomes a wall when the
    /// draw is divisible by three. Cells that are not picked keep their state.
    pub fn add_interior_walls<R: Rng>(&mut self, rng: &mut R) {
        let mut walls = 0_usize;

        for row in self.grid.rows_mut() {
            for cell in row {
                if rng.random_range(1..=10_u8) % 3 == 0 {
                    *cell = Cell::Wall;
                    walls += 1;
                }
            }
        }

        debug!(
            "placed {walls} interior walls in a {length}x{length} maze",
            length = self.length
        );
    }

    /// Surrounds the grid with its border.
    ///
    /// A row of walls goes on top and a row of unreached goal cells at the bottom, then every row,
    /// the two new ones included, gains a wall at each end. The corners therefore end up as walls.
    /// Meant to run once per maze.
    pub fn add_outer_walls(&mut self) {
        let width = self.grid.width();
        let rows = self.grid.rows_mut();

        rows.insert(0, vec![Cell::Wall; width]);
        rows.push(vec![Cell::GoalUnreached; width]);
        for row in rows.iter_mut() {
            row.insert(0, Cell::Wall);
            row.push(Cell::Wall);
        }
    }

    /// Places the entry in the middle of the top row and opens the cells on either side of it.
    ///
    /// The neighbours are forced open whatever generation put there, so the entry is never walled
    /// in on both sides.
    pub fn set_entry_point(&mut self) {
        let middle = self.grid.width() / 2;

        self.grid.set(Position::new(0, middle), Cell::Entry);
        if let Some(left) = middle.checked_sub(1) {
            self.grid.set(Position::new(0, left), Cell::Unvisited);
        }
        self.grid.set(Position::new(0, middle + 1), Cell::Unvisited);
    }

    /// Returns the first entry cell of the top row, scanning left to right.
    pub fn entry_point(&self) -> Option<Position> {
        let col = self
            .grid
            .rows()
            .first()?
            .iter()
            .position(|cell| *cell == Cell::Entry)?;

        Some(Position::new(0, col))
    }

    /// Returns the first reached cell of the bottom row, scanning left to right.
    ///
    /// A reached cell there means the search connected the entry to the goal row.
    pub fn goal_point(&self) -> Option<Position> {
        let row = self.grid.height().checked_sub(1)?;
        let col = self
            .grid
            .rows()
            .last()?
            .iter()
            .position(|cell| cell.is_reached())?;

        Some(Position::new(row, col))
    }

    /// Labels the maze by breadth-first search from the entry and returns the goal cell reached.
    ///
    /// Returns [`None`] when the maze has no entry or when the search exhausts its frontier before
    /// touching the goal row; in the latter case the labels assigned so far are kept.
    pub fn solve(&mut self) -> Option<Position> {
        let Some(entry) = self.entry_point() else {
            warn!("no entry point in the top row");
            self.explored.clear();
            return None;
        };

        let search = pathfinding::breadth_first_search(&mut self.grid, entry);
        self.explored = search.explored;

        match search.goal {
            Some(goal) => {
                info!(
                    "goal reached at row {} col {} with depth {}",
                    goal.row,
                    goal.col,
                    self.grid.get(goal).and_then(Cell::depth).unwrap_or_default()
                );
                Some(goal)
            }
            None => {
                warn!("no goal found");
                None
            }
        }
    }

    /// Returns the route from the entry to the goal found by the last search.
    ///
    /// The route starts at the entry and ends at the goal. It is empty if no goal was reached.
    pub fn route(&self) -> Vec<Position> {
        self.goal_point()
            .map(|goal| pathfinding::trace_route(&self.grid, goal))
            .unwrap_or_default()
    }

    /// Renders the maze as text with `route` highlighted.
    pub fn draw_route(&self, route: &[Position]) -> String {
        render::draw_route(&self.grid, route)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;
    use crate::render::WALL_SYMBOL;

    /// Builds a bordered maze with a uniform interior and no random walls.
    fn enclosed(length: usize, interior: Cell) -> Maze {
        let mut maze = Maze::with_grid(length, vec![vec![interior; length]; length]);
        maze.add_outer_walls();
        maze.set_entry_point();
        maze
    }

    /// Generates a maze with a seeded random source.
    fn generated(length: usize, seed: u64) -> Maze {
        let mut maze = Maze::new(length);
        maze.generate(&mut StdRng::seed_from_u64(seed));
        maze
    }

    /// Checks the border, entry and interior invariants of a freshly generated maze.
    fn assert_generated_layout(maze: &Maze) {
        let size = maze.length() + 2;
        let entry_col = size / 2;
        let rows = maze.rows();

        assert_eq!(rows.len(), size, "grid should have {size} rows");
        assert!(rows.iter().all(|row| row.len() == size), "grid should be square");

        for (pos, cell) in maze.cells() {
            let on_top = pos.row == 0;
            let on_bottom = pos.row == size - 1;
            let on_side = pos.col == 0 || pos.col == size - 1;
            let near_entry = on_top && pos.col + 1 >= entry_col && pos.col <= entry_col + 1;

            if on_top && pos.col == entry_col {
                assert_eq!(cell, Cell::Entry, "entry should sit at {pos:?}");
            } else if near_entry {
                assert_eq!(cell, Cell::Unvisited, "entry neighbour {pos:?} should be open");
            } else if on_bottom && !on_side {
                assert_eq!(cell, Cell::GoalUnreached, "{pos:?} should be a goal cell");
            } else if on_top || on_bottom || on_side {
                assert_eq!(cell, Cell::Wall, "border cell {pos:?} should be a wall");
            } else {
                assert!(
                    matches!(cell, Cell::Wall | Cell::Unvisited),
                    "interior cell {pos:?} should be a wall or open"
                );
            }
        }

        let entries = maze
            .cells()
            .filter(|(_, cell)| *cell == Cell::Entry)
            .count();
        assert_eq!(entries, 1, "exactly one entry should exist");
    }

    /// Checks that a route runs from entry to goal through adjacent cells one label apart.
    fn assert_valid_route(maze: &Maze, route: &[Position]) {
        assert_eq!(route.first().copied(), maze.entry_point(), "route should start at the entry");
        assert_eq!(route.last().copied(), maze.goal_point(), "route should end at the goal");

        for pair in route.windows(2) {
            let [from, to] = pair else {
                unreachable!("windows(2) always yields pairs");
            };
            let distance = from.row.abs_diff(to.row) + from.col.abs_diff(to.col);
            assert_eq!(distance, 1, "{from:?} and {to:?} should be adjacent");

            let from_depth = maze.cell(*from).and_then(Cell::depth);
            let to_depth = maze.cell(*to).and_then(Cell::depth);
            assert_eq!(
                from_depth.map(|depth| depth + 1),
                to_depth,
                "depth should grow by one from {from:?} to {to:?}"
            );
        }
    }

    #[test]
    fn test_maze_new() {
        let maze = Maze::new(4);

        assert_eq!(maze.length(), 4);
        assert_eq!(maze.rows().len(), 4);
        assert!(maze
            .rows()
            .iter()
            .all(|row| row.len() == 4 && row.iter().all(|cell| *cell == Cell::Unvisited)));
        assert!(maze.explored().is_empty());
    }

    #[test]
    fn test_maze_default() {
        let maze = Maze::default();

        assert_eq!(maze.length(), 11);
        assert_eq!(maze.rows().len(), 11);
    }

    #[test]
    fn test_add_outer_walls() {
        let mut maze = Maze::new(2);
        maze.add_outer_walls();

        let wall = Cell::Wall;
        let open = Cell::Unvisited;
        let goal = Cell::GoalUnreached;
        assert_eq!(
            maze.rows(),
            &[
                vec![wall, wall, wall, wall],
                vec![wall, open, open, wall],
                vec![wall, open, open, wall],
                vec![wall, goal, goal, wall],
            ]
        );
    }

    #[test]
    fn test_set_entry_point_overrides_walls() {
        let maze = enclosed(3, Cell::Wall);

        assert_eq!(
            maze.rows().first(),
            Some(&vec![
                Cell::Wall,
                Cell::Unvisited,
                Cell::Entry,
                Cell::Unvisited,
                Cell::Wall,
            ])
        );
        assert_eq!(maze.entry_point(), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_set_entry_point_single_cell_opens_corners() {
        let maze = enclosed(1, Cell::Unvisited);

        assert_eq!(
            maze.rows().first(),
            Some(&vec![Cell::Unvisited, Cell::Entry, Cell::Unvisited])
        );
    }

    #[test]
    fn test_entry_point_missing() {
        let maze = Maze::new(3);

        assert_eq!(maze.entry_point(), None);
    }

    #[test]
    fn test_entry_point_first_match() {
        let maze = Maze::with_grid(
            3,
            vec![vec![Cell::Wall, Cell::Entry, Cell::Entry], vec![Cell::Unvisited; 3]],
        );

        assert_eq!(maze.entry_point(), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_goal_point_before_solving() {
        let maze = enclosed(3, Cell::Unvisited);

        assert_eq!(maze.goal_point(), None);
        assert!(maze.route().is_empty());
    }

    #[test]
    fn test_generated_layout_invariants() {
        for length in 1..=12 {
            for seed in 0..8 {
                assert_generated_layout(&generated(length, seed));
            }
        }
    }

    #[test]
    fn test_generation_is_reproducible_with_seed() {
        assert_eq!(generated(15, 42), generated(15, 42));
    }

    #[test]
    fn test_interior_wall_ratio() {
        let mut maze = Maze::new(120);
        maze.add_interior_walls(&mut StdRng::seed_from_u64(7));

        let total = maze.rows().iter().map(Vec::len).sum::<usize>();
        let walls = maze
            .rows()
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Wall)
            .count();
        let expected = total * 3 / 10;

        assert!(
            walls.abs_diff(expected) < total / 50,
            "{walls} walls out of {total} should be close to 30%"
        );
    }

    #[test]
    fn test_add_interior_walls_keeps_supplied_walls() {
        let mut maze = Maze::with_grid(5, vec![vec![Cell::Wall; 5]; 5]);
        maze.add_interior_walls(&mut StdRng::seed_from_u64(3));

        assert!(maze.rows().iter().flatten().all(|cell| *cell == Cell::Wall));
    }

    #[test]
    fn test_solve_open_maze() {
        let mut maze = enclosed(3, Cell::Unvisited);
        let goal = maze.solve();

        assert_eq!(goal, Some(Position::new(4, 2)));
        assert_eq!(maze.goal_point(), goal);
        assert_eq!(maze.cell(Position::new(4, 2)), Some(Cell::Visited(5)));

        let route = maze.route();
        assert_eq!(route.len(), 5, "route should span the four rows plus the entry");
        assert!(route.iter().all(|pos| pos.col == 2));
        assert_valid_route(&maze, &route);
    }

    #[test]
    fn test_solve_boxed_in_entry() {
        let mut maze = enclosed(3, Cell::Wall);

        assert_eq!(maze.solve(), None);
        assert_eq!(maze.goal_point(), None);
        assert!(maze.route().is_empty());
        assert_eq!(
            maze.explored(),
            &[Position::new(0, 1), Position::new(0, 3)]
        );
    }

    #[test]
    fn test_solve_without_entry() {
        let mut maze = Maze::new(3);
        maze.add_outer_walls();

        assert_eq!(maze.solve(), None);
        assert!(maze.explored().is_empty());
    }

    #[test]
    fn test_solve_single_cell_maze() {
        let mut maze = enclosed(1, Cell::Unvisited);

        assert_eq!(maze.solve(), Some(Position::new(2, 1)));
        assert_eq!(
            maze.route(),
            vec![Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)]
        );
    }

    #[test]
    fn test_bfs_layering_on_generated_mazes() {
        for seed in 0..40 {
            let mut maze = generated(9, seed);
            let _goal = maze.solve();

            for (pos, cell) in maze.cells() {
                let Cell::Visited(depth) = cell else {
                    continue;
                };
                let has_parent = [
                    pos.col.checked_sub(1).map(|col| Position::new(pos.row, col)),
                    Some(Position::new(pos.row, pos.col + 1)),
                    pos.row.checked_sub(1).map(|row| Position::new(row, pos.col)),
                ]
                .into_iter()
                .flatten()
                .any(|parent| maze.cell(parent).and_then(Cell::depth) == Some(depth - 1));

                assert!(has_parent, "{pos:?} at depth {depth} should have a parent");
            }
        }
    }

    #[test]
    fn test_routes_on_generated_mazes() {
        let mut solved = 0;

        for seed in 0..40 {
            let mut maze = generated(9, seed);
            if maze.solve().is_some() {
                solved += 1;
                assert_valid_route(&maze, &maze.route());
            } else {
                assert!(maze.route().is_empty());
            }
        }

        assert!(solved > 0, "at least one seeded maze should be solvable");
    }

    #[test]
    fn test_draw_route_open_maze() {
        let mut maze = enclosed(3, Cell::Unvisited);
        let _goal = maze.solve();
        let drawing = maze.draw_route(&maze.route());

        let wall = WALL_SYMBOL;
        let expected: Vec<String> = [
            [wall, '+', 'S', '+', wall],
            [wall, '+', '$', '+', wall],
            [wall, '+', '$', '+', wall],
            [wall, '+', '$', '+', wall],
            [wall, '-', '$', '-', wall],
        ]
        .iter()
        .map(|row| row.iter().flat_map(|glyph| [' ', *glyph, ' ']).collect())
        .collect();

        assert_eq!(drawing.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_draw_route_single_cell_symbols() {
        let maze = enclosed(1, Cell::Unvisited);
        let drawing = maze.draw_route(&[]);
        let known = ['S', WALL_SYMBOL, 'o', '-', '$', '+'];

        assert_eq!(drawing.lines().count(), 3);
        assert!(drawing
            .chars()
            .all(|glyph| glyph == ' ' || glyph == '\n' || known.contains(&glyph)));
    }
}
