//! Pathfinding algorithm and animation module.
//!
//! This module contains the breadth-first search that labels the maze with distances, the walk
//! that recovers a shortest route from those labels, the playback model used to animate both in
//! the terminal viewer, and the coordinate transformation used to draw them on a canvas.

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use color_eyre::eyre::Result;
use log::{debug, trace};

use crate::{
    grid::Grid,
    types::{Cell, Direction, Position},
};

/// Animation frame delay in milliseconds.
///
/// This constant controls the timing between animation frames in the search visualization. Every
/// labelled cell is one frame, so the delay is kept short enough for a full-size maze to play out
/// in a few seconds.
pub(crate) const ANIMATION_FRAME_DELAY_MS: u64 = 10;

/// Time the completed route stays on screen before the playback restarts, in milliseconds.
pub(crate) const ANIMATION_HOLD_MS: u64 = 2000;

/// Result of a single breadth-first search run.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Search {
    /// Goal cell the search stopped at, if the bottom row was reached.
    pub(crate) goal: Option<Position>,
    /// Cells in the order the search labelled them, goal included.
    pub(crate) explored: Vec<Position>,
}

/// Labels every cell reachable from `entry` with its distance and stops at the first goal contact.
///
/// The frontier is a FIFO queue seeded with the entry at [`Cell::ENTRY_DEPTH`]. A cell is labelled
/// when it is enqueued, never when it is dequeued, so labels are true shortest distances for moves
/// restricted to left, right and down. Goal contact is only checked straight below the dequeued
/// cell, before its neighbours are expanded.
pub(crate) fn breadth_first_search(grid: &mut Grid, entry: Position) -> Search {
    let mut frontier = VecDeque::from([(entry, Cell::ENTRY_DEPTH)]);
    let mut explored = Vec::new();

    while let Some((current, depth)) = frontier.pop_front() {
        let next_depth = depth + 1;

        if let Some((below, Cell::GoalUnreached)) = grid.neighbor(current, Direction::Down) {
            grid.set(below, Cell::Visited(next_depth));
            explored.push(below);
            debug!(
                "goal reached at row {} col {} after labelling {} cells",
                below.row,
                below.col,
                explored.len()
            );
            return Search {
                goal: Some(below),
                explored,
            };
        }

        for direction in Direction::EXPLORE {
            if let Some((next, Cell::Unvisited)) = grid.neighbor(current, direction) {
                grid.set(next, Cell::Visited(next_depth));
                explored.push(next);
                frontier.push_back((next, next_depth));
                trace!("labelled row {} col {} at depth {next_depth}", next.row, next.col);
            }
        }
    }

    debug!("frontier exhausted after labelling {} cells", explored.len());
    Search {
        goal: None,
        explored,
    }
}

/// Walks from `goal` back to the entry along strictly decreasing labels.
///
/// From each cell the first of left, right and up holding a label one lower is taken. The walk ends
/// when no such neighbour exists, which is the case at the entry. The route is returned in
/// entry-to-goal order.
pub(crate) fn trace_route(grid: &Grid, goal: Position) -> Vec<Position> {
    let mut route = vec![goal];
    let mut current = goal;

    while let Some(wanted) = grid
        .get(current)
        .and_then(Cell::depth)
        .and_then(|depth| depth.checked_sub(1))
    {
        let predecessor = Direction::TRACE.into_iter().find_map(|direction| {
            grid.neighbor(current, direction)
                .and_then(|(pos, cell)| (cell.depth() == Some(wanted)).then_some(pos))
        });

        let Some(predecessor) = predecessor else {
            break;
        };
        route.push(predecessor);
        current = predecessor;
    }

    route.reverse();
    route
}

/// Animation step types for search visualization.
///
/// The playback first replays the order in which cells were labelled and then the route, so both
/// phases are kept apart for rendering in different colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnimationStep {
    /// Show a cell labelled by the search.
    Explore(Position),
    /// Show a cell on the reconstructed route.
    Trace(Position),
}

/// Animation state manager for search visualization.
///
/// This structure manages the animation state including timing, current step tracking, and the
/// cells being displayed during the animated maze solving.
#[derive(Debug)]
pub(crate) struct AnimationManager {
    /// Animation steps recorded from the last solved maze.
    pub(crate) steps: Vec<AnimationStep>,
    /// Current step in the animation sequence.
    ///
    /// This field tracks the current position in the [`steps`](AnimationManager::steps) vector to
    /// determine which steps have been rendered and which are still pending.
    pub(crate) current_index: usize,
    /// Timestamp of the last animation frame update.
    pub(crate) last_update_time: Instant,
    /// Explored cells revealed so far.
    pub(crate) explored: Vec<Position>,
    /// Route cells revealed so far.
    pub(crate) route: Vec<Position>,
}

impl Default for AnimationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationManager {
    /// Creates a new animation manager with no steps.
    pub(crate) fn new() -> Self {
        Self {
            steps: Vec::new(),
            current_index: 0,
            last_update_time: Instant::now(),
            explored: Vec::new(),
            route: Vec::new(),
        }
    }

    /// Replaces the steps with the exploration order and route of a solved maze.
    pub(crate) fn load(&mut self, explored: &[Position], route: &[Position]) {
        self.steps = explored
            .iter()
            .copied()
            .map(AnimationStep::Explore)
            .chain(route.iter().copied().map(AnimationStep::Trace))
            .collect();
        self.reset();
    }

    /// Resets the animation state to the beginning.
    pub(crate) fn reset(&mut self) {
        self.current_index = 0;
        self.explored.clear();
        self.route.clear();
        self.last_update_time = Instant::now();
    }

    /// Returns whether every step has been shown.
    pub(crate) fn is_finished(&self) -> bool {
        self.current_index >= self.steps.len()
    }

    /// Updates the animation state based on timing and current progress.
    ///
    /// One step is processed per elapsed frame delay. Once every step has been shown the final
    /// frame is held for [`ANIMATION_HOLD_MS`] and the playback starts over.
    pub(crate) fn update(&mut self) {
        let elapsed = self.last_update_time.elapsed();

        if self.is_finished() {
            if elapsed >= Duration::from_millis(ANIMATION_HOLD_MS) {
                self.reset();
            }
        } else if elapsed >= Duration::from_millis(ANIMATION_FRAME_DELAY_MS) {
            self.last_update_time = Instant::now();
            self.advance();
        }
    }

    /// Processes the next pending step regardless of timing.
    pub(crate) fn advance(&mut self) {
        if let Some(step) = self.steps.get(self.current_index) {
            match *step {
                AnimationStep::Explore(pos) => self.explored.push(pos),
                AnimationStep::Trace(pos) => self.route.push(pos),
            }
            self.current_index += 1;
        }
    }
}

/// Transforms maze coordinates to screen coordinates for canvas rendering.
///
/// This function converts maze positions to canvas points centred on the origin, using
/// `y = (rows - 1) / 2 - row` so rows grow downwards on screen and `x = col - (cols - 1) / 2` for
/// columns.
///
/// # Errors
///
/// This function may return errors when a dimension or coordinate does not fit in a `u16`.
pub(crate) fn transform_maze_to_screen_coords(
    maze_coords: &[Position],
    rows: usize,
    cols: usize,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(rows)?);
    let cols_n = f64::from(u16::try_from(cols)?);

    maze_coords
        .iter()
        .map(|pos| {
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(pos.row)?);
            let screen_x = f64::from(u16::try_from(pos.col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}
