//! User interface rendering for the maze viewer.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    app::App,
    maze::Maze,
    pathfinding,
    types::{Cell, Position},
};

/// Key bindings shown at the bottom of the viewer.
const TOOLTIP: &str = "(q) quit  (r) replay  (n) new maze";

/// Renders the viewer from the persistent state.
///
/// The maze is centred in the frame and drawn as canvas points: walls, unreached goal cells, the
/// cells revealed so far by the playback, and the route once the playback reaches it. A key
/// tooltip sits at the bottom.
///
/// # Errors
///
/// This function may return errors when the maze has no rows or when its dimensions do not fit
/// the terminal coordinate type.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let rows = app.maze.rows();
    let maze_rows = rows.len();
    let maze_columns = rows
        .first()
        .ok_or_eyre("failed to retrieve first row of the maze")?
        .len();

    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Maze and padding area
        Constraint::Length(3), // Tooltip block
    ])
    .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let tooltip_area = centered(
        tooltip_full_area,
        u16::try_from(TOOLTIP.len())?.max(u16::try_from(maze_columns)?),
    )?;

    let maze_area = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_rows)?.saturating_add(1)),
        Constraint::Min(1),
    ])
    .split(maze_content_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze area from layout")?;
    let title = status(app);
    let framed = centered(
        maze_area,
        u16::try_from(maze_columns)?.max(u16::try_from(title.len())?),
    )?;

    let (wall_coords, goal_coords) = terrain(&app.maze);
    let entry_coords: Vec<Position> = app.maze.entry_point().into_iter().collect();

    let to_screen = |coords: &[Position]| {
        pathfinding::transform_maze_to_screen_coords(coords, maze_rows, maze_columns)
    };
    let wall_screen_coords = to_screen(&wall_coords)?;
    let goal_screen_coords = to_screen(&goal_coords)?;
    let entry_screen_coords = to_screen(&entry_coords)?;
    let explored_screen_coords = to_screen(&app.animation_manager.explored)?;
    let route_screen_coords = to_screen(&app.animation_manager.route)?;

    let block = Block::bordered()
        .title(title)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let space = block.inner(framed);
    frame.render_widget(block, framed);

    let maze = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_screen_coords,
                color: Color::Green,
            });
            ctx.draw(&Points {
                coords: &goal_screen_coords,
                color: Color::Yellow,
            });
            ctx.draw(&Points {
                coords: &explored_screen_coords,
                color: Color::Blue,
            });
            ctx.draw(&Points {
                coords: &route_screen_coords,
                color: Color::Red,
            });
            ctx.draw(&Points {
                coords: &entry_screen_coords,
                color: Color::White,
            });
        });
    frame.render_widget(maze, space);

    let tooltip_block = Block::bordered()
        .title(TOOLTIP)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    frame.render_widget(Clear, frame.area());
}

/// Splits the fixed terrain of the maze into wall cells and unreached goal cells.
fn terrain(maze: &Maze) -> (Vec<Position>, Vec<Position>) {
    let mut walls = Vec::new();
    let mut goals = Vec::new();

    for (pos, cell) in maze.cells() {
        match cell {
            Cell::Wall => walls.push(pos),
            Cell::GoalUnreached => goals.push(pos),
            Cell::Unvisited | Cell::Entry | Cell::Visited(_) => {}
        }
    }

    (walls, goals)
}

/// Returns a horizontally centred slice of `area` that is `width` cells wide.
fn centered(area: Rect, width: u16) -> Result<Rect> {
    Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(width),
        Constraint::Min(1),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered area from horizontal layout")
}

/// Describes the outcome of the search for the maze title.
fn status(app: &App) -> String {
    app.goal
        .and_then(|goal| app.maze.cell(goal))
        .and_then(Cell::depth)
        .map_or_else(|| "No Goal".to_owned(), |depth| format!("Goal at depth {depth}"))
}
