//! Random maze generation with a breadth-first solver.
//!
//! A [`Maze`] is an `L` by `L` interior surrounded by walls, with the bottom row acting as the goal
//! and a single entry in the middle of the top row. Roughly 30% of the interior is walled off at
//! random. The solver labels every reachable cell with its distance from the entry, moving only
//! left, right and down, and the route is recovered by walking the labels back from the goal. The
//! result is drawn as text or played back in a terminal view.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

use std::io::{self, Write};

use color_eyre::eyre::Result;
use log::debug;

mod app;
mod config;
mod events;
mod grid;
mod maze;
mod pathfinding;
mod render;
mod types;
mod ui;

pub use config::Config;
pub use maze::Maze;
pub use types::{Cell, Position};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "MAZE_LOG";

/// Environment variable holding the log colour style.
pub const LOG_STYLE_ENV: &str = "MAZE_LOG_STYLE";

/// Installs the logger when [`LOG_ENV`] is set.
///
/// Logging stays off by default so it does not interleave with the rendering on standard output.
///
/// # Errors
///
/// Fails when a global logger has already been installed.
pub fn init_logging() -> Result<()> {
    if std::env::var_os(LOG_ENV).is_some() {
        let env = env_logger::Env::new()
            .filter(LOG_ENV)
            .write_style(LOG_STYLE_ENV);
        env_logger::try_init_from_env(env)?;
    }

    Ok(())
}

/// Solves `maze` and writes the rendering with its route to `out`.
///
/// Returns whether a goal was reached. When none was, `No Goal` is written instead of the maze.
///
/// # Errors
///
/// Fails when writing to `out` fails.
pub fn print_solution<W: Write>(maze: &mut Maze, out: &mut W) -> Result<bool> {
    if maze.solve().is_none() {
        writeln!(out, "No Goal")?;
        return Ok(false);
    }

    let route = maze.route();
    debug!("route has {} cells", route.len());
    writeln!(out, "{}", maze.draw_route(&route))?;

    Ok(true)
}

/// Generates a maze from `config`, then prints its solution or opens the terminal viewer.
///
/// # Errors
///
/// Fails on logger setup, on writing to standard output or on terminal errors in the viewer.
pub fn run(config: &Config) -> Result<()> {
    init_logging()?;

    let mut rng = config.rng();
    let mut maze = Maze::new(config.length());
    maze.generate(&mut rng);
    debug!(
        "generated maze of length {} with seed {:?}",
        config.length, config.seed
    );

    if config.tui {
        let mut terminal = ratatui::init();
        let result = app::App::new(maze, rng).run(&mut terminal);
        ratatui::restore();
        return result;
    }

    let _solved = print_solution(&mut maze, &mut io::stdout().lock())?;

    Ok(())
}
