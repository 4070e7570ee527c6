//! Event handling functions for user input and animation updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use log::debug;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{app::App, pathfinding::ANIMATION_FRAME_DELAY_MS};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events with a timeout of one animation frame, so the playback
/// keeps moving while no key is pressed, and dispatches key presses to [`handle_key`].
///
/// # Errors
///
/// - [`std::io::Error`]
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(ANIMATION_FRAME_DELAY_MS))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    app.animation_manager.update();

    Ok(())
}

/// Applies a single key press to the application state.
///
/// - `q` quits the viewer.
/// - `r` replays the animation from the start.
/// - `n` generates and solves a new maze of the same length.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('r') => app.animation_manager.reset(),
        KeyCode::Char('n') => {
            debug!("generating a new {0}x{0} maze", app.maze.length());
            app.regenerate();
        }
        _ => {}
    }
}
