//! Core state and main loop of the interactive maze viewer.

use color_eyre::eyre::Result;
use rand::rngs::StdRng;
use ratatui::DefaultTerminal;

use crate::{events, maze::Maze, pathfinding::AnimationManager, types::Position, ui};

/// Application state container for the maze viewer.
///
/// This structure holds the state from which Ratatui renders the viewer and which Crossterm events
/// write to. It owns the solved maze being played back and the random source used to generate the
/// next one.
pub(crate) struct App {
    /// Application exit flag.
    ///
    /// This field is set to `true` when the user wants to quit the viewer but starts off `false`.
    pub(crate) exit: bool,
    /// Maze currently on screen, already solved.
    pub(crate) maze: Maze,
    /// Goal cell reached by the search, if any.
    pub(crate) goal: Option<Position>,
    /// Random source used when the user asks for a new maze.
    pub(crate) rng: StdRng,
    /// Animation manager for search visualization.
    ///
    /// This field manages the animation state including timing, current step tracking, and the
    /// cells being displayed during the animated maze solving.
    pub(crate) animation_manager: AnimationManager,
}

impl App {
    /// Creates the viewer state around an already generated maze.
    ///
    /// The maze is solved right away and its exploration order and route are loaded into the
    /// animation manager.
    pub(crate) fn new(maze: Maze, rng: StdRng) -> Self {
        let mut app = Self {
            exit: false,
            maze,
            goal: None,
            rng,
            animation_manager: AnimationManager::new(),
        };
        app.solve();
        app
    }

    /// Replaces the maze with a freshly generated one of the same interior length.
    pub(crate) fn regenerate(&mut self) {
        let mut maze = Maze::new(self.maze.length());
        maze.generate(&mut self.rng);
        self.maze = maze;
        self.solve();
    }

    /// Solves the current maze and reloads the animation from the result.
    fn solve(&mut self) {
        self.goal = self.maze.solve();
        let route = self.maze.route();
        self.animation_manager.load(self.maze.explored(), &route);
    }

    /// Runs the main loop of the viewer.
    ///
    /// This function draws the current frame, then handles user input and advances the animation.
    /// The loop continues until the exit flag is set, after which the function returns to the call
    /// site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub(crate) fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
