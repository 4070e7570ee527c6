//! Command-line configuration.

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng as _};

/// Generate a random maze, solve it by breadth-first search and draw the route.
#[derive(Clone, Debug, Parser, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Interior side length of the maze, before the border is added
    #[arg(short, long, default_value_t = 31, value_parser = clap::value_parser!(u16).range(1..))]
    pub length: u16,

    /// Seed for wall generation; a fresh one is drawn from the OS when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Play the search back in an interactive terminal view instead of printing the maze
    #[arg(long)]
    pub tui: bool,
}

impl Config {
    /// Interior side length as an index-sized value.
    pub fn length(&self) -> usize {
        usize::from(self.length)
    }

    /// Builds the random source for wall generation.
    ///
    /// A configured seed gives a reproducible generator; otherwise it is seeded from the OS.
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}
