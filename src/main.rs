//! This crate contains the source code for the `bfs-maze` binary.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use bfs_maze::Config;
use clap::Parser as _;
use color_eyre::{eyre::Result, install};

fn main() -> Result<()> {
    install()?;

    bfs_maze::run(&Config::parse())
}
