//! **mazegrid** is a maze segment generation, tile classification and
//! constrained random walk library.

#![cfg_attr(feature="clippy", feature(plugin))]
#![cfg_attr(feature="clippy", plugin(clippy))]

pub mod generators;
pub mod grid;
pub mod layout;
pub mod pathing;
pub mod tiles;
pub mod topology;
mod utils;
