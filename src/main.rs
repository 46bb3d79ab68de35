#![cfg_attr(feature="clippy", feature(plugin))]
#![cfg_attr(feature="clippy", plugin(clippy))]

use docopt::Docopt;
use mazegrid::{
    generators,
    grid::MazeGrid,
    pathing,
    tiles::{Coordinate, Direction},
};
use rand::{SeedableRng, XorShiftRng};
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "Mazegrid

Usage:
    mazegrid_driver -h | --help
    mazegrid_driver [--grid-size=<n>] [--open-plaza] [--seed=<s>] [--text-out=<path>]
    mazegrid_driver walk target --end-x=<e1> --end-y=<e2> [--start-x=<x> --start-y=<y>] [--direction=<d>] [--grid-size=<n>] [--seed=<s>] [--text-out=<path>]
    mazegrid_driver walk section [--start-x=<x> --start-y=<y>] [--direction=<d>] [--grid-size=<n>] [--seed=<s>] [--text-out=<path>]
    mazegrid_driver walk random --path-length=<n> [--start-x=<x> --start-y=<y>] [--grid-size=<n>] [--seed=<s>] [--text-out=<path>]
    mazegrid_driver walk intersection [--max-distance=<n>] [--start-x=<x> --start-y=<y>] [--direction=<d>] [--grid-size=<n>] [--seed=<s>] [--text-out=<path>]

Options:
    -h --help            Show this screen.
    --grid-size=<n>      The maze segment is n * n tiles, n forced odd [default: 41].
    --open-plaza         Skip carving and open the whole segment up as path tiles.
    --seed=<s>           Unsigned integer seed for reproducible generation and walks.
    --text-out=<path>    Output file path for the textual rendering.
    --start-x=<x>        x (column) index of the walk start tile [default: 0].
    --start-y=<y>        y (row) index of the walk start tile [default: 0].
    --direction=<d>      Entry direction at the walk start: north, east, south or west.
    --end-x=<e1>         x (column) index of the target tile.
    --end-y=<e2>         y (row) index of the target tile.
    --path-length=<n>    Requested tile count of the random path.
    --max-distance=<n>   Step budget within which an intersection counts [default: 0].
";

#[derive(Debug, Deserialize)]
struct DriverArgs {
    flag_grid_size: usize,
    flag_open_plaza: bool,
    flag_seed: Option<u32>,
    flag_text_out: String,
    cmd_walk: bool,
    cmd_target: bool,
    cmd_section: bool,
    cmd_random: bool,
    cmd_intersection: bool,
    flag_start_x: u32,
    flag_start_y: u32,
    flag_direction: Option<String>,
    flag_end_x: Option<u32>,
    flag_end_y: Option<u32>,
    flag_path_length: Option<usize>,
    flag_max_distance: usize,
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: DriverArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let mut rng = rng_from_seed_arg(&args);
    let maze_grid = generators::generate(args.flag_grid_size, args.flag_open_plaza, &mut rng);

    let report = if args.cmd_walk {
        run_walk(&maze_grid, &args, &mut rng)?
    } else {
        format!("{}", maze_grid)
    };

    if args.flag_text_out.is_empty() {
        println!("{}", report);
    } else {
        write_text_to_file(&report, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

fn run_walk(maze_grid: &MazeGrid, args: &DriverArgs, rng: &mut XorShiftRng) -> Result<String> {

    let start = Coordinate::new(args.flag_start_x, args.flag_start_y);
    let entry = entry_direction(args)?;

    if args.cmd_target {
        let end = Coordinate::new(
            args.flag_end_x.ok_or("Missing target x coordinate.")?,
            args.flag_end_y.ok_or("Missing target y coordinate.")?,
        );
        let route = pathing::walk_to_target(maze_grid, start, end, entry, rng);
        Ok(route_report(maze_grid, &route))

    } else if args.cmd_section {
        let tiles = pathing::walk_section(maze_grid, start, entry, rng);
        Ok(format!(
            "{}\nSection from ({}, {}) holds {} tiles.",
            maze_grid.render_with_route(&tiles),
            start.x,
            start.y,
            tiles.len()
        ))

    } else if args.cmd_random {
        let length = args.flag_path_length.ok_or("Missing random path length.")?;
        let route = pathing::walk_fixed_length(maze_grid, start, length, rng);
        Ok(route_report(maze_grid, &route))

    } else {
        let found =
            pathing::next_intersection(maze_grid, start, entry, args.flag_max_distance, rng);
        Ok(match found {
            Some(tile) => format!(
                "{}\nNext intersection at ({}, {}).",
                maze_grid.render_with_route(&[start, tile]),
                tile.x,
                tile.y
            ),
            None => format!("{}\nNo intersection within range.", maze_grid),
        })
    }
}

fn route_report(maze_grid: &MazeGrid, route: &[Coordinate]) -> String {
    if route.is_empty() {
        format!("{}\nNo route found.", maze_grid)
    } else {
        let waypoints = pathing::extract_corners(route);
        format!(
            "{}\nRoute of {} tiles with {} waypoints.",
            maze_grid.render_with_route(route),
            route.len(),
            waypoints.len()
        )
    }
}

fn entry_direction(args: &DriverArgs) -> Result<Option<Direction>> {
    match args.flag_direction {
        None => Ok(None),
        Some(ref name) => match name.as_str() {
            "north" => Ok(Some(Direction::North)),
            "east" => Ok(Some(Direction::East)),
            "south" => Ok(Some(Direction::South)),
            "west" => Ok(Some(Direction::West)),
            _ => Err(format!("Unknown entry direction {:?}", name).into()),
        },
    }
}

fn rng_from_seed_arg(args: &DriverArgs) -> XorShiftRng {
    if let Some(seed) = args.flag_seed {
        // XorShift cannot take an all zero seed.
        XorShiftRng::from_seed([seed | 1, seed ^ 0x9E3779B9, seed.rotate_left(16) | 1, 0x12345678])
    } else {
        rand::weak_rng()
    }
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
