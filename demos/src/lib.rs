//! Shared pieces of the terminal demo: map setup, command-line arguments
//! and an ASCII frame dump of a [`Snapshot`].

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use pathviz_astar::{AnimationConfig, SearchConfig, Snapshot};
use pathviz_core::{CellKind, Grid, Point};
use rand::{RngExt, SeedableRng};

pub const WIDTH: i32 = 24;
pub const HEIGHT: i32 = 12;

/// The map shown when no seed is given.
pub const DEFAULT_MAP: &str = "
    ........................
    ..S.......#.............
    ..........#.............
    ..........#......####...
    ..........#.........#...
    ..####....#.........#...
    .....#....#.........#...
    .....#....#.........#.E.
    .....#..............#...
    .....#########......#...
    ....................#...
    ........................
";

/// Animated A* on a terminal map.
#[derive(Parser, Debug)]
#[command(name = "pathviz-demo", version, about, long_about = None)]
pub struct Args {
    /// Allow the four diagonal moves
    #[arg(long)]
    pub diagonal: bool,

    /// Let diagonal moves squeeze between two walls
    #[arg(long)]
    pub cut_corners: bool,

    /// Run every search to completion in a single frame
    #[arg(long)]
    pub instant: bool,

    /// Expansions added per frame
    #[arg(
        long,
        value_name = "N",
        default_value_t = 1,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub rate: usize,

    /// Search a random map generated from this seed
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

impl Args {
    pub fn into_options(self) -> DemoOptions {
        DemoOptions {
            search: SearchConfig {
                allow_diagonal: self.diagonal,
                prevent_corner_cutting: !self.cut_corners,
            },
            animation: AnimationConfig {
                rate: self.rate,
                instant: self.instant,
            },
            seed: self.seed,
        }
    }
}

/// Settings of one demo run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoOptions {
    pub search: SearchConfig,
    pub animation: AnimationConfig,
    pub seed: Option<u64>,
}

impl DemoOptions {
    /// The map to search: [`DEFAULT_MAP`], or a random one when seeded.
    pub fn grid(&self) -> Result<Grid, pathviz_core::GridError> {
        match self.seed {
            Some(seed) => random_map(seed, WIDTH, HEIGHT),
            None => DEFAULT_MAP.parse(),
        }
    }
}

/// A grid with ~30% walls, start in the left column and end in the right.
pub fn random_map(seed: u64, width: i32, height: i32) -> Result<Grid, pathviz_core::GridError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            if rng.random_range(0..10u32) < 3 {
                grid.set_cell(x, y, CellKind::Wall);
            }
        }
    }
    let start = Point::new(0, rng.random_range(0..height));
    let end = Point::new(width - 1, rng.random_range(0..height));
    grid.erase_cell(start.x, start.y);
    grid.erase_cell(end.x, end.y);
    grid.set_cell(start.x, start.y, CellKind::Start);
    grid.set_cell(end.x, end.y, CellKind::End);
    Ok(grid)
}

/// One ASCII frame: `*` path, `o` open, `x` closed, then the map glyphs.
pub fn render_frame(grid: &Grid, snap: &Snapshot) -> String {
    let mut out = String::with_capacity(grid.len() + grid.height() as usize);
    for (p, kind) in grid.iter() {
        if p.x == 0 && p.y > 0 {
            out.push('\n');
        }
        let ch = match kind {
            CellKind::Empty if snap.path().contains(&p) => '*',
            CellKind::Empty if snap.is_open(p) => 'o',
            CellKind::Empty if snap.closed().contains(p) => 'x',
            other => other.glyph(),
        };
        out.push(ch);
    }
    out
}
