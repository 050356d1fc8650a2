//! Command-line interface for building a grid and inspecting its queries

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};

use crate::io::configuration::{DEFAULT_SEED, GridConfig};
use crate::io::error::{GridError, Result};
use crate::spatial::coords::{GridCoord, WorldPosition, coordinate_to_hash};
use crate::spatial::grid::{HasGridPosition, SquareGrid};
use crate::spatial::tile::Tile;

#[derive(Parser, Debug)]
#[command(name = "squaregrid")]
#[command(author, version, about = "Build a square lattice grid and query it")]
/// Command-line arguments for the grid inspection tool
pub struct Cli {
    /// TOML file with grid settings (flags override its values)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Lattice width in cells
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Lattice height in cells
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// World size of one cell
    #[arg(long)]
    pub cell_size: Option<f64>,

    /// Random seed for reproducible cell selection
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Query to run
    #[command(subcommand)]
    pub command: Command,
}

/// Queries the tool can run against the grid
///
/// Cells are given by their hash key, `x.z`, e.g. `-1.2`.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print dimensions, cell count, bounds, and rotation
    Info,

    /// List the neighbors of a cell in adjacency order
    Neighbors {
        /// Cell to inspect
        #[arg(allow_hyphen_values = true)]
        cell: GridCoord,

        /// Include diagonal neighbors after the orthogonal ones
        #[arg(short, long)]
        diagonals: bool,
    },

    /// Print the Manhattan distance between two cells
    Distance {
        /// First cell
        #[arg(allow_hyphen_values = true)]
        from: GridCoord,

        /// Second cell
        #[arg(allow_hyphen_values = true)]
        to: GridCoord,
    },

    /// Draw random cells
    Random {
        /// Number of cells to draw
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Print the world position of a cell
    Pixel {
        /// Cell to convert
        #[arg(allow_hyphen_values = true)]
        cell: GridCoord,
    },

    /// Draw the lattice as text, optionally marking a cell and its neighbors
    Map {
        /// Cell to mark with `@`; neighbors are drawn as `+` and diagonals as `x`
        #[arg(short, long, allow_hyphen_values = true)]
        mark: Option<GridCoord>,

        /// Mark diagonal neighbors too
        #[arg(short, long)]
        diagonals: bool,
    },
}

impl Cli {
    /// Resolve the grid configuration from the optional file and flag overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded
    pub fn grid_config(&self) -> Result<GridConfig> {
        let mut config = match &self.config {
            Some(path) => GridConfig::from_toml_file(path)?,
            None => GridConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }

        Ok(config)
    }

    /// Build the grid and write the command's output to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a named cell is not
    /// part of the grid, or writing fails
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let config = self.grid_config()?;
        let grid = SquareGrid::with_tiles(&config)?;

        match &self.command {
            Command::Info => write_info(&grid, out)?,
            Command::Neighbors { cell, diagonals } => {
                let origin = require_cell(&grid, *cell)?;
                for neighbor in grid.neighbors(origin, *diagonals) {
                    writeln!(out, "{}", coordinate_to_hash(neighbor.grid_position()))?;
                }
            }
            Command::Distance { from, to } => {
                let a = require_cell(&grid, *from)?;
                let b = require_cell(&grid, *to)?;
                writeln!(out, "{}", grid.distance(a, b))?;
            }
            Command::Random { count } => {
                let mut rng = StdRng::seed_from_u64(self.seed);
                for _ in 0..*count {
                    if let Some(tile) = grid.random_cell(&mut rng) {
                        writeln!(out, "{}", coordinate_to_hash(tile.grid_position()))?;
                    }
                }
            }
            Command::Pixel { cell } => {
                let tile = require_cell(&grid, *cell)?;
                let mut position = WorldPosition::default();
                grid.cell_to_pixel(tile, &mut position);
                writeln!(out, "{} {} {}", position.x, position.y, position.z)?;
            }
            Command::Map { mark, diagonals } => write_map(&grid, *mark, *diagonals, out)?,
        }

        Ok(())
    }
}

fn require_cell(grid: &SquareGrid<Tile>, coordinate: GridCoord) -> Result<&Tile> {
    grid.attachment(coordinate)
        .ok_or(GridError::UnknownCell { coordinate })
}

fn write_info(grid: &SquareGrid<Tile>, out: &mut impl Write) -> Result<()> {
    let (min, max) = grid.bounds();
    writeln!(out, "width: {}", grid.width())?;
    writeln!(out, "height: {}", grid.height())?;
    writeln!(out, "cells: {}", grid.num_cells())?;
    writeln!(out, "bounds: {min} .. {max}")?;
    writeln!(out, "cell size: {}", grid.cell_size())?;
    writeln!(out, "rotation: {:.4}", grid.rotation())?;
    Ok(())
}

// Rows run from the largest z down so the text reads like a top-down view
fn write_map(
    grid: &SquareGrid<Tile>,
    mark: Option<GridCoord>,
    diagonals: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut orthogonal = Vec::new();
    let mut all = Vec::new();
    if let Some(center) = mark {
        require_cell(grid, center)?;
        grid.neighbor_coords_into(&center, false, |_| false, &mut orthogonal);
        grid.neighbor_coords_into(&center, diagonals, |_| false, &mut all);
    }

    let (min, max) = grid.bounds();
    for z in (min.z..=max.z).rev() {
        let row: String = (min.x..=max.x)
            .map(|x| {
                let coord = GridCoord::new(x, z);
                if mark == Some(coord) {
                    '@'
                } else if orthogonal.contains(&coord) {
                    '+'
                } else if all.contains(&coord) {
                    'x'
                } else {
                    '.'
                }
            })
            .collect();
        writeln!(out, "{row}")?;
    }
    Ok(())
}
