//! Default cell attachment used when the host brings no visual object of its own
//!
//! A `Tile` carries what a board needs from a placed box: where it sits on
//! the lattice, where it sits in the world, and how tall it is. Mesh and
//! material handling stays with the renderer.

use crate::io::configuration::GridConfig;
use crate::spatial::coords::{GridCoord, WorldPosition};
use crate::spatial::grid::{GridAttachment, HasGridPosition};

/// Placed board tile
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    grid_position: GridCoord,
    world_position: WorldPosition,
    depth: f64,
    size: f64,
    scale: f64,

    /// Whether movement may enter this tile
    pub walkable: bool,
}

impl Tile {
    /// Place a tile on the given lattice coordinate
    ///
    /// The world position is the coordinate scaled by the cell size, on the
    /// board plane. Depth comes from the extrusion amount.
    pub fn place(coord: GridCoord, config: &GridConfig) -> Self {
        Self {
            grid_position: coord,
            world_position: WorldPosition::new(
                f64::from(coord.x) * config.cell_size,
                0.0,
                f64::from(coord.z) * config.cell_size,
            ),
            depth: config.extrude.amount,
            size: config.cell_size,
            scale: config.cell_scale,
            walkable: true,
        }
    }

    /// World size of the slot the tile occupies
    pub const fn size(&self) -> f64 {
        self.size
    }

    /// Visual scale relative to the slot
    pub const fn scale(&self) -> f64 {
        self.scale
    }
}

impl HasGridPosition for Tile {
    fn grid_position(&self) -> GridCoord {
        self.grid_position
    }
}

impl GridAttachment for Tile {
    fn world_position(&self) -> WorldPosition {
        self.world_position
    }

    fn depth(&self) -> f64 {
        self.depth
    }
}
