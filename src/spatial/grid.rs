//! Square lattice graph with neighbor, distance, and traversal queries
//!
//! The grid spans `width` by `height` cells centered on the origin. Lattice x
//! covers the integers in `[-width/2, width/2)`; lattice z covers the same
//! range for `height`, shifted up by one so boards line up with their
//! rendered boxes. Neighbor offsets do not include that shift.
//!
//! Cells live in a dense array indexed by offset-corrected coordinates. Every
//! cell holds an attachment produced by the caller's factory; the grid only
//! stores it and hands it back. Transient pathfinding fields live alongside
//! in a [`PathState`].

use ndarray::Array2;
use rand::Rng;
use tracing::{debug, error, trace};

use crate::io::configuration::{GridConfig, Orientation};
use crate::io::error::{Result, attachment_error, invalid_parameter};
use crate::spatial::coords::{DIAGONALS, DIRECTIONS, Extent, GridCoord, Offset, WorldPosition};
use crate::spatial::path::PathState;
use crate::spatial::tile::Tile;

/// Placement shift applied to lattice z when cells are created
pub const Z_PLACEMENT_OFFSET: i32 = 1;

/// Anything that knows which lattice cell it belongs to
pub trait HasGridPosition {
    /// Lattice coordinate of the cell
    fn grid_position(&self) -> GridCoord;
}

/// Capabilities the grid needs from a cell attachment
pub trait GridAttachment: HasGridPosition {
    /// World position assigned when the attachment was placed
    fn world_position(&self) -> WorldPosition;

    /// Height of the attachment above the board plane
    fn depth(&self) -> f64;
}

impl HasGridPosition for GridCoord {
    fn grid_position(&self) -> GridCoord {
        *self
    }
}

/// One lattice position and the attachment representing it
#[derive(Debug, Clone)]
pub struct Cell<A> {
    position: GridCoord,
    attachment: A,
}

impl<A> Cell<A> {
    /// Lattice coordinate of this cell
    pub const fn position(&self) -> GridCoord {
        self.position
    }

    /// The attachment representing this cell
    pub const fn attachment(&self) -> &A {
        &self.attachment
    }

    /// Mutable access to the attachment
    pub const fn attachment_mut(&mut self) -> &mut A {
        &mut self.attachment
    }
}

impl<A> HasGridPosition for Cell<A> {
    fn grid_position(&self) -> GridCoord {
        self.position
    }
}

/// Square lattice of cells with fixed topology
#[derive(Debug, Clone)]
pub struct SquareGrid<A> {
    cells: Array2<Cell<A>>,
    extent: Extent,
    path: PathState,
    cell_size: f64,
    cell_scale: f64,
    orientation: Orientation,
}

impl SquareGrid<Tile> {
    /// Build a grid of default [`Tile`] attachments
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn with_tiles(config: &GridConfig) -> Result<Self> {
        Self::new(config, |coord, config| Ok(Tile::place(coord, config)))
    }
}

impl<A> SquareGrid<A>
where
    A: HasGridPosition,
{
    /// Build a grid, creating one attachment per cell with `factory`
    ///
    /// Cells are created first, then the factory is called once per cell in
    /// storage order. Each attachment must report the coordinate it was
    /// created for.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation, if the factory
    /// fails for any cell, or if an attachment reports the wrong coordinate
    pub fn new<F>(config: &GridConfig, mut factory: F) -> Result<Self>
    where
        F: FnMut(GridCoord, &GridConfig) -> Result<A>,
    {
        config.validate()?;

        let extent = lattice_extent(config.width, config.height);
        let positions = Array2::from_shape_fn(extent.shape(), |(row, col)| {
            extent.coord_at([row, col])
        });

        let mut cells = Vec::with_capacity(extent.len());
        for &position in &positions {
            let attachment = factory(position, config).inspect_err(|e| {
                error!(%position, error = %e, "attachment factory failed");
            })?;

            let reported = attachment.grid_position();
            if reported != position {
                return Err(attachment_error(
                    position,
                    &format!("attachment reports grid position {reported}"),
                ));
            }

            cells.push(Cell {
                position,
                attachment,
            });
        }

        let cells = Array2::from_shape_vec(extent.shape(), cells).map_err(|e| {
            invalid_parameter("dimensions", &format!("{:?}", extent.shape()), &e)
        })?;

        debug!(
            width = config.width,
            height = config.height,
            cells = extent.len(),
            min = %extent.min(),
            max = %extent.max(),
            "constructed square grid"
        );

        Ok(Self {
            cells,
            extent,
            path: PathState::new(extent),
            cell_size: config.cell_size,
            cell_scale: config.cell_scale,
            orientation: config.orientation,
        })
    }
}

impl<A> SquareGrid<A> {
    /// Attachments adjacent to `of`, orthogonal first, then diagonals if requested
    ///
    /// Orthogonal candidates follow [`DIRECTIONS`] and diagonal candidates
    /// follow [`DIAGONALS`]. Coordinates outside the grid are skipped.
    pub fn neighbors(&self, of: &impl HasGridPosition, include_diagonals: bool) -> Vec<&A> {
        self.neighbors_filtered(of, include_diagonals, |_| false)
    }

    /// Like [`Self::neighbors`], dropping candidates for which `exclude` returns true
    pub fn neighbors_filtered<F>(
        &self,
        of: &impl HasGridPosition,
        include_diagonals: bool,
        mut exclude: F,
    ) -> Vec<&A>
    where
        F: FnMut(&A) -> bool,
    {
        let origin = of.grid_position();
        neighbor_offsets(include_diagonals)
            .filter_map(|offset| self.attachment(origin.checked_offset(offset)?))
            .filter(|attachment| !exclude(*attachment))
            .collect()
    }

    /// Write neighbor coordinates of `of` into `out`, clearing it first
    ///
    /// Same order and skip rules as [`Self::neighbors_filtered`], without
    /// allocating once `out` has capacity.
    pub fn neighbor_coords_into<F>(
        &self,
        of: &impl HasGridPosition,
        include_diagonals: bool,
        mut exclude: F,
        out: &mut Vec<GridCoord>,
    ) where
        F: FnMut(&A) -> bool,
    {
        out.clear();
        let origin = of.grid_position();
        for offset in neighbor_offsets(include_diagonals) {
            let Some(candidate) = origin.checked_offset(offset) else {
                continue;
            };
            if let Some(attachment) = self.attachment(candidate) {
                if !exclude(attachment) {
                    out.push(candidate);
                }
            }
        }
    }

    /// Manhattan distance between two cells
    // Part of the interface boards call on every grid kind
    #[allow(clippy::unused_self)]
    pub fn distance(&self, a: &impl HasGridPosition, b: &impl HasGridPosition) -> u32 {
        a.grid_position().manhattan(b.grid_position())
    }

    /// Reset cost, priority, parent, and visited for every cell
    pub fn clear_path(&mut self) {
        trace!(cells = self.num_cells(), "clearing path state");
        self.path.clear();
    }

    /// Pathfinding state for reading
    pub const fn path(&self) -> &PathState {
        &self.path
    }

    /// Pathfinding state for external search algorithms to write
    pub const fn path_mut(&mut self) -> &mut PathState {
        &mut self.path
    }

    /// Call `visitor` once for every attachment, in storage order
    pub fn traverse<F>(&self, mut visitor: F)
    where
        F: FnMut(&A),
    {
        for cell in &self.cells {
            visitor(&cell.attachment);
        }
    }

    /// Call `visitor` once for every attachment with mutable access
    pub fn traverse_mut<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&mut A),
    {
        for cell in &mut self.cells {
            visitor(&mut cell.attachment);
        }
    }

    /// Uniformly random attachment
    ///
    /// Draws an index in `[0, num_cells)` and walks storage to it. Returns
    /// `None` only for an empty grid, which construction rules out.
    pub fn random_cell<R>(&self, rng: &mut R) -> Option<&A>
    where
        R: Rng + ?Sized,
    {
        if self.extent.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.num_cells());
        trace!(index, "selected random cell");
        self.cells.iter().nth(index).map(|cell| &cell.attachment)
    }

    /// World position for an attachment: centered on its slot, raised by its depth
    pub fn cell_to_pixel(&self, cell: &impl GridAttachment, out: &mut WorldPosition) {
        let position = cell.world_position();
        let depth = cell.depth();
        out.x = position.x + self.cell_size / 2.0;
        out.y = depth + depth / 2.0;
        out.z = position.z - self.cell_size / 2.0;
    }

    /// Cell at a coordinate, `None` outside the grid
    pub fn cell(&self, coord: GridCoord) -> Option<&Cell<A>> {
        self.extent
            .index_of(coord)
            .and_then(|index| self.cells.get(index))
    }

    /// Mutable cell at a coordinate, `None` outside the grid
    pub fn cell_mut(&mut self, coord: GridCoord) -> Option<&mut Cell<A>> {
        self.extent
            .index_of(coord)
            .and_then(|index| self.cells.get_mut(index))
    }

    /// Attachment at a coordinate, `None` outside the grid
    pub fn attachment(&self, coord: GridCoord) -> Option<&A> {
        self.cell(coord).map(Cell::attachment)
    }

    /// Cell identified by its hash key; malformed keys find nothing
    pub fn cell_by_hash(&self, key: &str) -> Option<&Cell<A>> {
        key.parse().ok().and_then(|coord| self.cell(coord))
    }

    /// Whether a coordinate names a cell of this grid
    pub const fn contains(&self, coord: GridCoord) -> bool {
        self.extent.contains(coord)
    }

    /// All cells in storage order
    pub fn iter(&self) -> impl Iterator<Item = &Cell<A>> {
        self.cells.iter()
    }

    /// All coordinates in storage order
    pub fn coords(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.cells.iter().map(Cell::position)
    }

    /// Coordinates covered by the grid and their storage mapping
    pub const fn extent(&self) -> Extent {
        self.extent
    }

    /// Smallest and largest lattice coordinates (inclusive)
    pub const fn bounds(&self) -> (GridCoord, GridCoord) {
        (self.extent.min(), self.extent.max())
    }

    /// Lattice width in cells
    pub const fn width(&self) -> usize {
        self.extent.shape().0
    }

    /// Lattice height in cells
    pub const fn height(&self) -> usize {
        self.extent.shape().1
    }

    /// Total number of cells
    pub const fn num_cells(&self) -> usize {
        self.extent.len()
    }

    /// World size of one cell
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Visual scale of a cell relative to its slot
    pub const fn cell_scale(&self) -> f64 {
        self.cell_scale
    }

    /// Configured board orientation
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Board rotation around the world y axis in radians
    pub const fn rotation(&self) -> f64 {
        self.orientation.rotation()
    }

    /// Rotation step used when turning the board
    pub const fn rotation_increment(&self) -> f64 {
        Orientation::Pointy.rotation()
    }
}

/// Coordinates covered by a `width` by `height` grid
///
/// For odd extents the range starts at `-(extent / 2)` rounded toward zero,
/// so a 3-wide grid covers `-1, 0, 1`.
pub const fn lattice_extent(width: usize, height: usize) -> Extent {
    let origin = GridCoord::new(
        -((width / 2) as i32),
        Z_PLACEMENT_OFFSET - (height / 2) as i32,
    );
    Extent::new(origin, width, height)
}

fn neighbor_offsets(include_diagonals: bool) -> impl Iterator<Item = Offset> {
    let directions: &'static [Offset] = &DIRECTIONS;
    let diagonals: &'static [Offset] = if include_diagonals { &DIAGONALS } else { &[] };
    directions.iter().chain(diagonals).copied()
}
