//! Lattice coordinates, offset tables, and the string key used to identify cells
//!
//! Coordinates are integer `(x, z)` pairs. The hash key joins the two integers
//! with [`HASH_DELIMITER`], which never continues a signed integer, so keys for
//! negative coordinates stay unambiguous.

use std::fmt;
use std::str::FromStr;

use crate::io::configuration::HASH_DELIMITER;
use crate::io::error::GridError;

/// Integer lattice position of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridCoord {
    /// Column along the world x axis
    pub x: i32,
    /// Row along the world z axis
    pub z: i32,
}

impl GridCoord {
    /// Create a coordinate from its components
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Manhattan distance to another coordinate
    pub const fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.z.abs_diff(other.z))
    }

    /// Offset this coordinate, returning `None` on integer overflow
    pub const fn checked_offset(self, offset: Offset) -> Option<Self> {
        match (self.x.checked_add(offset.dx), self.z.checked_add(offset.dz)) {
            (Some(x), Some(z)) => Some(Self { x, z }),
            _ => None,
        }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{HASH_DELIMITER}{}", self.x, self.z)
    }
}

impl FromStr for GridCoord {
    type Err = GridError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let (x, z) = key
            .split_once(HASH_DELIMITER)
            .ok_or_else(|| invalid_hash(key, &"missing delimiter"))?;
        let x = x.parse::<i32>().map_err(|e| invalid_hash(key, &e))?;
        let z = z.parse::<i32>().map_err(|e| invalid_hash(key, &e))?;
        Ok(Self { x, z })
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, z): (i32, i32)) -> Self {
        Self { x, z }
    }
}

fn invalid_hash(key: &str, reason: &impl ToString) -> GridError {
    GridError::InvalidHash {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

/// Unit step between two lattice coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    /// Step along x
    pub dx: i32,
    /// Step along z
    pub dz: i32,
}

impl Offset {
    const fn new(dx: i32, dz: i32) -> Self {
        Self { dx, dz }
    }
}

/// Orthogonal neighbor offsets: +x, -z, -x, +z
///
/// Neighbor results follow this order.
pub const DIRECTIONS: [Offset; 4] = [
    Offset::new(1, 0),
    Offset::new(0, -1),
    Offset::new(-1, 0),
    Offset::new(0, 1),
];

/// Diagonal neighbor offsets, appended after [`DIRECTIONS`] when requested
pub const DIAGONALS: [Offset; 4] = [
    Offset::new(-1, -1),
    Offset::new(-1, 1),
    Offset::new(1, 1),
    Offset::new(1, -1),
];

/// Produce the lookup key for a coordinate, e.g. `"-2.1"`
pub fn coordinate_to_hash(coord: GridCoord) -> String {
    coord.to_string()
}

/// World-space position written by coordinate conversion
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPosition {
    /// World x
    pub x: f64,
    /// World y (height above the board plane)
    pub y: f64,
    /// World z
    pub z: f64,
}

impl WorldPosition {
    /// Create a world position from its components
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Rectangular block of lattice coordinates and its dense storage mapping
///
/// Storage rows run along x and columns along z, both starting at `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    origin: GridCoord,
    width: usize,
    height: usize,
}

impl Extent {
    /// Extent of `width` by `height` cells whose lowest corner is `origin`
    pub const fn new(origin: GridCoord, width: usize, height: usize) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Storage shape (rows, cols)
    pub const fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of coordinates covered
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Whether the extent covers no coordinates
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest covered coordinate (inclusive)
    pub const fn min(&self) -> GridCoord {
        self.origin
    }

    /// Largest covered coordinate (inclusive)
    pub const fn max(&self) -> GridCoord {
        GridCoord {
            x: self.origin.x + self.width as i32 - 1,
            z: self.origin.z + self.height as i32 - 1,
        }
    }

    /// Whether a coordinate lies inside the extent
    pub const fn contains(&self, coord: GridCoord) -> bool {
        self.index_of(coord).is_some()
    }

    /// Storage index for a coordinate, `None` when outside
    pub const fn index_of(&self, coord: GridCoord) -> Option<[usize; 2]> {
        let row = coord.x as i64 - self.origin.x as i64;
        let col = coord.z as i64 - self.origin.z as i64;
        if row < 0 || col < 0 || row >= self.width as i64 || col >= self.height as i64 {
            return None;
        }
        Some([row as usize, col as usize])
    }

    /// Coordinate stored at a storage index
    pub const fn coord_at(&self, [row, col]: [usize; 2]) -> GridCoord {
        GridCoord {
            x: self.origin.x + row as i32,
            z: self.origin.z + col as i32,
        }
    }
}
