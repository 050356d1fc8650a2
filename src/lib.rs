//! Square lattice grid used as the spatial and graph backbone of board games
//!
//! The grid enumerates cells, answers adjacency and Manhattan distance
//! queries, and keeps per-cell pathfinding bookkeeping that search algorithms
//! write and the grid resets. Each cell carries an attachment supplied by the
//! host application; the grid never looks inside it beyond its coordinate,
//! world position, and depth.

#![forbid(unsafe_code)]

/// Configuration, errors, and the command-line front end
pub mod io;
/// Lattice coordinates, the grid itself, and per-cell search state
pub mod spatial;

pub use io::configuration::GridConfig;
pub use io::error::{GridError, Result};
pub use spatial::{GridAttachment, GridCoord, HasGridPosition, SquareGrid};
