//! Spatial data structures for the square lattice
//!
//! This module contains:
//! - Lattice coordinates, offset tables, and cell keys
//! - The grid and its adjacency, distance, and traversal queries
//! - Transient pathfinding state
//! - The default tile attachment

/// Coordinates, offsets, and hashing
pub mod coords;
/// Grid storage and queries
pub mod grid;
/// Per-cell pathfinding state
pub mod path;
/// Default cell attachment
pub mod tile;

pub use coords::GridCoord;
pub use grid::{GridAttachment, HasGridPosition, SquareGrid};
