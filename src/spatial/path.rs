//! Transient per-cell pathfinding state
//!
//! External search algorithms write cost, priority, parent, and visited
//! flags while they run. Each field lives in its own dense array laid out
//! like the grid's cell storage, so a reset is a handful of fills.

use bitvec::prelude::*;
use ndarray::Array2;

use crate::spatial::coords::{Extent, GridCoord};

/// Search bookkeeping for every cell of one grid
///
/// Accessors take lattice coordinates. Reads outside the extent return the
/// cleared value and writes outside it are ignored.
#[derive(Debug, Clone)]
pub struct PathState {
    /// Accumulated cost from the search origin (`g` in A*)
    cost: Array2<f64>,
    /// Queue priority (`f` in A*)
    priority: Array2<f64>,
    /// Predecessor on the best known route
    parent: Array2<Option<GridCoord>>,
    /// Closed-set membership, row-major over the storage shape
    visited: BitVec,
    extent: Extent,
}

impl PathState {
    /// Create cleared state covering `extent`
    pub fn new(extent: Extent) -> Self {
        let shape = extent.shape();
        Self {
            cost: Array2::zeros(shape),
            priority: Array2::zeros(shape),
            parent: Array2::from_elem(shape, None),
            visited: bitvec![0; extent.len()],
            extent,
        }
    }

    /// Coordinates this state covers
    pub const fn extent(&self) -> Extent {
        self.extent
    }

    /// Reset every field of every cell
    pub fn clear(&mut self) {
        self.cost.fill(0.0);
        self.priority.fill(0.0);
        self.parent.fill(None);
        self.visited.fill(false);
    }

    /// Accumulated cost of a cell
    pub fn cost(&self, coord: GridCoord) -> f64 {
        self.extent
            .index_of(coord)
            .and_then(|index| self.cost.get(index).copied())
            .unwrap_or(0.0)
    }

    /// Set the accumulated cost of a cell
    pub fn set_cost(&mut self, coord: GridCoord, cost: f64) {
        if let Some(slot) = self
            .extent
            .index_of(coord)
            .and_then(|index| self.cost.get_mut(index))
        {
            *slot = cost;
        }
    }

    /// Queue priority of a cell
    pub fn priority(&self, coord: GridCoord) -> f64 {
        self.extent
            .index_of(coord)
            .and_then(|index| self.priority.get(index).copied())
            .unwrap_or(0.0)
    }

    /// Set the queue priority of a cell
    pub fn set_priority(&mut self, coord: GridCoord, priority: f64) {
        if let Some(slot) = self
            .extent
            .index_of(coord)
            .and_then(|index| self.priority.get_mut(index))
        {
            *slot = priority;
        }
    }

    /// Predecessor of a cell, if one was recorded
    pub fn parent(&self, coord: GridCoord) -> Option<GridCoord> {
        self.extent
            .index_of(coord)
            .and_then(|index| self.parent.get(index).copied().flatten())
    }

    /// Record or clear the predecessor of a cell
    pub fn set_parent(&mut self, coord: GridCoord, parent: Option<GridCoord>) {
        if let Some(slot) = self
            .extent
            .index_of(coord)
            .and_then(|index| self.parent.get_mut(index))
        {
            *slot = parent;
        }
    }

    /// Whether a cell has been visited
    pub fn is_visited(&self, coord: GridCoord) -> bool {
        self.flat_index(coord)
            .is_some_and(|i| self.visited.get(i).as_deref() == Some(&true))
    }

    /// Mark or unmark a cell as visited
    pub fn set_visited(&mut self, coord: GridCoord, visited: bool) {
        if let Some(i) = self.flat_index(coord) {
            self.visited.set(i, visited);
        }
    }

    /// Number of visited cells
    pub fn visited_count(&self) -> usize {
        self.visited.count_ones()
    }

    /// Walk parent links from `goal` back to the first cell without a parent
    ///
    /// Returns the route in travel order, ending at `goal`. A parent cycle
    /// ends the walk once the route outgrows the extent.
    pub fn trace_route(&self, goal: GridCoord) -> Vec<GridCoord> {
        let mut route = vec![goal];
        let mut current = goal;
        while let Some(previous) = self.parent(current) {
            if route.len() > self.extent.len() {
                break;
            }
            route.push(previous);
            current = previous;
        }
        route.reverse();
        route
    }

    const fn flat_index(&self, coord: GridCoord) -> Option<usize> {
        match self.extent.index_of(coord) {
            Some([row, col]) => Some(row * self.extent.shape().1 + col),
            None => None,
        }
    }
}
