//! Grid construction defaults and runtime configuration
//!
//! Every field of [`GridConfig`] has a default, so a partial configuration
//! (from a TOML file or built in code with struct update syntax) only
//! overrides what it names. Nested tables merge the same way.

use std::f64::consts::FRAC_PI_4;
use std::path::Path;

use config::{Config, File, FileFormat};
use serde::Deserialize;
use tracing::debug;

use crate::io::error::{Result, invalid_parameter};

/// Default lattice width in cells
pub const DEFAULT_WIDTH: usize = 5;
/// Default lattice height in cells
pub const DEFAULT_HEIGHT: usize = 5;
/// Default world size of one cell
pub const DEFAULT_CELL_SIZE: f64 = 10.0;
/// Default visual scale of a cell relative to its slot
pub const DEFAULT_CELL_SCALE: f64 = 0.95;

// Extrusion defaults mirror what the board renderer expects for its boxes
/// Default extrusion depth
pub const DEFAULT_EXTRUDE_AMOUNT: f64 = 1.0;
/// Default bevel segment count
pub const DEFAULT_BEVEL_SEGMENTS: u32 = 1;
/// Default extrusion step count
pub const DEFAULT_EXTRUDE_STEPS: u32 = 1;
/// Default bevel size
pub const DEFAULT_BEVEL_SIZE: f64 = 0.5;
/// Default bevel thickness
pub const DEFAULT_BEVEL_THICKNESS: f64 = 0.5;

/// Fixed seed for reproducible random cell selection
pub const DEFAULT_SEED: u64 = 42;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Separator between the two integers of a cell key
pub const HASH_DELIMITER: char = '.';

/// Rotation applied to the whole board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Edges aligned with the world axes
    #[default]
    Flat,
    /// Rotated 45 degrees so cells read as diamonds
    Pointy,
}

impl Orientation {
    /// Rotation around the world y axis in radians
    pub const fn rotation(self) -> f64 {
        match self {
            Self::Flat => 0.0,
            Self::Pointy => FRAC_PI_4,
        }
    }
}

/// Extrusion settings handed to attachment factories
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExtrudeSettings {
    /// Extrusion depth, used as each cell's depth
    pub amount: f64,
    /// Whether edges are bevelled
    pub bevel_enabled: bool,
    /// Number of bevel segments
    pub bevel_segments: u32,
    /// Number of extrusion steps
    pub steps: u32,
    /// Bevel size
    pub bevel_size: f64,
    /// Bevel thickness
    pub bevel_thickness: f64,
}

impl Default for ExtrudeSettings {
    fn default() -> Self {
        Self {
            amount: DEFAULT_EXTRUDE_AMOUNT,
            bevel_enabled: true,
            bevel_segments: DEFAULT_BEVEL_SEGMENTS,
            steps: DEFAULT_EXTRUDE_STEPS,
            bevel_size: DEFAULT_BEVEL_SIZE,
            bevel_thickness: DEFAULT_BEVEL_THICKNESS,
        }
    }
}

/// Grid construction parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Lattice width in cells
    pub width: usize,
    /// Lattice height in cells
    pub height: usize,
    /// World size of one cell
    pub cell_size: f64,
    /// Visual scale of a cell relative to its slot
    pub cell_scale: f64,
    /// Board rotation
    pub orientation: Orientation,
    /// Extrusion settings for cell attachments
    pub extrude: ExtrudeSettings,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            cell_scale: DEFAULT_CELL_SCALE,
            orientation: Orientation::default(),
            extrude: ExtrudeSettings::default(),
        }
    }
}

impl GridConfig {
    /// Create a default configuration with the given dimensions
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Load a configuration from a TOML file, defaulting omitted fields
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not deserialize
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading grid configuration");
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Parse a configuration from TOML text, defaulting omitted fields
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or does not deserialize
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Check all values before any cell is created
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error naming the first offending field
    pub fn validate(&self) -> Result<()> {
        validate_dimension("width", self.width)?;
        validate_dimension("height", self.height)?;

        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &"must be a positive finite number",
            ));
        }

        if !self.cell_scale.is_finite() || self.cell_scale <= 0.0 || self.cell_scale > 1.0 {
            return Err(invalid_parameter(
                "cell_scale",
                &self.cell_scale,
                &"must be in (0, 1]",
            ));
        }

        if !self.extrude.amount.is_finite() || self.extrude.amount < 0.0 {
            return Err(invalid_parameter(
                "extrude.amount",
                &self.extrude.amount,
                &"must be a non-negative finite number",
            ));
        }

        Ok(())
    }

    /// Number of cells a grid built from this configuration holds
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
