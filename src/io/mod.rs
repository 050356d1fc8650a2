//! Configuration, error handling, and the command-line interface

/// Command-line parsing and query output
pub mod cli;
/// Grid defaults and typed configuration loading
pub mod configuration;
/// Error types for grid operations
pub mod error;
