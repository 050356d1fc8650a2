//! Tests for command-line parsing and query output

#[cfg(test)]
mod tests {
    use clap::Parser;
    use squaregrid::GridError;
    use squaregrid::io::cli::{Cli, Command};
    use squaregrid::io::configuration::{DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH};
    use squaregrid::spatial::coords::GridCoord;
    use std::io::Write;

    fn run(args: &[&str]) -> Result<String, GridError> {
        let cli = Cli::parse_from(args);
        let mut out = Vec::new();
        cli.run(&mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    // Tests CLI parsing with only the subcommand
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["squaregrid", "info"]);

        assert_eq!(cli.command, Command::Info);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.config, None);
        assert_eq!(cli.width, None);
    }

    // Tests cell arguments accept negative hash keys
    // Verified by removing allow_hyphen_values from the cell argument
    #[test]
    fn test_cli_parse_negative_cell() {
        let cli = Cli::parse_from(["squaregrid", "neighbors", "-1.-2", "--diagonals"]);
        assert_eq!(
            cli.command,
            Command::Neighbors {
                cell: GridCoord::new(-1, -2),
                diagonals: true,
            }
        );
    }

    // Tests malformed cell keys are rejected at parse time
    // Verified by parsing cells as plain strings
    #[test]
    fn test_cli_rejects_bad_cell() {
        assert!(Cli::try_parse_from(["squaregrid", "pixel", "1,2"]).is_err());
    }

    // Tests flag overrides apply on top of defaults
    // Verified by ignoring the width flag
    #[test]
    fn test_grid_config_overrides() {
        let cli = Cli::parse_from(["squaregrid", "-w", "7", "--cell-size", "2.5", "info"]);
        let Ok(config) = cli.grid_config() else {
            unreachable!("Configuration should resolve");
        };
        assert_eq!(config.width, 7);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert!((config.cell_size - 2.5).abs() < f64::EPSILON);
    }

    // Tests flags override values loaded from the configuration file
    // Verified by applying file values after flags
    #[test]
    fn test_config_file_then_flags() {
        let Ok(mut file) = tempfile::Builder::new().suffix(".toml").tempfile() else {
            unreachable!("Temporary file should be created");
        };
        assert!(writeln!(file, "width = 9\nheight = 4").is_ok());
        let Some(path) = file.path().to_str() else {
            unreachable!("Temporary path should be UTF-8");
        };

        let cli = Cli::parse_from(["squaregrid", "--config", path, "-H", "6", "info"]);
        let Ok(config) = cli.grid_config() else {
            unreachable!("Configuration should resolve");
        };
        assert_eq!(config.width, 9);
        assert_eq!(config.height, 6);
    }

    // Tests info output for the default board
    // Verified by reporting height as width
    #[test]
    fn test_info_output() {
        let Ok(output) = run(&["squaregrid", "info"]) else {
            unreachable!("Info should succeed");
        };
        assert!(output.contains(&format!("width: {DEFAULT_WIDTH}")));
        assert!(output.contains("cells: 25"));
        assert!(output.contains("bounds: -2.-1 .. 2.3"));
    }

    // Tests neighbor listing order on the center of a 3x3 grid
    // Verified by sorting neighbors before printing
    #[test]
    fn test_neighbors_output() {
        let Ok(output) = run(&["squaregrid", "-w", "3", "-H", "3", "neighbors", "0.1", "-d"]) else {
            unreachable!("Neighbors should succeed");
        };
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec!["1.1", "0.0", "-1.1", "0.2", "-1.0", "-1.2", "1.2", "1.0"]
        );
    }

    // Tests queries naming a cell outside the grid fail with UnknownCell
    // Verified by printing an empty neighbor list instead
    #[test]
    fn test_unknown_cell() {
        let result = run(&["squaregrid", "-w", "3", "-H", "3", "neighbors", "5.5"]);
        assert!(matches!(result, Err(GridError::UnknownCell { .. })));
    }

    // Tests distance and pixel output
    // Verified by printing Euclidean distance
    #[test]
    fn test_distance_and_pixel_output() {
        let Ok(distance) = run(&["squaregrid", "distance", "-2.-1", "2.3"]) else {
            unreachable!("Distance should succeed");
        };
        assert_eq!(distance.trim(), "8");

        let Ok(pixel) = run(&["squaregrid", "pixel", "2.3"]) else {
            unreachable!("Pixel should succeed");
        };
        assert_eq!(pixel.trim(), "25 1.5 25");
    }

    // Tests seeded random output is reproducible and inside the grid
    // Verified by seeding from entropy
    #[test]
    fn test_random_output() {
        let args = ["squaregrid", "--seed", "3", "random", "-n", "5"];
        let (Ok(first), Ok(second)) = (run(&args), run(&args)) else {
            unreachable!("Random should succeed");
        };
        assert_eq!(first, second);
        assert_eq!(first.lines().count(), 5);
        for line in first.lines() {
            let Ok(coord) = line.parse::<GridCoord>() else {
                unreachable!("Output should be cell keys");
            };
            assert!((-2..=2).contains(&coord.x) && (-1..=3).contains(&coord.z));
        }
    }

    // Tests the text map marks a cell, its neighbors, and its diagonals
    // Verified by drawing rows from the smallest z first
    #[test]
    fn test_map_output() {
        let Ok(output) = run(&[
            "squaregrid", "-w", "3", "-H", "3", "map", "--mark", "-1.2", "-d",
        ]) else {
            unreachable!("Map should succeed");
        };
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["@+.", "+x.", "..."]);

        let Ok(plain) = run(&["squaregrid", "-w", "2", "-H", "1", "map"]) else {
            unreachable!("Map should succeed");
        };
        assert_eq!(plain, "..\n");
    }

    // Tests invalid dimensions surface as configuration errors
    // Verified by clamping zero width to one
    #[test]
    fn test_invalid_dimensions() {
        let result = run(&["squaregrid", "-w", "0", "info"]);
        assert!(matches!(
            result,
            Err(GridError::InvalidParameter {
                parameter: "width",
                ..
            })
        ));
    }
}
