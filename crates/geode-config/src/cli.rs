//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use geode_mesh::{BasePolyhedron, SubdivisionAlgorithm};

use crate::Config;

/// Geode command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "geode", about = "Subdivided sphere mesh generator")]
pub struct CliArgs {
    /// Seed polyhedron (icosahedron, seamed-cube).
    #[arg(long)]
    pub base: Option<BasePolyhedron>,

    /// Subdivision algorithm (uniform-four-way, longest-edge-bisection).
    #[arg(long)]
    pub algorithm: Option<SubdivisionAlgorithm>,

    /// Number of subdivision passes.
    #[arg(long, allow_negative_numbers = true)]
    pub iterations: Option<i64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(base) = args.base {
            self.mesh.base = base;
        }
        if let Some(algorithm) = args.algorithm {
            self.mesh.algorithm = algorithm;
        }
        if let Some(iterations) = args.iterations {
            self.mesh.iterations = iterations;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
