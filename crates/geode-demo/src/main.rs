//! Command-line driver that builds a subdivided sphere and reports on it.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p geode-demo -- --base seamed-cube --algorithm bisection --iterations 6`.

use std::process::ExitCode;

use clap::Parser;
use geode_config::{CliArgs, Config, ConfigError, default_config_dir};
use geode_math::Vector3;
use geode_mesh::{MeshStats, VertexSink};
use tracing::{error, info, warn};

/// Stand-in for an immediate-mode renderer: tallies what it is fed.
#[derive(Debug, Default)]
struct CountingSink {
    corners: usize,
    colored: usize,
    centroid: Vector3,
}

impl VertexSink for CountingSink {
    fn submit(&mut self, position: Vector3, color: Option<Vector3>) {
        self.corners += 1;
        if color.is_some() {
            self.colored += 1;
        }
        self.centroid += position;
    }
}

/// What one run produced.
#[derive(Debug)]
struct RunReport {
    stats: MeshStats,
    inward: Option<usize>,
    streamed_corners: usize,
    vertex_bytes: usize,
    index_bytes: usize,
}

impl RunReport {
    /// No triangle was found winding inward (or the check was skipped).
    fn is_clean(&self) -> bool {
        self.inward.is_none_or(|n| n == 0)
    }
}

fn run(config: &Config) -> Result<RunReport, ConfigError> {
    let request = config.mesh.request()?;
    info!(
        "Building {} with {} x{}",
        request.base, request.algorithm, request.iterations
    );

    let mesh = request.build()?;
    let stats = mesh.stats();
    info!(
        "Mesh ready: {} vertices, {} triangles, {} edges, {} colors",
        stats.vertices, stats.triangles, stats.edges, stats.distinct_colors
    );
    info!("Unit sphere error: {:e}", stats.unit_sphere_error());

    let inward = config.debug.check_winding.then(|| mesh.inward_triangles());
    match inward {
        Some(0) => info!("All triangles wind outward"),
        Some(n) => warn!("{} triangles wind inward", n),
        None => {}
    }

    let mut sink = CountingSink::default();
    mesh.draw(&mut sink);
    let centroid = if sink.corners > 0 {
        sink.centroid * (1.0 / sink.corners as f32)
    } else {
        Vector3::ZERO
    };
    info!(
        "Streamed {} corners ({} colored), centroid {}",
        sink.corners, sink.colored, centroid
    );

    let gpu = mesh.to_gpu();
    Ok(RunReport {
        stats,
        inward,
        streamed_corners: sink.corners,
        vertex_bytes: gpu.vertex_bytes().len(),
        index_bytes: gpu.index_bytes().len(),
    })
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    geode_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(report) => {
            info!(
                "Done: {} triangles, {} corners streamed, {} vertex bytes, {} index bytes",
                report.stats.triangles,
                report.streamed_corners,
                report.vertex_bytes,
                report.index_bytes
            );
            if report.is_clean() {
                ExitCode::SUCCESS
            } else {
                error!("Winding check failed: {:?} inward triangles", report.inward);
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geode_mesh::{BasePolyhedron, SubdivisionAlgorithm};

    #[test]
    fn test_default_run() {
        let report = run(&Config::default()).unwrap();
        assert_eq!(report.stats.triangles, 20 * 64);
        assert_eq!(report.inward, Some(0));
        assert_eq!(report.streamed_corners, 20 * 64 * 3);
        assert_eq!(report.index_bytes, 20 * 64 * 3 * 4);
        assert_eq!(report.vertex_bytes, report.stats.vertices * 32);
        assert!(report.is_clean());
    }

    #[test]
    fn test_cube_bisection_run() {
        let mut config = Config::default();
        config.mesh.base = BasePolyhedron::SeamedCube;
        config.mesh.algorithm = SubdivisionAlgorithm::LongestEdgeBisection;
        config.mesh.iterations = 2;
        config.debug.check_winding = false;

        let report = run(&config).unwrap();
        assert_eq!(report.stats.triangles, 48);
        assert_eq!(report.stats.distinct_colors, 6);
        assert_eq!(report.inward, None);
        assert!(report.is_clean());
    }

    #[test]
    fn test_inward_triangles_make_report_unclean() {
        let mut report = run(&Config::default()).unwrap();
        report.inward = Some(3);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_negative_iterations_fail() {
        let mut config = Config::default();
        config.mesh.iterations = -1;
        assert!(matches!(run(&config), Err(ConfigError::Mesh(_))));
    }

    #[test]
    fn test_counting_sink() {
        let mut sink = CountingSink::default();
        sink.submit(Vector3::X, None);
        sink.submit(Vector3::Y, Some(Vector3::ONE));
        assert_eq!(sink.corners, 2);
        assert_eq!(sink.colored, 1);
        assert_eq!(sink.centroid, Vector3::new(1.0, 1.0, 0.0));
    }
}
