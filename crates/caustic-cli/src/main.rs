//! caustic CLI - discrete caustic viewer
//!
//! Loads a lens OBJ, refracts axial rays through it and shows where they
//! land on a receiver plane, interactively or as a PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use caustic::{parse_distance, CausticConfig, Session};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

mod logger;
mod render;
mod viewer;

use logger::{init_logger, LogLevel};

#[derive(Parser)]
#[command(name = "caustic")]
#[command(version, about = "Discrete caustic simulator", long_about = None)]
struct Cli {
    /// Logging level
    #[arg(long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive viewer
    View {
        #[command(flatten)]
        lens: LensArgs,
    },
    /// Render the projection at one distance to a PNG
    Render {
        #[command(flatten)]
        lens: LensArgs,
        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,
        /// Image width in pixels
        #[arg(long, default_value = "256")]
        width: u32,
        /// Image height in pixels
        #[arg(long, default_value = "256")]
        height: u32,
    },
    /// Print lens and projection statistics
    Info {
        #[command(flatten)]
        lens: LensArgs,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Lens source and optics, from positional arguments and/or a config file.
#[derive(Args, Debug)]
struct LensArgs {
    /// Path to an OBJ file containing lens geometry
    lens: Option<PathBuf>,

    /// Distance between the lens and the receiver plane (z of the wall)
    #[arg(allow_hyphen_values = true)]
    distance: Option<String>,

    /// Refractive index ratio of the lens material
    #[arg(long)]
    eta: Option<f64>,

    /// Distance change per w/s key press
    #[arg(long)]
    step: Option<f64>,

    /// TOML config providing defaults for all of the above
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl LensArgs {
    /// Merge command-line values over the config file (or defaults).
    fn resolve(&self) -> Result<CausticConfig> {
        let mut config = match &self.config {
            Some(path) => CausticConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => CausticConfig::default(),
        };

        match (&self.lens, &self.config) {
            (Some(lens), _) => config.source = lens.clone(),
            (None, Some(_)) => {}
            (None, None) => anyhow::bail!("no lens file given (pass <LENS> or --config)"),
        }
        match (&self.distance, &self.config) {
            (Some(text), _) => config.distance = parse_distance(text)?,
            (None, Some(_)) => {}
            (None, None) => anyhow::bail!("no distance given (pass <DISTANCE> or --config)"),
        }
        if let Some(eta) = self.eta {
            config.eta = eta;
        }
        if let Some(step) = self.step {
            config.step = step;
        }
        config.validate()?;
        Ok(config)
    }

    fn open(&self) -> Result<Session> {
        let config = self.resolve()?;
        Session::open(&config)
            .with_context(|| format!("cannot start with lens {}", config.source.display()))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log lines on stderr would tear the viewer's screen.
    let level = match (&cli.command, &cli.log_file) {
        (Commands::View { .. }, None) => LogLevel::Off,
        _ => cli.log_level,
    };
    init_logger(level.into(), cli.log_file.as_deref())?;

    match cli.command {
        Commands::View { lens } => {
            let session = lens.open()?;
            viewer::run(session)?;
        }
        Commands::Render {
            lens,
            output,
            width,
            height,
        } => {
            let session = lens.open()?;
            render::write_png(&session.projection().points, width, height, &output)?;
            println!(
                "Rendered {} points at distance {} to {}",
                session.projection().len(),
                session.distance(),
                output.display()
            );
        }
        Commands::Info { lens, json } => {
            let session = lens.open()?;
            let report = Report::new(&session);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report.print();
            }
        }
    }

    Ok(())
}

/// Lens and projection statistics for `info`.
#[derive(Debug, Serialize)]
struct Report {
    positions: usize,
    normals: usize,
    samples: usize,
    eta: f64,
    total_internal: usize,
    distance: f64,
    points: usize,
    in_frame: usize,
    parallel: usize,
    /// `[min_x, min_y, max_x, max_y]` in frame units.
    bounds: Option<[f64; 4]>,
}

impl Report {
    fn new(session: &Session) -> Self {
        let projection = session.projection();
        Self {
            positions: session.positions().len(),
            normals: session.normals().len(),
            samples: session.sample_count(),
            eta: session.eta(),
            total_internal: session.total_internal_count(),
            distance: projection.distance,
            points: projection.len(),
            in_frame: projection.in_frame_count(),
            parallel: projection.degenerate_count(),
            bounds: projection
                .bounds()
                .map(|b| [b.min.x, b.min.y, b.max.x, b.max.y]),
        }
    }

    fn print(&self) {
        println!("Lens:");
        println!("  Positions: {}", self.positions);
        println!("  Normals: {}", self.normals);
        if self.positions != self.normals {
            println!("  Warning: only {} samples are index-aligned", self.samples);
        }
        println!("  Eta: {}", self.eta);
        println!("  Total internal reflections: {}", self.total_internal);

        println!("\nProjection at distance {}:", self.distance);
        println!("  Points: {}", self.points);
        println!("  In frame: {}", self.in_frame);
        println!("  Parallel to plane: {}", self.parallel);
        match self.bounds {
            Some([x0, y0, x1, y1]) => {
                println!("  Bounds: ({x0:.2}, {y0:.2}) - ({x1:.2}, {y1:.2})")
            }
            None => println!("  Bounds: none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caustic::CausticError;

    fn lens_args(args: &[&str]) -> LensArgs {
        let mut argv = vec!["caustic", "info"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Info { lens, .. } => lens,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_positional_args() {
        let config = lens_args(&["lens.obj", "5.0"]).resolve().unwrap();
        assert_eq!(config.source, PathBuf::from("lens.obj"));
        assert_eq!(config.distance, 5.0);
        assert_eq!(config.eta, caustic::DEFAULT_ETA);
    }

    #[test]
    fn test_negative_distance_and_overrides() {
        let config = lens_args(&["lens.obj", "-1.5", "--eta", "1.2", "--step", "0.05"])
            .resolve()
            .unwrap();
        assert_eq!(config.distance, -1.5);
        assert_eq!(config.eta, 1.2);
        assert_eq!(config.step, 0.05);
    }

    #[test]
    fn test_bad_distance_is_reported() {
        let err = lens_args(&["lens.obj", "far"]).resolve().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CausticError>(),
            Some(CausticError::InvalidDistance(_))
        ));
    }

    #[test]
    fn test_missing_arguments() {
        assert!(lens_args(&[]).resolve().is_err());
        assert!(lens_args(&["lens.obj"]).resolve().is_err());
    }

    #[test]
    fn test_report() {
        let geometry = caustic::LensGeometry::new(
            vec![caustic::caustic_math::Point3::origin(); 3],
            vec![caustic::caustic_math::Vec3::z(); 2],
        );
        let session = Session::from_geometry(geometry, 1.457, 5.0).unwrap();
        let report = Report::new(&session);
        assert_eq!(report.samples, 2);
        assert_eq!(report.in_frame, 2);
        assert_eq!(report.bounds, Some([128.0, 128.0, 128.0, 128.0]));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["positions"], 3);
        assert_eq!(json["total_internal"], 0);
    }

    #[test]
    fn test_invalid_eta_rejected() {
        assert!(lens_args(&["lens.obj", "1", "--eta", "0"]).resolve().is_err());
    }
}
