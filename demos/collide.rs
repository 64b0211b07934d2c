//! Checks two polygons for collision from the command line.
//!
//! Run with:
//!
//! ```text
//! cargo run --example collide -- "0,0 100,0 100,100 0,100" "50,50 150,50 150,150 50,150"
//! cargo run --example collide -- --svg scene.svg --verbose "0,0 4,0 2,3" "10,10 14,10 12,13"
//! ```
//!
//! Options go before the polygons, since a polygon may start with `-`.

use clap::Parser;
use sepax::io::{parse_polygon, render_scene_svg};
use sepax::polygon::Polygon;
use sepax::{evaluate, CollisionError};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

/// Tests two convex polygons for collision.
///
/// Each polygon is given as text containing `x,y` pairs, e.g. "0,0 4,0 2,3".
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Write a rendering of both polygons to this SVG file.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Log every rejection, separating axis and verdict.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Vertices of the first polygon.
    #[arg(allow_hyphen_values = true)]
    first: String,

    /// Vertices of the second polygon.
    #[arg(allow_hyphen_values = true)]
    second: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    if let Err(err) = TermLogger::init(log_level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("logger unavailable: {err}");
    }

    let polygons = (parse_input(1, &cli.first), parse_input(2, &cli.second));
    let (Some(a), Some(b)) = polygons else {
        return ExitCode::from(2);
    };

    if let Some(path) = &cli.svg {
        if let Err(err) = fs::write(path, render_scene_svg(&a, &b, WIDTH, HEIGHT)) {
            log::error!("could not write {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
        log::info!("wrote {}", path.display());
    }

    match evaluate(&a, &b) {
        Ok(verdict) => {
            println!("result: {verdict}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", describe(&err));
            ExitCode::FAILURE
        }
    }
}

fn parse_input(index: usize, text: &str) -> Option<Polygon<f64>> {
    match parse_polygon(text) {
        Ok(polygon) => Some(polygon),
        Err(err) => {
            eprintln!("polygon {index}: {err}");
            None
        }
    }
}

fn describe(err: &CollisionError) -> String {
    match err {
        CollisionError::TooFewVertices { polygon, .. } => {
            format!("{polygon} does not form a polygon, at least 3 points are required")
        }
        CollisionError::NotConvex { polygon } => {
            format!("{polygon} is concave, collision cannot be tested")
        }
        CollisionError::InvalidEdge { .. } => err.to_string(),
    }
}
