//! Lenscast CLI - camera projection command-line tool.
//!
//! Usage: lenscast <COMMAND> [OPTIONS]
//!
//! Run `lenscast --help` for available commands.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use nalgebra::{Point3, Vector3};

use lenscast::annotate::CoordinateSet;
use lenscast::camera::{fov, Camera, Viewport};
use lenscast::io::{self, naming, points};
use lenscast::project::Projector;
use lenscast::scene::{fit_backdrop, SceneConfig};

#[derive(Parser)]
#[command(name = "lenscast")]
#[command(author, version, about = "Camera projection CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a vertical field of view to horizontal
    Fov {
        /// Vertical field of view in degrees
        #[arg(short = 'v', long, default_value = "30.0")]
        fov_y: f64,

        /// Viewport width in pixels
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Viewport height in pixels
        #[arg(long, default_value = "1080")]
        height: u32,
    },

    /// Size a backdrop plane that fills the camera frustum
    Backdrop {
        /// Vertical field of view in degrees
        #[arg(short = 'v', long, default_value = "30.0")]
        fov_y: f64,

        /// Viewport width in pixels
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Viewport height in pixels
        #[arg(long, default_value = "1080")]
        height: u32,

        /// Distance from the focal point to the backdrop
        #[arg(short, long, default_value = "1.5")]
        standoff: f64,

        /// Margin factor applied to the frustum cross-section
        #[arg(short = 'k', long, default_value = "10.0")]
        overscan: f64,

        /// World-space offset applied to the plane, as "x,y,z"
        #[arg(short, long, default_value = "0,0,0", value_parser = parse_vec3)]
        translate: Vector3<f64>,
    },

    /// Project world-space points to display coordinates
    Project {
        /// Input points file (one "x y z" triple per line)
        input: PathBuf,

        /// Output annotation file (default: unique name next to the input)
        output: Option<PathBuf>,

        /// Camera position as "x,y,z"
        #[arg(short, long, default_value = "0,-1.5,2", value_parser = parse_point3)]
        position: Point3<f64>,

        /// Camera focal point as "x,y,z"
        #[arg(short, long, default_value = "0,0,0", value_parser = parse_point3)]
        look_at: Point3<f64>,

        /// Camera view-up direction as "x,y,z"
        #[arg(short, long, default_value = "0,1,0", value_parser = parse_vec3)]
        up: Vector3<f64>,

        /// Vertical field of view in degrees
        #[arg(short = 'v', long, default_value = "30.0")]
        fov_y: f64,

        /// Viewport width in pixels
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Viewport height in pixels
        #[arg(long, default_value = "1080")]
        height: u32,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Fov { fov_y, width, height } => {
            cmd_fov(fov_y, width, height)?;
        }

        Commands::Backdrop {
            fov_y,
            width,
            height,
            standoff,
            overscan,
            translate,
        } => {
            cmd_backdrop(fov_y, width, height, standoff, overscan, translate)?;
        }

        Commands::Project {
            input,
            output,
            position,
            look_at,
            up,
            fov_y,
            width,
            height,
        } => {
            cmd_project(&input, output, position, look_at, up, fov_y, width, height)?;
        }
    }

    Ok(())
}

/// Parse a comma-separated triple of numbers, e.g. "0,-1.5,2".
fn parse_triple(s: &str) -> Result<[f64; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected three comma-separated values, got '{}'", s));
    }

    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| format!("invalid number '{}': {}", part, e))?;
    }
    Ok(out)
}

fn parse_point3(s: &str) -> Result<Point3<f64>, String> {
    let [x, y, z] = parse_triple(s)?;
    Ok(Point3::new(x, y, z))
}

fn parse_vec3(s: &str) -> Result<Vector3<f64>, String> {
    let [x, y, z] = parse_triple(s)?;
    Ok(Vector3::new(x, y, z))
}

fn cmd_fov(fov_y: f64, width: u32, height: u32) -> Result<(), Box<dyn std::error::Error>> {
    let viewport = Viewport::new(width, height)?;
    let aspect = viewport.aspect_ratio();
    let fov_x = fov::horizontal_fov(fov_y, aspect)?;

    println!("Viewport: {}x{} (aspect {:.4})", width, height, aspect);
    println!("Vertical FOV:   {:.4} deg ({:.6} rad)", fov_y, fov_y.to_radians());
    println!("Horizontal FOV: {:.4} deg ({:.6} rad)", fov_x.to_degrees(), fov_x);

    Ok(())
}

fn cmd_backdrop(
    fov_y: f64,
    width: u32,
    height: u32,
    standoff: f64,
    overscan: f64,
    translate: Vector3<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let camera = Camera::default().with_fov_y(fov_y);
    let viewport = Viewport::new(width, height)?;
    let config = SceneConfig::default()
        .with_standoff(standoff)
        .with_overscan(overscan)
        .with_translation(translate);

    let plane = fit_backdrop(&camera, &viewport, &config)?;

    println!("Backdrop: {:.4} x {:.4}", plane.width(), plane.height());
    let center = plane.center();
    println!("Center: ({:.4}, {:.4}, {:.4})", center.x, center.y, center.z);
    for (label, corner) in ["origin", "point1", "point2", "point3"]
        .iter()
        .zip(plane.corners())
    {
        println!("  {}: ({:.4}, {:.4}, {:.4})", label, corner.x, corner.y, corner.z);
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_project(
    input: &Path,
    output: Option<PathBuf>,
    position: Point3<f64>,
    look_at: Point3<f64>,
    up: Vector3<f64>,
    fov_y: f64,
    width: u32,
    height: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let world = points::load_points(input)?;
    println!("Loaded: {} points", world.len());

    let camera = Camera::default()
        .with_position(position)
        .with_focal_point(look_at)
        .with_view_up(up)
        .with_fov_y(fov_y);
    let viewport = Viewport::new(width, height)?;
    let projector = Projector::new(&camera, &viewport)?;

    let start = Instant::now();
    let projected = projector.project_all(&world);
    let elapsed = start.elapsed();

    if projected.len() < world.len() {
        println!("Skipped: {} points behind the camera", world.len() - projected.len());
    }

    let set: CoordinateSet = projected.into_iter().collect();

    let output = match output {
        Some(path) => path,
        None => {
            let dir = input.parent().unwrap_or_else(|| Path::new("."));
            let stem = input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("annotations");
            naming::unique_path(dir, stem, "json")
        }
    };

    io::save(&set, &output)?;
    println!("Saved: {} ({} points, {:.2?})", output.display(), set.len(), elapsed);

    Ok(())
}
