//! Triangle Solving Tool
//!
//! Reads any mix of the three angles and three opposite sides, completes
//! the triangle and prints every value, including the alternate triangle
//! used for layout.
//!
//! Usage:
//!   cargo run --bin trigsolve -- --side-a 3 --side-b 4 --side-c 5
//!   cargo run --bin trigsolve -- --angle-a 50 --angle-b 60 --json

use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;
use trigsolve::input::parse_slot_strict;
use trigsolve::layout::{Extents, Workarea};
use trigsolve::report::TriangleReport;
use trigsolve::{ErrorSet, TriangleSolver, TrigsolveError};

/// Triangle Solving Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Solves a triangle from any workable mix of angles (degrees) and opposite sides",
    long_about = None
)]
struct Args {
    /// Angle at vertex A in degrees
    #[arg(long, default_value = "")]
    angle_a: String,

    /// Side a, opposite vertex A
    #[arg(long, default_value = "")]
    side_a: String,

    /// Angle at vertex B in degrees
    #[arg(long, default_value = "")]
    angle_b: String,

    /// Side b, opposite vertex B
    #[arg(long, default_value = "")]
    side_b: String,

    /// Angle at vertex C in degrees
    #[arg(long, default_value = "")]
    angle_c: String,

    /// Side c, opposite vertex C
    #[arg(long, default_value = "")]
    side_c: String,

    /// Scale all sides of the solved triangle by this factor
    #[arg(long)]
    scale: Option<f64>,

    /// Fit the solved triangle into a WIDTHxHEIGHT region
    #[arg(long, value_parser = parse_region)]
    fit: Option<(f64, f64)>,

    /// Print the result as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Display debug logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

/// Parse a region given as `WIDTHxHEIGHT`
fn parse_region(text: &str) -> Result<(f64, f64), String> {
    let (width, height) = text
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", text))?;
    let width = width.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let height = height.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((width, height))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_values(args: &Args) -> trigsolve::Result<[(f64, f64); 3]> {
    Ok([
        (parse_slot_strict(&args.angle_a)?, parse_slot_strict(&args.side_a)?),
        (parse_slot_strict(&args.angle_b)?, parse_slot_strict(&args.side_b)?),
        (parse_slot_strict(&args.angle_c)?, parse_slot_strict(&args.side_c)?),
    ])
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

fn print_triangle(triangle: &TriangleSolver) {
    for line in triangle.result_list() {
        println!("{}", line);
    }
}

fn run(args: &Args) -> trigsolve::Result<bool> {
    let mut triangle = TriangleSolver::from_values(read_values(args)?);
    let mut errors = ErrorSet::new();
    let strategy = triangle.solve(&mut errors)?;

    if let Some(factor) = args.scale {
        triangle.scale(factor)?;
    }

    if args.json {
        println!("{}", TriangleReport::new(&triangle, strategy, &errors).to_json()?);
    } else {
        match strategy {
            Some(strategy) => print_section_header(&format!("Solved ({})", strategy)),
            None => print_section_header("Unsolved"),
        }
        print_triangle(&triangle);

        if let Some(extents) = Extents::of(&triangle) {
            print_section_header("Extents");
            println!("width  {:.2}", extents.width);
            println!("height {:.2}", extents.height);
        }

        if let Some((width, height)) = args.fit {
            let area = Workarea::new(width, height);
            let factor = Extents::of(&triangle).and_then(|extents| area.fit_factor(&extents));
            match (factor, area.fit(&triangle)?) {
                (Some(factor), Some(fitted)) => {
                    print_section_header(&format!("Fitted to {}x{}", width, height));
                    println!("factor {:.4}", factor);
                    print_triangle(&fitted);
                }
                _ => println!("\nTriangle cannot be fitted to {}x{}", width, height),
            }
        }
    }

    if !errors.is_empty() {
        eprintln!("{}", errors.joined("\n"));
    }
    Ok(strategy.is_some())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err @ TrigsolveError::InvalidInput(_)) => {
            eprintln!("Error: {}", err);
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(1)
        }
    }
}
