//! `convdiff` command line
//!
//! Without arguments, runs the reference case and prints the grid size and the
//! error norms against the exact solution:
//!
//! ```text
//! The Mesh Grid, [301, 301]
//! The Norm Error, L2=0.001087, Linf=0.011647
//! ```
//!
//! Logs go to stderr (default level `warn`, raised with `-v` or `RUST_LOG`).

use std::error::Error;
use std::io::Write;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use env_logger::{Builder, Env, Target};
use log::{error, info};

use convdiff_rs::analysis::ConvergenceStudy;
use convdiff_rs::config::{SimulationConfig, REFERENCE_FINAL_TIME};
use convdiff_rs::mesh::REFERENCE_POINTS;
use convdiff_rs::output::export::{CsvConfig, CsvExporter, CsvMetadata, Exporter};
use convdiff_rs::output::visualization::plot_centerline_profile;
use convdiff_rs::physics::AnalyticSolution;
use convdiff_rs::simulation;
use convdiff_rs::solver::DEFAULT_SAFETY_FACTOR;

/// 2D convection-diffusion of a Gaussian pulse, checked against the exact solution
#[derive(Parser, Debug)]
#[command(name = "convdiff")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "2D convection-diffusion solver with exact-solution error norms", long_about = None)]
struct Cli {
    /// Grid points per axis
    #[arg(long, default_value_t = REFERENCE_POINTS)]
    points: usize,

    /// Target time
    #[arg(long, default_value_t = REFERENCE_FINAL_TIME)]
    final_time: f64,

    /// Fraction of the stability limit used as time step
    #[arg(long, default_value_t = DEFAULT_SAFETY_FACTOR, conflicts_with = "dt")]
    safety_factor: f64,

    /// Fixed time step, rejected when above the stability limit
    #[arg(long)]
    dt: Option<f64>,

    /// Export the final field (or the convergence table) to this CSV file
    #[arg(long)]
    csv: Option<String>,

    /// Plot the centre-line profile (PNG or SVG by extension)
    #[arg(long)]
    plot: Option<String>,

    /// Run a grid-refinement study on these resolutions (e.g. 51,101,201)
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    convergence: Option<Vec<usize>>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn simulation_config(&self) -> SimulationConfig {
        let config = SimulationConfig::default()
            .with_points(self.points)
            .with_final_time(self.final_time);

        match self.dt {
            Some(dt) => config.with_fixed_dt(dt),
            None => config.with_safety_factor(self.safety_factor),
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:5} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn run_single(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let outcome = simulation::run(&cli.simulation_config())?;

    let (ndim1, ndim2) = outcome.mesh.shape();
    println!("The Mesh Grid, [{}, {}]", ndim1, ndim2);
    println!("The Norm Error, {}", outcome.error);

    if let Some(path) = &cli.csv {
        let exact = outcome.exact.sample(&outcome.mesh, outcome.result.final_time);
        let exporter = CsvExporter::new(CsvConfig::default().with_metadata(CsvMetadata::from_outcome(&outcome)));
        exporter.export_field(&outcome.mesh, &outcome.field, Some(&exact), path)?;
        info!("Field written to {}", path);
    }

    if let Some(path) = &cli.plot {
        plot_centerline_profile(&outcome, path, None)?;
        info!("Profile plot written to {}", path);
    }

    Ok(())
}

fn run_convergence(cli: &Cli, resolutions: &[usize]) -> Result<(), Box<dyn Error>> {
    let study = ConvergenceStudy::run(&cli.simulation_config(), resolutions)?;
    let orders = study.observed_orders();

    println!("{:>8} {:>12} {:>12} {:>12} {:>8} {:>8}", "points", "spacing", "L2", "Linf", "p(L2)", "p(Linf)");
    for (k, record) in study.records.iter().enumerate() {
        let (p_l2, p_linf) = match k.checked_sub(1).and_then(|p| orders.get(p)) {
            Some(order) => (format!("{:.3}", order.l2), format!("{:.3}", order.linf)),
            None => ("-".to_string(), "-".to_string()),
        };
        println!(
            "{:>8} {:>12.6} {:>12.6e} {:>12.6e} {:>8} {:>8}",
            record.points, record.spacing, record.l2, record.linf, p_l2, p_linf
        );
    }

    if let Some(path) = &cli.csv {
        CsvExporter::default().export_convergence(&study, path)?;
        info!("Convergence table written to {}", path);
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match &cli.convergence {
        Some(resolutions) => run_convergence(&cli, resolutions),
        None => run_single(&cli),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
