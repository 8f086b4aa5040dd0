//! Cross-section profile plotting
//!
//! A 2D field is shown through a horizontal cut c(x) at fixed y. The default
//! cut goes through the mesh row nearest the pulse centre at the final time,
//! where numerical and exact solutions differ most visibly.
//!
//! # Usage
//!
//! ```rust,no_run
//! use convdiff_rs::config::SimulationConfig;
//! use convdiff_rs::output::visualization::plot_centerline_profile;
//! use convdiff_rs::simulation;
//!
//! let outcome = simulation::run(&SimulationConfig::default()).unwrap();
//! plot_centerline_profile(&outcome, "profile.png", None).unwrap();
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use crate::physics::AnalyticSolution;
use crate::simulation::SimulationOutcome;

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot numerical and exact profiles through the pulse centre
///
/// Picks the mesh row nearest `y0 + v·t` at the final time and overlays the
/// numerical field and the exact solution along x.
///
/// # Arguments
///
/// * `outcome` - Finished run
/// * `output_path` - Path to save the plot (PNG or SVG, by extension)
/// * `config` - Optional plot configuration
pub fn plot_centerline_profile(
    outcome: &SimulationOutcome,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let mesh = &outcome.mesh;
    let t = outcome.result.final_time;

    let (_, y_center) = outcome.exact.center(t);
    let row = mesh.nearest_row(y_center);
    let (_, y_row) = mesh.coordinates(row, 0);

    let x_values = mesh.x_axis();
    let numerical = outcome.field.row(row);
    let exact: Vec<f64> = x_values
        .iter()
        .map(|&x| outcome.exact.evaluate(x, y_row, t))
        .collect();

    let default_config = PlotConfig::profile(format!("Profile at y = {:.3}, t = {}", y_row, t));
    let config = config.unwrap_or(&default_config);

    let numerical_color = config.line_color;
    let exact_color = config.exact_color;
    let curves = [
        ("Numerical", x_values.as_slice(), numerical.as_slice(), numerical_color),
        ("Exact", x_values.as_slice(), exact.as_slice(), exact_color),
    ];

    draw_profiles(&curves, output_path, config)
}

/// Plot several profiles on the same axes
///
/// # Arguments
///
/// * `profiles` - Vec of (label, x_values, concentration)
/// * `output_path` - Path to save the plot
/// * `config` - Optional plot configuration
///
/// # Example
///
/// ```rust,ignore
/// let profiles = vec![
///     ("t = 0", x.as_slice(), initial.as_slice()),
///     ("t = 0.5", x.as_slice(), last.as_slice()),
/// ];
/// plot_profiles_comparison(profiles, "comparison.png", None)?;
/// ```
pub fn plot_profiles_comparison(
    profiles: Vec<(&str, &[f64], &[f64])>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if profiles.is_empty() {
        return Err("No profiles provided".into());
    }

    let default_config = PlotConfig::profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let curves: Vec<_> = profiles
        .iter()
        .enumerate()
        .map(|(idx, (label, x, c))| (*label, *x, *c, config.get_series_color(idx)))
        .collect();

    draw_profiles(&curves, output_path, config)
}

/// Plot the centre-line profile of every snapshot of a run
///
/// The row is chosen once, from the pulse centre at the final time.
pub fn plot_snapshot_evolution(
    outcome: &SimulationOutcome,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let snapshots = &outcome.result.snapshots;
    if snapshots.is_empty() {
        return Err("No snapshots recorded, enable snapshot_interval".into());
    }

    let mesh = &outcome.mesh;
    let (_, y_center) = outcome.exact.center(outcome.result.final_time);
    let row = mesh.nearest_row(y_center);

    let x_values = mesh.x_axis();
    let labels: Vec<String> = snapshots.iter().map(|s| format!("t = {:.3}", s.time)).collect();
    let rows: Vec<Vec<f64>> = snapshots.iter().map(|s| s.field.row(row)).collect();

    let profiles = labels
        .iter()
        .zip(rows.iter())
        .map(|(label, c)| (label.as_str(), x_values.as_slice(), c.as_slice()))
        .collect();

    let default_config = PlotConfig::profile("Profile Evolution");
    plot_profiles_comparison(profiles, output_path, Some(config.unwrap_or(&default_config)))
}

// =================================================================================================
// Backend dispatch
// =================================================================================================

type Curve<'a> = (&'a str, &'a [f64], &'a [f64], RGBColor);

/// Choose the backend from the file extension and draw
fn draw_profiles(curves: &[Curve<'_>], output_path: &str, config: &PlotConfig) -> Result<(), Box<dyn Error>> {
    if curves.iter().any(|(_, x, c, _)| x.len() != c.len()) {
        return Err("Profile length mismatch between x values and concentration".into());
    }

    let min_x = curves
        .iter()
        .filter_map(|(_, x, _, _)| x.first().copied())
        .fold(f64::INFINITY, f64::min);
    let max_x = curves
        .iter()
        .filter_map(|(_, x, _, _)| x.last().copied())
        .fold(f64::NEG_INFINITY, f64::max);
    if !(min_x.is_finite() && max_x.is_finite() && max_x > min_x) {
        return Err("Profiles need at least two distinct x values".into());
    }

    let (min_c, max_c) = curves
        .iter()
        .flat_map(|(_, _, c, _)| c.iter().copied())
        .fold((0.0_f64, 1e-10_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let margin = 0.1 * (max_c - min_c);
    let y_range = (min_c - margin)..(max_c + margin);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_profiles_impl(backend, curves, config, min_x..max_x, y_range)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_profiles_impl(backend, curves, config, min_x..max_x, y_range)
        }
    }
}

/// Implementation for profile plotting with concrete backend
fn plot_profiles_impl<DB: DrawingBackend>(
    backend: DB,
    curves: &[Curve<'_>],
    config: &PlotConfig,
    x_range: std::ops::Range<f64>,
    y_range: std::ops::Range<f64>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    if config.show_grid {
        chart.configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.2}", x))
            .y_label_formatter(&|y| format!("{:.3}", y))
            .draw()?;
    }

    for &(label, x_values, concentration, color) in curves {
        chart
            .draw_series(LineSeries::new(
                x_values.iter().zip(concentration.iter()).map(|(x, c)| (*x, *c)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::simulation;

    fn short_run(snapshots: Option<usize>) -> SimulationOutcome {
        let mut config = SimulationConfig::default().with_points(41).with_final_time(0.05);
        config.snapshot_interval = snapshots;
        simulation::run(&config).unwrap()
    }

    #[test]
    fn test_plot_centerline_profile() {
        let temp = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        let path = temp.path();

        plot_centerline_profile(&short_run(None), path.to_str().unwrap(), None).unwrap();
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }

    #[test]
    fn test_plot_centerline_profile_svg() {
        let temp = tempfile::Builder::new().suffix(".svg").tempfile().unwrap();
        let path = temp.path();

        plot_centerline_profile(&short_run(None), path.to_str().unwrap(), None).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("<svg"));
    }

    #[test]
    fn test_plot_snapshot_evolution() {
        let temp = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        let path = temp.path();

        plot_snapshot_evolution(&short_run(Some(2)), path.to_str().unwrap(), None).unwrap();
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }

    #[test]
    fn test_snapshot_evolution_without_snapshots() {
        let result = plot_snapshot_evolution(&short_run(None), "unused.png", None);
        assert!(result.is_err());
    }

    #[test]
    fn test_comparison_rejects_empty_and_mismatched() {
        assert!(plot_profiles_comparison(Vec::new(), "unused.png", None).is_err());

        let x = [0.0, 1.0, 2.0];
        let c = [0.0, 1.0];
        assert!(plot_profiles_comparison(vec![("bad", &x[..], &c[..])], "unused.png", None).is_err());
    }
}
