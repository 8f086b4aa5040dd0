//! Visualization of simulation results
//!
//! This module draws line plots of the concentration field using the
//! `plotters` library. The output format follows the file extension: `.svg`
//! gives an SVG document, anything else a PNG bitmap.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **profile**: Horizontal cross-sections c(x) at fixed y
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use convdiff_rs::output::visualization::{plot_centerline_profile, PlotConfig};
//!
//! let outcome = simulation::run(&config)?;
//!
//! // Numerical vs exact through the pulse centre
//! plot_centerline_profile(&outcome, "profile.png", None)?;
//!
//! // Or with a custom title
//! let plot = PlotConfig::profile("Reference run");
//! plot_centerline_profile(&outcome, "profile.svg", Some(&plot))?;
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Function |
//! |----------|----------|
//! | Numerical vs exact at final time | `plot_centerline_profile` |
//! | Arbitrary profiles on shared axes | `plot_profiles_comparison` |
//! | Profile at every snapshot | `plot_snapshot_evolution` |

pub mod config;
pub mod profile;

pub use config::{PlotConfig, NO_TITLE};

pub use profile::{plot_centerline_profile, plot_profiles_comparison, plot_snapshot_evolution};
