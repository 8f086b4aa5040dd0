//! Output module for simulation results
//!
//! This module provides tools to output simulation results in various formats:
//! - **Visualization**: PNG/SVG profile plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── profile.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Design Philosophy
//!
//! - **Visualization**: for human interpretation
//! - **Export**: for programmatic analysis
//!
//! Neither sub-module runs simulations; both take finished results.

pub mod visualization;
pub mod export;
