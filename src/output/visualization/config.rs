//! Plot configuration shared across visualization functions

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Color of the numerical solution
/// - `exact_color`: Color of the exact solution
/// - `series_colors`: Optional palette for multi-curve plots
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust
/// use convdiff_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::profile("Centre line at t = 0.5");
/// config.line_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: "Concentration")
    pub ylabel: String,

    /// Numerical solution color (default: RED)
    pub line_color: RGBColor,

    /// Exact solution color (default: BLUE)
    pub exact_color: RGBColor,

    /// Optional palette for multi-curve plots
    ///
    /// If None, uses the default palette
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(),
            ylabel: "Concentration".to_string(),
            line_color: RED,
            exact_color: BLUE,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept `&str`, `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// ```rust
/// use convdiff_rs::output::visualization::{PlotConfig, NO_TITLE};
///
/// let config = PlotConfig::profile(NO_TITLE);
/// assert_eq!(config.title, "Concentration Profile");
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Config for horizontal cross-sections c(x) at fixed y
    ///
    /// Sets xlabel to "x" and title to custom value or "Concentration Profile"
    pub fn profile(title: impl IntoOptionalTitle) -> Self {
        Self {
            xlabel: "x".to_string(),
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Concentration Profile".to_string()),
            ..Self::default()
        }
    }

    /// Config with a custom palette for multi-curve plots
    pub fn series_colors(colors: Vec<RGBColor>) -> Self {
        Self {
            series_colors: Some(colors),
            ..Self::default()
        }
    }

    /// Color of curve `index`
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_series_color(&self, index: usize) -> RGBColor {
        if let Some(colors) = &self.series_colors
            && index < colors.len()
        {
            return colors[index];
        }

        const PALETTE: [RGBColor; 8] = [
            BLUE,
            RED,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0),  // Orange
            RGBColor(128, 0, 128),  // Purple
        ];

        PALETTE[index % PALETTE.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
