use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::Palette;
use crate::error::ChartError;

// ---------------------------------------------------------------------------
// Render configuration
// ---------------------------------------------------------------------------

/// One selected sheet/category, in the order it should appear in the stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetSelection {
    /// Worksheet name in the uploaded workbook.
    pub sheet: String,
    /// Column holding the row labels for this sheet.
    pub label_column: String,
    /// Numeric column driving bar colour (the significance metric).
    pub metric_column: String,
    /// Panel title; falls back to the sheet name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Original label → display label.
    #[serde(default)]
    pub rename_map: BTreeMap<String, String>,
}

impl SheetSelection {
    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.sheet)
    }
}

/// Legend (colorbar) geometry and labelling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendConfig {
    /// Bar width as a fraction of the canvas width.
    pub width_fraction: f64,
    /// Bar height as a fraction of the canvas height.
    pub height_fraction: f64,
    /// Tick/label font size in points.
    pub font_size: f64,
    /// Name of the significance metric, drawn alongside the bar.
    pub label: String,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            width_fraction: 0.02,
            height_fraction: 0.7,
            font_size: 14.0,
            label: "-log10(P-Value)".to_string(),
        }
    }
}

/// Everything the interactive host hands to the core for one render pass.
///
/// Constructed once per request and passed down immutably; the core never
/// reads widget state directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Sheets to render, order-preserving; panels are never re-sorted.
    pub sheets: Vec<SheetSelection>,

    /// Continuous palette shared by every bar and the legend.
    #[serde(default = "default_palette")]
    pub palette: Palette,

    /// X-axis description, drawn on the bottom panel only.
    #[serde(default = "default_x_axis_label")]
    pub x_axis_label: String,
    /// Font sizes in points; scaled by dpi at raster time.
    #[serde(default = "default_axis_font_size")]
    pub x_axis_font_size: f64,
    #[serde(default = "default_axis_font_size")]
    pub y_axis_font_size: f64,
    #[serde(default = "default_title_font_size")]
    pub title_font_size: f64,

    /// Overall canvas size in inches.
    #[serde(default = "default_figure_width")]
    pub figure_width: f64,
    #[serde(default = "default_figure_height")]
    pub figure_height: f64,

    /// Vertical gap between panels as a fraction of one panel's height.
    #[serde(default = "default_panel_spacing")]
    pub panel_spacing: f64,
    /// Fraction of the canvas width occupied by the panel stack; the rest
    /// is reserved for the legend.
    #[serde(default = "default_panel_width_fraction")]
    pub panel_width_fraction: f64,

    #[serde(default)]
    pub legend: LegendConfig,

    /// Export resolution in dots per inch.
    #[serde(default = "default_export_dpi")]
    pub export_dpi: u32,
}

fn default_palette() -> Palette {
    Palette::Inferno
}
fn default_x_axis_label() -> String {
    "Counts".to_string()
}
fn default_axis_font_size() -> f64 {
    12.0
}
fn default_title_font_size() -> f64 {
    16.0
}
fn default_figure_width() -> f64 {
    14.0
}
fn default_figure_height() -> f64 {
    20.0
}
fn default_panel_spacing() -> f64 {
    0.5
}
fn default_panel_width_fraction() -> f64 {
    0.7
}
fn default_export_dpi() -> u32 {
    300
}

impl RenderConfig {
    /// Minimal configuration for the given sheet selections; everything
    /// else takes the documented defaults.
    pub fn new(sheets: Vec<SheetSelection>) -> Self {
        Self {
            sheets,
            palette: default_palette(),
            x_axis_label: default_x_axis_label(),
            x_axis_font_size: default_axis_font_size(),
            y_axis_font_size: default_axis_font_size(),
            title_font_size: default_title_font_size(),
            figure_width: default_figure_width(),
            figure_height: default_figure_height(),
            panel_spacing: default_panel_spacing(),
            panel_width_fraction: default_panel_width_fraction(),
            legend: LegendConfig::default(),
            export_dpi: default_export_dpi(),
        }
    }

    /// Reject invalid geometry before any layout work begins.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.sheets.is_empty() {
            return Err(ChartError::Configuration(
                "at least one sheet must be selected".into(),
            ));
        }
        for (name, value) in [
            ("figure_width", self.figure_width),
            ("figure_height", self.figure_height),
            ("x_axis_font_size", self.x_axis_font_size),
            ("y_axis_font_size", self.y_axis_font_size),
            ("title_font_size", self.title_font_size),
            ("legend.font_size", self.legend.font_size),
        ] {
            if !(value > 0.0) {
                return Err(ChartError::Configuration(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("panel_width_fraction", self.panel_width_fraction),
            ("legend.width_fraction", self.legend.width_fraction),
            ("legend.height_fraction", self.legend.height_fraction),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(ChartError::Configuration(format!(
                    "{name} must lie strictly between 0 and 1, got {value}"
                )));
            }
        }
        if !(self.panel_spacing >= 0.0) {
            return Err(ChartError::Configuration(format!(
                "panel_spacing must be non-negative, got {}",
                self.panel_spacing
            )));
        }
        if self.export_dpi == 0 {
            return Err(ChartError::Configuration(
                "export_dpi must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> SheetSelection {
        SheetSelection {
            sheet: "Sheet1".into(),
            label_column: "Term".into(),
            metric_column: "PValue".into(),
            display_name: None,
            rename_map: BTreeMap::new(),
        }
    }

    #[test]
    fn default_config_validates() {
        assert!(RenderConfig::new(vec![selection()]).validate().is_ok());
    }

    #[test]
    fn empty_sheet_list_is_rejected() {
        let err = RenderConfig::new(Vec::new()).validate().unwrap_err();
        assert!(matches!(err, ChartError::Configuration(_)));
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let mut config = RenderConfig::new(vec![selection()]);
        config.figure_height = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ChartError::Configuration(_))
        ));

        let mut config = RenderConfig::new(vec![selection()]);
        config.figure_width = -3.0;
        assert!(matches!(
            config.validate(),
            Err(ChartError::Configuration(_))
        ));
    }

    #[test]
    fn out_of_range_fractions_are_rejected() {
        let mut config = RenderConfig::new(vec![selection()]);
        config.legend.height_fraction = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ChartError::Configuration(_))
        ));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = RenderConfig::new(vec![selection()]);
        let json = serde_json::to_string(&config).unwrap();
        let back: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sheets.len(), 1);
        assert_eq!(back.palette, crate::color::Palette::Inferno);
        assert_eq!(back.export_dpi, 300);
    }

    #[test]
    fn unknown_palette_in_json_fails_with_the_configuration_message() {
        let config = RenderConfig::new(vec![selection()]);
        let json = serde_json::to_string(&config)
            .unwrap()
            .replace("\"inferno\"", "\"rainbow\"");
        let err = serde_json::from_str::<RenderConfig>(&json).unwrap_err();
        assert!(err.to_string().contains("unknown palette"), "got {err}");
    }

    #[test]
    fn palette_in_json_is_case_insensitive() {
        let config = RenderConfig::new(vec![selection()]);
        let json = serde_json::to_string(&config)
            .unwrap()
            .replace("\"inferno\"", "\"Viridis\"");
        let back: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.palette, crate::color::Palette::Viridis);
    }

    #[test]
    fn title_falls_back_to_sheet_name() {
        let mut sel = selection();
        assert_eq!(sel.title(), "Sheet1");
        sel.display_name = Some("Biological Process".into());
        assert_eq!(sel.title(), "Biological Process");
    }
}
