//! Composite ranked bar-panel charts for enrichment-analysis results.
//!
//! Takes a spreadsheet workbook where each selected sheet carries a label
//! column, a numeric `Count` column, and a significance-metric column, and
//! produces one figure: a vertical stack of ranked horizontal bar panels
//! sharing one x-axis, bar colour encoding the metric through a single
//! continuous legend. The figure can be exported as a high-resolution PNG.
//!
//! Pipeline: load → sanitize → rank → colour-map → layout → legend → export.
//! Every render pass is a pure function of (workbook bytes, configuration);
//! identical inputs yield byte-identical output.

pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod render;

pub use chart::CompositeFigure;
pub use color::{ColorScale, Palette};
pub use config::{LegendConfig, RenderConfig, SheetSelection};
pub use error::ChartError;
pub use render::RenderedImage;

/// Parse the workbook and assemble the figure without rasterizing.
///
/// Configuration is validated first, so a bad palette or geometry is
/// rejected before any parsing or layout begins.
pub fn assemble_figure(
    workbook: &[u8],
    config: &RenderConfig,
) -> Result<CompositeFigure, ChartError> {
    config.validate()?;
    let tables = data::loader::load_workbook(workbook, &config.sheets)?;
    CompositeFigure::assemble(&tables, config)
}

/// One full render pass: assemble the figure, rasterize it at
/// `config.export_dpi`, and encode the lossless PNG export buffer.
pub fn render_png(workbook: &[u8], config: &RenderConfig) -> Result<Vec<u8>, ChartError> {
    let figure = assemble_figure(workbook, config)?;
    let image = render::render(&figure, config.export_dpi)?;
    export::encode_png(&image)
}
