use log::debug;
use plotters::prelude::*;

use crate::chart::{layout, legend, CompositeFigure};
use crate::error::ChartError;

// ---------------------------------------------------------------------------
// Raster pass: CompositeFigure → RGB pixel buffer
// ---------------------------------------------------------------------------

/// A rendered figure as a tightly packed RGB8 buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGB triples, `width * height * 3` bytes.
    pub pixels: Vec<u8>,
}

/// Rasterize the figure at the given resolution.
///
/// The canvas is `figure_width × figure_height` inches scaled by `dpi`.
/// The drawing backend lives only for the duration of this call; nothing
/// is retained across render passes, and identical inputs produce an
/// identical buffer.
pub fn render(figure: &CompositeFigure, dpi: u32) -> Result<RenderedImage, ChartError> {
    let cfg = &figure.config;
    let width = (cfg.figure_width * dpi as f64).round().max(1.0) as u32;
    let height = (cfg.figure_height * dpi as f64).round().max(1.0) as u32;
    debug!("rendering {width}x{height} at {dpi} dpi");

    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ChartError::Render(e.to_string()))?;

        let panel_w = (width as f64 * cfg.panel_width_fraction).round() as i32;
        let (panel_root, legend_root) = root.split_horizontally(panel_w);

        layout::draw_panels(&panel_root, figure, dpi)?;
        legend::draw_legend(&legend_root, &figure.scale, cfg, dpi)?;

        root.present()
            .map_err(|e| ChartError::Render(e.to_string()))?;
    }

    Ok(RenderedImage {
        width,
        height,
        pixels,
    })
}
