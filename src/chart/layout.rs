use plotters::coord::Shift;
use plotters::prelude::*;

use crate::chart::CompositeFigure;
use crate::color::ColorScale;
use crate::config::RenderConfig;
use crate::data::model::Panel;
use crate::error::ChartError;

// Grid lines stay light so the bars carry the figure. Mesh styles carry
// no dash pattern, so the grid is solid light gray rather than dashed.
const GRID_COLOR: RGBColor = RGBColor(210, 210, 210);

// ---------------------------------------------------------------------------
// Panel stack layout
// ---------------------------------------------------------------------------

/// Draw one stacked sub-plot per panel into `root`, sharing one x-range.
///
/// Panels appear in figure order, top to bottom. Only the bottom panel
/// carries the x-axis description and tick labels; every panel draws a
/// light vertical grid. `panel_spacing` controls how much of each slot is
/// given up as padding between neighbouring panels.
pub fn draw_panels<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &CompositeFigure,
    dpi: u32,
) -> Result<(), ChartError> {
    let cfg = &figure.config;
    let n = figure.panels.len();
    let (_, height) = root.dim_in_pixel();

    // Fraction `s` of a slot becomes padding, split between top and bottom.
    let slot_h = height as f64 / n as f64;
    let pad = (slot_h * cfg.panel_spacing / (2.0 * (1.0 + cfg.panel_spacing))).round() as i32;

    // Shared x-range: zero to the global maximum count, with headroom so
    // the longest bar does not touch the panel edge.
    let x_max = (figure.max_count() * 1.05).max(1.0);

    let slots = root.split_evenly((n, 1));
    for (idx, (slot, panel)) in slots.iter().zip(&figure.panels).enumerate() {
        let area = slot.clone().margin(pad, pad, 0, 0);
        let is_bottom = idx == n - 1;
        draw_panel(&area, panel, &figure.scale, cfg, dpi, x_max, is_bottom)?;
    }
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    scale: &ColorScale,
    cfg: &RenderConfig,
    dpi: u32,
    x_max: f64,
    is_bottom: bool,
) -> Result<(), ChartError> {
    let px = dpi as f64 / 72.0;
    let title_px = (cfg.title_font_size * px).round() as i32;
    let x_px = (cfg.x_axis_font_size * px).round() as i32;
    let y_px = (cfg.y_axis_font_size * px).round() as i32;

    let n_records = panel.records.len() as i32;
    let (area_w, area_h) = area.dim_in_pixel();

    // Row labels, bottom segment first (segment 0 sits at the bottom of
    // the y-axis and holds the lowest-ranked record).
    let seg_labels: Vec<String> = panel
        .records
        .iter()
        .rev()
        .map(|r| panel.display_label(&r.label).to_string())
        .collect();

    // Reserve enough y-label width for the longest label, capped so labels
    // can never squeeze the bars out entirely.
    let longest = seg_labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) as f64;
    let y_label_area = ((longest * y_px as f64 * 0.62) as i32)
        .max(3 * y_px)
        .min(area_w as i32 * 2 / 5);
    let x_label_area = if is_bottom { 3 * x_px } else { 0 };

    // Named binding: the formatter must outlive the whole mesh
    // configuration, which spans several statements below.
    let y_label_formatter = |seg: &SegmentValue<i32>| match seg {
        SegmentValue::CenterOf(i) => seg_labels.get(*i as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    };

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title.as_str(), ("sans-serif", title_px))
        .margin_right(title_px)
        .x_label_area_size(x_label_area)
        .y_label_area_size(y_label_area)
        .build_cartesian_2d(0.0..x_max, (0..n_records).into_segmented())
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let mut mesh = chart.configure_mesh();
    mesh.disable_y_mesh()
        .light_line_style(GRID_COLOR)
        .bold_line_style(GRID_COLOR)
        .axis_style(BLACK.stroke_width(1))
        .y_labels(n_records as usize)
        .y_label_style(("sans-serif", y_px))
        .y_label_formatter(&y_label_formatter);
    if is_bottom {
        mesh.x_desc(cfg.x_axis_label.as_str())
            .x_label_style(("sans-serif", x_px))
            .axis_desc_style(("sans-serif", x_px));
    } else {
        // Shared axis: suppress duplicated tick labels above the bottom
        // panel. The grid itself still renders.
        mesh.x_labels(0);
    }
    mesh.draw().map_err(|e| ChartError::Render(e.to_string()))?;

    // Thin padding keeps adjacent bars visually separate.
    let bar_pad = ((area_h as f64 / n_records.max(1) as f64) * 0.08) as u32;

    chart
        .draw_series(panel.records.iter().enumerate().map(|(i, rec)| {
            // Rank 0 (highest count) occupies the topmost segment.
            let seg = n_records - 1 - i as i32;
            let mut bar = Rectangle::new(
                [
                    (0.0, SegmentValue::Exact(seg)),
                    (rec.count, SegmentValue::Exact(seg + 1)),
                ],
                scale.color_for(rec.metric).filled(),
            );
            bar.set_margin(bar_pad, bar_pad, 0, 0);
            bar
        }))
        .map_err(|e| ChartError::Render(e.to_string()))?;

    Ok(())
}
