use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::color::ColorScale;
use crate::config::RenderConfig;
use crate::error::ChartError;

// ---------------------------------------------------------------------------
// Continuous colorbar legend
// ---------------------------------------------------------------------------

/// Draw the single continuous colorbar into the strip reserved to the
/// right of the panel stack.
///
/// Uses the same [`ColorScale`] as every bar, so legend and bars agree by
/// construction. Tick values run from `domain_max` at the top to
/// `domain_min` at the bottom; the metric name is drawn rotated alongside.
pub fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    scale: &ColorScale,
    cfg: &RenderConfig,
    dpi: u32,
) -> Result<(), ChartError> {
    let (area_w, area_h) = area.dim_in_pixel();

    // width_fraction is relative to the whole canvas; this strip only holds
    // 1 - panel_width_fraction of it.
    let canvas_w = area_w as f64 / (1.0 - cfg.panel_width_fraction);
    let bar_w = ((cfg.legend.width_fraction * canvas_w).round() as i32).max(1);
    let bar_h = ((cfg.legend.height_fraction * area_h as f64).round() as i32).max(2);

    let x0 = (area_w as f64 * 0.15).round() as i32;
    let y0 = (area_h as i32 - bar_h) / 2;

    // Gradient body: one pixel-row slice per step, top = domain_max.
    for yy in 0..bar_h {
        let t = 1.0 - yy as f64 / (bar_h - 1) as f64;
        area.draw(&Rectangle::new(
            [(x0, y0 + yy), (x0 + bar_w, y0 + yy + 1)],
            scale.colorize(t).filled(),
        ))
        .map_err(|e| ChartError::Render(e.to_string()))?;
    }
    area.draw(&Rectangle::new(
        [(x0, y0), (x0 + bar_w, y0 + bar_h)],
        BLACK.stroke_width(1),
    ))
    .map_err(|e| ChartError::Render(e.to_string()))?;

    let font_px = (cfg.legend.font_size * dpi as f64 / 72.0).round() as i32;
    let tick_style = ("sans-serif", font_px)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    // Five evenly spaced ticks across the domain.
    let n_ticks = 5;
    let tick_gap = font_px / 2;
    for k in 0..n_ticks {
        let frac = k as f64 / (n_ticks - 1) as f64;
        let value = scale.domain_max - frac * (scale.domain_max - scale.domain_min);
        let y = y0 + (frac * (bar_h - 1) as f64).round() as i32;
        area.draw(&Text::new(
            format_tick(value),
            (x0 + bar_w + tick_gap, y),
            tick_style.clone(),
        ))
        .map_err(|e| ChartError::Render(e.to_string()))?;
    }

    // Metric name, rotated along the bar.
    let label_style = ("sans-serif", font_px)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center))
        .transform(FontTransform::Rotate90);
    area.draw(&Text::new(
        cfg.legend.label.as_str(),
        (x0 + bar_w + tick_gap + 5 * font_px, y0 + bar_h / 2),
        label_style,
    ))
    .map_err(|e| ChartError::Render(e.to_string()))?;

    Ok(())
}

/// Compact tick formatting: two decimals, trailing zeros trimmed.
fn format_tick(value: f64) -> String {
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
