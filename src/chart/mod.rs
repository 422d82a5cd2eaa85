/// Chart layer: panel assembly, layout, and the shared legend.
pub mod layout;
pub mod legend;

use log::debug;

use crate::color::ColorScale;
use crate::config::RenderConfig;
use crate::data::clean::{rank, sanitize};
use crate::data::model::{Panel, RawTable};
use crate::error::ChartError;

// ---------------------------------------------------------------------------
// CompositeFigure – the render target
// ---------------------------------------------------------------------------

/// The full multi-panel chart: ranked panels in caller order, one shared
/// colour scale, and the configuration that shaped them.
///
/// Stateless: rebuilt from scratch on every render request and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct CompositeFigure {
    /// Caller-specified category order; never re-sorted.
    pub panels: Vec<Panel>,
    /// Global colour scale shared by every bar and the legend.
    pub scale: ColorScale,
    pub config: RenderConfig,
}

impl CompositeFigure {
    /// Sanitize and rank each raw table into a panel, then compute the
    /// shared colour scale over the union of every panel's metric values.
    ///
    /// `tables` must be in the same order as `config.sheets` (the loader
    /// guarantees this).
    pub fn assemble(tables: &[RawTable], config: &RenderConfig) -> Result<Self, ChartError> {
        config.validate()?;
        if tables.len() != config.sheets.len() {
            return Err(ChartError::Format(format!(
                "expected {} tables, got {}",
                config.sheets.len(),
                tables.len()
            )));
        }

        let mut panels = Vec::with_capacity(tables.len());
        for (table, sel) in tables.iter().zip(&config.sheets) {
            let mut records = sanitize(table, &sel.label_column, &sel.metric_column)?;
            rank(&mut records);
            panels.push(Panel {
                title: sel.title().to_string(),
                records,
                label_overrides: sel.rename_map.clone(),
            });
        }

        // The single named accumulator for the colour domain: computed here
        // once, then used verbatim by both the bars and the legend.
        let scale = ColorScale::from_panels(&panels, config.palette);
        debug!(
            "assembled {} panels, colour domain [{}, {}]",
            panels.len(),
            scale.domain_min,
            scale.domain_max
        );

        Ok(CompositeFigure {
            panels,
            scale,
            config: config.clone(),
        })
    }

    /// Largest count across all panels; the shared x-axis upper bound is
    /// derived from this.
    pub fn max_count(&self) -> f64 {
        self.panels
            .iter()
            .map(Panel::max_count)
            .fold(0.0, f64::max)
    }
}
