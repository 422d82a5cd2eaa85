use std::str::FromStr;

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

use crate::data::model::Panel;
use crate::error::ChartError;

// ---------------------------------------------------------------------------
// Palette: named continuous gradients
// ---------------------------------------------------------------------------

/// A named continuous colour gradient mapping [0,1] to a colour.
///
/// Deserialization goes through [`FromStr`], so a config carrying an
/// unknown name fails with the same configuration error as the string
/// entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Palette {
    Inferno,
    Viridis,
    Magma,
    Plasma,
}

impl TryFrom<String> for Palette {
    type Error = ChartError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Palette {
    fn gradient(self) -> colorous::Gradient {
        match self {
            Palette::Inferno => colorous::INFERNO,
            Palette::Viridis => colorous::VIRIDIS,
            Palette::Magma => colorous::MAGMA,
            Palette::Plasma => colorous::PLASMA,
        }
    }
}

impl FromStr for Palette {
    type Err = ChartError;

    /// An unknown palette name is a configuration error, never a fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inferno" => Ok(Palette::Inferno),
            "viridis" => Ok(Palette::Viridis),
            "magma" => Ok(Palette::Magma),
            "plasma" => Ok(Palette::Plasma),
            other => Err(ChartError::Configuration(format!(
                "unknown palette `{other}` (expected inferno, viridis, magma, or plasma)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// ColorScale: metric value → colour, shared by bars and legend
// ---------------------------------------------------------------------------

/// The metric → colour mapping used for every bar and for the legend.
///
/// The domain is global: computed once over the union of all panels' metric
/// values, so the legend and every bar agree by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    pub domain_min: f64,
    pub domain_max: f64,
    pub palette: Palette,
}

impl ColorScale {
    /// Build the global scale from the union of all panels' metric values.
    ///
    /// Panels are guaranteed non-empty by the sanitizer, so the fold always
    /// sees at least one value per panel.
    pub fn from_panels(panels: &[Panel], palette: Palette) -> Self {
        let mut domain_min = f64::INFINITY;
        let mut domain_max = f64::NEG_INFINITY;
        for panel in panels {
            for rec in &panel.records {
                domain_min = domain_min.min(rec.metric);
                domain_max = domain_max.max(rec.metric);
            }
        }
        ColorScale {
            domain_min,
            domain_max,
            palette,
        }
    }

    /// Clamp `value` into the domain and return its normalized position.
    ///
    /// A degenerate domain (`domain_min == domain_max`) maps every value to
    /// the fixed midpoint 0.5 instead of dividing by zero.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.domain_max - self.domain_min;
        if span == 0.0 {
            return 0.5;
        }
        ((value - self.domain_min) / span).clamp(0.0, 1.0)
    }

    /// Evaluate the gradient at a normalized position in [0,1].
    pub fn colorize(&self, normalized: f64) -> RGBColor {
        let c = self
            .palette
            .gradient()
            .eval_continuous(normalized.clamp(0.0, 1.0));
        RGBColor(c.r, c.g, c.b)
    }

    /// Colour for a raw metric value: normalize, then colorize.
    pub fn color_for(&self, value: f64) -> RGBColor {
        self.colorize(self.normalize(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CleanedRecord;
    use std::collections::BTreeMap;

    fn panel(metrics: &[f64]) -> Panel {
        Panel {
            title: "t".into(),
            records: metrics
                .iter()
                .map(|&m| CleanedRecord {
                    label: "x".into(),
                    count: 1.0,
                    metric: m,
                })
                .collect(),
            label_overrides: BTreeMap::new(),
        }
    }

    #[test]
    fn normalize_maps_domain_endpoints() {
        let scale = ColorScale {
            domain_min: 2.0,
            domain_max: 6.0,
            palette: Palette::Inferno,
        };
        assert_eq!(scale.normalize(2.0), 0.0);
        assert_eq!(scale.normalize(6.0), 1.0);
        assert_eq!(scale.normalize(4.0), 0.5);
    }

    #[test]
    fn normalize_clamps_out_of_domain_values() {
        let scale = ColorScale {
            domain_min: 0.0,
            domain_max: 1.0,
            palette: Palette::Viridis,
        };
        assert_eq!(scale.normalize(-3.0), 0.0);
        assert_eq!(scale.normalize(42.0), 1.0);
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let scale = ColorScale {
            domain_min: 1.5,
            domain_max: 1.5,
            palette: Palette::Magma,
        };
        assert_eq!(scale.normalize(1.5), 0.5);
        assert_eq!(scale.normalize(-99.0), 0.5);
        assert_eq!(scale.normalize(99.0), 0.5);
    }

    #[test]
    fn global_domain_spans_all_panels() {
        let panels = vec![panel(&[0.5, 2.0]), panel(&[1.0, 4.0])];
        let scale = ColorScale::from_panels(&panels, Palette::Inferno);
        assert_eq!(scale.domain_min, 0.5);
        assert_eq!(scale.domain_max, 4.0);
    }

    #[test]
    fn palette_parses_known_names_case_insensitively() {
        assert_eq!(Palette::from_str("inferno").unwrap(), Palette::Inferno);
        assert_eq!(Palette::from_str("Viridis").unwrap(), Palette::Viridis);
        assert_eq!(Palette::from_str("MAGMA").unwrap(), Palette::Magma);
        assert_eq!(Palette::from_str(" plasma ").unwrap(), Palette::Plasma);
    }

    #[test]
    fn unknown_palette_is_a_configuration_error() {
        let err = Palette::from_str("rainbow").unwrap_err();
        assert!(matches!(err, ChartError::Configuration(_)));
    }

    #[test]
    fn gradient_endpoints_differ() {
        for palette in [
            Palette::Inferno,
            Palette::Viridis,
            Palette::Magma,
            Palette::Plasma,
        ] {
            let scale = ColorScale {
                domain_min: 0.0,
                domain_max: 1.0,
                palette,
            };
            assert_ne!(scale.colorize(0.0), scale.colorize(1.0));
        }
    }
}
