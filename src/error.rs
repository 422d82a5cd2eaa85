use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Errors surfaced by the chart pipeline.
///
/// Row-level numeric parse failures are deliberately *not* represented here:
/// the sanitizer drops such rows silently (see [`crate::data::clean`]).
#[derive(Debug, Error)]
pub enum ChartError {
    /// A selected sheet is missing, empty, or lacks a required column.
    #[error("workbook format error: {0}")]
    Format(String),

    /// A sheet produced zero usable records after numeric cleaning.
    /// Surfaced rather than rendered as an empty panel slot.
    #[error("sheet `{0}` has no usable rows after numeric cleaning")]
    EmptyPanel(String),

    /// Invalid configuration: unknown palette, non-positive geometry, etc.
    /// Rejected before any layout work begins.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The workbook bytes could not be read as an xlsx archive.
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// A plotters drawing operation failed.
    #[error("failed to draw chart: {0}")]
    Render(String),

    /// PNG encoding of the rendered buffer failed.
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}
