/// Data layer: core types, loading, and cleaning.
///
/// Architecture:
/// ```text
///  .xlsx bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  selected sheets → RawTable each
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  sanitize (numeric coercion, row drops) + rank
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Panel    │  ranked records, ready for layout
///   └──────────┘
/// ```
pub mod clean;
pub mod loader;
pub mod model;
