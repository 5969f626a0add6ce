/// Data layer: core types, loading, normalization and chart series.
///
/// Architecture:
/// ```text
///   data/data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV, drop id, map M/B → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  per-feature min/max → unit interval
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  radar    │  mean / se / worst series for the chart
///   └──────────┘
/// ```

pub mod features;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod radar;
