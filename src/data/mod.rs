/// Data layer: row types, loading, and year filtering.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  cells as text → RawRecord → Row
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Row>, YearSet
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  rows whose year == selected year
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
