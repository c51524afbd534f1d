/// Data layer: records, loading, and filtering.
///
/// Architecture:
/// ```text
///   housing_cost.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (NaN for malformed numbers)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record> in file order, continent list
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  continent + cutoff predicate → visible indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
