/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  chicago.csv / new_york_city.csv / washington.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → TripTable (timestamps, derived fields)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ TripTable │  Vec<TripRecord>, optional-column flags
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply month/day selectors → filtered TripTable
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
