/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  immutable rows + column order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply FilterSet → visible row indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ frequency  │  count values of one column → FrequencyTable
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   sort    │  order by value / count / percentage
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
pub mod frequency;
pub mod sort;
