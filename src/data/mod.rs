/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///   movies.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file, drop incomplete rows → MovieDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ MovieDataset │  Vec<Movie>, genre / year choices
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  selections → boolean masks → row indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate │  counts per genre / score, mean budget per year
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   view   │  one DashboardView per frame
///   └──────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod view;
