/// Data layer: typed coach records and table loading.
///
/// Architecture:
/// ```text
///  coaches_data.csv (Windows-1252)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode + parse file → CoachTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ CoachTable  │  Vec<CoachRecord>, first-seen name list
///   └────────────┘
///        │
///        ▼
///   first-match lookup → one profile per render cycle
/// ```

pub mod loader;
pub mod model;
