/// Data layer: tutor records, filtering, and persistence.
///
/// Architecture:
/// ```text
///   data/tuthub.json
///        │
///        ▼
///   ┌──────────┐
///   │ storage  │  parse file → Tuthub (every field revalidated)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model   │  Tuthub (unique tutors) + active filter + preferences
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  keyword predicates → visible indices
///   └──────────┘
/// ```

pub mod fields;
pub mod filter;
pub mod model;
pub mod sample;
pub mod storage;
pub mod tutor;
