/// Data layer: matrix type and the four pipeline stages.
///
/// Architecture:
/// ```text
///  .txt / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  strip `#` lines, parse rows → Matrix
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ resample  │  strided subsample towards the target grid
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  min-max to [0, 1], then sqrt
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  round, flatten → ParticleGrid JSON
///   └──────────┘
/// ```

pub mod error;
pub mod export;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod resample;
