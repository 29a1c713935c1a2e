//! Data layer: record types, sample datasets, search, aggregation and export.
//!
//! Architecture:
//! ```text
//!   samples ──► Dataset (Variants | Expression)
//!                  │
//!                  ▼
//!            ┌──────────┐
//!            │  filter   │  gene / chromosome substring → new Dataset
//!            └──────────┘
//!                  │
//!     ┌────────────┼─────────────┬──────────────┐
//!     ▼            ▼             ▼              ▼
//!   stats        chart        describe        export
//!  (counts)   (bar series)  (item cards)   (JSON / CSV)
//! ```

pub mod chart;
pub mod describe;
pub mod export;
pub mod filter;
pub mod model;
pub mod samples;
pub mod stats;
