//! Dataset loading and in-memory storage.
//!
//! The rentals CSV is read once at startup and kept immutable for the
//! lifetime of the process. Every dashboard request slices it by date
//! window and recomputes its aggregates from scratch; there is no cache
//! and no mutation after load.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, server binary)            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Dataset (dataset.rs) - bounds, window resolution,      │
//! │  inclusive date slicing                                 │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Loader (loader.rs) - CSV parsing with loud failures    │
//! │  Checksum (checksum.rs) - dataset identity              │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod checksum;
pub mod dataset;
pub mod error;
pub mod loader;

pub use checksum::calculate_checksum;
pub use dataset::Dataset;
pub use error::DataError;
pub use loader::parse_rental_csv;
