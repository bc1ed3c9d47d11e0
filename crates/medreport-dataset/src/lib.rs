//! # medreport-dataset
//!
//! Tabular dataset loading and caching for the report pipeline.
//!
//! ## Overview
//!
//! - [`CsvSourceReader`] reads one CSV file per source id.
//! - [`InMemorySourceReader`] serves pre-built datasets, for tests and
//!   embedding.
//! - [`load_sources`] concatenates every source that loads, skipping
//!   missing and malformed ones.
//! - [`DatasetCache`] memoizes the combined dataset for the process
//!   lifetime and implements [`DatasetSource`](medreport_core::traits::DatasetSource).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medreport_dataset::{CsvSourceReader, DatasetCache};
//!
//! let cache = DatasetCache::new(
//!     Box::new(CsvSourceReader::with_base_dir("data")),
//!     vec![SourceId::new("Anti_Diabetic_Drugs.csv")],
//! );
//! let dataset = cache.get_or_load();
//! ```

pub mod cache;
pub mod csv_reader;
pub mod loader;
pub mod memory;

pub use cache::DatasetCache;
pub use csv_reader::CsvSourceReader;
pub use loader::{load_sources, LoadSummary};
pub use memory::InMemorySourceReader;

// ── Tests ─────────────────────────────────────────────────────────────────────
