//! # medreport-core
//!
//! The report pipeline and the traits its collaborators implement.
//!
//! This crate provides:
//! - The collaborator traits (`SourceReader`, `DatasetSource`,
//!   `ReportBodyProvider`, `TextGenerator`, `DocumentExporter`,
//!   `SpeechSynthesizer`)
//! - The first-match record lookup (`matcher::find_first`)
//! - Defaulted clinical field access (`fields::field_or_default`)
//! - `ReportPipeline`, which runs one request through load → match →
//!   compose and the optional export and speech side effects
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medreport_core::{ReportPipeline, traits::{DatasetSource, ReportBodyProvider}};
//! ```

pub mod fields;
pub mod matcher;
pub mod pipeline;
pub mod traits;

pub use matcher::find_first;
pub use pipeline::ReportPipeline;
