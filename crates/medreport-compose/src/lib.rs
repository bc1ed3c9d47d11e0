//! # medreport-compose
//!
//! Report body providers for the medical report pipeline.
//!
//! Both types implement
//! [`ReportBodyProvider`](medreport_core::traits::ReportBodyProvider) and are
//! interchangeable inside `ReportPipeline`:
//!
//! - [`TemplateProvider`] fills a fixed four-paragraph template from the
//!   matched record, defaulting any missing field.
//! - [`HostedGenerationProvider`] sends a prompt to an external text
//!   generator and passes its answer through untouched.

pub mod hosted;
pub mod template;

pub use hosted::{build_prompt, HostedGenerationProvider};
pub use template::{compose, TemplateProvider};

// ── Tests ─────────────────────────────────────────────────────────────────────
