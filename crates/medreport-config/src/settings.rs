//! Configuration schema.
//!
//! An `AppConfig` is deserialized from TOML. Every section and key is
//! optional; anything left out takes the default shown below.
//!
//! ```toml
//! [dataset]
//! base_dir = "data"
//! sources = [
//!     "Antibiotic_Tablets_Dataset.csv",
//!     "Anti_Diabetic_Drugs.csv",
//!     "Anti_Hypertensive_Drugs_Dataset_Full.csv",
//!     "Anti_neoplastic_Drugs_Dataset_Complete.csv",
//!     "Anti_Tubercular_Agents.csv",
//! ]
//!
//! [report]
//! provider = "template"        # or "hosted"
//! on_no_match = "reject"       # or "free-text-fallback"
//!
//! [export]
//! directory = "reports"
//! line_width = 90
//! lines_per_page = 48
//!
//! [hosted]
//! api_key_env = "MEDREPORT_API_KEY"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use medreport_contracts::{
    dataset::SourceId,
    error::MedReportResult,
    policy::NoMatchPolicy,
    secret::ApiKey,
};

/// The bundled datasets, in the order they are concatenated.
pub const DEFAULT_SOURCES: [&str; 5] = [
    "Antibiotic_Tablets_Dataset.csv",
    "Anti_Diabetic_Drugs.csv",
    "Anti_Hypertensive_Drugs_Dataset_Full.csv",
    "Anti_neoplastic_Drugs_Dataset_Complete.csv",
    "Anti_Tubercular_Agents.csv",
];

/// Which `ReportBodyProvider` the application builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    #[default]
    Template,
    Hosted,
}

/// Where the tabular sources live and in which order they are combined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Directory relative source paths are resolved against.
    pub base_dir: Option<PathBuf>,
    /// Source files in concatenation order. Order decides which row wins
    /// when several sources match a query.
    pub sources: Vec<String>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            base_dir: Some(PathBuf::from("data")),
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DatasetConfig {
    pub fn source_ids(&self) -> Vec<SourceId> {
        self.sources.iter().map(SourceId::new).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub provider: ProviderKind,
    pub on_no_match: NoMatchPolicy,
}

/// Layout and destination of exported documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub directory: PathBuf,
    /// Maximum characters per line.
    pub line_width: usize,
    pub lines_per_page: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("reports"),
            line_width: 90,
            lines_per_page: 48,
        }
    }
}

/// Settings for the hosted text-generation collaborator.
///
/// Only the *name* of the environment variable holding the key is
/// configured. The key itself never appears in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostedConfig {
    pub api_key_env: String,
}

impl Default for HostedConfig {
    fn default() -> Self {
        Self { api_key_env: "MEDREPORT_API_KEY".to_string() }
    }
}

impl HostedConfig {
    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> MedReportResult<ApiKey> {
        ApiKey::from_env(&self.api_key_env)
    }
}

/// The top-level structure deserialized from a TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dataset: DatasetConfig,
    pub report: ReportConfig,
    pub export: ExportConfig,
    pub hosted: HostedConfig,
}
