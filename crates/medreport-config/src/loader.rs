//! Reading and validating `AppConfig`.

use std::path::Path;

use tracing::debug;

use medreport_contracts::error::{MedReportError, MedReportResult};

use crate::settings::AppConfig;

/// Narrowest and widest accepted export line widths, in characters.
pub const LINE_WIDTH_RANGE: (usize, usize) = (20, 200);

impl AppConfig {
    /// Parse `s` as TOML and validate the result.
    ///
    /// Returns `MedReportError::ConfigError` if the TOML is malformed, does
    /// not match the `AppConfig` schema, or holds out-of-range values.
    pub fn from_toml_str(s: &str) -> MedReportResult<Self> {
        let config: AppConfig = toml::from_str(s).map_err(|e| MedReportError::ConfigError {
            reason: format!("failed to parse config TOML: {}", e),
        })?;
        config.validate()?;
        debug!(
            sources = config.dataset.sources.len(),
            provider = ?config.report.provider,
            on_no_match = %config.report.on_no_match,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Read the file at `path` and parse it as TOML configuration.
    pub fn from_file(path: &Path) -> MedReportResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MedReportError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Check value ranges that the schema alone cannot express.
    pub fn validate(&self) -> MedReportResult<()> {
        let (min, max) = LINE_WIDTH_RANGE;
        if !(min..=max).contains(&self.export.line_width) {
            return Err(MedReportError::ConfigError {
                reason: format!(
                    "export.line_width must be between {} and {}, got {}",
                    min, max, self.export.line_width
                ),
            });
        }
        if self.export.lines_per_page == 0 {
            return Err(MedReportError::ConfigError {
                reason: "export.lines_per_page must be at least 1".to_string(),
            });
        }
        if let Some(blank) = self.dataset.sources.iter().position(|s| s.trim().is_empty()) {
            return Err(MedReportError::ConfigError {
                reason: format!("dataset.sources[{}] is blank", blank),
            });
        }
        if self.hosted.api_key_env.trim().is_empty() {
            return Err(MedReportError::ConfigError {
                reason: "hosted.api_key_env must name an environment variable".to_string(),
            });
        }
        Ok(())
    }
}
