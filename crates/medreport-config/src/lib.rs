//! # medreport-config
//!
//! TOML-driven configuration for the medical report pipeline.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use medreport_config::AppConfig;
//!
//! let config = AppConfig::from_file(Path::new("medreport.toml"))?;
//! let sources = config.dataset.source_ids();
//! ```
//!
//! All sections are optional. `AppConfig::default()` points at the five
//! bundled datasets under `data/`, uses the template provider, and rejects
//! queries that match nothing.

pub mod loader;
pub mod settings;

pub use settings::{AppConfig, DatasetConfig, ExportConfig, HostedConfig, ProviderKind, ReportConfig};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use medreport_contracts::{dataset::SourceId, error::MedReportError, policy::NoMatchPolicy};

    use crate::{AppConfig, ProviderKind};

    // ── 1. empty document ─────────────────────────────────────────────────────

    /// An empty file yields the defaults.
    #[test]
    fn test_empty_config_is_default() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.dataset.sources.len(), 5);
        assert_eq!(config.dataset.base_dir, Some(PathBuf::from("data")));
        assert_eq!(config.report.provider, ProviderKind::Template);
        assert_eq!(config.report.on_no_match, NoMatchPolicy::Reject);
        assert_eq!(config.export.line_width, 90);
    }

    // ── 2. full document ──────────────────────────────────────────────────────

    #[test]
    fn test_full_config() {
        let toml = r#"
            [dataset]
            base_dir = "/srv/medreport"
            sources = ["b.csv", "a.csv"]

            [report]
            provider = "hosted"
            on_no_match = "free-text-fallback"

            [export]
            directory = "/tmp/out"
            line_width = 72
            lines_per_page = 60

            [hosted]
            api_key_env = "GENERATOR_KEY"
        "#;

        let config = AppConfig::from_toml_str(toml).unwrap();

        assert_eq!(config.dataset.source_ids(), vec![SourceId::new("b.csv"), SourceId::new("a.csv")]);
        assert_eq!(config.report.provider, ProviderKind::Hosted);
        assert_eq!(config.report.on_no_match, NoMatchPolicy::FreeTextFallback);
        assert_eq!(config.export.directory, Path::new("/tmp/out"));
        assert_eq!(config.export.line_width, 72);
        assert_eq!(config.export.lines_per_page, 60);
        assert_eq!(config.hosted.api_key_env, "GENERATOR_KEY");
    }

    /// The sample config shipped at the workspace root spells out the defaults.
    #[test]
    fn test_sample_config_matches_defaults() {
        let sample = include_str!("../../../medreport.toml");
        assert_eq!(AppConfig::from_toml_str(sample).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_snake_case_policy_alias() {
        let config = AppConfig::from_toml_str("[report]\non_no_match = \"free_text_fallback\"\n").unwrap();
        assert_eq!(config.report.on_no_match, NoMatchPolicy::FreeTextFallback);
    }

    // ── 3. partial sections ───────────────────────────────────────────────────

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = AppConfig::from_toml_str("[export]\nline_width = 100\n").unwrap();
        assert_eq!(config.export.line_width, 100);
        assert_eq!(config.export.lines_per_page, 48);
        assert_eq!(config.dataset.sources.len(), 5);
    }

    // ── 4. invalid values ─────────────────────────────────────────────────────

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let result = AppConfig::from_toml_str("[report]\non_no_match = \"ask-someone\"\n");
        match result {
            Err(MedReportError::ConfigError { reason }) => {
                assert!(reason.contains("failed to parse config TOML"), "got: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_layout_is_rejected() {
        for toml in [
            "[export]\nline_width = 5\n",
            "[export]\nline_width = 500\n",
            "[export]\nlines_per_page = 0\n",
        ] {
            let result = AppConfig::from_toml_str(toml);
            assert!(
                matches!(result, Err(MedReportError::ConfigError { .. })),
                "expected ConfigError for {toml:?}"
            );
        }
    }

    #[test]
    fn test_blank_source_is_rejected() {
        let result = AppConfig::from_toml_str("[dataset]\nsources = [\"a.csv\", \" \"]\n");
        match result {
            Err(MedReportError::ConfigError { reason }) => assert!(reason.contains("sources[1]")),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 5. TOML syntax error ──────────────────────────────────────────────────

    #[test]
    fn test_toml_parse_error() {
        let result = AppConfig::from_toml_str("this is not valid toml ][[[");
        assert!(matches!(result, Err(MedReportError::ConfigError { .. })));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = AppConfig::from_file(Path::new("/definitely/not/here/medreport.toml"));
        match result {
            Err(MedReportError::ConfigError { reason }) => {
                assert!(reason.contains("failed to read config file"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 6. credentials ────────────────────────────────────────────────────────

    #[test]
    fn test_api_key_comes_from_named_env_var() {
        let config = AppConfig::from_toml_str(
            "[hosted]\napi_key_env = \"MEDREPORT_CONFIG_TEST_UNSET_VAR\"\n",
        )
        .unwrap();
        let err = config.hosted.api_key().unwrap_err();
        assert!(err.to_string().contains("MEDREPORT_CONFIG_TEST_UNSET_VAR"));
    }
}
