//! medreport — Medical Report Generator CLI
//!
//! Looks a query up in the configured drug datasets and prints the
//! four-paragraph report for the first matching record. Optionally writes
//! the report to a paginated document.
//!
//! Usage:
//!   cargo run -p demo -- generate --name Asha --age 34 --mobile 555-0101 --query diabetes
//!   cargo run -p demo -- generate ... --export --json
//!   cargo run -p demo -- sources --config medreport.toml

use std::{path::PathBuf, sync::Arc};

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use medreport_compose::TemplateProvider;
use medreport_config::{AppConfig, ProviderKind};
use medreport_contracts::{
    error::{MedReportError, MedReportResult},
    report::ReportOutcome,
    request::{PatientInfo, ReportRequest},
    speech::SpeechLanguage,
};
use medreport_core::ReportPipeline;
use medreport_dataset::{CsvSourceReader, DatasetCache};
use medreport_export::{PageLayout, TextDocumentExporter};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Medical report generator.
///
/// Matches a free-text query against tabular drug datasets and composes a
/// patient report from the first matching record.
#[derive(Parser)]
#[command(
    name = "medreport",
    about = "Generate a medical report from tabular drug datasets",
    long_about = "Looks a disease or medicine up in the configured CSV datasets and composes\n\
                  a four-paragraph patient report from the first matching record."
)]
struct Cli {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one report.
    Generate(GenerateArgs),
    /// Load every configured source and list what was found.
    Sources,
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    age: u8,
    #[arg(long)]
    mobile: String,
    /// Disease or medicine to look up.
    #[arg(long)]
    query: String,
    #[arg(long)]
    gender: Option<String>,
    #[arg(long)]
    weight: Option<String>,
    /// Extra patient detail as `Label=value`. May be repeated.
    #[arg(long = "attr", value_name = "LABEL=VALUE")]
    attributes: Vec<String>,
    /// Also write the report to the export directory.
    #[arg(long)]
    export: bool,
    /// Request spoken audio in `ta` (Tamil) or `hi` (Hindi).
    #[arg(long)]
    speech: Option<SpeechLanguage>,
    /// Print the outcome as JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Command::Generate(args) => run_generate(&config, args),
        Command::Sources => run_sources(&config),
    });

    if let Err(e) = result {
        eprintln!("medreport error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&std::path::Path>) -> MedReportResult<AppConfig> {
    match path {
        Some(path) => AppConfig::from_file(path),
        None => {
            let config = AppConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}

// ── Wiring ────────────────────────────────────────────────────────────────────

fn dataset_cache(config: &AppConfig) -> DatasetCache {
    let reader = match &config.dataset.base_dir {
        Some(dir) => CsvSourceReader::with_base_dir(dir),
        None => CsvSourceReader::new(),
    };
    DatasetCache::new(Box::new(reader), config.dataset.source_ids())
}

fn build_pipeline(config: &AppConfig) -> MedReportResult<ReportPipeline> {
    let provider = match config.report.provider {
        ProviderKind::Template => Box::new(TemplateProvider::new()),
        ProviderKind::Hosted => {
            // Surface a missing credential before anything else.
            let _key = config.hosted.api_key()?;
            return Err(MedReportError::ConfigError {
                reason: "report.provider = \"hosted\" needs a text generator; this binary ships \
                         only the template provider"
                    .to_string(),
            });
        }
    };

    let layout = PageLayout::new(config.export.line_width, config.export.lines_per_page);
    let exporter = TextDocumentExporter::new(&config.export.directory, layout);

    Ok(ReportPipeline::new(Arc::new(dataset_cache(config)), provider)
        .with_no_match_policy(config.report.on_no_match)
        .with_exporter(Box::new(exporter)))
}

fn parse_attribute(raw: &str) -> MedReportResult<(String, String)> {
    match raw.split_once('=') {
        Some((label, value)) => Ok((label.to_string(), value.to_string())),
        None => Err(MedReportError::InvalidField {
            field: "attr".to_string(),
            reason: format!("expected LABEL=VALUE, got '{}'", raw),
        }),
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_generate(config: &AppConfig, args: GenerateArgs) -> MedReportResult<()> {
    let pipeline = build_pipeline(config)?;

    let mut patient = PatientInfo::new(args.name, args.age, args.mobile);
    if let Some(gender) = args.gender {
        patient = patient.with_attribute("Gender", gender);
    }
    if let Some(weight) = args.weight {
        patient = patient.with_attribute("Weight", weight);
    }
    for raw in &args.attributes {
        let (label, value) = parse_attribute(raw)?;
        patient = patient.with_attribute(label, value);
    }

    let mut request = ReportRequest::new(patient, args.query).with_export(args.export);
    if let Some(language) = args.speech {
        request = request.with_speech(language);
    }

    let outcome = pipeline.generate(request)?;
    debug!(request_id = %outcome.request_id(), "outcome ready");

    if args.json {
        let json = serde_json::to_string_pretty(&outcome).map_err(|e| {
            MedReportError::GenerationFailed { reason: format!("cannot serialize outcome: {}", e) }
        })?;
        println!("{}", json);
        return Ok(());
    }

    print_outcome(&outcome);
    Ok(())
}

fn run_sources(config: &AppConfig) -> MedReportResult<()> {
    let cache = dataset_cache(config);
    let summary = cache.summary();

    println!("Dataset sources");
    println!("===============");
    for (source, rows) in &summary.loaded {
        println!("  [loaded]    {} ({} rows)", source, rows);
    }
    for source in &summary.missing {
        println!("  [missing]   {}", source);
    }
    for (source, reason) in &summary.malformed {
        println!("  [malformed] {}: {}", source, reason);
    }
    println!();
    println!("Total rows: {}", summary.total_rows());
    println!("Columns:    {}", cache.get_or_load().columns().join(", "));
    Ok(())
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_outcome(outcome: &ReportOutcome) {
    match outcome {
        ReportOutcome::NoMatch { .. } => {
            println!("{}", ReportOutcome::NO_MATCH_MESSAGE);
        }
        ReportOutcome::Delivered { body, matched, document, audio, warnings, .. } => {
            println!("Generated Medical Report");
            println!("========================");
            println!();
            println!("{}", body.text());
            println!();
            if !matched {
                println!("(No dataset record matched; general guidance shown.)");
            }
            if let Some(receipt) = document {
                println!(
                    "Report saved to {} ({} page(s), sha256 {})",
                    receipt.location, receipt.pages, receipt.sha256
                );
            }
            if let Some(asset) = audio {
                println!("Audio ({}): {}", asset.language.name(), asset.reference);
            }
            for warning in warnings {
                println!("warning: {}", warning);
            }
        }
    }
}
