//! Combining several tabular sources into one dataset.
//!
//! Sources are loaded in list order and concatenated row-wise. A missing
//! source is skipped quietly; a malformed one is skipped with a warning.
//! Neither stops the rest of the batch from loading.

use tracing::{debug, info, warn};

use medreport_contracts::{
    dataset::{Dataset, SourceId},
    error::MedReportError,
};
use medreport_core::traits::SourceReader;

/// What happened to each source during a load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Sources that loaded, with their row counts, in load order.
    pub loaded: Vec<(SourceId, usize)>,
    /// Sources that could not be located.
    pub missing: Vec<SourceId>,
    /// Sources that exist but failed to parse, with the reason.
    pub malformed: Vec<(SourceId, String)>,
}

impl LoadSummary {
    pub fn total_rows(&self) -> usize {
        self.loaded.iter().map(|(_, rows)| rows).sum()
    }
}

/// Load every source in `sources` through `reader` and concatenate them.
///
/// Rows keep their source order and, across sources, the order of
/// `sources`. Returns an empty dataset when nothing loads.
pub fn load_sources(reader: &dyn SourceReader, sources: &[SourceId]) -> (Dataset, LoadSummary) {
    let mut combined = Dataset::new();
    let mut summary = LoadSummary::default();

    for source in sources {
        match reader.load(source) {
            Ok(dataset) => {
                let rows = dataset.len();
                debug!(source = %source, rows, "source loaded");
                combined.append(dataset);
                summary.loaded.push((source.clone(), rows));
            }
            Err(MedReportError::SourceNotFound { .. }) => {
                debug!(source = %source, "source not found, skipping");
                summary.missing.push(source.clone());
            }
            Err(e) => {
                warn!(source = %source, error = %e, "source malformed, skipping");
                summary.malformed.push((source.clone(), e.to_string()));
            }
        }
    }

    info!(
        sources = sources.len(),
        loaded = summary.loaded.len(),
        missing = summary.missing.len(),
        malformed = summary.malformed.len(),
        rows = combined.len(),
        columns = combined.columns().len(),
        "dataset combined"
    );

    (combined, summary)
}
