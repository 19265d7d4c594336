//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the data document and build the pokedex snapshot
//! - Apply the configured policy when the document is unusable
//! - Report what was loaded before the listener starts
//!
//! # Design Decisions
//! - Load failure is a value in the result, not a log line
//! - Serving empty collections is an explicit, configurable choice

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::DataConfig;
use crate::data::{load_dataset, DatasetSummary, LoadError, Pokedex};
use crate::observability::metrics;

/// How the data document fared at startup.
#[derive(Debug)]
pub enum DataStatus {
    /// Document loaded and indexed.
    Loaded(DatasetSummary),
    /// Document unusable; serving empty collections by policy.
    ServingEmpty(LoadError),
}

/// Everything the HTTP layer needs, built once.
#[derive(Debug)]
pub struct Startup {
    pub pokedex: Arc<Pokedex>,
    pub data_status: DataStatus,
}

/// Fatal startup failure.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("reference data unavailable: {0}")]
    Data(#[source] LoadError),
}

/// Load and index the reference data according to `config`.
pub fn initialize(config: &DataConfig) -> Result<Startup, StartupError> {
    let path = Path::new(&config.path);

    match load_dataset(path) {
        Ok(dataset) => {
            let pokedex = Pokedex::build(dataset);
            let summary = pokedex.summary();
            metrics::record_dataset(summary);
            tracing::info!(
                path = %path.display(),
                types = summary.types,
                pokemons = summary.pokemons,
                moves = summary.moves,
                "Reference data loaded"
            );
            Ok(Startup {
                pokedex: Arc::new(pokedex),
                data_status: DataStatus::Loaded(summary),
            })
        }
        Err(e) if config.serve_empty_on_failure => {
            tracing::error!(
                path = %path.display(),
                error = %e,
                "Failed to load reference data, serving empty collections"
            );
            metrics::record_dataset(DatasetSummary::default());
            Ok(Startup {
                pokedex: Arc::new(Pokedex::empty()),
                data_status: DataStatus::ServingEmpty(e),
            })
        }
        Err(e) => Err(StartupError::Data(e)),
    }
}
