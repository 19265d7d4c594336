//! Reading the reference data document.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::data::model::{null_as_default, MoveRecord, PokemonRecord, TypeRecord};

/// Error raised when the data document cannot be used.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read data file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse data document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The three raw collections, in document order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Dataset {
    #[serde(deserialize_with = "null_as_default")]
    pub types: Vec<TypeRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub pokemons: Vec<PokemonRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub moves: Vec<MoveRecord>,
}

/// Parse a data document from raw bytes.
pub fn parse_dataset(bytes: &[u8]) -> Result<Dataset, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Read and parse the data document at `path`.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_dataset(&bytes)?;

    tracing::debug!(
        path = %path.display(),
        types = dataset.types.len(),
        pokemons = dataset.pokemons.len(),
        moves = dataset.moves.len(),
        "Data document parsed"
    );
    Ok(dataset)
}
