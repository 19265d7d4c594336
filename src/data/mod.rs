//! Reference data subsystem.
//!
//! # Data Flow
//! ```text
//! data.json
//!     → loader.rs (read & deserialize into Dataset)
//!     → index.rs (normalized name → record maps)
//!     → Pokedex (immutable snapshot)
//!     → shared via Arc with the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Loaded once at startup, never mutated afterwards
//! - Types, pokemon and moves are independent namespaces
//! - Later records overwrite earlier ones with the same normalized name

pub mod index;
pub mod loader;
pub mod model;

pub use index::{normalize_key, DatasetSummary, Pokedex};
pub use loader::{load_dataset, parse_dataset, Dataset, LoadError};
pub use model::{Candy, EvolutionRef, EvolutionRequirement, MoveRecord, PokemonRecord, TypeRecord};
