//! Query engine over the pokedex snapshot.
//!
//! # Data Flow
//! ```text
//! /list?type=..&sortby=..
//!     → ListQuery::from_query_string
//!     → filter.rs (first type slot match)
//!     → sort.rs (descending by field, or pass-through)
//!
//! /{name}
//!     → lookup.rs (probe type, pokemon and move indexes)
//! ```

pub mod filter;
pub mod lookup;
pub mod sort;

pub use filter::filter_by_type;
pub use lookup::Lookup;
pub use sort::{sort_by, SortField, UnknownSortField};

use crate::data::{PokemonRecord, Pokedex};

/// Parameters of a pokemon list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Requested type names, in request order.
    pub types: Vec<String>,
    /// Raw `sortby` value; only the first occurrence counts.
    pub sort_by: Option<String>,
}

impl ListQuery {
    /// Parse the raw (still percent-encoded) query string of a request.
    pub fn from_query_string(raw: Option<&str>) -> Self {
        let mut query = Self::default();
        let Some(raw) = raw else {
            return query;
        };

        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "type" => query.types.push(value.into_owned()),
                "sortby" if query.sort_by.is_none() => query.sort_by = Some(value.into_owned()),
                _ => {}
            }
        }
        query
    }

    /// The sort field, if one was given and recognized.
    pub fn sort_field(&self) -> Option<SortField> {
        let raw = self.sort_by.as_deref()?;
        match raw.parse() {
            Ok(field) => Some(field),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring sort parameter");
                None
            }
        }
    }
}

impl Pokedex {
    /// Filter and sort the pokemon collection.
    pub fn list(&self, query: &ListQuery) -> Vec<&PokemonRecord> {
        let mut records = filter_by_type(self.pokemons(), &query.types);
        if let Some(field) = query.sort_field() {
            sort_by(field, &mut records);
        }
        records
    }

    /// Probe all three namespaces for a name.
    pub fn lookup(&self, name: &str) -> Lookup<'_> {
        Lookup {
            type_record: self.type_named(name),
            pokemon: self.pokemon_named(name),
            move_record: self.move_named(name),
        }
    }
}
