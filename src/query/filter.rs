//! Type filtering.
//!
//! Only the first entry of `Type I` is compared. A second type slot is never
//! consulted, so dual-type pokemon match on their primary type only.

use crate::data::{normalize_key, PokemonRecord};

/// Pokemon whose primary type matches any of `type_names`, in collection order.
///
/// An empty filter selects nothing.
pub fn filter_by_type<'a>(
    pokemons: &'a [PokemonRecord],
    type_names: &[String],
) -> Vec<&'a PokemonRecord> {
    if type_names.is_empty() {
        return Vec::new();
    }

    let wanted: Vec<String> = type_names.iter().map(|t| normalize_key(t)).collect();
    pokemons
        .iter()
        .filter(|p| {
            p.primary_type()
                .map(normalize_key)
                .is_some_and(|primary| wanted.contains(&primary))
        })
        .collect()
}
