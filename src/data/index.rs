//! Name indexes over the loaded collections.
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) lookup via HashMap of normalized name → position in collection
//! - Duplicate normalized names: the later record wins in the index

use std::collections::HashMap;

use crate::data::loader::Dataset;
use crate::data::model::{MoveRecord, PokemonRecord, TypeRecord};

/// Canonical key form used by every name index.
pub fn normalize_key(name: &str) -> String {
    name.to_uppercase()
}

/// Number of lookup entries per namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatasetSummary {
    pub types: usize,
    pub pokemons: usize,
    pub moves: usize,
}

/// Immutable snapshot of the reference data with its name indexes.
#[derive(Debug, Default)]
pub struct Pokedex {
    types: Vec<TypeRecord>,
    pokemons: Vec<PokemonRecord>,
    moves: Vec<MoveRecord>,
    type_index: HashMap<String, usize>,
    pokemon_index: HashMap<String, usize>,
    move_index: HashMap<String, usize>,
}

fn build_index<T>(records: &[T], name: impl Fn(&T) -> &str) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        index.insert(normalize_key(name(record)), position);
    }
    index
}

impl Pokedex {
    /// Index a freshly loaded dataset.
    pub fn build(dataset: Dataset) -> Self {
        let type_index = build_index(&dataset.types, |t| &t.name);
        let pokemon_index = build_index(&dataset.pokemons, |p| &p.name);
        let move_index = build_index(&dataset.moves, |m| &m.name);

        Self {
            types: dataset.types,
            pokemons: dataset.pokemons,
            moves: dataset.moves,
            type_index,
            pokemon_index,
            move_index,
        }
    }

    /// A snapshot with no records at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            types: self.type_index.len(),
            pokemons: self.pokemon_index.len(),
            moves: self.move_index.len(),
        }
    }

    /// All types in document order.
    pub fn types(&self) -> &[TypeRecord] {
        &self.types
    }

    /// All pokemon in document order.
    pub fn pokemons(&self) -> &[PokemonRecord] {
        &self.pokemons
    }

    /// All moves in document order.
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn type_named(&self, name: &str) -> Option<&TypeRecord> {
        self.type_index
            .get(&normalize_key(name))
            .map(|&i| &self.types[i])
    }

    pub fn pokemon_named(&self, name: &str) -> Option<&PokemonRecord> {
        self.pokemon_index
            .get(&normalize_key(name))
            .map(|&i| &self.pokemons[i])
    }

    pub fn move_named(&self, name: &str) -> Option<&MoveRecord> {
        self.move_index
            .get(&normalize_key(name))
            .map(|&i| &self.moves[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon(number: &str, name: &str) -> PokemonRecord {
        PokemonRecord {
            number: number.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    fn dataset() -> Dataset {
        Dataset {
            types: vec![
                TypeRecord { name: "Fire".into(), ..Default::default() },
                TypeRecord { name: "Water".into(), ..Default::default() },
            ],
            pokemons: vec![pokemon("004", "Charmander"), pokemon("007", "Squirtle")],
            moves: vec![MoveRecord { id: 1, name: "Water Gun".into(), ..Default::default() }],
        }
    }

    #[test]
    fn test_summary_counts_entries() {
        let pokedex = Pokedex::build(dataset());
        assert_eq!(
            pokedex.summary(),
            DatasetSummary { types: 2, pokemons: 2, moves: 1 }
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let pokedex = Pokedex::build(dataset());
        assert_eq!(pokedex.pokemon_named("charmander").unwrap().number, "004");
        assert_eq!(pokedex.pokemon_named("SQUIRTLE").unwrap().number, "007");
        assert!(pokedex.type_named("fIrE").is_some());
        assert_eq!(pokedex.move_named("water gun").unwrap().id, 1);
        assert!(pokedex.pokemon_named("Pikachu").is_none());
    }

    #[test]
    fn test_namespaces_are_independent() {
        let pokedex = Pokedex::build(dataset());
        assert!(pokedex.pokemon_named("Fire").is_none());
        assert!(pokedex.move_named("Water").is_none());
    }

    #[test]
    fn test_duplicate_name_later_record_wins() {
        let mut data = dataset();
        data.pokemons.push(pokemon("999", "CHARMANDER"));

        let pokedex = Pokedex::build(data);
        assert_eq!(pokedex.pokemon_named("Charmander").unwrap().number, "999");
        assert_eq!(pokedex.summary().pokemons, 2);
        assert_eq!(pokedex.pokemons().len(), 3);
        assert_eq!(pokedex.moves().len(), 1);
    }

    #[test]
    fn test_empty() {
        let pokedex = Pokedex::empty();
        assert_eq!(pokedex.summary(), DatasetSummary::default());
        assert!(pokedex.type_named("Fire").is_none());
    }
}
