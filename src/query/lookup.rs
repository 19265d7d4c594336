//! Cross-namespace name lookup.

use crate::data::{MoveRecord, PokemonRecord, TypeRecord};

/// Result of probing every namespace for one name.
///
/// All three probes always run. When more than one namespace matches, every
/// match is kept; they are rendered type first, then pokemon, then move, so
/// the move is what a reader sees last.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lookup<'a> {
    pub type_record: Option<&'a TypeRecord>,
    pub pokemon: Option<&'a PokemonRecord>,
    pub move_record: Option<&'a MoveRecord>,
}

impl Lookup<'_> {
    pub fn is_found(&self) -> bool {
        self.match_count() > 0
    }

    pub fn match_count(&self) -> usize {
        usize::from(self.type_record.is_some())
            + usize::from(self.pokemon.is_some())
            + usize::from(self.move_record.is_some())
    }

    /// Kind of the last match in display order.
    pub fn last_kind(&self) -> Option<&'static str> {
        if self.move_record.is_some() {
            Some("move")
        } else if self.pokemon.is_some() {
            Some("pokemon")
        } else if self.type_record.is_some() {
            Some("type")
        } else {
            None
        }
    }
}
