//! Plain-text rendering of records.
//!
//! # Design Decisions
//! - Fixed labels and field order so output is deterministic
//! - Nested lists are tab-indented, one entry per line
//! - Text only; no endpoint produces JSON

use std::fmt::{self, Display, Formatter};

use crate::data::{MoveRecord, PokemonRecord, TypeRecord};
use crate::query::Lookup;

/// Line written after every pokemon in a list.
pub const LIST_DIVIDER: &str =
    "\n -------------------------------------------------------------------- \n \n";

/// Body returned when no namespace knows the requested name.
pub const NOT_FOUND: &str = "We could not find what you are looking for";

/// Body of the `/get` placeholder endpoint.
pub const GET_PLACEHOLDER: &str = "The Get Handler\n";

fn write_list(f: &mut Formatter<'_>, items: &[String]) -> fmt::Result {
    for item in items {
        writeln!(f, "\t{item}")?;
    }
    Ok(())
}

impl Display for TypeRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Type Name: {}", self.name)?;
        writeln!(f, "Effective Against: ")?;
        write_list(f, &self.effective_against)?;
        writeln!(f, "Weak Against: ")?;
        write_list(f, &self.weak_against)
    }
}

impl Display for PokemonRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pokemon Number: {}", self.number)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Classification: {}", self.classification)?;
        writeln!(f, "TypeI: ")?;
        write_list(f, &self.type_i)?;
        writeln!(f, "TypeII:")?;
        write_list(f, &self.type_ii)?;
        writeln!(f, "Weaknesses:")?;
        write_list(f, &self.weaknesses)?;
        writeln!(f, "FastAttacks:")?;
        write_list(f, &self.fast_attacks)?;
        writeln!(f, "Height: {}", self.height)?;
        writeln!(f, "Weight: {}", self.weight)?;

        writeln!(f, "Candy: ")?;
        writeln!(f, "\tName: {}", self.candy.name)?;
        writeln!(f, "\tFamilyID: {}", self.candy.family_id)?;

        let requirement = self.next_evolution_requirements.clone().unwrap_or_default();
        writeln!(f, "NextEvolutionRequirements:")?;
        writeln!(f, "\tAmount: {}", requirement.amount)?;
        writeln!(f, "\tFamily: {}", requirement.family)?;
        writeln!(f, "\tName: {}", requirement.name)?;

        writeln!(f, "NextEvolutions:")?;
        for evolution in &self.next_evolutions {
            writeln!(f, "\tNumber: {} ; Name: {}", evolution.number, evolution.name)?;
        }
        writeln!(f, "Previous Evolutions: ")?;
        for evolution in &self.previous_evolutions {
            writeln!(f, "\tNumber: {} ; Name: {}", evolution.number, evolution.name)?;
        }

        writeln!(f, "Special Attacks: ")?;
        write_list(f, &self.special_attacks)?;
        writeln!(f, "Base Attack: {}", self.base_attack)?;
        writeln!(f, "Base Defense: {}", self.base_defense)?;
        writeln!(f, "Base Stamina: {}", self.base_stamina)?;
        writeln!(f, "Capture Rate: {}", self.capture_rate)?;
        writeln!(f, "Flee Rate: {}", self.flee_rate)?;
        writeln!(f, "Buddy Distance Needed: {}", self.buddy_distance_needed)
    }
}

impl Display for MoveRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Move ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Type: {}", self.move_type)?;
        writeln!(f, "Damage: {}", self.damage)?;
        writeln!(f, "Energy: {}", self.energy)?;
        writeln!(f, "DPS: {}", self.dps)?;
        writeln!(f, "Duration: {}", self.duration)
    }
}

/// A filtered pokemon list, each block followed by [`LIST_DIVIDER`].
pub struct PokemonList<'a>(pub &'a [&'a PokemonRecord]);

impl Display for PokemonList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for pokemon in self.0 {
            write!(f, "{pokemon}{LIST_DIVIDER}")?;
        }
        Ok(())
    }
}

/// The names of every loaded type.
pub struct TypeNames<'a>(pub &'a [TypeRecord]);

impl Display for TypeNames<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Types")?;
        for record in self.0 {
            writeln!(f, "Type name: {}", record.name)?;
        }
        Ok(())
    }
}

impl Display for Lookup<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.is_found() {
            return f.write_str(NOT_FOUND);
        }
        if let Some(record) = self.type_record {
            write!(f, "{record}")?;
        }
        if let Some(record) = self.pokemon {
            write!(f, "{record}")?;
        }
        if let Some(record) = self.move_record {
            write!(f, "{record}")?;
        }
        Ok(())
    }
}
