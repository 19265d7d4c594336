//! Record types deserialized from the data document.
//!
//! Field names follow the document exactly; anything missing falls back to
//! an empty or zero value.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An elemental type and its effectiveness relations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TypeRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Types this one deals double damage to.
    #[serde(rename = "effectiveAgainst", deserialize_with = "null_as_default")]
    pub effective_against: Vec<String>,

    /// Types this one deals half damage to.
    #[serde(rename = "weakAgainst", deserialize_with = "null_as_default")]
    pub weak_against: Vec<String>,
}

/// Candy used to power up and evolve a pokemon.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Candy {
    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "FamilyID")]
    pub family_id: i64,
}

/// What it takes to evolve into the next stage.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EvolutionRequirement {
    #[serde(rename = "Amount")]
    pub amount: i64,

    #[serde(rename = "Family")]
    pub family: i64,

    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,
}

/// A pointer to another pokemon in the same evolution family.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EvolutionRef {
    #[serde(rename = "Number", deserialize_with = "null_as_default")]
    pub number: String,

    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,
}

/// A creature with its stats, type assignments and evolution links.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PokemonRecord {
    #[serde(rename = "Number", deserialize_with = "null_as_default")]
    pub number: String,

    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "Classification", deserialize_with = "null_as_default")]
    pub classification: String,

    #[serde(rename = "Type I", deserialize_with = "null_as_default")]
    pub type_i: Vec<String>,

    #[serde(rename = "Type II", deserialize_with = "null_as_default")]
    pub type_ii: Vec<String>,

    #[serde(rename = "Weaknesses", deserialize_with = "null_as_default")]
    pub weaknesses: Vec<String>,

    #[serde(rename = "Fast Attack(s)", deserialize_with = "null_as_default")]
    pub fast_attacks: Vec<String>,

    /// Free text, e.g. "6.9 kg".
    #[serde(rename = "Weight", deserialize_with = "null_as_default")]
    pub weight: String,

    /// Free text, e.g. "0.7 m".
    #[serde(rename = "Height", deserialize_with = "null_as_default")]
    pub height: String,

    #[serde(rename = "Candy", deserialize_with = "null_as_default")]
    pub candy: Candy,

    #[serde(rename = "Next Evolution Requirements")]
    pub next_evolution_requirements: Option<EvolutionRequirement>,

    #[serde(rename = "Next evolution(s)", deserialize_with = "null_as_default")]
    pub next_evolutions: Vec<EvolutionRef>,

    #[serde(rename = "Previous evolution(s)", deserialize_with = "null_as_default")]
    pub previous_evolutions: Vec<EvolutionRef>,

    #[serde(rename = "Special Attack(s)", deserialize_with = "null_as_default")]
    pub special_attacks: Vec<String>,

    #[serde(rename = "BaseAttack")]
    pub base_attack: i64,

    #[serde(rename = "BaseDefense")]
    pub base_defense: i64,

    #[serde(rename = "BaseStamina")]
    pub base_stamina: i64,

    #[serde(rename = "CaptureRate")]
    pub capture_rate: f64,

    #[serde(rename = "FleeRate")]
    pub flee_rate: f64,

    #[serde(rename = "BuddyDistanceNeeded")]
    pub buddy_distance_needed: i64,
}

impl PokemonRecord {
    /// The type checked by type filters.
    pub fn primary_type(&self) -> Option<&str> {
        self.type_i.first().map(String::as_str)
    }
}

/// An attack a pokemon can use.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MoveRecord {
    pub id: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub move_type: String,

    pub damage: i64,

    pub energy: i64,

    /// Damage per second.
    pub dps: f64,

    pub duration: i64,
}
