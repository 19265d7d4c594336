//! Descending sorts over pokemon stats.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::data::PokemonRecord;

/// Fields a pokemon list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    BaseAttack,
    BaseDefense,
    BaseStamina,
    CaptureRate,
    FleeRate,
    /// Compared as text.
    Weight,
    /// Compared as text.
    Height,
    BuddyDistanceNeeded,
}

impl SortField {
    pub const ALL: [SortField; 8] = [
        SortField::BaseAttack,
        SortField::BaseDefense,
        SortField::BaseStamina,
        SortField::CaptureRate,
        SortField::FleeRate,
        SortField::Weight,
        SortField::Height,
        SortField::BuddyDistanceNeeded,
    ];

    /// The query-string spelling of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::BaseAttack => "BaseAttack",
            SortField::BaseDefense => "BaseDefense",
            SortField::BaseStamina => "BaseStamina",
            SortField::CaptureRate => "CaptureRate",
            SortField::FleeRate => "FleeRate",
            SortField::Weight => "Weight",
            SortField::Height => "Height",
            SortField::BuddyDistanceNeeded => "BuddyDistanceNeeded",
        }
    }

    /// Ascending comparison of two records on this field.
    fn compare(self, a: &PokemonRecord, b: &PokemonRecord) -> Ordering {
        match self {
            SortField::BaseAttack => a.base_attack.cmp(&b.base_attack),
            SortField::BaseDefense => a.base_defense.cmp(&b.base_defense),
            SortField::BaseStamina => a.base_stamina.cmp(&b.base_stamina),
            SortField::CaptureRate => a.capture_rate.total_cmp(&b.capture_rate),
            SortField::FleeRate => a.flee_rate.total_cmp(&b.flee_rate),
            SortField::Weight => a.weight.cmp(&b.weight),
            SortField::Height => a.height.cmp(&b.height),
            SortField::BuddyDistanceNeeded => a.buddy_distance_needed.cmp(&b.buddy_distance_needed),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `sortby` value that names no known field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort field {0:?}")]
pub struct UnknownSortField(pub String);

impl FromStr for SortField {
    type Err = UnknownSortField;

    /// Field names are matched exactly, including case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownSortField(s.to_string()))
    }
}

/// Sort records in place, highest value first. Ties keep their relative order.
pub fn sort_by(field: SortField, records: &mut [&PokemonRecord]) {
    records.sort_by(|a, b| field.compare(b, a));
}
