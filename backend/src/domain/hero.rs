//! Hero data model and stat filters.
//!
//! Heroes are created by an external seed/import; this system only reads
//! them. The store's internal record id never leaves the persistence
//! adapter — the domain identifies heroes by their external `original_id`.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned when constructing a [`HeroId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroIdValidationError {
    /// The id is empty after trimming whitespace.
    Empty,
    /// The id carries leading or trailing whitespace.
    Padded,
}

impl fmt::Display for HeroIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "hero id must not be empty"),
            Self::Padded => write!(f, "hero id must not contain surrounding whitespace"),
        }
    }
}

impl std::error::Error for HeroIdValidationError {}

/// External hero identifier (`original_id` in the store), used for all
/// lookups and as the target of comment references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HeroId(String);

impl HeroId {
    /// Validate and construct a [`HeroId`] from borrowed input.
    pub fn new(id: impl Into<String>) -> Result<Self, HeroIdValidationError> {
        let raw = id.into();
        if raw.trim().is_empty() {
            return Err(HeroIdValidationError::Empty);
        }
        if raw.trim() != raw {
            return Err(HeroIdValidationError::Padded);
        }
        Ok(Self(raw))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for HeroId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<HeroId> for String {
    fn from(value: HeroId) -> Self {
        value.0
    }
}

impl TryFrom<String> for HeroId {
    type Error = HeroIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Fixed mapping of named numeric hero attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Powerstats {
    /// Intelligence score.
    pub intelligence: u32,
    /// Strength score.
    pub strength: u32,
    /// Speed score.
    pub speed: u32,
    /// Durability score.
    pub durability: u32,
    /// Power score.
    pub power: u32,
    /// Combat score.
    pub combat: u32,
}

/// A hero catalogue entry. Immutable in this system's scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    /// External identifier used for lookups.
    pub id: HeroId,
    /// Display name; sort key for all hero listings and target of prefix
    /// search.
    pub name: String,
    /// The hero's stat block.
    pub powerstats: Powerstats,
}

/// The fixed set of filterable stat fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    /// `powerstats.intelligence`.
    Intelligence,
    /// `powerstats.strength`.
    Strength,
    /// `powerstats.speed`.
    Speed,
    /// `powerstats.durability`.
    Durability,
    /// `powerstats.power`.
    Power,
    /// `powerstats.combat`.
    Combat,
}

impl StatField {
    /// All filterable fields, in stat-block order.
    pub const ALL: [Self; 6] = [
        Self::Intelligence,
        Self::Strength,
        Self::Speed,
        Self::Durability,
        Self::Power,
        Self::Combat,
    ];

    /// Wire/store name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intelligence => "intelligence",
            Self::Strength => "strength",
            Self::Speed => "speed",
            Self::Durability => "durability",
            Self::Power => "power",
            Self::Combat => "combat",
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum-threshold filter over the stat block.
///
/// A field set to `Some(n)` constrains matches to
/// `powerstats[field] >= n`; `None` leaves the field unconstrained. An
/// absent threshold is never treated as `>= 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatThresholds {
    /// Minimum intelligence, if constrained.
    pub intelligence: Option<u32>,
    /// Minimum strength, if constrained.
    pub strength: Option<u32>,
    /// Minimum speed, if constrained.
    pub speed: Option<u32>,
    /// Minimum durability, if constrained.
    pub durability: Option<u32>,
    /// Minimum power, if constrained.
    pub power: Option<u32>,
    /// Minimum combat, if constrained.
    pub combat: Option<u32>,
}

impl StatThresholds {
    /// The threshold for one field, if constrained.
    pub fn get(&self, field: StatField) -> Option<u32> {
        match field {
            StatField::Intelligence => self.intelligence,
            StatField::Strength => self.strength,
            StatField::Speed => self.speed,
            StatField::Durability => self.durability,
            StatField::Power => self.power,
            StatField::Combat => self.combat,
        }
    }

    /// The constrained fields and their thresholds, in stat-block order.
    pub fn constraints(&self) -> impl Iterator<Item = (StatField, u32)> + '_ {
        StatField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|min| (field, min)))
    }

    /// True when no field is constrained (the filter matches every hero).
    pub fn is_unconstrained(&self) -> bool {
        self.constraints().next().is_none()
    }

    /// Whether a stat block satisfies every constrained field.
    pub fn matches(&self, stats: &Powerstats) -> bool {
        self.constraints().all(|(field, min)| {
            let value = match field {
                StatField::Intelligence => stats.intelligence,
                StatField::Strength => stats.strength,
                StatField::Speed => stats.speed,
                StatField::Durability => stats.durability,
                StatField::Power => stats.power,
                StatField::Combat => stats.combat,
            };
            value >= min
        })
    }
}
