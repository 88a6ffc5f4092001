//! Pokémon records and their typed attributes.
//!
//! A [`Record`] is a fixed-shape attribute bundle validated at construction. Sorting only ever
//! moves records around; it never mutates them, so every accessor borrows.

use std::fmt;
use std::str::FromStr;

use crate::errors::{PokesortError, Result};
use crate::validation::{validate_not_blank, validate_positive};

/// Evolution stage, derived from a free-form stage label.
///
/// Labels are matched by substring so that descriptors such as `"Stage 2 (Final)"` still resolve.
/// Checks run in the order `Basic`, `Stage 1`, `Stage 2`; anything else is [`EvolutionStage::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EvolutionStage {
    /// Unevolved form
    Basic,
    /// First evolution
    Stage1,
    /// Second evolution
    Stage2,
    /// Unrecognized label (e.g. "Legendary"); sorts last
    Other,
}

impl EvolutionStage {
    /// Classifies a stage label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.contains("Basic") {
            Self::Basic
        } else if label.contains("Stage 1") {
            Self::Stage1
        } else if label.contains("Stage 2") {
            Self::Stage2
        } else {
            Self::Other
        }
    }

    /// The sort ordinal: 1 for Basic through 4 for unrecognized stages.
    #[must_use]
    pub fn ordinal(self) -> u32 {
        match self {
            Self::Basic => 1,
            Self::Stage1 => 2,
            Self::Stage2 => 3,
            Self::Other => 4,
        }
    }
}

/// The 18 elemental types, declared in canonical sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    /// All types in canonical order.
    pub const ALL: [PokemonType; 18] = [
        Self::Normal,
        Self::Fire,
        Self::Water,
        Self::Electric,
        Self::Grass,
        Self::Ice,
        Self::Fighting,
        Self::Poison,
        Self::Ground,
        Self::Flying,
        Self::Psychic,
        Self::Bug,
        Self::Rock,
        Self::Ghost,
        Self::Dragon,
        Self::Dark,
        Self::Steel,
        Self::Fairy,
    ];

    /// Zero-based position in the canonical order.
    #[must_use]
    pub fn index(self) -> u32 {
        self as u32
    }

    /// The display name, identical to the tag that parses to this type.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Fire => "Fire",
            Self::Water => "Water",
            Self::Electric => "Electric",
            Self::Grass => "Grass",
            Self::Ice => "Ice",
            Self::Fighting => "Fighting",
            Self::Poison => "Poison",
            Self::Ground => "Ground",
            Self::Flying => "Flying",
            Self::Psychic => "Psychic",
            Self::Bug => "Bug",
            Self::Rock => "Rock",
            Self::Ghost => "Ghost",
            Self::Dragon => "Dragon",
            Self::Dark => "Dark",
            Self::Steel => "Steel",
            Self::Fairy => "Fairy",
        }
    }
}

impl FromStr for PokemonType {
    type Err = PokesortError;

    /// Exact, case-sensitive match against the canonical names.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == s).ok_or_else(|| {
            PokesortError::InvalidParameter {
                parameter: "type".to_string(),
                reason: format!("Unknown type '{s}'"),
            }
        })
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single Pokémon entry.
///
/// Type tags are kept as strings so that records with tags outside the canonical list are
/// representable; such records sort after every recognized type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    name: String,
    stage: String,
    generation: u32,
    hit_points: u32,
    type_tags: Vec<String>,
}

impl Record {
    /// Builds a validated record.
    ///
    /// # Errors
    ///
    /// Returns [`PokesortError::InvalidRecord`] if the name or stage is blank, the generation or
    /// hit points are zero, or the type tag list is empty or contains a blank tag.
    pub fn new(
        name: impl Into<String>,
        stage: impl Into<String>,
        generation: u32,
        hit_points: u32,
        type_tags: Vec<String>,
    ) -> Result<Self> {
        let name = name.into();
        let stage = stage.into();

        with_record_context(&name, validate_not_blank(&name, "name"))?;
        with_record_context(&name, validate_not_blank(&stage, "stage"))?;
        with_record_context(&name, validate_positive(generation, "generation"))?;
        with_record_context(&name, validate_positive(hit_points, "hit_points"))?;
        if type_tags.is_empty() {
            return Err(PokesortError::InvalidRecord {
                name,
                reason: "at least one type tag is required".to_string(),
            });
        }
        for tag in &type_tags {
            with_record_context(&name, validate_not_blank(tag, "type tag"))?;
        }

        Ok(Self { name, stage, generation, hit_points, type_tags })
    }

    /// Builds a record from a whitespace-separated type string such as `"Water Dark"`.
    ///
    /// # Errors
    ///
    /// See [`Record::new`].
    pub fn with_types(
        name: impl Into<String>,
        stage: impl Into<String>,
        generation: u32,
        hit_points: u32,
        types: &str,
    ) -> Result<Self> {
        let tags = types.split_whitespace().map(str::to_string).collect();
        Self::new(name, stage, generation, hit_points, tags)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw stage label as given at construction.
    #[must_use]
    pub fn stage_label(&self) -> &str {
        &self.stage
    }

    #[must_use]
    pub fn stage(&self) -> EvolutionStage {
        EvolutionStage::from_label(&self.stage)
    }

    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    #[must_use]
    pub fn hit_points(&self) -> u32 {
        self.hit_points
    }

    /// The first type tag, which alone decides type ordering.
    #[must_use]
    pub fn primary_type(&self) -> Option<&str> {
        self.type_tags.first().map(String::as_str)
    }

    /// Type tags joined by a single space, as shown in tables.
    #[must_use]
    pub fn types_display(&self) -> String {
        self.type_tags.join(" ")
    }
}

/// Re-labels a parameter validation failure as a failure of the named record.
fn with_record_context(name: &str, result: Result<()>) -> Result<()> {
    result.map_err(|e| match e {
        PokesortError::InvalidParameter { parameter, reason } => PokesortError::InvalidRecord {
            name: name.to_string(),
            reason: format!("{parameter}: {reason}"),
        },
        other => other,
    })
}
