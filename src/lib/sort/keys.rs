//! Sort key extraction policies for Pokédex records.
//!
//! Each policy is a pure, total function from a [`Record`] to an orderable key. The engine in
//! [`super::selection`] only ever compares keys produced by the same policy, so mixing
//! [`SortKey`] variants never happens within one sort.
//!
//! # Policies
//!
//! - [`stage_key`]: evolution stage ordinal (Basic < Stage 1 < Stage 2 < anything else)
//! - [`generation_key`]: generation number
//! - [`hit_points_key`]: hit points
//! - [`type_key`]: canonical index of the primary type, unknown types last
//! - [`name_key`]: name, case-sensitive byte-wise order

use crate::record::{PokemonType, Record};

/// Key returned for a primary type outside the canonical list.
pub const UNKNOWN_TYPE_KEY: u32 = 99;

/// An orderable key extracted from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey<'a> {
    /// Numeric key (ordinals, indices, raw attributes)
    Number(u32),
    /// Textual key compared with `str` ordering
    Text(&'a str),
}

/// A named extraction policy.
pub type KeyPolicy = for<'a> fn(&'a Record) -> SortKey<'a>;

/// Orders items by an extracted key.
///
/// Implemented for every `Fn(&T) -> K` with `K: Ord`, and for [`SortMode`], whose keys may
/// borrow from the record being compared.
pub trait KeyExtractor<T: ?Sized> {
    /// Whether the key of `a` is strictly less than the key of `b`.
    fn key_less(&self, a: &T, b: &T) -> bool;
}

impl<T, K, F> KeyExtractor<T> for F
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    fn key_less(&self, a: &T, b: &T) -> bool {
        self(a) < self(b)
    }
}

/// Evolution stage ordinal: 1 Basic, 2 Stage 1, 3 Stage 2, 4 anything else.
#[must_use]
pub fn stage_key(record: &Record) -> u32 {
    record.stage().ordinal()
}

#[must_use]
pub fn generation_key(record: &Record) -> u32 {
    record.generation()
}

#[must_use]
pub fn hit_points_key(record: &Record) -> u32 {
    record.hit_points()
}

/// Canonical index of the first type tag; [`UNKNOWN_TYPE_KEY`] if unrecognized or absent.
///
/// Secondary types are ignored, so `"Fire Flying"` orders exactly like `"Fire"`.
#[must_use]
pub fn type_key(record: &Record) -> u32 {
    record
        .primary_type()
        .and_then(|tag| tag.parse::<PokemonType>().ok())
        .map_or(UNKNOWN_TYPE_KEY, PokemonType::index)
}

#[must_use]
pub fn name_key(record: &Record) -> &str {
    record.name()
}

fn by_stage(record: &Record) -> SortKey<'_> {
    SortKey::Number(stage_key(record))
}

fn by_generation(record: &Record) -> SortKey<'_> {
    SortKey::Number(generation_key(record))
}

fn by_hit_points(record: &Record) -> SortKey<'_> {
    SortKey::Number(hit_points_key(record))
}

fn by_type(record: &Record) -> SortKey<'_> {
    SortKey::Number(type_key(record))
}

fn by_name(record: &Record) -> SortKey<'_> {
    SortKey::Text(name_key(record))
}

/// The attribute a sort run orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Evolution stage (ascending)
    Stage,
    /// Generation (ascending)
    Generation,
    /// Hit points (lowest to highest)
    HitPoints,
    /// Primary type in canonical order
    Type,
    /// Name (A-Z)
    Name,
}

impl SortMode {
    /// All modes in menu order.
    pub const ALL: [SortMode; 5] =
        [Self::Stage, Self::Generation, Self::HitPoints, Self::Type, Self::Name];

    /// The extraction policy for this mode.
    #[must_use]
    pub fn policy(self) -> KeyPolicy {
        match self {
            Self::Stage => by_stage,
            Self::Generation => by_generation,
            Self::HitPoints => by_hit_points,
            Self::Type => by_type,
            Self::Name => by_name,
        }
    }

    /// Title shown above the sorted table.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Stage => "Sorted by Evolution Stage",
            Self::Generation => "Sorted by Generation",
            Self::HitPoints => "Sorted by HP",
            Self::Type => "Sorted by Type (Primary)",
            Self::Name => "Sorted Alphabetically",
        }
    }

    /// Menu entry text.
    #[must_use]
    pub fn menu_label(self) -> &'static str {
        match self {
            Self::Stage => "Sort by Evolution Stage (Ascending)",
            Self::Generation => "Sort by Generation (Ascending)",
            Self::HitPoints => "Sort by HP (Lowest to Highest)",
            Self::Type => "Sort by Pokemon Type (Custom Order)",
            Self::Name => "Sort Alphabetically (A-Z)",
        }
    }

    /// Menu key selecting this mode ("2" through "6").
    #[must_use]
    pub fn menu_choice(self) -> &'static str {
        match self {
            Self::Stage => "2",
            Self::Generation => "3",
            Self::HitPoints => "4",
            Self::Type => "5",
            Self::Name => "6",
        }
    }

    /// Looks up the mode for a menu key.
    #[must_use]
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.menu_choice() == choice)
    }
}

impl KeyExtractor<Record> for SortMode {
    fn key_less(&self, a: &Record, b: &Record) -> bool {
        let policy = self.policy();
        policy(a) < policy(b)
    }
}
