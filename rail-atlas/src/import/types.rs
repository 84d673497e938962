//! Raw network document DTOs.
//!
//! These types map directly to the hand-authored network JSON. Decoding
//! into them is the schema-validation step: anything that deserializes is
//! structurally sound, and the converter only has to check cross-field
//! rules (coordinate arity, cost derivability). Optional fields use
//! `Option`/defaults because the document omits keys rather than writing
//! nulls.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// The top-level network document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNetwork {
    /// Version tag of the network data, passed through to the output.
    pub version: String,

    /// Lines grouped by dimension.
    pub lines: RawDimensions,

    /// Interdimensional transfer pairings.
    #[serde(default)]
    pub connections: Vec<RawTransfer>,

    /// Display names keyed by station code.
    #[serde(default)]
    pub stations: IndexMap<String, RawNames>,
}

/// Lines per dimension. A missing dimension simply has no lines.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDimensions {
    /// Overworld lines; station codes are used as-is.
    #[serde(default)]
    pub overworld: Vec<RawLine>,

    /// Nether lines; station codes get the `N-` prefix.
    #[serde(default)]
    pub the_nether: Vec<RawLine>,
}

/// A single line: an ordered sequence of stops.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLine {
    /// Line code, unique within its dimension.
    pub code: String,

    /// Display name. Missing names fall back to `"Unnamed Line"`.
    #[serde(default)]
    pub name: Option<String>,

    /// Whether the last stop additionally connects back to the first.
    #[serde(default, rename = "loop")]
    pub is_loop: bool,

    /// Stops in line order.
    pub stops: Vec<RawStop>,
}

/// A stop on a line, carrying optional cost information.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStop {
    /// Station code, before any dimension prefix.
    pub code: String,

    /// Explicit travel time from the previous stop, in seconds.
    #[serde(default)]
    pub time: Option<f64>,

    /// Track distance from the previous stop, in blocks.
    #[serde(default)]
    pub dist: Option<f64>,

    /// World position, either `[x, z]` or `[x, y, z]`.
    #[serde(default)]
    pub coords: Option<Vec<f64>>,
}

/// An interdimensional transfer pairing.
///
/// A bare code `"C"` pairs `C` with `N-C`; a two-element array
/// `["C", "D"]` pairs `C` with `N-D`. Anything else is rejected at
/// decode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawTransfer {
    /// Overworld code, paired with its own Nether counterpart.
    Code(String),
    /// Overworld code paired with an explicit Nether suffix.
    Pair(String, String),
}

impl<'de> Deserialize<'de> for RawTransfer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TransferVisitor;

        impl<'de> Visitor<'de> for TransferVisitor {
            type Value = RawTransfer;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a station code or a two-element [overworld, nether] array")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(RawTransfer::Code(v.to_owned()))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let overworld: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let nether: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(3, &self));
                }
                Ok(RawTransfer::Pair(overworld, nether))
            }
        }

        deserializer.deserialize_any(TransferVisitor)
    }
}

/// Display names for one station: a single name, a list of names, or a
/// `$code` alias to another station's entry.
///
/// The alias form is just a string starting with `$`; it is resolved by
/// the converter, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawNames {
    /// One name, or a `$code` alias.
    One(String),
    /// Several names.
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for RawNames {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NamesVisitor;

        impl<'de> Visitor<'de> for NamesVisitor {
            type Value = RawNames;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a station name, a list of names, or a \"$code\" alias")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(RawNames::One(v.to_owned()))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut names = Vec::new();
                while let Some(name) = seq.next_element::<String>()? {
                    names.push(name);
                }
                Ok(RawNames::Many(names))
            }
        }

        deserializer.deserialize_any(NamesVisitor)
    }
}
