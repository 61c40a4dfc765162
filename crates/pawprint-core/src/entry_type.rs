//! Entry type enum as the single source of truth for entry type names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of pet-care event that can be logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryType {
    Sleep,
    Wake,
    Pee,
    Poop,
    Feed,
}

/// Display assets for an entry type.
///
/// `icon` names the drawable a graphical front end would load; `glyph` is
/// the terminal stand-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayAsset {
    pub icon: &'static str,
    pub glyph: &'static str,
}

impl EntryType {
    /// Every variant, in the order front ends lay out their buttons.
    pub const ALL: [Self; 5] = [Self::Sleep, Self::Wake, Self::Pee, Self::Poop, Self::Feed];

    /// Stored name, as written to the `type` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sleep => "Sleep",
            Self::Wake => "Wake",
            Self::Pee => "Pee",
            Self::Poop => "Poop",
            Self::Feed => "Feed",
        }
    }

    /// Maps the type to its display assets.
    #[must_use]
    pub const fn asset(&self) -> DisplayAsset {
        match self {
            Self::Sleep => DisplayAsset {
                icon: "sleep",
                glyph: "💤",
            },
            Self::Wake => DisplayAsset {
                icon: "wake",
                glyph: "🌞",
            },
            Self::Pee => DisplayAsset {
                icon: "pee",
                glyph: "💧",
            },
            Self::Poop => DisplayAsset {
                icon: "poop",
                glyph: "💩",
            },
            Self::Feed => DisplayAsset {
                icon: "feed",
                glyph: "🍖",
            },
        }
    }

    /// Whether this type changes the sleep/wake state.
    #[must_use]
    pub const fn is_sleep_or_wake(&self) -> bool {
        matches!(self, Self::Sleep | Self::Wake)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = UnknownEntryType;

    /// Parses a type name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownEntryType(s.to_string()))
    }
}

impl Serialize for EntryType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntryType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown entry type names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEntryType(pub String);

impl fmt::Display for UnknownEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown entry type: {}", self.0)
    }
}

impl std::error::Error for UnknownEntryType {}
