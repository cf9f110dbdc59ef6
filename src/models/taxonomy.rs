//! Content taxonomy.
//!
//! The closed set of content types the directory knows about, and the
//! display metadata (icon key, color key, label) the UI renders for each.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Sentinel accepted by type and category selectors meaning "no constraint".
pub const ALL_SENTINEL: &str = "all";

/// Content type of a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Historical stone monuments and buildings.
    Monument,
    /// Active or historical quarries.
    Quarry,
    /// Marble and other named stone varieties.
    Marble,
    /// Quarrying, restoration, and supply companies.
    Company,
}

impl ContentType {
    /// Returns all content types in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Monument, Self::Quarry, Self::Marble, Self::Company]
    }

    /// Returns the type identifier as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monument => "monument",
            Self::Quarry => "quarry",
            Self::Marble => "marble",
            Self::Company => "company",
        }
    }

    /// Returns the plural label shown in type selectors.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Monument => "Monuments",
            Self::Quarry => "Quarries",
            Self::Marble => "Marble Varieties",
            Self::Company => "Companies",
        }
    }

    /// Returns the display metadata for this type.
    #[must_use]
    pub const fn display_meta(&self) -> DisplayMeta {
        match self {
            Self::Monument => DisplayMeta::new("landmark", "stone-600"),
            Self::Quarry => DisplayMeta::new("mountain", "quarry-600"),
            Self::Marble => DisplayMeta::new("gem", "marble-400"),
            Self::Company => DisplayMeta::new("building-2", "stone-500"),
        }
    }

    /// Parses a type identifier, ignoring case.
    ///
    /// Only the four identifiers are accepted. Returns `None` for anything
    /// else, including plurals, padded values and the `"all"` sentinel.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }

    /// Parses a user-typed type selector.
    ///
    /// More forgiving than [`parse`](Self::parse): surrounding whitespace is
    /// ignored and plural forms are accepted. `"all"` and unknown values
    /// return `None`, meaning no type constraint.
    #[must_use]
    pub fn from_selector(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "monument" | "monuments" => Some(Self::Monument),
            "quarry" | "quarries" => Some(Self::Quarry),
            "marble" | "marbles" => Some(Self::Marble),
            "company" | "companies" => Some(Self::Company),
            _ => None,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| Error::UnknownType(s.to_string()))
    }
}

/// Rendering hints for a content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayMeta {
    /// Icon key (lucide icon name).
    pub icon: &'static str,
    /// Color key (theme palette entry).
    pub color: &'static str,
}

impl DisplayMeta {
    const fn new(icon: &'static str, color: &'static str) -> Self {
        Self { icon, color }
    }
}

/// Returns the fixed, ordered sequence of valid type identifiers.
#[must_use]
pub fn types_of() -> Vec<&'static str> {
    ContentType::all().iter().map(ContentType::as_str).collect()
}

/// Looks up display metadata for a type identifier.
///
/// # Errors
///
/// Returns [`Error::UnknownType`] if `content_type` is not in the closed set.
///
/// # Examples
///
/// ```
/// use stonecat::display_meta_for;
///
/// assert_eq!(display_meta_for("quarry")?.icon, "mountain");
/// assert!(display_meta_for("spaceship").is_err());
/// # Ok::<(), stonecat::Error>(())
/// ```
pub fn display_meta_for(content_type: &str) -> Result<DisplayMeta> {
    content_type
        .parse::<ContentType>()
        .map(|t| t.display_meta())
}
