//! Fixed note color palette.
//!
//! Each entry pairs a stable identifier (persisted and used for filtering)
//! with a display label. Palette order is the display order.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Color label attached to every note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NoteColor {
    #[default]
    #[serde(rename = "bg-white")]
    White,
    #[serde(rename = "bg-red-200")]
    Red,
    #[serde(rename = "bg-yellow-200")]
    Yellow,
    #[serde(rename = "bg-green-200")]
    Green,
    #[serde(rename = "bg-blue-200")]
    Blue,
    #[serde(rename = "bg-purple-200")]
    Purple,
}

impl NoteColor {
    /// Full palette in display order. The first entry is the neutral default.
    pub const PALETTE: [NoteColor; 6] = [
        Self::White,
        Self::Red,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
    ];

    /// Stable identifier, identical to the persisted form.
    pub fn id(self) -> &'static str {
        match self {
            Self::White => "bg-white",
            Self::Red => "bg-red-200",
            Self::Yellow => "bg-yellow-200",
            Self::Green => "bg-green-200",
            Self::Blue => "bg-blue-200",
            Self::Purple => "bg-purple-200",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
        }
    }
}

impl Display for NoteColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Identifier did not match any palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl Display for UnknownColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown note color: `{}`", self.0)
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for NoteColor {
    type Err = UnknownColor;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::PALETTE
            .into_iter()
            .find(|color| color.id() == trimmed)
            .ok_or_else(|| UnknownColor(trimmed.to_string()))
    }
}
