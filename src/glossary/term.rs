//! Term records and their closed classification sets.

use serde::{Deserialize, Serialize};

// =============================================================================
// Category
// =============================================================================

/// Classification label for a term. Closed set; unknown labels map to `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    General,
    Documents,
    Structural,
    Materials,
    Equipment,
    Safety,
    Trades,
    Site,
    Contracts,
    Regulations,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::General,
        Category::Documents,
        Category::Structural,
        Category::Materials,
        Category::Equipment,
        Category::Safety,
        Category::Trades,
        Category::Site,
        Category::Contracts,
        Category::Regulations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Documents => "Documents",
            Category::Structural => "Structural",
            Category::Materials => "Materials",
            Category::Equipment => "Equipment",
            Category::Safety => "Safety",
            Category::Trades => "Trades",
            Category::Site => "Site",
            Category::Contracts => "Contracts",
            Category::Regulations => "Regulations",
        }
    }

    /// Parse a CSV label (trimmed, case-insensitive). `None` for unknown labels.
    pub fn from_label(label: &str) -> Option<Category> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Provenance
// =============================================================================

/// Where a definition came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Drafted for the game, not checked against an external reference.
    #[default]
    Game,
    /// Taken from verified industry material.
    Industry,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Game => "game",
            Provenance::Industry => "industry",
        }
    }

    pub fn from_label(label: &str) -> Option<Provenance> {
        match label.trim().to_lowercase().as_str() {
            "game" => Some(Provenance::Game),
            "industry" => Some(Provenance::Industry),
            _ => None,
        }
    }
}

// =============================================================================
// Term
// =============================================================================

/// A single glossary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    pub id: String,
    pub display_name: String,
    /// Stored as loaded, including any draft marker.
    pub definition: String,
    pub category: Category,
    pub provenance: Provenance,
    pub needs_review: bool,
    pub aliases: Vec<String>,
    /// May reference ids that are not loaded.
    pub related_ids: Vec<String>,
    pub image_ref: Option<String>,
}

impl Term {
    /// True if the definition starts with `marker`.
    pub fn is_draft(&self, marker: &str) -> bool {
        !marker.is_empty() && self.definition.trim_start().starts_with(marker)
    }

    /// Definition text for presentation, with the draft marker removed.
    pub fn display_definition(&self, marker: &str) -> &str {
        let trimmed = self.definition.trim_start();
        if marker.is_empty() {
            return trimmed;
        }
        match trimmed.strip_prefix(marker) {
            Some(rest) => rest.trim_start(),
            None => trimmed,
        }
    }

    /// Display name followed by every alias.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.display_name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}
