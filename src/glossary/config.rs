//! Glossary configuration

use serde::{Deserialize, Serialize};

use crate::error::GlossaryError;

/// Marker that prefixes AI-drafted definitions in the CSV.
pub const DEFAULT_DRAFT_MARKER: &str = "[AI-DRAFT]";

/// Configuration for loading and presenting the glossary
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GlossaryConfig {
    /// Candidate locations, tried in order until one succeeds
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
    #[serde(default = "default_draft_marker")]
    pub draft_marker: String,
}

fn default_sources() -> Vec<String> {
    vec![
        "/glossary.csv".to_string(),
        "./glossary.csv".to_string(),
        "glossary.csv".to_string(),
    ]
}

fn default_draft_marker() -> String {
    DEFAULT_DRAFT_MARKER.to_string()
}

impl Default for GlossaryConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            draft_marker: default_draft_marker(),
        }
    }
}

impl GlossaryConfig {
    pub fn with_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GlossaryError> {
        if self.sources.is_empty() {
            return Err(GlossaryError::Config("no candidate sources".to_string()));
        }
        if self.sources.iter().any(|s| s.trim().is_empty()) {
            return Err(GlossaryError::Config("blank candidate source".to_string()));
        }
        Ok(())
    }
}
