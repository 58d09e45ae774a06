//! TermIndex: Loaded Glossary Catalog + Point Queries
//!
//! Owns the loaded term collection and the lookup maps derived from it.
//! A load installs a fresh `Catalog` in one assignment, so readers either see
//! the previous catalog or the new one, never a mix.
//!
//! Until a load completes every query answers empty/absent. After a load in
//! which every source failed, the index is *loaded* with an empty catalog,
//! which `is_loaded()` distinguishes from never having tried.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::parser::parse_terms;
use super::source::{fetch_first, TermSource};
use super::term::{Category, Term};

// =============================================================================
// Catalog
// =============================================================================

/// Immutable snapshot of one load.
#[derive(Debug, Default)]
struct Catalog {
    terms: Vec<Term>,
    by_id: HashMap<String, usize>,
    /// Case-folded display name or alias -> term position. Last write wins.
    by_word: HashMap<String, usize>,
    /// Keys of `by_word` in first-insertion order.
    words: Vec<String>,
    /// Distinct categories in first-appearance order.
    categories: Vec<Category>,
}

impl Catalog {
    fn build(rows: Vec<Term>) -> Self {
        let mut catalog = Catalog::default();

        for term in rows {
            if catalog.by_id.contains_key(&term.id) {
                log::debug!("[Glossary] Duplicate id '{}' dropped", term.id);
                continue;
            }

            let idx = catalog.terms.len();
            catalog.by_id.insert(term.id.clone(), idx);

            for name in term.names() {
                let key = fold(name);
                if key.is_empty() {
                    continue;
                }
                if catalog.by_word.insert(key.clone(), idx).is_none() {
                    catalog.words.push(key);
                }
            }

            if !catalog.categories.contains(&term.category) {
                catalog.categories.push(term.category);
            }

            catalog.terms.push(term);
        }

        catalog
    }
}

fn fold(word: &str) -> String {
    word.trim().to_lowercase()
}

// =============================================================================
// Stats
// =============================================================================

/// Summary of the loaded catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GlossaryStats {
    pub loaded: bool,
    pub term_count: usize,
    pub word_count: usize,
    pub needs_review_count: usize,
    pub draft_count: usize,
    pub category_counts: HashMap<String, usize>,
}

// =============================================================================
// TermIndex
// =============================================================================

/// Glossary term index
///
/// # Example
/// ```ignore
/// let mut index = TermIndex::new();
/// index.load(&source, &config.sources).await;
/// let permit = index.find_by_word("PERMIT");
/// ```
#[derive(Debug, Default)]
pub struct TermIndex {
    catalog: Option<Catalog>,
    generation: u64,
    loaded_from: Option<String>,
}

impl TermIndex {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------- loading

    /// Load from the first candidate that answers. Returns the cached
    /// collection without fetching if already loaded.
    pub async fn load<S: TermSource>(&mut self, source: &S, candidates: &[String]) -> &[Term] {
        if self.is_loaded() {
            return self.terms();
        }

        let fetched = fetch_first(source, candidates).await;
        self.install_fetched(fetched, candidates.len());
        self.terms()
    }

    /// Install the outcome of `fetch_first`: the parsed body of the winning
    /// candidate, or an empty catalog when all `attempted` candidates failed.
    pub fn install_fetched(&mut self, fetched: Option<(String, String)>, attempted: usize) {
        match fetched {
            Some((location, raw)) => {
                self.install(parse_terms(&raw));
                log::info!("[Glossary] Loaded {} terms from {}", self.len(), location);
                self.loaded_from = Some(location);
            }
            None => {
                log::warn!("[Glossary] All {} sources failed, using empty glossary", attempted);
                self.install(Vec::new());
            }
        }
    }

    /// Parse raw CSV text and replace the catalog with it.
    pub fn load_from_str(&mut self, raw: &str) -> &[Term] {
        self.install(parse_terms(raw));
        self.terms()
    }

    /// Replace the catalog with `rows`.
    pub fn install(&mut self, rows: Vec<Term>) {
        self.catalog = Some(Catalog::build(rows));
        self.loaded_from = None;
        self.generation += 1;
    }

    /// Forget the catalog. The next load fetches again.
    pub fn clear_cache(&mut self) {
        self.catalog = None;
        self.loaded_from = None;
        self.generation += 1;
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    /// Bumped on every install and clear.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Location of the source the current catalog was fetched from.
    pub fn loaded_from(&self) -> Option<&str> {
        self.loaded_from.as_deref()
    }

    // ---------------------------------------------------------------- queries

    pub fn terms(&self) -> &[Term] {
        match &self.catalog {
            Some(c) => &c.terms,
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.terms().len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms().is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Term> {
        let catalog = self.catalog.as_ref()?;
        catalog.by_id.get(id).map(|&i| &catalog.terms[i])
    }

    /// Term whose display name or alias equals `word`, ignoring case.
    pub fn find_by_word(&self, word: &str) -> Option<&Term> {
        let catalog = self.catalog.as_ref()?;
        catalog.by_word.get(&fold(word)).map(|&i| &catalog.terms[i])
    }

    pub fn is_known_word(&self, word: &str) -> bool {
        self.find_by_word(word).is_some()
    }

    /// Terms whose name, any alias, or definition contains `query`
    /// (case-insensitive). A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Term> {
        let needle = fold(query);
        if needle.is_empty() {
            return Vec::new();
        }

        self.terms()
            .iter()
            .filter(|t| {
                t.names().any(|n| n.to_lowercase().contains(&needle))
                    || t.definition.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn by_category(&self, category: Category) -> Vec<&Term> {
        self.terms().iter().filter(|t| t.category == category).collect()
    }

    pub fn all_categories(&self) -> Vec<Category> {
        self.catalog
            .as_ref()
            .map(|c| c.categories.clone())
            .unwrap_or_default()
    }

    /// Every case-folded display name and alias.
    pub fn all_words(&self) -> Vec<&str> {
        match &self.catalog {
            Some(c) => c.words.iter().map(String::as_str).collect(),
            None => Vec::new(),
        }
    }

    /// Related terms of `id` that are loaded; dangling ids are skipped.
    pub fn related(&self, id: &str) -> Vec<&Term> {
        let Some(term) = self.get_by_id(id) else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        term.related_ids
            .iter()
            .filter(|rid| seen.insert(rid.as_str()))
            .filter_map(|rid| self.get_by_id(rid))
            .collect()
    }

    pub fn stats(&self, draft_marker: &str) -> GlossaryStats {
        let mut category_counts = HashMap::new();
        for term in self.terms() {
            *category_counts.entry(term.category.as_str().to_string()).or_insert(0) += 1;
        }

        GlossaryStats {
            loaded: self.is_loaded(),
            term_count: self.len(),
            word_count: self.catalog.as_ref().map(|c| c.words.len()).unwrap_or(0),
            needs_review_count: self.terms().iter().filter(|t| t.needs_review).count(),
            draft_count: self.terms().iter().filter(|t| t.is_draft(draft_marker)).count(),
            category_counts,
        }
    }
}
