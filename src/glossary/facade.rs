//! Glossary - index + matcher composed behind one owner
//!
//! Keeps the `TextMatcher` in step with the `TermIndex`: whenever the index
//! installs or clears a catalog the matcher is rebuilt from the new
//! vocabulary, so segmentation never runs against a stale pattern.

use super::config::GlossaryConfig;
use super::index::{GlossaryStats, TermIndex};
use super::source::TermSource;
use super::term::Term;
use crate::matcher::{Segment, TextMatcher};

pub struct Glossary {
    config: GlossaryConfig,
    index: TermIndex,
    matcher: TextMatcher,
    /// Index generation the matcher was built for.
    matcher_generation: u64,
}

impl Default for Glossary {
    fn default() -> Self {
        Self::new(GlossaryConfig::default())
    }
}

impl Glossary {
    pub fn new(config: GlossaryConfig) -> Self {
        let index = TermIndex::new();
        let matcher_generation = index.generation();
        Self {
            config,
            index,
            matcher: TextMatcher::empty(),
            matcher_generation,
        }
    }

    pub fn config(&self) -> &GlossaryConfig {
        &self.config
    }

    pub fn index(&self) -> &TermIndex {
        &self.index
    }

    /// Load from the configured candidates (no-op when already loaded).
    pub async fn load<S: TermSource>(&mut self, source: &S) -> &[Term] {
        self.index.load(source, &self.config.sources).await;
        self.refresh_matcher();
        self.index.terms()
    }

    /// Replace the catalog with already-fetched CSV text.
    pub fn load_from_str(&mut self, raw: &str) -> &[Term] {
        self.index.load_from_str(raw);
        self.refresh_matcher();
        self.index.terms()
    }

    /// Install the outcome of a fetch performed outside this value.
    pub fn install_fetched(&mut self, fetched: Option<(String, String)>) {
        let attempted = self.config.sources.len();
        self.index.install_fetched(fetched, attempted);
        self.refresh_matcher();
    }

    pub fn clear_cache(&mut self) {
        self.index.clear_cache();
        self.refresh_matcher();
    }

    fn refresh_matcher(&mut self) {
        if self.matcher_generation == self.index.generation() {
            return;
        }

        self.matcher = match TextMatcher::from_index(&self.index) {
            Ok(matcher) => matcher,
            Err(e) => {
                log::warn!("[Glossary] {}; highlighting disabled", e);
                TextMatcher::empty()
            }
        };
        self.matcher_generation = self.index.generation();
    }

    /// Split `text` into literal and term segments.
    pub fn segment(&self, text: &str) -> Vec<Segment> {
        self.matcher.segment(text, &self.index)
    }

    /// Distinct terms mentioned in `text`, in first-mention order.
    pub fn mentions(&self, text: &str) -> Vec<Term> {
        let mut terms: Vec<Term> = Vec::new();
        for segment in self.segment(text) {
            if let Segment::Term { term, .. } = segment {
                if !terms.iter().any(|t| t.id == term.id) {
                    terms.push(term);
                }
            }
        }
        terms
    }

    /// Presentation text for a term's definition (draft marker removed).
    pub fn display_definition<'a>(&self, term: &'a Term) -> &'a str {
        term.display_definition(&self.config.draft_marker)
    }

    pub fn stats(&self) -> GlossaryStats {
        self.index.stats(&self.config.draft_marker)
    }
}
