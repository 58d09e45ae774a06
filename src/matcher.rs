//! TextMatcher: Glossary Term Highlighting in Free Text
//!
//! Splits text into literal and term segments using one case-insensitive
//! regex alternation over the whole vocabulary, each word wrapped in `\b`
//! anchors so terms only match as whole words.
//!
//! **Precedence**: the regex engine is leftmost-first, so among alternatives
//! that match at the same position the earliest in the alternation wins.
//! Words are ordered by descending character length, which makes
//! "building permit" win over "permit" at the same start. Equal-length words
//! are ordered lexicographically; two distinct equal-length words can only
//! both match at one position if they case-fold to the same text, so this
//! order never changes which span is matched.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::GlossaryError;
use crate::glossary::{Term, TermIndex};

/// A contiguous span of scanned text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    Literal { text: String },
    Term { text: String, term: Term },
}

impl Segment {
    /// The original input text covered by this segment.
    pub fn text(&self) -> &str {
        match self {
            Segment::Literal { text } | Segment::Term { text, .. } => text,
        }
    }

    pub fn term(&self) -> Option<&Term> {
        match self {
            Segment::Term { term, .. } => Some(term),
            Segment::Literal { .. } => None,
        }
    }

    fn literal(text: &str) -> Self {
        Segment::Literal { text: text.to_string() }
    }
}

/// Vocabulary matcher built from a `TermIndex`
#[derive(Debug, Clone)]
pub struct TextMatcher {
    /// `None` when the vocabulary is empty.
    pattern: Option<Regex>,
    word_count: usize,
}

impl TextMatcher {
    /// Matcher that never matches.
    pub fn empty() -> Self {
        Self { pattern: None, word_count: 0 }
    }

    /// Compile the alternation for every word the index knows.
    pub fn from_index(index: &TermIndex) -> Result<Self, GlossaryError> {
        Self::from_words(index.all_words())
    }

    pub fn from_words<I, S>(words: I) -> Result<Self, GlossaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_by(|a, b| {
            b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b))
        });
        words.dedup();

        if words.is_empty() {
            return Ok(Self::empty());
        }

        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            pattern: Some(pattern),
            word_count: words.len(),
        })
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Partition `text` into segments whose concatenation is `text`.
    ///
    /// Matched words are resolved through `index`; a word the index cannot
    /// resolve is kept as literal text.
    pub fn segment(&self, text: &str, index: &TermIndex) -> Vec<Segment> {
        let pattern = match &self.pattern {
            Some(p) => p,
            None => return vec![Segment::literal(text)],
        };

        let mut segments = Vec::new();
        let mut last_end = 0;

        for mat in pattern.find_iter(text) {
            if mat.start() > last_end {
                segments.push(Segment::literal(&text[last_end..mat.start()]));
            }

            match index.find_by_word(mat.as_str()) {
                Some(term) => segments.push(Segment::Term {
                    text: mat.as_str().to_string(),
                    term: term.clone(),
                }),
                None => {
                    log::debug!("[TextMatcher] '{}' matched but is not indexed", mat.as_str());
                    segments.push(Segment::literal(mat.as_str()));
                }
            }

            last_end = mat.end();
        }

        if last_end < text.len() || segments.is_empty() {
            segments.push(Segment::literal(&text[last_end..]));
        }

        segments
    }
}
