//! Keyword extraction: turns resume text into a short list of search terms.
//!
//! Linguistic analysis is delegated to a `LanguageAnalyzer`. This module owns the
//! ranking policy only:
//! 1. frequency-ranked noun phrases, then people, organizations, places
//! 2. dedup, keeping the first occurrence (case-sensitive)
//! 3. drop entries of 3 characters or fewer
//! 4. keep the first `MAX_KEYWORDS`

pub mod analyzer;
mod lexicon;

use std::collections::HashSet;
use std::sync::Arc;

pub use analyzer::{Analysis, LanguageAnalyzer, RuleBasedAnalyzer};

pub const MAX_KEYWORDS: usize = 15;
/// Entries must be strictly longer than this many characters.
pub const MIN_KEYWORD_CHARS: usize = 3;

#[derive(Clone)]
pub struct KeywordExtractor {
    analyzer: Arc<dyn LanguageAnalyzer>,
}

impl KeywordExtractor {
    pub fn new(analyzer: Arc<dyn LanguageAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Empty or whitespace-only text yields no keywords.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        rank_keywords(self.analyzer.analyze(text))
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(Arc::new(RuleBasedAnalyzer))
    }
}

pub fn rank_keywords(analysis: Analysis) -> Vec<String> {
    let Analysis {
        noun_phrases,
        people,
        organizations,
        places,
    } = analysis;

    let mut seen = HashSet::new();
    noun_phrases
        .into_iter()
        .chain(people)
        .chain(organizations)
        .chain(places)
        .filter(|candidate| seen.insert(candidate.clone()))
        .filter(|candidate| candidate.chars().count() > MIN_KEYWORD_CHARS)
        .take(MAX_KEYWORDS)
        .collect()
}
