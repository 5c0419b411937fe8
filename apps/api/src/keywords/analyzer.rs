//! Language analysis seam for keyword extraction.
//!
//! `RuleBasedAnalyzer` is a lightweight, deterministic analyzer built on word
//! lists and capitalisation:
//! - proper-noun spans are runs of capitalised words on one line, joined through
//!   "of" ("Bank of America"), with leading function words and verbs trimmed
//! - spans are classified as organizations (suffix or keyword), places
//!   (gazetteer) or people (given name or honorific)
//! - noun phrases are proper-noun spans plus runs of lowercase content words,
//!   normalised to lowercase and ranked by frequency

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

use super::lexicon::{
    ADVERB_SUFFIXES, CONNECTORS, GIVEN_NAMES, HONORIFICS, KNOWN_ORGANIZATIONS, ORG_KEYWORDS,
    ORG_SUFFIXES, PLACES, STOPWORDS, VERBS,
};

/// Longest noun phrase kept; longer runs keep their trailing words.
const MAX_PHRASE_WORDS: usize = 4;
/// Longest span still considered a personal name.
const MAX_PERSON_WORDS: usize = 3;

/// Output of a language analyzer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    /// Normalised noun phrases, most frequent first.
    pub noun_phrases: Vec<String>,
    pub people: Vec<String>,
    pub organizations: Vec<String>,
    pub places: Vec<String>,
}

pub trait LanguageAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Analysis;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedAnalyzer;

impl LanguageAnalyzer for RuleBasedAnalyzer {
    fn analyze(&self, text: &str) -> Analysis {
        let tokens = tokenize(text);
        let spans = proper_spans(&tokens);

        let mut analysis = Analysis {
            noun_phrases: rank_by_frequency(noun_phrases(&tokens, &spans)),
            ..Analysis::default()
        };

        let mut seen: HashSet<(EntityKind, String)> = HashSet::new();
        for span in &spans {
            let Some(kind) = classify(span, &tokens) else {
                continue;
            };
            let surface = span.surface(&tokens);
            if !seen.insert((kind, surface.clone())) {
                continue;
            }
            match kind {
                EntityKind::Person => analysis.people.push(surface),
                EntityKind::Organization => analysis.organizations.push(surface),
                EntityKind::Place => analysis.places.push(surface),
            }
        }

        analysis
    }
}

#[derive(Debug)]
struct Token<'a> {
    text: &'a str,
    lower: String,
    /// Punctuation or a line break separates this token from the previous one.
    break_before: bool,
    sentence_start: bool,
}

impl Token<'_> {
    fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum EntityKind {
    Person,
    Organization,
    Place,
}

/// Half-open token range of a proper-noun span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    fn tokens<'t, 'a>(&self, tokens: &'t [Token<'a>]) -> &'t [Token<'a>] {
        &tokens[self.start..self.end]
    }

    fn surface(&self, tokens: &[Token<'_>]) -> String {
        self.tokens(tokens)
            .iter()
            .map(|t| t.text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn normalized(&self, tokens: &[Token<'_>]) -> String {
        let words: Vec<&str> = self.tokens(tokens).iter().map(|t| t.lower.as_str()).collect();
        words[words.len().saturating_sub(MAX_PHRASE_WORDS)..].join(" ")
    }
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\p{L}[\p{L}\p{N}]*(?:[.'’&-][\p{L}\p{N}]+)*[+#]*")
            .expect("token pattern is a valid regex")
    })
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut last_end = 0;

    for m in token_pattern().find_iter(text) {
        let gap = &text[last_end..m.start()];
        last_end = m.end();

        let sentence_start = tokens.is_empty() || gap.contains(['.', '!', '?', '\n']);
        let break_before = sentence_start || gap.chars().any(|c| c != ' ' && c != '\t');

        let raw = m.as_str();
        let text = raw
            .strip_suffix("'s")
            .or_else(|| raw.strip_suffix("’s"))
            .unwrap_or(raw);

        tokens.push(Token {
            text,
            lower: text.to_lowercase(),
            break_before,
            sentence_start,
        });
    }

    tokens
}

fn is_function_word(lower: &str) -> bool {
    STOPWORDS.contains(&lower) || HONORIFICS.contains(&lower)
}

fn is_verb(lower: &str) -> bool {
    VERBS.contains(&lower)
}

fn is_adverb(lower: &str) -> bool {
    lower.chars().count() > 6 && ADVERB_SUFFIXES.iter().any(|s| lower.ends_with(s))
}

fn is_participle(lower: &str) -> bool {
    lower.chars().count() > 4 && (lower.ends_with("ing") || lower.ends_with("ed"))
}

fn is_content(lower: &str) -> bool {
    !is_function_word(lower) && !is_verb(lower) && !is_adverb(lower)
}

fn can_start_entity(token: &Token<'_>) -> bool {
    let lower = token.lower.as_str();
    if is_function_word(lower) || is_verb(lower) {
        return false;
    }
    !(token.sentence_start && is_participle(lower))
}

fn proper_spans(tokens: &[Token<'_>]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if !tokens[i].is_capitalized() {
            i += 1;
            continue;
        }

        let mut end = i + 1;
        while end < tokens.len() && !tokens[end].break_before {
            if tokens[end].is_capitalized() {
                end += 1;
            } else if CONNECTORS.contains(&tokens[end].lower.as_str())
                && tokens
                    .get(end + 1)
                    .is_some_and(|next| !next.break_before && next.is_capitalized())
            {
                end += 2;
            } else {
                break;
            }
        }

        let start = (i..end)
            .find(|&idx| can_start_entity(&tokens[idx]))
            .unwrap_or(end);
        if start < end {
            spans.push(Span { start, end });
        }
        i = end;
    }

    spans
}

fn classify(span: &Span, tokens: &[Token<'_>]) -> Option<EntityKind> {
    let words: Vec<&str> = span.tokens(tokens).iter().map(|t| t.lower.as_str()).collect();
    let first = *words.first()?;
    let last = *words.last()?;
    let phrase = words.join(" ");

    if ORG_SUFFIXES.contains(&last)
        || words.iter().any(|w| ORG_KEYWORDS.contains(w))
        || KNOWN_ORGANIZATIONS.contains(&phrase.as_str())
    {
        return Some(EntityKind::Organization);
    }

    if PLACES.contains(&phrase.as_str()) {
        return Some(EntityKind::Place);
    }

    let after_honorific = span
        .start
        .checked_sub(1)
        .is_some_and(|prev| HONORIFICS.contains(&tokens[prev].lower.as_str()));
    let name_shaped =
        words.len() <= MAX_PERSON_WORDS && !words.iter().any(|w| CONNECTORS.contains(w));
    if name_shaped && (GIVEN_NAMES.contains(&first) || after_honorific) {
        return Some(EntityKind::Person);
    }

    None
}

/// Lowercase content-word runs plus every proper-noun span, in text order.
fn noun_phrases(tokens: &[Token<'_>], spans: &[Span]) -> Vec<String> {
    let mut phrases = Vec::new();
    let mut run: Vec<&str> = Vec::new();
    // A leading participle right after a function word is part of the phrase
    // ("in distributed systems"); elsewhere it is read as a verb.
    let mut keep_leading_participle = false;
    let mut spans = spans.iter().peekable();
    let mut i = 0;

    while i < tokens.len() {
        if let Some(span) = spans.next_if(|s| s.start == i) {
            flush_run(&mut run, keep_leading_participle, &mut phrases);
            phrases.push(span.normalized(tokens));
            i = span.end;
            continue;
        }

        let token = &tokens[i];
        if token.break_before {
            flush_run(&mut run, keep_leading_participle, &mut phrases);
        }

        if is_content(&token.lower) {
            if run.is_empty() {
                keep_leading_participle = !token.break_before
                    && i > 0
                    && is_function_word(&tokens[i - 1].lower);
            }
            run.push(token.lower.as_str());
        } else {
            flush_run(&mut run, keep_leading_participle, &mut phrases);
        }
        i += 1;
    }
    flush_run(&mut run, keep_leading_participle, &mut phrases);

    phrases
}

fn flush_run(run: &mut Vec<&str>, keep_leading_participle: bool, phrases: &mut Vec<String>) {
    let mut words: &[&str] = &run[..];
    if !keep_leading_participle {
        while words.len() > 1 && is_participle(words[0]) {
            words = &words[1..];
        }
    }

    let keep = match words {
        [] => false,
        [only] => !(is_participle(only) && only.ends_with("ed")),
        _ => true,
    };
    if keep {
        let tail = &words[words.len().saturating_sub(MAX_PHRASE_WORDS)..];
        phrases.push(tail.join(" "));
    }

    run.clear();
}

/// Most frequent first; ties keep first-occurrence order.
fn rank_by_frequency(phrases: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (idx, phrase) in phrases.into_iter().enumerate() {
        counts.entry(phrase).or_insert((0, idx)).0 += 1;
    }

    let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });
    ranked.into_iter().map(|(phrase, _)| phrase).collect()
}
