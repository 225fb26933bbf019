//! Frequency & Phrase Scorer — turns raw page text into a ranked candidate
//! list for the categorizer.
//!
//! Unigrams are counted over the normalized word list; two-word phrases are
//! detected by sentence-local adjacent-token scanning against the dictionary
//! sets. Dictionary-recognized candidates get a 3x score boost so domain
//! terms outrank incidental high-frequency words.

use std::collections::{HashMap, HashSet};

use crate::keywords::dictionary::{is_dictionary_term, is_stopword};
use crate::keywords::normalize::clean_text;
use crate::keywords::tokenize::{sentence_word_tokens, split_sentences, word_tokens};

/// Hard cap on categorizer input; bounds result size.
pub const MAX_CANDIDATES: usize = 50;

/// Tokens this short never qualify as keyword candidates.
const MIN_TOKEN_LEN: usize = 3;

/// Score multiplier for candidates that are exact dictionary terms.
const DICTIONARY_BOOST: u32 = 3;

/// Extracts the ranked keyword candidates from raw page text.
///
/// Returns at most [`MAX_CANDIDATES`] distinct candidates in descending
/// score order; ties keep first-seen order. An input that normalizes to
/// nothing yields an empty list, not an error.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned = clean_text(text);
    let words = word_tokens(&cleaned);

    // Unigram pass: drop short tokens and stopwords, count the rest.
    let filtered: Vec<&str> = words
        .into_iter()
        .filter(|w| w.len() >= MIN_TOKEN_LEN && !is_stopword(w))
        .collect();

    let mut word_count: HashMap<&str, u32> = HashMap::new();
    for &word in &filtered {
        *word_count.entry(word).or_insert(0) += 1;
    }

    // Phrase pass: adjacent token pairs within a sentence, kept only when the
    // pair is an exact dictionary term. Sentence scoping prevents phrases
    // spanning a sentence boundary.
    let mut phrases: Vec<String> = Vec::new();
    for sentence in split_sentences(text) {
        let tokens = sentence_word_tokens(sentence);
        for pair in tokens.windows(2) {
            let phrase = format!("{} {}", pair[0], pair[1]);
            if is_dictionary_term(&phrase) {
                phrases.push(phrase);
            }
        }
    }

    // Distinct candidates in first-seen order; this order is the stable
    // tie-break after the score sort.
    let mut candidates: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for candidate in filtered.iter().map(|w| w.to_string()).chain(phrases) {
        if seen.insert(candidate.clone()) {
            candidates.push(candidate);
        }
    }

    let mut scored: Vec<(String, u32)> = candidates
        .into_iter()
        .map(|candidate| {
            let mut score = word_count.get(candidate.as_str()).copied().unwrap_or(1);
            if is_dictionary_term(&candidate) {
                score *= DICTIONARY_BOOST;
            }
            (candidate, score)
        })
        .collect();

    // Vec::sort_by is stable, so equal scores keep first-seen order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored
        .into_iter()
        .take(MAX_CANDIDATES)
        .map(|(candidate, _)| candidate)
        .collect()
}
