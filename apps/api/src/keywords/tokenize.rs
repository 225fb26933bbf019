//! Tokenizer/Segmenter — two independent views over the same source text.
//!
//! The flat word list (over normalized text) feeds frequency counting; the
//! sentence-scoped token lists (over the original text) bound phrase
//! detection so the last word of one sentence is never joined with the first
//! word of the next.

/// Splits normalized text into its word tokens.
pub fn word_tokens(normalized: &str) -> Vec<&str> {
    normalized.split(' ').filter(|w| !w.is_empty()).collect()
}

/// Segments raw (unnormalized) text into sentences.
///
/// A run of `.`/`!`/`?` ends a sentence when it is followed by whitespace
/// and an uppercase or numeric character, or by end of input. The
/// capitalization cue keeps in-word periods ("node.js") from splitting a
/// sentence apart.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;

    let mut i = 0;
    while i < chars.len() {
        if matches!(chars[i].1, '.' | '!' | '?') {
            // swallow the whole terminator run ("..." or "?!")
            let mut j = i + 1;
            while j < chars.len() && matches!(chars[j].1, '.' | '!' | '?') {
                j += 1;
            }
            let mut k = j;
            while k < chars.len() && chars[k].1.is_whitespace() {
                k += 1;
            }
            let at_end = k >= chars.len();
            let next_starts_sentence =
                !at_end && k > j && (chars[k].1.is_uppercase() || chars[k].1.is_numeric());
            if at_end || next_starts_sentence {
                let end = chars.get(j).map_or(text.len(), |&(pos, _)| pos);
                let sentence = text[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                start = end;
                i = k;
                continue;
            }
        }
        i += 1;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// Tokenizes one sentence into lowercase word tokens by splitting on
/// non-alphanumeric characters. A sentence that strips to nothing simply
/// yields an empty list; that is not an error.
pub fn sentence_word_tokens(sentence: &str) -> Vec<String> {
    sentence
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
