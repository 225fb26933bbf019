//! Text Normalizer — lowercases, strips punctuation, collapses whitespace.

/// Normalizes raw page text for word-frequency counting: lowercase every
/// character, replace anything that is not a word character or whitespace
/// with a space, collapse whitespace runs, trim the ends.
///
/// Total function: empty input yields an empty output, which callers treat
/// as "no content".
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let replaced: String = lowered
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
