//! Categorizer — assigns ranked candidates to the three display categories.
//!
//! Assignment is an ordered rule chain, first match wins: exact dictionary
//! lookups (technical → soft → tools), then a substring heuristic fallback.
//! The fallback is deliberately imprecise ("plausible enough"); any word
//! containing "lead" lands in soft skills, and that is accepted behavior.

use serde::Serialize;

use crate::keywords::dictionary::{
    is_stopword, SOFT_SKILLS, TECHNICAL_SKILLS, TOOLS_TECHNOLOGIES,
};

/// Maximum entries kept per category.
pub const MAX_PER_CATEGORY: usize = 15;

/// The categorized extraction result returned to callers. Each array is
/// ordered by descending candidate score and capped at [`MAX_PER_CATEGORY`];
/// a normalized term appears at most once across all three arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordResult {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tools_and_technologies: Vec<String>,
}

/// Buckets ranked candidates into the three categories.
///
/// Candidates must arrive in descending score order; prefix truncation to
/// [`MAX_PER_CATEGORY`] then keeps the highest-ranked entries.
pub fn categorize_keywords(keywords: &[String]) -> KeywordResult {
    let mut result = KeywordResult::default();
    let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();

    for keyword in keywords {
        let normalized = keyword.to_lowercase();

        // Global dedup across all three categories.
        if !seen.insert(normalized.clone()) {
            continue;
        }

        let display = display_form(keyword);

        if TECHNICAL_SKILLS.contains(normalized.as_str()) {
            result.technical_skills.push(display);
        } else if SOFT_SKILLS.contains(normalized.as_str()) {
            result.soft_skills.push(display);
        } else if TOOLS_TECHNOLOGIES.contains(normalized.as_str()) {
            result.tools_and_technologies.push(display);
        } else if contains_any(&normalized, &["develop", "program", "code"]) {
            result.technical_skills.push(display);
        } else if contains_any(&normalized, &["manage", "lead", "communicate"]) {
            result.soft_skills.push(display);
        } else if normalized.len() > 2 && !is_stopword(&normalized) {
            // Catch-all bucket for unrecognized-but-plausible terms.
            result.tools_and_technologies.push(display);
        }
        // else: discard
    }

    result.technical_skills.truncate(MAX_PER_CATEGORY);
    result.soft_skills.truncate(MAX_PER_CATEGORY);
    result.tools_and_technologies.truncate(MAX_PER_CATEGORY);

    result
}

fn contains_any(term: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| term.contains(n))
}

/// Display form shown to the end user: first character uppercased, remainder
/// unchanged.
fn display_form(keyword: &str) -> String {
    let mut chars = keyword.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_dictionary_terms_land_in_their_category() {
        let result = categorize_keywords(&kw(&["react", "communication", "docker"]));
        assert_eq!(result.technical_skills, vec!["React"]);
        assert_eq!(result.soft_skills, vec!["Communication"]);
        assert_eq!(result.tools_and_technologies, vec!["Docker"]);
    }

    #[test]
    fn test_fallback_substring_heuristics() {
        let result = categorize_keywords(&kw(&["developer", "management", "whiteboard"]));
        // "developer" contains "develop", "management" contains "manage"
        assert_eq!(result.technical_skills, vec!["Developer"]);
        assert_eq!(result.soft_skills, vec!["Management"]);
        // unrecognized-but-plausible term falls through to tools
        assert_eq!(result.tools_and_technologies, vec!["Whiteboard"]);
    }

    #[test]
    fn test_fallback_imprecision_preserved() {
        // Any word containing "lead" buckets as a soft skill; this
        // misclassification is intentional behavior.
        let result = categorize_keywords(&kw(&["leaded"]));
        assert_eq!(result.soft_skills, vec!["Leaded"]);
    }

    #[test]
    fn test_dedup_across_categories() {
        let result = categorize_keywords(&kw(&["react", "React", "REACT"]));
        let total = result.technical_skills.len()
            + result.soft_skills.len()
            + result.tools_and_technologies.len();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_dictionary_lookup_beats_fallback() {
        // "project management" is a soft-skill dictionary term even though it
        // contains "manage"; exact lookup runs first, same outcome either way,
        // but "coding" (not a dict term) must hit the technical fallback.
        let result = categorize_keywords(&kw(&["project management", "coding"]));
        assert_eq!(result.soft_skills, vec!["Project management"]);
        assert_eq!(result.technical_skills, vec!["Coding"]);
    }

    #[test]
    fn test_category_arrays_capped_at_fifteen() {
        let many: Vec<String> = (0..30).map(|i| format!("gadget{i}")).collect();
        let result = categorize_keywords(&many);
        assert_eq!(result.tools_and_technologies.len(), MAX_PER_CATEGORY);
        // prefix truncation keeps the highest-ranked (earliest) entries
        assert_eq!(result.tools_and_technologies[0], "Gadget0");
    }

    #[test]
    fn test_display_form_capitalizes_first_char_only() {
        let result = categorize_keywords(&kw(&["unit testing"]));
        assert_eq!(result.technical_skills, vec!["Unit testing"]);
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let result = categorize_keywords(&[]);
        assert_eq!(result, KeywordResult::default());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(KeywordResult::default()).unwrap();
        assert!(json.get("technicalSkills").is_some());
        assert!(json.get("softSkills").is_some());
        assert!(json.get("toolsAndTechnologies").is_some());
    }
}
