//! Turns raw generator output into domain values, tolerant of noisy or
//! irregular model text. Every function here is total: malformed input
//! degrades to an empty candidate set, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;

use super::vocab::{DOMAIN_HINTS, STOPWORDS};

/// Hard cap on the rewritten description length.
pub const MAX_DESCRIPTION_WORDS: usize = 60;

/// Tags longer than this are truncated during normalization.
pub const MAX_TAG_CHARS: usize = 32;

const MIN_TAGS: usize = 3;
const MAX_TAGS: usize = 6;

static JSON_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[.*?\]").expect("valid regex"));
static NON_TAG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").expect("valid regex"));
static ALNUM_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9]+").expect("valid regex"));

/// Normalizes one candidate into the tag grammar: lowercase, word-chars and
/// single hyphens only, no leading/trailing hyphens, at most 32 chars.
/// Idempotent: normalizing an already-normalized tag is a no-op.
pub fn normalize_tag(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped = NON_TAG_CHARS.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUN.replace_all(stripped.trim(), "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");
    let truncated: String = collapsed.chars().take(MAX_TAG_CHARS).collect();
    truncated.trim_matches('-').to_string()
}

/// Splits raw generator text into tag candidates. Prefers a JSON-array-shaped
/// substring; otherwise falls back to newline/comma splitting with bullet and
/// quote stripping.
fn split_candidates(text: &str) -> Vec<String> {
    if let Some(found) = JSON_ARRAY.find(text) {
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(found.as_str()) {
            return items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.trim().to_string()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect();
        }
        // An array-looking span that fails to parse is treated as no match.
    }

    text.split(['\n', ','])
        .map(|part| {
            part.trim()
                .trim_matches(|c: char| matches!(c, '-' | '•' | '*' | '"' | '\'' | '[' | ']'))
                .trim()
                .to_string()
        })
        .filter(|part| !part.is_empty())
        .collect()
}

fn alnum_tokens(text: &str) -> impl Iterator<Item = &str> {
    ALNUM_TOKEN.find_iter(text).map(|m| m.as_str())
}

/// Extracts a 3..=6 tag list from raw generator text, augmented with domain
/// hints and backfilled from the task text when the generator output is thin.
pub fn extract_tags(raw_text: &str, title: &str, description: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for candidate in split_candidates(raw_text) {
        let tag = normalize_tag(&candidate);
        if tag.is_empty() || seen.contains(&tag) || STOPWORDS.contains(tag.as_str()) {
            continue;
        }
        seen.insert(tag.clone());
        tags.push(tag);
    }

    let text = format!("{} {}", title, description).to_lowercase();

    for hint in DOMAIN_HINTS {
        if text.contains(hint) && !seen.contains(*hint) {
            seen.insert(hint.to_string());
            tags.push(hint.to_string());
        }
    }

    // Backfill from the task text itself when the generator gave us too little.
    if tags.len() < MIN_TAGS {
        for token in alnum_tokens(&text) {
            let tag = normalize_tag(token);
            if tag.len() > 2 && !seen.contains(&tag) && !STOPWORDS.contains(tag.as_str()) {
                seen.insert(tag.clone());
                tags.push(tag);
            }
            if tags.len() >= 5 {
                break;
            }
        }
    }

    tags.truncate(MAX_TAGS);
    tags
}

/// Caps text at `max_words` whitespace-separated words, appending a single
/// ellipsis when truncated.
pub fn trim_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.trim().to_string();
    }
    let mut trimmed = words[..max_words].join(" ");
    trimmed.push('…');
    trimmed
}

/// Interprets raw generator text as a rewritten description.
pub fn extract_description(raw_text: &str) -> String {
    trim_words(raw_text, MAX_DESCRIPTION_WORDS)
}
