//! Deterministic, network-free replacements for generator output. Pure
//! functions of the task input; the orchestrator relies on them never
//! failing.

use std::collections::HashSet;

use super::interpreter::{normalize_tag, trim_words, MAX_DESCRIPTION_WORDS};
use super::vocab::{DOMAIN_HINTS, STOPWORDS};
use once_cell::sync::Lazy;
use regex::Regex;

static ALNUM_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9]+").expect("valid regex"));

/// Rule-based tags from the task text alone: meaningful tokens first (cap 5),
/// then any domain hints present, capped at 6 overall.
pub fn heuristic_tags(title: &str, description: &str) -> Vec<String> {
    let text = format!("{} {}", title, description).to_lowercase();

    let mut tags: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for token in ALNUM_TOKEN.find_iter(&text).map(|m| m.as_str()) {
        if token.len() <= 2 || STOPWORDS.contains(token) {
            continue;
        }
        let tag = normalize_tag(token);
        if !tag.is_empty() && !seen.contains(&tag) {
            seen.insert(tag.clone());
            tags.push(tag);
        }
        if tags.len() >= 5 {
            break;
        }
    }

    for hint in DOMAIN_HINTS {
        if text.contains(hint) && !seen.contains(*hint) {
            seen.insert(hint.to_string());
            tags.push(hint.to_string());
        }
    }

    tags.truncate(6);
    tags
}

/// "{title}: {description}", trimmed to the shared word cap.
pub fn fallback_description(title: &str, description: &str) -> String {
    let base = format!("{}: {}", title, description);
    trim_words(base.trim(), MAX_DESCRIPTION_WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn picks_meaningful_tokens_in_first_seen_order() {
        let tags = heuristic_tags(
            "Add login",
            "Implement Google OAuth and session storage in frontend",
        );
        assert_eq!(
            tags,
            vec!["login", "google", "oauth", "session", "storage", "frontend"]
        );
    }

    #[test]
    fn appends_domain_hints_after_token_picks() {
        let tags = heuristic_tags("Expose metrics", "publish them from the backend api");
        assert_eq!(
            tags,
            vec!["expose", "metrics", "publish", "them", "backend", "api"]
        );
    }

    #[test]
    fn short_input_yields_short_tag_list() {
        let tags = heuristic_tags("Fix bug", "");
        assert_eq!(tags, vec!["fix", "bug"]);
    }

    #[test]
    fn empty_input_yields_empty_tag_list() {
        assert_eq!(heuristic_tags("", ""), Vec::<String>::new());
    }

    #[test]
    fn is_deterministic() {
        let a = heuristic_tags("Refactor parser", "split lexer and grammar modules");
        let b = heuristic_tags("Refactor parser", "split lexer and grammar modules");
        assert_eq!(a, b);
    }

    #[test]
    fn never_exceeds_six_tags() {
        let tags = heuristic_tags(
            "Ship backend api server",
            "database oauth groq actix endpoints frontend openai workers queue cache",
        );
        assert!(tags.len() <= 6, "got {:?}", tags);
    }

    #[test]
    fn description_joins_title_and_body() {
        assert_eq!(
            fallback_description("Fix bug", "crash on empty payload"),
            "Fix bug: crash on empty payload"
        );
    }

    #[test]
    fn description_with_empty_body_keeps_title() {
        assert_eq!(fallback_description("Fix bug", ""), "Fix bug:");
    }

    #[test]
    fn long_description_is_word_capped_with_ellipsis() {
        let body = "word ".repeat(100);
        let improved = fallback_description("Title", &body);
        assert_eq!(improved.split_whitespace().count(), 60);
        assert!(improved.ends_with('…'));
    }
}
