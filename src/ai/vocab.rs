use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Function words plus task-instruction verbs ("implement", "add", ...) that
/// carry no tagging value and are excluded from heuristic extraction.
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "for", "and", "or", "of", "to", "in", "on", "with", "by", "from", "is",
        "are", "be", "been", "being", "do", "does", "did", "done", "will", "would", "should",
        "could", "can", "implement", "add", "make", "create", "build", "setup", "use", "using",
        "via", "about", "into", "over", "under", "at", "as",
    ]
    .into_iter()
    .collect()
});

/// Technology/platform keywords always considered relevant when they appear
/// anywhere in the input text. Scanned in this order, so hint tags are
/// appended deterministically.
pub const DOMAIN_HINTS: &[&str] = &[
    "backend",
    "frontend",
    "api",
    "server",
    "database",
    "oauth",
    "openai",
    "groq",
    "actix",
    "endpoints",
];
