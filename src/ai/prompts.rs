//! Prompt construction for the two enrichment operations. Wording here is a
//! tuning knob, not a contract: tests drive the interpreter with fixed raw
//! text and never assert on prompt content.

use crate::clients::groq_client::ChatPrompt;

pub const MAX_COMPLETION_TOKENS: u32 = 120;
pub const COMPLETION_TEMPERATURE: f32 = 0.2;

pub fn autotag_prompt(title: &str, description: &str) -> ChatPrompt {
    let system = "You generate concise, relevant project/task tags.\n\
                  Rules:\n\
                  - Return ONLY a JSON array of 3-6 tags (strings).\n\
                  - lowercase, kebab-case; no spaces or punctuation.\n\
                  - Prefer domain/noun tags (frameworks, features, components, areas).\n\
                  - EXCLUDE verbs (e.g., implement, add, create), prepositions, and stopwords.";

    // One-shot example pair to anchor the output format.
    let user = format!(
        "Title: Add login\n\
         Description: Implement Google OAuth and session storage in frontend\n\
         Return tags.\n\n\
         (Above is an example; now do the same for the following.)\n\n\
         Title: {}\n\
         Description: {}\n\
         Return tags now.",
        title, description
    );

    ChatPrompt::new(system, user)
}

pub fn describe_prompt(title: &str, description: &str) -> ChatPrompt {
    let system = "You improve task descriptions. \
                  Return ONE concise paragraph of 30-60 words. \
                  Focus on the objective, a brief approach, and the key outcome. \
                  Avoid headers, lists, bullets, and filler. \
                  No acceptance criteria. No second paragraph.";

    let user = format!(
        "Title: {}\n\n\
         Current description:\n{}\n\n\
         Rewrite as one tight paragraph (30-60 words), maximizing clarity and minimizing fluff.",
        title, description
    );

    ChatPrompt::new(system, user)
}
