//! Task enrichment core: one generator call, one interpretation pass, and a
//! deterministic fallback when the remote path cannot be trusted. Generation
//! failures never reach the caller.

pub mod fallback;
pub mod interpreter;
pub mod prompts;
pub mod vocab;

use crate::clients::groq_client::{ChatPrompt, TextGenerator};

/// The one reusable shape in this service: generate, interpret, else fall
/// back. `parser` must be total; only the generator can fail, and its error
/// is logged and swallowed here, exactly once.
pub async fn run_with_fallback<T, P, F>(
    generator: &dyn TextGenerator,
    prompt: ChatPrompt,
    parser: P,
    fallback: F,
) -> T
where
    P: FnOnce(&str) -> T,
    F: FnOnce() -> T,
{
    match generator
        .generate(
            &prompt,
            prompts::MAX_COMPLETION_TOKENS,
            prompts::COMPLETION_TEMPERATURE,
        )
        .await
    {
        Ok(text) => parser(&text),
        Err(e) => {
            log::warn!("text generation failed, using deterministic fallback: {}", e);
            fallback()
        }
    }
}

/// Produces 3..=6 normalized tags for a task.
pub async fn autotag(generator: &dyn TextGenerator, title: &str, description: &str) -> Vec<String> {
    let prompt = prompts::autotag_prompt(title, description);
    run_with_fallback(
        generator,
        prompt,
        |text| interpreter::extract_tags(text, title, description),
        || fallback::heuristic_tags(title, description),
    )
    .await
}

/// Produces a rewritten task description of at most 60 words.
pub async fn describe(generator: &dyn TextGenerator, title: &str, description: &str) -> String {
    let prompt = prompts::describe_prompt(title, description);
    run_with_fallback(
        generator,
        prompt,
        interpreter::extract_description,
        || fallback::fallback_description(title, description),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    struct CannedGenerator(String);

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(
            &self,
            _prompt: &ChatPrompt,
            _max_tokens: u32,
            _temperature: f32,
        ) -> Result<String, AppError> {
            Ok(self.0.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(
            &self,
            _prompt: &ChatPrompt,
            _max_tokens: u32,
            _temperature: f32,
        ) -> Result<String, AppError> {
            Err(AppError::External("simulated timeout".to_string()))
        }
    }

    #[tokio::test]
    async fn autotag_uses_interpreted_generator_output() {
        let generator =
            CannedGenerator(r#"["auth","oauth","google","frontend","session"]"#.to_string());
        let tags = autotag(
            &generator,
            "Add login",
            "Implement Google OAuth and session storage in frontend",
        )
        .await;
        assert_eq!(tags, vec!["auth", "oauth", "google", "frontend", "session"]);
    }

    #[tokio::test]
    async fn autotag_failure_equals_direct_fallback() {
        let tags = autotag(&FailingGenerator, "Fix bug", "").await;
        assert_eq!(tags, fallback::heuristic_tags("Fix bug", ""));
        assert_eq!(tags, vec!["fix", "bug"]);
    }

    #[tokio::test]
    async fn describe_trims_generator_output() {
        let long: Vec<String> = (0..80).map(|i| format!("w{}", i)).collect();
        let generator = CannedGenerator(long.join(" "));
        let improved = describe(&generator, "Title", "body").await;
        assert_eq!(improved.split_whitespace().count(), 60);
        assert!(improved.ends_with('…'));
    }

    #[tokio::test]
    async fn describe_failure_equals_direct_fallback() {
        let improved = describe(&FailingGenerator, "Fix bug", "crash on empty payload").await;
        assert_eq!(
            improved,
            fallback::fallback_description("Fix bug", "crash on empty payload")
        );
    }

    #[tokio::test]
    async fn empty_input_never_panics() {
        let tags = autotag(&FailingGenerator, "", "").await;
        assert!(tags.is_empty());
        let improved = describe(&FailingGenerator, "", "").await;
        assert_eq!(improved, ":");
    }
}
