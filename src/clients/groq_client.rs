use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::settings::AppSettings;
use crate::error::AppError;

// Groq API base URL (OpenAI-compatible)
const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// A chat prompt is always exactly one system message followed by one user
/// message; the struct makes any other shape unrepresentable.
#[derive(Debug, Clone)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

impl ChatPrompt {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: "system".to_string(),
                content: self.system.clone(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: self.user.clone(),
            },
        ]
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// The external text generator, reduced to its one capability: turn a prompt
/// into raw text, or fail. Callers treat the output as a hint, not a source
/// of truth.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &ChatPrompt,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, AppError>;
}

#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GroqClient {
    pub fn new(app_settings: &AppSettings) -> Self {
        Self {
            client: crate::utils::http_client::new_api_client(),
            api_key: app_settings.generator.groq_api_key.clone(),
            model: app_settings.generator.groq_model.clone(),
            base_url: GROQ_BASE_URL.to_string(),
        }
    }

    pub fn new_with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            client: crate::utils::http_client::new_api_client(),
            api_key,
            model,
            base_url,
        }
    }
}

#[async_trait]
impl TextGenerator for GroqClient {
    async fn generate(
        &self,
        prompt: &ChatPrompt,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, AppError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: prompt.messages(),
            temperature,
            max_tokens,
        };

        // Single attempt only; the 45s deadline comes from the shared client.
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::External(format!("Groq request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::External(format!(
                "Groq API error ({}): {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::External(format!("Groq deserialization failed: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::External("Groq response contained no completion choices".to_string())
            })?;

        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_client(base_url: String) -> GroqClient {
        GroqClient::new_with_base_url(
            "test-key".to_string(),
            "llama-3.1-8b-instant".to_string(),
            base_url,
        )
    }

    fn test_prompt() -> ChatPrompt {
        ChatPrompt::new("You are helpful.", "Say hi.")
    }

    #[test]
    fn prompt_is_system_then_user() {
        let messages = test_prompt().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
    }

    #[tokio::test]
    async fn returns_trimmed_first_choice_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices":[{"message":{"role":"assistant","content":"  hello there \n"}}]}"#,
            )
            .create_async()
            .await;

        let client = test_client(server.url());
        let text = client.generate(&test_prompt(), 120, 0.2).await.unwrap();

        mock.assert_async().await;
        assert_eq!(text, "hello there");
    }

    #[tokio::test]
    async fn non_success_status_is_external_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let client = test_client(server.url());
        let err = client.generate(&test_prompt(), 120, 0.2).await.unwrap_err();
        assert!(matches!(err, AppError::External(_)));
    }

    #[tokio::test]
    async fn malformed_body_is_external_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json at all")
            .create_async()
            .await;

        let client = test_client(server.url());
        let err = client.generate(&test_prompt(), 120, 0.2).await.unwrap_err();
        assert!(matches!(err, AppError::External(_)));
    }

    #[tokio::test]
    async fn empty_choices_is_external_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let err = client.generate(&test_prompt(), 120, 0.2).await.unwrap_err();
        assert!(matches!(err, AppError::External(_)));
    }
}
