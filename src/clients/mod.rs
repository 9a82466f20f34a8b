pub mod groq_client;

pub use groq_client::{ChatMessage, ChatPrompt, GroqClient, TextGenerator};
