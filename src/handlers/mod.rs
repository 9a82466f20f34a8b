pub mod ai_handlers;
pub mod health;
