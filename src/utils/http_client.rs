use reqwest::Client;
use std::time::Duration;

/// Total per-request deadline for chat-completion calls. A call that has not
/// completed by then counts as failed; it is never retried.
pub const API_TIMEOUT_SECS: u64 = 45;

pub fn new_api_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(API_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to build HTTP client")
}
