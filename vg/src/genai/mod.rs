//! GenAI client module
//!
//! Wraps the hosted Gemini generation service behind a small trait with
//! three operations: structured itinerary generation, web-grounded
//! search, and image generation. The adapter is stateless between calls;
//! every call is independent.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

mod error;
mod gemini;
mod types;

pub use error::GenAiError;
pub use gemini::GeminiClient;
pub use types::{GeneratedImage, SOURCE_FALLBACK_TITLE, SearchResult, SourceRef};

use crate::config::GenAiConfig;
use crate::trip::{ItineraryPlan, TripRequest};

/// Stateless generation client - each call is independent
///
/// No connection pooling beyond the HTTP client itself, no caching, no
/// memoization of identical prompts.
#[async_trait]
pub trait GenAiClient: Send + Sync {
    /// Generate a structured multi-day itinerary for the request
    ///
    /// Fails if the upstream call rejects or the payload does not parse
    /// as the expected shape; a parse failure is fatal to the call, not
    /// partially salvaged.
    async fn generate_itinerary(&self, request: &TripRequest) -> Result<ItineraryPlan, GenAiError>;

    /// Answer a free-text query using live-web grounding
    ///
    /// Returns prose plus zero or more extracted source references;
    /// never partially succeeds.
    async fn search_info(&self, query: &str) -> Result<SearchResult, GenAiError>;

    /// Generate a 16:9 image for a text prompt
    ///
    /// `Ok(Some(_))` an image was produced, `Ok(None)` the model
    /// returned no image part (a valid outcome, not an error),
    /// `Err(_)` the call itself failed.
    async fn generate_image(&self, prompt: &str) -> Result<Option<GeneratedImage>, GenAiError>;
}

/// Create a client from configuration
///
/// Fails fast with a configuration error when the API key is absent.
pub fn create_client(config: &GenAiConfig) -> Result<Arc<dyn GenAiClient>, GenAiError> {
    debug!(model_pro = %config.model_pro, "create_client: called");
    Ok(Arc::new(GeminiClient::from_config(config)?))
}


#[cfg(test)]
mod tests {
    use super::mock::MockGenAiClient;
    use super::*;

    // The image operation is a tagged result: produced, declined, or
    // broken are three distinct outcomes at the trait boundary.
    #[tokio::test]
    async fn test_image_result_trichotomy() {
        let client = MockGenAiClient::new();
        client.push_image(Ok(Some(GeneratedImage {
            mime_type: "image/png".to_string(),
            data: "aGVsbG8=".to_string(),
        })));
        client.push_image(Ok(None));
        client.push_image(Err("backend down".to_string()));

        assert!(matches!(client.generate_image("duomo").await, Ok(Some(_))));
        assert!(matches!(client.generate_image("duomo").await, Ok(None)));
        assert!(client.generate_image("duomo").await.is_err());
        assert_eq!(client.call_count(), 3);
    }

    #[tokio::test]
    async fn test_mock_exhausted_queue_errors() {
        let client = MockGenAiClient::new();
        let err = client
            .search_info("anything")
            .await
            .expect_err("empty queue must error");
        assert!(err.is_generation());
    }
}
