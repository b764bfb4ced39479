//! Gemini API client implementation
//!
//! Implements the GenAiClient trait over the generateContent endpoint,
//! one POST per operation. Structured itinerary output is requested via
//! a response schema, search runs with the googleSearch grounding tool,
//! and image generation asks for a fixed 16:9 aspect ratio.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use super::types::{GeneratedImage, SOURCE_FALLBACK_TITLE, SearchResult, SourceRef};
use super::{GenAiClient, GenAiError};
use crate::config::GenAiConfig;
use crate::trip::{ItineraryPlan, TripRequest};

/// Gemini API client
#[derive(Debug)]
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    model_pro: String,
    model_flash: String,
    model_image: String,
    http: Client,
}

impl GeminiClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in config;
    /// fails with a configuration error when it is absent.
    pub fn from_config(config: &GenAiConfig) -> Result<Self, GenAiError> {
        debug!(?config, "from_config: called");
        let api_key = config
            .get_api_key()
            .map_err(|e| GenAiError::Configuration(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(GenAiError::Network)?;

        Ok(Self {
            api_key,
            base_url: config.base_url.clone(),
            model_pro: config.model_pro.clone(),
            model_flash: config.model_flash.clone(),
            model_image: config.model_image.clone(),
            http,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// POST one generateContent request and deserialize the envelope
    async fn generate(
        &self,
        model: &str,
        body: &serde_json::Value,
    ) -> Result<GenerateContentResponse, GenAiError> {
        let url = self.endpoint(model);
        debug!(%model, "generate: called");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.api_key.clone())
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(GenAiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "generate: API error");
            return Err(GenAiError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        debug!("generate: success");
        let api_response: GenerateContentResponse = response.json().await?;
        Ok(api_response)
    }
}

#[async_trait]
impl GenAiClient for GeminiClient {
    async fn generate_itinerary(&self, request: &TripRequest) -> Result<ItineraryPlan, GenAiError> {
        debug!(duration_days = request.duration_days, "generate_itinerary: called");
        let body = json!({
            "contents": [{ "parts": [{ "text": itinerary_prompt(request) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": itinerary_schema(),
            },
        });

        let response = self.generate(&self.model_pro, &body).await?;
        parse_itinerary(&response)
    }

    async fn search_info(&self, query: &str) -> Result<SearchResult, GenAiError> {
        debug!(%query, "search_info: called");
        let body = json!({
            "contents": [{ "parts": [{ "text": query }] }],
            "tools": [{ "googleSearch": {} }],
        });

        let response = self.generate(&self.model_flash, &body).await?;
        parse_search(&response)
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<GeneratedImage>, GenAiError> {
        debug!(%prompt, "generate_image: called");
        let body = json!({
            "contents": [{ "parts": [{ "text": image_prompt(prompt) }] }],
            "generationConfig": {
                "imageConfig": { "aspectRatio": "16:9" },
            },
        });

        // Upstream failure stays an error; a response without an image
        // part is Ok(None).
        let response = self.generate(&self.model_image, &body).await?;
        Ok(find_inline_image(&response))
    }
}

/// Natural-language prompt embedding duration and interests
fn itinerary_prompt(request: &TripRequest) -> String {
    let interests: Vec<&str> = request.interests.iter().map(String::as_str).collect();
    format!(
        "Create a detailed {}-day trip itinerary for Modena, Italy. \
         Focus on: {}. \
         Include specific times, restaurant suggestions (like Osteria Francescana \
         or local trattorias), and historical context. \
         Output the result in a structured JSON format.",
        request.duration_days,
        interests.join(", ")
    )
}

/// Travel-photography framing around the caller's subject
fn image_prompt(subject: &str) -> String {
    format!(
        "A high-quality, professional travel photography of {} in Modena, Italy. \
         Cinematic lighting, authentic atmosphere.",
        subject
    )
}

/// Response schema for the structured itinerary call
fn itinerary_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "days": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "day": { "type": "number" },
                        "title": { "type": "string" },
                        "activities": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "time": { "type": "string" },
                                    "description": { "type": "string" },
                                    "location": { "type": "string" }
                                },
                                "required": ["time", "description", "location"]
                            }
                        }
                    },
                    "required": ["day", "title", "activities"]
                }
            }
        },
        "required": ["days"]
    })
}

/// Concatenated text parts of the first candidate
fn collected_text(response: &GenerateContentResponse) -> String {
    response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

/// Parse the structured itinerary payload out of the response text
///
/// Any deviation from the declared schema fails the whole call.
fn parse_itinerary(response: &GenerateContentResponse) -> Result<ItineraryPlan, GenAiError> {
    let text = collected_text(response);
    if text.is_empty() {
        return Err(GenAiError::InvalidResponse(
            "no text content in itinerary response".to_string(),
        ));
    }
    let plan: ItineraryPlan = serde_json::from_str(&text)?;
    Ok(plan)
}

/// Reduce a grounded response to prose plus source references
fn parse_search(response: &GenerateContentResponse) -> Result<SearchResult, GenAiError> {
    let text = collected_text(response);
    if text.is_empty() {
        return Err(GenAiError::InvalidResponse(
            "no text content in search response".to_string(),
        ));
    }

    let sources = response
        .candidates
        .first()
        .and_then(|c| c.grounding_metadata.as_ref())
        .map(|meta| extract_sources(&meta.grounding_chunks))
        .unwrap_or_default();

    Ok(SearchResult { text, sources })
}

/// Extract web sources from grounding chunks
///
/// Chunks without a web reference (or without a uri) are dropped; a
/// missing title falls back to a fixed label.
fn extract_sources(chunks: &[GroundingChunk]) -> Vec<SourceRef> {
    chunks
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .filter_map(|web| {
            web.uri.as_ref().map(|uri| SourceRef {
                uri: uri.clone(),
                title: web
                    .title
                    .clone()
                    .unwrap_or_else(|| SOURCE_FALLBACK_TITLE.to_string()),
            })
        })
        .collect()
}

/// First inline-image part of the first candidate, if any
fn find_inline_image(response: &GenerateContentResponse) -> Option<GeneratedImage> {
    response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|content| {
            content.parts.iter().find_map(|p| {
                p.inline_data.as_ref().map(|data| GeneratedImage {
                    mime_type: data.mime_type.clone(),
                    data: data.data.clone(),
                })
            })
        })
}

// Gemini API response types

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default = "default_image_mime")]
    mime_type: String,
    data: String,
}

fn default_image_mime() -> String {
    "image/png".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
struct WebSource {
    uri: Option<String>,
    title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenAiConfig;

    fn response_from(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).expect("test response should deserialize")
    }

    #[test]
    fn test_itinerary_prompt_embeds_request() {
        let mut draft = crate::trip::TripDraft::new();
        draft.set_duration(5);
        let prompt = itinerary_prompt(&draft.build_request());

        assert!(prompt.contains("5-day trip itinerary for Modena"));
        assert!(prompt.contains("Food"));
        assert!(prompt.contains("Motors"));
    }

    #[test]
    fn test_image_prompt_framing() {
        let prompt = image_prompt("the Ghirlandina tower");
        assert!(prompt.starts_with("A high-quality, professional travel photography"));
        assert!(prompt.contains("the Ghirlandina tower in Modena, Italy"));
    }

    #[test]
    fn test_itinerary_schema_requires_activity_fields() {
        let schema = itinerary_schema();
        let required = &schema["properties"]["days"]["items"]["properties"]["activities"]["items"]
            ["required"];
        assert_eq!(*required, json!(["time", "description", "location"]));
    }

    #[test]
    fn test_parse_itinerary_well_formed() {
        let payload = serde_json::to_string(&json!({
            "days": [{
                "day": 1,
                "title": "A",
                "activities": [{"time": "9am", "location": "X", "description": "Y"}]
            }]
        }))
        .unwrap();

        let response = response_from(json!({
            "candidates": [{ "content": { "parts": [{ "text": payload }] } }]
        }));

        let plan = parse_itinerary(&response).expect("plan should parse");
        assert_eq!(plan.days.len(), 1);
        assert_eq!(plan.days[0].day, 1);
        assert_eq!(plan.days[0].title, "A");
        assert_eq!(plan.days[0].activities.len(), 1);
        assert_eq!(plan.days[0].activities[0].time, "9am");
        assert_eq!(plan.days[0].activities[0].location, "X");
        assert_eq!(plan.days[0].activities[0].description, "Y");
    }

    #[test]
    fn test_parse_itinerary_split_across_parts() {
        let response = response_from(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "{\"days\": " },
                { "text": "[]}" }
            ] } }]
        }));

        let plan = parse_itinerary(&response).expect("split payload should parse");
        assert!(plan.is_empty());
    }

    #[test]
    fn test_parse_itinerary_malformed_fails() {
        let response = response_from(json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"not\": \"the schema\"}" }] } }]
        }));

        let err = parse_itinerary(&response).expect_err("malformed payload must fail");
        assert!(err.is_generation());
    }

    #[test]
    fn test_parse_itinerary_empty_response_fails() {
        let response = response_from(json!({ "candidates": [] }));
        assert!(parse_itinerary(&response).is_err());
    }

    #[test]
    fn test_extract_sources_drops_chunks_without_web() {
        let response = response_from(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "answer" }] },
                "groundingMetadata": {
                    "groundingChunks": [
                        { "web": { "uri": "u1", "title": "t1" } },
                        {},
                        { "web": { "uri": "u2" } }
                    ]
                }
            }]
        }));

        let result = parse_search(&response).expect("search should parse");
        assert_eq!(result.sources.len(), 2);
        assert_eq!(result.sources[0].uri, "u1");
        assert_eq!(result.sources[0].title, "t1");
        assert_eq!(result.sources[1].uri, "u2");
        assert_eq!(result.sources[1].title, SOURCE_FALLBACK_TITLE);
    }

    #[test]
    fn test_parse_search_without_grounding_metadata() {
        let response = response_from(json!({
            "candidates": [{ "content": { "parts": [{ "text": "plain answer" }] } }]
        }));

        let result = parse_search(&response).expect("search should parse");
        assert_eq!(result.text, "plain answer");
        assert!(result.sources.is_empty());
    }

    #[test]
    fn test_parse_search_no_text_fails() {
        let response = response_from(json!({
            "candidates": [{ "content": { "parts": [] } }]
        }));
        assert!(parse_search(&response).is_err());
    }

    #[test]
    fn test_find_inline_image_present() {
        let response = response_from(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "here is your picture" },
                { "inlineData": { "mimeType": "image/png", "data": "aGVsbG8=" } }
            ] } }]
        }));

        let image = find_inline_image(&response).expect("image part should be found");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "aGVsbG8=");
    }

    #[test]
    fn test_find_inline_image_absent() {
        let response = response_from(json!({
            "candidates": [{ "content": { "parts": [{ "text": "no picture today" }] } }]
        }));
        assert!(find_inline_image(&response).is_none());
    }

    #[test]
    fn test_from_config_missing_key_is_configuration_error() {
        let config = GenAiConfig {
            api_key_env: "VIAGGIO_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..GenAiConfig::default()
        };

        let err = GeminiClient::from_config(&config).expect_err("missing key must fail");
        assert!(err.is_configuration());
    }

    #[test]
    fn test_endpoint_url() {
        let client = GeminiClient {
            api_key: "test-key".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model_pro: "gemini-3-pro-preview".to_string(),
            model_flash: "gemini-3-flash-preview".to_string(),
            model_image: "gemini-2.5-flash-image".to_string(),
            http: Client::new(),
        };

        assert_eq!(
            client.endpoint(&client.model_flash),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }
}
