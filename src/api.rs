use anyhow::{anyhow, Context};
use reqwest::{multipart, Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::config::normalize_base_url;

pub const PROVIDERS_PATH: &str = "/api/v1/providers";
pub const MODELS_PATH: &str = "/api/v1/models";
pub const GENERATE_PATH: &str = "/api/v1/generate";
pub const UPLOAD_PATH: &str = "/upload";
pub const QUERY_PATH: &str = "/query";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub provider: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GenerateResponse {
    pub content: String,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsageMetadata {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
}

#[derive(Debug, Deserialize)]
struct ProvidersResponse {
    providers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    models: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    retrieved_context: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: serde_json::Value,
}

/// HTTP client for the playground backend.
///
/// On wasm32 requests go through the browser's `fetch`, elsewhere through a native client.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http: Client,
}

impl BackendClient {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_providers(&self) -> anyhow::Result<Vec<String>> {
        let response = self
            .http
            .get(self.url(PROVIDERS_PATH))
            .send()
            .await
            .context("Error getting providers")?;
        let parsed: ProvidersResponse = parse_response(response, PROVIDERS_PATH).await?;
        Ok(parsed.providers)
    }

    /// Fails when the body's `models` field is anything but an array of strings.
    pub async fn list_models(&self, provider: &str, api_key: &str) -> anyhow::Result<Vec<String>> {
        let response = self
            .http
            .get(self.url(MODELS_PATH))
            .query(&[("provider", provider)])
            .bearer_auth(api_key)
            .send()
            .await
            .context("Error getting models")?;
        let parsed: ModelsResponse = parse_response(response, MODELS_PATH).await?;
        Ok(parsed.models)
    }

    pub async fn generate(
        &self,
        request: &GenerateRequest,
        api_key: &str,
    ) -> anyhow::Result<GenerateResponse> {
        let response = self
            .http
            .post(self.url(GENERATE_PATH))
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .context("Error calling backend")?;
        parse_response(response, GENERATE_PATH).await
    }

    /// Posts a document as `multipart/form-data` with a single `file` part.
    /// The backend's reply has no fixed shape and is handed back as raw JSON.
    pub async fn upload_document(
        &self,
        file_name: String,
        bytes: Vec<u8>,
    ) -> anyhow::Result<serde_json::Value> {
        let part = multipart::Part::bytes(bytes).file_name(file_name);
        let form = multipart::Form::new().part("file", part);
        let response = self
            .http
            .post(self.url(UPLOAD_PATH))
            .multipart(form)
            .send()
            .await
            .context("Error uploading file")?;
        parse_response(response, UPLOAD_PATH).await
    }

    /// Returns the retrieved context, or an empty string when the backend sends none.
    pub async fn query(&self, query: &str) -> anyhow::Result<String> {
        let response = self
            .http
            .get(self.url(QUERY_PATH))
            .query(&[("query", query)])
            .send()
            .await
            .context("Error querying RAG")?;
        let parsed: QueryResponse = parse_response(response, QUERY_PATH).await?;
        Ok(parsed.retrieved_context.unwrap_or_default())
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response, endpoint: &str) -> anyhow::Result<T> {
    let status = response.status();
    let response_text = response
        .text()
        .await
        .with_context(|| format!("{endpoint}: failed to read response body"))?;

    if !status.is_success() {
        // FastAPI-style `{"detail": ...}` bodies carry the backend's reason
        if let Ok(ErrorResponse { detail }) = serde_json::from_str::<ErrorResponse>(&response_text) {
            let detail = match detail {
                serde_json::Value::String(detail) => detail,
                other => other.to_string(),
            };
            return Err(anyhow!("{endpoint}: HTTP {status}: {detail}"));
        }
        return Err(anyhow!("{endpoint}: HTTP error! Status: {status}"));
    }

    serde_json::from_str(&response_text)
        .with_context(|| format!("{endpoint}: unexpected response format: {response_text}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_serializes_in_field_order() {
        let request = GenerateRequest {
            prompt: "hello".to_string(),
            provider: "p".to_string(),
            model: "m".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"prompt":"hello","provider":"p","model":"m"}"#
        );
    }

    #[test]
    fn generate_response_ignores_extra_fields() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"content":"hi","type":"ai","id":"","example":false,"tool_calls":[],
                "usage_metadata":{"input_tokens":3,"output_tokens":5,"total_tokens":8}}"#,
        )
        .unwrap();
        assert_eq!(response.content, "hi");
        assert_eq!(
            response.usage_metadata,
            Some(UsageMetadata {
                input_tokens: 3,
                output_tokens: 5,
                total_tokens: 8
            })
        );
    }

    #[test]
    fn models_must_be_a_string_array() {
        assert!(serde_json::from_str::<ModelsResponse>(r#"{"models":"bad"}"#).is_err());
        assert!(serde_json::from_str::<ModelsResponse>(r#"{"models":[1,2]}"#).is_err());
    }

    #[test]
    fn client_normalizes_base_url() {
        let client = BackendClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url(QUERY_PATH), "http://localhost:8000/query");
    }
}
