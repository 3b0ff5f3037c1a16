use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::{Map, Value};

use crate::config::ModelConfig;
use crate::error::ModelError;
use crate::providers::{ModelClient, RequestStyle};

/// Field names checked, in order, for the generated text
const TEXT_FIELDS: [&str; 4] = ["text", "generated_text", "output", "result"];

/// Blocking client for an HTTP text-generation endpoint.
///
/// The endpoint URL and key are captured once, at construction. Every call is
/// a single POST that blocks until a response arrives or the timeout elapses.
pub struct HttpModelClient {
    client: Client,
    api_url: Option<String>,
    api_key: Option<String>,
    style: RequestStyle,
}

impl HttpModelClient {
    /// Create a client from loaded configuration
    pub fn new(config: &ModelConfig) -> Result<Self, ModelError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(HttpModelClient {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            style: config.request_style(),
        })
    }

    /// Create a client from `cooking_agent.toml` and `MODEL_*` environment variables
    pub fn from_env() -> Result<Self, ModelError> {
        Self::new(&ModelConfig::load()?)
    }

    /// Replace the calling convention used by [`ModelClient::generate`]
    pub fn with_style(mut self, style: RequestStyle) -> Self {
        self.style = style;
        self
    }

    /// Send `prompt` with extra payload fields using the client's style.
    ///
    /// Fields in `params` are merged after the prompt field, so a `params`
    /// entry with the same name replaces it.
    pub fn generate_with_params(
        &self,
        prompt: &str,
        params: Option<&Map<String, Value>>,
    ) -> Result<String, ModelError> {
        self.send(prompt, params, &self.style)
    }

    /// Send `prompt` using GitHub's model inference conventions.
    ///
    /// With a `model_path`, the configured URL is treated as the API base and
    /// the path is appended unless the URL ends with `/`.
    pub fn generate_github(
        &self,
        prompt: &str,
        model_path: Option<&str>,
        params: Option<&Map<String, Value>>,
    ) -> Result<String, ModelError> {
        self.send(prompt, params, &RequestStyle::github(model_path))
    }

    fn send(
        &self,
        prompt: &str,
        params: Option<&Map<String, Value>>,
        style: &RequestStyle,
    ) -> Result<String, ModelError> {
        let api_url = self
            .api_url
            .as_deref()
            .ok_or_else(|| ModelError::NotConfigured("MODEL_API_URL is not set".to_string()))?;

        let mut payload = Map::new();
        payload.insert(
            style.payload_key.as_str().to_string(),
            Value::String(prompt.to_string()),
        );
        if let Some(params) = params {
            payload.extend(params.clone());
        }

        let target = style.target.resolve(api_url);
        debug!("POST {}", target);

        let response = self
            .client
            .post(&target)
            .headers(self.headers(style)?)
            .json(&payload)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ModelError::Status { status, body });
        }

        let response_body: Value = response.json()?;
        debug!("{:?}", response_body);
        Ok(extract_text(&response_body))
    }

    fn headers(&self, style: &RequestStyle) -> Result<HeaderMap, ModelError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(api_key) = &self.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| ModelError::InvalidHeader(format!("Authorization: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in &style.extra_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ModelError::InvalidHeader(format!("{}: {}", name, e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| ModelError::InvalidHeader(format!("{}: {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

impl ModelClient for HttpModelClient {
    fn configured(&self) -> bool {
        self.api_url.is_some() && self.api_key.is_some()
    }

    fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        self.generate_with_params(prompt, None)
    }
}

/// Pull the generated text out of an arbitrary JSON response.
///
/// Tries the well-known top-level fields first, then `choices[0]`, and
/// finally falls back to the whole payload as JSON text.
pub fn extract_text(body: &Value) -> String {
    let Value::Object(fields) = body else {
        return value_to_text(body);
    };

    if let Some(value) = TEXT_FIELDS.iter().find_map(|key| fields.get(*key)) {
        return value_to_text(value);
    }

    if let Some(Value::Object(choice)) = fields
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
    {
        return non_empty_text(choice.get("text"))
            .or_else(|| message_text(choice.get("message")))
            .unwrap_or_else(|| Value::Object(choice.clone()).to_string());
    }

    body.to_string()
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}

fn non_empty_text(value: Option<&Value>) -> Option<String> {
    value.filter(|v| !is_empty(v)).map(value_to_text)
}

// chat-style endpoints return {"role": ..., "content": ...}
fn message_text(value: Option<&Value>) -> Option<String> {
    let message = value.filter(|v| !is_empty(v))?;
    match message {
        Value::Object(fields) => {
            non_empty_text(fields.get("content")).or_else(|| Some(message.to_string()))
        }
        other => Some(value_to_text(other)),
    }
}
