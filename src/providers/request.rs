use std::collections::BTreeMap;

use serde::Deserialize;

/// Accept header expected by GitHub-hosted model endpoints
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";
/// API version pinned for GitHub-hosted model endpoints
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Name of the JSON field that carries the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadKey {
    #[default]
    Prompt,
    Input,
}

impl PayloadKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadKey::Prompt => "prompt",
            PayloadKey::Input => "input",
        }
    }
}

/// How the request URL is derived from the configured endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetUrl {
    /// POST to the configured URL as-is
    #[default]
    Direct,
    /// Treat the configured URL as a base and append a model path
    BaseAndPath(String),
}

impl TargetUrl {
    /// Resolve the URL to POST to.
    ///
    /// A base that already ends with `/` is taken to be a full endpoint and
    /// the path is ignored.
    pub fn resolve(&self, api_url: &str) -> String {
        match self {
            TargetUrl::BaseAndPath(path) if !api_url.ends_with('/') => format!(
                "{}/{}",
                api_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            _ => api_url.to_string(),
        }
    }
}

/// Named request presets selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    #[default]
    Generic,
    Github,
}

/// Everything that differs between the endpoint calling conventions:
/// the prompt field name, extra headers, and URL composition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestStyle {
    pub payload_key: PayloadKey,
    pub extra_headers: BTreeMap<String, String>,
    pub target: TargetUrl,
}

impl RequestStyle {
    /// `{"prompt": ...}` posted straight to the configured URL
    pub fn generic() -> Self {
        Self::default()
    }

    /// `{"input": ...}` with GitHub's accept and API version headers. When a
    /// model path is given it is appended to the configured base URL.
    pub fn github(model_path: Option<&str>) -> Self {
        let mut extra_headers = BTreeMap::new();
        extra_headers.insert("Accept".to_string(), GITHUB_ACCEPT.to_string());
        extra_headers.insert(
            "X-GitHub-Api-Version".to_string(),
            GITHUB_API_VERSION.to_string(),
        );

        let target = match model_path {
            Some(path) if !path.is_empty() => TargetUrl::BaseAndPath(path.to_string()),
            _ => TargetUrl::Direct,
        };

        RequestStyle {
            payload_key: PayloadKey::Input,
            extra_headers,
            target,
        }
    }

    pub fn from_kind(kind: StyleKind, model_path: Option<&str>) -> Self {
        match kind {
            StyleKind::Generic => Self::generic(),
            StyleKind::Github => Self::github(model_path),
        }
    }
}
