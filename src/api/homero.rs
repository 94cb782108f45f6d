use crate::api::models::*;
use crate::remote::RemoteAction;
use dioxus::logger::tracing::{debug, warn};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Failure talking to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    Transport(String),
    /// A response arrived but its body was not the expected JSON.
    Decode(String),
    /// Non-success status on an endpoint that has no error body contract.
    Status(u16),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Network error: {msg}"),
            ApiError::Decode(msg) => write!(f, "Invalid response: {msg}"),
            ApiError::Status(code) => write!(f, "Server returned HTTP {code}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeroClient {
    base_url: String,
}

impl HomeroClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client bound to the origin that served the page.
    #[cfg(target_arch = "wasm32")]
    pub fn from_environment() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self::new(origin)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_environment() -> Self {
        let base = std::env::var("HOMERO_BASE_URL")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        debug!("GET {url}");
        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            warn!("GET {url} answered {status}");
            return Err(ApiError::Status(status.as_u16()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Rejections (4xx with a JSON body) come back as `Ok` so the caller can
    /// show what the backend said.
    async fn post_json(&self, path: &str, request: &ActionRequest) -> Result<ActionResponse, ApiError> {
        let url = self.endpoint(path);
        debug!("POST {url} {request:?}");
        let response = HTTP_CLIENT
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body: serde_json::Value = match response.json().await {
            Ok(body) => body,
            Err(_) if !(200..300).contains(&status) => return Err(ApiError::Status(status)),
            Err(e) => return Err(ApiError::Decode(e.to_string())),
        };
        if !(200..300).contains(&status) {
            warn!("POST {url} rejected with {status}: {body}");
        }
        Ok(ActionResponse::new(status, body))
    }

    pub async fn fetch_config(&self) -> Result<BackendConfig, ApiError> {
        self.get_json("config").await
    }

    pub async fn fetch_status(&self) -> Result<PlayerStatus, ApiError> {
        self.get_json("status").await
    }

    pub async fn fetch_episodes(&self) -> Result<Vec<Episode>, ApiError> {
        self.get_json("episodes").await
    }

    pub async fn send_action(&self, action: RemoteAction) -> Result<ActionResponse, ApiError> {
        let request = ActionRequest::Action {
            action: action.as_str().to_string(),
        };
        self.post_json("action", &request).await
    }

    pub async fn load_episode(&self, index: u32) -> Result<ActionResponse, ApiError> {
        self.post_json("load", &ActionRequest::Load { index }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_without_double_slashes() {
        let client = HomeroClient::new("http://tv.local:8000/");
        assert_eq!(client.endpoint("action"), "http://tv.local:8000/api/action");
        assert_eq!(client.endpoint("/status"), "http://tv.local:8000/api/status");
    }

    #[test]
    fn errors_render_for_the_status_line() {
        assert_eq!(
            ApiError::Transport("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(ApiError::Status(502).to_string(), "Server returned HTTP 502");
    }
}
