use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{api::types::*, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) fn map_transport_error(error: reqwest::Error) -> ApiError {
        ApiError::Network(error.to_string())
    }
}

/// Parses the body before looking at the status: a body that is not JSON is
/// an invalid response whatever the status line says.
pub(super) async fn map_json_response<T>(
    response: Response,
    rejected_fallback: &str,
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(ApiClient::map_transport_error)?;
    let body: Value = serde_json::from_str(&text).map_err(|_| ApiError::InvalidResponse)?;

    if !status.is_success() {
        return Err(ApiError::rejected(status.as_u16(), &body, rejected_fallback));
    }

    serde_json::from_value(body).map_err(|_| ApiError::InvalidResponse)
}
