use crate::error::LoadError;
use serde_json::Value;
use std::time::Duration;

pub const LOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// A parsed spec document. OpenAPI 3.x and Swagger 2.x are not told apart.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenApiSpec {
    document: Value,
}

impl OpenApiSpec {
    pub fn from_value(document: Value) -> Self {
        Self { document }
    }

    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        serde_json::from_str(text)
            .map(Self::from_value)
            .map_err(|e| LoadError::Parse {
                reason: e.to_string(),
            })
    }

    pub fn document(&self) -> &Value {
        &self.document
    }
}

pub async fn load(url: &str) -> Result<OpenApiSpec, LoadError> {
    load_with_timeout(url, LOAD_TIMEOUT).await
}

/// GETs `url` and parses the body. Any non-2xx status is a network failure.
pub async fn load_with_timeout(url: &str, timeout: Duration) -> Result<OpenApiSpec, LoadError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(network_error)?;

    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, crate::http::USER_AGENT)
        .send()
        .await
        .map_err(network_error)?
        .error_for_status()
        .map_err(network_error)?;

    let body = response.text().await.map_err(network_error)?;

    OpenApiSpec::from_json(&body)
}

fn network_error(error: reqwest::Error) -> LoadError {
    LoadError::Network {
        reason: error.to_string(),
        status: error.status().map(|s| s.as_u16()),
    }
}
