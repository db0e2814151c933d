use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// One received response. Replaced wholesale by the next send.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body_text: String,
    pub body_json: Option<Value>,
}

impl ApiResponse {
    /// Parses the body as JSON up front; a body that is not JSON is kept as text only.
    pub fn new(status_code: u16, headers: BTreeMap<String, String>, body_text: String) -> Self {
        let body_json = serde_json::from_str(&body_text).ok();
        Self {
            status_code,
            headers,
            body_text,
            body_json,
        }
    }
}

/// Display emphasis for a status code. Never drives control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    Success,
    ClientError,
    ServerError,
    Informational,
}

impl StatusClass {
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => Self::Success,
            400..=499 => Self::ClientError,
            500..=u16::MAX => Self::ServerError,
            _ => Self::Informational,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::ClientError => "client error",
            Self::ServerError => "server error",
            Self::Informational => "informational",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "format", content = "content", rename_all = "snake_case")]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseView {
    pub status: u16,
    pub status_class: StatusClass,
    pub headers: BTreeMap<String, String>,
    pub body: ResponseBody,
}

pub fn render(response: &ApiResponse) -> ResponseView {
    let body = match &response.body_json {
        Some(json) => ResponseBody::Json(json.clone()),
        None => ResponseBody::Text(response.body_text.clone()),
    };

    ResponseView {
        status: response.status_code,
        status_class: StatusClass::from_status(response.status_code),
        headers: response.headers.clone(),
        body,
    }
}
