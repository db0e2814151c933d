//! Walks a loaded spec document into a browsable catalog of endpoints.
//!
//! Paths are sorted; the operations inside a path and the responses inside an
//! operation keep the order the document declares them in.

use super::loader::OpenApiSpec;
use crate::http_method::MethodColor;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

pub const TITLE_FALLBACK: &str = "API title not found";
pub const VERSION_FALLBACK: &str = "N/A";
pub const SERVER_URL_FALLBACK: &str = "URL not available";
pub const SUMMARY_FALLBACK: &str = "No summary.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecCatalog {
    pub title: String,
    pub version: String,
    pub description: String,
    pub servers: Vec<String>,
    pub endpoints: Vec<EndpointEntry>,
}

impl SpecCatalog {
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn endpoints_for_path<'a>(
        &'a self,
        path: &'a str,
    ) -> impl Iterator<Item = &'a EndpointEntry> + 'a {
        self.endpoints.iter().filter(move |e| e.path == path)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointEntry {
    pub path: String,
    /// Upper-cased operation key as found in the document.
    pub method: String,
    pub color: MethodColor,
    pub summary: String,
    pub description: String,
    pub parameters: Vec<ParameterEntry>,
    /// `None` when the operation declares no request body at all.
    pub request_body: Option<Vec<MediaTypeEntry>>,
    pub responses: Vec<ResponseEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
    Header,
    Cookie,
    /// Swagger 2 locations such as `body` and `formData`.
    Other(String),
}

impl ParamLocation {
    pub fn parse(s: &str) -> Self {
        match s {
            "path" => Self::Path,
            "query" => Self::Query,
            "header" => Self::Header,
            "cookie" => Self::Cookie,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Header => "header",
            Self::Cookie => "cookie",
            Self::Other(s) => s,
        }
    }
}

impl Serialize for ParamLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterEntry {
    pub name: String,
    pub location: Option<ParamLocation>,
    pub required: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaTypeEntry {
    pub media_type: String,
    /// The schema as indented JSON text; `$ref` pointers are left as-is.
    pub schema: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEntry {
    pub status: String,
    pub description: String,
}

pub fn render(spec: &OpenApiSpec) -> SpecCatalog {
    let doc = spec.document();
    let info = doc.get("info");

    SpecCatalog {
        title: str_or(info, "title", TITLE_FALLBACK),
        version: str_or(info, "version", VERSION_FALLBACK),
        description: str_or(info, "description", ""),
        servers: collect_servers(doc.get("servers")),
        endpoints: collect_endpoints(doc.get("paths")),
    }
}

fn str_or(value: Option<&Value>, key: &str, fallback: &str) -> String {
    value
        .and_then(|v| v.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or(fallback)
        .to_string()
}

fn collect_servers(servers: Option<&Value>) -> Vec<String> {
    servers
        .and_then(|s| s.as_array())
        .map(|arr| {
            arr.iter()
                .map(|server| str_or(Some(server), "url", SERVER_URL_FALLBACK))
                .collect()
        })
        .unwrap_or_default()
}

fn collect_endpoints(paths: Option<&Value>) -> Vec<EndpointEntry> {
    let paths = match paths.and_then(|p| p.as_object()) {
        Some(p) => p,
        None => return Vec::new(),
    };

    let mut sorted_paths: Vec<(&String, &Value)> = paths.iter().collect();
    sorted_paths.sort_by(|a, b| a.0.cmp(b.0));

    let mut endpoints = Vec::new();
    for (path, path_item) in sorted_paths {
        let methods = match path_item.as_object() {
            Some(m) => m,
            None => continue,
        };

        // Path-level keys such as `parameters` or `servers` are not operations.
        for (method, details) in methods {
            if let Some(details) = details.as_object() {
                endpoints.push(endpoint_entry(path, method, details));
            }
        }
    }

    endpoints
}

fn endpoint_entry(path: &str, method: &str, details: &Map<String, Value>) -> EndpointEntry {
    let text = |key: &str, fallback: &str| {
        details
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or(fallback)
            .to_string()
    };

    EndpointEntry {
        path: path.to_string(),
        method: method.to_uppercase(),
        color: MethodColor::for_method(method),
        summary: text("summary", SUMMARY_FALLBACK),
        description: text("description", ""),
        parameters: collect_parameters(details.get("parameters")),
        request_body: details.get("requestBody").map(collect_media_types),
        responses: collect_responses(details.get("responses")),
    }
}

fn collect_parameters(parameters: Option<&Value>) -> Vec<ParameterEntry> {
    let params = match parameters.and_then(|p| p.as_array()) {
        Some(p) => p,
        None => return Vec::new(),
    };

    params
        .iter()
        .filter(|p| p.is_object())
        .map(|param| ParameterEntry {
            name: str_or(Some(param), "name", ""),
            location: param
                .get("in")
                .and_then(|v| v.as_str())
                .map(ParamLocation::parse),
            required: param
                .get("required")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            description: str_or(Some(param), "description", ""),
        })
        .collect()
}

fn collect_media_types(request_body: &Value) -> Vec<MediaTypeEntry> {
    let content = match request_body.get("content").and_then(|c| c.as_object()) {
        Some(c) => c,
        None => return Vec::new(),
    };

    content
        .iter()
        .map(|(media_type, schema_info)| {
            let schema = schema_info
                .get("schema")
                .cloned()
                .unwrap_or_else(|| Value::Object(Map::new()));
            MediaTypeEntry {
                media_type: media_type.clone(),
                schema: serde_json::to_string_pretty(&schema).unwrap_or_default(),
            }
        })
        .collect()
}

fn collect_responses(responses: Option<&Value>) -> Vec<ResponseEntry> {
    let responses = match responses.and_then(|r| r.as_object()) {
        Some(r) => r,
        None => return Vec::new(),
    };

    responses
        .iter()
        .map(|(status, details)| ResponseEntry {
            status: status.clone(),
            description: str_or(Some(details), "description", ""),
        })
        .collect()
}
