use crate::commands::shared::{mask_secret, OutputArgs};
use crate::commands::validators;
use crate::core::error::ApxError;
use crate::core::formatter::{self, OutputFormat};
use crate::core::logger::Logger;
use apx_lib::response::{self, ResponseBody, ResponseView, StatusClass};
use apx_lib::{
    compose, execute_request, AuthBinding, AuthMethod, HttpMethod, PreparedRequest, RequestConfig,
};
use clap::{Args, Subcommand};
use colored::{ColoredString, Colorize};
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Instant;

#[derive(Serialize)]
pub struct RequestDetailsView {
    #[serde(rename = "Method")]
    pub method: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Headers")]
    pub headers: Map<String, Value>,
    #[serde(rename = "Query", skip_serializing_if = "Map::is_empty")]
    pub query: Map<String, Value>,
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

#[derive(Serialize)]
pub struct SendResultView {
    pub method: String,
    pub url: String,
    pub elapsed_ms: u64,
    pub response: ResponseView,
}

#[derive(Debug, Args)]
#[command(about = "Compose and send API requests")]
pub struct RequestCommand {
    #[command(subcommand)]
    pub command: RequestSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum RequestSubcommand {
    #[command(about = "Send a request and show the response")]
    Send(SendArgs),
    #[command(about = "Show the composed request without sending it")]
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct RequestArgs {
    #[arg(
        short = 'b',
        long = "base-url",
        default_value = "https://api.github.com",
        help = "Base URL of the API, without the endpoint"
    )]
    pub base_url: String,

    #[arg(
        short = 'E',
        long = "endpoint",
        default_value = "/user",
        help = "Endpoint path, e.g. /users/1"
    )]
    pub endpoint: String,

    #[arg(
        short = 'X',
        long = "method",
        default_value = "GET",
        help = "HTTP method: GET, POST, PUT or DELETE",
        value_parser = validators::validate_method
    )]
    pub method: HttpMethod,

    #[arg(
        short = 'a',
        long = "auth",
        default_value = "bearer",
        help = "How the API key is sent: bearer, header or query",
        value_parser = validators::validate_auth_method
    )]
    pub auth: AuthMethod,

    #[arg(
        short = 'k',
        long = "api-key",
        env = "APX_API_KEY",
        hide_env_values = true,
        help = "API key or bearer token"
    )]
    pub api_key: Option<String>,

    #[arg(
        long = "header-name",
        default_value = "x-api-key",
        help = "Header carrying the key when --auth header",
        value_parser = validators::validate_header_name
    )]
    pub header_name: String,

    #[arg(
        long = "query-param",
        default_value = "api_key",
        help = "Query parameter carrying the key when --auth query",
        value_parser = validators::validate_query_param_name
    )]
    pub query_param: String,

    #[arg(
        short = 'B',
        long = "body",
        value_name = "JSON",
        help = "JSON request body, sent with POST and PUT"
    )]
    pub body: Option<String>,
}

impl RequestArgs {
    pub fn to_config(&self) -> RequestConfig {
        RequestConfig {
            base_url: self.base_url.clone(),
            endpoint: self.endpoint.clone(),
            method: self.method,
            auth_method: self.auth,
            api_key: self.api_key.clone(),
            custom_header_name: self.header_name.clone(),
            query_param_name: self.query_param.clone(),
            body: self.body.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct SendArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    #[arg(
        short = 'i',
        long = "include-headers",
        help = "Show the response headers"
    )]
    pub include_headers: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_show(args: &ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let prepared = compose_request(&args.request)?;
    let view = details_view(&prepared, args.request.api_key.as_deref());

    let formatter = formatter::get_formatter(&args.output.output);
    print!("{}", formatter.format(&view));

    Ok(())
}

pub async fn execute_send(args: &SendArgs) -> Result<(), Box<dyn std::error::Error>> {
    let prepared = compose_request(&args.request)?;

    if args.output.output == OutputFormat::Text {
        println!("Request: {} {}", prepared.method, prepared.url);
    }

    let start_time = Instant::now();
    let response = execute_request(&prepared).await.map_err(ApxError::from)?;
    let elapsed_ms = start_time.elapsed().as_millis() as u64;

    Logger::debug("--- HTTP Response ---");
    Logger::debug(&format!(
        "Response status: {} ({elapsed_ms} ms)",
        response.status_code
    ));
    for (key, value) in &response.headers {
        Logger::debug(&format!("  {key}: {value}"));
    }
    Logger::debug("--- End Response ---");

    let view = response::render(&response);

    match args.output.output {
        OutputFormat::Json => {
            let result = SendResultView {
                method: prepared.method.to_string(),
                url: prepared.url.clone(),
                elapsed_ms,
                response: view,
            };
            print!("{}", formatter::get_formatter(&OutputFormat::Json).format(&result));
        }
        OutputFormat::Text => print!("{}", render_response_text(&view, args.include_headers)),
    }

    Ok(())
}

fn compose_request(args: &RequestArgs) -> Result<PreparedRequest, ApxError> {
    if !args.method.requires_body() && args.body.is_some() {
        Logger::debug(&format!("Ignoring request body for {}", args.method));
    }

    let prepared = compose(&args.to_config())?;

    if Logger::enabled() {
        let (headers, query) = masked_pairs(&prepared, args.api_key.as_deref());
        Logger::debug(&format!("Composed {} {}", prepared.method, prepared.url));
        for (key, value) in &headers {
            Logger::debug(&format!("  header {key}: {value}"));
        }
        for (key, value) in &query {
            Logger::debug(&format!("  query {key}={value}"));
        }
    }

    Ok(prepared)
}

/// Copies the header and query pairs, masking the key only in the entry the
/// auth binding placed.
fn masked_pairs(
    prepared: &PreparedRequest,
    secret: Option<&str>,
) -> (Vec<(String, String)>, Vec<(String, String)>) {
    let auth = prepared.auth.as_ref();
    (
        mask_bound(&prepared.headers, auth, AuthBinding::binds_header, secret),
        mask_bound(&prepared.query, auth, AuthBinding::binds_query, secret),
    )
}

fn mask_bound(
    pairs: &[(String, String)],
    auth: Option<&AuthBinding>,
    binds: fn(&AuthBinding, &str) -> bool,
    secret: Option<&str>,
) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(key, value)| match auth {
            Some(binding) if binds(binding, key) => (key.clone(), mask_secret(value, secret)),
            _ => (key.clone(), value.clone()),
        })
        .collect()
}

fn details_view(prepared: &PreparedRequest, secret: Option<&str>) -> RequestDetailsView {
    let (headers, query) = masked_pairs(prepared, secret);
    let to_map = |pairs: Vec<(String, String)>| {
        pairs
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect::<Map<String, Value>>()
    };

    RequestDetailsView {
        method: prepared.method.to_string(),
        url: prepared.url.clone(),
        headers: to_map(headers),
        query: to_map(query),
        body: prepared.body.clone(),
    }
}

fn status_line(view: &ResponseView) -> ColoredString {
    let line = format!("Status: {} ({})", view.status, view.status_class.label());
    match view.status_class {
        StatusClass::Success => line.green().bold(),
        StatusClass::ClientError => line.yellow().bold(),
        StatusClass::ServerError => line.red().bold(),
        StatusClass::Informational => line.blue().bold(),
    }
}

pub fn render_response_text(view: &ResponseView, include_headers: bool) -> String {
    let mut out = format!("{}\n", status_line(view));

    if include_headers {
        out.push_str("Headers:\n");
        for (key, value) in &view.headers {
            out.push_str(&format!("  {key}: {value}\n"));
        }
    }

    out.push_str("Body:\n");
    match &view.body {
        ResponseBody::Json(json) => {
            let rendered = formatter::render_value(json, 2);
            if rendered.trim().is_empty() {
                out.push_str(&format!("  {json}\n"));
            } else {
                out.push_str(&rendered);
            }
        }
        ResponseBody::Text(text) => {
            out.push_str(text);
            if !text.ends_with('\n') {
                out.push('\n');
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use apx_lib::ApiResponse;
    use std::collections::BTreeMap;

    fn view(status: u16, body: &str) -> ResponseView {
        colored::control::set_override(false);
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        response::render(&ApiResponse::new(status, headers, body.to_string()))
    }

    #[test]
    fn test_render_json_response() {
        let text = render_response_text(&view(200, r#"{"login": "octocat", "id": 1}"#), false);
        assert_eq!(
            text,
            "Status: 200 (success)\nBody:\n  login: octocat\n  id: 1\n"
        );
    }

    #[test]
    fn test_render_raw_response_with_headers() {
        let text = render_response_text(&view(404, "<html>not json</html>"), true);
        assert_eq!(
            text,
            "Status: 404 (client error)\nHeaders:\n  content-type: application/json\nBody:\n<html>not json</html>\n"
        );
    }

    #[test]
    fn test_render_empty_json_object() {
        let text = render_response_text(&view(500, "{}"), false);
        assert_eq!(text, "Status: 500 (server error)\nBody:\n  {}\n");
    }

    #[test]
    fn test_details_view_masks_key() {
        let prepared = PreparedRequest {
            method: HttpMethod::GET,
            url: "https://api.x.com/user".to_string(),
            headers: vec![(
                "Authorization".to_string(),
                "Bearer abc123".to_string(),
            )],
            query: vec![],
            body: None,
            auth: Some(AuthBinding::Header {
                name: "Authorization".to_string(),
                value: "Bearer abc123".to_string(),
            }),
        };

        let view = details_view(&prepared, Some("abc123"));
        assert_eq!(view.headers["Authorization"], "Bearer ********");
    }

    #[test]
    fn test_details_view_masks_only_bound_entry() {
        let prepared = PreparedRequest {
            method: HttpMethod::GET,
            url: "https://api.x.com/json".to_string(),
            headers: vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("x-api-key".to_string(), "json".to_string()),
            ],
            query: vec![("format".to_string(), "json".to_string())],
            body: None,
            auth: Some(AuthBinding::Header {
                name: "x-api-key".to_string(),
                value: "json".to_string(),
            }),
        };

        let view = details_view(&prepared, Some("json"));
        assert_eq!(view.url, "https://api.x.com/json");
        assert_eq!(view.headers["Accept"], "application/json");
        assert_eq!(view.headers["x-api-key"], "********");
        assert_eq!(view.query["format"], "json");
    }

    #[test]
    fn test_details_view_masks_query_binding() {
        let prepared = PreparedRequest {
            method: HttpMethod::GET,
            url: "https://api.x.com/user".to_string(),
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            query: vec![("api_key".to_string(), "json".to_string())],
            body: None,
            auth: Some(AuthBinding::Query {
                name: "api_key".to_string(),
                value: "json".to_string(),
            }),
        };

        let view = details_view(&prepared, Some("json"));
        assert_eq!(view.headers["Accept"], "application/json");
        assert_eq!(view.query["api_key"], "********");
    }
}
