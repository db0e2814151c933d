//! Turns user input into a fully resolved request, without touching the network.

use crate::auth::{AuthBinding, AuthMethod, Pairs};
use crate::error::ComposeError;
use crate::http_method::HttpMethod;
use serde_json::Value;

pub const ACCEPT_JSON: (&str, &str) = ("Accept", "application/json");

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub base_url: String,
    pub endpoint: String,
    pub method: HttpMethod,
    pub auth_method: AuthMethod,
    pub api_key: Option<String>,
    /// Only read when `auth_method` is `CustomHeader`.
    pub custom_header_name: String,
    /// Only read when `auth_method` is `QueryParam`.
    pub query_param_name: String,
    /// Raw JSON text, only read for methods that carry a body.
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Pairs,
    pub query: Pairs,
    pub body: Option<Value>,
    /// The entry in `headers` or `query` that carries the API key, if any.
    pub auth: Option<AuthBinding>,
}

pub fn compose(config: &RequestConfig) -> Result<PreparedRequest, ComposeError> {
    if config.base_url.is_empty() || config.endpoint.is_empty() {
        return Err(ComposeError::MissingTarget);
    }

    let body = if config.method.requires_body() {
        let text = config.body.as_deref().unwrap_or_default();
        Some(serde_json::from_str::<Value>(text).map_err(ComposeError::InvalidJsonBody)?)
    } else {
        None
    };

    let mut headers = vec![(ACCEPT_JSON.0.to_string(), ACCEPT_JSON.1.to_string())];
    let mut query = Vec::new();

    let api_key = config.api_key.as_deref().unwrap_or_default();
    let auth = AuthBinding::resolve(
        config.auth_method,
        api_key,
        &config.custom_header_name,
        &config.query_param_name,
    );
    if let Some(binding) = &auth {
        binding.apply(&mut headers, &mut query);
    }

    Ok(PreparedRequest {
        method: config.method,
        url: join_url(&config.base_url, &config.endpoint),
        headers,
        query,
        body,
        auth,
    })
}

/// Joins the two fragments with exactly one `/`, whatever slashes the user typed.
pub fn join_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(method: HttpMethod) -> RequestConfig {
        RequestConfig {
            base_url: "https://api.x.com".to_string(),
            endpoint: "/user".to_string(),
            method,
            auth_method: AuthMethod::Bearer,
            api_key: None,
            custom_header_name: String::new(),
            query_param_name: String::new(),
            body: None,
        }
    }

    #[test]
    fn test_join_url_slash_combinations() {
        let expected = "https://api.x.com/user";
        assert_eq!(join_url("https://api.x.com/", "/user"), expected);
        assert_eq!(join_url("https://api.x.com", "/user"), expected);
        assert_eq!(join_url("https://api.x.com/", "user"), expected);
        assert_eq!(join_url("https://api.x.com", "user"), expected);
        assert_eq!(join_url("https://api.x.com//", "//user"), expected);
    }

    #[test]
    fn test_join_url_keeps_nested_path() {
        assert_eq!(
            join_url("https://api.x.com/v1/", "/users/1/"),
            "https://api.x.com/v1/users/1/"
        );
    }

    #[test]
    fn test_missing_target() {
        let mut cfg = config(HttpMethod::GET);
        cfg.base_url = String::new();
        assert!(matches!(compose(&cfg), Err(ComposeError::MissingTarget)));

        let mut cfg = config(HttpMethod::GET);
        cfg.endpoint = String::new();
        assert!(matches!(compose(&cfg), Err(ComposeError::MissingTarget)));
    }

    #[test]
    fn test_base_headers_without_key() {
        let prepared = compose(&config(HttpMethod::GET)).unwrap();
        assert_eq!(
            prepared.headers,
            vec![("Accept".to_string(), "application/json".to_string())]
        );
        assert!(prepared.query.is_empty());
        assert_eq!(prepared.body, None);
        assert_eq!(prepared.auth, None);
    }

    #[test]
    fn test_bearer_goes_to_headers() {
        let mut cfg = config(HttpMethod::GET);
        cfg.api_key = Some("abc123".to_string());

        let prepared = compose(&cfg).unwrap();
        assert!(prepared
            .headers
            .contains(&("Authorization".to_string(), "Bearer abc123".to_string())));
        assert!(prepared.query.is_empty());
    }

    #[test]
    fn test_query_param_goes_to_query() {
        let mut cfg = config(HttpMethod::GET);
        cfg.auth_method = AuthMethod::QueryParam;
        cfg.query_param_name = "api_key".to_string();
        cfg.api_key = Some("abc123".to_string());

        let prepared = compose(&cfg).unwrap();
        assert_eq!(
            prepared.query,
            vec![("api_key".to_string(), "abc123".to_string())]
        );
        assert_eq!(prepared.headers.len(), 1);
        assert!(prepared.auth.unwrap().binds_query("api_key"));
    }

    #[test]
    fn test_custom_header_without_name_is_noop() {
        let mut cfg = config(HttpMethod::GET);
        cfg.auth_method = AuthMethod::CustomHeader;
        cfg.api_key = Some("abc123".to_string());

        let prepared = compose(&cfg).unwrap();
        assert_eq!(prepared.headers.len(), 1);
        assert!(prepared.query.is_empty());
    }

    #[test]
    fn test_post_with_invalid_body() {
        let mut cfg = config(HttpMethod::POST);
        cfg.body = Some("{not json".to_string());
        assert!(matches!(
            compose(&cfg),
            Err(ComposeError::InvalidJsonBody(_))
        ));
    }

    #[test]
    fn test_put_without_body_is_rejected() {
        let cfg = config(HttpMethod::PUT);
        assert!(matches!(
            compose(&cfg),
            Err(ComposeError::InvalidJsonBody(_))
        ));
    }

    #[test]
    fn test_post_with_valid_body() {
        let mut cfg = config(HttpMethod::POST);
        cfg.body = Some(r#"{"key": "value", "name": "example"}"#.to_string());

        let prepared = compose(&cfg).unwrap();
        assert_eq!(
            prepared.body,
            Some(serde_json::json!({"key": "value", "name": "example"}))
        );
    }

    #[test]
    fn test_get_ignores_body() {
        let mut cfg = config(HttpMethod::GET);
        cfg.body = Some("{not json".to_string());

        let prepared = compose(&cfg).unwrap();
        assert_eq!(prepared.body, None);
    }
}
