use apx_lib::{AuthMethod, HttpMethod};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // RFC 9110 token characters
    static ref HEADER_NAME_REGEX: Regex = Regex::new(r"^[!#$%&'*+.^_`|~0-9A-Za-z-]+$").unwrap();
    static ref HTTP_URL_REGEX: Regex = Regex::new(r"^https?://\S+$").unwrap();
}

pub fn validate_method(method: &str) -> Result<HttpMethod, String> {
    HttpMethod::from_str(method)
        .ok_or_else(|| format!("Unsupported method: {method} (expected GET, POST, PUT or DELETE)"))
}

pub fn validate_auth_method(auth: &str) -> Result<AuthMethod, String> {
    AuthMethod::from_str(auth)
        .ok_or_else(|| format!("Unknown auth method: {auth} (expected bearer, header or query)"))
}

/// An empty name is accepted; the auth binding is then skipped.
pub fn validate_header_name(name: &str) -> Result<String, String> {
    if name.is_empty() || HEADER_NAME_REGEX.is_match(name) {
        Ok(name.to_string())
    } else {
        Err(format!("Invalid header name: {name}"))
    }
}

/// An empty name is accepted; the auth binding is then skipped.
pub fn validate_query_param_name(name: &str) -> Result<String, String> {
    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        Err(format!("Invalid query parameter name: {name:?}"))
    } else {
        Ok(name.to_string())
    }
}

/// An empty URL is let through so the command can report it itself.
pub fn validate_spec_url(url: &str) -> Result<String, String> {
    if url.is_empty() || HTTP_URL_REGEX.is_match(url) {
        Ok(url.to_string())
    } else {
        Err(format!("URL must start with http:// or https://: {url}"))
    }
}
