//! Sends a prepared request once, with a bounded timeout.

use crate::compose::PreparedRequest;
use crate::error::HttpError;
use crate::response::ApiResponse;
use std::collections::BTreeMap;
use std::time::Duration;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub const USER_AGENT: &str = concat!("apx/", env!("CARGO_PKG_VERSION"));

pub async fn execute_request(request: &PreparedRequest) -> Result<ApiResponse, HttpError> {
    execute_request_with_timeout(request, REQUEST_TIMEOUT).await
}

pub async fn execute_request_with_timeout(
    request: &PreparedRequest,
    timeout: Duration,
) -> Result<ApiResponse, HttpError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(HttpError::Connection)?;

    let mut req_builder = client
        .request(request.method.to_reqwest_method(), &request.url)
        .header(reqwest::header::USER_AGENT, USER_AGENT);

    for (key, value) in &request.headers {
        req_builder = req_builder.header(key, value);
    }

    if !request.query.is_empty() {
        req_builder = req_builder.query(&request.query);
    }

    if let Some(body) = &request.body {
        req_builder = req_builder.json(body);
    }

    let response = req_builder.send().await.map_err(HttpError::Connection)?;
    let status = response.status().as_u16();

    let headers = collect_headers(response.headers());

    let body = response.text().await.map_err(HttpError::ResponseRead)?;

    Ok(ApiResponse::new(status, headers, body))
}

/// Repeated headers are joined with `", "`; bytes that are not UTF-8 are
/// replaced rather than dropped.
fn collect_headers(map: &reqwest::header::HeaderMap) -> BTreeMap<String, String> {
    map.keys()
        .map(|key| {
            let joined = map
                .get_all(key)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                .collect::<Vec<_>>()
                .join(", ");
            (key.to_string(), joined)
        })
        .collect()
}
