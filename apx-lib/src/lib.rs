//! Request composition and OpenAPI catalog rendering for the `apx` tools.
//!
//! Two independent pieces live here:
//!
//! - the request composer ([`compose`]), dispatcher ([`http`]) and response
//!   renderer ([`response`]);
//! - the OpenAPI document loader, renderer and session ([`spec`]).

pub mod auth;
pub mod compose;
pub mod error;
pub mod http;
pub mod http_method;
pub mod response;
pub mod spec;

pub use auth::{AuthBinding, AuthMethod};
pub use compose::{compose, join_url, PreparedRequest, RequestConfig};
pub use error::{ComposeError, HttpError, LoadError};
pub use http::{execute_request, REQUEST_TIMEOUT};
pub use http_method::{HttpMethod, MethodColor};
pub use response::{ApiResponse, ResponseBody, ResponseView, StatusClass};
pub use spec::{OpenApiSpec, SpecCatalog, SpecSession};
