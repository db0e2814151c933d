use serde::Serialize;

/// Methods the request composer can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
}

impl HttpMethod {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(Self::GET),
            "POST" => Some(Self::POST),
            "PUT" => Some(Self::PUT),
            "DELETE" => Some(Self::DELETE),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GET => "GET",
            Self::POST => "POST",
            Self::PUT => "PUT",
            Self::DELETE => "DELETE",
        }
    }

    /// POST and PUT carry a JSON body; GET and DELETE never do.
    pub fn requires_body(&self) -> bool {
        match self {
            Self::POST | Self::PUT => true,
            Self::GET | Self::DELETE => false,
        }
    }

    pub fn to_reqwest_method(&self) -> reqwest::Method {
        match self {
            Self::GET => reqwest::Method::GET,
            Self::POST => reqwest::Method::POST,
            Self::PUT => reqwest::Method::PUT,
            Self::DELETE => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display tag for an operation key found in a spec document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodColor {
    Blue,
    Green,
    Orange,
    Red,
    Gray,
}

impl MethodColor {
    pub fn for_method(method: &str) -> Self {
        match HttpMethod::from_str(method) {
            Some(HttpMethod::GET) => Self::Blue,
            Some(HttpMethod::POST) => Self::Green,
            Some(HttpMethod::PUT) => Self::Orange,
            Some(HttpMethod::DELETE) => Self::Red,
            None => Self::Gray,
        }
    }
}
