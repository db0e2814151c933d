pub type Pairs = Vec<(String, String)>;

const AUTHORIZATION: &str = "Authorization";

/// Where the API key travels on an outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    Bearer,
    CustomHeader,
    QueryParam,
}

impl AuthMethod {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bearer" => Some(Self::Bearer),
            "header" | "custom_header" => Some(Self::CustomHeader),
            "query" | "query_param" => Some(Self::QueryParam),
            _ => None,
        }
    }
}

/// A single header or query parameter carrying the API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthBinding {
    Header { name: String, value: String },
    Query { name: String, value: String },
}

impl AuthBinding {
    /// Picks the binding for `method`, or `None` when the key or the name the
    /// method needs is empty.
    pub fn resolve(
        method: AuthMethod,
        api_key: &str,
        custom_header_name: &str,
        query_param_name: &str,
    ) -> Option<Self> {
        if api_key.is_empty() {
            return None;
        }

        match method {
            AuthMethod::Bearer => Some(Self::Header {
                name: AUTHORIZATION.to_string(),
                value: format!("Bearer {api_key}"),
            }),
            AuthMethod::CustomHeader if !custom_header_name.is_empty() => Some(Self::Header {
                name: custom_header_name.to_string(),
                value: api_key.to_string(),
            }),
            AuthMethod::QueryParam if !query_param_name.is_empty() => Some(Self::Query {
                name: query_param_name.to_string(),
                value: api_key.to_string(),
            }),
            AuthMethod::CustomHeader | AuthMethod::QueryParam => None,
        }
    }

    /// Adds the binding to exactly one of the two sets, replacing an entry
    /// with the same name.
    pub fn apply(&self, headers: &mut Pairs, query: &mut Pairs) {
        match self {
            Self::Header { name, value } => upsert(headers, name, value, true),
            Self::Query { name, value } => upsert(query, name, value, false),
        }
    }

    /// Header names compare case-insensitively.
    pub fn binds_header(&self, key: &str) -> bool {
        matches!(self, Self::Header { name, .. } if name.eq_ignore_ascii_case(key))
    }

    pub fn binds_query(&self, key: &str) -> bool {
        matches!(self, Self::Query { name, .. } if name == key)
    }
}

fn upsert(pairs: &mut Pairs, name: &str, value: &str, ignore_case: bool) {
    let existing = pairs.iter().position(|(key, _)| {
        if ignore_case {
            key.eq_ignore_ascii_case(name)
        } else {
            key == name
        }
    });

    let entry = (name.to_string(), value.to_string());
    match existing {
        Some(i) => pairs[i] = entry,
        None => pairs.push(entry),
    }
}
