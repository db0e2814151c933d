use apx_lib::{ComposeError, HttpError, LoadError};
use std::fmt;

#[derive(Debug)]
pub enum ApxError {
    Compose(ComposeError),
    Http(HttpError),
    Load(LoadError),
    Validation(String),
    Generic(String),
}

impl fmt::Display for ApxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApxError::Compose(ComposeError::InvalidJsonBody(err)) => {
                write!(f, "Request body is not valid JSON: {err}")
            }
            ApxError::Compose(err) => write!(f, "{err}"),
            ApxError::Http(err) => write!(f, "{err}"),
            ApxError::Load(err) => write!(f, "{err}"),
            ApxError::Validation(msg) => write!(f, "Validation error: {msg}"),
            ApxError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ApxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApxError::Compose(err) => Some(err),
            ApxError::Http(err) => Some(err),
            ApxError::Load(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ComposeError> for ApxError {
    fn from(err: ComposeError) -> Self {
        ApxError::Compose(err)
    }
}

impl From<HttpError> for ApxError {
    fn from(err: HttpError) -> Self {
        ApxError::Http(err)
    }
}

impl From<LoadError> for ApxError {
    fn from(err: LoadError) -> Self {
        ApxError::Load(err)
    }
}
