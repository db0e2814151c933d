use crate::core::error::ApxError;
use apx_lib::LoadError;

/// Exit codes for the apx CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    Success = 0,
    /// General/unspecified error
    GeneralError = 1,
    /// Rejected before any network call (missing target, bad body, bad input)
    ValidationError = 2,
    /// Connection failure, timeout, or a spec URL answering with a non-2xx status
    NetworkError = 3,
    /// Spec document is not valid JSON
    ParseError = 4,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&ApxError> for ExitCode {
    fn from(error: &ApxError) -> Self {
        match error {
            ApxError::Compose(_) => ExitCode::ValidationError,
            ApxError::Validation(_) => ExitCode::ValidationError,
            ApxError::Http(_) => ExitCode::NetworkError,
            ApxError::Load(LoadError::Network { .. }) => ExitCode::NetworkError,
            ApxError::Load(LoadError::Parse { .. }) => ExitCode::ParseError,
            ApxError::Generic(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        match error.downcast_ref::<ApxError>() {
            Some(apx_error) => ExitCode::from(apx_error),
            None => ExitCode::GeneralError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apx_lib::ComposeError;

    #[test]
    fn test_compose_errors_are_validation() {
        let err = ApxError::Compose(ComposeError::MissingTarget);
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&err).code(), 2);
    }

    #[test]
    fn test_load_errors() {
        let network = ApxError::Load(LoadError::Network {
            reason: "refused".to_string(),
            status: None,
        });
        let not_found = ApxError::Load(LoadError::Network {
            reason: "404".to_string(),
            status: Some(404),
        });
        let parse = ApxError::Load(LoadError::Parse {
            reason: "expected value".to_string(),
        });

        assert_eq!(ExitCode::from(&network), ExitCode::NetworkError);
        assert_eq!(ExitCode::from(&not_found), ExitCode::NetworkError);
        assert_eq!(ExitCode::from(&parse), ExitCode::ParseError);
    }

    #[test]
    fn test_boxed_errors() {
        let boxed: Box<dyn std::error::Error> = Box::new(ApxError::Validation("x".to_string()));
        assert_eq!(ExitCode::from(&boxed), ExitCode::ValidationError);

        let other: Box<dyn std::error::Error> = "plain".into();
        assert_eq!(ExitCode::from(&other), ExitCode::GeneralError);
    }
}
