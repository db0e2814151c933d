use crate::core::formatter::OutputFormat;
use clap::Args;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

/// Replaces every occurrence of `secret` in `value`.
pub fn mask_secret(value: &str, secret: Option<&str>) -> String {
    match secret {
        Some(s) if !s.is_empty() => value.replace(s, "********"),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        assert_eq!(
            mask_secret("Bearer abc123", Some("abc123")),
            "Bearer ********"
        );
        assert_eq!(mask_secret("application/json", Some("abc123")), "application/json");
        assert_eq!(mask_secret("abc123", None), "abc123");
        assert_eq!(mask_secret("abc123", Some("")), "abc123");
    }
}
