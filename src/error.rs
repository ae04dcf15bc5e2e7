use thiserror::Error;

/// Data errors raised while validating colors, templates, and configuration.
///
/// I/O failures are not represented here; they travel as `anyhow::Error`
/// with context attached at the call site.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IconError {
    #[error("Language code must not be empty")]
    EmptyLanguageCode,

    #[error("Language code '{0}' must not contain path separators or '..'")]
    InvalidLanguageCode(String),

    #[error("Language '{code}' has {count} colors, at most 3 are supported")]
    TooManyColors { code: String, count: usize },

    #[error("Template '{template}' is missing required token '{token}'")]
    MissingToken {
        template: &'static str,
        token: &'static str,
    },

    #[error("Expected the '{expected}' template, got '{found}'")]
    WrongTemplate {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfig { key: &'static str, value: String },
}
