use thiserror::Error;

pub mod core_config;

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Config parsing error: `{0}`")]
    GeneralParsingError(String),
    #[error(transparent)]
    Validation(#[from] ConfigValidationError),
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Empty value for partner state `{0}`")]
    EmptyStateValue(&'static str),
    #[error("Partner state value `{value}` used by both `{first}` and `{second}`")]
    DuplicateStateValue {
        value: String,
        first: &'static str,
        second: &'static str,
    },
    #[error("Empty type for credential type `{0}`")]
    EmptyCredentialType(String),
    #[error("Session cleanup interval must not be zero")]
    ZeroCleanupInterval,
}
