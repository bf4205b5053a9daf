use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::provider::did_resolver::DidResolverError;
use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Config validation error `{0}`")]
    ConfigValidationError(#[from] ConfigValidationError),

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),
    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    PartnerLookup(#[from] PartnerLookupError),
    #[error(transparent)]
    Repository(#[from] DataLayerError),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Schema `{0}` not found")]
    Schema(String),
}

#[derive(Debug, Error)]
pub enum BusinessLogicError {
    #[error("Organizational profile already exists")]
    ProfileAlreadyExists,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("No document to update")]
    DocumentMissing,
    #[error("Document type cannot be changed from `{existing}` to `{requested}`")]
    DocumentTypeChanged { existing: String, requested: String },
    #[error("Schema id missing")]
    SchemaIdMissing,
    #[error("Attribute `{attribute}` is not part of the schema")]
    AttributeNotInSchema { attribute: String },
}

#[derive(Debug, Error)]
pub enum PartnerLookupError {
    #[error("No DID document found on the ledger")]
    NoDidDocument,
    #[error("No public profile found at endpoint `{endpoint}`")]
    NoProfileAtEndpoint { endpoint: String },
    #[error("Resolver error: `{0}`")]
    Resolver(#[from] DidResolverError),
}

#[derive(Debug, PartialEq, Eq)]
pub enum ErrorCode {
    Document001,
    Document002,
    Document003,

    Schema001,
    Schema002,

    Partner001,
    Partner002,
    Partner003,

    Config,
    Database,
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::BusinessLogic(error) => error.error_code(),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::PartnerLookup(error) => error.error_code(),
            ServiceError::Repository(error) => error.error_code(),
            ServiceError::ConfigValidationError(_) => ErrorCode::Config,
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityNotFoundError::Schema(_) => ErrorCode::Schema001,
        }
    }
}

impl BusinessLogicError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BusinessLogicError::ProfileAlreadyExists => ErrorCode::Document001,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::DocumentMissing => ErrorCode::Document002,
            ValidationError::DocumentTypeChanged { .. } => ErrorCode::Document003,
            ValidationError::SchemaIdMissing | ValidationError::AttributeNotInSchema { .. } => {
                ErrorCode::Schema002
            }
        }
    }
}

impl PartnerLookupError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            PartnerLookupError::NoDidDocument => ErrorCode::Partner001,
            PartnerLookupError::NoProfileAtEndpoint { .. } => ErrorCode::Partner002,
            PartnerLookupError::Resolver(_) => ErrorCode::Partner003,
        }
    }
}
