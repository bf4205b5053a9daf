pub mod dto;
pub mod validator;

use std::sync::Arc;

use crate::config::core_config::PresentationConfig;
use crate::repository::document_repository::DocumentRepository;
use crate::repository::schema_repository::SchemaRepository;

/// Checks self-issued documents before they are stored
#[derive(Clone)]
pub struct DocumentValidator {
    document_repository: Arc<dyn DocumentRepository>,
    schema_repository: Arc<dyn SchemaRepository>,
    config: Arc<PresentationConfig>,
}

impl DocumentValidator {
    pub fn new(
        document_repository: Arc<dyn DocumentRepository>,
        schema_repository: Arc<dyn SchemaRepository>,
        config: Arc<PresentationConfig>,
    ) -> Self {
        Self {
            document_repository,
            schema_repository,
            config,
        }
    }
}
