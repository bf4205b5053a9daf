//! Partner presentation and activity logic of the business partner agent.

use std::sync::Arc;

use config::core_config::PresentationConfig;
use provider::did_resolver::{DidResolver, ProfileVerifier};
use repository::document_repository::DocumentRepository;
use repository::schema_repository::SchemaRepository;
use service::document::DocumentValidator;
use service::error::ServiceError;
use service::partner::PartnerPresentationService;
use service::partner_lookup::PartnerLookupService;

pub mod config;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;
pub mod util;

#[derive(Clone)]
pub struct PartnerCore {
    pub partner_presentation_service: PartnerPresentationService,
    pub partner_lookup_service: PartnerLookupService,
    pub document_validator: DocumentValidator,
    pub config: Arc<PresentationConfig>,
}

impl PartnerCore {
    /// Validates `config` once more, it may have been built without the loaders
    pub fn new(
        config: PresentationConfig,
        document_repository: Arc<dyn DocumentRepository>,
        schema_repository: Arc<dyn SchemaRepository>,
        did_resolver: Arc<dyn DidResolver>,
        profile_verifier: Arc<dyn ProfileVerifier>,
    ) -> Result<Self, ServiceError> {
        config.validate()?;
        let config = Arc::new(config);

        Ok(Self {
            partner_presentation_service: PartnerPresentationService::new(config.clone()),
            partner_lookup_service: PartnerLookupService::new(
                did_resolver,
                profile_verifier,
                config.clone(),
            ),
            document_validator: DocumentValidator::new(
                document_repository,
                schema_repository,
                config.clone(),
            ),
            config,
        })
    }
}
