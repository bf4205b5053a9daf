pub mod mapper;
pub mod service;

use std::sync::Arc;

use crate::config::core_config::PresentationConfig;
use crate::provider::did_resolver::{DidResolver, ProfileVerifier};

/// Builds partner records for DIDs found on the ledger
#[derive(Clone)]
pub struct PartnerLookupService {
    did_resolver: Arc<dyn DidResolver>,
    profile_verifier: Arc<dyn ProfileVerifier>,
    config: Arc<PresentationConfig>,
}

impl PartnerLookupService {
    pub fn new(
        did_resolver: Arc<dyn DidResolver>,
        profile_verifier: Arc<dyn ProfileVerifier>,
        config: Arc<PresentationConfig>,
    ) -> Self {
        Self {
            did_resolver,
            profile_verifier,
            config,
        }
    }
}
