pub mod dto;
pub mod mapper;
pub mod service;

use std::sync::Arc;

use crate::config::core_config::PresentationConfig;

/// Derives everything the partner views display from a partner record
#[derive(Clone)]
pub struct PartnerPresentationService {
    config: Arc<PresentationConfig>,
}

impl PartnerPresentationService {
    pub fn new(config: Arc<PresentationConfig>) -> Self {
        Self { config }
    }
}

#[cfg(test)]
mod test;
