//! Ledger and profile endpoint access used by partner lookup.

use thiserror::Error;

use crate::model::did::DidDocument;
use crate::model::public_profile::PublicProfile;

#[derive(Debug, Error)]
pub enum DidResolverError {
    #[error("Resolution failed: `{0}`")]
    Failed(String),
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait DidResolver: Send + Sync {
    async fn get_did_document(&self, did: &str) -> Result<Option<DidDocument>, DidResolverError>;

    async fn get_public_profile(
        &self,
        endpoint: &str,
    ) -> Result<Option<PublicProfile>, DidResolverError>;
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ProfileVerifier: Send + Sync {
    /// Checks the presentation proof against a base58 encoded public key
    fn verify(&self, public_key_base58: &str, profile: &PublicProfile) -> bool;
}
