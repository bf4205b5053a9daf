use shared_types::DidValue;

use super::PartnerLookupService;
use super::mapper::partner_from_public_profile;
use crate::model::did::DidVerificationMethod;
use crate::model::partner::Partner;
use crate::service::error::{PartnerLookupError, ServiceError};
use crate::util::key_verification::match_verification_key;

impl PartnerLookupService {
    /// Resolves a DID and loads the public profile it advertises
    ///
    /// # Arguments
    ///
    /// * `did` - public DID of the partner
    pub async fn lookup_partner(&self, did: &DidValue) -> Result<Partner, ServiceError> {
        let did_document = self
            .did_resolver
            .get_did_document(did.as_str())
            .await
            .map_err(PartnerLookupError::from)?
            .ok_or(PartnerLookupError::NoDidDocument)?;

        let aries_support = did_document.has_aries_endpoint();

        let Some(endpoint) = did_document.find_public_profile_url() else {
            tracing::warn!(
                %did,
                "Did has no profile endpoint on the ledger, probably not a business partner agent"
            );
            return Ok(Partner {
                did: Some(did_document.id.to_owned()),
                aries_support: Some(aries_support),
                ..Default::default()
            });
        };

        let mut partner = self
            .lookup_partner_at_endpoint(endpoint, &did_document.verification_method)
            .await?;
        partner.did = Some(did_document.id.to_owned());
        partner.aries_support = Some(aries_support);

        Ok(partner)
    }

    async fn lookup_partner_at_endpoint(
        &self,
        endpoint: &str,
        verification_methods: &[DidVerificationMethod],
    ) -> Result<Partner, ServiceError> {
        tracing::debug!(%endpoint, "Loading public profile");

        let profile = self
            .did_resolver
            .get_public_profile(endpoint)
            .await
            .map_err(PartnerLookupError::from)?
            .ok_or_else(|| PartnerLookupError::NoProfileAtEndpoint {
                endpoint: endpoint.to_owned(),
            })?;

        let mut partner = partner_from_public_profile(&profile, &self.config.credential_types);

        let verification_method = profile
            .proof
            .as_ref()
            .and_then(|proof| proof.verification_method.as_deref());

        // left unset when no key could be matched
        if let Some(public_key) = match_verification_key(verification_method, verification_methods)
        {
            partner.valid = Some(self.profile_verifier.verify(public_key, &profile));
        }

        Ok(partner)
    }
}
