use shared_types::CredentialId;
use uuid::Uuid;

use crate::config::core_config::CredentialTypesConfig;
use crate::model::partner::{CredentialPayload, Partner, PartnerCredential};
use crate::model::public_profile::{ProfileCredential, PublicProfile};

const VERIFIABLE_CREDENTIAL_TYPE: &str = "VerifiableCredential";

pub(super) fn partner_from_public_profile(
    profile: &PublicProfile,
    credential_types: &CredentialTypesConfig,
) -> Partner {
    let credential = profile
        .verifiable_credential
        .iter()
        .map(|credential| partner_credential_from_profile(credential, credential_types))
        .collect();

    Partner {
        id: Uuid::new_v4().into(),
        credential: Some(credential),
        ..Default::default()
    }
}

fn partner_credential_from_profile(
    credential: &ProfileCredential,
    credential_types: &CredentialTypesConfig,
) -> PartnerCredential {
    let r#type = match credential_types.find_by_vc_type(&credential.r#type) {
        Some(fields) => fields.r#type.to_owned(),
        None => credential
            .r#type
            .iter()
            .rev()
            .find(|vc_type| *vc_type != VERIFIABLE_CREDENTIAL_TYPE)
            .cloned()
            .unwrap_or_default(),
    };

    PartnerCredential {
        id: CredentialId::from(Uuid::new_v4()),
        r#type,
        payload: CredentialPayload::CredentialData(credential.credential_subject.to_owned()),
    }
}
