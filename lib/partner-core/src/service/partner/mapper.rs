use serde_json::Value;

use super::dto::{PartnerCredentialDTO, PartnerDTO};
use crate::model::partner::{CredentialPayload, Partner, PartnerCredential};

impl From<PartnerDTO> for Partner {
    fn from(value: PartnerDTO) -> Self {
        Self {
            id: value.id,
            did: value.did,
            alias: value.alias,
            state: value.state.into(),
            incoming: value.incoming,
            aries_support: value.aries_support,
            valid: value.valid,
            credential: value
                .credential
                .map(|credentials| credentials.into_iter().map(Into::into).collect()),
        }
    }
}

impl From<PartnerCredentialDTO> for PartnerCredential {
    fn from(value: PartnerCredentialDTO) -> Self {
        let payload = match (value.credential_data, value.document_data) {
            (Some(data), _) => CredentialPayload::CredentialData(data.unwrap_or(Value::Null)),
            (None, Some(data)) => CredentialPayload::DocumentData(data.unwrap_or(Value::Null)),
            (None, None) => CredentialPayload::None,
        };

        Self {
            id: value.id,
            r#type: value.r#type,
            payload,
        }
    }
}
