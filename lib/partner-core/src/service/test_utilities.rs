use serde_json::{Value, json};
use shared_types::CredentialId;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::config::core_config::PresentationConfig;
use crate::model::document::Document;
use crate::model::partner::{CredentialPayload, Partner, PartnerCredential};

pub const PROFILE_TYPE: &str = "ORGANIZATIONAL_PROFILE_CREDENTIAL";
pub const INDY_TYPE: &str = "INDY";

pub fn generic_config() -> PresentationConfig {
    PresentationConfig::bundled().unwrap()
}

pub fn dummy_partner() -> Partner {
    Partner {
        id: Uuid::new_v4().into(),
        ..Default::default()
    }
}

pub fn partner_with_credentials(credentials: Vec<PartnerCredential>) -> Partner {
    Partner {
        credential: Some(credentials),
        ..dummy_partner()
    }
}

pub fn credential(r#type: &str, payload: CredentialPayload) -> PartnerCredential {
    PartnerCredential {
        id: CredentialId::from(Uuid::new_v4()),
        r#type: r#type.to_owned(),
        payload,
    }
}

pub fn dummy_document(r#type: &str, document_data: Value) -> Document {
    let now = OffsetDateTime::now_utc();
    Document {
        id: Uuid::new_v4().into(),
        created_date: now,
        last_modified: now,
        r#type: r#type.to_owned(),
        schema_id: None,
        is_public: true,
        label: None,
        document_data,
    }
}

pub fn profile_data() -> Value {
    json!({
        "legalName": "Acme Corp",
        "type": "LegalEntity",
    })
}
