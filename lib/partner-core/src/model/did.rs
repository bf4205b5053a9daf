use serde::{Deserialize, Serialize};
use shared_types::DidValue;

pub const PROFILE_SERVICE_TYPE: &str = "profile";
pub const ARIES_SERVICE_TYPE: &str = "did-communication";
pub const DEFAULT_VERIFICATION_KEY_TYPE: &str = "Ed25519VerificationKey2018";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidDocument {
    pub id: DidValue,
    #[serde(default)]
    pub verification_method: Vec<DidVerificationMethod>,
    #[serde(default)]
    pub service: Vec<DidService>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidVerificationMethod {
    pub id: String,
    pub r#type: String,
    pub controller: Option<String>,
    pub public_key_base58: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidService {
    pub id: String,
    pub r#type: String,
    pub service_endpoint: String,
}

impl DidDocument {
    pub fn find_public_profile_url(&self) -> Option<&str> {
        self.service
            .iter()
            .find(|service| service.r#type == PROFILE_SERVICE_TYPE)
            .map(|service| service.service_endpoint.as_str())
    }

    pub fn has_aries_endpoint(&self) -> bool {
        self.service
            .iter()
            .any(|service| service.r#type == ARIES_SERVICE_TYPE)
    }
}
