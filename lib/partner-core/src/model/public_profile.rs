use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Verifiable presentation published at a partner's profile endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    #[serde(default)]
    pub verifiable_credential: Vec<ProfileCredential>,
    pub proof: Option<ProfileProof>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCredential {
    pub r#type: Vec<String>,
    pub credential_subject: Value,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileProof {
    pub r#type: Option<String>,
    pub verification_method: Option<String>,
}
