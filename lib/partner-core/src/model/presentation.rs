use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PresentationExchange {
    pub presentation_exchange_id: String,
    pub presentation_request: Option<ProofRequest>,
}

/// Requested referents keep the order in which the verifier listed them
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProofRequest {
    pub requested_attributes: Option<IndexMap<String, Value>>,
    pub requested_predicates: Option<IndexMap<String, Value>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationRequestCredentials {
    pub presentation_referents: Vec<String>,
    pub cred_info: CredentialInfo,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialInfo {
    pub referent: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationRequest {
    pub requested_attributes: IndexMap<String, RequestedAttribute>,
    pub requested_predicates: IndexMap<String, RequestedPredicate>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedAttribute {
    pub cred_id: String,
    pub revealed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedPredicate {
    pub cred_id: String,
}
