use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::{CredentialId, DidValue, PartnerId};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partner {
    pub id: PartnerId,
    pub did: Option<DidValue>,
    pub alias: Option<String>,
    pub state: ConnectionState,
    pub incoming: Option<bool>,
    pub aries_support: Option<bool>,
    pub valid: Option<bool>,

    // Relations:
    pub credential: Option<Vec<PartnerCredential>>,
}

/// Raw connection state code, an explicit `null` is kept apart from a missing field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Missing,
    Null,
    Code(String),
}

impl ConnectionState {
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Code(code) => Some(code),
            Self::Missing | Self::Null => None,
        }
    }
}

impl From<Option<Option<String>>> for ConnectionState {
    fn from(value: Option<Option<String>>) -> Self {
        match value {
            None => Self::Missing,
            Some(None) => Self::Null,
            Some(Some(code)) => Self::Code(code),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PartnerCredential {
    pub id: CredentialId,
    pub r#type: String,
    pub payload: CredentialPayload,
}

/// `credentialData` and `documentData` never appear together on one credential
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CredentialPayload {
    CredentialData(Value),
    DocumentData(Value),
    #[default]
    None,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerStateDescriptor {
    pub value: String,
    pub label: String,
}

impl PartnerStateDescriptor {
    pub fn empty() -> Self {
        Self::default()
    }
}
