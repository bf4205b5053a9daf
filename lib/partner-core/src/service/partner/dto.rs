use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::{CredentialId, DidValue, PartnerId};
use strum::{AsRefStr, Display};

use crate::model::partner::PartnerStateDescriptor;

/// Partner as sent by the agent API
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerDTO {
    #[serde(default)]
    pub id: PartnerId,
    pub did: Option<DidValue>,
    pub alias: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub state: Option<Option<String>>,
    pub incoming: Option<bool>,
    pub aries_support: Option<bool>,
    pub valid: Option<bool>,
    pub credential: Option<Vec<PartnerCredentialDTO>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerCredentialDTO {
    #[serde(default)]
    pub id: CredentialId,
    #[serde(default)]
    pub r#type: String,
    // outer `Some` means the key is present, even when set to null
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub credential_data: Option<Option<Value>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub document_data: Option<Option<Value>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PartnerProfileRoute {
    pub name: ProfileRouteName,
    pub params: ProfileRouteParams,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Display)]
pub enum ProfileRouteName {
    Credential,
    Document,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileRouteParams {
    pub id: CredentialId,
}

/// Either a raw connection state value or a descriptor taken from the state table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartnerStateRef<'a> {
    Value(&'a str),
    Descriptor(&'a PartnerStateDescriptor),
}

impl<'a> From<&'a str> for PartnerStateRef<'a> {
    fn from(value: &'a str) -> Self {
        Self::Value(value)
    }
}

impl<'a> From<&'a String> for PartnerStateRef<'a> {
    fn from(value: &'a String) -> Self {
        Self::Value(value.as_str())
    }
}

impl<'a> From<&'a PartnerStateDescriptor> for PartnerStateRef<'a> {
    fn from(value: &'a PartnerStateDescriptor) -> Self {
        Self::Descriptor(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StateColor {
    Yellow,
    Red,
    Green,
    Grey,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerPresentationDTO {
    pub id: PartnerId,
    pub profile: Option<Value>,
    pub profile_route: Option<PartnerProfileRoute>,
    pub state: Option<PartnerStateDescriptor>,
    pub state_color: StateColor,
}
