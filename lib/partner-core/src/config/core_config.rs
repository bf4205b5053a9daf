use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
use figment::providers::{Data, Format, Yaml};
use serde::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};

use super::{ConfigParsingError, ConfigValidationError};
use crate::model::partner::PartnerStateDescriptor;

type Dict<K, V> = BTreeMap<K, V>;

const DEFAULT_CONFIG: &str = include_str!("default.yml");

const RAW_STATE_COUNT: usize = 8;

/// Read-only lookup tables and runtime settings shared by all services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationConfig {
    pub credential_types: CredentialTypesConfig,
    pub partner_states: PartnerStatesConfig,
    #[serde(default)]
    pub messaging: MessagingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CredentialTypesConfig {
    pub profile: CredentialTypeFields,
    pub indy: CredentialTypeFields,
    #[serde(flatten)]
    pub other: Dict<String, CredentialTypeFields>,
}

impl CredentialTypesConfig {
    /// Entry announced by any of the W3C `types` of a credential
    pub fn find_by_vc_type(&self, types: &[String]) -> Option<&CredentialTypeFields> {
        [&self.profile, &self.indy]
            .into_iter()
            .chain(self.other.values())
            .find(|fields| {
                fields
                    .vc_type
                    .as_ref()
                    .is_some_and(|vc_type| types.contains(vc_type))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialTypeFields {
    pub r#type: String,
    pub label: String,
    /// W3C credential type announced in public profiles
    #[serde(default)]
    pub vc_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PartnerStatesConfig {
    pub request: PartnerStateDescriptor,
    pub invitation: PartnerStateDescriptor,
    pub active: PartnerStateDescriptor,
    pub response: PartnerStateDescriptor,
    pub completed: PartnerStateDescriptor,
    pub ping_response: PartnerStateDescriptor,
    pub ping_no_response: PartnerStateDescriptor,
    pub abandoned: PartnerStateDescriptor,

    // not tied to a single connection state
    pub active_or_response: PartnerStateDescriptor,
    pub connection_request_sent: PartnerStateDescriptor,
    pub connection_request_received: PartnerStateDescriptor,
}

impl PartnerStatesConfig {
    /// All descriptors in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &PartnerStateDescriptor> {
        self.named().into_iter().map(|(_, descriptor)| descriptor)
    }

    fn named(&self) -> [(&'static str, &PartnerStateDescriptor); 11] {
        [
            ("REQUEST", &self.request),
            ("INVITATION", &self.invitation),
            ("ACTIVE", &self.active),
            ("RESPONSE", &self.response),
            ("COMPLETED", &self.completed),
            ("PING_RESPONSE", &self.ping_response),
            ("PING_NO_RESPONSE", &self.ping_no_response),
            ("ABANDONED", &self.abandoned),
            ("ACTIVE_OR_RESPONSE", &self.active_or_response),
            ("CONNECTION_REQUEST_SENT", &self.connection_request_sent),
            ("CONNECTION_REQUEST_RECEIVED", &self.connection_request_received),
        ]
    }

    /// Values that collapse into [`Self::active_or_response`]
    pub(crate) fn is_active_or_response_value(&self, value: &str) -> bool {
        value == self.active.value
            || value == self.response.value
            || value == self.completed.value
            || value == self.ping_response.value
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingConfig {
    #[serde_as(as = "DurationSeconds<u64>")]
    pub cleanup_interval: Duration,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub initial_delay: Duration,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            cleanup_interval: Duration::from_secs(60 * 60),
            initial_delay: Duration::from_secs(2 * 60),
        }
    }
}

pub enum InputFormat {
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl InputFormat {
    pub fn yaml_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Yaml(Yaml::file(p))
    }

    pub fn yaml_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(s.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Json(Json::file(p))
    }

    #[cfg(feature = "config_json")]
    pub fn json_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Json(Json::string(s.as_ref()))
    }
}

impl PresentationConfig {
    /// The bundled tables without any overrides
    pub fn bundled() -> Result<Self, ConfigParsingError> {
        Self::parse(std::iter::empty::<InputFormat>())
    }

    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let mut inputs: Vec<InputFormat> = Vec::with_capacity(files.len());

        for path in files {
            if path
                .as_ref()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
            {
                inputs.push(InputFormat::yaml_file(path));
                continue;
            }

            #[cfg(feature = "config_json")]
            if path.as_ref().extension() == Some("json".as_ref()) {
                inputs.push(InputFormat::json_file(path));
                continue;
            }

            return Err(ConfigParsingError::GeneralParsingError(format!(
                "Unsupported file or missing file extension: {}",
                path.as_ref().display()
            )));
        }

        Self::parse(inputs)
    }

    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        Self::parse(configs.into_iter().map(InputFormat::yaml_str))
    }

    /// Merges `inputs` in order on top of the bundled defaults
    pub fn parse(inputs: impl IntoIterator<Item = InputFormat>) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new().merge(Yaml::string(DEFAULT_CONFIG));

        for data in inputs {
            figment = match data {
                InputFormat::Yaml(content) => figment.merge(content),
                #[cfg(feature = "config_json")]
                InputFormat::Json(content) => figment.merge(content),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed("BPA_").split("__").lowercase(false));
        }

        let config = figment
            .extract::<PresentationConfig>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let named = self.partner_states.named();

        // raw codes must never resolve to a synthetic entry
        for (index, &(name, descriptor)) in named.iter().enumerate() {
            if index < RAW_STATE_COUNT && descriptor.value.is_empty() {
                return Err(ConfigValidationError::EmptyStateValue(name));
            }

            if let Some(&(first, _)) = named[..index]
                .iter()
                .find(|(_, previous)| previous.value == descriptor.value)
            {
                return Err(ConfigValidationError::DuplicateStateValue {
                    value: descriptor.value.to_owned(),
                    first,
                    second: name,
                });
            }
        }

        let credential_types = [
            ("PROFILE", &self.credential_types.profile),
            ("INDY", &self.credential_types.indy),
        ]
        .into_iter()
        .chain(
            self.credential_types
                .other
                .iter()
                .map(|(key, fields)| (key.as_str(), fields)),
        );

        for (key, fields) in credential_types {
            if fields.r#type.is_empty() {
                return Err(ConfigValidationError::EmptyCredentialType(key.to_owned()));
            }
        }

        if self.messaging.cleanup_interval.is_zero() {
            return Err(ConfigValidationError::ZeroCleanupInterval);
        }

        Ok(())
    }
}
