use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequestDTO {
    pub r#type: String,
    pub schema_id: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    pub label: Option<String>,
    pub document_data: Value,
}
