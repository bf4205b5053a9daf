use serde_json::Value;
use shared_types::DocumentId;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub r#type: String,
    pub schema_id: Option<String>,
    pub is_public: bool,
    pub label: Option<String>,
    pub document_data: Value,
}
