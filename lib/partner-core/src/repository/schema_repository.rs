use super::error::DataLayerError;
use crate::model::schema::Schema;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait SchemaRepository: Send + Sync {
    async fn get_schema(&self, schema_id: &str) -> Result<Option<Schema>, DataLayerError>;
}
