use super::error::DataLayerError;
use crate::model::document::Document;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn get_document_list(&self) -> Result<Vec<Document>, DataLayerError>;
}
