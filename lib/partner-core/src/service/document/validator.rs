use super::DocumentValidator;
use super::dto::DocumentRequestDTO;
use crate::model::document::Document;
use crate::service::error::{
    BusinessLogicError, EntityNotFoundError, ServiceError, ValidationError,
};

impl DocumentValidator {
    /// Validates a document that is about to be created
    ///
    /// Only one organizational profile may exist.
    pub async fn validate_new(&self, document: &DocumentRequestDTO) -> Result<(), ServiceError> {
        self.throw_if_profile_already_exists(document).await?;
        self.validate_internal(document).await
    }

    /// Validates an update of `existing`, the type of a document is immutable
    pub async fn validate_existing(
        &self,
        existing: Option<&Document>,
        document: &DocumentRequestDTO,
    ) -> Result<(), ServiceError> {
        let existing = existing.ok_or(ValidationError::DocumentMissing)?;

        if existing.r#type != document.r#type {
            return Err(ValidationError::DocumentTypeChanged {
                existing: existing.r#type.to_owned(),
                requested: document.r#type.to_owned(),
            }
            .into());
        }

        self.validate_internal(document).await
    }

    async fn throw_if_profile_already_exists(
        &self,
        document: &DocumentRequestDTO,
    ) -> Result<(), ServiceError> {
        let profile_type = &self.config.credential_types.profile.r#type;
        if document.r#type != *profile_type {
            return Ok(());
        }

        let documents = self.document_repository.get_document_list().await?;
        if documents.iter().any(|stored| stored.r#type == *profile_type) {
            return Err(BusinessLogicError::ProfileAlreadyExists.into());
        }

        Ok(())
    }

    async fn validate_internal(&self, document: &DocumentRequestDTO) -> Result<(), ServiceError> {
        if document.r#type != self.config.credential_types.indy.r#type {
            return Ok(());
        }

        let schema_id = document
            .schema_id
            .as_deref()
            .filter(|schema_id| !schema_id.is_empty())
            .ok_or(ValidationError::SchemaIdMissing)?;

        let schema = self
            .schema_repository
            .get_schema(schema_id)
            .await?
            .ok_or_else(|| EntityNotFoundError::Schema(schema_id.to_owned()))?;

        // only top level attributes are checked
        if let Some(attribute) = document
            .document_data
            .as_object()
            .into_iter()
            .flat_map(|attributes| attributes.keys())
            .find(|attribute| !schema.schema_attribute_names.contains(*attribute))
        {
            tracing::debug!(%schema_id, %attribute, "Attribute not part of schema");
            return Err(ValidationError::AttributeNotInSchema {
                attribute: attribute.to_owned(),
            }
            .into());
        }

        Ok(())
    }
}
