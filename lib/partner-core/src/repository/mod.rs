pub mod document_repository;
pub mod error;
pub mod schema_repository;
