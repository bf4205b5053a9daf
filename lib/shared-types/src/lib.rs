mod credential_id;
mod did_value;
mod document_id;
mod macros;
mod partner_id;

pub use credential_id::CredentialId;
pub use did_value::DidValue;
pub use document_id::DocumentId;
pub use partner_id::PartnerId;
