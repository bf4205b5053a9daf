pub mod did;
pub mod document;
pub mod partner;
pub mod presentation;
pub mod public_profile;
pub mod schema;
