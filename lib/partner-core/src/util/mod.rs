pub mod key_verification;
pub mod presentation_request;
