use crate::model::did::{DEFAULT_VERIFICATION_KEY_TYPE, DidVerificationMethod};

/// Finds the base58 public key that signed a public profile
///
/// Prefers the method referenced by the proof and falls back to the first
/// [`DEFAULT_VERIFICATION_KEY_TYPE`] key of the DID document.
pub fn match_verification_key<'a>(
    verification_method: Option<&str>,
    verification_methods: &'a [DidVerificationMethod],
) -> Option<&'a str> {
    let referenced = verification_method
        .filter(|method| !method.is_empty())
        .and_then(|method| verification_methods.iter().find(|key| key.id == method));

    let key = referenced.or_else(|| {
        verification_methods
            .iter()
            .find(|key| key.r#type == DEFAULT_VERIFICATION_KEY_TYPE)
    });

    let Some(key) = key else {
        tracing::warn!(
            "Expected at least one {DEFAULT_VERIFICATION_KEY_TYPE} in the did document, but found none"
        );
        return None;
    };

    key.public_key_base58.as_deref()
}
