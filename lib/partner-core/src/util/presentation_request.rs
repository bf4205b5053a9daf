use indexmap::IndexMap;

use crate::model::presentation::{
    PresentationExchange, PresentationRequest, PresentationRequestCredentials,
    RequestedAttribute, RequestedPredicate,
};

/// Answers a proof request with the first matching wallet credential per referent
///
/// Returns `None` when not a single referent could be matched.
pub fn accept_all(
    presentation_exchange: &PresentationExchange,
    matching_credentials: &[PresentationRequestCredentials],
) -> Option<PresentationRequest> {
    let proof_request = presentation_exchange.presentation_request.as_ref();

    let requested_attributes: IndexMap<_, _> = proof_request
        .and_then(|request| request.requested_attributes.as_ref())
        .into_iter()
        .flat_map(|attributes| attributes.keys())
        .filter_map(|referent| {
            let cred_id = match_referent(matching_credentials, referent)?;
            Some((
                referent.to_owned(),
                RequestedAttribute {
                    cred_id,
                    revealed: true,
                },
            ))
        })
        .collect();

    // the revocation timestamp is filled in by the agent
    let requested_predicates: IndexMap<_, _> = proof_request
        .and_then(|request| request.requested_predicates.as_ref())
        .into_iter()
        .flat_map(|predicates| predicates.keys())
        .filter_map(|referent| {
            let cred_id = match_referent(matching_credentials, referent)?;
            Some((referent.to_owned(), RequestedPredicate { cred_id }))
        })
        .collect();

    if requested_attributes.is_empty() && requested_predicates.is_empty() {
        tracing::debug!(
            presentation_exchange_id = %presentation_exchange.presentation_exchange_id,
            "No matching credentials for presentation request"
        );
        return None;
    }

    Some(PresentationRequest {
        requested_attributes,
        requested_predicates,
    })
}

fn match_referent(
    matching_credentials: &[PresentationRequestCredentials],
    referent: &str,
) -> Option<String> {
    matching_credentials
        .iter()
        .find(|credential| {
            credential
                .presentation_referents
                .iter()
                .any(|presentation_referent| presentation_referent == referent)
        })
        .map(|credential| credential.cred_info.referent.to_owned())
}
