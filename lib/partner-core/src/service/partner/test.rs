use std::sync::Arc;

use rstest::rstest;
use serde_json::{Value, json};
use similar_asserts::assert_eq;

use super::PartnerPresentationService;
use super::dto::{PartnerDTO, ProfileRouteName, StateColor};
use crate::model::partner::{
    ConnectionState, CredentialPayload, Partner, PartnerStateDescriptor,
};
use crate::service::test_utilities::{
    INDY_TYPE, PROFILE_TYPE, credential, dummy_partner, generic_config, partner_with_credentials,
    profile_data,
};

fn setup_service() -> PartnerPresentationService {
    PartnerPresentationService::new(Arc::new(generic_config()))
}

fn partner_in_state(state: &str, incoming: Option<bool>) -> Partner {
    Partner {
        state: ConnectionState::Code(state.to_owned()),
        incoming,
        ..dummy_partner()
    }
}

fn descriptor(value: &str, label: &str) -> PartnerStateDescriptor {
    PartnerStateDescriptor {
        value: value.to_owned(),
        label: label.to_owned(),
    }
}

#[test]
fn test_get_partner_profile_without_partner() {
    let service = setup_service();

    assert_eq!(service.get_partner_profile(None), None);
    assert_eq!(service.get_partner_profile_route(None), None);
}

#[test]
fn test_get_partner_profile_without_credentials() {
    let service = setup_service();
    let partner = dummy_partner();

    assert_eq!(service.get_partner_profile(Some(&partner)), None);
    assert_eq!(service.get_partner_profile_route(Some(&partner)), None);
}

#[test]
fn test_get_partner_profile_from_credential_data() {
    let service = setup_service();
    let profile = credential(
        PROFILE_TYPE,
        CredentialPayload::CredentialData(json!({ "x": 1 })),
    );
    let profile_id = profile.id;
    let partner = partner_with_credentials(vec![profile]);

    assert_eq!(
        service.get_partner_profile(Some(&partner)),
        Some(&json!({ "x": 1 }))
    );

    let route = service.get_partner_profile_route(Some(&partner)).unwrap();
    assert_eq!(route.name, ProfileRouteName::Credential);
    assert_eq!(route.params.id, profile_id);
}

#[test]
fn test_get_partner_profile_from_document_data() {
    let service = setup_service();
    let profile = credential(
        PROFILE_TYPE,
        CredentialPayload::DocumentData(json!({ "y": 2 })),
    );
    let profile_id = profile.id;
    let partner = partner_with_credentials(vec![profile]);

    assert_eq!(
        service.get_partner_profile(Some(&partner)),
        Some(&json!({ "y": 2 }))
    );

    let route = service.get_partner_profile_route(Some(&partner)).unwrap();
    assert_eq!(route.name, ProfileRouteName::Document);
    assert_eq!(route.params.id, profile_id);
}

#[test]
fn test_get_partner_profile_without_payload() {
    let service = setup_service();
    let partner =
        partner_with_credentials(vec![credential(PROFILE_TYPE, CredentialPayload::None)]);

    assert_eq!(service.get_partner_profile(Some(&partner)), None);
    assert_eq!(service.get_partner_profile_route(Some(&partner)), None);
}

#[test]
fn test_get_partner_profile_first_profile_wins() {
    let service = setup_service();
    let first = credential(
        PROFILE_TYPE,
        CredentialPayload::DocumentData(profile_data()),
    );
    let first_id = first.id;
    let partner = partner_with_credentials(vec![
        credential(
            INDY_TYPE,
            CredentialPayload::CredentialData(json!({ "name": "indy" })),
        ),
        first,
        credential(
            PROFILE_TYPE,
            CredentialPayload::CredentialData(json!({ "legalName": "Other" })),
        ),
    ]);

    assert_eq!(
        service.get_partner_profile(Some(&partner)),
        Some(&profile_data())
    );

    let route = service.get_partner_profile_route(Some(&partner)).unwrap();
    assert_eq!(route.name, ProfileRouteName::Document);
    assert_eq!(route.params.id, first_id);
}

#[test]
fn test_get_partner_profile_ignores_other_types() {
    let service = setup_service();
    let partner = partner_with_credentials(vec![credential(
        INDY_TYPE,
        CredentialPayload::CredentialData(profile_data()),
    )]);

    assert_eq!(service.get_partner_profile(Some(&partner)), None);
    assert_eq!(service.get_partner_profile_route(Some(&partner)), None);
}

#[test]
fn test_profile_route_serialization() {
    let service = setup_service();
    let profile = credential(
        PROFILE_TYPE,
        CredentialPayload::CredentialData(profile_data()),
    );
    let profile_id = profile.id;
    let partner = partner_with_credentials(vec![profile]);

    let route = service.get_partner_profile_route(Some(&partner)).unwrap();

    assert_eq!(
        serde_json::to_value(route).unwrap(),
        json!({ "name": "Credential", "params": { "id": profile_id.to_string() } })
    );
}

#[rstest]
#[case(Some(true), "connection_request_received")]
#[case(Some(false), "connection_request_sent")]
#[case(None, "connection_request_sent")]
fn test_get_partner_state_request(#[case] incoming: Option<bool>, #[case] expected: &str) {
    let service = setup_service();

    let state = service
        .get_partner_state(&partner_in_state("request", incoming))
        .unwrap();

    assert_eq!(state.value, expected);
}

#[rstest]
#[case("active")]
#[case("response")]
#[case("completed")]
#[case("ping_response")]
fn test_get_partner_state_active_or_response(#[case] raw_state: &str) {
    let service = setup_service();

    let state = service.get_partner_state(&partner_in_state(raw_state, None));

    assert_eq!(state, Some(descriptor("active_or_response", "Active")));
}

#[test]
fn test_get_partner_state_without_state() {
    let service = setup_service();

    let state = service.get_partner_state(&dummy_partner());

    assert_eq!(state, Some(descriptor("", "")));
}

#[rstest]
#[case("abandoned", descriptor("abandoned", "Abandoned"))]
#[case("ping_no_response", descriptor("ping_no_response", "Ping No Response"))]
#[case("invitation", descriptor("invitation", "Invitation"))]
fn test_get_partner_state_table_lookup(
    #[case] raw_state: &str,
    #[case] expected: PartnerStateDescriptor,
) {
    let service = setup_service();

    let state = service.get_partner_state(&partner_in_state(raw_state, None));

    assert_eq!(state, Some(expected));
}

#[test]
fn test_get_partner_state_unknown() {
    let service = setup_service();

    let state = service.get_partner_state(&partner_in_state("start", None));

    assert_eq!(state, None);
}

#[rstest]
#[case("request", StateColor::Yellow)]
#[case("abandoned", StateColor::Red)]
#[case("ping_no_response", StateColor::Red)]
#[case("active", StateColor::Green)]
#[case("response", StateColor::Green)]
#[case("completed", StateColor::Green)]
#[case("ping_response", StateColor::Green)]
#[case("invitation", StateColor::Grey)]
#[case("", StateColor::Grey)]
#[case("something-else", StateColor::Grey)]
fn test_get_partner_state_color_for_value(#[case] state: &str, #[case] expected: StateColor) {
    let service = setup_service();

    assert_eq!(service.get_partner_state_color(state), expected);
}

#[test]
fn test_get_partner_state_color_for_descriptor() {
    let config = generic_config();
    let service = PartnerPresentationService::new(Arc::new(config.clone()));
    let states = &config.partner_states;

    assert_eq!(
        service.get_partner_state_color(&states.active_or_response),
        StateColor::Green
    );
    assert_eq!(
        service.get_partner_state_color(&states.connection_request_sent),
        StateColor::Grey
    );
    assert_eq!(
        service.get_partner_state_color(&states.request),
        StateColor::Grey
    );
}

#[test]
fn test_get_partner_state_color_is_total() {
    let config = generic_config();
    let service = PartnerPresentationService::new(Arc::new(config.clone()));

    for descriptor in config.partner_states.iter() {
        let color = service.get_partner_state_color(&descriptor.value);
        assert!(["yellow", "red", "green", "grey"].contains(&color.as_ref()));
    }
}

#[test]
fn test_state_color_display() {
    assert_eq!(StateColor::Yellow.to_string(), "yellow");
    assert_eq!(
        serde_json::to_value(StateColor::Grey).unwrap(),
        json!("grey")
    );
}

#[test]
fn test_get_partner_presentation() {
    let service = setup_service();
    let partner = Partner {
        state: ConnectionState::Code("completed".to_owned()),
        ..partner_with_credentials(vec![credential(
            PROFILE_TYPE,
            CredentialPayload::CredentialData(profile_data()),
        )])
    };

    let presentation = service.get_partner_presentation(&partner);

    assert_eq!(presentation.id, partner.id);
    assert_eq!(presentation.profile, Some(profile_data()));
    assert_eq!(
        presentation.profile_route.map(|route| route.name),
        Some(ProfileRouteName::Credential)
    );
    assert_eq!(
        presentation.state,
        Some(descriptor("active_or_response", "Active"))
    );
    assert_eq!(presentation.state_color, StateColor::Green);
}

#[test]
fn test_get_partner_presentation_incoming_request() {
    let service = setup_service();

    let presentation = service.get_partner_presentation(&partner_in_state("request", Some(true)));

    assert_eq!(presentation.profile, None);
    assert_eq!(presentation.profile_route, None);
    assert_eq!(
        presentation.state.map(|state| state.value),
        Some("connection_request_received".to_owned())
    );
    assert_eq!(presentation.state_color, StateColor::Yellow);
}

#[test]
fn test_partner_dto_payload_presence() {
    let service = setup_service();
    let dto: PartnerDTO = serde_json::from_value(json!({
        "state": "active",
        "credential": [
            { "type": PROFILE_TYPE, "credentialData": null },
            { "type": PROFILE_TYPE, "documentData": { "legalName": "Ignored" } }
        ]
    }))
    .unwrap();
    let partner: Partner = dto.into();

    assert_eq!(service.get_partner_profile(Some(&partner)), Some(&Value::Null));
    assert_eq!(
        service
            .get_partner_profile_route(Some(&partner))
            .map(|route| route.name),
        Some(ProfileRouteName::Credential)
    );
}

#[test]
fn test_partner_dto_credential_data_wins() {
    let dto: PartnerDTO = serde_json::from_value(json!({
        "credential": [{
            "type": PROFILE_TYPE,
            "documentData": { "y": 2 },
            "credentialData": { "x": 1 }
        }]
    }))
    .unwrap();
    let partner: Partner = dto.into();

    let credentials = partner.credential.unwrap();
    assert_eq!(
        credentials[0].payload,
        CredentialPayload::CredentialData(json!({ "x": 1 }))
    );
}

#[test]
fn test_partner_dto_without_credential_key() {
    let service = setup_service();
    let dto: PartnerDTO = serde_json::from_value(json!({ "alias": "Acme" })).unwrap();
    let partner: Partner = dto.into();

    assert_eq!(partner.credential, None);
    assert_eq!(service.get_partner_profile(Some(&partner)), None);
    assert_eq!(
        service.get_partner_state(&partner),
        Some(PartnerStateDescriptor::empty())
    );
}

#[test]
fn test_get_partner_state_null() {
    let service = setup_service();
    let partner = Partner {
        state: ConnectionState::Null,
        ..dummy_partner()
    };

    assert_eq!(service.get_partner_state(&partner), None);
    assert_eq!(
        service.get_partner_presentation(&partner).state_color,
        StateColor::Grey
    );
}

#[test]
fn test_partner_dto_null_state() {
    let service = setup_service();
    let dto: PartnerDTO = serde_json::from_value(json!({ "state": null })).unwrap();
    let partner: Partner = dto.into();

    assert_eq!(partner.state, ConnectionState::Null);
    assert_eq!(service.get_partner_state(&partner), None);
}

#[test]
fn test_partner_dto_state_code() {
    let dto: PartnerDTO = serde_json::from_value(json!({ "state": "active" })).unwrap();
    let partner: Partner = dto.into();

    assert_eq!(partner.state, ConnectionState::Code("active".to_owned()));
    assert_eq!(partner.state.code(), Some("active"));
}

#[test]
fn test_get_partner_state_synthetic_value_is_table_lookup() {
    let service = setup_service();

    let state = service.get_partner_state(&partner_in_state("connection_request_sent", None));

    assert_eq!(
        state,
        Some(descriptor("connection_request_sent", "Connection request sent"))
    );
}
