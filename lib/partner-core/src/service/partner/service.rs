use serde_json::Value;

use super::PartnerPresentationService;
use super::dto::{
    PartnerPresentationDTO, PartnerProfileRoute, PartnerStateRef, ProfileRouteName,
    ProfileRouteParams, StateColor,
};
use crate::model::partner::{
    ConnectionState, CredentialPayload, Partner, PartnerCredential, PartnerStateDescriptor,
};

impl PartnerPresentationService {
    /// Returns the profile data of the partner, if it published one
    ///
    /// Credential data takes precedence over document data.
    pub fn get_partner_profile<'a>(&self, partner: Option<&'a Partner>) -> Option<&'a Value> {
        match &self.find_profile_credential(partner)?.payload {
            CredentialPayload::CredentialData(data) | CredentialPayload::DocumentData(data) => {
                Some(data)
            }
            CredentialPayload::None => None,
        }
    }

    /// Returns the view that displays the partner's profile
    pub fn get_partner_profile_route(
        &self,
        partner: Option<&Partner>,
    ) -> Option<PartnerProfileRoute> {
        let profile = self.find_profile_credential(partner)?;

        let name = match profile.payload {
            CredentialPayload::CredentialData(_) => ProfileRouteName::Credential,
            CredentialPayload::DocumentData(_) => ProfileRouteName::Document,
            CredentialPayload::None => return None,
        };

        Some(PartnerProfileRoute {
            name,
            params: ProfileRouteParams { id: profile.id },
        })
    }

    /// Maps the raw connection state onto the state shown to the user
    ///
    /// A partner without state yields the empty descriptor. A `null` or unknown state yields `None`.
    pub fn get_partner_state(&self, partner: &Partner) -> Option<PartnerStateDescriptor> {
        let states = &self.config.partner_states;

        let state = match &partner.state {
            ConnectionState::Missing => return Some(PartnerStateDescriptor::empty()),
            ConnectionState::Null => return None,
            ConnectionState::Code(code) => code.as_str(),
        };

        if state == states.request.value {
            let descriptor = if partner.incoming == Some(true) {
                &states.connection_request_received
            } else {
                &states.connection_request_sent
            };
            return Some(descriptor.to_owned());
        }

        if states.is_active_or_response_value(state) {
            return Some(states.active_or_response.to_owned());
        }

        let descriptor = states.iter().find(|descriptor| descriptor.value == state);
        if descriptor.is_none() {
            tracing::debug!(%state, "Unknown partner state");
        }

        descriptor.cloned()
    }

    /// Badge color for a raw state value or the collapsed active descriptor
    ///
    /// Descriptors other than `ACTIVE_OR_RESPONSE` are not recognized and map to grey.
    pub fn get_partner_state_color<'a>(&self, state: impl Into<PartnerStateRef<'a>>) -> StateColor {
        let states = &self.config.partner_states;

        match state.into() {
            PartnerStateRef::Descriptor(descriptor) if *descriptor == states.active_or_response => {
                StateColor::Green
            }
            PartnerStateRef::Descriptor(_) => StateColor::Grey,
            PartnerStateRef::Value(value) if value == states.request.value => StateColor::Yellow,
            PartnerStateRef::Value(value)
                if value == states.abandoned.value || value == states.ping_no_response.value =>
            {
                StateColor::Red
            }
            PartnerStateRef::Value(value) if states.is_active_or_response_value(value) => {
                StateColor::Green
            }
            PartnerStateRef::Value(_) => StateColor::Grey,
        }
    }

    /// Everything a partner list row needs
    pub fn get_partner_presentation(&self, partner: &Partner) -> PartnerPresentationDTO {
        let state = self.get_partner_state(partner);

        let state_color = match &state {
            Some(descriptor) if *descriptor == self.config.partner_states.active_or_response => {
                self.get_partner_state_color(descriptor)
            }
            _ => self.get_partner_state_color(partner.state.code().unwrap_or_default()),
        };

        PartnerPresentationDTO {
            id: partner.id,
            profile: self.get_partner_profile(Some(partner)).cloned(),
            profile_route: self.get_partner_profile_route(Some(partner)),
            state,
            state_color,
        }
    }

    // first match wins, later profile credentials are ignored
    fn find_profile_credential<'a>(
        &self,
        partner: Option<&'a Partner>,
    ) -> Option<&'a PartnerCredential> {
        let profile_type = &self.config.credential_types.profile.r#type;

        partner?
            .credential
            .as_ref()?
            .iter()
            .find(|credential| credential.r#type == *profile_type)
    }
}
