//! Submission payload assembled from the form state

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::catalog::SERVICE_CATALOG;
use super::fields::{
    FieldSpec, ABOUT_GARAGE_FIELDS, GARAGE_INFO_FIELDS, PAYMENT_FIELDS, PICK_DROP_FIELDS,
};
use super::state::{FluidEntry, FormState, ServicePricing, StaffEntry};

/// Pick & drop section; details are omitted when the service is unavailable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickDropDetails {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_or_paid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charges: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_area: Option<String>,
}

/// A selected service with its pricing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOffer {
    pub id: String,
    pub category: String,
    pub label: String,
    #[serde(flatten)]
    pub pricing: ServicePricing,
}

/// Everything the backend needs to register a garage partner
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationPayload {
    pub garage_info: BTreeMap<String, String>,
    pub about: BTreeMap<String, String>,
    pub fluids: Vec<FluidEntry>,
    pub staff: Vec<StaffEntry>,
    pub pick_drop: PickDropDetails,
    pub payment: BTreeMap<String, String>,
    pub services: Vec<ServiceOffer>,
    pub assembled_at: DateTime<Utc>,
}

fn section(state: &FormState, fields: &[FieldSpec]) -> BTreeMap<String, String> {
    fields
        .iter()
        .map(|f| (f.id.to_string(), state.static_value(f.id).to_string()))
        .collect()
}

impl RegistrationPayload {
    pub fn from_state(state: &FormState) -> Self {
        let pick_drop = if state.pick_drop_available() {
            let [free_or_paid, charges, service_area] =
                [0, 1, 2].map(|i| Some(state.static_value(PICK_DROP_FIELDS[i].id).to_string()));
            PickDropDetails {
                available: true,
                free_or_paid,
                charges,
                service_area,
            }
        } else {
            PickDropDetails {
                available: false,
                free_or_paid: None,
                charges: None,
                service_area: None,
            }
        };

        let mut services = Vec::new();
        for category in SERVICE_CATALOG {
            for service in category.services {
                if !state.services.is_selected(service.id) {
                    continue;
                }
                services.push(ServiceOffer {
                    id: service.id.to_string(),
                    category: category.name.to_string(),
                    label: service.label.to_string(),
                    pricing: state
                        .services
                        .pricing(service.id)
                        .cloned()
                        .unwrap_or_default(),
                });
            }
        }

        Self {
            garage_info: section(state, GARAGE_INFO_FIELDS),
            about: section(state, ABOUT_GARAGE_FIELDS),
            fluids: state.fluids.iter().map(|(_, e)| e.clone()).collect(),
            staff: state.staff.iter().map(|(_, e)| e.clone()).collect(),
            pick_drop,
            payment: section(state, PAYMENT_FIELDS),
            services,
            assembled_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::catalog::find_service;
    use crate::form::fields::{find_static_field, FluidField, PriceField};
    use crate::form::state::FieldRef;
    use crate::form::EntryId;

    #[test]
    fn test_payload_carries_static_sections() {
        let mut state = FormState::new();
        state.set(
            &FieldRef::Static(find_static_field("garageName").unwrap()),
            "Speedy Motors",
        );
        state.set(
            &FieldRef::Static(find_static_field("upiId").unwrap()),
            "speedy@upi",
        );

        let payload = RegistrationPayload::from_state(&state);
        assert_eq!(payload.garage_info["garageName"], "Speedy Motors");
        assert_eq!(payload.payment["upiId"], "speedy@upi");
        assert_eq!(payload.about.len(), ABOUT_GARAGE_FIELDS.len());
    }

    #[test]
    fn test_payload_omits_hidden_pick_drop_details() {
        let mut state = FormState::new();
        state.set_pick_drop_available(true);
        state.set(&FieldRef::Static(&PICK_DROP_FIELDS[0]), "Paid");
        state.set_pick_drop_available(false);

        let payload = RegistrationPayload::from_state(&state);
        assert!(!payload.pick_drop.available);
        assert!(payload.pick_drop.free_or_paid.is_none());

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["pick_drop"].get("free_or_paid").is_none());
    }

    #[test]
    fn test_payload_includes_only_selected_services() {
        let mut state = FormState::new();
        let service = find_service("tyre-rotation").unwrap();
        state.services.toggle(service.id);
        state.set(&FieldRef::Service(service, PriceField::Suv), "800");
        state.services.toggle("top-wash");
        state.services.toggle("top-wash");

        let payload = RegistrationPayload::from_state(&state);
        assert_eq!(payload.services.len(), 1);
        assert_eq!(payload.services[0].category, "Tyre Services");
        assert_eq!(payload.services[0].pricing.suv, "800");
    }

    #[test]
    fn test_payload_keeps_entry_order() {
        let mut state = FormState::new();
        let second = state.fluids.add();
        state.set(&FieldRef::Fluid(EntryId(1), FluidField::Brand), "Castrol");
        state.set(&FieldRef::Fluid(second, FluidField::Brand), "Shell");

        let payload = RegistrationPayload::from_state(&state);
        let brands: Vec<_> = payload.fluids.iter().map(|f| f.brand.as_str()).collect();
        assert_eq!(brands, vec!["Castrol", "Shell"]);
    }
}
