//! Canonical in-memory record of everything entered into the wizard

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::catalog::{all_services, find_service, Service};
use super::entries::{EntryId, EntryList};
use super::fields::{
    static_fields, FieldSpec, FluidField, PriceField, StaffField, PICK_DROP_TOGGLE,
};

/// One fluid/brand offered by the garage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FluidEntry {
    pub fluid_type: String,
    pub brand: String,
    pub grade: String,
    pub rate_per_litre: String,
    pub used_for: String,
}

impl FluidEntry {
    pub fn field(&self, field: FluidField) -> &str {
        match field {
            FluidField::FluidType => &self.fluid_type,
            FluidField::Brand => &self.brand,
            FluidField::Grade => &self.grade,
            FluidField::Rate => &self.rate_per_litre,
            FluidField::UsedFor => &self.used_for,
        }
    }

    pub fn field_mut(&mut self, field: FluidField) -> &mut String {
        match field {
            FluidField::FluidType => &mut self.fluid_type,
            FluidField::Brand => &mut self.brand,
            FluidField::Grade => &mut self.grade,
            FluidField::Rate => &mut self.rate_per_litre,
            FluidField::UsedFor => &mut self.used_for,
        }
    }
}

/// One staff member on the roster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StaffEntry {
    pub name: String,
    pub phone: String,
    pub specialist: String,
    pub photo_link: String,
    pub notes: String,
}

impl StaffEntry {
    pub fn field(&self, field: StaffField) -> &str {
        match field {
            StaffField::Name => &self.name,
            StaffField::Phone => &self.phone,
            StaffField::Specialist => &self.specialist,
            StaffField::PhotoLink => &self.photo_link,
            StaffField::Notes => &self.notes,
        }
    }

    pub fn field_mut(&mut self, field: StaffField) -> &mut String {
        match field {
            StaffField::Name => &mut self.name,
            StaffField::Phone => &mut self.phone,
            StaffField::Specialist => &mut self.specialist,
            StaffField::PhotoLink => &mut self.photo_link,
            StaffField::Notes => &mut self.notes,
        }
    }
}

/// Prices and duration entered for a selected service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServicePricing {
    pub hatchback: String,
    pub sedan: String,
    pub suv: String,
    pub duration_minutes: String,
}

impl ServicePricing {
    pub fn field(&self, field: PriceField) -> &str {
        match field {
            PriceField::Hatchback => &self.hatchback,
            PriceField::Sedan => &self.sedan,
            PriceField::Suv => &self.suv,
            PriceField::Duration => &self.duration_minutes,
        }
    }

    pub fn field_mut(&mut self, field: PriceField) -> &mut String {
        match field {
            PriceField::Hatchback => &mut self.hatchback,
            PriceField::Sedan => &mut self.sedan,
            PriceField::Suv => &mut self.suv,
            PriceField::Duration => &mut self.duration_minutes,
        }
    }
}

/// Selected flag and pricing per catalog service.
///
/// A service missing from `selected` counts as not selected. Pricing is kept
/// when a service is deselected, so toggling back on restores it.
#[derive(Debug, Clone, Default)]
pub struct ServiceToggleMap {
    selected: HashMap<&'static str, bool>,
    pricing: HashMap<&'static str, ServicePricing>,
}

impl ServiceToggleMap {
    /// Flip the selection of `id`, returning the new state.
    /// Ids outside the catalog are ignored and report `false`.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(service) = find_service(id) else {
            tracing::warn!(service = id, "Ignoring toggle for unknown service");
            return false;
        };
        let flag = self.selected.entry(service.id).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.get(id).copied().unwrap_or(false)
    }

    pub fn pricing(&self, id: &str) -> Option<&ServicePricing> {
        self.pricing.get(id)
    }

    pub fn pricing_mut(&mut self, service: &'static Service) -> &mut ServicePricing {
        self.pricing.entry(service.id).or_default()
    }

    /// Selected services in catalog order
    pub fn selected_services(&self) -> Vec<&'static Service> {
        all_services().filter(|s| self.is_selected(s.id)).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.values().filter(|v| **v).count()
    }
}

/// Address of one editable value inside [`FormState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef {
    Static(&'static FieldSpec),
    Fluid(EntryId, FluidField),
    Staff(EntryId, StaffField),
    Service(&'static Service, PriceField),
}

impl FieldRef {
    pub fn spec(&self) -> &'static FieldSpec {
        match self {
            FieldRef::Static(spec) => *spec,
            FieldRef::Fluid(_, field) => field.spec(),
            FieldRef::Staff(_, field) => field.spec(),
            FieldRef::Service(_, field) => field.spec(),
        }
    }
}

/// All values entered during one registration session
#[derive(Debug, Clone)]
pub struct FormState {
    values: BTreeMap<&'static str, String>,
    pub fluids: EntryList<FluidEntry>,
    pub staff: EntryList<StaffEntry>,
    pub services: ServiceToggleMap,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Fresh session: one blank fluid, one blank staff member, pick & drop off
    pub fn new() -> Self {
        let mut values: BTreeMap<&'static str, String> =
            static_fields().map(|f| (f.id, String::new())).collect();
        values.insert(PICK_DROP_TOGGLE.id, "no".to_string());

        Self {
            values,
            fluids: EntryList::with_one(),
            staff: EntryList::with_one(),
            services: ServiceToggleMap::default(),
        }
    }

    /// Current value of a field, `None` if the entry it points at is gone
    pub fn get(&self, field: &FieldRef) -> Option<&str> {
        match field {
            FieldRef::Static(spec) => self.values.get(spec.id).map(String::as_str),
            FieldRef::Fluid(id, f) => self.fluids.get(*id).map(|e| e.field(*f)),
            FieldRef::Staff(id, f) => self.staff.get(*id).map(|e| e.field(*f)),
            FieldRef::Service(service, f) => Some(
                self.services
                    .pricing(service.id)
                    .map(|p| p.field(*f))
                    .unwrap_or(""),
            ),
        }
    }

    pub fn value_mut(&mut self, field: &FieldRef) -> Option<&mut String> {
        match field {
            FieldRef::Static(spec) => Some(self.values.entry(spec.id).or_default()),
            FieldRef::Fluid(id, f) => self.fluids.get_mut(*id).map(|e| e.field_mut(*f)),
            FieldRef::Staff(id, f) => self.staff.get_mut(*id).map(|e| e.field_mut(*f)),
            FieldRef::Service(service, f) => {
                Some(self.services.pricing_mut(*service).field_mut(*f))
            }
        }
    }

    /// Overwrite a field. Returns false when the target entry no longer exists.
    pub fn set(&mut self, field: &FieldRef, value: impl Into<String>) -> bool {
        match self.value_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Value of a static field by id, empty when unknown
    pub fn static_value(&self, id: &str) -> &str {
        self.values.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn pick_drop_available(&self) -> bool {
        self.static_value(PICK_DROP_TOGGLE.id) == "yes"
    }

    pub fn set_pick_drop_available(&mut self, available: bool) {
        let value = if available { "yes" } else { "no" };
        self.values.insert(PICK_DROP_TOGGLE.id, value.to_string());
    }
}
