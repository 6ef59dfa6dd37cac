//! Focusable rows of each wizard step

use crate::form::catalog::{Service, SERVICE_CATALOG};
use crate::form::fields::{
    FieldSpec, FluidField, PriceField, StaffField, ABOUT_GARAGE_FIELDS, GARAGE_INFO_FIELDS,
    PAYMENT_FIELDS, PICK_DROP_FIELDS, PICK_DROP_TOGGLE,
};
use crate::form::{EntryId, FieldRef, FormState};
use crate::wizard::WizardStep;

/// One focusable line of the active step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Field(FieldRef),
    AddFluid,
    RemoveFluid(EntryId),
    AddStaff,
    RemoveStaff(EntryId),
    Service {
        category: &'static str,
        service: &'static Service,
    },
}

impl Row {
    pub fn field(&self) -> Option<FieldRef> {
        match self {
            Row::Field(field) => Some(*field),
            _ => None,
        }
    }

    /// Buttons and checkboxes react to Enter/Space
    pub fn is_activatable(&self) -> bool {
        !matches!(self, Row::Field(_))
    }
}

/// Rows of `step` for the current form contents.
///
/// Recomputed after every change, so revealed fields and entry lists are
/// always in sync with the form state.
pub fn rows_for(step: WizardStep, form: &FormState) -> Vec<Row> {
    let statics = |fields: &'static [FieldSpec]| {
        fields.iter().map(|spec| Row::Field(FieldRef::Static(spec)))
    };

    match step {
        WizardStep::GarageInfo => statics(GARAGE_INFO_FIELDS).collect(),
        WizardStep::AboutGarage => statics(ABOUT_GARAGE_FIELDS).collect(),
        WizardStep::AvailableBrands => {
            let mut rows = vec![Row::AddFluid];
            for id in form.fluids.ids() {
                rows.push(Row::RemoveFluid(id));
                rows.extend(
                    FluidField::ALL
                        .iter()
                        .map(|f| Row::Field(FieldRef::Fluid(id, *f))),
                );
            }
            rows
        }
        WizardStep::StaffDetails => {
            let mut rows = Vec::new();
            for id in form.staff.ids() {
                rows.push(Row::RemoveStaff(id));
                rows.extend(
                    StaffField::ALL
                        .iter()
                        .map(|f| Row::Field(FieldRef::Staff(id, *f))),
                );
            }
            rows.push(Row::AddStaff);
            rows
        }
        WizardStep::PickAndDrop => {
            let mut rows = vec![Row::Field(FieldRef::Static(&PICK_DROP_TOGGLE))];
            if form.pick_drop_available() {
                rows.extend(statics(PICK_DROP_FIELDS));
            }
            rows
        }
        WizardStep::PaymentAndServices => {
            let mut rows: Vec<Row> = statics(PAYMENT_FIELDS).collect();
            for category in SERVICE_CATALOG {
                for service in category.services {
                    rows.push(Row::Service {
                        category: category.name,
                        service,
                    });
                    if form.services.is_selected(service.id) {
                        rows.extend(
                            PriceField::ALL
                                .iter()
                                .map(|f| Row::Field(FieldRef::Service(service, *f))),
                        );
                    }
                }
            }
            rows
        }
    }
}
